//! Environmental site features recognized by the checklist, with their
//! form-tag vocabulary and fixed problem/remedy texts.

use serde::{Deserialize, Serialize};

/// A recognized environmental feature near the property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteFeature {
    Hospital,
    /// Temple and church tags fold into one feature.
    PlaceOfWorship,
    School,
    RoadStraightAtHouse,
    /// T-junction and crossroads tags fold into one feature.
    Junction,
    SlopedRoad,
    UtilityPole,
}

impl SiteFeature {
    /// Returns all features in the fixed check order. Report output
    /// follows this order, not input order.
    pub fn all() -> &'static [SiteFeature] {
        &[
            SiteFeature::Hospital,
            SiteFeature::PlaceOfWorship,
            SiteFeature::School,
            SiteFeature::RoadStraightAtHouse,
            SiteFeature::Junction,
            SiteFeature::SlopedRoad,
            SiteFeature::UtilityPole,
        ]
    }

    /// Resolves a raw form tag. Synonym tags fold into one feature;
    /// unrecognized tags yield `None` and are ignored by the checker.
    pub fn from_tag(tag: &str) -> Option<SiteFeature> {
        match tag {
            "benh-vien" => Some(SiteFeature::Hospital),
            "chua" | "nha-tho" => Some(SiteFeature::PlaceOfWorship),
            "truong-hoc" => Some(SiteFeature::School),
            "duong-dam" => Some(SiteFeature::RoadStraightAtHouse),
            "nga-ba" | "nga-tu" => Some(SiteFeature::Junction),
            "duong-doc" => Some(SiteFeature::SlopedRoad),
            "cot-dien" => Some(SiteFeature::UtilityPole),
            _ => None,
        }
    }

    /// Returns the fixed problem text.
    pub fn problem(&self) -> &'static str {
        match self {
            SiteFeature::Hospital => {
                "Trước mặt Bệnh viện: âm khí nặng, ảnh hưởng trường khí & sức khỏe."
            }
            SiteFeature::PlaceOfWorship => {
                "Đối diện Chùa/Nhà thờ: khí tĩnh/âm mạnh, dễ ảnh hưởng tài khí."
            }
            SiteFeature::School => {
                "Đối diện Trường học: ồn ào, khí động mạnh, ảnh hưởng nghỉ ngơi."
            }
            SiteFeature::RoadStraightAtHouse => {
                "Đường đâm thẳng vào nhà: sát khí trực xung, hao tài."
            }
            SiteFeature::Junction => "Nhà tại Ngã ba/Ngã tư: khí loạn, bất ổn, khó tụ tài.",
            SiteFeature::SlopedRoad => "Đường dốc trước nhà: khí trượt, khó tụ.",
            SiteFeature::UtilityPole => "Cột điện gần cổng/nhà: sát khí, từ trường xấu.",
        }
    }

    /// Returns the fixed remediation text.
    pub fn solution(&self) -> &'static str {
        match self {
            SiteFeature::Hospital => {
                "Tăng cây xanh, rèm dày, chiếu sáng tốt; cân nhắc Bát Quái lồi ngoài cổng; đặt tượng Di Lặc tăng dương khí."
            }
            SiteFeature::PlaceOfWorship => {
                "Đặt Quan Công gần cửa, chuông gió kim loại, cây Kim Ngân/Trầu bà; hạn chế cửa nhìn thẳng cơ sở tâm linh."
            }
            SiteFeature::School => {
                "Hàng rào/vách ngăn/rèm cách âm; bố trí phòng ngủ lùi sâu; tăng cây xanh."
            }
            SiteFeature::RoadStraightAtHouse => {
                "Bình phong/tiểu cảnh trước cửa, cây to, bậc tam cấp “gãy dòng”; cân nhắc Bát Quái lồi."
            }
            SiteFeature::Junction => {
                "Cổng kín/hàng rào; hồ cá/đá/đèn cân bằng; sảnh/hiên che chắn; cân nhắc cửa phụ."
            }
            SiteFeature::SlopedRoad => {
                "Bậc thềm, ốp đá nhám, bồn cây bậc cấp; ưu tiên cửa lệch/bình phong."
            }
            SiteFeature::UtilityPole => {
                "Lùi cổng/cửa; cây cao che chắn; đá hộ mệnh (thạch anh); tránh kê giường sát tường phía cột."
            }
        }
    }
}

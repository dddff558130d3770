//! Static per-cung direction tables: for each of the 8 life-direction
//! groups, a bijection from the 8 compass directions to the 8 outcome
//! categories. Data, not branching logic.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::DirectionRating;
use crate::domain::foundation::CompassDirection;
use crate::domain::menh::Cung;

/// One cung's table, in fixed insertion order (the 4 favorable entries
/// first, then the 4 unfavorable ones, as in the reference charts).
pub type DirectionTable = [(CompassDirection, DirectionRating); 8];

use crate::domain::foundation::CompassDirection::{
    East, North, NorthEast, NorthWest, South, SouthEast, SouthWest, West,
};
use self::DirectionRating::{DienNien, HoaHai, LucSat, NguQuy, PhucVi, SinhKhi, ThienY, TuyetMenh};

static TABLES: Lazy<HashMap<Cung, DirectionTable>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert(
        Cung::Kan,
        [
            (SouthEast, SinhKhi),
            (East, ThienY),
            (South, DienNien),
            (North, PhucVi),
            (SouthWest, TuyetMenh),
            (NorthEast, NguQuy),
            (NorthWest, LucSat),
            (West, HoaHai),
        ],
    );
    map.insert(
        Cung::Li,
        [
            (East, SinhKhi),
            (SouthEast, ThienY),
            (North, DienNien),
            (South, PhucVi),
            (NorthWest, TuyetMenh),
            (West, NguQuy),
            (SouthWest, LucSat),
            (NorthEast, HoaHai),
        ],
    );
    map.insert(
        Cung::Zhen,
        [
            (South, SinhKhi),
            (North, ThienY),
            (SouthEast, DienNien),
            (East, PhucVi),
            (West, TuyetMenh),
            (NorthWest, NguQuy),
            (NorthEast, LucSat),
            (SouthWest, HoaHai),
        ],
    );
    map.insert(
        Cung::Xun,
        [
            (North, SinhKhi),
            (South, ThienY),
            (East, DienNien),
            (SouthEast, PhucVi),
            (NorthEast, TuyetMenh),
            (SouthWest, NguQuy),
            (West, LucSat),
            (NorthWest, HoaHai),
        ],
    );
    map.insert(
        Cung::Qian,
        [
            (West, SinhKhi),
            (NorthEast, ThienY),
            (SouthWest, DienNien),
            (NorthWest, PhucVi),
            (South, TuyetMenh),
            (East, NguQuy),
            (North, LucSat),
            (SouthEast, HoaHai),
        ],
    );
    map.insert(
        Cung::Kun,
        [
            (NorthEast, SinhKhi),
            (West, ThienY),
            (NorthWest, DienNien),
            (SouthWest, PhucVi),
            (North, TuyetMenh),
            (SouthEast, NguQuy),
            (South, LucSat),
            (East, HoaHai),
        ],
    );
    map.insert(
        Cung::Gen,
        [
            (SouthWest, SinhKhi),
            (NorthWest, ThienY),
            (West, DienNien),
            (NorthEast, PhucVi),
            (SouthEast, TuyetMenh),
            (North, NguQuy),
            (East, LucSat),
            (South, HoaHai),
        ],
    );
    map.insert(
        Cung::Dui,
        [
            (NorthWest, SinhKhi),
            (SouthWest, ThienY),
            (NorthEast, DienNien),
            (West, PhucVi),
            (East, TuyetMenh),
            (South, NguQuy),
            (SouthEast, LucSat),
            (North, HoaHai),
        ],
    );
    map
});

/// Returns the full 8-direction table for a cung.
pub fn table_for(cung: Cung) -> &'static DirectionTable {
    TABLES
        .get(&cung)
        .expect("every Cung has a direction table")
}

/// Looks up the outcome at one direction of a cung's table.
pub fn rating_for(cung: Cung, direction: CompassDirection) -> DirectionRating {
    table_for(cung)
        .iter()
        .find(|(d, _)| *d == direction)
        .map(|(_, r)| *r)
        .expect("direction tables cover all 8 directions")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn every_cung_has_a_table() {
        for cung in Cung::all() {
            assert_eq!(table_for(*cung).len(), 8);
        }
    }

    #[test]
    fn every_table_is_a_bijection_with_four_four_split() {
        for cung in Cung::all() {
            let table = table_for(*cung);

            let mut directions: Vec<_> = table.iter().map(|(d, _)| *d).collect();
            directions.sort_by_key(|d| d.label());
            directions.dedup();
            assert_eq!(directions.len(), 8, "{cung:?} repeats a direction");

            let mut ratings: Vec<_> = table.iter().map(|(_, r)| *r).collect();
            ratings.sort_by_key(|r| r.label());
            ratings.dedup();
            assert_eq!(ratings.len(), 8, "{cung:?} repeats a rating");

            let favorable = table.iter().filter(|(_, r)| r.is_favorable()).count();
            assert_eq!(favorable, 4, "{cung:?} must have 4 favorable entries");
        }
    }

    #[test]
    fn kan_spot_checks_match_reference_chart() {
        assert_eq!(
            rating_for(Cung::Kan, CompassDirection::SouthEast),
            DirectionRating::SinhKhi
        );
        assert_eq!(
            rating_for(Cung::Kan, CompassDirection::SouthWest),
            DirectionRating::TuyetMenh
        );
    }

    #[test]
    fn qian_spot_checks_match_reference_chart() {
        assert_eq!(
            rating_for(Cung::Qian, CompassDirection::West),
            DirectionRating::SinhKhi
        );
        assert_eq!(
            rating_for(Cung::Qian, CompassDirection::NorthWest),
            DirectionRating::PhucVi
        );
        assert_eq!(
            rating_for(Cung::Qian, CompassDirection::South),
            DirectionRating::TuyetMenh
        );
    }

    #[test]
    fn phuc_vi_always_sits_on_the_cungs_own_direction() {
        for cung in Cung::all() {
            assert_eq!(
                rating_for(*cung, cung.direction()),
                DirectionRating::PhucVi,
                "{cung:?}"
            );
        }
    }

    proptest! {
        #[test]
        fn lookups_are_idempotent(cung_idx in 0usize..8, dir_idx in 0usize..8) {
            let cung = Cung::all()[cung_idx];
            let dir = CompassDirection::all()[dir_idx];
            prop_assert_eq!(rating_for(cung, dir), rating_for(cung, dir));
        }
    }
}

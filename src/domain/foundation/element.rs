//! Ngũ hành (Five Elements) with the khắc (destruction) relation and
//! the year/month element cycles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    /// Returns the Vietnamese label.
    pub fn label(&self) -> &'static str {
        match self {
            Element::Wood => "Mộc",
            Element::Fire => "Hỏa",
            Element::Earth => "Thổ",
            Element::Metal => "Kim",
            Element::Water => "Thủy",
        }
    }

    /// Returns the element this one destroys in the khắc cycle:
    /// Mộc → Thổ → Thủy → Hỏa → Kim → Mộc.
    pub fn destroys(&self) -> Element {
        match self {
            Element::Wood => Element::Earth,
            Element::Earth => Element::Water,
            Element::Water => Element::Fire,
            Element::Fire => Element::Metal,
            Element::Metal => Element::Wood,
        }
    }

    /// Returns true if the two elements stand in the destruction
    /// relation in either direction.
    pub fn conflicts_with(&self, other: Element) -> bool {
        self.destroys() == other || other.destroys() == *self
    }

    /// Derives the element of a calendar year from the 10-year stem
    /// cycle.
    pub fn of_year(year: i32) -> Element {
        let stem = ((year - 4) % 10 + 10) % 10;
        match stem {
            0 | 1 => Element::Wood,
            2 | 3 => Element::Fire,
            4 | 5 => Element::Earth,
            6 | 7 => Element::Metal,
            _ => Element::Water,
        }
    }

    /// Looks up the element of a lunar month (1-12). Months outside the
    /// table yield `None`, which downstream checks treat as "no month
    /// conflict".
    pub fn of_month(month: i32) -> Option<Element> {
        match month {
            1 | 6 | 11 => Some(Element::Water),
            2 | 7 | 12 => Some(Element::Fire),
            3 | 8 => Some(Element::Earth),
            4 | 9 => Some(Element::Metal),
            5 | 10 => Some(Element::Wood),
            _ => None,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

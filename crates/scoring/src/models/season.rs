use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AnglerId;

/// A scoring period. The club runs calendar-year seasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    pub year: i32,
}

impl Season {
    pub fn new(year: i32) -> Self {
        Self { year }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonStanding {
    pub angler: AnglerId,
    pub points: i64,
    pub fish_count: i64,
    pub net_weight: Decimal,
    pub tournaments: u32,
    pub place: u32,
}

/// Holders of a weight-based award. Ties share the award.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Award {
    pub anglers: Vec<AnglerId>,
    pub weight: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SeasonAwards {
    pub angler_of_the_year: Vec<AnglerId>,
    pub big_bass: Option<Award>,
    pub heaviest_stringer: Option<Award>,
}

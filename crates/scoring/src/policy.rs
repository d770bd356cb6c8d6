use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Club points policy.
///
/// Fish-class members score `first_place_points` for the first member group
/// and `group_step` less for every following member group. Zero-class and
/// buy-in members score relative to the lowest Fish-class member award, or
/// the fixed fallback when no member weighed fish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringPolicy {
    pub first_place_points: i32,
    pub group_step: i32,
    pub zero_class_offset: i32,
    pub buy_in_offset: i32,
    pub zero_class_fallback: i32,
    pub buy_in_fallback: i32,
    /// Deducted from gross weight for every dead fish brought to the scale.
    pub dead_fish_penalty: Decimal,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            first_place_points: 100,
            group_step: 1,
            zero_class_offset: 2,
            buy_in_offset: 4,
            zero_class_fallback: 98,
            buy_in_fallback: 96,
            dead_fish_penalty: Decimal::new(25, 2),
        }
    }
}

impl ScoringPolicy {
    /// Points for members who weighed no fish, given the lowest award handed
    /// to a Fish-class member.
    pub fn zero_class_points(&self, lowest_fish_points: Option<i32>) -> i32 {
        lowest_fish_points
            .map(|lowest| lowest - self.zero_class_offset)
            .unwrap_or(self.zero_class_fallback)
    }

    pub fn buy_in_points(&self, lowest_fish_points: Option<i32>) -> i32 {
        lowest_fish_points
            .map(|lowest| lowest - self.buy_in_offset)
            .unwrap_or(self.buy_in_fallback)
    }

    pub fn penalty_for(&self, dead_fish: i32) -> Decimal {
        self.dead_fish_penalty * Decimal::from(dead_fish)
    }
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::AnglerId;

/// One angler's weigh-in for one tournament, as recorded by the club.
///
/// `member` reflects club membership on the day of the tournament, not
/// present-day status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RawEntry {
    #[validate(custom(function = "validate_angler"))]
    pub angler: AnglerId,

    #[validate(custom(function = "validate_non_negative"))]
    pub gross_weight: Decimal,

    #[validate(range(min = 0, message = "fish count cannot be negative"))]
    pub fish_count: i32,

    #[validate(custom(function = "validate_non_negative"))]
    pub big_bass_weight: Decimal,

    #[validate(custom(function = "validate_non_negative"))]
    pub penalty: Decimal,

    pub member: bool,

    #[serde(default)]
    pub buy_in: bool,

    #[serde(default)]
    pub disqualified: bool,
}

fn validate_angler(angler: &AnglerId) -> Result<(), validator::ValidationError> {
    if angler.is_blank() {
        Err(validator::ValidationError::new("blank_angler"))
    } else {
        Ok(())
    }
}

fn validate_non_negative(value: &Decimal) -> Result<(), validator::ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        Err(validator::ValidationError::new("negative"))
    } else {
        Ok(())
    }
}

impl RawEntry {
    /// Buy-in and disqualified together are only accepted when nothing was
    /// weighed.
    pub fn has_conflicting_status(&self) -> bool {
        self.buy_in && self.disqualified && !self.gross_weight.is_zero()
    }
}

/// A validated entry with its net weight computed.
///
/// Only [`crate::normalize`] creates these, so the fields are read through
/// accessors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedEntry {
    angler: AnglerId,
    gross_weight: Decimal,
    fish_count: i32,
    big_bass_weight: Decimal,
    penalty: Decimal,
    member: bool,
    buy_in: bool,
    disqualified: bool,
    /// Gross weight minus penalty, kept signed for auditing.
    net_weight: Decimal,
}

impl NormalizedEntry {
    pub(crate) fn from_raw(raw: RawEntry) -> Self {
        let net_weight = raw.gross_weight - raw.penalty;
        Self {
            angler: raw.angler,
            gross_weight: raw.gross_weight,
            fish_count: raw.fish_count,
            big_bass_weight: raw.big_bass_weight,
            penalty: raw.penalty,
            member: raw.member,
            buy_in: raw.buy_in,
            disqualified: raw.disqualified,
            net_weight,
        }
    }

    pub fn angler(&self) -> &AnglerId {
        &self.angler
    }

    pub fn gross_weight(&self) -> Decimal {
        self.gross_weight
    }

    pub fn fish_count(&self) -> i32 {
        self.fish_count
    }

    pub fn big_bass_weight(&self) -> Decimal {
        self.big_bass_weight
    }

    pub fn penalty(&self) -> Decimal {
        self.penalty
    }

    pub fn is_member(&self) -> bool {
        self.member
    }

    pub fn is_buy_in(&self) -> bool {
        self.buy_in
    }

    pub fn is_disqualified(&self) -> bool {
        self.disqualified
    }

    /// Signed net weight; can be negative when penalties exceed the catch.
    pub fn net_weight(&self) -> Decimal {
        self.net_weight
    }

    /// Net weight floored at zero. All comparisons and sums use this.
    pub fn scored_weight(&self) -> Decimal {
        self.net_weight.max(Decimal::ZERO)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringClass {
    Fish,
    Zero,
    BuyIn,
}

impl ScoringClass {
    pub fn of(entry: &NormalizedEntry) -> Self {
        if entry.is_buy_in() {
            Self::BuyIn
        } else if entry.scored_weight() > Decimal::ZERO {
            Self::Fish
        } else {
            Self::Zero
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    #[serde(flatten)]
    pub entry: NormalizedEntry,
    pub class: ScoringClass,
    pub place: u32,
    pub points: i32,
}

impl RankedEntry {
    pub fn angler(&self) -> &AnglerId {
        self.entry.angler()
    }
}

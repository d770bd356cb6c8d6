use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AnglerId;

/// Two anglers fishing one boat. A pairing without a partner, or naming the
/// angler as their own partner, is a solo team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamPairing {
    pub angler: AnglerId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner: Option<AnglerId>,
}

impl TeamPairing {
    pub fn new(angler: impl Into<AnglerId>, partner: Option<AnglerId>) -> Self {
        Self {
            angler: angler.into(),
            partner,
        }
    }

    pub fn solo(angler: impl Into<AnglerId>) -> Self {
        Self::new(angler, None)
    }

    pub fn members(&self) -> impl Iterator<Item = &AnglerId> {
        let partner = self
            .partner
            .as_ref()
            .filter(|partner| **partner != self.angler);
        std::iter::once(&self.angler).chain(partner)
    }
}

/// Team placement is by combined weight only; teams earn no points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamResult {
    pub pairing: TeamPairing,
    pub net_weight: Decimal,
    pub place: u32,
}

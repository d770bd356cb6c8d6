use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::placement::tie_aware_places;
use crate::error::{Result, ScoringError};
use crate::models::{AnglerId, NormalizedEntry, TeamPairing, TeamResult};

/// How to treat a pairing that names an angler with no entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamMode {
    /// The missing angler contributes no weight.
    #[default]
    Lenient,
    Strict,
}

/// Builds the per-angler lookup used by [`aggregate_teams`].
pub fn index_by_angler(entries: &[NormalizedEntry]) -> Result<HashMap<AnglerId, NormalizedEntry>> {
    let mut index = HashMap::with_capacity(entries.len());
    for entry in entries {
        if index
            .insert(entry.angler().clone(), entry.clone())
            .is_some()
        {
            return Err(ScoringError::DuplicateAngler(entry.angler().clone()));
        }
    }
    Ok(index)
}

/// Sums each pairing's net weight and places the teams by it.
///
/// Disqualified members count as zero weight.
pub fn aggregate_teams(
    pairings: &[TeamPairing],
    entries_by_angler: &HashMap<AnglerId, NormalizedEntry>,
    mode: TeamMode,
) -> Result<Vec<TeamResult>> {
    ensure_single_slot(pairings)?;

    let mut totals = Vec::with_capacity(pairings.len());
    for pairing in pairings {
        let mut net_weight = Decimal::ZERO;
        for angler in pairing.members() {
            match entries_by_angler.get(angler) {
                Some(entry) if entry.is_disqualified() => {}
                Some(entry) => net_weight += entry.scored_weight(),
                None if mode == TeamMode::Strict => {
                    return Err(ScoringError::UnknownTeamMember(angler.clone()));
                }
                None => {
                    warn!(angler = %angler, "Team member has no entry; counting zero weight");
                }
            }
        }
        totals.push((pairing.clone(), net_weight));
    }

    totals.sort_by(|(a_pair, a_weight), (b_pair, b_weight)| {
        b_weight
            .cmp(a_weight)
            .then_with(|| a_pair.angler.cmp(&b_pair.angler))
    });

    let places = tie_aware_places(&totals, |(_, weight)| *weight);

    Ok(totals
        .into_iter()
        .zip(places)
        .map(|((pairing, net_weight), place)| TeamResult {
            pairing,
            net_weight,
            place,
        })
        .collect())
}

fn ensure_single_slot(pairings: &[TeamPairing]) -> Result<()> {
    let mut seen = HashSet::new();
    for angler in pairings.iter().flat_map(TeamPairing::members) {
        if !seen.insert(angler) {
            return Err(ScoringError::DuplicateTeamMember(angler.clone()));
        }
    }
    Ok(())
}

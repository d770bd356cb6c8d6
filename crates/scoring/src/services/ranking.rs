use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use super::placement::{tie_aware_places, tie_groups};
use crate::error::{Result, ScoringError};
use crate::models::{NormalizedEntry, RankedEntry, ScoringClass};
use crate::policy::ScoringPolicy;

/// Ranked standings of one tournament plus the entries that were
/// disqualified and left out of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TournamentRanking {
    pub ranked: Vec<RankedEntry>,
    pub disqualified: Vec<NormalizedEntry>,
}

/// Ranks one tournament's entries and awards points.
///
/// Output order is Fish class, then Zero class, then Buy-in class.
pub fn rank(entries: &[NormalizedEntry], policy: &ScoringPolicy) -> Result<Vec<RankedEntry>> {
    rank_tournament(entries, policy).map(|ranking| ranking.ranked)
}

pub fn rank_tournament(
    entries: &[NormalizedEntry],
    policy: &ScoringPolicy,
) -> Result<TournamentRanking> {
    ensure_unique_anglers(entries)?;

    let (mut disqualified, eligible): (Vec<_>, Vec<_>) = entries
        .iter()
        .cloned()
        .partition(NormalizedEntry::is_disqualified);

    let mut fish = Vec::new();
    let mut zero = Vec::new();
    let mut buy_in = Vec::new();
    for entry in eligible {
        match ScoringClass::of(&entry) {
            ScoringClass::Fish => fish.push(entry),
            ScoringClass::Zero => zero.push(entry),
            ScoringClass::BuyIn => buy_in.push(entry),
        }
    }

    debug!(
        fish = fish.len(),
        zero = zero.len(),
        buy_in = buy_in.len(),
        disqualified = disqualified.len(),
        "Ranking tournament entries"
    );

    fish.sort_by(|a, b| {
        fish_key(b)
            .cmp(&fish_key(a))
            .then_with(|| a.angler().cmp(b.angler()))
    });
    zero.sort_by(|a, b| a.angler().cmp(b.angler()));
    buy_in.sort_by(|a, b| {
        b.scored_weight()
            .cmp(&a.scored_weight())
            .then_with(|| a.angler().cmp(b.angler()))
    });
    disqualified.sort_by(|a, b| a.angler().cmp(b.angler()));

    let mut ranked = Vec::with_capacity(fish.len() + zero.len() + buy_in.len());
    let lowest_fish_points = rank_fish_class(fish, policy, &mut ranked);

    if lowest_fish_points.is_none() && zero.iter().chain(&buy_in).any(|e| e.is_member()) {
        warn!("No member weighed fish; using fallback points for zero and buy-in classes");
    }

    let zero_place = ranked.len() as u32 + 1;
    let zero_points = policy.zero_class_points(lowest_fish_points);
    ranked.extend(
        zero.into_iter()
            .map(|entry| shared_place(entry, ScoringClass::Zero, zero_place, zero_points)),
    );

    let buy_in_place = ranked.len() as u32 + 1;
    let buy_in_points = policy.buy_in_points(lowest_fish_points);
    ranked.extend(
        buy_in
            .into_iter()
            .map(|entry| shared_place(entry, ScoringClass::BuyIn, buy_in_place, buy_in_points)),
    );

    Ok(TournamentRanking {
        ranked,
        disqualified,
    })
}

fn ensure_unique_anglers(entries: &[NormalizedEntry]) -> Result<()> {
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        if !seen.insert(entry.angler()) {
            return Err(ScoringError::DuplicateAngler(entry.angler().clone()));
        }
    }
    Ok(())
}

fn fish_key(entry: &NormalizedEntry) -> (Decimal, Decimal) {
    (entry.scored_weight(), entry.big_bass_weight())
}

/// Places the ordered Fish class and returns the lowest points handed to a
/// member, if any member was in it.
fn rank_fish_class(
    fish: Vec<NormalizedEntry>,
    policy: &ScoringPolicy,
    out: &mut Vec<RankedEntry>,
) -> Option<i32> {
    let places = tie_aware_places(&fish, fish_key);

    let mut next_points = policy.first_place_points;
    let mut lowest = None;
    let mut points = Vec::with_capacity(fish.len());

    for group in tie_groups(&fish, fish_key) {
        let group_points = if group.iter().any(NormalizedEntry::is_member) {
            let awarded = next_points;
            next_points -= policy.group_step;
            lowest = Some(awarded);
            awarded
        } else {
            0
        };
        points.extend(
            group
                .iter()
                .map(|entry| if entry.is_member() { group_points } else { 0 }),
        );
    }

    out.extend(
        fish.into_iter()
            .zip(places)
            .zip(points)
            .map(|((entry, place), points)| RankedEntry {
                entry,
                class: ScoringClass::Fish,
                place,
                points,
            }),
    );

    lowest
}

fn shared_place(entry: NormalizedEntry, class: ScoringClass, place: u32, points: i32) -> RankedEntry {
    let points = if entry.is_member() { points } else { 0 };
    RankedEntry {
        entry,
        class,
        place,
        points,
    }
}

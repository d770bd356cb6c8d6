use std::collections::BTreeMap;

use rayon::prelude::*;
use rust_decimal::Decimal;
use tracing::info;

use super::placement::tie_aware_places;
use super::teams::TeamMode;
use super::tournament::score_tournament;
use crate::dto::season::{SeasonReport, TournamentSummary};
use crate::dto::tournament::TournamentSheet;
use crate::error::Result;
use crate::models::{AnglerId, Award, RankedEntry, Season, SeasonAwards, SeasonStanding};
use crate::policy::ScoringPolicy;

#[derive(Debug, Clone, Default, PartialEq)]
struct Totals {
    points: i64,
    fish_count: i64,
    net_weight: Decimal,
    tournaments: u32,
}

impl Totals {
    fn absorb(&mut self, other: &Totals) {
        self.points += other.points;
        self.fish_count += other.fish_count;
        self.net_weight += other.net_weight;
        self.tournaments += other.tournaments;
    }
}

/// Running per-angler season totals.
///
/// Tournaments may be added in any order and accumulators for disjoint sets
/// of tournaments may be merged; the resulting standings are the same.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeasonAccumulator {
    totals: BTreeMap<AnglerId, Totals>,
}

impl SeasonAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_tournament(&mut self, ranked: &[RankedEntry]) {
        for entry in ranked {
            let totals = self.totals.entry(entry.angler().clone()).or_default();
            totals.absorb(&Totals {
                points: i64::from(entry.points),
                fish_count: i64::from(entry.entry.fish_count()),
                net_weight: entry.entry.scored_weight(),
                tournaments: 1,
            });
        }
    }

    pub fn merge(mut self, other: SeasonAccumulator) -> Self {
        for (angler, totals) in other.totals {
            self.totals.entry(angler).or_default().absorb(&totals);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Standings ordered by points, then net weight. Anglers level on both
    /// share a place.
    pub fn standings(&self) -> Vec<SeasonStanding> {
        let mut rows: Vec<_> = self.totals.iter().collect();
        rows.sort_by(|(a_id, a), (b_id, b)| {
            b.points
                .cmp(&a.points)
                .then_with(|| b.net_weight.cmp(&a.net_weight))
                .then_with(|| a_id.cmp(b_id))
        });

        let places = tie_aware_places(&rows, |(_, totals)| (totals.points, totals.net_weight));

        rows.into_iter()
            .zip(places)
            .map(|((angler, totals), place)| SeasonStanding {
                angler: angler.clone(),
                points: totals.points,
                fish_count: totals.fish_count,
                net_weight: totals.net_weight,
                tournaments: totals.tournaments,
                place,
            })
            .collect()
    }
}

/// Season standings from every tournament's ranked output.
pub fn aggregate_season<T: AsRef<[RankedEntry]>>(ranked_by_tournament: &[T]) -> Vec<SeasonStanding> {
    let mut accumulator = SeasonAccumulator::new();
    for ranked in ranked_by_tournament {
        accumulator.add_tournament(ranked.as_ref());
    }
    accumulator.standings()
}

pub fn season_awards<T: AsRef<[RankedEntry]>>(
    standings: &[SeasonStanding],
    ranked_by_tournament: &[T],
) -> SeasonAwards {
    let entries = || ranked_by_tournament.iter().flat_map(|ranked| ranked.as_ref());

    SeasonAwards {
        angler_of_the_year: standings
            .iter()
            .filter(|standing| standing.place == 1)
            .map(|standing| standing.angler.clone())
            .collect(),
        big_bass: top_award(entries(), |entry| entry.entry.big_bass_weight()),
        heaviest_stringer: top_award(entries(), |entry| entry.entry.scored_weight()),
    }
}

fn top_award<'a>(
    entries: impl Iterator<Item = &'a RankedEntry>,
    weight: impl Fn(&RankedEntry) -> Decimal,
) -> Option<Award> {
    let mut best: Option<Award> = None;

    for entry in entries {
        let value = weight(entry);
        if value <= Decimal::ZERO {
            continue;
        }
        let beats_best = best.as_ref().is_none_or(|award| value > award.weight);
        if beats_best {
            best = Some(Award {
                anglers: vec![entry.angler().clone()],
                weight: value,
            });
        } else if let Some(award) = best.as_mut()
            && value == award.weight
            && !award.anglers.contains(entry.angler())
        {
            award.anglers.push(entry.angler().clone());
        }
    }

    best.map(|mut award| {
        award.anglers.sort();
        award
    })
}

/// Scores every sheet that falls in `season` (all sheets when `None`) and
/// aggregates the results. Tournaments are scored in parallel.
pub fn score_season(
    sheets: Vec<TournamentSheet>,
    season: Option<Season>,
    policy: &ScoringPolicy,
    mode: TeamMode,
) -> Result<SeasonReport> {
    let mut sheets: Vec<_> = sheets
        .into_iter()
        .filter(|sheet| season.is_none_or(|season| season.contains(sheet.date)))
        .collect();
    sheets.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.name.cmp(&b.name)));

    let reports = sheets
        .into_par_iter()
        .map(|sheet| score_tournament(sheet, policy, mode))
        .collect::<Result<Vec<_>>>()?;

    let ranked: Vec<&[RankedEntry]> = reports.iter().map(|r| r.ranked.as_slice()).collect();
    let standings = aggregate_season(&ranked);
    let awards = season_awards(&standings, &ranked);

    info!(
        tournaments = reports.len(),
        anglers = standings.len(),
        "Season standings computed"
    );

    Ok(SeasonReport {
        season,
        tournaments: reports.iter().map(TournamentSummary::from).collect(),
        standings,
        awards,
    })
}

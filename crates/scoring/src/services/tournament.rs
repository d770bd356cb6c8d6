use tracing::info;

use super::normalizer::normalize_all;
use super::ranking::rank_tournament;
use super::teams::{TeamMode, aggregate_teams, index_by_angler};
use crate::dto::tournament::{TournamentReport, TournamentSheet};
use crate::error::Result;
use crate::policy::ScoringPolicy;

/// Normalizes, ranks and team-scores one sheet.
pub fn score_tournament(
    sheet: TournamentSheet,
    policy: &ScoringPolicy,
    mode: TeamMode,
) -> Result<TournamentReport> {
    let entries = normalize_all(
        sheet
            .entries
            .into_iter()
            .map(|row| row.into_raw_entry(policy)),
    )?;

    let ranking = rank_tournament(&entries, policy)?;
    let teams = aggregate_teams(&sheet.teams, &index_by_angler(&entries)?, mode)?;

    info!(
        tournament = %sheet.name,
        ranked = ranking.ranked.len(),
        disqualified = ranking.disqualified.len(),
        teams = teams.len(),
        "Scored tournament"
    );

    Ok(TournamentReport {
        name: sheet.name,
        date: sheet.date,
        ranked: ranking.ranked,
        disqualified: ranking.disqualified,
        teams,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::tournament::EntryRow;
    use crate::error::ScoringError;
    use crate::models::TeamPairing;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn row(angler: &str, weight: Decimal, member: bool) -> EntryRow {
        EntryRow {
            angler: angler.into(),
            weight,
            fish: 5,
            big_bass: Decimal::ZERO,
            dead_fish: 0,
            penalty: None,
            member,
            buy_in: false,
            disqualified: false,
        }
    }

    fn sheet(entries: Vec<EntryRow>, teams: Vec<TeamPairing>) -> TournamentSheet {
        TournamentSheet {
            name: "Spring Classic".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            entries,
            teams,
        }
    }

    #[test]
    fn test_score_tournament_end_to_end() {
        let mut dq = row("dq", dec!(30), true);
        dq.disqualified = true;
        let mut dead = row("dead", dec!(11.00), true);
        dead.dead_fish = 4;

        let report = score_tournament(
            sheet(
                vec![row("a", dec!(10.50), true), dead, row("g", dec!(12), false), dq],
                vec![TeamPairing::new("a", Some("g".into())), TeamPairing::solo("dead")],
            ),
            &ScoringPolicy::default(),
            TeamMode::Strict,
        )
        .unwrap();

        let summary: Vec<_> = report
            .ranked
            .iter()
            .map(|r| (r.angler().as_str(), r.place, r.points))
            .collect();
        assert_eq!(summary, vec![("g", 1, 0), ("a", 2, 100), ("dead", 3, 99)]);
        assert_eq!(report.disqualified.len(), 1);
        assert_eq!(report.teams[0].net_weight, dec!(22.50));
        assert_eq!(report.teams[1].net_weight, dec!(10.00));
    }

    #[test]
    fn test_invalid_row_fails_the_sheet() {
        let mut bad = row("a", dec!(3), true);
        bad.dead_fish = -1;
        let result = score_tournament(
            sheet(vec![bad], Vec::new()),
            &ScoringPolicy::default(),
            TeamMode::Lenient,
        );
        assert!(matches!(result, Err(ScoringError::InvalidEntry { .. })));
    }
}

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AnglerId, NormalizedEntry, RankedEntry, RawEntry, TeamPairing, TeamResult};
use crate::policy::ScoringPolicy;

/// One tournament's weigh-in sheet as exported by the club site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentSheet {
    pub name: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub entries: Vec<EntryRow>,
    #[serde(default)]
    pub teams: Vec<TeamPairing>,
}

/// A weigh-in row. The penalty may be given directly or derived from the
/// number of dead fish.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryRow {
    pub angler: AnglerId,
    #[serde(default)]
    pub weight: Decimal,
    #[serde(default)]
    pub fish: i32,
    #[serde(default)]
    pub big_bass: Decimal,
    #[serde(default)]
    pub dead_fish: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub penalty: Option<Decimal>,
    pub member: bool,
    #[serde(default)]
    pub buy_in: bool,
    #[serde(default)]
    pub disqualified: bool,
}

impl EntryRow {
    pub fn into_raw_entry(self, policy: &ScoringPolicy) -> RawEntry {
        let penalty = self
            .penalty
            .unwrap_or_else(|| policy.penalty_for(self.dead_fish));

        RawEntry {
            angler: self.angler,
            gross_weight: self.weight,
            fish_count: self.fish,
            big_bass_weight: self.big_bass,
            penalty,
            member: self.member,
            buy_in: self.buy_in,
            disqualified: self.disqualified,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TournamentReport {
    pub name: String,
    pub date: NaiveDate,
    pub ranked: Vec<RankedEntry>,
    pub disqualified: Vec<NormalizedEntry>,
    pub teams: Vec<TeamResult>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_sheet_parses_with_defaults() {
        let sheet: TournamentSheet = serde_json::from_str(
            r#"{
                "name": "Lake Fork Open",
                "date": "2024-04-13",
                "entries": [
                    {"angler": "a1", "weight": "12.40", "fish": 5, "big_bass": "4.1", "member": true},
                    {"angler": "a2", "member": false, "buy_in": true}
                ],
                "teams": [{"angler": "a1", "partner": "a2"}]
            }"#,
        )
        .unwrap();

        assert_eq!(sheet.entries.len(), 2);
        assert_eq!(sheet.entries[0].weight, dec!(12.40));
        assert_eq!(sheet.entries[1].weight, dec!(0));
        assert!(sheet.entries[1].buy_in);
        assert_eq!(sheet.teams[0].partner, Some(AnglerId::from("a2")));
    }

    #[test]
    fn test_penalty_derived_from_dead_fish() {
        let row = EntryRow {
            angler: "a1".into(),
            weight: dec!(10),
            fish: 5,
            big_bass: dec!(3),
            dead_fish: 2,
            penalty: None,
            member: true,
            buy_in: false,
            disqualified: false,
        };
        let raw = row.clone().into_raw_entry(&ScoringPolicy::default());
        assert_eq!(raw.penalty, dec!(0.50));

        let explicit = EntryRow {
            penalty: Some(dec!(1)),
            ..row
        };
        assert_eq!(
            explicit.into_raw_entry(&ScoringPolicy::default()).penalty,
            dec!(1)
        );
    }
}

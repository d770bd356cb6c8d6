use chrono::NaiveDate;
use serde::Serialize;

use super::tournament::TournamentReport;
use crate::models::{Season, SeasonAwards, SeasonStanding};

#[derive(Debug, Clone, Serialize)]
pub struct TournamentSummary {
    pub name: String,
    pub date: NaiveDate,
    pub ranked: usize,
    pub disqualified: usize,
}

impl From<&TournamentReport> for TournamentSummary {
    fn from(report: &TournamentReport) -> Self {
        Self {
            name: report.name.clone(),
            date: report.date,
            ranked: report.ranked.len(),
            disqualified: report.disqualified.len(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SeasonReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<Season>,
    pub tournaments: Vec<TournamentSummary>,
    pub standings: Vec<SeasonStanding>,
    pub awards: SeasonAwards,
}

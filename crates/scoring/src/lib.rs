//! Tournament scoring for a bass club: turns raw catch entries into ranked
//! placements and points, team standings, and season (Angler of the Year)
//! standings.
//!
//! Every operation is a pure function of its input. Persistence, rendering
//! and authentication belong to the caller.

pub mod dto;
pub mod error;
pub mod models;
pub mod policy;
pub mod services;

pub use error::{Result, ScoringError};
pub use models::{
    AnglerId, Award, NormalizedEntry, RankedEntry, RawEntry, ScoringClass, Season, SeasonAwards,
    SeasonStanding, TeamPairing, TeamResult,
};
pub use policy::ScoringPolicy;
pub use services::normalizer::{normalize, normalize_all};
pub use services::ranking::{TournamentRanking, rank, rank_tournament};
pub use services::season::{SeasonAccumulator, aggregate_season, score_season, season_awards};
pub use services::teams::{TeamMode, aggregate_teams, index_by_angler};
pub use services::tournament::score_tournament;

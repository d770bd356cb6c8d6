pub mod angler;
pub mod entry;
pub mod season;
pub mod team;

pub use angler::AnglerId;
pub use entry::{NormalizedEntry, RankedEntry, RawEntry, ScoringClass};
pub use season::{Award, Season, SeasonAwards, SeasonStanding};
pub use team::{TeamPairing, TeamResult};

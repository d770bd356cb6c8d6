pub mod normalizer;
pub mod placement;
pub mod ranking;
pub mod season;
pub mod teams;
pub mod tournament;

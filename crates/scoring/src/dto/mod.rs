pub mod season;
pub mod tournament;

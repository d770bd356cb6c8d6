use std::path::Path;

use anyhow::{Context, Result};
use scoring::{ScoringPolicy, TeamMode};

#[derive(Debug, Clone)]
pub struct Config {
    pub policy: ScoringPolicy,
    pub team_mode: TeamMode,
}

impl Config {
    pub fn load(policy_file: Option<&Path>, strict_teams: bool) -> Result<Self> {
        let policy = match policy_file {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Cannot read policy file {}", path.display()))?;
                serde_json::from_str(&content)
                    .with_context(|| format!("Invalid policy file {}", path.display()))?
            }
            None => ScoringPolicy::default(),
        };

        let team_mode = if strict_teams {
            TeamMode::Strict
        } else {
            TeamMode::Lenient
        };

        Ok(Self { policy, team_mode })
    }
}

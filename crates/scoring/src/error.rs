use thiserror::Error;
use validator::ValidationErrors;

use crate::models::AnglerId;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("Invalid entry for angler '{angler}': {errors}")]
    InvalidEntry {
        angler: AnglerId,
        errors: ValidationErrors,
    },

    #[error("Angler '{0}' is marked both bought in and disqualified with a recorded weight")]
    ConflictingStatus(AnglerId),

    #[error("Duplicate entry for angler '{0}' in one tournament")]
    DuplicateAngler(AnglerId),

    #[error("Angler '{0}' appears in more than one team slot")]
    DuplicateTeamMember(AnglerId),

    #[error("Team pairing references angler '{0}' who has no entry in this tournament")]
    UnknownTeamMember(AnglerId),
}

pub type Result<T> = std::result::Result<T, ScoringError>;

impl ScoringError {
    /// The angler the failure is attributed to.
    pub fn angler(&self) -> &AnglerId {
        match self {
            Self::InvalidEntry { angler, .. } => angler,
            Self::ConflictingStatus(angler)
            | Self::DuplicateAngler(angler)
            | Self::DuplicateTeamMember(angler)
            | Self::UnknownTeamMember(angler) => angler,
        }
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VocabError {
    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("store unavailable: {0}")]
    StoreUnavailable(#[from] anyhow::Error),
}

impl VocabError {
    pub fn http_status(&self) -> u16 {
        match self {
            Self::MalformedInput(_) => 400,
            Self::NotFound(_) => 404,
            Self::ConstraintViolation(_) => 409,
            Self::StoreUnavailable(_) => 503,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::ConstraintViolation(_))
    }
}

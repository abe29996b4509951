use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("insufficient data: cannot summarise an empty rating sample")]
    InsufficientData,

    #[error("rating {value} is outside the 0-10 scale")]
    RatingOutOfRange { value: i64 },

    #[error("unknown formation '{formation}', using flat layout")]
    UnknownFormation { formation: String },

    #[error("asset not resolvable: {path}")]
    MissingAsset { path: String },

    #[error("malformed result document: {}", describe_malformed(.missing, .detail))]
    MalformedResult {
        missing: Vec<String>,
        detail: Option<String>,
    },
}

impl EngineError {
    /// Recoverable errors have a well-defined fallback value and are
    /// reported as warnings instead of being surfaced to the caller.
    pub fn is_recoverable(&self) -> bool {
        match self {
            EngineError::UnknownFormation { .. } => true,
            EngineError::MissingAsset { .. } => true,
            EngineError::InsufficientData => false,
            EngineError::RatingOutOfRange { .. } => false,
            EngineError::MalformedResult { .. } => false,
        }
    }
}

fn describe_malformed(missing: &[String], detail: &Option<String>) -> String {
    match (missing.is_empty(), detail) {
        (false, _) => format!("missing keys: {}", missing.join(", ")),
        (true, Some(detail)) => detail.clone(),
        (true, None) => "unknown schema violation".to_string(),
    }
}

/// Outcome of a lookup that always produces a value.
///
/// `Fallback` carries the substituted value together with the recoverable
/// error that caused the substitution.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<T> {
    Resolved(T),
    Fallback { value: T, reason: EngineError },
}

impl<T> Resolution<T> {
    pub fn value(&self) -> &T {
        match self {
            Resolution::Resolved(value) | Resolution::Fallback { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Resolution::Resolved(value) | Resolution::Fallback { value, .. } => value,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Resolution::Fallback { .. })
    }

    pub fn reason(&self) -> Option<&EngineError> {
        match self {
            Resolution::Resolved(_) => None,
            Resolution::Fallback { reason, .. } => Some(reason),
        }
    }
}

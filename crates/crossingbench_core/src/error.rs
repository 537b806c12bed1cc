/// Errors raised by the cost model and the procedures layered on it
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CrossingError {
    #[error("invalid parameter {name}={value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("invalid sweep range (cross_min={cross_min}, cross_max={cross_max}, steps={steps}): {reason}")]
    InvalidRange {
        cross_min: i64,
        cross_max: i64,
        steps: usize,
        reason: &'static str,
    },

    #[error("unknown boundary '{id}' (known: {known})")]
    UnknownBoundary { id: String, known: String },

    #[error("unknown compute substrate '{id}' (known: {known})")]
    UnknownCompute { id: String, known: String },
}

impl CrossingError {
    pub(crate) fn negative(name: &'static str, value: f64) -> Self {
        CrossingError::InvalidParameter {
            name,
            value,
            reason: "must be non-negative",
        }
    }
}

pub type Result<T> = std::result::Result<T, CrossingError>;

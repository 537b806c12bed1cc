//! Workload byte counts fed into the cost model.

use serde::{Deserialize, Serialize};

use crate::error::{CrossingError, Result};

/// Bytes amortized per crossing event unless the caller says otherwise
pub const DEFAULT_BYTES_PER_EVENT: u64 = 256;

/// Byte and event counts for one operating point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CostInputs {
    /// Bytes processed inside the compute domain
    pub bytes_compute: u64,
    /// Bytes moved across the boundary
    pub bytes_cross: u64,
    /// Number of discrete boundary crossings
    pub events_cross: u64,
}

impl CostInputs {
    #[must_use]
    pub const fn new(bytes_compute: u64, bytes_cross: u64, events_cross: u64) -> Self {
        Self {
            bytes_compute,
            bytes_cross,
            events_cross,
        }
    }

    /// Inputs whose event count is derived from the crossing volume
    pub fn with_derived_events(
        bytes_compute: u64,
        bytes_cross: u64,
        bytes_per_event: u64,
    ) -> Result<Self> {
        Ok(Self {
            bytes_compute,
            bytes_cross,
            events_cross: events_for_bytes(bytes_cross, bytes_per_event)?,
        })
    }

    /// Build inputs from signed counts, as supplied on a command line.
    ///
    /// `events_cross` falls back to the derived count when `None`.
    pub fn from_signed(
        bytes_compute: i64,
        bytes_cross: i64,
        events_cross: Option<i64>,
        bytes_per_event: u64,
    ) -> Result<Self> {
        let bytes_compute = non_negative("bytes_compute", bytes_compute)?;
        let bytes_cross = non_negative("bytes_cross", bytes_cross)?;
        match events_cross {
            Some(events) => Ok(Self::new(
                bytes_compute,
                bytes_cross,
                non_negative("events_cross", events)?,
            )),
            None => Self::with_derived_events(bytes_compute, bytes_cross, bytes_per_event),
        }
    }
}

/// `round(bytes_cross / bytes_per_event)` with halves rounded up
pub fn events_for_bytes(bytes_cross: u64, bytes_per_event: u64) -> Result<u64> {
    if bytes_per_event == 0 {
        return Err(CrossingError::InvalidParameter {
            name: "bytes_per_event",
            value: 0.0,
            reason: "must be greater than zero",
        });
    }
    let whole = bytes_cross / bytes_per_event;
    let rem = bytes_cross % bytes_per_event;
    let half = bytes_per_event - bytes_per_event / 2;
    Ok(whole + u64::from(rem >= half))
}

pub(crate) fn non_negative(name: &'static str, value: i64) -> Result<u64> {
    u64::try_from(value).map_err(|_| CrossingError::negative(name, value as f64))
}

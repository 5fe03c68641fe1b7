use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::session::{DropResult, SessionPoint};
use crate::stats::{argmin, consecutive_diffs};

pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// How the drop moment is picked out of a session.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, ValueEnum, Serialize, Deserialize,
    strum_macros::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum DropMethod {
    /// lowest score in the session
    #[default]
    Min,
    /// point right after the steepest decline between two samples
    LargestDrop,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropDetector {
    pub method: DropMethod,
    pub threshold: f64,
}

impl Default for DropDetector {
    fn default() -> Self {
        Self {
            method: DropMethod::Min,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl DropDetector {
    pub fn new(method: DropMethod, threshold: f64) -> Self {
        Self { method, threshold }
    }

    /// Find the point where attention dropped.
    ///
    /// Returns `None` for an empty session, and for a session with fewer than
    /// two points under [`DropMethod::LargestDrop`]. Missing scores count as
    /// zero when comparing, but the result carries the stored value.
    pub fn detect<T: Clone>(&self, session_data: &[SessionPoint<T>]) -> Option<DropResult<T>> {
        let scores: Vec<f64> = session_data
            .iter()
            .map(SessionPoint::score_or_zero)
            .collect();

        let idx = match self.method {
            DropMethod::Min => argmin(&scores)?,
            DropMethod::LargestDrop => self.largest_drop_index(&scores)?,
        };

        log::debug!(
            "drop moment at index {} of {} ({} method)",
            idx,
            scores.len(),
            self.method
        );

        session_data
            .get(idx)
            .map(|point| DropResult::from_point(idx, point))
    }

    fn largest_drop_index(&self, scores: &[f64]) -> Option<usize> {
        if scores.len() < 2 {
            return None;
        }

        let diffs = consecutive_diffs(scores);
        let drop_idx = argmin(&diffs)?;
        let steepest = diffs[drop_idx];

        if steepest < -self.threshold.abs() {
            Some(drop_idx + 1)
        } else {
            log::debug!(
                "steepest decline {} within threshold {}, using minimum score",
                steepest,
                self.threshold
            );
            argmin(scores)
        }
    }
}

/// Shorthand for `DropDetector::new(method, threshold).detect(session_data)`.
pub fn detect<T: Clone>(
    session_data: &[SessionPoint<T>],
    method: DropMethod,
    threshold: f64,
) -> Option<DropResult<T>> {
    DropDetector::new(method, threshold).detect(session_data)
}

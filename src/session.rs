use serde::{Deserialize, Serialize};

/// One sampled engagement score.
///
/// `timestamp` is opaque to the detector and is handed back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionPoint<T> {
    pub score: Option<f64>,
    pub timestamp: Option<T>,
}

impl<T> SessionPoint<T> {
    pub fn new(score: f64, timestamp: T) -> Self {
        Self {
            score: Some(score),
            timestamp: Some(timestamp),
        }
    }

    /// Score used for computation; a missing score counts as zero.
    pub fn score_or_zero(&self) -> f64 {
        self.score.unwrap_or(0.0)
    }
}

impl<T> From<(f64, T)> for SessionPoint<T> {
    fn from(v: (f64, T)) -> Self {
        SessionPoint::new(v.0, v.1)
    }
}

/// Snapshot of the point judged to be the drop moment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropResult<T> {
    pub index: usize,
    pub timestamp: Option<T>,
    pub score: Option<f64>,
}

impl<T: Clone> DropResult<T> {
    pub(crate) fn from_point(index: usize, point: &SessionPoint<T>) -> Self {
        Self {
            index,
            timestamp: point.timestamp.clone(),
            score: point.score,
        }
    }
}

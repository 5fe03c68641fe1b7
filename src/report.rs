use serde::Serialize;

use crate::detector::{DropDetector, DropMethod};
use crate::session::{DropResult, SessionPoint};
use crate::stats::{mean, std_dev};

/// Summary of one session alongside its drop moment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropReport<T> {
    pub points: usize,
    pub mean_score: Option<f64>,
    pub score_std_dev: Option<f64>,
    pub method: DropMethod,
    pub threshold: f64,
    pub drop: Option<DropResult<T>>,
}

impl<T: Clone> DropReport<T> {
    pub fn build(detector: &DropDetector, session_data: &[SessionPoint<T>]) -> Self {
        let scores: Vec<f64> = session_data
            .iter()
            .map(SessionPoint::score_or_zero)
            .collect();

        Self {
            points: session_data.len(),
            mean_score: mean(&scores),
            score_std_dev: std_dev(&scores),
            method: detector.method,
            threshold: detector.threshold,
            drop: detector.detect(session_data),
        }
    }
}

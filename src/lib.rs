// Library surface for the binary and integration tests.
pub mod app_dirs;
pub mod config;
pub mod detector;
pub mod input;
pub mod report;
pub mod session;
pub mod stats;

pub use detector::{detect, DropDetector, DropMethod};
pub use session::{DropResult, SessionPoint};

pub mod ball;
pub mod models;
pub mod progress;

pub use ball::{Ball, CLEARANCE_ORDER};
pub use models::{DrillKind, FrameDocument, MatchDocument, Shot, ShotKind, TrainingAttempt};
pub use progress::ImportProgress;

pub mod replay;
pub mod stats;
pub mod types;

pub use replay::{frame_totals, replay_frame};
pub use stats::aggregate_frame;
pub use types::{FrameStats, HistoryEntry, Seat};

pub mod lineup;
pub mod red_black;
pub mod stopwatch;
pub mod types;

pub use lineup::{LineUpDrill, LineUpPhase};
pub use red_black::RedBlackDrill;
pub use stopwatch::Stopwatch;
pub use types::{parse_events, DrillEvent, DrillOutcome, DrillSnapshot};

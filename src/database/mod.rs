pub mod attempts;
pub mod connection;
pub mod frame_stats;
pub mod frames;
pub mod matches;
pub mod models;
pub mod setup;
pub mod shots;

pub use connection::{create_pool, get_connection, DbConn, DbPool};
pub use models::*;

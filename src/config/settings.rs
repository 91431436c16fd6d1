pub struct TrainingSettings {
    pub lineup_reds: u32,
}

impl Default for TrainingSettings {
    fn default() -> Self {
        Self {
            lineup_reds: 15, // full table
        }
    }
}

#[derive(Default)]
pub struct AppConfig {
    pub training: TrainingSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Resolve the SQLite database path, honoring DATABASE_PATH.
pub fn database_path() -> String {
    std::env::var("DATABASE_PATH").unwrap_or_else(|_| "snooker_stats.db".to_string())
}

// Prefer passing settings explicitly (constructor injection) rather than
// reaching for globals; services take what they need at construction.

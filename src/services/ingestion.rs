use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use log::{error, info, warn};
use regex::Regex;

use crate::config::settings;
use crate::database::{self, DbConn, DbPool};
use crate::domain::{FrameDocument, ImportProgress, MatchDocument};

/// Loads exported match documents into the database.
pub struct ImportService {
    pool: DbPool,
    id_pattern: Regex,
}

impl ImportService {
    pub fn new() -> Result<Self> {
        let pool = database::create_pool(&settings::database_path())?;
        Self::with_pool(pool)
    }

    fn with_pool(pool: DbPool) -> Result<Self> {
        let id_pattern = Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.-]{0,63}$")
            .context("Failed to compile identifier pattern")?;
        Ok(Self { pool, id_pattern })
    }

    pub fn run(&self, path: &Path) -> Result<()> {
        info!("=== Starting Match Import ===\n");

        let mut conn = database::get_connection(&self.pool)?;
        database::setup::ensure_schema(&mut conn)?;

        // Step 1: Discover documents
        let documents = self.collect_documents(path)?;
        info!("  → Found {} match document(s)\n", documents.len());

        // Step 2: Load each one; a bad document is skipped, not fatal
        let mut progress = ImportProgress::new(documents.len());
        for doc_path in &documents {
            match self.import_document(&mut conn, doc_path) {
                Ok(()) => progress.increment_imported(),
                Err(e) => {
                    error!("Failed to import {}: {e:#}", doc_path.display());
                    progress.increment_skipped();
                }
            }
        }

        info!(
            "=== Import Complete ({} imported, {} skipped) ===",
            progress.imported(),
            progress.skipped()
        );
        Ok(())
    }

    fn collect_documents(&self, path: &Path) -> Result<Vec<PathBuf>> {
        if !path.is_dir() {
            return Ok(vec![path.to_path_buf()]);
        }

        let entries = fs::read_dir(path)
            .with_context(|| format!("Failed to read directory {}", path.display()))?;
        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|p| p.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")))
            .collect();
        files.sort();
        Ok(files)
    }

    fn import_document(&self, conn: &mut DbConn, path: &Path) -> Result<()> {
        let document = self.load_document(path)?;
        self.import_match(conn, &document)
    }

    fn load_document(&self, path: &Path) -> Result<MatchDocument> {
        let json = fs::read_to_string(path).context("Failed to read match document")?;
        serde_json::from_str(&json).context("Failed to parse match document")
    }

    fn import_match(&self, conn: &mut DbConn, document: &MatchDocument) -> Result<()> {
        self.validate_document(document)?;

        let match_row = database::matches::upsert_match(
            conn,
            &document.id,
            &document.player1_id,
            document.player2_id.as_deref(),
            document.guest_name.as_deref(),
        )?;

        let existing = database::frames::list_by_match(conn, match_row.id)?;
        if !existing.is_empty() {
            warn!("Match {} already imported; skipping", document.id);
            return Ok(());
        }

        for frame in &document.frames {
            self.store_frame(conn, match_row.id, frame)?;
        }
        Ok(())
    }

    fn validate_document(&self, document: &MatchDocument) -> Result<()> {
        self.validate_identifier("match id", &document.id)?;
        self.validate_identifier("player1Id", &document.player1_id)?;
        if let Some(player2_id) = &document.player2_id {
            self.validate_identifier("player2Id", player2_id)?;
        }
        if let Some(guest) = &document.guest_name {
            if guest.trim().is_empty() {
                bail!("Guest name must not be blank");
            }
        }
        Ok(())
    }

    fn validate_identifier(&self, field: &str, value: &str) -> Result<()> {
        if self.id_pattern.is_match(value) {
            return Ok(());
        }
        Err(anyhow!("Invalid {field}: {value:?}"))
    }

    fn store_frame(&self, conn: &mut DbConn, match_id: i64, frame: &FrameDocument) -> Result<()> {
        // Cached totals may be stale or absent; `process` recomputes them.
        let frame_row = database::frames::insert_frame(
            conn,
            match_id,
            frame.number,
            frame.player1_points.unwrap_or(0),
            frame.player2_points.unwrap_or(0),
        )?;

        for (seq, shot) in frame.shots.iter().enumerate() {
            database::shots::insert_shot(conn, frame_row.id, seq as u32, shot)?;
        }
        Ok(())
    }
}

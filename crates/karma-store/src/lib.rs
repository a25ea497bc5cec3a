//! Whole-file JSON persistence for cumulative karma totals.

use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Utc;
use karma_core::{KarmaError, KarmaRecord, KarmaResult, KarmaTotals};
use tracing::debug;

pub const DEFAULT_STORE_PATH: &str = ".karma-data.json";

/// Read-modify-write store over a single JSON file. No locking: callers
/// must guarantee one invocation at a time against the same file.
pub struct KarmaStore {
    path: PathBuf,
}

impl KarmaStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing or empty backing file yields an empty record; a file that
    /// exists but does not decode is an error.
    pub fn load(&self) -> KarmaResult<KarmaRecord> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(KarmaRecord::empty()),
            Err(e) => {
                return Err(KarmaError::Store(format!(
                    "failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        if raw.is_empty() {
            return Ok(KarmaRecord::empty());
        }

        serde_json::from_slice(&raw).map_err(|e| {
            KarmaError::Store(format!("failed to decode {}: {}", self.path.display(), e))
        })
    }

    /// Stamps `last_updated` and replaces the backing file in full.
    pub fn save(&self, record: &mut KarmaRecord) -> KarmaResult<()> {
        record.last_updated = Some(Utc::now());

        let json = serde_json::to_vec_pretty(record)
            .map_err(|e| KarmaError::Store(format!("failed to encode karma record: {}", e)))?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, &json).map_err(|e| {
            KarmaError::Store(format!("failed to write {}: {}", tmp.display(), e))
        })?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            KarmaError::Store(format!("failed to replace {}: {}", self.path.display(), e))
        })?;

        debug!(path = %self.path.display(), "karma record saved");
        Ok(())
    }

    /// Merges `delta` additively into the stored totals, marks `work_id`
    /// processed, and saves. Purely additive: calling this twice for the
    /// same id counts the delta twice. The orchestrator's processed-id
    /// guard is the only thing preventing reprocessing.
    pub fn update_karma(&self, work_id: u64, delta: &KarmaTotals) -> KarmaResult<()> {
        let mut record = self.load()?;

        for (username, points) in delta {
            *record.reviewers.entry(username.clone()).or_insert(0) += points;
        }
        record.processed_prs.insert(work_id, Utc::now());

        self.save(&mut record)
    }

    pub fn processed_ids(&self) -> KarmaResult<HashSet<u64>> {
        Ok(self.load()?.processed_prs.keys().copied().collect())
    }

    /// Resets the record to empty with a fresh timestamp.
    pub fn clear(&self) -> KarmaResult<()> {
        self.save(&mut KarmaRecord::empty())
    }
}

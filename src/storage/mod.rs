//! JSON snapshot persistence for the ledger.
//!
//! Deliberately minimal: the whole ledger is read and written in one piece
//! ("read all, write all"), which is all the computation cores require of a
//! persistence collaborator.

use std::{fs, path::PathBuf};

use crate::config::{app_data_dir, tmp_path, write_atomic, Config};
use crate::errors::TrackerError;
use crate::ledger::ledger::CURRENT_SCHEMA_VERSION;
use crate::ledger::Ledger;

const LEDGER_FILE: &str = "ledger.json";

/// Persists one [`Ledger`] snapshot as pretty JSON under the app data dir.
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    pub fn new() -> Result<Self, TrackerError> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, TrackerError> {
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: base.join(LEDGER_FILE),
        })
    }

    /// Loads the stored ledger. When no snapshot exists yet, returns a fresh
    /// ledger seeded with the configured account names.
    pub fn load(&self, config: &Config) -> Result<Ledger, TrackerError> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "no ledger snapshot, starting fresh");
            return Ok(Ledger::with_accounts("default", config.accounts.clone()));
        }
        let data = fs::read_to_string(&self.path)?;
        let ledger: Ledger = serde_json::from_str(&data)?;
        if ledger.schema_version > CURRENT_SCHEMA_VERSION {
            return Err(TrackerError::Unsupported(format!(
                "ledger schema v{} is newer than supported v{}",
                ledger.schema_version, CURRENT_SCHEMA_VERSION
            )));
        }
        Ok(ledger)
    }

    /// Writes the ledger atomically (tmp file + rename) and refreshes its
    /// `updated_at` stamp.
    pub fn save(&self, ledger: &mut Ledger) -> Result<(), TrackerError> {
        ledger.touch();
        let json = serde_json::to_string_pretty(ledger)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), transactions = ledger.transaction_count(), "ledger saved");
        Ok(())
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

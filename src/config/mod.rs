//! Recognized accounts, expense categories, and the file-backed config.

use std::{
    env, fs,
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::TrackerError;

const DEFAULT_DIR_NAME: &str = ".tuition_core";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// The fixed account set of the reference deployment.
pub const DEFAULT_ACCOUNTS: [&str; 5] = [
    "Cash",
    "HDFC Bank",
    "SBI Bank",
    "HDFC Credit",
    "AU Credit",
];

/// Stock expense categories seeded into a fresh config.
pub static DEFAULT_EXPENSE_CATEGORIES: Lazy<Vec<ExpenseCategory>> = Lazy::new(|| {
    [
        ("Rent", "🏠"),
        ("Electricity", "⚡"),
        ("Internet", "🌐"),
        ("Snacks/Tea", "☕"),
        ("Stationery", "✏️"),
        ("Travelling", "🚲"),
        ("Routine Exp", "🔄"),
        ("Family Exp", "👨‍👩‍👧"),
        ("Loan/EMI", "🏦"),
        ("Credit Card", "💳"),
    ]
    .into_iter()
    .map(|(name, icon)| ExpenseCategory {
        name: name.to_string(),
        icon: icon.to_string(),
    })
    .collect()
});

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExpenseCategory {
    pub name: String,
    #[serde(default)]
    pub icon: String,
}

/// Caller-supplied configuration: which account names the aggregator
/// recognizes and which expense categories the forms offer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub accounts: Vec<String>,
    pub expense_categories: Vec<ExpenseCategory>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            accounts: DEFAULT_ACCOUNTS.iter().map(|s| s.to_string()).collect(),
            expense_categories: DEFAULT_EXPENSE_CATEGORIES.clone(),
        }
    }
}

/// Returns the application data directory, defaulting to `~/.tuition_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("TUITION_CORE_HOME") {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Loads and saves the config as JSON, falling back to defaults when no
/// file exists yet.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, TrackerError> {
        Self::from_base(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, TrackerError> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self, TrackerError> {
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    pub fn load(&self) -> Result<Config, TrackerError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), TrackerError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

pub(crate) fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

pub(crate) fn write_atomic(path: &Path, data: &str) -> Result<(), TrackerError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

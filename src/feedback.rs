// Feedback log for classifier corrections.
//
// Users who disagree with a verdict can submit the URL with the label
// they believe is right. Submissions land in an append-only CSV that a
// later training run can fold back into the model. The store sits
// behind a trait so the CSV file can be swapped for a real database
// without touching the handlers.

use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::verdict::Verdict;

const HEADER: &str = "timestamp,url,label,notes";

/// One user-submitted correction.
#[derive(Debug, Clone)]
pub struct FeedbackEntry {
    pub url: String,
    pub label: Verdict,
    pub notes: String,
}

#[async_trait]
pub trait FeedbackStore: Send + Sync {
    /// Record one correction.
    async fn append(&self, entry: &FeedbackEntry) -> Result<()>;

    /// Number of recorded corrections.
    async fn entry_count(&self) -> Result<u64>;
}

/// Append-only CSV store, one row per submission plus a header row
/// written when the file is first created.
pub struct CsvFeedbackStore {
    path: PathBuf,
    // Serializes appends so concurrent submissions cannot interleave
    // partial rows.
    write_lock: Mutex<()>,
}

impl CsvFeedbackStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[async_trait]
impl FeedbackStore for CsvFeedbackStore {
    async fn append(&self, entry: &FeedbackEntry) -> Result<()> {
        use std::io::Write;

        let _guard = self.write_lock.lock().await;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create feedback directory {}", parent.display())
                })?;
            }
        }

        let is_new = !self.path.exists();
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open {}", self.path.display()))?;

        if is_new {
            writeln!(file, "{HEADER}")
                .with_context(|| format!("Failed to write {}", self.path.display()))?;
        }

        let timestamp = chrono::Utc::now().timestamp();
        writeln!(
            file,
            "{timestamp},{},{},{}",
            csv_field(&entry.url),
            entry.label,
            csv_field(&entry.notes)
        )
        .with_context(|| format!("Failed to write {}", self.path.display()))?;

        Ok(())
    }

    async fn entry_count(&self) -> Result<u64> {
        if !self.path.exists() {
            return Ok(0);
        }
        let text = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let rows = text.lines().skip(1).filter(|l| !l.trim().is_empty()).count();
        Ok(rows as u64)
    }
}

/// Escape one CSV field. Newlines are flattened to spaces so every row
/// stays a single line; commas and quotes trigger standard quoting.
fn csv_field(value: &str) -> String {
    let flat = value.replace(['\r', '\n'], " ");
    if flat.contains(',') || flat.contains('"') {
        format!("\"{}\"", flat.replace('"', "\"\""))
    } else {
        flat
    }
}

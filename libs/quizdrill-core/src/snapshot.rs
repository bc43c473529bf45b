//! Versioned export and import of the learning history.
//!
//! An import is validated completely before a `Progress` is returned, so a
//! rejected snapshot never reaches the caller's state.

use chrono::Duration;
use serde_json::Value;

use crate::algorithm::sm2::{MAXIMUM_EASE, MAXIMUM_INTERVAL, MINIMUM_EASE};
use crate::error::{Error, Result};
use crate::types::Progress;

/// Snapshot format version written by [`export`] and accepted by [`import`].
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serialize the history to snapshot text.
pub fn export(progress: &Progress) -> Result<String> {
    serde_json::to_string_pretty(progress).map_err(|e| Error::CorruptSnapshot(e.to_string()))
}

/// Parse and validate snapshot text.
pub fn import(text: &str) -> Result<Progress> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| Error::CorruptSnapshot(e.to_string()))?;

    let version = value
        .get("version")
        .and_then(Value::as_u64)
        .ok_or(Error::MissingVersion)?;
    if version != u64::from(SNAPSHOT_VERSION) {
        return Err(Error::UnsupportedVersion(version));
    }

    let progress: Progress =
        serde_json::from_value(value).map_err(|e| Error::CorruptSnapshot(e.to_string()))?;
    check_records(&progress)?;
    Ok(progress)
}

/// Every record must be one the scheduler could have produced and can
/// still reschedule.
fn check_records(progress: &Progress) -> Result<()> {
    for (id, record) in &progress.records {
        if !(MINIMUM_EASE..=MAXIMUM_EASE).contains(&record.ease) {
            return Err(Error::CorruptSnapshot(format!(
                "question {id}: ease {} outside {MINIMUM_EASE}..={MAXIMUM_EASE}",
                record.ease
            )));
        }
        if record.interval > MAXIMUM_INTERVAL {
            return Err(Error::CorruptSnapshot(format!(
                "question {id}: interval {} exceeds {MAXIMUM_INTERVAL} days",
                record.interval
            )));
        }
        if record
            .next_review
            .checked_add_signed(Duration::days(i64::from(MAXIMUM_INTERVAL)))
            .is_none()
        {
            return Err(Error::CorruptSnapshot(format!(
                "question {id}: next review {} out of range",
                record.next_review
            )));
        }
    }
    Ok(())
}

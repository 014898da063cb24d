//! CSV output for collected events, plus the read-back used by `stats`.

use crate::models::ConcertEvent;
use anyhow::{bail, Context, Result};
use std::path::Path;
use tracing::info;

/// Write all events to `path`, header row first, in collection order.
/// Refuses to write a file for an empty run.
pub fn write_events(path: &Path, events: &[ConcertEvent]) -> Result<()> {
    if events.is_empty() {
        bail!("no events collected, refusing to write {:?}", path);
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Could not create dir {:?}", parent))?;
        }
    }

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Could not open {:?} for writing", path))?;

    for event in events {
        writer.serialize(event)?;
    }
    writer.flush()?;

    info!("{} events written to {:?}", events.len(), path);
    Ok(())
}

/// Read a previously written events file back into records.
pub fn read_events(path: &Path) -> Result<Vec<ConcertEvent>> {
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("Could not open {:?}", path))?;

    let mut events = Vec::new();
    for result in reader.deserialize() {
        let event: ConcertEvent = result.with_context(|| format!("Bad row in {:?}", path))?;
        events.push(event);
    }
    Ok(events)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

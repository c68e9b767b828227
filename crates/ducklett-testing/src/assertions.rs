//! Assertions over what ducklett leaves on disk and prints as JSON.

use anyhow::{Context, Result, bail};
use serde_json::Value;

use ducklett_types::APPOINTMENT_KEY;

/// The persisted appointment record, decoded from its storage entry.
pub fn stored_appointment(storage: &Value) -> Result<Option<Value>> {
    let Some(raw) = storage.get(APPOINTMENT_KEY) else {
        return Ok(None);
    };
    let raw = raw
        .as_str()
        .with_context(|| format!("'{}' entry is not a string", APPOINTMENT_KEY))?;
    let record = serde_json::from_str(raw)
        .with_context(|| format!("'{}' entry is not a JSON record", APPOINTMENT_KEY))?;
    Ok(Some(record))
}

/// Assert the storage holds an appointment for `date` at `time`.
pub fn assert_stored_appointment(storage: &Value, date: &str, time: &str) -> Result<()> {
    let record = stored_appointment(storage)?.context("Expected a stored appointment")?;

    if record["date"] != date {
        bail!("Expected stored date {}, got {}", date, record["date"]);
    }
    if record["time"] != time {
        bail!("Expected stored time {}, got {}", time, record["time"]);
    }
    let iso = record["iso"]
        .as_str()
        .context("Stored appointment is missing 'iso'")?;
    if !iso.starts_with(&format!("{}T{}", date, time)) {
        bail!("Stored iso {} does not match {} {}", iso, date, time);
    }

    Ok(())
}

pub fn assert_no_stored_appointment(storage: &Value) -> Result<()> {
    if let Some(record) = stored_appointment(storage)? {
        bail!("Expected no stored appointment, found {}", record);
    }
    Ok(())
}

/// Assert `status --format json` output reports `date` and `time`.
pub fn assert_status_appointment(json: &Value, date: &str, time: &str) -> Result<()> {
    let appointment = json
        .get("appointment")
        .filter(|value| !value.is_null())
        .context("Expected 'appointment' in status JSON")?;

    if appointment["date"] != date || appointment["time"] != time {
        bail!(
            "Expected appointment {} {}, got {} {}",
            date,
            time,
            appointment["date"],
            appointment["time"]
        );
    }

    Ok(())
}

use ducklett_types::{APPOINTMENT_KEY, Appointment, AppointmentRecord, THEME_KEY, ThemePreference};
use tracing::{debug, warn};

use crate::{Error, KeyValueStore, Result};

/// Persistence adapter for the one appointment record and the theme preference.
///
/// Reads are self-healing: a value that does not decode is logged, removed,
/// and reported as absent.
#[derive(Debug)]
pub struct AppointmentStore<S> {
    store: S,
}

impl<S: KeyValueStore> AppointmentStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Write the record, replacing any previous one
    pub fn save(&mut self, appointment: &Appointment) -> Result<()> {
        let raw = serde_json::to_string(&appointment.to_record())?;
        self.store.set(APPOINTMENT_KEY, &raw)?;
        debug!(key = APPOINTMENT_KEY, record = %raw, "saved appointment");
        Ok(())
    }

    pub fn load(&mut self) -> Result<Option<Appointment>> {
        let Some(raw) = self.store.get(APPOINTMENT_KEY)? else {
            return Ok(None);
        };

        match decode_appointment(&raw) {
            Ok(appointment) => Ok(Some(appointment)),
            Err(err) => {
                self.heal(APPOINTMENT_KEY, &err);
                Ok(None)
            }
        }
    }

    pub fn clear(&mut self) -> Result<()> {
        self.store.remove(APPOINTMENT_KEY)?;
        debug!(key = APPOINTMENT_KEY, "cleared appointment");
        Ok(())
    }

    pub fn save_theme(&mut self, theme: ThemePreference) -> Result<()> {
        self.store.set(THEME_KEY, theme.as_str())
    }

    pub fn load_theme(&mut self) -> Result<Option<ThemePreference>> {
        let Some(raw) = self.store.get(THEME_KEY)? else {
            return Ok(None);
        };

        match raw.parse::<ThemePreference>() {
            Ok(theme) => Ok(Some(theme)),
            Err(err) => {
                let err = Error::CorruptRecord {
                    key: THEME_KEY.to_string(),
                    reason: err.to_string(),
                };
                self.heal(THEME_KEY, &err);
                Ok(None)
            }
        }
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    fn heal(&mut self, key: &str, err: &Error) {
        warn!(key, error = %err, "dropping unreadable stored value");
        if let Err(remove_err) = self.store.remove(key) {
            warn!(key, error = %remove_err, "could not remove unreadable stored value");
        }
    }
}

fn decode_appointment(raw: &str) -> Result<Appointment> {
    let corrupt = |reason: String| Error::CorruptRecord {
        key: APPOINTMENT_KEY.to_string(),
        reason,
    };

    let record: AppointmentRecord =
        serde_json::from_str(raw).map_err(|err| corrupt(err.to_string()))?;
    Appointment::from_record(&record).map_err(|err| corrupt(err.to_string()))
}

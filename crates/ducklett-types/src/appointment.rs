use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, SecondsFormat, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::RecordError;

/// Storage key under which the appointment record lives
pub const APPOINTMENT_KEY: &str = "ducklettAppointment";

/// Calendar date layout used by the form and the stored record
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Clock time layout used by the form and the stored record
pub const TIME_FORMAT: &str = "%H:%M";

/// Clock time layout accepted when seconds are present
pub const TIME_FORMAT_SECONDS: &str = "%H:%M:%S";

/// A user-selected instant, kept together with the wall-clock date and time it was picked as.
///
/// The date and time are always derived from the instant's local wall clock,
/// so the three fields can never disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    date: NaiveDate,
    time: NaiveTime,
    instant: DateTime<FixedOffset>,
}

impl Appointment {
    /// Create an appointment from a timezone-resolved instant
    pub fn new(instant: DateTime<FixedOffset>) -> Self {
        let instant = instant.with_nanosecond(0).unwrap_or(instant);
        Self {
            date: instant.date_naive(),
            time: instant.time(),
            instant,
        }
    }

    /// Create an appointment from an instant in any timezone, keeping its offset
    pub fn from_zoned<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        Self::new(instant.fixed_offset())
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn instant(&self) -> DateTime<FixedOffset> {
        self.instant
    }

    /// Convert into the persisted wire shape
    pub fn to_record(&self) -> AppointmentRecord {
        let time_format = if self.time.second() == 0 {
            TIME_FORMAT
        } else {
            TIME_FORMAT_SECONDS
        };

        AppointmentRecord {
            date: self.date.format(DATE_FORMAT).to_string(),
            time: self.time.format(time_format).to_string(),
            iso: self.instant.to_rfc3339_opts(SecondsFormat::Secs, false),
        }
    }

    /// Rebuild an appointment from its persisted wire shape.
    ///
    /// Fails when any field is unparsable or when `iso` points at a different
    /// wall-clock moment than `date` and `time`.
    pub fn from_record(record: &AppointmentRecord) -> Result<Self, RecordError> {
        let date = NaiveDate::parse_from_str(&record.date, DATE_FORMAT)
            .map_err(|_| RecordError::Date(record.date.clone()))?;
        let time = NaiveTime::parse_from_str(&record.time, TIME_FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(&record.time, TIME_FORMAT_SECONDS))
            .map_err(|_| RecordError::Time(record.time.clone()))?;
        let instant = DateTime::parse_from_rfc3339(&record.iso)
            .map_err(|_| RecordError::Iso(record.iso.clone()))?;

        if instant.naive_local() != date.and_time(time) {
            return Err(RecordError::Mismatch {
                wall_clock: format!("{} {}", record.date, record.time),
                iso: record.iso.clone(),
            });
        }

        Ok(Self::new(instant))
    }
}

/// Persisted form of an [`Appointment`]: `{date, time, iso}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentRecord {
    pub date: String,
    pub time: String,
    pub iso: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn madrid() -> FixedOffset {
        FixedOffset::east_opt(2 * 3600).unwrap()
    }

    #[test]
    fn test_fields_follow_instant_wall_clock() {
        let instant = madrid().with_ymd_and_hms(2026, 10, 16, 18, 30, 0).unwrap();
        let appointment = Appointment::new(instant);

        assert_eq!(appointment.date(), NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
        assert_eq!(appointment.time(), NaiveTime::from_hms_opt(18, 30, 0).unwrap());
    }

    #[test]
    fn test_record_shape() {
        let instant = madrid().with_ymd_and_hms(2026, 10, 16, 18, 30, 0).unwrap();
        let record = Appointment::new(instant).to_record();

        insta::assert_snapshot!(
            serde_json::to_string(&record).unwrap(),
            @r#"{"date":"2026-10-16","time":"18:30","iso":"2026-10-16T18:30:00+02:00"}"#
        );
    }

    #[test]
    fn test_record_keeps_seconds_when_present() {
        let instant = madrid().with_ymd_and_hms(2026, 10, 16, 18, 30, 15).unwrap();
        let record = Appointment::new(instant).to_record();

        assert_eq!(record.time, "18:30:15");
        assert_eq!(Appointment::from_record(&record).unwrap().instant(), instant);
    }

    #[test]
    fn test_from_record_round_trip() {
        let instant = madrid().with_ymd_and_hms(2027, 2, 1, 9, 5, 0).unwrap();
        let appointment = Appointment::new(instant);

        let restored = Appointment::from_record(&appointment.to_record()).unwrap();
        assert_eq!(restored, appointment);
    }

    #[test]
    fn test_from_record_rejects_mismatched_iso() {
        let record = AppointmentRecord {
            date: "2026-10-16".to_string(),
            time: "18:30".to_string(),
            iso: "2026-10-16T19:30:00+02:00".to_string(),
        };

        assert!(matches!(
            Appointment::from_record(&record),
            Err(RecordError::Mismatch { .. })
        ));
    }

    #[test]
    fn test_from_record_rejects_bad_fields() {
        let good = AppointmentRecord {
            date: "2026-10-16".to_string(),
            time: "18:30".to_string(),
            iso: "2026-10-16T18:30:00+02:00".to_string(),
        };

        let bad_date = AppointmentRecord {
            date: "2026-02-30".to_string(),
            ..good.clone()
        };
        assert!(matches!(
            Appointment::from_record(&bad_date),
            Err(RecordError::Date(_))
        ));

        let bad_time = AppointmentRecord {
            time: "25:00".to_string(),
            ..good.clone()
        };
        assert!(matches!(
            Appointment::from_record(&bad_time),
            Err(RecordError::Time(_))
        ));

        let bad_iso = AppointmentRecord {
            iso: "yesterday".to_string(),
            ..good
        };
        assert!(matches!(
            Appointment::from_record(&bad_iso),
            Err(RecordError::Iso(_))
        ));
    }
}

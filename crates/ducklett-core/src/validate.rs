use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveTime, TimeZone};
use ducklett_types::{DATE_FORMAT, TIME_FORMAT, TIME_FORMAT_SECONDS, ValidationError};

/// Check that `date` + `time`, read as local wall-clock time, is strictly after `now`.
pub fn validate(
    date: &str,
    time: &str,
    now: &DateTime<Local>,
) -> Result<DateTime<Local>, ValidationError> {
    validate_in(&Local, date, time, now)
}

/// Same as [`validate`] with an explicit timezone.
///
/// Blank inputs are `MissingField`, anything unparsable (including a wall-clock
/// time skipped by a DST jump) is `InvalidFormat`, and an instant that is not
/// strictly later than `now` is `PastOrPresent`. Ambiguous wall-clock times
/// resolve to the earliest instant.
pub fn validate_in<Tz: TimeZone>(
    tz: &Tz,
    date: &str,
    time: &str,
    now: &DateTime<Tz>,
) -> Result<DateTime<Tz>, ValidationError> {
    let date = date.trim();
    let time = time.trim();

    if date.is_empty() || time.is_empty() {
        return Err(ValidationError::MissingField);
    }

    let date = parse_date(date).ok_or(ValidationError::InvalidFormat)?;
    let time = parse_time(time).ok_or(ValidationError::InvalidFormat)?;

    let instant = resolve_wall_clock(tz.from_local_datetime(&date.and_time(time)))
        .ok_or(ValidationError::InvalidFormat)?;

    if instant <= *now {
        return Err(ValidationError::PastOrPresent);
    }

    Ok(instant)
}

/// Pick one instant for a wall-clock time: none in a DST gap, the earlier
/// instant in an overlap. chrono orders an ambiguous pair by offset, so the
/// two are compared as instants here.
fn resolve_wall_clock<Tz: TimeZone>(local: LocalResult<DateTime<Tz>>) -> Option<DateTime<Tz>> {
    match local {
        LocalResult::Single(instant) => Some(instant),
        LocalResult::Ambiguous(first, second) => Some(first.min(second)),
        LocalResult::None => None,
    }
}

/// Parse a `YYYY-MM-DD` calendar date
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Parse an `HH:MM` (or `HH:MM:SS`) clock time
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value, TIME_FORMAT_SECONDS))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset, Utc};

    fn now_utc() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_future_instant_is_accepted() {
        let instant = validate_in(&Utc, "2026-10-17", "18:30", &now_utc()).unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2026, 10, 17, 18, 30, 0).unwrap());
    }

    #[test]
    fn test_seconds_are_accepted() {
        let instant = validate_in(&Utc, "2026-10-16", "12:00:01", &now_utc()).unwrap();
        assert_eq!(instant, now_utc() + Duration::seconds(1));
    }

    #[test]
    fn test_blank_inputs_are_missing() {
        assert_eq!(
            validate_in(&Utc, "", "18:30", &now_utc()),
            Err(ValidationError::MissingField)
        );
        assert_eq!(
            validate_in(&Utc, "2026-10-17", "   ", &now_utc()),
            Err(ValidationError::MissingField)
        );
    }

    #[test]
    fn test_missing_wins_over_invalid() {
        assert_eq!(
            validate_in(&Utc, "garbage", "", &now_utc()),
            Err(ValidationError::MissingField)
        );
    }

    #[test]
    fn test_unreal_dates_are_invalid() {
        for (date, time) in [
            ("2026-02-30", "10:00"),
            ("2026-13-01", "10:00"),
            ("17/10/2026", "10:00"),
            ("2026-10-17", "24:00"),
            ("2026-10-17", "10:60"),
            ("2026-10-17", "half past six"),
            ("2026-10-17T10:00", "10:00"),
        ] {
            assert_eq!(
                validate_in(&Utc, date, time, &now_utc()),
                Err(ValidationError::InvalidFormat),
                "{} {}",
                date,
                time
            );
        }
    }

    #[test]
    fn test_present_is_rejected() {
        assert_eq!(
            validate_in(&Utc, "2026-10-16", "12:00", &now_utc()),
            Err(ValidationError::PastOrPresent)
        );
    }

    #[test]
    fn test_every_past_instant_is_rejected() {
        let now = now_utc();
        for minutes_back in [0i64, 1, 59, 60 * 24, 60 * 24 * 400] {
            let past = now - Duration::minutes(minutes_back);
            let date = past.format("%Y-%m-%d").to_string();
            let time = past.format("%H:%M").to_string();
            assert_eq!(
                validate_in(&Utc, &date, &time, &now),
                Err(ValidationError::PastOrPresent),
                "{} minutes back",
                minutes_back
            );
        }
    }

    #[test]
    fn test_yesterday_at_any_time_is_rejected() {
        for time in ["00:00", "12:00", "23:59"] {
            assert_eq!(
                validate_in(&Utc, "2026-10-15", time, &now_utc()),
                Err(ValidationError::PastOrPresent)
            );
        }
    }

    #[test]
    fn test_wall_clock_is_read_in_given_zone() {
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let now = now_utc().with_timezone(&plus_two);

        // 13:30 at +02:00 is 11:30 UTC, already past
        assert_eq!(
            validate_in(&plus_two, "2026-10-16", "13:30", &now),
            Err(ValidationError::PastOrPresent)
        );
        // 14:30 at +02:00 is 12:30 UTC
        assert!(validate_in(&plus_two, "2026-10-16", "14:30", &now).is_ok());
    }

    #[test]
    fn test_overlap_resolves_to_earlier_instant() {
        // 02:30 on a fall-back night: +02:00 comes first, +01:00 an hour later
        let summer = FixedOffset::east_opt(2 * 3600).unwrap();
        let winter = FixedOffset::east_opt(3600).unwrap();
        let first = summer.with_ymd_and_hms(2027, 10, 31, 2, 30, 0).unwrap();
        let second = winter.with_ymd_and_hms(2027, 10, 31, 2, 30, 0).unwrap();
        assert!(first < second);

        assert_eq!(
            resolve_wall_clock(LocalResult::Ambiguous(second, first)),
            Some(first)
        );
        assert_eq!(
            resolve_wall_clock(LocalResult::Ambiguous(first, second)),
            Some(first)
        );
    }

    #[test]
    fn test_gap_has_no_instant() {
        assert_eq!(resolve_wall_clock::<FixedOffset>(LocalResult::None), None);

        let offset = FixedOffset::east_opt(0).unwrap();
        let single = offset.with_ymd_and_hms(2027, 3, 28, 2, 30, 0).unwrap();
        assert_eq!(resolve_wall_clock(LocalResult::Single(single)), Some(single));
    }

    #[test]
    fn test_parsers_trim() {
        assert_eq!(
            parse_date(" 2026-10-17 "),
            NaiveDate::from_ymd_opt(2026, 10, 17)
        );
        assert_eq!(parse_time("09:05 "), NaiveTime::from_hms_opt(9, 5, 0));
        assert_eq!(parse_time("09:05:01"), NaiveTime::from_hms_opt(9, 5, 1));
    }
}

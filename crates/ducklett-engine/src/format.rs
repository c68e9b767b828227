use chrono::{DateTime, Locale, TimeZone};
use std::fmt;
use tracing::warn;

pub const DEFAULT_LOCALE: &str = "es_ES";

/// A chrono locale plus the full-date and short-time layouts used with it
#[derive(Debug, Clone)]
pub struct DisplayLocale {
    locale: Locale,
    name: String,
    date_pattern: &'static str,
    time_pattern: &'static str,
}

impl DisplayLocale {
    /// Parse a POSIX-style locale name (`es_ES`, `en-US`, ...)
    pub fn parse(name: &str) -> Option<Self> {
        let normalized = name.trim().replace('-', "_");
        let locale = Locale::try_from(normalized.as_str()).ok()?;
        Some(Self::from_locale(locale, &normalized))
    }

    /// Like [`parse`](Self::parse), falling back to Spanish for unknown names
    pub fn resolve(name: &str) -> Self {
        Self::parse(name).unwrap_or_else(|| {
            warn!(locale = name, fallback = DEFAULT_LOCALE, "unknown locale");
            Self::spanish()
        })
    }

    pub fn spanish() -> Self {
        Self::from_locale(Locale::es_ES, DEFAULT_LOCALE)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn from_locale(locale: Locale, name: &str) -> Self {
        let language = name.split('_').next().unwrap_or_default();

        let date_pattern = match (language, name) {
            (_, "en_US") => "%A, %B %-d, %Y",
            ("es" | "pt" | "gl", _) => "%A, %-d de %B de %Y",
            ("de", _) => "%A, %-d. %B %Y",
            ("en", _) => "%A, %-d %B %Y",
            _ => "%A %-d %B %Y",
        };
        let time_pattern = match name {
            "en_US" => "%-I:%M %p",
            _ => "%H:%M",
        };

        Self {
            locale,
            name: name.to_string(),
            date_pattern,
            time_pattern,
        }
    }
}

impl Default for DisplayLocale {
    fn default() -> Self {
        Self::spanish()
    }
}

/// Locale-formatted date and time of an appointment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedAppointment {
    pub date: String,
    pub time: String,
}

impl FormattedAppointment {
    /// Sentence shown in the confirmation panel
    pub fn confirmation_text(&self) -> String {
        format!("Tu cita con Ducklett es el {} a las {}.", self.date, self.time)
    }
}

impl fmt::Display for FormattedAppointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.time)
    }
}

/// Full date plus short time of `instant`, in its own offset
pub fn format<Tz: TimeZone>(instant: &DateTime<Tz>, locale: &DisplayLocale) -> FormattedAppointment
where
    Tz::Offset: fmt::Display,
{
    FormattedAppointment {
        date: instant
            .format_localized(locale.date_pattern, locale.locale)
            .to_string(),
        time: instant
            .format_localized(locale.time_pattern, locale.locale)
            .to_string(),
    }
}

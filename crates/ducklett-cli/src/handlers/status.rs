use std::fmt;

use anyhow::Result;
use chrono::{DateTime, Local};
use ducklett_engine::{DisplayLocale, FormattedAppointment, format};
use ducklett_types::{Appointment, ThemePreference, copy};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::args::OutputFormat;
use crate::context::ExecutionContext;

#[derive(Debug, Serialize)]
pub struct StatusViewModel {
    pub appointment: Option<AppointmentViewModel>,
    pub theme: ThemePreference,
}

#[derive(Debug, Serialize)]
pub struct AppointmentViewModel {
    pub date: String,
    pub time: String,
    pub iso: String,
    pub formatted_date: String,
    pub formatted_time: String,
    /// Still in the future at the time of the query
    pub upcoming: bool,
}

impl StatusViewModel {
    pub fn build(
        appointment: Option<&Appointment>,
        theme: ThemePreference,
        locale: &DisplayLocale,
        now: &DateTime<Local>,
    ) -> Self {
        let appointment = appointment.map(|appointment| {
            let record = appointment.to_record();
            let formatted = format(&appointment.instant(), locale);
            AppointmentViewModel {
                date: record.date,
                time: record.time,
                iso: record.iso,
                formatted_date: formatted.date,
                formatted_time: formatted.time,
                upcoming: appointment.instant() > *now,
            }
        });

        Self { appointment, theme }
    }
}

pub struct StatusView<'a> {
    model: &'a StatusViewModel,
    color: bool,
}

impl<'a> StatusView<'a> {
    pub fn new(model: &'a StatusViewModel, color: bool) -> Self {
        Self { model, color }
    }
}

impl fmt::Display for StatusView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.model.appointment {
            Some(appointment) => {
                let sentence = FormattedAppointment {
                    date: appointment.formatted_date.clone(),
                    time: appointment.formatted_time.clone(),
                }
                .confirmation_text();
                if self.color {
                    write!(f, "{}", sentence.bold().yellow())?;
                } else {
                    write!(f, "{}", sentence)?;
                }
                if !appointment.upcoming {
                    write!(f, " {}", copy::PAST_NOTE)?;
                }
                writeln!(f)?;
                writeln!(f, "  {} {} ({})", appointment.date, appointment.time, appointment.iso)?;
            }
            None => writeln!(f, "{}", copy::NO_APPOINTMENT)?,
        }

        writeln!(f, "{}: {}", copy::THEME_LABEL, self.model.theme)
    }
}

pub fn handle(ctx: &ExecutionContext, format: OutputFormat) -> Result<()> {
    let mut workspace = ctx.open_workspace()?;
    let appointment = workspace.store().load()?;
    let theme = workspace.store().load_theme()?.unwrap_or_default();

    let model = StatusViewModel::build(appointment.as_ref(), theme, &workspace.locale(), &Local::now());

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&model)?),
        OutputFormat::Plain => {
            let color = std::io::stdout().is_terminal();
            print!("{}", StatusView::new(&model, color));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).earliest().unwrap()
    }

    fn booked() -> Appointment {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        Appointment::new(offset.with_ymd_and_hms(2030, 10, 18, 18, 30, 0).unwrap())
    }

    #[test]
    fn test_plain_with_appointment() {
        let model = StatusViewModel::build(
            Some(&booked()),
            ThemePreference::Dark,
            &DisplayLocale::spanish(),
            &now(),
        );

        insta::assert_snapshot!(StatusView::new(&model, false).to_string(), @r"
        Tu cita con Ducklett es el viernes, 18 de octubre de 2030 a las 18:30.
          2030-10-18 18:30 (2030-10-18T18:30:00+02:00)
        Tema: dark
        ");
    }

    #[test]
    fn test_plain_without_appointment() {
        let model =
            StatusViewModel::build(None, ThemePreference::Light, &DisplayLocale::spanish(), &now());

        assert_eq!(
            StatusView::new(&model, false).to_string(),
            format!("{}\nTema: light\n", copy::NO_APPOINTMENT)
        );
    }

    #[test]
    fn test_past_appointment_is_marked() {
        let offset = FixedOffset::east_opt(0).unwrap();
        let past = Appointment::new(offset.with_ymd_and_hms(2020, 1, 1, 9, 0, 0).unwrap());
        let model = StatusViewModel::build(
            Some(&past),
            ThemePreference::Light,
            &DisplayLocale::spanish(),
            &now(),
        );

        assert!(!model.appointment.as_ref().unwrap().upcoming);
        assert!(StatusView::new(&model, false).to_string().contains(copy::PAST_NOTE));
    }

    #[test]
    fn test_json_shape() {
        let model = StatusViewModel::build(
            Some(&booked()),
            ThemePreference::Light,
            &DisplayLocale::spanish(),
            &now(),
        );

        insta::assert_json_snapshot!(model, @r#"
        {
          "appointment": {
            "date": "2030-10-18",
            "time": "18:30",
            "iso": "2030-10-18T18:30:00+02:00",
            "formatted_date": "viernes, 18 de octubre de 2030",
            "formatted_time": "18:30",
            "upcoming": true
          },
          "theme": "light"
        }
        "#);
    }
}

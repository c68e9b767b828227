//! The interaction state machine.
//!
//! Every UI control maps to exactly one `on_*` handler. Handlers never fail:
//! what happened is reported as an [`Outcome`], and problems the visitor
//! should see are kept as inline text on the controller.
//!
//! Time is always passed in. `Instant` drives timers and effects; the
//! wall-clock `DateTime<Local>` is only used to validate a submission.

use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use ducklett_engine::{EffectKind, EffectLayer, FormattedAppointment, Renderer};
use ducklett_store::{AppointmentStore, KeyValueStore};
use ducklett_types::{Appointment, ThemePreference, ValidationError, copy};
use tracing::{debug, info, warn};

use crate::config::{Config, DEFAULT_DECLINE_TIMEOUT_MS};
use crate::timers::{TimerKind, Timers};

/// Yes button pulse after each "no"
pub const YES_PULSE: Duration = Duration::from_millis(1500);

/// Delay before a fully shrunken No button is restored
pub const NO_BUTTON_RESTORE_DELAY: Duration = Duration::from_secs(2);

/// Presses after which the No button gets restored
pub const NO_RESTORE_THRESHOLD: u32 = 7;

const TEARFUL_THRESHOLD: u32 = 3;
const SOBBING_THRESHOLD: u32 = 5;
const SAD_MESSAGE_THRESHOLD: u32 = 3;
const MIN_NO_SCALE: f32 = 0.3;
const NO_SCALE_STEP: f32 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Idle,
    /// Buttons disabled for the decline timeout after a "no"
    Declined,
    Scheduling,
    Confirmed,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Idle => "idle",
            Mode::Declined => "declined",
            Mode::Scheduling => "scheduling",
            Mode::Confirmed => "confirmed",
        }
    }
}

/// What a handler did with the event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// The control is not active in the current mode; nothing changed
    Ignored,
    Invalid(ValidationError),
    /// The change is visible but could not be written to storage
    StorageFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Date,
    Time,
}

impl Field {
    pub fn next(self) -> Self {
        match self {
            Field::Date => Field::Time,
            Field::Time => Field::Date,
        }
    }
}

/// The date/time form shown while scheduling
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub date: String,
    pub time: String,
    pub focus: Field,
    /// Inline error under the form
    pub error: Option<&'static str>,
}

impl FormState {
    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Date => &mut self.date,
            Field::Time => &mut self.time,
        }
    }
}

/// Playful reactions accumulated from "no" presses
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeclineState {
    pub no_count: u32,
    /// Character drawn with the sad filter
    pub sad_tint: bool,
    /// "¡Ducklett está triste!" stays up until yes or reset
    pub sad_message: bool,
    pub yes_pulse: bool,
}

impl DeclineState {
    pub fn no_scale(&self) -> f32 {
        (1.0 - NO_SCALE_STEP * self.no_count as f32).max(MIN_NO_SCALE)
    }

    pub fn no_label(&self) -> &'static str {
        if self.no_count >= SOBBING_THRESHOLD {
            copy::NO_LABEL_SOBBING
        } else if self.no_count >= TEARFUL_THRESHOLD {
            copy::NO_LABEL_TEARFUL
        } else {
            copy::NO_LABEL
        }
    }
}

/// Tunables taken from [`Config`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub decline_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            decline_timeout: Duration::from_millis(DEFAULT_DECLINE_TIMEOUT_MS),
        }
    }
}

impl From<&Config> for Settings {
    fn from(config: &Config) -> Self {
        Self {
            decline_timeout: config.decline_timeout(),
        }
    }
}

pub struct Controller<S> {
    mode: Mode,
    store: AppointmentStore<S>,
    renderer: Renderer,
    settings: Settings,
    timers: Timers,
    effects: EffectLayer,
    form: FormState,
    decline: DeclineState,
    theme: ThemePreference,
    message: &'static str,
    appointment: Option<Appointment>,
    confirmation: Option<FormattedAppointment>,
    notice: Option<&'static str>,
}

impl<S: KeyValueStore> Controller<S> {
    /// Build the start-up view from whatever is in storage.
    ///
    /// A saved appointment goes straight to Confirmed; otherwise the greeting
    /// is shown. Unreadable storage counts as empty.
    pub fn restore(
        store: AppointmentStore<S>,
        renderer: Renderer,
        settings: Settings,
        now: Instant,
    ) -> Self {
        let mut controller = Self {
            mode: Mode::Idle,
            store,
            renderer,
            settings,
            timers: Timers::new(),
            effects: EffectLayer::new(),
            form: FormState::default(),
            decline: DeclineState::default(),
            theme: ThemePreference::default(),
            message: copy::GREETING,
            appointment: None,
            confirmation: None,
            notice: None,
        };

        match controller.store.load_theme() {
            Ok(theme) => controller.theme = theme.unwrap_or_default(),
            Err(err) => warn!(error = %err, "could not read theme preference"),
        }

        match controller.store.load() {
            Ok(Some(appointment)) => {
                info!(iso = %appointment.instant(), "restored appointment");
                controller.confirmation = Some(controller.renderer.format(&appointment));
                controller.appointment = Some(appointment);
                controller.message = copy::ALREADY_BOOKED;
                controller.mode = Mode::Confirmed;
            }
            Ok(None) => {}
            Err(err) => warn!(error = %err, "could not read saved appointment"),
        }

        let ambient = controller.renderer.ambient_bubbles(now);
        controller.effects.extend(ambient);
        controller
    }

    pub fn on_yes(&mut self, now: Instant) -> Outcome {
        if self.mode != Mode::Idle {
            return self.ignored("yes");
        }

        self.renderer.cue(ducklett_engine::SoundCue::Happy);
        self.decline = DeclineState::default();
        self.timers.cancel(TimerKind::NoButtonRestore);
        self.timers.cancel(TimerKind::YesPulse);
        self.form = FormState::default();
        self.message = copy::EXCITED;
        self.transition(Mode::Scheduling, now);
        Outcome::Applied
    }

    pub fn on_no(&mut self, now: Instant) -> Outcome {
        if self.mode != Mode::Idle {
            return self.ignored("no");
        }

        self.decline.no_count += 1;
        self.decline.sad_tint = true;
        self.decline.yes_pulse = true;
        if self.decline.no_count >= SAD_MESSAGE_THRESHOLD {
            self.decline.sad_message = true;
        }
        self.timers.schedule(TimerKind::YesPulse, now + YES_PULSE);
        if self.decline.no_count >= NO_RESTORE_THRESHOLD {
            self.timers
                .schedule(TimerKind::NoButtonRestore, now + NO_BUTTON_RESTORE_DELAY);
        }

        let reaction = self.renderer.decline_reaction(self.decline.no_count, now);
        self.effects.extend(reaction);

        self.timers
            .schedule(TimerKind::DeclineReset, now + self.settings.decline_timeout);
        self.transition(Mode::Declined, now);
        Outcome::Applied
    }

    /// Validate the form against `wall_now` and, if it holds, save and confirm
    pub fn on_submit(&mut self, wall_now: &DateTime<Local>, now: Instant) -> Outcome {
        if self.mode != Mode::Scheduling {
            return self.ignored("submit");
        }

        let instant = match ducklett_core::validate(&self.form.date, &self.form.time, wall_now) {
            Ok(instant) => instant,
            Err(err) => {
                debug!(date = %self.form.date, time = %self.form.time, error = %err, "rejected submission");
                self.form.error = Some(err.user_message());
                return Outcome::Invalid(err);
            }
        };

        let appointment = Appointment::from_zoned(&instant);
        if let Err(err) = self.store.save(&appointment) {
            warn!(error = %err, "could not save appointment");
            self.form.error = Some(copy::SAVE_FAILED);
            return Outcome::StorageFailed;
        }

        info!(iso = %appointment.instant(), "appointment booked");
        self.form.error = None;
        self.confirmation = Some(self.renderer.format(&appointment));
        self.appointment = Some(appointment);
        let celebration = self.renderer.celebrate(now);
        self.effects.extend(celebration);
        self.transition(Mode::Confirmed, now);
        Outcome::Applied
    }

    /// Forget the appointment and start over
    pub fn on_reset(&mut self, now: Instant) -> Outcome {
        if self.mode != Mode::Confirmed {
            return self.ignored("reset");
        }

        if let Err(err) = self.store.clear() {
            warn!(error = %err, "could not clear appointment");
            self.notice = Some(copy::CLEAR_FAILED);
            return Outcome::StorageFailed;
        }

        self.notice = None;
        self.appointment = None;
        self.confirmation = None;
        self.form = FormState::default();
        self.decline = DeclineState::default();
        self.timers.clear();
        self.message = copy::GREETING;
        self.transition(Mode::Idle, now);
        Outcome::Applied
    }

    /// Flip light/dark. Works in every mode.
    pub fn on_toggle_theme(&mut self) -> Outcome {
        self.theme = self.theme.toggled();
        debug!(theme = %self.theme, "theme toggled");

        match self.store.save_theme(self.theme) {
            Ok(()) => Outcome::Applied,
            Err(err) => {
                warn!(error = %err, "could not save theme preference");
                Outcome::StorageFailed
            }
        }
    }

    /// Double-click on the character. Never changes the mode.
    pub fn on_poke(&mut self, now: Instant) -> Outcome {
        self.effects
            .remove_where(|kind| matches!(kind, EffectKind::EasterEgg(_)));
        let egg = self.renderer.easter_egg(now);
        self.effects.push(egg);
        Outcome::Applied
    }

    /// Fire due timers and drop expired effects; returns the timers that fired
    pub fn tick(&mut self, now: Instant) -> Vec<TimerKind> {
        let fired = self.timers.take_due(now);
        for kind in &fired {
            match kind {
                TimerKind::DeclineReset => {
                    if self.mode == Mode::Declined {
                        self.transition(Mode::Idle, now);
                    }
                }
                TimerKind::NoButtonRestore => {
                    self.decline.no_count = 0;
                }
                TimerKind::YesPulse => {
                    self.decline.yes_pulse = false;
                }
            }
        }

        let pruned = self.effects.prune(now);
        if pruned > 0 {
            debug!(pruned, remaining = self.effects.len(), "pruned effects");
        }
        fired
    }

    pub fn input_char(&mut self, c: char) -> Outcome {
        if self.mode != Mode::Scheduling || c.is_control() {
            return Outcome::Ignored;
        }
        self.form.focused_mut().push(c);
        self.form.error = None;
        Outcome::Applied
    }

    pub fn backspace(&mut self) -> Outcome {
        if self.mode != Mode::Scheduling {
            return Outcome::Ignored;
        }
        self.form.focused_mut().pop();
        self.form.error = None;
        Outcome::Applied
    }

    pub fn focus_next(&mut self) -> Outcome {
        if self.mode != Mode::Scheduling {
            return Outcome::Ignored;
        }
        self.form.focus = self.form.focus.next();
        Outcome::Applied
    }

    pub fn focus(&mut self, field: Field) -> Outcome {
        if self.mode != Mode::Scheduling {
            return Outcome::Ignored;
        }
        self.form.focus = field;
        Outcome::Applied
    }

    pub fn set_date(&mut self, date: impl Into<String>) -> Outcome {
        if self.mode != Mode::Scheduling {
            return Outcome::Ignored;
        }
        self.form.date = date.into();
        self.form.error = None;
        Outcome::Applied
    }

    pub fn set_time(&mut self, time: impl Into<String>) -> Outcome {
        if self.mode != Mode::Scheduling {
            return Outcome::Ignored;
        }
        self.form.time = time.into();
        self.form.error = None;
        Outcome::Applied
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Yes and No accept presses
    pub fn buttons_enabled(&self) -> bool {
        self.mode == Mode::Idle
    }

    pub fn shows_sad_indicator(&self) -> bool {
        self.mode == Mode::Declined || self.decline.sad_message
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn decline(&self) -> &DeclineState {
        &self.decline
    }

    pub fn appointment(&self) -> Option<&Appointment> {
        self.appointment.as_ref()
    }

    pub fn confirmation(&self) -> Option<&FormattedAppointment> {
        self.confirmation.as_ref()
    }

    /// Inline storage problem outside the form
    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    pub fn effects(&self) -> &EffectLayer {
        &self.effects
    }

    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    pub fn store(&self) -> &AppointmentStore<S> {
        &self.store
    }

    fn transition(&mut self, to: Mode, now: Instant) {
        let from = self.mode;
        self.mode = to;
        if to != Mode::Declined {
            self.timers.cancel(TimerKind::DeclineReset);
        }
        debug!(from = from.as_str(), to = to.as_str(), at = ?now, "mode change");
    }

    fn ignored(&self, event: &'static str) -> Outcome {
        debug!(event, mode = self.mode.as_str(), "event ignored in current mode");
        Outcome::Ignored
    }
}

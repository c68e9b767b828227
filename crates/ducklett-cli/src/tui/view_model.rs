//! Pure presenter: controller state in, plain data for the views out.

use std::time::{Duration, Instant};

use ducklett_engine::{BubbleTint, EffectKind};
use ducklett_runtime::{Controller, Field, Mode, TimerKind};
use ducklett_store::KeyValueStore;
use ducklett_types::ThemePreference;

/// How long the Yes button stays in each highlight phase while pulsing
const PULSE_PHASE: Duration = Duration::from_millis(250);

pub struct ScreenViewModel {
    pub theme: ThemePreference,
    pub mode: Mode,
    pub message: &'static str,
    pub sad_tint: bool,
    pub sad_indicator: bool,
    pub decision: Option<DecisionViewModel>,
    pub form: Option<FormViewModel>,
    pub confirmation: Option<String>,
    pub notice: Option<&'static str>,
    pub bubbles: Vec<BubbleSprite>,
    pub reactions: Vec<Reaction>,
    pub easter_egg: Option<&'static str>,
}

pub struct DecisionViewModel {
    pub enabled: bool,
    pub no_label: &'static str,
    pub no_scale: f32,
    /// Yes is drawn highlighted in this frame
    pub yes_highlight: bool,
}

pub struct FormViewModel {
    pub date: String,
    pub time: String,
    pub focus: Field,
    pub error: Option<&'static str>,
}

/// A bubble at a relative position; `y` is 0.0 at the bottom, 1.0 at the top
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BubbleSprite {
    pub x: f32,
    pub y: f32,
    pub size: u16,
    pub tint: BubbleTint,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Reaction {
    Message { text: &'static str, x: f32, row: u16 },
    SadDucklett { x: f32, row: u16 },
}

pub fn build_screen_view_model<S: KeyValueStore>(
    controller: &Controller<S>,
    now: Instant,
) -> ScreenViewModel {
    let mode = controller.mode();
    let decline = controller.decline();

    let decision = matches!(mode, Mode::Idle | Mode::Declined).then(|| {
        let yes_highlight = decline.yes_pulse
            && controller
                .timers()
                .deadline(TimerKind::YesPulse)
                .map(|deadline| {
                    let remaining = deadline.saturating_duration_since(now);
                    (remaining.as_millis() / PULSE_PHASE.as_millis()) % 2 == 0
                })
                .unwrap_or(false);

        DecisionViewModel {
            enabled: controller.buttons_enabled(),
            no_label: decline.no_label(),
            no_scale: decline.no_scale(),
            yes_highlight,
        }
    });

    let form = (mode == Mode::Scheduling).then(|| {
        let form = controller.form();
        FormViewModel {
            date: form.date.clone(),
            time: form.time.clone(),
            focus: form.focus,
            error: form.error,
        }
    });

    let confirmation = controller
        .confirmation()
        .filter(|_| mode == Mode::Confirmed)
        .map(|formatted| formatted.confirmation_text());

    let mut bubbles = Vec::new();
    let mut reactions = Vec::new();
    let mut easter_egg = None;
    for effect in controller.effects().iter() {
        match &effect.kind {
            EffectKind::Bubble(bubble) => {
                if let Some(y) = bubble.height_fraction(effect.age(now)) {
                    bubbles.push(BubbleSprite {
                        x: bubble.left_pct / 100.0,
                        y,
                        size: bubble.size,
                        tint: bubble.tint,
                    });
                }
            }
            EffectKind::SadMessage { text, x_frac, row } => reactions.push(Reaction::Message {
                text: *text,
                x: *x_frac,
                row: *row,
            }),
            EffectKind::SadDucklett { x_frac, row } => reactions.push(Reaction::SadDucklett {
                x: *x_frac,
                row: *row,
            }),
            EffectKind::EasterEgg(text) => easter_egg = Some(*text),
        }
    }

    ScreenViewModel {
        theme: controller.theme(),
        mode,
        message: controller.message(),
        sad_tint: decline.sad_tint,
        sad_indicator: controller.shows_sad_indicator(),
        decision,
        form,
        confirmation,
        notice: controller.notice(),
        bubbles,
        reactions,
        easter_egg,
    }
}

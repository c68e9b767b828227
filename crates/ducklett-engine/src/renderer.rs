use std::ops::RangeInclusive;
use std::time::{Duration, Instant};

use ducklett_types::{Appointment, copy};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::audio::{Chime, SoundCue};
use crate::effects::{
    AMBIENT_BUBBLES, Bubble, BubbleTint, CELEBRATION_BUBBLES, CELEBRATION_TTL, EASTER_EGG_TTL,
    Effect, EffectKind, SAD_DUCKLETT_TTL, SAD_MESSAGE_TTL,
};
use crate::format::{DisplayLocale, FormattedAppointment, format};

const SAD_MESSAGES_PER_DECLINE: usize = 2;

/// Rows above the decision buttons where decline reactions float
const REACTION_ROWS: u16 = 4;

struct BubbleShape {
    size: RangeInclusive<u16>,
    delay_ms: RangeInclusive<u64>,
    rise_ms: RangeInclusive<u64>,
    tint: BubbleTint,
}

const CELEBRATION_SHAPE: BubbleShape = BubbleShape {
    size: 5..=25,
    delay_ms: 0..=2_000,
    rise_ms: 5_000..=10_000,
    tint: BubbleTint::Gold,
};

const AMBIENT_SHAPE: BubbleShape = BubbleShape {
    size: 10..=40,
    delay_ms: 0..=10_000,
    rise_ms: 10_000..=20_000,
    tint: BubbleTint::Water,
};

/// Turns appointments into text and interactions into effects.
///
/// Owns the randomness and the sound capability so callers stay deterministic
/// under test: build it with [`Renderer::with_seed`] and a fake [`Chime`].
pub struct Renderer {
    locale: DisplayLocale,
    rng: StdRng,
    chime: Box<dyn Chime>,
}

impl Renderer {
    pub fn new(locale: DisplayLocale, chime: Box<dyn Chime>) -> Self {
        Self {
            locale,
            rng: StdRng::from_os_rng(),
            chime,
        }
    }

    pub fn with_seed(locale: DisplayLocale, chime: Box<dyn Chime>, seed: u64) -> Self {
        Self {
            locale,
            rng: StdRng::seed_from_u64(seed),
            chime,
        }
    }

    pub fn locale(&self) -> &DisplayLocale {
        &self.locale
    }

    pub fn format(&self, appointment: &Appointment) -> FormattedAppointment {
        format(&appointment.instant(), &self.locale)
    }

    /// Gold bubbles for a confirmed appointment; each one lives [`CELEBRATION_TTL`]
    pub fn celebrate(&mut self, now: Instant) -> Vec<Effect> {
        self.cue(SoundCue::Celebration);
        (0..CELEBRATION_BUBBLES)
            .map(|_| {
                let bubble = self.bubble(&CELEBRATION_SHAPE);
                Effect::ephemeral(EffectKind::Bubble(bubble), now, CELEBRATION_TTL)
            })
            .collect()
    }

    /// Background bubbles that never expire
    pub fn ambient_bubbles(&mut self, now: Instant) -> Vec<Effect> {
        (0..AMBIENT_BUBBLES)
            .map(|_| Effect::ambient(EffectKind::Bubble(self.bubble(&AMBIENT_SHAPE)), now))
            .collect()
    }

    /// Floating reactions to the `no_count`-th "no"
    pub fn decline_reaction(&mut self, no_count: u32, now: Instant) -> Vec<Effect> {
        self.cue(SoundCue::Sad);

        let mut effects = Vec::with_capacity(SAD_MESSAGES_PER_DECLINE + 1);
        for _ in 0..SAD_MESSAGES_PER_DECLINE {
            let text = copy::SAD_MESSAGES
                .choose(&mut self.rng)
                .copied()
                .unwrap_or(copy::SAD_INDICATOR);
            let kind = EffectKind::SadMessage {
                text,
                x_frac: self.rng.random_range(0.1..0.9),
                row: self.rng.random_range(0..REACTION_ROWS),
            };
            effects.push(Effect::ephemeral(kind, now, SAD_MESSAGE_TTL));
        }

        if no_count > 0 && no_count % 2 == 0 {
            let kind = EffectKind::SadDucklett {
                x_frac: self.rng.random_range(0.1..0.9),
                row: self.rng.random_range(0..REACTION_ROWS),
            };
            effects.push(Effect::ephemeral(kind, now, SAD_DUCKLETT_TTL));
        }

        effects
    }

    pub fn easter_egg(&self, now: Instant) -> Effect {
        Effect::ephemeral(EffectKind::EasterEgg(copy::EASTER_EGG), now, EASTER_EGG_TTL)
    }

    /// Play a sound if possible; failures are logged and dropped
    pub fn cue(&mut self, cue: SoundCue) {
        if let Err(err) = self.chime.play(cue) {
            debug!(cue = cue.as_str(), error = %err, "sound cue skipped");
        }
    }

    fn bubble(&mut self, shape: &BubbleShape) -> Bubble {
        Bubble {
            size: self.rng.random_range(shape.size.clone()),
            left_pct: self.rng.random_range(0.0..=100.0),
            delay: Duration::from_millis(self.rng.random_range(shape.delay_ms.clone())),
            rise: Duration::from_millis(self.rng.random_range(shape.rise_ms.clone())),
            tint: shape.tint,
        }
    }
}

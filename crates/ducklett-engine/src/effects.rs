//! Decorative, self-expiring visual effects.
//!
//! Each effect records when it was born and, for ephemeral ones, how long it
//! lives. The owner calls [`EffectLayer::prune`] with its own clock; nothing
//! here reads the time.

use std::time::{Duration, Instant};

pub const AMBIENT_BUBBLES: usize = 15;
pub const CELEBRATION_BUBBLES: usize = 30;
pub const CELEBRATION_TTL: Duration = Duration::from_secs(15);
pub const SAD_MESSAGE_TTL: Duration = Duration::from_secs(3);
pub const SAD_DUCKLETT_TTL: Duration = Duration::from_secs(4);
pub const EASTER_EGG_TTL: Duration = Duration::from_millis(2500);

/// Upper bound on live ephemeral effects; the oldest are dropped first
pub const MAX_EPHEMERAL: usize = 96;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BubbleTint {
    Water,
    Gold,
}

/// A bubble rising from the bottom of the page, looping every `rise`
#[derive(Debug, Clone, PartialEq)]
pub struct Bubble {
    pub size: u16,
    /// Horizontal position, 0.0..=100.0
    pub left_pct: f32,
    pub delay: Duration,
    pub rise: Duration,
    pub tint: BubbleTint,
}

impl Bubble {
    /// How far up the bubble is (0.0 bottom, 1.0 top), or `None` while still delayed
    pub fn height_fraction(&self, age: Duration) -> Option<f32> {
        let travelled = age.checked_sub(self.delay)?;
        if self.rise.is_zero() {
            return Some(1.0);
        }
        let cycle = travelled.as_secs_f32() % self.rise.as_secs_f32();
        Some(cycle / self.rise.as_secs_f32())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EffectKind {
    Bubble(Bubble),
    /// Floating sad text near the decision buttons
    SadMessage {
        text: &'static str,
        x_frac: f32,
        row: u16,
    },
    /// Small crying Ducklett near the decision buttons
    SadDucklett { x_frac: f32, row: u16 },
    /// Reply to poking the character
    EasterEgg(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Effect {
    pub kind: EffectKind,
    pub born: Instant,
    /// `None` lives until the layer is cleared
    pub ttl: Option<Duration>,
}

impl Effect {
    pub fn ephemeral(kind: EffectKind, born: Instant, ttl: Duration) -> Self {
        Self {
            kind,
            born,
            ttl: Some(ttl),
        }
    }

    pub fn ambient(kind: EffectKind, born: Instant) -> Self {
        Self {
            kind,
            born,
            ttl: None,
        }
    }

    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.born)
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.ttl.is_some_and(|ttl| self.age(now) >= ttl)
    }

    pub fn is_ephemeral(&self) -> bool {
        self.ttl.is_some()
    }
}

#[derive(Debug, Clone, Default)]
pub struct EffectLayer {
    effects: Vec<Effect>,
}

impl EffectLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, effect: Effect) {
        self.effects.push(effect);
        self.enforce_bound();
    }

    pub fn extend(&mut self, effects: impl IntoIterator<Item = Effect>) {
        self.effects.extend(effects);
        self.enforce_bound();
    }

    /// Drop expired effects, returning how many were removed
    pub fn prune(&mut self, now: Instant) -> usize {
        let before = self.effects.len();
        self.effects.retain(|effect| !effect.is_expired(now));
        before - self.effects.len()
    }

    pub fn remove_where(&mut self, mut predicate: impl FnMut(&EffectKind) -> bool) {
        self.effects.retain(|effect| !predicate(&effect.kind));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Effect> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn ephemeral_count(&self) -> usize {
        self.effects.iter().filter(|e| e.is_ephemeral()).count()
    }

    fn enforce_bound(&mut self) {
        let mut excess = self.ephemeral_count().saturating_sub(MAX_EPHEMERAL);
        if excess == 0 {
            return;
        }
        // effects are pushed in time order, so the first ephemeral ones are the oldest
        self.effects.retain(|effect| {
            if excess > 0 && effect.is_ephemeral() {
                excess -= 1;
                false
            } else {
                true
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(born: Instant) -> Effect {
        Effect::ephemeral(
            EffectKind::SadMessage {
                text: "¡Esto duele!",
                x_frac: 0.5,
                row: 0,
            },
            born,
            SAD_MESSAGE_TTL,
        )
    }

    #[test]
    fn test_prune_removes_only_expired() {
        let t0 = Instant::now();
        let mut layer = EffectLayer::new();
        layer.push(message(t0));
        layer.push(Effect::ambient(EffectKind::EasterEgg("hola"), t0));

        assert_eq!(layer.prune(t0 + Duration::from_secs(1)), 0);
        assert_eq!(layer.prune(t0 + SAD_MESSAGE_TTL), 1);
        assert_eq!(layer.len(), 1);
        assert_eq!(layer.prune(t0 + Duration::from_secs(3600)), 0);
    }

    #[test]
    fn test_ephemeral_effects_are_bounded() {
        let t0 = Instant::now();
        let mut layer = EffectLayer::new();
        layer.push(Effect::ambient(EffectKind::EasterEgg("ambient"), t0));
        for i in 0..(MAX_EPHEMERAL + 10) {
            layer.push(message(t0 + Duration::from_millis(i as u64)));
        }

        assert_eq!(layer.ephemeral_count(), MAX_EPHEMERAL);
        assert_eq!(layer.len(), MAX_EPHEMERAL + 1);
        // the oldest ephemeral ones went first
        let oldest = layer.iter().filter(|e| e.is_ephemeral()).next().unwrap();
        assert_eq!(oldest.born, t0 + Duration::from_millis(10));
    }

    #[test]
    fn test_bubble_height_loops() {
        let bubble = Bubble {
            size: 10,
            left_pct: 50.0,
            delay: Duration::from_secs(1),
            rise: Duration::from_secs(10),
            tint: BubbleTint::Water,
        };

        assert_eq!(bubble.height_fraction(Duration::from_millis(500)), None);
        assert_eq!(bubble.height_fraction(Duration::from_secs(1)), Some(0.0));
        let halfway = bubble.height_fraction(Duration::from_secs(6)).unwrap();
        assert!((halfway - 0.5).abs() < 1e-4);
        let looped = bubble.height_fraction(Duration::from_secs(16)).unwrap();
        assert!((looped - 0.5).abs() < 1e-4);
    }
}

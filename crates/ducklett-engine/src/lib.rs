// Appointment rendering
// Formatting is pure; effects carry their own lifetimes and are pruned by the caller's clock

pub mod audio;
pub mod effects;
mod format;
mod renderer;

pub use audio::{AudioError, Chime, Silent, SoundCue, TerminalBell};
pub use effects::{Bubble, BubbleTint, Effect, EffectKind, EffectLayer};
pub use format::{DEFAULT_LOCALE, DisplayLocale, FormattedAppointment, format};
pub use renderer::Renderer;

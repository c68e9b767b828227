pub mod config;
pub mod controller;
pub mod error;
pub mod timers;
pub mod workspace;

pub use config::Config;
pub use controller::{Controller, DeclineState, Field, FormState, Mode, Outcome, Settings};
pub use error::{Error, Result};
pub use timers::{TimerKind, Timers};
pub use workspace::Workspace;

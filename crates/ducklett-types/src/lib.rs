pub mod appointment;
pub mod copy;
pub mod error;
pub mod theme;

pub use appointment::*;
pub use error::{RecordError, ValidationError};
pub use theme::*;

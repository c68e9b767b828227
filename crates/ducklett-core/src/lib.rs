pub mod clock;
pub mod path;
mod validate;

pub use clock::{Clock, FixedClock, SystemClock};
pub use validate::{parse_date, parse_time, validate, validate_in};

// Key-value persistence
// Same contract as browser localStorage: string keys, string values, last write wins

mod appointments;
mod error;
mod file;
mod kv;
mod memory;

pub use appointments::AppointmentStore;
pub use error::{Error, Result};
pub use file::FileStore;
pub use kv::KeyValueStore;
pub use memory::MemoryStore;

//! Process boundary.
//!
//! Spawning the external tool is the only world-touching operation in this crate. It goes
//! through [`ProcessOps`] so callers can swap [`SystemHal`] for the recording [`FakeHal`].

pub mod fake_hal;
pub mod process_ops;
pub mod system_hal;

pub use fake_hal::{FakeHal, Operation};
pub use process_ops::{ProcessOps, Streams};
pub use system_hal::SystemHal;

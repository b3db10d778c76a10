//! robocmd core library.
//!
//! `robocmd-core` sits between the option model in `robocmd-hal` and the binary: it
//! loads job profiles from TOML, checks switch combinations the tool would reject, and
//! sets up logging.

pub mod errors;
pub mod logging;
pub mod profile;
pub mod validation;

pub use errors::{Result, RoboError};
pub use profile::{load_profile, parse_profile, render_profile, Profile};
pub use validation::{ensure_valid, validate, Finding};

pub mod codec;
pub mod error;
pub mod mode;
pub mod options;

pub use error::{Error, Result};
pub use mode::{TombstoneGcMode, mode_name};
pub use options::{DEFAULT_MODE, DEFAULT_PROPAGATION_DELAY, TombstoneGcOptions};

pub mod config;
pub mod directory;
pub mod error;
pub mod types;

pub use config::CareFindConfig;
pub use directory::Directory;
pub use error::{CareFindError, Result};
pub use types::*;

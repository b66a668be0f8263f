pub mod types;
pub mod error;
pub mod config;
pub mod holidays;
pub mod countdown;
pub mod time;
pub mod utils;

pub use types::*;
pub use error::{CountdownError, Result};

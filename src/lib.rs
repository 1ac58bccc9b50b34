pub mod client;
pub mod config;
pub mod directory;
pub mod error;
pub mod export;
pub mod models;

pub use error::{AppError, Result};

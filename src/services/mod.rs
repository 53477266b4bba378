// Service exports
pub mod loader;

pub use loader::{RequestLoader, LoaderError};

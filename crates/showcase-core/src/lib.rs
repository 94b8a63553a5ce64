pub mod command;
pub mod config;
pub mod entry;
pub mod error;
pub mod io;
pub mod paths;
pub mod service;
pub mod store;

pub use error::{CatalogError, Result};

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod gateway;
pub mod server;
pub mod translator;

pub use error::{Error, Result};

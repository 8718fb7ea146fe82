pub mod cli;
pub mod codec;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod locator;
pub mod logging;
pub mod runner;
pub mod tag_manager;
pub mod ui;

pub use error::{BumpError, Result};

pub mod classifier;
pub mod config;
pub mod conventional;
pub mod domain;
pub mod error;
pub mod fetcher;
pub mod pipeline;
pub mod remote;
pub mod renderer;
pub mod resolver;
pub mod ui;

pub use error::{ChangelogError, Result};

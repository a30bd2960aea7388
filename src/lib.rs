pub mod classifier;
pub mod cli;
pub mod completion;
pub mod config;
pub mod engine;
pub mod error;
pub mod index;
pub mod page_range;
pub mod prompt;
pub mod report;
pub mod splitter;
pub mod util;

pub use error::{Error, Result};

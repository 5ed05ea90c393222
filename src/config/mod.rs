//! Config file handling

mod config;

pub use config::{merge_default_options, Config, CONFIG_DIR_ENV, CONFIG_FILE};

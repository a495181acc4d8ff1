//! inistore — minimal INI configuration reader/writer.
//!
//! Hexagonal layout: the model, parser and serializer live in [`domain`], the
//! read-side trait in [`ports`], and file-system access in [`adapters`].

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod ports;

pub use adapters::file_config_adapter::FileConfigAdapter;
pub use domain::error::IniError;
pub use domain::store::{ConfigStore, Section};
pub use ports::config_port::ConfigPort;

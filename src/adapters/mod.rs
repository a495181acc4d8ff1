//! Concrete adapters between the domain and the file system.

pub mod file_config_adapter;

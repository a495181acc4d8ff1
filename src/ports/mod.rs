//! Port traits through which callers read configuration.

pub mod config_port;

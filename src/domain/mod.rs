//! Core INI model, parsing, serialization and value conversion.

pub mod convert;
pub mod error;
pub mod parser;
pub mod serializer;
pub mod store;

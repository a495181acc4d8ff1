//! Configuration access port trait.
//!
//! Implementors provide a single raw lookup; every typed getter is derived
//! from [`ConfigPort::get_string`] and falls back to the supplied default on a
//! missing scope, a missing key or an unparsable value alike.

use std::str::FromStr;

use crate::domain::convert::{parse_bool_or, parse_or};

pub trait ConfigPort {
    /// Raw value of `key` in the top-level scope (`None`) or in `section`.
    fn lookup(&self, key: &str, section: Option<&str>) -> Option<&str>;

    fn get_string(&self, key: &str, default: &str, section: Option<&str>) -> String {
        self.lookup(key, section).unwrap_or(default).to_string()
    }

    /// `true`/`false` in any case, else any nonzero integer.
    fn get_bool(&self, key: &str, default: bool, section: Option<&str>) -> bool {
        parse_bool_or(self.lookup(key, section), default)
    }

    fn get_i8(&self, key: &str, default: i8, section: Option<&str>) -> i8 {
        parse_or(self.lookup(key, section), default)
    }

    fn get_u8(&self, key: &str, default: u8, section: Option<&str>) -> u8 {
        parse_or(self.lookup(key, section), default)
    }

    fn get_i16(&self, key: &str, default: i16, section: Option<&str>) -> i16 {
        parse_or(self.lookup(key, section), default)
    }

    fn get_u16(&self, key: &str, default: u16, section: Option<&str>) -> u16 {
        parse_or(self.lookup(key, section), default)
    }

    fn get_i32(&self, key: &str, default: i32, section: Option<&str>) -> i32 {
        parse_or(self.lookup(key, section), default)
    }

    fn get_u32(&self, key: &str, default: u32, section: Option<&str>) -> u32 {
        parse_or(self.lookup(key, section), default)
    }

    fn get_i64(&self, key: &str, default: i64, section: Option<&str>) -> i64 {
        parse_or(self.lookup(key, section), default)
    }

    fn get_u64(&self, key: &str, default: u64, section: Option<&str>) -> u64 {
        parse_or(self.lookup(key, section), default)
    }

    fn get_f32(&self, key: &str, default: f32, section: Option<&str>) -> f32 {
        parse_or(self.lookup(key, section), default)
    }

    fn get_f64(&self, key: &str, default: f64, section: Option<&str>) -> f64 {
        parse_or(self.lookup(key, section), default)
    }

    /// Key-only shorthand: top-level scope, `T::default()` as the fallback.
    ///
    /// Goes through `FromStr` on the trimmed value, so `bool` gets no integer
    /// fallback here and `String` comes back trimmed. Use [`get_bool`] and
    /// [`get_string`] for those.
    ///
    /// [`get_bool`]: ConfigPort::get_bool
    /// [`get_string`]: ConfigPort::get_string
    fn get_value<T>(&self, key: &str) -> T
    where
        Self: Sized,
        T: FromStr + Default,
    {
        parse_or(self.lookup(key, None), T::default())
    }
}

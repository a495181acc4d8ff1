#![allow(dead_code)]

use inistore::ConfigStore;
use inistore::ports::config_port::ConfigPort;
use proptest::prelude::*;
use std::collections::HashMap;
use std::io::Write;

pub const SCENARIO_INI: &str = "top=1
[alpha]
x=10
y=20
[beta]
x=99
";

pub fn write_temp_ini(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// In-memory port with a fixed set of raw values, keyed by `(section, key)`.
pub struct MockConfigPort {
    pub values: HashMap<(Option<String>, String), String>,
}

impl MockConfigPort {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    pub fn with(mut self, section: Option<&str>, key: &str, value: &str) -> Self {
        self.values.insert(
            (section.map(str::to_string), key.to_string()),
            value.to_string(),
        );
        self
    }
}

impl ConfigPort for MockConfigPort {
    fn lookup(&self, key: &str, section: Option<&str>) -> Option<&str> {
        self.values
            .get(&(section.map(str::to_string), key.to_string()))
            .map(String::as_str)
    }
}

/// Keys that survive a write/read cycle: no `=`, brackets, newlines, and no
/// leading `;`.
pub fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_. :/-]{0,10}"
}

pub fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_. :/;,-]{0,16}"
}

pub fn section_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[a-zA-Z0-9_. -]{0,8}")
}

/// A store built only through `set_string`.
pub fn store_strategy() -> impl Strategy<Value = ConfigStore> {
    prop::collection::vec(
        (section_strategy(), key_strategy(), value_strategy()),
        0..24,
    )
    .prop_map(|writes| {
        let mut store = ConfigStore::new();
        for (section, key, value) in writes {
            store.set_string(key, value, section.as_deref());
        }
        store
    })
}

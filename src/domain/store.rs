//! In-memory INI model: ungrouped top-level entries plus named sections.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt::Display;
use std::io::BufRead;

use tracing::warn;

use crate::domain::error::IniError;
use crate::domain::parser;
use crate::ports::config_port::ConfigPort;

/// A named group of `key=value` entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    entries: BTreeMap<String, String>,
}

impl Section {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Insert or overwrite; the last write wins.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> Entries<'_> {
        Entries(self.entries.iter())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Iterator over `(key, value)` pairs of one scope.
#[derive(Debug, Clone)]
pub struct Entries<'a>(btree_map::Iter<'a, String, String>);

impl<'a> Iterator for Entries<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

/// Parsed INI document.
///
/// Lookups never create anything: reading from a section that does not exist
/// returns the default. Writes create the section on first use, and a section
/// once created lives as long as the store. `Clone` is a deep copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigStore {
    entries: Section,
    sections: BTreeMap<String, Section>,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a stream, resetting to an empty store if the stream fails midway.
    ///
    /// This never fails. Use [`ConfigStore::try_from_reader`] to observe the
    /// underlying read error.
    pub fn from_reader<R: BufRead>(reader: R) -> Self {
        let mut store = Self::new();
        if let Err(err) = parser::parse_into(reader, &mut store) {
            warn!(%err, "discarding partially parsed config");
            store.clear();
        }
        store
    }

    /// Parse a stream, returning the read error instead of an empty store.
    pub fn try_from_reader<R: BufRead>(reader: R) -> Result<Self, IniError> {
        let mut store = Self::new();
        parser::parse_into(reader, &mut store)?;
        Ok(store)
    }

    pub fn parse_str(text: &str) -> Self {
        Self::from_reader(text.as_bytes())
    }

    /// Insert or overwrite `key` in the top-level scope or in `section`,
    /// creating the section if needed.
    pub fn set_string(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
        section: Option<&str>,
    ) {
        self.scope_mut(section).insert(key, value);
    }

    /// Store any displayable value by its textual form.
    pub fn set_value<T: Display>(
        &mut self,
        key: impl Into<String>,
        value: T,
        section: Option<&str>,
    ) {
        self.set_string(key, value.to_string(), section);
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(name, section)| (name.as_str(), section))
    }

    /// Top-level (ungrouped) entries.
    pub fn entries(&self) -> Entries<'_> {
        self.entries.iter()
    }

    pub fn contains_key(&self, key: &str, section: Option<&str>) -> bool {
        self.lookup(key, section).is_some()
    }

    /// True when there are no top-level entries and no sections.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.sections.is_empty()
    }

    /// Drop every entry and every section.
    pub fn clear(&mut self) {
        self.entries.clear();
        for section in self.sections.values_mut() {
            section.clear();
        }
        self.sections.clear();
    }

    fn scope_mut(&mut self, section: Option<&str>) -> &mut Section {
        match section {
            None => &mut self.entries,
            Some(name) => self.sections.entry(name.to_string()).or_default(),
        }
    }
}

impl ConfigPort for ConfigStore {
    fn lookup(&self, key: &str, section: Option<&str>) -> Option<&str> {
        match section {
            None => self.entries.get(key),
            Some(name) => self.sections.get(name)?.get(key),
        }
    }
}

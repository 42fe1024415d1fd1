use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Old token → generated name, ordered by old token
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenMapping {
    entries: BTreeMap<String, String>,
}

impl TokenMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, token: String, name: String) {
        self.entries.insert(token, name);
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    pub fn contains_key(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Whether no two tokens were given the same name
    pub fn values_are_unique(&self) -> bool {
        let values: BTreeSet<&String> = self.entries.values().collect();
        values.len() == self.entries.len()
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a TokenMapping {
    type Item = (&'a String, &'a String);
    type IntoIter = std::collections::btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(String, String)> for TokenMapping {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

//! Prefix index over cleaned location names.
//!
//! Names are stored in their cleaned form (see [`clean_string`]) and map
//! to every [`LocationRecord`] carrying that name, so "Top Dog" and
//! "top dog!" land on the same key.

use std::collections::BTreeMap;

use crate::types::location::LocationRecord;

/// Keeps ASCII letters and spaces, lowercased. Everything else is
/// dropped.
pub fn clean_string(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[derive(Debug, Default)]
struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    locations: Vec<LocationRecord>,
}

/// A trie from cleaned names to location records.
///
/// Children are ordered, so prefix results come back sorted by cleaned
/// name.
#[derive(Debug, Default)]
pub struct LocationTrie {
    root: TrieNode,
    len: usize,
}

impl LocationTrie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Files `location` under an already cleaned key.
    pub fn add_location(&mut self, key: &str, location: LocationRecord) {
        let mut node = &mut self.root;
        for c in key.chars() {
            node = node.children.entry(c).or_default();
        }
        node.locations.push(location);
        self.len += 1;
    }

    /// Records stored under exactly `key`.
    pub fn get_locations(&self, key: &str) -> &[LocationRecord] {
        self.find(key)
            .map(|node| node.locations.as_slice())
            .unwrap_or_default()
    }

    /// Original names of every record whose cleaned key starts with
    /// `prefix`.
    pub fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut names = Vec::new();
        if let Some(node) = self.find(prefix) {
            collect(node, &mut names);
        }
        names
    }

    fn find(&self, key: &str) -> Option<&TrieNode> {
        key.chars()
            .try_fold(&self.root, |node, c| node.children.get(&c))
    }
}

fn collect(node: &TrieNode, names: &mut Vec<String>) {
    names.extend(node.locations.iter().map(|l| l.name.clone()));
    for child in node.children.values() {
        collect(child, names);
    }
}

//! Sorted object-record storage for one bucket.
//!
//! [`ObjectIndex`] keeps records in a `BTreeMap` so keys are always in
//! lexicographic order, which makes listings stable and deterministic and
//! gives markers/pagination their S3 semantics for free.

use std::collections::HashSet;

use super::object::MockObject;

/// Result of a listing walk over the index.
#[derive(Debug, Clone)]
pub struct ListOutcome {
    /// The records that matched the listing criteria, in key order.
    pub records: Vec<MockObject>,
    /// Key prefixes grouped by the delimiter, in first-seen order.
    pub common_prefixes: Vec<String>,
    /// Whether the walk stopped at `max_keys` with keys remaining.
    pub is_truncated: bool,
    /// The last returned key, usable as the next page's marker.
    pub next_marker: Option<String>,
}

/// Object records for one bucket, sorted by key.
#[derive(Debug, Default)]
pub struct ObjectIndex {
    objects: std::collections::BTreeMap<String, MockObject>,
}

impl ObjectIndex {
    /// Insert or replace a record. Returns the previous record if any.
    pub fn put(&mut self, object: MockObject) -> Option<MockObject> {
        self.objects.insert(object.key.clone(), object)
    }

    /// Get a record by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&MockObject> {
        self.objects.get(key)
    }

    /// Whether a record exists for the key.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.objects.contains_key(key)
    }

    /// Remove a record by key. Returns the removed record if any.
    pub fn delete(&mut self, key: &str) -> Option<MockObject> {
        self.objects.remove(key)
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the index is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Walk the index applying prefix, delimiter, start-after, and max-keys
    /// semantics.
    ///
    /// Keys at or before `start_after` are skipped; keys not matching
    /// `prefix` are skipped; when `delimiter` is non-empty, keys containing
    /// the delimiter after the prefix are rolled up into common prefixes
    /// instead of being returned. The walk stops once `max_keys` records
    /// have been collected, marking the outcome truncated.
    #[must_use]
    pub fn list(
        &self,
        prefix: &str,
        delimiter: &str,
        start_after: &str,
        max_keys: usize,
    ) -> ListOutcome {
        let use_delim = !delimiter.is_empty();
        let mut records: Vec<MockObject> = Vec::new();
        let mut common_prefixes: Vec<String> = Vec::new();
        let mut seen_prefixes = HashSet::new();
        let mut is_truncated = false;

        for obj in self.objects.values() {
            if !start_after.is_empty() && obj.key.as_str() <= start_after {
                continue;
            }

            if !prefix.is_empty() && !obj.key.starts_with(prefix) {
                continue;
            }

            if use_delim {
                let after_prefix = &obj.key[prefix.len()..];
                if let Some(pos) = after_prefix.find(delimiter) {
                    let cp = format!("{}{}{}", prefix, &after_prefix[..pos], delimiter);
                    if seen_prefixes.insert(cp.clone()) {
                        common_prefixes.push(cp);
                    }
                    continue;
                }
            }

            if records.len() >= max_keys {
                is_truncated = true;
                break;
            }

            records.push(obj.clone());
        }

        let next_marker = if is_truncated {
            records.last().map(|o| o.key.clone())
        } else {
            None
        };

        ListOutcome {
            records,
            common_prefixes,
            is_truncated,
            next_marker,
        }
    }
}

use indexmap::map::Iter;
use indexmap::IndexMap;

use super::record::OpenRecord;

/// Directive lines grouped by category. Both the categories and the lines
/// within each category keep the order in which they were first seen.
#[derive(Debug, Default)]
pub struct Book {
    groups: IndexMap<String, Vec<String>>,
}

impl Book {
    pub fn new() -> Book {
        Book {
            groups: IndexMap::new(),
        }
    }

    /// Appends the record's directive to its category bucket.
    pub fn add(&mut self, record: &OpenRecord) {
        self.groups
            .entry(record.category().clone())
            .or_default()
            .push(record.directive());
    }

    pub fn groups_iter(&self) -> Iter<'_, String, Vec<String>> {
        self.groups.iter()
    }

    pub fn lines(&self, category: &str) -> Option<&Vec<String>> {
        self.groups.get(category)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

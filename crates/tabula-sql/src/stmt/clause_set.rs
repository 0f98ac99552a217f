use super::Value;

use indexmap::IndexMap;

/// Column name to bind value, in insertion order.
///
/// Column lists and placeholder lists are both produced by walking this set,
/// so they always line up.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ClauseSet {
    values: IndexMap<String, Value>,
}

impl ClauseSet {
    pub fn new() -> ClauseSet {
        ClauseSet::default()
    }

    /// Sets the value for a column. Re-inserting a column replaces its value
    /// and keeps its original position.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(column.into(), value.into());
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.values.get(column)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.values.contains_key(column)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> + '_ {
        self.values.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> + '_ {
        self.values.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.values.iter().map(|(column, value)| (column.as_str(), value))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ClauseSet {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut set = ClauseSet::new();
        for (column, value) in iter {
            set.insert(column, value);
        }
        set
    }
}

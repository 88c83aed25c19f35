use indexmap::IndexMap;

use crate::interpreter::value::core::Value;

/// Stores the variables of a calculator session.
///
/// Variables keep the position of their first assignment: overwriting a
/// variable changes its value but not where it appears in [`iter`]. There is
/// no way to remove a variable.
///
/// [`iter`]: Variables::iter
///
/// # Example
/// ```
/// use smartcalc::interpreter::{value::core::Value, variables::Variables};
///
/// let mut variables = Variables::new();
/// variables.set("b", Value::from(1_i64));
/// variables.set("a", Value::from(2_i64));
/// variables.set("b", Value::Real(0.5));
///
/// let listed: Vec<_> = variables.iter().map(|(name, value)| format!("{name} = {value}")).collect();
/// assert_eq!(listed, ["b = 0.5", "a = 2"]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Variables {
    values: IndexMap<String, Value>,
}

impl Variables {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of `name`, if it has been assigned.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        self.values.get(name).cloned()
    }

    /// Assigns `value` to `name`, silently replacing any previous value.
    pub fn set(&mut self, name: &str, value: Value) {
        // `IndexMap::insert` keeps an existing key in place.
        self.values.insert(name.to_string(), value);
    }

    /// Iterates over `(name, value)` pairs in order of first assignment.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Returns `true` if no variable has been assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

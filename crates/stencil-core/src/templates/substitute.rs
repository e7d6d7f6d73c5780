//! Placeholder substitution for file contents (`${NAME}`) and paths (`%NAME%`)
//!
//! Substitution is a single pass over the mapping in insertion order. A value
//! that itself contains placeholder text is not expanded again.

/// Token name holding the absolute destination path
pub const PROJECT_PATH: &str = "PROJECT_PATH";

/// Token name holding the destination directory's base name
pub const PROJECT_DIR: &str = "PROJECT_DIR";

/// Ordered mapping from token name to value
///
/// Iteration order is insertion order, which keeps substitution deterministic
/// when one value contains another token's placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenValues {
    entries: Vec<(String, String)>,
}

impl TokenValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, keeping the original position if the name is already present
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TokenValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Self::new();
        for (name, value) in iter {
            values.insert(name, value);
        }
        values
    }
}

/// Replace every `${NAME}` in `text` with its value
pub fn substitute_in_content(text: &str, values: &TokenValues) -> String {
    replace_all(text, values, |name| format!("${{{}}}", name))
}

/// Replace every `%NAME%` in a path segment or relative path
pub fn substitute_in_path(path: &str, values: &TokenValues) -> String {
    replace_all(path, values, |name| format!("%{}%", name))
}

fn replace_all(
    input: &str,
    values: &TokenValues,
    placeholder: impl Fn(&str) -> String,
) -> String {
    let mut out = input.to_string();
    for (name, value) in values.iter() {
        let marker = placeholder(name);
        if out.contains(&marker) {
            out = out.replace(&marker, value);
        }
    }
    out
}

use std::collections::HashMap;

/// Outcome of looking up a variable.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Value(f64),
    /// A value was supplied but is not a number; carries what was supplied.
    NotNumeric(String),
    Absent,
}

impl Resolution {
    /// Interprets a human-provided answer.
    ///
    /// `None` (the prompt was cancelled) and blank answers are `Absent`,
    /// anything that does not parse to a finite number is `NotNumeric`.
    pub fn from_input(input: Option<&str>) -> Resolution {
        let Some(input) = input else {
            return Resolution::Absent;
        };

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Resolution::Absent;
        }

        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Resolution::Value(value),
            _ => Resolution::NotNumeric(trimmed.to_string()),
        }
    }
}

/// Supplies the current value of single-letter variables.
///
/// Called once per variable occurrence while an expression is parsed.
/// Implementations may block, e.g. to ask a user.
pub trait VariableResolver {
    fn resolve(&mut self, name: char) -> Resolution;
}

impl<F> VariableResolver for F
where
    F: FnMut(char) -> Resolution,
{
    fn resolve(&mut self, name: char) -> Resolution {
        self(name)
    }
}

/// Resolver backed by a fixed table.
#[derive(Debug, Clone, Default)]
pub struct MapResolver {
    values: HashMap<char, f64>,
}

impl MapResolver {
    pub fn new() -> Self {
        MapResolver::default()
    }

    pub fn with(mut self, name: char, value: f64) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: char, value: f64) {
        self.values.insert(name, value);
    }

    pub fn get(&self, name: char) -> Option<f64> {
        self.values.get(&name).copied()
    }
}

impl VariableResolver for MapResolver {
    fn resolve(&mut self, name: char) -> Resolution {
        match self.values.get(&name) {
            Some(value) if value.is_finite() => Resolution::Value(*value),
            Some(value) => Resolution::NotNumeric(value.to_string()),
            None => Resolution::Absent,
        }
    }
}

impl FromIterator<(char, f64)> for MapResolver {
    fn from_iter<I: IntoIterator<Item = (char, f64)>>(iter: I) -> Self {
        MapResolver {
            values: iter.into_iter().collect(),
        }
    }
}

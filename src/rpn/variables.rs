use crate::error::{Error, Result};
use std::collections::HashMap;

/// Values bound to single-letter variables `A`..`Z`.
///
/// Names are case-insensitive. Reading a variable that was never set yields NaN.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Variables {
    values: HashMap<char, f64>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or updates `name`.
    pub fn set(&mut self, name: char, value: f64) -> Result<()> {
        let name = canonical_name(name).ok_or(Error::InvalidVariable(name))?;
        self.values.insert(name, value);
        Ok(())
    }

    pub fn get(&self, name: char) -> f64 {
        canonical_name(name)
            .and_then(|name| self.values.get(&name).copied())
            .unwrap_or(f64::NAN)
    }

    pub fn contains(&self, name: char) -> bool {
        canonical_name(name).is_some_and(|name| self.values.contains_key(&name))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        self.values.iter().map(|(name, value)| (*name, *value))
    }
}

impl TryFrom<&HashMap<char, f64>> for Variables {
    type Error = Error;

    fn try_from(values: &HashMap<char, f64>) -> Result<Self> {
        let mut variables = Variables::new();
        for (name, value) in values {
            variables.set(*name, *value)?;
        }
        Ok(variables)
    }
}

/// True if `text` names a variable in normalized (uppercase) input.
pub fn is_variable_name(text: &str) -> bool {
    let mut chars = text.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_uppercase())
}

fn canonical_name(name: char) -> Option<char> {
    name.is_ascii_alphabetic().then(|| name.to_ascii_uppercase())
}

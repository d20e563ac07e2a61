use crate::error::RegistryError;
use crate::functions::register_functions;
use crate::rpn::variables::is_variable_name;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

pub type UnaryFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;
pub type BinaryFn = Arc<dyn Fn(f64, f64) -> f64 + Send + Sync>;

/// Symbols reserved for grouping; never usable as operators.
pub const OPEN_BRACKET: &str = "(";
pub const CLOSE_BRACKET: &str = ")";

/// Table of functions and operators an expression can refer to.
///
/// Names are stored uppercased, matching the lexer which uppercases its input.
/// The same symbol may be registered both as a binary and as a unary operator
/// (`+` and `-` are); the classifier picks the role from context.
#[derive(Clone)]
pub struct Registry {
    functions: HashMap<String, UnaryFn>,
    binary_operators: HashMap<String, BinaryFn>,
    unary_operators: HashMap<String, UnaryFn>,
}

impl Registry {
    /// Creates a registry without any function or operator.
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
            binary_operators: HashMap::new(),
            unary_operators: HashMap::new(),
        }
    }

    /// Creates a registry with SIN, COS, LN, EXP, the binary operators
    /// `+ - * / ^` and the unary operators `+ -`.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        register_functions(&mut registry);
        registry
    }

    /// Registers a one-argument function.
    pub fn register_function<F>(&mut self, name: &str, function: F) -> &mut Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        self.functions.insert(name.to_uppercase(), Arc::new(function));
        self
    }

    pub fn register_binary_operator<F>(&mut self, symbol: &str, operator: F) -> &mut Self
    where
        F: Fn(f64, f64) -> f64 + Send + Sync + 'static,
    {
        self.binary_operators
            .insert(symbol.to_uppercase(), Arc::new(operator));
        self
    }

    pub fn register_unary_operator<F>(&mut self, symbol: &str, operator: F) -> &mut Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        self.unary_operators
            .insert(symbol.to_uppercase(), Arc::new(operator));
        self
    }

    pub fn is_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn is_binary_operator(&self, symbol: &str) -> bool {
        self.binary_operators.contains_key(symbol)
    }

    pub fn is_unary_operator(&self, symbol: &str) -> bool {
        self.unary_operators.contains_key(symbol)
    }

    /// True for anything the lexer emits as soon as it is formed.
    pub fn is_symbol(&self, text: &str) -> bool {
        self.is_binary_operator(text)
            || self.is_unary_operator(text)
            || text == OPEN_BRACKET
            || text == CLOSE_BRACKET
    }

    /// True if some function name starts with `candidate`.
    pub fn has_function_with_prefix(&self, candidate: &str) -> bool {
        self.functions.keys().any(|name| name.starts_with(candidate))
    }

    pub fn function(&self, name: &str) -> Option<&UnaryFn> {
        self.functions.get(name)
    }

    pub fn binary_operator(&self, symbol: &str) -> Option<&BinaryFn> {
        self.binary_operators.get(symbol)
    }

    pub fn unary_operator(&self, symbol: &str) -> Option<&UnaryFn> {
        self.unary_operators.get(symbol)
    }

    pub fn function_names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }

    /// Checks the naming rules the lexer and classifier rely on.
    pub fn validate(&self) -> Result<(), RegistryError> {
        for name in self.functions.keys() {
            if name.is_empty() {
                return Err(RegistryError::EmptyName);
            }
            // a leading digit would be lexed as a number, a single letter as a variable
            let starts_with_digit = name.starts_with(|c: char| c.is_numeric());
            if !name.chars().all(char::is_alphanumeric)
                || starts_with_digit
                || is_variable_name(name)
            {
                return Err(RegistryError::InvalidFunctionName(name.clone()));
            }
        }

        for symbol in self
            .binary_operators
            .keys()
            .chain(self.unary_operators.keys())
        {
            if symbol.is_empty() {
                return Err(RegistryError::EmptyName);
            }
            if self.functions.contains_key(symbol) {
                return Err(RegistryError::Conflict(symbol.clone()));
            }
            let reserved = |c: char| {
                c.is_alphanumeric() || c.is_whitespace() || matches!(c, '(' | ')' | '.' | ',')
            };
            if symbol.chars().count() != 1 || symbol.chars().any(reserved) {
                return Err(RegistryError::InvalidOperatorSymbol(symbol.clone()));
            }
        }

        Ok(())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut functions: Vec<_> = self.functions.keys().collect();
        let mut binary: Vec<_> = self.binary_operators.keys().collect();
        let mut unary: Vec<_> = self.unary_operators.keys().collect();
        functions.sort();
        binary.sort();
        unary.sort();
        f.debug_struct("Registry")
            .field("functions", &functions)
            .field("binary_operators", &binary)
            .field("unary_operators", &unary)
            .finish()
    }
}

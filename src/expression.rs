use crate::error::{Error, Result};
use crate::registry::Registry;
use crate::rpn::{
    render, Classifier, Compiler, Converter, Executor, Instruction, Lexer, Term, Variables,
};
use log::debug;
use rayon::prelude::*;
use std::sync::Arc;

/// A parsed arithmetic expression that can be evaluated any number of times.
///
/// The text is lexed, classified and converted to postfix once, when the
/// expression is built. Evaluation only runs the stack machine against the
/// current variable values.
///
/// ```
/// use formula_rs::Expression;
///
/// let mut expression = Expression::new("2 * x + 1").unwrap();
/// assert_eq!(expression.rpn(), "2 X * 1 +");
/// expression.set_variable('x', 5.0).unwrap();
/// assert_eq!(expression.evaluate().unwrap(), 11.0);
/// ```
#[derive(Debug, Clone)]
pub struct Expression {
    source: String,
    registry: Arc<Registry>,
    postfix: Vec<Term>,
    program: Vec<Instruction>,
    variables: Variables,
}

impl Expression {
    /// Parses `source` with the standard registry.
    pub fn new(source: &str) -> Result<Self> {
        Self::with_registry(source, Arc::new(Registry::standard()))
    }

    /// Parses `source` with the functions and operators of `registry`.
    pub fn with_registry(source: &str, registry: Arc<Registry>) -> Result<Self> {
        debug!("Parsing expression: {source}");
        registry.validate()?;

        let lexemes = Lexer::new(&registry).tokenize(source)?;
        let terms = Classifier::new(&registry).classify(&lexemes)?;
        let postfix = Converter::convert(terms)?;
        let program = Compiler::compile(&postfix, &registry)?;

        Ok(Self {
            source: source.to_string(),
            registry,
            postfix,
            program,
            variables: Variables::new(),
        })
    }

    /// The text the expression was built from, unchanged.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn postfix(&self) -> &[Term] {
        &self.postfix
    }

    /// Postfix trace, e.g. `2 3 '- *` for `2*-3`. Unary operators carry a leading `'`.
    pub fn rpn(&self) -> String {
        render(&self.postfix)
    }

    pub fn set_variable(&mut self, name: char, value: f64) -> Result<()> {
        self.variables.set(name, value)
    }

    /// Value bound to `name`, NaN when unset.
    pub fn variable(&self, name: char) -> f64 {
        self.variables.get(name)
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    pub fn evaluate(&self) -> Result<f64> {
        self.evaluate_with(&self.variables)
    }

    /// Evaluates against `variables` instead of the expression's own bindings.
    pub fn evaluate_with(&self, variables: &Variables) -> Result<f64> {
        let mut executor = Executor::with_capacity(self.program.len());
        let result = executor.execute(&self.program, variables)?;
        debug!("{} = {result}", self.source);
        Ok(result)
    }

    /// Evaluates every set of bindings in parallel. Results keep the input order.
    pub fn evaluate_batch(&self, bindings: &[Variables]) -> Vec<Result<f64>> {
        bindings
            .par_iter()
            .map(|variables| self.evaluate_with(variables))
            .collect()
    }
}

impl TryFrom<&str> for Expression {
    type Error = Error;

    fn try_from(source: &str) -> Result<Self> {
        Self::new(source)
    }
}

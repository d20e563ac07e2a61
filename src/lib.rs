pub mod error;
pub mod expression;
pub mod functions;
pub mod registry;
pub mod rpn;

use std::collections::HashMap;

pub use error::{Error, Result};
pub use expression::Expression;
pub use registry::Registry;
pub use rpn::Variables;

/// Parses `expression` with the standard registry and evaluates it once.
pub fn evaluate_expression(expression: &str, variables: &HashMap<char, f64>) -> Result<f64> {
    let parsed = Expression::new(expression)?;
    let variables = Variables::try_from(variables)?;
    parsed.evaluate_with(&variables)
}

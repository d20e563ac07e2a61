use crate::registry::Registry;

pub fn register(registry: &mut Registry) {
    registry
        .register_binary_operator("+", add)
        .register_binary_operator("-", subtract)
        .register_binary_operator("*", multiply)
        .register_binary_operator("/", divide)
        .register_binary_operator("^", power)
        .register_unary_operator("+", identity)
        .register_unary_operator("-", negate);
}

pub fn add(left: f64, right: f64) -> f64 {
    left + right
}

pub fn subtract(left: f64, right: f64) -> f64 {
    left - right
}

pub fn multiply(left: f64, right: f64) -> f64 {
    left * right
}

/// Division by zero yields an infinity or NaN, never an error.
pub fn divide(left: f64, right: f64) -> f64 {
    left / right
}

pub fn power(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

pub fn identity(value: f64) -> f64 {
    value
}

pub fn negate(value: f64) -> f64 {
    -value
}

use crate::registry::Registry;

pub fn register(registry: &mut Registry) {
    registry
        .register_function("SIN", sin)
        .register_function("COS", cos)
        .register_function("LN", ln)
        .register_function("EXP", exp);
}

pub fn sin(x: f64) -> f64 {
    x.sin()
}

pub fn cos(x: f64) -> f64 {
    x.cos()
}

/// Natural logarithm. NaN for negative input, -inf for zero.
pub fn ln(x: f64) -> f64 {
    x.ln()
}

pub fn exp(x: f64) -> f64 {
    x.exp()
}

use formula_rs::{Expression, Registry};
use std::sync::Arc;

fn main() {
    pretty_env_logger::init();

    let mut registry = Registry::standard();
    registry
        .register_function("tan", f64::tan)
        .register_function("sqrt", f64::sqrt)
        .register_binary_operator("%", |a, b| a % b);
    let registry = Arc::new(registry);

    for text in ["sqrt(16) + tan(0)", "17 % 5 * 2", "sqrt(x^2 + y^2)"] {
        let mut expression = Expression::with_registry(text, registry.clone()).unwrap();
        expression.set_variable('x', 3.0).unwrap();
        expression.set_variable('y', 4.0).unwrap();
        println!("{} => {} => {:?}", text, expression.rpn(), expression.evaluate());
    }
}

use formula_rs::{Expression, Variables};

fn main() {
    pretty_env_logger::init();

    let mut expression = Expression::new("a * x^2 + b * x + c").unwrap();
    expression.set_variable('a', 1.0).unwrap();
    expression.set_variable('b', -3.0).unwrap();
    expression.set_variable('c', 2.0).unwrap();

    let bindings: Vec<Variables> = (-2..=5)
        .map(|x| {
            let mut variables = expression.variables().clone();
            variables.set('x', x as f64).unwrap();
            variables
        })
        .collect();

    println!("{}", expression.rpn());
    for (variables, result) in bindings.iter().zip(expression.evaluate_batch(&bindings)) {
        println!("x = {:>3}: {:?}", variables.get('x'), result);
    }
}

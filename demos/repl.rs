use formula_rs::Expression;
use std::io::{self, BufRead, Write};

/// Reads one expression per line and prints its postfix form and value.
/// Run with `RUST_LOG=debug` to see every pipeline stage.
fn main() -> io::Result<()> {
    pretty_env_logger::init();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    write!(stdout, "> ")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            match Expression::new(&line) {
                Ok(expression) => {
                    println!("{}", expression.rpn());
                    match expression.evaluate() {
                        Ok(value) => println!("{}", value),
                        Err(err) => println!("{}", err),
                    }
                }
                Err(err) => println!("{}", err),
            }
            println!();
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }

    Ok(())
}

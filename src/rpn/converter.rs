use crate::error::SyntaxError;
use crate::rpn::{render, Term, TermKind};
use log::debug;

/// Shunting-yard conversion from infix terms to postfix order.
///
/// Unary operators only pop terms that bind strictly tighter, so chains like
/// `--X` nest to the right. Binary operators also pop terms of equal priority,
/// which makes every binary operator left-associative, `^` included:
/// `2^3^2` is `(2^3)^2`.
pub struct Converter {
    output: Vec<Term>,
    stack: Vec<Term>,
}

impl Converter {
    pub fn convert(terms: Vec<Term>) -> Result<Vec<Term>, SyntaxError> {
        let mut converter = Self {
            output: Vec::with_capacity(terms.len()),
            stack: Vec::new(),
        };

        for term in terms {
            match term.kind {
                TermKind::Number | TermKind::Variable => converter.output.push(term),
                TermKind::Function | TermKind::OpenBracket => converter.stack.push(term),
                TermKind::CloseBracket => converter.close_group()?,
                TermKind::UnaryOp => {
                    let priority = term.priority().unwrap_or_default();
                    converter.pop_while(|top| top > priority);
                    converter.stack.push(term);
                }
                TermKind::BinaryOp => {
                    let priority = term.priority().unwrap_or_default();
                    converter.pop_while(|top| top >= priority);
                    converter.stack.push(term);
                }
            }
        }

        while let Some(term) = converter.stack.pop() {
            if term.kind == TermKind::OpenBracket {
                return Err(SyntaxError::UnmatchedOpenBracket);
            }
            converter.output.push(term);
        }

        debug!("Postfix: {}", render(&converter.output));
        Ok(converter.output)
    }

    /// Moves operators to the output while the top of the stack has a priority
    /// satisfying `condition`. Brackets have no priority and stop the loop.
    fn pop_while<F>(&mut self, condition: F)
    where
        F: Fn(u8) -> bool,
    {
        while let Some(priority) = self.stack.last().and_then(Term::priority) {
            if !condition(priority) {
                break;
            }
            if let Some(term) = self.stack.pop() {
                self.output.push(term);
            }
        }
    }

    fn close_group(&mut self) -> Result<(), SyntaxError> {
        loop {
            match self.stack.pop() {
                Some(term) if term.kind == TermKind::OpenBracket => return Ok(()),
                Some(term) => self.output.push(term),
                None => return Err(SyntaxError::UnmatchedClosingBracket),
            }
        }
    }
}

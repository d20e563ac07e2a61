use std::fmt;

pub mod classifier;
pub mod compiler;
pub mod converter;
pub mod executor;
pub mod lexer;
pub mod variables;

pub use classifier::Classifier;
pub use compiler::{Compiler, Instruction};
pub use converter::Converter;
pub use executor::Executor;
pub use lexer::Lexer;
pub use variables::Variables;

/// Marker put in front of unary operators when rendering a postfix trace.
pub const UNARY_MARKER: char = '\'';

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TermKind {
    Variable,
    Function,
    OpenBracket,
    CloseBracket,
    Number,
    BinaryOp,
    UnaryOp,
}

/// A lexeme annotated with its grammar role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub text: String,
    pub kind: TermKind,
}

impl Term {
    pub fn new(text: impl Into<String>, kind: TermKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    /// Binding strength used by the shunting-yard conversion; higher binds tighter.
    /// Brackets and operands have none.
    pub fn priority(&self) -> Option<u8> {
        match self.kind {
            TermKind::Function => Some(100),
            TermKind::UnaryOp => Some(90),
            TermKind::BinaryOp => Some(match self.text.as_str() {
                "^" => 70,
                "*" | "/" => 60,
                _ => 50,
            }),
            _ => None,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TermKind::UnaryOp => write!(f, "{UNARY_MARKER}{}", self.text),
            _ => f.write_str(&self.text),
        }
    }
}

/// Renders a postfix sequence as space separated lexemes.
pub fn render(terms: &[Term]) -> String {
    terms
        .iter()
        .map(Term::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

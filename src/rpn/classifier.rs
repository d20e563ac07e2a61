use crate::error::SyntaxError;
use crate::registry::{Registry, CLOSE_BRACKET, OPEN_BRACKET};
use crate::rpn::lexer::is_number_literal;
use crate::rpn::variables::is_variable_name;
use crate::rpn::{Term, TermKind};
use log::debug;

/// Assigns a grammar role to every lexeme.
///
/// An operator symbol is unary when it opens the expression or follows an
/// opening bracket or another operator, and binary otherwise.
pub struct Classifier<'a> {
    registry: &'a Registry,
}

impl<'a> Classifier<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    pub fn classify<S: AsRef<str>>(&self, lexemes: &[S]) -> Result<Vec<Term>, SyntaxError> {
        let mut terms: Vec<Term> = Vec::with_capacity(lexemes.len());

        for lexeme in lexemes {
            let lexeme = lexeme.as_ref();
            let kind = if self.registry.is_function(lexeme) {
                TermKind::Function
            } else if is_number_literal(lexeme) {
                TermKind::Number
            } else if is_variable_name(lexeme) {
                TermKind::Variable
            } else if lexeme == OPEN_BRACKET {
                TermKind::OpenBracket
            } else if lexeme == CLOSE_BRACKET {
                TermKind::CloseBracket
            } else if self.registry.is_binary_operator(lexeme)
                || self.registry.is_unary_operator(lexeme)
            {
                self.operator_kind(lexeme, terms.last())?
            } else {
                return Err(SyntaxError::UnrecognizedLexeme(lexeme.to_string()));
            };
            terms.push(Term::new(lexeme, kind));
        }

        debug!("Terms: {terms:?}");
        Ok(terms)
    }

    fn operator_kind(&self, symbol: &str, previous: Option<&Term>) -> Result<TermKind, SyntaxError> {
        let prefix_position = previous.map_or(true, |term| {
            matches!(
                term.kind,
                TermKind::OpenBracket | TermKind::BinaryOp | TermKind::UnaryOp
            )
        });

        if prefix_position {
            if !self.registry.is_unary_operator(symbol) {
                return Err(SyntaxError::NotPrefixOperator(symbol.to_string()));
            }
            Ok(TermKind::UnaryOp)
        } else {
            if !self.registry.is_binary_operator(symbol) {
                return Err(SyntaxError::NotInfixOperator(symbol.to_string()));
            }
            Ok(TermKind::BinaryOp)
        }
    }
}

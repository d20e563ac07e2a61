use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Raised while splitting the normalized text into lexemes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unrecognized token '{token}' at position {position}")]
    UnrecognizedToken { token: String, position: usize },

    #[error("unterminated token '{token}' at position {position}")]
    UnterminatedToken { token: String, position: usize },
}

/// Raised while classifying lexemes, converting to postfix or checking operand arity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("empty expression")]
    EmptyExpression,

    #[error("unrecognized lexeme '{0}'")]
    UnrecognizedLexeme(String),

    #[error("unmatched closing bracket")]
    UnmatchedClosingBracket,

    #[error("unmatched opening bracket")]
    UnmatchedOpenBracket,

    #[error("operator '{0}' cannot be used as a prefix operator")]
    NotPrefixOperator(String),

    #[error("operator '{0}' cannot be used as an infix operator")]
    NotInfixOperator(String),

    #[error("missing operand for '{0}'")]
    MissingOperand(String),

    #[error("missing operator between operands")]
    MissingOperator,

    #[error("invalid number literal '{0}'")]
    InvalidNumber(String),
}

/// Stack machine failures. A program that passed construction never produces these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error("stack underflow at '{0}'")]
    StackUnderflow(String),

    #[error("stack imbalance: {0} values left after evaluation")]
    StackImbalance(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("empty function or operator name")]
    EmptyName,

    #[error("'{0}' is registered both as a function and as an operator")]
    Conflict(String),

    #[error("invalid function name '{0}'")]
    InvalidFunctionName(String),

    #[error("invalid operator symbol '{0}'")]
    InvalidOperatorSymbol(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),

    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("evaluation error: {0}")]
    Evaluation(#[from] EvaluationError),

    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("invalid variable name '{0}', expected a single letter A-Z")]
    InvalidVariable(char),
}

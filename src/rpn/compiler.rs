use crate::error::SyntaxError;
use crate::registry::{BinaryFn, Registry, UnaryFn};
use crate::rpn::{Term, TermKind, UNARY_MARKER};
use log::debug;
use std::fmt;

/// One step of the postfix stack machine, with the callables already resolved.
#[derive(Clone)]
pub enum Instruction {
    Push(f64),
    Load(char),
    Unary { symbol: String, operator: UnaryFn },
    Binary { symbol: String, operator: BinaryFn },
    Call { name: String, function: UnaryFn },
}

impl Instruction {
    /// Number of operands the instruction pops.
    pub fn arity(&self) -> usize {
        match self {
            Instruction::Push(_) | Instruction::Load(_) => 0,
            Instruction::Unary { .. } | Instruction::Call { .. } => 1,
            Instruction::Binary { .. } => 2,
        }
    }
}

impl fmt::Debug for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Push(value) => f.debug_tuple("Push").field(value).finish(),
            Instruction::Load(name) => f.debug_tuple("Load").field(name).finish(),
            Instruction::Unary { symbol, .. } => f.debug_tuple("Unary").field(symbol).finish(),
            Instruction::Binary { symbol, .. } => f.debug_tuple("Binary").field(symbol).finish(),
            Instruction::Call { name, .. } => f.debug_tuple("Call").field(name).finish(),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Push(value) => write!(f, "{value}"),
            Instruction::Load(name) => write!(f, "{name}"),
            Instruction::Unary { symbol, .. } => write!(f, "{UNARY_MARKER}{symbol}"),
            Instruction::Binary { symbol, .. } => f.write_str(symbol),
            Instruction::Call { name, .. } => f.write_str(name),
        }
    }
}

pub struct Compiler;

impl Compiler {
    /// Turns a postfix term sequence into instructions.
    ///
    /// Operand counts are checked here by tracking the stack depth the program
    /// would reach, so a compiled program always leaves exactly one value.
    pub fn compile(postfix: &[Term], registry: &Registry) -> Result<Vec<Instruction>, SyntaxError> {
        let mut instructions = Vec::with_capacity(postfix.len());
        let mut depth: usize = 0;

        for term in postfix {
            let instruction = Self::compile_term(term, registry)?;
            depth = depth
                .checked_sub(instruction.arity())
                .ok_or_else(|| SyntaxError::MissingOperand(term.text.clone()))?
                + 1;
            instructions.push(instruction);
        }

        match depth {
            0 => Err(SyntaxError::EmptyExpression),
            1 => {
                debug!("Compiled {} instructions", instructions.len());
                Ok(instructions)
            }
            _ => Err(SyntaxError::MissingOperator),
        }
    }

    fn compile_term(term: &Term, registry: &Registry) -> Result<Instruction, SyntaxError> {
        let unrecognized = || SyntaxError::UnrecognizedLexeme(term.text.clone());

        match term.kind {
            TermKind::Number => term
                .text
                .parse::<f64>()
                .map(Instruction::Push)
                .map_err(|_| SyntaxError::InvalidNumber(term.text.clone())),
            TermKind::Variable => term
                .text
                .chars()
                .next()
                .map(Instruction::Load)
                .ok_or_else(unrecognized),
            TermKind::UnaryOp => registry
                .unary_operator(&term.text)
                .map(|operator| Instruction::Unary {
                    symbol: term.text.clone(),
                    operator: operator.clone(),
                })
                .ok_or_else(|| SyntaxError::NotPrefixOperator(term.text.clone())),
            TermKind::BinaryOp => registry
                .binary_operator(&term.text)
                .map(|operator| Instruction::Binary {
                    symbol: term.text.clone(),
                    operator: operator.clone(),
                })
                .ok_or_else(|| SyntaxError::NotInfixOperator(term.text.clone())),
            TermKind::Function => registry
                .function(&term.text)
                .map(|function| Instruction::Call {
                    name: term.text.clone(),
                    function: function.clone(),
                })
                .ok_or_else(unrecognized),
            TermKind::OpenBracket => Err(SyntaxError::UnmatchedOpenBracket),
            TermKind::CloseBracket => Err(SyntaxError::UnmatchedClosingBracket),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpn::{Classifier, Converter, Lexer};

    fn compile(input: &str) -> Result<Vec<Instruction>, SyntaxError> {
        let registry = Registry::standard();
        let lexemes = Lexer::new(&registry).tokenize(input).unwrap();
        let terms = Classifier::new(&registry).classify(&lexemes)?;
        let postfix = Converter::convert(terms)?;
        Compiler::compile(&postfix, &registry)
    }

    fn listing(input: &str) -> String {
        compile(input)
            .unwrap()
            .iter()
            .map(Instruction::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_compile_resolves_terms() {
        let instructions = compile("-x*2.5+sin(1)").unwrap();
        assert_eq!(
            format!("{:?}", instructions),
            r#"[Load('X'), Unary("-"), Push(2.5), Binary("*"), Push(1.0), Call("SIN"), Binary("+")]"#
        );
        assert_eq!(listing("1,5+1"), "1.5 1 +");
    }

    #[test]
    fn test_listing_matches_postfix_trace() {
        let registry = Registry::standard();
        let lexemes = Lexer::new(&registry).tokenize("2*-x").unwrap();
        let terms = Classifier::new(&registry).classify(&lexemes).unwrap();
        let postfix = Converter::convert(terms).unwrap();
        assert_eq!(listing("2*-x"), crate::rpn::render(&postfix));
        assert_eq!(listing("2*-x"), format!("2 X {UNARY_MARKER}- *"));
    }

    #[test]
    fn test_arity() {
        let instructions = compile("-SIN(X)+1").unwrap();
        let arities: Vec<_> = instructions.iter().map(Instruction::arity).collect();
        assert_eq!(arities, vec![0, 1, 1, 0, 2]);
    }

    #[test]
    fn test_missing_operand() {
        assert_eq!(
            compile("2++").unwrap_err(),
            SyntaxError::MissingOperand("+".to_string())
        );
        assert_eq!(
            compile("-").unwrap_err(),
            SyntaxError::MissingOperand("-".to_string())
        );
        assert_eq!(
            compile("SIN()").unwrap_err(),
            SyntaxError::MissingOperand("SIN".to_string())
        );
        assert_eq!(
            compile("(2*)").unwrap_err(),
            SyntaxError::MissingOperand("*".to_string())
        );
    }

    #[test]
    fn test_missing_operator() {
        assert_eq!(compile("X Y").unwrap_err(), SyntaxError::MissingOperator);
        assert_eq!(compile("(1)(2)").unwrap_err(), SyntaxError::MissingOperator);
        assert_eq!(compile("1.5.2").unwrap_err(), SyntaxError::MissingOperator);
    }

    #[test]
    fn test_empty_expression() {
        assert_eq!(compile("").unwrap_err(), SyntaxError::EmptyExpression);
        assert_eq!(compile("  ").unwrap_err(), SyntaxError::EmptyExpression);
        assert_eq!(compile("()").unwrap_err(), SyntaxError::EmptyExpression);
    }

    #[test]
    fn test_bracket_terms_are_rejected() {
        let registry = Registry::standard();
        let postfix = vec![
            Term::new("1", TermKind::Number),
            Term::new("(", TermKind::OpenBracket),
        ];
        assert_eq!(
            Compiler::compile(&postfix, &registry).unwrap_err(),
            SyntaxError::UnmatchedOpenBracket
        );
    }

    #[test]
    fn test_unknown_function_in_registry() {
        let postfix = vec![
            Term::new("1", TermKind::Number),
            Term::new("TAN", TermKind::Function),
        ];
        assert_eq!(
            Compiler::compile(&postfix, &Registry::new()).unwrap_err(),
            SyntaxError::UnrecognizedLexeme("TAN".to_string())
        );
    }
}

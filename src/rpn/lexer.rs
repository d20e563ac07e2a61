use crate::error::LexError;
use crate::registry::Registry;
use crate::rpn::variables::is_variable_name;
use log::{debug, trace};

/// Canonical decimal separator; both `.` and `,` are rewritten to it.
pub const DECIMAL_POINT: char = '.';

/// Splits expression text into lexemes using the symbols of a [`Registry`].
///
/// Scanning is greedy: a candidate grows one character at a time while it is
/// still a number, a function name, a variable, the beginning of some
/// function name, or a lone decimal point. Operators and brackets are
/// emitted as soon as they are formed. When growing breaks the candidate, the
/// last character is given back and the shorter candidate becomes the lexeme,
/// so `SINCOS(0)` splits into `SIN`, `COS`, `(`, `0`, `)`.
pub struct Lexer<'a> {
    registry: &'a Registry,
}

impl<'a> Lexer<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Rewrites decimal separators, strips whitespace and uppercases the text.
    pub fn normalize(input: &str) -> String {
        input
            .chars()
            .map(|c| if c == ',' { DECIMAL_POINT } else { c })
            .filter(|c| !matches!(c, ' ' | '\t' | '\r' | '\n'))
            .collect::<String>()
            .to_uppercase()
    }

    pub fn tokenize(&self, input: &str) -> Result<Vec<String>, LexError> {
        let normalized = Self::normalize(input);
        debug!("Normalized expression: {normalized}");

        let chars: Vec<char> = normalized.chars().collect();
        let mut lexemes = Vec::new();
        let mut position = 0;
        while position < chars.len() {
            let (lexeme, next) = self.next_lexeme(&chars, position)?;
            trace!("Lexeme '{lexeme}' at {position}");
            lexemes.push(lexeme);
            position = next;
        }

        debug!("Lexemes: {lexemes:?}");
        Ok(lexemes)
    }

    /// Reads one lexeme starting at `start`; returns it with the index to resume from.
    fn next_lexeme(&self, chars: &[char], start: usize) -> Result<(String, usize), LexError> {
        let mut candidate = String::new();

        for (index, &c) in chars.iter().enumerate().skip(start) {
            candidate.push(c);

            if self.registry.is_symbol(&candidate) {
                return Ok((candidate, index + 1));
            }

            if !self.is_operand(&candidate) && !self.can_grow(&candidate) {
                let token = candidate.clone();
                candidate.pop();
                if !self.is_operand(&candidate) {
                    return Err(LexError::UnrecognizedToken {
                        token,
                        position: start,
                    });
                }
                return Ok((candidate, index));
            }
        }

        if self.is_operand(&candidate) {
            Ok((candidate, chars.len()))
        } else {
            Err(LexError::UnterminatedToken {
                token: candidate,
                position: start,
            })
        }
    }

    fn is_operand(&self, text: &str) -> bool {
        is_number_literal(text) || self.registry.is_function(text) || is_variable_name(text)
    }

    /// True if appending characters may still turn `text` into an operand.
    fn can_grow(&self, text: &str) -> bool {
        text.strip_prefix(DECIMAL_POINT) == Some("")
            || self.registry.has_function_with_prefix(text)
    }
}

/// Digits with at most one decimal point, e.g. `12`, `1.5`, `.5` or `5.`.
pub fn is_number_literal(text: &str) -> bool {
    let mut digits = 0;
    let mut points = 0;
    for c in text.chars() {
        match c {
            '0'..='9' => digits += 1,
            DECIMAL_POINT => points += 1,
            _ => return false,
        }
    }
    digits > 0 && points <= 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(input: &str) -> Result<Vec<String>, LexError> {
        let registry = Registry::standard();
        Lexer::new(&registry).tokenize(input)
    }

    fn lexemes(input: &str) -> Vec<String> {
        tokenize(input).unwrap()
    }

    #[test]
    fn test_normalize() {
        assert_eq!(Lexer::normalize("1,5 + x"), "1.5+X");
        assert_eq!(Lexer::normalize(" sin\t(\r\n2.5)"), "SIN(2.5)");
        assert_eq!(Lexer::normalize(""), "");
    }

    #[test]
    fn test_simple_arithmetic() {
        assert_eq!(lexemes("2+3*4"), vec!["2", "+", "3", "*", "4"]);
        assert_eq!(lexemes("(2 + 3) ^ 2"), vec!["(", "2", "+", "3", ")", "^", "2"]);
    }

    #[test]
    fn test_decimal_separators() {
        assert_eq!(lexemes("1.5+1"), vec!["1.5", "+", "1"]);
        assert_eq!(lexemes("1,5+1"), vec!["1.5", "+", "1"]);
        assert_eq!(lexemes(".5*2."), vec![".5", "*", "2."]);
    }

    #[test]
    fn test_whitespace_inside_numbers_is_removed() {
        assert_eq!(lexemes("1 2 + 3"), vec!["12", "+", "3"]);
        assert_eq!(lexemes(" 2 \t*\r\n3 "), vec!["2", "*", "3"]);
    }

    #[test]
    fn test_functions_and_variables() {
        assert_eq!(lexemes("sin(x)"), vec!["SIN", "(", "X", ")"]);
        assert_eq!(lexemes("Exp(1)"), vec!["EXP", "(", "1", ")"]);
        assert_eq!(lexemes("ln(e)"), vec!["LN", "(", "E", ")"]);
    }

    #[test]
    fn test_backoff_between_adjacent_tokens() {
        assert_eq!(lexemes("SINCOS(0)"), vec!["SIN", "COS", "(", "0", ")"]);
        assert_eq!(lexemes("12X"), vec!["12", "X"]);
        assert_eq!(lexemes("X2"), vec!["X", "2"]);
        assert_eq!(lexemes("2X-1"), vec!["2", "X", "-", "1"]);
    }

    #[test]
    fn test_exponent_notation_is_not_a_number() {
        assert_eq!(lexemes("1E5"), vec!["1", "E", "5"]);
    }

    #[test]
    fn test_inner_function_substring_is_not_a_prefix() {
        // "IN" occurs inside "SIN" but no function starts with it
        assert_eq!(lexemes("IN"), vec!["I", "N"]);
    }

    #[test]
    fn test_operators_emitted_immediately() {
        assert_eq!(lexemes("--3"), vec!["-", "-", "3"]);
        assert_eq!(lexemes("2*-X"), vec!["2", "*", "-", "X"]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(lexemes(""), Vec::<String>::new());
        assert_eq!(lexemes(" \t "), Vec::<String>::new());
    }

    #[test]
    fn test_unrecognized_symbol() {
        assert_eq!(
            tokenize("2@3"),
            Err(LexError::UnrecognizedToken {
                token: "@".to_string(),
                position: 1,
            })
        );
        assert_eq!(
            tokenize("2+.*3"),
            Err(LexError::UnrecognizedToken {
                token: ".*".to_string(),
                position: 2,
            })
        );
    }

    #[test]
    fn test_second_decimal_point_starts_a_new_number() {
        assert_eq!(lexemes("1.5.2"), vec!["1.5", ".2"]);
    }

    #[test]
    fn test_broken_function_name() {
        assert_eq!(
            tokenize("SIX"),
            Err(LexError::UnrecognizedToken {
                token: "SIX".to_string(),
                position: 0,
            })
        );
    }

    #[test]
    fn test_unterminated_token() {
        assert_eq!(
            tokenize("2+SI"),
            Err(LexError::UnterminatedToken {
                token: "SI".to_string(),
                position: 2,
            })
        );
        assert_eq!(
            tokenize("2+."),
            Err(LexError::UnterminatedToken {
                token: ".".to_string(),
                position: 2,
            })
        );
    }

    #[test]
    fn test_custom_registry_symbols() {
        let mut registry = Registry::standard();
        registry
            .register_binary_operator("%", |a, b| a % b)
            .register_function("sqrt", f64::sqrt);
        let lexer = Lexer::new(&registry);
        assert_eq!(
            lexer.tokenize("sqrt(9)%2").unwrap(),
            vec!["SQRT", "(", "9", ")", "%", "2"]
        );
    }

    #[test]
    fn test_is_number_literal() {
        for text in ["0", "12", "1.5", ".5", "5."] {
            assert!(is_number_literal(text), "{text} should be a number");
        }
        for text in ["", ".", "1..2", "1.2.3", "-1", "1E5", "INF", "NAN"] {
            assert!(!is_number_literal(text), "{text} should not be a number");
        }
    }
}

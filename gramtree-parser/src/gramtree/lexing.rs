//! Input-string tokenization
//!
//! Raw tokenization is handled entirely by logos. Every non-whitespace
//! character of an input string is one terminal token; whitespace separates
//! tokens but never becomes one.

use logos::Logos;

/// Tokens produced from an input string.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Whitespace runs are stripped, not matched against the grammar.
    #[regex(r"\s+")]
    Whitespace,

    /// Any other single character is one terminal symbol.
    #[regex(r"\S")]
    Symbol,
}

/// Tokenize an input string into terminal symbols.
pub fn tokenize(input: &str) -> Vec<String> {
    let mut lexer = Token::lexer(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(Token::Symbol) = result {
            tokens.push(lexer.slice().to_string());
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_character_is_one_token() {
        assert_eq!(tokenize("1+2"), ["1", "+", "2"]);
    }

    #[test]
    fn test_whitespace_is_stripped() {
        assert_eq!(tokenize(" 3 + 4 * 5 "), ["3", "+", "4", "*", "5"]);
        assert_eq!(tokenize("a\tb\nc"), ["a", "b", "c"]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize(""), Vec::<String>::new());
        assert_eq!(tokenize("   "), Vec::<String>::new());
    }

    #[test]
    fn test_multibyte_characters_stay_whole() {
        assert_eq!(tokenize("aεb"), ["a", "ε", "b"]);
    }
}

//! # Lexer for LS-8 Assembly Language

use logos::Logos;

/// Tokens for LS-8 assembly
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r]+")] // Skip whitespace (not newlines)
#[logos(skip r"[#;][^\n]*")] // Skip comments
pub enum Token {
    /// Identifier (instruction mnemonics, labels)
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    /// Register (R0-R7)
    #[regex(r"[rR][0-7]", |lex| lex.slice()[1..].parse().ok())]
    Register(u8),

    /// Decimal number
    #[regex(r"[0-9]+", |lex| lex.slice().parse().ok())]
    Number(u64),

    /// Hexadecimal number
    #[regex(r"0[xX][0-9a-fA-F]+", |lex| u64::from_str_radix(&lex.slice()[2..], 16).ok())]
    Hex(u64),

    /// Binary number
    #[regex(r"0[bB][01]+", |lex| u64::from_str_radix(&lex.slice()[2..], 2).ok())]
    Binary(u64),

    /// Comma
    #[token(",")]
    Comma,

    /// Colon (for labels)
    #[token(":")]
    Colon,

    /// Newline
    #[regex(r"\n")]
    Newline,
}

impl Token {
    /// Numeric value of a literal token
    pub fn value(&self) -> Option<u64> {
        match self {
            Token::Number(v) | Token::Hex(v) | Token::Binary(v) => Some(*v),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexer_registers() {
        let mut lex = Token::lexer("R0 r7 R3");
        assert_eq!(lex.next(), Some(Ok(Token::Register(0))));
        assert_eq!(lex.next(), Some(Ok(Token::Register(7))));
        assert_eq!(lex.next(), Some(Ok(Token::Register(3))));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn test_lexer_numbers() {
        let mut lex = Token::lexer("42 0x1A 0b1010");
        assert_eq!(lex.next(), Some(Ok(Token::Number(42))));
        assert_eq!(lex.next(), Some(Ok(Token::Hex(0x1A))));
        assert_eq!(lex.next(), Some(Ok(Token::Binary(0b1010))));
    }

    #[test]
    fn test_lexer_instruction() {
        let mut lex = Token::lexer("LDI R1, 8 ; load");
        assert_eq!(lex.next(), Some(Ok(Token::Identifier("LDI".to_string()))));
        assert_eq!(lex.next(), Some(Ok(Token::Register(1))));
        assert_eq!(lex.next(), Some(Ok(Token::Comma)));
        assert_eq!(lex.next(), Some(Ok(Token::Number(8))));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn test_lexer_label() {
        let mut lex = Token::lexer("loop: # top of loop");
        assert_eq!(lex.next(), Some(Ok(Token::Identifier("loop".to_string()))));
        assert_eq!(lex.next(), Some(Ok(Token::Colon)));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn test_lexer_register_like_identifier() {
        let mut lex = Token::lexer("R10 Rx");
        assert_eq!(lex.next(), Some(Ok(Token::Identifier("R10".to_string()))));
        assert_eq!(lex.next(), Some(Ok(Token::Identifier("Rx".to_string()))));
    }

    #[test]
    fn test_lexer_rejects_stray_characters() {
        let mut lex = Token::lexer("LDI R0, $8");
        let tokens: Vec<_> = lex.by_ref().collect();
        assert!(tokens.iter().any(|t| t.is_err()));
    }
}

use crate::syntax::token::Token;
use thiserror::Error;

#[derive(Debug, PartialEq, Clone, Error)]
pub enum CompileError {
    #[error("Illegal character {0:?}")]
    IllegalChar(char),

    #[error("Unexpected token {0}")]
    UnexpectedToken(Token),

    #[error("Unexpected end of input")]
    UnexpectedEnd,

    /// A node shape the walker or the generator has no rule for.
    #[error("Unsupported node type {0}")]
    UnsupportedNode(&'static str),
}

pub type Result<T> = std::result::Result<T, CompileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(CompileError::IllegalChar('#').to_string(), "Illegal character '#'");
        assert_eq!(CompileError::UnexpectedEnd.to_string(), "Unexpected end of input");
        assert_eq!(
            CompileError::UnexpectedToken(Token::Punctuator("=>".to_string())).to_string(),
            "Unexpected token Punctuator \"=>\""
        );
        assert_eq!(
            CompileError::UnsupportedNode("BinaryExpression").to_string(),
            "Unsupported node type BinaryExpression"
        );
    }
}

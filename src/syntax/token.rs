use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    Punctuator,
    Numeric,
    Identifier,
    Keyword,
}

impl TokenKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Punctuator => "Punctuator",
            TokenKind::Numeric => "Numeric",
            TokenKind::Identifier => "Identifier",
            TokenKind::Keyword => "Keyword",
        }
    }
}

/// Every token owns its literal source text. Numbers stay digit strings
/// until the parser builds a `Literal`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Token {
    Punctuator(String),
    Numeric(String),
    Identifier(String),
    Keyword(String),
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match *self {
            Token::Punctuator(_) => TokenKind::Punctuator,
            Token::Numeric(_) => TokenKind::Numeric,
            Token::Identifier(_) => TokenKind::Identifier,
            Token::Keyword(_) => TokenKind::Keyword,
        }
    }

    pub fn value(&self) -> &str {
        match *self {
            Token::Punctuator(ref s) | Token::Numeric(ref s) | Token::Identifier(ref s) | Token::Keyword(ref s) => s,
        }
    }

    pub fn is_punctuator(&self, punct: &str) -> bool {
        match *self {
            Token::Punctuator(ref s) => s == punct,
            _ => false,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {:?}", self.kind().as_str(), self.value())
    }
}

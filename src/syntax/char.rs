pub trait LexCharExt {
    fn is_punctuator(self) -> bool;
    fn is_lex_whitespace(self) -> bool;
    fn is_decimal_digit(self) -> bool;
    fn is_letter(self) -> bool;
}

impl LexCharExt for char {
    fn is_punctuator(self) -> bool {
        match self {
            '`' | '~' | '!' | '@' | '$' | '%' | '^' | '&' | '*' | '(' | ')' | '_' | '\\' | '-' | '+' | '='
            | '<' | '>' | '?' | ':' | '"' | '{' | '}' | '|' | ',' | '.' | '/' | ';' | '\'' | '[' | ']' => true,
            '·' | '！' | '￥' | '…' | '（' | '）' | '—' | '《' | '》' | '？' | '：' | '“' | '”' | '【' | '】'
            | '、' | '；' | '‘' | '’' | '，' | '。' => true,
            _ => false,
        }
    }

    fn is_lex_whitespace(self) -> bool {
        self.is_whitespace() || self == '\u{feff}'
    }

    fn is_decimal_digit(self) -> bool {
        self.is_ascii_digit()
    }

    fn is_letter(self) -> bool {
        self.is_ascii_alphabetic()
    }
}

use crate::errors::{CompileError, Result};
use crate::syntax::char::LexCharExt;
use crate::syntax::token::Token;
use crate::syntax::word::LexWord;

pub struct Scanner<'a> {
    source: &'a str,
    index: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Scanner<'a> {
        Scanner { source: source, index: 0 }
    }

    pub fn scan_all(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.lex()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn lex(&mut self) -> Result<Option<Token>> {
        // Punctuators are tested before whitespace.
        let character = loop {
            match self.current_char() {
                Some(c) if !c.is_punctuator() && c.is_lex_whitespace() => {
                    self.next_char();
                }
                Some(c) => break c,
                None => return Ok(None),
            }
        };

        let token = if character.is_punctuator() {
            self.scan_punctuator(character)
        } else if character.is_decimal_digit() {
            self.scan_number()
        } else if character.is_letter() {
            self.scan_word()
        } else {
            return Err(CompileError::IllegalChar(character));
        };

        Ok(Some(token))
    }

    fn scan_punctuator(&mut self, character: char) -> Token {
        self.next_char();
        if character == '=' && self.eat_char('>') {
            return Token::Punctuator("=>".to_string());
        }
        Token::Punctuator(character.to_string())
    }

    fn scan_number(&mut self) -> Token {
        let digits = self.take_chars_while(|c| c.is_decimal_digit());
        Token::Numeric(digits.to_string())
    }

    fn scan_word(&mut self) -> Token {
        let word = self.take_chars_while(|c| c.is_letter());
        if word.is_keyword() {
            Token::Keyword(word.to_string())
        } else {
            Token::Identifier(word.to_string())
        }
    }

    fn take_chars_while<F>(&mut self, predicate: F) -> &'a str where F: Fn(char) -> bool {
        let start = self.index;
        while let Some(ch) = self.current_char() {
            if predicate(ch) {
                self.next_char();
            } else {
                break;
            }
        }
        &self.source[start..self.index]
    }

    fn current_char(&self) -> Option<char> {
        self.source[self.index..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        self.current_char().map(|c| {
            self.index += c.len_utf8();
            c
        })
    }

    fn eat_char(&mut self, expected: char) -> bool {
        if self.current_char() == Some(expected) {
            self.next_char();
            true
        } else {
            false
        }
    }
}

pub mod ast;
pub mod token;
pub mod ops;
mod parser;
mod char;
mod word;
mod scanner;

use crate::errors::Result;

pub fn tokenize(source: &str) -> Result<Vec<token::Token>> {
    scanner::Scanner::new(source).scan_all()
}

pub fn parse(tokens: &[token::Token]) -> Result<ast::Program> {
    parser::Parser::new(tokens).parse()
}

use crate::errors::{CompileError, Result};
use crate::syntax::ast::*;
use crate::syntax::ops::AsOperator;
use crate::syntax::token::Token;
use std::rc::Rc;

pub struct Parser<'a> {
    tokens: &'a [Token],
    index: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Parser<'a> {
        Parser { tokens: tokens, index: 0 }
    }

    pub fn parse(&mut self) -> Result<Program> {
        let mut body = Vec::new();

        while self.lookahead().is_some() {
            body.push(self.parse_node()?);
        }

        Ok(Program::script(body))
    }

    fn lookahead(&self) -> Option<&'a Token> {
        self.tokens.get(self.index)
    }

    fn next_token(&mut self) -> Result<&'a Token> {
        let token = self.lookahead().ok_or(CompileError::UnexpectedEnd)?;
        self.index += 1;
        Ok(token)
    }

    fn eat_punctuator(&mut self, punct: &str) -> bool {
        match self.lookahead() {
            Some(token) if token.is_punctuator(punct) => {
                self.index += 1;
                true
            }
            _ => false
        }
    }

    fn parse_node(&mut self) -> Result<Statement> {
        let token = self.next_token()?;
        match *token {
            Token::Keyword(ref keyword) => match VariableDeclarationKind::from_keyword(keyword) {
                Some(kind) => self.parse_variable_declaration(kind).map(Statement::VariableDeclaration),
                None => Err(CompileError::UnexpectedToken(token.clone())),
            },
            _ => parse_primary_expression(token).map(Statement::Expression),
        }
    }

    fn parse_binding_identifier(&mut self) -> Result<Identifier> {
        match *self.next_token()? {
            Token::Identifier(ref name) => Ok(Identifier { name: name.clone() }),
            ref t => Err(CompileError::UnexpectedToken(t.clone())),
        }
    }

    fn parse_variable_declarator(&mut self) -> Result<VariableDeclarator> {
        let id = self.parse_binding_identifier()?;
        let init = if self.eat_punctuator("=") {
            Some(parse_primary_expression(self.next_token()?)?)
        } else {
            None
        };
        Ok(VariableDeclarator { id: id, init: init })
    }

    fn parse_variable_declaration(&mut self, kind: VariableDeclarationKind) -> Result<VariableDeclaration> {
        let declarator = self.parse_variable_declarator()?;
        self.eat_punctuator(";");
        Ok(VariableDeclaration {
            declarations: Rc::new(vec![declarator]),
            kind: kind,
        })
    }
}

fn parse_primary_expression(token: &Token) -> Result<Expression> {
    match *token {
        Token::Numeric(ref raw) => {
            let value = raw.parse().map_err(|_| CompileError::UnexpectedToken(token.clone()))?;
            Ok(Expression::Literal(Literal { value: value, raw: raw.clone() }))
        }
        Token::Identifier(ref name) => Ok(Expression::Identifier(Identifier { name: name.clone() })),
        Token::Punctuator(_) => {
            if let Some(op) = token.as_binary_op() {
                Ok(Expression::Binary(BinaryExpression { operator: op }))
            } else if let Some(op) = token.as_assign_op() {
                Ok(Expression::Assignment(AssignmentExpression { operator: op }))
            } else {
                Err(CompileError::UnexpectedToken(token.clone()))
            }
        }
        Token::Keyword(_) => Err(CompileError::UnexpectedToken(token.clone())),
    }
}

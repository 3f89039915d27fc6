use crate::syntax::ast::{AssignOp, BinOp};
use crate::syntax::token::Token;

pub trait AsOperator {
    fn as_binary_op(&self) -> Option<BinOp>;
    fn as_assign_op(&self) -> Option<AssignOp>;
}

impl AsOperator for Token {
    fn as_binary_op(&self) -> Option<BinOp> {
        match *self {
            Token::Punctuator(ref p) => match p.as_str() {
                "+" => Some(BinOp::Plus),
                "-" => Some(BinOp::Minus),
                "*" => Some(BinOp::Times),
                "/" => Some(BinOp::Div),
                _ => None
            },
            _ => None
        }
    }

    fn as_assign_op(&self) -> Option<AssignOp> {
        if self.is_punctuator("=") {
            Some(AssignOp::Eq)
        } else {
            None
        }
    }
}

pub mod errors;
pub mod syntax;
pub mod traverse;
pub mod transform;
pub mod trans;
mod estree;

pub use crate::errors::{CompileError, Result};
pub use crate::syntax::{parse, tokenize};
pub use crate::syntax::ast::Node;
pub use crate::traverse::{traverse, Visitor};
pub use crate::transform::transform;
pub use crate::trans::generate;

/// Runs the whole pipeline: tokenize, parse, rewrite declarations to `var`
/// and print the result.
pub fn compile(code: &str) -> Result<String> {
    let tokens = tokenize(code)?;
    let ast = parse(&tokens)?;
    let output = transform(&ast)?;
    generate(Node::Program(&output))
}

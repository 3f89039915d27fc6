use crate::errors::{CompileError, Result};
use crate::syntax::ast::*;

pub fn generate(node: Node) -> Result<String> {
    match node {
        Node::Program(program) => generate_program(program),
        Node::VariableDeclaration(decl) => generate_variable_declaration(decl),
        Node::VariableDeclarator(dec) => generate_declarator(dec),
        Node::Identifier(id) => Ok(generate_ident(id)),
        Node::Literal(lit) => Ok(generate_literal(lit)),
        Node::BinaryExpression(_) | Node::AssignmentExpression(_) => {
            Err(CompileError::UnsupportedNode(node.type_name()))
        }
    }
}

fn generate_program(program: &Program) -> Result<String> {
    let statements = program.body.iter()
        .map(|statement| generate(Node::from(statement)))
        .collect::<Result<Vec<_>>>()?;
    Ok(statements.join("\n"))
}

fn generate_variable_declaration(decl: &VariableDeclaration) -> Result<String> {
    let declarators = decl.declarations.iter()
        .map(generate_declarator)
        .collect::<Result<Vec<_>>>()?;
    Ok(format!("{} {}", decl.kind.as_str(), declarators.join("\n")))
}

fn generate_declarator(dec: &VariableDeclarator) -> Result<String> {
    match dec.init {
        Some(ref initializer) => {
            Ok(format!("{} = {}", generate_ident(&dec.id), generate(Node::from(initializer))?))
        }
        None => Ok(generate_ident(&dec.id))
    }
}

fn generate_ident(id: &Identifier) -> String {
    id.name.clone()
}

// Literals print the way JavaScript turns a number into a string:
// `Infinity` past the f64 range and exponent notation from 1e21 up.
fn generate_literal(lit: &Literal) -> String {
    let value = lit.value;
    if value.is_infinite() {
        if value > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() }
    } else if value.abs() >= 1e21 {
        format!("{:e}", value).replacen("e", "e+", 1)
    } else {
        format!("{}", value)
    }
}

use crate::errors::{CompileError, Result};
use crate::syntax::ast::*;

/// Callbacks invoked by `traverse`, one per node type. Every callback
/// receives the node and its parent (`None` for the root) and runs before the
/// walker descends into the node's children.
pub trait Visitor<'ast> {
    fn visit_program(&mut self, _node: &'ast Program, _parent: Option<Node<'ast>>) {}

    fn visit_variable_declaration(&mut self, _node: &'ast VariableDeclaration, _parent: Option<Node<'ast>>) {}

    fn visit_variable_declarator(&mut self, _node: &'ast VariableDeclarator, _parent: Option<Node<'ast>>) {}

    fn visit_identifier(&mut self, _node: &'ast Identifier, _parent: Option<Node<'ast>>) {}

    fn visit_literal(&mut self, _node: &'ast Literal, _parent: Option<Node<'ast>>) {}

    fn visit_binary_expression(&mut self, _node: &'ast BinaryExpression, _parent: Option<Node<'ast>>) {}

    fn visit_assignment_expression(&mut self, _node: &'ast AssignmentExpression, _parent: Option<Node<'ast>>) {}
}

/// Pre-order walk over `node` and everything below it.
///
/// Operator markers have no operands to descend into, so reaching one fails
/// with `UnsupportedNode` once its callback has run.
pub fn traverse<'ast, V: Visitor<'ast>>(node: Node<'ast>, visitor: &mut V) -> Result<()> {
    traverse_node(node, None, visitor)
}

fn traverse_node<'ast, V: Visitor<'ast>>(node: Node<'ast>, parent: Option<Node<'ast>>, visitor: &mut V) -> Result<()> {
    match node {
        Node::Program(program) => {
            visitor.visit_program(program, parent);
            for statement in &program.body {
                traverse_node(Node::from(statement), Some(node), visitor)?;
            }
        }
        Node::VariableDeclaration(decl) => {
            visitor.visit_variable_declaration(decl, parent);
            for declarator in decl.declarations.iter() {
                traverse_node(Node::VariableDeclarator(declarator), Some(node), visitor)?;
            }
        }
        Node::VariableDeclarator(declarator) => {
            visitor.visit_variable_declarator(declarator, parent);
            if let Some(ref init) = declarator.init {
                traverse_node(Node::from(init), Some(node), visitor)?;
            }
        }
        Node::Identifier(id) => visitor.visit_identifier(id, parent),
        Node::Literal(lit) => visitor.visit_literal(lit, parent),
        Node::BinaryExpression(bin) => {
            visitor.visit_binary_expression(bin, parent);
            return Err(CompileError::UnsupportedNode(node.type_name()));
        }
        Node::AssignmentExpression(assign) => {
            visitor.visit_assignment_expression(assign, parent);
            return Err(CompileError::UnsupportedNode(node.type_name()));
        }
    }
    Ok(())
}

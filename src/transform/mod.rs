use crate::errors::Result;
use crate::syntax::ast::*;
use crate::traverse::{traverse, Visitor};
use std::rc::Rc;

/// Collects a `var` copy of every declaration it visits.
struct LetToVar {
    body: Vec<Statement>,
}

impl<'ast> Visitor<'ast> for LetToVar {
    fn visit_variable_declaration(&mut self, node: &'ast VariableDeclaration, _parent: Option<Node<'ast>>) {
        self.body.push(Statement::VariableDeclaration(VariableDeclaration {
            declarations: Rc::clone(&node.declarations),
            kind: VariableDeclarationKind::Var,
        }));
    }
}

/// Builds a new program holding only the declarations of `program`, each
/// rewritten to `var`. Other top-level nodes are dropped.
pub fn transform(program: &Program) -> Result<Program> {
    let mut rule = LetToVar { body: Vec::new() };
    traverse(Node::Program(program), &mut rule)?;
    Ok(Program::script(rule.body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CompileError;
    use crate::syntax::{parse, tokenize};

    fn program(source: &str) -> Program {
        parse(&tokenize(source).unwrap()).unwrap()
    }

    fn declarations(program: &Program) -> Vec<&VariableDeclaration> {
        program.body.iter().filter_map(|statement| match *statement {
            Statement::VariableDeclaration(ref decl) => Some(decl),
            _ => None,
        }).collect()
    }

    #[test]
    fn every_kind_becomes_var() {
        let output = transform(&program("let a = 1; const b = 2; var c = 3")).unwrap();
        let kinds: Vec<_> = declarations(&output).iter().map(|d| d.kind).collect();
        assert_eq!(kinds, vec![VariableDeclarationKind::Var; 3]);
    }

    #[test]
    fn declarators_are_shared() {
        let input = program("let x = 5");
        let output = transform(&input).unwrap();

        let before = declarations(&input)[0];
        let after = declarations(&output)[0];
        assert!(Rc::ptr_eq(&before.declarations, &after.declarations));
        assert_eq!(before.kind, VariableDeclarationKind::Let);
    }

    #[test]
    fn non_declarations_are_dropped() {
        let output = transform(&program("a let b 7")).unwrap();
        assert_eq!(output.body.len(), 1);
        assert_eq!(output.source_type, SourceType::Script);
    }

    #[test]
    fn markers_fail() {
        assert_eq!(transform(&program("let a = -")), Err(CompileError::UnsupportedNode("BinaryExpression")));
    }
}

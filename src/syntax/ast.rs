use std::rc::Rc;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SourceType {
    Script,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Program {
    pub body: Vec<Statement>,
    pub source_type: SourceType,
}

impl Program {
    pub fn script(body: Vec<Statement>) -> Program {
        Program { body: body, source_type: SourceType::Script }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    VariableDeclaration(VariableDeclaration),
    Expression(Expression),
}

#[derive(Debug, PartialEq, Clone)]
pub struct Literal {
    pub value: f64,
    pub raw: String,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Identifier {
    pub name: String,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BinOp {
    Plus,
    Minus,
    Times,
    Div,
}

impl BinOp {
    pub fn as_str(self) -> &'static str {
        match self {
            BinOp::Plus => "+",
            BinOp::Minus => "-",
            BinOp::Times => "*",
            BinOp::Div => "/",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AssignOp {
    Eq,
}

impl AssignOp {
    pub fn as_str(self) -> &'static str {
        match self {
            AssignOp::Eq => "=",
        }
    }
}

/// Operator without operands. The grammar only uses it to spot an
/// initializer.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct BinaryExpression {
    pub operator: BinOp,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct AssignmentExpression {
    pub operator: AssignOp,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Literal(Literal),
    Identifier(Identifier),
    Binary(BinaryExpression),
    Assignment(AssignmentExpression),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum VariableDeclarationKind {
    Var,
    Let,
    Const,
}

impl VariableDeclarationKind {
    /// Only the lowercase spelling declares; `LET` scans as a keyword but
    /// builds nothing.
    pub fn from_keyword(keyword: &str) -> Option<VariableDeclarationKind> {
        match keyword {
            "var" => Some(VariableDeclarationKind::Var),
            "let" => Some(VariableDeclarationKind::Let),
            "const" => Some(VariableDeclarationKind::Const),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VariableDeclarationKind::Var => "var",
            VariableDeclarationKind::Let => "let",
            VariableDeclarationKind::Const => "const",
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct VariableDeclarator {
    pub id: Identifier,
    pub init: Option<Expression>,
}

/// `declarations` is shared, not copied, between a tree and the trees
/// transformed from it.
#[derive(Debug, PartialEq, Clone)]
pub struct VariableDeclaration {
    pub declarations: Rc<Vec<VariableDeclarator>>,
    pub kind: VariableDeclarationKind,
}

/// Borrowed view of any node in the tree.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Program(&'a Program),
    VariableDeclaration(&'a VariableDeclaration),
    VariableDeclarator(&'a VariableDeclarator),
    Identifier(&'a Identifier),
    Literal(&'a Literal),
    BinaryExpression(&'a BinaryExpression),
    AssignmentExpression(&'a AssignmentExpression),
}

impl<'a> Node<'a> {
    pub fn type_name(&self) -> &'static str {
        match *self {
            Node::Program(_) => "Program",
            Node::VariableDeclaration(_) => "VariableDeclaration",
            Node::VariableDeclarator(_) => "VariableDeclarator",
            Node::Identifier(_) => "Identifier",
            Node::Literal(_) => "Literal",
            Node::BinaryExpression(_) => "BinaryExpression",
            Node::AssignmentExpression(_) => "AssignmentExpression",
        }
    }
}

impl<'a> From<&'a Program> for Node<'a> {
    fn from(program: &'a Program) -> Node<'a> {
        Node::Program(program)
    }
}

impl<'a> From<&'a Statement> for Node<'a> {
    fn from(statement: &'a Statement) -> Node<'a> {
        match *statement {
            Statement::VariableDeclaration(ref decl) => Node::VariableDeclaration(decl),
            Statement::Expression(ref expr) => Node::from(expr),
        }
    }
}

impl<'a> From<&'a Expression> for Node<'a> {
    fn from(expr: &'a Expression) -> Node<'a> {
        match *expr {
            Expression::Literal(ref lit) => Node::Literal(lit),
            Expression::Identifier(ref id) => Node::Identifier(id),
            Expression::Binary(ref bin) => Node::BinaryExpression(bin),
            Expression::Assignment(ref assign) => Node::AssignmentExpression(assign),
        }
    }
}

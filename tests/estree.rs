use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn estree(source: &str) -> Value {
    let ast = letvar::parse(&letvar::tokenize(source).unwrap()).unwrap();
    serde_json::to_value(&ast).unwrap()
}

#[test]
fn declaration_tree() {
    assert_eq!(estree("let x = 5"), json!({
        "type": "Program",
        "body": [{
            "type": "VariableDeclaration",
            "declarations": [{
                "type": "VariableDeclarator",
                "id": { "type": "Identifier", "name": "x" },
                "init": { "type": "Literal", "value": 5, "raw": "5" }
            }],
            "kind": "let"
        }],
        "sourceType": "script"
    }));
}

#[test]
fn uninitialized_declarator_has_null_init() {
    let tree = estree("const y;");

    assert_eq!(tree["body"][0]["kind"], json!("const"));
    assert_eq!(tree["body"][0]["declarations"][0]["init"], Value::Null);
}

#[test]
fn operator_markers() {
    assert_eq!(estree("* =")["body"], json!([
        { "type": "BinaryExpression", "operator": "*" },
        { "type": "AssignmentExpression", "operator": "=" }
    ]));
}

#[test]
fn transformed_tree() {
    let ast = letvar::parse(&letvar::tokenize("let a = b").unwrap()).unwrap();
    let transformed = letvar::transform(&ast).unwrap();

    assert_eq!(serde_json::to_value(&transformed).unwrap()["body"], json!([{
        "type": "VariableDeclaration",
        "declarations": [{
            "type": "VariableDeclarator",
            "id": { "type": "Identifier", "name": "a" },
            "init": { "type": "Identifier", "name": "b" }
        }],
        "kind": "var"
    }]));
}

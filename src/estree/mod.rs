use crate::syntax::ast::*;
use crate::syntax::token::Token;
use serde::ser::{Serialize, SerializeMap, Serializer};

// Integral values up to 2^53 are written as JSON integers, as JavaScript
// prints them.
const MAX_SAFE_INTEGER: f64 = 9007199254740991.0;

impl Serialize for Token {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", self.kind().as_str())?;
        map.serialize_entry("value", self.value())?;
        map.end()
    }
}

impl Serialize for Program {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("type", "Program")?;
        map.serialize_entry("body", &self.body)?;
        map.serialize_entry("sourceType", &self.source_type)?;
        map.end()
    }
}

impl Serialize for SourceType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        match *self {
            SourceType::Script => serializer.serialize_str("script"),
        }
    }
}

impl Serialize for Statement {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        match *self {
            Statement::VariableDeclaration(ref decl) => decl.serialize(serializer),
            Statement::Expression(ref expr) => expr.serialize(serializer),
        }
    }
}

impl Serialize for VariableDeclaration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("type", "VariableDeclaration")?;
        map.serialize_entry("declarations", &*self.declarations)?;
        map.serialize_entry("kind", &self.kind)?;
        map.end()
    }
}

impl Serialize for VariableDeclarationKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        serializer.serialize_str(self.as_str())
    }
}

impl Serialize for VariableDeclarator {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("type", "VariableDeclarator")?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("init", &self.init)?;
        map.end()
    }
}

impl Serialize for Expression {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        match *self {
            Expression::Literal(ref lit) => lit.serialize(serializer),
            Expression::Identifier(ref id) => id.serialize(serializer),
            Expression::Binary(ref bin) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "BinaryExpression")?;
                map.serialize_entry("operator", bin.operator.as_str())?;
                map.end()
            }
            Expression::Assignment(ref assign) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "AssignmentExpression")?;
                map.serialize_entry("operator", assign.operator.as_str())?;
                map.end()
            }
        }
    }
}

impl Serialize for Identifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", "Identifier")?;
        map.serialize_entry("name", &self.name)?;
        map.end()
    }
}

impl Serialize for Literal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("type", "Literal")?;
        if self.value.fract() == 0.0 && self.value <= MAX_SAFE_INTEGER {
            map.serialize_entry("value", &(self.value as u64))?;
        } else {
            map.serialize_entry("value", &self.value)?;
        }
        map.serialize_entry("raw", &self.raw)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use crate::syntax::{parse, tokenize};
    use serde_json::{self, json};

    #[test]
    fn literal_values_are_integers() {
        let program = parse(&tokenize("1 09").unwrap()).unwrap();
        assert_eq!(serde_json::to_value(&program.body).unwrap(), json!([
            { "type": "Literal", "value": 1, "raw": "1" },
            { "type": "Literal", "value": 9, "raw": "09" },
        ]));
    }

    #[test]
    fn huge_literals_stay_floats() {
        let program = parse(&tokenize("123456789012345678901234567890").unwrap()).unwrap();
        let value = serde_json::to_value(&program.body[0]).unwrap();
        assert!(value["value"].is_f64());
    }

    #[test]
    fn tokens() {
        let tokens = tokenize("let x =>").unwrap();
        assert_eq!(serde_json::to_value(&tokens).unwrap(), json!([
            { "type": "Keyword", "value": "let" },
            { "type": "Identifier", "value": "x" },
            { "type": "Punctuator", "value": "=>" },
        ]));
    }
}

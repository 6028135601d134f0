//! Various test utils.

use crate::SdlParseError;
use crate::ast;
use crate::parse;

/// Parses `source`, panicking with the rendered error on failure.
pub fn parse_schema(source: &str) -> ast::Document {
    match parse(source) {
        Ok(doc) => doc,
        Err(err) => panic!("failed to parse:\n{err}"),
    }
}

/// Parses `source`, panicking if it unexpectedly succeeds.
pub fn parse_error(source: &str) -> SdlParseError {
    match parse(source) {
        Ok(doc) => panic!("expected a parse error, got: {doc:#?}"),
        Err(err) => err,
    }
}

/// Returns the only object type definition in `source`.
pub fn parse_single_object(source: &str) -> ast::ObjectTypeDefinition {
    let doc = parse_schema(source);
    let mut objects = doc.definitions.into_iter().filter_map(|def| match def {
        ast::Definition::ObjectType(obj) => Some(obj),
        _ => None,
    });
    let obj = objects.next().expect("no object type definition");
    assert!(objects.next().is_none(), "more than one object type definition");
    obj
}

/// Returns the type of the first field of the first object type in `source`.
pub fn first_field_type(source: &str) -> ast::Type {
    let obj = parse_single_object(source);
    obj.field_definitions()
        .next()
        .expect("no field definitions")
        .field_type
        .clone()
}

/// Returns the default value of the first argument of the first field in
/// `type Query { f(arg: T = <value_src>): T }`.
pub fn parse_default_value(value_src: &str) -> ast::Value {
    let obj = parse_single_object(&format!("type Query {{ f(arg: T = {value_src}): T }}"));
    let field = obj.field_definitions().next().expect("no field");
    field
        .argument_definitions()
        .next()
        .expect("no argument")
        .default_value
        .clone()
        .expect("no default value")
}

pub fn name(value: &str) -> ast::Name {
    ast::Name::new(value)
}

pub fn comment(value: &str) -> ast::Comment {
    ast::Comment {
        value: value.to_string(),
    }
}

use crate::ast;
use crate::resolver::LiteralCoercionError;
use crate::resolver::QueryLiteral;
use crate::resolver::coerce_query_literal;
use crate::resolver::literal_to_raw_value;
use indexmap::IndexMap;
use serde_json::json;

type Result<T> = std::result::Result<T, LiteralCoercionError>;

mod query_literals {
    use super::*;

    #[test]
    fn numbers_are_parsed_from_their_lexeme() -> Result<()> {
        assert_eq!(coerce_query_literal(&QueryLiteral::Int("-12".to_string()))?, json!(-12));
        assert_eq!(coerce_query_literal(&QueryLiteral::Float("1.5e2".to_string()))?, json!(150.0));

        Ok(())
    }

    #[test]
    fn invalid_number_lexeme() {
        let err = coerce_query_literal(&QueryLiteral::Int("12abc".to_string())).unwrap_err();

        assert_eq!(err, LiteralCoercionError::InvalidNumber("12abc".to_string()));
    }

    #[test]
    fn compound_literals_convert_element_wise() -> Result<()> {
        let literal = QueryLiteral::Object(IndexMap::from([
            ("episode".to_string(), QueryLiteral::Enum("JEDI".to_string())),
            ("tags".to_string(), QueryLiteral::List(vec![
                QueryLiteral::String("a".to_string()),
                QueryLiteral::Null,
                QueryLiteral::Boolean(false),
            ])),
        ]));

        assert_eq!(
            coerce_query_literal(&literal)?,
            json!({"episode": "JEDI", "tags": ["a", null, false]}),
        );

        Ok(())
    }

    #[test]
    fn nested_variables_are_rejected() {
        let literal = QueryLiteral::List(vec![QueryLiteral::Variable("v".to_string())]);

        assert_eq!(
            coerce_query_literal(&literal).unwrap_err(),
            LiteralCoercionError::UnexpectedNode { kind: "Variable" },
        );
    }
}

mod sdl_literals {
    use super::*;

    fn default_value_of(sdl_value: &str) -> ast::Value {
        let document = schemaql_parser::parse(
            format!("input In {{ field: String = {sdl_value} }}").as_str(),
        ).unwrap();
        let Some(ast::Definition::InputObjectType(input)) = document.definitions.first() else {
            panic!("expected an input object definition");
        };
        input.field_definitions().next().unwrap().default_value.clone().unwrap()
    }

    #[test]
    fn scalars_pass_through() {
        assert_eq!(literal_to_raw_value(&default_value_of("7")), json!(7));
        assert_eq!(literal_to_raw_value(&default_value_of("-2.25")), json!(-2.25));
        assert_eq!(literal_to_raw_value(&default_value_of("\"hi\"")), json!("hi"));
        assert_eq!(literal_to_raw_value(&default_value_of("true")), json!(true));
    }

    #[test]
    fn enum_literals_become_names() {
        assert_eq!(literal_to_raw_value(&default_value_of("RED")), json!("RED"));
        assert_eq!(literal_to_raw_value(&default_value_of("null")), json!("null"));
    }

    #[test]
    fn compound_literals_recurse() {
        assert_eq!(
            literal_to_raw_value(&default_value_of("{ a: [1, 2], b: { c: GREEN } }")),
            json!({"a": [1, 2], "b": {"c": "GREEN"}}),
        );
    }
}

use crate::GenerateError;
use crate::TypeRegistry;
use crate::ast;
use crate::generator::GenerationContext;
use crate::generator::TypeBuilder;
use crate::types::EnumType;
use crate::types::EnumValue;
use inherent::inherent;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, GenerateError>;

#[derive(Debug)]
pub(crate) struct EnumTypeBuilder;

#[inherent]
impl TypeBuilder for EnumTypeBuilder {
    type AstTypeDef = ast::EnumTypeDefinition;

    /// When the caller registered no values for this enum, every value
    /// stands for its own name. Once any value is registered, all of them
    /// must be.
    pub(crate) fn visit_type_def(
        &mut self,
        ctx: &mut GenerationContext<'_>,
        registry: &mut TypeRegistry,
        def: &ast::EnumTypeDefinition,
    ) -> Result<()> {
        let description = ctx.descriptions.take();
        let enum_name = def.name.as_str();
        log::debug!("Generating enum type `{enum_name}`.");

        let implementations = ctx.implementations;
        let implemented_values = implementations.enum_values(enum_name);
        let mut values = IndexMap::new();
        for member in &def.values {
            let value_def = match member {
                ast::Member::Comment(comment) => {
                    ctx.descriptions.push(comment.value.as_str());
                    continue;
                },
                ast::Member::Item(value_def) => value_def,
            };
            let value_name = value_def.name.as_str();
            let value_description = ctx.descriptions.take();

            if values.contains_key(value_name) {
                return Err(GenerateError::DuplicateEnumValue {
                    enum_name: enum_name.to_string(),
                    value_name: value_name.to_string(),
                });
            }

            let value = match implemented_values {
                Some(implemented) => implemented
                    .get(value_name)
                    .cloned()
                    .ok_or_else(|| GenerateError::IncompleteEnumImplementation {
                        enum_name: enum_name.to_string(),
                        value_name: value_name.to_string(),
                    })?,
                None => serde_json::Value::String(value_name.to_string()),
            };

            values.insert(value_name.to_string(), EnumValue {
                description: value_description,
                name: value_name.to_string(),
                value,
            });
        }
        ctx.descriptions.discard();

        registry.enum_types.insert(enum_name.to_string(), EnumType {
            description,
            name: enum_name.to_string(),
            values,
        });
        Ok(())
    }
}

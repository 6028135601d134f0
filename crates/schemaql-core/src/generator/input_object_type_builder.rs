use crate::GenerateError;
use crate::TypeRegistry;
use crate::ast;
use crate::generator::GenerationContext;
use crate::generator::TypeBuilder;
use crate::generator::TypeBuilderHelpers;
use crate::types::InputObjectType;
use inherent::inherent;

type Result<T> = std::result::Result<T, GenerateError>;

#[derive(Debug)]
pub(crate) struct InputObjectTypeBuilder;

#[inherent]
impl TypeBuilder for InputObjectTypeBuilder {
    type AstTypeDef = ast::InputObjectTypeDefinition;

    pub(crate) fn visit_type_def(
        &mut self,
        ctx: &mut GenerationContext<'_>,
        registry: &mut TypeRegistry,
        def: &ast::InputObjectTypeDefinition,
    ) -> Result<()> {
        let description = ctx.descriptions.take();
        let type_name = def.name.as_str();
        log::debug!("Generating input object type `{type_name}`.");

        let fields = TypeBuilderHelpers::input_fields_from_ast(ctx, type_name, &def.fields)?;

        registry.input_object_types.insert(type_name.to_string(), InputObjectType {
            description,
            fields,
            name: type_name.to_string(),
        });
        Ok(())
    }
}

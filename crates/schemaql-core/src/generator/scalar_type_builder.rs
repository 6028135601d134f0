use crate::GenerateError;
use crate::TypeRegistry;
use crate::ast;
use crate::generator::GenerationContext;
use crate::generator::TypeBuilder;
use crate::types::ScalarType;
use inherent::inherent;

type Result<T> = std::result::Result<T, GenerateError>;

#[derive(Debug)]
pub(crate) struct ScalarTypeBuilder;

#[inherent]
impl TypeBuilder for ScalarTypeBuilder {
    type AstTypeDef = ast::ScalarTypeDefinition;

    pub(crate) fn visit_type_def(
        &mut self,
        ctx: &mut GenerationContext<'_>,
        registry: &mut TypeRegistry,
        def: &ast::ScalarTypeDefinition,
    ) -> Result<()> {
        let description = ctx.descriptions.take();
        let type_name = def.name.as_str();
        log::debug!("Generating scalar type `{type_name}`.");

        let implementation = match ctx.implementations.scalar_implementation(type_name) {
            Some(implementation) => implementation.clone(),
            None => {
                log::trace!("No implementation given for scalar `{type_name}`; using identity.");
                Default::default()
            },
        };

        registry.scalar_types.insert(type_name.to_string(), ScalarType {
            description,
            implementation,
            name: type_name.to_string(),
        });
        Ok(())
    }
}

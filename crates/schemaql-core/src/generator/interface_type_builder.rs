use crate::GenerateError;
use crate::TypeRegistry;
use crate::ast;
use crate::generator::FieldOwner;
use crate::generator::GenerationContext;
use crate::generator::TypeBuilder;
use crate::generator::TypeBuilderHelpers;
use crate::resolver::BoundTypeResolver;
use crate::types::InterfaceType;
use inherent::inherent;

type Result<T> = std::result::Result<T, GenerateError>;

#[derive(Debug)]
pub(crate) struct InterfaceTypeBuilder;

#[inherent]
impl TypeBuilder for InterfaceTypeBuilder {
    type AstTypeDef = ast::InterfaceTypeDefinition;

    pub(crate) fn visit_type_def(
        &mut self,
        ctx: &mut GenerationContext<'_>,
        registry: &mut TypeRegistry,
        def: &ast::InterfaceTypeDefinition,
    ) -> Result<()> {
        let description = ctx.descriptions.take();
        let type_name = def.name.as_str();
        log::debug!("Generating interface type `{type_name}`.");

        let fields = TypeBuilderHelpers::fields_from_ast(
            ctx,
            type_name,
            FieldOwner::Interface,
            &def.fields,
        )?;
        let resolve_type = ctx.implementations
            .type_resolver(type_name)
            .map(|resolver| BoundTypeResolver::new(type_name, resolver.clone()));

        registry.interface_types.insert(type_name.to_string(), InterfaceType {
            description,
            fields,
            name: type_name.to_string(),
            resolve_type,
        });
        Ok(())
    }
}

use crate::GenerateError;
use crate::TypeRegistry;
use crate::ast;
use crate::generator::FieldOwner;
use crate::generator::GenerationContext;
use crate::generator::TypeBuilder;
use crate::generator::TypeBuilderHelpers;
use crate::types::Field;
use crate::types::GraphQLTypeKind;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectType;
use inherent::inherent;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, GenerateError>;

/// The fields and interfaces contributed by one `extend type` definition,
/// generated but not yet merged into the extended type.
#[derive(Debug)]
struct PendingExtension {
    fields: IndexMap<String, Field>,
    interfaces: Vec<NamedGraphQLTypeRef>,
    type_name: String,
}

#[derive(Debug)]
pub(crate) struct ObjectTypeBuilder {
    extensions: Vec<PendingExtension>,
}
impl ObjectTypeBuilder {
    pub fn new() -> Self {
        Self {
            extensions: vec![],
        }
    }

    /// Generates the fields of an `extend type` definition.
    ///
    /// The extended type may be defined further down the document, so the
    /// merge itself is deferred to [`ObjectTypeBuilder::finalize`].
    pub fn visit_type_extension(
        &mut self,
        ctx: &mut GenerationContext<'_>,
        ext: &ast::TypeExtensionDefinition,
    ) -> Result<()> {
        let type_name = ext.definition.name.as_str();
        match ctx.namespace.kind_of(type_name) {
            Some(GraphQLTypeKind::Object) => (),
            Some(kind) => return Err(GenerateError::InvalidExtensionType {
                type_name: type_name.to_string(),
                kind,
            }),
            None => return Err(GenerateError::ExtensionOfUndefinedType {
                type_name: type_name.to_string(),
            }),
        }

        log::debug!("Generating extension of object type `{type_name}`.");
        let interfaces = TypeBuilderHelpers::interfaces_from_ast(ctx, &ext.definition.interfaces)?;
        let fields = TypeBuilderHelpers::fields_from_ast(
            ctx,
            type_name,
            FieldOwner::Object,
            &ext.definition.fields,
        )?;
        self.extensions.push(PendingExtension {
            fields,
            interfaces,
            type_name: type_name.to_string(),
        });
        Ok(())
    }

    /// Merges every pending extension into the type it extends, in the
    /// order the extensions were written.
    pub fn finalize(self, registry: &mut TypeRegistry) -> Result<()> {
        for ext in self.extensions {
            let Some(obj_type) = registry.object_types.get_mut(ext.type_name.as_str()) else {
                return Err(GenerateError::ExtensionOfUndefinedType {
                    type_name: ext.type_name,
                });
            };

            for iface in ext.interfaces {
                if !obj_type.implements(iface.name()) {
                    obj_type.interfaces.push(iface);
                }
            }

            for (field_name, field) in ext.fields {
                if obj_type.fields.contains_key(field_name.as_str()) {
                    return Err(GenerateError::DuplicateFieldDefinition {
                        type_name: ext.type_name,
                        field_name,
                    });
                }
                obj_type.fields.insert(field_name, field);
            }
        }
        Ok(())
    }
}

#[inherent]
impl TypeBuilder for ObjectTypeBuilder {
    type AstTypeDef = ast::ObjectTypeDefinition;

    pub(crate) fn visit_type_def(
        &mut self,
        ctx: &mut GenerationContext<'_>,
        registry: &mut TypeRegistry,
        def: &ast::ObjectTypeDefinition,
    ) -> Result<()> {
        let description = ctx.descriptions.take();
        let type_name = def.name.as_str();
        log::debug!("Generating object type `{type_name}`.");

        let interfaces = TypeBuilderHelpers::interfaces_from_ast(ctx, &def.interfaces)?;
        let fields = TypeBuilderHelpers::fields_from_ast(
            ctx,
            type_name,
            FieldOwner::Object,
            &def.fields,
        )?;

        registry.object_types.insert(type_name.to_string(), ObjectType {
            description,
            fields,
            interfaces,
            name: type_name.to_string(),
        });
        Ok(())
    }
}

use crate::GenerateError;
use crate::ImplementationMap;
use crate::TypeRegistry;
use crate::ast;
use crate::generator::DescriptionAccumulator;
use crate::generator::TypeNamespace;
use crate::generator::TypePosition;
use crate::resolver::BoundFieldResolver;
use crate::resolver::literal_to_raw_value;
use crate::types::Argument;
use crate::types::Field;
use crate::types::GraphQLTypeKind;
use crate::types::InputField;
use crate::types::NamedGraphQLTypeRef;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, GenerateError>;

/// State shared by every builder during one generation run.
pub(crate) struct GenerationContext<'a> {
    pub descriptions: DescriptionAccumulator,
    pub implementations: &'a ImplementationMap,
    pub namespace: TypeNamespace,
}

pub(crate) trait TypeBuilder {
    type AstTypeDef;

    /// Generates the descriptor for `def` and adds it to `registry`.
    ///
    /// Builders are visited in document order, so any pending description
    /// in `ctx` belongs to `def`.
    fn visit_type_def(
        &mut self,
        ctx: &mut GenerationContext<'_>,
        registry: &mut TypeRegistry,
        def: &Self::AstTypeDef,
    ) -> Result<()>;
}

/// Whose fields are being generated. Only object type fields are bound to
/// resolvers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum FieldOwner {
    Interface,
    Object,
}

pub(crate) struct TypeBuilderHelpers;
impl TypeBuilderHelpers {
    pub fn fields_from_ast(
        ctx: &mut GenerationContext<'_>,
        type_name: &str,
        owner: FieldOwner,
        members: &[ast::Member<ast::FieldDefinition>],
    ) -> Result<IndexMap<String, Field>> {
        let mut fields = IndexMap::new();
        for member in members {
            let field_def = match member {
                ast::Member::Comment(comment) => {
                    ctx.descriptions.push(comment.value.as_str());
                    continue;
                },
                ast::Member::Item(field_def) => field_def,
            };
            let field_name = field_def.name.as_str();
            let description = ctx.descriptions.take();

            if fields.contains_key(field_name) {
                return Err(GenerateError::DuplicateFieldDefinition {
                    type_name: type_name.to_string(),
                    field_name: field_name.to_string(),
                });
            }

            let arguments = match &field_def.arguments {
                Some(arg_members) => Some(Self::arguments_from_ast(
                    ctx,
                    type_name,
                    field_name,
                    arg_members,
                )?),
                None => None,
            };

            let resolver = match owner {
                FieldOwner::Interface => None,
                FieldOwner::Object => Self::bind_field_resolver(
                    ctx.implementations,
                    type_name,
                    field_def,
                )?,
            };

            fields.insert(field_name.to_string(), Field {
                arguments,
                description,
                name: field_name.to_string(),
                resolver,
                type_annotation: ctx.namespace.resolve(
                    &field_def.field_type,
                    TypePosition::Output,
                )?,
            });
        }
        ctx.descriptions.discard();
        Ok(fields)
    }

    fn arguments_from_ast(
        ctx: &mut GenerationContext<'_>,
        type_name: &str,
        field_name: &str,
        members: &[ast::Member<ast::InputValueDefinition>],
    ) -> Result<IndexMap<String, Argument>> {
        let mut arguments = IndexMap::new();
        for member in members {
            let arg_def = match member {
                ast::Member::Comment(comment) => {
                    ctx.descriptions.push(comment.value.as_str());
                    continue;
                },
                ast::Member::Item(arg_def) => arg_def,
            };
            let arg_name = arg_def.name.as_str();
            let description = ctx.descriptions.take();

            if arguments.contains_key(arg_name) {
                return Err(GenerateError::DuplicateArgumentDefinition {
                    type_name: type_name.to_string(),
                    field_name: field_name.to_string(),
                    argument_name: arg_name.to_string(),
                });
            }

            arguments.insert(arg_name.to_string(), Argument {
                default_value: arg_def.default_value.as_ref().map(literal_to_raw_value),
                description,
                name: arg_name.to_string(),
                type_annotation: ctx.namespace.resolve(
                    &arg_def.value_type,
                    TypePosition::Input,
                )?,
            });
        }
        ctx.descriptions.discard();
        Ok(arguments)
    }

    pub fn input_fields_from_ast(
        ctx: &mut GenerationContext<'_>,
        type_name: &str,
        members: &[ast::Member<ast::InputValueDefinition>],
    ) -> Result<IndexMap<String, InputField>> {
        let mut fields = IndexMap::new();
        for member in members {
            let field_def = match member {
                ast::Member::Comment(comment) => {
                    ctx.descriptions.push(comment.value.as_str());
                    continue;
                },
                ast::Member::Item(field_def) => field_def,
            };
            let field_name = field_def.name.as_str();
            let description = ctx.descriptions.take();

            if fields.contains_key(field_name) {
                return Err(GenerateError::DuplicateFieldDefinition {
                    type_name: type_name.to_string(),
                    field_name: field_name.to_string(),
                });
            }

            fields.insert(field_name.to_string(), InputField {
                default_value: field_def.default_value.as_ref().map(literal_to_raw_value),
                description,
                name: field_name.to_string(),
                type_annotation: ctx.namespace.resolve(
                    &field_def.value_type,
                    TypePosition::Input,
                )?,
            });
        }
        ctx.descriptions.discard();
        Ok(fields)
    }

    /// Resolves the `implements` list of an object type. Repeated names are
    /// kept once.
    pub fn interfaces_from_ast(
        ctx: &GenerationContext<'_>,
        interfaces: &[ast::NamedType],
    ) -> Result<Vec<NamedGraphQLTypeRef>> {
        let mut refs: Vec<NamedGraphQLTypeRef> = vec![];
        for iface in interfaces {
            let iface_name = iface.name.as_str();
            if ctx.namespace.kind_of(iface_name) != Some(GraphQLTypeKind::Interface) {
                return Err(GenerateError::UndefinedInterface {
                    interface_name: iface_name.to_string(),
                });
            }
            if !refs.iter().any(|existing| existing.name() == iface_name) {
                refs.push(NamedGraphQLTypeRef::new(iface_name, GraphQLTypeKind::Interface));
            }
        }
        Ok(refs)
    }

    /// Looks up the resolver for an object type field.
    ///
    /// Calculated fields must have one. Plain fields are bound when a
    /// resolver happens to be supplied and left unbound otherwise.
    fn bind_field_resolver(
        implementations: &ImplementationMap,
        type_name: &str,
        field_def: &ast::FieldDefinition,
    ) -> Result<Option<BoundFieldResolver>> {
        let field_name = field_def.name.as_str();
        match implementations.field_resolver(type_name, field_name) {
            Some(resolver) => {
                log::trace!("Binding resolver for `{type_name}.{field_name}`.");
                Ok(Some(BoundFieldResolver::new(type_name, field_name, resolver.clone())))
            },
            None if field_def.is_calculated() =>
                Err(GenerateError::MissingFieldImplementation {
                    type_name: type_name.to_string(),
                    field_name: field_name.to_string(),
                }),
            None => Ok(None),
        }
    }
}

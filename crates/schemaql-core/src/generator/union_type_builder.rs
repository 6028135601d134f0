use crate::GenerateError;
use crate::TypeRegistry;
use crate::ast;
use crate::generator::GenerationContext;
use crate::generator::TypeBuilder;
use crate::resolver::BoundTypeResolver;
use crate::types::GraphQLTypeKind;
use crate::types::NamedGraphQLTypeRef;
use crate::types::UnionType;
use inherent::inherent;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, GenerateError>;

#[derive(Debug)]
pub(crate) struct UnionTypeBuilder;

#[inherent]
impl TypeBuilder for UnionTypeBuilder {
    type AstTypeDef = ast::UnionTypeDefinition;

    pub(crate) fn visit_type_def(
        &mut self,
        ctx: &mut GenerationContext<'_>,
        registry: &mut TypeRegistry,
        def: &ast::UnionTypeDefinition,
    ) -> Result<()> {
        let description = ctx.descriptions.take();
        let union_name = def.name.as_str();
        log::debug!("Generating union type `{union_name}`.");

        let mut members = IndexMap::new();
        for member in &def.types {
            let member_name = member.name.as_str();
            match ctx.namespace.kind_of(member_name) {
                Some(GraphQLTypeKind::Object) => (),
                Some(member_kind) => return Err(GenerateError::InvalidUnionMemberType {
                    union_name: union_name.to_string(),
                    member_name: member_name.to_string(),
                    member_kind,
                }),
                None => return Err(GenerateError::TypeNotImplemented {
                    type_name: member_name.to_string(),
                }),
            }
            if members.contains_key(member_name) {
                return Err(GenerateError::DuplicateUnionMember {
                    union_name: union_name.to_string(),
                    member_name: member_name.to_string(),
                });
            }
            members.insert(
                member_name.to_string(),
                NamedGraphQLTypeRef::new(member_name, GraphQLTypeKind::Object),
            );
        }

        let resolve_type = ctx.implementations
            .type_resolver(union_name)
            .map(|resolver| BoundTypeResolver::new(union_name, resolver.clone()));

        registry.union_types.insert(union_name.to_string(), UnionType {
            description,
            members,
            name: union_name.to_string(),
            resolve_type,
        });
        Ok(())
    }
}

//! Compiles a parsed [`Document`](crate::ast::Document) into a
//! [`TypeRegistry`].
//!
//! Generation runs in two passes. The first declares every type name so
//! that references may point forward in the document. The second visits
//! definitions in document order, folding `#` comments into descriptions
//! and binding the caller's implementations as it goes.

mod description_accumulator;
mod enum_type_builder;
mod generate_error;
mod input_object_type_builder;
mod interface_type_builder;
mod object_type_builder;
mod scalar_type_builder;
mod type_builder;
mod type_namespace;
mod union_type_builder;

pub use description_accumulator::DescriptionAccumulator;
pub use generate_error::GenerateError;

use enum_type_builder::EnumTypeBuilder;
use input_object_type_builder::InputObjectTypeBuilder;
use interface_type_builder::InterfaceTypeBuilder;
use object_type_builder::ObjectTypeBuilder;
use scalar_type_builder::ScalarTypeBuilder;
use type_builder::FieldOwner;
use type_builder::GenerationContext;
use type_builder::TypeBuilder;
use type_builder::TypeBuilderHelpers;
use type_namespace::TypeNamespace;
use type_namespace::TypePosition;
use union_type_builder::UnionTypeBuilder;

use crate::ImplementationMap;
use crate::TypeRegistry;
use crate::ast;

type Result<T> = std::result::Result<T, GenerateError>;

/// Turns documents into registries, binding resolvers from one
/// [`ImplementationMap`].
///
/// A `Generator` holds no state between runs; the same one may generate any
/// number of documents.
#[derive(Clone, Copy, Debug)]
pub struct Generator<'a> {
    implementations: &'a ImplementationMap,
}
impl<'a> Generator<'a> {
    pub fn new(implementations: &'a ImplementationMap) -> Self {
        Self {
            implementations,
        }
    }

    pub fn generate(&self, document: &ast::Document) -> Result<TypeRegistry> {
        let mut ctx = GenerationContext {
            descriptions: DescriptionAccumulator::new(),
            implementations: self.implementations,
            namespace: TypeNamespace::from_document(document)?,
        };
        let mut registry = TypeRegistry::default();

        let mut enum_builder = EnumTypeBuilder;
        let mut inputobj_builder = InputObjectTypeBuilder;
        let mut iface_builder = InterfaceTypeBuilder;
        let mut obj_builder = ObjectTypeBuilder::new();
        let mut scalar_builder = ScalarTypeBuilder;
        let mut union_builder = UnionTypeBuilder;

        for def in &document.definitions {
            match def {
                ast::Definition::Comment(comment) =>
                    ctx.descriptions.push(comment.value.as_str()),

                ast::Definition::EnumType(def) =>
                    enum_builder.visit_type_def(&mut ctx, &mut registry, def)?,

                ast::Definition::InputObjectType(def) =>
                    inputobj_builder.visit_type_def(&mut ctx, &mut registry, def)?,

                ast::Definition::InterfaceType(def) =>
                    iface_builder.visit_type_def(&mut ctx, &mut registry, def)?,

                ast::Definition::ObjectType(def) =>
                    obj_builder.visit_type_def(&mut ctx, &mut registry, def)?,

                ast::Definition::ScalarType(def) =>
                    scalar_builder.visit_type_def(&mut ctx, &mut registry, def)?,

                ast::Definition::TypeExtension(ext) => {
                    // Extensions carry no documentation of their own.
                    ctx.descriptions.discard();
                    obj_builder.visit_type_extension(&mut ctx, ext)?;
                },

                ast::Definition::UnionType(def) =>
                    union_builder.visit_type_def(&mut ctx, &mut registry, def)?,
            }
        }
        ctx.descriptions.discard();
        obj_builder.finalize(&mut registry)?;

        log::debug!("Generated {} type(s).", registry.len());
        Ok(registry)
    }
}

#[cfg(test)]
mod tests;

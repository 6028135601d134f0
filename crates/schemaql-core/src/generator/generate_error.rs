use crate::SdlParseError;
use crate::types::GraphQLTypeKind;

/// Everything that can stop a document from compiling.
///
/// Generation is all-or-nothing: the first error aborts the run and no
/// partially built [`TypeRegistry`](crate::TypeRegistry) is returned.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GenerateError {
    #[error("{0}")]
    Parse(#[from] SdlParseError),

    #[error("Multiple types named `{type_name}` were defined")]
    DuplicateTypeDefinition {
        type_name: String,
    },

    #[error("The `{type_name}` type defines the `{field_name}` field more than once")]
    DuplicateFieldDefinition {
        type_name: String,
        field_name: String,
    },

    #[error("`{type_name}.{field_name}` defines the `{argument_name}` argument more than once")]
    DuplicateArgumentDefinition {
        type_name: String,
        field_name: String,
        argument_name: String,
    },

    #[error("The `{enum_name}` enum defines the `{value_name}` value more than once")]
    DuplicateEnumValue {
        enum_name: String,
        value_name: String,
    },

    #[error("The `{union_name}` union lists `{member_name}` as a member more than once")]
    DuplicateUnionMember {
        union_name: String,
        member_name: String,
    },

    #[error("Attempted to extend `{type_name}`, which is not defined")]
    ExtensionOfUndefinedType {
        type_name: String,
    },

    #[error(
        "The `{enum_name}` enum has an implementation, but it does not provide \
        a value for `{value_name}`"
    )]
    IncompleteEnumImplementation {
        enum_name: String,
        value_name: String,
    },

    #[error(
        "Attempted to extend `{type_name}`, but only object types can be \
        extended (it is {})",
        .kind.name()
    )]
    InvalidExtensionType {
        type_name: String,
        kind: GraphQLTypeKind,
    },

    #[error(
        "`{member_name}` cannot be a member of the `{union_name}` union: union \
        members must be object types (it is {})",
        .member_kind.name()
    )]
    InvalidUnionMemberType {
        union_name: String,
        member_name: String,
        member_kind: GraphQLTypeKind,
    },

    #[error(
        "{type_name}.{field_name} is calculated (i.e. it accepts arguments) but \
        does not have an implementation"
    )]
    MissingFieldImplementation {
        type_name: String,
        field_name: String,
    },

    #[error("No `Query` object type is defined")]
    NoQueryOperationTypeDefined,

    #[error("{type_name} is not implemented.")]
    TypeNotImplemented {
        type_name: String,
    },

    #[error("{interface_name} is not defined.")]
    UndefinedInterface {
        interface_name: String,
    },
}

//! A parser for a compact GraphQL schema definition language (SDL).
//!
//! The language covers object types, interfaces, unions, scalars, enums,
//! input objects, and object type extensions. `#` comments are kept in the
//! AST so that later stages can turn them into documentation.

pub mod ast;
mod scan_pattern;
mod scanner;
mod sdl_parse_error;
mod sdl_parse_error_kind;
mod sdl_parser;
mod source_position;

pub use scan_pattern::ScanPattern;
pub use scanner::Scanner;
pub use sdl_parse_error::SdlParseError;
pub use sdl_parse_error::SdlParseErrorNotes;
pub use sdl_parse_error_kind::SdlParseErrorKind;
pub use sdl_parser::SdlParser;
pub use sdl_parser::parse;
pub use smallvec::SmallVec;
pub use smallvec::smallvec;
pub use source_position::SourcePosition;

#[cfg(test)]
mod tests;

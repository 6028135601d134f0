mod enum_type_builder_tests;
mod extension_tests;

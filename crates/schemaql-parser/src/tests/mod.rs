mod sdl_parse_error_tests;
mod sdl_parser_schema_tests;
mod utils;

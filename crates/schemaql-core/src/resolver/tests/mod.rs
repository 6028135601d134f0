mod implementation_map_tests;
mod literal_coercion_tests;
mod scalar_implementation_tests;

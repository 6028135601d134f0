mod concurrency_tests;
mod execution_tests;
mod macro_runtime_tests;
mod star_wars;

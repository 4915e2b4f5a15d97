mod basic_operations;
mod helpers;
mod wire_tests;

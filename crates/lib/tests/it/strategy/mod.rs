//! Addressing strategy integration tests

mod flat_tests;
mod hierarchical_tests;
mod selection_tests;

//! Test Module
//!
//! Cross-module test suite for the evolver.
//!
//! ## Test Categories
//! - `analysis_tests`: Heuristic properties over realistic snippets
//! - `prompt_tests`: Prompt building and response unwrapping together
//! - `actor_tests`: Evolver actor concurrency and view publication
//! - `integration_tests`: Full evolve workflow against a mocked Gemini endpoint

pub mod actor_tests;
pub mod analysis_tests;

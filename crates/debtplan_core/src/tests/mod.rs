//! Integration tests for the debtplan engine
//!
//! Tests are organized by topic:
//! - `amortize` - Single-debt amortization mechanics and error taxonomy
//! - `waterfall` - Multi-debt simulation, freed-minimum reallocation
//! - `comparison` - Two-strategy comparator and recommendation heuristic
//! - `scoring` - Financial health score formulas and boundaries

mod amortize;
mod scoring;

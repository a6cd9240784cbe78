//! AI components

pub mod agent;
pub mod fsm;
pub mod plan;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod fsm_tests;

// Re-export all components
pub use agent::*;
pub use fsm::*;
pub use plan::*;

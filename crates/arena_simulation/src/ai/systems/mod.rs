//! AI systems (strategic layer logic)

pub mod contact;
pub mod fsm;
pub mod movement;
pub mod sense;

// Re-export all systems
pub use contact::*;
pub use fsm::*;
pub use movement::*;
pub use sense::*;

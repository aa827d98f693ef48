//! Agent loop: transcript state and the round-bounded execution engine

mod engine;
mod transcript;

pub use engine::{AgentEngine, AgentOutcome};
pub use transcript::Transcript;

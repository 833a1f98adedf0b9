//! Text generation adapters

mod claude;

pub use claude::ClaudeGenerator;

pub mod tts_flow;

pub use tts_flow::{TtsFlow, TtsOutcome};

pub mod args;
pub mod audio;
pub mod language;

pub use args::TtsArgs;
pub use audio::{AudioFormat, AudioOutput, Speed};
pub use language::Language;

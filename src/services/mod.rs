pub mod cleanup;
pub mod encoder;

pub use cleanup::{CleanupReport, CleanupService};

pub mod types;

pub use types::{Audio, Card, LookupOutcome, OutputPaths, WordEntry};

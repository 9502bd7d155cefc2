pub mod jsonl;

pub use jsonl::JsonLinesStore;

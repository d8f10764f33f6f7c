pub mod classifier;
pub mod converter;
pub mod engine;
pub mod registry;
pub mod tokenizer;
pub mod types;

pub mod config;
pub mod constants;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod logging;
pub mod pipeline;
pub mod types;
pub mod writer;

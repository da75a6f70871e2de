//! Materializer adapters.

mod fs;

pub use fs::FsMaterializer;

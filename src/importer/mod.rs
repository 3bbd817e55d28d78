pub mod coerce;
pub mod mapper;
pub mod parser;
pub mod pipeline;
pub mod template;

// Re-export the pipeline surface the HTTP layer consumes
pub use mapper::JobPostDraft;
pub use pipeline::{process_import, ImportError};

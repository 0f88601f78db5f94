//! Cloner engine: snapshot provider, model client, pipeline driver and export.
mod engine;
mod export;
mod generate;
mod persist;
mod pipeline;
mod prompt;
mod schema;
mod scrape;
mod snapshot;
mod types;

pub use engine::{EngineError, EngineHandle};
pub use export::{export_project, render_export, ExportError, ExportSummary, EXPORT_FILENAME};
pub use generate::{
    GeminiGenerator, GeneratorSettings, ProjectGenerator, DEFAULT_BASE_URL, DEFAULT_MODEL,
};
pub use persist::{ensure_export_dir, write_atomic, PersistError};
pub use pipeline::{ChannelEventSink, ClonePipeline, EventSink, PipelineSettings};
pub use prompt::{
    truncate_chars, GenerationRequest, MAX_HTML_CHARS, MAX_STYLE_CHARS, SYSTEM_INSTRUCTION,
};
pub use schema::{parse_project, response_schema, SchemaError};
pub use scrape::{MockScraper, Scraper, ScraperSettings};
pub use snapshot::{style_map, ScrapedSnapshot, SnapshotMetadata, StyleMap};
pub use types::{CloneError, EngineEvent, FailureKind, RunId, Stage, INVALID_FORMAT_MESSAGE};

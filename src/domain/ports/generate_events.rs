//! Generate Event Port
//!
//! Provides an observable interface for generator runs.
//! The console renders these as one line per action.

use std::path::PathBuf;

/// How an asset gets its bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteAction {
    /// Rendered from the source image
    Create,
    /// Copied verbatim from the source image
    Copy,
    /// Serialized from static metadata
    Emit,
}

/// Event emitted during a generator run
#[derive(Debug, Clone)]
pub enum GenerateEvent {
    /// Output directory did not exist and was created
    OutputDirCreated { path: PathBuf },

    /// Generation started
    Started { source: PathBuf, output_dir: PathBuf },

    /// An asset is about to be produced
    AssetStarted { name: String, detail: String },

    /// Asset was written
    AssetWritten { name: String, action: WriteAction },

    /// Asset already existed and was left alone
    AssetSkipped { name: String },

    /// Producing or writing the asset failed
    AssetFailed {
        name: String,
        action: WriteAction,
        error: String,
    },

    /// Run completed
    Completed {
        created_count: usize,
        skipped_count: usize,
        error_count: usize,
    },
}

/// Trait for receiving generate events
///
/// Implementations can be:
/// - ConsoleEventSink: line-per-action output in the terminal
/// - NoopEventSink: Silent operation
pub trait GenerateEventSink: Send + Sync {
    /// Handle a generate event
    fn on_event(&self, event: GenerateEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl GenerateEventSink for NoopEventSink {
    fn on_event(&self, _event: GenerateEvent) {}
}

//! Generate Use Case
//!
//! Runs the icon pipeline:
//! 1. Check capabilities and the source icon (fatal on failure)
//! 2. Prepare the output directory
//! 3. Render each sized icon
//! 4. Copy the source icon under its canonical name
//! 5. Build the multi-resolution `favicon.ico`
//! 6. Write `site.webmanifest`
//!
//! Steps 3-6 catch their own errors; a failed asset never stops the run.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::application::Capabilities;
use crate::config::{GeneratorConfig, CANONICAL_ICON, FAVICON_ICO, MANIFEST_FILE};
use crate::domain::entities::{GenerationReport, StepOutcome};
use crate::domain::ports::{
    FileSystem, GenerateEvent, GenerateEventSink, IcoEncoder, ImageResizer, NoopEventSink,
    WriteAction,
};
use crate::error::{GenerateError, GenerateResult};

use super::options::GenerateOptions;

/// One existence-guarded output
struct Step<'a> {
    name: &'a str,
    path: PathBuf,
    action: WriteAction,
    /// Shown when the step starts; `None` for steps that announce nothing
    detail: Option<String>,
}

/// Generate use case - derives all web icon assets from the source icon
///
/// Parameterized by its file system port so tests can run in memory.
pub struct GenerateUseCase<FS>
where
    FS: FileSystem,
{
    file_system: FS,
    capabilities: Capabilities,
    config: GeneratorConfig,
}

impl<FS> GenerateUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(file_system: FS, capabilities: Capabilities, config: GeneratorConfig) -> Self {
        Self {
            file_system,
            capabilities,
            config,
        }
    }

    /// Execute the generate use case
    pub fn execute(&self, options: &GenerateOptions) -> GenerateResult<GenerationReport> {
        self.execute_with_events(options, &NoopEventSink)
    }

    /// Execute the generate use case with event reporting
    ///
    /// Returns `Err` only for the fatal preconditions (missing capability,
    /// missing source) and for failures preparing the output directory;
    /// per-asset failures, including an unreadable source, are recorded in
    /// the report.
    pub fn execute_with_events(
        &self,
        options: &GenerateOptions,
        sink: &dyn GenerateEventSink,
    ) -> GenerateResult<GenerationReport> {
        let (resizer, ico_encoder) = self.capabilities.require()?;
        let config = &self.config;

        if !self.file_system.exists(&config.source) {
            return Err(GenerateError::MissingSource {
                path: config.source.clone(),
            });
        }

        let mut report = GenerationReport::new(config.output_dir.clone(), config.manifest_dir());
        if !self.file_system.exists(&config.output_dir) {
            self.file_system.create_dir_all(&config.output_dir)?;
            report.created_output_dir = true;
            sink.on_event(GenerateEvent::OutputDirCreated {
                path: config.output_dir.clone(),
            });
        }

        sink.on_event(GenerateEvent::Started {
            source: config.source.clone(),
            output_dir: config.output_dir.clone(),
        });

        // An unreadable source fails each step that needs its bytes.
        let source = self
            .file_system
            .read(&config.source)
            .map_err(|e| e.to_string());

        for target in config.targets {
            let step = Step {
                name: target.file_name,
                path: config.target_path(target),
                action: WriteAction::Create,
                detail: Some(format!("({}) - {}", target.dimensions(), target.purpose)),
            };
            let outcome = self.guarded(step, options, sink, |path| {
                let bytes = source_bytes(&source, &config.source)?;
                let png = resizer.resize_png(bytes, target.size)?;
                self.file_system.write(path, &png)?;
                Ok(())
            });
            report.record(target.file_name, outcome);
        }

        let step = Step {
            name: CANONICAL_ICON,
            path: config.canonical_icon_path(),
            action: WriteAction::Copy,
            detail: None,
        };
        let outcome = self.guarded(step, options, sink, |path| {
            self.file_system.copy(&config.source, path)?;
            Ok(())
        });
        report.record(CANONICAL_ICON, outcome);

        let step = Step {
            name: FAVICON_ICO,
            path: config.ico_path(),
            action: WriteAction::Create,
            detail: Some("(multi-resolution)".to_string()),
        };
        let outcome = self.guarded(step, options, sink, |path| {
            let ico = render_ico(
                resizer.as_ref(),
                ico_encoder.as_ref(),
                source_bytes(&source, &config.source)?,
                config.ico_sizes,
            )?;
            self.file_system.write(path, &ico)?;
            Ok(())
        });
        report.record(FAVICON_ICO, outcome);

        // The manifest is static metadata and is rewritten on every run.
        let manifest_path = config.manifest_path();
        let outcome = self.attempt(MANIFEST_FILE, WriteAction::Emit, sink, || {
            let json = config.manifest.to_manifest().to_json()?;
            self.file_system.write(&manifest_path, json.as_bytes())?;
            Ok(())
        });
        report.record(MANIFEST_FILE, outcome);

        sink.on_event(GenerateEvent::Completed {
            created_count: report.created(),
            skipped_count: report.skipped(),
            error_count: report.failed(),
        });

        Ok(report)
    }

    /// Skip `step` if its file exists and `force` is off, otherwise produce it.
    fn guarded(
        &self,
        step: Step<'_>,
        options: &GenerateOptions,
        sink: &dyn GenerateEventSink,
        produce: impl FnOnce(&Path) -> GenerateResult<()>,
    ) -> StepOutcome {
        if !options.force && self.file_system.exists(&step.path) {
            sink.on_event(GenerateEvent::AssetSkipped {
                name: step.name.to_string(),
            });
            return StepOutcome::Skipped;
        }

        if let Some(detail) = step.detail {
            sink.on_event(GenerateEvent::AssetStarted {
                name: step.name.to_string(),
                detail,
            });
        }

        let path = step.path;
        self.attempt(step.name, step.action, sink, || produce(&path))
    }

    /// Run one step, turning its error into a `Failed` outcome.
    fn attempt(
        &self,
        name: &str,
        action: WriteAction,
        sink: &dyn GenerateEventSink,
        produce: impl FnOnce() -> GenerateResult<()>,
    ) -> StepOutcome {
        match produce() {
            Ok(()) => {
                sink.on_event(GenerateEvent::AssetWritten {
                    name: name.to_string(),
                    action,
                });
                StepOutcome::Created
            }
            Err(err) => {
                let error = err.to_string();
                sink.on_event(GenerateEvent::AssetFailed {
                    name: name.to_string(),
                    action,
                    error: error.clone(),
                });
                StepOutcome::Failed(error)
            }
        }
    }
}

fn source_bytes<'a>(
    source: &'a Result<Vec<u8>, String>,
    path: &Path,
) -> GenerateResult<&'a [u8]> {
    source
        .as_deref()
        .map_err(|message| GenerateError::UnreadableSource {
            path: path.to_path_buf(),
            message: message.clone(),
        })
}

/// Render every ICO size in parallel, then pack them in `sizes` order.
fn render_ico(
    resizer: &dyn ImageResizer,
    encoder: &dyn IcoEncoder,
    source: &[u8],
    sizes: &[u32],
) -> GenerateResult<Vec<u8>> {
    let buffers = sizes
        .par_iter()
        .map(|&size| resizer.resize_png(source, size))
        .collect::<GenerateResult<Vec<_>>>()?;
    encoder.encode(&buffers)
}

use std::path::Path;

use web_icons::domain::ports::{GenerateEvent, WriteAction};
use web_icons::GenerationReport;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_generate_header(
    source: &Path,
    output_dir: &Path,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Generate, "Generating web icons");
    header.add("Source", source.display().to_string());
    header.add("Output", output_dir.display().to_string());
    header.render(supports_color, supports_unicode)
}

/// One console line per event; `None` for events rendered elsewhere.
pub fn render_event(
    event: &GenerateEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> Option<String> {
    let icon = |icon: Icon| icon.colored(supports_color, supports_unicode);

    let line = match event {
        GenerateEvent::OutputDirCreated { path } => format!(
            "{} Created output directory: {}",
            icon(Icon::Folder),
            path.display()
        ),
        GenerateEvent::Started { source, output_dir } => {
            return Some(render_generate_header(
                source,
                output_dir,
                supports_color,
                supports_unicode,
            ))
        }
        GenerateEvent::AssetStarted { name, detail } => format!(
            "{} Creating {} {}",
            icon(Icon::Progress),
            name,
            ColoredText::dim(detail.as_str()).render(supports_color)
        ),
        GenerateEvent::AssetWritten { name, action } => match action {
            WriteAction::Copy => format!("  {} Copied original {}", icon(Icon::Success), name),
            WriteAction::Create | WriteAction::Emit => {
                format!("  {} Created {}", icon(Icon::Success), name)
            }
        },
        GenerateEvent::AssetSkipped { name } => format!(
            "{} Skipping {} - already exists {}",
            icon(Icon::Skip),
            name,
            ColoredText::dim("(use --force to overwrite)").render(supports_color)
        ),
        GenerateEvent::AssetFailed {
            name,
            action,
            error,
        } => format!(
            "  {} Failed to {} {}: {}",
            icon(Icon::Error),
            verb(*action),
            name,
            ColoredText::error(error.as_str()).render(supports_color)
        ),
        GenerateEvent::Completed { .. } => return None,
    };
    Some(format!("{line}\n"))
}

fn verb(action: WriteAction) -> &'static str {
    match action {
        WriteAction::Create => "create",
        WriteAction::Copy => "copy",
        WriteAction::Emit => "write",
    }
}

pub fn render_generate_summary(
    report: &GenerationReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    // Per-asset failures do not change the verdict; they are listed below it.
    let mut summary = ResultSummary::success("Icon generation completed successfully!");

    summary.add_stat("created", report.created());
    summary.add_stat("skipped", report.skipped());
    summary.add_stat("failed", report.failed());

    summary.add_info(format!(
        "Generated web icons in: {}",
        report.output_dir.display()
    ));
    summary.add_info(format!(
        "Generated manifest in: {}",
        report.manifest_dir.display()
    ));

    for (asset, reason) in report.failures() {
        summary.add_warning(format!("{asset}: {reason}"));
    }

    summary.render(supports_color, supports_unicode)
}

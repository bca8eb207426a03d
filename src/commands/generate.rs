//! Generate command handler
//!
//! Runs the generator with a console event sink and prints the summary.

use anyhow::Result;

use web_icons::domain::ports::{GenerateEvent, GenerateEventSink};
use web_icons::presentation::create_generate_use_case;
use web_icons::{GenerateOptions, GeneratorConfig};

use crate::ui::context::UiContext;
use crate::ui::views::generate::{render_event, render_generate_summary};

/// Prints one line per generator event; failures go to stderr.
struct ConsoleEventSink {
    ui: UiContext,
}

impl GenerateEventSink for ConsoleEventSink {
    fn on_event(&self, event: GenerateEvent) {
        let failed = matches!(event, GenerateEvent::AssetFailed { .. });
        let Some(line) = render_event(&event, self.ui.color, self.ui.unicode) else {
            return;
        };
        if failed {
            eprint!("{}", line);
        } else {
            print!("{}", line);
        }
    }
}

/// Execute the generate command
pub fn cmd_generate(config: GeneratorConfig, force: bool) -> Result<()> {
    let ui = UiContext::new();
    let use_case = create_generate_use_case(config);

    let options = GenerateOptions { force };
    let sink = ConsoleEventSink { ui };
    let report = use_case.execute_with_events(&options, &sink)?;

    println!();
    print!("{}", render_generate_summary(&report, ui.color, ui.unicode));
    Ok(())
}

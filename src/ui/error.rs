use web_icons::presentation::factory::REQUIRED_CAPABILITIES;
use web_icons::GenerateError;

use crate::ui::blocks::error::ErrorBlock;

pub fn format_generate_error(err: &GenerateError) -> String {
    let caps = crate::ui::terminal::detect_capabilities();
    format_generate_error_with(err, caps.supports_color, caps.supports_unicode)
}

fn format_generate_error_with(
    err: &GenerateError,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    match err {
        GenerateError::MissingSource { path } => ErrorBlock::new(
            path.display().to_string(),
            "Source icon not found.",
        )
        .with_fix("Please ensure the mod icon exists at the specified path.")
        .render(supports_color, supports_unicode),
        GenerateError::MissingCapability { name } => {
            let mut fix = String::from("Install a build of web-icons that bundles:\n");
            for capability in REQUIRED_CAPABILITIES {
                fix.push_str(&format!("  {}\n", capability));
            }
            fix.push_str("then run again:\n  cargo install --path . --force");
            ErrorBlock::new(*name, format!("The {} capability is not available.", name))
                .with_fix(fix)
                .render(supports_color, supports_unicode)
        }
        other => ErrorBlock::new("web-icons", other.to_string())
            .render(supports_color, supports_unicode),
    }
}

pub fn format_error(err: &anyhow::Error) -> String {
    if let Some(generate) = err.downcast_ref::<GenerateError>() {
        if generate.is_fatal() {
            return format_generate_error(generate);
        }
    }

    format!("[ERROR] {:#}\n", err)
}

pub fn print_error(err: &anyhow::Error) {
    eprint!("{}", format_error(err));
}

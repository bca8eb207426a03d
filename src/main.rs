//! web-icons - generates the documentation site's icons from the mod icon
//!
//! Usage: web-icons [-f|--force]
//!
//! Reads `src/main/resources/assets/icon.png` and writes the sized PNGs,
//! `icon.png` and `favicon.ico` into `docs/static/img/`, plus
//! `docs/static/site.webmanifest`.

use anyhow::Context;

use web_icons::presentation::parse_args;
use web_icons::GeneratorConfig;

mod commands;
mod ui;

fn main() {
    let config = match std::env::current_dir().context("cannot determine working directory") {
        Ok(root) => GeneratorConfig::for_root(&root),
        Err(e) => {
            ui::error::print_error(&e);
            std::process::exit(1);
        }
    };

    let cli = match parse_args(std::env::args_os(), &config) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    if let Err(e) = commands::generate::cmd_generate(config, cli.force) {
        ui::error::print_error(&e);
        std::process::exit(1);
    }
}

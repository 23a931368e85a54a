// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Holocron-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Holocron and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Holocron CLI entrypoint.
//!
//! Runs the interactive TUI against the configured API root. Logs go to a file, never to the
//! terminal the TUI occupies.

use std::error::Error;
use std::sync::Arc;

use holocron::client::{HttpClient, ResourceSource};
use holocron::config::{CliOptions, Config};
use tracing::info;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--tab <category>] [--open <reference-url>] [--base-url <url>] [--timeout-secs <n>] [--log-file <path>]\n\n--tab selects the initial tab: characters, films, planets, starships, vehicles or species (upstream path names such as `people` work too).\n--open starts by navigating to a record URL, e.g. https://swapi.py4e.com/api/planets/1/.\n\nEnvironment: HOLOCRON_BASE_URL, HOLOCRON_TIMEOUT_SECS, HOLOCRON_LOG_FILE, HOLOCRON_LOG (tracing filter, default `holocron=info`), HOLOCRON_TUI_PALETTE (role=color pairs, e.g. `accent=#33ff33,dim=8`). Flags win over environment."
    );
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        let slot = match arg.as_str() {
            "--base-url" => &mut options.base_url,
            "--tab" => &mut options.tab,
            "--open" => &mut options.open,
            "--timeout-secs" => &mut options.timeout_secs,
            "--log-file" => &mut options.log_file,
            _ => return Err(()),
        };
        if slot.is_some() {
            return Err(());
        }
        let value = args.next().ok_or(())?;
        if value.starts_with("--") {
            return Err(());
        }
        *slot = Some(value);
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "holocron".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let config = Config::from_env(options)?;
        holocron::logging::init(config.log_file.as_deref(), &config.log_filter)?;
        info!(base_url = %config.base_url, tab = %config.initial_tab, "starting");

        let source: Arc<dyn ResourceSource> = Arc::new(HttpClient::new(&config.client_config())?);
        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
        let handle = runtime.handle().clone();

        let tui = runtime.spawn_blocking(move || holocron::tui::run(&config, source, handle));
        runtime.block_on(tui)??;

        info!("exiting");
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("holocron: {err}");
        std::process::exit(1);
    }
}

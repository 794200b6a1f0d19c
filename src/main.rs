/*
 * This file is part of Curveref.
 *
 * Copyright (C) 2025 Curveref contributors
 *
 * Curveref is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * Curveref is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Curveref. If not, see <https://www.gnu.org/licenses/>.
 */

use std::io::stdout;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::Terminal;

use curveref::app::App;
use curveref::bus::EventBus;
use curveref::config::{load_settings, load_settings_from, Settings};
use curveref::controller::CurveReferenceController;
use curveref::curve_ref::CurveReference;
use curveref::events::handle_key_event;
use curveref::logger;
use curveref::model::{demo_model, ModelData};
use curveref::raw_source::DisplayContext;
use curveref::ui::ui;

const DEFAULT_LOG_PATH: &str = "/tmp/curveref/logs.json";
const POLL_INTERVAL: Duration = Duration::from_millis(250);

const USAGE: &str = "usage: curveref [--config <settings.json>] [--logging]";

fn main() -> anyhow::Result<()> {
    // Gather args once
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{}", USAGE);
        return Ok(());
    }

    let config_arg = args
        .iter()
        .position(|a| a == "--config")
        .map(|i| args.get(i + 1).map(PathBuf::from));
    let settings = match config_arg {
        Some(Some(path)) => load_settings_from(&path)?,
        Some(None) => {
            eprintln!("--config needs a path\n{}", USAGE);
            std::process::exit(2);
        }
        None => load_settings()?,
    };

    // Optional JSON-lines event log
    let logging_enabled = args.iter().any(|a| a == "--logging");
    if logging_enabled {
        let path = settings
            .log_path
            .clone()
            .unwrap_or_else(|| Path::new(DEFAULT_LOG_PATH).to_path_buf());
        logger::init_logging(&path);
        logger::log_event("startup", serde_json::json!({ "args": args }));
    }

    let model = demo_model();
    let mut curve_ref = CurveReference::default();

    // Terminal init
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &model, &mut curve_ref, settings);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
        logger::log_event("fatal_error", serde_json::json!({ "error": err.to_string() }));
        std::process::exit(1);
    }

    let ctx = DisplayContext { model: Some(&model), prefix_custom_name: true };
    println!(
        "{}: {}",
        CurveReference::kind_to_string(curve_ref.kind.ordinal()),
        curve_ref.to_display_string(&ctx, false)
    );
    logger::log_event("shutdown", serde_json::json!({ "curve_ref": curve_ref }));
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<ratatui::backend::CrosstermBackend<std::io::Stdout>>,
    model: &ModelData,
    curve_ref: &mut CurveReference,
    settings: Settings,
) -> anyhow::Result<()> {
    let bus = EventBus::new();
    let mut app = App::new(model.clone(), bus.clone());
    let mut controller = CurveReferenceController::new(curve_ref, app.collaborators(), bus, settings);

    loop {
        if app.take_resized() {
            terminal.autoresize()?;
        }
        terminal.draw(|f| ui(f, &app, controller.curve_ref()))?;

        if event::poll(POLL_INTERVAL).unwrap_or(false) {
            if let Event::Key(key_event) = event::read()? {
                if handle_key_event(&mut app, key_event)? {
                    return Ok(());
                }
            }
        }

        controller.process_pending();
        app.after_dispatch();
    }
}

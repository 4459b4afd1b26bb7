use std::io::{self, BufRead, Write};
use std::path::Path;

use clap::ArgMatches;
use tracing::{error, info};

use pr_core::config::{PrConfig, PrContext};
use pr_core::editor;
use pr_core::events;
use pr_core::session_ops;
use pr_core::todo;
use pr_core::{FavouritesStore, SessionBackend, TmuxBackend, collect_listing};

use crate::table::TableFormatter;

const PROMPT: &str = "input project name to switch to: ";

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let ctx = load_context()?;

    if matches.get_flag("edit") {
        return handle_edit_command(&ctx);
    }
    if matches.get_flag("todo") {
        return handle_todo_command(&ctx);
    }

    let backend = TmuxBackend::from_context(&ctx);
    let mut favourites = FavouritesStore::open(&ctx).map_err(|e| report("load favourites", e))?;

    // An empty argument means no token at all
    let mut token = matches
        .get_one::<String>("token")
        .filter(|t| !t.is_empty())
        .cloned();

    if matches.get_flag("temp") {
        let dir = session_ops::create_temp_project(&ctx)
            .map_err(|e| report("create temporary project", e))?;
        info!(event = "cli.temp_project_created", dir = %dir.display());
        if token.is_none() {
            token = Some(dir.display().to_string());
        }
    }

    if matches.get_flag("interactive") && token.is_none() {
        print_listing(&backend, &favourites, matches)?;
        token = prompt_for_token()?;
        if token.is_none() {
            info!(event = "cli.interactive_cancelled");
            return Ok(());
        }
    }

    match token {
        Some(token) => handle_switch_command(&ctx, &backend, &mut favourites, &token, matches),
        None => print_listing(&backend, &favourites, matches),
    }
}

fn load_context() -> Result<PrContext, Box<dyn std::error::Error>> {
    let config = PrConfig::load().map_err(|e| report("load config", e))?;
    let ctx = PrContext::from_config(&config).map_err(|e| report("determine paths", e))?;
    Ok(ctx)
}

fn handle_switch_command(
    ctx: &PrContext,
    backend: &dyn SessionBackend,
    favourites: &mut FavouritesStore,
    token: &str,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let allow_create_dir = matches.get_flag("create");
    info!(
        event = "cli.switch_started",
        token = token,
        allow_create_dir = allow_create_dir
    );

    let materialized =
        session_ops::switch_session(ctx, backend, favourites, token, allow_create_dir)
            .map_err(|e| report("switch", e))?;
    favourites
        .save()
        .map_err(|e| report("save favourites", e))?;

    info!(
        event = "cli.switch_completed",
        name = %materialized.name,
        created = materialized.created
    );
    Ok(())
}

fn print_listing(
    backend: &dyn SessionBackend,
    favourites: &FavouritesStore,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let live = backend
        .list_sessions()
        .map_err(|e| report("list sessions", e))?;
    let entries = collect_listing(&live, favourites.sessions(), matches.get_flag("all"));

    info!(event = "cli.list_completed", count = entries.len());

    if entries.is_empty() {
        println!("No sessions found.");
        return Ok(());
    }
    TableFormatter::new(&entries, matches.get_flag("wide")).print_table(&entries);
    Ok(())
}

/// Ask for a token on stdin. `None` on empty input or end of input.
fn prompt_for_token() -> Result<Option<String>, Box<dyn std::error::Error>> {
    print!("{}", PROMPT);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(parse_prompt_input(&line))
}

fn parse_prompt_input(line: &str) -> Option<String> {
    let token = line.trim();
    (!token.is_empty()).then(|| token.to_string())
}

fn handle_edit_command(ctx: &PrContext) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.edit_started", path = %ctx.favourites_path.display());
    open_in_editor(ctx, &ctx.favourites_path)
}

fn handle_todo_command(ctx: &PrContext) -> Result<(), Box<dyn std::error::Error>> {
    let backend = TmuxBackend::from_context(ctx);
    let path = todo::current_todo_path(&backend).map_err(|e| report("find current session", e))?;
    info!(event = "cli.todo_started", path = %path.display());
    open_in_editor(ctx, &path)
}

/// Hands the terminal to the editor; only returns on failure.
fn open_in_editor(ctx: &PrContext, file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    match editor::open_in_editor(ctx, file) {
        Ok(never) => match never {},
        Err(e) => Err(report("open editor", e)),
    }
}

/// Print a user-facing failure, log it, and convert it for `main`.
fn report<E>(action: &str, e: E) -> Box<dyn std::error::Error>
where
    E: std::error::Error + 'static,
{
    eprintln!("❌ Failed to {}: {}", action, e);
    error!(event = "cli.command_failed", action = action, error = %e);
    events::log_app_error(&e);
    Box::new(e)
}

//! # CLI Layer
//!
//! One possible UI client for quotegen. This is the only place that knows
//! about stdout, stderr, log setup and terminal capabilities.
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_logging()`: tracing subscriber on stderr, level from `-v`
//! - `handle_*()`: Per-command handlers that call the API and print rendered output

use super::interactive;
use super::render::{render_messages, render_quotes, render_topics};
use super::setup::{Cli, Commands};
use clap::Parser;
use console::Term;
use quotegen::api::{ConfigAction, QuoteApi};
use quotegen::clipboard::SystemClipboard;
use quotegen::commands::{CmdMessage, QuotePaths, SelectionPolicy};
use quotegen::config::ConfigKey;
use quotegen::error::Result;
use quotegen::init::{config_dir, initialize};
use tracing::debug;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: QuoteApi,
    use_color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let use_color = !cli.no_color && Term::stdout().features().colors_supported();

    // Config must stay usable even when the configured corpus is broken.
    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(key.as_deref(), value.clone(), use_color);
    }

    let mut ctx = AppContext {
        api: initialize(cli.corpus.as_deref())?,
        use_color,
    };

    match cli.command {
        Some(Commands::Generate { topic, limit, copy }) => {
            if let Some(n) = limit {
                ctx.api = ctx.api.with_policy(SelectionPolicy::Capped(n));
            }
            handle_generate(&ctx, &topic.join(" "), copy)
        }
        Some(Commands::Topics) | None => handle_topics(&ctx),
        Some(Commands::Interactive) => handle_interactive(&ctx),
        Some(Commands::Config { .. }) => Ok(()),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn handle_generate(ctx: &AppContext, topic: &str, copy: bool) -> Result<()> {
    let result = ctx.api.generate(topic)?;
    print_messages(&result.messages, ctx.use_color);

    let quotes = result
        .selection
        .map(|selection| selection.quotes)
        .unwrap_or_default();
    if !quotes.is_empty() {
        println!("{}", render_quotes(&quotes, ctx.use_color));
    }

    if copy {
        let copied = ctx.api.copy_quote(&SystemClipboard, quotes.first());
        print_messages(&copied.messages, ctx.use_color);
    }
    Ok(())
}

fn handle_topics(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.topics();
    println!("{}", render_topics(&result.topics, ctx.use_color));
    Ok(())
}

fn handle_interactive(ctx: &AppContext) -> Result<()> {
    debug!("entering interactive mode");
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    interactive::run(
        &ctx.api,
        stdin.lock(),
        &mut stdout,
        &SystemClipboard,
        ctx.use_color,
    )
}

fn handle_config(key: Option<&str>, value: Option<String>, use_color: bool) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key.parse::<ConfigKey>()?),
        (Some(key), Some(value)) => ConfigAction::Set(key.parse::<ConfigKey>()?, value),
    };

    let paths = QuotePaths {
        config_dir: config_dir()?,
    };
    let result = QuoteApi::configure(&paths, action)?;
    print_messages(&result.messages, use_color);
    Ok(())
}

fn print_messages(messages: &[CmdMessage], use_color: bool) {
    if !messages.is_empty() {
        println!("{}", render_messages(messages, use_color));
    }
}

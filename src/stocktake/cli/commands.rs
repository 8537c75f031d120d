//! # CLI Layer
//!
//! The CLI is one client of the stocktake API. It is the only place that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! Startup order: load config, open the database, load the seed file, then
//! dispatch the requested command (the interactive menu by default).

use super::console::Console;
use super::menu::run_menu;
use super::render::{print_messages, print_product};
use super::setup::{init_logging, Cli, Commands};
use clap::Parser;
use std::io::{self, Stdin, Stdout};
use std::path::PathBuf;
use stocktake::api::{AddRequest, InventoryApi, Lookup};
use stocktake::config::{InventoryConfig, CONFIG_FILENAME};
use stocktake::error::{InventoryError, Result};
use stocktake::store::sqlite::SqliteStore;
use tracing::debug;

struct AppContext {
    api: InventoryApi<SqliteStore>,
    config: InventoryConfig,
    console: Console<io::StdinLock<'static>, Stdout>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    let command = cli.command.unwrap_or(Commands::Menu);
    if command == Commands::Seed || !cli.no_seed {
        let result = ctx.api.seed(&ctx.config.seed_file)?;
        if command == Commands::Seed {
            print_messages(ctx.console.output_mut(), &result.messages)?;
        }
    }

    match command {
        Commands::Menu => {
            let backup_file = ctx.config.backup_file.clone();
            run_menu(&mut ctx.api, &mut ctx.console, &backup_file)
        }
        Commands::Seed => Ok(()),
        Commands::View { id } => handle_view(&mut ctx, id),
        Commands::Add {
            name,
            price,
            quantity,
        } => handle_add(&mut ctx, AddRequest::new(name, price, quantity)),
        Commands::Export { output } => handle_export(&mut ctx, output),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| cwd.join(CONFIG_FILENAME));

    let mut config = InventoryConfig::load(&config_path)?;
    if let Some(db) = &cli.db {
        config.database = db.clone();
    }
    if let Some(seed_file) = &cli.seed_file {
        config.seed_file = seed_file.clone();
    }
    if let Some(backup_file) = &cli.backup_file {
        config.backup_file = backup_file.clone();
    }
    let config = config.relative_to(&cwd);
    debug!(?config, "resolved configuration");

    let store = SqliteStore::open(&config.database)?;
    let stdin: Stdin = io::stdin();

    Ok(AppContext {
        api: InventoryApi::new(store),
        config,
        console: Console::new(stdin.lock(), io::stdout()),
    })
}

fn handle_view(ctx: &mut AppContext, id: i64) -> Result<()> {
    match ctx.api.view_product(id)? {
        Lookup::Found(product) => {
            print_product(ctx.console.output_mut(), &product)?;
            Ok(())
        }
        Lookup::Missing { id, min, max } => Err(InventoryError::Api(format!(
            "No product with ID {}. The ID must be between {} and {}",
            id, min, max
        ))),
    }
}

fn handle_add(ctx: &mut AppContext, request: AddRequest) -> Result<()> {
    let result = ctx.api.add_product(&request)?;
    print_messages(ctx.console.output_mut(), &result.messages)?;
    Ok(())
}

fn handle_export(ctx: &mut AppContext, output: Option<PathBuf>) -> Result<()> {
    let path = output.unwrap_or_else(|| ctx.config.backup_file.clone());
    let result = ctx.api.export(&path)?;
    print_messages(ctx.console.output_mut(), &result.messages)?;
    Ok(())
}

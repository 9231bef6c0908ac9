//! calgrid CLI entry point.

use anyhow::{Context, Result};
use calgrid_cli::cli::{Cli, Commands, OutputFormat};
use calgrid_cli::host;
use calgrid_cli::output::{format_output, pretty};
use calgrid_core::calendar::{CalendarDate, MonthView};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "calgrid=info,calgrid_cli=info,calgrid_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = host::load_config(cli.config.as_deref(), &cli.overrides)
        .context("Failed to load calendar options")?;
    let catalog = host::load_catalog(cli.themes.as_deref()).context("Failed to load themes")?;

    tracing::debug!(mode = ?config.mode, theme = %config.theme, "Configuration resolved");

    match cli.command {
        Commands::Month(cmd) => {
            let today = cmd.today.unwrap_or_else(CalendarDate::today);
            let selection = host::initial_selection(&config, cmd.selected, cmd.start, cmd.end)?;
            let anchor = host::month_anchor(cmd.date, &selection, today);
            let displayed = host::displayed_month(&config, anchor, cmd.offset)?;
            let view = MonthView::build(&config, displayed, &selection, today, &catalog)?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&view, cli.format)?),
                OutputFormat::Pretty => println!("{}", pretty::format_month(&view)),
            }
        }
        Commands::Select(cmd) => {
            let initial = host::initial_selection(&config, cmd.selected, cmd.start, cmd.end)?;
            let outcomes = host::replay_clicks(&config, initial, &cmd.dates);
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&outcomes, cli.format)?),
                OutputFormat::Pretty => println!("{}", pretty::format_clicks(&outcomes)),
            }
        }
        Commands::Theme(cmd) => {
            if !catalog.contains(&cmd.name) {
                tracing::warn!(theme = %cmd.name, "Unknown theme, showing the default palette");
            }
            let palette = catalog.resolve(&cmd.name, cmd.month);
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(palette, cli.format)?),
                OutputFormat::Pretty => println!("{}", pretty::format_palette(&cmd.name, palette)),
            }
        }
        Commands::Themes => {
            let names: Vec<&str> = catalog.names().collect();
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&names, cli.format)?),
                OutputFormat::Pretty => {
                    println!("{}", pretty::format_theme_names(names.into_iter()))
                }
            }
        }
        Commands::Classify(cmd) => {
            let today = cmd.today.unwrap_or_else(CalendarDate::today);
            let result = host::classify(&config, cmd.date, today);
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&result, cli.format)?),
                OutputFormat::Pretty => println!("{}", pretty::format_classification(&result)),
            }
        }
    }

    Ok(())
}

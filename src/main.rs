use clap::Parser;
use tracing_subscriber::EnvFilter;

mod catalog;
mod cli;
mod core;
mod parsing;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("book_catalog=debug,info")
    } else {
        EnvFilter::new("book_catalog=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let catalog = cli.load_catalog()?;

    match &cli.command {
        cli::Commands::Find(args) => cli::query::run_find(args, &catalog, cli.format)?,
        cli::Commands::Category(args) => {
            cli::query::run_category(args, &catalog, cli.format, cli.verbose)?;
        }
        cli::Commands::Author(args) => {
            cli::query::run_author(args, &catalog, cli.format, cli.verbose)?;
        }
        cli::Commands::AuthorCategories(args) => {
            cli::query::run_author_categories(args, &catalog, cli.format)?;
        }
        cli::Commands::Stats => cli::stats::run(&catalog, cli.format)?,
        cli::Commands::List => cli::catalog::run_list(&catalog, cli.format, cli.verbose)?,
        cli::Commands::Export(args) => cli::catalog::run_export(args, &catalog, cli.verbose)?,
    }

    Ok(())
}

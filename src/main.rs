mod adapters;
mod cli;
mod config;
mod core;

use clap::Parser;

use cli::context::Context;
use cli::{Cli, Commands};

fn main() {
    let args = Cli::parse();

    cli::logging::init(args.verbose);
    cli::output::set_quiet(args.quiet);

    let result = Context::resolve(
        args.config.as_deref(),
        args.file.as_deref(),
        args.same_day_only,
    )
    .and_then(|ctx| match &args.command {
        Some(Commands::Init) => cli::commands::init::execute(&ctx),
        Some(Commands::Menu) | None => cli::commands::menu::execute(&ctx),
        Some(Commands::Entry { name, at }) => {
            cli::commands::entry::execute(&ctx, name, at.as_deref())
        }
        Some(Commands::Exit { name, at }) => {
            cli::commands::exit::execute(&ctx, name, at.as_deref())
        }
        Some(Commands::Report { name, json }) => cli::commands::report::execute(&ctx, name, *json),
        Some(Commands::Stats { json }) => cli::commands::stats::execute(&ctx, *json),
    });

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}

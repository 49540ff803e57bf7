use clap::Parser;
use miette::Result;
use randomart::cli::{Cli, Commands};
use randomart::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new(cli.quiet);

    match cli.command {
        Commands::Render(args) => randomart::cli::render::run(args, &printer)?,
        Commands::Inspect(args) => randomart::cli::inspect::run(args, &printer)?,
        Commands::Completions(args) => randomart::cli::completions::run(args)?,
    }

    Ok(())
}

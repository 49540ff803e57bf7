pub mod completions;
pub mod inspect;
pub mod render;

use clap::{Parser, Subcommand};

/// randomart - Procedural images from random expression trees
#[derive(Parser, Debug)]
#[command(name = "randomart")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Only print errors
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate random trees and render them to images
    Render(render::RenderArgs),

    /// Print a generated tree and describe its nodes
    Inspect(inspect::InspectArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

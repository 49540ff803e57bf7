//! Render command implementation.
//!
//! Generates one random tree per image index and writes the rendered result
//! to the output directory.

use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;

use crate::config::{ArtConfig, OutputFormat};
use crate::error::{ArtError, Result};
use crate::generate::Generator;
use crate::output::{display_path, format_elapsed, plural, Printer};
use crate::render::{save_slab, write_meta_json, write_png, Canvas, RenderMeta};

/// Generate random trees and render them to images
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Number of images to render
    #[arg(long, short = 'n', default_value = "1")]
    pub count: u64,

    /// Index of the first image, in hex (matches the file names)
    #[arg(long, default_value = "0", value_parser = parse_hex)]
    pub start: u64,

    /// Image side length in pixels
    #[arg(long)]
    pub size: Option<usize>,

    /// Scale factor for PNG output (integer upscaling)
    #[arg(long)]
    pub scale: Option<u32>,

    /// Base seed; image i uses seed + i
    #[arg(long)]
    pub seed: Option<u64>,

    /// Fixed tree complexity instead of a random one per image
    #[arg(long)]
    pub complexity: Option<usize>,

    /// Output file format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output directory
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Config file (default: ./randomart.yaml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write a JSON sidecar with the seed and expression for each image
    #[arg(long)]
    pub meta: bool,
}

/// Parse a hex image index, with or without a `0x` prefix.
fn parse_hex(s: &str) -> std::result::Result<u64, String> {
    let digits = s.trim_start_matches("0x");
    u64::from_str_radix(digits, 16).map_err(|e| format!("invalid hex index '{}': {}", s, e))
}

/// Image indices for a batch, stopping at the end of the `u64` index space.
fn image_indices(start: u64, count: u64) -> Range<u64> {
    start..start.saturating_add(count)
}

/// Apply command-line overrides on top of the loaded config.
fn resolve_config(args: &RenderArgs, mut config: ArtConfig) -> Result<ArtConfig> {
    if let Some(output) = &args.output {
        config.output = output.clone();
    }
    if let Some(size) = args.size {
        config.size = size;
    }
    if let Some(scale) = args.scale {
        config.scale = scale;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(format) = args.format {
        config.format = format;
    }
    config.validate()?;
    Ok(config)
}

pub fn run(args: RenderArgs, printer: &Printer) -> Result<()> {
    let config = resolve_config(&args, ArtConfig::discover(args.config.as_deref())?)?;

    // Create output directory if needed
    if !config.output.exists() {
        fs::create_dir_all(&config.output).map_err(|e| ArtError::Io {
            path: config.output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let canvas = Canvas::new(config.size)?;
    let base_seed = config.seed.unwrap_or_else(rand::random);
    if config.seed.is_none() {
        printer.info("Seeded", &format!("{} (random)", base_seed));
    }

    if config.format == OutputFormat::Slab && config.scale > 1 {
        printer.warning("Ignoring", "scale for slab output");
    }

    let indices = image_indices(args.start, args.count);
    let rendered = indices.end - indices.start;
    let started = Instant::now();
    for index in indices {
        render_one(index, base_seed, &args, &config, &canvas, printer)?;
    }

    printer.status(
        "Finished",
        &format!(
            "{} to {} in {}",
            plural(rendered as usize, "image", "images"),
            printer.cyan(&display_path(&config.output)),
            format_elapsed(started.elapsed())
        ),
    );

    Ok(())
}

/// Generate, render and write the image for one index.
fn render_one(
    index: u64,
    base_seed: u64,
    args: &RenderArgs,
    config: &ArtConfig,
    canvas: &Canvas,
    printer: &Printer,
) -> Result<()> {
    let seed = base_seed.wrapping_add(index);
    let mut generator = Generator::new(seed);
    let complexity = args.complexity.unwrap_or_else(|| {
        generator.random_complexity(config.min_complexity, config.max_complexity)
    });
    let tree = generator.generate(complexity);

    let name = format!("art{:08x}", index);
    let timer = Instant::now();
    let rendered = canvas.render(&tree, name.as_str());
    let elapsed = timer.elapsed();

    let path = config
        .output
        .join(format!("{}.{}", name, config.format.extension()));
    match config.format {
        OutputFormat::Png => write_png(&rendered, &path, config.scale)?,
        OutputFormat::Slab => save_slab(&rendered, &path)?,
    }

    if args.meta {
        let meta = RenderMeta {
            index,
            seed,
            complexity,
            size: canvas.size(),
            scale: config.scale,
            nodes: tree.node_count(),
            depth: tree.depth(),
            expression: tree.to_string(),
            render_ms: elapsed.as_millis(),
        };
        write_meta_json(&meta, &meta_path(&path))?;
    }

    printer.status(
        "Rendered",
        &format!(
            "{} {}",
            display_path(&path),
            printer.dim(&format!(
                "({} nodes, {}x{}) in {}",
                tree.node_count(),
                canvas.size(),
                canvas.size(),
                format_elapsed(elapsed)
            ))
        ),
    );

    Ok(())
}

fn meta_path(image: &Path) -> PathBuf {
    image.with_extension("json")
}

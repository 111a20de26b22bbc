//! Statue CLI - Convert Minecraft skins into voxel statue schematics

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use statue::{assemble, export_region, BlockPalette, Schematic, SkinTexture};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "statue")]
#[command(author, version, about = "Convert a Minecraft skin into a voxel statue schematic")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a skin image into a schematic
    Convert {
        /// Path to the skin image (resized to 64x64 if needed)
        skin: PathBuf,

        /// Output schematic path (defaults to the skin path with .json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON palette file mapping "r,g,b" keys to block identifiers.
        /// Uses the built-in wool/concrete/terracotta palette if omitted.
        #[arg(short, long)]
        palette: Option<PathBuf>,

        /// Schematic name stored in the output metadata
        #[arg(long, default_value = "SkinStatue")]
        name: String,

        /// Author stored in the output metadata
        #[arg(long, default_value = "statue")]
        author: String,
    },

    /// Inspect a saved schematic
    Info {
        /// Path to a schematic JSON file
        schematic: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "statue=info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            skin,
            output,
            palette,
            name,
            author,
        } => convert(&skin, output, palette, name, author),
        Commands::Info { schematic } => info(&schematic),
    }
}

fn convert(
    skin_path: &Path,
    output: Option<PathBuf>,
    palette_path: Option<PathBuf>,
    name: String,
    author: String,
) -> Result<()> {
    let palette = match &palette_path {
        Some(path) => BlockPalette::from_path(path)
            .with_context(|| format!("failed to load palette {}", path.display()))?,
        None => BlockPalette::builtin(),
    };
    println!("Palette: {} blocks", palette.len());

    let skin = SkinTexture::from_path(skin_path)
        .with_context(|| format!("failed to load skin {}", skin_path.display()))?;

    let blocks = assemble(&skin, &palette)?;
    let (region, stats) = export_region(&blocks)?;

    println!(
        "Statue dimensions: {}x{}x{}",
        region.width(),
        region.height(),
        region.length()
    );
    println!("Placed {} blocks", stats.placed);
    if stats.skipped > 0 {
        println!("Skipped {} blocks (see warnings)", stats.skipped);
    }

    let output = output.unwrap_or_else(|| skin_path.with_extension("json"));
    Schematic::new(name, author, region).save(&output)?;
    println!("Saved schematic to {}", output.display());

    Ok(())
}

fn info(path: &Path) -> Result<()> {
    let schematic = Schematic::load(path)
        .with_context(|| format!("failed to load schematic {}", path.display()))?;
    let region = &schematic.region;

    println!("Name: {}", schematic.name);
    println!("Author: {}", schematic.author);
    println!(
        "Dimensions: {}x{}x{}",
        region.width(),
        region.height(),
        region.length()
    );
    println!("Total non-air blocks: {}", region.block_count());

    println!("Block distribution:");
    for (block, count) in region.distribution() {
        println!("  {}: {}", block, count);
    }

    if region.block_count() == 0 {
        bail!("schematic is empty");
    }

    Ok(())
}

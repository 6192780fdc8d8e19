use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blocktint::assets::PaletteAssets;
use blocktint::error::AppError;
use blocktint::models::AppConfig;
use blocktint::services::{
    DirectoryImageSource, DirectorySink, PaletteRegistry, RecolorPipeline, SinkExecutor,
    TextureCache, TextureLibrary, DEFAULT_SEARCH_LIMIT,
};

#[derive(Parser)]
#[command(name = "blocktint")]
#[command(about = "Palette-driven texture recoloring for block-game resource packs")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Recolor every texture into the output pack
    Recolor {
        /// Recolor against this palette instead of the configured layers
        #[arg(short, long)]
        palette: Option<String>,

        /// Override the contrast slider, -100 to 100
        #[arg(short, long)]
        contrast: Option<i32>,

        /// Override the saturation slider, -100 to 100
        #[arg(short, long)]
        saturation: Option<i32>,

        /// Override the hue slider, -100 to 100
        #[arg(long)]
        hue: Option<i32>,
    },
    /// List available palettes
    Palettes,
    /// Show the configured layer table
    Layers,
    /// List or search source textures
    Textures {
        /// Only show textures whose name starts with this prefix
        #[arg(short, long)]
        search: Option<String>,

        /// Maximum number of search results
        #[arg(short, long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blocktint=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Some(Commands::Recolor {
            palette,
            contrast,
            saturation,
            hue,
        }) => run_recolor_command(palette, contrast, saturation, hue),
        Some(Commands::Palettes) => {
            run_palettes_command();
            Ok(())
        }
        Some(Commands::Layers) => {
            run_layers_command();
            Ok(())
        }
        Some(Commands::Textures { search, limit }) => {
            run_textures_command(search.as_deref(), limit);
            Ok(())
        }
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Resolve the config path and load it, applying directory overrides from
/// the environment.
fn load_config() -> (PathBuf, AppConfig) {
    let path = std::env::var("CONFIG_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("blocktint.json"));
    let mut config = AppConfig::load(&path);

    if let Ok(dir) = std::env::var("TEXTURES_DIR") {
        config.textures_dir = PathBuf::from(dir);
    }
    if let Ok(dir) = std::env::var("OUTPUT_DIR") {
        config.output_dir = PathBuf::from(dir);
    }
    if let Ok(dir) = std::env::var("PALETTES_DIR") {
        config.palettes_dir = Some(PathBuf::from(dir));
    }
    (path, config)
}

/// Run the batch recolor and wait for every artifact to hit disk
fn run_recolor_command(
    palette: Option<String>,
    contrast: Option<i32>,
    saturation: Option<i32>,
    hue: Option<i32>,
) -> anyhow::Result<()> {
    let (_, mut config) = load_config();

    let registry = Arc::new(PaletteRegistry::new(PaletteAssets::new(
        config.palettes_dir.clone(),
    )));
    registry.repair_layer_palettes(&mut config.layers);

    let library = TextureLibrary::scan(&config.textures_dir);
    if library.is_empty() {
        println!(
            "No textures found under {} - nothing to do.",
            config.textures_dir.display()
        );
        return Ok(());
    }

    let sink = Arc::new(SinkExecutor::new(Box::new(DirectorySink::new(
        &config.output_dir,
    ))));
    let texture_cache = Arc::new(TextureCache::new(Arc::clone(&sink)));
    let source = Arc::new(DirectoryImageSource::new(&config.textures_dir));
    let pipeline = RecolorPipeline::new(registry.clone(), texture_cache, Arc::clone(&sink), source);

    let ad_hoc = palette.is_some() || contrast.is_some() || saturation.is_some() || hue.is_some();
    let report = if ad_hoc {
        // One-off run: every texture through the active layer's settings
        // with the requested overrides applied on top.
        let mut layer = config.layers.active_layer().clone();
        if let Some(name) = palette {
            if registry.get(&name).is_none() {
                return Err(AppError::UnknownPalette(name).into());
            }
            layer.palette = name;
        }
        let contrast = contrast.unwrap_or(layer.contrast);
        let saturation = saturation.unwrap_or(layer.saturation);
        let hue = hue.unwrap_or(layer.hue);
        layer.set_sliders(contrast, saturation, hue);

        pipeline.recolor_layer(&layer, library.textures())
    } else {
        pipeline.recolor_all(&config.layers, library.textures())
    };

    sink.flush();

    println!(
        "Recolored {} of {} textures into {}",
        report.processed.len(),
        library.len(),
        config.output_dir.display()
    );
    for texture in &report.failed {
        println!("  failed: {texture}");
    }
    Ok(())
}

/// List every decodable palette
fn run_palettes_command() {
    fn plural(n: usize) -> &'static str {
        if n == 1 {
            "color"
        } else {
            "colors"
        }
    }

    let (_, config) = load_config();
    let registry = PaletteRegistry::new(PaletteAssets::new(config.palettes_dir.clone()));

    let summaries = registry.summaries();
    if summaries.is_empty() {
        println!("No palettes available.");
        return;
    }

    println!("Palettes:");
    for (name, count) in summaries {
        println!("  {name}  ({count} {})", plural(count));
    }
}

/// Show the layer table from the configuration
fn run_layers_command() {
    let (path, config) = load_config();

    println!("Layers from {}:", path.display());
    for layer in config.layers.layers() {
        let marker = if layer.id == config.layers.active_id() {
            "*"
        } else {
            " "
        };
        let palette = if layer.palette.is_empty() {
            "(recoloring off)"
        } else {
            layer.palette.as_str()
        };
        println!(
            "{marker} [{}] {}  palette {palette}, c{:+} s{:+} h{:+}, {} assigned",
            layer.id,
            layer.name,
            layer.contrast,
            layer.saturation,
            layer.hue,
            layer.textures.len()
        );
    }
    println!("\nTextures without an assignment follow the first layer.");
}

/// List discovered textures, optionally filtered by a name prefix
fn run_textures_command(search: Option<&str>, limit: usize) {
    let (_, config) = load_config();
    let library = TextureLibrary::scan(&config.textures_dir);

    match search {
        Some(prefix) => {
            let hits = library.search(prefix, limit);
            if hits.is_empty() {
                println!("No textures matching '{prefix}'.");
                return;
            }
            println!("Textures matching '{prefix}':");
            for texture in hits {
                println!("  {texture}");
            }
        }
        None => {
            println!(
                "{} textures under {}:",
                library.len(),
                library.root().display()
            );
            for texture in library.textures() {
                println!("  {texture}");
            }
        }
    }
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var("CONFIG_FILE").ok();
    let textures_dir = std::env::var("TEXTURES_DIR").ok();
    let output_dir = std::env::var("OUTPUT_DIR").ok();
    let palettes_dir = std::env::var("PALETTES_DIR").ok();

    println!("Blocktint v{VERSION} - palette-driven texture recoloring");
    println!("Batch recoloring for block-game resource packs\n");

    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE  = {}",
        config_file.as_deref().unwrap_or("blocktint.json (default)")
    );
    println!(
        "  TEXTURES_DIR = {}",
        textures_dir.as_deref().unwrap_or("(from config)")
    );
    println!(
        "  OUTPUT_DIR   = {}",
        output_dir.as_deref().unwrap_or("(from config)")
    );
    println!(
        "  PALETTES_DIR = {}",
        palettes_dir.as_deref().unwrap_or("(not set)")
    );

    let (path, config) = load_config();
    let config_source = if path.exists() {
        path.display().to_string()
    } else {
        format!("{} (not found, using defaults)", path.display())
    };

    let registry = PaletteRegistry::new(PaletteAssets::new(config.palettes_dir.clone()));
    let library = TextureLibrary::scan(&config.textures_dir);

    println!("\nConfiguration: {config_source}");
    println!(
        "  Layers:   {} (active: {})",
        config.layers.layers().len(),
        config.layers.active_layer().name
    );
    println!("  Palettes: {} available", registry.len());
    println!(
        "  Textures: {} under {}",
        library.len(),
        config.textures_dir.display()
    );
    println!("  Output:   {}", config.output_dir.display());

    println!("\nCommands:");
    println!("  blocktint recolor   Recolor every texture into the output pack");
    println!("  blocktint palettes  List available palettes");
    println!("  blocktint layers    Show the configured layer table");
    println!("  blocktint textures  List or search source textures");
    println!("\nRun 'blocktint --help' for more details.");
}

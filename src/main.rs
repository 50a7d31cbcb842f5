use clap::Parser;
use dominance::{
    Palette, PaletteError, DEFAULT_PREVIEW_SIZE, DEFAULT_RENDER_HEIGHT, DEFAULT_RENDER_WIDTH,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const PREVIEW_FILE_NAME: &str = "palette_source_preview.png";

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Path to the source image. When omitted, the usable images in the current directory are
    /// listed instead.
    source: Option<PathBuf>,
    /// Base name of the generated palette file (".png" is appended).
    #[arg(short, long, default_value = "")]
    name: String,
    /// Seed for the random color draws.
    ///
    /// Repeated runs over the same source with the same seed produce the same palette.
    #[arg(short, long)]
    seed: Option<u64>,
    /// Dimensions (in pixels) of the generated palette image.
    #[arg(short, long, num_args = 2, default_values_t = [DEFAULT_RENDER_WIDTH, DEFAULT_RENDER_HEIGHT])]
    #[arg(value_names = ["WIDTH", "HEIGHT"])]
    dims: Vec<u32>,
    /// Also write a preview thumbnail of the source image into the temp directory.
    #[arg(short, long)]
    preview: bool,
}

fn run() -> Result<(), PaletteError> {
    let cli = Cli::parse();

    let source = match &cli.source {
        Some(source) => source,
        None => return list_sources(),
    };

    let image = dominance::open_source(source)?;

    let mut preview_path = None;
    if cli.preview {
        let path = std::env::temp_dir().join(PREVIEW_FILE_NAME);
        dominance::preview(&image, DEFAULT_PREVIEW_SIZE)
            .save(&path)
            .map_err(PaletteError::OutputWrite)?;
        preview_path = Some(path);
    }

    let mut builder = Palette::from_image(image);
    if let Some(seed) = cli.seed {
        builder = builder.seed(seed);
    }
    let palette = builder.generate()?;

    let name = dominance::output_file_name(&cli.name);
    palette.write_to(&name, cli.dims[0], cli.dims[1])?;

    println!("{}", palette);
    println!("Your palette {} is generated", name);

    if let Some(path) = preview_path {
        println!("Source preview written to '{}'", path.display());
    }

    Ok(())
}

fn list_sources() -> Result<(), PaletteError> {
    let sources = dominance::source_images(std::env::current_dir()?)?;

    if sources.is_empty() {
        println!("No source images in the current directory");
    } else {
        println!("Source images in the current directory:");
        for source in sources {
            println!("  {}", source.display());
        }
    }

    Ok(())
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dominance=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "kolam", version, about = "Generate kolam patterns as SVG, PNG or WebM")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the generated dots and paths as JSON.
    Generate(GenerateArgs),
    /// Write the static SVG.
    Svg(OutDirArgs),
    /// Render the reveal at a point in time as a PNG.
    Frame(FrameArgs),
    /// Record the reveal animation as WebM (requires `ffmpeg` on PATH).
    Video(VideoArgs),
    /// List the curated showcase presets.
    Showcase,
}

#[derive(Args, Debug)]
struct ParamArgs {
    /// JSON config file; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum)]
    size: Option<SizeArg>,

    /// 1-10, clamped.
    #[arg(long)]
    complexity: Option<u8>,

    #[arg(long, value_enum)]
    style: Option<StyleArg>,

    /// 11to1, 13to7, 8x8grid, 5x5grid, radial-lotus, 7x7grid.
    #[arg(long)]
    preset: Option<String>,

    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,

    #[arg(long)]
    hide_dots: bool,

    #[arg(long, value_enum)]
    palette: Option<PaletteArg>,

    /// Custom palette color (repeatable, `#rgb` or `#rrggbb`).
    #[arg(long = "color")]
    colors: Vec<String>,

    /// Enable the staggered reveal.
    #[arg(long)]
    animate: bool,

    /// Motif: flower, star, festival, abstract.
    #[arg(long)]
    suggestion: Option<String>,

    /// Seed the control-point jitter.
    #[arg(long, conflicts_with = "entropy")]
    seed: Option<u64>,

    /// Jitter from an OS-seeded generator.
    #[arg(long)]
    entropy: bool,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[command(flatten)]
    params: ParamArgs,

    /// Write to a file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct OutDirArgs {
    #[command(flatten)]
    params: ParamArgs,

    /// Output directory.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    params: ParamArgs,

    /// Milliseconds into the reveal.
    #[arg(long, default_value_t = 0)]
    at_ms: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct VideoArgs {
    #[command(flatten)]
    params: ParamArgs,

    /// Output directory.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    #[arg(long)]
    fps: Option<u32>,

    /// Rasterize frames in parallel.
    #[arg(long)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    #[arg(long)]
    chunk_size: Option<usize>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SizeArg {
    Small,
    Medium,
    Large,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StyleArg {
    Traditional,
    Modern,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PaletteArg {
    Traditional,
    Modern,
    Custom,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Svg(args) => cmd_svg(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Video(args) => cmd_video(args),
        Command::Showcase => cmd_showcase(),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: &ParamArgs) -> anyhow::Result<kolam::KolamConfig> {
    let mut cfg = match &args.config {
        Some(path) => kolam::KolamConfig::load(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => kolam::KolamConfig::default(),
    };
    let p = &mut cfg.params;

    if let Some(size) = args.size {
        p.size = match size {
            SizeArg::Small => kolam::CanvasSize::Small,
            SizeArg::Medium => kolam::CanvasSize::Medium,
            SizeArg::Large => kolam::CanvasSize::Large,
        };
    }
    if let Some(c) = args.complexity {
        p.complexity = c;
    }
    if let Some(style) = args.style {
        p.style = match style {
            StyleArg::Traditional => kolam::Style::Traditional,
            StyleArg::Modern => kolam::Style::Modern,
        };
    }
    if let Some(preset) = &args.preset {
        p.preset = kolam::Preset::parse_lenient(preset);
    }
    if let Some(theme) = args.theme {
        p.theme = match theme {
            ThemeArg::Light => kolam::Theme::Light,
            ThemeArg::Dark => kolam::Theme::Dark,
        };
    }
    if args.hide_dots {
        p.show_dots = false;
    }
    if let Some(palette) = args.palette {
        p.palette_type = match palette {
            PaletteArg::Traditional => kolam::PaletteType::Traditional,
            PaletteArg::Modern => kolam::PaletteType::Modern,
            PaletteArg::Custom => kolam::PaletteType::Custom,
        };
    }
    if !args.colors.is_empty() {
        p.custom_colors = args.colors.clone();
    }
    if args.animate {
        p.animation_enabled = true;
    }
    if let Some(s) = &args.suggestion {
        p.suggestion = Some(s.clone());
    }
    if let Some(seed) = args.seed {
        p.jitter = kolam::Jitter::Seeded(seed);
    } else if args.entropy {
        p.jitter = kolam::Jitter::Entropy;
    }
    Ok(cfg)
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.params)?;
    let generated = kolam::generate_kolam(&cfg.params);
    let json = serde_json::to_string_pretty(&generated).context("serialize kolam")?;
    match args.out {
        Some(path) => {
            ensure_parent(&path)?;
            std::fs::write(&path, json).with_context(|| format!("write '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_svg(args: OutDirArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.params)?;
    let session = kolam::KolamSession::new(cfg.params, cfg.capture);
    let artifact = session
        .export_svg()
        .context("no surface presented (unexpected)")?;
    let path = artifact.write_to(&args.out_dir)?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut cfg = load_config(&args.params)?;
    // A frame of the reveal only exists for an animated surface.
    cfg.params.animation_enabled = true;
    let session = kolam::KolamSession::new(cfg.params, cfg.capture);
    let surface = session
        .surface()
        .context("no surface presented (unexpected)")?;

    let frame = kolam::rasterize_frame(surface, args.at_ms as f64 / 1000.0)?;
    ensure_parent(&args.out)?;
    image::save_buffer_with_format(
        &args.out,
        &frame.to_straight_rgba8(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_video(args: VideoArgs) -> anyhow::Result<()> {
    let mut cfg = load_config(&args.params)?;
    cfg.params.animation_enabled = true;
    if let Some(fps) = args.fps {
        cfg.capture.fps = kolam::Fps::new(fps, 1)?;
    }
    if args.parallel {
        cfg.capture.parallel = true;
    }
    if args.threads.is_some() {
        cfg.capture.threads = args.threads;
    }
    if let Some(chunk_size) = args.chunk_size {
        cfg.capture.chunk_size = chunk_size;
    }

    let session = kolam::KolamSession::new(cfg.params, cfg.capture);
    match session.export_video()? {
        kolam::CaptureOutcome::Finished(artifact) => {
            let path = artifact.write_to(&args.out_dir)?;
            eprintln!("wrote {}", path.display());
            Ok(())
        }
        other => anyhow::bail!("video capture did not run: {other:?}"),
    }
}

fn cmd_showcase() -> anyhow::Result<()> {
    let presets = kolam::showcase_presets();
    println!(
        "{}",
        serde_json::to_string_pretty(&presets).context("serialize showcase")?
    );
    Ok(())
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

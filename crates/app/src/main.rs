use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use resume_site_core::{
    atmosphere::Atmosphere,
    audio::sine_wave,
    config::ViewportConfig,
    page::{html, Page, PageRuntime},
    render::{svg, RecordingCanvas},
    visualizer::{style_for, SpectrumVisualizer},
    AppConfig, ContentStore, FrameClock, SimulatedMediaElement, SiteError, VisualizerStyleKind,
};
use tracing_subscriber::EnvFilter;

fn main() -> resume_site_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Render { out } => run_render(&config, &out),
        Commands::Visualize {
            input,
            tone,
            seconds,
            style,
            every,
            out,
        } => run_visualize(
            &config,
            VisualizeArgs {
                input,
                tone,
                seconds,
                style,
                every,
                out,
            },
        ),
        Commands::Atmosphere { width, seed, at } => run_atmosphere(&config, width, seed, at),
        Commands::Content => {
            println!("{}", ContentStore::builtin().to_json()?);
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> resume_site_core::Result<AppConfig> {
    match path {
        Some(path) => AppConfig::load(path),
        None => Ok(AppConfig::default()),
    }
}

fn run_render(config: &AppConfig, out: &Path) -> resume_site_core::Result<()> {
    let page = Page::compose(config, &ContentStore::builtin())?;
    let document = html::render(&page)?;

    std::fs::create_dir_all(out)?;
    let target = out.join("index.html");
    std::fs::write(&target, document)?;
    tracing::info!(path = %target.display(), cards = page.card_count(), "wrote page");
    for asset in page.assets.iter() {
        let expected = out.join(asset.file_name());
        if expected.exists() {
            tracing::debug!(path = %expected.display(), "static asset in place");
        } else {
            tracing::warn!(
                path = %expected.display(),
                media_type = %asset.media_type,
                "static asset referenced by the page is missing"
            );
        }
    }
    Ok(())
}

struct VisualizeArgs {
    input: Option<PathBuf>,
    tone: f32,
    seconds: f32,
    style: Option<StyleArg>,
    every: usize,
    out: PathBuf,
}

fn run_visualize(config: &AppConfig, args: VisualizeArgs) -> resume_site_core::Result<()> {
    let sample_rate = config.audio.sample_rate;
    let samples = match &args.input {
        Some(path) => read_f32le(path)?,
        None => sine_wave(args.tone, 0.8, args.seconds, sample_rate),
    };
    if args.every == 0 {
        return Err(SiteError::InvalidInput("--every must be at least 1"));
    }

    let style = args
        .style
        .map(VisualizerStyleKind::from)
        .unwrap_or(config.visualizer.style);
    let visualizer = SpectrumVisualizer::new(config.audio.clone(), style_for(style));
    let media = SimulatedMediaElement::new(samples, sample_rate).with_looping(true);
    let canvas = RecordingCanvas::new(
        config.viewport.width as f32,
        config.visualizer.height as f32,
    );
    let mut runtime = PageRuntime::new(media, visualizer, FrameClock::default(), canvas);

    tracing::info!(
        ?style,
        seconds = args.seconds,
        every = args.every,
        "running visualizer"
    );
    std::fs::create_dir_all(&args.out)?;
    runtime.mount();

    let frames = (args.seconds / runtime.scheduler().interval_seconds()).round() as usize;
    let mut written = 0;
    for index in 1..=frames {
        if runtime.step_frame()? == 0 || index % args.every != 0 {
            continue;
        }
        let target = args.out.join(format!("frame-{index:05}.svg"));
        std::fs::write(&target, svg::to_svg(runtime.canvas())?)?;
        written += 1;
    }
    runtime.unmount();

    tracing::info!(
        snapshots = written,
        drawn = runtime.visualizer().frames_drawn(),
        out = %args.out.display(),
        "visualizer finished"
    );
    Ok(())
}

fn read_f32le(path: &Path) -> resume_site_core::Result<Vec<f32>> {
    let bytes = std::fs::read(path)?;
    if bytes.len() % 4 != 0 {
        tracing::warn!(
            path = %path.display(),
            trailing = bytes.len() % 4,
            "input is not a whole number of f32 samples; ignoring the tail"
        );
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}

fn run_atmosphere(
    config: &AppConfig,
    width: Option<u32>,
    seed: Option<u64>,
    at: Option<f32>,
) -> resume_site_core::Result<()> {
    let viewport = ViewportConfig {
        width: width.unwrap_or(config.viewport.width),
        ..config.viewport.clone()
    };
    viewport.validate()?;
    let layout = Atmosphere::generate(&viewport, seed.or(config.atmosphere.seed));
    tracing::info!(
        seed = layout.seed,
        elements = layout.element_count(),
        "generated atmosphere"
    );

    let json = match at {
        Some(t) => serde_json::to_string_pretty(&layout.sample(t))?,
        None => serde_json::to_string_pretty(&layout)?,
    };
    println!("{json}");
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Animated résumé site generator", long_about = None)]
struct Cli {
    /// JSON configuration file. Missing fields use their defaults.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the static page to `<out>/index.html`.
    Render {
        #[arg(short, long)]
        out: PathBuf,
    },
    /// Run the spectrum visualizer headless and write SVG snapshots.
    Visualize {
        /// Raw mono little-endian f32 samples at the configured sample rate.
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Frequency of the generated test tone when no input is given.
        #[arg(long, default_value_t = 440.0)]
        tone: f32,
        #[arg(long, default_value_t = 2.0)]
        seconds: f32,
        #[arg(long, value_enum)]
        style: Option<StyleArg>,
        /// Write a snapshot every N frames.
        #[arg(long, default_value_t = 30)]
        every: usize,
        #[arg(short, long)]
        out: PathBuf,
    },
    /// Print the decorative background layout as JSON.
    Atmosphere {
        /// Viewport width in pixels.
        #[arg(long)]
        width: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        /// Sample every element at this many seconds instead.
        #[arg(long)]
        at: Option<f32>,
    },
    /// Print the built-in content tables as JSON.
    Content,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StyleArg {
    Vine,
    Bars,
}

impl From<StyleArg> for VisualizerStyleKind {
    fn from(value: StyleArg) -> Self {
        match value {
            StyleArg::Vine => VisualizerStyleKind::Vine,
            StyleArg::Bars => VisualizerStyleKind::Bars,
        }
    }
}

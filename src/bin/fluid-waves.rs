use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use fluid_waves::{
    DocumentStyle, EdgePosition, ManualClock, ManualVisibility, MemorySurface, Timestamp,
    WaveAnimation, WaveOptions,
};

#[derive(Parser, Debug)]
#[command(name = "fluid-waves", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a single static frame as an SVG document.
    Svg(SvgArgs),
    /// Rasterize a single static frame to PNG.
    Png(PngArgs),
    /// Run the animation headlessly and write one SVG document per frame.
    Frames(FramesArgs),
}

#[derive(Args, Debug)]
struct WaveArgs {
    /// Wave options JSON (camelCase keys, all optional).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of wave layers.
    #[arg(long, default_value_t = 3)]
    waves: usize,

    /// Noise seed (overrides the config file).
    #[arg(long)]
    seed: Option<u32>,

    /// Edge the waves grow from (overrides the config file).
    #[arg(long, value_enum)]
    position: Option<PositionChoice>,

    /// Document width in pixels.
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Document height in pixels.
    #[arg(long, default_value_t = 400)]
    height: u32,

    /// Background colour; transparent when omitted.
    #[arg(long)]
    background: Option<String>,
}

#[derive(Args, Debug)]
struct SvgArgs {
    #[command(flatten)]
    wave: WaveArgs,

    /// Output SVG path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct PngArgs {
    #[command(flatten)]
    wave: WaveArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct FramesArgs {
    #[command(flatten)]
    wave: WaveArgs,

    /// Number of frames to render.
    #[arg(long, default_value_t = 60)]
    count: u32,

    /// Milliseconds between frames.
    #[arg(long, default_value_t = 1000.0 / 60.0)]
    interval_ms: f64,

    /// Output directory for `frame_NNNN.svg` files.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PositionChoice {
    Top,
    Right,
    Bottom,
    Left,
}

impl From<PositionChoice> for EdgePosition {
    fn from(p: PositionChoice) -> Self {
        match p {
            PositionChoice::Top => EdgePosition::Top,
            PositionChoice::Right => EdgePosition::Right,
            PositionChoice::Bottom => EdgePosition::Bottom,
            PositionChoice::Left => EdgePosition::Left,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Svg(args) => cmd_svg(args),
        Command::Png(args) => cmd_png(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

impl WaveArgs {
    fn options(&self) -> anyhow::Result<WaveOptions> {
        let mut options = match &self.config {
            Some(path) => WaveOptions::from_json_file(path)?,
            None => WaveOptions::default(),
        };
        if let Some(seed) = self.seed {
            options.seed = Some(seed);
        }
        if let Some(position) = self.position {
            options.position = position.into();
        }
        Ok(options)
    }

    fn style(&self) -> DocumentStyle {
        DocumentStyle {
            width: self.width,
            height: self.height,
            background: self.background.clone(),
            ..DocumentStyle::default()
        }
    }

    fn static_document(&self) -> anyhow::Result<String> {
        let options = self.options()?;
        let paths = fluid_waves::try_static_waves(self.waves, &options)
            .with_context(|| "build static waves")?;
        Ok(fluid_waves::svg_document(&paths, &self.style()))
    }
}

fn cmd_svg(args: SvgArgs) -> anyhow::Result<()> {
    let doc = args.wave.static_document()?;
    match &args.out {
        Some(out) => {
            write_text(out, &doc)?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{doc}"),
    }
    Ok(())
}

fn cmd_png(args: PngArgs) -> anyhow::Result<()> {
    let doc = args.wave.static_document()?;
    let frame = fluid_waves::rasterize_svg(&doc, args.wave.width, args.wave.height)?;
    fluid_waves::write_png(&frame, &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    if args.wave.waves == 0 {
        anyhow::bail!("--waves must be greater than 0");
    }
    let options = args.wave.options()?;
    let style = args.wave.style();

    let mut anim = WaveAnimation::mount(
        MemorySurface::svg(args.wave.waves),
        &options,
        ManualClock::new(),
        ManualVisibility::new(),
    )?;
    anim.on_visibility_change(true);

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    for i in 0..args.count {
        let handle = anim
            .clock_mut()
            .fire_next()
            .context("animation stopped scheduling ticks (bug)")?;
        anim.on_frame(handle, Timestamp(f64::from(i) * args.interval_ms));

        let doc = fluid_waves::svg_document(anim.surface().paths(), &style);
        write_text(&args.out_dir.join(format!("frame_{i:04}.svg")), &doc)?;
    }
    anim.destroy();

    eprintln!("wrote {} frames to {}", args.count, args.out_dir.display());
    Ok(())
}

fn write_text(path: &Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, text).with_context(|| format!("write '{}'", path.display()))
}

use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use folio_motion::content::filter::categories;
use folio_motion::SceneBackend as _;
use folio_motion::scene::backend::create_backend;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[derive(Parser, Debug)]
#[command(name = "folio", version)]
struct Cli {
    /// Log at debug level.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a scroll script and write every page frame as JSON.
    Frames(FramesArgs),
    /// Print the projects visible under a category filter.
    Filter(FilterArgs),
    /// Rasterize one frame of the hero scene as a PNG.
    Scene(SceneArgs),
    /// Validate a content catalog and print a summary.
    Content(ContentArgs),
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Scroll script JSON.
    #[arg(long)]
    script: PathBuf,

    /// Page config JSON; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output JSON path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FilterArgs {
    /// Category label ("All", "Website", "Web-App", "Chrome Extension").
    #[arg(long, default_value = folio_motion::content::filter::ALL_LABEL)]
    category: String,

    /// Content catalog JSON; the built-in catalog when omitted.
    #[arg(long)]
    content: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SceneArgs {
    /// Frame index (0-based, 60 fps).
    #[arg(long)]
    frame: u64,

    /// Palette.
    #[arg(long, value_enum, default_value_t = ThemeChoice::Dark)]
    theme: ThemeChoice,

    /// Particle and phase seed.
    #[arg(long, default_value_t = folio_motion::scene::model::DEFAULT_SEED)]
    seed: u64,

    /// Output width in pixels.
    #[arg(long, default_value_t = 640)]
    width: u32,

    /// Output height in pixels.
    #[arg(long, default_value_t = 400)]
    height: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct ContentArgs {
    /// Content catalog JSON; the built-in catalog when omitted.
    #[arg(long)]
    content: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeChoice {
    Dark,
    Light,
}

impl From<ThemeChoice> for folio_motion::Theme {
    fn from(t: ThemeChoice) -> Self {
        match t {
            ThemeChoice::Dark => Self::Dark,
            ThemeChoice::Light => Self::Light,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    match cli.cmd {
        Command::Frames(args) => cmd_frames(args),
        Command::Filter(args) => cmd_filter(args),
        Command::Scene(args) => cmd_scene(args),
        Command::Content(args) => cmd_content(args),
    }
}

fn init_logger(verbose: bool) {
    let default = if verbose {
        "folio_motion=debug,folio=debug,info"
    } else {
        "folio_motion=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn read_content(path: Option<&Path>) -> anyhow::Result<folio_motion::ContentCatalog> {
    let catalog = match path {
        Some(p) => folio_motion::ContentCatalog::from_path(p)
            .with_context(|| format!("load content '{}'", p.display()))?,
        None => folio_motion::ContentCatalog::builtin(),
    };
    catalog.validate()?;
    Ok(catalog)
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let script = folio_motion::ScrollScript::from_path(&args.script)
        .with_context(|| format!("load script '{}'", args.script.display()))?;

    let (config, base) = match &args.config {
        Some(p) => (
            folio_motion::PageConfig::from_path(p)
                .with_context(|| format!("load config '{}'", p.display()))?,
            p.parent().unwrap_or_else(|| Path::new(".")).to_path_buf(),
        ),
        None => (folio_motion::PageConfig::default(), PathBuf::from(".")),
    };

    let mut session = folio_motion::PageSession::from_config(config, &base)?;
    let frames = session.run(&script)?;

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(out).with_context(|| format!("create '{}'", out.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer_pretty(&mut w, &frames).with_context(|| "serialize frames")?;
            w.flush()
                .with_context(|| format!("write '{}'", out.display()))?;
            eprintln!("wrote {} ({} frames)", out.display(), frames.len());
        }
        None => {
            let stdout = std::io::stdout();
            let mut w = stdout.lock();
            serde_json::to_writer_pretty(&mut w, &frames).with_context(|| "serialize frames")?;
            writeln!(w)?;
        }
    }
    Ok(())
}

fn cmd_filter(args: FilterArgs) -> anyhow::Result<()> {
    let catalog = read_content(args.content.as_deref())?;
    let mut filter = folio_motion::CategoryFilter::new();
    filter.set_category(&args.category);

    let visible = filter.visible(&catalog.projects);
    let out = serde_json::json!({
        "category": filter.selection().label(),
        "categories": categories(&catalog.projects),
        "projects": visible
            .iter()
            .map(|p| serde_json::json!({ "id": p.id, "title": p.title, "category": p.category }))
            .collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn cmd_scene(args: SceneArgs) -> anyhow::Result<()> {
    let spec = folio_motion::SceneSpec::hero(args.seed);
    spec.validate()?;
    let settings = folio_motion::SceneSettings {
        width: args.width,
        height: args.height,
        ..folio_motion::SceneSettings::default()
    };
    let theme = folio_motion::Theme::from(args.theme);

    let mut backend = create_backend(folio_motion::SceneCapability::Cpu, &settings)?;
    let sample = spec.sample(
        folio_motion::FrameIndex(args.frame),
        folio_motion::Fps::default(),
    );
    let frame = backend.render(&spec, &sample, &theme.palette())?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_content(args: ContentArgs) -> anyhow::Result<()> {
    let catalog = read_content(args.content.as_deref())?;
    println!("skills:     {}", catalog.skills.len());
    println!("highlights: {}", catalog.highlights.len());
    println!("projects:   {}", catalog.projects.len());
    for label in categories(&catalog.projects) {
        let n = catalog
            .projects
            .iter()
            .filter(|p| p.category.label() == label)
            .count();
        println!("  {label}: {n}");
    }
    println!("hero tech:  {}", catalog.hero_tech.join(", "));
    Ok(())
}

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use emotiondice_dice::{
    DiceSettings, EmotionDice, ImagePlan, PlanStatus, PoolSource, SelectionState, SettingsStore,
};
use emotiondice_taxonomy::{builtin_taxonomy, Taxonomy, TaxonomyStore};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(
    name = "emotion-dice",
    about = "Roll a random emotion from the feelings wheel for improv practice",
    author,
    version
)]
struct Cli {
    /// Taxonomy JSON file; the bundled feelings wheel is used when omitted.
    #[arg(long, global = true, value_name = "FILE")]
    taxonomy: Option<PathBuf>,

    /// Settings JSON file (image location, fallback emotions, prompt style).
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log verbosity; RUST_LOG takes precedence when set.
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick a random emotion and show its categories, image and prompt.
    Roll(RollArgs),
    /// List every selectable emotion.
    List(ListArgs),
    /// Show the category path and image location of an emotion.
    Resolve(ResolveArgs),
    /// Print the image generation plan for every emotion (offline).
    Prompts(PromptsArgs),
    /// Write the loaded taxonomy to a JSON file.
    Export(ExportArgs),
    /// Print the effective settings as JSON.
    Config,
}

#[derive(Args)]
struct RollArgs {
    /// Seed for a reproducible roll.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of rolls.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    times: u32,

    /// Directory serving the image root; missing images are hidden.
    #[arg(long, value_name = "DIR")]
    assets_dir: Option<PathBuf>,
}

#[derive(Args)]
struct ListArgs {
    /// Print the full category path of each emotion.
    #[arg(long)]
    paths: bool,
}

#[derive(Args)]
struct ResolveArgs {
    /// Emotion (leaf) name, case sensitive.
    name: String,
}

#[derive(Args)]
struct PromptsArgs {
    /// Extra words appended to every prompt to influence style.
    #[arg(long)]
    style: Option<String>,

    /// How many parent categories to mention (-1 = all).
    #[arg(long, allow_negative_numbers = true)]
    root_levels: Option<i32>,

    /// Directory holding generated images; existing ones are skipped.
    #[arg(long, value_name = "DIR")]
    assets_dir: Option<PathBuf>,
}

#[derive(Args)]
struct ExportArgs {
    /// Destination file path.
    #[arg(long, value_name = "FILE")]
    output: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let Cli {
        taxonomy,
        config,
        log_level,
        command,
    } = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level.as_filter()),
    )
    .init();

    let settings = load_settings(config.as_deref())?;
    let taxonomy = taxonomy.as_deref();
    match command {
        Commands::Roll(args) => execute_roll(args, taxonomy, &settings),
        Commands::List(args) => execute_list(args, &load_taxonomy(taxonomy)?),
        Commands::Resolve(args) => execute_resolve(args, &load_taxonomy(taxonomy)?, &settings),
        Commands::Prompts(args) => execute_prompts(args, &load_taxonomy(taxonomy)?, &settings),
        Commands::Export(args) => execute_export(args, &load_taxonomy(taxonomy)?),
        Commands::Config => {
            let payload =
                serde_json::to_string_pretty(&settings).context("failed to serialize settings")?;
            println!("{payload}");
            Ok(())
        }
    }
}

fn load_settings(config: Option<&Path>) -> Result<DiceSettings> {
    match config {
        Some(path) => {
            let path = resolve_input_path(path)?;
            let store = SettingsStore::load(&path)?;
            info!("settings loaded from {}", store.path().display());
            Ok(store.settings().clone())
        }
        None => {
            let mut settings = DiceSettings::default();
            settings.sanitize();
            Ok(settings)
        }
    }
}

fn load_taxonomy(path: Option<&Path>) -> Result<Taxonomy> {
    let Some(path) = path else {
        return builtin_taxonomy().context("failed to parse bundled feelings wheel");
    };
    let path = resolve_input_path(path)?;
    let store = TaxonomyStore::new(&path);
    match store
        .load()
        .with_context(|| format!("failed to load taxonomy {}", path.display()))?
    {
        Some(taxonomy) => Ok(taxonomy),
        None => bail!("taxonomy file '{}' does not exist", path.display()),
    }
}

fn execute_roll(args: RollArgs, taxonomy: Option<&Path>, settings: &DiceSettings) -> Result<()> {
    let loaded = load_taxonomy(taxonomy).map_err(|err| format!("{err:#}"));
    let mut dice = EmotionDice::from_load_result(loaded, settings);
    if let PoolSource::Fallback { reason } = dice.pool().source() {
        eprintln!("warning: {reason}; rolling from {} fallback emotions", dice.pool().len());
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    for round in 0..args.times {
        if round > 0 {
            println!();
        }
        dice.roll_with(&mut rng)?;
        if let Some(dir) = &args.assets_dir {
            dice.verify_image(dir);
        }
        print_selection(dice.state());
    }
    println!();
    println!("{}", dice.summary());
    Ok(())
}

fn print_selection(state: &SelectionState) {
    if let Some(grandparent) = &state.grandparent {
        println!("Grandparent: {grandparent}");
    }
    if let Some(parent) = &state.parent {
        println!("Parent: {parent}");
    }
    if let Some(emotion) = &state.emotion {
        println!("Emotion: {emotion}");
    }
    if let Some(image) = &state.image_path {
        println!("Image: {image}");
    }
    println!("{}", state.context_prompt());
}

fn execute_list(args: ListArgs, taxonomy: &Taxonomy) -> Result<()> {
    if args.paths {
        for path in taxonomy.leaf_paths() {
            println!("{path}");
        }
    } else {
        for name in taxonomy.selectable_leaves()? {
            println!("{name}");
        }
    }
    Ok(())
}

fn execute_resolve(
    args: ResolveArgs,
    taxonomy: &Taxonomy,
    settings: &DiceSettings,
) -> Result<()> {
    let Some(path) = taxonomy.resolve_path(&args.name) else {
        bail!(
            "no emotion named '{}' in taxonomy '{}'",
            args.name,
            taxonomy.root().name()
        );
    };
    println!("Path: {path}");
    if let Some(parent) = path.parent() {
        println!("Parent: {parent}");
    }
    if let Some(grandparent) = path.grandparent() {
        println!("Grandparent: {grandparent}");
    }
    println!("Image: {}", settings.images.format().format(&path));
    Ok(())
}

fn execute_prompts(
    args: PromptsArgs,
    taxonomy: &Taxonomy,
    settings: &DiceSettings,
) -> Result<()> {
    let mut prompts = settings.prompts.clone();
    if let Some(style) = args.style {
        prompts.style = style;
    }
    if let Some(levels) = args.root_levels {
        prompts.root_levels = levels;
    }

    let plan = ImagePlan::for_taxonomy(taxonomy, &prompts, &settings.images.format());
    info!("found {} leaf feelings", plan.entries.len());

    let assets_dir = args.assets_dir.as_deref().map(resolve_input_path).transpose()?;
    let mut skipped = 0usize;
    for entry in &plan.entries {
        let status = assets_dir
            .as_deref()
            .map_or(PlanStatus::Pending, |dir| entry.status(dir));
        match status {
            PlanStatus::Exists => {
                skipped += 1;
                println!("[skip] {}", entry.relative_file);
            }
            PlanStatus::Pending => println!("[plan] {}: {}", entry.relative_file, entry.prompt),
        }
    }
    println!("{} planned, {skipped} skipped", plan.entries.len() - skipped);
    Ok(())
}

fn execute_export(args: ExportArgs, taxonomy: &Taxonomy) -> Result<()> {
    let output = resolve_input_path(&args.output)?;
    TaxonomyStore::new(&output)
        .save(taxonomy)
        .with_context(|| format!("failed to write {}", output.display()))?;
    println!(
        "Exported taxonomy '{}' ({} emotions) to {}",
        taxonomy.root().name(),
        taxonomy.leaf_count(),
        output.display()
    );
    Ok(())
}

fn resolve_input_path(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()
            .context("determine current directory")?
            .join(path))
    }
}

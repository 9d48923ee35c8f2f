use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use teamsplit::board::GroupBoard;
use teamsplit::export::{render_json, render_markdown, render_text, DocxWriter};
use teamsplit::presets::PresetStore;
use teamsplit::{roster, shuffler};

#[derive(Parser)]
#[command(
    name = "teamsplit",
    version,
    about = "Randomly split a list of names into even groups"
)]
struct Cli {
    /// Preset store location (defaults to the platform data directory)
    #[arg(long, global = true, value_name = "PATH")]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Split names into randomly drawn groups
    Split(SplitArgs),
    /// Manage saved name-list presets
    Preset {
        #[command(subcommand)]
        action: PresetCommand,
    },
}

#[derive(Args)]
struct SplitArgs {
    /// Number of groups to draw
    #[arg(short, long)]
    groups: usize,

    /// Read names from a file instead of stdin
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Read names from a saved preset
    #[arg(short, long, conflicts_with = "file")]
    preset: Option<String>,

    /// Seed the shuffle for a reproducible draw
    #[arg(long)]
    seed: Option<u64>,

    /// Custom group label; repeat once per group, in order
    #[arg(short, long = "label", value_name = "LABEL")]
    labels: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also export the result as a Word document
    #[arg(long, value_name = "FILE.docx")]
    out: Option<String>,

    /// Proceed even when the list contains duplicate names
    #[arg(long)]
    allow_duplicates: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Markdown,
    Json,
}

#[derive(Subcommand)]
enum PresetCommand {
    /// Save names from a file (or stdin) under a preset name
    Save {
        name: String,
        /// Read names from a file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// List saved presets
    List,
    /// Print a preset's names
    Show { name: String },
    /// Delete a preset
    Delete { name: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Split(args) => run_split(args, cli.store),
        Command::Preset { action } => run_preset(action, cli.store),
    }
}

fn open_store(path: Option<PathBuf>) -> Result<PresetStore> {
    let path = match path {
        Some(path) => path,
        None => PresetStore::default_path()?,
    };
    PresetStore::open(&path)
}

fn read_names_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read names from stdin")?;
            Ok(input)
        }
    }
}

fn run_split(args: SplitArgs, store: Option<PathBuf>) -> Result<()> {
    let raw = match &args.preset {
        Some(name) => {
            let store = open_store(store)?;
            store
                .get(name)?
                .with_context(|| format!("No preset named \"{}\"", name))?
                .names
        }
        None => read_names_input(args.file.as_ref())?,
    };

    let names = roster::parse(&raw);
    roster::validate(&names, args.groups)?;

    let repeated = roster::duplicates(&names);
    if !repeated.is_empty() {
        eprintln!("[split] Warning: duplicate names: {}", repeated.join(", "));
        if !args.allow_duplicates {
            bail!("Duplicate names found; pass --allow-duplicates to keep them");
        }
    }

    let groups = match args.seed {
        Some(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            shuffler::partition_with(&names, args.groups, &mut rng)
        }
        None => shuffler::partition(&names, args.groups),
    };

    let mut board = GroupBoard::from_partition(groups);
    for (index, label) in args.labels.iter().enumerate().take(board.len()) {
        board.set_label(index, label.clone())?;
    }

    let rendered = match args.format {
        OutputFormat::Text => render_text(&board),
        OutputFormat::Markdown => render_markdown(&board),
        OutputFormat::Json => render_json(&board)?,
    };
    println!("{}", rendered);

    if let Some(out) = &args.out {
        DocxWriter::new(&board).write_to_file(out)?;
    }

    Ok(())
}

fn run_preset(action: PresetCommand, store: Option<PathBuf>) -> Result<()> {
    let store = open_store(store)?;

    match action {
        PresetCommand::Save { name, file } => {
            let raw = read_names_input(file.as_ref())?;
            let count = roster::parse(&raw).len();
            if count == 0 {
                bail!("No names to save");
            }
            let preset = store.save(&name, &raw)?;
            println!("Saved preset \"{}\" ({} names)", preset.name, count);
        }
        PresetCommand::List => {
            let presets = store.list()?;
            if presets.is_empty() {
                println!("No presets saved");
            }
            for preset in presets {
                println!(
                    "{}  ({} names, saved {})",
                    preset.name,
                    preset.name_count(),
                    preset.created_at
                );
            }
        }
        PresetCommand::Show { name } => {
            let preset = store
                .get(&name)?
                .with_context(|| format!("No preset named \"{}\"", name))?;
            println!("{}", preset.names.trim_end());
        }
        PresetCommand::Delete { name } => {
            if store.delete(&name)? {
                println!("Deleted preset \"{}\"", name);
            } else {
                bail!("No preset named \"{}\"", name);
            }
        }
    }

    Ok(())
}

//! treeform - directory trees, in-memory trees and tree -aF diagrams.
//!
//! Usage:
//!   treeform [PATH]              Print PATH as a tree -aF diagram
//!   treeform show [PATH]         Same, with walk options
//!   treeform copy SRC DEST       Recreate the skeleton of SRC under DEST
//!   treeform build FILE DEST     Materialize a diagram (or - for stdin)
//!   treeform stats [PATH]        Count directories and files
//!   treeform export [PATH]       Export the tree as JSON
//!   treeform --help              Show help

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Context, Result, eyre};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use treeform_core::{ScanConfig, Tree};
use treeform_scan::TreeScanner;
use treeform_text::RenderConfig;

#[derive(Parser)]
#[command(
    name = "treeform",
    version,
    about = "Convert between directories, trees and tree -aF diagrams",
    long_about = "treeform walks a directory into a tree, prints it the way \
                  `tree -aF` does, and turns such diagrams back into real \
                  directories and empty files."
)]
struct Cli {
    /// Directory to print (defaults to current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print a directory as a tree -aF diagram
    Show {
        /// Directory to print
        #[arg(default_value = ".")]
        path: PathBuf,

        #[command(flatten)]
        walk: WalkArgs,

        /// Pad continuation bars with non-breaking spaces, exactly like tree -aF
        #[arg(long)]
        nbsp: bool,
    },

    /// Recreate the directory skeleton of SRC (empty files) under DEST
    Copy {
        /// Source directory
        src: PathBuf,

        /// Destination directory
        dest: PathBuf,

        #[command(flatten)]
        walk: WalkArgs,
    },

    /// Materialize a tree diagram read from FILE ("-" for stdin) under DEST
    Build {
        /// Diagram file
        file: PathBuf,

        /// Destination directory
        dest: PathBuf,
    },

    /// Count directories and files
    Stats {
        /// Directory to walk
        #[arg(default_value = ".")]
        path: PathBuf,

        #[command(flatten)]
        walk: WalkArgs,
    },

    /// Export the tree to JSON
    Export {
        /// Directory to walk
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Options shared by commands that walk a directory.
#[derive(Args, Clone, Default)]
struct WalkArgs {
    /// Descend at most this many levels
    #[arg(short = 'L', long)]
    level: Option<u32>,

    /// Skip entries matching this name (`name`, `prefix*`, `*suffix`)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Skip hidden entries
    #[arg(long)]
    no_hidden: bool,
}

impl WalkArgs {
    fn to_config(&self, path: &Path) -> Result<ScanConfig> {
        ScanConfig::builder()
            .root(path)
            .max_depth(self.level)
            .ignore_patterns(self.ignore.clone())
            .include_hidden(!self.no_hidden)
            .build()
            .map_err(|e| eyre!("Invalid walk options: {e}"))
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    match cli.command {
        Some(Command::Show { path, walk, nbsp }) => run_show(&path, &walk, nbsp)?,
        Some(Command::Copy { src, dest, walk }) => run_copy(&src, &dest, &walk)?,
        Some(Command::Build { file, dest }) => run_build(&file, &dest)?,
        Some(Command::Stats { path, walk }) => run_stats(&path, &walk)?,
        Some(Command::Export { path, output }) => run_export(&path, output)?,
        None => run_show(&cli.path, &WalkArgs::default(), false)?,
    }

    Ok(())
}

fn setup_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .init();
}

/// Walk a directory with the given options.
fn scan(path: &Path, walk: &WalkArgs) -> Result<Tree> {
    let config = walk.to_config(path)?;
    TreeScanner::new()
        .scan(&config)
        .with_context(|| format!("Failed to walk {}", path.display()))
}

/// Print a directory diagram, root line labelled with the path as given.
fn run_show(path: &Path, walk: &WalkArgs, nbsp: bool) -> Result<()> {
    let tree = scan(path, walk)?;

    let mut config = if nbsp {
        RenderConfig::tree_compatible()
    } else {
        RenderConfig::default()
    };
    config.root_label = Some(path.display().to_string());

    print!("{}", config.render(&tree));
    Ok(())
}

/// Recreate a directory skeleton elsewhere.
fn run_copy(src: &Path, dest: &Path, walk: &WalkArgs) -> Result<()> {
    let tree = scan(src, walk)?;
    let report = treeform_ops::write(dest, &tree)
        .with_context(|| format!("Failed to write {}", dest.display()))?;

    eprintln!(
        "Wrote {} directories, {} files to {}",
        report.dirs,
        report.files,
        dest.display()
    );
    Ok(())
}

/// Parse a diagram and write it out.
fn run_build(file: &Path, dest: &Path) -> Result<()> {
    let text = if file == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        buffer
    } else {
        std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()))?
    };

    let tree = treeform_text::parse(&text)
        .context("Invalid tree diagram")?
        .ok_or_else(|| eyre!("No tree found in {}", file.display()))?;
    debug!(nodes = tree.len(), "parsed diagram");

    let report = treeform_ops::write(dest, &tree)
        .with_context(|| format!("Failed to write {}", dest.display()))?;

    eprintln!(
        "Wrote {} directories, {} files to {}",
        report.dirs,
        report.files,
        dest.display()
    );
    Ok(())
}

/// Print node counts, like the trailer of `tree`.
fn run_stats(path: &Path, walk: &WalkArgs) -> Result<()> {
    let tree = scan(path, walk)?;
    let stats = tree.stats();

    println!(
        "{} {}, {} {}",
        stats.total_dirs,
        plural(stats.total_dirs, "directory", "directories"),
        stats.total_files,
        plural(stats.total_files, "file", "files")
    );
    println!("max depth: {}", stats.max_depth);
    Ok(())
}

/// Export the tree to JSON.
fn run_export(path: &Path, output: Option<PathBuf>) -> Result<()> {
    let tree = scan(path, &WalkArgs::default())?;
    let json = serde_json::to_string_pretty(&tree)?;

    match output {
        Some(output_path) => {
            std::fs::write(&output_path, json)?;
            eprintln!("Exported to {}", output_path.display());
        }
        None => {
            println!("{}", json);
        }
    }

    Ok(())
}

fn plural<'a>(count: u64, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

//! CLI entry point for apex

use std::path::PathBuf;
use std::process;

use apex::{Config, OutputFormat, Result, parse_file_size, run};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "apex")]
#[command(about = "A fast and flexible tool for generating project structure documentation")]
#[command(version)]
struct Args {
    /// Directory to scan
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Output file (default: project_structure.md or project_structure.json)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Ignore file, relative to the scanned directory
    #[arg(short = 'i', long = "ignore-file", default_value = ".gitignore")]
    ignore_file: PathBuf,

    /// Additional patterns to ignore (repeatable or comma separated)
    #[arg(short = 'a', long = "add-ignore", value_delimiter = ',')]
    add_ignore: Vec<String>,

    /// Only include files whose name matches these patterns (e.g. '*.go')
    #[arg(long = "include", value_delimiter = ',')]
    include: Vec<String>,

    /// Only output the directory tree structure
    #[arg(short = 't', long = "tree-only")]
    tree_only: bool,

    /// Output format: markdown, json
    #[arg(short = 'f', long = "format", default_value = "markdown")]
    format: String,

    /// Maximum file size to include (bytes, or with K/M/G suffix; 0 = unlimited)
    #[arg(long = "max-size", value_name = "SIZE", default_value = "0")]
    max_size: String,

    /// Number of parallel file readers
    /// (0 = auto-detect, 1 = sequential, N = use N workers)
    #[arg(short = 'j', long = "jobs", default_value = "0")]
    jobs: usize,

    /// Suppress all progress output except for errors
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    /// Validate arguments into a run configuration. The format is checked
    /// first so an unsupported one fails before anything touches the disk.
    fn into_config(self) -> Result<Config> {
        let format: OutputFormat = self.format.parse()?;
        let max_file_size = parse_file_size(&self.max_size)?;

        Ok(Config {
            output_path: self
                .output
                .unwrap_or_else(|| format.default_output_path()),
            root: self.path,
            ignore_file: self.ignore_file,
            extra_ignores: self.add_ignore,
            include_patterns: self.include,
            tree_only: self.tree_only,
            format,
            max_file_size,
            quiet: self.quiet,
            jobs: self.jobs,
        })
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            process::exit(1);
        }
        // --help / --version
        Err(e) => e.exit(),
    };

    init_tracing();

    let result = args.into_config().and_then(|config| run(&config));
    if let Err(e) = result {
        eprintln!("apex: {}", e);
        process::exit(1);
    }
}

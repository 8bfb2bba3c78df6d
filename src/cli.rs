use clap::Parser;
use poetry_deps::application::dto::OutputFormat;
use std::path::PathBuf;

/// Report the dependency graph of Poetry projects
#[derive(Parser, Debug)]
#[command(name = "poetry-deps")]
#[command(version)]
#[command(
    about = "Report the dependency graph of Poetry projects from poetry.lock and pyproject.toml",
    long_about = None
)]
pub struct Args {
    /// Project directory holding poetry.lock (repeatable, defaults to the current directory)
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub path: Vec<PathBuf>,

    /// Output format: json or text [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Config file (defaults to poetry-deps.config.yml in the first project directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Only print warnings and errors to stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}

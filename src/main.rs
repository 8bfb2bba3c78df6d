mod cli;
mod config;

use cli::Args;
use config::ConfigFile;
use futures::stream::{FuturesOrdered, StreamExt};
use poetry_deps::prelude::*;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

/// Settings after merging the config file under the CLI flags
#[derive(Debug)]
struct RunSettings {
    paths: Vec<PathBuf>,
    format: OutputFormat,
    output: Option<PathBuf>,
    quiet: bool,
}

impl RunSettings {
    fn merge(args: Args, config: ConfigFile) -> Self {
        Self {
            format: args
                .format
                .or_else(|| config.output_format())
                .unwrap_or_default(),
            output: args.output.or(config.output),
            quiet: args.quiet || config.quiet.unwrap_or(false),
            paths: args.path,
        }
    }
}

#[tokio::main]
async fn main() {
    let args = match Args::try_parse_args() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version land here too and are not failures
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run(args: Args) -> Result<()> {
    for path in &args.path {
        validate_project_path(path)?;
    }

    let config = load_config(&args)?;
    let settings = RunSettings::merge(args, config);

    let result = analyze_all(&settings.paths, settings.quiet).await?;

    let reporter = StderrProgressReporter::with_verbosity(!settings.quiet);
    reporter.report(FormatterFactory::progress_message(settings.format));

    let colored = settings.output.is_none() && std::io::stdout().is_terminal();
    let formatter = FormatterFactory::create(settings.format, colored);
    let formatted_output = formatter.format(&result)?;

    let presenter = PresenterFactory::create(PresenterType::from(settings.output));
    presenter.present(&formatted_output)?;

    Ok(())
}

fn load_config(args: &Args) -> Result<ConfigFile> {
    if let Some(ref config_path) = args.config {
        return config::load_config_from_path(config_path);
    }
    let first = args.path.first().map(PathBuf::as_path).unwrap_or(Path::new("."));
    Ok(config::discover_config(first)?.unwrap_or_default())
}

/// Analyzes every project directory on the blocking pool and merges the
/// results in argument order.
async fn analyze_all(paths: &[PathBuf], quiet: bool) -> Result<AnalysisResult> {
    let total = paths.len();
    let multi = total > 1;
    // With several projects the bar replaces per-project status lines
    let overall = StderrProgressReporter::with_verbosity(multi && !quiet);

    let mut pending: FuturesOrdered<_> = paths
        .iter()
        .cloned()
        .map(|path| {
            tokio::task::spawn_blocking(move || {
                let verbose = !quiet && !multi;
                let use_case = AnalyzeProjectUseCase::new(
                    FileSystemReader::new(),
                    FileSystemReader::new(),
                    StderrProgressReporter::with_verbosity(verbose),
                );
                let response = use_case.execute(AnalysisRequest::new(path.clone()));
                (path, response)
            })
        })
        .collect();

    let mut merged = AnalysisResult::empty();
    let mut done = 0;
    while let Some(joined) = pending.next().await {
        let (path, response) = joined?;
        let response = response?;
        done += 1;
        let label = path.display().to_string();
        overall.report_progress(done, total, Some(label.as_str()));
        merged.merge(response.result);
    }

    if multi {
        overall.report_completion(&format!(
            "✅ Analyzed {} project(s), {} package(s) in total",
            total,
            merged.package_count()
        ));
    }

    Ok(merged)
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(AnalysisError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    let metadata = std::fs::symlink_metadata(path).map_err(|e| AnalysisError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(AnalysisError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !metadata.is_dir() {
        return Err(AnalysisError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Path is not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}

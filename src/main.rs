use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use log::error;

use clashgen::utils::sanitize_path;
use clashgen::{convert, ConvertError, ConvertReport, ConvertRequestBuilder, Flavor};

/// Generate SubZ and Sub-Win Clash profiles from a single source profile
///
/// Without a subcommand both SubZ.yml (mobile) and Sub-Win.yml (desktop) are
/// generated.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    combined: CombinedArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate only the SubZ profile for the mobile client
    Mobile(SingleArgs),
    /// Generate only the trimmed Sub-Win profile
    Windows(SingleArgs),
}

#[derive(Args, Debug)]
struct CombinedArgs {
    /// Path to the source clash.yaml file (prompted if omitted)
    #[arg(value_name = "SOURCE")]
    source: Option<String>,

    /// Destination path for SubZ.yml
    #[arg(short = 'z', long, value_name = "FILE")]
    subz_output: Option<String>,

    /// Destination path for Sub-Win.yml
    #[arg(short = 'w', long, value_name = "FILE")]
    subwin_output: Option<String>,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Args, Debug)]
struct SingleArgs {
    /// Path to the source clash.yaml file (prompted if omitted)
    #[arg(value_name = "SOURCE")]
    source: Option<String>,

    /// Destination file
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Directory for outputs without an explicit path (defaults next to the executable)
    #[arg(long, env = "CLASHGEN_OUTPUT_DIR", value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn prompt_source() -> anyhow::Result<String> {
    print!("Enter path to clash YAML file: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    // EOF reads zero bytes and leaves the line empty
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read source path from stdin")?;
    Ok(line)
}

fn absolute(path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    std::path::absolute(&path).unwrap_or(path)
}

fn resolve_source(source: Option<String>) -> anyhow::Result<PathBuf> {
    let raw = match source {
        Some(source) => source,
        None => prompt_source()?,
    };
    let cleaned = sanitize_path(&raw);
    if cleaned.is_empty() {
        return Err(ConvertError::InputMissing.into());
    }
    Ok(absolute(&cleaned))
}

fn default_output_dir(common: &CommonArgs) -> PathBuf {
    if let Some(dir) = &common.output_dir {
        return dir.clone();
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn output_path(explicit: Option<&str>, flavor: Flavor, dir: &Path) -> PathBuf {
    match explicit {
        Some(path) => absolute(&sanitize_path(path)),
        None => dir.join(flavor.default_file_name()),
    }
}

fn run(cli: Cli) -> anyhow::Result<ConvertReport> {
    let request = match cli.command {
        None => {
            let args = cli.combined;
            let dir = default_output_dir(&args.common);
            let source = resolve_source(args.source)?;
            ConvertRequestBuilder::new(source)
                .output(
                    Flavor::Mobile,
                    output_path(args.subz_output.as_deref(), Flavor::Mobile, &dir),
                )
                .output(
                    Flavor::Desktop,
                    output_path(args.subwin_output.as_deref(), Flavor::Desktop, &dir),
                )
                .build()
        }
        Some(Command::Mobile(args)) => single_request(args, Flavor::Mobile)?,
        Some(Command::Windows(args)) => single_request(args, Flavor::Windows)?,
    };

    Ok(convert(&request)?)
}

fn single_request(args: SingleArgs, flavor: Flavor) -> anyhow::Result<clashgen::ConvertRequest> {
    let dir = default_output_dir(&args.common);
    let source = resolve_source(args.source)?;
    Ok(ConvertRequestBuilder::new(source)
        .output(flavor, output_path(args.output.as_deref(), flavor, &dir))
        .build())
}

fn verbose(cli: &Cli) -> bool {
    match &cli.command {
        None => cli.combined.common.verbose,
        Some(Command::Mobile(args)) | Some(Command::Windows(args)) => args.common.verbose,
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize the logger
    let level = if verbose(&cli) { "debug" } else { "info" };
    env_logger::init_from_env(Env::default().default_filter_or(level));

    match run(cli) {
        Ok(report) => println!("{}", report.summary()),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}

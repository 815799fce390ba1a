use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use stillsheet::config::{self, SheetConfig};
use stillsheet::imaging::{FontSet, RustBackend, decode_logo};
use stillsheet::pipeline::{self, SheetError};
use stillsheet::output;
use stillsheet::types::Job;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stillsheet")]
#[command(about = "Turn a directory of stills into a PDF contact sheet")]
#[command(long_about = "\
Turn a directory of stills into a PDF contact sheet

Every .jpeg/.jpg/.png/.tif/.tiff/.heic file directly inside the input
directory becomes one page, in filename order. Stills must be named
<file>-<look>.<ext>; the two halves are printed under the photo.

  input/
  ├── A001-Warm.jpg        → page 1 (lead: title, date, timestamp, logo)
  ├── A002-Cold.tif        → page 2
  └── notes.txt            # ignored

The sheet is written to <output>/<project>_<date>.pdf.

Run 'stillsheet gen-config' to generate a documented stillsheet.toml.")]
#[command(version)]
#[command(subcommand_negates_reqs = true)]
struct Cli {
    /// Directory containing the stills
    #[arg(short, long, required = true)]
    input: Option<PathBuf>,

    /// Directory the PDF is written to
    #[arg(short, long, required = true)]
    output: Option<PathBuf>,

    /// Project name: sheet title and first half of the filename
    #[arg(short, long, required = true)]
    project_name: Option<String>,

    /// Shooting date: printed under the title and second half of the filename
    #[arg(short = 'd', long, required = true)]
    shooting_date: Option<String>,

    /// Logo image (PNG or JPEG) as base64
    #[arg(short, long, required = true)]
    logo: Option<String>,

    /// Config file (defaults apply when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Font collection for the title line
    #[arg(long)]
    title_font: Option<PathBuf>,

    /// Font collection for the date, timestamp and labels
    #[arg(long)]
    text_font: Option<PathBuf>,

    /// Page width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Padding band height in pixels
    #[arg(long)]
    padding: Option<u32>,

    /// Log pipeline details to stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print a stock stillsheet.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "stillsheet=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    if let Some(Command::GenConfig) = cli.command {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    let args = SheetArgs::from_cli(cli).unwrap_or_else(|e| e.exit());
    build_sheet(args)?;
    Ok(())
}

/// The arguments of a sheet run, with every required flag present.
struct SheetArgs {
    input: PathBuf,
    output: PathBuf,
    project_name: String,
    shooting_date: String,
    logo: String,
    config: Option<PathBuf>,
    title_font: Option<PathBuf>,
    text_font: Option<PathBuf>,
    width: Option<u32>,
    padding: Option<u32>,
}

impl SheetArgs {
    /// Take the run arguments out of the parsed command line.
    ///
    /// Clap already enforces the required flags when no subcommand is given;
    /// a missing one still surfaces as a usage error, never as an empty value.
    fn from_cli(cli: Cli) -> Result<Self, clap::Error> {
        Ok(Self {
            input: required(cli.input, "input")?,
            output: required(cli.output, "output")?,
            project_name: required(cli.project_name, "project-name")?,
            shooting_date: required(cli.shooting_date, "shooting-date")?,
            logo: required(cli.logo, "logo")?,
            config: cli.config,
            title_font: cli.title_font,
            text_font: cli.text_font,
            width: cli.width,
            padding: cli.padding,
        })
    }
}

fn required<T>(value: Option<T>, flag: &str) -> Result<T, clap::Error> {
    value.ok_or_else(|| {
        Cli::command().error(
            ErrorKind::MissingRequiredArgument,
            format!("the argument '--{flag}' is required"),
        )
    })
}

/// Resolve config and job from the command line, then run the pipeline.
fn build_sheet(args: SheetArgs) -> Result<(), SheetError> {
    let sheet_config = resolve_sheet_config(&args)?;
    // Fonts load before anything touches the input directory, so a broken
    // font setup fails even when there is nothing to render.
    let fonts = FontSet::load(&sheet_config.fonts)?;
    let logo = decode_logo(&args.logo)?;

    let job = Job {
        input_dir: args.input,
        output_dir: args.output,
        project_name: args.project_name,
        shooting_date: args.shooting_date,
        logo,
        generated_at: chrono::Local::now().naive_local(),
    };
    tracing::debug!(
        input = %job.input_dir.display(),
        output = %job.output_path().display(),
        generated_at = %job.generated_at_label(),
        "starting run"
    );

    pipeline::run(&job, &sheet_config, &RustBackend::new(), &fonts, |event| {
        output::print_event(&event)
    })?;
    Ok(())
}

/// Load the config file and apply command-line overrides on top.
fn resolve_sheet_config(args: &SheetArgs) -> Result<SheetConfig, SheetError> {
    let mut sheet_config = config::load_config(args.config.as_deref())?;
    if let Some(path) = &args.title_font {
        sheet_config.fonts.set_title_font(path);
    }
    if let Some(path) = &args.text_font {
        sheet_config.fonts.set_text_font(path);
    }
    if let Some(width) = args.width {
        sheet_config.layout.width = width;
    }
    if let Some(padding) = args.padding {
        sheet_config.layout.padding = padding;
    }
    sheet_config.validate()?;
    Ok(sheet_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("stillsheet").chain(args.iter().copied()))
    }

    const FULL: &[&str] = &[
        "-i", "stills", "-o", "out", "-p", "Nightfall", "-d", "2024-05-12", "-l", "aGVsbG8=",
    ];

    #[test]
    fn full_command_line_yields_sheet_args() {
        let args = SheetArgs::from_cli(parse(FULL).unwrap()).unwrap();
        assert_eq!(args.input, PathBuf::from("stills"));
        assert_eq!(args.output, PathBuf::from("out"));
        assert_eq!(args.project_name, "Nightfall");
        assert_eq!(args.shooting_date, "2024-05-12");
        assert_eq!(args.logo, "aGVsbG8=");
        assert_eq!(args.width, None);
    }

    #[test]
    fn missing_logo_is_rejected_by_clap() {
        let err = parse(&FULL[..8]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn gen_config_needs_no_sheet_flags() {
        let cli = parse(&["gen-config"]).unwrap();
        assert!(matches!(cli.command, Some(Command::GenConfig)));
    }

    #[test]
    fn absent_flag_is_a_usage_error_not_an_empty_value() {
        let mut cli = parse(FULL).unwrap();
        cli.logo = None;
        let err = SheetArgs::from_cli(cli).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }
}

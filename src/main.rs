//! bionic - Bionic reading formatter

use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing::{info, warn};

use bionic::render::{AnsiRenderer, HtmlRenderer, JsonRenderer, MarkdownRenderer};
use bionic::util::decode_text;
use bionic::{BionicTransform, OutputFormat, Renderer, StyleConfig};

#[derive(Parser)]
#[command(name = "bionic")]
#[command(version, about = "Bionic reading formatter", long_about = None)]
#[command(after_help = "EXAMPLES:
    bionic notes.txt                    Print notes.txt with bold word prefixes
    bionic notes.txt -o notes.html      Write a styled HTML document
    bionic -r 0.4 -f markdown < in.txt  Read stdin, emit Markdown
    bionic -s font_size=14 -o out.html  Override a style field
    bionic --list-fields                Show editable style fields")]
struct Cli {
    /// Input text file, or - for stdin
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Output format: markdown, html, ansi, json
    #[arg(short, long, value_name = "FORMAT")]
    format: Option<OutputFormat>,

    /// Fraction of each word to emphasize
    #[arg(short, long, allow_hyphen_values = true)]
    ratio: Option<f64>,

    /// Font family for HTML output
    #[arg(long)]
    font: Option<String>,

    /// Font size in points for HTML output
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    size: Option<u32>,

    /// Line spacing for HTML output
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    spacing: Option<u32>,

    /// JSON style config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Set a style field, e.g. -s bionic_ratio=0.4 (repeatable)
    #[arg(short = 's', long = "set", value_name = "FIELD=VALUE")]
    overrides: Vec<String>,

    /// Emit an HTML fragment instead of a full document
    #[arg(long)]
    fragment: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// List style fields with their types and defaults, then exit
    #[arg(long)]
    list_fields: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Suppress all but error messages
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    if cli.list_fields {
        list_fields();
        return ExitCode::SUCCESS;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Install the stderr subscriber.
///
/// Explicit `-v`/`-q` flags win; otherwise `BIONIC_LOG` is honored and the
/// default level is `warn`.
fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = match (quiet, verbose) {
        (true, _) => EnvFilter::new("error"),
        (false, 0) => {
            EnvFilter::try_from_env("BIONIC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
        }
        (false, 1) => EnvFilter::new("info"),
        (false, _) => EnvFilter::new("debug"),
    };

    // try_init so a second call is harmless
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .try_init();
}

fn list_fields() {
    for spec in StyleConfig::FIELDS {
        let note = if spec.editable { "" } else { "  (choose from font list)" };
        println!("{:<14}{:<9}{}{note}", spec.name, spec.kind, spec.default);
    }
    println!();
    println!("Fonts: {}", StyleConfig::FONT_CHOICES.join(", "));
}

fn run(cli: &Cli) -> bionic::Result<()> {
    let config = build_config(cli)?;
    if !config.ratio_in_range() {
        warn!(
            ratio = config.bionic_ratio,
            "bionic_ratio outside [0, 1]; split points will be clamped"
        );
    }

    let text = read_input(cli.input.as_deref())?;
    let output = BionicTransform::from_config(&config).apply(&text);

    let format = resolve_format(cli);
    info!(
        format = %format,
        paragraphs = output.len(),
        segments = output.segment_count(),
        "rendering"
    );

    match &cli.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            render(cli, &config, format, &output, &mut writer)?;
            writer.flush()?;
        }
        None => {
            let mut writer = io::stdout().lock();
            render(cli, &config, format, &output, &mut writer)?;
            writer.flush()?;
        }
    }

    Ok(())
}

/// Defaults, then the config file, then `--set` overrides, then flags.
fn build_config(cli: &Cli) -> bionic::Result<StyleConfig> {
    let mut config = match &cli.config {
        Some(path) => StyleConfig::load(path)?,
        None => StyleConfig::default(),
    };

    for assignment in &cli.overrides {
        config.apply_override(assignment)?;
    }

    if let Some(ratio) = cli.ratio {
        config.bionic_ratio = ratio;
    }
    if let Some(font) = &cli.font {
        config.set_field("font_name", font)?;
    }
    if let Some(size) = cli.size {
        config.font_size = size;
    }
    if let Some(spacing) = cli.spacing {
        config.line_spacing = spacing;
    }

    Ok(config)
}

fn read_input(path: Option<&Path>) -> io::Result<String> {
    let bytes = match path {
        Some(path) if path != Path::new("-") => std::fs::read(path)?,
        _ => {
            let mut buf = Vec::new();
            io::stdin().lock().read_to_end(&mut buf)?;
            buf
        }
    };
    Ok(decode_text(&bytes).into_owned())
}

fn resolve_format(cli: &Cli) -> OutputFormat {
    if let Some(format) = cli.format {
        return format;
    }
    match &cli.output {
        Some(path) => OutputFormat::from_path(path).unwrap_or(OutputFormat::Markdown),
        None if io::stdout().is_terminal() => OutputFormat::Ansi,
        None => OutputFormat::Markdown,
    }
}

fn render<W: Write>(
    cli: &Cli,
    config: &StyleConfig,
    format: OutputFormat,
    output: &bionic::StyledOutput,
    writer: &mut W,
) -> io::Result<()> {
    match format {
        OutputFormat::Markdown => MarkdownRenderer::new().render(output, writer),
        OutputFormat::Html => HtmlRenderer::new(config)
            .fragment(cli.fragment)
            .render(output, writer),
        OutputFormat::Ansi => AnsiRenderer::new().render(output, writer),
        OutputFormat::Json => JsonRenderer::new().pretty(cli.pretty).render(output, writer),
    }
}

//! mdqti - Markdown exam to QTI converter

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mdqti::export::{self, PackageConfig, PackageExporter};
use mdqti::qti::DEFAULT_TITLE;
use mdqti::{AssessmentConfig, Error};

#[derive(Parser)]
#[command(name = "mdqti")]
#[command(
    version,
    about = "Convert Markdown exam files to QTI format for LMS import",
    long_about = None
)]
#[command(after_help = "EXAMPLE MARKDOWN:
  1. What is the output of the following code?

     ```python
     print(\"Hello, World!\")
     ```

     a. Hello
     b. World
     *c. Hello, World!
     d. Error

  2. Which of these is a Python keyword?
     a. function
     *b. def
     c. method

Mark the correct answer with an asterisk (*) before the choice letter.

EXAMPLES:
    mdqti exam.md                   Write exam.zip
    mdqti exam.md -o quiz.zip       Write quiz.zip
    mdqti exam.md --xml-only        Print the assessment XML")]
struct Cli {
    /// Input Markdown file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output QTI package (defaults to INPUT with a .zip extension)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Assessment title
    #[arg(short, long, default_value = DEFAULT_TITLE)]
    title: String,

    /// Print only the assessment XML to stdout instead of writing a package
    #[arg(long)]
    xml_only: bool,

    /// Deflate compression level (0-9)
    #[arg(long, value_name = "LEVEL", value_parser = clap::value_parser!(u32).range(0..=9))]
    compression_level: Option<u32>,

    /// Suppress status messages
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // --verbose enables DEBUG, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let markdown = read_input(&cli.input)?;

    let conversion = mdqti::convert(&markdown, &AssessmentConfig::new(cli.title.as_str()))?;
    if !cli.quiet {
        eprintln!("Found {} question(s).", conversion.questions.len());
    }

    if cli.xml_only {
        let stdout = io::stdout();
        export::write_xml(&conversion.documents, &mut stdout.lock())?;
        return Ok(());
    }

    let path = export::resolve_output_path(&cli.input, cli.output.as_deref());
    let exporter = PackageExporter::new().with_config(PackageConfig {
        compression_level: cli.compression_level,
    });
    let written = export::write_package_file(&exporter, &conversion.documents, &path)?;

    if !cli.quiet {
        eprintln!("QTI package created: {}", written.display());
    }
    Ok(())
}

fn read_input(path: &Path) -> Result<String, Error> {
    if !path.exists() {
        return Err(Error::InvalidInput(format!(
            "input file '{}' not found",
            path.display()
        )));
    }
    Ok(std::fs::read_to_string(path)?)
}

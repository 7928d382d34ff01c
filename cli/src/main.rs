//! htmlword CLI - HTML to document model conversion tool

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use htmlword::{ConvertOptions, HtmlWord, HtmlWordResult, JsonFormat};

#[derive(Parser)]
#[command(name = "htmlword")]
#[command(version)]
#[command(about = "Convert HTML with inline CSS into a word-processing document model", long_about = None)]
struct Cli {
    /// Input HTML file ("-" for stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(flatten)]
    convert: ConvertArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert HTML to the JSON document model
    Json {
        /// Input HTML file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        #[command(flatten)]
        convert: ConvertArgs,
    },

    /// Convert HTML to plain text
    Text {
        /// Input HTML file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        convert: ConvertArgs,
    },

    /// Show content statistics
    Info {
        /// Input HTML file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        convert: ConvertArgs,
    },

    /// Show version information
    Version,
}

/// Flags shared by every conversion.
#[derive(Args, Clone)]
struct ConvertArgs {
    /// Parse input as a whole document and convert its <body>
    #[arg(long)]
    full_document: bool,

    /// Prefix of heading style names
    #[arg(long, value_name = "PREFIX", env = "HTMLWORD_HEADING_PREFIX")]
    heading_prefix: Option<String>,

    /// Keep whitespace in text exactly as written
    #[arg(long)]
    preserve_whitespace: bool,

    /// Marker for unordered list items
    #[arg(long, value_name = "CHAR")]
    bullet: Option<char>,

    /// Largest colspan passed to the document model
    #[arg(long, value_name = "N")]
    max_colspan: Option<u16>,

    /// Do not make header cells bold
    #[arg(long)]
    plain_headers: bool,
}

impl ConvertArgs {
    fn builder(&self) -> HtmlWord {
        let mut options = ConvertOptions::new()
            .with_collapse_whitespace(!self.preserve_whitespace)
            .with_header_cells_bold(!self.plain_headers);
        if let Some(ref prefix) = self.heading_prefix {
            options = options.with_heading_style_prefix(prefix.as_str());
        }
        if let Some(bullet) = self.bullet {
            options = options.with_bullet_marker(bullet);
        }
        if let Some(max) = self.max_colspan {
            options = options.with_max_colspan(max);
        }

        let builder = HtmlWord::new().with_options(options);
        if self.full_document {
            builder.full_document()
        } else {
            builder
        }
    }

    fn convert(&self, input: &Path) -> Result<HtmlWordResult, Box<dyn std::error::Error>> {
        let markup = read_input(input)?;
        log::debug!("read {} bytes from {}", markup.len(), input.display());
        Ok(self.builder().convert(&markup)?)
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Json {
            input,
            output,
            compact,
            convert,
        }) => cmd_json(&input, output.as_deref(), compact, &convert),
        Some(Commands::Text {
            input,
            output,
            convert,
        }) => cmd_text(&input, output.as_deref(), &convert),
        Some(Commands::Info { input, convert }) => cmd_info(&input, &convert),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: print JSON if input is provided
            if let Some(input) = cli.input {
                cmd_json(&input, None, false, &cli.convert)
            } else {
                println!("{}", "Usage: htmlword <FILE>".yellow());
                println!("       htmlword --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn read_input(input: &Path) -> io::Result<String> {
    if input == Path::new("-") {
        let mut markup = String::new();
        io::stdin().read_to_string(&mut markup)?;
        Ok(markup)
    } else {
        let bytes = fs::read(input)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

fn write_output(output: Option<&Path>, content: &str) -> io::Result<()> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    convert: &ConvertArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = convert.convert(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = result.to_json(format)?;
    write_output(output, &json)?;

    Ok(())
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    convert: &ConvertArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = convert.convert(input)?;
    let text = result.to_text()?;
    write_output(output, &text)?;

    Ok(())
}

fn cmd_info(input: &Path, convert: &ConvertArgs) -> Result<(), Box<dyn std::error::Error>> {
    let result = convert.convert(input)?;
    let stats = result.stats();

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!(
        "{}: {}",
        "Mode".bold(),
        if convert.full_document {
            "Document"
        } else {
            "Fragment"
        }
    );
    println!("{}: {}", "Blocks".bold(), result.section().block_count());

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "List items".bold(), stats.list_item_count);
    println!("{}: {}", "Tables".bold(), stats.table_count);
    println!("{}: {}", "Rows".bold(), stats.row_count);
    println!("{}: {}", "Cells".bold(), stats.cell_count);
    println!("{}: {}", "Runs".bold(), stats.run_count);
    println!("{}: {}", "Page breaks".bold(), stats.page_break_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    if log::log_enabled!(log::Level::Debug) {
        log::debug!("stats: {}", serde_json::to_string(&stats)?);
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "htmlword".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("HTML to word-processing document model converter");
    println!();
    println!("License: MIT");
}

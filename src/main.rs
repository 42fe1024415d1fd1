use clap::Parser;
use std::path::{Path, PathBuf};
use std::process;

use classmint::builders::write_outputs;
use classmint::core::{
    print_error_message, print_info_message, read_document, ClassmintError, DocumentProcessor,
    RenameOptions, RenameOutcome,
};
use classmint::env::{generate_env_docs, EnvConfig};
use classmint::naming::RenameMode;
use classmint::network::session::Session;

const ASCII: &str = r"
  ___ _               __  __ _     _
 / __| |__ _ ______ _|  \/  (_)_ _| |_
| (__| / _` (_-<_-<  | |\/| | | ' \  _|
 \___|_\__,_/__/__/  |_|  |_|_|_||_\__|
";

const DEFAULT_OUTPUT_DIR: &str = "out";

#[derive(Parser, Debug)]
#[command(
    name = "classmint",
    version,
    author = format!("\n{}\n\n", env!("CARGO_PKG_AUTHORS").replace(':', "\n")),
    about = format!("{}\n{}", ASCII, env!("CARGO_PKG_DESCRIPTION"))
)]
struct Cli {
    /// HTML document to rewrite
    #[arg(value_name = "HTML", required_unless_present = "env_docs")]
    html: Option<PathBuf>,

    /// Stylesheet linked from the HTML document
    #[arg(value_name = "CSS", required_unless_present = "env_docs")]
    css: Option<PathBuf>,

    /// Write rewritten documents and mapping.json into this directory
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Prefix of generated class names
    #[arg(long, value_name = "PREFIX")]
    class_prefix: Option<String>,

    /// Prefix of generated IDs
    #[arg(long, value_name = "PREFIX")]
    id_prefix: Option<String>,

    /// Which tokens to rename: strict (GUID-shaped only) or default (any opaque token)
    #[arg(short, long, value_name = "MODE")]
    mode: Option<RenameMode>,

    /// Download external scripts and point their references at the local copies
    #[arg(long)]
    scripts: bool,

    /// Resolve relative script references against this URL
    #[arg(short, long, value_name = "http://localhost/")]
    base_url: Option<String>,

    /// Directory under the output directory that receives scripts
    #[arg(long, value_name = "DIR")]
    scripts_dir: Option<String>,

    /// Adjust network request timeout
    #[arg(short, long, value_name = "60")]
    timeout: Option<u64>,

    /// Set custom User-Agent string
    #[arg(short, long, value_name = "Firefox")]
    user_agent: Option<String>,

    /// Enforce custom charset for input documents
    #[arg(short, long, value_name = "UTF-8")]
    encoding: Option<String>,

    /// Suppress verbosity
    #[arg(short, long)]
    silent: bool,

    /// Log every stage of the run
    #[arg(short, long)]
    verbose: bool,

    /// Print the supported environment variables and exit
    #[arg(long)]
    env_docs: bool,
}

fn init_logging(level: &str, silent: bool, verbose: bool, no_color: bool) {
    let level = if silent {
        tracing::Level::ERROR
    } else if verbose {
        tracing::Level::INFO
    } else {
        level.parse().unwrap_or(tracing::Level::WARN)
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .init();
}

fn file_name(path: &Path, fallback: &str) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| fallback.to_string())
}

fn ensure_input(path: Option<PathBuf>, role: &str) -> Result<PathBuf, ClassmintError> {
    let path = path.ok_or_else(|| {
        ClassmintError::InvalidOption(format!("missing {} input document", role))
    })?;

    if path.is_file() {
        Ok(path)
    } else {
        Err(ClassmintError::MalformedInput(format!(
            "input file does not exist: \"{}\"",
            path.display()
        )))
    }
}

fn print_summary(outcome: &RenameOutcome, output: &Path) {
    print_info_message(&format!(
        "Renamed {} classes and {} ids into {}",
        outcome.class_map.len(),
        outcome.id_map.len(),
        output.display()
    ));

    if let Some(report) = &outcome.relocation {
        print_info_message(&format!(
            "Relocated {} scripts ({} failed)",
            report.relocated.len(),
            report.failures.len()
        ));
        for failure in &report.failures {
            print_error_message(&format!("Kept remote script {}: {}", failure.url, failure.reason));
        }
    }
}

fn run(cli: Cli, env_config: EnvConfig) -> Result<(), ClassmintError> {
    let options = RenameOptions {
        class_prefix: cli.class_prefix.unwrap_or(env_config.class_prefix),
        id_prefix: cli.id_prefix.unwrap_or(env_config.id_prefix),
        mode: cli.mode.unwrap_or(env_config.mode),
        base_url: cli.base_url,
        relocate_scripts: cli.scripts,
        scripts_dir: cli.scripts_dir.unwrap_or(env_config.scripts_dir),
        encoding: cli.encoding,
        silent: cli.silent,
        timeout: cli.timeout.unwrap_or(env_config.timeout),
        user_agent: cli.user_agent.or(env_config.user_agent),
    };
    options.validate()?;

    let html_path = ensure_input(cli.html, "HTML")?;
    let css_path = ensure_input(cli.css, "CSS")?;

    let encoding = options.encoding.as_deref();
    let html = read_document(&html_path, encoding)?;
    let css = read_document(&css_path, encoding)?;

    let processor = DocumentProcessor::new(options);
    let mut outcome = processor.process_documents(&html, &css)?;

    if processor.options().relocate_scripts {
        let session = Session::new(
            processor.options().timeout,
            processor.options().user_agent.as_deref(),
        )?
        .with_referer(processor.options().parsed_base_url()?.as_ref());
        processor.relocate_scripts(&mut outcome, &cli.output, &session)?;
    }

    write_outputs(
        &cli.output,
        &file_name(&html_path, "index.html"),
        &file_name(&css_path, "style.css"),
        &outcome,
    )?;

    if !processor.options().silent {
        print_summary(&outcome, &cli.output);
    }

    Ok(())
}

fn main() {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    if cli.env_docs {
        print!("{}", generate_env_docs());
        return;
    }

    let env_config = match EnvConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            print_error_message(&error.to_string());
            process::exit(1);
        }
    };

    init_logging(
        &env_config.log_level,
        cli.silent,
        cli.verbose,
        env_config.no_color,
    );

    if cli.verbose {
        env_config.print_summary();
    }

    if let Err(error) = run(cli, env_config) {
        print_error_message(&format!("Error: {}", error));
        process::exit(1);
    }
}

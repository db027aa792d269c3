//! docbind — generate emscripten bindings and Jest test skeletons from
//! Doxygen XML class records.
//!
//! `docbind <doxygen-xml-dir>` reads every `classlibcellml_1_1*.xml` record
//! and writes two artifacts:
//!
//! - **bindings** (`wrapping.txt`): `EMSCRIPTEN_BINDINGS` blocks per class
//! - **tests** (`tests.txt`): one Jest `describe` block per class

mod artifact;
mod batch;
mod classify;
mod config;
mod model;
mod parser;
mod qualify;
mod render;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "docbind",
    about = "Generate emscripten bindings and Jest test skeletons from Doxygen XML"
)]
struct Cli {
    /// Directory holding the Doxygen XML output
    input: PathBuf,

    /// Bindings output file
    #[arg(short = 'b', long, default_value = "wrapping.txt")]
    bindings: PathBuf,

    /// Tests output file
    #[arg(short = 't', long, default_value = "tests.txt")]
    tests: PathBuf,

    /// File name pattern of class records
    #[arg(short = 'p', long, default_value = config::DEFAULT_PATTERN)]
    pattern: String,

    /// C++ namespace of the documented library
    #[arg(short = 'n', long, default_value = config::DEFAULT_NAMESPACE)]
    namespace: String,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = config::GeneratorConfig::for_namespace(&cli.namespace);
    let options = batch::BatchOptions {
        input: cli.input,
        bindings: cli.bindings,
        tests: cli.tests,
        pattern: cli.pattern,
    };

    batch::run(&options, &config)?;
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

//! CLI front-end: reads a source file, assembles it, writes out the byte
//! image (or full JSON result), and prints diagnostics to stderr.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use zasm::AssembleResult;

#[derive(Parser, Debug)]
#[command(name = "zasm", about = "Two-pass Z80 assembler for the TRS-80 Model III")]
struct Opts {
    /// Path to the .asm source file.
    #[arg(short, long)]
    input: PathBuf,

    /// Path the assembled output is written to.
    #[arg(short, long)]
    output: PathBuf,

    /// Output format: raw binary or the full JSON result.
    #[arg(long, value_enum, default_value_t = OutputFormat::Bin)]
    format: OutputFormat,

    /// Optional path to additionally dump the symbol table as JSON.
    #[arg(long)]
    symbols: Option<PathBuf>,

    /// Increase logging verbosity (-v = info, -vv = debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, Debug, clap::ValueEnum)]
enum OutputFormat {
    Bin,
    Json,
}

fn main() -> ExitCode {
    let opts = Opts::parse();
    init_logging(opts.verbose);

    match run(&opts) {
        Ok(success) => {
            if success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new().filter_level(level).init();
}

fn run(opts: &Opts) -> Result<bool> {
    let source = fs::read_to_string(&opts.input)
        .with_context(|| format!("reading source file {:?}", opts.input))?;

    log::info!("assembling {:?}", opts.input);
    let result = zasm::assemble(&source);

    print_diagnostics(&result);

    match opts.format {
        OutputFormat::Bin => {
            fs::write(&opts.output, &result.bytes)
                .with_context(|| format!("writing output file {:?}", opts.output))?;
        }
        OutputFormat::Json => {
            let file = fs::File::create(&opts.output)
                .with_context(|| format!("creating output file {:?}", opts.output))?;
            serde_json::to_writer_pretty(file, &result).context("serializing assemble result")?;
        }
    }

    if let Some(symbols_path) = &opts.symbols {
        write_symbols(&result, symbols_path)?;
    }

    Ok(result.success)
}

fn print_diagnostics(result: &AssembleResult) {
    for diag in result.errors.iter().chain(result.warnings.iter()) {
        eprintln!("{diag}");
    }
}

fn write_symbols(result: &AssembleResult, path: &PathBuf) -> Result<()> {
    let mut entries: Vec<_> = result.symbol_table.iter().collect();
    entries.sort_by_key(|(_, sym)| sym.address);

    let mut file = fs::File::create(path).with_context(|| format!("creating symbols file {path:?}"))?;
    let rendered: Vec<_> = entries
        .into_iter()
        .map(|(name, sym)| serde_json::json!({ "name": name, "address": sym.address, "kind": sym.kind }))
        .collect();
    let body = serde_json::to_string_pretty(&rendered).context("serializing symbol table")?;
    file.write_all(body.as_bytes()).context("writing symbols file")?;
    Ok(())
}

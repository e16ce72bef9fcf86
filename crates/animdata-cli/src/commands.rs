use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use tracing::{debug, info};

use animdata_text::{json, txt};
use animdata_types::{check_records, dedupe, sort_by_name, Record};

use crate::cli::*;
use crate::config::ConvertConfig;

pub fn run_command(command: Command, config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => ConvertConfig::load(path)?,
        None => ConvertConfig::default(),
    };
    debug!(?config, "loaded conversion options");
    match command {
        Command::Compile(args) => cmd_compile(args, config),
        Command::Decompile(args) => cmd_decompile(args, config),
    }
}

/// Warn, then dedupe and sort as configured.
fn prepare(records: Vec<Record>, config: &ConvertConfig) -> Vec<Record> {
    let report = check_records(&records, config.check_triggers);
    let mut records = if config.dedupe && !report.duplicates.is_empty() {
        let before = records.len();
        let records = dedupe(records);
        info!(removed = before - records.len(), "dropped duplicate entries");
        records
    } else {
        records
    };
    if config.sort {
        sort_by_name(&mut records);
    }
    records
}

fn cmd_compile(args: CompileArgs, config: ConvertConfig) -> anyhow::Result<()> {
    let config = config.with_flags(args.sort, args.dedupe);
    let source = std::fs::read_to_string(&args.source)
        .with_context(|| format!("failed to read {}", args.source.display()))?;
    let records = match args.format.format() {
        TextFormat::Json => json::from_str(&source),
        TextFormat::Txt => txt::from_str(&source),
    }
    .with_context(|| format!("failed to parse {}", args.source.display()))?;

    let records = prepare(records, &config);
    let count = records.len();
    let written = animdata_pack::write_file(&args.animdata_d2, records)
        .with_context(|| format!("failed to write {}", args.animdata_d2.display()))?;

    println!(
        "{} Compiled {} records to {} ({} bytes)",
        "✓".green().bold(),
        count,
        args.animdata_d2.display().to_string().bold(),
        written
    );
    Ok(())
}

fn cmd_decompile(args: DecompileArgs, config: ConvertConfig) -> anyhow::Result<()> {
    let config = config.with_flags(args.sort, args.dedupe);
    let records = animdata_pack::read_file(&args.animdata_d2)
        .with_context(|| format!("failed to read {}", args.animdata_d2.display()))?;

    let records = prepare(records, &config);
    let output = match args.format.format() {
        TextFormat::Json => json::to_string(&records)?,
        TextFormat::Txt => txt::to_string(&records),
    };
    std::fs::write(&args.target, output)
        .with_context(|| format!("failed to write {}", args.target.display()))?;

    println!(
        "{} Decompiled {} records to {}",
        "✓".green().bold(),
        records.len(),
        args.target.display().to_string().bold()
    );
    Ok(())
}

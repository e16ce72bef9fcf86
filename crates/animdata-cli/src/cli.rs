use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "d2animdata",
    about = "Read, write, and convert AnimData.D2 to JSON & tabbed TXT (and vice versa)",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// TOML file with default conversion options
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compile JSON or tabbed text to AnimData.D2
    Compile(CompileArgs),
    /// Decompile AnimData.D2 to JSON or tabbed text
    Decompile(DecompileArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextFormat {
    Json,
    Txt,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct FormatArgs {
    /// Use JSON
    #[arg(long)]
    pub json: bool,
    /// Use tabbed text (TXT)
    #[arg(long)]
    pub txt: bool,
}

impl FormatArgs {
    pub fn format(&self) -> TextFormat {
        if self.txt {
            TextFormat::Txt
        } else {
            TextFormat::Json
        }
    }
}

#[derive(Args)]
pub struct CompileArgs {
    /// JSON or tabbed text file to compile
    pub source: PathBuf,
    /// AnimData.D2 file to save to
    pub animdata_d2: PathBuf,
    #[command(flatten)]
    pub format: FormatArgs,
    /// Sort the records alphabetically before saving
    #[arg(long)]
    pub sort: bool,
    /// Drop records whose COF name already appeared (first one wins)
    #[arg(long)]
    pub dedupe: bool,
}

#[derive(Args)]
pub struct DecompileArgs {
    /// AnimData.D2 file to decompile
    pub animdata_d2: PathBuf,
    /// JSON or tabbed text file to save to
    pub target: PathBuf,
    #[command(flatten)]
    pub format: FormatArgs,
    /// Sort the records alphabetically before saving
    #[arg(long)]
    pub sort: bool,
    /// Drop records whose COF name already appeared (first one wins)
    #[arg(long)]
    pub dedupe: bool,
}

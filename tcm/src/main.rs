mod commands;
mod error;

use std::path::PathBuf;

use structopt::clap::AppSettings::*;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
enum Commands {
    #[structopt(name = "i", visible_alias = "info", about = "Show details of a TCM file")]
    Info {
        #[structopt(long, help = "Print details as a JSON object")]
        json: bool,

        #[structopt(name = "tcmfile", parse(from_os_str), help = "Path to the .tcm file")]
        path: PathBuf,
    },

    #[structopt(name = "t", visible_alias = "text", about = "Print the content as text")]
    Text {
        #[structopt(name = "tcmfile", parse(from_os_str), help = "Path to the .tcm file")]
        path: PathBuf,
    },

    #[structopt(
        name = "c",
        visible_alias = "copy",
        about = "Copy a TCM file byte for byte"
    )]
    Copy {
        #[structopt(name = "tcmfile", parse(from_os_str), help = "Path to the .tcm file")]
        src: PathBuf,

        #[structopt(name = "dest", parse(from_os_str), help = "Where to write the copy")]
        dest: PathBuf,
    },
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "tcm",
    about = "Inspect and copy TCM cache files.",
    settings = &[SubcommandRequiredElseHelp, DisableHelpSubcommand, VersionlessSubcommands],
)]
struct CliOpts {
    #[structopt(short, long, help = "Show verbose output", global = true)]
    verbose: bool,

    #[structopt(subcommand)]
    cmd: Commands,
}

fn main() -> anyhow::Result<()> {
    let opts = CliOpts::from_iter(wild::args_os());

    let level = if opts.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    match opts.cmd {
        Commands::Info { path, json } => commands::info(path, json)?,
        Commands::Text { path } => commands::text(path)?,
        Commands::Copy { src, dest } => commands::copy(src, dest, opts.verbose)?,
    };

    Ok(())
}

use anyhow::Result;
use cfutil::{
    compile::{self, CompilerArgs},
    layout::Layout,
    scaffold, watermelon,
};
use clap::{Args, Parser, Subcommand};
use std::{io, path::PathBuf};

#[derive(Parser)]
#[command(version, about = "Codeforces problem management utility", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[command(flatten)]
    layout: Layout,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new problem folder
    New(NewArgs),
    /// Merge local headers into the problem file and compile it
    Build(BuildArgs),
    /// Read a weight from stdin and print YES if it splits into two even parts
    Watermelon,
}

#[derive(Args, Debug)]
struct NewArgs {
    /// Name of the new problem folder
    problem_name: String,
}

#[derive(Args, Debug)]
struct BuildArgs {
    /// Path to the file to build
    problem_file_path: PathBuf,
    #[command(flatten)]
    compiler: CompilerArgs,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::New(args) => {
            scaffold::new_problem(&cli.layout, &args.problem_name)?;
        }
        Commands::Build(args) => {
            compile::build_problem(&args.problem_file_path, &cli.layout, &args.compiler)?;
        }
        Commands::Watermelon => {
            watermelon::solve(io::stdin().lock(), io::stdout().lock())?;
        }
    }
    Ok(())
}

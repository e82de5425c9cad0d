#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "treedec", about = "JSON tree inspection and decoding tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Validate {
		file: PathBuf,
	},
	Inspect {
		file: PathBuf,
		#[arg(long)]
		json: bool,
	},
	Get {
		file: PathBuf,
		#[arg(long)]
		path: String,
	},
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> treedec::json::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Validate { file } => cmd::validate::run(file),
		Commands::Inspect { file, json } => cmd::inspect::run(file, json),
		Commands::Get { file, path } => cmd::get::run(file, path),
	}
}

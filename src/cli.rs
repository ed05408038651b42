use std::path::PathBuf;

use palc::{Parser, Subcommand};

#[derive(Parser)]
#[command(
	name = "zmonkey",
	after_long_help = "This is zooeywm's monkey interpreter implementation. Set RUST_LOG=zmonkey=debug for logs."
)]
pub struct Cli {
	#[command(subcommand)]
	pub mode: Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
	/// Run a source file and print its final value
	File { path: PathBuf },
	/// Input prompt
	Repl,
	/// Evaluate a snippet and print its value
	Eval { source: String },
}

use std::process::ExitCode;

use palc::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use zmonkey::{Monkey, cli::*};

/// Logs go to stderr and only when `RUST_LOG` is set.
fn init_tracing() {
	if std::env::var_os("RUST_LOG").is_some() {
		tracing_subscriber::registry()
			.with(fmt::layer().with_writer(std::io::stderr).with_target(true))
			.with(EnvFilter::from_default_env())
			.init();
	}
}

fn main() -> ExitCode {
	init_tracing();
	let monkey = Monkey::new();

	let result = match Cli::parse().mode {
		Mode::File { path } => monkey.run_file(&path),
		Mode::Eval { source } => monkey.run(&source),
		Mode::Repl => {
			monkey.run_prompt();
			return ExitCode::SUCCESS;
		}
	};
	match result {
		Ok(value) => {
			if let Some(value) = value {
				println!("{value}");
			}
			ExitCode::SUCCESS
		}
		Err(e) => {
			eprintln!("{e}");
			ExitCode::FAILURE
		}
	}
}

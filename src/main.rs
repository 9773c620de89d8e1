use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vfs_shell::{Shell, ShellConfig};

#[derive(Parser)]
#[command(name = "vfs-shell")]
#[command(about = "A UNIX-like shell prompt over a virtual filesystem")]
#[command(version)]
struct Cli {
    /// VFS document (JSON, or YAML with a .yaml/.yml extension)
    #[arg(long = "vfs-path")]
    vfs_path: Option<PathBuf>,

    /// Script replayed line by line before the interactive loop
    #[arg(long = "startup-script")]
    startup_script: Option<PathBuf>,

    /// Print the resolved configuration and enable debug logging
    #[arg(long = "debug")]
    debug: bool,

    /// Execute a single line (after any startup script) and exit with its status
    #[arg(short = 'c')]
    command: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing (respects RUST_LOG env var)
    let default_level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    let config = ShellConfig::from_process()
        .with_vfs_path(cli.vfs_path)
        .with_startup_script(cli.startup_script)
        .with_debug(cli.debug);
    let mut shell = Shell::new(config);

    if cli.debug {
        print!("{}", shell.configuration_report());
    }

    let code = match cli.command {
        Some(line) => vfs_shell::repl::run_command(&mut shell, &line)?,
        None => vfs_shell::repl::run(&mut shell)?,
    };

    std::process::exit(code);
}

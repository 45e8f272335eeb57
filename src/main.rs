use anyhow::Result;
use clap::Parser;
use spectree::cli::{Cli, Command};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Usage errors exit 1; --help and --version exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let failed = err.use_stderr();
            let _ = err.print();
            return if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::ConvertToTree {
            spec_file,
            output_dir,
        } => {
            let count = spectree::convert_to_tree(&spec_file, &output_dir)?;
            println!("created {count} files in {}", output_dir.display());
        }
        Command::ConvertToSpec {
            project_dir,
            output_file,
        } => {
            let count = spectree::convert_to_spec(&project_dir, &output_file)?;
            println!("wrote {} with {count} files", output_file.display());
        }
    }
    Ok(())
}

use clap::Parser;
use element_detection::cli::commands::{cmd_analyze, cmd_rules};
use element_detection::cli::config::{Cli, Commands, load_config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Analyze {
            input,
            format,
            output,
            min_confidence,
            trace,
        } => {
            cmd_analyze(
                &input,
                format.as_deref(),
                output.as_deref(),
                min_confidence,
                trace.as_deref(),
                cli.verbose,
                &config,
            )?;
        }
        Commands::Rules => {
            cmd_rules(&config)?;
        }
    }

    Ok(())
}

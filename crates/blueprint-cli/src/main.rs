use anyhow::Result;
use blueprint_build::BuildSettings;
use blueprint_cli::cli::{Cli, Commands};
use blueprint_cli::commands::{self, ExportMode};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "blueprint_cli={0},blueprint_codegen={0},blueprint_build={0}",
            log_level
        ))
    });
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Commands::Export { project, out, zip, downloads } => {
            let mode = if zip {
                ExportMode::Zip
            } else if downloads {
                ExportMode::Downloads
            } else {
                ExportMode::Tree
            };
            for path in commands::export(&project, &out, mode)? {
                println!("{}", path.display());
            }
        }
        Commands::Build { project, platform, release, out, fast } => {
            let settings = if fast { BuildSettings::instant() } else { BuildSettings::default() };
            commands::build(&project, &out, platform.into(), release, settings).await?;
        }
        Commands::Serve { host, port } => {
            blueprint_cli::serve(&host, port).await?;
        }
    }

    Ok(())
}

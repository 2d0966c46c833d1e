//! Subcommand implementations.

use anyhow::{bail, Context, Result};
use blueprint_build::{BuildConfig, BuildEvent, BuildOutcome, BuildSettings, BuildSimulator, BuildType, Platform};
use blueprint_codegen::{
    archive_name, assemble, downloads, push_downloads, write_archive, write_project, DirectorySink,
};
use blueprint_core::{validate_unique_ids, ProjectDocument};
use std::fs;
use std::path::{Path, PathBuf};

/// Load and validate a project file.
pub fn load_project(path: &Path) -> Result<ProjectDocument> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let project = ProjectDocument::from_json(&json)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    validate_unique_ids(&project.components)?;
    Ok(project)
}

/// How `export` writes its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportMode {
    Tree,
    Zip,
    Downloads,
}

/// Export a project, returning the paths written.
pub fn export(project: &Path, out: &Path, mode: ExportMode) -> Result<Vec<PathBuf>> {
    let ProjectDocument { components, config } = load_project(project)?;
    let files = assemble(&components, &config)?;

    let written = match mode {
        ExportMode::Tree => write_project(&files, out)?,
        ExportMode::Zip => {
            fs::create_dir_all(out)?;
            let path = out.join(archive_name(&config));
            let file = fs::File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_archive(&files, &config, file)?;
            vec![path]
        }
        ExportMode::Downloads => {
            let mut sink = DirectorySink::new(out);
            push_downloads(&downloads(&files, &config)?, &mut sink)?;
            sink.written().to_vec()
        }
    };

    tracing::info!(app = %config.name, files = written.len(), "export written");
    Ok(written)
}

/// Run a simulated build, printing progress, and write its instructions.
pub async fn build(
    project: &Path,
    out: &Path,
    platform: Platform,
    release: bool,
    settings: BuildSettings,
) -> Result<PathBuf> {
    let ProjectDocument { components, config } = load_project(project)?;
    let build = BuildConfig {
        platform,
        build_type: if release { BuildType::Release } else { BuildType::Debug },
        signing: None,
    };

    let (mut events, handle) = BuildSimulator::new(settings).spawn(components, config, build);
    while let Some(event) = events.recv().await {
        match event {
            BuildEvent::Progress { percent, label, .. } => println!("[{:>5.1}%] {}", percent, label),
            BuildEvent::Completed => println!("Build completed"),
        }
    }

    match handle.await? {
        BuildOutcome::Succeeded(artifact) => {
            fs::create_dir_all(out)?;
            let path = out.join(&artifact.instructions_name);
            fs::write(&path, &artifact.instructions)?;
            println!("Artifact: {}", artifact.download_url);
            println!("Instructions: {}", path.display());
            Ok(path)
        }
        BuildOutcome::Failed { error } => bail!("build failed: {}", error),
    }
}

//! Asynchronous staged build simulation.

use crate::config::{BuildConfig, BuildSettings, Platform};
use crate::error::Result;
use crate::instructions::{instructions_name, render_instructions};
use crate::stages::Stage;
use blueprint_codegen::assemble;
use blueprint_core::{naming::is_valid_package_name, AppConfig, ComponentNode, CoreError};
use rand::Rng;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Progress reported while a build runs.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildEvent {
    /// A stage started. Sent before the stage's delay.
    Progress {
        stage: Stage,
        percent: f64,
        label: &'static str,
    },
    /// All stages finished and the artifact was produced.
    Completed,
}

/// Result of a successful build.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildArtifact {
    pub download_url: String,
    pub instructions_name: String,
    pub instructions: String,
    pub file_count: usize,
}

/// Terminal state of a build.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildOutcome {
    Succeeded(BuildArtifact),
    Failed { error: String },
}

impl BuildOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, BuildOutcome::Succeeded(_))
    }

    pub fn artifact(&self) -> Option<&BuildArtifact> {
        match self {
            BuildOutcome::Succeeded(artifact) => Some(artifact),
            BuildOutcome::Failed { .. } => None,
        }
    }
}

/// Runs the fixed build stages with simulated delays.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildSimulator {
    settings: BuildSettings,
}

impl BuildSimulator {
    pub fn new(settings: BuildSettings) -> Self {
        Self { settings }
    }

    /// Run a build, sending progress to `events`.
    ///
    /// Sending never waits on the receiver. A dropped or unread receiver
    /// does not stop the build.
    pub async fn run(
        &self,
        tree: &[ComponentNode],
        config: &AppConfig,
        build: &BuildConfig,
        events: mpsc::UnboundedSender<BuildEvent>,
    ) -> BuildOutcome {
        if !is_valid_package_name(&config.package_name) {
            let error = CoreError::InvalidPackageName {
                value: config.package_name.clone(),
            };
            tracing::warn!(%error, "build rejected");
            return BuildOutcome::Failed {
                error: error.to_string(),
            };
        }

        tracing::info!(app = %config.name, platform = %build.platform, "build started");

        for stage in Stage::ALL {
            let label = stage.label(build.platform);
            tracing::info!(percent = stage.percent(), "{}", label);
            let _ = events.send(BuildEvent::Progress {
                stage,
                percent: stage.percent(),
                label,
            });

            let delay = self.stage_delay();
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }

        match produce_artifact(tree, config, build) {
            Ok(artifact) => {
                tracing::info!(url = %artifact.download_url, "build completed");
                let _ = events.send(BuildEvent::Completed);
                BuildOutcome::Succeeded(artifact)
            }
            Err(error) => {
                tracing::error!(%error, "build failed");
                BuildOutcome::Failed {
                    error: error.to_string(),
                }
            }
        }
    }

    /// Run a build on a background task.
    pub fn spawn(
        self,
        tree: Vec<ComponentNode>,
        config: AppConfig,
        build: BuildConfig,
    ) -> (mpsc::UnboundedReceiver<BuildEvent>, JoinHandle<BuildOutcome>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle =
            tokio::spawn(async move { self.run(&tree, &config, &build, tx).await });
        (rx, handle)
    }

    fn stage_delay(&self) -> Duration {
        let jitter_ms = self.settings.stage_jitter.as_millis() as u64;
        let extra = if jitter_ms == 0 {
            0
        } else {
            rand::thread_rng().gen_range(0..=jitter_ms)
        };
        self.settings.stage_delay + Duration::from_millis(extra)
    }
}

fn produce_artifact(
    tree: &[ComponentNode],
    config: &AppConfig,
    build: &BuildConfig,
) -> Result<BuildArtifact> {
    let files = assemble(tree, config)?;
    let extension = match build.platform {
        Platform::Ios => "ipa",
        Platform::Android | Platform::Both => "apk",
    };

    Ok(BuildArtifact {
        download_url: format!(
            "https://example.com/builds/{}.{}",
            config.sanitized_name(),
            extension
        ),
        instructions_name: instructions_name(config),
        instructions: render_instructions(config, build)?,
        file_count: files.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuildType;
    use blueprint_core::{default_config, ComponentKind};

    fn tree() -> Vec<ComponentNode> {
        vec![ComponentNode::new("root", ComponentKind::Container)
            .with_child(ComponentNode::new("t", ComponentKind::Text).with_text("Hello"))]
    }

    async fn collect(mut rx: mpsc::UnboundedReceiver<BuildEvent>) -> Vec<BuildEvent> {
        let mut events = Vec::new();
        while let Some(event) = rx.recv().await {
            events.push(event);
        }
        events
    }

    #[tokio::test]
    async fn test_progress_is_monotonic_and_completes() {
        let simulator = BuildSimulator::new(BuildSettings::instant());
        let (rx, handle) = simulator.spawn(tree(), default_config(), BuildConfig::default());

        let events = collect(rx).await;
        let outcome = handle.await.unwrap();

        assert_eq!(events.len(), Stage::ALL.len() + 1);
        let percents: Vec<f64> = events
            .iter()
            .filter_map(|e| match e {
                BuildEvent::Progress { percent, .. } => Some(*percent),
                BuildEvent::Completed => None,
            })
            .collect();
        assert!(percents.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(percents.last().copied(), Some(100.0));
        assert_eq!(events.last(), Some(&BuildEvent::Completed));

        let artifact = outcome.artifact().unwrap();
        assert_eq!(artifact.download_url, "https://example.com/builds/My_App.apk");
        assert_eq!(artifact.instructions_name, "My_App_build_instructions.md");
        assert_eq!(artifact.file_count, 7);
    }

    #[tokio::test]
    async fn test_first_label() {
        let simulator = BuildSimulator::new(BuildSettings::instant());
        let (rx, handle) = simulator.spawn(vec![], default_config(), BuildConfig::default());
        let events = collect(rx).await;
        handle.await.unwrap();

        assert_eq!(
            events[0],
            BuildEvent::Progress {
                stage: Stage::EnvironmentInit,
                percent: 12.5,
                label: "Initializing build environment...",
            }
        );
    }

    #[tokio::test]
    async fn test_invalid_package_fails_before_any_stage() {
        let mut config = default_config();
        config.package_name = "not a package".to_string();

        let simulator = BuildSimulator::new(BuildSettings::instant());
        let (rx, handle) = simulator.spawn(tree(), config, BuildConfig::default());

        assert!(collect(rx).await.is_empty());
        match handle.await.unwrap() {
            BuildOutcome::Failed { error } => assert!(error.contains("not a package")),
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_dropped_receiver_does_not_stop_build() {
        let simulator = BuildSimulator::new(BuildSettings::instant());
        let (rx, handle) = simulator.spawn(tree(), default_config(), BuildConfig::default());
        drop(rx);
        assert!(handle.await.unwrap().is_success());
    }

    #[tokio::test]
    async fn test_unread_receiver_does_not_stall_build() {
        let (tx, rx) = mpsc::unbounded_channel();
        let simulator = BuildSimulator::new(BuildSettings::instant());
        let outcome = tokio::time::timeout(
            Duration::from_secs(3),
            simulator.run(&[], &default_config(), &BuildConfig::default(), tx),
        )
        .await
        .expect("build stalled on an unread receiver");

        assert!(outcome.is_success());
        assert_eq!(collect(rx).await.len(), Stage::ALL.len() + 1);
    }

    #[tokio::test]
    async fn test_ios_artifact_extension() {
        let build = BuildConfig {
            platform: Platform::Ios,
            build_type: BuildType::Release,
            signing: None,
        };
        let (tx, _rx) = mpsc::unbounded_channel();
        let outcome = BuildSimulator::new(BuildSettings::instant())
            .run(&tree(), &default_config(), &build, tx)
            .await;
        let artifact = outcome.artifact().unwrap();
        assert!(artifact.download_url.ends_with("/My_App.ipa"));
        assert!(artifact.instructions.contains("## Release Build"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_default_pacing_waits_between_stages() {
        let start = tokio::time::Instant::now();
        let (tx, _rx) = mpsc::unbounded_channel();
        let outcome = BuildSimulator::default()
            .run(&tree(), &default_config(), &BuildConfig::default(), tx)
            .await;

        assert!(outcome.is_success());
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(8 * 1000));
        assert!(elapsed <= Duration::from_millis(8 * 3000));
    }
}

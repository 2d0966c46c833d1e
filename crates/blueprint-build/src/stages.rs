//! The fixed sequence of simulated build stages.

use crate::config::Platform;

/// One simulated build stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    EnvironmentInit,
    CodeGeneration,
    DependencyInstall,
    BundleCompile,
    NativeBuild,
    Signing,
    AssetOptimization,
    Finalize,
}

impl Stage {
    /// Every stage, in execution order.
    pub const ALL: [Stage; 8] = [
        Stage::EnvironmentInit,
        Stage::CodeGeneration,
        Stage::DependencyInstall,
        Stage::BundleCompile,
        Stage::NativeBuild,
        Stage::Signing,
        Stage::AssetOptimization,
        Stage::Finalize,
    ];

    /// Human-readable progress label.
    pub fn label(self, platform: Platform) -> &'static str {
        match self {
            Stage::EnvironmentInit => "Initializing build environment...",
            Stage::CodeGeneration => "Generating React Native code...",
            Stage::DependencyInstall => "Installing dependencies...",
            Stage::BundleCompile => "Compiling JavaScript bundle...",
            Stage::NativeBuild => match platform {
                Platform::Android => "Building Android project...",
                Platform::Ios => "Building iOS project...",
                Platform::Both => "Building Android and iOS projects...",
            },
            Stage::Signing => match platform {
                Platform::Android => "Signing APK...",
                Platform::Ios => "Signing IPA...",
                Platform::Both => "Signing APK and IPA...",
            },
            Stage::AssetOptimization => "Optimizing assets...",
            Stage::Finalize => "Finalizing build...",
        }
    }

    /// Position in [`Stage::ALL`].
    pub fn index(self) -> usize {
        Stage::ALL.iter().position(|s| *s == self).unwrap_or_default()
    }

    /// Completion percentage once this stage is done.
    pub fn percent(self) -> f64 {
        (self.index() + 1) as f64 / Stage::ALL.len() as f64 * 100.0
    }
}

//! Scaffolding workflow
//!
//! A scaffold runs through fixed steps, each one a precondition for the next:
//!
//! 1. resolve the project name (argument or prompt)
//! 2. refuse an existing target directory
//! 3. create the project root and `arcade/`
//! 4. resolve the release tag and fetch the headers concurrently
//! 5. unless blank: create `assets/` and fetch the audio concurrently
//! 6. prompt for the project metadata
//! 7. write the main source, `Makefile`, `.gitignore` and `arcade.config.json`
//!
//! Any error ends the run immediately. Nothing already written is removed.

mod prompt;
mod report;

pub use prompt::{AcceptDefaults, Prompter};
pub use report::{NullReporter, ProgressGuard, Reporter, TaskProgress};

use crate::assets::release::{resolve_release_tag, ReleaseResolution, ReleaseTag};
use crate::assets::{audio_assets, header_assets, AssetDescriptor, AssetFetcher};
use crate::config::{validate_project_name, ProjectConfig};
use crate::error::ScaffoldError;
use crate::product::ProductConfig;
use crate::templates::{self, SourceKind};
use crate::{ASSETS_DIR, CONFIG_FILE_NAME, HEADERS_DIR};
use std::path::{Path, PathBuf};
use tokio::fs;

/// What the operator asked for
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    /// Directory the project directory is created in
    pub parent: PathBuf,

    /// Project name from the command line; prompted for when absent
    pub name: Option<String>,

    /// Skip the demo program and audio assets
    pub blank: bool,

    /// Pinned release tag; the latest release is looked up when absent
    pub release: Option<String>,
}

impl ScaffoldRequest {
    pub fn new(parent: impl Into<PathBuf>, name: Option<String>) -> Self {
        Self {
            parent: parent.into(),
            name,
            blank: false,
            release: None,
        }
    }

    pub fn blank(mut self, blank: bool) -> Self {
        self.blank = blank;
        self
    }

    pub fn release(mut self, release: Option<String>) -> Self {
        self.release = release;
        self
    }
}

/// A finished project
#[derive(Debug, Clone)]
pub struct ScaffoldOutcome {
    pub project_dir: PathBuf,
    pub release: ReleaseResolution,
    pub config: ProjectConfig,
    pub blank: bool,
    /// Every file written, assets included
    pub files: Vec<PathBuf>,
}

/// Drives a scaffold from name to written files
pub struct Scaffolder<'a, C: ProductConfig> {
    product: &'a C,
    fetcher: AssetFetcher,
    prompter: &'a dyn Prompter,
    reporter: &'a dyn Reporter,
}

impl<'a, C: ProductConfig> Scaffolder<'a, C> {
    pub fn new(
        product: &'a C,
        fetcher: AssetFetcher,
        prompter: &'a dyn Prompter,
        reporter: &'a dyn Reporter,
    ) -> Self {
        Self {
            product,
            fetcher,
            prompter,
            reporter,
        }
    }

    pub async fn run(&self, request: ScaffoldRequest) -> Result<ScaffoldOutcome, ScaffoldError> {
        let name = self.resolve_name(request.name)?;
        let project_dir = request.parent.join(&name);
        tracing::info!(project = %name, dir = %project_dir.display(), blank = request.blank, "scaffolding");

        self.check_directory(&project_dir).await?;
        create_dir(&project_dir).await?;
        create_dir(&project_dir.join(HEADERS_DIR)).await?;

        let release = self.resolve_release(request.release).await;
        let mut files = self
            .fetch_group(
                "Fetching headers",
                header_assets(release.tag.as_str()),
                &project_dir,
            )
            .await?;

        if !request.blank {
            create_dir(&project_dir.join(ASSETS_DIR)).await?;
            files.extend(
                self.fetch_group("Fetching assets", audio_assets(), &project_dir)
                    .await?,
            );
        }

        let config = self.prompter.project_config(&name)?;
        files.extend(
            self.write_project_files(&project_dir, &config, SourceKind::from_blank(request.blank))
                .await?,
        );

        tracing::info!(files = files.len(), tag = %release.tag, "scaffold complete");
        Ok(ScaffoldOutcome {
            project_dir,
            release,
            config,
            blank: request.blank,
            files,
        })
    }

    /// Command-line names follow the same rules as prompted ones
    fn resolve_name(&self, name: Option<String>) -> Result<String, ScaffoldError> {
        let name = match name {
            Some(name) => name,
            None => self.prompter.project_name()?,
        };
        validate_project_name(&name)
            .map_err(|reason| ScaffoldError::InvalidProjectName {
                name: name.clone(),
                reason,
            })?;
        Ok(name)
    }

    async fn check_directory(&self, dir: &Path) -> Result<(), ScaffoldError> {
        let exists = fs::try_exists(dir)
            .await
            .map_err(|e| ScaffoldError::filesystem("inspect", dir, e))?;
        if exists {
            return Err(ScaffoldError::DirectoryConflict(dir.to_path_buf()));
        }
        Ok(())
    }

    async fn resolve_release(&self, pinned: Option<String>) -> ReleaseResolution {
        if let Some(tag) = pinned {
            self.reporter.info(&format!("Using release {}", tag));
            return ReleaseResolution {
                tag: ReleaseTag::new(tag),
                fallback_reason: None,
            };
        }

        let resolution = resolve_release_tag(self.product, &self.fetcher).await;
        match &resolution.fallback_reason {
            Some(reason) => self.reporter.warning(&format!(
                "Could not resolve the latest release ({}). Using {}",
                reason, resolution.tag
            )),
            None => self
                .reporter
                .info(&format!("Latest release: {}", resolution.tag)),
        }
        resolution
    }

    async fn fetch_group(
        &self,
        label: &str,
        assets: Vec<AssetDescriptor>,
        root: &Path,
    ) -> Result<Vec<PathBuf>, ScaffoldError> {
        let mut progress = ProgressGuard::start(self.reporter, label, assets.len());
        let result = self
            .fetcher
            .download_all(assets, root, |completed, total| {
                progress.advance(completed, total)
            })
            .await;

        match result {
            Ok(paths) => {
                progress.finish(&format!("{} ({} files)", label, paths.len()));
                Ok(paths)
            }
            Err(e) => {
                progress.fail(&e.to_string());
                Err(e)
            }
        }
    }

    async fn write_project_files(
        &self,
        dir: &Path,
        config: &ProjectConfig,
        kind: SourceKind,
    ) -> Result<Vec<PathBuf>, ScaffoldError> {
        let outputs = [
            (
                dir.join(&config.main_source_file),
                templates::render_main_source(kind, config.source_stem()),
            ),
            (
                dir.join(templates::BUILD_FILE_NAME),
                templates::render_build_file(&config.binary_name, &config.main_source_file),
            ),
            (
                dir.join(templates::IGNORE_FILE_NAME),
                templates::render_ignore_file(),
            ),
            (dir.join(CONFIG_FILE_NAME), config.to_json()?),
        ];

        let total = outputs.len();
        let mut progress = ProgressGuard::start(self.reporter, "Writing project files", total);
        let mut written = Vec::with_capacity(total);

        for (path, content) in outputs {
            if let Err(e) = fs::write(&path, content).await {
                let err = ScaffoldError::filesystem("write", &path, e);
                progress.fail(&err.to_string());
                return Err(err);
            }
            written.push(path);
            progress.advance(written.len(), total);
        }

        progress.finish("Project files written");
        Ok(written)
    }
}

async fn create_dir(dir: &Path) -> Result<(), ScaffoldError> {
    fs::create_dir_all(dir)
        .await
        .map_err(|e| ScaffoldError::filesystem("create directory", dir, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::testing::TestProduct;

    struct Cancelling;

    impl Prompter for Cancelling {
        fn project_name(&self) -> Result<String, ScaffoldError> {
            Err(ScaffoldError::PromptCancelled)
        }

        fn project_config(&self, _default_name: &str) -> Result<ProjectConfig, ScaffoldError> {
            Err(ScaffoldError::PromptCancelled)
        }
    }

    /// Answers the name prompt, then cancels at the metadata prompt
    struct CancelAfterName;

    impl Prompter for CancelAfterName {
        fn project_name(&self) -> Result<String, ScaffoldError> {
            Ok("demo-game".to_string())
        }

        fn project_config(&self, _default_name: &str) -> Result<ProjectConfig, ScaffoldError> {
            Err(ScaffoldError::PromptCancelled)
        }
    }

    fn scaffolder<'a>(prompter: &'a dyn Prompter) -> Scaffolder<'a, TestProduct> {
        let empty_mirror = std::env::temp_dir().join("arcade-core-no-such-mirror");
        Scaffolder::new(
            &TestProduct,
            AssetFetcher::from_local(empty_mirror, "test"),
            prompter,
            &NullReporter,
        )
    }

    fn full_mirror() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for asset in header_assets("v1.0.0").iter().chain(audio_assets().iter()) {
            let path = dir.path().join(&asset.path);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, "// stub\n").unwrap();
        }
        dir
    }

    #[test]
    fn test_request_builder() {
        let request = ScaffoldRequest::new("/tmp", Some("demo".to_string()))
            .blank(true)
            .release(Some("v2.0.0".to_string()));
        assert!(request.blank);
        assert_eq!(request.release.as_deref(), Some("v2.0.0"));
    }

    #[tokio::test]
    async fn test_cancelled_name_prompt_is_fatal() {
        let parent = tempfile::tempdir().unwrap();
        let err = scaffolder(&Cancelling)
            .run(ScaffoldRequest::new(parent.path(), None))
            .await
            .unwrap_err();

        assert!(matches!(err, ScaffoldError::PromptCancelled));
        assert_eq!(std::fs::read_dir(parent.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_cancelled_metadata_prompt_keeps_fetched_assets() {
        let parent = tempfile::tempdir().unwrap();
        let mirror = full_mirror();
        let prompter = CancelAfterName;
        let scaffolder = Scaffolder::new(
            &TestProduct,
            AssetFetcher::from_local(mirror.path().to_path_buf(), "test"),
            &prompter,
            &NullReporter,
        );

        let err = scaffolder
            .run(ScaffoldRequest::new(parent.path(), None).release(Some("v1.0.0".to_string())))
            .await
            .unwrap_err();

        assert!(matches!(err, ScaffoldError::PromptCancelled));
        let root = parent.path().join("demo-game");
        for asset in header_assets("v1.0.0") {
            assert!(root.join(&asset.path).is_file(), "{} missing", asset.path);
        }
        assert!(root.join("assets/background_music.wav").is_file());
        assert!(!root.join(CONFIG_FILE_NAME).exists());
        assert!(!root.join("main.c").exists());
    }

    #[tokio::test]
    async fn test_missing_name_without_prompts_is_a_usage_error() {
        let parent = tempfile::tempdir().unwrap();
        let err = scaffolder(&AcceptDefaults)
            .run(ScaffoldRequest::new(parent.path(), None))
            .await
            .unwrap_err();

        assert!(matches!(err, ScaffoldError::MissingProjectName));
        assert_eq!(err.exit_code(), crate::error::EXIT_USAGE);
        assert_eq!(std::fs::read_dir(parent.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_invalid_cli_name_is_rejected_before_touching_disk() {
        let parent = tempfile::tempdir().unwrap();
        let err = scaffolder(&AcceptDefaults)
            .run(ScaffoldRequest::new(parent.path(), Some("bad name".to_string())))
            .await
            .unwrap_err();

        assert!(matches!(err, ScaffoldError::InvalidProjectName { .. }));
        assert_eq!(std::fs::read_dir(parent.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_existing_directory_conflicts() {
        let parent = tempfile::tempdir().unwrap();
        std::fs::create_dir(parent.path().join("demo-game")).unwrap();

        let err = scaffolder(&AcceptDefaults)
            .run(ScaffoldRequest::new(parent.path(), Some("demo-game".to_string())).blank(true))
            .await
            .unwrap_err();

        assert!(matches!(err, ScaffoldError::DirectoryConflict(_)));
        assert_eq!(
            std::fs::read_dir(parent.path().join("demo-game"))
                .unwrap()
                .count(),
            0
        );
    }

    #[tokio::test]
    async fn test_missing_headers_abort_without_cleanup() {
        let parent = tempfile::tempdir().unwrap();
        let err = scaffolder(&AcceptDefaults)
            .run(ScaffoldRequest::new(parent.path(), Some("demo-game".to_string())))
            .await
            .unwrap_err();

        assert!(matches!(err, ScaffoldError::AssetFetch { .. }));
        // The partially created project stays for the operator to inspect
        assert!(parent.path().join("demo-game/arcade").is_dir());
        assert!(!parent.path().join("demo-game/arcade.config.json").exists());
    }
}

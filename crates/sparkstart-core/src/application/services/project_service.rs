//! Project Service - the create/delete orchestrator.
//!
//! `create_project` runs a linear sequence:
//! 1. Create the project directory exclusively
//! 2. Write the source scaffold (tutorial, template or standard)
//! 3. Optionally create a python virtual environment
//! 4. Optionally write the dev container trio and tool configuration
//! 5. Write the getting-started guide
//! 6. Check for git, resolve a token when publishing
//! 7. `git init`, `git add`, `git commit`
//! 8. Optionally create the remote repository and push
//!
//! Every step after the first may fail. Nothing is undone on failure: the
//! partial directory (and any remote repository) is left for the user to
//! inspect or remove with `delete_project`.

use std::path::{Component, Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{
            CommandRunner, CommandSpec, Filesystem, RemoteRepository, Reporter, TemplateRegistry,
            TokenPrompt,
        },
        scaffold,
        services::credentials::{CredentialStore, TOKEN_ENV_VAR},
    },
    domain::{
        AccessToken, CloneUrl, DomainError, FsEntry, Language, ProjectConfig, ProjectStructure,
        SourceBranch, validate_name,
    },
    error::SparkResult,
};

/// Branch created by `git init`.
pub const DEFAULT_BRANCH: &str = "main";

/// Message of the first commit.
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";

const GIT: &str = "git";
const DOCKER: &str = "docker";
const PYTHON: &str = "python3";

/// What `create_project` produced; rendered by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSummary {
    pub name: String,
    pub path: PathBuf,
    pub language: Language,
    pub branch: SourceBranch,
    /// Paths written, relative to `path`, in write order.
    pub files: Vec<PathBuf>,
    pub venv: bool,
    pub git_initialized: bool,
    pub devcontainer: bool,
    pub tools: bool,
    pub remote_url: Option<CloneUrl>,
}

/// Where the environment-variable fallback token comes from.
enum EnvToken {
    Process,
    Fixed(Option<String>),
}

/// Main orchestration service.
pub struct ProjectService {
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn CommandRunner>,
    remote: Box<dyn RemoteRepository>,
    registry: Box<dyn TemplateRegistry>,
    reporter: Box<dyn Reporter>,
    prompt: Option<Box<dyn TokenPrompt>>,
    env_token: EnvToken,
}

impl ProjectService {
    /// Create a non-interactive service with the given adapters.
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        runner: Box<dyn CommandRunner>,
        remote: Box<dyn RemoteRepository>,
        registry: Box<dyn TemplateRegistry>,
        reporter: Box<dyn Reporter>,
    ) -> Self {
        Self {
            filesystem,
            runner,
            remote,
            registry,
            reporter,
            prompt: None,
            env_token: EnvToken::Process,
        }
    }

    /// Make token resolution interactive during `create_project`.
    pub fn with_prompt(mut self, prompt: Box<dyn TokenPrompt>) -> Self {
        self.prompt = Some(prompt);
        self
    }

    /// Use `token` instead of reading `$GITHUB_TOKEN` from the process.
    pub fn with_env_token(mut self, token: Option<String>) -> Self {
        self.env_token = EnvToken::Fixed(token);
        self
    }

    pub fn is_interactive(&self) -> bool {
        self.prompt.is_some()
    }

    /// Whether `base_dir/name` already exists.
    pub fn project_exists(&self, name: &str, base_dir: &Path) -> bool {
        self.filesystem.exists(&base_dir.join(name))
    }

    /// Create a project under `base_dir`.
    #[instrument(
        skip_all,
        fields(
            project = %config.name(),
            language = %config.language(),
            base_dir = %base_dir.display()
        )
    )]
    pub fn create_project(
        &self,
        config: &ProjectConfig,
        base_dir: &Path,
    ) -> SparkResult<ProjectSummary> {
        let root = base_dir.join(config.name());
        let mut written = Vec::new();

        // 1. Exclusive directory creation
        self.filesystem.create_dir(&root)?;
        info!(path = %root.display(), "Project directory created");
        self.reporter.info(&format!("Created {}", root.display()));

        // 2. Source scaffold
        let source = scaffold::source(config, &root, self.registry.as_ref())?;
        self.materialize(&source, &mut written)?;
        self.reporter.info(&format!(
            "Wrote {} {} files",
            config.language().display_name(),
            match config.branch() {
                SourceBranch::Tutorial => "tutorial".to_string(),
                SourceBranch::Template(t) => format!("{t} template"),
                SourceBranch::Standard => "starter".to_string(),
            }
        ));

        // 3. Virtual environment
        if config.venv() {
            self.create_venv(&root)?;
        }

        // 4. Auxiliary scaffolds
        if config.devcontainer() {
            if !self.runner.is_available(DOCKER) {
                warn!("docker not found on PATH");
                self.reporter.warn(
                    "Docker was not found; the dev container needs it to run \
                     (https://www.docker.com/get-started)",
                );
            }
            let aux = scaffold::auxiliary(config, &root, self.registry.as_ref())?;
            self.materialize(&aux, &mut written)?;
            self.reporter.info("Added .devcontainer/devcontainer.json, .envrc and compose.yaml");
        }

        if config.tools() {
            let manifest = match config.language().amendable_manifest() {
                Some(name) => self.filesystem.read_file(&root.join(name))?,
                None => None,
            };
            let tools = scaffold::tools(
                config,
                &root,
                self.registry.as_ref(),
                manifest.as_deref(),
            )?;
            self.materialize(&tools, &mut written)?;
            self.reporter.info("Added formatter, linter and pre-commit configuration");
        }

        // 5. Documentation
        self.materialize(&scaffold::guide(config, &root), &mut written)?;

        // 6. Version-control precondition and credentials
        if !self.runner.is_available(GIT) {
            return Err(ApplicationError::MissingTool { tool: GIT.into() }.into());
        }

        let token = if config.github() {
            Some(self.resolve_token(&root, config.name(), self.prompt.as_deref())?)
        } else {
            None
        };

        // 7. Local repository
        self.initial_commit(&root)?;
        self.reporter.info(&format!(
            "Initialised git repository on '{DEFAULT_BRANCH}' with first commit"
        ));

        // 8. Remote repository
        let remote_url = match token {
            Some(token) => Some(self.publish(config.name(), &root, &token)?),
            None => None,
        };

        info!(files = written.len(), "Project created");
        Ok(ProjectSummary {
            name: config.name().to_string(),
            path: root,
            language: config.language(),
            branch: config.branch(),
            files: written,
            venv: config.venv(),
            git_initialized: true,
            devcontainer: config.devcontainer(),
            tools: config.tools(),
            remote_url,
        })
    }

    /// Delete a project directory and, with `github`, its remote repository.
    ///
    /// The remote is deleted first so a failure there leaves the local
    /// credential file in place for a retry. Tokens come from the project
    /// file or the environment only; there is never a prompt here.
    #[instrument(skip_all, fields(path = %project_dir.display(), github = github))]
    pub fn delete_project(&self, project_dir: &Path, github: bool) -> SparkResult<()> {
        // 1. Preconditions: the path must end in a project name, and exist
        let name = project_name(project_dir)?;
        if !self.filesystem.exists(project_dir) {
            return Err(ApplicationError::NotFound {
                path: project_dir.to_path_buf(),
            }
            .into());
        }

        // 2. Remote deletion
        if github {
            let token = self.resolve_token(project_dir, name, None)?;
            let owner = self.remote.authenticated_user(&token)?;
            self.remote.delete_repository(&owner, name, &token)?;
            info!(%owner, repo = name, "Remote repository deleted");
            self.reporter.info(&format!("Deleted GitHub repository {owner}/{name}"));
        }

        // 3. Local deletion
        self.filesystem.remove_dir_all(project_dir)?;
        info!("Project directory removed");
        self.reporter.info(&format!("Removed {}", project_dir.display()));
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn resolve_token(
        &self,
        project_dir: &Path,
        project_name: &str,
        prompt: Option<&dyn TokenPrompt>,
    ) -> SparkResult<AccessToken> {
        let env_token = match &self.env_token {
            EnvToken::Process => std::env::var(TOKEN_ENV_VAR).ok(),
            EnvToken::Fixed(token) => token.clone(),
        };
        CredentialStore::new(self.filesystem.as_ref()).resolve(
            project_dir,
            project_name,
            env_token,
            prompt,
        )
    }

    /// Write a structure under its root. No rollback on failure.
    fn materialize(
        &self,
        structure: &ProjectStructure,
        written: &mut Vec<PathBuf>,
    ) -> SparkResult<()> {
        structure.validate()?;

        for entry in structure.entries() {
            let path = structure.root().join(entry.path());
            match entry {
                FsEntry::Directory(_) => self.filesystem.create_dir_all(&path)?,
                FsEntry::File(file) => {
                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }
                    self.filesystem.write_file(&path, &file.content)?;
                    if file.permissions.executable_flag() {
                        self.filesystem.set_permissions(&path, true)?;
                    }
                    if !written.contains(&file.path) {
                        written.push(file.path.clone());
                    }
                }
            }
        }

        Ok(())
    }

    fn create_venv(&self, root: &Path) -> SparkResult<()> {
        if !self.runner.is_available(PYTHON) {
            return Err(ApplicationError::MissingTool {
                tool: PYTHON.into(),
            }
            .into());
        }
        self.runner
            .run(&CommandSpec::new(PYTHON).args(["-m", "venv", ".venv"]), root)?;
        self.reporter.info("Created virtual environment in .venv");
        Ok(())
    }

    fn initial_commit(&self, root: &Path) -> SparkResult<()> {
        let steps = [
            CommandSpec::new(GIT).args(["init", "-b", DEFAULT_BRANCH]),
            CommandSpec::new(GIT).args(["add", "."]),
            CommandSpec::new(GIT).args(["commit", "-m", INITIAL_COMMIT_MESSAGE]),
        ];
        for step in &steps {
            self.runner.run(step, root)?;
        }
        Ok(())
    }

    /// Create the remote, push `main`, then point `origin` back at the plain
    /// URL so the token does not stay in `.git/config`.
    fn publish(&self, name: &str, root: &Path, token: &AccessToken) -> SparkResult<CloneUrl> {
        self.reporter.info("Creating GitHub repository...");
        let clone_url = self.remote.create_repository(name, token)?;
        info!(url = %clone_url, "Remote repository created");

        let auth_url = clone_url.authenticated(token)?;
        self.runner.run(
            &CommandSpec::new(GIT)
                .args(["remote", "add", "origin"])
                .secret_arg(auth_url.expose(), auth_url.to_string()),
            root,
        )?;

        let pushed = self.runner.run(
            &CommandSpec::new(GIT).args(["push", "-u", "origin", DEFAULT_BRANCH]),
            root,
        );

        let reset = self.runner.run(
            &CommandSpec::new(GIT).args(["remote", "set-url", "origin", clone_url.as_str()]),
            root,
        );
        if let Err(e) = reset {
            warn!(error = %e, "Could not reset origin URL");
            self.reporter.warn(
                "Could not remove the token from the origin URL; run \
                 `git remote set-url origin <clone url>` manually",
            );
        }

        pushed?;
        self.reporter.info(&format!("Pushed '{DEFAULT_BRANCH}' to {clone_url}"));
        Ok(clone_url)
    }
}

/// Final component of a project path, which must itself be a valid project
/// name. Rejects `.`, `..`, roots and anything `create_project` could not
/// have produced.
fn project_name(project_dir: &Path) -> Result<&str, DomainError> {
    let invalid = |reason: &str| DomainError::InvalidName {
        name: project_dir.display().to_string(),
        reason: reason.to_string(),
    };
    match project_dir.components().next_back() {
        Some(Component::Normal(name)) => {
            let name = name
                .to_str()
                .ok_or_else(|| invalid("project directory name is not valid UTF-8"))?;
            validate_name(name)
        }
        _ => Err(invalid("path must end in a project directory name")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{
        MockCommandRunner, MockFilesystem, MockRemoteRepository, MockTemplateRegistry,
        TracingReporter,
    };
    use crate::domain::{Template, TemplateFile};
    use crate::error::SparkError;
    use std::sync::{Arc, Mutex};

    static FILES: [TemplateFile; 2] = [
        TemplateFile::new("README.md", "# {{PROJECT_NAME}}\n"),
        TemplateFile::new(".gitignore", ".sparkstart.env\n"),
    ];

    fn permissive_fs() -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir().returning(|_| Ok(()));
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));
        fs.expect_read_file().returning(|_| Ok(None));
        fs.expect_set_permissions().returning(|_, _| Ok(()));
        fs
    }

    fn registry() -> MockTemplateRegistry {
        let mut registry = MockTemplateRegistry::new();
        registry
            .expect_files()
            .returning(|_, _| Some(&FILES[..]));
        registry
    }

    /// Runner that records every command line it is asked to run.
    fn recording_runner(available: bool) -> (MockCommandRunner, Arc<Mutex<Vec<String>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut runner = MockCommandRunner::new();
        runner.expect_is_available().return_const(available);
        let sink = Arc::clone(&log);
        runner.expect_run().returning(move |cmd, _| {
            sink.lock()
                .unwrap()
                .push(cmd.exposed_args().collect::<Vec<_>>().join(" "));
            Ok(String::new())
        });
        (runner, log)
    }

    fn service(
        fs: MockFilesystem,
        runner: MockCommandRunner,
        remote: MockRemoteRepository,
    ) -> ProjectService {
        ProjectService::new(
            Box::new(fs),
            Box::new(runner),
            Box::new(remote),
            Box::new(registry()),
            Box::new(TracingReporter),
        )
        .with_env_token(None)
    }

    #[test]
    fn existing_directory_fails_before_anything_else() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir().returning(|p| {
            Err(ApplicationError::AlreadyExists {
                path: p.to_path_buf(),
            }
            .into())
        });
        let mut runner = MockCommandRunner::new();
        runner.expect_run().never();

        let config = ProjectConfig::builder("demo", Language::Rust).build().unwrap();
        let err = service(fs, runner, MockRemoteRepository::new())
            .create_project(&config, Path::new("/w"))
            .unwrap_err();

        assert!(matches!(
            err,
            SparkError::Application(ApplicationError::AlreadyExists { .. })
        ));
    }

    #[test]
    fn missing_git_aborts_before_any_git_command() {
        let (runner, log) = recording_runner(false);
        let config = ProjectConfig::builder("demo", Language::Rust).build().unwrap();

        let err = service(permissive_fs(), runner, MockRemoteRepository::new())
            .create_project(&config, Path::new("/w"))
            .unwrap_err();

        assert_eq!(
            err,
            SparkError::Application(ApplicationError::MissingTool { tool: "git".into() })
        );
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn local_only_project_runs_git_sequence() {
        let (runner, log) = recording_runner(true);
        let config = ProjectConfig::builder("demo", Language::Python).build().unwrap();

        let summary = service(permissive_fs(), runner, MockRemoteRepository::new())
            .create_project(&config, Path::new("/w"))
            .unwrap();

        assert_eq!(
            *log.lock().unwrap(),
            vec!["init -b main", "add .", "commit -m Initial commit"]
        );
        assert_eq!(summary.path, PathBuf::from("/w/demo"));
        assert!(summary.files.contains(&PathBuf::from("GETTING_STARTED.md")));
        assert!(summary.remote_url.is_none());
    }

    #[test]
    fn github_without_token_fails_before_git() {
        let (runner, log) = recording_runner(true);
        let mut remote = MockRemoteRepository::new();
        remote.expect_create_repository().never();

        let config = ProjectConfig::builder("demo", Language::Rust)
            .github(true)
            .build()
            .unwrap();

        let err = service(permissive_fs(), runner, remote)
            .create_project(&config, Path::new("/w"))
            .unwrap_err();

        assert!(matches!(
            err,
            SparkError::Application(ApplicationError::MissingCredential { .. })
        ));
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn github_publish_pushes_and_scrubs_origin() {
        let (runner, log) = recording_runner(true);
        let mut remote = MockRemoteRepository::new();
        remote
            .expect_create_repository()
            .withf(|name, token| name == "demo" && token.expose() == "ghp_env")
            .times(1)
            .returning(|_, _| Ok(CloneUrl::new("https://github.com/octo/demo.git")));

        let config = ProjectConfig::builder("demo", Language::Rust)
            .github(true)
            .build()
            .unwrap();

        let summary = service(permissive_fs(), runner, remote)
            .with_env_token(Some("ghp_env".into()))
            .create_project(&config, Path::new("/w"))
            .unwrap();

        let log = log.lock().unwrap();
        assert_eq!(
            log[3..],
            [
                "remote add origin https://ghp_env@github.com/octo/demo.git",
                "push -u origin main",
                "remote set-url origin https://github.com/octo/demo.git",
            ]
        );
        assert_eq!(
            summary.remote_url,
            Some(CloneUrl::new("https://github.com/octo/demo.git"))
        );
    }

    #[test]
    fn failed_push_still_resets_origin() {
        let mut runner = MockCommandRunner::new();
        runner.expect_is_available().return_const(true);
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        runner.expect_run().returning(move |cmd, _| {
            let line = cmd.to_string();
            sink.lock().unwrap().push(line.clone());
            if line.starts_with("git push") {
                Err(ApplicationError::ProcessFailure {
                    command: line,
                    stderr: "rejected".into(),
                }
                .into())
            } else {
                Ok(String::new())
            }
        });

        let mut remote = MockRemoteRepository::new();
        remote
            .expect_create_repository()
            .returning(|_, _| Ok(CloneUrl::new("https://github.com/octo/demo.git")));

        let config = ProjectConfig::builder("demo", Language::Rust)
            .github(true)
            .build()
            .unwrap();
        let err = service(permissive_fs(), runner, remote)
            .with_env_token(Some("ghp_env".into()))
            .create_project(&config, Path::new("/w"))
            .unwrap_err();

        assert!(matches!(
            err,
            SparkError::Application(ApplicationError::ProcessFailure { .. })
        ));
        let log = log.lock().unwrap();
        assert_eq!(
            log.last().map(String::as_str),
            Some("git remote set-url origin https://github.com/octo/demo.git")
        );
        assert!(log.iter().all(|l| !l.contains("ghp_env")));
    }

    #[test]
    fn venv_requires_python() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_is_available()
            .returning(|program| program != "python3");
        runner.expect_run().never();

        let config = ProjectConfig::builder("demo", Language::Python)
            .venv(true)
            .build()
            .unwrap();
        let err = service(permissive_fs(), runner, MockRemoteRepository::new())
            .create_project(&config, Path::new("/w"))
            .unwrap_err();

        assert_eq!(
            err,
            SparkError::Application(ApplicationError::MissingTool {
                tool: "python3".into()
            })
        );
    }

    #[test]
    fn template_branch_is_reported_in_summary() {
        let (runner, _) = recording_runner(true);
        let config = ProjectConfig::builder("snake", Language::Python)
            .template(Some(Template::Pygame))
            .build()
            .unwrap();

        let summary = service(permissive_fs(), runner, MockRemoteRepository::new())
            .create_project(&config, Path::new("/w"))
            .unwrap();
        assert_eq!(summary.branch, SourceBranch::Template(Template::Pygame));
    }

    #[test]
    fn delete_missing_directory_is_not_found() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_remove_dir_all().never();

        let err = service(fs, MockCommandRunner::new(), MockRemoteRepository::new())
            .delete_project(Path::new("/w/gone"), false)
            .unwrap_err();
        assert!(matches!(
            err,
            SparkError::Application(ApplicationError::NotFound { .. })
        ));
    }

    #[test]
    fn delete_rejects_paths_that_are_not_project_names() {
        for path in ["/w/demo/..", ".", "..", "/", "/w/1bad"] {
            let mut fs = MockFilesystem::new();
            fs.expect_exists().never();
            fs.expect_remove_dir_all().never();

            let err = service(fs, MockCommandRunner::new(), MockRemoteRepository::new())
                .delete_project(Path::new(path), true)
                .unwrap_err();
            assert!(
                matches!(err, SparkError::Domain(DomainError::InvalidName { .. })),
                "{path}: {err:?}"
            );
        }
    }

    #[test]
    fn delete_with_github_removes_remote_then_local() {
        let mut seq = mockall::Sequence::new();
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_file()
            .returning(|_| Ok(Some("GITHUB_TOKEN=ghp_file\n".into())));

        let mut remote = MockRemoteRepository::new();
        remote
            .expect_authenticated_user()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("octo".into()));
        remote
            .expect_delete_repository()
            .withf(|owner, name, token| {
                owner == "octo" && name == "demo" && token.expose() == "ghp_file"
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Ok(()));
        fs.expect_remove_dir_all()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        service(fs, MockCommandRunner::new(), remote)
            .delete_project(Path::new("/w/demo"), true)
            .unwrap();
    }

    #[test]
    fn failed_remote_delete_keeps_local_directory() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_file().returning(|_| Ok(None));
        fs.expect_remove_dir_all().never();

        let mut remote = MockRemoteRepository::new();
        remote
            .expect_authenticated_user()
            .returning(|_| Ok("octo".into()));
        remote.expect_delete_repository().returning(|_, _, _| {
            Err(ApplicationError::RemoteApi {
                status: 404,
                body: "Not Found".into(),
            }
            .into())
        });

        let err = service(fs, MockCommandRunner::new(), remote)
            .with_env_token(Some("ghp_env".into()))
            .delete_project(Path::new("/w/demo"), true)
            .unwrap_err();
        assert!(matches!(
            err,
            SparkError::Application(ApplicationError::RemoteApi { status: 404, .. })
        ));
    }
}

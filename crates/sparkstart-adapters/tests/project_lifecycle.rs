//! End-to-end create/delete runs against the real filesystem and the
//! built-in templates, with git and GitHub replaced by recording fakes.

use std::path::Path;
use std::sync::{Arc, Mutex};

use sparkstart_adapters::{BuiltinTemplates, LocalFilesystem, MemoryFilesystem};
use sparkstart_core::{
    application::{
        ApplicationError, ProjectService,
        ports::{CommandRunner, CommandSpec, RemoteRepository, TracingReporter},
    },
    domain::{AccessToken, CloneUrl, Language, ProjectConfig, SourceBranch, Template},
    error::{SparkError, SparkResult},
};
use tempfile::TempDir;

type Log = Arc<Mutex<Vec<String>>>;

/// Every tool is available; every command succeeds and is recorded.
#[derive(Clone, Default)]
struct RecordingRunner {
    log: Log,
}

impl CommandRunner for RecordingRunner {
    fn is_available(&self, _program: &str) -> bool {
        true
    }

    fn run(&self, command: &CommandSpec, _cwd: &Path) -> SparkResult<String> {
        let line = std::iter::once(command.program())
            .chain(command.exposed_args())
            .collect::<Vec<_>>()
            .join(" ");
        self.log.lock().unwrap().push(line);
        Ok(String::new())
    }
}

#[derive(Clone, Default)]
struct FakeGitHub {
    calls: Log,
}

impl RemoteRepository for FakeGitHub {
    fn authenticated_user(&self, _token: &AccessToken) -> SparkResult<String> {
        self.calls.lock().unwrap().push("user".into());
        Ok("octocat".into())
    }

    fn create_repository(&self, name: &str, _token: &AccessToken) -> SparkResult<CloneUrl> {
        self.calls.lock().unwrap().push(format!("create {name}"));
        Ok(CloneUrl::new(format!("https://github.com/octocat/{name}.git")))
    }

    fn delete_repository(&self, owner: &str, name: &str, _token: &AccessToken) -> SparkResult<()> {
        self.calls.lock().unwrap().push(format!("delete {owner}/{name}"));
        Ok(())
    }
}

struct Harness {
    tmp: TempDir,
    runner: RecordingRunner,
    remote: FakeGitHub,
    service: ProjectService,
}

impl Harness {
    fn new(env_token: Option<&str>) -> Self {
        let runner = RecordingRunner::default();
        let remote = FakeGitHub::default();
        let service = ProjectService::new(
            Box::new(LocalFilesystem::new()),
            Box::new(runner.clone()),
            Box::new(remote.clone()),
            Box::new(BuiltinTemplates::new()),
            Box::new(TracingReporter),
        )
        .with_env_token(env_token.map(str::to_string));

        Self {
            tmp: TempDir::new().unwrap(),
            runner,
            remote,
            service,
        }
    }

    fn base(&self) -> &Path {
        self.tmp.path()
    }

    fn commands(&self) -> Vec<String> {
        self.runner.log.lock().unwrap().clone()
    }
}

const DEVCONTAINER_ARTIFACTS: [&str; 3] =
    [".devcontainer/devcontainer.json", ".envrc", "compose.yaml"];

fn manifest(language: Language) -> &'static str {
    match language {
        Language::Python => "pyproject.toml",
        Language::Rust => "Cargo.toml",
        Language::JavaScript => "package.json",
        Language::Cpp => "CMakeLists.txt",
    }
}

#[test]
fn create_then_delete_leaves_nothing_behind() {
    for language in Language::ALL {
        let h = Harness::new(None);
        let config = ProjectConfig::builder("demo", language).build().unwrap();

        let summary = h.service.create_project(&config, h.base()).unwrap();
        let root = h.base().join("demo");
        assert_eq!(summary.path, root);
        assert_eq!(summary.branch, SourceBranch::Standard);

        let manifest = std::fs::read_to_string(root.join(manifest(language))).unwrap();
        assert!(manifest.contains("demo"), "{language}: {manifest}");
        assert!(root.join("README.md").is_file(), "{language}");
        assert!(root.join("GETTING_STARTED.md").is_file(), "{language}");
        for artifact in DEVCONTAINER_ARTIFACTS {
            assert!(!root.join(artifact).exists(), "{language}: {artifact}");
        }
        assert!(!root.join(".devcontainer").exists(), "{language}");
        assert_eq!(
            h.commands(),
            [
                "git init -b main",
                "git add .",
                "git commit -m Initial commit"
            ]
        );

        h.service.delete_project(&root, false).unwrap();
        assert!(!root.exists(), "{language}");
        assert_eq!(std::fs::read_dir(h.base()).unwrap().count(), 0);
    }
}

#[test]
fn existing_directory_is_rejected() {
    let h = Harness::new(None);
    std::fs::create_dir(h.base().join("demo")).unwrap();

    let config = ProjectConfig::builder("demo", Language::Python).build().unwrap();
    let err = h.service.create_project(&config, h.base()).unwrap_err();

    assert!(matches!(
        err,
        SparkError::Application(ApplicationError::AlreadyExists { .. })
    ));
    assert!(h.commands().is_empty());
}

#[test]
fn devcontainer_flag_writes_all_three_artifacts() {
    let h = Harness::new(None);
    let config = ProjectConfig::builder("demo", Language::Python)
        .devcontainer(true)
        .build()
        .unwrap();

    h.service.create_project(&config, h.base()).unwrap();
    let root = h.base().join("demo");

    let descriptor = std::fs::read_to_string(root.join(DEVCONTAINER_ARTIFACTS[0])).unwrap();
    assert!(descriptor.contains("pip install -e '.[test]'"));
    for artifact in DEVCONTAINER_ARTIFACTS {
        assert!(root.join(artifact).is_file(), "{artifact}");
    }
    assert!(!root.join("requirements.txt").exists());

    let guide = std::fs::read_to_string(root.join("GETTING_STARTED.md")).unwrap();
    assert!(guide.contains("## Using the Dev Container"));
}

#[test]
fn github_without_token_fails_before_git_runs() {
    let h = Harness::new(None);
    let config = ProjectConfig::builder("demo", Language::Rust)
        .github(true)
        .build()
        .unwrap();

    let err = h.service.create_project(&config, h.base()).unwrap_err();

    assert!(matches!(
        err,
        SparkError::Application(ApplicationError::MissingCredential { .. })
    ));
    // The partial project is left in place, without any git state.
    let root = h.base().join("demo");
    assert!(root.join("Cargo.toml").is_file());
    assert!(!root.join(".git").exists());
    assert!(h.commands().is_empty());
    assert!(h.remote.calls.lock().unwrap().is_empty());
}

#[test]
fn python_tutorial_overrides_pygame_template() {
    let h = Harness::new(None);
    let config = ProjectConfig::builder("demo1", Language::Python)
        .template(Some(Template::Pygame))
        .tutorial(true)
        .build()
        .unwrap();

    let summary = h.service.create_project(&config, h.base()).unwrap();
    assert_eq!(summary.branch, SourceBranch::Tutorial);

    let root = h.base().join("demo1");
    let main = std::fs::read_to_string(root.join("src/main.py")).unwrap();
    assert!(main.contains("def check_guess"));
    assert!(!main.contains("pygame"));
    assert!(root.join("tests/test_main.py").is_file());

    let pyproject = std::fs::read_to_string(root.join("pyproject.toml")).unwrap();
    assert!(pyproject.contains("name = \"demo1\""));
}

#[test]
fn venv_runs_python_before_git() {
    let h = Harness::new(None);
    let config = ProjectConfig::builder("demo", Language::Python)
        .venv(true)
        .build()
        .unwrap();

    let summary = h.service.create_project(&config, h.base()).unwrap();
    assert!(summary.venv);
    assert_eq!(h.commands()[0], "python3 -m venv .venv");
}

#[test]
fn tools_amend_pyproject_in_place() {
    let h = Harness::new(None);
    let config = ProjectConfig::builder("demo", Language::Python)
        .tools(true)
        .build()
        .unwrap();

    h.service.create_project(&config, h.base()).unwrap();
    let root = h.base().join("demo");

    let pyproject = std::fs::read_to_string(root.join("pyproject.toml")).unwrap();
    assert!(pyproject.contains("[project]"));
    assert!(pyproject.contains("[tool.black]"));
    assert!(pyproject.contains("[tool.ruff]"));
    assert!(root.join("requirements-dev.txt").is_file());
    assert!(root.join(".pre-commit-config.yaml").is_file());
    assert!(root.join(".editorconfig").is_file());
}

#[test]
fn tools_add_npm_scripts() {
    let h = Harness::new(None);
    let config = ProjectConfig::builder("web-app", Language::JavaScript)
        .tools(true)
        .build()
        .unwrap();

    h.service.create_project(&config, h.base()).unwrap();
    let package: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(h.base().join("web-app/package.json")).unwrap(),
    )
    .unwrap();

    assert_eq!(package["name"], "web-app");
    assert_eq!(package["scripts"]["start"], "node src/main.js");
    assert!(package["scripts"]["lint"].is_string());
    assert!(package["scripts"]["format:check"].is_string());
}

#[cfg(unix)]
#[test]
fn cpp_project_has_build_dir_and_executable_script() {
    use std::os::unix::fs::PermissionsExt;

    let h = Harness::new(None);
    let config = ProjectConfig::builder("engine", Language::Cpp).build().unwrap();
    h.service.create_project(&config, h.base()).unwrap();

    let root = h.base().join("engine");
    assert!(root.join("build").is_dir());
    let mode = std::fs::metadata(root.join("build.sh"))
        .unwrap()
        .permissions()
        .mode();
    assert_ne!(mode & 0o111, 0);
}

#[test]
fn github_publish_and_delete_round_trip() {
    let h = Harness::new(Some("ghp_env"));
    let config = ProjectConfig::builder("demo", Language::Rust)
        .github(true)
        .build()
        .unwrap();

    let summary = h.service.create_project(&config, h.base()).unwrap();
    assert_eq!(
        summary.remote_url.as_ref().map(CloneUrl::as_str),
        Some("https://github.com/octocat/demo.git")
    );

    let commands = h.commands();
    assert_eq!(
        commands.last().map(String::as_str),
        Some("git remote set-url origin https://github.com/octocat/demo.git")
    );
    // The token only ever appears in the one-off remote add.
    assert_eq!(commands.iter().filter(|c| c.contains("ghp_env")).count(), 1);
    // An environment token is never written to the project.
    assert!(!h.base().join("demo/.sparkstart.env").exists());

    h.service
        .delete_project(&h.base().join("demo"), true)
        .unwrap();
    assert_eq!(
        *h.remote.calls.lock().unwrap(),
        ["create demo", "user", "delete octocat/demo"]
    );
    assert!(!h.base().join("demo").exists());
}

#[test]
fn unreadable_credential_file_falls_back_to_env_token() {
    let h = Harness::new(Some("ghp_env"));
    let root = h.base().join("demo");
    std::fs::create_dir(&root).unwrap();
    std::fs::write(root.join(".sparkstart.env"), [0xff, 0xfe, b'\n']).unwrap();

    h.service.delete_project(&root, true).unwrap();

    assert_eq!(*h.remote.calls.lock().unwrap(), ["user", "delete octocat/demo"]);
    assert!(!root.exists());
}

#[test]
fn delete_missing_project_is_not_found() {
    let h = Harness::new(None);
    let err = h
        .service
        .delete_project(&h.base().join("ghost"), false)
        .unwrap_err();
    assert!(matches!(
        err,
        SparkError::Application(ApplicationError::NotFound { .. })
    ));
}

#[test]
fn in_memory_cpp_project_round_trip() {
    let fs = MemoryFilesystem::new();
    let runner = RecordingRunner::default();
    let service = ProjectService::new(
        Box::new(fs.clone()),
        Box::new(runner.clone()),
        Box::new(FakeGitHub::default()),
        Box::new(BuiltinTemplates::new()),
        Box::new(TracingReporter),
    )
    .with_env_token(None);

    let config = ProjectConfig::builder("demo", Language::Cpp).build().unwrap();
    let summary = service.create_project(&config, Path::new("/work")).unwrap();

    let root = Path::new("/work/demo");
    assert!(fs.content(&root.join("CMakeLists.txt")).is_some());
    assert!(fs.is_executable(&root.join("build.sh")));
    let gitignore = fs.content(&root.join(".gitignore")).unwrap();
    assert!(gitignore.contains(".sparkstart.env"));
    assert_eq!(
        fs.list_files()
            .iter()
            .filter(|p| p.starts_with(root))
            .count(),
        summary.files.len()
    );

    service.delete_project(root, false).unwrap();
    assert!(fs.list_files().is_empty());
}

use sparkstart_core::domain::TemplateFile;

use super::EDITORCONFIG;

const INIT: TemplateFile = TemplateFile::new("src/__init__.py", "");
const TESTS_INIT: TemplateFile = TemplateFile::new("tests/__init__.py", "");
const GITIGNORE: TemplateFile = TemplateFile::new(".gitignore", body!("python/source/gitignore"));

pub(super) static SOURCE: [TemplateFile; 7] = [
    INIT,
    TemplateFile::new("src/main.py", body!("python/source/src/main.py")),
    TESTS_INIT,
    TemplateFile::new("tests/test_main.py", body!("python/source/tests/test_main.py")),
    TemplateFile::new("pyproject.toml", body!("python/source/pyproject.toml")),
    TemplateFile::new("README.md", body!("python/source/README.md")),
    GITIGNORE,
];

pub(super) static PYGAME: [TemplateFile; 7] = [
    INIT,
    TemplateFile::new("src/main.py", body!("python/pygame/src/main.py")),
    TESTS_INIT,
    TemplateFile::new("tests/test_main.py", body!("python/pygame/tests/test_main.py")),
    TemplateFile::new("pyproject.toml", body!("python/pygame/pyproject.toml")),
    TemplateFile::new("README.md", body!("python/pygame/README.md")),
    GITIGNORE,
];

pub(super) static TUTORIAL: [TemplateFile; 7] = [
    INIT,
    TemplateFile::new("src/main.py", body!("python/tutorial/src/main.py")),
    TESTS_INIT,
    TemplateFile::new("tests/test_main.py", body!("python/tutorial/tests/test_main.py")),
    TemplateFile::new("pyproject.toml", body!("python/tutorial/pyproject.toml")),
    TemplateFile::new("README.md", body!("python/tutorial/README.md")),
    GITIGNORE,
];

pub(super) static DEVCONTAINER: [TemplateFile; 1] = [TemplateFile::new(
    ".devcontainer/devcontainer.json",
    body!("python/devcontainer.json"),
)];

pub(super) static DIRENV: [TemplateFile; 1] = [TemplateFile::new(".envrc", body!("python/envrc"))];

pub(super) static COMPOSE: [TemplateFile; 1] =
    [TemplateFile::new("compose.yaml", body!("python/compose.yaml"))];

pub(super) static TOOLS: [TemplateFile; 3] = [
    EDITORCONFIG,
    TemplateFile::new(
        ".pre-commit-config.yaml",
        body!("python/tools/pre-commit-config.yaml"),
    ),
    TemplateFile::new("requirements-dev.txt", body!("python/tools/requirements-dev.txt")),
];

use sparkstart_core::domain::TemplateFile;

use super::EDITORCONFIG;

const GITIGNORE: TemplateFile =
    TemplateFile::new(".gitignore", body!("javascript/source/gitignore"));

pub(super) static SOURCE: [TemplateFile; 5] = [
    TemplateFile::new("package.json", body!("javascript/source/package.json")),
    TemplateFile::new("src/main.js", body!("javascript/source/src/main.js")),
    TemplateFile::new("tests/main.test.js", body!("javascript/source/tests/main.test.js")),
    TemplateFile::new("README.md", body!("javascript/source/README.md")),
    GITIGNORE,
];

pub(super) static TUTORIAL: [TemplateFile; 5] = [
    TemplateFile::new("package.json", body!("javascript/tutorial/package.json")),
    TemplateFile::new("src/main.js", body!("javascript/tutorial/src/main.js")),
    TemplateFile::new("tests/main.test.js", body!("javascript/tutorial/tests/main.test.js")),
    TemplateFile::new("README.md", body!("javascript/tutorial/README.md")),
    GITIGNORE,
];

pub(super) static DEVCONTAINER: [TemplateFile; 1] = [TemplateFile::new(
    ".devcontainer/devcontainer.json",
    body!("javascript/devcontainer.json"),
)];

pub(super) static DIRENV: [TemplateFile; 1] =
    [TemplateFile::new(".envrc", body!("javascript/envrc"))];

pub(super) static COMPOSE: [TemplateFile; 1] =
    [TemplateFile::new("compose.yaml", body!("javascript/compose.yaml"))];

pub(super) static TOOLS: [TemplateFile; 5] = [
    EDITORCONFIG,
    TemplateFile::new(
        ".pre-commit-config.yaml",
        body!("javascript/tools/pre-commit-config.yaml"),
    ),
    TemplateFile::new(".prettierrc", body!("javascript/tools/prettierrc")),
    TemplateFile::new(".prettierignore", body!("javascript/tools/prettierignore")),
    TemplateFile::new(".eslintignore", body!("javascript/tools/eslintignore")),
];

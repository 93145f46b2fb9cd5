use sparkstart_core::domain::TemplateFile;

use super::EDITORCONFIG;

const GITIGNORE: TemplateFile = TemplateFile::new(".gitignore", body!("rust/source/gitignore"));

pub(super) static SOURCE: [TemplateFile; 4] = [
    TemplateFile::new("Cargo.toml", body!("rust/source/Cargo.toml.tmpl")),
    TemplateFile::new("src/main.rs", body!("rust/source/src/main.rs")),
    TemplateFile::new("README.md", body!("rust/source/README.md")),
    GITIGNORE,
];

pub(super) static TUTORIAL: [TemplateFile; 6] = [
    TemplateFile::new("Cargo.toml", body!("rust/tutorial/Cargo.toml.tmpl")),
    TemplateFile::new("src/lib.rs", body!("rust/tutorial/src/lib.rs")),
    TemplateFile::new("src/main.rs", body!("rust/tutorial/src/main.rs")),
    TemplateFile::new(
        "tests/integration_test.rs",
        body!("rust/tutorial/tests/integration_test.rs"),
    ),
    TemplateFile::new("README.md", body!("rust/tutorial/README.md")),
    GITIGNORE,
];

pub(super) static DEVCONTAINER: [TemplateFile; 1] = [TemplateFile::new(
    ".devcontainer/devcontainer.json",
    body!("rust/devcontainer.json"),
)];

pub(super) static DIRENV: [TemplateFile; 1] = [TemplateFile::new(".envrc", body!("rust/envrc"))];

pub(super) static COMPOSE: [TemplateFile; 1] =
    [TemplateFile::new("compose.yaml", body!("rust/compose.yaml"))];

pub(super) static TOOLS: [TemplateFile; 4] = [
    EDITORCONFIG,
    TemplateFile::new(".pre-commit-config.yaml", body!("rust/tools/pre-commit-config.yaml")),
    TemplateFile::new("rustfmt.toml", body!("rust/tools/rustfmt.toml")),
    TemplateFile::new("clippy.toml", body!("rust/tools/clippy.toml")),
];

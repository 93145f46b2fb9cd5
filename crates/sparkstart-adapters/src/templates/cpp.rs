use sparkstart_core::domain::TemplateFile;

use super::EDITORCONFIG;

const GITIGNORE: TemplateFile = TemplateFile::new(".gitignore", body!("cpp/source/gitignore"));

pub(super) static SOURCE: [TemplateFile; 6] = [
    TemplateFile::new("CMakeLists.txt", body!("cpp/source/CMakeLists.txt")),
    TemplateFile::new("conanfile.txt", body!("cpp/source/conanfile.txt")),
    TemplateFile::new("src/main.cpp", body!("cpp/source/src/main.cpp")),
    TemplateFile::executable("build.sh", body!("cpp/source/build.sh")),
    TemplateFile::new("README.md", body!("cpp/source/README.md")),
    GITIGNORE,
];

pub(super) static TUTORIAL: [TemplateFile; 7] = [
    TemplateFile::new("CMakeLists.txt", body!("cpp/tutorial/CMakeLists.txt")),
    TemplateFile::new("conanfile.txt", body!("cpp/tutorial/conanfile.txt")),
    TemplateFile::new("src/game.hpp", body!("cpp/tutorial/src/game.hpp")),
    TemplateFile::new("src/main.cpp", body!("cpp/tutorial/src/main.cpp")),
    TemplateFile::new("tests/test_main.cpp", body!("cpp/tutorial/tests/test_main.cpp")),
    TemplateFile::new("README.md", body!("cpp/tutorial/README.md")),
    GITIGNORE,
];

pub(super) static DEVCONTAINER: [TemplateFile; 1] = [TemplateFile::new(
    ".devcontainer/devcontainer.json",
    body!("cpp/devcontainer.json"),
)];

pub(super) static DIRENV: [TemplateFile; 1] = [TemplateFile::new(".envrc", body!("cpp/envrc"))];

pub(super) static COMPOSE: [TemplateFile; 1] =
    [TemplateFile::new("compose.yaml", body!("cpp/compose.yaml"))];

pub(super) static TOOLS: [TemplateFile; 3] = [
    EDITORCONFIG,
    TemplateFile::new(".pre-commit-config.yaml", body!("cpp/tools/pre-commit-config.yaml")),
    TemplateFile::new(".clang-format", body!("cpp/tools/clang-format")),
];

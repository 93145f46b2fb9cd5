//! `GETTING_STARTED.md` generation.

use crate::domain::Language;

/// Markdown guide tailored to the language and whether the dev container
/// artifacts were generated.
pub fn getting_started(name: &str, language: Language, devcontainer: bool) -> String {
    let mut doc = format!(
        "# Getting Started with {name}\n\
         \n\
         Welcome! This guide walks through running, testing and tidying the project.\n\
         \n\
         ## What's Inside\n\
         \n\
         - **src/** - your source code\n\
         - **tests/** - test files\n\
         - **README.md** - project overview\n"
    );

    if devcontainer {
        doc.push_str(
            "- **.devcontainer/** - dev container configuration\n\
             - **.envrc** - environment setup (requires `direnv`)\n\
             - **compose.yaml** - Docker Compose service definition\n",
        );
    }

    doc.push('\n');
    doc.push_str(language_section(language));

    if devcontainer {
        doc.push_str(DEVCONTAINER_SECTION);
    }

    doc.push_str(&format!(
        "\n## Learning Resources\n\
         \n\
         - {} docs: {}\n\
         - direnv: https://direnv.net/docs/installation.html\n\
         - Docker: https://docs.docker.com/\n\
         \n\
         ## Next Steps\n\
         \n\
         1. Read README.md for project-specific notes\n\
         2. Run the example code and its tests\n\
         3. Change something, run the tests again, commit\n",
        language.display_name(),
        docs_url(language),
    ));

    doc
}

fn docs_url(language: Language) -> &'static str {
    match language {
        Language::Python => "https://docs.python.org/3/",
        Language::Rust => "https://doc.rust-lang.org/",
        Language::JavaScript => "https://developer.mozilla.org/en-US/docs/Web/JavaScript/",
        Language::Cpp => "https://en.cppreference.com/",
    }
}

fn language_section(language: Language) -> &'static str {
    match language {
        Language::Python => {
            "## Python Setup\n\
             \n\
             ```bash\n\
             python3 -m venv .venv          # skip if sparkstart created it\n\
             source .venv/bin/activate\n\
             pip install -e '.[test]'\n\
             ```\n\
             \n\
             Run it with `python src/main.py` and test it with `pytest`.\n\
             \n\
             With `--tools`: `black src/`, `ruff check src/`, `mypy src/`.\n"
        }
        Language::Rust => {
            "## Rust Setup\n\
             \n\
             ```bash\n\
             rustup update\n\
             cargo build\n\
             ```\n\
             \n\
             Run it with `cargo run` and test it with `cargo test`.\n\
             \n\
             Keep it tidy with `cargo fmt` and `cargo clippy`.\n"
        }
        Language::JavaScript => {
            "## JavaScript Setup\n\
             \n\
             ```bash\n\
             node --version                 # Node.js 20 or newer\n\
             npm install\n\
             ```\n\
             \n\
             Run it with `npm start` and test it with `npm test`.\n\
             \n\
             With `--tools`: `npm run lint` and `npm run format`.\n"
        }
        Language::Cpp => {
            "## C++ Setup\n\
             \n\
             ```bash\n\
             cmake -S . -B build\n\
             cmake --build build\n\
             ```\n\
             \n\
             Run the binary from `build/` and test it with `ctest --test-dir build`.\n\
             \n\
             With `--tools`: `clang-format -i src/*.cpp`.\n"
        }
    }
}

const DEVCONTAINER_SECTION: &str = "\n## Using the Dev Container\n\
     \n\
     ### VS Code\n\
     1. Install the \"Dev Containers\" extension\n\
     2. Open the project folder\n\
     3. Choose \"Reopen in Container\"\n\
     \n\
     ### Docker Compose\n\
     ```bash\n\
     docker compose up -d\n\
     docker compose exec app bash\n\
     docker compose down\n\
     ```\n";

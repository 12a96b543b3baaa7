/*!
 * Classification rule tables
 *
 * The allow/deny tables that decide which files make it into a dump.
 * The raw tables are compile-time constants; `Rules` assembles them into
 * lookup sets once per run and is passed into the classifier by value,
 * never mutated afterwards.
 */

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// File extensions (with leading dot, lowercase) whose contents are dumped
pub static ALLOWED_EXTENSIONS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        // General text / data
        ".txt",
        ".md",
        ".markdown",
        ".json",
        ".xml",
        ".yaml",
        ".yml",
        ".toml",
        ".ini",
        ".cfg",
        ".conf",
        ".sql",
        ".graphql",
        ".proto",
        // Python
        ".py",
        ".pyx",
        ".pyi",
        ".pyw",
        ".pyc",
        ".pyd",
        ".pyo",
        // C / C++
        ".c",
        ".h",
        ".i",
        ".cpp",
        ".hpp",
        ".cc",
        ".hh",
        ".cxx",
        ".hxx",
        // Julia
        ".jl",
        // JavaScript / TypeScript
        ".js",
        ".jsx",
        ".ts",
        ".tsx",
        ".mjs",
        ".cjs",
        // Web
        ".html",
        ".htm",
        ".css",
        ".scss",
        ".sass",
        ".less",
        // JVM languages
        ".java",
        ".kt",
        ".kts",
        ".groovy",
        ".scala",
        ".sc",
        ".clj",
        ".cljs",
        // .NET
        ".cs",
        ".fs",
        ".fsi",
        ".fsx",
        ".vb",
        // Ruby
        ".rb",
        ".rake",
        ".gemspec",
        // PHP
        ".php",
        ".phtml",
        ".php3",
        ".php4",
        ".php5",
        ".phps",
        // Go
        ".go",
        // Rust
        ".rs",
        // Swift
        ".swift",
        // Shell
        ".sh",
        ".bash",
        ".zsh",
        ".fish",
        // PowerShell
        ".ps1",
        ".psm1",
        ".psd1",
        // Perl
        ".pl",
        ".pm",
        // Lua
        ".lua",
        // Haskell
        ".hs",
        ".lhs",
        // R
        ".r",
        ".rmd",
        // Dart
        ".dart",
        // Objective-C / MATLAB
        ".m",
        ".mm",
        ".mat",
        // Elm
        ".elm",
        // Elixir
        ".ex",
        ".exs",
        // Erlang
        ".erl",
        ".hrl",
        // Lisp
        ".lisp",
        ".cl",
        ".el",
        // Fortran
        ".f",
        ".for",
        ".f90",
        ".f95",
        ".f03",
        ".f08",
        // Terraform
        ".tf",
        ".tfvars",
        // LaTeX
        ".tex",
        ".sty",
        ".cls",
    ]
});

/// Extension-less or dotfile names (lowercase) that are kept anyway
pub static ALLOWED_FILENAMES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "readme",
        "license",
        "dockerfile",
        "makefile",
        ".gitignore",
        ".dockerignore",
        ".editorconfig",
        ".env",
        ".gitattributes",
        // Python
        "requirements.txt",
        "setup.py",
        "setup.cfg",
        "pyproject.toml",
        "pipfile",
        "manifest.in",
        ".pylintrc",
        ".flake8",
        "pytest.ini",
        "tox.ini",
        // JavaScript / TypeScript
        "package.json",
        "tsconfig.json",
        ".npmignore",
        ".babelrc",
        ".eslintrc",
        ".prettierrc",
        "tslint.json",
        "webpack.config.js",
        "yarn.lock",
        // C / C++
        "cmakelists.txt",
        "cmakelist.txt",
        // Julia
        "project.toml",
        "manifest.toml",
        "juliaconfig.toml",
        // Ruby
        "gemfile",
        "rakefile",
        // PHP
        "composer.json",
        "composer.lock",
        // Go
        "go.mod",
        "go.sum",
        // Rust
        "cargo.toml",
        "cargo.lock",
        // .NET
        "packages.config",
        "nuget.config",
        "paket.dependencies",
        "paket.lock",
        // JVM
        "pom.xml",
        "build.gradle",
        "build.gradle.kts",
        "settings.gradle",
        "settings.gradle.kts",
        "build.sbt",
        // Docker / CI
        "docker-compose.yml",
        "docker-compose.yaml",
        ".travis.yml",
        ".gitlab-ci.yml",
        "jenkins.file",
        "azure-pipelines.yml",
        // Elm
        "elm.json",
        // Elixir / Erlang
        "mix.exs",
        "mix.lock",
        "rebar.config",
        // IDE markers
        ".vscode",
        ".idea",
        // Octave
        ".octaverc",
        // Terraform / Ansible
        ".terraform.lock.hcl",
        "ansible.cfg",
        "hosts",
        // LaTeX
        "latexmkrc",
    ]
});

/// Directory names pruned from traversal, matched exact-case against any
/// path segment
pub static SKIP_DIRECTORIES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "__pycache__",
        "node_modules",
        "venv",
        "env",
        ".venv",
        ".env",
        "build",
        "dist",
        "target",
        "out",
        "bin",
        "obj",
        ".git",
        ".svn",
        ".hg",
        ".idea",
        ".vscode",
        "logs",
        "output",
        ".next",
    ]
});

/// Exact filenames (lowercase) that are never dumped
pub static SKIP_FILENAMES: Lazy<Vec<&'static str>> = Lazy::new(|| vec!["package-lock.json"]);

/// Regex deny patterns applied to directory base names (exact case)
const SKIP_DIR_PATTERNS: &[&str] = &[r"\.egg-info$"];

/// Regex deny patterns applied to lowercased file names
const SKIP_FILE_PATTERNS: &[&str] = &[
    r"\.log(\.[0-9]+)?$",
    r"^log\.",
    r"\.bak$",
    r"\.tmp$",
    r"\.temp$",
    r"\.swp$",
    r"~$",
];

/// Immutable rule set consulted by the classifier.
///
/// Constructed once per run; extension and filename matching is
/// case-insensitive, directory segment pruning is exact-case.
#[derive(Debug, Clone)]
pub struct Rules {
    pub allowed_extensions: HashSet<&'static str>,
    pub allowed_filenames: HashSet<&'static str>,
    pub skip_directories: HashSet<&'static str>,
    pub skip_filenames: HashSet<&'static str>,
    pub skip_dir_patterns: Vec<Regex>,
    pub skip_file_patterns: Vec<Regex>,
}

impl Rules {
    fn compile(patterns: &[&str]) -> Vec<Regex> {
        patterns
            .iter()
            .map(|p| Regex::new(p).expect("invalid built-in deny pattern"))
            .collect()
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            allowed_extensions: ALLOWED_EXTENSIONS.iter().copied().collect(),
            allowed_filenames: ALLOWED_FILENAMES.iter().copied().collect(),
            skip_directories: SKIP_DIRECTORIES.iter().copied().collect(),
            skip_filenames: SKIP_FILENAMES.iter().copied().collect(),
            skip_dir_patterns: Self::compile(SKIP_DIR_PATTERNS),
            skip_file_patterns: Self::compile(SKIP_FILE_PATTERNS),
        }
    }
}

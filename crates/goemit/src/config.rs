use clap::{Args, Parser};
use goemit_backend::{RenderOptions, TypeVarMarker};
use log::LevelFilter;
use std::path::PathBuf;

/// Header written above the package clause unless `--no-prefix` is given.
pub const DEFAULT_HEADER: &str = "Code generated by goemit. DO NOT EDIT.";

pub const DEFAULT_NAMESPACE: &str = "github.com/goemit";

#[derive(Parser, Debug, Clone)]
#[clap(
    name = "goemit",
    about = "Generates Go packages from the per-module IR dumps of a bower-style project and its dependencies",
    rename_all = "kebab-case",
    author,
    version = env!("CARGO_PKG_VERSION"),
)]
pub struct CliArgs {
    /// Project layout
    #[clap(flatten)]
    pub project: ProjectConfig,

    /// Output options
    #[clap(flatten)]
    pub output: OutputConfig,

    /// General options
    #[clap(flatten)]
    pub general: GeneralConfig,
}

#[derive(Args, Debug, Clone)]
#[clap(next_help_heading = "Project Options")]
pub struct ProjectConfig {
    /// Project-sources directory path
    #[clap(long = "src-path", default_value = "src")]
    pub src_path: PathBuf,

    /// Dependencies directory path
    #[clap(long = "dependency-path", default_value = "bower_components")]
    pub dependency_path: PathBuf,

    /// Project file path
    #[clap(long = "bower-file", default_value = "bower.json")]
    pub bower_file: PathBuf,

    /// Directory holding one IR dump directory per module
    #[clap(long = "coreimp-dumps-path", default_value = "output")]
    pub dumps_path: PathBuf,
}

#[derive(Args, Debug, Clone)]
#[clap(next_help_heading = "Output Options")]
pub struct OutputConfig {
    /// Do not include the comment header
    #[clap(long = "no-prefix")]
    pub no_prefix: bool,

    /// Include comments in the generated code
    #[clap(long = "comments")]
    pub comments: bool,

    /// Regenerate every package that has an IR dump, even when up to date
    #[clap(long = "force")]
    pub force: bool,

    /// Output root for generated Go packages (defaults to the first GOPATH's `src`)
    #[clap(long = "build-path", env = "GOEMIT_BUILD_PATH")]
    pub build_path: Option<PathBuf>,

    /// Root namespace for all generated Go packages
    #[clap(long = "go-namespace", default_value = DEFAULT_NAMESPACE)]
    pub go_namespace: String,

    /// TOML file with additional render options
    #[clap(long = "render-config")]
    pub render_config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
#[clap(next_help_heading = "General Options")]
pub struct GeneralConfig {
    /// Write units containing placeholder text instead of failing them
    #[clap(long = "allow-placeholders")]
    pub allow_placeholders: bool,

    /// Stop scheduling work after the first failed unit
    #[clap(long = "fail-fast")]
    pub fail_fast: bool,

    /// Display detailed progress
    #[clap(long, short = 'v')]
    pub verbose: bool,
}

impl CliArgs {
    pub fn log_level(&self) -> LevelFilter {
        if self.general.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    /// Render options: the `--render-config` file when given, then the flags
    /// on top of it.
    pub fn render_options(&self) -> anyhow::Result<RenderOptions> {
        let mut options = match &self.output.render_config {
            Some(path) => RenderOptions::from_toml_file(path)?,
            None => RenderOptions {
                include_comments: false,
                type_var: TypeVarMarker::for_namespace(&self.output.go_namespace),
                ..Default::default()
            },
        };
        if self.output.comments {
            options.include_comments = true;
        }
        if self.output.no_prefix {
            options.header = None;
        } else if options.header.is_none() {
            options.header = Some(DEFAULT_HEADER.to_string());
        }
        options.strict = !self.general.allow_placeholders;
        Ok(options)
    }

    pub fn build_path(&self) -> PathBuf {
        self.output.build_path.clone().unwrap_or_else(default_build_path)
    }
}

/// First `$GOPATH` entry whose `src` directory exists, else `./build`.
pub fn default_build_path() -> PathBuf {
    std::env::var_os("GOPATH")
        .and_then(|gopath| {
            std::env::split_paths(&gopath)
                .map(|dir| dir.join("src"))
                .find(|src| src.is_dir())
        })
        .unwrap_or_else(|| PathBuf::from("build"))
}

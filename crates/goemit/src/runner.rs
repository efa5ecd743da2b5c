//! Run orchestration.
//!
//! Discovery and manifest loading complete before any regeneration starts.
//! Packages then regenerate concurrently, one blocking task each, and every
//! failure is collected into the final [`RunReport`].

use crate::config::CliArgs;
use crate::project::{discover_dependencies, Project};
use crate::regenerate::{regenerate_package, Cancellation, Layout, PackageReport, UnitFailure};
use anyhow::{bail, Context};
use colored::Colorize;
use futures::future::join_all;
use goemit_backend::RenderOptions;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinSet;

/// Aggregated result of a run.
#[derive(Debug, Default)]
pub struct RunReport {
    pub packages: usize,
    pub written: Vec<PathBuf>,
    pub up_to_date: usize,
    pub without_dump: usize,
    /// Units skipped after cancellation
    pub cancelled: usize,
    /// Packages whose task was aborted before it started
    pub aborted: Vec<String>,
    pub failures: Vec<UnitFailure>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    fn merge(&mut self, report: PackageReport) {
        self.packages += 1;
        self.written.extend(report.written);
        self.up_to_date += report.up_to_date;
        self.without_dump += report.without_dump;
        self.cancelled += report.cancelled;
        self.failures.extend(report.failures);
    }
}

impl Display for RunReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} package(s): {} written, {} up to date, {} without IR dump",
            self.packages,
            self.written.len(),
            self.up_to_date,
            self.without_dump
        )?;
        if self.cancelled > 0 {
            write!(f, ", {} cancelled", self.cancelled)?;
        }
        if !self.aborted.is_empty() {
            write!(f, ", not started: {}", self.aborted.join(", "))?;
        }
        for failure in &self.failures {
            write!(
                f,
                "\n{} {}/{}: {:#}",
                "error".bold().red(),
                failure.package,
                failure.module,
                failure.error
            )?;
        }
        Ok(())
    }
}

/// Everything a run needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub src_dir: PathBuf,
    pub deps_dir: PathBuf,
    pub manifest_path: PathBuf,
    pub layout: Layout,
    pub options: RenderOptions,
    pub fail_fast: bool,
}

impl RunConfig {
    pub fn from_args(args: &CliArgs) -> anyhow::Result<Self> {
        Ok(Self {
            src_dir: args.project.src_path.clone(),
            deps_dir: args.project.dependency_path.clone(),
            manifest_path: args.project.bower_file.clone(),
            layout: Layout {
                dumps_dir: args.project.dumps_path.clone(),
                build_dir: args.build_path(),
                namespace: args.output.go_namespace.clone(),
                force: args.output.force,
            },
            options: args.render_options()?,
            fail_fast: args.general.fail_fast,
        })
    }
}

pub async fn execute(args: &CliArgs) -> anyhow::Result<RunReport> {
    let config = RunConfig::from_args(args)?;
    run(config).await
}

pub async fn run(config: RunConfig) -> anyhow::Result<RunReport> {
    let build_dir = &config.layout.build_dir;
    std::fs::create_dir_all(build_dir).with_context(|| format!("Failed to create {}", build_dir.display()))?;
    if !config.deps_dir.is_dir() {
        bail!("No such `dependency-path` directory: {}", config.deps_dir.display());
    }
    if !config.src_dir.is_dir() {
        bail!("No such `src-path` directory: {}", config.src_dir.display());
    }

    let packages = load_packages(&config).await?;
    info!("regenerating {} package(s)", packages.len());

    let layout = Arc::new(config.layout);
    let options = Arc::new(config.options);
    let cancel = Arc::new(Cancellation::new(config.fail_fast));

    let mut tasks = JoinSet::new();
    let mut names = HashMap::new();
    for project in packages {
        let layout = Arc::clone(&layout);
        let options = Arc::clone(&options);
        let cancel = Arc::clone(&cancel);
        let name = project.name.clone();
        let handle = tasks.spawn_blocking(move || {
            regenerate_package(&project, &layout, &options, &cancel)
                .with_context(|| format!("Failed to regenerate package {}", project.name))
        });
        names.insert(handle.id(), name);
    }

    let mut run_report = RunReport::default();
    let mut aborting = false;
    while let Some(joined) = tasks.join_next_with_id().await {
        let (id, report) = match joined {
            Ok(result) => result,
            Err(err) if err.is_cancelled() => {
                run_report.packages += 1;
                run_report.aborted.extend(names.remove(&err.id()));
                continue;
            }
            Err(err) => bail!("regeneration task panicked: {}", err),
        };
        let name = names.remove(&id).unwrap_or_default();
        let report = match report {
            Ok(report) => report,
            Err(error) => PackageReport {
                failures: vec![UnitFailure {
                    package: name,
                    module: "*".to_string(),
                    error,
                }],
                ..Default::default()
            },
        };
        if config.fail_fast && !report.failures.is_empty() && !aborting {
            warn!("stopping after first failure");
            aborting = true;
            cancel.raise();
            tasks.abort_all();
        }
        run_report.merge(report);
    }
    run_report.aborted.sort();
    Ok(run_report)
}

/// Load the root manifest, discover dependencies and load their manifests.
/// Returns once every manifest is loaded; any failure is fatal.
pub async fn load_packages(config: &RunConfig) -> anyhow::Result<Vec<Project>> {
    let mut root = Project::root(&config.src_dir, &config.manifest_path);
    root.load_manifest()?;
    debug!("root package {}", root.name);

    let deps = discover_dependencies(&config.deps_dir)?;
    let loads = deps.into_iter().map(|mut dep| {
        tokio::task::spawn_blocking(move || {
            dep.load_manifest()?;
            Ok::<_, anyhow::Error>(dep)
        })
    });

    let mut packages = vec![root];
    for loaded in join_all(loads).await {
        packages.push(loaded.context("manifest loading task panicked")??);
    }
    debug!("{} dependencies loaded", packages.len() - 1);
    Ok(packages)
}

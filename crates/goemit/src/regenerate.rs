//! Regeneration of one package: IR dump in, Go source out, per unit.

use crate::project::{Project, Unit};
use anyhow::Context;
use goemit_backend::{render_module, RenderOptions};
use goemit_ir::Module;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitOutcome {
    Written(PathBuf),
    /// Output is newer than the dump
    UpToDate(PathBuf),
    /// The front-end produced no dump for this unit
    NoDump,
}

#[derive(Debug)]
pub struct UnitFailure {
    pub package: String,
    pub module: String,
    pub error: anyhow::Error,
}

/// Outcome of regenerating one package.
#[derive(Debug, Default)]
pub struct PackageReport {
    pub written: Vec<PathBuf>,
    pub up_to_date: usize,
    pub without_dump: usize,
    pub failures: Vec<UnitFailure>,
    /// Units left untouched because the run was cancelled
    pub cancelled: usize,
}

/// Where units come from and go to; shared by every package of a run.
#[derive(Debug, Clone)]
pub struct Layout {
    pub dumps_dir: PathBuf,
    pub build_dir: PathBuf,
    pub namespace: String,
    pub force: bool,
}

/// Stop signal shared by every package of a run.
#[derive(Debug, Default)]
pub struct Cancellation {
    raised: AtomicBool,
    /// Raise on the first failed unit
    on_failure: bool,
}

impl Cancellation {
    pub fn new(on_failure: bool) -> Self {
        Self {
            raised: AtomicBool::new(false),
            on_failure,
        }
    }

    pub fn raise(&self) {
        self.raised.store(true, Ordering::Relaxed);
    }

    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::Relaxed)
    }

    fn unit_failed(&self) {
        if self.on_failure {
            self.raise();
        }
    }
}

/// Regenerate every unit of `project`. Unit failures are collected, not
/// propagated; only failing to enumerate the units is an error. Once
/// `cancel` is raised the remaining units are skipped.
pub fn regenerate_package(
    project: &Project,
    layout: &Layout,
    options: &RenderOptions,
    cancel: &Cancellation,
) -> anyhow::Result<PackageReport> {
    let units = project.units(&layout.dumps_dir, &layout.build_dir, &layout.namespace)?;
    debug!("{}: {} unit(s)", project.name, units.len());

    let mut report = PackageReport::default();
    for (i, unit) in units.iter().enumerate() {
        if cancel.is_raised() {
            report.cancelled = units.len() - i;
            break;
        }
        match regenerate_unit(unit, options, layout.force) {
            Ok(UnitOutcome::Written(path)) => report.written.push(path),
            Ok(UnitOutcome::UpToDate(_)) => report.up_to_date += 1,
            Ok(UnitOutcome::NoDump) => report.without_dump += 1,
            Err(error) => {
                cancel.unit_failed();
                report.failures.push(UnitFailure {
                    package: project.name.clone(),
                    module: unit.module_name.clone(),
                    error,
                });
            }
        }
    }
    info!(
        "{}: {} written, {} up to date, {} failed",
        project.name,
        report.written.len(),
        report.up_to_date,
        report.failures.len()
    );
    Ok(report)
}

pub fn regenerate_unit(unit: &Unit, options: &RenderOptions, force: bool) -> anyhow::Result<UnitOutcome> {
    if !unit.dump_path.is_file() {
        debug!("{}: no IR dump at {}", unit.module_name, unit.dump_path.display());
        return Ok(UnitOutcome::NoDump);
    }
    if !force && is_up_to_date(&unit.dump_path, &unit.out_path) {
        debug!("{}: up to date", unit.module_name);
        return Ok(UnitOutcome::UpToDate(unit.out_path.clone()));
    }

    let module = load_module(&unit.dump_path)?;
    let rendered = render_module(&module, options)?;

    if let Some(dir) = unit.out_path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    fs::write(&unit.out_path, rendered.source)
        .with_context(|| format!("Failed to write {}", unit.out_path.display()))?;
    debug!("{} -> {}", unit.module_name, unit.out_path.display());
    Ok(UnitOutcome::Written(unit.out_path.clone()))
}

pub fn load_module(dump_path: &Path) -> anyhow::Result<Module> {
    let source = fs::read_to_string(dump_path).with_context(|| format!("Failed to read {}", dump_path.display()))?;
    serde_json::from_str(&source).with_context(|| format!("Invalid IR dump {}", dump_path.display()))
}

fn is_up_to_date(dump_path: &Path, out_path: &Path) -> bool {
    let modified = |path: &Path| -> Option<SystemTime> { fs::metadata(path).ok()?.modified().ok() };
    match (modified(dump_path), modified(out_path)) {
        (Some(dump), Some(out)) => out >= dump,
        _ => false,
    }
}

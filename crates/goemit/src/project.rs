//! Bower-style project layout: manifests, dependency discovery and the
//! compilation units of each package.

use anyhow::{bail, Context};
use itertools::Itertools;
use log::debug;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// File name of each unit's IR dump inside `<dumps>/<ModuleName>/`.
pub const IR_DUMP_FILE: &str = "goemit-ir.json";

/// Source file extension of the modules the front-end compiles.
pub const SOURCE_EXTENSION: &str = "purs";

/// The subset of `bower.json` the emitter reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BowerManifest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: BTreeMap<String, String>,
}

impl BowerManifest {
    pub fn from_json_str(source: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(source)?)
    }
}

/// One package: the root project or a dependency under the dependency directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Package name; the dependency directory name until the manifest is loaded
    pub name: String,
    pub src_dir: PathBuf,
    pub manifest_path: PathBuf,
    pub manifest: Option<BowerManifest>,
    pub is_dependency: bool,
}

/// One module of a package, with where its IR comes from and where its Go goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    /// Qualified module name (`Data.Maybe`)
    pub module_name: String,
    pub dump_path: PathBuf,
    pub out_path: PathBuf,
}

impl Project {
    pub fn root(src_dir: impl Into<PathBuf>, manifest_path: impl Into<PathBuf>) -> Self {
        Self {
            name: String::new(),
            src_dir: src_dir.into(),
            manifest_path: manifest_path.into(),
            manifest: None,
            is_dependency: false,
        }
    }

    /// A dependency living in `dir`, if the directory carries a manifest.
    /// `.bower.json` (written by bower on install) wins over `bower.json`.
    pub fn dependency_in(dir: &Path) -> Option<Self> {
        let manifest_path = [".bower.json", "bower.json"]
            .iter()
            .map(|file| dir.join(file))
            .find(|path| path.is_file())?;
        let name = dir.file_name()?.to_string_lossy().into_owned();
        Some(Self {
            name,
            src_dir: dir.join("src"),
            manifest_path,
            manifest: None,
            is_dependency: true,
        })
    }

    pub fn load_manifest(&mut self) -> anyhow::Result<()> {
        let source = std::fs::read_to_string(&self.manifest_path)
            .with_context(|| format!("Failed to read {}", self.manifest_path.display()))?;
        let manifest = BowerManifest::from_json_str(&source)
            .with_context(|| format!("Failed to parse {}", self.manifest_path.display()))?;
        if !manifest.name.is_empty() {
            self.name = manifest.name.clone();
        }
        if self.name.is_empty() {
            bail!("{} does not name the project", self.manifest_path.display());
        }
        self.manifest = Some(manifest);
        Ok(())
    }

    /// Directory of this package below the build root.
    pub fn package_dir(&self, build_dir: &Path, namespace: &str) -> PathBuf {
        build_dir.join(namespace).join(&self.name)
    }

    /// Every module source below `src_dir`, paired with its dump and output
    /// paths, sorted by module name. A package without sources has no units.
    pub fn units(&self, dumps_dir: &Path, build_dir: &Path, namespace: &str) -> anyhow::Result<Vec<Unit>> {
        if !self.src_dir.is_dir() {
            debug!("{}: no source directory at {}", self.name, self.src_dir.display());
            return Ok(vec![]);
        }
        let pattern = self.src_dir.join("**").join(format!("*.{}", SOURCE_EXTENSION));
        let pattern = pattern.to_string_lossy();
        let package_dir = self.package_dir(build_dir, namespace);

        let mut units = vec![];
        for entry in glob::glob(&pattern).with_context(|| format!("Invalid source pattern {}", pattern))? {
            let source = entry?;
            let relative = source.strip_prefix(&self.src_dir).unwrap_or(&source);
            let Some(module_name) = module_name_of(relative) else {
                continue;
            };
            units.push(Unit {
                dump_path: dumps_dir.join(&module_name).join(IR_DUMP_FILE),
                out_path: out_path_of(&package_dir, &module_name),
                module_name,
            });
        }
        units.sort_by(|a, b| a.module_name.cmp(&b.module_name));
        Ok(units)
    }
}

/// `Data/Maybe.purs` → `Data.Maybe`
pub fn module_name_of(relative: &Path) -> Option<String> {
    let name = relative
        .with_extension("")
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .join(".");
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// `Data.Maybe` → `<package_dir>/Data/Maybe/Maybe.go`
pub fn out_path_of(package_dir: &Path, module_name: &str) -> PathBuf {
    let mut dir = package_dir.to_path_buf();
    for segment in module_name.split('.') {
        dir.push(segment);
    }
    let last = module_name.rsplit('.').next().unwrap_or(module_name);
    dir.join(format!("{}.go", last))
}

/// Immediate subdirectories of `deps_dir` that carry a manifest, sorted by name.
pub fn discover_dependencies(deps_dir: &Path) -> anyhow::Result<Vec<Project>> {
    let mut deps = vec![];
    let entries = std::fs::read_dir(deps_dir)
        .with_context(|| format!("Failed to read dependency directory {}", deps_dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        if !path.is_dir() {
            continue;
        }
        match Project::dependency_in(&path) {
            Some(dep) => deps.push(dep),
            None => debug!("skipping {}: no bower manifest", path.display()),
        }
    }
    deps.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(deps)
}

// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Package import descriptors

use serde::{Deserialize, Serialize};

/// Whether an import path is a bare standard-library style name (`fmt`) or a
/// full repository path (`github.com/user/pkg`). Import blocks keep the two
/// forms in separate groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ImportForm {
    ShortName,
    FullPath,
}

/// One package a module may reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PkgImport {
    /// Local alias used to qualify symbols (`maybe` in `maybe.Just`)
    pub go_name: String,
    /// Import path as written in the import block
    pub path: String,
    /// Source module this package was generated from, used to resolve
    /// qualified type names (`Data.Maybe`)
    #[serde(default)]
    pub source_module: Option<String>,
}

impl PkgImport {
    pub fn new(go_name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            go_name: go_name.into(),
            path: path.into(),
            source_module: None,
        }
    }

    pub fn from_source(mut self, source_module: impl Into<String>) -> Self {
        self.source_module = Some(source_module.into());
        self
    }

    pub fn form(&self) -> ImportForm {
        if self.path.contains('/') {
            ImportForm::FullPath
        } else {
            ImportForm::ShortName
        }
    }

    /// Name Go assigns to the package when no alias is written: the last path segment.
    pub fn default_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// Whether the import line must spell out the alias.
    pub fn needs_alias(&self) -> bool {
        !self.go_name.is_empty() && self.go_name != self.default_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_classification() {
        assert_eq!(PkgImport::new("fmt", "fmt").form(), ImportForm::ShortName);
        assert_eq!(PkgImport::new("json", "encoding/json").form(), ImportForm::FullPath);
        assert!(ImportForm::ShortName < ImportForm::FullPath);
    }

    #[test]
    fn test_alias_needed_only_when_it_differs() {
        assert!(!PkgImport::new("json", "encoding/json").needs_alias());
        assert!(PkgImport::new("maybe", "github.com/acme/purs/Data.Maybe").needs_alias());
        assert!(!PkgImport::new("", "strings").needs_alias());
    }
}

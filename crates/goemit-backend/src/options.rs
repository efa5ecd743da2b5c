// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Options controlling how modules are rendered. Most of these come from the
/// command line; the rest can be supplied through a toml file.
///
/// NOTE: any fields carrying structured data must appear at the end for making
/// toml printing work.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    /// Emit comments carried by the IR.
    pub include_comments: bool,
    /// Comment placed above the package clause, one `//` line per text line.
    pub header: Option<String>,
    /// Whether the target Go version accepts embedded interfaces with
    /// overlapping method sets. When false, embeds are left out and the
    /// front-end is expected to have flattened their methods.
    pub overlapping_interfaces: bool,
    /// Fail the unit instead of emitting placeholder text.
    pub strict: bool,

    /// BEGIN OF STRUCTURED OPTIONS. DO NOT ADD VALUE FIELDS AFTER THIS
    /// Symbol standing in for empty interfaces flagged as type variables.
    pub type_var: TypeVarMarker,
}

/// Package-qualified symbol rendered for generic type variables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypeVarMarker {
    pub package_alias: String,
    pub package_path: String,
    pub symbol: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_comments: true,
            header: None,
            overlapping_interfaces: false,
            strict: false,
            type_var: TypeVarMarker::default(),
        }
    }
}

impl Default for TypeVarMarker {
    fn default() -> Self {
        Self::for_namespace("github.com/goemit")
    }
}

impl TypeVarMarker {
    /// Marker living in the `-` package below the generated namespace.
    pub fn for_namespace(namespace: &str) -> Self {
        Self {
            package_alias: "𝒈".to_string(),
            package_path: format!("{}/-", namespace.trim_end_matches('/')),
            symbol: "𝑻".to_string(),
        }
    }
}

impl RenderOptions {
    pub fn from_toml_str(source: &str) -> anyhow::Result<Self> {
        toml::from_str(source).context("invalid render options")
    }

    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let options = RenderOptions::from_toml_str(
            r#"
            strict = true

            [type_var]
            package_path = "example.org/rt/-"
            "#,
        )
        .unwrap();
        assert!(options.strict);
        assert!(options.include_comments);
        assert_eq!(options.type_var.package_path, "example.org/rt/-");
        assert_eq!(options.type_var.symbol, "𝑻");
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(RenderOptions::from_toml_str("colour = true").is_err());
    }

    #[test]
    fn test_marker_namespace() {
        assert_eq!(TypeVarMarker::for_namespace("github.com/acme/").package_path, "github.com/acme/-");
    }
}

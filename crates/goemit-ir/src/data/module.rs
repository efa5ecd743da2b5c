// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Compilation units

use super::imports::PkgImport;
use super::nodes::{ConstDecl, LetBinding};
use super::types::NamedTypeRef;
use serde::{Deserialize, Serialize};

/// A top-level declaration of a module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Decl {
    /// `type Name <ty>`; struct methods travel inside the struct type
    Type(NamedTypeRef),
    Const(ConstDecl),
    Var(LetBinding),
    /// Standalone function; the type must be a `TypeRef::Func` with a body
    Func(NamedTypeRef),
}

/// One source file's worth of IR together with the packages it may import.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Module {
    /// Go package name
    pub name: String,
    /// Qualified name of the source module (`Data.Maybe`)
    pub source_name: String,
    pub imports: Vec<PkgImport>,
    pub decls: Vec<Decl>,
}

impl Module {
    pub fn new(name: impl Into<String>, source_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source_name: source_name.into(),
            ..Default::default()
        }
    }

    pub fn import_by_alias(&self, go_name: &str) -> Option<&PkgImport> {
        self.imports.iter().find(|imp| imp.go_name == go_name)
    }

    pub fn import_by_source(&self, source_module: &str) -> Option<&PkgImport> {
        self.imports
            .iter()
            .find(|imp| imp.source_module.as_deref() == Some(source_module))
    }

    pub fn type_defs(&self) -> impl Iterator<Item = &NamedTypeRef> {
        self.decls.iter().filter_map(|decl| match decl {
            Decl::Type(named) => Some(named),
            _ => None,
        })
    }

    pub fn funcs(&self) -> impl Iterator<Item = &NamedTypeRef> {
        self.decls.iter().filter_map(|decl| match decl {
            Decl::Func(named) => Some(named),
            _ => None,
        })
    }

    /// Constants and variables in declaration order.
    pub fn value_decls(&self) -> impl Iterator<Item = &Decl> {
        self.decls
            .iter()
            .filter(|decl| matches!(decl, Decl::Const(_) | Decl::Var(_)))
    }
}

// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Non-fatal findings recorded while rendering.
//!
//! Each diagnostic corresponds to placeholder text in the output, so a unit
//! with any diagnostics is not expected to compile.

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// An `Unsupported` node reached the renderer
    UnsupportedNode,
    /// A `TypeRef::Unresolved` reached the renderer
    UnresolvedType,
    /// A qualified name whose package is not in the module's import table
    UnknownPackage,
    /// A type test that the front-end did not lower
    UnloweredTypeTest,
    /// A node whose attached type does not fit the node
    MalformedNode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl Display for DiagnosticKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DiagnosticKind::UnsupportedNode => write!(f, "unsupported node"),
            DiagnosticKind::UnresolvedType => write!(f, "unresolved type"),
            DiagnosticKind::UnknownPackage => write!(f, "unknown package"),
            DiagnosticKind::UnloweredTypeTest => write!(f, "unlowered type test"),
            DiagnosticKind::MalformedNode => write!(f, "malformed node"),
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

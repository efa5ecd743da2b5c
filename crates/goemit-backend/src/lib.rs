// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Go backend for the goemit IR.
//!
//! Renders a resolved [`goemit_ir::Module`] to gofmt-style Go source in a single
//! pass. Import usage is collected while the body renders, so the import block
//! only ever lists packages the body actually references.

pub mod diagnostics;
mod escape;
pub mod generator;
pub mod options;
pub mod renderer;
pub mod resolver;

pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use generator::{render_module, render_module_with, render_node, RenderedUnit};
pub use options::{RenderOptions, TypeVarMarker};
pub use renderer::{Indent, Parent};
pub use resolver::{ImportTableResolver, PkgSymbol, TypeResolver};

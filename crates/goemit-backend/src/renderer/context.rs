// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Rendering context - shared state during IR rendering

use super::go_writer::{GoWriter, Indent};
use super::imports::ImportUsage;
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::options::RenderOptions;
use crate::resolver::{PkgSymbol, TypeResolver};
use goemit_ir::{Module, PkgImport};
use log::debug;

/// Rendering context - holds everything needed during rendering of one module
pub struct RenderCtx<'a> {
    pub module: &'a Module,
    pub options: &'a RenderOptions,
    resolver: &'a dyn TypeResolver,
    pub writer: GoWriter,
    usage: ImportUsage,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> RenderCtx<'a> {
    pub fn new(module: &'a Module, resolver: &'a dyn TypeResolver, options: &'a RenderOptions) -> Self {
        Self {
            module,
            options,
            resolver,
            writer: GoWriter::new(),
            usage: ImportUsage::default(),
            diagnostics: Vec::new(),
        }
    }

    /// Write a string to the writer
    pub fn write(&mut self, s: &str) {
        self.writer.write(s);
    }

    /// Write a line to the writer
    pub fn line(&mut self, s: &str) {
        self.writer.line(s);
    }

    pub fn newline(&mut self) {
        self.writer.newline();
    }

    pub fn space(&mut self) {
        self.writer.space();
    }

    pub fn tabs(&mut self, indent: Indent) {
        self.writer.tabs(indent);
    }

    /// Newline that only statement context gets.
    pub fn end_stmt(&mut self, indent: Indent) {
        if indent.is_stmt() {
            self.newline();
        }
    }

    /// Write items with a separator, using a fallible render function
    pub fn sep_with<I, T, F>(&mut self, separator: &str, items: I, mut render: F) -> anyhow::Result<()>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&mut Self, T) -> anyhow::Result<()>,
    {
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                self.write(separator);
            }
            render(self, item)?;
        }
        Ok(())
    }

    pub fn resolve(&self, qname: &str) -> Option<PkgSymbol> {
        self.resolver.resolve(self.module, qname)
    }

    /// Fetch the import registered under `go_name`, registering a bare
    /// `go_name` path when the module does not know it, and mark it used.
    pub fn ensure_import(&mut self, go_name: &str) {
        let import = match self.module.import_by_alias(go_name) {
            Some(import) => import.clone(),
            None => {
                debug!("registering import `{}` not declared by module `{}`", go_name, self.module.source_name);
                PkgImport::new(go_name, go_name)
            }
        };
        self.usage.mark(import);
    }

    pub fn mark_import(&mut self, import: PkgImport) {
        self.usage.mark(import);
    }

    pub fn diagnose(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::new(kind, message));
    }

    /// Take the rendered text, leaving the writer empty.
    pub fn take_output(&mut self) -> String {
        self.writer.take()
    }

    /// Consume the context, returning the usage set and diagnostics.
    pub fn finish(self) -> (ImportUsage, Vec<Diagnostic>) {
        (self.usage, self.diagnostics)
    }
}

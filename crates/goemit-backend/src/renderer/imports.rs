// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Import usage tracking and the import block.

use super::go_writer::GoWriter;
use crate::escape::quote_string;
use goemit_ir::PkgImport;
use itertools::Itertools;
use std::collections::BTreeMap;

/// Imports referenced during one rendering pass, keyed by import path.
///
/// Marking is idempotent: the first descriptor recorded for a path wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportUsage {
    used: BTreeMap<String, PkgImport>,
}

impl ImportUsage {
    pub fn mark(&mut self, import: PkgImport) {
        self.used.entry(import.path.clone()).or_insert(import);
    }

    pub fn is_used(&self, path: &str) -> bool {
        self.used.contains_key(path)
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    pub fn len(&self) -> usize {
        self.used.len()
    }

    /// Used imports in output order: short names first, then full paths,
    /// each sorted by path.
    pub fn sorted(&self) -> impl Iterator<Item = &PkgImport> {
        self.used
            .values()
            .sorted_by(|a, b| a.form().cmp(&b.form()).then_with(|| a.path.cmp(&b.path)))
    }

    pub fn into_imports(self) -> Vec<PkgImport> {
        let mut imports: Vec<PkgImport> = self.used.into_values().collect();
        imports.sort_by(|a, b| a.form().cmp(&b.form()).then_with(|| a.path.cmp(&b.path)));
        imports
    }
}

/// Write the `import (...)` block followed by a blank line. Nothing is
/// written when no import was used.
pub fn render_import_block(usage: &ImportUsage, w: &mut GoWriter) {
    if usage.is_empty() {
        return;
    }
    w.line("import (");
    let mut form = None;
    for import in usage.sorted() {
        if form.is_some_and(|prev| prev != import.form()) {
            w.newline();
        }
        form = Some(import.form());

        w.write("\t");
        if import.needs_alias() {
            w.write(&import.go_name);
            w.space();
        }
        w.line(&quote_string(&import.path));
    }
    w.line(")");
    w.newline();
}

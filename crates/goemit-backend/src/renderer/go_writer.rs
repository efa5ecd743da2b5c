// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! String writer for generating Go code with explicit tab indentation.

/// Indentation for a render call.
///
/// `Expr` renders inline: no leading tabs and no trailing newline.
/// `Level(n)` renders in statement position, `n` tabs deep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    Expr,
    Level(usize),
}

impl Indent {
    pub const EXPR: Indent = Indent::Expr;
    pub const TOP: Indent = Indent::Level(0);

    pub fn level(n: usize) -> Self {
        Indent::Level(n)
    }

    pub fn is_stmt(self) -> bool {
        matches!(self, Indent::Level(_))
    }

    pub fn tab_count(self) -> usize {
        match self {
            Indent::Expr => 0,
            Indent::Level(n) => n,
        }
    }

    /// Statement level one tab deeper than this one.
    pub fn deeper(self) -> Indent {
        Indent::Level(self.tab_count() + 1)
    }
}

/// Accumulates generated Go text.
#[derive(Debug, Default)]
pub struct GoWriter {
    out: String,
}

impl GoWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(&mut self, s: &str) {
        self.out.push_str(s);
    }

    /// Write a complete line (adds newline at end).
    pub fn line(&mut self, s: &str) {
        self.write(s);
        self.newline();
    }

    pub fn newline(&mut self) {
        self.out.push('\n');
    }

    pub fn space(&mut self) {
        self.out.push(' ');
    }

    /// Write the leading tabs for `indent`.
    pub fn tabs(&mut self, indent: Indent) {
        for _ in 0..indent.tab_count() {
            self.out.push('\t');
        }
    }

    /// Convenience method to avoid `w.write(&format!(...))`.
    pub fn write_fmt(&mut self, args: std::fmt::Arguments<'_>) {
        self.write(&args.to_string());
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Take everything written so far, leaving the writer empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.out)
    }

    pub fn into_inner(self) -> String {
        self.out
    }
}

// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Grouping of top-level constants and variables.
//!
//! A run of adjacent constants (or adjacent variables) shares one `const (`
//! or `var (` block. A run of one keeps the plain declaration form.

use super::comments::{has_visible_comments, render_comments};
use super::context::RenderCtx;
use super::go_writer::Indent;
use super::precedence::Parent;
use super::render::{render, render_const, render_let};
use super::type_renderer::render_type;
use goemit_ir::{Decl, IRNode, NamedTypeRef, TypeRef};
use itertools::Itertools;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GroupKind {
    Const,
    Var,
}

impl GroupKind {
    fn of(decl: &Decl) -> Option<Self> {
        match decl {
            Decl::Const(_) => Some(GroupKind::Const),
            Decl::Var(_) => Some(GroupKind::Var),
            Decl::Type(_) | Decl::Func(_) => None,
        }
    }

    fn keyword(self) -> &'static str {
        match self {
            GroupKind::Const => "const",
            GroupKind::Var => "var",
        }
    }
}

/// Render every constant and variable of the module, grouped by runs.
pub fn render_value_decls<'d>(decls: impl Iterator<Item = &'d Decl>, ctx: &mut RenderCtx) -> anyhow::Result<()> {
    let runs = decls.filter_map(|decl| GroupKind::of(decl).map(|kind| (kind, decl))).chunk_by(|(kind, _)| *kind);
    for (kind, run) in &runs {
        let run: Vec<&Decl> = run.map(|(_, decl)| decl).collect();
        render_run(kind, &run, ctx)?;
    }
    Ok(())
}

fn render_run(kind: GroupKind, run: &[&Decl], ctx: &mut RenderCtx) -> anyhow::Result<()> {
    if let [single] = run {
        match single {
            Decl::Const(c) => render_const(c, Indent::TOP, ctx)?,
            Decl::Var(v) => render_let(v, Indent::TOP, true, ctx)?,
            Decl::Type(_) | Decl::Func(_) => {}
        }
        ctx.newline();
        return Ok(());
    }

    ctx.write(kind.keyword());
    ctx.line(" (");
    for (i, decl) in run.iter().enumerate() {
        match decl {
            Decl::Const(c) => render_entry(&c.decl, Some(&*c.value), None, i, ctx)?,
            Decl::Var(v) => {
                let lhs = v.type_conv.as_ref().filter(|_| matches!(v.value.as_deref(), Some(IRNode::ToType { .. })));
                let lhs = lhs.map(|conv| {
                    let name = if conv.value_used { v.decl.name.as_str() } else { "_" };
                    format!("{}, {}", name, conv.ok_name)
                });
                render_entry(&v.decl, v.value.as_deref(), lhs, i, ctx)?
            }
            Decl::Type(_) | Decl::Func(_) => {}
        }
    }
    ctx.line(")");
    ctx.newline();
    Ok(())
}

/// One `Name Type = value` line inside a group. An explicit `lhs` replaces the
/// name and type, as for `v, ok = x.(T)`.
fn render_entry(
    decl: &NamedTypeRef,
    value: Option<&IRNode>,
    lhs: Option<String>,
    position: usize,
    ctx: &mut RenderCtx,
) -> anyhow::Result<()> {
    let indent = Indent::level(1);
    if position > 0 && has_visible_comments(&decl.comments, ctx) {
        ctx.newline();
    }
    render_comments(&decl.comments, indent, ctx);
    ctx.tabs(indent);
    match lhs {
        Some(lhs) => ctx.write(&lhs),
        None => {
            ctx.write(&decl.name);
            if decl.ty != TypeRef::Empty || value.is_none() {
                ctx.write(" ");
                render_type(&decl.ty, indent, ctx)?;
            }
        }
    }
    if let Some(value) = value {
        ctx.write(" = ");
        render(value, indent, Parent::None, ctx)?;
    }
    ctx.newline();
    Ok(())
}

// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Module assembly.
//!
//! The body is rendered first so that import usage is complete before the
//! import block is written. Final order: header, package clause, imports,
//! type definitions, constants and variables, struct method sets, functions.

use super::comments::render_comments;
use super::context::RenderCtx;
use super::decl_groups::render_value_decls;
use super::go_writer::{GoWriter, Indent};
use super::imports::{render_import_block, ImportUsage};
use super::render::render_body;
use super::type_renderer::{render_func_args, render_named_type, render_type_ref};
use crate::options::RenderOptions;
use anyhow::bail;
use goemit_ir::{Module, NamedTypeRef, StructType};

/// Render everything below the import block into the context's writer.
pub fn render_module_body(ctx: &mut RenderCtx) -> anyhow::Result<()> {
    let module = ctx.module;

    for def in module.type_defs() {
        render_type_def(def, ctx)?;
    }

    render_value_decls(module.value_decls(), ctx)?;

    for def in module.type_defs() {
        if let Some(strukt) = def.ty.as_struct() {
            render_method_set(def, strukt, ctx)?;
        }
    }

    for func in module.funcs() {
        render_func_decl(func, ctx)?;
    }
    Ok(())
}

/// Prefix the rendered body with header, package clause and import block.
pub fn assemble(module: &Module, options: &RenderOptions, usage: &ImportUsage, body: &str) -> String {
    let mut w = GoWriter::new();
    if let Some(header) = &options.header {
        for line in header.lines() {
            w.write("//");
            if !line.is_empty() {
                w.space();
                w.write(line);
            }
            w.newline();
        }
        w.newline();
    }
    w.line(&format!("package {}", module.name));
    w.newline();
    render_import_block(usage, &mut w);
    w.write(body);

    let mut source = w.into_inner();
    source.truncate(source.trim_end().len());
    source.push('\n');
    source
}

/// `type Name <type>` followed by a blank line.
fn render_type_def(def: &NamedTypeRef, ctx: &mut RenderCtx) -> anyhow::Result<()> {
    render_comments(&def.comments, Indent::TOP, ctx);
    ctx.write("type ");
    ctx.write(&def.name);
    ctx.write(" ");
    render_named_type(def, Indent::TOP, ctx)?;
    ctx.newline();
    ctx.newline();
    Ok(())
}

/// `func (_ T) Method(..) .. { .. }` for every method, then a blank line.
fn render_method_set(def: &NamedTypeRef, strukt: &StructType, ctx: &mut RenderCtx) -> anyhow::Result<()> {
    if strukt.methods.is_empty() {
        return Ok(());
    }
    let receiver = if strukt.pass_by_ptr {
        format!("*{}", def.name)
    } else {
        def.name.clone()
    };

    for method in &strukt.methods {
        let Some((func, body)) = method.ty.as_func().and_then(|func| func.body.as_deref().map(|body| (func, body)))
        else {
            bail!(
                "method `{}` of `{}` has no implementation",
                method.source_name,
                def.source_name
            );
        };
        render_comments(&method.comments, Indent::TOP, ctx);
        ctx.write(&format!("func (_ {}) {}", receiver, method.name));
        render_func_args(&func.args, Indent::TOP, false, true, ctx)?;
        ctx.write(" ");
        render_func_args(&func.rets, Indent::TOP, true, true, ctx)?;
        ctx.write(" ");
        render_body(body, Indent::TOP, ctx)?;
        ctx.newline();
    }
    ctx.newline();
    Ok(())
}

/// `func Name(..) .. { .. }` followed by a blank line.
fn render_func_decl(func: &NamedTypeRef, ctx: &mut RenderCtx) -> anyhow::Result<()> {
    let Some(body) = func.ty.as_func().and_then(|f| f.body.as_deref()) else {
        bail!("function `{}` has no implementation", func.source_name);
    };
    render_comments(&func.comments, Indent::TOP, ctx);
    render_type_ref(func, Indent::TOP, ctx)?;
    ctx.write(" ");
    render_body(body, Indent::TOP, ctx)?;
    ctx.newline();
    ctx.newline();
    Ok(())
}

// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Renders TypeRef to Go syntax.
//!
//! `indent` is the indentation of the line the type starts on; struct and
//! interface bodies go one level deeper and close at `indent`.

use super::comments::render_comments;
use super::context::RenderCtx;
use super::go_writer::Indent;
use super::render::render_pkg_symbol;
use crate::diagnostics::DiagnosticKind;
use crate::escape::pad_right;
use anyhow::bail;
use goemit_ir::{FuncType, InterfaceType, NamedTypeRef, PkgImport, StructType, TypeRef};

/// Render a type to Go syntax.
pub fn render_type(ty: &TypeRef, indent: Indent, ctx: &mut RenderCtx) -> anyhow::Result<()> {
    match ty {
        TypeRef::Empty => ctx.write("interface{/*EMPTY*/}"),

        TypeRef::Alias(qname) => render_alias(qname, ctx),

        TypeRef::Unresolved(id) => {
            ctx.diagnose(DiagnosticKind::UnresolvedType, format!("type #{}", id));
            ctx.write(&format!("interface{{/*UNKNOWN:{}*/}}", id));
        }

        TypeRef::Array(elem) => {
            ctx.write("[]");
            render_type(elem, indent, ctx)?;
        }

        TypeRef::Pointer(referent) => {
            ctx.write("*");
            render_type(referent, indent, ctx)?;
        }

        TypeRef::Interface(iface) => render_interface(iface, "", indent, ctx)?,

        TypeRef::Struct(strukt) => render_struct(strukt, indent, ctx)?,

        TypeRef::Func(func) => render_func_type(None, func, indent, ctx)?,
    }
    Ok(())
}

/// Render a named reference. Function references with a body also print
/// their name (`func Name(..)`); every other shape renders as its type.
pub fn render_type_ref(named: &NamedTypeRef, indent: Indent, ctx: &mut RenderCtx) -> anyhow::Result<()> {
    match &named.ty {
        TypeRef::Func(func) => render_func_type(Some(named.name.as_str()), func, indent, ctx),
        TypeRef::Interface(iface) => render_interface(iface, &named.source_name, indent, ctx),
        other => render_type(other, indent, ctx),
    }
}

fn render_alias(qname: &str, ctx: &mut RenderCtx) {
    match ctx.resolve(qname) {
        Some(sym) => render_pkg_symbol(sym.pkg.as_deref(), &sym.symbol, ctx),
        None => {
            ctx.diagnose(DiagnosticKind::UnknownPackage, format!("cannot resolve type `{}`", qname));
            ctx.write(&format!("interface{{/*UNKNOWN:{}*/}}", qname));
        }
    }
}

fn render_func_type(
    name: Option<&str>,
    func: &FuncType,
    indent: Indent,
    ctx: &mut RenderCtx,
) -> anyhow::Result<()> {
    let with_body = func.body.is_some();
    ctx.write("func");
    if let Some(name) = name.filter(|name| with_body && !name.is_empty()) {
        ctx.write(" ");
        ctx.write(name);
    }
    render_func_args(&func.args, indent, false, with_body, ctx)?;
    ctx.write(" ");
    render_func_args(&func.rets, indent, true, with_body, ctx)
}

/// Render an argument or return list.
///
/// Argument lists are always parenthesized. A return list drops its
/// parentheses only when it is exactly one unnamed value.
pub fn render_func_args(
    list: &[NamedTypeRef],
    indent: Indent,
    is_ret: bool,
    with_names: bool,
    ctx: &mut RenderCtx,
) -> anyhow::Result<()> {
    let parens = !is_ret || list.len() != 1 || (with_names && !list[0].name.is_empty());
    if parens {
        ctx.write("(");
    }
    ctx.sep_with(", ", list, |ctx, arg| {
        if with_names && !arg.name.is_empty() {
            ctx.write(&arg.name);
            ctx.write(" ");
        }
        render_named_type(arg, indent, ctx)
    })?;
    if parens {
        ctx.write(")");
    }
    Ok(())
}

/// Render the type of a named reference without its name. Argument, field
/// and type definition positions never print a function name.
pub fn render_named_type(named: &NamedTypeRef, indent: Indent, ctx: &mut RenderCtx) -> anyhow::Result<()> {
    match &named.ty {
        TypeRef::Interface(iface) => render_interface(iface, &named.source_name, indent, ctx),
        other => render_type(other, indent, ctx),
    }
}

fn render_interface(
    iface: &InterfaceType,
    owner: &str,
    indent: Indent,
    ctx: &mut RenderCtx,
) -> anyhow::Result<()> {
    let options = ctx.options;
    let embeds: &[String] = if options.overlapping_interfaces { &iface.embeds } else { &[] };

    if embeds.is_empty() && iface.methods.is_empty() {
        if iface.is_type_var {
            let marker = &options.type_var;
            ctx.mark_import(PkgImport::new(marker.package_alias.clone(), marker.package_path.clone()));
            ctx.write(&format!("{}.{}", marker.package_alias, marker.symbol));
        } else {
            ctx.write("interface{}");
        }
        return Ok(());
    }

    let inner = indent.deeper();
    ctx.write("interface {");
    ctx.newline();
    for embed in embeds {
        ctx.tabs(inner);
        render_alias(embed, ctx);
        ctx.newline();
    }
    for method in &iface.methods {
        let Some(func) = method.ty.as_func() else {
            bail!(
                "interface method `{}` of `{}` is not a function signature",
                method.source_name,
                owner
            );
        };
        render_comments(&method.comments, inner, ctx);
        ctx.tabs(inner);
        ctx.write(&method.name);
        render_func_args(&func.args, inner, false, false, ctx)?;
        ctx.write(" ");
        render_func_args(&func.rets, inner, true, false, ctx)?;
        ctx.newline();
    }
    ctx.tabs(indent);
    ctx.write("}");
    Ok(())
}

fn render_struct(strukt: &StructType, indent: Indent, ctx: &mut RenderCtx) -> anyhow::Result<()> {
    if strukt.embeds.is_empty() && strukt.fields.is_empty() {
        ctx.write("struct{}");
        return Ok(());
    }

    let inner = indent.deeper();
    ctx.write("struct {");
    ctx.newline();
    for embed in &strukt.embeds {
        ctx.tabs(inner);
        ctx.line(embed);
    }

    let width = strukt
        .fields
        .iter()
        .map(|field| field.name.chars().count())
        .max()
        .unwrap_or(0);
    for field in &strukt.fields {
        render_comments(&field.comments, inner, ctx);
        ctx.tabs(inner);
        ctx.write(&pad_right(&field.name, width));
        ctx.write(" ");
        render_named_type(field, inner, ctx)?;
        ctx.newline();
    }
    ctx.tabs(indent);
    ctx.write("}");
    Ok(())
}

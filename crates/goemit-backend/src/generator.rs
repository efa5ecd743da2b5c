// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Entry points: render a whole module or a single node.

use crate::diagnostics::Diagnostic;
use crate::options::RenderOptions;
use crate::renderer::context::RenderCtx;
use crate::renderer::module_renderer::{assemble, render_module_body};
use crate::renderer::render::render;
use crate::renderer::{Indent, Parent};
use crate::resolver::{ImportTableResolver, TypeResolver};
use anyhow::{anyhow, Context};
use goemit_ir::{IRNode, Module, PkgImport};
use itertools::Itertools;
use log::{debug, info, warn};

/// Output of one rendering pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedUnit {
    /// Go source text, ending in exactly one newline
    pub source: String,
    /// Imports the source references, in import-block order
    pub imports: Vec<PkgImport>,
    /// Placeholders emitted into `source`
    pub diagnostics: Vec<Diagnostic>,
}

impl RenderedUnit {
    /// A unit is only expected to compile when no placeholder was emitted.
    pub fn is_compilable(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Render a module, resolving type names through its own import table.
pub fn render_module(module: &Module, options: &RenderOptions) -> anyhow::Result<RenderedUnit> {
    render_module_with(module, &ImportTableResolver, options)
}

pub fn render_module_with(
    module: &Module,
    resolver: &dyn TypeResolver,
    options: &RenderOptions,
) -> anyhow::Result<RenderedUnit> {
    debug!("rendering module {} ({} declarations)", module.source_name, module.decls.len());

    let mut ctx = RenderCtx::new(module, resolver, options);
    render_module_body(&mut ctx).with_context(|| format!("Failed to render module {}", module.source_name))?;
    let body = ctx.take_output();
    let (usage, diagnostics) = ctx.finish();

    let unit = RenderedUnit {
        source: assemble(module, options, &usage, &body),
        imports: usage.into_imports(),
        diagnostics,
    };
    check_diagnostics(&module.source_name, &unit, options)?;

    info!("rendered module {} ({} imports)", module.source_name, unit.imports.len());
    Ok(unit)
}

/// Render one node in the context of `module`, without package clause or
/// import block.
pub fn render_node(
    node: &IRNode,
    module: &Module,
    options: &RenderOptions,
    indent: Indent,
) -> anyhow::Result<RenderedUnit> {
    let mut ctx = RenderCtx::new(module, &ImportTableResolver, options);
    render(node, indent, Parent::None, &mut ctx)?;
    let source = ctx.take_output();
    let (usage, diagnostics) = ctx.finish();
    Ok(RenderedUnit {
        source,
        imports: usage.into_imports(),
        diagnostics,
    })
}

fn check_diagnostics(name: &str, unit: &RenderedUnit, options: &RenderOptions) -> anyhow::Result<()> {
    if unit.diagnostics.is_empty() {
        return Ok(());
    }
    for diagnostic in &unit.diagnostics {
        warn!("{}: {}", name, diagnostic);
    }
    if options.strict {
        return Err(anyhow!(
            "module {} contains {} placeholder(s):\n  {}",
            name,
            unit.diagnostics.len(),
            unit.diagnostics.iter().join("\n  ")
        ));
    }
    Ok(())
}

// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Go renderer - walks the IR once and writes gofmt-style text.
//!
//! Every render function takes the node, the current [`Indent`], and (for
//! expressions) the [`Parent`] it sits under. Import usage and diagnostics are
//! accumulated in the [`RenderCtx`](context::RenderCtx) as the walk proceeds.

mod comments;
pub(crate) mod context;
mod decl_groups;
mod go_writer;
pub(crate) mod imports;
pub(crate) mod module_renderer;
mod precedence;
pub(crate) mod render;
mod type_renderer;

pub use go_writer::{GoWriter, Indent};
pub use imports::ImportUsage;
pub use precedence::{needs_parens, Parent};

// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

use super::context::RenderCtx;
use super::go_writer::Indent;
use goemit_ir::Comment;

/// Render comments. Line comments always take their own line; block comments
/// stay inline in expression context and get their own line otherwise.
pub fn render_comments(comments: &[Comment], indent: Indent, ctx: &mut RenderCtx) {
    if !ctx.options.include_comments {
        return;
    }
    for comment in comments {
        match comment {
            Comment::Line(text) => {
                ctx.tabs(indent);
                ctx.write("//");
                ctx.write(text);
                ctx.newline();
            }
            Comment::Block(text) => {
                ctx.tabs(indent);
                ctx.write("/*");
                ctx.write(text);
                ctx.write("*/");
                ctx.end_stmt(indent);
            }
        }
    }
}

/// Whether `comments` would produce any output.
pub fn has_visible_comments(comments: &[Comment], ctx: &RenderCtx) -> bool {
    ctx.options.include_comments && !comments.is_empty()
}

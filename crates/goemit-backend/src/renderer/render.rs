// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Unified IR renderer - renders IR nodes to Go syntax
//!
//! Statement nodes write their own leading tabs and, in statement context, a
//! trailing newline. Expression nodes never do; they receive the indent of the
//! line they sit on so nested blocks close at the right column.

use super::comments::render_comments;
use super::context::RenderCtx;
use super::go_writer::Indent;
use super::precedence::{needs_parens, Parent};
use super::type_renderer::{render_type, render_type_ref};
use crate::diagnostics::DiagnosticKind;
use crate::escape;
use goemit_ir::{ConstDecl, ForLoop, IRNode, LetBinding, NamedTypeRef, TypeRef};

/// Render an IR node, parenthesizing it when its parent requires.
pub fn render(node: &IRNode, indent: Indent, parent: Parent, ctx: &mut RenderCtx) -> anyhow::Result<()> {
    if needs_parens(node, parent) {
        ctx.write("(");
        render_node(node, indent, ctx)?;
        ctx.write(")");
        Ok(())
    } else {
        render_node(node, indent, ctx)
    }
}

fn render_node(node: &IRNode, indent: Indent, ctx: &mut RenderCtx) -> anyhow::Result<()> {
    match node {
        // Literals
        IRNode::LitStr(s) => ctx.write(&escape::quote_string(s)),
        IRNode::LitBool(b) => ctx.write(if *b { "true" } else { "false" }),
        IRNode::LitInt(i) => ctx.write(&i.to_string()),
        IRNode::LitNum(n) => render_float(*n, ctx),

        IRNode::LitArr { ty, elems } => {
            render_type(&ty.ty, indent, ctx)?;
            ctx.write("{");
            ctx.sep_with(", ", elems, |ctx, elem| render(elem, indent, Parent::None, ctx))?;
            ctx.write("}");
        }

        IRNode::LitObj { ty, fields } => {
            render_type(&ty.ty, indent, ctx)?;
            ctx.write("{");
            ctx.sep_with(", ", fields, |ctx, field| {
                if let Some(name) = &field.name {
                    ctx.write(name);
                    ctx.write(": ");
                }
                render(&field.value, indent, Parent::None, ctx)
            })?;
            ctx.write("}");
        }

        // Declarations
        IRNode::Const(c) => render_const(c, indent, ctx)?,
        IRNode::Let(binding) => render_let(binding, indent, false, ctx)?,

        // Statements
        IRNode::Block(stmts) => render_block(stmts, indent, ctx)?,

        IRNode::If {
            cond,
            then_block,
            else_block,
        } => {
            ctx.tabs(indent);
            render_if_chain(cond, then_block, else_block.as_deref(), indent, ctx)?;
            ctx.end_stmt(indent);
        }

        IRNode::For(for_loop) => {
            ctx.tabs(indent);
            render_for(for_loop, indent, ctx)?;
            ctx.end_stmt(indent);
        }

        IRNode::Set { left, right } => {
            ctx.tabs(indent);
            render(left, indent, Parent::None, ctx)?;
            ctx.write(" = ");
            render(right, indent, Parent::None, ctx)?;
            ctx.end_stmt(indent);
        }

        IRNode::Return(value) => {
            ctx.tabs(indent);
            ctx.write("return");
            if let Some(value) = value {
                ctx.write(" ");
                render(value, indent, Parent::None, ctx)?;
            }
            ctx.end_stmt(indent);
        }

        IRNode::Panic(arg) => {
            ctx.tabs(indent);
            ctx.write("panic(");
            render(arg, indent, Parent::None, ctx)?;
            ctx.write(")");
            ctx.end_stmt(indent);
        }

        IRNode::Comments(comments) => render_comments(comments, indent, ctx),

        // Expressions
        IRNode::Sym(name) => ctx.write(name),
        IRNode::PkgSym { pkg, symbol } => render_pkg_symbol(pkg.as_deref(), symbol, ctx),
        IRNode::Nil => ctx.write("nil"),

        IRNode::Call { callee, args } => {
            render(callee, indent, Parent::Callee, ctx)?;
            ctx.write("(");
            ctx.sep_with(", ", args, |ctx, arg| render(arg, indent, Parent::None, ctx))?;
            ctx.write(")");
        }

        IRNode::Func(named) => render_func_literal(named, indent, ctx)?,

        IRNode::Dot { left, right } => {
            render(left, indent, Parent::None, ctx)?;
            ctx.write(".");
            render(right, indent, Parent::None, ctx)?;
        }

        IRNode::Index { left, right } => {
            render(left, indent, Parent::None, ctx)?;
            ctx.write("[");
            render(right, indent, Parent::None, ctx)?;
            ctx.write("]");
        }

        IRNode::ToType { expr, target } => {
            render(expr, indent, Parent::None, ctx)?;
            ctx.write(".(");
            render_type(target, indent, ctx)?;
            ctx.write(")");
        }

        IRNode::IsType { value, type_name } => {
            ctx.diagnose(
                DiagnosticKind::UnloweredTypeTest,
                format!("type test of `{}` against `{}`", value, type_name),
            );
            ctx.write(&format!("ː{}ᐧ{}", value, type_name));
        }

        IRNode::Op1 { op, operand } => {
            ctx.write(op.symbol());
            render(operand, indent, Parent::Op1(*op), ctx)?;
        }

        IRNode::Op2 { op, left, right } => {
            render(left, indent, Parent::Op2(*op), ctx)?;
            ctx.write(&format!(" {} ", op.symbol()));
            render(right, indent, Parent::Op2(*op), ctx)?;
        }

        IRNode::Unsupported { kind, detail } => {
            ctx.diagnose(DiagnosticKind::UnsupportedNode, format!("{}: {}", kind, detail));
            ctx.write(&placeholder(kind, detail));
        }
    }
    Ok(())
}

/// Inert comment standing in for a node that could not be rendered.
fn placeholder(kind: &str, detail: &str) -> String {
    format!("/*****{}: {}*****/", kind, detail.replace("*/", "* /"))
}

fn render_float(value: f64, ctx: &mut RenderCtx) {
    if let Some(literal) = escape::format_float(value) {
        ctx.write(&literal);
        return;
    }
    ctx.ensure_import("math");
    if value.is_nan() {
        ctx.write("math.NaN()");
    } else if value.is_sign_positive() {
        ctx.write("math.Inf(1)");
    } else {
        ctx.write("math.Inf(-1)");
    }
}

/// Write a possibly package-qualified symbol, marking the package as used.
pub fn render_pkg_symbol(pkg: Option<&str>, symbol: &str, ctx: &mut RenderCtx) {
    if let Some(pkg) = pkg.filter(|pkg| !pkg.is_empty()) {
        ctx.ensure_import(pkg);
        ctx.write(pkg);
        ctx.write(".");
    }
    ctx.write(symbol);
}

/// Render a list of statements as a `{ .. }` block closing at `indent`.
pub fn render_block(stmts: &[IRNode], indent: Indent, ctx: &mut RenderCtx) -> anyhow::Result<()> {
    if stmts.is_empty() {
        ctx.write("{}");
        return Ok(());
    }
    let inner = indent.deeper();
    ctx.write("{");
    ctx.newline();
    for stmt in stmts {
        if stmt.is_statement() {
            render(stmt, inner, Parent::None, ctx)?;
        } else {
            ctx.tabs(inner);
            render(stmt, inner, Parent::None, ctx)?;
            ctx.newline();
        }
    }
    ctx.tabs(indent);
    ctx.write("}");
    Ok(())
}

/// Render a node in body position; a non-block body becomes a one-statement block.
pub fn render_body(body: &IRNode, indent: Indent, ctx: &mut RenderCtx) -> anyhow::Result<()> {
    match body {
        IRNode::Block(stmts) => render_block(stmts, indent, ctx),
        other => render_block(std::slice::from_ref(other), indent, ctx),
    }
}

fn render_if_chain(
    cond: &IRNode,
    then_block: &IRNode,
    else_block: Option<&IRNode>,
    indent: Indent,
    ctx: &mut RenderCtx,
) -> anyhow::Result<()> {
    ctx.write("if ");
    render(cond, indent, Parent::None, ctx)?;
    ctx.write(" ");
    render_body(then_block, indent, ctx)?;

    match else_block {
        None => {}
        Some(IRNode::If {
            cond,
            then_block,
            else_block,
        }) => {
            ctx.write(" else ");
            render_if_chain(cond, then_block, else_block.as_deref(), indent, ctx)?;
        }
        Some(other) => {
            ctx.write(" else ");
            render_body(other, indent, ctx)?;
        }
    }
    Ok(())
}

fn render_for(for_loop: &ForLoop, indent: Indent, ctx: &mut RenderCtx) -> anyhow::Result<()> {
    match for_loop {
        ForLoop::Range { value, over, body } => {
            ctx.write(&format!("for _, {} := range ", value));
            render(over, indent, Parent::None, ctx)?;
            ctx.write(" ");
            render_body(body, indent, ctx)
        }

        ForLoop::Classic {
            init,
            cond,
            step,
            body,
        } => {
            ctx.write("for ");
            if init.is_empty() && step.is_empty() {
                // Nothing to initialize or advance: `for cond {` or `for {`
                if let Some(cond) = cond {
                    render(cond, indent, Parent::None, ctx)?;
                    ctx.write(" ");
                }
                return render_body(body, indent, ctx);
            }

            if !init.is_empty() {
                ctx.sep_with(", ", init, |ctx, i| {
                    ctx.write(&i.name);
                    Ok(())
                })?;
                ctx.write(" := ");
                ctx.sep_with(", ", init, |ctx, i| render(&i.value, indent, Parent::None, ctx))?;
            }
            ctx.write("; ");
            if let Some(cond) = cond {
                render(cond, indent, Parent::None, ctx)?;
            }
            ctx.write(";");
            if !step.is_empty() {
                // Steps assign in parallel: `a, b = x, y`
                ctx.write(" ");
                ctx.sep_with(", ", step, |ctx, s| render(&s.left, indent, Parent::None, ctx))?;
                ctx.write(" = ");
                ctx.sep_with(", ", step, |ctx, s| render(&s.right, indent, Parent::None, ctx))?;
            }
            ctx.write(" ");
            render_body(body, indent, ctx)
        }

        ForLoop::While { cond, body } => {
            ctx.write("for ");
            render(cond, indent, Parent::None, ctx)?;
            ctx.write(" ");
            render_body(body, indent, ctx)
        }
    }
}

/// `func(args) rets { .. }`
fn render_func_literal(named: &NamedTypeRef, indent: Indent, ctx: &mut RenderCtx) -> anyhow::Result<()> {
    let Some(func) = named.ty.as_func() else {
        ctx.diagnose(
            DiagnosticKind::MalformedNode,
            format!("function value `{}` does not carry a function type", named.source_name),
        );
        ctx.write(&placeholder("Func", &named.source_name));
        return Ok(());
    };
    render_type_ref(named, indent, ctx)?;
    ctx.write(" ");
    match &func.body {
        Some(body) => render_body(body, indent, ctx),
        None => {
            ctx.diagnose(
                DiagnosticKind::MalformedNode,
                format!("function value `{}` has no body", named.source_name),
            );
            ctx.write("{}");
            Ok(())
        }
    }
}

/// `const <name> <type> = <value>`; the type is left out when unknown.
pub fn render_const(c: &ConstDecl, indent: Indent, ctx: &mut RenderCtx) -> anyhow::Result<()> {
    render_comments(&c.decl.comments, indent, ctx);
    ctx.tabs(indent);
    ctx.write("const ");
    ctx.write(&c.decl.name);
    ctx.write(" ");
    if c.decl.ty != TypeRef::Empty {
        render_type(&c.decl.ty, indent, ctx)?;
        ctx.write(" ");
    }
    ctx.write("= ");
    render(&c.value, indent, Parent::None, ctx)?;
    ctx.end_stmt(indent);
    Ok(())
}

/// Render a variable declaration in one of its three shapes.
///
/// At top level `:=` is unavailable, so every shape is spelled with `var`.
pub fn render_let(binding: &LetBinding, indent: Indent, top_level: bool, ctx: &mut RenderCtx) -> anyhow::Result<()> {
    let decl = &binding.decl;
    render_comments(&decl.comments, indent, ctx);
    ctx.tabs(indent);

    match binding.value.as_deref() {
        // `v, ok := x.(T)`
        Some(assertion @ IRNode::ToType { .. }) if binding.type_conv.is_some() || !top_level => {
            if top_level {
                ctx.write("var ");
            }
            match &binding.type_conv {
                Some(conv) => {
                    ctx.write(if conv.value_used { decl.name.as_str() } else { "_" });
                    ctx.write(", ");
                    ctx.write(&conv.ok_name);
                }
                None => ctx.write(&decl.name),
            }
            ctx.write(if top_level { " = " } else { " := " });
            render(assertion, indent, Parent::None, ctx)?;
        }

        // `f := func(..) { .. }`
        Some(value) if !top_level && (decl.ty.as_func().is_some() || matches!(value, IRNode::Func(_))) => {
            ctx.write(&decl.name);
            ctx.write(" := ");
            render(value, indent, Parent::None, ctx)?;
        }

        // `var name T [= value]`
        value => {
            ctx.write("var ");
            ctx.write(&decl.name);
            if decl.ty != TypeRef::Empty || value.is_none() {
                ctx.write(" ");
                render_type(&decl.ty, indent, ctx)?;
            }
            if let Some(value) = value {
                ctx.write(" = ");
                render(value, indent, Parent::None, ctx)?;
            }
        }
    }
    ctx.end_stmt(indent);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::RenderOptions;
    use crate::resolver::ImportTableResolver;
    use goemit_ir::{BinOp, ForInit, ForStep, FuncType, Module, ObjField, TypeConvBinding, UnOp};
    use insta::assert_snapshot;

    fn render_at(node: &IRNode, indent: Indent) -> String {
        let module = Module::new("main", "Main");
        let options = RenderOptions::default();
        let mut ctx = RenderCtx::new(&module, &ImportTableResolver, &options);
        render(node, indent, Parent::None, &mut ctx).unwrap();
        ctx.take_output()
    }

    fn expr(node: &IRNode) -> String {
        render_at(node, Indent::EXPR)
    }

    fn sym(name: &str) -> IRNode {
        IRNode::sym(name)
    }

    fn int(name: &str) -> NamedTypeRef {
        NamedTypeRef::new(name, TypeRef::alias("int"))
    }

    #[test]
    fn test_same_operator_chain_flat() {
        let node = IRNode::op2(BinOp::Add, IRNode::op2(BinOp::Add, sym("a"), sym("b")), sym("c"));
        assert_snapshot!(expr(&node), @"a + b + c");
    }

    #[test]
    fn test_mixed_operators_parenthesized() {
        let node = IRNode::op2(BinOp::Mul, IRNode::op2(BinOp::Add, sym("a"), sym("b")), sym("c"));
        assert_snapshot!(expr(&node), @"(a + b) * c");
    }

    #[test]
    fn test_unary_operand_parenthesized() {
        let node = IRNode::op1(UnOp::Not, IRNode::op2(BinOp::Eq, sym("a"), sym("b")));
        assert_snapshot!(expr(&node), @"!(a == b)");
        let node = IRNode::op2(BinOp::Sub, sym("x"), IRNode::op1(UnOp::Neg, sym("y")));
        assert_snapshot!(expr(&node), @"x - (-y)");
    }

    #[test]
    fn test_operator_callee_parenthesized() {
        let node = IRNode::call(IRNode::op2(BinOp::Add, sym("f"), sym("g")), vec![sym("x")]);
        assert_snapshot!(expr(&node), @"(f + g)(x)");
        let node = IRNode::call(IRNode::dot(sym("pkg"), sym("Fn")), vec![IRNode::LitInt(1), IRNode::Nil]);
        assert_snapshot!(expr(&node), @"pkg.Fn(1, nil)");
    }

    #[test]
    fn test_literals() {
        assert_snapshot!(expr(&IRNode::LitNum(3.0)), @"3.0");
        assert_snapshot!(expr(&IRNode::LitNum(3.14000)), @"3.14");
        assert_snapshot!(expr(&IRNode::LitStr("a\"b".to_string())), @r#""a\"b""#);
        assert_snapshot!(expr(&IRNode::LitBool(false)), @"false");
        assert_snapshot!(expr(&IRNode::LitInt(-42)), @"-42");
    }

    #[test]
    fn test_negating_negative_literals() {
        assert_snapshot!(expr(&IRNode::op1(UnOp::Neg, IRNode::LitInt(-5))), @"-(-5)");
        assert_snapshot!(expr(&IRNode::op1(UnOp::Neg, IRNode::LitNum(-2.5))), @"-(-2.5)");
        assert_snapshot!(expr(&IRNode::op1(UnOp::Neg, IRNode::LitInt(5))), @"-5");
        assert_snapshot!(expr(&IRNode::op2(BinOp::Sub, sym("x"), IRNode::LitInt(-1))), @"x - -1");
    }

    #[test]
    fn test_non_finite_float_uses_math() {
        let module = Module::new("main", "Main");
        let options = RenderOptions::default();
        let mut ctx = RenderCtx::new(&module, &ImportTableResolver, &options);
        render(&IRNode::LitNum(f64::NEG_INFINITY), Indent::EXPR, Parent::None, &mut ctx).unwrap();
        assert_eq!(ctx.take_output(), "math.Inf(-1)");
        let (usage, _) = ctx.finish();
        assert!(usage.is_used("math"));
    }

    #[test]
    fn test_composite_literals() {
        let arr = IRNode::LitArr {
            ty: NamedTypeRef::unnamed(TypeRef::array(TypeRef::alias("int"))),
            elems: vec![IRNode::LitInt(1), IRNode::LitInt(2)],
        };
        assert_snapshot!(expr(&arr), @"[]int{1, 2}");

        let obj = IRNode::LitObj {
            ty: NamedTypeRef::unnamed(TypeRef::alias("Main.Person")),
            fields: vec![
                ObjField {
                    name: Some("Name".to_string()),
                    value: IRNode::LitStr("Ann".to_string()),
                },
                ObjField {
                    name: None,
                    value: IRNode::LitInt(30),
                },
            ],
        };
        assert_snapshot!(expr(&obj), @r#"Person{Name: "Ann", 30}"#);
    }

    #[test]
    fn test_pkg_symbol_marks_import_once() {
        let mut module = Module::new("main", "Main");
        module.imports.push(goemit_ir::PkgImport::new("fmt", "fmt"));
        let options = RenderOptions::default();
        let mut ctx = RenderCtx::new(&module, &ImportTableResolver, &options);
        let node = IRNode::call(IRNode::pkg_sym("fmt", "Println"), vec![IRNode::pkg_sym("fmt", "Sprint")]);
        render(&node, Indent::EXPR, Parent::None, &mut ctx).unwrap();
        assert_eq!(ctx.take_output(), "fmt.Println(fmt.Sprint)");
        let (usage, _) = ctx.finish();
        assert_eq!(usage.len(), 1);
    }

    #[test]
    fn test_block_and_if_else_chain() {
        let node = IRNode::If {
            cond: Box::new(IRNode::op2(BinOp::Lt, sym("n"), IRNode::LitInt(0))),
            then_block: Box::new(IRNode::Block(vec![IRNode::ret(Some(IRNode::LitInt(-1)))])),
            else_block: Some(Box::new(IRNode::If {
                cond: Box::new(IRNode::op2(BinOp::Eq, sym("n"), IRNode::LitInt(0))),
                then_block: Box::new(IRNode::Block(vec![IRNode::ret(Some(IRNode::LitInt(0)))])),
                else_block: Some(Box::new(IRNode::Block(vec![IRNode::call(sym("log"), vec![sym("n")])]))),
            })),
        };
        assert_eq!(
            render_at(&node, Indent::level(1)),
            "\tif n < 0 {\n\t\treturn -1\n\t} else if n == 0 {\n\t\treturn 0\n\t} else {\n\t\tlog(n)\n\t}\n"
        );
    }

    #[test]
    fn test_empty_block() {
        assert_snapshot!(expr(&IRNode::Block(vec![])), @"{}");
    }

    #[test]
    fn test_range_loop() {
        let node = IRNode::For(ForLoop::Range {
            value: "item".to_string(),
            over: Box::new(sym("items")),
            body: Box::new(IRNode::Block(vec![IRNode::set(sym("last"), sym("item"))])),
        });
        assert_eq!(
            render_at(&node, Indent::level(1)),
            "\tfor _, item := range items {\n\t\tlast = item\n\t}\n"
        );
    }

    #[test]
    fn test_classic_loop_parallel_clauses() {
        let node = IRNode::For(ForLoop::Classic {
            init: vec![
                ForInit {
                    name: "i".to_string(),
                    value: IRNode::LitInt(0),
                },
                ForInit {
                    name: "acc".to_string(),
                    value: sym("start"),
                },
            ],
            cond: Some(Box::new(IRNode::op2(BinOp::Lt, sym("i"), sym("n")))),
            step: vec![
                ForStep {
                    left: sym("i"),
                    right: IRNode::op2(BinOp::Add, sym("i"), IRNode::LitInt(1)),
                },
                ForStep {
                    left: sym("acc"),
                    right: IRNode::call(sym("f"), vec![sym("acc")]),
                },
            ],
            body: Box::new(IRNode::Block(vec![])),
        });
        assert_eq!(
            render_at(&node, Indent::TOP),
            "for i, acc := 0, start; i < n; i, acc = i + 1, f(acc) {}\n"
        );
    }

    #[test]
    fn test_condition_only_loops() {
        let node = IRNode::For(ForLoop::While {
            cond: Box::new(sym("running")),
            body: Box::new(IRNode::Block(vec![IRNode::call(sym("tick"), vec![])])),
        });
        assert_eq!(render_at(&node, Indent::TOP), "for running {\n\ttick()\n}\n");

        let forever = IRNode::For(ForLoop::Classic {
            init: vec![],
            cond: None,
            step: vec![],
            body: Box::new(IRNode::Block(vec![])),
        });
        assert_eq!(render_at(&forever, Indent::TOP), "for {}\n");
    }

    #[test]
    fn test_let_shapes() {
        let assertion = IRNode::ToType {
            expr: Box::new(sym("v")),
            target: TypeRef::alias("Main.Person"),
        };
        let conv = IRNode::Let(LetBinding {
            decl: NamedTypeRef::new("p", TypeRef::alias("Main.Person")),
            value: Some(Box::new(assertion.clone())),
            type_conv: Some(TypeConvBinding {
                ok_name: "ok".to_string(),
                value_used: false,
            }),
        });
        assert_eq!(render_at(&conv, Indent::level(1)), "\t_, ok := v.(Person)\n");

        let plain_conv = IRNode::Let(LetBinding {
            decl: NamedTypeRef::new("p", TypeRef::alias("Main.Person")),
            value: Some(Box::new(assertion)),
            type_conv: None,
        });
        assert_eq!(render_at(&plain_conv, Indent::level(1)), "\tp := v.(Person)\n");

        let sig = FuncType::signature(vec![int("x")], vec![NamedTypeRef::unnamed(TypeRef::alias("int"))]);
        let func = IRNode::Let(LetBinding {
            decl: NamedTypeRef::new("inc", TypeRef::Func(sig.clone())),
            value: Some(Box::new(IRNode::Func(NamedTypeRef::new(
                "",
                TypeRef::Func(sig.with_body(IRNode::Block(vec![IRNode::ret(Some(IRNode::op2(
                    BinOp::Add,
                    sym("x"),
                    IRNode::LitInt(1),
                )))]))),
            )))),
            type_conv: None,
        });
        assert_eq!(
            render_at(&func, Indent::level(1)),
            "\tinc := func(x int) int {\n\t\treturn x + 1\n\t}\n"
        );

        let var = IRNode::Let(LetBinding {
            decl: int("count"),
            value: Some(Box::new(IRNode::LitInt(0))),
            type_conv: None,
        });
        assert_eq!(render_at(&var, Indent::level(1)), "\tvar count int = 0\n");

        let uninit = IRNode::Let(LetBinding {
            decl: int("count"),
            value: None,
            type_conv: None,
        });
        assert_eq!(render_at(&uninit, Indent::level(1)), "\tvar count int\n");
    }

    #[test]
    fn test_const_and_statements() {
        let c = IRNode::Const(ConstDecl {
            decl: int("limit"),
            value: Box::new(IRNode::LitInt(10)),
        });
        assert_eq!(render_at(&c, Indent::level(1)), "\tconst limit int = 10\n");
        assert_eq!(render_at(&IRNode::ret(None), Indent::level(2)), "\t\treturn\n");
        assert_snapshot!(expr(&IRNode::ret(Some(sym("x")))), @"return x");
        assert_eq!(
            render_at(&IRNode::Panic(Box::new(IRNode::LitStr("boom".to_string()))), Indent::level(1)),
            "\tpanic(\"boom\")\n"
        );
    }

    #[test]
    fn test_access_and_assertion() {
        let node = IRNode::Index {
            left: Box::new(IRNode::dot(sym("p"), sym("Items"))),
            right: Box::new(IRNode::LitInt(0)),
        };
        assert_snapshot!(expr(&node), @"p.Items[0]");
        let node = IRNode::ToType {
            expr: Box::new(sym("v")),
            target: TypeRef::pointer(TypeRef::alias("string")),
        };
        assert_snapshot!(expr(&node), @"v.(*string)");
    }

    #[test]
    fn test_placeholders_are_diagnosed() {
        let module = Module::new("main", "Main");
        let options = RenderOptions::default();
        let mut ctx = RenderCtx::new(&module, &ImportTableResolver, &options);
        let node = IRNode::call(
            sym("f"),
            vec![
                IRNode::IsType {
                    value: "v".to_string(),
                    type_name: "Person".to_string(),
                },
                IRNode::Unsupported {
                    kind: "Case".to_string(),
                    detail: "a */ b".to_string(),
                },
            ],
        );
        render(&node, Indent::EXPR, Parent::None, &mut ctx).unwrap();
        assert_eq!(ctx.take_output(), "f(ːvᐧPerson, /*****Case: a * / b*****/)");
        let (_, diagnostics) = ctx.finish();
        let kinds: Vec<_> = diagnostics.iter().map(|d| d.kind).collect();
        assert_eq!(kinds, vec![DiagnosticKind::UnloweredTypeTest, DiagnosticKind::UnsupportedNode]);
    }

    #[test]
    fn test_expression_statements_in_block() {
        let node = IRNode::Block(vec![
            IRNode::Comments(vec![goemit_ir::Comment::Line(" step".to_string())]),
            IRNode::call(sym("run"), vec![]),
            IRNode::Block(vec![IRNode::ret(None)]),
        ]);
        assert_eq!(
            render_at(&node, Indent::TOP),
            "{\n\t// step\n\trun()\n\t{\n\t\treturn\n\t}\n}"
        );
    }
}

// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! One-level parenthesization decisions.
//!
//! Deliberately conservative: the only question asked is whether a unary or
//! binary node needs parentheses under its immediate parent, never how the
//! whole chain associates. Output is always correct, sometimes with a pair of
//! parentheses gofmt would keep anyway.

use goemit_ir::{BinOp, IRNode, UnOp};

/// Syntactic position a node is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parent {
    /// Anywhere no operator binds the node (arguments, conditions, operands of `.` and `[]`)
    None,
    Op1(UnOp),
    Op2(BinOp),
    /// Callee of a call expression
    Callee,
}

/// Operators that may be chained with themselves without parentheses.
fn is_chain_safe(op: BinOp) -> bool {
    matches!(
        op,
        BinOp::Add | BinOp::Mul | BinOp::And | BinOp::BitAnd | BinOp::Or | BinOp::BitOr
    )
}

pub fn needs_parens(node: &IRNode, parent: Parent) -> bool {
    match node {
        IRNode::Op1 { .. } => parent != Parent::None,
        IRNode::Op2 { op, .. } => match parent {
            Parent::None => false,
            Parent::Op1(_) | Parent::Callee => true,
            Parent::Op2(parent_op) => parent_op != *op || !is_chain_safe(*op),
        },
        // `--` would lex as decrement
        IRNode::LitInt(value) => parent == Parent::Op1(UnOp::Neg) && *value < 0,
        IRNode::LitNum(value) => parent == Parent::Op1(UnOp::Neg) && value.is_finite() && value.is_sign_negative(),
        _ => false,
    }
}

// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! IR node definitions.
//!
//! One closed enum covers every construct the Go renderer understands:
//! literals, declarations, statements and expressions share the same type so a
//! block can hold any of them. Nodes never point at their parent; renderers
//! pass the parent context down explicitly while walking the tree.

use super::types::{NamedTypeRef, TypeRef};
use serde::{Deserialize, Serialize};

// ============================================================================
// Operators
// ============================================================================

/// Binary operators, serialized by their Go spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinOp {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Div,
    #[serde(rename = "%")]
    Rem,
    #[serde(rename = "&&")]
    And,
    #[serde(rename = "||")]
    Or,
    #[serde(rename = "&")]
    BitAnd,
    #[serde(rename = "|")]
    BitOr,
    #[serde(rename = "^")]
    BitXor,
    #[serde(rename = "&^")]
    BitClear,
    #[serde(rename = "<<")]
    Shl,
    #[serde(rename = ">>")]
    Shr,
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    Neq,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Ge,
}

impl BinOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Rem => "%",
            BinOp::And => "&&",
            BinOp::Or => "||",
            BinOp::BitAnd => "&",
            BinOp::BitOr => "|",
            BinOp::BitXor => "^",
            BinOp::BitClear => "&^",
            BinOp::Shl => "<<",
            BinOp::Shr => ">>",
            BinOp::Eq => "==",
            BinOp::Neq => "!=",
            BinOp::Lt => "<",
            BinOp::Le => "<=",
            BinOp::Gt => ">",
            BinOp::Ge => ">=",
        }
    }
}

/// Unary prefix operators, serialized by their Go spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnOp {
    #[serde(rename = "!")]
    Not,
    #[serde(rename = "-")]
    Neg,
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "^")]
    Complement,
    #[serde(rename = "*")]
    Deref,
    #[serde(rename = "&")]
    AddressOf,
}

impl UnOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnOp::Not => "!",
            UnOp::Neg => "-",
            UnOp::Plus => "+",
            UnOp::Complement => "^",
            UnOp::Deref => "*",
            UnOp::AddressOf => "&",
        }
    }
}

// ============================================================================
// Node payloads
// ============================================================================

/// A source comment carried through to the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comment {
    /// `//text`, always followed by a newline
    Line(String),
    /// `/*text*/`, inline
    Block(String),
}

/// One `name: value` entry of an object literal. Positional entries have no name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjField {
    #[serde(default)]
    pub name: Option<String>,
    pub value: IRNode,
}

/// Extra binding produced when a variable is initialized by a type assertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeConvBinding {
    /// Name bound to the assertion's success flag
    pub ok_name: String,
    /// Whether the asserted value itself is referenced; unused values bind to `_`
    pub value_used: bool,
}

/// A constant declaration. The declared name, type and doc comments live in `decl`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstDecl {
    pub decl: NamedTypeRef,
    pub value: Box<IRNode>,
}

/// A variable declaration with an optional initializer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LetBinding {
    pub decl: NamedTypeRef,
    #[serde(default)]
    pub value: Option<Box<IRNode>>,
    #[serde(default)]
    pub type_conv: Option<TypeConvBinding>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForInit {
    pub name: String,
    pub value: IRNode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForStep {
    pub left: IRNode,
    pub right: IRNode,
}

/// The three loop shapes Go offers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ForLoop {
    /// `for _, value := range over { .. }`
    Range {
        value: String,
        over: Box<IRNode>,
        body: Box<IRNode>,
    },
    /// `for a, b := x, y; cond; a, b = s, t { .. }`
    Classic {
        #[serde(default)]
        init: Vec<ForInit>,
        #[serde(default)]
        cond: Option<Box<IRNode>>,
        #[serde(default)]
        step: Vec<ForStep>,
        body: Box<IRNode>,
    },
    /// `for cond { .. }`
    While { cond: Box<IRNode>, body: Box<IRNode> },
}

// ============================================================================
// Core IR Type
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum IRNode {
    // === Literals ===
    LitStr(String),
    LitBool(bool),
    LitNum(f64),
    LitInt(i64),
    /// `[]T{a, b}`; `ty` holds the array type
    LitArr { ty: NamedTypeRef, elems: Vec<IRNode> },
    /// `T{Name: v}`
    LitObj { ty: NamedTypeRef, fields: Vec<ObjField> },

    // === Declarations ===
    Const(ConstDecl),
    Let(LetBinding),

    // === Statements ===
    Block(Vec<IRNode>),
    If {
        cond: Box<IRNode>,
        then_block: Box<IRNode>,
        #[serde(default)]
        else_block: Option<Box<IRNode>>,
    },
    For(ForLoop),
    /// Assignment `left = right`
    Set { left: Box<IRNode>, right: Box<IRNode> },
    Return(Option<Box<IRNode>>),
    /// Abort via `panic(arg)`
    Panic(Box<IRNode>),
    Comments(Vec<Comment>),

    // === Expressions ===
    /// Plain identifier
    Sym(String),
    /// Identifier optionally qualified by an imported package alias
    PkgSym {
        #[serde(default)]
        pkg: Option<String>,
        symbol: String,
    },
    Nil,
    Call { callee: Box<IRNode>, args: Vec<IRNode> },
    /// Function value; the type must be a `TypeRef::Func` carrying the body
    Func(NamedTypeRef),
    /// Field access `left.right`
    Dot { left: Box<IRNode>, right: Box<IRNode> },
    Index { left: Box<IRNode>, right: Box<IRNode> },
    /// Type assertion `expr.(target)`
    ToType { expr: Box<IRNode>, target: TypeRef },
    /// Type test. Must be lowered by the front-end before reaching real output.
    IsType { value: String, type_name: String },
    Op1 { op: UnOp, operand: Box<IRNode> },
    Op2 { op: BinOp, left: Box<IRNode>, right: Box<IRNode> },

    /// Construct the front-end could not lower. Rendered as a marked placeholder.
    Unsupported { kind: String, detail: String },
}

impl IRNode {
    pub fn sym(name: impl Into<String>) -> Self {
        IRNode::Sym(name.into())
    }

    pub fn pkg_sym(pkg: impl Into<String>, symbol: impl Into<String>) -> Self {
        IRNode::PkgSym {
            pkg: Some(pkg.into()),
            symbol: symbol.into(),
        }
    }

    pub fn op1(op: UnOp, operand: IRNode) -> Self {
        IRNode::Op1 {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn op2(op: BinOp, left: IRNode, right: IRNode) -> Self {
        IRNode::Op2 {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn call(callee: IRNode, args: Vec<IRNode>) -> Self {
        IRNode::Call {
            callee: Box::new(callee),
            args,
        }
    }

    pub fn dot(left: IRNode, right: IRNode) -> Self {
        IRNode::Dot {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn set(left: IRNode, right: IRNode) -> Self {
        IRNode::Set {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn ret(value: Option<IRNode>) -> Self {
        IRNode::Return(value.map(Box::new))
    }

    /// Whether this node produces its own statement line (leading tabs and
    /// trailing newline) when it appears directly inside a block.
    pub fn is_statement(&self) -> bool {
        matches!(
            self,
            IRNode::Const(_)
                | IRNode::Let(_)
                | IRNode::If { .. }
                | IRNode::For(_)
                | IRNode::Set { .. }
                | IRNode::Return(_)
                | IRNode::Panic(_)
                | IRNode::Comments(_)
        )
    }
}

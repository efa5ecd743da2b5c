// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! goemit IR
//!
//! The fully resolved intermediate representation handed to the Go renderer.
//! This crate only describes programs; turning them into source text is the job
//! of `goemit-backend`.

mod data;

// Nodes and operators (from data/nodes.rs)
pub use data::nodes::{
    BinOp, Comment, ConstDecl, ForInit, ForLoop, ForStep, IRNode, LetBinding, ObjField, TypeConvBinding,
    UnOp,
};

// Type references (from data/types.rs)
pub use data::types::{FuncType, InterfaceType, NamedTypeRef, StructType, TypeRef};

// Import descriptors (from data/imports.rs)
pub use data::imports::{ImportForm, PkgImport};

// Compilation units (from data/module.rs)
pub use data::module::{Decl, Module};

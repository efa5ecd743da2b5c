// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Type references for the goemit IR

use super::nodes::{Comment, IRNode};
use serde::{Deserialize, Serialize};

/// Recursive description of a value's type shape.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum TypeRef {
    /// No type information was attached
    #[default]
    Empty,
    /// Named type, given as a qualified source name (`Data.Maybe.Maybe`, `int`)
    Alias(String),
    /// Type the front-end failed to resolve; the id is kept for diagnostics
    Unresolved(u64),
    /// Slice of the element type
    Array(Box<TypeRef>),
    /// Pointer to the referent type
    Pointer(Box<TypeRef>),
    Interface(InterfaceType),
    Struct(StructType),
    Func(FuncType),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InterfaceType {
    /// Qualified names of embedded interfaces
    pub embeds: Vec<String>,
    /// Method signatures; each entry must carry a `TypeRef::Func`
    pub methods: Vec<NamedTypeRef>,
    /// Marks an empty interface that stands in for a generic type variable
    pub is_type_var: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StructType {
    /// Embedded type names, emitted verbatim
    pub embeds: Vec<String>,
    pub fields: Vec<NamedTypeRef>,
    /// Methods bind to `*T` instead of `T`
    pub pass_by_ptr: bool,
    /// Methods attached to the struct; each carries a `TypeRef::Func` with a body
    pub methods: Vec<NamedTypeRef>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FuncType {
    pub args: Vec<NamedTypeRef>,
    pub rets: Vec<NamedTypeRef>,
    /// Implementation block; `None` for a bare signature
    pub body: Option<Box<IRNode>>,
}

/// A type reference together with the identifier it is bound to.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NamedTypeRef {
    /// Identifier in the generated Go code
    pub name: String,
    /// Identifier in the original source, for diagnostics
    pub source_name: String,
    /// Doc comments placed before the declaration
    pub comments: Vec<Comment>,
    pub ty: TypeRef,
}

impl TypeRef {
    pub fn alias(qname: impl Into<String>) -> Self {
        TypeRef::Alias(qname.into())
    }

    pub fn array(elem: TypeRef) -> Self {
        TypeRef::Array(Box::new(elem))
    }

    pub fn pointer(referent: TypeRef) -> Self {
        TypeRef::Pointer(Box::new(referent))
    }

    pub fn as_func(&self) -> Option<&FuncType> {
        match self {
            TypeRef::Func(func) => Some(func),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&StructType> {
        match self {
            TypeRef::Struct(strukt) => Some(strukt),
            _ => None,
        }
    }
}

impl NamedTypeRef {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            ..Default::default()
        }
    }

    /// Nameless entry, as used for positional arguments and return values.
    pub fn unnamed(ty: TypeRef) -> Self {
        Self::new("", ty)
    }

    pub fn with_comments(mut self, comments: Vec<Comment>) -> Self {
        self.comments = comments;
        self
    }
}

impl FuncType {
    pub fn signature(args: Vec<NamedTypeRef>, rets: Vec<NamedTypeRef>) -> Self {
        Self {
            args,
            rets,
            body: None,
        }
    }

    pub fn with_body(mut self, body: IRNode) -> Self {
        self.body = Some(Box::new(body));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_func_and_struct_accessors() {
        let sig = TypeRef::Func(FuncType::signature(vec![], vec![]));
        assert!(sig.as_func().is_some_and(|func| func.body.is_none()));

        let imp = TypeRef::Func(FuncType::signature(vec![], vec![]).with_body(IRNode::Block(vec![])));
        assert!(imp.as_func().is_some_and(|func| func.body.is_some()));
        assert!(imp.as_struct().is_none());
    }

    #[test]
    fn test_missing_fields_default_on_deserialize() {
        let named: NamedTypeRef = serde_json::from_str(r#"{"name": "Id", "ty": {"Alias": "int"}}"#).unwrap();
        assert_eq!(named.name, "Id");
        assert!(named.comments.is_empty());
        assert_eq!(named.ty, TypeRef::alias("int"));

        let bare: NamedTypeRef = serde_json::from_str("{}").unwrap();
        assert_eq!(bare.ty, TypeRef::Empty);
    }
}

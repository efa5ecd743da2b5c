// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Qualified-name resolution for type references.

use goemit_ir::Module;

/// A Go symbol, optionally qualified by an import alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PkgSymbol {
    pub pkg: Option<String>,
    pub symbol: String,
}

impl PkgSymbol {
    pub fn local(symbol: impl Into<String>) -> Self {
        Self {
            pkg: None,
            symbol: symbol.into(),
        }
    }

    pub fn qualified(pkg: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            pkg: Some(pkg.into()),
            symbol: symbol.into(),
        }
    }
}

/// Maps qualified source names (`Data.Maybe.Maybe`) to Go symbols.
pub trait TypeResolver {
    /// Returns `None` when the name's package cannot be determined.
    fn resolve(&self, module: &Module, qname: &str) -> Option<PkgSymbol>;
}

/// Resolves names through the module's own import table.
///
/// Unqualified names and names from the module itself stay local. A module
/// prefix is matched against each import's source module first and against
/// the Go alias second, so both `Data.Maybe.Maybe` and `maybe.Maybe` work.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportTableResolver;

impl TypeResolver for ImportTableResolver {
    fn resolve(&self, module: &Module, qname: &str) -> Option<PkgSymbol> {
        let Some((prefix, symbol)) = qname.rsplit_once('.') else {
            return Some(PkgSymbol::local(qname));
        };
        if prefix == module.source_name || prefix == module.name {
            return Some(PkgSymbol::local(symbol));
        }
        module
            .import_by_source(prefix)
            .or_else(|| module.import_by_alias(prefix))
            .map(|import| PkgSymbol::qualified(import.go_name.clone(), symbol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goemit_ir::PkgImport;

    fn module() -> Module {
        let mut module = Module::new("main", "Main");
        module.imports = vec![
            PkgImport::new("maybe", "github.com/acme/Data.Maybe").from_source("Data.Maybe"),
            PkgImport::new("fmt", "fmt"),
        ];
        module
    }

    #[test]
    fn test_resolution() {
        let m = module();
        let r = ImportTableResolver;
        assert_eq!(r.resolve(&m, "int"), Some(PkgSymbol::local("int")));
        assert_eq!(r.resolve(&m, "Main.Person"), Some(PkgSymbol::local("Person")));
        assert_eq!(r.resolve(&m, "Data.Maybe.Maybe"), Some(PkgSymbol::qualified("maybe", "Maybe")));
        assert_eq!(r.resolve(&m, "fmt.Stringer"), Some(PkgSymbol::qualified("fmt", "Stringer")));
        assert_eq!(r.resolve(&m, "Data.Either.Either"), None);
    }
}

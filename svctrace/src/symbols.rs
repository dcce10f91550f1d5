// SPDX-License-Identifier: MIT OR Apache-2.0

//! Symbol resolution provided by the host.

/// A queried address mapped back to the symbol containing it. `address` is
/// the symbol's start, not the queried address. Module and symbol names are
/// absent when the host's debug info has no answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSymbol {
    pub module: Option<String>,
    pub name: Option<String>,
    pub address: u64,
}

/// One entry from a module's symbol enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolInfo {
    pub name: String,
    pub address: u64,
}

pub trait SymbolResolver: Send + Sync {
    /// `None` when the address maps to nothing the resolver knows about.
    fn resolve(&self, address: u64) -> Option<ResolvedSymbol>;

    fn find_base_address(&self, module: &str) -> Option<u64>;

    /// Empty when the module is unknown.
    fn enumerate_symbols(&self, module: &str) -> Vec<SymbolInfo>;
}

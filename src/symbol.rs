//! The symbol table: label/constant name -> resolved value.

use std::collections::HashMap;

use serde::Serialize;

use crate::errors::AssemblyError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Label,
    Equ,
    Defl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Symbol {
    pub address: u16,
    pub kind: SymbolKind,
}

pub type SymbolTable = HashMap<String, Symbol>;

/// Looks up `name`, producing an `UndefinedSymbol` error when absent.
pub fn get_symbol<'a>(
    table: &'a SymbolTable,
    name: &str,
    line: usize,
    column: usize,
) -> Result<&'a Symbol, AssemblyError> {
    table.get(name).ok_or_else(|| AssemblyError::UndefinedSymbol {
        name: name.to_string(),
        line,
        column,
    })
}

/// Binds `name` into `table`, returning a redefinition warning unless the
/// new binding is a `Defl` (which is allowed to silently rebind). The
/// later binding always wins.
pub fn bind_symbol(table: &mut SymbolTable, name: String, symbol: Symbol) -> Option<String> {
    let warning = if table.contains_key(&name) && symbol.kind != SymbolKind::Defl {
        Some(format!("symbol '{}' redefined", name))
    } else {
        None
    };
    table.insert(name, symbol);
    warning
}

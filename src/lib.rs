//! A two-pass Z80 assembler targeting the TRS-80 Model III memory map.
//!
//! [`assemble`] is the single entry point: it runs lexing, the two parser
//! passes, and code generation, folding every stage's diagnostics into one
//! result. A `catch_unwind` boundary means an internal panic degrades to a
//! structured `Internal` error instead of aborting the caller's process.

pub mod ast;
pub mod codegen;
pub mod encoder;
pub mod errors;
pub mod evaluator;
pub mod parser;
pub mod symbol;
pub mod token;

use serde::Serialize;

pub use ast::{Condition, IntermediateInstruction, Operand};
pub use errors::{AssemblyError, Diagnostic, Severity};
pub use symbol::{Symbol, SymbolKind, SymbolTable};

/// TRS-80 Model III ROM range.
pub const ROM: std::ops::RangeInclusive<u16> = 0x0000..=0x37FF;
/// Keyboard-matrix memory-mapped I/O range.
pub const KEYBOARD: std::ops::RangeInclusive<u16> = 0x3800..=0x3BFF;
/// Video (character) RAM range.
pub const VIDEO: std::ops::RangeInclusive<u16> = 0x3C00..=0x3FFF;
/// General-purpose RAM range.
pub const RAM: std::ops::RangeInclusive<u16> = 0x4000..=0x7FFF;
/// Default origin for code that never issues an explicit `.ORG`.
pub const DEFAULT_ORG: u16 = 0x4200;

/// The full result of assembling one source string.
#[derive(Debug, Clone, Serialize)]
pub struct AssembleResult {
    pub success: bool,
    pub bytes: Vec<u8>,
    pub start_address: u16,
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
    pub symbol_table: SymbolTable,
    pub instructions: Vec<IntermediateInstruction>,
}

impl serde::Serialize for IntermediateInstruction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        match self {
            IntermediateInstruction::Data { address, bytes, label, .. } => {
                let mut s = serializer.serialize_struct("IntermediateInstruction", 4)?;
                s.serialize_field("kind", "data")?;
                s.serialize_field("address", address)?;
                s.serialize_field("bytes", bytes)?;
                s.serialize_field("label", label)?;
                s.end()
            }
            IntermediateInstruction::Instruction { address, mnemonic, bytes, label, .. } => {
                let mut s = serializer.serialize_struct("IntermediateInstruction", 5)?;
                s.serialize_field("kind", "instruction")?;
                s.serialize_field("address", address)?;
                s.serialize_field("mnemonic", mnemonic)?;
                s.serialize_field("bytes", bytes)?;
                s.serialize_field("label", label)?;
                s.end()
            }
        }
    }
}

/// Assembles `source` into a byte image plus diagnostics. Never panics
/// across its own boundary: an internal panic is caught and reported as a
/// single `Internal` error rather than propagated.
pub fn assemble(source: &str) -> AssembleResult {
    if source.is_empty() {
        let err = AssemblyError::EmptySource;
        return AssembleResult {
            success: false,
            bytes: Vec::new(),
            start_address: DEFAULT_ORG,
            errors: vec![Diagnostic::error(err)],
            warnings: Vec::new(),
            symbol_table: SymbolTable::new(),
            instructions: Vec::new(),
        };
    }

    let result = std::panic::catch_unwind(|| assemble_inner(source));
    match result {
        Ok(r) => r,
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            AssembleResult {
                success: false,
                bytes: Vec::new(),
                start_address: DEFAULT_ORG,
                errors: vec![Diagnostic::error(AssemblyError::Internal { message })],
                warnings: Vec::new(),
                symbol_table: SymbolTable::new(),
                instructions: Vec::new(),
            }
        }
    }
}

fn assemble_inner(source: &str) -> AssembleResult {
    log::debug!("lexing {} bytes of source", source.len());
    let tokens = token::lex(source);

    log::debug!("pass 1/2: parsing {} tokens", tokens.len());
    let parsed = parser::parse(&tokens);

    log::debug!(
        "codegen: resolving {} intermediate instructions",
        parsed.instructions.len()
    );
    let gen = codegen::generate(parsed.instructions, &parsed.symbols, parsed.start_address, &parsed.origins);

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    for d in parsed.diagnostics.into_iter().chain(gen.diagnostics) {
        match d.severity {
            Severity::Error => errors.push(d),
            Severity::Warning => warnings.push(d),
        }
    }
    errors.sort_by_key(|d| (d.line, d.column));
    warnings.sort_by_key(|d| (d.line, d.column));

    let bytes: Vec<u8> = gen.instructions.iter().flat_map(|i| i.bytes().iter().copied()).collect();
    let success = errors.is_empty();
    log::info!(
        "assembled {} bytes, {} errors, {} warnings",
        bytes.len(),
        errors.len(),
        warnings.len()
    );

    AssembleResult {
        success,
        bytes,
        start_address: parsed.start_address,
        errors,
        warnings,
        symbol_table: gen.symbols,
        instructions: gen.instructions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source_fails() {
        let result = assemble("");
        assert!(!result.success);
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn minimal_program_assembles() {
        let result = assemble("NOP\nHALT\n");
        assert!(result.success);
        assert_eq!(result.bytes, vec![0x00, 0x76]);
        assert_eq!(result.start_address, DEFAULT_ORG);
    }
}

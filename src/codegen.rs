//! Code generation: the authoritative third pass that assigns final
//! addresses, binds label symbols, and re-encodes any instruction whose
//! operand referenced a label that was still unresolved in pass 2.

use crate::ast::{IntermediateInstruction, Operand};
use crate::encoder;
use crate::errors::{AssemblyError, Diagnostic};
use crate::symbol::{get_symbol, Symbol, SymbolKind, SymbolTable};

pub struct CodegenOutput {
    pub instructions: Vec<IntermediateInstruction>,
    pub symbols: SymbolTable,
    pub diagnostics: Vec<Diagnostic>,
}

pub fn generate(
    mut instructions: Vec<IntermediateInstruction>,
    prelim_symbols: &SymbolTable,
    start_address: u16,
    origins: &[(usize, u16)],
) -> CodegenOutput {
    let mut symbols = prelim_symbols.clone();
    let mut diagnostics = Vec::new();
    let mut pc = start_address;
    let mut origins_iter = origins.iter().peekable();

    for (idx, instr) in instructions.iter_mut().enumerate() {
        while let Some((at, new_pc)) = origins_iter.peek() {
            if *at == idx {
                pc = *new_pc;
                origins_iter.next();
            } else {
                break;
            }
        }

        instr.set_address(pc);
        if let Some(name) = instr.label() {
            symbols.insert(name.to_string(), Symbol { address: pc, kind: SymbolKind::Label });
        }
        pc = pc.wrapping_add(instr.bytes().len() as u16);
    }

    for instr in instructions.iter_mut() {
        if !instr.has_label_ref() {
            continue;
        }
        let address = instr.address();
        let line = instr.line();
        if let IntermediateInstruction::Instruction { mnemonic, operands, .. } = instr {
            match resolve_operands(operands, &symbols, line) {
                Ok(resolved) => match encoder::encode_instruction(mnemonic, &resolved, address, line) {
                    Ok(bytes) => {
                        *operands = resolved;
                        instr.set_bytes(bytes);
                    }
                    Err(e) => diagnostics.push(Diagnostic::error(e)),
                },
                Err(e) => diagnostics.push(Diagnostic::error(e)),
            }
        }
    }

    CodegenOutput { instructions, symbols, diagnostics }
}

fn resolve_operands(
    operands: &[Operand],
    symbols: &SymbolTable,
    line: usize,
) -> Result<Vec<Operand>, AssemblyError> {
    operands
        .iter()
        .map(|op| match op {
            Operand::LabelRef(name) => {
                get_symbol(symbols, name, line, 0).map(|sym| Operand::Immediate(sym.address as i32))
            }
            Operand::IndirectLabelRef(name) => {
                get_symbol(symbols, name, line, 0).map(|sym| Operand::IndirectAddr(sym.address as i32))
            }
            other => Ok(other.clone()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::token::lex;

    #[test]
    fn resolves_forward_label_and_keeps_length() {
        let tokens = lex("JP TARGET\nTARGET: HALT\n");
        let parsed = parse(&tokens);
        let out = generate(parsed.instructions, &parsed.symbols, parsed.start_address, &parsed.origins);
        assert!(out.diagnostics.is_empty());
        match &out.instructions[0] {
            IntermediateInstruction::Instruction { bytes, operands, .. } => {
                assert_eq!(bytes.len(), 3);
                assert!(matches!(operands[0], Operand::Immediate(_)));
            }
            _ => panic!("expected instruction"),
        }
    }

    #[test]
    fn back_edge_relative_jump_resolves() {
        let tokens = lex("LOOP: NOP\nJR LOOP\n");
        let parsed = parse(&tokens);
        let out = generate(parsed.instructions, &parsed.symbols, parsed.start_address, &parsed.origins);
        assert!(out.diagnostics.is_empty());
        match &out.instructions[1] {
            IntermediateInstruction::Instruction { bytes, .. } => {
                assert_eq!(bytes, &vec![0x18, (-3i8) as u8]);
            }
            _ => panic!("expected instruction"),
        }
    }

    #[test]
    fn undefined_label_is_hard_error_after_full_resolution() {
        let tokens = lex("JP NOWHERE\n");
        let parsed = parse(&tokens);
        let out = generate(parsed.instructions, &parsed.symbols, parsed.start_address, &parsed.origins);
        assert!(out.diagnostics.iter().any(|d| d.message.contains("NOWHERE")));
    }
}

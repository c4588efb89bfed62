//! Operand and intermediate-instruction types shared by the parser,
//! encoder and code generator.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Condition {
    Nz,
    Z,
    Nc,
    C,
    Po,
    Pe,
    P,
    M,
}

impl Condition {
    pub fn from_name(name: &str) -> Option<Condition> {
        Some(match name {
            "NZ" => Condition::Nz,
            "Z" => Condition::Z,
            "NC" => Condition::Nc,
            "C" => Condition::C,
            "PO" => Condition::Po,
            "PE" => Condition::Pe,
            "P" => Condition::P,
            "M" => Condition::M,
            _ => return None,
        })
    }

    /// The 3-bit `cc` index, in the order NZ Z NC C PO PE P M.
    pub fn index(self) -> u8 {
        match self {
            Condition::Nz => 0,
            Condition::Z => 1,
            Condition::Nc => 2,
            Condition::C => 3,
            Condition::Po => 4,
            Condition::Pe => 5,
            Condition::P => 6,
            Condition::M => 7,
        }
    }
}

/// An operand as produced by the parser. Numeric expressions are already
/// fully reduced by the time they reach this type; only bare label
/// references are left unresolved, for the code generator to finish.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Register(String),
    Indirect(String),
    Immediate(i32),
    IndirectAddr(i32),
    LabelRef(String),
    /// A label reference written inside parentheses, e.g. `(RESULT)`.
    /// Resolves to `IndirectAddr` once the code generator fills in the
    /// address (see DESIGN.md).
    IndirectLabelRef(String),
    Condition(Condition),
}

/// One assembled unit of output: either raw data or an encoded instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum IntermediateInstruction {
    Data {
        address: u16,
        bytes: Vec<u8>,
        label: Option<String>,
        line: usize,
    },
    Instruction {
        address: u16,
        mnemonic: String,
        operands: Vec<Operand>,
        bytes: Vec<u8>,
        label: Option<String>,
        line: usize,
    },
}

impl IntermediateInstruction {
    pub fn address(&self) -> u16 {
        match self {
            IntermediateInstruction::Data { address, .. } => *address,
            IntermediateInstruction::Instruction { address, .. } => *address,
        }
    }

    pub fn line(&self) -> usize {
        match self {
            IntermediateInstruction::Data { line, .. } => *line,
            IntermediateInstruction::Instruction { line, .. } => *line,
        }
    }

    pub fn set_address(&mut self, new_address: u16) {
        match self {
            IntermediateInstruction::Data { address, .. } => *address = new_address,
            IntermediateInstruction::Instruction { address, .. } => *address = new_address,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        match self {
            IntermediateInstruction::Data { bytes, .. } => bytes,
            IntermediateInstruction::Instruction { bytes, .. } => bytes,
        }
    }

    pub fn set_bytes(&mut self, new_bytes: Vec<u8>) {
        match self {
            IntermediateInstruction::Data { bytes, .. } => *bytes = new_bytes,
            IntermediateInstruction::Instruction { bytes, .. } => *bytes = new_bytes,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            IntermediateInstruction::Data { label, .. } => label.as_deref(),
            IntermediateInstruction::Instruction { label, .. } => label.as_deref(),
        }
    }

    pub fn has_label_ref(&self) -> bool {
        match self {
            IntermediateInstruction::Data { .. } => false,
            IntermediateInstruction::Instruction { operands, .. } => operands.iter().any(|op| {
                matches!(op, Operand::LabelRef(_) | Operand::IndirectLabelRef(_))
            }),
        }
    }
}

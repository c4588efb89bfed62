//! Instruction sizing and byte encoding.

pub mod constants;
pub mod tables;

use crate::ast::{Condition, Operand};
use crate::errors::AssemblyError;
use constants::*;
use tables::*;

fn unsupported(mnemonic: &str, line: usize) -> AssemblyError {
    AssemblyError::UnsupportedInstructionPattern { mnemonic: mnemonic.to_string(), line }
}

fn le16(value: u16) -> (u8, u8) {
    (value as u8, (value >> 8) as u8)
}

fn operand_value(op: &Operand) -> Option<i32> {
    match op {
        Operand::Immediate(v) | Operand::IndirectAddr(v) => Some(*v),
        _ => None,
    }
}

/// Determines an instruction's encoded length from its mnemonic and operand
/// *shapes* alone, independent of operand values. Used by pass 1 to advance
/// the address counter without committing to a full encoding, and relied on
/// by the code generator's invariant that re-encoding a label reference
/// never changes an instruction's length.
pub fn calculate_instruction_size(mnemonic: &str, operands: &[Operand]) -> Option<usize> {
    use Operand::*;
    match mnemonic {
        "NOP" | "HALT" | "DI" | "EI" | "SCF" | "CCF" | "CPL" | "DAA" | "RLCA" | "RRCA" | "RLA"
        | "RRA" | "EXX" if operands.is_empty() =>
        {
            Some(1)
        }
        "RET" if operands.is_empty() => Some(1),
        "RET" => match operands {
            [Condition(_)] => Some(1),
            _ => None,
        },
        "RETI" | "RETN" | "NEG" | "LDI" | "LDD" | "LDIR" | "LDDR" if operands.is_empty() => {
            Some(2)
        }
        "EX" => match operands {
            [Register(a), Register(b)] if a == "DE" && b == "HL" => Some(1),
            [Register(a), Register(b)] if a == "AF" && b == "AF'" => Some(1),
            [Indirect(a), Register(b)] if a == "SP" && b == "HL" => Some(1),
            _ => None,
        },
        "JP" => match operands {
            [Indirect(r)] if r == "HL" => Some(1),
            [_] => Some(3),
            [Condition(_), _] => Some(3),
            _ => None,
        },
        "CALL" => match operands {
            [_] => Some(3),
            [Condition(_), _] => Some(3),
            _ => None,
        },
        "JR" => match operands {
            [_] => Some(2),
            [Condition(cc), _] if matches!(cc, Condition::Nz | Condition::Z | Condition::Nc | Condition::C) => {
                Some(2)
            }
            _ => None,
        },
        "DJNZ" => match operands {
            [_] => Some(2),
            _ => None,
        },
        "LD" => size_of_ld(operands),
        "ADD" | "ADC" | "SUB" | "SBC" | "AND" | "OR" | "XOR" | "CP" => size_of_alu(operands),
        "INC" | "DEC" => match operands {
            [Register(r)] if is_plain_reg(r) || is_pair_name(r) => Some(1),
            [Indirect(r)] if r == "HL" => Some(1),
            _ => None,
        },
        "PUSH" | "POP" => match operands {
            [Register(r)] if stack_pair_index(r).is_some() => Some(1),
            _ => None,
        },
        "RST" => match operands {
            [_] => Some(1),
            _ => None,
        },
        "RLC" | "RRC" | "RL" | "RR" | "SLA" | "SRA" | "SLL" | "SRL" => match operands {
            [Register(_)] | [Indirect(_)] => Some(2),
            _ => None,
        },
        "BIT" | "SET" | "RES" => match operands {
            [_, Register(_)] | [_, Indirect(_)] => Some(2),
            _ => None,
        },
        "IN" => match operands {
            [Register(a), IndirectAddr(_)] if a == "A" => Some(2),
            [Register(a), IndirectLabelRef(_)] if a == "A" => Some(2),
            _ => None,
        },
        "OUT" => match operands {
            [IndirectAddr(_), Register(a)] if a == "A" => Some(2),
            [IndirectLabelRef(_), Register(a)] if a == "A" => Some(2),
            _ => None,
        },
        _ => None,
    }
}

fn size_of_ld(operands: &[Operand]) -> Option<usize> {
    use Operand::*;
    match operands {
        [Register(d), Register(s)] if d == "SP" && s == "HL" => Some(1),
        [Register(d), Register(s)] if is_plain_reg(d) && is_plain_reg(s) => Some(1),
        [Register(d), Indirect(s)] if is_plain_reg(d) && s == "HL" => Some(1),
        [Indirect(d), Register(s)] if d == "HL" && is_plain_reg(s) => Some(1),
        [Register(d), Indirect(s)] if d == "A" && (s == "BC" || s == "DE") => Some(1),
        [Indirect(d), Register(s)] if (d == "BC" || d == "DE") && s == "A" => Some(1),

        [Register(d), Immediate(_)] if is_plain_reg(d) => Some(2),
        [Register(d), LabelRef(_)] if is_plain_reg(d) => Some(2),
        [Indirect(d), Immediate(_)] if d == "HL" => Some(2),
        [Indirect(d), LabelRef(_)] if d == "HL" => Some(2),

        [Register(d), Immediate(_)] if is_pair_name(d) => Some(3),
        [Register(d), LabelRef(_)] if is_pair_name(d) => Some(3),
        [Register(d), IndirectAddr(_)] if d == "HL" => Some(3),
        [Register(d), IndirectLabelRef(_)] if d == "HL" => Some(3),
        [Register(d), IndirectAddr(_)] if d == "A" => Some(3),
        [Register(d), IndirectLabelRef(_)] if d == "A" => Some(3),
        [IndirectAddr(_), Register(s)] if s == "A" => Some(3),
        [IndirectLabelRef(_), Register(s)] if s == "A" => Some(3),
        [IndirectAddr(_), Register(s)] if s == "HL" => Some(3),
        [IndirectLabelRef(_), Register(s)] if s == "HL" => Some(3),
        _ => None,
    }
}

fn size_of_alu(operands: &[Operand]) -> Option<usize> {
    use Operand::*;
    match operands {
        [Register(a), Register(r)] if a == "HL" && is_pair_name(r) => Some(1),
        [Register(a), Register(r)] if a == "A" && is_plain_reg(r) => Some(1),
        [Register(a), Indirect(r)] if a == "A" && r == "HL" => Some(1),
        [Register(r)] if is_plain_reg(r) => Some(1),
        [Indirect(r)] if r == "HL" => Some(1),
        [Register(a), Immediate(_)] if a == "A" => Some(2),
        [Register(a), LabelRef(_)] if a == "A" => Some(2),
        [Immediate(_)] => Some(2),
        [LabelRef(_)] => Some(2),
        _ => None,
    }
}

/// Encodes one instruction to its final bytes. Operands must already have
/// any `LabelRef`/`IndirectLabelRef` resolved to `Immediate`/`IndirectAddr`
/// by the caller — the code generator does this using the address table
/// available at the time of the call.
pub fn encode_instruction(
    mnemonic: &str,
    operands: &[Operand],
    pc: u16,
    line: usize,
) -> Result<Vec<u8>, AssemblyError> {
    use Operand::*;
    match mnemonic {
        "NOP" if operands.is_empty() => Ok(vec![NOP]),
        "HALT" if operands.is_empty() => Ok(vec![HALT]),
        "DI" if operands.is_empty() => Ok(vec![DI]),
        "EI" if operands.is_empty() => Ok(vec![EI]),
        "SCF" if operands.is_empty() => Ok(vec![SCF]),
        "CCF" if operands.is_empty() => Ok(vec![CCF]),
        "CPL" if operands.is_empty() => Ok(vec![CPL]),
        "DAA" if operands.is_empty() => Ok(vec![DAA]),
        "RLCA" if operands.is_empty() => Ok(vec![RLCA]),
        "RRCA" if operands.is_empty() => Ok(vec![RRCA]),
        "RLA" if operands.is_empty() => Ok(vec![RLA]),
        "RRA" if operands.is_empty() => Ok(vec![RRA]),
        "EXX" if operands.is_empty() => Ok(vec![EXX]),
        "RET" if operands.is_empty() => Ok(vec![RET]),
        "RET" => match operands {
            [Condition(cc)] => Ok(vec![RET_CC_BASE | (cc.index() << 3)]),
            _ => Err(unsupported(mnemonic, line)),
        },
        "RETI" if operands.is_empty() => Ok(vec![ED_PREFIX, RETI_OP]),
        "RETN" if operands.is_empty() => Ok(vec![ED_PREFIX, RETN_OP]),
        "NEG" if operands.is_empty() => Ok(vec![ED_PREFIX, NEG_OP]),
        "LDI" if operands.is_empty() => Ok(vec![ED_PREFIX, LDI_OP]),
        "LDD" if operands.is_empty() => Ok(vec![ED_PREFIX, LDD_OP]),
        "LDIR" if operands.is_empty() => Ok(vec![ED_PREFIX, LDIR_OP]),
        "LDDR" if operands.is_empty() => Ok(vec![ED_PREFIX, LDDR_OP]),

        "EX" => match operands {
            [Register(a), Register(b)] if a == "DE" && b == "HL" => Ok(vec![EX_DE_HL]),
            [Register(a), Register(b)] if a == "AF" && b == "AF'" => Ok(vec![EX_AF_AF]),
            [Indirect(a), Register(b)] if a == "SP" && b == "HL" => Ok(vec![EX_SP_HL_IND]),
            _ => Err(unsupported(mnemonic, line)),
        },

        "JP" => match operands {
            [Indirect(r)] if r == "HL" => Ok(vec![JP_HL_IND]),
            [target] => {
                let addr = operand_value(target).ok_or_else(|| unsupported(mnemonic, line))? as u16;
                let (lo, hi) = le16(addr);
                Ok(vec![JP_NN, lo, hi])
            }
            [Condition(cc), target] => {
                let addr = operand_value(target).ok_or_else(|| unsupported(mnemonic, line))? as u16;
                let (lo, hi) = le16(addr);
                Ok(vec![JP_CC_BASE | (cc.index() << 3), lo, hi])
            }
            _ => Err(unsupported(mnemonic, line)),
        },

        "CALL" => match operands {
            [target] => {
                let addr = operand_value(target).ok_or_else(|| unsupported(mnemonic, line))? as u16;
                let (lo, hi) = le16(addr);
                Ok(vec![CALL_NN, lo, hi])
            }
            [Condition(cc), target] => {
                let addr = operand_value(target).ok_or_else(|| unsupported(mnemonic, line))? as u16;
                let (lo, hi) = le16(addr);
                Ok(vec![CALL_CC_BASE | (cc.index() << 3), lo, hi])
            }
            _ => Err(unsupported(mnemonic, line)),
        },

        "JR" => match operands {
            [target] => {
                let addr = operand_value(target).ok_or_else(|| unsupported(mnemonic, line))? as u16;
                Ok(vec![JR_E, relative_offset(addr, pc, line)?])
            }
            [Condition(cc), target] => {
                let idx = match cc {
                    Condition::Nz => 0,
                    Condition::Z => 1,
                    Condition::Nc => 2,
                    Condition::C => 3,
                    _ => return Err(unsupported(mnemonic, line)),
                };
                let addr = operand_value(target).ok_or_else(|| unsupported(mnemonic, line))? as u16;
                Ok(vec![JR_CC_BASE | (idx * 8), relative_offset(addr, pc, line)?])
            }
            _ => Err(unsupported(mnemonic, line)),
        },

        "DJNZ" => match operands {
            [target] => {
                let addr = operand_value(target).ok_or_else(|| unsupported(mnemonic, line))? as u16;
                Ok(vec![DJNZ, relative_offset(addr, pc, line)?])
            }
            _ => Err(unsupported(mnemonic, line)),
        },

        "LD" => encode_ld(operands, mnemonic, line),
        "ADD" | "ADC" | "SUB" | "SBC" | "AND" | "OR" | "XOR" | "CP" => {
            encode_alu(mnemonic, operands, line)
        }
        "INC" => encode_inc_dec(true, operands, mnemonic, line),
        "DEC" => encode_inc_dec(false, operands, mnemonic, line),
        "PUSH" => encode_push_pop(true, operands, mnemonic, line),
        "POP" => encode_push_pop(false, operands, mnemonic, line),
        "RST" => encode_rst(operands, line),
        "RLC" | "RRC" | "RL" | "RR" | "SLA" | "SRA" | "SLL" | "SRL" => {
            encode_cb_rotate(mnemonic, operands, line)
        }
        "BIT" | "SET" | "RES" => encode_cb_bit(mnemonic, operands, line),
        "IN" => encode_in(operands, mnemonic, line),
        "OUT" => encode_out(operands, mnemonic, line),
        _ => Err(unsupported(mnemonic, line)),
    }
}

fn relative_offset(target: u16, instr_addr: u16, line: usize) -> Result<u8, AssemblyError> {
    let next = instr_addr.wrapping_add(2) as i32;
    let diff = target as i32 - next;
    if !(-128..=127).contains(&diff) {
        return Err(AssemblyError::RelativeJumpOutOfRange { offset: diff, line });
    }
    Ok(diff as i8 as u8)
}

fn encode_ld(operands: &[Operand], mnemonic: &str, line: usize) -> Result<Vec<u8>, AssemblyError> {
    use Operand::*;
    match operands {
        [Register(d), Register(s)] if d == "SP" && s == "HL" => Ok(vec![LD_SP_HL]),
        [Register(d), Register(s)] if is_plain_reg(d) && is_plain_reg(s) => {
            let (di, si) = (reg_index(d).unwrap(), reg_index(s).unwrap());
            Ok(vec![LD_R_R_BASE | (di << 3) | si])
        }
        [Register(d), Indirect(s)] if is_plain_reg(d) && s == "HL" => {
            let di = reg_index(d).unwrap();
            Ok(vec![LD_R_R_BASE | (di << 3) | 6])
        }
        [Indirect(d), Register(s)] if d == "HL" && is_plain_reg(s) => {
            let si = reg_index(s).unwrap();
            Ok(vec![LD_R_R_BASE | (6 << 3) | si])
        }
        [Register(d), Indirect(s)] if d == "A" && s == "BC" => Ok(vec![LD_A_BC_IND]),
        [Register(d), Indirect(s)] if d == "A" && s == "DE" => Ok(vec![LD_A_DE_IND]),
        [Indirect(d), Register(s)] if d == "BC" && s == "A" => Ok(vec![LD_BC_IND_A]),
        [Indirect(d), Register(s)] if d == "DE" && s == "A" => Ok(vec![LD_DE_IND_A]),

        [Register(d), rhs] if is_plain_reg(d) && matches!(rhs, Immediate(_) | LabelRef(_)) => {
            let n = operand_value_or_zero(rhs) as u8;
            Ok(vec![LD_R_N_BASE | (reg_index(d).unwrap() << 3), n])
        }
        [Indirect(d), rhs] if d == "HL" && matches!(rhs, Immediate(_) | LabelRef(_)) => {
            let n = operand_value_or_zero(rhs) as u8;
            Ok(vec![LD_HL_IND_N, n])
        }

        [Register(d), rhs] if is_pair_name(d) && matches!(rhs, Immediate(_) | LabelRef(_)) => {
            let nn = operand_value_or_zero(rhs) as u16;
            let (lo, hi) = le16(nn);
            Ok(vec![LD_RR_NN_BASE | (pair_index(d).unwrap() << 4), lo, hi])
        }
        [Register(d), rhs] if d == "HL" && matches!(rhs, IndirectAddr(_) | IndirectLabelRef(_)) => {
            let nn = operand_value_or_zero(rhs) as u16;
            let (lo, hi) = le16(nn);
            Ok(vec![LD_HL_NN, lo, hi])
        }
        [Register(d), rhs] if d == "A" && matches!(rhs, IndirectAddr(_) | IndirectLabelRef(_)) => {
            let nn = operand_value_or_zero(rhs) as u16;
            let (lo, hi) = le16(nn);
            Ok(vec![LD_A_NN, lo, hi])
        }
        [lhs, Register(s)] if s == "A" && matches!(lhs, IndirectAddr(_) | IndirectLabelRef(_)) => {
            let nn = operand_value_or_zero(lhs) as u16;
            let (lo, hi) = le16(nn);
            Ok(vec![LD_NN_A, lo, hi])
        }
        [lhs, Register(s)] if s == "HL" && matches!(lhs, IndirectAddr(_) | IndirectLabelRef(_)) => {
            let nn = operand_value_or_zero(lhs) as u16;
            let (lo, hi) = le16(nn);
            Ok(vec![LD_NN_HL, lo, hi])
        }
        _ => Err(unsupported(mnemonic, line)),
    }
}

fn operand_value_or_zero(op: &Operand) -> i32 {
    operand_value(op).unwrap_or(0)
}

fn encode_alu(mnemonic: &str, operands: &[Operand], line: usize) -> Result<Vec<u8>, AssemblyError> {
    use Operand::*;
    let base_r = match mnemonic {
        "ADD" => ADD_BASE,
        "ADC" => ADC_BASE,
        "SUB" => SUB_BASE,
        "SBC" => SBC_BASE,
        "AND" => AND_BASE,
        "XOR" => XOR_BASE,
        "OR" => OR_BASE,
        "CP" => CP_BASE,
        _ => unreachable!(),
    };
    let base_imm = match mnemonic {
        "ADD" => ADD_IMM,
        "ADC" => ADC_IMM,
        "SUB" => SUB_IMM,
        "SBC" => SBC_IMM,
        "AND" => AND_IMM,
        "XOR" => XOR_IMM,
        "OR" => OR_IMM,
        "CP" => CP_IMM,
        _ => unreachable!(),
    };
    match operands {
        [Register(a), Register(r)] if a == "HL" && mnemonic == "ADD" && is_pair_name(r) => {
            Ok(vec![ADD_HL_RR_BASE | (pair_index(r).unwrap() << 4)])
        }
        [Register(a), rhs] if a == "A" && reg_or_indirect_hl_index(rhs).is_some() => {
            Ok(vec![base_r | reg_or_indirect_hl_index(rhs).unwrap()])
        }
        [rhs] if reg_or_indirect_hl_index(rhs).is_some() => {
            Ok(vec![base_r | reg_or_indirect_hl_index(rhs).unwrap()])
        }
        [Register(a), rhs] if a == "A" && matches!(rhs, Immediate(_) | LabelRef(_)) => {
            Ok(vec![base_imm, operand_value_or_zero(rhs) as u8])
        }
        [rhs] if matches!(rhs, Immediate(_) | LabelRef(_)) => {
            Ok(vec![base_imm, operand_value_or_zero(rhs) as u8])
        }
        _ => Err(unsupported(mnemonic, line)),
    }
}

fn encode_inc_dec(
    is_inc: bool,
    operands: &[Operand],
    mnemonic: &str,
    line: usize,
) -> Result<Vec<u8>, AssemblyError> {
    use Operand::*;
    match operands {
        [Register(r)] if is_pair_name(r) => {
            let base = if is_inc { INC_RR_BASE } else { DEC_RR_BASE };
            Ok(vec![base | (pair_index(r).unwrap() << 4)])
        }
        [op] if reg_or_indirect_hl_index(op).is_some() => {
            let base = if is_inc { INC_R_BASE } else { DEC_R_BASE };
            Ok(vec![base | (reg_or_indirect_hl_index(op).unwrap() << 3)])
        }
        _ => Err(unsupported(mnemonic, line)),
    }
}

fn encode_push_pop(
    is_push: bool,
    operands: &[Operand],
    mnemonic: &str,
    line: usize,
) -> Result<Vec<u8>, AssemblyError> {
    use Operand::*;
    match operands {
        [Register(r)] if stack_pair_index(r).is_some() => {
            let base = if is_push { PUSH_BASE } else { POP_BASE };
            Ok(vec![base | (stack_pair_index(r).unwrap() << 4)])
        }
        _ => Err(unsupported(mnemonic, line)),
    }
}

fn encode_rst(operands: &[Operand], line: usize) -> Result<Vec<u8>, AssemblyError> {
    use Operand::*;
    match operands {
        [op] => {
            let value = operand_value_or_zero(op);
            if !(0..=0x38).contains(&value) || value % 8 != 0 {
                return Err(AssemblyError::InvalidRstAddress { value, line });
            }
            Ok(vec![RST_BASE | ((value as u8) & 0x38)])
        }
        _ => Err(unsupported("RST", line)),
    }
}

fn encode_cb_rotate(mnemonic: &str, operands: &[Operand], line: usize) -> Result<Vec<u8>, AssemblyError> {
    let base = match mnemonic {
        "RLC" => CB_RLC_BASE,
        "RRC" => CB_RRC_BASE,
        "RL" => CB_RL_BASE,
        "RR" => CB_RR_BASE,
        "SLA" => CB_SLA_BASE,
        "SRA" => CB_SRA_BASE,
        "SLL" => CB_SLL_BASE,
        "SRL" => CB_SRL_BASE,
        _ => unreachable!(),
    };
    match operands {
        [op] if reg_or_indirect_hl_index(op).is_some() => {
            Ok(vec![CB_PREFIX, base | reg_or_indirect_hl_index(op).unwrap()])
        }
        _ => Err(unsupported(mnemonic, line)),
    }
}

fn encode_cb_bit(mnemonic: &str, operands: &[Operand], line: usize) -> Result<Vec<u8>, AssemblyError> {
    let base = match mnemonic {
        "BIT" => CB_BIT_BASE,
        "RES" => CB_RES_BASE,
        "SET" => CB_SET_BASE,
        _ => unreachable!(),
    };
    match operands {
        [bit_op, reg_op] if reg_or_indirect_hl_index(reg_op).is_some() => {
            let bit = operand_value_or_zero(bit_op);
            if !(0..=7).contains(&bit) {
                return Err(AssemblyError::SyntaxError {
                    line,
                    column: 1,
                    reason: format!("bit index {} out of range 0..7", bit),
                });
            }
            Ok(vec![CB_PREFIX, base | ((bit as u8) << 3) | reg_or_indirect_hl_index(reg_op).unwrap()])
        }
        _ => Err(unsupported(mnemonic, line)),
    }
}

fn encode_in(operands: &[Operand], mnemonic: &str, line: usize) -> Result<Vec<u8>, AssemblyError> {
    use Operand::*;
    match operands {
        [Register(a), port] if a == "A" && matches!(port, IndirectAddr(_) | IndirectLabelRef(_)) => {
            Ok(vec![IN_A_N, operand_value_or_zero(port) as u8])
        }
        _ => Err(unsupported(mnemonic, line)),
    }
}

fn encode_out(operands: &[Operand], mnemonic: &str, line: usize) -> Result<Vec<u8>, AssemblyError> {
    use Operand::*;
    match operands {
        [port, Register(a)] if a == "A" && matches!(port, IndirectAddr(_) | IndirectLabelRef(_)) => {
            Ok(vec![OUT_N_A, operand_value_or_zero(port) as u8])
        }
        _ => Err(unsupported(mnemonic, line)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_ld_forms() {
        assert_eq!(
            calculate_instruction_size("LD", &[Operand::Register("A".into()), Operand::Register("B".into())]),
            Some(1)
        );
        assert_eq!(
            calculate_instruction_size("LD", &[Operand::Register("A".into()), Operand::Immediate(5)]),
            Some(2)
        );
        assert_eq!(
            calculate_instruction_size("LD", &[Operand::Register("HL".into()), Operand::LabelRef("X".into())]),
            Some(3)
        );
    }

    #[test]
    fn encodes_nop_and_halt() {
        assert_eq!(encode_instruction("NOP", &[], 0, 1).unwrap(), vec![0x00]);
        assert_eq!(encode_instruction("HALT", &[], 0, 1).unwrap(), vec![0x76]);
    }

    #[test]
    fn encodes_ld_r_r() {
        let ops = [Operand::Register("B".into()), Operand::Register("C".into())];
        assert_eq!(encode_instruction("LD", &ops, 0, 1).unwrap(), vec![0x41]);
    }

    #[test]
    fn encodes_ld_rr_nn() {
        let ops = [Operand::Register("HL".into()), Operand::Immediate(0x1234)];
        assert_eq!(encode_instruction("LD", &ops, 0, 1).unwrap(), vec![0x21, 0x34, 0x12]);
    }

    #[test]
    fn encodes_jr_relative_forward() {
        let ops = [Operand::Immediate(0x4205)];
        assert_eq!(encode_instruction("JR", &ops, 0x4200, 1).unwrap(), vec![0x18, 0x03]);
    }

    #[test]
    fn jr_out_of_range_errors() {
        let ops = [Operand::Immediate(0x4400)];
        assert!(matches!(
            encode_instruction("JR", &ops, 0x4200, 1),
            Err(AssemblyError::RelativeJumpOutOfRange { .. })
        ));
    }

    #[test]
    fn rst_rejects_non_multiple_of_eight() {
        let ops = [Operand::Immediate(3)];
        assert!(matches!(
            encode_rst(&ops, 1),
            Err(AssemblyError::InvalidRstAddress { .. })
        ));
    }

    #[test]
    fn encodes_rst_38() {
        let ops = [Operand::Immediate(0x38)];
        assert_eq!(encode_instruction("RST", &ops, 0, 1).unwrap(), vec![0xFF]);
    }

    #[test]
    fn encodes_cb_bit() {
        let ops = [Operand::Immediate(3), Operand::Register("B".into())];
        assert_eq!(encode_instruction("BIT", &ops, 0, 1).unwrap(), vec![0xCB, 0x58]);
    }
}

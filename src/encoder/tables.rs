//! Register / register-pair / stack-pair index tables.

use crate::ast::Operand;

/// The 3-bit `r` index: B C D E H L (HL) A = 0..7. `(HL)` is excluded here
/// since it is represented as `Operand::Indirect`, not `Operand::Register`;
/// see [`reg_or_indirect_hl_index`].
pub fn reg_index(name: &str) -> Option<u8> {
    match name {
        "B" => Some(0),
        "C" => Some(1),
        "D" => Some(2),
        "E" => Some(3),
        "H" => Some(4),
        "L" => Some(5),
        "A" => Some(7),
        _ => None,
    }
}

/// Resolves an operand that is either a plain 8-bit register or the
/// indirect-HL form to its shared `r` index.
pub fn reg_or_indirect_hl_index(operand: &Operand) -> Option<u8> {
    match operand {
        Operand::Register(name) => reg_index(name),
        Operand::Indirect(name) if name == "HL" => Some(6),
        _ => None,
    }
}

/// True for the single-letter 8-bit registers only (not index registers).
pub fn is_plain_reg(name: &str) -> bool {
    reg_index(name).is_some()
}

/// The 2-bit `p` index: BC DE HL SP = 0..3.
pub fn pair_index(name: &str) -> Option<u8> {
    match name {
        "BC" => Some(0),
        "DE" => Some(1),
        "HL" => Some(2),
        "SP" => Some(3),
        _ => None,
    }
}

/// True for the four register-pair names used by `LD rr,nn`/`INC rr`/`DEC
/// rr`/`ADD HL,rr`.
pub fn is_pair_name(name: &str) -> bool {
    pair_index(name).is_some()
}

/// The 2-bit `q` index: BC DE HL AF = 0..3 (`AF` replaces `SP`).
pub fn stack_pair_index(name: &str) -> Option<u8> {
    match name {
        "BC" => Some(0),
        "DE" => Some(1),
        "HL" => Some(2),
        "AF" => Some(3),
        _ => None,
    }
}

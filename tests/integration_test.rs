//! End-to-end assembly scenarios, driving the crate purely through
//! `zasm::assemble` on inline source strings.

use zasm::SymbolKind;

#[test]
fn minimal_program() {
    let result = zasm::assemble(".ORG $4200\nSTART: NOP\nHALT\n.END\n");
    assert!(result.success, "{:?}", result.errors);
    assert_eq!(result.bytes, vec![0x00, 0x76]);
    assert_eq!(result.start_address, 0x4200);
    let start = result.symbol_table.get("START").unwrap();
    assert_eq!(start.address, 0x4200);
    assert_eq!(start.kind, SymbolKind::Label);
}

#[test]
fn label_immediately_before_org_is_still_bound() {
    let result = zasm::assemble("START: .ORG $5000\nNOP\n");
    assert!(result.success, "{:?}", result.errors);
    let start = result.symbol_table.get("START").unwrap();
    assert_eq!(start.address, zasm::DEFAULT_ORG);
    assert_eq!(result.bytes, vec![0x00]);
}

#[test]
fn add_two_plus_two_with_forward_data_label() {
    let src = "\
.ORG $4200
START: LD A,2
LD B,2
ADD A,B
LD (RESULT),A
HALT
RESULT: .DB 0
.END
";
    let result = zasm::assemble(src);
    assert!(result.success, "{:?}", result.errors);
    assert_eq!(
        result.bytes,
        vec![0x3E, 0x02, 0x06, 0x02, 0x80, 0x32, 0x09, 0x42, 0x76, 0x00]
    );
    assert_eq!(result.symbol_table.get("START").unwrap().address, 0x4200);
    assert_eq!(result.symbol_table.get("RESULT").unwrap().address, 0x4209);
}

#[test]
fn block_fill_with_jr_back_edge() {
    let src = "\
.ORG $4200
LD HL,$3C00
LD BC,$0400
FILL: LD (HL),$BF
INC HL
DEC BC
LD A,B
OR C
JR NZ,FILL
HALT
.END
";
    let result = zasm::assemble(src);
    assert!(result.success, "{:?}", result.errors);
    assert_eq!(
        result.bytes,
        vec![0x21, 0x00, 0x3C, 0x01, 0x00, 0x04, 0x36, 0xBF, 0x23, 0x0B, 0x78, 0xB1, 0x20, 0xF8, 0x76]
    );
    assert_eq!(result.symbol_table.get("FILL").unwrap().address, 0x4206);
}

#[test]
fn equ_forward_reference_is_rejected() {
    let src = "X: .EQU Y+1\nY: .EQU 5\n";
    let result = zasm::assemble(src);
    assert!(!result.success);
    assert!(result.errors.iter().any(|d| d.message.contains("Y")));
}

#[test]
fn expression_with_program_counter() {
    let src = ".ORG $4200\nLD HL,$+3\nHALT\n";
    let result = zasm::assemble(src);
    assert!(result.success, "{:?}", result.errors);
    assert_eq!(result.bytes, vec![0x21, 0x03, 0x42, 0x76]);
}

#[test]
fn pc_relative_out_of_range_errors() {
    let mut src = String::from(".ORG $4200\nJR FAR\n");
    for _ in 0..200 {
        src.push_str("NOP\n");
    }
    src.push_str("FAR: HALT\n");
    let result = zasm::assemble(&src);
    assert!(!result.success);
    assert!(result
        .errors
        .iter()
        .any(|d| d.message.to_lowercase().contains("relative jump")));
}

#[test]
fn empty_source_reports_empty_source_error() {
    let result = zasm::assemble("");
    assert!(!result.success);
    assert_eq!(result.errors.len(), 1);
}

#[test]
fn rst_rejects_addresses_not_a_multiple_of_eight() {
    let result = zasm::assemble("RST 3\n");
    assert!(!result.success);
    assert!(result
        .errors
        .iter()
        .any(|d| d.message.to_lowercase().contains("rst")));
}

#[test]
fn rst_accepts_every_valid_vector() {
    for addr in [0, 8, 0x10, 0x18, 0x20, 0x28, 0x30, 0x38] {
        let src = format!("RST {addr}\n");
        let result = zasm::assemble(&src);
        assert!(result.success, "RST {addr:#x}: {:?}", result.errors);
    }
}

#[test]
fn jr_boundary_offsets_127_and_negative_128_encode() {
    // Forward: target = instr_addr + 2 + 127.
    let src = ".ORG $4200\nJR FAR\n";
    let mut src = String::from(src);
    for _ in 0..127 {
        src.push_str("NOP\n");
    }
    src.push_str("FAR: HALT\n");
    let result = zasm::assemble(&src);
    assert!(result.success, "{:?}", result.errors);
    assert_eq!(&result.bytes[0..2], &[0x18, 0x7F]);

    // Backward: target = instr_addr + 2 - 128.
    let mut src = String::from(".ORG $4200\nBACK: HALT\n");
    for _ in 0..125 {
        src.push_str("NOP\n");
    }
    src.push_str("JR BACK\n");
    let result = zasm::assemble(&src);
    assert!(result.success, "{:?}", result.errors);
    assert_eq!(result.bytes[result.bytes.len() - 2..], [0x18, 0x80]);
}

#[test]
fn jr_boundary_offsets_128_and_negative_129_error() {
    let mut src = String::from(".ORG $4200\nJR FAR\n");
    for _ in 0..128 {
        src.push_str("NOP\n");
    }
    src.push_str("FAR: HALT\n");
    let result = zasm::assemble(&src);
    assert!(!result.success);
    assert!(result
        .errors
        .iter()
        .any(|d| d.message.to_lowercase().contains("relative jump")));
}

#[test]
fn conditional_jumps_and_calls_round_trip() {
    let src = "\
.ORG $4200
START: CP 0
JP Z,DONE
CALL NZ,START
DONE: RET
.END
";
    let result = zasm::assemble(src);
    assert!(result.success, "{:?}", result.errors);
}

#[test]
fn undefined_symbol_in_instruction_is_reported() {
    let result = zasm::assemble("JP NOWHERE\n.END\n");
    assert!(!result.success);
    assert!(result.errors[0].message.contains("NOWHERE"));
}

#[test]
fn redefinition_of_a_label_is_a_warning_not_an_error() {
    let src = "FOO: NOP\nFOO: HALT\n";
    let result = zasm::assemble(src);
    assert!(result.success, "{:?}", result.errors);
    assert!(!result.warnings.is_empty());
}

#[test]
fn bit_set_res_and_cb_rotates() {
    let src = "\
.ORG $4200
BIT 0,A
SET 7,(HL)
RES 3,B
RLC C
SRL (HL)
.END
";
    let result = zasm::assemble(src);
    assert!(result.success, "{:?}", result.errors);
    assert_eq!(result.bytes[0], 0xCB);
}

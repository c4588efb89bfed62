//! Two-pass parsing: pass 1 sizes statements and binds `.EQU`/`.DEFL`/label
//! symbols; pass 2 walks the same statements again to emit the
//! intermediate instruction list, evaluating composite expressions eagerly
//! and deferring bare label references for the code generator.

pub mod sizer;

use crate::ast::{Condition, IntermediateInstruction, Operand};
use crate::encoder;
use crate::errors::{AssemblyError, Diagnostic};
use crate::evaluator::{evaluate, scan_expr_end};
use crate::symbol::{bind_symbol, Symbol, SymbolKind, SymbolTable};
use crate::token::{Token, TokenKind};
use crate::DEFAULT_ORG;

pub struct ParseOutput {
    pub instructions: Vec<IntermediateInstruction>,
    pub symbols: SymbolTable,
    pub diagnostics: Vec<Diagnostic>,
    pub start_address: u16,
    /// `(instruction index, new pc)` pairs: before processing the
    /// instruction at that index, the code generator's address counter is
    /// reset to `new pc`. Lets `.ORG` redirect addressing without the
    /// intermediate instruction list itself needing an origin variant.
    pub origins: Vec<(usize, u16)>,
}

pub fn parse(tokens: &[Token]) -> ParseOutput {
    let (prelim_symbols, mut diagnostics) = pass1(tokens);
    let pass2_result = pass2(tokens, &prelim_symbols);
    diagnostics.extend(pass2_result.diagnostics);
    ParseOutput {
        instructions: pass2_result.instructions,
        symbols: prelim_symbols,
        diagnostics,
        start_address: pass2_result.start_address,
        origins: pass2_result.origins,
    }
}

fn skip_to_newline(tokens: &[Token], mut pos: usize) -> usize {
    while !matches!(tokens.get(pos).map(|t| &t.kind), None | Some(TokenKind::Newline) | Some(TokenKind::Eof)) {
        pos += 1;
    }
    pos
}

fn is_eof(tokens: &[Token], pos: usize) -> bool {
    matches!(tokens.get(pos).map(|t| &t.kind), None | Some(TokenKind::Eof))
}

/// Peeks the label-prefix shape of a statement starting at `pos`:
/// `Label :`, a bare `Label` before a directive, a bare `Label` before
/// anything else (a syntax error), or no label at all.
enum LabelPrefix {
    Colon(String, usize),
    BareBeforeDirective(String, usize),
    BareInvalid(String, usize),
    None,
}

fn peek_label_prefix(tokens: &[Token], pos: usize) -> LabelPrefix {
    if let Some(Token { kind: TokenKind::Label(name), .. }) = tokens.get(pos) {
        match tokens.get(pos + 1).map(|t| &t.kind) {
            Some(TokenKind::Colon) => LabelPrefix::Colon(name.clone(), pos + 2),
            Some(TokenKind::Directive(_)) => LabelPrefix::BareBeforeDirective(name.clone(), pos + 1),
            _ => LabelPrefix::BareInvalid(name.clone(), pos + 1),
        }
    } else {
        LabelPrefix::None
    }
}

// ---------------------------------------------------------------------
// Pass 1: symbol table construction + sizing.
// ---------------------------------------------------------------------

fn pass1(tokens: &[Token]) -> (SymbolTable, Vec<Diagnostic>) {
    let mut symbols = SymbolTable::new();
    let mut diagnostics = Vec::new();
    let mut pc: u16 = DEFAULT_ORG;
    let mut pos = 0usize;

    while !is_eof(tokens, pos) {
        if matches!(tokens[pos].kind, TokenKind::Newline) {
            pos += 1;
            continue;
        }
        if matches!(tokens[pos].kind, TokenKind::Error(_)) {
            pos += 1;
            continue;
        }

        let mut label: Option<String> = None;
        match peek_label_prefix(tokens, pos) {
            LabelPrefix::Colon(name, next) => {
                label = Some(name);
                pos = next;
            }
            LabelPrefix::BareBeforeDirective(name, next) => {
                // Only .EQU/.DEFL consume the label themselves; other
                // directives bind it as a plain address label.
                if let Some(Token { kind: TokenKind::Directive(dir), line, .. }) = tokens.get(next) {
                    if dir == "EQU" || dir == "DEFL" {
                        let is_defl = dir == "DEFL";
                        let line = *line;
                        let expr_start = next + 1;
                        let expr_end = scan_expr_end(tokens, expr_start);
                        match evaluate(&tokens[expr_start..expr_end], &symbols, pc, false, line, 1) {
                            Ok(value) => {
                                let kind = if is_defl { SymbolKind::Defl } else { SymbolKind::Equ };
                                if let Some(msg) = bind_symbol(
                                    &mut symbols,
                                    name,
                                    Symbol { address: value as u16, kind },
                                ) {
                                    diagnostics.push(Diagnostic::warning(line, msg));
                                }
                            }
                            Err(e) => diagnostics.push(Diagnostic::error(e)),
                        }
                        pos = skip_to_newline(tokens, expr_end);
                        continue;
                    }
                }
                label = Some(name);
                pos = next;
            }
            LabelPrefix::BareInvalid(name, next) => {
                let line = tokens[pos].line;
                diagnostics.push(Diagnostic::error(AssemblyError::SyntaxError {
                    line,
                    column: tokens[pos].column,
                    reason: format!("label '{}' must be followed by ':' or a directive", name),
                }));
                pos = skip_to_newline(tokens, next);
                continue;
            }
            LabelPrefix::None => {}
        }

        if is_eof(tokens, pos) || matches!(tokens[pos].kind, TokenKind::Newline) {
            // A label with nothing else on the line binds at the current pc.
            if let Some(name) = label {
                bind_symbol(&mut symbols, name, Symbol { address: pc, kind: SymbolKind::Label });
            }
            continue;
        }

        match &tokens[pos].kind {
            TokenKind::Directive(dir) => {
                let dir = dir.clone();
                let line = tokens[pos].line;
                pos += 1;
                match dir.as_str() {
                    "ORG" => {
                        if let Some(name) = &label {
                            bind_symbol(&mut symbols, name.clone(), Symbol { address: pc, kind: SymbolKind::Label });
                        }
                        let end = scan_expr_end(tokens, pos);
                        let target = evaluate(&tokens[pos..end], &symbols, pc, true, line, 1).unwrap_or(0);
                        pc = target as u16;
                        pos = end;
                    }
                    "DB" => {
                        if let Some(name) = &label {
                            bind_symbol(&mut symbols, name.clone(), Symbol { address: pc, kind: SymbolKind::Label });
                        }
                        let (count, end) = sizer::db_byte_count(tokens, pos);
                        pc = pc.wrapping_add(count as u16);
                        pos = end;
                    }
                    "DW" => {
                        if let Some(name) = &label {
                            bind_symbol(&mut symbols, name.clone(), Symbol { address: pc, kind: SymbolKind::Label });
                        }
                        let (count, end) = sizer::count_operands(tokens, pos);
                        pc = pc.wrapping_add((count * 2) as u16);
                        pos = end;
                    }
                    "DS" => {
                        if let Some(name) = &label {
                            bind_symbol(&mut symbols, name.clone(), Symbol { address: pc, kind: SymbolKind::Label });
                        }
                        let end = scan_expr_end(tokens, pos);
                        let n = evaluate(&tokens[pos..end], &symbols, pc, true, line, 1).unwrap_or(0);
                        pc = pc.wrapping_add(n.max(0) as u16);
                        pos = end;
                    }
                    "END" => {
                        if let Some(name) = &label {
                            bind_symbol(&mut symbols, name.clone(), Symbol { address: pc, kind: SymbolKind::Label });
                        }
                        break;
                    }
                    _ => {
                        // EQU/DEFL without a preceding label: malformed,
                        // silently skipped in pass 1 (pass 2 reports it).
                        pos = skip_to_newline(tokens, pos);
                    }
                }
            }
            TokenKind::Mnemonic(m) => {
                let mnemonic = m.clone();
                if let Some(name) = &label {
                    bind_symbol(&mut symbols, name.clone(), Symbol { address: pc, kind: SymbolKind::Label });
                }
                let opnd_start = pos + 1;
                let operands = parse_operand_list_tolerant(tokens, opnd_start, &symbols, pc);
                let size = operands
                    .ok()
                    .and_then(|ops| encoder::calculate_instruction_size(&mnemonic, &ops))
                    .unwrap_or(1);
                pc = pc.wrapping_add(size as u16);
                pos = skip_to_newline(tokens, opnd_start);
            }
            _ => {
                pos = skip_to_newline(tokens, pos);
            }
        }
    }

    (symbols, diagnostics)
}

/// Parses an operand list purely to learn its shape, tolerating undefined
/// forward references (never diagnostic in pass 1). The end position is
/// discarded: pass 1 always resynchronizes to the next newline regardless
/// of how far operand parsing got.
fn parse_operand_list_tolerant(
    tokens: &[Token],
    pos: usize,
    symbols: &SymbolTable,
    pc: u16,
) -> Result<Vec<Operand>, AssemblyError> {
    parse_operand_list(tokens, pos, symbols, pc, true).map(|(ops, _)| ops)
}

// ---------------------------------------------------------------------
// Pass 2: intermediate instruction emission.
// ---------------------------------------------------------------------

struct Pass2Result {
    instructions: Vec<IntermediateInstruction>,
    diagnostics: Vec<Diagnostic>,
    start_address: u16,
    origins: Vec<(usize, u16)>,
}

fn pass2(tokens: &[Token], prelim: &SymbolTable) -> Pass2Result {
    let mut instructions = Vec::new();
    let mut diagnostics = Vec::new();
    let mut origins = Vec::new();
    let mut pc: u16 = DEFAULT_ORG;
    let mut start_address: Option<u16> = None;
    let mut pos = 0usize;

    while !is_eof(tokens, pos) {
        if matches!(tokens[pos].kind, TokenKind::Newline) {
            pos += 1;
            continue;
        }
        if let TokenKind::Error(ch) = tokens[pos].kind {
            diagnostics.push(Diagnostic::error(AssemblyError::UnexpectedCharacter {
                ch,
                line: tokens[pos].line,
                column: tokens[pos].column,
            }));
            pos += 1;
            continue;
        }

        let mut label: Option<String> = None;
        match peek_label_prefix(tokens, pos) {
            LabelPrefix::Colon(name, next) => {
                label = Some(name);
                pos = next;
            }
            LabelPrefix::BareBeforeDirective(name, next) => {
                if let Some(Token { kind: TokenKind::Directive(dir), .. }) = tokens.get(next) {
                    if dir == "EQU" || dir == "DEFL" {
                        // Already bound (and diagnosed) in pass 1.
                        let expr_end = scan_expr_end(tokens, next + 1);
                        pos = skip_to_newline(tokens, expr_end);
                        continue;
                    }
                }
                label = Some(name);
                pos = next;
            }
            LabelPrefix::BareInvalid(_, next) => {
                // Already diagnosed in pass 1.
                pos = skip_to_newline(tokens, next);
                continue;
            }
            LabelPrefix::None => {}
        }

        if is_eof(tokens, pos) || matches!(tokens[pos].kind, TokenKind::Newline) {
            continue;
        }

        match &tokens[pos].kind {
            TokenKind::Directive(dir) => {
                let dir = dir.clone();
                let line = tokens[pos].line;
                pos += 1;
                match dir.as_str() {
                    "ORG" => {
                        // The label (already bound in pass 1, at the
                        // pre-.ORG pc) has no instruction to attach to here;
                        // codegen's address walk starts from `start_address`
                        // and would rebind it to the wrong address if it
                        // carried a zero-byte record instead.
                        label = None;
                        let end = scan_expr_end(tokens, pos);
                        match evaluate(&tokens[pos..end], prelim, pc, true, line, 1) {
                            Ok(target) => {
                                pc = target as u16;
                                if start_address.is_none() {
                                    start_address = Some(pc);
                                } else {
                                    origins.push((instructions.len(), pc));
                                }
                            }
                            Err(e) => diagnostics.push(Diagnostic::error(e)),
                        }
                        pos = end;
                    }
                    "DB" => {
                        if start_address.is_none() {
                            start_address = Some(pc);
                        }
                        let (bytes, end, errs) = emit_db_bytes(tokens, pos, prelim, pc);
                        diagnostics.extend(errs);
                        let addr = pc;
                        pc = pc.wrapping_add(bytes.len() as u16);
                        instructions.push(IntermediateInstruction::Data { address: addr, bytes, label: label.take(), line });
                        pos = end;
                    }
                    "DW" => {
                        if start_address.is_none() {
                            start_address = Some(pc);
                        }
                        let (bytes, end, errs) = emit_dw_bytes(tokens, pos, prelim, pc);
                        diagnostics.extend(errs);
                        let addr = pc;
                        pc = pc.wrapping_add(bytes.len() as u16);
                        instructions.push(IntermediateInstruction::Data { address: addr, bytes, label: label.take(), line });
                        pos = end;
                    }
                    "DS" => {
                        if start_address.is_none() {
                            start_address = Some(pc);
                        }
                        let end = scan_expr_end(tokens, pos);
                        let n = match evaluate(&tokens[pos..end], prelim, pc, false, line, 1) {
                            Ok(v) => v.max(0) as usize,
                            Err(e) => {
                                diagnostics.push(Diagnostic::error(e));
                                0
                            }
                        };
                        let addr = pc;
                        let bytes = vec![0u8; n];
                        pc = pc.wrapping_add(n as u16);
                        instructions.push(IntermediateInstruction::Data { address: addr, bytes, label: label.take(), line });
                        pos = end;
                    }
                    "END" => {
                        // Same reasoning as .ORG above: already bound in
                        // pass 1, nothing to attach it to here.
                        break;
                    }
                    other => {
                        diagnostics.push(Diagnostic::error(AssemblyError::SyntaxError {
                            line,
                            column: 1,
                            reason: format!("unexpected directive '.{}'", other),
                        }));
                        pos = skip_to_newline(tokens, pos);
                    }
                }
            }
            TokenKind::Mnemonic(m) => {
                if start_address.is_none() {
                    start_address = Some(pc);
                }
                let mnemonic = m.clone();
                let line = tokens[pos].line;
                pos += 1;
                match parse_operand_list(tokens, pos, prelim, pc, false) {
                    Ok((mut operands, end)) => {
                        apply_condition_conversion(&mnemonic, &mut operands);
                        let bytes = if operands.iter().any(|op| {
                            matches!(op, Operand::LabelRef(_) | Operand::IndirectLabelRef(_))
                        }) {
                            // Placeholder bytes; the code generator re-encodes
                            // once every label address is known.
                            vec![0u8; encoder::calculate_instruction_size(&mnemonic, &operands).unwrap_or(1)]
                        } else {
                            match encoder::encode_instruction(&mnemonic, &operands, pc, line) {
                                Ok(bytes) => bytes,
                                Err(e) => {
                                    diagnostics.push(Diagnostic::error(e));
                                    vec![0u8; encoder::calculate_instruction_size(&mnemonic, &operands).unwrap_or(1)]
                                }
                            }
                        };
                        let addr = pc;
                        pc = pc.wrapping_add(bytes.len() as u16);
                        instructions.push(IntermediateInstruction::Instruction {
                            address: addr,
                            mnemonic,
                            operands,
                            bytes,
                            label: label.take(),
                            line,
                        });
                        pos = skip_to_newline(tokens, end);
                    }
                    Err(e) => {
                        diagnostics.push(Diagnostic::error(e));
                        pos = skip_to_newline(tokens, pos);
                    }
                }
            }
            _ => {
                diagnostics.push(Diagnostic::error(AssemblyError::SyntaxError {
                    line: tokens[pos].line,
                    column: tokens[pos].column,
                    reason: "unrecognized statement".to_string(),
                }));
                pos = skip_to_newline(tokens, pos);
            }
        }
    }

    Pass2Result {
        instructions,
        diagnostics,
        start_address: start_address.unwrap_or(DEFAULT_ORG),
        origins,
    }
}

fn emit_db_bytes(
    tokens: &[Token],
    start: usize,
    symbols: &SymbolTable,
    pc: u16,
) -> (Vec<u8>, usize, Vec<Diagnostic>) {
    let mut pos = start;
    let mut bytes = Vec::new();
    let mut diagnostics = Vec::new();
    loop {
        match tokens.get(pos).map(|t| &t.kind) {
            None | Some(TokenKind::Newline) | Some(TokenKind::Eof) => break,
            Some(TokenKind::Str(s)) => {
                bytes.extend(s.as_bytes());
                pos += 1;
            }
            _ => {
                let end = scan_expr_end(tokens, pos);
                let line = tokens[pos].line;
                match evaluate(&tokens[pos..end], symbols, pc, false, line, 1) {
                    Ok(v) => bytes.push(v as u8),
                    Err(e) => {
                        diagnostics.push(Diagnostic::error(e));
                        bytes.push(0);
                    }
                }
                pos = end.max(pos + 1);
            }
        }
        match tokens.get(pos).map(|t| &t.kind) {
            Some(TokenKind::Comma) => pos += 1,
            _ => break,
        }
    }
    (bytes, pos, diagnostics)
}

fn emit_dw_bytes(
    tokens: &[Token],
    start: usize,
    symbols: &SymbolTable,
    pc: u16,
) -> (Vec<u8>, usize, Vec<Diagnostic>) {
    let mut pos = start;
    let mut bytes = Vec::new();
    let mut diagnostics = Vec::new();
    loop {
        match tokens.get(pos).map(|t| &t.kind) {
            None | Some(TokenKind::Newline) | Some(TokenKind::Eof) => break,
            _ => {
                let end = scan_expr_end(tokens, pos);
                let line = tokens[pos].line;
                match evaluate(&tokens[pos..end], symbols, pc, false, line, 1) {
                    Ok(v) => {
                        let v = v as u16;
                        bytes.push(v as u8);
                        bytes.push((v >> 8) as u8);
                    }
                    Err(e) => {
                        diagnostics.push(Diagnostic::error(e));
                        bytes.push(0);
                        bytes.push(0);
                    }
                }
                pos = end.max(pos + 1);
            }
        }
        match tokens.get(pos).map(|t| &t.kind) {
            Some(TokenKind::Comma) => pos += 1,
            _ => break,
        }
    }
    (bytes, pos, diagnostics)
}

const CONDITION_NAMES: &[&str] = &["NZ", "Z", "NC", "C", "PO", "PE", "P", "M"];

fn as_condition_name(op: &Operand) -> Option<&str> {
    match op {
        Operand::LabelRef(name) if CONDITION_NAMES.contains(&name.as_str()) => Some(name.as_str()),
        Operand::Register(name) if name == "C" => Some("C"),
        _ => None,
    }
}

/// `JP`/`CALL` with two operands, or `RET` with one, may use a condition
/// name in the position where a bare label would otherwise be assumed.
fn apply_condition_conversion(mnemonic: &str, operands: &mut [Operand]) {
    match mnemonic {
        "JP" | "CALL" if operands.len() == 2 => {
            if let Some(name) = as_condition_name(&operands[0]) {
                if let Some(cc) = Condition::from_name(name) {
                    operands[0] = Operand::Condition(cc);
                }
            }
        }
        "RET" if operands.len() == 1 => {
            if let Some(name) = as_condition_name(&operands[0]) {
                if let Some(cc) = Condition::from_name(name) {
                    operands[0] = Operand::Condition(cc);
                }
            }
        }
        "JR" if operands.len() == 2 => {
            if let Some(name) = as_condition_name(&operands[0]) {
                if matches!(name, "NZ" | "Z" | "NC" | "C") {
                    if let Some(cc) = Condition::from_name(name) {
                        operands[0] = Operand::Condition(cc);
                    }
                }
            }
        }
        _ => {}
    }
}

// ---------------------------------------------------------------------
// Operand parsing shared by pass 1 (shape only) and pass 2 (final values).
// ---------------------------------------------------------------------

fn parse_operand_list(
    tokens: &[Token],
    mut pos: usize,
    symbols: &SymbolTable,
    pc: u16,
    allow_forward: bool,
) -> Result<(Vec<Operand>, usize), AssemblyError> {
    let mut operands = Vec::new();
    if matches!(tokens.get(pos).map(|t| &t.kind), None | Some(TokenKind::Newline) | Some(TokenKind::Eof)) {
        return Ok((operands, pos));
    }
    loop {
        let (op, next) = parse_operand(tokens, pos, symbols, pc, allow_forward)?;
        operands.push(op);
        pos = next;
        match tokens.get(pos).map(|t| &t.kind) {
            Some(TokenKind::Comma) => pos += 1,
            _ => break,
        }
    }
    Ok((operands, pos))
}

fn parse_operand(
    tokens: &[Token],
    pos: usize,
    symbols: &SymbolTable,
    pc: u16,
    allow_forward: bool,
) -> Result<(Operand, usize), AssemblyError> {
    let tok = match tokens.get(pos) {
        Some(t) => t,
        None => {
            let (line, column) = tokens.last().map(|t| (t.line, t.column)).unwrap_or((1, 1));
            return Err(AssemblyError::SyntaxError { line, column, reason: "expected an operand".to_string() });
        }
    };

    match &tok.kind {
        TokenKind::Register(name) => Ok((Operand::Register(name.clone()), pos + 1)),

        TokenKind::LParen => {
            if let Some(next_tok) = tokens.get(pos + 1) {
                if let TokenKind::Register(rname) = &next_tok.kind {
                    if matches!(tokens.get(pos + 2).map(|t| &t.kind), Some(TokenKind::RParen)) {
                        return Ok((Operand::Indirect(rname.clone()), pos + 3));
                    }
                }
                if let TokenKind::Label(lname) = &next_tok.kind {
                    if matches!(tokens.get(pos + 2).map(|t| &t.kind), Some(TokenKind::RParen)) {
                        return Ok((Operand::IndirectLabelRef(lname.clone()), pos + 3));
                    }
                }
            }
            let expr_start = pos + 1;
            let expr_end = scan_expr_end(tokens, expr_start);
            let value = evaluate(&tokens[expr_start..expr_end], symbols, pc, allow_forward, tok.line, tok.column)?;
            match tokens.get(expr_end).map(|t| &t.kind) {
                Some(TokenKind::RParen) => Ok((Operand::IndirectAddr(value as i32), expr_end + 1)),
                _ => Err(AssemblyError::UnmatchedParenthesis { line: tok.line, column: tok.column }),
            }
        }

        TokenKind::Label(name) => {
            let next_is_operator = matches!(tokens.get(pos + 1).map(|t| &t.kind), Some(TokenKind::Operator(_)));
            if next_is_operator {
                let end = scan_expr_end(tokens, pos);
                let value = evaluate(&tokens[pos..end], symbols, pc, allow_forward, tok.line, tok.column)?;
                Ok((Operand::Immediate(value as i32), end))
            } else {
                Ok((Operand::LabelRef(name.clone()), pos + 1))
            }
        }

        TokenKind::Number { .. } | TokenKind::Operator('$') | TokenKind::Operator('+') | TokenKind::Operator('-') => {
            let end = scan_expr_end(tokens, pos);
            let value = evaluate(&tokens[pos..end], symbols, pc, allow_forward, tok.line, tok.column)?;
            Ok((Operand::Immediate(value as i32), end))
        }

        _ => Err(AssemblyError::SyntaxError {
            line: tok.line,
            column: tok.column,
            reason: format!("unexpected token '{}' in operand", tok.raw),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::lex;

    #[test]
    fn binds_equ_in_pass1() {
        let tokens = lex("VALUE: .EQU 5\n");
        let (symbols, diagnostics) = pass1(&tokens);
        assert!(diagnostics.is_empty());
        assert_eq!(symbols.get("VALUE").unwrap().address, 5);
    }

    #[test]
    fn forward_equ_reference_is_error() {
        let tokens = lex("A: .EQU B+1\nB: .EQU 2\n");
        let (_, diagnostics) = pass1(&tokens);
        assert!(!diagnostics.is_empty());
    }

    #[test]
    fn sizes_simple_program() {
        let tokens = lex("START: NOP\nLD A,5\nHALT\n");
        let (symbols, _) = pass1(&tokens);
        assert_eq!(symbols.get("START").unwrap().address, DEFAULT_ORG);
    }

    #[test]
    fn pass2_emits_instructions_with_addresses() {
        let tokens = lex("NOP\nHALT\n");
        let out = parse(&tokens);
        assert_eq!(out.instructions.len(), 2);
        assert_eq!(out.instructions[0].address(), DEFAULT_ORG);
        assert_eq!(out.instructions[1].address(), DEFAULT_ORG + 1);
    }

    #[test]
    fn defers_forward_label_in_instruction_operand() {
        let tokens = lex("JP TARGET\nTARGET: HALT\n");
        let out = parse(&tokens);
        match &out.instructions[0] {
            IntermediateInstruction::Instruction { operands, .. } => {
                assert!(matches!(operands[0], Operand::LabelRef(ref n) if n == "TARGET"));
            }
            _ => panic!("expected instruction"),
        }
    }

    #[test]
    fn recognizes_condition_in_jp() {
        let tokens = lex("JP NZ,TARGET\nTARGET: HALT\n");
        let out = parse(&tokens);
        match &out.instructions[0] {
            IntermediateInstruction::Instruction { operands, .. } => {
                assert!(matches!(operands[0], Operand::Condition(Condition::Nz)));
            }
            _ => panic!("expected instruction"),
        }
    }

    #[test]
    fn label_before_org_is_bound_at_the_pre_org_address() {
        let tokens = lex("START: .ORG $5000\nNOP\n");
        let out = parse(&tokens);
        assert_eq!(out.symbols.get("START").unwrap().address, DEFAULT_ORG);
    }

    #[test]
    fn label_before_end_is_bound() {
        let tokens = lex("NOP\nDONE: .END\n");
        let out = parse(&tokens);
        assert_eq!(out.symbols.get("DONE").unwrap().address, DEFAULT_ORG + 1);
    }
}

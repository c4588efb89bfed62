//! Pass-1 helpers: counting bytes for data directives without evaluating
//! or emitting anything.

use crate::token::{Token, TokenKind};

/// Scans one comma-separated `.DB` operand list starting at `start` and
/// returns `(byte_count, end_pos)`. A lone string literal operand
/// contributes its length in bytes; anything else contributes one byte,
/// regardless of how complex the expression is.
pub fn db_byte_count(tokens: &[Token], start: usize) -> (u32, usize) {
    let mut pos = start;
    let mut count = 0u32;
    loop {
        match tokens.get(pos).map(|t| &t.kind) {
            None | Some(TokenKind::Newline) | Some(TokenKind::Eof) => break,
            Some(TokenKind::Str(s)) => {
                count += s.len() as u32;
                pos += 1;
            }
            _ => {
                let end = crate::evaluator::scan_expr_end(tokens, pos);
                count += 1;
                pos = end.max(pos + 1);
            }
        }
        match tokens.get(pos).map(|t| &t.kind) {
            Some(TokenKind::Comma) => pos += 1,
            _ => break,
        }
    }
    (count, pos)
}

/// Scans one comma-separated operand list (`.DW`, or a generic count of
/// operands) starting at `start` and returns `(operand_count, end_pos)`.
pub fn count_operands(tokens: &[Token], start: usize) -> (u32, usize) {
    let mut pos = start;
    let mut count = 0u32;
    loop {
        match tokens.get(pos).map(|t| &t.kind) {
            None | Some(TokenKind::Newline) | Some(TokenKind::Eof) => break,
            _ => {
                let end = crate::evaluator::scan_expr_end(tokens, pos);
                count += 1;
                pos = end.max(pos + 1);
            }
        }
        match tokens.get(pos).map(|t| &t.kind) {
            Some(TokenKind::Comma) => pos += 1,
            _ => break,
        }
    }
    (count, pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::lex;

    #[test]
    fn counts_db_mixed_strings_and_scalars() {
        let tokens = lex("\"HI\",1,2+3");
        let (count, _) = db_byte_count(&tokens, 0);
        assert_eq!(count, 2 + 1 + 1);
    }

    #[test]
    fn counts_dw_operands() {
        let tokens = lex("1,2,3");
        let (count, _) = count_operands(&tokens, 0);
        assert_eq!(count, 3);
    }
}

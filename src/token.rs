//! Lexer: source string -> token sequence.
//!
//! Tracks line/column per character and emits `Error` tokens for
//! unrecognized characters instead of aborting, so the parser can recover
//! and keep scanning the rest of the line.

use crate::errors::AssemblyError;

const MNEMONICS: &[&str] = &[
    "NOP", "HALT", "DI", "EI", "SCF", "CCF", "CPL", "DAA", "RLCA", "RRCA", "RLA", "RRA", "RET",
    "EXX", "EX", "LDI", "LDD", "LDIR", "LDDR", "RETI", "RETN", "NEG", "JP", "JR", "DJNZ", "CALL",
    "LD", "ADD", "ADC", "SUB", "SBC", "AND", "OR", "XOR", "CP", "INC", "DEC", "PUSH", "POP", "RST",
    "RLC", "RRC", "RL", "RR", "SLA", "SRA", "SLL", "SRL", "BIT", "SET", "RES", "IN", "OUT",
];

const REGISTERS: &[&str] = &[
    "A", "B", "C", "D", "E", "H", "L", "BC", "DE", "HL", "SP", "AF", "IX", "IY", "IXH", "IXL",
    "IYH", "IYL",
];

const DIRECTIVES: &[&str] = &["ORG", "DB", "DW", "DS", "EQU", "DEFL", "END"];
const DIRECTIVE_ALIASES: &[(&str, &str)] =
    &[("DEFB", "DB"), ("DEFW", "DW"), ("DEFM", "DB"), ("DEFS", "DS")];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Hex,
    Decimal,
    Binary,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Label(String),
    Mnemonic(String),
    Register(String),
    Number { value: i64, radix: Radix },
    Str(String),
    Directive(String),
    Operator(char),
    LParen,
    RParen,
    Comma,
    Colon,
    Newline,
    Comment,
    Eof,
    Error(char),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub column: usize,
    /// Original source text, preserved only for diagnostics.
    pub raw: String,
}

impl Token {
    pub fn is_label(&self, name: &str) -> bool {
        matches!(&self.kind, TokenKind::Label(l) if l == name)
    }
}

pub struct Lexer<'a> {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    column: usize,
    src: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Lexer {
            chars: src.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
            src,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let tok = self.next_token();
            let is_eof = matches!(tok.kind, TokenKind::Eof);
            tokens.push(tok);
            if is_eof {
                break;
            }
        }
        tokens
    }

    fn next_token(&mut self) -> Token {
        loop {
            match self.peek() {
                None => return self.make(TokenKind::Eof, self.line, self.column, ""),
                Some(' ') | Some('\t') | Some('\r') => {
                    self.advance();
                }
                _ => break,
            }
        }

        let line = self.line;
        let column = self.column;

        let c = match self.peek() {
            None => return self.make(TokenKind::Eof, line, column, ""),
            Some(c) => c,
        };

        match c {
            '\n' => {
                self.advance();
                self.make(TokenKind::Newline, line, column, "\n")
            }
            ';' => self.scan_comment(line, column),
            '"' | '\'' => self.scan_string(line, column, c),
            '(' => {
                self.advance();
                self.make(TokenKind::LParen, line, column, "(")
            }
            ')' => {
                self.advance();
                self.make(TokenKind::RParen, line, column, ")")
            }
            ',' => {
                self.advance();
                self.make(TokenKind::Comma, line, column, ",")
            }
            ':' => {
                self.advance();
                self.make(TokenKind::Colon, line, column, ":")
            }
            '+' | '-' | '*' | '/' => {
                self.advance();
                self.make(TokenKind::Operator(c), line, column, &c.to_string())
            }
            '$' => self.scan_dollar(line, column),
            '%' => self.scan_percent(line, column),
            c if c.is_ascii_digit() => self.scan_number(line, column),
            c if c.is_alphabetic() || c == '_' || c == '.' => self.scan_identifier(line, column),
            other => {
                self.advance();
                self.make(TokenKind::Error(other), line, column, &other.to_string())
            }
        }
    }

    fn make(&self, kind: TokenKind, line: usize, column: usize, raw: &str) -> Token {
        Token {
            kind,
            line,
            column,
            raw: raw.to_string(),
        }
    }

    fn scan_comment(&mut self, line: usize, column: usize) -> Token {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
        let raw: String = self.chars[start..self.pos].iter().collect();
        self.make(TokenKind::Comment, line, column, &raw)
    }

    fn scan_string(&mut self, line: usize, column: usize, quote: char) -> Token {
        self.advance(); // opening quote
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c == quote || c == '\n' {
                break;
            }
            self.advance();
        }
        let content: String = self.chars[start..self.pos].iter().collect();
        if self.peek() == Some(quote) {
            self.advance();
        }
        self.make(TokenKind::Str(content.clone()), line, column, &content)
    }

    fn scan_dollar(&mut self, line: usize, column: usize) -> Token {
        if matches!(self.peek_at(1), Some(c) if c.is_ascii_hexdigit()) {
            self.advance(); // consume '$'
            let start = self.pos;
            while matches!(self.peek(), Some(c) if c.is_ascii_hexdigit()) {
                self.advance();
            }
            let digits: String = self.chars[start..self.pos].iter().collect();
            let value = i64::from_str_radix(&digits, 16).unwrap_or(0);
            let raw = format!("${}", digits);
            self.make(
                TokenKind::Number {
                    value,
                    radix: Radix::Hex,
                },
                line,
                column,
                &raw,
            )
        } else {
            self.advance();
            self.make(TokenKind::Operator('$'), line, column, "$")
        }
    }

    fn scan_percent(&mut self, line: usize, column: usize) -> Token {
        if matches!(self.peek_at(1), Some('0') | Some('1')) {
            self.advance(); // consume '%'
            let start = self.pos;
            while matches!(self.peek(), Some('0') | Some('1')) {
                self.advance();
            }
            let digits: String = self.chars[start..self.pos].iter().collect();
            let value = i64::from_str_radix(&digits, 2).unwrap_or(0);
            let raw = format!("%{}", digits);
            self.make(
                TokenKind::Number {
                    value,
                    radix: Radix::Binary,
                },
                line,
                column,
                &raw,
            )
        } else {
            self.advance();
            self.make(TokenKind::Error('%'), line, column, "%")
        }
    }

    fn scan_number(&mut self, line: usize, column: usize) -> Token {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric()) {
            self.advance();
        }
        let lexeme: String = self.chars[start..self.pos].iter().collect();

        if let Some(stripped) = lexeme
            .strip_suffix('h')
            .or_else(|| lexeme.strip_suffix('H'))
        {
            if !stripped.is_empty() && stripped.chars().all(|c| c.is_ascii_hexdigit()) {
                let value = i64::from_str_radix(stripped, 16).unwrap_or(0);
                return self.make(
                    TokenKind::Number {
                        value,
                        radix: Radix::Hex,
                    },
                    line,
                    column,
                    &lexeme,
                );
            }
        }

        if lexeme.chars().all(|c| c.is_ascii_digit()) {
            let value = lexeme.parse::<i64>().unwrap_or(0);
            return self.make(
                TokenKind::Number {
                    value,
                    radix: Radix::Decimal,
                },
                line,
                column,
                &lexeme,
            );
        }

        self.make(
            TokenKind::Error(lexeme.chars().next().unwrap_or('?')),
            line,
            column,
            &lexeme,
        )
    }

    fn scan_identifier(&mut self, line: usize, column: usize) -> Token {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_' || c == '.') {
            self.advance();
        }
        let raw: String = self.chars[start..self.pos].iter().collect();
        let mut upper = raw.to_ascii_uppercase();

        if upper == "AF" && self.peek() == Some('\'') {
            self.advance();
            upper.push('\'');
        }

        if MNEMONICS.contains(&upper.as_str()) {
            return self.make(TokenKind::Mnemonic(upper), line, column, &raw);
        }
        if REGISTERS.contains(&upper.as_str()) || upper == "AF'" {
            return self.make(TokenKind::Register(upper), line, column, &raw);
        }

        let stripped = upper.strip_prefix('.').unwrap_or(&upper);
        if let Some(canon) = DIRECTIVES.iter().find(|d| **d == stripped) {
            return self.make(TokenKind::Directive(canon.to_string()), line, column, &raw);
        }
        if let Some((_, canon)) = DIRECTIVE_ALIASES.iter().find(|(alias, _)| *alias == stripped) {
            return self.make(TokenKind::Directive(canon.to_string()), line, column, &raw);
        }

        self.make(TokenKind::Label(upper), line, column, &raw)
    }
}

pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}

/// Convenience used by the parser to turn a stray `Error` token into a
/// diagnostic without duplicating the line/column plumbing.
pub fn error_for_token(tok: &Token) -> Option<AssemblyError> {
    match tok.kind {
        TokenKind::Error(ch) => Some(AssemblyError::UnexpectedCharacter {
            ch,
            line: tok.line,
            column: tok.column,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        lex(src).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn lexes_hex_decimal_binary_numbers() {
        let toks = kinds("$FF 255 %1010 0FFh\n");
        assert_eq!(
            toks,
            vec![
                TokenKind::Number { value: 0xFF, radix: Radix::Hex },
                TokenKind::Number { value: 255, radix: Radix::Decimal },
                TokenKind::Number { value: 0b1010, radix: Radix::Binary },
                TokenKind::Number { value: 0xFF, radix: Radix::Hex },
                TokenKind::Newline,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn dollar_alone_is_operator() {
        let toks = kinds("$ + 3\n");
        assert_eq!(toks[0], TokenKind::Operator('$'));
    }

    #[test]
    fn classifies_mnemonics_registers_directives_labels() {
        let toks = kinds("START: LD A,B\n.ORG $4200\nFOO\n");
        assert!(matches!(toks[0], TokenKind::Label(ref s) if s == "START"));
        assert_eq!(toks[1], TokenKind::Colon);
        assert!(matches!(toks[2], TokenKind::Mnemonic(ref s) if s == "LD"));
        assert!(matches!(toks[3], TokenKind::Register(ref s) if s == "A"));
        assert_eq!(toks[4], TokenKind::Comma);
        assert!(matches!(toks[5], TokenKind::Register(ref s) if s == "B"));
        assert_eq!(toks[6], TokenKind::Newline);
        assert!(matches!(toks[7], TokenKind::Directive(ref s) if s == "ORG"));
    }

    #[test]
    fn af_prime_is_single_register_token() {
        let toks = kinds("EX AF,AF'\n");
        assert!(matches!(&toks[3], TokenKind::Register(s) if s == "AF'"));
    }

    #[test]
    fn unrecognized_char_is_error_token_and_scanning_continues() {
        let toks = kinds("NOP @ HALT\n");
        assert!(matches!(toks[1], TokenKind::Error('@')));
        assert!(matches!(toks[2], TokenKind::Mnemonic(ref s) if s == "HALT"));
    }

    #[test]
    fn strings_have_no_escapes_and_stop_at_newline() {
        let toks = kinds("\"AB\\n\"\n'x");
        assert!(matches!(&toks[0], TokenKind::Str(s) if s == "AB\\n"));
    }

    #[test]
    fn comments_run_to_end_of_line() {
        let toks = kinds("NOP ; a comment\nHALT\n");
        assert_eq!(toks[1], TokenKind::Comment);
        assert!(matches!(toks[2], TokenKind::Newline));
    }

    #[test]
    fn column_tracking_is_one_based() {
        let toks = lex("  NOP\n");
        assert_eq!(toks[0].line, 1);
        assert_eq!(toks[0].column, 3);
    }
}

//! Error and diagnostic types.

use serde::Serialize;
use thiserror::Error;

/// One failure case from any pipeline stage. Carries enough structured data
/// to build a line/column diagnostic without re-parsing the message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssemblyError {
    #[error("unexpected character '{ch}'")]
    UnexpectedCharacter { ch: char, line: usize, column: usize },

    #[error("source is empty")]
    EmptySource,

    #[error("{reason}")]
    SyntaxError { line: usize, column: usize, reason: String },

    #[error("unmatched parenthesis")]
    UnmatchedParenthesis { line: usize, column: usize },

    #[error("division by zero")]
    DivByZero { line: usize, column: usize },

    #[error("undefined symbol '{name}'")]
    UndefinedSymbol { name: String, line: usize, column: usize },

    #[error("unsupported operand pattern for '{mnemonic}'")]
    UnsupportedInstructionPattern { mnemonic: String, line: usize },

    #[error("invalid RST address {value:#06x}, must be one of 0x00,0x08,0x10,...,0x38")]
    InvalidRstAddress { value: i32, line: usize },

    #[error("relative jump offset {offset} out of range (-128..=127)")]
    RelativeJumpOutOfRange { offset: i32, line: usize },

    #[error("internal assembler error: {message}")]
    Internal { message: String },
}

impl AssemblyError {
    pub fn line(&self) -> usize {
        match self {
            AssemblyError::UnexpectedCharacter { line, .. }
            | AssemblyError::SyntaxError { line, .. }
            | AssemblyError::UnmatchedParenthesis { line, .. }
            | AssemblyError::DivByZero { line, .. }
            | AssemblyError::UndefinedSymbol { line, .. }
            | AssemblyError::UnsupportedInstructionPattern { line, .. }
            | AssemblyError::InvalidRstAddress { line, .. }
            | AssemblyError::RelativeJumpOutOfRange { line, .. } => *line,
            AssemblyError::EmptySource | AssemblyError::Internal { .. } => 1,
        }
    }

    pub fn column(&self) -> Option<usize> {
        match self {
            AssemblyError::UnexpectedCharacter { column, .. }
            | AssemblyError::SyntaxError { column, .. }
            | AssemblyError::UnmatchedParenthesis { column, .. }
            | AssemblyError::DivByZero { column, .. }
            | AssemblyError::UndefinedSymbol { column, .. } => Some(*column),
            _ => None,
        }
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        Diagnostic {
            line: self.line(),
            column: self.column(),
            message: self.to_string(),
            severity: Severity::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// One reported problem, ready to print or serialize.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub message: String,
    pub line: usize,
    pub column: Option<usize>,
    pub severity: Severity,
}

impl Diagnostic {
    pub fn warning(line: usize, message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            line,
            column: None,
            severity: Severity::Warning,
        }
    }

    pub fn error(err: AssemblyError) -> Self {
        err.into_diagnostic()
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sev = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        match self.column {
            Some(col) => write!(f, "{}:{}: {}: {}", self.line, col, sev, self.message),
            None => write!(f, "{}: {}: {}", self.line, sev, self.message),
        }
    }
}

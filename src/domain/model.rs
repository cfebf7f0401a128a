use std::num::IntErrorKind;

/// 解析失敗時替代的預設值
pub const DEFAULT_VALUE: i32 = 0;

/// 從輸入來源讀到的一整行，保留行尾換行符
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawInput {
    line: String,
}

impl RawInput {
    pub fn new(line: impl Into<String>) -> Self {
        Self { line: line.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.line
    }

    /// 去除前後空白 (含換行符) 後的內容
    pub fn trimmed(&self) -> &str {
        self.line.trim()
    }

    /// 來源在讀到任何位元組前就結束
    pub(crate) fn is_end_of_input(&self) -> bool {
        self.line.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    Empty,
    InvalidDigit,
    Overflow,
}

impl From<&IntErrorKind> for FailureReason {
    fn from(kind: &IntErrorKind) -> Self {
        match kind {
            IntErrorKind::Empty => FailureReason::Empty,
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => FailureReason::Overflow,
            _ => FailureReason::InvalidDigit,
        }
    }
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            FailureReason::Empty => "empty input",
            FailureReason::InvalidDigit => "not a number",
            FailureReason::Overflow => "out of 32-bit range",
        };
        f.write_str(text)
    }
}

/// 整數解析的兩種結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Parsed(i32),
    Defaulted { input: String, reason: FailureReason },
}

impl ParseOutcome {
    pub fn value(&self) -> i32 {
        match self {
            ParseOutcome::Parsed(value) => *value,
            ParseOutcome::Defaulted { .. } => DEFAULT_VALUE,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, ParseOutcome::Defaulted { .. })
    }
}

impl Default for ParseOutcome {
    fn default() -> Self {
        ParseOutcome::Defaulted {
            input: String::new(),
            reason: FailureReason::Empty,
        }
    }
}

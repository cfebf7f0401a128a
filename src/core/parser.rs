use crate::core::{FailureReason, ParseOutcome};

pub fn trim_input(raw: &str) -> &str {
    raw.trim()
}

/// 解析成 32 位元有號整數，失敗時回傳預設值 0
pub fn parse_or_default(text: &str) -> ParseOutcome {
    let trimmed = trim_input(text);

    match trimmed.parse::<i32>() {
        Ok(value) => {
            tracing::debug!("Parsed '{}' as {}", trimmed, value);
            ParseOutcome::Parsed(value)
        }
        Err(e) => {
            let reason = FailureReason::from(e.kind());
            tracing::debug!("Could not parse '{}': {}", trimmed, reason);
            ParseOutcome::Defaulted {
                input: trimmed.to_string(),
                reason,
            }
        }
    }
}

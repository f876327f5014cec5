use crate::error::ExpiryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpirySeverity {
    Urgent,
    Warning,
    Fine,
}

impl ExpirySeverity {
    pub fn accent_class(self) -> &'static str {
        match self {
            ExpirySeverity::Urgent => "expiry-urgent",
            ExpirySeverity::Warning => "expiry-warning",
            ExpirySeverity::Fine => "expiry-fine",
        }
    }
}

/// Leading integer of strings like "2 hours" (leading whitespace and a sign allowed).
pub fn parse_expiry_hours(raw: &str) -> Result<i64, ExpiryError> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return Err(ExpiryError::MissingNumber(raw.to_string()));
    }
    let magnitude: i64 = rest[..digits_len]
        .parse()
        .map_err(|_| ExpiryError::TooLarge(raw.to_string()))?;
    Ok(if negative { -magnitude } else { magnitude })
}

pub fn classify_hours(hours: i64) -> ExpirySeverity {
    if hours <= 1 {
        ExpirySeverity::Urgent
    } else if hours <= 3 {
        ExpirySeverity::Warning
    } else {
        ExpirySeverity::Fine
    }
}

pub fn classify_expiry(raw: &str) -> Result<ExpirySeverity, ExpiryError> {
    parse_expiry_hours(raw).map(classify_hours)
}

use crate::models::Outcome;

const KEYWORD: &str = "wordle";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedResult {
    pub puzzle_number: u32,
    pub outcome: Outcome,
}

/// Find a shared puzzle result anywhere in a chat message.
///
/// Accepts `Wordle 1,495 3/6` (solved in 3) and `Wordle 1495 X/6` or `*/6`
/// (failed). The keyword is case-insensitive and the puzzle number may carry
/// thousands separators.
pub fn parse_message(message: &str) -> Option<ParsedResult> {
    // ASCII lowercasing keeps byte offsets aligned with the original text
    let lower = message.to_ascii_lowercase();

    let mut from = 0;
    while let Some(offset) = lower[from..].find(KEYWORD) {
        let pos = from + offset;
        if let Some(result) = parse_after_keyword(&lower[pos + KEYWORD.len()..]) {
            return Some(result);
        }
        from = pos + 1;
    }
    None
}

fn parse_after_keyword(rest: &str) -> Option<ParsedResult> {
    let rest = skip_whitespace(rest)?;

    let number_len = rest
        .find(|c: char| !(c.is_ascii_digit() || c == ','))
        .unwrap_or(rest.len());
    let digits: String = rest[..number_len]
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    if digits.is_empty() {
        return None;
    }
    let puzzle_number: u32 = digits.parse().ok()?;
    if puzzle_number == 0 {
        return None;
    }

    let rest = skip_whitespace(&rest[number_len..])?;
    let outcome = if let Some(tail) = rest.strip_prefix(|c: char| c == 'x' || c == '*') {
        if !tail.starts_with("/6") {
            return None;
        }
        Outcome::Failed
    } else {
        let len = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if len == 0 || !rest[len..].starts_with("/6") {
            return None;
        }
        let attempts: u8 = rest[..len].parse().ok()?;
        Outcome::solved(attempts).ok()?
    };

    Some(ParsedResult {
        puzzle_number,
        outcome,
    })
}

/// Requires at least one whitespace character (any Unicode space, NBSP included).
fn skip_whitespace(text: &str) -> Option<&str> {
    let trimmed = text.trim_start();
    if trimmed.len() == text.len() {
        None
    } else {
        Some(trimmed)
    }
}

//! Balanced-brackets check for `()`, `[]` and `{}`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BracketError {
    #[error("invalid character {found:?} at position {position}")]
    InvalidCharacter { found: char, position: usize },
}

/// True when every closing bracket matches the most recent unmatched opening
/// bracket of the same kind and nothing is left open.
///
/// Any character other than `()[]{}`, whitespace included, is an error.
pub fn brackets_balanced(input: &str) -> Result<bool, BracketError> {
    let mut open: Vec<char> = Vec::new();

    for (position, found) in input.chars().enumerate() {
        match found {
            '(' | '[' | '{' => open.push(found),
            ')' | ']' | '}' => {
                if open.pop() != Some(opening_for(found)) {
                    return Ok(false);
                }
            }
            _ => return Err(BracketError::InvalidCharacter { found, position }),
        }
    }

    Ok(open.is_empty())
}

fn opening_for(close: char) -> char {
    match close {
        ')' => '(',
        ']' => '[',
        _ => '{',
    }
}

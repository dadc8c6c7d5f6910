//! Identity document checks.
//!
//! Brazilian CPF: eleven digits, the last two being mod-11 check digits.
//! Spaces, dots and dashes are accepted as separators.

use exodo_shared::OperatorSnapshot;

/// Validate a CPF number
pub fn is_valid_cpf(input: &str) -> bool {
    let cleaned: String = input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.' && *c != '-')
        .collect();

    let digits = match cleaned
        .chars()
        .map(|c| c.to_digit(10))
        .collect::<Option<Vec<u32>>>()
    {
        Some(digits) => digits,
        None => return false,
    };
    if digits.len() != 11 {
        return false;
    }
    // 000.000.000-00, 111.111.111-11, ... pass the checksum but are invalid
    if digits.iter().all(|d| *d == digits[0]) {
        return false;
    }

    check_digit(&digits[..9]) == digits[9] && check_digit(&digits[..10]) == digits[10]
}

/// Check digit over a prefix, with weights counting down to 2
fn check_digit(prefix: &[u32]) -> u32 {
    let weight = prefix.len() as u32 + 1;
    let sum: u32 = prefix
        .iter()
        .enumerate()
        .map(|(i, d)| d * (weight - i as u32))
        .sum();
    (sum * 10 % 11) % 10
}

/// Identity checks on an operator profile
pub trait IdentityCheck {
    fn has_valid_identity(&self) -> bool;
}

impl IdentityCheck for OperatorSnapshot {
    fn has_valid_identity(&self) -> bool {
        self.identity.as_deref().map(is_valid_cpf).unwrap_or(false)
    }
}

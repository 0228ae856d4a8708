//! CPF (Cadastro de Pessoas Físicas) handling
//!
//! Formatting follows the progressive input mask used on the registration
//! form (`DDD.DDD.DDD-DD`), validation follows the two check digit modulo-11
//! algorithm.

use std::fmt;
use thiserror::Error;

/// Number of digits in a complete CPF
pub const CPF_LEN: usize = 11;

/// Maximum length of the masked display value (`000.000.000-00`)
pub const CPF_DISPLAY_LEN: usize = 14;

/// Local validation failure. Never sent to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CpfError {
    #[error("CPF deve conter 11 dígitos")]
    WrongLength(usize),

    #[error("CPF inválido")]
    RepeatedDigits,

    #[error("CPF inválido")]
    CheckDigitMismatch,
}

/// Strip every non-digit character and keep at most 11 digits
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(CPF_LEN)
        .collect()
}

/// Apply the display mask to whatever digits are present.
///
/// Partial input gets a partial mask:
/// "123" -> "123", "1234" -> "123.4", "1234567" -> "123.456.7",
/// "12345678909" -> "123.456.789-09"
pub fn format(raw: &str) -> String {
    let digits = normalize(raw);
    let mut out = String::with_capacity(CPF_DISPLAY_LEN);
    for (i, c) in digits.chars().enumerate() {
        match i {
            3 | 6 => out.push('.'),
            9 => out.push('-'),
            _ => {}
        }
        out.push(c);
    }
    out
}

/// Verify length, repeated sequences and both check digits
pub fn validate(digits: &str) -> Result<(), CpfError> {
    let values: Vec<u32> = digits.chars().filter_map(|c| c.to_digit(10)).collect();

    if values.len() != CPF_LEN || digits.len() != CPF_LEN {
        return Err(CpfError::WrongLength(values.len()));
    }

    if values.iter().all(|&d| d == values[0]) {
        return Err(CpfError::RepeatedDigits);
    }

    if check_digit(&values[..9]) != values[9] {
        return Err(CpfError::CheckDigitMismatch);
    }
    if check_digit(&values[..10]) != values[10] {
        return Err(CpfError::CheckDigitMismatch);
    }

    Ok(())
}

/// Weighted sum with weights (len + 1)..=2, then `(sum * 10) mod 11`.
/// Remainders 10 and 11 fold to 0.
fn check_digit(prefix: &[u32]) -> u32 {
    let top = prefix.len() as u32 + 1;
    let sum: u32 = prefix
        .iter()
        .zip((2..=top).rev())
        .map(|(d, w)| d * w)
        .sum();

    match (sum * 10) % 11 {
        10 | 11 => 0,
        r => r,
    }
}

/// A CPF that passed validation. Stores the bare digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cpf(String);

impl Cpf {
    /// Normalize and validate raw user input
    pub fn parse(raw: &str) -> Result<Self, CpfError> {
        let digits = normalize(raw);
        // Input with more than 11 digits is rejected, not silently truncated
        let total = raw.chars().filter(|c| c.is_ascii_digit()).count();
        if total != CPF_LEN {
            return Err(CpfError::WrongLength(total));
        }
        validate(&digits)?;
        Ok(Self(digits))
    }

    pub fn digits(&self) -> &str {
        &self.0
    }

    pub fn into_digits(self) -> String {
        self.0
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(&self.0))
    }
}

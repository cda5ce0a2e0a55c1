//! Numeric adapters: quantity token scanning, unit conversion, and
//! number-word parsing.
//!
//! Numeric adapters return at most one value: the first unit-bearing
//! quantity found in the sentence sequence, converted to the attribute's
//! canonical unit. A token that mixes digits with an unrecognized suffix is
//! a [`ExtractionError::MalformedQuantity`] — the engine treats that as
//! absent evidence, never a fatal failure.

use regex::Regex;
use std::sync::OnceLock;

use crate::error::{ExtractionError, ExtractionResult};

/// Measurement units the adapters understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Millimeters,
    Centimeters,
    Inches,
}

impl Unit {
    fn in_millimeters(self) -> f64 {
        match self {
            Unit::Millimeters => 1.0,
            Unit::Centimeters => 10.0,
            Unit::Inches => 25.4,
        }
    }

    /// Convert a value in this unit to the target unit.
    pub fn convert(self, value: f64, target: Unit) -> f64 {
        value * self.in_millimeters() / target.in_millimeters()
    }

    /// Unit named by a standalone token. Bare "in" is excluded here: as a
    /// preposition it would misfire on almost any sentence.
    fn from_word(word: &str) -> Option<Unit> {
        match word {
            "mm" | "millimeter" | "millimeters" => Some(Unit::Millimeters),
            "cm" | "centimeter" | "centimeters" => Some(Unit::Centimeters),
            "inch" | "inches" => Some(Unit::Inches),
            _ => None,
        }
    }

    /// Unit named by the letter suffix of an attached token like "8cm".
    fn from_suffix(suffix: &str) -> Option<Unit> {
        if suffix == "in" {
            return Some(Unit::Inches);
        }
        Unit::from_word(suffix)
    }
}

fn malformed(token: &str) -> ExtractionError {
    ExtractionError::MalformedQuantity {
        token: token.to_string(),
    }
}

/// Split an attached quantity token ("8cm", "15mm", "3in") into value and
/// unit. Digits with an unrecognized suffix are malformed.
fn split_attached(token: &str) -> ExtractionResult<(f64, Unit)> {
    static QUANTITY: OnceLock<Regex> = OnceLock::new();
    let re = QUANTITY.get_or_init(|| Regex::new(r"^([0-9]+)([a-z]+)$").expect("static regex"));

    let caps = re.captures(token).ok_or_else(|| malformed(token))?;
    let unit = Unit::from_suffix(&caps[2]).ok_or_else(|| malformed(token))?;
    let value: f64 = caps[1].parse().map_err(|_| malformed(token))?;
    Ok((value, unit))
}

/// Find the first unit-bearing quantity in the sentences and convert it to
/// `target`. Returns `Ok(None)` when no quantity is present.
pub fn extract_quantity(target: Unit, sentences: &[String]) -> ExtractionResult<Option<f64>> {
    for sentence in sentences {
        let sentence_unit = sentence.split_whitespace().find_map(Unit::from_word);

        for token in sentence.split_whitespace() {
            let has_digit = token.chars().any(|c| c.is_ascii_digit());
            let has_alpha = token.chars().any(|c| c.is_alphabetic());

            if has_digit && has_alpha {
                let (value, unit) = split_attached(token)?;
                return Ok(Some(unit.convert(value, target)));
            }

            if has_digit {
                if let Some(unit) = sentence_unit {
                    let value: f64 = token.parse().map_err(|_| malformed(token))?;
                    return Ok(Some(unit.convert(value, target)));
                }
            } else if is_number_word(token) {
                if let Some(unit) = sentence_unit {
                    let value = parse_number_words(token)? as f64;
                    return Ok(Some(unit.convert(value, target)));
                }
            }
        }
    }
    Ok(None)
}

const UNITS: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const TENS: [&str; 8] = [
    "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const SCALES: [(&str, u64); 5] = [
    ("hundred", 100),
    ("thousand", 1_000),
    ("million", 1_000_000),
    ("billion", 1_000_000_000),
    ("trillion", 1_000_000_000_000),
];

/// Whether a token is a recognized number word.
pub fn is_number_word(word: &str) -> bool {
    UNITS.contains(&word) || TENS.contains(&word) || SCALES.iter().any(|(w, _)| *w == word)
}

/// Parse a number-word phrase ("three", "twenty five", "two hundred") or a
/// digit string into an integer.
pub fn parse_number_words(phrase: &str) -> ExtractionResult<u64> {
    if !phrase.is_empty() && phrase.chars().all(|c| c.is_ascii_digit()) {
        return phrase.parse().map_err(|_| malformed(phrase));
    }

    let mut result: u64 = 0;
    let mut current: u64 = 0;
    let mut saw_word = false;

    for word in phrase.split_whitespace() {
        if word == "and" {
            continue;
        }
        if let Some(idx) = UNITS.iter().position(|w| *w == word) {
            current += idx as u64;
        } else if let Some(idx) = TENS.iter().position(|w| *w == word) {
            current += (idx as u64 + 2) * 10;
        } else if let Some((_, scale)) = SCALES.iter().find(|(w, _)| *w == word) {
            let base = if current == 0 { 1 } else { current };
            if *scale >= 1_000 {
                result += base * scale;
                current = 0;
            } else {
                current = base * scale;
            }
        } else {
            return Err(ExtractionError::UnknownNumberWord {
                word: word.to_string(),
            });
        }
        saw_word = true;
    }

    if !saw_word {
        return Err(ExtractionError::UnknownNumberWord {
            word: phrase.to_string(),
        });
    }
    Ok(result + current)
}

/// Petal count: a digit or small number word immediately preceding
/// "petal"/"petals".
pub fn extract_petal_count(sentences: &[String]) -> Option<u32> {
    for sentence in sentences {
        let tokens: Vec<&str> = sentence.split_whitespace().collect();
        for pair in tokens.windows(2) {
            if pair[1].contains("petal") {
                if let Some(count) = small_count(pair[0]) {
                    return Some(count);
                }
            }
        }
    }
    None
}

fn small_count(token: &str) -> Option<u32> {
    if !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()) {
        return token.parse().ok();
    }
    let idx = UNITS.iter().position(|w| *w == token)?;
    u32::try_from(idx).ok()
}

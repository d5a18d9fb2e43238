//! Decimal price encoding at the API boundary
//!
//! - Output: always a JSON string, so no precision is lost in transit
//! - Input: JSON string or JSON number. serde_json runs with
//!   `arbitrary_precision`, so a JSON number reaches us as its source
//!   text and is parsed as a decimal, never through `f64`.
//!
//! Sign is NOT checked here. A non-positive price must reach the order
//! service so it can be rejected as invalid input rather than as a
//! malformed body.
//!
//! Range is that of `rust_decimal`: at most 28 fractional digits and
//! magnitude below ~7.9e28. Anything outside is a malformed price (400).

use rust_decimal::prelude::*;
use serde::Deserialize;
use serde::de::{self, MapAccess, Visitor, value::MapAccessDeserializer};
use std::fmt;

/// Largest scale a `Decimal` can hold
pub const MAX_PRICE_SCALE: usize = 28;

fn check_scale(unsigned: &str) -> Result<(), String> {
    let mantissa = unsigned
        .split(|c| c == 'e' || c == 'E')
        .next()
        .unwrap_or(unsigned);
    let fraction_digits = mantissa.split_once('.').map(|(_, f)| f.len()).unwrap_or(0);
    if fraction_digits > MAX_PRICE_SCALE {
        return Err(format!(
            "Price has {} decimal places, at most {} supported",
            fraction_digits, MAX_PRICE_SCALE
        ));
    }
    Ok(())
}

/// Parse a textual decimal with the strict-format rules of the API:
/// no empty string, no `.5` / `5.`, no exponent, no `+` prefix.
pub fn parse_price(s: &str) -> Result<Decimal, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("Price cannot be empty".to_string());
    }
    let unsigned = s.strip_prefix('-').unwrap_or(s);
    if unsigned.starts_with('.') {
        return Err("Invalid format: use 0.5 not .5".to_string());
    }
    if unsigned.ends_with('.') {
        return Err("Invalid format: use 5.0 not 5.".to_string());
    }
    if unsigned.contains('e') || unsigned.contains('E') {
        return Err("Invalid format: scientific notation not allowed".to_string());
    }
    if unsigned.starts_with('+') || unsigned.starts_with('-') {
        return Err("Invalid format: sign prefix not allowed here".to_string());
    }
    check_scale(unsigned)?;
    Decimal::from_str(s).map_err(|e| format!("Invalid decimal: {}", e))
}

/// Parse the source text of a JSON number. JSON grammar is already
/// enforced by serde_json; exponents are legal here.
pub fn parse_json_number(text: &str) -> Result<Decimal, String> {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    if unsigned.contains('e') || unsigned.contains('E') {
        // Scientific form: the resulting scale is what matters, so let
        // rust_decimal decide whether it fits.
        return Decimal::from_scientific(text).map_err(|e| format!("Invalid decimal: {}", e));
    }
    check_scale(unsigned)?;
    Decimal::from_str(text).map_err(|e| format!("Invalid decimal: {}", e))
}

struct PriceVisitor;

impl<'de> Visitor<'de> for PriceVisitor {
    type Value = Decimal;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a decimal price as a string or number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Decimal, E> {
        parse_price(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Decimal, E> {
        Ok(Decimal::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Decimal, E> {
        Ok(Decimal::from(v))
    }

    /// Only reached from non-JSON sources (e.g. YAML fixtures)
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Decimal, E> {
        if !v.is_finite() {
            return Err(E::custom("Price must be a finite number"));
        }
        Decimal::from_str(&v.to_string())
            .ok()
            .or_else(|| Decimal::from_f64(v))
            .ok_or_else(|| E::custom("Price out of range"))
    }

    /// serde_json `arbitrary_precision` hands numbers over as a
    /// single-entry map; `serde_json::Number` knows how to read it back.
    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Decimal, A::Error> {
        let number = serde_json::Number::deserialize(MapAccessDeserializer::new(map))?;
        parse_json_number(&number.to_string()).map_err(de::Error::custom)
    }
}

/// `#[serde(with = "...::money::price")]` adapter for `Decimal` fields
pub mod price {
    use super::PriceVisitor;
    use rust_decimal::Decimal;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        deserializer.deserialize_any(PriceVisitor)
    }
}

//! Lenient numeric deserialization.
//!
//! Organizer forms submit numbers as text (`"250"`) as often as they submit
//! JSON numbers. These helpers accept both and parse text server-side, so a
//! value such as `"abc"` is rejected before any write happens.

use serde::{de, Deserialize, Deserializer};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText<T> {
    Number(T),
    Text(String),
}

fn parse<T, E>(raw: NumberOrText<T>) -> Result<T, E>
where
    T: FromStr,
    T::Err: Display,
    E: de::Error,
{
    match raw {
        NumberOrText::Number(value) => Ok(value),
        NumberOrText::Text(text) => text
            .trim()
            .parse::<T>()
            .map_err(|_| E::custom(format!("expected a number, got \"{}\"", text))),
    }
}

/// Deserializes a required number given either as a JSON number or as text.
pub fn number_from_text<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    parse(NumberOrText::<T>::deserialize(deserializer)?)
}

/// Deserializes an optional number given either as a JSON number or as text.
///
/// Use together with `#[serde(default)]` so a missing field becomes `None`.
pub fn optional_number_from_text<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    match Option::<NumberOrText<T>>::deserialize(deserializer)? {
        Some(raw) => parse(raw).map(Some),
        None => Ok(None),
    }
}

use std::ops::Deref;

use serde::Deserialize;

/// A duration written as whitespace separated parts like `1h 30m`.
///
/// Supported units are `s`, `m`, `h` and `d`. A number without a unit is
/// read as seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration(pub std::time::Duration);

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl Deref for Duration {
    type Target = std::time::Duration;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::str::FromStr for Duration {
    type Err = InvalidDuration;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .map(parse_part)
            .try_fold(0u64, |total, secs| total.checked_add(secs?).ok_or(InvalidDuration))
            .map(|secs| Self(std::time::Duration::from_secs(secs)))
    }
}

fn parse_part(part: &str) -> Result<u64, InvalidDuration> {
    let unit_start = part
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(part.len());
    let (value, unit) = part.split_at(unit_start);
    let value = value.parse::<u64>().map_err(|_| InvalidDuration)?;
    let factor = match unit {
        "" | "s" => 1,
        "m" => 60,
        "h" => 60 * 60,
        "d" => 24 * 60 * 60,
        _ => return Err(InvalidDuration),
    };
    value.checked_mul(factor).ok_or(InvalidDuration)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidDuration;

impl std::fmt::Display for InvalidDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Invalid duration")
    }
}

impl std::error::Error for InvalidDuration {}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

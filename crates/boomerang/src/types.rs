use num_rational::Rational64;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SearchError};

/// One of the two legal moves.
///
/// `AddOffset` adds the fixed offset r to the current value; `Invert`
/// replaces the current value with its reciprocal. The first move of
/// every flight is always `AddOffset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Op {
    AddOffset,
    Invert,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::AddOffset => write!(f, "+r"),
            Op::Invert => write!(f, "inv"),
        }
    }
}

/// A single move and the value it lands on.
///
/// A flight is an ordered sequence of steps: the first step is the
/// mandatory `1 + r` move, the last step's value is exactly 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Value after the move, as a fraction string in JSON (`"12/11"`).
    #[serde(with = "fraction")]
    pub value: Rational64,
    pub op: Op,
}

impl Step {
    pub fn new(value: Rational64, op: Op) -> Self {
        Self { value, op }
    }
}

/// The fixed offset r = m/n added by the first move and every later
/// `+r` move. Always stored in lowest terms with a positive denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Offset(#[serde(with = "fraction")] Rational64);

impl Offset {
    /// Build the offset from integers, rejecting a zero denominator.
    ///
    /// # Examples
    ///
    /// ```
    /// use boomerang::v1::Offset;
    ///
    /// let r = Offset::new(2, -4).unwrap();
    /// assert_eq!(r.to_string(), "-1/2");
    /// assert!(Offset::new(1, 0).is_err());
    /// ```
    pub fn new(m: i64, n: i64) -> Result<Self> {
        if n == 0 {
            return Err(SearchError::ZeroDenominator);
        }
        Ok(Offset(Rational64::new(m, n)))
    }

    pub fn value(self) -> Rational64 {
        self.0
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Offset {
    type Err = SearchError;

    /// Parse `"m/n"`, or a bare integer as `"m/1"`.
    fn from_str(s: &str) -> Result<Self> {
        parse_fraction(s).map(Offset)
    }
}

/// Pruning guards and the path-length cap that keep the search finite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    /// Maximum number of moves in a flight.
    pub max_steps: u32,
    /// Largest admissible denominator (lowest terms).
    pub den_limit: i64,
    /// Largest admissible absolute numerator (lowest terms).
    pub value_limit: i64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            max_steps: 30,
            den_limit: 5000,
            value_limit: 1_000_000,
        }
    }
}

/// A complete round trip: the offset and bounds that produced it, and
/// the steps from the first `+r` move back to 1.
///
/// # JSON shape
///
/// ```json
/// {
///   "offset": "-1/2",
///   "bounds": { "max_steps": 30, "den_limit": 5000, "value_limit": 1000000 },
///   "steps": [
///     { "value": "1/2", "op": "add_offset" },
///     { "value": "2", "op": "invert" },
///     { "value": "3/2", "op": "add_offset" },
///     { "value": "1", "op": "add_offset" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flight {
    pub offset: Offset,
    #[serde(default)]
    pub bounds: Bounds,
    pub steps: Vec<Step>,
}

impl Flight {
    pub fn new(offset: Offset, bounds: Bounds, steps: Vec<Step>) -> Self {
        Self {
            offset,
            bounds,
            steps,
        }
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Parse a fraction string: `"12/11"`, `"-3/5"`, or a bare integer `"2"`.
pub(crate) fn parse_fraction(s: &str) -> Result<Rational64> {
    let (numer, denom) = match s.split_once('/') {
        Some((m, n)) => (m.trim(), n.trim()),
        None => (s.trim(), "1"),
    };
    let m: i64 = numer
        .parse()
        .map_err(|_| SearchError::MalformedFraction(s.to_string()))?;
    let n: i64 = denom
        .parse()
        .map_err(|_| SearchError::MalformedFraction(s.to_string()))?;
    if n == 0 {
        return Err(SearchError::ZeroDenominator);
    }
    Ok(Rational64::new(m, n))
}

/// Serde adapter storing rationals as canonical fraction strings.
mod fraction {
    use num_rational::Rational64;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Rational64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Rational64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        super::parse_fraction(&text).map_err(D::Error::custom)
    }
}

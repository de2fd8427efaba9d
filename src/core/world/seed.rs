use std::fmt;

/// Where a seed value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOrigin {
    Numeric,
    Text(String),
    Random,
}

/// A 64-bit world seed plus the input it was derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldSeed {
    value: i64,
    origin: SeedOrigin,
}

impl WorldSeed {
    pub fn from_long(value: i64) -> Self {
        Self {
            value,
            origin: SeedOrigin::Numeric,
        }
    }

    /// Interpret user input the way the game's "seed" field does.
    ///
    /// Integers are used as-is, anything else is hashed with Java's
    /// `String.hashCode`. Blank input means "no seed".
    pub fn from_text(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }

        if let Ok(value) = trimmed.parse::<i64>() {
            return Some(Self::from_long(value));
        }

        Some(Self {
            value: i64::from(java_string_hash(trimmed)),
            origin: SeedOrigin::Text(trimmed.to_string()),
        })
    }

    pub fn random() -> Self {
        Self {
            value: rand::random::<i64>(),
            origin: SeedOrigin::Random,
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn origin(&self) -> &SeedOrigin {
        &self.origin
    }
}

impl fmt::Display for WorldSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.origin {
            SeedOrigin::Text(text) => write!(f, "\"{}\" ({})", text, self.value),
            SeedOrigin::Numeric | SeedOrigin::Random => write!(f, "{}", self.value),
        }
    }
}

fn java_string_hash(text: &str) -> i32 {
    text.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

//! Sign classification

use std::fmt;

/// Sign of an integer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    Positive,
    Negative,
    Zero,
}

impl Sign {
    /// Label used when reporting the sign
    pub fn label(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Zero => "zero",
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify an integer as positive, negative or zero
#[inline]
pub fn classify(x: i64) -> Sign {
    match x.cmp(&0) {
        std::cmp::Ordering::Greater => Sign::Positive,
        std::cmp::Ordering::Less => Sign::Negative,
        std::cmp::Ordering::Equal => Sign::Zero,
    }
}

/// Describe the sign of `x` as a sentence without trailing punctuation
///
/// `"5 is positive"`, `"-1 is negative"` or `"You entered zero"`.
pub fn describe(x: i64) -> String {
    match classify(x) {
        Sign::Zero => "You entered zero".to_string(),
        sign => format!("{} is {}", x, sign),
    }
}

//! Fixed outcome set for the color die.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of faces on the color die.
pub const COLOR_COUNT: usize = 6;

/// One face of the color die. The declaration order is the canonical
/// face order and matches the positional layout of [`crate::Distribution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Yellow,
    Green,
    White,
    Purple,
}

impl Color {
    /// All faces in canonical order.
    pub const ALL: [Self; COLOR_COUNT] = [
        Self::Red,
        Self::Blue,
        Self::Yellow,
        Self::Green,
        Self::White,
        Self::Purple,
    ];

    /// Position of the face in canonical order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Face at the given canonical position, if in range.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Red),
            1 => Some(Self::Blue),
            2 => Some(Self::Yellow),
            3 => Some(Self::Green),
            4 => Some(Self::White),
            5 => Some(Self::Purple),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::White => "white",
            Self::Purple => "purple",
        }
    }

    /// Unicode die face for the color's canonical position.
    #[must_use]
    pub const fn die_face(self) -> char {
        match self {
            Self::Red => '\u{2680}',
            Self::Blue => '\u{2681}',
            Self::Yellow => '\u{2682}',
            Self::Green => '\u{2683}',
            Self::White => '\u{2684}',
            Self::Purple => '\u{2685}',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "red" => Ok(Self::Red),
            "blue" => Ok(Self::Blue),
            "yellow" => Ok(Self::Yellow),
            "green" => Ok(Self::Green),
            "white" => Ok(Self::White),
            "purple" => Ok(Self::Purple),
            _ => Err(()),
        }
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_roundtrip_in_canonical_order() {
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.index(), i);
            assert_eq!(Color::from_index(i), Some(*color));
        }
        assert_eq!(Color::from_index(COLOR_COUNT), None);
    }

    #[test]
    fn names_parse_and_display() {
        for color in Color::ALL {
            assert_eq!(color.as_str().parse::<Color>(), Ok(color));
            assert_eq!(color.to_string(), color.as_str());
        }
        assert!("crimson".parse::<Color>().is_err());
    }

    #[test]
    fn die_faces_are_distinct() {
        let faces: std::collections::HashSet<char> =
            Color::ALL.iter().map(|c| c.die_face()).collect();
        assert_eq!(faces.len(), COLOR_COUNT);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Color::Purple).unwrap();
        assert_eq!(json, "\"purple\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::Purple);
    }
}

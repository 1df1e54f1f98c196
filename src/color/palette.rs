use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::foundation::error::{MorphError, MorphResult};

/// Straight (non-premultiplied) RGBA8 color, serialized as `#rrggbb` / `#rrggbbaa`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(s: &str) -> MorphResult<Self> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let bad = || MorphError::config(format!("invalid hex color '{s}'"));
        if !hex.is_ascii() {
            return Err(bad());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad());
        match hex.len() {
            3 => {
                let nib = |i: usize| {
                    u8::from_str_radix(&hex[i..i + 1], 16)
                        .map(|v| v * 17)
                        .map_err(|_| bad())
                };
                Ok(Self::rgb(nib(0)?, nib(1)?, nib(2)?))
            }
            6 => Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self {
                r: byte(0)?,
                g: byte(2)?,
                b: byte(4)?,
                a: byte(6)?,
            }),
            _ => Err(bad()),
        }
    }
}

impl fmt::Display for Rgba8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Rgba8 {
    type Error = MorphError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Rgba8> for String {
    fn from(value: Rgba8) -> Self {
        value.to_string()
    }
}

/// Tableau 10, the default categorical palette.
pub const TABLEAU10: [Rgba8; 10] = [
    Rgba8::rgb(0x4e, 0x79, 0xa7),
    Rgba8::rgb(0xf2, 0x8e, 0x2c),
    Rgba8::rgb(0xe1, 0x57, 0x59),
    Rgba8::rgb(0x76, 0xb7, 0xb2),
    Rgba8::rgb(0x59, 0xa1, 0x4f),
    Rgba8::rgb(0xed, 0xc9, 0x49),
    Rgba8::rgb(0xaf, 0x7a, 0xa1),
    Rgba8::rgb(0xff, 0x9d, 0xa7),
    Rgba8::rgb(0x9c, 0x75, 0x5f),
    Rgba8::rgb(0xba, 0xb0, 0xab),
];

pub fn default_palette() -> Vec<Rgba8> {
    TABLEAU10.to_vec()
}

/// Map each distinct category to a palette color.
///
/// Categories are sorted before assignment so the result does not depend on
/// input order; the palette wraps around when there are more categories than
/// colors.
pub fn assign_colors<'a, I>(categories: I, palette: &[Rgba8]) -> MorphResult<BTreeMap<String, Rgba8>>
where
    I: IntoIterator<Item = &'a str>,
{
    if palette.is_empty() {
        return Err(MorphError::config("palette must contain at least one color"));
    }
    let sorted = categories.into_iter().collect::<BTreeSet<_>>();
    Ok(sorted
        .into_iter()
        .enumerate()
        .map(|(idx, cat)| (cat.to_owned(), palette[idx % palette.len()]))
        .collect())
}

#[cfg(test)]
#[path = "../../tests/unit/color/palette.rs"]
mod tests;

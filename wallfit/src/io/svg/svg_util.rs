use crate::entities::ModuleCategory;
use anyhow::{Result, ensure};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use svg::node::element::Rectangle;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
#[serde(default)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    pub theme: SvgLayoutTheme,
    ///Draw the uncovered part of the wall as a dashed outline
    pub draw_remainder: bool,
    ///Print the name of each module on top of it
    pub draw_labels: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutTheme::default(),
            draw_remainder: true,
            draw_labels: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f32,
    pub wall_fill: Color,
    pub remainder_stroke: Color,
    /// Fill per [`ModuleCategory`], in declaration order
    pub category_fill: [Color; 7],
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        SvgLayoutTheme::EARTH_TONES
    }
}

impl SvgLayoutTheme {
    pub const EARTH_TONES: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.0,
        wall_fill: Color(0xEF, 0xE6, 0xD8),
        remainder_stroke: Color(0xD0, 0x00, 0x00),
        category_fill: [
            Color(0xCC, 0x82, 0x4A), // storage
            Color(0xFF, 0xC8, 0x79), // shelving
            Color(0x5B, 0x4A, 0x3A), // media
            Color(0xA6, 0x7C, 0x52), // desk
            Color(0xE3, 0xB5, 0x8A), // bed
            Color(0xC7, 0xA9, 0x00), // seating
            Color(0x9C, 0x9A, 0x8E), // panel
        ],
    };

    pub const GRAY: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.5,
        wall_fill: Color(0xF2, 0xF2, 0xF2),
        remainder_stroke: Color(0x63, 0x63, 0x63),
        category_fill: [
            Color(0x7A, 0x7A, 0x7A),
            Color(0x9A, 0x9A, 0x9A),
            Color(0x4A, 0x4A, 0x4A),
            Color(0x8A, 0x8A, 0x8A),
            Color(0xAA, 0xAA, 0xAA),
            Color(0x6A, 0x6A, 0x6A),
            Color(0xBA, 0xBA, 0xBA),
        ],
    };

    pub fn module_fill(&self, category: ModuleCategory) -> Color {
        let idx = match category {
            ModuleCategory::Storage => 0,
            ModuleCategory::Shelving => 1,
            ModuleCategory::Media => 2,
            ModuleCategory::Desk => 3,
            ModuleCategory::Bed => 4,
            ModuleCategory::Seating => 5,
            ModuleCategory::Panel => 6,
        };
        self.category_fill[idx]
    }
}

pub fn change_brightness(color: Color, fraction: f32) -> Color {
    let Color(r, g, b) = color;

    let r = (r as f32 * fraction) as u8;
    let g = (g as f32 * fraction) as u8;
    let b = (b as f32 * fraction) as u8;
    Color(r, g, b)
}

pub fn rect(x: u32, y: u32, width: u32, height: u32, params: &[(&str, &str)]) -> Rectangle {
    let mut rect = Rectangle::new()
        .set("x", x as f32)
        .set("y", y as f32)
        .set("width", width as f32)
        .set("height", height as f32);
    for (key, value) in params {
        rect = rect.set(*key, *value);
    }
    rect
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        ensure!(
            hex.len() == 6 && hex.is_ascii(),
            "invalid color: {s}, expected #RRGGBB"
        );
        let r = u8::from_str_radix(&hex[0..2], 16)?;
        let g = u8::from_str_radix(&hex[2..4], 16)?;
        let b = u8::from_str_radix(&hex[4..6], 16)?;
        Ok(Color(r, g, b))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_str(&s).map_err(serde::de::Error::custom)
    }
}

// File: ./src/theme.rs
use serde::{Deserialize, Serialize};

/// Colors as written in the config file: names or `#rgb` / `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub background: String,
    pub surface: String,
    pub text: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: "black".to_string(),
            surface: "#1f1f1f".to_string(),
            text: "white".to_string(),
        }
    }
}

/// Color with channels in [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Resolved colors handed to the view once at startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Rgb,
    pub surface: Rgb,
    pub text: Rgb,
    /// Hovered menu entries.
    pub highlight: Rgb,
}

impl Theme {
    pub fn palette(&self) -> Result<Palette, String> {
        let surface = parse_color(&self.surface)?;
        Ok(Palette {
            background: parse_color(&self.background)?,
            surface,
            text: parse_color(&self.text)?,
            highlight: shade(surface, 0.15),
        })
    }
}

pub fn parse_color(raw: &str) -> Result<Rgb, String> {
    let raw = raw.trim();
    if let Some(hex) = raw.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| format!("invalid hex color '{}'", raw));
    }
    let rgb = match raw.to_ascii_lowercase().as_str() {
        "black" => Rgb::new(0.0, 0.0, 0.0),
        "white" => Rgb::new(1.0, 1.0, 1.0),
        "gray" | "grey" => Rgb::new(0.5, 0.5, 0.5),
        "red" => Rgb::new(1.0, 0.0, 0.0),
        "green" => Rgb::new(0.0, 0.5, 0.0),
        "blue" => Rgb::new(0.0, 0.0, 1.0),
        "yellow" => Rgb::new(1.0, 1.0, 0.0),
        _ => return Err(format!("unknown color '{}'", raw)),
    };
    Ok(rgb)
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok().map(|v| v as f32 / 255.0);
    match hex.len() {
        3 => {
            // "#abc" is shorthand for "#aabbcc"
            let mut it = hex.chars().map(|c| channel(&format!("{c}{c}")));
            Some(Rgb::new(it.next()??, it.next()??, it.next()??))
        }
        6 => Some(Rgb::new(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => None,
    }
}

/// Determines if text on top of this color should be white.
pub fn is_dark(r: f32, g: f32, b: f32) -> bool {
    let brightness = 0.299 * r + 0.587 * g + 0.114 * b;
    brightness < 0.5
}

/// Moves a color towards white when dark, towards black when light.
pub fn shade(color: Rgb, amount: f32) -> Rgb {
    let step = |c: f32| {
        if is_dark(color.r, color.g, color.b) {
            c + (1.0 - c) * amount
        } else {
            c * (1.0 - amount)
        }
    };
    Rgb::new(step(color.r), step(color.g), step(color.b))
}

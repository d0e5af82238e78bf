use crate::foundation::core::{Rgba8, opacity_to_alpha};

/// Color-name lookup used by the named color setters.
pub trait ColorResolver {
    /// Color for `name`, or `None` if unknown.
    fn resolve(&self, name: &str) -> Option<Rgba8>;
}

impl<F> ColorResolver for F
where
    F: Fn(&str) -> Option<Rgba8>,
{
    fn resolve(&self, name: &str) -> Option<Rgba8> {
        self(name)
    }
}

/// Built-in resolver: hex notations, `rgb()`/`rgba()` and common SVG color keywords.
#[derive(Clone, Copy, Debug, Default)]
pub struct NamedColors;

impl ColorResolver for NamedColors {
    fn resolve(&self, name: &str) -> Option<Rgba8> {
        parse_color(name)
    }
}

const KEYWORDS: &[(&str, Rgba8)] = &[
    ("none", Rgba8::NONE),
    ("transparent", Rgba8::NONE),
    ("black", Rgba8::rgb(0, 0, 0)),
    ("white", Rgba8::rgb(255, 255, 255)),
    ("red", Rgba8::rgb(255, 0, 0)),
    ("lime", Rgba8::rgb(0, 255, 0)),
    ("green", Rgba8::rgb(0, 128, 0)),
    ("blue", Rgba8::rgb(0, 0, 255)),
    ("yellow", Rgba8::rgb(255, 255, 0)),
    ("cyan", Rgba8::rgb(0, 255, 255)),
    ("aqua", Rgba8::rgb(0, 255, 255)),
    ("magenta", Rgba8::rgb(255, 0, 255)),
    ("fuchsia", Rgba8::rgb(255, 0, 255)),
    ("gray", Rgba8::rgb(128, 128, 128)),
    ("grey", Rgba8::rgb(128, 128, 128)),
    ("silver", Rgba8::rgb(192, 192, 192)),
    ("maroon", Rgba8::rgb(128, 0, 0)),
    ("olive", Rgba8::rgb(128, 128, 0)),
    ("navy", Rgba8::rgb(0, 0, 128)),
    ("purple", Rgba8::rgb(128, 0, 128)),
    ("teal", Rgba8::rgb(0, 128, 128)),
    ("orange", Rgba8::rgb(255, 165, 0)),
    ("pink", Rgba8::rgb(255, 192, 203)),
    ("brown", Rgba8::rgb(165, 42, 42)),
    ("gold", Rgba8::rgb(255, 215, 0)),
    ("indigo", Rgba8::rgb(75, 0, 130)),
    ("violet", Rgba8::rgb(238, 130, 238)),
    ("coral", Rgba8::rgb(255, 127, 80)),
    ("salmon", Rgba8::rgb(250, 128, 114)),
    ("khaki", Rgba8::rgb(240, 230, 140)),
    ("beige", Rgba8::rgb(245, 245, 220)),
    ("ivory", Rgba8::rgb(255, 255, 240)),
    ("lightgray", Rgba8::rgb(211, 211, 211)),
    ("darkgray", Rgba8::rgb(169, 169, 169)),
    ("steelblue", Rgba8::rgb(70, 130, 180)),
    ("skyblue", Rgba8::rgb(135, 206, 235)),
    ("tomato", Rgba8::rgb(255, 99, 71)),
    ("crimson", Rgba8::rgb(220, 20, 60)),
];

/// Parse a color name the way [`NamedColors`] does. Case-insensitive.
pub fn parse_color(name: &str) -> Option<Rgba8> {
    let s = name.trim();
    if s.is_empty() {
        return None;
    }
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }

    let lower = s.to_ascii_lowercase();
    if let Some(args) = lower
        .strip_prefix("rgba(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return parse_functional(args, true);
    }
    if let Some(args) = lower
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return parse_functional(args, false);
    }

    KEYWORDS
        .iter()
        .find(|(k, _)| *k == lower)
        .map(|&(_, c)| c)
}

fn parse_hex(s: &str) -> Option<Rgba8> {
    fn nibble(c: u8) -> Option<u8> {
        (c as char).to_digit(16).map(|d| d as u8)
    }
    fn byte(pair: &[u8]) -> Option<u8> {
        Some(nibble(pair[0])? << 4 | nibble(pair[1])?)
    }

    let b = s.as_bytes();
    match b.len() {
        3 | 4 => {
            let mut ch = [255u8; 4];
            for (dst, &c) in ch.iter_mut().zip(b) {
                let n = nibble(c)?;
                *dst = n << 4 | n;
            }
            Some(Rgba8::rgba(ch[0], ch[1], ch[2], ch[3]))
        }
        6 | 8 => {
            let a = if b.len() == 8 { byte(&b[6..8])? } else { 255 };
            Some(Rgba8::rgba(
                byte(&b[0..2])?,
                byte(&b[2..4])?,
                byte(&b[4..6])?,
                a,
            ))
        }
        _ => None,
    }
}

fn parse_functional(args: &str, with_alpha: bool) -> Option<Rgba8> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return None;
    }

    let channel = |p: &str| -> Option<u8> {
        let v: f64 = p.parse().ok()?;
        Some(v.clamp(0.0, 255.0).round() as u8)
    };
    let a = if with_alpha {
        opacity_to_alpha(parts[3].parse().ok()?)
    } else {
        255
    };
    Some(Rgba8::rgba(
        channel(parts[0])?,
        channel(parts[1])?,
        channel(parts[2])?,
        a,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/target/color.rs"]
mod tests;

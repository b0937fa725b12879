//! ASCII rendering of the light map for terminal output.
//!
//! Stands in for a real display surface: intensities are mapped through a
//! monotone character ramp, one text row per grid row. Only the engine's
//! public read surface is consumed.

use crate::model::city::City;

const RAMP: &[u8] = b" .:-=+*#%@";

/// Map one intensity to a ramp character.
pub fn shade(v: u8) -> char {
    let idx = (v as usize * (RAMP.len() - 1)) / 255;
    RAMP[idx] as char
}

/// Render the whole light map as text.
pub fn render_ascii(city: &City) -> String {
    let width = city.width() as usize;
    let height = city.height() as usize;
    let mut out = String::with_capacity((width + 1) * height);
    for y in 0..city.height() {
        for x in 0..city.width() {
            out.push(shade(city.get(x, y)));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shade_endpoints() {
        assert_eq!(shade(0), ' ');
        assert_eq!(shade(255), '@');
    }

    #[test]
    fn test_shade_is_monotone() {
        let mut last = 0usize;
        for v in 0..=255u8 {
            let idx = RAMP.iter().position(|&c| c as char == shade(v)).unwrap();
            assert!(idx >= last, "ramp must never step backwards");
            last = idx;
        }
    }
}

//! Minimal stroke font
//!
//! Each glyph is a handful of polylines in a unit cell (x and y in 0..1,
//! y down), scaled to the requested text size at layout time. Characters
//! the font does not cover draw as an outline box of the glyph cell, so a
//! message stays legible enough to play even with a bad charset.

use glam::Vec2;

/// Horizontal advance between glyph cells, relative to the text size
pub const ADVANCE_RATIO: f32 = 0.7;
/// Glyph box width/height relative to the text size
const GLYPH_W_RATIO: f32 = 0.55;
const GLYPH_H_RATIO: f32 = 0.8;

type Strokes = &'static [&'static [(f32, f32)]];

const BOX: Strokes = &[&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)]];

fn strokes(character: char) -> Option<Strokes> {
    let glyph: Strokes = match character.to_ascii_uppercase() {
        ' ' => &[],
        '0' => &[&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)], &[(1.0, 0.0), (0.0, 1.0)]],
        '1' => &[&[(0.2, 0.2), (0.5, 0.0), (0.5, 1.0)], &[(0.2, 1.0), (0.8, 1.0)]],
        '2' => &[&[(0.0, 0.0), (1.0, 0.0), (1.0, 0.5), (0.0, 0.5), (0.0, 1.0), (1.0, 1.0)]],
        '3' => &[&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)], &[(0.3, 0.5), (1.0, 0.5)]],
        '4' => &[&[(0.0, 0.0), (0.0, 0.5), (1.0, 0.5)], &[(1.0, 0.0), (1.0, 1.0)]],
        '5' => &[&[(1.0, 0.0), (0.0, 0.0), (0.0, 0.5), (1.0, 0.5), (1.0, 1.0), (0.0, 1.0)]],
        '6' => &[&[(1.0, 0.0), (0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.5), (0.0, 0.5)]],
        '7' => &[&[(0.0, 0.0), (1.0, 0.0), (0.4, 1.0)]],
        '8' => &[&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)], &[(0.0, 0.5), (1.0, 0.5)]],
        '9' => &[&[(1.0, 0.5), (0.0, 0.5), (0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]],
        'A' => &[&[(0.0, 1.0), (0.0, 0.3), (0.5, 0.0), (1.0, 0.3), (1.0, 1.0)], &[(0.0, 0.6), (1.0, 0.6)]],
        'B' => &[&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.55), (0.0, 0.5), (0.9, 0.45), (0.9, 0.0), (0.0, 0.0)]],
        'C' => &[&[(1.0, 0.0), (0.0, 0.0), (0.0, 1.0), (1.0, 1.0)]],
        'D' => &[&[(0.0, 0.0), (0.0, 1.0), (0.7, 1.0), (1.0, 0.7), (1.0, 0.3), (0.7, 0.0), (0.0, 0.0)]],
        'E' => &[&[(1.0, 0.0), (0.0, 0.0), (0.0, 1.0), (1.0, 1.0)], &[(0.0, 0.5), (0.7, 0.5)]],
        'F' => &[&[(1.0, 0.0), (0.0, 0.0), (0.0, 1.0)], &[(0.0, 0.5), (0.7, 0.5)]],
        'G' => &[&[(1.0, 0.0), (0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.55), (0.55, 0.55)]],
        'H' => &[&[(0.0, 0.0), (0.0, 1.0)], &[(1.0, 0.0), (1.0, 1.0)], &[(0.0, 0.5), (1.0, 0.5)]],
        'I' => &[&[(0.2, 0.0), (0.8, 0.0)], &[(0.5, 0.0), (0.5, 1.0)], &[(0.2, 1.0), (0.8, 1.0)]],
        'J' => &[&[(1.0, 0.0), (1.0, 0.85), (0.7, 1.0), (0.3, 1.0), (0.0, 0.85)]],
        'K' => &[&[(0.0, 0.0), (0.0, 1.0)], &[(1.0, 0.0), (0.0, 0.5), (1.0, 1.0)]],
        'L' => &[&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)]],
        'M' => &[&[(0.0, 1.0), (0.0, 0.0), (0.5, 0.5), (1.0, 0.0), (1.0, 1.0)]],
        'N' => &[&[(0.0, 1.0), (0.0, 0.0), (1.0, 1.0), (1.0, 0.0)]],
        'O' => &[&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)]],
        'P' => &[&[(0.0, 1.0), (0.0, 0.0), (1.0, 0.0), (1.0, 0.5), (0.0, 0.5)]],
        'Q' => &[&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)], &[(0.6, 0.6), (1.0, 1.0)]],
        'R' => &[&[(0.0, 1.0), (0.0, 0.0), (1.0, 0.0), (1.0, 0.5), (0.0, 0.5)], &[(0.4, 0.5), (1.0, 1.0)]],
        'S' => &[&[(1.0, 0.0), (0.0, 0.0), (0.0, 0.5), (1.0, 0.5), (1.0, 1.0), (0.0, 1.0)]],
        'T' => &[&[(0.0, 0.0), (1.0, 0.0)], &[(0.5, 0.0), (0.5, 1.0)]],
        'U' => &[&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]],
        'V' => &[&[(0.0, 0.0), (0.5, 1.0), (1.0, 0.0)]],
        'W' => &[&[(0.0, 0.0), (0.25, 1.0), (0.5, 0.5), (0.75, 1.0), (1.0, 0.0)]],
        'X' => &[&[(0.0, 0.0), (1.0, 1.0)], &[(1.0, 0.0), (0.0, 1.0)]],
        'Y' => &[&[(0.0, 0.0), (0.5, 0.5), (1.0, 0.0)], &[(0.5, 0.5), (0.5, 1.0)]],
        'Z' => &[&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)]],
        '*' => &[
            &[(0.5, 0.1), (0.5, 0.9)],
            &[(0.1, 0.5), (0.9, 0.5)],
            &[(0.15, 0.15), (0.85, 0.85)],
            &[(0.85, 0.15), (0.15, 0.85)],
        ],
        '!' => &[&[(0.5, 0.0), (0.5, 0.65)], &[(0.5, 0.85), (0.5, 1.0)]],
        _ => return None,
    };
    Some(glyph)
}

/// Total width of a laid-out string
pub fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * ADVANCE_RATIO
}

/// Lay out `text` centered on `center` and emit one scaled polyline per
/// stroke. Unknown characters emit their cell outline instead.
pub fn layout_text(text: &str, center: Vec2, size: f32, mut emit: impl FnMut(&[Vec2])) {
    let advance = size * ADVANCE_RATIO;
    let glyph_w = size * GLYPH_W_RATIO;
    let glyph_h = size * GLYPH_H_RATIO;

    let mut cell_center_x = center.x - text_width(text, size) / 2.0 + advance / 2.0;
    let mut scaled: Vec<Vec2> = Vec::new();

    for character in text.chars() {
        let origin = Vec2::new(cell_center_x - glyph_w / 2.0, center.y - glyph_h / 2.0);

        for stroke in strokes(character).unwrap_or(BOX) {
            scaled.clear();
            scaled.extend(
                stroke
                    .iter()
                    .map(|&(x, y)| origin + Vec2::new(x * glyph_w, y * glyph_h)),
            );
            if scaled.len() > 1 {
                emit(&scaled);
            }
        }

        cell_center_x += advance;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stroke_count(text: &str) -> usize {
        let mut count = 0;
        layout_text(text, Vec2::ZERO, 10.0, |_| count += 1);
        count
    }

    #[test]
    fn test_known_glyphs_have_strokes() {
        for character in "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ*!".chars() {
            assert!(
                strokes(character).is_some(),
                "missing glyph for {character}"
            );
        }
    }

    #[test]
    fn test_lowercase_maps_to_uppercase() {
        assert_eq!(stroke_count("abc"), stroke_count("ABC"));
    }

    #[test]
    fn test_unknown_glyph_falls_back_to_box() {
        // One closed outline per unknown character
        assert_eq!(stroke_count("~"), 1);
    }

    #[test]
    fn test_space_emits_nothing() {
        assert_eq!(stroke_count(" "), 0);
    }

    #[test]
    fn test_layout_is_centered() {
        let center = Vec2::new(100.0, 50.0);
        let mut min_x = f32::MAX;
        let mut max_x = f32::MIN;
        layout_text("HH", center, 20.0, |points| {
            for p in points {
                min_x = min_x.min(p.x);
                max_x = max_x.max(p.x);
            }
        });
        // The H strokes span the full glyph box, so the extremes must be
        // symmetric around the requested center
        assert!(((min_x + max_x) / 2.0 - center.x).abs() < 1e-3);
    }

    #[test]
    fn test_text_width_scales() {
        assert_eq!(text_width("1234", 10.0), 4.0 * 10.0 * ADVANCE_RATIO);
        assert_eq!(text_width("", 10.0), 0.0);
    }
}

//! Per-character layout for the title lines. A glyph advance table stands in
//! for a full shaping pass: good enough to centre each letter of the two
//! fixed title strings while they type in and fly apart independently.

/// Relative advance width of a glyph, in units of the font size.
pub fn glyph_advance(c: char) -> f32 {
    match c {
        'i' | 'j' | 'l' | '\'' | '.' | ',' | '!' => 0.28,
        ' ' => 0.30,
        'f' | 't' | 'r' | 'I' => 0.38,
        'm' | 'w' => 0.82,
        'M' | 'W' => 0.95,
        'A'..='Z' => 0.72,
        _ => 0.55,
    }
}

/// Horizontal centre of every character plus the total line width, with the
/// line centred on x = 0. Centres are in the same units as `font_size`.
pub fn line_layout(line: &str, font_size: f32) -> (Vec<f32>, f32) {
    let advances: Vec<f32> = line.chars().map(|c| glyph_advance(c) * font_size).collect();
    let width: f32 = advances.iter().sum();

    let mut cursor = -width / 2.0;
    let centers = advances
        .iter()
        .map(|advance| {
            let center = cursor + advance / 2.0;
            cursor += advance;
            center
        })
        .collect();

    (centers, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_center_per_character() {
        let (centers, _) = line_layout("Welcome to my World.", 1.1);
        assert_eq!(centers.len(), 20);
    }

    #[test]
    fn centers_increase_left_to_right() {
        let (centers, _) = line_layout("Hi, I'm Dominic", 1.2);
        for pair in centers.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn layout_is_centered_on_zero() {
        let (centers, width) = line_layout("Dominic", 1.0);
        let first = centers[0] - glyph_advance('D') / 2.0;
        let last = centers[centers.len() - 1] + glyph_advance('c') / 2.0;
        assert!((first + width / 2.0).abs() < 1e-5);
        assert!((last - width / 2.0).abs() < 1e-5);
    }

    #[test]
    fn empty_line_has_no_width() {
        let (centers, width) = line_layout("", 1.0);
        assert!(centers.is_empty());
        assert_eq!(width, 0.0);
    }
}

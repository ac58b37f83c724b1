//! Billboard text label.
//!
//! Text is rasterized from a 5x7 pixel font into one quad per lit pixel,
//! normalized so the whole string spans x in [-1, 1] at z = 0. The viewer
//! scales and places the resulting mesh with its model matrix.

use glam::Vec3;

use crate::scene::mesh::Mesh;

const GLYPH_WIDTH: usize = 5;
const GLYPH_HEIGHT: usize = 7;
/// Glyph width plus one column of spacing.
const ADVANCE: usize = GLYPH_WIDTH + 1;

const LABEL_COLOR: [f32; 4] = [0.95, 0.95, 0.95, 1.0];

/// Build a mesh for `text`. Unknown characters render as blanks.
pub fn label_mesh(text: &str) -> Mesh {
    let mut mesh = Mesh::new();
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return mesh;
    }

    // Pixel-space extent: glyphs plus gaps, minus the trailing gap.
    let width = (chars.len() * ADVANCE - 1) as f32;
    let height = GLYPH_HEIGHT as f32;
    let scale = 2.0 / width;

    for (ci, c) in chars.iter().enumerate() {
        let bitmap = char_bitmap(*c);
        let origin_x = (ci * ADVANCE) as f32;
        for (row, bits) in bitmap.iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (0b10000 >> col) == 0 {
                    continue;
                }
                // Row 0 is the top of the glyph.
                let x0 = origin_x + col as f32;
                let y1 = height - row as f32;
                let (x0, x1) = (x0, x0 + 1.0);
                let (y0, y1) = (y1 - 1.0, y1);

                let to_world = |x: f32, y: f32| {
                    Vec3::new((x - width / 2.0) * scale, (y - height / 2.0) * scale, 0.0)
                };
                mesh.add_quad(
                    to_world(x0, y1),
                    to_world(x1, y1),
                    to_world(x1, y0),
                    to_world(x0, y0),
                    Vec3::Z,
                    LABEL_COLOR,
                );
            }
        }
    }

    mesh
}

/// Count of lit pixels in `text`, matching what [`label_mesh`] emits.
pub fn lit_pixel_count(text: &str) -> usize {
    text.chars()
        .flat_map(|c| char_bitmap(c).into_iter())
        .map(|bits| bits.count_ones() as usize)
        .sum()
}

/// 5x7 bitmap for one character, one byte per row, bit 4 is the left
/// column. Uppercase A-Z and space; anything else is blank.
fn char_bitmap(c: char) -> [u8; GLYPH_HEIGHT] {
    match c.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        _ => [0; GLYPH_HEIGHT],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_quad_per_lit_pixel() {
        let text = "ROCKET";
        let mesh = label_mesh(text);
        let pixels = lit_pixel_count(text);
        assert!(pixels > 0);
        assert_eq!(mesh.vertices.len(), pixels * 4);
        assert_eq!(mesh.indices.len(), pixels * 6);
    }

    #[test]
    fn label_is_normalized_to_unit_width() {
        let mesh = label_mesh("HELLO");
        let (min, max) = mesh.bounds().unwrap();
        assert!((min.x + 1.0).abs() < 1e-5);
        assert!((max.x - 1.0).abs() < 1e-5);
        assert_eq!(min.z, 0.0);
        assert_eq!(max.z, 0.0);
    }

    #[test]
    fn unknown_characters_render_blank() {
        let mesh = label_mesh("@#%");
        assert!(mesh.vertices.is_empty());
    }

    #[test]
    fn lowercase_maps_to_uppercase() {
        assert_eq!(lit_pixel_count("rocket"), lit_pixel_count("ROCKET"));
    }
}

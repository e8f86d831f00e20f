// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Figure colors

use image::Rgb;

pub const OBJ_COLOR: Rgb<u8> = Rgb([0xf5, 0xa6, 0x23]);
pub const STL_COLOR: Rgb<u8> = Rgb([0x4f, 0xc3, 0xf7]);
pub const GLTF_COLOR: Rgb<u8> = Rgb([0x81, 0xc7, 0x84]);
pub const FALLBACK_COLOR: Rgb<u8> = Rgb([0x90, 0xa4, 0xae]);

/// Series colors for the bar chart, cycled per mesh
pub const SERIES_COLORS: [Rgb<u8>; 10] = [
    Rgb([0x1f, 0x77, 0xb4]),
    Rgb([0xff, 0x7f, 0x0e]),
    Rgb([0x2c, 0xa0, 0x2c]),
    Rgb([0xd6, 0x27, 0x28]),
    Rgb([0x94, 0x67, 0xbd]),
    Rgb([0x8c, 0x56, 0x4b]),
    Rgb([0xe3, 0x77, 0xc2]),
    Rgb([0x7f, 0x7f, 0x7f]),
    Rgb([0xbc, 0xbd, 0x22]),
    Rgb([0x17, 0xbe, 0xcf]),
];

/// Panel color for a format label such as `"OBJ"`
pub fn color_for_label(label: &str) -> Rgb<u8> {
    match label {
        "OBJ" => OBJ_COLOR,
        "STL" => STL_COLOR,
        "GLB" | "GLTF" => GLTF_COLOR,
        _ => FALLBACK_COLOR,
    }
}

pub fn series_color(index: usize) -> Rgb<u8> {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_colors() {
        assert_eq!(color_for_label("GLB"), color_for_label("GLTF"));
        assert_eq!(color_for_label("PLY"), FALLBACK_COLOR);
        assert_eq!(series_color(10), series_color(0));
    }
}

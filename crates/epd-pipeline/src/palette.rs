//! Fixed panel palette and nearest-color matching.
//!
//! ACeP panels expose a 7-entry color table where entry 4 is a reserved
//! slot the controller never displays. The table is a hardware constant:
//! it is not configurable and the entry order is part of the device
//! protocol (the dithered output stores palette RGB values, the firmware
//! maps them back to indices).

/// The 7-color panel palette, in controller index order.
///
/// Index 4 is a reserved slot. It mirrors black so an accidental lookup
/// still renders something sane, but [`nearest`] never returns it.
pub const PALETTE: [[u8; 3]; 7] = [
    [0, 0, 0],       // black
    [255, 255, 255], // white
    [255, 255, 0],   // yellow
    [255, 0, 0],     // red
    [0, 0, 0],       // reserved
    [0, 0, 255],     // blue
    [0, 255, 0],     // green
];

/// Index of the reserved palette slot, skipped during matching.
pub const RESERVED_INDEX: usize = 4;

/// Find the palette index closest to `(r, g, b)` by squared Euclidean
/// distance in RGB space.
///
/// The scan runs in ascending index order and skips [`RESERVED_INDEX`]
/// outright. Because the comparison is strict, a distance tie resolves to
/// the lowest non-reserved index. Both properties are load-bearing: the
/// firmware implements the identical scan, and changing either the order
/// or the tie-break would silently desynchronize the two outputs.
pub fn nearest(r: u8, g: u8, b: u8) -> u8 {
    let mut best = 0u8;
    let mut best_dist = i32::MAX;

    for (i, color) in PALETTE.iter().enumerate() {
        if i == RESERVED_INDEX {
            continue;
        }

        let dr = r as i32 - color[0] as i32;
        let dg = g as i32 - color[1] as i32;
        let db = b as i32 - color[2] as i32;
        let dist = dr * dr + dg * dg + db * db;

        if dist < best_dist {
            best_dist = dist;
            best = i as u8;
        }
    }

    best
}

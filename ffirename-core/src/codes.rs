//! Fixed lookup tables for the FFI naming convention.

/// Color tag → single digit code
const COLOR_CODES: &[(&str, &str)] = &[
    ("GREEN", "1"),
    ("RED", "2"),
    ("MASKG", "3"),
    ("MASKR", "4"),
    ("MASKO", "5"),
];

/// Slot number → row_column on the 3x3 acquisition grid
const SLOT_CODES: &[(&str, &str)] = &[
    ("1", "1_1"),
    ("2", "1_2"),
    ("3", "1_3"),
    ("4", "2_1"),
    ("5", "2_2"),
    ("6", "2_3"),
    ("7", "3_1"),
    ("8", "3_2"),
    ("9", "3_3"),
];

pub fn color_code(tag: &str) -> Option<&'static str> {
    lookup(COLOR_CODES, tag)
}

pub fn slot_code(slot: &str) -> Option<&'static str> {
    lookup(SLOT_CODES, slot)
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, code)| *code)
}

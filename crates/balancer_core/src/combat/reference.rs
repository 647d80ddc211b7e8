//! Attack and defense skills of the standard creature population.
//!
//! Entries come in (unupgraded, upgraded) pairs per creature, e.g. pikeman and
//! halberdier first. War machines and neutral creatures follow the town lines.

/// Number of entries in each reference table, used as the averaging divisor.
pub const REFERENCE_POPULATION: usize = 159;

#[rustfmt::skip]
pub const STANDARD_DEFENSE: [i32; REFERENCE_POPULATION] = [
     5,  5,  3,  3,  8,  9, 12, 12,  7, 10, 15, 16, 20, 30,
     3,  3,  7,  7,  5,  5,  8, 10, 12, 12, 14, 14, 18, 27,
     3,  4,  6,  7, 10, 10,  8,  9, 12, 12, 13, 13, 16, 24,
     3,  4,  4,  4,  6,  8, 10, 10, 13, 13, 12, 14, 21, 28,
     4,  6,  5,  5,  7,  7,  9, 10, 10, 10, 16, 18, 15, 17,
     3,  4,  5,  6,  7,  8,  9, 10, 12, 15, 13, 14, 19, 25,
     2,  3,  5,  5,  4,  4,  7,  7, 11, 11, 12, 13, 17, 19,
     5,  6,  6,  8, 14, 16,  9, 10, 11, 12, 14, 14, 18, 20,
     9, 10,  8, 10, 12, 12,  2,  2, 13, 13,  0, 10,  0, 11,
     0,  9,  0,  8, 18, 18, 50, 40, 20, 30, 12, 10,  2,  1,
     5,  7,  8,  3,  7, 10, 10,  0,  5,  5, 40, 36, 32, 37,
    23, 33, 25, 27, 28,
];

#[rustfmt::skip]
pub const STANDARD_ATTACK: [i32; REFERENCE_POPULATION] = [
     4,  6,  6,  6,  8,  9, 10, 12, 12, 12, 15, 16, 20, 30,
     5,  6,  6,  7,  9,  9,  9,  9,  9,  9, 15, 15, 18, 27,
     3,  4,  6,  7,  7,  9, 11, 12, 12, 12, 16, 16, 19, 24,
     2,  4,  6,  7, 10, 10, 10, 10, 13, 13, 16, 16, 19, 26,
     5,  6,  5,  5,  7,  7, 10, 10, 13, 13, 16, 18, 17, 19,
     4,  5,  6,  6,  9, 10,  9, 10, 14, 15, 15, 16, 19, 25,
     4,  5,  7,  8,  8,  8, 13, 13, 13, 13, 15, 17, 17, 19,
     3,  4,  5,  6, 10, 11,  7,  8, 11, 12, 14, 14, 16, 18,
     9, 10, 10,  8, 11, 13,  2,  2, 15, 15,  0,  8,  0, 11,
     0,  9,  0, 12, 18, 21, 50, 40, 20, 30, 17, 12,  4,  1,
     6,  7,  9,  8, 14, 10, 10,  0,  0, 10, 40, 36, 32, 35,
    25, 33, 25, 25, 28,
];

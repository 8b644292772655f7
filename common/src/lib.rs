//! Cell-level primitives shared by the Shobu engine: a 16-bit bitboard for a
//! single 4x4 quadrant and the `Square` type addressing one of its cells.

pub mod bitboard;

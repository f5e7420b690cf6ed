//! Reference frames and the rotations between them

pub mod inertial;

pub use inertial::{ecliptic_to_equatorial, Equatorial};

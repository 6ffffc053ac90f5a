#![warn(clippy::all)]
#![allow(clippy::new_without_default)]
#![allow(non_camel_case_types)]
#![cfg_attr(debug_assertions, allow(dead_code))]

#[macro_use]
extern crate selka_diagnostics;

#[cfg(test)]
#[macro_use]
extern crate selka_math;

pub mod collision;
pub mod error;
pub mod pixel_mask;
pub mod surface;

pub use collision::check_collision;
pub use error::Collision_Error;
pub use pixel_mask::Pixel_Mask;
pub use surface::Indexed_Surface;

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]
#![allow(non_camel_case_types)]
#![cfg_attr(debug_assertions, allow(dead_code))]

#[cfg(test)]
#[macro_use]
extern crate selka_math;

pub mod test_common;

pub use test_common::*;

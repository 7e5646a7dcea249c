//! Crate errors, built with `error_chain!`.
//!
//! Other modules `use crate::errors::*;` to get `Error`, `ErrorKind`, `Result`
//! and the `chain_err` extension method.

use crate::walls::Orientation;
use error_chain::*;

error_chain! {
    errors {
        Configuration(width: usize, height: usize) {
            description("invalid maze dimensions")
            display("maze dimensions must be positive and addressable, got {} x {}", width, height)
        }
        BoundaryViolation(x: usize, y: usize, length: usize, orientation: Orientation, width: usize, height: usize) {
            description("wall exceeds maze boundary")
            display("{:?} wall of length {} at ({}, {}) exceeds the {} x {} maze boundary",
                    orientation, length, x, y, width, height)
        }
    }
}

//! A planar-geometry kernel for preparing mesh **Boolean (CSG)** operations:
//! classify a triangle against a cutting plane, compute the overlap segment of
//! two intersecting triangles, and subdivide a triangle so that the
//! intersection curve becomes an explicit edge in its triangulation.
//!
//! This is the per-triangle-pair primitive that a [BSP](https://en.wikipedia.org/wiki/Binary_space_partitioning)
//! tree driver applies across two meshes to build a solid Boolean. Everything
//! here operates on independent value types, so mapping the kernel over
//! unrelated triangle pairs needs no synchronization (see [`batch`]).
//!
//! # Features
//! - **f64** (default): use f64 as Real
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon for the [`batch`] helpers

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod batch;
pub mod errors;
pub mod float_types;
pub mod plane;
pub mod segment;
pub mod triangle;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use plane::{Classification, Plane};
pub use segment::LineSegment;
pub use triangle::{OverlapPath, Triangle, TriangleOverlap};

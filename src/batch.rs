//! Serial and parallel helpers for mapping kernel operations over slices of
//! independent triangles.
//!
//! Every kernel operation reads its inputs and produces new value-typed
//! triangles with no aliasing, so fanning out across unrelated triangles is
//! embarrassingly parallel. The `parallel` feature swaps these helpers for
//! rayon-backed equivalents with identical signatures; no synchronization is
//! needed either way because the only shared state is the read-only
//! tolerance.

use crate::plane::{Classification, Plane};
use crate::triangle::Triangle;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Classify every triangle in `triangles` against `plane`.
#[cfg(not(feature = "parallel"))]
pub fn classify_all(triangles: &[Triangle], plane: &Plane) -> Vec<Classification> {
    triangles.iter().map(|t| t.classify(plane)).collect()
}

/// Classify every triangle in `triangles` against `plane`, in parallel.
#[cfg(feature = "parallel")]
pub fn classify_all(triangles: &[Triangle], plane: &Plane) -> Vec<Classification> {
    triangles.par_iter().map(|t| t.classify(plane)).collect()
}

/// Split every triangle in `triangles` against `cutter`, concatenating the
/// resulting pieces. Triangles the cutter does not cross pass through
/// unchanged.
#[cfg(not(feature = "parallel"))]
pub fn split_all(triangles: &[Triangle], cutter: &Triangle) -> Vec<Triangle> {
    triangles.iter().flat_map(|t| t.split(cutter)).collect()
}

/// Split every triangle in `triangles` against `cutter` in parallel,
/// concatenating the resulting pieces.
#[cfg(feature = "parallel")]
pub fn split_all(triangles: &[Triangle], cutter: &Triangle) -> Vec<Triangle> {
    triangles
        .par_iter()
        .flat_map_iter(|t| t.split(cutter))
        .collect()
}

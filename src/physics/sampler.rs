// src/physics/sampler.rs

use serde::Serialize;

/// Points along lattice direction 1, endpoints included.
pub const NX: usize = 21;
/// Points along lattice direction 2, endpoints included.
pub const NY: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridPoint {
    pub grid_x: usize,
    pub grid_y: usize,
    pub sample: usize,
    pub offset_x: f64,
    pub offset_y: f64,
}

/// Uniform NX x NY scan of rigid in-plane translations over [0, Ax] x [0, Ay].
#[derive(Debug, Clone, Copy)]
pub struct Grid {
    pub ax: f64,
    pub ay: f64,
}

impl Grid {
    pub fn new(ax: f64, ay: f64) -> Self {
        Self { ax, ay }
    }

    pub fn point_count(&self) -> usize {
        NX * NY
    }

    /// X outer, Y inner; `sample` counts across the whole scan.
    pub fn points(&self) -> impl Iterator<Item = GridPoint> + '_ {
        (0..NX).flat_map(move |gx| {
            (0..NY).map(move |gy| GridPoint {
                grid_x: gx,
                grid_y: gy,
                sample: gx * NY + gy,
                offset_x: linspace(self.ax, NX, gx),
                offset_y: linspace(self.ay, NY, gy),
            })
        })
    }
}

/// k-th of n evenly spaced values in [0, extent]; the last one is `extent` exactly.
pub fn linspace(extent: f64, n: usize, k: usize) -> f64 {
    if n < 2 {
        return 0.0;
    }
    if k + 1 == n {
        return extent;
    }
    extent * k as f64 / (n - 1) as f64
}

//! Piecewise-cubic spline solver.
//!
//! For a waypoint set with N points (S = N − 1 segments), builds one dense
//! 4S × 4S linear system shared by both axes and solves it by LU
//! decomposition. Unknowns are the four polynomial coefficients of each
//! segment, expressed in segment-local normalized time τ ∈ [0, 1]:
//!
//!   p(τ) = c0 + c1·τ + c2·τ² + c3·τ³
//!
//! Equations: clamped boundaries (position and zero velocity at both path
//! ends) plus, per interior waypoint, position imposed from the segment on
//! each side and continuity of the first and second τ-derivatives. The
//! interior position constraint is deliberately imposed twice — once per
//! adjoining segment — which keeps the system square and guarantees the two
//! segments evaluate to the same point at the shared boundary.

use nalgebra::DMatrix;

use crate::error::PathError;
use crate::waypoint::WaypointSet;

/// Solved cubic coefficients: one `[c0, c1, c2, c3]` per axis per segment.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentTable {
    ax: Vec<[f64; 4]>,
    ay: Vec<[f64; 4]>,
}

impl SegmentTable {
    pub fn segments(&self) -> usize {
        self.ax.len()
    }

    /// Evaluate both axes of segment `seg` at local time `tau`.
    pub fn position(&self, seg: usize, tau: f64) -> (f64, f64) {
        let tau2 = tau * tau;
        let tau3 = tau2 * tau;
        let x = &self.ax[seg];
        let y = &self.ay[seg];
        (
            x[3] * tau3 + x[2] * tau2 + x[1] * tau + x[0],
            y[3] * tau3 + y[2] * tau2 + y[1] * tau + y[0],
        )
    }

    /// First τ-derivative of both axes of segment `seg` at local time `tau`.
    pub fn velocity(&self, seg: usize, tau: f64) -> (f64, f64) {
        let tau2 = tau * tau;
        let x = &self.ax[seg];
        let y = &self.ay[seg];
        (
            3.0 * x[3] * tau2 + 2.0 * x[2] * tau + x[1],
            3.0 * y[3] * tau2 + 2.0 * y[2] * tau + y[1],
        )
    }
}

/// Build and solve the spline system for a waypoint set.
///
/// Fails if the system is singular or the solution contains non-finite
/// values; callers keep the actor's previous path in that case.
pub fn solve(set: &WaypointSet) -> Result<SegmentTable, PathError> {
    let pts = set.points();
    let n = pts.len();
    let segments = n - 1;
    let dim = 4 * segments;

    let mut mat = DMatrix::<f64>::zeros(dim, dim);
    let mut rhs = DMatrix::<f64>::zeros(dim, 2);

    // Path start: position and zero velocity of the first segment at τ = 0.
    mat[(0, 0)] = 1.0;
    mat[(1, 1)] = 1.0;
    rhs[(0, 0)] = pts[0].x;
    rhs[(0, 1)] = pts[0].y;

    // Path end: position and zero velocity of the last segment at τ = 1.
    for j in 0..4 {
        mat[(dim - 2, dim - 4 + j)] = 1.0;
    }
    mat[(dim - 1, dim - 3)] = 1.0;
    mat[(dim - 1, dim - 2)] = 2.0;
    mat[(dim - 1, dim - 1)] = 3.0;
    rhs[(dim - 2, 0)] = pts[n - 1].x;
    rhs[(dim - 2, 1)] = pts[n - 1].y;

    // Interior waypoint i joins segment i−1 (left, τ = 1) to segment i
    // (right, τ = 0). Rows, with k = 4(i−1)+2 and l = 4(i−1):
    //   k     left position:    c0 + c1 + c2 + c3 = p_i
    //   k+1   C1 continuity:    c1 + 2c2 + 3c3 − c1' = 0
    //   k+2   C2 continuity:    2c2 + 6c3 − 2c2'     = 0
    //   k+3   right position:   c0'                  = p_i
    for i in 1..n - 1 {
        let k = 4 * (i - 1) + 2;
        let l = 4 * (i - 1);

        for j in 0..4 {
            mat[(k, l + j)] = 1.0;
        }
        mat[(k + 1, l + 1)] = 1.0;
        mat[(k + 1, l + 2)] = 2.0;
        mat[(k + 1, l + 3)] = 3.0;
        mat[(k + 1, l + 5)] = -1.0;

        mat[(k + 2, l + 2)] = 2.0;
        mat[(k + 2, l + 3)] = 6.0;
        mat[(k + 2, l + 6)] = -2.0;

        mat[(k + 3, l + 4)] = 1.0;

        rhs[(k, 0)] = pts[i].x;
        rhs[(k, 1)] = pts[i].y;
        rhs[(k + 3, 0)] = pts[i].x;
        rhs[(k + 3, 1)] = pts[i].y;
    }

    let solved = mat.lu().solve(&rhs).ok_or(PathError::SingularSystem)?;
    if solved.iter().any(|v| !v.is_finite()) {
        return Err(PathError::NonFiniteCoefficients);
    }

    let mut ax = Vec::with_capacity(segments);
    let mut ay = Vec::with_capacity(segments);
    for i in 0..segments {
        ax.push([
            solved[(4 * i, 0)],
            solved[(4 * i + 1, 0)],
            solved[(4 * i + 2, 0)],
            solved[(4 * i + 3, 0)],
        ]);
        ay.push([
            solved[(4 * i, 1)],
            solved[(4 * i + 1, 1)],
            solved[(4 * i + 2, 1)],
            solved[(4 * i + 3, 1)],
        ]);
    }

    Ok(SegmentTable { ax, ay })
}

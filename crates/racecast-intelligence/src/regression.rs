// ABOUTME: Log-quadratic least-squares fit of time against distance
// ABOUTME: Normal equations solved by Gaussian elimination with partial pivoting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Racecast Contributors

//! Curve fitting.
//!
//! Fits `time = a + b·ln(km) + c·ln(km)²` by ordinary least squares over the
//! flattened set of bucketed best performances. The 3×3 normal-equations
//! system is built from power sums of `x = ln(km)` (orders 0–4) and solved by
//! Gaussian elimination with partial pivoting. A degenerate system (fewer than
//! three distinct distances) is reported as "no model", never as a numerical
//! fault; downstream combination then proceeds on scaling and real candidates
//! alone.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::selector::DistanceBucket;

/// Pivot threshold below which the normal-equations system is degenerate
const SINGULARITY_EPSILON: f64 = 1e-10;

/// Coefficients and residual spread of the fitted log-quadratic curve.
///
/// Once built, the model is read-only input to every target-distance
/// combination in the same run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionModel {
    /// Constant coefficient
    pub a: f64,
    /// Linear coefficient on `ln(km)`
    pub b: f64,
    /// Quadratic coefficient on `ln(km)²`
    pub c: f64,
    /// Population standard deviation of the fit residuals, in minutes
    pub residual_std_dev: f64,
}

impl RegressionModel {
    /// Model point estimate at a distance, in minutes.
    #[must_use]
    pub fn predict_at_km(&self, km: f64) -> f64 {
        let x = km.ln();
        self.c.mul_add(x * x, self.b.mul_add(x, self.a))
    }
}

/// Fit the log-quadratic model over all bucketed best performances.
///
/// Each retained record contributes one `(ln(distance_km), time_minutes)`
/// pair. Returns `None` with fewer than two pairs, or when the normal
/// equations are degenerate.
#[must_use]
pub fn fit_buckets(buckets: &[DistanceBucket]) -> Option<RegressionModel> {
    let pairs: Vec<(f64, f64)> = buckets
        .iter()
        .flat_map(|bucket| {
            bucket
                .records
                .iter()
                .map(|record| (record.distance_km, record.time_minutes))
        })
        .collect();
    fit_pairs(&pairs)
}

/// Fit the log-quadratic model over raw `(km, minutes)` pairs.
#[must_use]
pub fn fit_pairs(pairs: &[(f64, f64)]) -> Option<RegressionModel> {
    let n = pairs.len();
    if n < 2 {
        debug!(pairs = n, "too few pairs for curve fit");
        return None;
    }

    let mut sum_x = 0.0;
    let mut sum_x2 = 0.0;
    let mut sum_x3 = 0.0;
    let mut sum_x4 = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x2y = 0.0;

    for &(km, y) in pairs {
        let x = km.ln();
        let x2 = x * x;
        sum_x += x;
        sum_x2 += x2;
        sum_x3 += x2 * x;
        sum_x4 += x2 * x2;
        sum_y += y;
        sum_xy += x * y;
        sum_x2y += x2 * y;
    }

    let matrix = [
        [n as f64, sum_x, sum_x2],
        [sum_x, sum_x2, sum_x3],
        [sum_x2, sum_x3, sum_x4],
    ];
    let rhs = [sum_y, sum_xy, sum_x2y];

    let [a, b, c] = solve_3x3(matrix, rhs)?;

    let residual_sq_sum: f64 = pairs
        .iter()
        .map(|&(km, y)| {
            let x = km.ln();
            let fitted = c.mul_add(x * x, b.mul_add(x, a));
            let residual = y - fitted;
            residual * residual
        })
        .sum();
    let residual_std_dev = (residual_sq_sum / n as f64).sqrt();

    Some(RegressionModel {
        a,
        b,
        c,
        residual_std_dev,
    })
}

/// Solve a 3×3 linear system by Gaussian elimination with partial pivoting.
///
/// Returns `None` when the best available pivot falls below the singularity
/// threshold (all sample distances effectively identical, or too few distinct
/// distances to pin down a quadratic).
fn solve_3x3(matrix: [[f64; 3]; 3], rhs: [f64; 3]) -> Option<[f64; 3]> {
    let mut augmented = [[0.0_f64; 4]; 3];
    for (row, (coefficients, &b)) in matrix.iter().zip(rhs.iter()).enumerate() {
        augmented[row][..3].copy_from_slice(coefficients);
        augmented[row][3] = b;
    }

    for col in 0..3 {
        let pivot_row = (col..3)
            .max_by(|&i, &j| augmented[i][col].abs().total_cmp(&augmented[j][col].abs()))?;
        if augmented[pivot_row][col].abs() < SINGULARITY_EPSILON {
            debug!(column = col, "degenerate normal equations, no model");
            return None;
        }
        augmented.swap(col, pivot_row);

        for row in (col + 1)..3 {
            let factor = augmented[row][col] / augmented[col][col];
            for k in col..4 {
                augmented[row][k] -= factor * augmented[col][k];
            }
        }
    }

    let mut solution = [0.0_f64; 3];
    for row in (0..3).rev() {
        let mut value = augmented[row][3];
        for col in (row + 1)..3 {
            value -= augmented[row][col] * solution[col];
        }
        solution[row] = value / augmented[row][row];
    }
    Some(solution)
}

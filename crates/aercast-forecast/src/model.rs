//! Ordinary-least-squares regression on the feature table.
//!
//! The model is small enough (five features plus intercept) that the normal
//! equations are solved directly with Gaussian elimination. A model is
//! fitted fresh for every forecast request and never cached.

use aercast_common::error::{AercastError, Result};

use crate::table::{FeatureTable, FEATURE_COUNT};

const DIM: usize = FEATURE_COUNT + 1; // intercept column + 5 features

/// Fitted linear model mapping a feature vector to a NAQI value.
#[derive(Debug, Clone)]
pub struct LinearModel {
    pub intercept: f64,
    pub coefficients: [f64; FEATURE_COUNT],
}

impl LinearModel {
    /// Fit by solving (XᵀX)β = Xᵀy where X carries a leading intercept
    /// column. Fails on an empty table or a singular system.
    pub fn fit(table: &FeatureTable) -> Result<Self> {
        if table.is_empty() {
            return Err(AercastError::Model(
                "cannot fit model on an empty feature table".to_string(),
            ));
        }

        // Accumulate XᵀX and Xᵀy without materialising X.
        let mut xtx = [[0.0f64; DIM]; DIM];
        let mut xty = [0.0f64; DIM];

        for (row, &y) in table.rows.iter().zip(table.targets.iter()) {
            let mut x = [1.0f64; DIM];
            x[1..].copy_from_slice(row);

            for i in 0..DIM {
                for j in 0..DIM {
                    xtx[i][j] += x[i] * x[j];
                }
                xty[i] += x[i] * y;
            }
        }

        let beta = solve(xtx, xty)?;

        let mut coefficients = [0.0; FEATURE_COUNT];
        coefficients.copy_from_slice(&beta[1..]);

        Ok(Self {
            intercept: beta[0],
            coefficients,
        })
    }

    pub fn predict(&self, features: &[f64; FEATURE_COUNT]) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(features.iter())
                .map(|(c, f)| c * f)
                .sum::<f64>()
    }
}

/// Solve a DIM×DIM linear system with Gaussian elimination and partial
/// pivoting.
fn solve(mut a: [[f64; DIM]; DIM], mut b: [f64; DIM]) -> Result<[f64; DIM]> {
    for col in 0..DIM {
        // Pivot on the largest remaining entry in this column.
        let mut pivot = col;
        for row in (col + 1)..DIM {
            if a[row][col].abs() > a[pivot][col].abs() {
                pivot = row;
            }
        }
        if a[pivot][col].abs() < 1e-12 {
            return Err(AercastError::Model(
                "model fit failed: feature matrix is singular".to_string(),
            ));
        }
        a.swap(col, pivot);
        b.swap(col, pivot);

        for row in (col + 1)..DIM {
            let factor = a[row][col] / a[col][col];
            for k in col..DIM {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    // Back substitution.
    let mut x = [0.0f64; DIM];
    for col in (0..DIM).rev() {
        let mut sum = b[col];
        for k in (col + 1)..DIM {
            sum -= a[col][k] * x[k];
        }
        x[col] = sum / a[col][col];
    }
    Ok(x)
}

//! Numeric edge weights
//!
//! Both solvers are generic over the weight type so that integer costs
//! (`i32`, `i64`) and real costs (`f32`, `f64`) share one implementation.
//! Weights must be signed: contraction and lazy heap offsets subtract
//! committed weights and may go negative.

use num_traits::{NumAssign, Signed, ToPrimitive};
use std::fmt::{Debug, Display};

/// Edge weight usable by every arborescence component.
pub trait Weight:
    Copy + PartialOrd + Debug + Display + NumAssign + Signed + ToPrimitive + Send + Sync + 'static
{
    /// Compare two totals, allowing `tolerance` of drift for real weights.
    ///
    /// Integer weights always compare exactly because their difference
    /// converts to an exact `f64`.
    fn approx_eq(self, other: Self, tolerance: f64) -> bool {
        if self == other {
            return true;
        }
        match (self - other).abs().to_f64() {
            Some(diff) => {
                let scale = self.abs().to_f64().unwrap_or(0.0).max(1.0);
                diff <= tolerance * scale
            }
            None => false,
        }
    }
}

impl<T> Weight for T where
    T: Copy + PartialOrd + Debug + Display + NumAssign + Signed + ToPrimitive + Send + Sync + 'static
{
}

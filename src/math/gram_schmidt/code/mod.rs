//! Gram-Schmidt implementations.
//!
//! Three in-place strategies that perform identical arithmetic and differ
//! only in how they stage temporary columns, plus the out-of-place oracle.

mod eliminate_temporary_copy;
mod inplace;
mod inplace_naive;
mod naive;

pub use eliminate_temporary_copy::gram_schmidt_inplace_eliminate_temporary_copy;
pub use inplace::gram_schmidt_inplace;
pub use inplace_naive::gram_schmidt_inplace_naive;
pub use naive::{gram_schmidt, gram_schmidt_naive, qr_naive, QrFactors};

use crate::error::Result;
use crate::matrix::{ColMajorMatrix, Element};

/// The in-place orthogonalization strategies under comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GramSchmidtStrategy {
    /// One temporary vector per update (baseline)
    InPlaceNaive,
    /// Raw copy into a reused scratch column
    InPlace,
    /// Cloned copy assigned over the scratch column
    EliminateTemporaryCopy,
}

impl GramSchmidtStrategy {
    /// Every strategy, baseline first
    pub const ALL: [GramSchmidtStrategy; 3] = [
        GramSchmidtStrategy::InPlaceNaive,
        GramSchmidtStrategy::InPlace,
        GramSchmidtStrategy::EliminateTemporaryCopy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            GramSchmidtStrategy::InPlaceNaive => "inplace_naive",
            GramSchmidtStrategy::InPlace => "inplace",
            GramSchmidtStrategy::EliminateTemporaryCopy => "eliminate_temporary_copy",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            GramSchmidtStrategy::InPlaceNaive => "Temporary vector allocated for every update",
            GramSchmidtStrategy::InPlace => "Raw copy into a reused scratch column",
            GramSchmidtStrategy::EliminateTemporaryCopy => {
                "Cloned copy assigned over the scratch column"
            }
        }
    }

    /// Orthonormalize the columns of `q` in place with this strategy
    #[inline]
    pub fn apply<T: Element>(self, q: &mut ColMajorMatrix<T>) -> Result<()> {
        match self {
            GramSchmidtStrategy::InPlaceNaive => gram_schmidt_inplace_naive(q),
            GramSchmidtStrategy::InPlace => gram_schmidt_inplace(q),
            GramSchmidtStrategy::EliminateTemporaryCopy => {
                gram_schmidt_inplace_eliminate_temporary_copy(q)
            }
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }
}

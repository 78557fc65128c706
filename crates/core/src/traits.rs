use common::error::Result;
use common::types::Vertex;

use crate::potential::Potential;
use crate::semimonomial::SemimonomialIdeal;

/// Trait for factories that turn a potential into the ideal of relations it defines.
pub trait IdealFactory<V: Vertex> {
    /// Derives the ideal generated by the cyclic derivatives of `potential`.
    ///
    /// Returns `Ok(ideal)` on success, or `Err(e)` if the potential is outside what the
    /// factory supports or does not define an ideal of the expected shape.
    fn create_ideal(&self, potential: &Potential<V>) -> Result<SemimonomialIdeal<V>>;
}

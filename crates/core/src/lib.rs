//! Path, cycle and potential algebra for quivers with potential.
//!
//! A potential is a formal integer combination of cycles of a quiver. This crate
//! canonicalizes cycles up to rotation, differentiates potentials cyclically and
//! derives the semimonomial ideal of relations a potential defines.
//!
//! ```
//! use qp_core::{DetachedCycle, Potential, SemimonomialIdealFactory};
//!
//! let potential = Potential::from_terms([
//!     (DetachedCycle::from_vertices(&[1, 2, 4, 5, 1]).unwrap(), -1),
//!     (DetachedCycle::from_vertices(&[1, 3, 4, 5, 1]).unwrap(), 1),
//! ]);
//! let ideal = SemimonomialIdealFactory
//!     .create_semimonomial_ideal_from_potential(&potential)
//!     .unwrap();
//! assert_eq!(ideal.binomial_generators().len(), 2);
//! ```

pub mod cycle;
pub mod linear_combination;
pub mod nakayama;
pub mod path;
pub mod potential;
pub mod quiver;
pub mod rotation;
pub mod semimonomial;
pub mod traits;

pub use common::error::{Error, ErrorKind, Result};
pub use common::types::{Arrow, Vertex};
pub use cycle::{DetachedCycle, SimpleCycle};
pub use linear_combination::LinearCombination;
pub use nakayama::NakayamaPermutation;
pub use path::Path;
pub use potential::{CycleClass, Potential};
pub use quiver::{Quiver, QuiverWithPotential};
pub use semimonomial::{DifferenceOfPaths, Generator, SemimonomialIdeal, SemimonomialIdealFactory};
pub use traits::IdealFactory;

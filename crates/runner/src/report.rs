use qp_core::{Generator, Potential, Quiver, QuiverWithPotential, traits::IdealFactory};

use super::config::ReportConfig;
use super::error::Error;

/// Derives the ideal of a potential with `factory` and renders it as report lines.
pub struct IdealReporter<F> {
    factory: F,
    config: ReportConfig,
}

impl<F> IdealReporter<F>
where
    F: IdealFactory<u32>,
{
    pub fn new(factory: F, config: ReportConfig) -> Self {
        IdealReporter { factory, config }
    }

    pub fn report(&self, name: &str, potential: &Potential<u32>) -> Result<Vec<String>, Error> {
        let mut lines = vec![format!("Potential '{}': {}", name, potential)];

        let quiver = Quiver::from_potential(potential);
        lines.push(format!(
            "Quiver: {} vertices, {} arrows",
            quiver.vertex_count(),
            quiver.arrow_count()
        ));

        if self.config.show_cycle_classes {
            for (class, count) in potential.cycle_classes() {
                lines.push(format!(
                    "  cycles of length {} with sign {:+}: {}",
                    class.length, class.sign, count
                ));
            }
        }

        let qp = QuiverWithPotential::new(quiver, potential.clone())?;

        if self.config.show_derivatives {
            for arrow in qp.quiver().arrows() {
                lines.push(format!(
                    "  ∂{} W = {}",
                    arrow,
                    potential.differentiate_cyclically(arrow)
                ));
            }
        }

        let ideal = qp.semimonomial_ideal(&self.factory)?;
        lines.push(format!(
            "Semimonomial ideal: {} monomial, {} binomial generators",
            ideal.monomial_generators().len(),
            ideal.binomial_generators().len()
        ));
        for (arrow, generator) in ideal.generators() {
            let kind = match generator {
                Generator::Monomial(_) => "monomial",
                Generator::Binomial(_) => "binomial",
            };
            lines.push(format!("  {} {}: {}", arrow, kind, generator));
        }

        Ok(lines)
    }
}

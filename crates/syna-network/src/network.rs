//! Ring network of bilateral synapses.

use syna_core::{Error, NetworkConfig, Result};

use crate::synapse::BilateralSynapse;

/// Synapses arranged on a ring.
///
/// Synapse `i` listens to every index within `radius` of `i` (wrapping), so
/// its input is the mean of its neighbourhood rather than a single slot.
#[derive(Debug, Clone)]
pub struct BilateralNetwork {
    synapses: Vec<BilateralSynapse>,
    connections: Vec<Vec<usize>>,
}

impl BilateralNetwork {
    /// Creates a network of `config.size` resting synapses.
    pub fn new(config: &NetworkConfig) -> Result<Self> {
        if config.size == 0 {
            return Err(Error::validation_field(
                "size",
                "network needs at least one synapse",
            ));
        }

        let synapses = (0..config.size)
            .map(|_| BilateralSynapse::new(config))
            .collect();
        let connections = ring_connections(config.size, config.radius);

        tracing::debug!(
            size = config.size,
            radius = config.radius,
            "Bilateral network initialized"
        );

        Ok(Self {
            synapses,
            connections,
        })
    }

    /// Number of synapses.
    pub fn size(&self) -> usize {
        self.synapses.len()
    }

    /// Indices synapse `index` listens to, or `None` if out of range.
    pub fn connections(&self, index: usize) -> Option<&[usize]> {
        self.connections.get(index).map(Vec::as_slice)
    }

    /// The synapses, in ring order.
    pub fn synapses(&self) -> &[BilateralSynapse] {
        &self.synapses
    }

    /// Feeds one creative and one analytical vector through every synapse.
    ///
    /// Both vectors must have exactly one entry per synapse.
    pub fn process_parallel(
        &mut self,
        creative_inputs: &[f64],
        analytical_inputs: &[f64],
    ) -> Result<Vec<f64>> {
        let expected = self.size();
        for inputs in [creative_inputs, analytical_inputs] {
            if inputs.len() != expected {
                return Err(Error::DimensionMismatch {
                    expected,
                    actual: inputs.len(),
                });
            }
        }

        let outputs: Vec<f64> = self
            .synapses
            .iter_mut()
            .zip(&self.connections)
            .map(|(synapse, neighbours)| {
                let creative = gather_inputs(creative_inputs, neighbours);
                let analytical = gather_inputs(analytical_inputs, neighbours);
                synapse.process_signal(creative, analytical)
            })
            .collect();

        let integrated = self
            .synapses
            .iter()
            .filter(|s| s.activation_pattern().last().is_some_and(|a| a.is_integrated()))
            .count();
        tracing::debug!(size = expected, integrated, "Network step complete");

        Ok(outputs)
    }

    /// Returns every synapse to rest.
    pub fn reset(&mut self) {
        for synapse in &mut self.synapses {
            synapse.reset();
        }
    }
}

/// Neighbourhoods on a ring, deduplicated and sorted.
fn ring_connections(size: usize, radius: usize) -> Vec<Vec<usize>> {
    // A radius past half the ring already covers everything
    let reach = radius.min(size / 2);
    (0..size)
        .map(|i| {
            let mut neighbours: Vec<usize> = (0..=2 * reach)
                .map(|offset| (i + size + offset - reach) % size)
                .collect();
            neighbours.sort_unstable();
            neighbours.dedup();
            neighbours
        })
        .collect()
}

/// Mean of the inputs at the given indices.
fn gather_inputs(inputs: &[f64], neighbours: &[usize]) -> f64 {
    if neighbours.is_empty() {
        return 0.0;
    }
    let sum: f64 = neighbours.iter().map(|&j| inputs[j]).sum();
    sum / neighbours.len() as f64
}

//! A single synapse with creative and analytical potentials.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use syna_core::NetworkConfig;

/// What a synapse emitted for one signal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Activation {
    /// The creative potential was the stronger one
    Creative(f64),

    /// The analytical potential was the stronger one (or they tied)
    Analytical(f64),

    /// Both potentials crossed the threshold and fired together
    Integrated(f64),
}

impl Activation {
    /// The emitted signal strength.
    pub fn value(&self) -> f64 {
        match self {
            Activation::Creative(v) | Activation::Analytical(v) | Activation::Integrated(v) => *v,
        }
    }

    /// Returns `true` for integrated firings.
    pub fn is_integrated(&self) -> bool {
        matches!(self, Activation::Integrated(_))
    }
}

/// Leaky integrator over two input channels.
///
/// Each signal decays the stored potentials and adds the new input, clamped to
/// `[0, 1]`. When both potentials exceed the integration threshold the
/// synapse fires `mean + gain × creative × analytical` and both potentials
/// reset to zero.
#[derive(Debug, Clone)]
pub struct BilateralSynapse {
    creative_potential: f64,
    analytical_potential: f64,
    integration_threshold: f64,
    decay: f64,
    integration_gain: f64,
    history: usize,
    activation_pattern: VecDeque<Activation>,
}

impl BilateralSynapse {
    /// Creates a resting synapse.
    pub fn new(config: &NetworkConfig) -> Self {
        Self {
            creative_potential: 0.0,
            analytical_potential: 0.0,
            integration_threshold: config.integration_threshold,
            decay: config.decay,
            integration_gain: config.integration_gain,
            history: config.history.max(1),
            activation_pattern: VecDeque::new(),
        }
    }

    /// Feeds one pair of inputs and returns the emitted signal.
    pub fn process_signal(&mut self, creative_input: f64, analytical_input: f64) -> f64 {
        self.creative_potential = self.update_potential(self.creative_potential, creative_input);
        self.analytical_potential =
            self.update_potential(self.analytical_potential, analytical_input);

        let activation = if self.creative_potential > self.integration_threshold
            && self.analytical_potential > self.integration_threshold
        {
            self.integrated_output()
        } else if self.creative_potential > self.analytical_potential {
            Activation::Creative(self.creative_potential)
        } else {
            Activation::Analytical(self.analytical_potential)
        };

        self.record(activation);
        activation.value()
    }

    fn update_potential(&self, potential: f64, input: f64) -> f64 {
        let input = if input.is_finite() { input } else { 0.0 };
        (potential * self.decay + input).clamp(0.0, 1.0)
    }

    fn integrated_output(&mut self) -> Activation {
        let c = self.creative_potential;
        let a = self.analytical_potential;
        let output = (c + a) / 2.0 + self.integration_gain * c * a;

        tracing::trace!(creative = c, analytical = a, output, "Synapse integrated");

        // Refractory: both sides discharge
        self.creative_potential = 0.0;
        self.analytical_potential = 0.0;
        Activation::Integrated(output)
    }

    fn record(&mut self, activation: Activation) {
        if self.activation_pattern.len() == self.history {
            self.activation_pattern.pop_front();
        }
        self.activation_pattern.push_back(activation);
    }

    /// Current creative potential.
    pub fn creative_potential(&self) -> f64 {
        self.creative_potential
    }

    /// Current analytical potential.
    pub fn analytical_potential(&self) -> f64 {
        self.analytical_potential
    }

    /// Recent activations, oldest first.
    pub fn activation_pattern(&self) -> impl Iterator<Item = &Activation> {
        self.activation_pattern.iter()
    }

    /// Number of integrated firings still in the history.
    pub fn integrated_count(&self) -> usize {
        self.activation_pattern
            .iter()
            .filter(|a| a.is_integrated())
            .count()
    }

    /// Returns the synapse to rest and clears its history.
    pub fn reset(&mut self) {
        self.creative_potential = 0.0;
        self.analytical_potential = 0.0;
        self.activation_pattern.clear();
    }
}

impl Default for BilateralSynapse {
    fn default() -> Self {
        Self::new(&NetworkConfig::default())
    }
}

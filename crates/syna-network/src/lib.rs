#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Syna Network Library
//!
//! A ring of [`BilateralSynapse`]s, each holding a creative and an analytical
//! potential. A synapse whose two potentials both cross the integration
//! threshold fires an integrated signal stronger than either side alone.

pub mod network;
pub mod synapse;

pub use network::BilateralNetwork;
pub use synapse::{Activation, BilateralSynapse};

// Re-export core types
pub use syna_core::{Error, NetworkConfig, Result};

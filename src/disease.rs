use serde::{Deserialize, Serialize};

use crate::error::DirnError;

/// The parameters governing compartment dwell times and transmission.
///
/// A node spends `duration + 1` steps in a timed compartment before it
/// becomes eligible to leave: the dwell check is a strict `>` against the
/// accumulated day count, and day 1 is the entry step. This off-by-one is
/// the historical meaning of the parameters and is preserved deliberately.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiseaseModel {
    /// Days before Exposed → Infectious.
    pub exposed_duration: u32,
    /// Days before Infectious → Removed.
    pub infectious_duration: u32,
    /// Per-edge, per-step hazard of exposure from one infectious neighbor.
    pub transmission_probability: f64,
}

impl DiseaseModel {
    pub fn new(
        exposed_duration: u32,
        infectious_duration: u32,
        transmission_probability: f64,
    ) -> Result<Self, DirnError> {
        if !transmission_probability.is_finite()
            || !(0.0..=1.0).contains(&transmission_probability)
        {
            return Err(DirnError::InvalidParameter(format!(
                "transmission probability {transmission_probability} is not in [0, 1]"
            )));
        }
        Ok(DiseaseModel {
            exposed_duration,
            infectious_duration,
            transmission_probability,
        })
    }
}

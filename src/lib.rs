//! Discrete-time SEIR simulation over static contact networks
//!
//! Each node of a contact network is an individual, each undirected edge a
//! possible transmission channel, and every node progresses through the four
//! mutually exclusive Susceptible → Exposed → Infectious → Removed
//! compartments in discrete steps. The crate provides:
//!
//! * the per-step transition engine ([`engine::step`]), which applies the
//!   timer-driven compartment transitions and the probabilistic
//!   neighbor-to-neighbor diffusion in a fixed order;
//! * the single-run driver ([`simulation::simulate`]), which produces a full
//!   [`StateHistory`] from an initial seeding;
//! * the Monte-Carlo batch runner ([`batch::run_batch`]), which estimates the
//!   expected final-susceptible fraction over many independent runs;
//! * the visualization encoding ([`history::encode`]) consumed by the
//!   external renderer, plus parsers for the adjacency-list and
//!   disease-parameter input formats ([`io`]);
//! * file-paths-in facades ([`runner`]) tying the above together for the
//!   front ends.
//!
//! All randomness flows through explicitly seeded [`rand`] generators, so
//! single runs are reproducible and batch runs fork across threads with
//! independent streams.

pub mod batch;
pub mod disease;
pub mod engine;
pub mod error;
pub mod history;
pub mod io;
pub mod logging;
pub mod network;
pub mod parameters;
pub mod population;
pub mod runner;
pub mod simulation;

pub use batch::{BatchSummary, run_batch};
pub use disease::DiseaseModel;
pub use engine::step;
pub use error::DirnError;
pub use history::StateHistory;
pub use logging::{disable_logging, enable_logging, set_log_level};
pub use network::ContactNetwork;
pub use parameters::Scenario;
pub use population::{Compartment, NodeState, PopulationState};
pub use runner::{VisualizationRun, run_batch_files, run_scenario, run_visualization};
pub use simulation::simulate;

//! Ports - boundaries between the learning core and its collaborators

pub mod observation;

pub use observation::Observation;

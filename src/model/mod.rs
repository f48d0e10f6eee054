pub mod artifacts;
pub mod estimator;
pub mod layers;
pub mod linear;
pub mod network;

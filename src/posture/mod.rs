pub mod angle;
pub mod classifier;
pub mod error;
pub mod landmark;
pub mod skeleton;
pub mod state;
pub mod synthetic;

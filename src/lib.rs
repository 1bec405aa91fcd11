// No unsafe here!
#![forbid(unsafe_code)]

#[macro_use]
extern crate lazy_static;
extern crate serde;

// Shared (structs) between library and binary
pub mod shared_interface;
pub mod cli;

// Reference data
pub mod vocabulary;

// Fitted transforms and model
pub mod encoding;
pub mod scaling;
pub mod feature_assembly;
pub mod model;

// Loading and inference
pub mod artifacts;
pub mod inference;

#[cfg(test)]
mod fixtures;

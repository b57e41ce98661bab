// Domain module: problem model and optimization logic

pub mod formulation;
pub mod models;
pub mod patterns;
pub mod plan;
pub mod scaling;
pub mod solver_service;
pub mod value_objects;

pub use models::*;
pub use plan::*;
pub use solver_service::*;
pub use value_objects::*;

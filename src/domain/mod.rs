// Domain layer: entity model and ports (interfaces). No behavior beyond
// field storage and rendering; all validation lives in the factory.

pub mod model;
pub mod ports;

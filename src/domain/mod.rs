// Domain layer: input/outcome models and the ports the session is written against.

pub mod model;
pub mod ports;

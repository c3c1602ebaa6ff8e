// Domain layer: core models, ports (interfaces) and pure roster services.
// No external dependencies beyond std/serde.

pub mod model;
pub mod ports;
pub mod services;

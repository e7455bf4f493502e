// Domain layer: catalog models and the console/exercise ports. No I/O here.

pub mod model;
pub mod ports;

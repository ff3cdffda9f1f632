// Domain layer: records, the sort key and the ports the engine depends on.

pub mod model;
pub mod ports;

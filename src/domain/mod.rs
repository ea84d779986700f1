// Domain layer: the item model and the ports the core talks through.

pub mod model;
pub mod ports;

// Domain layer: the view-history model and the ports the engine is driven through.

pub mod model;
pub mod ports;

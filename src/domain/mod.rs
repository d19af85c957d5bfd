// Domain layer: venue models, the static catalog and ports (interfaces).

pub mod capacity;
pub mod catalog;
pub mod model;
pub mod ports;

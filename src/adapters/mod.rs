// Adapters layer: concrete implementations for external systems.

pub mod nominatim;

pub use nominatim::NominatimGeocoder;

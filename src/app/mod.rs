pub mod controller;
pub mod render;

pub use controller::{SearchController, SearchOutcome};
pub use render::{JsonRenderer, Renderer, TextRenderer};

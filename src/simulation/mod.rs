pub mod magnets;
pub mod params;
pub mod states;
pub mod forces;
pub mod stability;
pub mod dynamics;
pub mod engine;
pub mod analysis;
pub mod scenario;

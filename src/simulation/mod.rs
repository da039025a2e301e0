pub mod states;
pub mod params;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod checksum;
pub mod scenario;

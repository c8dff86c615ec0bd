pub mod constants;
pub mod coordinates;
pub mod events;
pub mod geometry;
pub mod kepler;
pub mod lunar;
pub mod orbital_elements;
pub mod params;
pub mod planet;
pub mod projection;
pub mod ref_system;
pub mod satellite;
pub mod skyward;
pub mod skyward_errors;
pub mod time;

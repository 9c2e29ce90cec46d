//! The numeric core: time normalization, analytic ephemeris theories,
//! sidereal time and house computation.
//!
//! Everything in this module tree is a pure function of its inputs. The
//! ephemeris is compiled-in analytic theory (no data files, no network), so
//! results are bit-identical across runs for the same input.

pub mod delta_t;
pub mod ephemeris;
pub mod error;
pub mod frames;
pub mod houses;
pub mod lunar;
pub mod normalize;
pub mod planets;
pub mod sidereal;
pub mod solar;

pub use ephemeris::{planet_positions, EPHEMERIS_MAX_JD, EPHEMERIS_MIN_JD};
pub use error::AstroError;
pub use houses::{ascendant, placidus_houses, GeoLocation, HousePositions};
pub use normalize::{normalize, NormalizedInstant};

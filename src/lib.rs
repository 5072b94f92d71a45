#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

//! Converts New Zealand Transverse Mercator 2000 (NZGD2000) grid coordinates
//! into WGS84 longitude/latitude.
//!
//! ```
//! use nzgd2000::{convert, Nztm};
//!
//! let lonlat = convert(Nztm::new(1570650.8507, 5446794.6762));
//!
//! assert!((lonlat.longitude() - 172.65034155794453).abs() < 1e-9);
//! assert!((lonlat.latitude() - -41.12962129641851).abs() < 1e-9);
//! ```

use thiserror::Error;

pub mod line;
pub mod lonlat;
pub mod nztm;

pub use line::{convert_line, convert_multi_line, coordinates_text};
pub use lonlat::LonLat;
pub use nztm::Nztm;

pub(crate) mod projections {
    pub mod transverse_mercator;
}

pub(crate) mod constants;
pub(crate) mod utility;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Coordinate parameters are not valid: {0}")]
    InvalidCoord(String),
}

/// Converts one NZTM2000 point into WGS84 longitude/latitude degrees.
///
/// Never fails: non-finite points, and northings past a pole, fall back to
/// longitude 0, latitude ±90.
pub fn convert(point: Nztm) -> LonLat {
    point.to_lonlat()
}

pub trait ParseCoord {
    fn parse_coord(value: &str) -> Result<Self, Error>
    where Self: Sized;
}

pub fn from_str<S, T>(value: S) -> Result<T, Error>
where
    S: AsRef<str>,
    T: ParseCoord
{
    T::parse_coord(value.as_ref())
}

trait ThisOrThat {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T;
    fn ternary_lazy<F, E, T>(&self, r#true: F, r#false: E) -> T
    where
        F: Fn() -> T,
        E: Fn() -> T;
}

impl ThisOrThat for bool {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T {
        if *self { r#true } else { r#false }
    }

    fn ternary_lazy<F, E, T>(&self, r#true: F, r#false: E) -> T
    where
        F: Fn() -> T,
        E: Fn() -> T,
    {
        if *self { r#true() } else { r#false() }
    }
}

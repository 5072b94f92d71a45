// GRS80 semi-major axis a
pub(crate) const GRS80_A: f64 = 6_378_137.;
// GRS80 flattening
#[allow(clippy::unreadable_literal)]
pub(crate) const GRS80_F: f64 = 1.0 / 298.257222101;

// NZTM2000 central meridian, degrees
pub(crate) const NZTM_LON0: f64 = 173.;
// NZTM2000 latitude of origin, degrees
pub(crate) const NZTM_LAT0: f64 = 0.;
// NZTM2000 central scale factor
pub(crate) const NZTM_K0: f64 = 9996.0 / 10_000.;
pub(crate) const NZTM_FALSE_EASTING: f64 = 1_600_000.;
pub(crate) const NZTM_FALSE_NORTHING: f64 = 10_000_000.;

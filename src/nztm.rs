use std::{fmt::Display, str::FromStr};

use crate::{Error, lonlat::LonLat, ParseCoord, projections::transverse_mercator::NZTM, utility::{format_number, parse_pair}};

/// A New Zealand Transverse Mercator 2000 grid coordinate in meters, the
/// planar form of NZGD2000. Values are not range checked; anything far from
/// New Zealand simply projects poorly.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nztm {
    #[cfg_attr(feature = "serde", serde(alias = "x"))]
    pub(crate) easting: f64,
    #[cfg_attr(feature = "serde", serde(alias = "y"))]
    pub(crate) northing: f64,
}

impl Nztm {
    pub fn new(easting: f64, northing: f64) -> Nztm {
        Self {
            easting,
            northing,
        }
    }

    #[inline]
    pub fn easting(&self) -> f64 {
        self.easting
    }

    #[inline]
    pub fn northing(&self) -> f64 {
        self.northing
    }

    /// Converts from [`Nztm`] to WGS84 [`LonLat`] using the inverse
    /// Transverse Mercator projection.
    ///
    /// Non-finite values, and northings that invert to a latitude at or
    /// beyond a pole, give longitude 0 and latitude ±90 with the sign of
    /// the northing relative to the equator.
    ///
    /// # Usage
    ///
    /// ```
    /// use nzgd2000::Nztm;
    ///
    /// let pole = Nztm::new(1600000.0, 40000000.0).to_lonlat();
    ///
    /// assert_eq!(pole.longitude(), 0.0);
    /// assert_eq!(pole.latitude(), 90.0);
    /// ```
    pub fn to_lonlat(&self) -> LonLat {
        NZTM.to_lonlat(self.easting, self.northing)
    }
}

impl ParseCoord for Nztm {
    fn parse_coord(value: &str) -> Result<Self, Error> {
        let (easting, northing) = parse_pair(value)?;
        Ok(Nztm::new(easting, northing))
    }
}

impl FromStr for Nztm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Nztm::parse_coord(s)
    }
}

impl From<(f64, f64)> for Nztm {
    fn from((easting, northing): (f64, f64)) -> Self {
        Nztm::new(easting, northing)
    }
}

impl From<[f64; 2]> for Nztm {
    fn from([easting, northing]: [f64; 2]) -> Self {
        Nztm::new(easting, northing)
    }
}

impl Display for Nztm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let easting = format_number(&mut buf, self.easting);
        let mut buf = ryu::Buffer::new();
        let northing = format_number(&mut buf, self.northing);
        write!(
            f,
            "{easting},{northing}",
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn reference_point() {
        let lonlat = Nztm::new(1_570_650.850_7, 5_446_794.676_2).to_lonlat();

        assert_abs_diff_eq!(lonlat.longitude(), 172.650_341_557_944_53, epsilon = 1e-9);
        assert_abs_diff_eq!(lonlat.latitude(), -41.129_621_296_418_51, epsilon = 1e-9);
    }

    #[test]
    fn repeated_conversion_is_identical() {
        let point = Nztm::new(1_748_735.5, 5_428_584.4);
        let first = point.to_lonlat();
        let second = point.to_lonlat();

        assert_eq!(first.longitude().to_bits(), second.longitude().to_bits());
        assert_eq!(first.latitude().to_bits(), second.latitude().to_bits());
    }

    #[test]
    fn latitude_follows_northing() {
        let mut previous = Nztm::new(1_600_000., 4_700_000.).to_lonlat();

        for step in 1..=200_i32 {
            let northing = 4_700_000. + f64::from(step) * 8_000.;
            let current = Nztm::new(1_600_000., northing).to_lonlat();

            // 8km of northing is ~0.072 degrees of latitude
            let delta = current.latitude() - previous.latitude();
            assert!(delta > 0.06 && delta < 0.08, "jump of {delta} at northing {northing}");
            previous = current;
        }
    }

    #[test]
    fn small_northing_steps_are_smooth() {
        let base = Nztm::new(1_570_650.850_7, 5_446_794.676_2).to_lonlat();
        let up = Nztm::new(1_570_650.850_7, 5_446_795.676_2).to_lonlat();
        let down = Nztm::new(1_570_650.850_7, 5_446_793.676_2).to_lonlat();

        // One meter is ~9e-6 degrees of latitude
        assert!(up.latitude() > base.latitude() && base.latitude() > down.latitude());
        assert_abs_diff_eq!(up.latitude() - base.latitude(), 9e-6, epsilon = 1e-6);
        assert_abs_diff_eq!(base.latitude() - down.latitude(), 9e-6, epsilon = 1e-6);
    }

    #[test]
    fn southern_pole_fallback() {
        let pole = Nztm::new(1_600_000., -20_000_000.).to_lonlat();

        assert_eq!(pole.longitude(), 0.);
        assert_eq!(pole.latitude(), -90.);
    }

    #[test]
    fn parse_and_display() {
        let point: Nztm = "1570650.8507,5446794.6762".parse().unwrap();
        assert_eq!(point, Nztm::new(1_570_650.850_7, 5_446_794.676_2));
        assert_eq!(point.to_string(), "1570650.8507,5446794.6762");

        let point: Nztm = crate::from_str("1570650.8507 5446794.6762").unwrap();
        assert_eq!(point.easting(), 1_570_650.850_7);
        assert_eq!(point.northing(), 5_446_794.676_2);

        assert_eq!(Nztm::new(1_600_000., 10_000_000.).to_string(), "1600000,10000000");

        assert!("1570650.8507".parse::<Nztm>().is_err());
        assert!("east,north".parse::<Nztm>().is_err());
    }

    #[test]
    fn from_tuples() {
        assert_eq!(Nztm::from((1., 2.)), Nztm::new(1., 2.));
        assert_eq!(Nztm::from([1., 2.]), Nztm::new(1., 2.));
        assert_eq!(LonLat::from(Nztm::new(1_600_000., 10_000_000.)), Nztm::new(1_600_000., 10_000_000.).to_lonlat());
    }
}

use std::{fmt::Display, str::FromStr};

use crate::{Error, nztm::Nztm, ParseCoord, utility::{dms, format_number, parse_pair}};

/// Mean radius of Earth in meters
///
/// <https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius>
const EARTH_MEAN_RADIUS_M: f64 = 6371.0088 * 1000.0;

/// Representation of a WGS84 longitude/latitude point, longitude first. Produced
/// from an [`Nztm`] grid coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LonLat {
    #[cfg_attr(feature = "serde", serde(alias = "lon"))]
    pub(crate) longitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
}

impl LonLat {
    /// Internal-only constructor that doesn't check the bounds of lon/lat
    pub(crate) fn new(lon: f64, lat: f64) -> LonLat {
        Self {
            longitude: lon,
            latitude: lat,
        }
    }

    /// Tries to create a longitude/latitude point. First checks if the
    /// values are valid:
    /// * Longitude must be in range [-180,180]
    /// * Latitude must be in range [-90,90]
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoord`] if either longitude or latitude are invalid.
    ///
    /// # Usage
    ///
    /// ```
    /// use nzgd2000::LonLat;
    ///
    /// let coord = LonLat::create(174.7772, -41.2889).unwrap();
    ///
    /// assert_eq!(coord.longitude(), 174.7772);
    /// assert_eq!(coord.latitude(), -41.2889);
    ///
    /// assert!(LonLat::create(-200.0, 0.0).is_err());
    /// assert!(LonLat::create(0.0, 100.0).is_err());
    /// ```
    pub fn create(lon: f64, lat: f64) -> Result<LonLat, Error> {
        let hd = f64::from(dms::HD);
        let qd = f64::from(dms::QD);

        if !(-hd..=hd).contains(&lon) {
            Err(Error::InvalidCoord(format!("Longitude {lon} outside of valid range [-180, 180].")))
        } else if !(-qd..=qd).contains(&lat) {
            Err(Error::InvalidCoord(format!("Latitude {lat} outside of valid range [-90, 90].")))
        } else {
            Ok(LonLat::new(lon, lat))
        }
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns whether the current point is in the northern hemisphere.
    pub fn is_north(&self) -> bool {
        self.latitude.is_sign_positive()
    }

    /// Returns the distance in meters between two [`LonLat`] points
    /// using the [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula).
    /// Uses the [mean radius of the Earth](https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius)
    /// in the calculation: `6371.0088`
    pub fn haversine(&self, other: &LonLat) -> f64 {
        let lat1_r = self.latitude.to_radians();
        let lat2_r = other.latitude.to_radians();

        2.0 * EARTH_MEAN_RADIUS_M * (
            ((other.latitude - self.latitude).to_radians() / 2.0).sin().powi(2) +
            lat1_r.cos() * lat2_r.cos() *
            ((other.longitude - self.longitude).to_radians() / 2.0).sin().powi(2)
        ).sqrt().asin()
    }

    /// Converts from [`Nztm`] to [`LonLat`]
    ///
    /// # Usage
    ///
    /// ```
    /// use nzgd2000::{LonLat, Nztm};
    ///
    /// let grid = Nztm::new(1570650.8507, 5446794.6762);
    /// let converted = LonLat::from_nztm(&grid);
    ///
    /// assert!((converted.longitude() - 172.65034155794453).abs() < 1e-9);
    /// assert!((converted.latitude() - -41.12962129641851).abs() < 1e-9);
    /// ```
    pub fn from_nztm(value: &Nztm) -> LonLat {
        value.to_lonlat()
    }
}

impl ParseCoord for LonLat {
    /// Parses `"longitude,latitude"`, the same form [`Display`] writes.
    fn parse_coord(value: &str) -> Result<Self, Error> {
        let (lon, lat) = parse_pair(value)?;
        LonLat::create(lon, lat)
    }
}

impl FromStr for LonLat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LonLat::parse_coord(s)
    }
}

impl From<Nztm> for LonLat {
    fn from(value: Nztm) -> Self {
        value.to_lonlat()
    }
}

/// Writes the KML coordinate token `longitude,latitude`. Whole numbers are
/// written without a fractional part, so the polar fallback is `0,90`.
impl Display for LonLat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let lon = format_number(&mut buf, self.longitude);
        let mut buf = ryu::Buffer::new();
        let lat = format_number(&mut buf, self.latitude);
        write!(
            f,
            "{lon},{lat}",
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn display_is_kml_token() {
        let coord = LonLat::new(172.650_341_557_944_53, -41.129_621_296_418_51);
        assert_eq!(coord.to_string(), "172.65034155794453,-41.12962129641851");

        let coord = LonLat::new(0., 90.);
        assert_eq!(coord.to_string(), "0,90");

        let coord = LonLat::new(172.5, -41.);
        assert_eq!(coord.to_string(), "172.5,-41");
        assert_eq!(coord.to_string().parse::<LonLat>().unwrap(), coord);
    }

    #[test]
    fn parse_checks_range() {
        let coord: LonLat = "174.7772, -41.2889".parse().unwrap();
        assert_eq!(coord, LonLat::new(174.7772, -41.2889));

        assert!(matches!("181,0".parse::<LonLat>(), Err(Error::InvalidCoord(_))));
        assert!(matches!("0,-91".parse::<LonLat>(), Err(Error::InvalidCoord(_))));
        assert!(matches!(crate::from_str::<_, LonLat>("0"), Err(Error::InvalidCoord(_))));
    }

    #[test]
    fn hemisphere() {
        assert!(LonLat::new(172., 0.).is_north());
        assert!(!LonLat::new(172., -41.).is_north());
    }

    #[test]
    fn haversine_distance() {
        let wellington = LonLat::new(174.7772, -41.2889);
        let auckland = LonLat::new(174.7633, -36.8485);

        assert!(wellington.haversine(&wellington).abs() < 1e-9);
        // Roughly 494km between the two city centres
        assert_abs_diff_eq!(wellington.haversine(&auckland) / 1000., 494., epsilon = 5.);
        assert_abs_diff_eq!(
            wellington.haversine(&auckland),
            auckland.haversine(&wellington),
            epsilon = 1e-6
        );
    }
}

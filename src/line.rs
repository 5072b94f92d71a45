//! Bulk conversion of track geometry.
//!
//! Tracks arrive as a list of line segments, each an ordered list of NZTM
//! points. Segment structure and point order are kept as is.

use crate::{lonlat::LonLat, nztm::Nztm};

/// Converts every point of a polyline, keeping the order.
///
/// ```
/// use nzgd2000::{convert_line, Nztm};
///
/// let line = [Nztm::new(1570650.8507, 5446794.6762), Nztm::new(1570700.0, 5446850.0)];
/// let converted = convert_line(&line);
///
/// assert_eq!(converted.len(), 2);
/// assert!(converted[1].latitude() > converted[0].latitude());
/// ```
pub fn convert_line(points: &[Nztm]) -> Vec<LonLat> {
    points
        .iter()
        .map(Nztm::to_lonlat)
        .collect()
}

/// Converts a multi-segment line. Empty segments stay empty.
pub fn convert_multi_line<L>(segments: &[L]) -> Vec<Vec<LonLat>>
where
    L: AsRef<[Nztm]>
{
    segments
        .iter()
        .map(|segment| convert_line(segment.as_ref()))
        .collect()
}

/// Joins points into the text of a KML `<coordinates>` element:
/// `lon,lat` tokens separated by single spaces.
///
/// ```
/// use nzgd2000::{coordinates_text, LonLat};
///
/// let points = [
///     LonLat::create(172.5, -41.0).unwrap(),
///     LonLat::create(172.25, -41.125).unwrap(),
/// ];
///
/// assert_eq!(coordinates_text(&points), "172.5,-41 172.25,-41.125");
/// ```
pub fn coordinates_text(points: &[LonLat]) -> String {
    points
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

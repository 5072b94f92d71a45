use std::f64::consts::{PI, TAU};

use crate::Error;

pub(crate) mod dms {
    /// Degrees per quarter turn
    pub const QD: i32 = 90;
    /// Degrees per half turn
    pub const HD: i32 = 2 * QD;
}

/// Evaluate a polynomial, coefficients ordered from the highest power down
pub(crate) fn polyval(p: &[f64], x: f64) -> f64 {
    p
        .iter()
        .fold(0_f64, |acc, val| acc*x + val)
}

/// Shortest round-trip text for `value`, with whole numbers written without
/// a trailing `.0` (`90`, not `90.0`).
pub(crate) fn format_number(buf: &mut ryu::Buffer, value: f64) -> &str {
    let text = buf.format(value);
    text.strip_suffix(".0").unwrap_or(text)
}

/// Split a pair of numbers separated by a comma and/or whitespace.
pub(crate) fn parse_pair(value: &str) -> Result<(f64, f64), Error> {
    let mut pieces = value
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|piece| !piece.is_empty());

    let (Some(first), Some(second), None) = (pieces.next(), pieces.next(), pieces.next()) else {
        return Err(Error::InvalidCoord(format!("Expected two numbers, got \"{value}\".")));
    };

    Ok((parse_number(first)?, parse_number(second)?))
}

fn parse_number(piece: &str) -> Result<f64, Error> {
    piece
        .parse()
        .map_err(|_| Error::InvalidCoord(format!("\"{piece}\" is not a number.")))
}

pub(crate) trait GeoMath {
    fn adjust_lon(&self) -> Self;
}

impl GeoMath for f64 {
    /// Wrap a longitude in radians into (-pi, pi] by whole turns.
    fn adjust_lon(&self) -> f64 {
        if *self > -PI && *self <= PI {
            return *self;
        }

        let value = self.rem_euclid(TAU);
        if value > PI {
            value - TAU
        } else {
            value
        }
    }
}

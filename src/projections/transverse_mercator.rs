use std::f64::consts::FRAC_PI_2;

use lazy_static::lazy_static;
use log::trace;

use crate::{
    constants::{GRS80_A, GRS80_F, NZTM_FALSE_EASTING, NZTM_FALSE_NORTHING, NZTM_K0, NZTM_LAT0, NZTM_LON0},
    lonlat::LonLat,
    utility::{dms, polyval, GeoMath},
    ThisOrThat,
};

// ================================
// Meridional Arc Constants
// ================================

const MAXPOW: usize = 4;

const EN_COEFF: [f64; 15] = [
    // en[0], polynomial in es of order 4
    -175. / 16384., -5. / 256., -3. / 64., -1. / 4., 1.,
    // en[1]/es, polynomial in es of order 3
    -175. / 16384., -5. / 256., -3. / 64., 3. / 4.,
    // en[2]/es^2, polynomial in es of order 2
    -175. / 24576., -5. / 384., 15. / 32.,
    // en[3]/es^3, polynomial in es of order 1
    -35. / 6144., 35. / 96.,
    // en[4]/es^4, polynomial in es of order 0
    315. / 1024.,
];  // count = 15

// Footpoint latitude inversion
pub(crate) const MAX_ITER: usize = 20;
const EPSLN: f64 = 1.0e-10;

const F: f64 = GRS80_F;
const E2: f64 = F * (2. - F);

lazy_static! {
    /// NZTM2000 parameters, derived once and shared by every conversion.
    pub(crate) static ref NZTM: TransverseMercator = TransverseMercator::nztm();
}

pub(crate) struct TransverseMercator {
    a: f64,
    k0: f64,
    es: f64,
    ep2: f64,
    lon0: f64,
    ml0: f64,
    x0: f64,
    y0: f64,
    en: [f64; MAXPOW + 1],
}

impl TransverseMercator {
    pub fn nztm() -> TransverseMercator {
        let es = E2;
        let ep2 = es / (1. - es);

        let mut en = [0_f64; MAXPOW + 1];

        let mut o = 0;
        let mut d = 1.;

        for (l, coeff) in en.iter_mut().enumerate() {
            let m = MAXPOW - l;
            *coeff = d * polyval(&EN_COEFF[o..=o + m], es);
            o += m + 1;
            d *= es;
        }

        let mut tm = Self {
            a: GRS80_A,
            k0: NZTM_K0,
            es,
            ep2,
            lon0: NZTM_LON0.to_radians(),
            ml0: 0.,
            x0: NZTM_FALSE_EASTING,
            y0: NZTM_FALSE_NORTHING,
            en,
        };

        let lat0 = NZTM_LAT0.to_radians();
        tm.ml0 = tm.meridian_arc(lat0, lat0.sin(), lat0.cos());

        tm
    }

    /// Meridional distance from the equator to `phi`, in units of the
    /// semi-major axis.
    fn meridian_arc(&self, phi: f64, sin_phi: f64, cos_phi: f64) -> f64 {
        let en = &self.en;
        let sc = sin_phi * cos_phi;
        let s2 = sin_phi.powi(2);

        en[0] * phi - sc * (en[1] + s2 * (en[2] + s2 * (en[3] + s2 * en[4])))
    }

    /// Recovers the latitude whose meridional arc is `arc`, along with the
    /// number of correction steps taken to converge. If the correction never
    /// drops below [`EPSLN`] within [`MAX_ITER`] steps the last estimate is
    /// returned with `None`.
    pub fn footpoint_latitude(&self, arc: f64) -> (f64, Option<usize>) {
        let k = 1. / (1. - self.es);
        let mut phi = arc;

        for iteration in 1..=MAX_ITER {
            let (sin_phi, cos_phi) = phi.sin_cos();
            let t = 1. - self.es * sin_phi.powi(2);
            let t = (self.meridian_arc(phi, sin_phi, cos_phi) - arc) * (t * t.sqrt()) * k;
            phi -= t;
            if t.abs() < EPSLN {
                return (phi, Some(iteration));
            }
        }

        trace!("footpoint latitude did not converge for arc {arc}, using {phi}");
        (phi, None)
    }

    pub fn to_lonlat(&self, easting: f64, northing: f64) -> LonLat {
        let x = (easting - self.x0) * (1. / self.a);
        let y = (northing - self.y0) * (1. / self.a);

        if !(x.is_finite() && y.is_finite()) {
            trace!("non-finite grid coordinate ({easting}, {northing})");
            return polar(y);
        }

        let (phi, _) = self.footpoint_latitude(self.ml0 + y / self.k0);

        if phi.abs() >= FRAC_PI_2 {
            trace!("footpoint latitude {phi} beyond the pole for ({easting}, {northing})");
            return polar(y);
        }

        let (sin_phi, cos_phi) = phi.sin_cos();
        let tan_phi = (cos_phi.abs() > EPSLN).ternary_lazy(|| phi.tan(), || 0.);

        let c = self.ep2 * cos_phi.powi(2);
        let cs = c.powi(2);
        let t = tan_phi.powi(2);
        let ts = t.powi(2);

        let con = 1. - self.es * sin_phi.powi(2);
        let d = x * con.sqrt() / self.k0;
        let ds = d.powi(2);
        let con = con * tan_phi;

        let lat = phi
            - (con * ds / (1. - self.es))
                * 0.5
                * (1.
                    - ds / 12.
                        * (5. + 3. * t - 9. * c * t + c - 4. * cs
                            - ds / 30.
                                * (61. + 90. * t - 252. * c * t + 45. * ts + 46. * c
                                    - ds / 56. * (1385. + 3633. * t + 4095. * ts + 1574. * ts * t))));

        let lon = self.lon0
            + d * (1.
                - ds / 6.
                    * (1. + 2. * t + c
                        - ds / 20.
                            * (5. + 28. * t + 24. * ts + 8. * c * t + 6. * c
                                - ds / 42. * (61. + 662. * t + 1320. * ts + 720. * ts * t))))
                / cos_phi;

        let hd = f64::from(dms::HD);
        let lat = lat.to_degrees();
        let lon = lon.adjust_lon().to_degrees();
        // Rounding just above -pi can land on -180
        let lon = (lon <= -hd).ternary(lon + 2. * hd, lon);

        // Only reachable far outside the projection's useful extent
        if !(lat.is_finite() && lon.is_finite()) {
            trace!("series diverged for ({easting}, {northing})");
            return polar(y);
        }

        let qd = f64::from(dms::QD);
        LonLat::new(lon, lat.clamp(-qd, qd))
    }
}

fn polar(y: f64) -> LonLat {
    LonLat::new(0., (y < 0.).ternary(-1., 1.) * f64::from(dms::QD))
}

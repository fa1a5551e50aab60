//! TEOS-10 seawater conversions
//!
//! Scalar building blocks for the thermodynamic conversion step: sea
//! pressure from depth, Absolute Salinity from Practical Salinity and
//! Conservative Temperature from in-situ temperature. The polynomials are
//! transcribed from the TEOS-10 reference toolbox; deviations from the
//! reference are limited to the omitted Absolute Salinity anomaly atlas and
//! the skipped entropy refinement of potential temperature (both a few
//! parts in 10^3 of the quantities involved, see DESIGN.md).
//!
//! All functions propagate NaN, so land cells pass through unchanged.

/// "Specific heat" of Conservative Temperature, J kg^-1 K^-1
const GSW_CP0: f64 = 3991.867_957_119_63;

/// Standard Ocean Reference Salinity, g kg^-1
const GSW_SSO: f64 = 35.16504;

/// Ratio of Absolute to Practical Salinity for Reference Composition seawater
const GSW_UPS: f64 = GSW_SSO / 35.0;

/// Salinity normalization factor of the Gibbs-function polynomials
const GSW_SFAC: f64 = 0.024_882_667_558_461_5;

/// Sea pressure (dbar) at a depth (m, positive down) and latitude (degrees).
///
/// Saunders (1981) hydrostatic approximation; agrees with the reference
/// `p_from_z` to a fraction of a dbar over the water column.
pub fn pressure_from_depth(depth: f64, lat: f64) -> f64 {
    let x = lat.to_radians().sin().powi(2);
    let c1 = 5.92e-3 + 5.25e-3 * x;
    ((1.0 - c1) - ((1.0 - c1).powi(2) - 8.84e-6 * depth).sqrt()) / 4.42e-6
}

/// Absolute Salinity (g kg^-1) from Practical Salinity.
///
/// Applies the Reference Composition scaling `SA = SP * 35.16504 / 35` and
/// the Baltic Sea adjustment. The open-ocean Absolute Salinity anomaly
/// (which would consume the pressure argument through an atlas lookup) is
/// taken as zero.
pub fn absolute_salinity(sp: f64, _p: f64, lon: f64, lat: f64) -> f64 {
    if in_baltic(lon, lat) {
        (GSW_SSO - 0.087) / 35.0 * sp + 0.087
    } else {
        GSW_UPS * sp
    }
}

/// Conservative Temperature (deg C) from in-situ temperature (ITS-90) at
/// sea pressure `p` (dbar).
pub fn conservative_temperature(sa: f64, t: f64, p: f64) -> f64 {
    ct_from_pt(sa, pt0_from_t(sa, t, p))
}

/// Potential temperature referenced to 0 dbar, from the McDougall et al.
/// (2003) polynomial used as the starting estimate in the reference
/// toolbox (good to a few millidegrees over the oceanographic range).
pub fn pt0_from_t(sa: f64, t: f64, p: f64) -> f64 {
    let s1 = sa / GSW_UPS;
    t + p * (8.654_839_133_954_42e-6
        - s1 * 1.416_362_997_448_81e-6
        - p * 7.382_864_671_357_37e-9
        + t * (-8.382_413_570_396_98e-6
            + s1 * 2.839_333_685_855_34e-8
            + t * 1.778_039_652_186_56e-8
            + p * 1.711_556_192_082_33e-10))
}

/// Conservative Temperature from potential temperature via the TEOS-10
/// potential-enthalpy polynomial (IOC et al. 2010, eqn. 3.3.3).
pub fn ct_from_pt(sa: f64, pt: f64) -> f64 {
    let x2 = GSW_SFAC * sa;
    let x = x2.sqrt();
    let y = pt * 0.025;

    let pot_enthalpy = 61.01362420681071
        + y * (168776.46138048015
            + y * (-2735.2785605119625
                + y * (2574.2164453821433
                    + y * (-1536.6644434977543
                        + y * (545.7340497931629
                            + (-50.91091728474331 - 18.30489878927802 * y) * y)))))
        + x2 * (268.5520265845071
            + y * (-12019.028203559312
                + y * (3734.858026725145
                    + y * (-2046.7671145057618
                        + y * (465.28655623826234
                            + (-0.6370820302376359 - 10.650848542359153 * y) * y))))
            + x * (937.2099110620707
                + y * (588.1802812170108
                    + y * (248.39476522971285
                        + (-3.871557904936333 - 2.6268019854268356 * y) * y))
                + x * (-1687.914374187449
                    + x * (246.9598888781377
                        + x * (123.59576582457964 - 48.5891069025409 * x))
                    + y * (936.3206544460336
                        + y * (-942.7827304544439
                            + y * (369.4389437509002
                                + (-33.83664947895248 - 9.987880382780322 * y) * y))))));

    pot_enthalpy / GSW_CP0
}

/// Baltic Sea region test of the reference toolbox: latitudes 50N-69N
/// between a two-segment western edge and a single-segment eastern edge.
fn in_baltic(lon: f64, lat: f64) -> bool {
    if !(50.0..=69.0).contains(&lat) {
        return false;
    }
    let west = if lat <= 59.0 {
        interp(50.0, 12.6, 59.0, 7.0, lat)
    } else {
        interp(59.0, 7.0, 69.0, 26.0, lat)
    };
    let east = interp(50.0, 45.0, 69.0, 26.0, lat);
    west <= lon && lon <= east
}

fn interp(x0: f64, y0: f64, x1: f64, y1: f64, x: f64) -> f64 {
    y0 + (y1 - y0) * (x - x0) / (x1 - x0)
}

//! Geocentric longitudes of Mercury through Saturn.
//!
//! Positions come from the JPL approximate Keplerian mean elements
//! (Standish, *Approximate Positions of the Planets*), which are fitted for
//! the interval 1800–2050, the same window the ephemeris facade enforces.
//! Each evaluation solves the Kepler equation by Newton iteration, rotates
//! the orbital-plane position into J2000 ecliptic coordinates, subtracts the
//! Earth–Moon barycenter position, applies one light-time iteration, and
//! corrects for annual aberration and nutation.

use crate::astro::frames::{
    accumulated_precession_deg, normalize_deg, nutation_in_longitude_deg,
};
use crate::models::Planet;

/// Light travels one AU in this many days.
const LIGHT_TIME_DAYS_PER_AU: f64 = 0.005_775_518_3;

/// Constant of aberration, arcseconds.
const ABERRATION_ARCSEC: f64 = 20.495_52;

/// Keplerian mean elements and their centennial rates.
///
/// Semi-major axis in AU; angles in degrees. `l` is the mean longitude,
/// `long_peri` the longitude of perihelion (ϖ), `long_node` the longitude
/// of the ascending node (Ω).
struct KeplerElements {
    a: f64,
    a_dot: f64,
    e: f64,
    e_dot: f64,
    i: f64,
    i_dot: f64,
    l: f64,
    l_dot: f64,
    long_peri: f64,
    long_peri_dot: f64,
    long_node: f64,
    long_node_dot: f64,
}

const MERCURY: KeplerElements = KeplerElements {
    a: 0.38709927,
    a_dot: 0.00000037,
    e: 0.20563593,
    e_dot: 0.00001906,
    i: 7.00497902,
    i_dot: -0.00594749,
    l: 252.25032350,
    l_dot: 149_472.67411175,
    long_peri: 77.45779628,
    long_peri_dot: 0.16047689,
    long_node: 48.33076593,
    long_node_dot: -0.12534081,
};

const VENUS: KeplerElements = KeplerElements {
    a: 0.72333566,
    a_dot: 0.00000390,
    e: 0.00677672,
    e_dot: -0.00004107,
    i: 3.39467605,
    i_dot: -0.00078890,
    l: 181.97909950,
    l_dot: 58_517.81538729,
    long_peri: 131.60246718,
    long_peri_dot: 0.00268329,
    long_node: 76.67984255,
    long_node_dot: -0.27769418,
};

/// Earth–Moon barycenter; the ~4700 km geocenter offset is far below the
/// theory's accuracy for any target planet.
const EM_BARY: KeplerElements = KeplerElements {
    a: 1.00000261,
    a_dot: 0.00000562,
    e: 0.01671123,
    e_dot: -0.00004392,
    i: -0.00001531,
    i_dot: -0.01294668,
    l: 100.46457166,
    l_dot: 35_999.37244981,
    long_peri: 102.93768193,
    long_peri_dot: 0.32327364,
    long_node: 0.0,
    long_node_dot: 0.0,
};

const MARS: KeplerElements = KeplerElements {
    a: 1.52371034,
    a_dot: 0.00001847,
    e: 0.09339410,
    e_dot: 0.00007882,
    i: 1.84969142,
    i_dot: -0.00813131,
    l: -4.55343205,
    l_dot: 19_140.30268499,
    long_peri: -23.94362959,
    long_peri_dot: 0.44441088,
    long_node: 49.55953891,
    long_node_dot: -0.29257343,
};

const JUPITER: KeplerElements = KeplerElements {
    a: 5.20288700,
    a_dot: -0.00011607,
    e: 0.04838624,
    e_dot: -0.00013253,
    i: 1.30439695,
    i_dot: -0.00183714,
    l: 34.39644051,
    l_dot: 3_034.74612775,
    long_peri: 14.72847983,
    long_peri_dot: 0.21252668,
    long_node: 100.47390909,
    long_node_dot: 0.20469106,
};

const SATURN: KeplerElements = KeplerElements {
    a: 9.53667594,
    a_dot: -0.00125060,
    e: 0.05386179,
    e_dot: -0.00050991,
    i: 2.48599187,
    i_dot: 0.00193609,
    l: 49.95424423,
    l_dot: 1_222.49362201,
    long_peri: 92.59887831,
    long_peri_dot: -0.41897216,
    long_node: 113.66242448,
    long_node_dot: -0.28867794,
};

fn elements_for(planet: Planet) -> Option<&'static KeplerElements> {
    match planet {
        Planet::Mercury => Some(&MERCURY),
        Planet::Venus => Some(&VENUS),
        Planet::Mars => Some(&MARS),
        Planet::Jupiter => Some(&JUPITER),
        Planet::Saturn => Some(&SATURN),
        _ => None,
    }
}

/// Solve the Kepler equation M = E − e·sin(E) for E, both in degrees.
///
/// Newton iteration in the degree form used by the JPL note. Returns an
/// error message instead of a silently unconverged value.
fn solve_kepler_deg(m_deg: f64, e: f64) -> Result<f64, String> {
    // e expressed in degrees for the additive seed.
    let e_star = e.to_degrees();
    let mut ecc_anomaly = m_deg + e_star * m_deg.to_radians().sin();

    for _ in 0..50 {
        let delta_m = m_deg - (ecc_anomaly - e_star * ecc_anomaly.to_radians().sin());
        let delta_e = delta_m / (1.0 - e * ecc_anomaly.to_radians().cos());
        ecc_anomaly += delta_e;
        if delta_e.abs() < 1e-8 {
            return Ok(ecc_anomaly);
        }
    }
    Err(format!(
        "Kepler equation did not converge (M = {m_deg:.6}°, e = {e:.6})"
    ))
}

/// Heliocentric J2000 ecliptic position in AU at `t` centuries TT.
fn heliocentric_position(el: &KeplerElements, t: f64) -> Result<[f64; 3], String> {
    let a = el.a + el.a_dot * t;
    let e = el.e + el.e_dot * t;
    let i = (el.i + el.i_dot * t).to_radians();
    let l = el.l + el.l_dot * t;
    let long_peri = el.long_peri + el.long_peri_dot * t;
    let long_node = el.long_node + el.long_node_dot * t;

    let omega = (long_peri - long_node).to_radians();
    let node = long_node.to_radians();

    // Mean anomaly, brought into (−180°, 180°] for the solver seed.
    let mut m = (l - long_peri).rem_euclid(360.0);
    if m > 180.0 {
        m -= 360.0;
    }

    let ecc_anomaly = solve_kepler_deg(m, e)?.to_radians();

    // Position in the orbital plane, perihelion along +x.
    let xp = a * (ecc_anomaly.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ecc_anomaly.sin();

    // Rotate by argument of perihelion, inclination, and node.
    let (sin_w, cos_w) = omega.sin_cos();
    let (sin_node, cos_node) = node.sin_cos();
    let (sin_i, cos_i) = i.sin_cos();

    let x = (cos_w * cos_node - sin_w * sin_node * cos_i) * xp
        + (-sin_w * cos_node - cos_w * sin_node * cos_i) * yp;
    let y = (cos_w * sin_node + sin_w * cos_node * cos_i) * xp
        + (-sin_w * sin_node + cos_w * cos_node * cos_i) * yp;
    let z = (sin_w * sin_i) * xp + (cos_w * sin_i) * yp;

    Ok([x, y, z])
}

/// Heliocentric position of the Earth–Moon barycenter.
fn earth_position(t: f64) -> Result<[f64; 3], String> {
    heliocentric_position(&EM_BARY, t)
}

/// Apparent geocentric ecliptic longitude of a planet, degrees in [0, 360).
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn apparent_longitude_deg(planet: Planet, t: f64) -> Result<f64, String> {
    let el = elements_for(planet)
        .ok_or_else(|| format!("{} has no Keplerian elements", planet.name()))?;

    let earth = earth_position(t)?;
    let geometric = heliocentric_position(el, t)?;

    let dx = geometric[0] - earth[0];
    let dy = geometric[1] - earth[1];
    let dz = geometric[2] - earth[2];
    let distance = (dx * dx + dy * dy + dz * dz).sqrt();

    // One light-time iteration: re-evaluate the planet at the instant the
    // observed light left it. The Earth stays at the reception time.
    let t_retarded = t - distance * LIGHT_TIME_DAYS_PER_AU / 36_525.0;
    let retarded = heliocentric_position(el, t_retarded)?;
    let dx = retarded[0] - earth[0];
    let dy = retarded[1] - earth[1];

    let lambda = normalize_deg(dy.atan2(dx).to_degrees());

    // Annual aberration (dominant term); Sun and planet directions are both
    // J2000-referred here, so the relative angle is frame-consistent.
    let sun_longitude = normalize_deg(earth[1].atan2(earth[0]).to_degrees() + 180.0);
    let aberration =
        -(ABERRATION_ARCSEC / 3600.0) * (sun_longitude - lambda).to_radians().cos();

    // The mean elements are J2000-referred; the chart contract, like the
    // solar and lunar theories, uses the equinox of date. Precess, then add
    // nutation.
    Ok(normalize_deg(
        lambda + accumulated_precession_deg(t) + aberration + nutation_in_longitude_deg(t),
    ))
}

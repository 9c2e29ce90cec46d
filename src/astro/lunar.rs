//! Geocentric lunar longitude and the lunar nodes.
//!
//! Longitude: the principal sine terms of the ELP main problem as tabulated
//! in Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 47, with the
//! eccentricity damping factor E and the three additive planetary terms.
//! Good to a few thousandths of a degree over the supported span.
//!
//! Nodes: the mean ascending node comes from the Delaunay Ω polynomial; the
//! true node adds the short-period osculating corrections (dominant term
//! 1.4979° with a 173-day period).

use crate::astro::frames::{delaunay_arguments, normalize_deg, nutation_in_longitude_deg};

/// Mean elements of the lunar orbit, degrees, at `t` centuries TT from J2000.
struct LunarArguments {
    /// L′ — mean longitude of the Moon.
    l: f64,
    /// D — mean elongation of the Moon from the Sun.
    d: f64,
    /// M — mean anomaly of the Sun.
    m: f64,
    /// M′ — mean anomaly of the Moon.
    mp: f64,
    /// F — argument of latitude of the Moon.
    f: f64,
}

fn lunar_arguments(t: f64) -> LunarArguments {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    LunarArguments {
        l: normalize_deg(
            218.3164477 + 481_267.88123421 * t - 0.0015786 * t2 + t3 / 538_841.0
                - t4 / 65_194_000.0,
        ),
        d: normalize_deg(
            297.8501921 + 445_267.1114034 * t - 0.0018819 * t2 + t3 / 545_868.0
                - t4 / 113_065_000.0,
        ),
        m: normalize_deg(357.5291092 + 35_999.0502909 * t - 0.0001536 * t2 + t3 / 24_490_000.0),
        mp: normalize_deg(
            134.9633964 + 477_198.8675055 * t + 0.0087414 * t2 + t3 / 69_699.0
                - t4 / 14_712_000.0,
        ),
        f: normalize_deg(
            93.2720950 + 483_202.0175233 * t - 0.0036539 * t2 - t3 / 3_526_000.0
                + t4 / 863_310_000.0,
        ),
    }
}

/// Principal longitude terms: `[nD, nM, nM', nF, amplitude]`.
///
/// Amplitudes in 1e-6 degrees; terms with a Sun-anomaly multiple carry the
/// eccentricity factor E (E² for |nM| = 2).
#[rustfmt::skip]
static LONGITUDE_TERMS: [[f64; 5]; 59] = [
    // nD    nM    nM'   nF    amplitude
    [ 0.0,  0.0,  1.0,  0.0,  6_288_774.0],
    [ 2.0,  0.0, -1.0,  0.0,  1_274_027.0],
    [ 2.0,  0.0,  0.0,  0.0,    658_314.0],
    [ 0.0,  0.0,  2.0,  0.0,    213_618.0],
    [ 0.0,  1.0,  0.0,  0.0,   -185_116.0],
    [ 0.0,  0.0,  0.0,  2.0,   -114_332.0],
    [ 2.0,  0.0, -2.0,  0.0,     58_793.0],
    [ 2.0, -1.0, -1.0,  0.0,     57_066.0],
    [ 2.0,  0.0,  1.0,  0.0,     53_322.0],
    [ 2.0, -1.0,  0.0,  0.0,     45_758.0],
    [ 0.0,  1.0, -1.0,  0.0,    -40_923.0],
    [ 1.0,  0.0,  0.0,  0.0,    -34_720.0],
    [ 0.0,  1.0,  1.0,  0.0,    -30_383.0],
    [ 2.0,  0.0,  0.0, -2.0,     15_327.0],
    [ 0.0,  0.0,  1.0,  2.0,    -12_528.0],
    [ 0.0,  0.0,  1.0, -2.0,     10_980.0],
    [ 4.0,  0.0, -1.0,  0.0,     10_675.0],
    [ 0.0,  0.0,  3.0,  0.0,     10_034.0],
    [ 4.0,  0.0, -2.0,  0.0,      8_548.0],
    [ 2.0,  1.0, -1.0,  0.0,     -7_888.0],
    [ 2.0,  1.0,  0.0,  0.0,     -6_766.0],
    [ 1.0,  0.0, -1.0,  0.0,     -5_163.0],
    [ 1.0,  1.0,  0.0,  0.0,      4_987.0],
    [ 2.0, -1.0,  1.0,  0.0,      4_036.0],
    [ 2.0,  0.0,  2.0,  0.0,      3_994.0],
    [ 4.0,  0.0,  0.0,  0.0,      3_861.0],
    [ 2.0,  0.0, -3.0,  0.0,      3_665.0],
    [ 0.0,  1.0, -2.0,  0.0,     -2_689.0],
    [ 2.0,  0.0, -1.0,  2.0,     -2_602.0],
    [ 2.0, -1.0, -2.0,  0.0,      2_390.0],
    [ 1.0,  0.0,  1.0,  0.0,     -2_348.0],
    [ 2.0, -2.0,  0.0,  0.0,      2_236.0],
    [ 0.0,  1.0,  2.0,  0.0,     -2_120.0],
    [ 0.0,  2.0,  0.0,  0.0,     -2_069.0],
    [ 2.0, -2.0, -1.0,  0.0,      2_048.0],
    [ 2.0,  0.0,  1.0, -2.0,     -1_773.0],
    [ 2.0,  0.0,  0.0,  2.0,     -1_595.0],
    [ 4.0, -1.0, -1.0,  0.0,      1_215.0],
    [ 0.0,  0.0,  2.0,  2.0,     -1_110.0],
    [ 3.0,  0.0, -1.0,  0.0,       -892.0],
    [ 2.0,  1.0,  1.0,  0.0,       -810.0],
    [ 4.0, -1.0, -2.0,  0.0,        759.0],
    [ 0.0,  2.0, -1.0,  0.0,       -713.0],
    [ 2.0,  2.0, -1.0,  0.0,       -700.0],
    [ 2.0,  1.0, -2.0,  0.0,        691.0],
    [ 2.0, -1.0,  0.0, -2.0,        596.0],
    [ 4.0,  0.0,  1.0,  0.0,        549.0],
    [ 0.0,  0.0,  4.0,  0.0,        537.0],
    [ 4.0, -1.0,  0.0,  0.0,        520.0],
    [ 1.0,  0.0, -2.0,  0.0,       -487.0],
    [ 2.0,  1.0,  0.0, -2.0,       -399.0],
    [ 0.0,  0.0,  2.0, -2.0,       -381.0],
    [ 1.0,  1.0,  1.0,  0.0,        351.0],
    [ 3.0,  0.0, -2.0,  0.0,       -340.0],
    [ 4.0,  0.0, -3.0,  0.0,        330.0],
    [ 2.0, -1.0,  2.0,  0.0,        327.0],
    [ 0.0,  2.0,  1.0,  0.0,       -323.0],
    [ 1.0,  1.0, -1.0,  0.0,        299.0],
    [ 2.0,  0.0,  3.0,  0.0,        294.0],
];

/// Geometric (mean-equinox-of-date) lunar longitude, degrees in [0, 360).
pub fn geometric_longitude_deg(t: f64) -> f64 {
    let args = lunar_arguments(t);
    // Eccentricity of the Earth's orbit decays slowly; terms involving the
    // solar anomaly shrink with it.
    let e = 1.0 - 0.002516 * t - 0.0000074 * t * t;

    let mut sum = 0.0_f64;
    for term in &LONGITUDE_TERMS {
        let angle = (term[0] * args.d + term[1] * args.m + term[2] * args.mp + term[3] * args.f)
            .to_radians();
        let damping = match term[1].abs() as i32 {
            0 => 1.0,
            1 => e,
            _ => e * e,
        };
        sum += term[4] * damping * angle.sin();
    }

    // Additive terms: Venus (A1), Jupiter (A2), and the flattening term.
    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    sum += 3958.0 * a1.sin();
    sum += 1962.0 * (args.l - args.f).to_radians().sin();
    sum += 318.0 * a2.sin();

    normalize_deg(args.l + sum * 1e-6)
}

/// Apparent lunar longitude (geometric + nutation), degrees in [0, 360).
pub fn apparent_longitude_deg(t: f64) -> f64 {
    normalize_deg(geometric_longitude_deg(t) + nutation_in_longitude_deg(t))
}

/// Mean ascending node of the lunar orbit, degrees in [0, 360).
pub fn mean_node_deg(t: f64) -> f64 {
    let [.., om] = delaunay_arguments(t);
    normalize_deg(om.to_degrees())
}

/// Short-period corrections from mean to true node: `[nD, nM, nM', nF, amplitude°]`.
#[rustfmt::skip]
static NODE_TERMS: [[f64; 5]; 5] = [
    // nD    nM    nM'   nF    amplitude (deg)
    [ 2.0,  0.0,  0.0, -2.0, -1.4979],
    [ 0.0,  1.0,  0.0,  0.0, -0.1500],
    [ 2.0,  0.0,  0.0,  0.0, -0.1226],
    [ 0.0,  0.0,  0.0,  2.0,  0.1176],
    [ 0.0,  0.0,  2.0, -2.0, -0.0801],
];

/// True (osculating) ascending node, degrees in [0, 360).
///
/// The true node oscillates around the mean node with an amplitude of about
/// 1.5° and a half-eclipse-year period.
pub fn true_node_deg(t: f64) -> f64 {
    let args = lunar_arguments(t);
    let mut correction = 0.0_f64;
    for term in &NODE_TERMS {
        let angle = (term[0] * args.d + term[1] * args.m + term[2] * args.mp + term[3] * args.f)
            .to_radians();
        correction += term[4] * angle.sin();
    }
    normalize_deg(mean_node_deg(t) + correction)
}

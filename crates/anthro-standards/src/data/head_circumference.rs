//! Head circumference-for-age (cm), birth to 60 months. L is 1 throughout.

use crate::table::Breakpoint;

const fn bp(month: f64, m: f64, s: f64) -> Breakpoint {
    Breakpoint::new(month, 1.0, m, s)
}

pub(crate) const BOYS: &[Breakpoint] = &[
    bp(0.0, 34.4618, 0.03686),
    bp(1.0, 37.2759, 0.03133),
    bp(2.0, 39.1285, 0.02997),
    bp(3.0, 40.5135, 0.02918),
    bp(4.0, 41.6317, 0.02868),
    bp(5.0, 42.5576, 0.02837),
    bp(6.0, 43.3306, 0.02817),
    bp(7.0, 43.9803, 0.02804),
    bp(8.0, 44.5300, 0.02796),
    bp(9.0, 44.9998, 0.02792),
    bp(10.0, 45.4051, 0.02790),
    bp(11.0, 45.7573, 0.02789),
    bp(12.0, 46.0661, 0.02789),
    bp(18.0, 47.4345, 0.02841),
    bp(24.0, 48.2515, 0.02870),
    bp(36.0, 49.4915, 0.02926),
    bp(48.0, 50.3453, 0.02963),
    bp(60.0, 50.9845, 0.02993),
];

pub(crate) const GIRLS: &[Breakpoint] = &[
    bp(0.0, 33.8787, 0.03496),
    bp(1.0, 36.5463, 0.03210),
    bp(2.0, 38.2521, 0.03168),
    bp(3.0, 39.5328, 0.03140),
    bp(4.0, 40.5817, 0.03119),
    bp(5.0, 41.4590, 0.03102),
    bp(6.0, 42.1995, 0.03087),
    bp(7.0, 42.8290, 0.03075),
    bp(8.0, 43.3671, 0.03063),
    bp(9.0, 43.8300, 0.03053),
    bp(10.0, 44.2319, 0.03044),
    bp(11.0, 44.5844, 0.03035),
    bp(12.0, 44.8965, 0.03027),
    bp(18.0, 46.1948, 0.03001),
    bp(24.0, 47.1816, 0.03001),
    bp(36.0, 48.4862, 0.03005),
    bp(48.0, 49.3582, 0.03008),
    bp(60.0, 49.9821, 0.03012),
];

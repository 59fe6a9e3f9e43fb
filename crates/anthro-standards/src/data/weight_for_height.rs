//! Weight-for-length/height (kg), 45 to 120 cm.

use crate::table::Breakpoint;

const BOYS_L: f64 = -0.3521;
const GIRLS_L: f64 = -0.3833;

const fn boys(cm: f64, m: f64, s: f64) -> Breakpoint {
    Breakpoint::new(cm, BOYS_L, m, s)
}

const fn girls(cm: f64, m: f64, s: f64) -> Breakpoint {
    Breakpoint::new(cm, GIRLS_L, m, s)
}

pub(crate) const BOYS: &[Breakpoint] = &[
    boys(45.0, 2.4410, 0.09182),
    boys(50.0, 3.3278, 0.08667),
    boys(55.0, 4.5106, 0.08164),
    boys(60.0, 5.9256, 0.08039),
    boys(65.0, 7.4327, 0.08028),
    boys(70.0, 8.6154, 0.07872),
    boys(75.0, 9.6408, 0.07770),
    boys(80.0, 10.6083, 0.07722),
    boys(85.0, 11.7966, 0.07795),
    boys(90.0, 12.9593, 0.07958),
    boys(95.0, 14.0991, 0.08100),
    boys(100.0, 15.3528, 0.08238),
    boys(105.0, 16.7395, 0.08416),
    boys(110.0, 18.2987, 0.08630),
    boys(115.0, 20.0126, 0.08877),
    boys(120.0, 21.8828, 0.09123),
];

pub(crate) const GIRLS: &[Breakpoint] = &[
    girls(45.0, 2.4607, 0.09029),
    girls(50.0, 3.3200, 0.08718),
    girls(55.0, 4.4811, 0.08422),
    girls(60.0, 5.8506, 0.08270),
    girls(65.0, 7.2362, 0.08177),
    girls(70.0, 8.4018, 0.08125),
    girls(75.0, 9.4089, 0.08102),
    girls(80.0, 10.3888, 0.08116),
    girls(85.0, 11.5127, 0.08249),
    girls(90.0, 12.6862, 0.08417),
    girls(95.0, 13.9224, 0.08571),
    girls(100.0, 15.2644, 0.08719),
    girls(105.0, 16.7665, 0.08919),
    girls(110.0, 18.4165, 0.09155),
    girls(115.0, 20.2249, 0.09417),
    girls(120.0, 22.2119, 0.09698),
];

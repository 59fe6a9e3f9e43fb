//! Length/height-for-age (cm), birth to 60 months. L is 1 throughout.

use crate::table::Breakpoint;

const fn bp(month: f64, m: f64, s: f64) -> Breakpoint {
    Breakpoint::new(month, 1.0, m, s)
}

pub(crate) const BOYS: &[Breakpoint] = &[
    bp(0.0, 49.8842, 0.03795),
    bp(1.0, 54.7244, 0.03557),
    bp(2.0, 58.4249, 0.03424),
    bp(3.0, 61.4292, 0.03328),
    bp(4.0, 63.8860, 0.03257),
    bp(5.0, 65.9026, 0.03204),
    bp(6.0, 67.6236, 0.03165),
    bp(7.0, 69.1645, 0.03139),
    bp(8.0, 70.5994, 0.03124),
    bp(9.0, 71.9687, 0.03117),
    bp(10.0, 73.2812, 0.03118),
    bp(11.0, 74.5388, 0.03125),
    bp(12.0, 75.7488, 0.03137),
    bp(18.0, 82.2587, 0.03279),
    bp(24.0, 87.1161, 0.03507),
    bp(36.0, 96.0835, 0.03802),
    bp(48.0, 103.3273, 0.04001),
    bp(60.0, 109.9638, 0.04178),
];

pub(crate) const GIRLS: &[Breakpoint] = &[
    bp(0.0, 49.1477, 0.03790),
    bp(1.0, 53.6872, 0.03640),
    bp(2.0, 57.0673, 0.03568),
    bp(3.0, 59.8029, 0.03520),
    bp(4.0, 62.0899, 0.03486),
    bp(5.0, 64.0301, 0.03463),
    bp(6.0, 65.7311, 0.03448),
    bp(7.0, 67.2873, 0.03441),
    bp(8.0, 68.7498, 0.03440),
    bp(9.0, 70.1435, 0.03444),
    bp(10.0, 71.4818, 0.03452),
    bp(11.0, 72.7710, 0.03464),
    bp(12.0, 74.0150, 0.03479),
    bp(18.0, 80.7079, 0.03598),
    bp(24.0, 85.7153, 0.03764),
    bp(36.0, 95.0515, 0.04005),
    bp(48.0, 102.7312, 0.04168),
    bp(60.0, 109.4233, 0.04287),
];

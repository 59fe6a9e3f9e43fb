//! BMI-for-age (kg/m²), birth to 60 months.

use crate::table::Breakpoint;

const fn bp(month: f64, l: f64, m: f64, s: f64) -> Breakpoint {
    Breakpoint::new(month, l, m, s)
}

pub(crate) const BOYS: &[Breakpoint] = &[
    bp(0.0, -0.3053, 13.4069, 0.09560),
    bp(1.0, 0.2708, 14.9441, 0.09027),
    bp(2.0, 0.1118, 16.3195, 0.08677),
    bp(3.0, 0.0068, 16.8987, 0.08495),
    bp(4.0, -0.0727, 17.1579, 0.08378),
    bp(5.0, -0.1370, 17.2919, 0.08296),
    bp(6.0, -0.1913, 17.3422, 0.08234),
    bp(7.0, -0.2385, 17.3288, 0.08183),
    bp(8.0, -0.2802, 17.2647, 0.08140),
    bp(9.0, -0.3176, 17.1662, 0.08102),
    bp(10.0, -0.3516, 17.0488, 0.08068),
    bp(11.0, -0.3828, 16.9239, 0.08037),
    bp(12.0, -0.4115, 16.7981, 0.08009),
    bp(18.0, -0.5231, 16.4910, 0.07895),
    bp(24.0, -0.6187, 16.0189, 0.07785),
    bp(36.0, -0.5389, 15.7525, 0.07768),
    bp(48.0, -0.4981, 15.4209, 0.07897),
    bp(60.0, -0.4334, 15.2641, 0.08079),
];

pub(crate) const GIRLS: &[Breakpoint] = &[
    bp(0.0, -0.0631, 13.3363, 0.09272),
    bp(1.0, 0.3448, 14.5679, 0.09556),
    bp(2.0, 0.1749, 15.7679, 0.09371),
    bp(3.0, 0.0643, 16.3574, 0.09254),
    bp(4.0, -0.0191, 16.6703, 0.09166),
    bp(5.0, -0.0864, 16.8386, 0.09096),
    bp(6.0, -0.1429, 16.9083, 0.09036),
    bp(7.0, -0.1916, 16.9020, 0.08984),
    bp(8.0, -0.2344, 16.8404, 0.08939),
    bp(9.0, -0.2725, 16.7406, 0.08898),
    bp(10.0, -0.3068, 16.6184, 0.08861),
    bp(11.0, -0.3381, 16.4875, 0.08828),
    bp(12.0, -0.3667, 16.3568, 0.08797),
    bp(18.0, -0.4601, 16.0222, 0.08703),
    bp(24.0, -0.5684, 15.6881, 0.08454),
    bp(36.0, -0.6500, 15.4020, 0.08666),
    bp(48.0, -0.6926, 15.2541, 0.09014),
    bp(60.0, -0.7150, 15.2265, 0.09358),
];

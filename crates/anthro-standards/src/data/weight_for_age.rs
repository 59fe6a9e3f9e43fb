//! Weight-for-age (kg), birth to 60 months.

use crate::table::Breakpoint;

const fn bp(month: f64, l: f64, m: f64, s: f64) -> Breakpoint {
    Breakpoint::new(month, l, m, s)
}

pub(crate) const BOYS: &[Breakpoint] = &[
    bp(0.0, 0.3487, 3.3464, 0.14602),
    bp(1.0, 0.2297, 4.4709, 0.13395),
    bp(2.0, 0.1970, 5.5675, 0.12385),
    bp(3.0, 0.1738, 6.3762, 0.11727),
    bp(4.0, 0.1553, 7.0023, 0.11316),
    bp(5.0, 0.1395, 7.5105, 0.11080),
    bp(6.0, 0.1257, 7.9340, 0.10958),
    bp(7.0, 0.1134, 8.2970, 0.10902),
    bp(8.0, 0.1021, 8.6151, 0.10882),
    bp(9.0, 0.0917, 8.9014, 0.10881),
    bp(10.0, 0.0820, 9.1649, 0.10891),
    bp(11.0, 0.0730, 9.4122, 0.10906),
    bp(12.0, 0.0644, 9.6479, 0.10925),
    bp(18.0, 0.0212, 10.9385, 0.11067),
    bp(24.0, -0.0137, 12.1515, 0.11426),
    bp(36.0, -0.0090, 14.3429, 0.12213),
    bp(48.0, -0.0473, 16.3489, 0.12655),
    bp(60.0, -0.0841, 18.3366, 0.13211),
];

pub(crate) const GIRLS: &[Breakpoint] = &[
    bp(0.0, 0.3809, 3.2322, 0.14171),
    bp(1.0, 0.1714, 4.1873, 0.13724),
    bp(2.0, 0.0962, 5.1282, 0.13000),
    bp(3.0, 0.0402, 5.8458, 0.12619),
    bp(4.0, -0.0050, 6.4237, 0.12402),
    bp(5.0, -0.0430, 6.8985, 0.12274),
    bp(6.0, -0.0756, 7.2970, 0.12204),
    bp(7.0, -0.1039, 7.6422, 0.12178),
    bp(8.0, -0.1288, 7.9487, 0.12181),
    bp(9.0, -0.1507, 8.2254, 0.12199),
    bp(10.0, -0.1700, 8.4800, 0.12223),
    bp(11.0, -0.1872, 8.7192, 0.12247),
    bp(12.0, -0.2024, 8.9481, 0.12268),
    bp(18.0, -0.2600, 10.2315, 0.12426),
    bp(24.0, -0.2941, 11.4775, 0.12727),
    bp(36.0, -0.3436, 13.8503, 0.13724),
    bp(48.0, -0.4070, 16.0697, 0.14556),
    bp(60.0, -0.4681, 18.2193, 0.15084),
];

//! Truncated VSOP87D terms for Neptune, heliocentric ecliptic of date.

use super::{VsopSeries, VsopTerm};

#[rustfmt::skip]
pub(crate) const SERIES: VsopSeries = VsopSeries {
    l: &[
        &[
            VsopTerm(531188633.0, 0.0, 0.0),
            VsopTerm(1798476.0, 2.9010127, 38.1330356),
            VsopTerm(1019728.0, 0.4858092, 1.4844727),
            VsopTerm(124532.0, 4.830081, 36.648563),
            VsopTerm(42064.0, 5.41055, 2.96895),
            VsopTerm(37715.0, 6.09222, 35.16409),
            VsopTerm(33785.0, 1.24489, 76.26607),
            VsopTerm(16483.0, 8e-05, 491.55793),
            VsopTerm(9199.0, 4.9375, 39.6175),
            VsopTerm(8994.0, 0.2746, 175.1661),
            VsopTerm(4216.0, 1.9871, 73.2971),
            VsopTerm(3365.0, 1.0359, 33.6796),
            VsopTerm(2285.0, 4.2061, 4.4534),
            VsopTerm(1434.0, 2.7834, 74.7816),
            VsopTerm(900.0, 2.076, 109.946),
            VsopTerm(745.0, 3.19, 71.813),
            VsopTerm(506.0, 5.748, 114.399),
            VsopTerm(400.0, 0.35, 1021.249),
            VsopTerm(345.0, 3.462, 41.102),
            VsopTerm(340.0, 3.304, 77.751),
            VsopTerm(323.0, 2.248, 32.195),
            VsopTerm(306.0, 0.497, 0.521),
            VsopTerm(287.0, 4.505, 0.048),
            VsopTerm(282.0, 2.246, 146.594),
            VsopTerm(267.0, 4.889, 0.963),
            VsopTerm(252.0, 5.782, 388.465),
            VsopTerm(245.0, 1.247, 9.561),
            VsopTerm(233.0, 2.505, 137.033),
            VsopTerm(227.0, 1.797, 453.425),
            VsopTerm(170.0, 3.324, 108.461),
            VsopTerm(151.0, 2.192, 33.94),
            VsopTerm(150.0, 2.997, 5.938),
            VsopTerm(148.0, 0.859, 111.43),
            VsopTerm(119.0, 3.677, 2.448),
            VsopTerm(109.0, 2.416, 183.243),
            VsopTerm(103.0, 0.041, 0.261),
            VsopTerm(103.0, 4.404, 70.328),
            VsopTerm(102.0, 5.705, 0.112),
        ],
        &[
            VsopTerm(3837687717.0, 0.0, 0.0),
            VsopTerm(16604.0, 4.86319, 1.48447),
            VsopTerm(15807.0, 2.27923, 38.13304),
            VsopTerm(3335.0, 3.682, 76.2661),
            VsopTerm(1306.0, 3.6732, 2.9689),
            VsopTerm(605.0, 1.505, 35.164),
            VsopTerm(179.0, 3.453, 39.618),
            VsopTerm(107.0, 2.451, 4.453),
            VsopTerm(106.0, 2.755, 33.68),
            VsopTerm(73.0, 5.49, 36.65),
            VsopTerm(57.0, 1.86, 114.4),
            VsopTerm(57.0, 5.22, 0.52),
            VsopTerm(35.0, 4.52, 74.78),
            VsopTerm(32.0, 5.9, 77.75),
            VsopTerm(30.0, 3.67, 388.47),
            VsopTerm(29.0, 5.17, 9.56),
            VsopTerm(29.0, 5.17, 2.45),
            VsopTerm(26.0, 5.25, 168.05),
        ],
        &[
            VsopTerm(53893.0, 0.0, 0.0),
            VsopTerm(296.0, 1.855, 1.484),
            VsopTerm(281.0, 1.191, 38.133),
            VsopTerm(270.0, 5.721, 76.266),
            VsopTerm(23.0, 1.21, 2.97),
            VsopTerm(9.0, 4.43, 35.16),
            VsopTerm(7.0, 0.54, 2.45),
        ],
        &[
            VsopTerm(31.0, 0.0, 0.0),
            VsopTerm(15.0, 1.35, 76.27),
            VsopTerm(12.0, 6.04, 1.48),
            VsopTerm(12.0, 6.11, 38.13),
        ],
        &[
            VsopTerm(114.0, 3.142, 0.0),
        ],
    ],
    b: &[
        &[
            VsopTerm(3088623.0, 1.4410437, 38.1330356),
            VsopTerm(27780.0, 5.91272, 76.26607),
            VsopTerm(27624.0, 0.0, 0.0),
            VsopTerm(15448.0, 3.50877, 39.61751),
            VsopTerm(15355.0, 2.52124, 36.64856),
            VsopTerm(2000.0, 1.51, 74.7816),
            VsopTerm(1968.0, 4.3778, 1.4845),
            VsopTerm(1015.0, 3.2156, 35.1641),
            VsopTerm(606.0, 2.802, 73.297),
            VsopTerm(595.0, 2.129, 41.102),
            VsopTerm(589.0, 3.187, 2.969),
            VsopTerm(402.0, 4.169, 114.399),
            VsopTerm(280.0, 1.682, 77.751),
            VsopTerm(262.0, 3.767, 213.299),
            VsopTerm(254.0, 3.271, 453.425),
            VsopTerm(206.0, 4.257, 529.691),
            VsopTerm(140.0, 3.53, 137.033),
        ],
        &[
            VsopTerm(227279.0, 3.807931, 38.133036),
            VsopTerm(1803.0, 1.9758, 76.2661),
            VsopTerm(1433.0, 3.1416, 0.0),
            VsopTerm(1386.0, 4.8256, 36.6486),
            VsopTerm(1073.0, 6.0805, 39.6175),
            VsopTerm(148.0, 3.858, 74.782),
            VsopTerm(136.0, 0.478, 1.484),
            VsopTerm(70.0, 6.19, 35.16),
            VsopTerm(52.0, 5.05, 73.3),
            VsopTerm(43.0, 0.31, 114.4),
            VsopTerm(37.0, 4.89, 41.1),
            VsopTerm(37.0, 5.76, 2.97),
            VsopTerm(26.0, 5.22, 213.3),
        ],
        &[
            VsopTerm(9691.0, 5.5712, 38.133),
            VsopTerm(79.0, 3.63, 76.27),
            VsopTerm(72.0, 0.45, 36.65),
            VsopTerm(59.0, 3.14, 0.0),
            VsopTerm(30.0, 1.61, 39.62),
            VsopTerm(6.0, 5.61, 74.78),
        ],
        &[
            VsopTerm(273.0, 1.017, 38.133),
            VsopTerm(2.0, 0.0, 0.0),
            VsopTerm(2.0, 2.37, 36.65),
            VsopTerm(2.0, 5.33, 39.62),
        ],
        &[
            VsopTerm(6.0, 2.67, 38.13),
        ],
    ],
    r: &[
        &[
            VsopTerm(3007013206.0, 0.0, 0.0),
            VsopTerm(27062259.0, 1.32999459, 38.13303564),
            VsopTerm(1691764.0, 3.2518614, 36.6485629),
            VsopTerm(807831.0, 5.185928, 1.484473),
            VsopTerm(537761.0, 4.521139, 35.16409),
            VsopTerm(495726.0, 1.571057, 491.557929),
            VsopTerm(274572.0, 1.845523, 175.16606),
            VsopTerm(135134.0, 3.372206, 39.617508),
            VsopTerm(121802.0, 5.797544, 76.266071),
            VsopTerm(100895.0, 0.377027, 73.297126),
            VsopTerm(69792.0, 3.79617, 2.96895),
            VsopTerm(46688.0, 5.74938, 33.67962),
            VsopTerm(24594.0, 0.50802, 109.94569),
            VsopTerm(16939.0, 1.59422, 71.81265),
            VsopTerm(14230.0, 1.07786, 74.7816),
            VsopTerm(12012.0, 1.92062, 1021.24889),
            VsopTerm(8395.0, 0.6782, 146.5943),
            VsopTerm(7572.0, 1.0715, 388.4652),
            VsopTerm(5721.0, 2.5906, 4.4534),
            VsopTerm(4840.0, 1.9069, 41.102),
            VsopTerm(4483.0, 2.9057, 529.691),
            VsopTerm(4421.0, 1.7499, 108.4612),
            VsopTerm(4354.0, 0.6799, 32.1951),
            VsopTerm(4270.0, 3.4134, 453.4249),
            VsopTerm(3381.0, 0.8481, 183.2428),
            VsopTerm(2881.0, 1.986, 137.033),
            VsopTerm(2879.0, 3.6742, 350.3321),
            VsopTerm(2636.0, 3.0976, 213.2991),
            VsopTerm(2530.0, 5.7984, 490.0735),
            VsopTerm(2523.0, 0.4863, 493.0424),
            VsopTerm(2306.0, 2.8096, 70.3282),
            VsopTerm(2087.0, 0.6186, 33.9402),
        ],
        &[
            VsopTerm(236339.0, 0.70498, 38.133036),
            VsopTerm(13220.0, 3.32015, 1.48447),
            VsopTerm(8622.0, 6.2163, 35.1641),
            VsopTerm(2702.0, 1.8814, 39.6175),
            VsopTerm(2155.0, 2.0943, 2.9689),
            VsopTerm(2153.0, 5.1687, 76.2661),
            VsopTerm(1603.0, 0.0, 0.0),
            VsopTerm(1464.0, 1.1842, 33.6796),
            VsopTerm(1136.0, 3.9189, 36.6486),
            VsopTerm(898.0, 5.241, 388.465),
            VsopTerm(790.0, 0.533, 168.053),
            VsopTerm(760.0, 0.021, 182.28),
            VsopTerm(607.0, 1.077, 1021.249),
            VsopTerm(572.0, 3.401, 484.444),
            VsopTerm(561.0, 2.887, 498.671),
        ],
        &[
            VsopTerm(4247.0, 5.8991, 38.133),
            VsopTerm(218.0, 0.346, 1.484),
            VsopTerm(163.0, 2.239, 168.053),
            VsopTerm(156.0, 4.594, 182.28),
            VsopTerm(127.0, 2.848, 35.164),
        ],
        &[
            VsopTerm(166.0, 4.552, 38.133),
        ],
    ],
};

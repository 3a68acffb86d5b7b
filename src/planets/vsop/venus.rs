//! Truncated VSOP87D terms for Venus, heliocentric ecliptic of date.

use super::{VsopSeries, VsopTerm};

#[rustfmt::skip]
pub(crate) const SERIES: VsopSeries = VsopSeries {
    l: &[
        &[
            VsopTerm(317614667.0, 0.0, 0.0),
            VsopTerm(1353968.0, 5.5931332, 10213.2855462),
            VsopTerm(89892.0, 5.3065, 20426.57109),
            VsopTerm(5477.0, 4.4163, 7860.4194),
            VsopTerm(3456.0, 2.6996, 11790.6291),
            VsopTerm(2372.0, 2.9938, 3930.2097),
            VsopTerm(1664.0, 4.2502, 1577.3435),
            VsopTerm(1438.0, 4.1575, 9683.5946),
            VsopTerm(1317.0, 5.1867, 26.2983),
            VsopTerm(1201.0, 6.1536, 30639.8566),
            VsopTerm(769.0, 0.816, 9437.763),
            VsopTerm(761.0, 1.95, 529.691),
            VsopTerm(708.0, 1.065, 775.523),
            VsopTerm(585.0, 3.998, 191.448),
            VsopTerm(500.0, 4.123, 15720.839),
            VsopTerm(429.0, 3.586, 19367.189),
            VsopTerm(327.0, 5.677, 5507.553),
            VsopTerm(326.0, 4.591, 10404.734),
            VsopTerm(232.0, 3.163, 9153.904),
            VsopTerm(180.0, 4.653, 1109.379),
            VsopTerm(155.0, 5.57, 19651.048),
            VsopTerm(128.0, 4.226, 20.775),
            VsopTerm(128.0, 0.962, 5661.332),
            VsopTerm(106.0, 1.537, 801.821),
        ],
        &[
            VsopTerm(1021352943053.0, 0.0, 0.0),
            VsopTerm(95708.0, 2.46424, 10213.28555),
            VsopTerm(14445.0, 0.51625, 20426.57109),
            VsopTerm(213.0, 1.795, 30639.857),
            VsopTerm(174.0, 2.655, 26.298),
            VsopTerm(152.0, 6.106, 1577.344),
            VsopTerm(82.0, 5.7, 191.45),
            VsopTerm(70.0, 2.68, 9437.76),
            VsopTerm(52.0, 3.6, 775.52),
            VsopTerm(38.0, 1.03, 529.69),
            VsopTerm(30.0, 1.25, 5507.55),
            VsopTerm(25.0, 6.11, 10404.73),
        ],
        &[
            VsopTerm(54127.0, 0.0, 0.0),
            VsopTerm(3891.0, 0.3451, 10213.2855),
            VsopTerm(1338.0, 2.0201, 20426.5711),
            VsopTerm(24.0, 2.05, 26.3),
            VsopTerm(19.0, 3.54, 30639.86),
            VsopTerm(10.0, 3.97, 775.52),
            VsopTerm(7.0, 1.52, 1577.34),
            VsopTerm(6.0, 1.0, 191.45),
        ],
        &[
            VsopTerm(136.0, 4.804, 10213.286),
            VsopTerm(78.0, 3.67, 20426.57),
            VsopTerm(26.0, 0.0, 0.0),
        ],
        &[
            VsopTerm(114.0, 3.1416, 0.0),
            VsopTerm(3.0, 5.21, 20426.57),
            VsopTerm(2.0, 2.51, 10213.29),
        ],
        &[
            VsopTerm(1.0, 3.14, 0.0),
        ],
    ],
    b: &[
        &[
            VsopTerm(5923638.0, 0.2670278, 10213.2855462),
            VsopTerm(40108.0, 1.14737, 20426.57109),
            VsopTerm(32815.0, 3.14159, 0.0),
            VsopTerm(1011.0, 1.0895, 30639.8566),
            VsopTerm(149.0, 6.254, 18073.705),
            VsopTerm(138.0, 0.86, 1577.344),
            VsopTerm(130.0, 3.672, 9437.763),
            VsopTerm(120.0, 3.705, 2352.866),
            VsopTerm(108.0, 4.539, 22003.915),
        ],
        &[
            VsopTerm(513348.0, 1.803643, 10213.285546),
            VsopTerm(4380.0, 3.3862, 20426.5711),
            VsopTerm(199.0, 0.0, 0.0),
            VsopTerm(197.0, 2.53, 30639.857),
        ],
        &[
            VsopTerm(22378.0, 3.38509, 10213.28555),
            VsopTerm(282.0, 0.0, 0.0),
            VsopTerm(173.0, 5.256, 20426.571),
            VsopTerm(27.0, 3.87, 30639.86),
        ],
        &[
            VsopTerm(647.0, 4.992, 10213.286),
            VsopTerm(20.0, 3.14, 0.0),
            VsopTerm(6.0, 0.77, 20426.57),
            VsopTerm(3.0, 5.44, 30639.86),
        ],
        &[
            VsopTerm(14.0, 0.32, 10213.29),
        ],
    ],
    r: &[
        &[
            VsopTerm(72334821.0, 0.0, 0.0),
            VsopTerm(489824.0, 4.021518, 10213.285546),
            VsopTerm(1658.0, 4.9021, 20426.5711),
            VsopTerm(1632.0, 2.8455, 7860.4194),
            VsopTerm(1378.0, 1.1285, 11790.6291),
            VsopTerm(498.0, 2.587, 9683.595),
            VsopTerm(374.0, 1.423, 3930.21),
            VsopTerm(264.0, 5.529, 9437.763),
            VsopTerm(237.0, 2.551, 15720.839),
            VsopTerm(222.0, 2.013, 19367.189),
            VsopTerm(126.0, 2.728, 1577.344),
            VsopTerm(119.0, 3.02, 10404.734),
        ],
        &[
            VsopTerm(34551.0, 0.89199, 10213.28555),
            VsopTerm(234.0, 1.772, 20426.571),
            VsopTerm(234.0, 3.142, 0.0),
        ],
        &[
            VsopTerm(1407.0, 5.0637, 10213.2855),
            VsopTerm(16.0, 5.47, 20426.57),
            VsopTerm(13.0, 0.0, 0.0),
        ],
        &[
            VsopTerm(50.0, 3.22, 10213.29),
        ],
        &[
            VsopTerm(1.0, 0.92, 10213.29),
        ],
    ],
};

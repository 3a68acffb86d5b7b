//! Truncated VSOP87D terms for Earth, heliocentric ecliptic of date.

use super::{VsopSeries, VsopTerm};

#[rustfmt::skip]
pub(crate) const SERIES: VsopSeries = VsopSeries {
    l: &[
        &[
            VsopTerm(175347046.0, 0.0, 0.0),
            VsopTerm(3341656.0, 4.6692568, 6283.07585),
            VsopTerm(34894.0, 4.6261, 12566.1517),
            VsopTerm(3497.0, 2.7441, 5753.3849),
            VsopTerm(3418.0, 2.8289, 3.5231),
            VsopTerm(3136.0, 3.6277, 77713.7715),
            VsopTerm(2676.0, 4.4181, 7860.4194),
            VsopTerm(2343.0, 6.1352, 3930.2097),
            VsopTerm(1324.0, 0.7425, 11506.7698),
            VsopTerm(1273.0, 2.0371, 529.691),
            VsopTerm(1199.0, 1.1096, 1577.3435),
            VsopTerm(990.0, 5.233, 5884.927),
            VsopTerm(902.0, 2.045, 26.298),
            VsopTerm(857.0, 3.508, 398.149),
            VsopTerm(780.0, 1.179, 5223.694),
            VsopTerm(753.0, 2.533, 5507.553),
            VsopTerm(505.0, 4.583, 18849.228),
            VsopTerm(492.0, 4.205, 775.523),
            VsopTerm(357.0, 2.92, 0.067),
            VsopTerm(317.0, 5.849, 11790.629),
            VsopTerm(284.0, 1.899, 796.298),
            VsopTerm(271.0, 0.315, 10977.079),
            VsopTerm(243.0, 0.345, 5486.778),
            VsopTerm(206.0, 4.806, 2544.314),
            VsopTerm(205.0, 1.869, 5573.143),
            VsopTerm(202.0, 2.458, 6069.777),
            VsopTerm(156.0, 0.833, 213.299),
            VsopTerm(132.0, 3.411, 2942.463),
            VsopTerm(126.0, 1.083, 20.775),
            VsopTerm(115.0, 0.645, 0.98),
            VsopTerm(103.0, 0.636, 4694.003),
            VsopTerm(102.0, 0.976, 15720.839),
            VsopTerm(102.0, 4.267, 7.114),
            VsopTerm(99.0, 6.21, 2146.17),
            VsopTerm(98.0, 0.68, 155.42),
            VsopTerm(86.0, 5.98, 161000.69),
            VsopTerm(85.0, 1.3, 6275.96),
            VsopTerm(85.0, 3.67, 71430.7),
            VsopTerm(80.0, 1.81, 17260.15),
            VsopTerm(79.0, 3.04, 12036.46),
            VsopTerm(75.0, 1.76, 5088.63),
            VsopTerm(74.0, 3.5, 3154.69),
            VsopTerm(74.0, 4.68, 801.82),
            VsopTerm(70.0, 0.83, 9437.76),
            VsopTerm(62.0, 3.98, 8827.39),
            VsopTerm(61.0, 1.82, 7084.9),
            VsopTerm(57.0, 2.78, 6286.6),
            VsopTerm(56.0, 4.39, 14143.5),
            VsopTerm(56.0, 3.47, 6279.55),
            VsopTerm(52.0, 0.19, 12139.55),
            VsopTerm(52.0, 1.33, 1748.02),
            VsopTerm(51.0, 0.28, 5856.48),
            VsopTerm(49.0, 0.49, 1194.45),
            VsopTerm(41.0, 5.37, 8429.24),
            VsopTerm(41.0, 2.4, 19651.05),
            VsopTerm(39.0, 6.17, 10447.39),
            VsopTerm(37.0, 6.04, 10213.29),
            VsopTerm(37.0, 2.57, 1059.38),
            VsopTerm(36.0, 1.71, 2352.87),
            VsopTerm(36.0, 1.78, 6812.77),
            VsopTerm(33.0, 0.59, 17789.85),
            VsopTerm(30.0, 0.44, 83996.85),
            VsopTerm(30.0, 2.74, 1349.87),
            VsopTerm(25.0, 3.16, 4690.48),
        ],
        &[
            VsopTerm(628331966747.0, 0.0, 0.0),
            VsopTerm(206059.0, 2.678235, 6283.07585),
            VsopTerm(4303.0, 2.6351, 12566.1517),
            VsopTerm(425.0, 1.59, 3.523),
            VsopTerm(119.0, 5.796, 26.298),
            VsopTerm(109.0, 2.966, 1577.344),
            VsopTerm(93.0, 2.59, 18849.23),
            VsopTerm(72.0, 1.14, 529.69),
            VsopTerm(68.0, 1.87, 398.15),
            VsopTerm(67.0, 4.41, 5507.55),
            VsopTerm(59.0, 2.89, 5223.69),
            VsopTerm(56.0, 2.17, 155.42),
            VsopTerm(45.0, 0.4, 796.3),
            VsopTerm(36.0, 0.47, 775.52),
            VsopTerm(29.0, 2.65, 7.11),
            VsopTerm(21.0, 5.34, 0.98),
            VsopTerm(19.0, 1.85, 5486.78),
            VsopTerm(19.0, 4.97, 213.3),
            VsopTerm(17.0, 2.99, 6275.96),
            VsopTerm(16.0, 0.03, 2544.31),
            VsopTerm(16.0, 1.43, 2146.17),
            VsopTerm(15.0, 1.21, 10977.08),
            VsopTerm(12.0, 2.83, 1748.02),
            VsopTerm(12.0, 3.26, 5088.63),
            VsopTerm(12.0, 5.27, 1194.45),
            VsopTerm(12.0, 2.08, 4694.0),
            VsopTerm(11.0, 0.77, 553.57),
            VsopTerm(10.0, 1.3, 6286.6),
            VsopTerm(10.0, 4.24, 1349.87),
            VsopTerm(9.0, 2.7, 242.73),
            VsopTerm(9.0, 5.64, 951.72),
            VsopTerm(8.0, 5.3, 2352.87),
            VsopTerm(6.0, 2.65, 9437.76),
            VsopTerm(6.0, 4.67, 4690.48),
        ],
        &[
            VsopTerm(52919.0, 0.0, 0.0),
            VsopTerm(8720.0, 1.0721, 6283.0758),
            VsopTerm(309.0, 0.867, 12566.152),
            VsopTerm(27.0, 0.05, 3.52),
            VsopTerm(16.0, 5.19, 26.3),
            VsopTerm(16.0, 3.68, 155.42),
            VsopTerm(10.0, 0.76, 18849.23),
            VsopTerm(9.0, 2.06, 77713.77),
            VsopTerm(7.0, 0.83, 775.52),
            VsopTerm(5.0, 4.66, 1577.34),
            VsopTerm(4.0, 1.03, 7.11),
            VsopTerm(4.0, 3.44, 5573.14),
            VsopTerm(3.0, 5.14, 796.3),
            VsopTerm(3.0, 6.05, 5507.55),
            VsopTerm(3.0, 1.19, 242.73),
            VsopTerm(3.0, 6.12, 529.69),
            VsopTerm(3.0, 0.31, 398.15),
            VsopTerm(3.0, 2.28, 553.57),
            VsopTerm(2.0, 4.38, 5223.69),
            VsopTerm(2.0, 3.75, 0.98),
        ],
        &[
            VsopTerm(289.0, 5.844, 6283.076),
            VsopTerm(35.0, 0.0, 0.0),
            VsopTerm(17.0, 5.49, 12566.15),
            VsopTerm(3.0, 5.2, 155.42),
            VsopTerm(1.0, 4.72, 3.52),
            VsopTerm(1.0, 5.3, 18849.23),
            VsopTerm(1.0, 5.97, 242.73),
        ],
        &[
            VsopTerm(114.0, 3.142, 0.0),
            VsopTerm(8.0, 4.13, 6283.08),
            VsopTerm(1.0, 3.84, 12566.15),
        ],
        &[
            VsopTerm(1.0, 3.14, 0.0),
        ],
    ],
    b: &[
        &[
            VsopTerm(280.0, 3.199, 84334.662),
            VsopTerm(102.0, 5.422, 5507.553),
            VsopTerm(80.0, 3.88, 5223.69),
            VsopTerm(44.0, 3.7, 2352.87),
            VsopTerm(32.0, 4.0, 1577.34),
        ],
        &[
            VsopTerm(9.0, 3.9, 5507.55),
            VsopTerm(6.0, 1.73, 5223.69),
        ],
    ],
    r: &[
        &[
            VsopTerm(100013989.0, 0.0, 0.0),
            VsopTerm(1670700.0, 3.0984635, 6283.07585),
            VsopTerm(13956.0, 3.05525, 12566.1517),
            VsopTerm(3084.0, 5.1985, 77713.7715),
            VsopTerm(1628.0, 1.1739, 5753.3849),
            VsopTerm(1576.0, 2.8469, 7860.4194),
            VsopTerm(925.0, 5.453, 11506.77),
            VsopTerm(542.0, 4.564, 3930.21),
            VsopTerm(472.0, 3.661, 5884.927),
            VsopTerm(346.0, 0.964, 5507.553),
            VsopTerm(329.0, 5.9, 5223.694),
            VsopTerm(307.0, 0.299, 5573.143),
            VsopTerm(243.0, 4.273, 11790.629),
            VsopTerm(212.0, 5.847, 1577.344),
            VsopTerm(186.0, 5.022, 10977.079),
            VsopTerm(175.0, 3.012, 18849.228),
            VsopTerm(110.0, 5.055, 5486.778),
            VsopTerm(98.0, 0.89, 6069.78),
            VsopTerm(86.0, 5.69, 15720.84),
            VsopTerm(86.0, 1.27, 161000.69),
            VsopTerm(65.0, 0.27, 17260.15),
            VsopTerm(63.0, 0.92, 529.69),
            VsopTerm(57.0, 2.01, 83996.85),
            VsopTerm(56.0, 5.24, 71430.7),
            VsopTerm(49.0, 3.25, 2544.31),
            VsopTerm(47.0, 2.58, 775.52),
            VsopTerm(45.0, 5.54, 9437.76),
            VsopTerm(43.0, 6.01, 6275.96),
            VsopTerm(39.0, 5.36, 4694.0),
            VsopTerm(38.0, 2.39, 8827.39),
            VsopTerm(37.0, 0.83, 19651.05),
            VsopTerm(37.0, 4.9, 12139.55),
            VsopTerm(36.0, 1.67, 12036.46),
            VsopTerm(35.0, 1.84, 2942.46),
            VsopTerm(33.0, 0.24, 7084.9),
            VsopTerm(32.0, 0.18, 5088.63),
            VsopTerm(32.0, 1.78, 398.15),
            VsopTerm(28.0, 1.21, 6286.6),
            VsopTerm(28.0, 1.9, 6279.55),
            VsopTerm(26.0, 4.59, 10447.39),
        ],
        &[
            VsopTerm(103019.0, 1.10749, 6283.07585),
            VsopTerm(1721.0, 1.0644, 12566.1517),
            VsopTerm(702.0, 3.142, 0.0),
            VsopTerm(32.0, 1.02, 18849.23),
            VsopTerm(31.0, 2.84, 5507.55),
            VsopTerm(25.0, 1.32, 5223.69),
            VsopTerm(18.0, 1.42, 1577.34),
            VsopTerm(10.0, 5.91, 10977.08),
            VsopTerm(9.0, 1.42, 6275.96),
            VsopTerm(9.0, 0.27, 5486.78),
        ],
        &[
            VsopTerm(4359.0, 5.7846, 6283.0758),
            VsopTerm(124.0, 5.579, 12566.152),
            VsopTerm(12.0, 3.14, 0.0),
            VsopTerm(9.0, 3.63, 77713.77),
            VsopTerm(6.0, 1.87, 5573.14),
            VsopTerm(3.0, 5.47, 18849.23),
        ],
        &[
            VsopTerm(145.0, 4.273, 6283.076),
            VsopTerm(7.0, 3.92, 12566.15),
        ],
        &[
            VsopTerm(4.0, 2.56, 6283.08),
        ],
    ],
};

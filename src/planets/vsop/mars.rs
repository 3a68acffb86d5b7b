//! Truncated VSOP87D terms for Mars, heliocentric ecliptic of date.

use super::{VsopSeries, VsopTerm};

#[rustfmt::skip]
pub(crate) const SERIES: VsopSeries = VsopSeries {
    l: &[
        &[
            VsopTerm(620347712.0, 0.0, 0.0),
            VsopTerm(18656368.0, 5.050371, 3340.6124267),
            VsopTerm(1108217.0, 5.4009984, 6681.2248534),
            VsopTerm(91798.0, 5.75479, 10021.83728),
            VsopTerm(27745.0, 5.9705, 3.52312),
            VsopTerm(12316.0, 0.84956, 2810.92146),
            VsopTerm(10610.0, 2.93959, 2281.2305),
            VsopTerm(8927.0, 4.157, 0.0173),
            VsopTerm(8716.0, 6.1101, 13362.4497),
            VsopTerm(7775.0, 3.3397, 5621.8429),
            VsopTerm(6798.0, 0.3646, 398.149),
            VsopTerm(4161.0, 0.2281, 2942.4634),
            VsopTerm(3575.0, 1.6619, 2544.3144),
            VsopTerm(3075.0, 0.857, 191.4483),
            VsopTerm(2938.0, 6.0789, 0.0673),
            VsopTerm(2628.0, 0.6481, 3337.0893),
            VsopTerm(2580.0, 0.03, 3344.1355),
            VsopTerm(2389.0, 5.039, 796.298),
            VsopTerm(1799.0, 0.6563, 529.691),
            VsopTerm(1546.0, 2.9158, 1751.5395),
            VsopTerm(1528.0, 1.1498, 6151.5339),
            VsopTerm(1286.0, 3.068, 2146.1654),
            VsopTerm(1264.0, 3.6228, 5092.152),
            VsopTerm(1025.0, 3.6933, 8962.4553),
            VsopTerm(892.0, 0.183, 16703.062),
            VsopTerm(859.0, 2.401, 2914.014),
            VsopTerm(833.0, 4.495, 3340.63),
            VsopTerm(833.0, 2.464, 3340.595),
            VsopTerm(749.0, 3.822, 155.42),
            VsopTerm(724.0, 0.675, 3738.761),
            VsopTerm(713.0, 3.663, 1059.382),
            VsopTerm(655.0, 0.489, 3127.313),
            VsopTerm(636.0, 2.922, 8432.764),
            VsopTerm(553.0, 4.475, 1748.016),
            VsopTerm(550.0, 3.81, 0.98),
            VsopTerm(472.0, 3.625, 1194.447),
            VsopTerm(426.0, 0.554, 6283.076),
            VsopTerm(415.0, 0.497, 213.299),
            VsopTerm(312.0, 0.999, 6677.702),
            VsopTerm(307.0, 0.381, 6684.748),
            VsopTerm(302.0, 4.486, 3532.061),
            VsopTerm(299.0, 2.783, 6254.627),
            VsopTerm(293.0, 4.221, 20.775),
            VsopTerm(284.0, 5.769, 3149.164),
            VsopTerm(281.0, 5.882, 1349.867),
            VsopTerm(274.0, 0.542, 3340.545),
            VsopTerm(274.0, 0.134, 3340.68),
            VsopTerm(239.0, 5.372, 4136.91),
            VsopTerm(236.0, 5.755, 3333.499),
            VsopTerm(231.0, 1.282, 3870.303),
            VsopTerm(221.0, 3.505, 382.897),
            VsopTerm(204.0, 2.821, 1221.849),
            VsopTerm(193.0, 3.357, 3.59),
            VsopTerm(189.0, 1.491, 9492.146),
            VsopTerm(179.0, 1.006, 951.718),
            VsopTerm(174.0, 2.414, 553.569),
            VsopTerm(172.0, 0.439, 5486.778),
            VsopTerm(160.0, 3.949, 4562.461),
            VsopTerm(144.0, 1.419, 135.065),
            VsopTerm(140.0, 3.326, 2700.715),
            VsopTerm(138.0, 4.301, 7.114),
            VsopTerm(131.0, 4.045, 12303.068),
            VsopTerm(128.0, 2.208, 1592.596),
            VsopTerm(128.0, 1.807, 5088.629),
            VsopTerm(117.0, 3.128, 7903.073),
            VsopTerm(113.0, 3.701, 1589.073),
            VsopTerm(110.0, 1.052, 242.729),
            VsopTerm(105.0, 0.785, 8827.39),
            VsopTerm(100.0, 3.243, 11773.377),
        ],
        &[
            VsopTerm(334085627474.0, 0.0, 0.0),
            VsopTerm(1458227.0, 3.6042605, 3340.6124267),
            VsopTerm(164901.0, 3.926313, 6681.224853),
            VsopTerm(19963.0, 4.26594, 10021.83728),
            VsopTerm(3452.0, 4.7321, 3.5231),
            VsopTerm(2485.0, 4.6128, 13362.4497),
            VsopTerm(842.0, 4.459, 2281.23),
            VsopTerm(538.0, 5.016, 398.149),
            VsopTerm(521.0, 4.994, 3344.136),
            VsopTerm(433.0, 2.561, 191.448),
            VsopTerm(430.0, 5.316, 155.42),
            VsopTerm(382.0, 3.539, 796.298),
            VsopTerm(314.0, 4.963, 16703.062),
            VsopTerm(283.0, 3.16, 2544.314),
            VsopTerm(206.0, 4.569, 2146.165),
            VsopTerm(169.0, 1.329, 3337.089),
            VsopTerm(158.0, 4.185, 1751.54),
            VsopTerm(134.0, 2.233, 0.98),
            VsopTerm(134.0, 5.974, 1748.016),
            VsopTerm(118.0, 6.024, 6151.534),
            VsopTerm(117.0, 2.213, 1059.382),
            VsopTerm(114.0, 2.129, 1194.447),
            VsopTerm(114.0, 5.428, 3738.761),
            VsopTerm(91.0, 1.1, 1349.87),
            VsopTerm(85.0, 3.91, 553.57),
            VsopTerm(83.0, 5.3, 6684.75),
            VsopTerm(81.0, 4.43, 529.69),
            VsopTerm(80.0, 2.25, 8962.46),
            VsopTerm(73.0, 2.5, 951.72),
            VsopTerm(73.0, 5.84, 242.73),
            VsopTerm(71.0, 3.86, 2914.01),
            VsopTerm(68.0, 5.02, 382.9),
            VsopTerm(65.0, 1.02, 3340.6),
            VsopTerm(65.0, 3.05, 3340.63),
            VsopTerm(62.0, 4.15, 3149.16),
            VsopTerm(57.0, 3.89, 4136.91),
            VsopTerm(48.0, 4.87, 213.3),
            VsopTerm(48.0, 1.18, 3333.5),
            VsopTerm(47.0, 1.31, 3185.19),
            VsopTerm(41.0, 0.71, 1592.6),
            VsopTerm(40.0, 2.73, 7.11),
            VsopTerm(40.0, 5.32, 20043.67),
            VsopTerm(33.0, 5.41, 6283.08),
            VsopTerm(28.0, 0.05, 9492.15),
            VsopTerm(27.0, 3.89, 1221.85),
            VsopTerm(27.0, 5.11, 2700.72),
        ],
        &[
            VsopTerm(58016.0, 2.04979, 3340.61243),
            VsopTerm(54188.0, 0.0, 0.0),
            VsopTerm(13908.0, 2.45742, 6681.22485),
            VsopTerm(2465.0, 2.8, 10021.8373),
            VsopTerm(398.0, 3.141, 13362.45),
            VsopTerm(222.0, 3.194, 3.523),
            VsopTerm(121.0, 0.543, 155.42),
            VsopTerm(62.0, 3.49, 16703.06),
            VsopTerm(54.0, 3.54, 3344.14),
            VsopTerm(34.0, 6.0, 2281.23),
            VsopTerm(32.0, 4.14, 191.45),
            VsopTerm(30.0, 2.0, 796.3),
            VsopTerm(23.0, 4.33, 242.73),
            VsopTerm(22.0, 3.45, 398.15),
            VsopTerm(20.0, 5.42, 553.57),
            VsopTerm(16.0, 0.66, 0.98),
            VsopTerm(16.0, 6.11, 2146.17),
            VsopTerm(16.0, 1.22, 1748.02),
            VsopTerm(15.0, 6.1, 3185.19),
            VsopTerm(14.0, 4.02, 951.72),
            VsopTerm(14.0, 2.62, 1349.87),
            VsopTerm(13.0, 0.6, 1194.45),
            VsopTerm(12.0, 3.86, 6684.75),
            VsopTerm(11.0, 4.72, 2544.31),
            VsopTerm(10.0, 0.25, 382.9),
            VsopTerm(9.0, 0.68, 1059.38),
            VsopTerm(9.0, 3.83, 20043.67),
            VsopTerm(9.0, 3.88, 3738.76),
            VsopTerm(8.0, 5.46, 1751.54),
            VsopTerm(7.0, 2.58, 3149.16),
            VsopTerm(7.0, 2.38, 4136.91),
            VsopTerm(6.0, 5.48, 1592.6),
            VsopTerm(6.0, 2.34, 3097.88),
        ],
        &[
            VsopTerm(1482.0, 0.4443, 3340.6124),
            VsopTerm(662.0, 0.885, 6681.225),
            VsopTerm(188.0, 1.288, 10021.837),
            VsopTerm(41.0, 1.65, 13362.45),
            VsopTerm(26.0, 0.0, 0.0),
            VsopTerm(23.0, 2.05, 155.42),
            VsopTerm(10.0, 1.58, 3.52),
            VsopTerm(8.0, 2.0, 16703.06),
            VsopTerm(5.0, 2.82, 242.73),
            VsopTerm(4.0, 2.02, 3344.14),
            VsopTerm(3.0, 4.59, 3185.19),
            VsopTerm(3.0, 0.65, 553.57),
        ],
        &[
            VsopTerm(114.0, 3.1416, 0.0),
            VsopTerm(29.0, 5.64, 6681.22),
            VsopTerm(24.0, 5.14, 3340.61),
            VsopTerm(11.0, 6.03, 10021.84),
            VsopTerm(3.0, 0.13, 13362.45),
            VsopTerm(3.0, 3.56, 155.42),
            VsopTerm(1.0, 0.49, 16703.06),
            VsopTerm(1.0, 1.32, 242.73),
        ],
        &[
            VsopTerm(1.0, 3.14, 0.0),
            VsopTerm(1.0, 4.04, 6681.22),
        ],
    ],
    b: &[
        &[
            VsopTerm(3197135.0, 3.7683204, 3340.6124267),
            VsopTerm(298033.0, 4.10617, 6681.224853),
            VsopTerm(289105.0, 0.0, 0.0),
            VsopTerm(31366.0, 4.44651, 10021.83728),
            VsopTerm(3484.0, 4.7881, 13362.4497),
            VsopTerm(443.0, 5.026, 3344.136),
            VsopTerm(443.0, 5.652, 3337.089),
            VsopTerm(399.0, 5.131, 16703.062),
            VsopTerm(293.0, 3.793, 2281.23),
            VsopTerm(182.0, 6.136, 6151.534),
            VsopTerm(163.0, 4.264, 529.691),
            VsopTerm(160.0, 2.232, 1059.382),
            VsopTerm(149.0, 2.165, 5621.843),
            VsopTerm(143.0, 1.182, 3340.595),
            VsopTerm(143.0, 3.213, 3340.63),
            VsopTerm(139.0, 2.418, 8962.455),
        ],
        &[
            VsopTerm(350069.0, 5.368478, 3340.612427),
            VsopTerm(14116.0, 3.14159, 0.0),
            VsopTerm(9671.0, 5.4788, 6681.2249),
            VsopTerm(1472.0, 3.2021, 10021.8373),
            VsopTerm(426.0, 3.408, 13362.45),
            VsopTerm(102.0, 0.776, 3337.089),
            VsopTerm(79.0, 3.72, 16703.06),
            VsopTerm(33.0, 3.46, 5621.84),
            VsopTerm(26.0, 2.48, 2281.23),
        ],
        &[
            VsopTerm(16727.0, 0.60221, 3340.61243),
            VsopTerm(4987.0, 3.1416, 0.0),
            VsopTerm(302.0, 5.559, 6681.225),
            VsopTerm(26.0, 1.9, 13362.45),
            VsopTerm(21.0, 0.92, 10021.84),
            VsopTerm(12.0, 2.24, 3340.6),
            VsopTerm(8.0, 2.25, 16703.06),
        ],
        &[
            VsopTerm(607.0, 1.981, 3340.612),
            VsopTerm(43.0, 0.0, 0.0),
            VsopTerm(14.0, 1.8, 6681.22),
            VsopTerm(3.0, 3.45, 10021.84),
        ],
        &[
            VsopTerm(13.0, 0.0, 0.0),
            VsopTerm(11.0, 3.46, 3340.61),
            VsopTerm(1.0, 0.5, 6681.22),
        ],
    ],
    r: &[
        &[
            VsopTerm(153033488.0, 0.0, 0.0),
            VsopTerm(14184953.0, 3.47971284, 3340.6124267),
            VsopTerm(660776.0, 3.817834, 6681.224853),
            VsopTerm(46179.0, 4.15595, 10021.83728),
            VsopTerm(8110.0, 5.5596, 2810.9215),
            VsopTerm(7485.0, 1.7724, 5621.8429),
            VsopTerm(5523.0, 1.3644, 2281.2305),
            VsopTerm(3825.0, 4.4941, 13362.4497),
            VsopTerm(2484.0, 4.9255, 2942.4634),
            VsopTerm(2307.0, 0.0908, 2544.3144),
            VsopTerm(1999.0, 5.3606, 3337.0893),
            VsopTerm(1960.0, 4.7425, 3344.1355),
            VsopTerm(1167.0, 2.1126, 5092.152),
            VsopTerm(1103.0, 5.0091, 398.149),
            VsopTerm(992.0, 5.839, 6151.534),
            VsopTerm(899.0, 4.408, 529.691),
            VsopTerm(807.0, 2.102, 1059.382),
            VsopTerm(798.0, 3.448, 796.298),
            VsopTerm(741.0, 1.499, 2146.165),
            VsopTerm(726.0, 1.245, 8432.764),
            VsopTerm(692.0, 2.134, 8962.455),
            VsopTerm(633.0, 0.894, 3340.595),
            VsopTerm(633.0, 2.924, 3340.63),
            VsopTerm(630.0, 1.287, 1751.54),
            VsopTerm(574.0, 0.829, 2914.014),
            VsopTerm(526.0, 5.383, 3738.761),
            VsopTerm(473.0, 5.199, 3127.313),
            VsopTerm(348.0, 4.832, 16703.062),
            VsopTerm(284.0, 2.907, 3532.061),
            VsopTerm(280.0, 5.257, 6283.076),
            VsopTerm(276.0, 1.218, 6254.627),
            VsopTerm(275.0, 2.908, 1748.016),
            VsopTerm(270.0, 3.764, 5884.927),
            VsopTerm(239.0, 2.037, 1194.447),
            VsopTerm(234.0, 5.105, 5486.778),
            VsopTerm(228.0, 3.255, 6872.673),
            VsopTerm(223.0, 4.199, 3149.164),
            VsopTerm(219.0, 5.583, 191.448),
            VsopTerm(208.0, 5.255, 3340.545),
            VsopTerm(208.0, 4.846, 3340.68),
            VsopTerm(186.0, 5.699, 6677.702),
            VsopTerm(183.0, 5.081, 6684.748),
            VsopTerm(179.0, 4.184, 3333.499),
            VsopTerm(176.0, 5.953, 3870.303),
            VsopTerm(164.0, 3.799, 4136.91),
        ],
        &[
            VsopTerm(1107433.0, 2.0325052, 3340.6124267),
            VsopTerm(103176.0, 2.370718, 6681.224853),
            VsopTerm(12877.0, 0.0, 0.0),
            VsopTerm(10816.0, 2.70888, 10021.83728),
            VsopTerm(1195.0, 3.047, 13362.4497),
            VsopTerm(439.0, 2.888, 2281.23),
            VsopTerm(396.0, 3.423, 3344.136),
            VsopTerm(183.0, 1.584, 2544.314),
            VsopTerm(136.0, 3.385, 16703.062),
            VsopTerm(128.0, 6.043, 3337.089),
            VsopTerm(128.0, 0.63, 1059.382),
            VsopTerm(127.0, 1.954, 796.298),
            VsopTerm(118.0, 2.998, 2146.165),
            VsopTerm(88.0, 3.42, 398.15),
            VsopTerm(83.0, 3.86, 3738.76),
            VsopTerm(76.0, 4.45, 6151.53),
            VsopTerm(72.0, 2.76, 529.69),
            VsopTerm(67.0, 2.55, 1751.54),
            VsopTerm(66.0, 4.41, 1748.02),
            VsopTerm(58.0, 0.54, 1194.45),
            VsopTerm(54.0, 0.68, 8962.46),
            VsopTerm(51.0, 3.73, 6684.75),
            VsopTerm(49.0, 5.73, 3340.6),
            VsopTerm(49.0, 1.48, 3340.63),
            VsopTerm(48.0, 2.58, 3149.16),
            VsopTerm(48.0, 2.29, 2914.01),
            VsopTerm(39.0, 2.32, 4136.91),
        ],
        &[
            VsopTerm(44242.0, 0.47931, 3340.61243),
            VsopTerm(8138.0, 0.87, 6681.2249),
            VsopTerm(1275.0, 1.2259, 10021.8373),
            VsopTerm(187.0, 1.573, 13362.45),
            VsopTerm(52.0, 3.14, 0.0),
            VsopTerm(41.0, 1.97, 3344.14),
            VsopTerm(27.0, 1.92, 16703.06),
            VsopTerm(18.0, 4.43, 2281.23),
            VsopTerm(12.0, 4.53, 3185.19),
            VsopTerm(10.0, 5.39, 1059.38),
            VsopTerm(10.0, 0.42, 796.3),
        ],
        &[
            VsopTerm(1113.0, 5.1499, 3340.6124),
            VsopTerm(424.0, 5.613, 6681.225),
            VsopTerm(100.0, 5.997, 10021.837),
            VsopTerm(20.0, 0.08, 13362.45),
            VsopTerm(5.0, 2.91, 2281.23),
            VsopTerm(3.0, 6.28, 16703.06),
        ],
        &[
            VsopTerm(20.0, 3.58, 3340.61),
            VsopTerm(16.0, 4.05, 6681.22),
            VsopTerm(6.0, 4.46, 10021.84),
            VsopTerm(2.0, 4.84, 13362.45),
        ],
    ],
};

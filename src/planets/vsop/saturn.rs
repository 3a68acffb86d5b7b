//! Truncated VSOP87D terms for Saturn, heliocentric ecliptic of date.

use super::{VsopSeries, VsopTerm};

#[rustfmt::skip]
pub(crate) const SERIES: VsopSeries = VsopSeries {
    l: &[
        &[
            VsopTerm(87401354.0, 0.0, 0.0),
            VsopTerm(11107660.0, 3.9620509, 213.29909544),
            VsopTerm(1414151.0, 4.5858152, 7.113547),
            VsopTerm(398379.0, 0.52112, 206.185548),
            VsopTerm(350769.0, 3.303299, 426.598191),
            VsopTerm(206816.0, 0.246584, 103.092774),
            VsopTerm(79271.0, 3.84007, 220.41264),
            VsopTerm(23990.0, 4.66977, 110.20632),
            VsopTerm(16574.0, 0.43719, 419.48464),
            VsopTerm(15820.0, 0.93809, 632.78374),
            VsopTerm(15054.0, 2.7167, 639.89729),
            VsopTerm(14907.0, 5.76903, 316.39187),
            VsopTerm(14610.0, 1.56519, 3.93215),
            VsopTerm(13160.0, 4.44891, 14.22709),
            VsopTerm(13005.0, 5.98119, 11.0457),
            VsopTerm(10725.0, 3.1294, 202.2534),
            VsopTerm(6126.0, 1.7633, 277.035),
            VsopTerm(5863.0, 0.2366, 529.691),
            VsopTerm(5228.0, 4.2078, 3.1814),
            VsopTerm(5020.0, 3.1779, 433.7117),
            VsopTerm(4593.0, 0.6198, 199.072),
            VsopTerm(4006.0, 2.2448, 63.7359),
            VsopTerm(3874.0, 3.2228, 138.5175),
            VsopTerm(3269.0, 0.7749, 949.1756),
            VsopTerm(2954.0, 0.9828, 95.9792),
            VsopTerm(2461.0, 2.0316, 735.8765),
            VsopTerm(1758.0, 3.2658, 522.5774),
            VsopTerm(1640.0, 5.505, 846.0828),
            VsopTerm(1581.0, 4.3727, 309.2783),
            VsopTerm(1391.0, 4.0233, 323.5054),
            VsopTerm(1124.0, 2.8373, 415.5525),
            VsopTerm(1087.0, 4.1834, 2.4477),
            VsopTerm(1017.0, 3.717, 227.5262),
            VsopTerm(957.0, 0.507, 1265.567),
            VsopTerm(853.0, 3.421, 175.166),
            VsopTerm(849.0, 3.191, 209.367),
            VsopTerm(789.0, 5.007, 0.963),
            VsopTerm(749.0, 2.144, 853.196),
            VsopTerm(744.0, 5.253, 224.345),
            VsopTerm(687.0, 1.747, 1052.268),
            VsopTerm(654.0, 1.599, 0.048),
            VsopTerm(634.0, 2.299, 412.371),
            VsopTerm(625.0, 0.97, 210.118),
            VsopTerm(580.0, 3.093, 74.782),
            VsopTerm(546.0, 2.127, 350.332),
            VsopTerm(543.0, 1.518, 9.561),
            VsopTerm(530.0, 4.449, 117.32),
            VsopTerm(478.0, 2.965, 137.033),
            VsopTerm(474.0, 5.475, 742.99),
            VsopTerm(452.0, 1.044, 490.334),
            VsopTerm(449.0, 1.29, 127.472),
            VsopTerm(372.0, 2.278, 217.231),
            VsopTerm(355.0, 3.013, 838.969),
            VsopTerm(347.0, 1.539, 340.771),
            VsopTerm(343.0, 0.246, 0.521),
            VsopTerm(330.0, 0.247, 1581.959),
            VsopTerm(322.0, 0.961, 203.738),
            VsopTerm(322.0, 2.572, 647.011),
            VsopTerm(309.0, 3.495, 216.48),
            VsopTerm(287.0, 2.37, 351.817),
            VsopTerm(278.0, 0.4, 211.815),
            VsopTerm(249.0, 1.47, 1368.66),
            VsopTerm(227.0, 4.91, 12.53),
            VsopTerm(220.0, 4.204, 200.769),
            VsopTerm(209.0, 1.345, 625.67),
            VsopTerm(208.0, 0.483, 1162.475),
            VsopTerm(208.0, 1.283, 39.357),
            VsopTerm(204.0, 6.011, 265.989),
            VsopTerm(185.0, 3.503, 149.563),
            VsopTerm(184.0, 0.973, 4.193),
            VsopTerm(182.0, 5.491, 2.921),
            VsopTerm(174.0, 1.863, 0.751),
            VsopTerm(165.0, 0.44, 5.417),
            VsopTerm(149.0, 5.736, 52.69),
            VsopTerm(148.0, 1.535, 5.629),
            VsopTerm(146.0, 6.231, 195.14),
            VsopTerm(140.0, 4.295, 21.341),
            VsopTerm(131.0, 4.068, 10.295),
            VsopTerm(125.0, 6.277, 1898.351),
            VsopTerm(122.0, 1.976, 4.666),
            VsopTerm(118.0, 5.341, 554.07),
            VsopTerm(117.0, 2.679, 1155.361),
            VsopTerm(114.0, 5.594, 1059.382),
            VsopTerm(112.0, 1.105, 191.208),
            VsopTerm(110.0, 0.166, 1.484),
            VsopTerm(109.0, 3.438, 536.805),
            VsopTerm(107.0, 4.012, 956.289),
            VsopTerm(104.0, 2.192, 88.866),
            VsopTerm(103.0, 1.197, 1685.052),
            VsopTerm(101.0, 4.965, 269.921),
        ],
        &[
            VsopTerm(21354295596.0, 0.0, 0.0),
            VsopTerm(1296855.0, 1.8282054, 213.2990954),
            VsopTerm(564348.0, 2.885001, 7.113547),
            VsopTerm(107679.0, 2.277699, 206.185548),
            VsopTerm(98323.0, 1.0807, 426.59819),
            VsopTerm(40255.0, 2.04128, 220.41264),
            VsopTerm(19942.0, 1.27955, 103.09277),
            VsopTerm(10512.0, 2.7488, 14.22709),
            VsopTerm(6939.0, 0.4049, 639.8973),
            VsopTerm(4803.0, 2.4419, 419.4846),
            VsopTerm(4056.0, 2.9217, 110.2063),
            VsopTerm(3769.0, 3.6497, 3.9322),
            VsopTerm(3385.0, 2.4169, 3.1814),
            VsopTerm(3302.0, 1.2626, 433.7117),
            VsopTerm(3071.0, 2.3274, 199.072),
            VsopTerm(1953.0, 3.5639, 11.0457),
            VsopTerm(1249.0, 2.628, 95.9792),
            VsopTerm(922.0, 1.961, 227.526),
            VsopTerm(706.0, 4.417, 529.691),
            VsopTerm(650.0, 6.174, 202.253),
            VsopTerm(628.0, 6.111, 309.278),
            VsopTerm(487.0, 6.04, 853.196),
            VsopTerm(479.0, 4.988, 522.577),
            VsopTerm(468.0, 4.617, 63.736),
            VsopTerm(417.0, 2.117, 323.505),
            VsopTerm(408.0, 1.299, 209.367),
            VsopTerm(352.0, 2.317, 632.784),
            VsopTerm(344.0, 3.959, 412.371),
            VsopTerm(340.0, 3.634, 316.392),
            VsopTerm(336.0, 3.772, 735.877),
            VsopTerm(332.0, 2.861, 210.118),
            VsopTerm(289.0, 2.733, 117.32),
            VsopTerm(281.0, 5.744, 2.448),
            VsopTerm(266.0, 0.543, 647.011),
            VsopTerm(230.0, 1.644, 216.48),
            VsopTerm(192.0, 2.965, 224.345),
            VsopTerm(173.0, 4.077, 846.083),
            VsopTerm(167.0, 2.597, 21.341),
            VsopTerm(136.0, 2.286, 10.295),
            VsopTerm(131.0, 3.441, 742.99),
            VsopTerm(128.0, 4.095, 217.231),
            VsopTerm(109.0, 6.161, 415.552),
            VsopTerm(98.0, 4.73, 838.97),
            VsopTerm(94.0, 3.48, 1052.27),
            VsopTerm(92.0, 3.95, 88.87),
            VsopTerm(87.0, 1.22, 440.83),
            VsopTerm(83.0, 3.11, 625.67),
            VsopTerm(78.0, 6.24, 302.16),
            VsopTerm(67.0, 0.29, 4.67),
            VsopTerm(66.0, 5.65, 9.56),
            VsopTerm(62.0, 4.29, 127.47),
            VsopTerm(62.0, 1.83, 195.14),
            VsopTerm(58.0, 2.48, 191.96),
            VsopTerm(57.0, 5.02, 137.03),
            VsopTerm(55.0, 0.28, 74.78),
            VsopTerm(54.0, 5.13, 490.33),
            VsopTerm(51.0, 1.46, 536.8),
            VsopTerm(47.0, 1.18, 149.56),
            VsopTerm(47.0, 5.15, 515.46),
            VsopTerm(46.0, 2.23, 956.29),
            VsopTerm(44.0, 2.71, 5.42),
            VsopTerm(40.0, 0.41, 269.92),
            VsopTerm(40.0, 3.89, 728.76),
            VsopTerm(38.0, 0.65, 422.67),
            VsopTerm(38.0, 2.53, 12.53),
            VsopTerm(37.0, 3.78, 2.92),
            VsopTerm(35.0, 6.08, 5.63),
            VsopTerm(34.0, 3.21, 1368.66),
            VsopTerm(33.0, 4.64, 277.03),
            VsopTerm(33.0, 5.43, 1066.5),
            VsopTerm(33.0, 0.3, 351.82),
            VsopTerm(32.0, 4.39, 1155.36),
            VsopTerm(31.0, 2.43, 52.69),
            VsopTerm(30.0, 2.84, 203.0),
            VsopTerm(30.0, 6.19, 284.15),
            VsopTerm(30.0, 3.39, 1059.38),
            VsopTerm(29.0, 2.03, 330.62),
            VsopTerm(28.0, 2.74, 265.99),
            VsopTerm(26.0, 4.51, 340.77),
        ],
        &[
            VsopTerm(116441.0, 1.179879, 7.113547),
            VsopTerm(91921.0, 0.07425, 213.2991),
            VsopTerm(90592.0, 0.0, 0.0),
            VsopTerm(15277.0, 4.06492, 206.18555),
            VsopTerm(10631.0, 0.25778, 220.41264),
            VsopTerm(10605.0, 5.40964, 426.59819),
            VsopTerm(4265.0, 1.046, 14.2271),
            VsopTerm(1216.0, 2.9186, 103.0928),
            VsopTerm(1165.0, 4.6094, 639.8973),
            VsopTerm(1082.0, 5.6913, 433.7117),
            VsopTerm(1045.0, 4.0421, 199.072),
            VsopTerm(1020.0, 0.6337, 3.1814),
            VsopTerm(634.0, 4.388, 419.485),
            VsopTerm(549.0, 5.573, 3.932),
            VsopTerm(457.0, 1.268, 110.206),
            VsopTerm(425.0, 0.209, 227.526),
            VsopTerm(274.0, 4.288, 95.979),
            VsopTerm(162.0, 1.381, 11.046),
            VsopTerm(129.0, 1.566, 309.278),
            VsopTerm(117.0, 3.881, 853.196),
            VsopTerm(105.0, 4.9, 647.011),
            VsopTerm(101.0, 0.893, 21.341),
            VsopTerm(96.0, 2.91, 316.39),
            VsopTerm(95.0, 5.63, 412.37),
            VsopTerm(85.0, 5.73, 209.37),
            VsopTerm(83.0, 6.05, 216.48),
            VsopTerm(82.0, 1.02, 117.32),
            VsopTerm(75.0, 4.76, 210.12),
            VsopTerm(67.0, 0.46, 522.58),
            VsopTerm(66.0, 0.48, 10.29),
            VsopTerm(64.0, 0.35, 323.51),
            VsopTerm(61.0, 4.88, 632.78),
            VsopTerm(53.0, 2.75, 529.69),
            VsopTerm(46.0, 5.69, 440.83),
            VsopTerm(45.0, 1.67, 202.25),
            VsopTerm(42.0, 5.71, 88.87),
            VsopTerm(32.0, 0.07, 63.74),
            VsopTerm(32.0, 1.67, 302.16),
            VsopTerm(31.0, 4.16, 191.96),
            VsopTerm(27.0, 0.83, 224.34),
            VsopTerm(25.0, 5.66, 735.88),
            VsopTerm(20.0, 5.94, 217.23),
            VsopTerm(18.0, 4.9, 625.67),
            VsopTerm(17.0, 1.63, 742.99),
            VsopTerm(16.0, 0.58, 515.46),
            VsopTerm(14.0, 0.21, 838.97),
            VsopTerm(14.0, 3.76, 195.14),
            VsopTerm(12.0, 4.72, 203.0),
            VsopTerm(12.0, 0.13, 234.64),
            VsopTerm(12.0, 3.12, 846.08),
            VsopTerm(11.0, 5.92, 536.8),
            VsopTerm(11.0, 5.6, 728.76),
            VsopTerm(11.0, 3.2, 1066.5),
            VsopTerm(10.0, 4.99, 422.67),
            VsopTerm(10.0, 0.26, 330.62),
            VsopTerm(10.0, 4.15, 860.31),
            VsopTerm(9.0, 0.46, 956.29),
            VsopTerm(8.0, 2.14, 269.92),
            VsopTerm(8.0, 5.25, 429.78),
            VsopTerm(8.0, 4.03, 9.56),
            VsopTerm(7.0, 5.4, 1052.27),
            VsopTerm(6.0, 4.46, 284.15),
            VsopTerm(6.0, 5.93, 405.26),
        ],
        &[
            VsopTerm(16039.0, 5.73945, 7.11355),
            VsopTerm(4250.0, 4.5854, 213.2991),
            VsopTerm(1907.0, 4.7608, 220.4126),
            VsopTerm(1466.0, 5.9133, 206.1855),
            VsopTerm(1162.0, 5.6197, 14.2271),
            VsopTerm(1067.0, 3.6082, 426.5982),
            VsopTerm(239.0, 3.861, 433.712),
            VsopTerm(237.0, 5.768, 199.072),
            VsopTerm(166.0, 5.116, 3.181),
            VsopTerm(151.0, 2.736, 639.897),
            VsopTerm(131.0, 4.743, 227.526),
            VsopTerm(63.0, 0.23, 419.48),
            VsopTerm(62.0, 4.74, 103.09),
            VsopTerm(40.0, 5.47, 21.34),
            VsopTerm(40.0, 5.96, 95.98),
            VsopTerm(39.0, 5.83, 110.21),
            VsopTerm(28.0, 3.01, 647.01),
            VsopTerm(25.0, 0.99, 3.93),
            VsopTerm(19.0, 1.92, 853.2),
            VsopTerm(18.0, 4.97, 10.29),
            VsopTerm(18.0, 1.03, 412.37),
            VsopTerm(18.0, 4.2, 216.48),
            VsopTerm(18.0, 3.32, 309.28),
            VsopTerm(16.0, 3.9, 440.83),
            VsopTerm(16.0, 5.62, 117.32),
            VsopTerm(13.0, 1.18, 88.87),
            VsopTerm(11.0, 5.58, 11.05),
            VsopTerm(11.0, 5.93, 191.96),
            VsopTerm(10.0, 3.95, 209.37),
            VsopTerm(9.0, 3.39, 302.16),
            VsopTerm(8.0, 4.88, 323.51),
            VsopTerm(7.0, 0.38, 632.78),
            VsopTerm(6.0, 2.25, 522.58),
            VsopTerm(6.0, 1.06, 210.12),
            VsopTerm(5.0, 4.64, 234.64),
            VsopTerm(4.0, 3.14, 0.0),
            VsopTerm(4.0, 2.31, 515.46),
            VsopTerm(3.0, 2.2, 860.31),
            VsopTerm(3.0, 0.59, 529.69),
            VsopTerm(3.0, 4.93, 224.34),
            VsopTerm(3.0, 0.42, 625.67),
            VsopTerm(2.0, 4.77, 330.62),
            VsopTerm(2.0, 3.35, 429.78),
            VsopTerm(2.0, 3.2, 202.25),
            VsopTerm(2.0, 1.19, 1066.5),
            VsopTerm(2.0, 1.35, 405.26),
            VsopTerm(2.0, 4.16, 223.59),
            VsopTerm(2.0, 3.07, 654.12),
        ],
        &[
            VsopTerm(1662.0, 3.9983, 7.1135),
            VsopTerm(257.0, 2.984, 220.413),
            VsopTerm(236.0, 3.902, 14.227),
            VsopTerm(149.0, 2.741, 213.299),
            VsopTerm(114.0, 3.142, 0.0),
            VsopTerm(110.0, 1.515, 206.186),
            VsopTerm(68.0, 1.72, 426.6),
            VsopTerm(40.0, 2.05, 433.71),
            VsopTerm(38.0, 1.24, 199.07),
            VsopTerm(31.0, 3.01, 227.53),
            VsopTerm(15.0, 0.83, 639.9),
            VsopTerm(9.0, 3.71, 21.34),
            VsopTerm(6.0, 2.42, 419.48),
            VsopTerm(6.0, 1.16, 647.01),
            VsopTerm(4.0, 1.45, 95.98),
            VsopTerm(4.0, 2.12, 440.83),
            VsopTerm(3.0, 4.09, 110.21),
            VsopTerm(3.0, 2.77, 412.37),
            VsopTerm(3.0, 3.01, 88.87),
            VsopTerm(3.0, 0.0, 853.2),
            VsopTerm(3.0, 0.39, 103.09),
            VsopTerm(2.0, 3.78, 117.32),
            VsopTerm(2.0, 2.83, 234.64),
            VsopTerm(2.0, 5.08, 309.28),
            VsopTerm(2.0, 2.24, 216.48),
            VsopTerm(2.0, 5.19, 302.16),
            VsopTerm(1.0, 1.55, 191.96),
        ],
        &[
            VsopTerm(124.0, 2.259, 7.114),
            VsopTerm(34.0, 2.16, 14.23),
            VsopTerm(28.0, 1.2, 220.41),
            VsopTerm(6.0, 1.22, 227.53),
            VsopTerm(5.0, 0.24, 433.71),
            VsopTerm(4.0, 6.23, 426.6),
            VsopTerm(3.0, 2.97, 199.07),
            VsopTerm(3.0, 4.29, 206.19),
            VsopTerm(2.0, 6.25, 213.3),
            VsopTerm(1.0, 5.28, 639.9),
            VsopTerm(1.0, 0.24, 440.83),
            VsopTerm(1.0, 3.14, 0.0),
        ],
    ],
    b: &[
        &[
            VsopTerm(4330678.0, 3.6028443, 213.2990954),
            VsopTerm(240348.0, 2.852385, 426.598191),
            VsopTerm(84746.0, 0.0, 0.0),
            VsopTerm(34116.0, 0.57297, 206.18555),
            VsopTerm(30863.0, 3.48442, 220.41264),
            VsopTerm(14734.0, 2.11847, 639.89729),
            VsopTerm(9917.0, 5.79, 419.4846),
            VsopTerm(6994.0, 4.736, 7.1135),
            VsopTerm(4808.0, 5.4331, 316.3919),
            VsopTerm(4788.0, 4.9651, 110.2063),
            VsopTerm(3432.0, 2.7326, 433.7117),
            VsopTerm(1506.0, 6.013, 103.0928),
            VsopTerm(1060.0, 5.631, 529.691),
            VsopTerm(969.0, 5.204, 632.784),
            VsopTerm(942.0, 1.396, 853.196),
            VsopTerm(708.0, 3.803, 323.505),
            VsopTerm(552.0, 5.131, 202.253),
            VsopTerm(400.0, 3.359, 227.526),
            VsopTerm(319.0, 3.626, 209.367),
            VsopTerm(316.0, 1.997, 647.011),
            VsopTerm(314.0, 0.465, 217.231),
            VsopTerm(284.0, 4.886, 224.345),
            VsopTerm(236.0, 2.139, 11.046),
            VsopTerm(215.0, 5.95, 846.083),
            VsopTerm(209.0, 2.12, 415.552),
            VsopTerm(207.0, 0.73, 199.072),
            VsopTerm(179.0, 2.954, 63.736),
            VsopTerm(141.0, 0.644, 490.334),
            VsopTerm(139.0, 4.595, 14.227),
            VsopTerm(139.0, 1.998, 735.877),
            VsopTerm(135.0, 5.245, 742.99),
            VsopTerm(122.0, 3.115, 522.577),
            VsopTerm(116.0, 3.109, 216.48),
            VsopTerm(114.0, 0.963, 210.118),
        ],
        &[
            VsopTerm(397555.0, 5.3329, 213.299095),
            VsopTerm(49479.0, 3.14159, 0.0),
            VsopTerm(18572.0, 6.09919, 426.59819),
            VsopTerm(14801.0, 2.30586, 206.18555),
            VsopTerm(9644.0, 1.6967, 220.4126),
            VsopTerm(3757.0, 1.2543, 419.4846),
            VsopTerm(2717.0, 5.9117, 639.8973),
            VsopTerm(1455.0, 0.8516, 433.7117),
            VsopTerm(1291.0, 2.9177, 7.1135),
            VsopTerm(853.0, 0.436, 316.392),
            VsopTerm(298.0, 0.919, 632.784),
            VsopTerm(292.0, 5.316, 853.196),
            VsopTerm(284.0, 1.619, 227.526),
            VsopTerm(275.0, 3.889, 103.093),
            VsopTerm(172.0, 0.052, 647.011),
            VsopTerm(166.0, 2.444, 199.072),
            VsopTerm(158.0, 5.209, 110.206),
            VsopTerm(128.0, 1.207, 529.691),
            VsopTerm(110.0, 2.457, 217.231),
            VsopTerm(82.0, 2.76, 210.12),
            VsopTerm(81.0, 2.86, 14.23),
            VsopTerm(69.0, 1.66, 202.25),
            VsopTerm(65.0, 1.26, 216.48),
            VsopTerm(61.0, 1.25, 209.37),
            VsopTerm(59.0, 1.82, 323.51),
            VsopTerm(46.0, 0.82, 440.83),
            VsopTerm(36.0, 1.82, 224.34),
            VsopTerm(34.0, 2.84, 117.32),
            VsopTerm(33.0, 1.31, 412.37),
            VsopTerm(32.0, 1.19, 846.08),
            VsopTerm(27.0, 4.65, 1066.5),
            VsopTerm(27.0, 4.44, 11.05),
        ],
        &[
            VsopTerm(20630.0, 0.50482, 213.2991),
            VsopTerm(3720.0, 3.9983, 206.1855),
            VsopTerm(1627.0, 6.1819, 220.4126),
            VsopTerm(1346.0, 0.0, 0.0),
            VsopTerm(706.0, 3.039, 419.485),
            VsopTerm(365.0, 5.099, 426.598),
            VsopTerm(330.0, 5.279, 433.712),
            VsopTerm(219.0, 3.828, 639.897),
            VsopTerm(139.0, 1.043, 7.114),
            VsopTerm(104.0, 6.157, 227.526),
            VsopTerm(93.0, 1.98, 316.39),
            VsopTerm(71.0, 4.15, 199.07),
            VsopTerm(52.0, 2.88, 632.78),
            VsopTerm(49.0, 4.43, 647.01),
            VsopTerm(41.0, 3.16, 853.2),
            VsopTerm(29.0, 4.53, 210.12),
            VsopTerm(24.0, 1.12, 14.23),
            VsopTerm(21.0, 4.35, 217.23),
            VsopTerm(20.0, 5.31, 440.83),
            VsopTerm(18.0, 0.85, 110.21),
            VsopTerm(17.0, 5.68, 216.48),
            VsopTerm(16.0, 4.26, 103.09),
            VsopTerm(14.0, 3.0, 412.37),
            VsopTerm(12.0, 2.53, 529.69),
            VsopTerm(8.0, 3.32, 202.25),
            VsopTerm(7.0, 5.56, 209.37),
            VsopTerm(7.0, 0.29, 323.51),
            VsopTerm(6.0, 1.16, 117.32),
            VsopTerm(6.0, 3.61, 860.31),
        ],
        &[
            VsopTerm(666.0, 1.99, 213.299),
            VsopTerm(632.0, 5.698, 206.186),
            VsopTerm(398.0, 0.0, 0.0),
            VsopTerm(188.0, 4.338, 220.413),
            VsopTerm(92.0, 4.84, 419.48),
            VsopTerm(52.0, 3.42, 433.71),
            VsopTerm(42.0, 2.38, 426.6),
            VsopTerm(26.0, 4.4, 227.53),
            VsopTerm(21.0, 5.85, 199.07),
            VsopTerm(18.0, 1.99, 639.9),
            VsopTerm(11.0, 5.37, 7.11),
            VsopTerm(10.0, 2.55, 647.01),
            VsopTerm(7.0, 3.46, 316.39),
            VsopTerm(6.0, 4.8, 632.78),
            VsopTerm(6.0, 0.02, 210.12),
            VsopTerm(6.0, 3.52, 440.83),
            VsopTerm(5.0, 5.64, 14.23),
            VsopTerm(5.0, 1.22, 853.2),
            VsopTerm(4.0, 4.71, 412.37),
            VsopTerm(3.0, 0.63, 103.09),
            VsopTerm(2.0, 3.72, 216.48),
        ],
        &[
            VsopTerm(80.0, 1.12, 206.19),
            VsopTerm(32.0, 3.12, 213.3),
            VsopTerm(17.0, 2.48, 220.41),
            VsopTerm(12.0, 3.14, 0.0),
            VsopTerm(9.0, 0.38, 419.48),
            VsopTerm(6.0, 1.56, 433.71),
            VsopTerm(5.0, 2.63, 227.53),
            VsopTerm(5.0, 1.28, 199.07),
            VsopTerm(1.0, 1.43, 426.6),
            VsopTerm(1.0, 0.67, 647.01),
            VsopTerm(1.0, 1.72, 440.83),
            VsopTerm(1.0, 6.18, 639.9),
        ],
        &[
            VsopTerm(8.0, 2.82, 206.19),
            VsopTerm(1.0, 0.51, 220.41),
        ],
    ],
    r: &[
        &[
            VsopTerm(955758136.0, 0.0, 0.0),
            VsopTerm(52921382.0, 2.3922622, 213.29909544),
            VsopTerm(1873680.0, 5.2354961, 206.1855484),
            VsopTerm(1464664.0, 1.6476305, 426.5981909),
            VsopTerm(821891.0, 5.9352, 316.39187),
            VsopTerm(547507.0, 5.015326, 103.092774),
            VsopTerm(371684.0, 2.271148, 220.412642),
            VsopTerm(361778.0, 3.139043, 7.113547),
            VsopTerm(140618.0, 5.704067, 632.783739),
            VsopTerm(108975.0, 3.293136, 110.206321),
            VsopTerm(69007.0, 5.941, 419.48464),
            VsopTerm(61053.0, 0.94038, 639.89729),
            VsopTerm(48913.0, 1.55733, 202.2534),
            VsopTerm(34144.0, 0.19519, 277.03499),
            VsopTerm(32402.0, 5.47085, 949.17561),
            VsopTerm(20937.0, 0.46349, 735.87651),
            VsopTerm(20839.0, 1.52103, 433.71174),
            VsopTerm(20747.0, 5.33256, 199.072),
            VsopTerm(15298.0, 3.05944, 529.69097),
            VsopTerm(14296.0, 2.60434, 323.50542),
            VsopTerm(12884.0, 1.64892, 138.5175),
            VsopTerm(11993.0, 5.98051, 846.08283),
            VsopTerm(11380.0, 1.73106, 522.57742),
            VsopTerm(9796.0, 5.2048, 1265.5675),
            VsopTerm(7753.0, 5.8519, 95.9792),
            VsopTerm(6771.0, 3.0043, 14.2271),
            VsopTerm(6466.0, 0.1773, 1052.2684),
            VsopTerm(5850.0, 1.4552, 415.5525),
            VsopTerm(5307.0, 0.5974, 63.7359),
            VsopTerm(4696.0, 2.1492, 227.5262),
            VsopTerm(4044.0, 1.6401, 209.3669),
            VsopTerm(3688.0, 0.7802, 412.3711),
            VsopTerm(3461.0, 1.8509, 175.1661),
            VsopTerm(3420.0, 4.9455, 1581.9593),
            VsopTerm(3401.0, 0.5539, 350.3321),
            VsopTerm(3376.0, 3.6953, 224.3448),
            VsopTerm(2976.0, 5.6847, 210.1177),
            VsopTerm(2885.0, 1.3876, 838.9693),
            VsopTerm(2881.0, 0.1796, 853.1964),
            VsopTerm(2508.0, 3.5385, 742.9901),
            VsopTerm(2448.0, 6.1841, 1368.6603),
            VsopTerm(2406.0, 2.9656, 117.3199),
            VsopTerm(2174.0, 0.0151, 340.7709),
            VsopTerm(2024.0, 5.0541, 11.0457),
        ],
        &[
            VsopTerm(6182981.0, 0.2584352, 213.2990954),
            VsopTerm(506578.0, 0.711147, 206.185548),
            VsopTerm(341394.0, 5.796358, 426.598191),
            VsopTerm(188491.0, 0.472157, 220.412642),
            VsopTerm(186262.0, 3.141593, 0.0),
            VsopTerm(143891.0, 1.407449, 7.113547),
            VsopTerm(49621.0, 6.01744, 103.09277),
            VsopTerm(20928.0, 5.09246, 639.89729),
            VsopTerm(19953.0, 1.1756, 419.48464),
            VsopTerm(18840.0, 1.6082, 110.20632),
            VsopTerm(13877.0, 0.75886, 199.072),
            VsopTerm(12893.0, 5.9433, 433.71174),
            VsopTerm(5397.0, 1.2885, 14.2271),
            VsopTerm(4869.0, 0.8679, 323.5054),
            VsopTerm(4247.0, 0.393, 227.5262),
            VsopTerm(3252.0, 1.2585, 95.9792),
            VsopTerm(3081.0, 3.4366, 522.5774),
            VsopTerm(2909.0, 4.6068, 202.2534),
            VsopTerm(2856.0, 2.1673, 735.8765),
            VsopTerm(1988.0, 2.4505, 412.3711),
            VsopTerm(1941.0, 6.0239, 209.3669),
            VsopTerm(1581.0, 1.2919, 210.1177),
            VsopTerm(1340.0, 4.308, 853.1964),
            VsopTerm(1316.0, 1.253, 117.3199),
            VsopTerm(1203.0, 1.8665, 316.3919),
            VsopTerm(1091.0, 0.0753, 216.4805),
            VsopTerm(966.0, 0.48, 632.784),
            VsopTerm(954.0, 5.152, 647.011),
            VsopTerm(898.0, 0.983, 529.691),
            VsopTerm(882.0, 1.885, 1052.268),
            VsopTerm(874.0, 1.402, 224.345),
            VsopTerm(785.0, 3.064, 838.969),
            VsopTerm(740.0, 1.382, 625.67),
            VsopTerm(658.0, 4.144, 309.278),
            VsopTerm(650.0, 1.725, 742.99),
            VsopTerm(613.0, 3.033, 63.736),
            VsopTerm(599.0, 2.549, 217.231),
            VsopTerm(503.0, 2.13, 3.932),
        ],
        &[
            VsopTerm(436902.0, 4.786717, 213.299095),
            VsopTerm(71923.0, 2.5007, 206.18555),
            VsopTerm(49767.0, 4.97168, 220.41264),
            VsopTerm(43221.0, 3.8694, 426.59819),
            VsopTerm(29646.0, 5.9631, 7.11355),
            VsopTerm(4721.0, 2.4753, 199.072),
            VsopTerm(4142.0, 4.1067, 433.7117),
            VsopTerm(3789.0, 3.0977, 639.8973),
            VsopTerm(2964.0, 1.3721, 103.0928),
            VsopTerm(2556.0, 2.8507, 419.4846),
            VsopTerm(2327.0, 0.0, 0.0),
            VsopTerm(2208.0, 6.2759, 110.2063),
            VsopTerm(2188.0, 5.8555, 14.2271),
            VsopTerm(1957.0, 4.9245, 227.5262),
            VsopTerm(924.0, 5.464, 323.505),
            VsopTerm(706.0, 2.971, 95.979),
            VsopTerm(546.0, 4.129, 412.371),
            VsopTerm(431.0, 5.178, 522.577),
            VsopTerm(405.0, 4.173, 209.367),
            VsopTerm(391.0, 4.481, 216.48),
            VsopTerm(374.0, 5.834, 117.32),
            VsopTerm(361.0, 3.277, 647.011),
            VsopTerm(356.0, 3.192, 210.118),
            VsopTerm(326.0, 2.269, 853.196),
            VsopTerm(207.0, 4.022, 735.877),
            VsopTerm(204.0, 0.088, 202.253),
            VsopTerm(180.0, 3.597, 632.784),
            VsopTerm(178.0, 4.097, 440.825),
            VsopTerm(154.0, 3.135, 625.67),
            VsopTerm(148.0, 0.136, 302.165),
            VsopTerm(133.0, 2.594, 191.958),
            VsopTerm(132.0, 5.933, 309.278),
        ],
        &[
            VsopTerm(20315.0, 3.02187, 213.2991),
            VsopTerm(8924.0, 3.1914, 220.4126),
            VsopTerm(6909.0, 4.3517, 206.1855),
            VsopTerm(4087.0, 4.2241, 7.1135),
            VsopTerm(3879.0, 2.0106, 426.5982),
            VsopTerm(1071.0, 4.2036, 199.072),
            VsopTerm(907.0, 2.283, 433.712),
            VsopTerm(606.0, 3.175, 227.526),
            VsopTerm(597.0, 4.135, 14.227),
            VsopTerm(483.0, 1.173, 639.897),
            VsopTerm(393.0, 0.0, 0.0),
            VsopTerm(229.0, 4.698, 419.485),
            VsopTerm(188.0, 4.59, 110.206),
            VsopTerm(150.0, 3.202, 103.093),
            VsopTerm(121.0, 3.768, 323.505),
            VsopTerm(102.0, 4.71, 95.979),
            VsopTerm(101.0, 5.819, 412.371),
            VsopTerm(93.0, 1.44, 647.01),
            VsopTerm(84.0, 2.63, 216.48),
            VsopTerm(73.0, 4.15, 117.32),
            VsopTerm(62.0, 2.31, 440.83),
            VsopTerm(55.0, 0.31, 853.2),
            VsopTerm(50.0, 2.39, 209.37),
            VsopTerm(45.0, 4.37, 191.96),
            VsopTerm(41.0, 0.69, 522.58),
            VsopTerm(40.0, 1.84, 302.16),
            VsopTerm(38.0, 5.94, 88.87),
            VsopTerm(32.0, 4.01, 21.34),
        ],
        &[
            VsopTerm(1202.0, 1.415, 220.4126),
            VsopTerm(708.0, 1.162, 213.299),
            VsopTerm(516.0, 6.24, 206.186),
            VsopTerm(427.0, 2.469, 7.114),
            VsopTerm(268.0, 0.187, 426.598),
            VsopTerm(170.0, 5.959, 199.072),
            VsopTerm(150.0, 0.48, 433.712),
            VsopTerm(145.0, 1.442, 227.526),
            VsopTerm(121.0, 2.405, 14.227),
            VsopTerm(47.0, 5.57, 639.9),
            VsopTerm(19.0, 5.86, 647.01),
            VsopTerm(17.0, 0.53, 440.83),
            VsopTerm(16.0, 2.9, 110.21),
            VsopTerm(15.0, 0.3, 419.48),
            VsopTerm(14.0, 1.3, 412.37),
            VsopTerm(13.0, 2.09, 323.51),
            VsopTerm(11.0, 0.22, 95.98),
            VsopTerm(11.0, 2.46, 117.32),
            VsopTerm(10.0, 3.14, 0.0),
            VsopTerm(9.0, 1.56, 88.87),
            VsopTerm(9.0, 2.28, 21.34),
            VsopTerm(9.0, 0.68, 216.48),
            VsopTerm(8.0, 1.27, 234.64),
        ],
        &[
            VsopTerm(129.0, 5.913, 220.413),
            VsopTerm(32.0, 0.69, 7.11),
            VsopTerm(27.0, 5.91, 227.53),
            VsopTerm(20.0, 4.95, 433.71),
            VsopTerm(20.0, 0.67, 14.23),
            VsopTerm(14.0, 2.67, 206.19),
            VsopTerm(14.0, 1.46, 199.07),
            VsopTerm(13.0, 4.59, 426.6),
            VsopTerm(7.0, 4.63, 213.3),
            VsopTerm(5.0, 3.61, 639.9),
            VsopTerm(4.0, 4.9, 440.83),
            VsopTerm(3.0, 4.07, 647.01),
            VsopTerm(3.0, 4.66, 191.96),
            VsopTerm(3.0, 0.49, 323.51),
            VsopTerm(3.0, 3.18, 419.48),
            VsopTerm(2.0, 3.7, 88.87),
            VsopTerm(2.0, 3.32, 95.98),
            VsopTerm(2.0, 0.56, 117.32),
        ],
    ],
};

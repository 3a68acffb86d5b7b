//! Truncated VSOP87D terms for Jupiter, heliocentric ecliptic of date.

use super::{VsopSeries, VsopTerm};

#[rustfmt::skip]
pub(crate) const SERIES: VsopSeries = VsopSeries {
    l: &[
        &[
            VsopTerm(59954691.0, 0.0, 0.0),
            VsopTerm(9695899.0, 5.0619179, 529.6909651),
            VsopTerm(573610.0, 1.444062, 7.113547),
            VsopTerm(306389.0, 5.417347, 1059.38193),
            VsopTerm(97178.0, 4.14265, 632.78374),
            VsopTerm(72903.0, 3.64043, 522.57742),
            VsopTerm(64264.0, 3.41145, 103.09277),
            VsopTerm(39806.0, 2.29377, 419.48464),
            VsopTerm(38858.0, 1.27232, 316.39187),
            VsopTerm(27965.0, 1.78455, 536.80451),
            VsopTerm(13590.0, 5.77481, 1589.0729),
            VsopTerm(8769.0, 3.63, 949.1756),
            VsopTerm(8246.0, 3.5823, 206.1855),
            VsopTerm(7368.0, 5.081, 735.8765),
            VsopTerm(6263.0, 0.025, 213.2991),
            VsopTerm(6114.0, 4.5132, 1162.4747),
            VsopTerm(5305.0, 4.1863, 1052.2684),
            VsopTerm(5305.0, 1.3067, 14.2271),
            VsopTerm(4905.0, 1.3208, 110.2063),
            VsopTerm(4647.0, 4.6996, 3.9322),
            VsopTerm(3045.0, 4.3168, 426.5982),
            VsopTerm(2610.0, 1.5667, 846.0828),
            VsopTerm(2028.0, 1.0638, 3.1814),
            VsopTerm(1921.0, 0.9717, 639.8973),
            VsopTerm(1765.0, 2.1415, 1066.4955),
            VsopTerm(1723.0, 3.8804, 1265.5675),
            VsopTerm(1633.0, 3.582, 515.4639),
            VsopTerm(1432.0, 4.2968, 625.6702),
            VsopTerm(973.0, 4.098, 95.979),
            VsopTerm(884.0, 2.437, 412.371),
            VsopTerm(732.0, 6.085, 838.969),
            VsopTerm(731.0, 3.806, 1581.959),
            VsopTerm(709.0, 1.293, 742.99),
            VsopTerm(692.0, 6.134, 2118.764),
            VsopTerm(614.0, 4.109, 1478.867),
            VsopTerm(582.0, 4.54, 309.278),
            VsopTerm(495.0, 3.756, 323.505),
            VsopTerm(441.0, 2.958, 454.909),
            VsopTerm(417.0, 1.036, 2.448),
            VsopTerm(390.0, 4.897, 1692.166),
            VsopTerm(376.0, 4.703, 1368.66),
            VsopTerm(341.0, 5.715, 533.623),
            VsopTerm(330.0, 4.74, 0.048),
            VsopTerm(262.0, 1.877, 0.963),
            VsopTerm(261.0, 0.82, 380.128),
            VsopTerm(257.0, 3.724, 199.072),
            VsopTerm(244.0, 5.22, 728.763),
            VsopTerm(235.0, 1.227, 909.819),
            VsopTerm(220.0, 1.651, 543.918),
            VsopTerm(207.0, 1.855, 525.759),
            VsopTerm(202.0, 1.807, 1375.774),
            VsopTerm(197.0, 5.293, 1155.361),
            VsopTerm(175.0, 3.73, 942.062),
            VsopTerm(175.0, 3.226, 1898.351),
            VsopTerm(175.0, 5.91, 956.289),
            VsopTerm(158.0, 4.365, 1795.258),
            VsopTerm(151.0, 3.906, 74.782),
            VsopTerm(149.0, 4.377, 1685.052),
            VsopTerm(141.0, 3.136, 491.558),
            VsopTerm(138.0, 1.318, 1169.588),
            VsopTerm(131.0, 4.169, 1045.155),
            VsopTerm(117.0, 2.5, 1596.186),
            VsopTerm(117.0, 3.389, 0.521),
            VsopTerm(106.0, 4.554, 526.51),
        ],
        &[
            VsopTerm(52993480757.0, 0.0, 0.0),
            VsopTerm(489741.0, 4.220667, 529.690965),
            VsopTerm(228919.0, 6.026475, 7.113547),
            VsopTerm(27655.0, 4.57266, 1059.38193),
            VsopTerm(20721.0, 5.45939, 522.57742),
            VsopTerm(12106.0, 0.16986, 536.80451),
            VsopTerm(6068.0, 4.4242, 103.0928),
            VsopTerm(5434.0, 3.9848, 419.4846),
            VsopTerm(4238.0, 5.8901, 14.2271),
            VsopTerm(2212.0, 5.2677, 206.1855),
            VsopTerm(1746.0, 4.9267, 1589.0729),
            VsopTerm(1296.0, 5.5513, 3.1814),
            VsopTerm(1173.0, 5.8565, 1052.2684),
            VsopTerm(1163.0, 0.5145, 3.9322),
            VsopTerm(1099.0, 5.307, 515.4639),
            VsopTerm(1007.0, 0.4648, 735.8765),
            VsopTerm(1004.0, 3.1504, 426.5982),
            VsopTerm(848.0, 5.758, 110.206),
            VsopTerm(827.0, 4.803, 213.299),
            VsopTerm(816.0, 0.586, 1066.495),
            VsopTerm(725.0, 5.518, 639.897),
            VsopTerm(568.0, 5.989, 625.67),
            VsopTerm(474.0, 4.132, 412.371),
            VsopTerm(413.0, 5.737, 95.979),
            VsopTerm(345.0, 4.242, 632.784),
            VsopTerm(336.0, 3.732, 1162.475),
            VsopTerm(234.0, 4.035, 949.176),
            VsopTerm(234.0, 6.243, 309.278),
            VsopTerm(199.0, 1.505, 838.969),
            VsopTerm(195.0, 2.219, 323.505),
            VsopTerm(187.0, 6.086, 742.99),
            VsopTerm(184.0, 6.28, 543.918),
            VsopTerm(171.0, 5.417, 199.072),
            VsopTerm(131.0, 0.626, 728.763),
            VsopTerm(115.0, 0.68, 846.083),
            VsopTerm(115.0, 5.286, 2118.764),
            VsopTerm(108.0, 4.493, 956.289),
            VsopTerm(80.0, 5.82, 1045.15),
            VsopTerm(72.0, 5.34, 942.06),
            VsopTerm(70.0, 5.97, 532.87),
            VsopTerm(67.0, 5.73, 21.34),
            VsopTerm(66.0, 0.13, 526.51),
            VsopTerm(65.0, 6.09, 1581.96),
            VsopTerm(59.0, 0.59, 1155.36),
            VsopTerm(58.0, 0.99, 1596.19),
            VsopTerm(57.0, 5.97, 1169.59),
            VsopTerm(57.0, 1.41, 533.62),
            VsopTerm(55.0, 5.43, 10.29),
            VsopTerm(52.0, 5.73, 117.32),
            VsopTerm(52.0, 0.23, 1368.66),
            VsopTerm(50.0, 6.08, 525.76),
            VsopTerm(47.0, 3.63, 1478.87),
            VsopTerm(47.0, 0.51, 1265.57),
            VsopTerm(40.0, 4.16, 1692.17),
            VsopTerm(34.0, 0.1, 302.16),
            VsopTerm(33.0, 5.04, 220.41),
            VsopTerm(32.0, 5.37, 508.35),
            VsopTerm(29.0, 5.42, 1272.68),
            VsopTerm(29.0, 3.36, 4.67),
            VsopTerm(29.0, 0.76, 88.87),
            VsopTerm(25.0, 1.61, 831.86),
        ],
        &[
            VsopTerm(47234.0, 4.32148, 7.11355),
            VsopTerm(38966.0, 0.0, 0.0),
            VsopTerm(30629.0, 2.93021, 529.69097),
            VsopTerm(3189.0, 1.055, 522.5774),
            VsopTerm(2729.0, 4.8455, 536.8045),
            VsopTerm(2723.0, 3.4141, 1059.3819),
            VsopTerm(1721.0, 4.1873, 14.2271),
            VsopTerm(383.0, 5.768, 419.485),
            VsopTerm(378.0, 0.76, 515.464),
            VsopTerm(367.0, 6.055, 103.093),
            VsopTerm(337.0, 3.786, 3.181),
            VsopTerm(308.0, 0.694, 206.186),
            VsopTerm(218.0, 3.814, 1589.073),
            VsopTerm(199.0, 5.34, 1066.495),
            VsopTerm(197.0, 2.484, 3.932),
            VsopTerm(156.0, 1.406, 1052.268),
            VsopTerm(146.0, 3.814, 639.897),
            VsopTerm(142.0, 1.634, 426.598),
            VsopTerm(130.0, 5.837, 412.371),
            VsopTerm(117.0, 1.414, 625.67),
            VsopTerm(97.0, 4.03, 110.21),
            VsopTerm(91.0, 1.11, 95.98),
            VsopTerm(87.0, 2.52, 632.78),
            VsopTerm(79.0, 4.64, 543.92),
            VsopTerm(72.0, 2.22, 735.88),
            VsopTerm(58.0, 0.83, 199.07),
            VsopTerm(57.0, 3.12, 213.3),
            VsopTerm(49.0, 1.67, 309.28),
            VsopTerm(40.0, 4.02, 21.34),
            VsopTerm(40.0, 0.62, 323.51),
            VsopTerm(36.0, 2.33, 728.76),
            VsopTerm(29.0, 3.61, 10.29),
            VsopTerm(28.0, 3.24, 838.97),
            VsopTerm(26.0, 4.5, 742.99),
            VsopTerm(26.0, 2.51, 1162.47),
            VsopTerm(25.0, 1.22, 1045.15),
            VsopTerm(24.0, 3.01, 956.29),
            VsopTerm(19.0, 4.29, 532.87),
            VsopTerm(18.0, 0.81, 508.35),
            VsopTerm(17.0, 4.2, 2118.76),
            VsopTerm(17.0, 1.83, 526.51),
            VsopTerm(15.0, 5.81, 1596.19),
            VsopTerm(15.0, 0.68, 942.06),
            VsopTerm(15.0, 4.0, 117.32),
            VsopTerm(14.0, 5.95, 316.39),
            VsopTerm(14.0, 1.8, 302.16),
            VsopTerm(13.0, 2.52, 88.87),
            VsopTerm(13.0, 4.37, 1169.59),
            VsopTerm(11.0, 4.44, 525.76),
            VsopTerm(10.0, 1.72, 1581.96),
            VsopTerm(9.0, 2.18, 1155.36),
            VsopTerm(9.0, 3.29, 220.41),
            VsopTerm(9.0, 3.32, 831.86),
            VsopTerm(8.0, 5.76, 846.08),
            VsopTerm(8.0, 2.71, 533.62),
            VsopTerm(7.0, 2.18, 1265.57),
            VsopTerm(6.0, 0.5, 949.18),
        ],
        &[
            VsopTerm(6502.0, 2.5986, 7.1135),
            VsopTerm(1357.0, 1.3464, 529.691),
            VsopTerm(471.0, 2.475, 14.227),
            VsopTerm(417.0, 3.245, 536.805),
            VsopTerm(353.0, 2.974, 522.577),
            VsopTerm(155.0, 2.076, 1059.382),
            VsopTerm(87.0, 2.51, 515.46),
            VsopTerm(44.0, 0.0, 0.0),
            VsopTerm(34.0, 3.83, 1066.5),
            VsopTerm(28.0, 2.45, 206.19),
            VsopTerm(24.0, 1.28, 412.37),
            VsopTerm(23.0, 2.98, 543.92),
            VsopTerm(20.0, 2.1, 639.9),
            VsopTerm(20.0, 1.4, 419.48),
            VsopTerm(19.0, 1.59, 103.09),
            VsopTerm(17.0, 2.3, 21.34),
            VsopTerm(17.0, 2.6, 1589.07),
            VsopTerm(16.0, 3.15, 625.67),
            VsopTerm(16.0, 3.36, 1052.27),
            VsopTerm(13.0, 2.76, 95.98),
            VsopTerm(13.0, 2.54, 199.07),
            VsopTerm(13.0, 6.27, 426.6),
            VsopTerm(9.0, 1.76, 10.29),
            VsopTerm(9.0, 2.27, 110.21),
            VsopTerm(7.0, 3.43, 309.28),
            VsopTerm(7.0, 4.04, 728.76),
            VsopTerm(6.0, 2.52, 508.35),
            VsopTerm(5.0, 2.91, 1045.15),
            VsopTerm(5.0, 5.25, 323.51),
            VsopTerm(4.0, 4.3, 88.87),
            VsopTerm(4.0, 3.52, 302.16),
            VsopTerm(4.0, 4.09, 735.88),
            VsopTerm(3.0, 1.43, 956.29),
            VsopTerm(3.0, 4.36, 1596.19),
            VsopTerm(3.0, 1.25, 213.3),
            VsopTerm(3.0, 5.02, 838.97),
            VsopTerm(3.0, 2.24, 117.32),
            VsopTerm(2.0, 2.9, 742.99),
            VsopTerm(2.0, 2.36, 942.06),
        ],
        &[
            VsopTerm(669.0, 0.853, 7.114),
            VsopTerm(114.0, 3.142, 0.0),
            VsopTerm(100.0, 0.743, 14.227),
            VsopTerm(50.0, 1.65, 536.8),
            VsopTerm(44.0, 5.82, 529.69),
            VsopTerm(32.0, 4.86, 522.58),
            VsopTerm(15.0, 4.29, 515.46),
            VsopTerm(9.0, 0.71, 1059.38),
            VsopTerm(5.0, 1.3, 543.92),
            VsopTerm(4.0, 2.32, 1066.5),
            VsopTerm(4.0, 0.48, 21.34),
            VsopTerm(3.0, 3.0, 412.37),
            VsopTerm(2.0, 0.4, 639.9),
            VsopTerm(2.0, 4.26, 199.07),
            VsopTerm(2.0, 4.91, 625.67),
            VsopTerm(2.0, 4.26, 206.19),
            VsopTerm(1.0, 5.26, 1052.27),
            VsopTerm(1.0, 4.72, 95.98),
            VsopTerm(1.0, 1.29, 1589.07),
        ],
        &[
            VsopTerm(50.0, 5.26, 7.11),
            VsopTerm(16.0, 5.25, 14.23),
            VsopTerm(4.0, 0.01, 536.8),
            VsopTerm(2.0, 1.1, 522.58),
            VsopTerm(1.0, 3.14, 0.0),
        ],
    ],
    b: &[
        &[
            VsopTerm(2268616.0, 3.5585261, 529.6909651),
            VsopTerm(110090.0, 0.0, 0.0),
            VsopTerm(109972.0, 3.908093, 1059.38193),
            VsopTerm(8101.0, 3.6051, 522.5774),
            VsopTerm(6438.0, 0.3063, 536.8045),
            VsopTerm(6044.0, 4.2588, 1589.0729),
            VsopTerm(1107.0, 2.9853, 1162.4747),
            VsopTerm(944.0, 1.675, 426.598),
            VsopTerm(942.0, 2.936, 1052.268),
            VsopTerm(894.0, 1.754, 7.114),
            VsopTerm(836.0, 5.179, 103.093),
            VsopTerm(767.0, 2.155, 632.784),
            VsopTerm(684.0, 3.678, 213.299),
            VsopTerm(629.0, 0.643, 1066.495),
            VsopTerm(559.0, 0.014, 846.083),
            VsopTerm(532.0, 2.703, 110.206),
            VsopTerm(464.0, 1.173, 949.176),
            VsopTerm(431.0, 2.608, 419.485),
            VsopTerm(351.0, 4.611, 2118.764),
            VsopTerm(132.0, 4.778, 742.99),
            VsopTerm(123.0, 3.35, 1692.166),
            VsopTerm(116.0, 1.387, 323.505),
            VsopTerm(115.0, 5.049, 316.392),
            VsopTerm(104.0, 3.701, 515.464),
            VsopTerm(103.0, 2.319, 1478.867),
            VsopTerm(102.0, 3.153, 1581.959),
        ],
        &[
            VsopTerm(177352.0, 5.701665, 529.690965),
            VsopTerm(3230.0, 5.7794, 1059.3819),
            VsopTerm(3081.0, 5.4746, 522.5774),
            VsopTerm(2212.0, 4.7348, 536.8045),
            VsopTerm(1694.0, 3.1416, 0.0),
            VsopTerm(346.0, 4.746, 1052.268),
            VsopTerm(234.0, 5.189, 1066.495),
            VsopTerm(196.0, 6.186, 7.114),
            VsopTerm(150.0, 3.927, 1589.073),
            VsopTerm(114.0, 3.439, 632.784),
            VsopTerm(97.0, 2.91, 949.18),
            VsopTerm(82.0, 5.08, 1162.47),
            VsopTerm(77.0, 2.51, 103.09),
            VsopTerm(77.0, 0.61, 419.48),
            VsopTerm(74.0, 5.5, 515.46),
            VsopTerm(61.0, 5.45, 213.3),
            VsopTerm(50.0, 3.95, 735.88),
            VsopTerm(46.0, 0.54, 110.21),
            VsopTerm(45.0, 1.9, 846.08),
            VsopTerm(37.0, 4.7, 543.92),
            VsopTerm(36.0, 6.11, 316.39),
            VsopTerm(32.0, 4.92, 1581.96),
        ],
        &[
            VsopTerm(8094.0, 1.4632, 529.691),
            VsopTerm(813.0, 3.1416, 0.0),
            VsopTerm(742.0, 0.957, 522.577),
            VsopTerm(399.0, 2.899, 536.805),
            VsopTerm(342.0, 1.447, 1059.382),
            VsopTerm(74.0, 0.41, 1052.27),
            VsopTerm(46.0, 3.48, 1066.5),
            VsopTerm(30.0, 1.93, 1589.07),
            VsopTerm(29.0, 0.99, 515.46),
            VsopTerm(23.0, 4.27, 7.11),
            VsopTerm(14.0, 2.92, 543.92),
            VsopTerm(12.0, 5.22, 632.78),
            VsopTerm(11.0, 4.88, 949.18),
            VsopTerm(6.0, 6.21, 1045.15),
        ],
        &[
            VsopTerm(252.0, 3.381, 529.691),
            VsopTerm(122.0, 2.733, 522.577),
            VsopTerm(49.0, 1.04, 536.8),
            VsopTerm(11.0, 2.31, 1052.27),
            VsopTerm(8.0, 2.77, 515.46),
            VsopTerm(7.0, 4.25, 1059.38),
            VsopTerm(6.0, 1.78, 1066.5),
            VsopTerm(4.0, 1.13, 543.92),
            VsopTerm(3.0, 3.14, 0.0),
        ],
        &[
            VsopTerm(15.0, 4.53, 522.58),
            VsopTerm(5.0, 4.47, 529.69),
            VsopTerm(4.0, 5.44, 536.8),
            VsopTerm(3.0, 0.0, 0.0),
            VsopTerm(2.0, 4.52, 515.46),
            VsopTerm(1.0, 4.2, 1052.27),
        ],
        &[
            VsopTerm(1.0, 0.09, 522.58),
        ],
    ],
    r: &[
        &[
            VsopTerm(520887429.0, 0.0, 0.0),
            VsopTerm(25209327.0, 3.4910864, 529.69096509),
            VsopTerm(610600.0, 3.841154, 1059.38193),
            VsopTerm(282029.0, 2.574199, 632.783739),
            VsopTerm(187647.0, 2.075904, 522.577418),
            VsopTerm(86793.0, 0.71001, 419.48464),
            VsopTerm(72063.0, 0.21466, 536.80451),
            VsopTerm(65517.0, 5.97996, 316.39187),
            VsopTerm(30135.0, 2.16132, 949.17561),
            VsopTerm(29135.0, 1.67759, 103.09277),
            VsopTerm(23947.0, 0.27458, 7.11355),
            VsopTerm(23453.0, 3.54023, 735.87651),
            VsopTerm(22284.0, 4.19363, 1589.0729),
            VsopTerm(13033.0, 2.96043, 1162.4747),
            VsopTerm(12749.0, 2.7155, 1052.26838),
            VsopTerm(9703.0, 1.9067, 206.1855),
            VsopTerm(9161.0, 4.4135, 213.2991),
            VsopTerm(7895.0, 2.4791, 426.5982),
            VsopTerm(7058.0, 2.1818, 1265.5675),
            VsopTerm(6138.0, 6.2642, 846.0828),
            VsopTerm(5477.0, 5.6573, 639.8973),
            VsopTerm(4170.0, 2.0161, 515.4639),
            VsopTerm(4137.0, 2.7222, 625.6702),
            VsopTerm(3503.0, 0.5653, 1066.4955),
            VsopTerm(2617.0, 2.0099, 1581.9593),
            VsopTerm(2500.0, 4.5518, 838.9693),
            VsopTerm(2128.0, 6.1275, 742.9901),
            VsopTerm(1912.0, 0.8562, 412.3711),
            VsopTerm(1611.0, 3.0887, 1368.6603),
            VsopTerm(1479.0, 2.6803, 1478.8666),
            VsopTerm(1231.0, 1.8904, 323.5054),
            VsopTerm(1217.0, 1.8017, 110.2063),
            VsopTerm(1015.0, 1.3867, 454.9094),
            VsopTerm(999.0, 2.872, 309.278),
            VsopTerm(961.0, 4.549, 2118.764),
            VsopTerm(886.0, 4.148, 533.623),
            VsopTerm(821.0, 1.593, 1898.351),
            VsopTerm(812.0, 5.941, 909.819),
            VsopTerm(777.0, 3.677, 728.763),
            VsopTerm(727.0, 3.988, 1155.361),
            VsopTerm(655.0, 2.791, 1685.052),
            VsopTerm(654.0, 3.382, 1692.166),
            VsopTerm(621.0, 4.823, 956.289),
            VsopTerm(615.0, 2.276, 942.062),
            VsopTerm(562.0, 0.081, 543.918),
            VsopTerm(542.0, 0.284, 525.759),
        ],
        &[
            VsopTerm(1271802.0, 2.6493751, 529.6909651),
            VsopTerm(61662.0, 3.00076, 1059.38193),
            VsopTerm(53444.0, 3.89718, 522.57742),
            VsopTerm(41390.0, 0.0, 0.0),
            VsopTerm(31185.0, 4.88277, 536.80451),
            VsopTerm(11847.0, 2.4133, 419.48464),
            VsopTerm(9166.0, 4.7598, 7.1135),
            VsopTerm(3404.0, 3.3469, 1589.0729),
            VsopTerm(3203.0, 5.2108, 735.8765),
            VsopTerm(3176.0, 2.793, 103.0928),
            VsopTerm(2806.0, 3.7422, 515.4639),
            VsopTerm(2677.0, 4.3305, 1052.2684),
            VsopTerm(2600.0, 3.6344, 206.1855),
            VsopTerm(2412.0, 1.4695, 426.5982),
            VsopTerm(2101.0, 3.9276, 639.8973),
            VsopTerm(1646.0, 4.4163, 1066.4955),
            VsopTerm(1641.0, 4.4163, 625.6702),
            VsopTerm(1050.0, 3.1611, 213.2991),
            VsopTerm(1025.0, 2.5543, 412.3711),
            VsopTerm(806.0, 2.678, 632.784),
            VsopTerm(741.0, 2.171, 1162.475),
            VsopTerm(677.0, 6.25, 838.969),
            VsopTerm(567.0, 4.577, 742.99),
            VsopTerm(485.0, 2.469, 949.176),
            VsopTerm(469.0, 4.71, 543.918),
            VsopTerm(445.0, 0.403, 323.505),
            VsopTerm(416.0, 5.368, 728.763),
            VsopTerm(402.0, 4.605, 309.278),
            VsopTerm(347.0, 4.681, 14.227),
            VsopTerm(338.0, 3.168, 956.289),
            VsopTerm(261.0, 5.343, 846.083),
            VsopTerm(247.0, 3.923, 942.062),
            VsopTerm(220.0, 4.842, 1368.66),
            VsopTerm(203.0, 5.6, 1155.361),
            VsopTerm(200.0, 4.439, 1045.155),
            VsopTerm(197.0, 3.706, 2118.764),
            VsopTerm(196.0, 3.759, 199.072),
            VsopTerm(184.0, 4.265, 95.979),
            VsopTerm(180.0, 4.402, 532.872),
            VsopTerm(170.0, 4.846, 526.51),
            VsopTerm(146.0, 6.13, 533.623),
            VsopTerm(133.0, 1.322, 110.206),
            VsopTerm(132.0, 4.512, 525.759),
        ],
        &[
            VsopTerm(79645.0, 1.35866, 529.69097),
            VsopTerm(8252.0, 5.7777, 522.5774),
            VsopTerm(7030.0, 3.2748, 536.8045),
            VsopTerm(5314.0, 1.8384, 1059.3819),
            VsopTerm(1861.0, 2.9768, 7.1135),
            VsopTerm(964.0, 5.48, 515.464),
            VsopTerm(836.0, 4.199, 419.485),
            VsopTerm(498.0, 3.142, 0.0),
            VsopTerm(427.0, 2.228, 639.897),
            VsopTerm(406.0, 3.783, 1066.495),
            VsopTerm(377.0, 2.242, 1589.073),
            VsopTerm(363.0, 5.368, 206.186),
            VsopTerm(342.0, 6.099, 1052.268),
            VsopTerm(339.0, 6.127, 625.67),
            VsopTerm(333.0, 0.003, 426.598),
            VsopTerm(280.0, 4.262, 412.371),
            VsopTerm(257.0, 0.963, 632.784),
            VsopTerm(230.0, 0.705, 735.877),
            VsopTerm(201.0, 3.069, 543.918),
            VsopTerm(200.0, 4.429, 103.093),
            VsopTerm(139.0, 2.932, 14.227),
            VsopTerm(114.0, 0.787, 728.763),
            VsopTerm(95.0, 1.7, 838.97),
            VsopTerm(86.0, 5.14, 323.51),
            VsopTerm(83.0, 0.06, 309.28),
            VsopTerm(80.0, 2.98, 742.99),
            VsopTerm(75.0, 1.6, 956.29),
            VsopTerm(70.0, 1.51, 213.3),
            VsopTerm(67.0, 5.47, 199.07),
            VsopTerm(62.0, 6.1, 1045.15),
            VsopTerm(56.0, 0.96, 1162.47),
            VsopTerm(52.0, 5.58, 942.06),
            VsopTerm(50.0, 2.72, 532.87),
            VsopTerm(45.0, 5.52, 508.35),
            VsopTerm(44.0, 0.27, 526.51),
            VsopTerm(40.0, 5.95, 95.98),
        ],
        &[
            VsopTerm(3519.0, 6.058, 529.691),
            VsopTerm(1073.0, 1.6732, 536.8045),
            VsopTerm(916.0, 1.413, 522.577),
            VsopTerm(342.0, 0.523, 1059.382),
            VsopTerm(255.0, 1.196, 7.114),
            VsopTerm(222.0, 0.952, 515.464),
            VsopTerm(90.0, 3.14, 0.0),
            VsopTerm(69.0, 2.27, 1066.5),
            VsopTerm(58.0, 1.41, 543.92),
            VsopTerm(58.0, 0.53, 639.9),
            VsopTerm(51.0, 5.98, 412.37),
            VsopTerm(47.0, 1.58, 625.67),
            VsopTerm(43.0, 6.12, 419.48),
            VsopTerm(37.0, 1.18, 14.23),
            VsopTerm(34.0, 1.67, 1052.27),
            VsopTerm(34.0, 0.85, 206.19),
            VsopTerm(31.0, 1.04, 1589.07),
            VsopTerm(30.0, 4.63, 426.6),
            VsopTerm(21.0, 2.5, 728.76),
            VsopTerm(15.0, 0.89, 199.07),
            VsopTerm(14.0, 0.96, 508.35),
            VsopTerm(13.0, 1.5, 1045.15),
            VsopTerm(12.0, 2.61, 735.88),
            VsopTerm(12.0, 3.56, 323.51),
            VsopTerm(11.0, 1.79, 309.28),
            VsopTerm(11.0, 6.28, 956.29),
            VsopTerm(10.0, 6.26, 103.09),
            VsopTerm(9.0, 3.45, 838.97),
        ],
        &[
            VsopTerm(129.0, 0.084, 536.805),
            VsopTerm(113.0, 4.249, 529.691),
            VsopTerm(83.0, 3.3, 522.58),
            VsopTerm(38.0, 2.73, 515.46),
            VsopTerm(27.0, 5.69, 7.11),
            VsopTerm(18.0, 5.4, 1052.27),
            VsopTerm(13.0, 6.02, 543.92),
            VsopTerm(9.0, 0.77, 1066.5),
            VsopTerm(8.0, 5.68, 14.23),
            VsopTerm(7.0, 1.43, 412.37),
            VsopTerm(6.0, 5.12, 639.9),
            VsopTerm(5.0, 3.34, 625.67),
            VsopTerm(3.0, 3.4, 1059.38),
            VsopTerm(3.0, 4.16, 728.76),
            VsopTerm(3.0, 2.9, 426.6),
        ],
        &[
            VsopTerm(11.0, 4.75, 536.8),
            VsopTerm(4.0, 5.92, 522.58),
            VsopTerm(2.0, 5.57, 515.46),
            VsopTerm(2.0, 4.3, 543.92),
            VsopTerm(2.0, 3.69, 7.11),
            VsopTerm(2.0, 4.13, 1059.38),
            VsopTerm(2.0, 5.49, 1066.5),
        ],
    ],
};

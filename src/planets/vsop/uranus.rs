//! Truncated VSOP87D terms for Uranus, heliocentric ecliptic of date.

use super::{VsopSeries, VsopTerm};

#[rustfmt::skip]
pub(crate) const SERIES: VsopSeries = VsopSeries {
    l: &[
        &[
            VsopTerm(548129294.0, 0.0, 0.0),
            VsopTerm(9260408.0, 0.8910642, 74.7815986),
            VsopTerm(1504248.0, 3.6271926, 1.4844727),
            VsopTerm(365982.0, 1.899622, 73.297126),
            VsopTerm(272328.0, 3.358237, 149.563197),
            VsopTerm(70328.0, 5.39254, 63.7359),
            VsopTerm(68893.0, 6.09292, 76.26607),
            VsopTerm(61999.0, 2.26952, 2.96895),
            VsopTerm(61951.0, 2.85099, 11.0457),
            VsopTerm(26469.0, 3.14152, 71.81265),
            VsopTerm(25711.0, 6.1138, 454.90937),
            VsopTerm(21079.0, 4.36059, 148.07872),
            VsopTerm(17819.0, 1.74437, 36.64856),
            VsopTerm(14613.0, 4.73732, 3.93215),
            VsopTerm(11163.0, 5.82682, 224.3448),
            VsopTerm(10998.0, 0.48865, 138.5175),
            VsopTerm(9527.0, 2.9552, 35.1641),
            VsopTerm(7546.0, 5.2363, 109.9457),
            VsopTerm(4220.0, 3.2333, 70.8494),
            VsopTerm(4052.0, 2.2775, 151.0477),
            VsopTerm(3490.0, 5.4831, 146.5943),
            VsopTerm(3355.0, 1.0655, 4.4534),
            VsopTerm(3144.0, 4.752, 77.7505),
            VsopTerm(2927.0, 4.629, 9.5612),
            VsopTerm(2922.0, 5.3524, 85.8273),
            VsopTerm(2273.0, 4.366, 70.3282),
            VsopTerm(2149.0, 0.6075, 38.133),
            VsopTerm(2051.0, 1.5177, 0.1119),
            VsopTerm(1992.0, 4.9244, 277.035),
            VsopTerm(1667.0, 3.6274, 380.1278),
            VsopTerm(1533.0, 2.5859, 52.6902),
            VsopTerm(1376.0, 2.0428, 65.2204),
            VsopTerm(1372.0, 4.1964, 111.4302),
            VsopTerm(1284.0, 3.1135, 202.2534),
            VsopTerm(1282.0, 0.5427, 222.8603),
            VsopTerm(1244.0, 0.9161, 2.4477),
            VsopTerm(1221.0, 0.199, 108.4612),
            VsopTerm(1151.0, 4.179, 33.6796),
            VsopTerm(1150.0, 0.9334, 3.1814),
            VsopTerm(1090.0, 1.775, 12.5302),
            VsopTerm(1072.0, 0.2356, 62.2514),
            VsopTerm(946.0, 1.192, 127.472),
            VsopTerm(708.0, 5.183, 213.299),
            VsopTerm(653.0, 0.966, 78.714),
            VsopTerm(628.0, 0.182, 984.6),
            VsopTerm(607.0, 5.432, 529.691),
            VsopTerm(559.0, 3.358, 0.521),
            VsopTerm(524.0, 2.013, 299.126),
            VsopTerm(483.0, 2.106, 0.963),
            VsopTerm(471.0, 1.407, 184.727),
            VsopTerm(467.0, 0.415, 145.11),
            VsopTerm(434.0, 5.521, 183.243),
            VsopTerm(405.0, 5.987, 8.077),
            VsopTerm(399.0, 0.338, 415.552),
            VsopTerm(396.0, 5.87, 351.817),
            VsopTerm(379.0, 2.35, 56.622),
            VsopTerm(310.0, 5.833, 145.631),
            VsopTerm(300.0, 5.644, 22.091),
            VsopTerm(294.0, 5.839, 39.618),
            VsopTerm(252.0, 1.637, 221.376),
            VsopTerm(249.0, 4.746, 225.829),
            VsopTerm(239.0, 2.35, 137.033),
            VsopTerm(224.0, 0.516, 84.343),
            VsopTerm(223.0, 2.843, 0.261),
            VsopTerm(220.0, 1.922, 67.668),
            VsopTerm(217.0, 6.142, 5.938),
            VsopTerm(216.0, 4.778, 340.771),
            VsopTerm(208.0, 5.58, 68.844),
            VsopTerm(202.0, 1.297, 0.048),
            VsopTerm(199.0, 0.956, 152.532),
            VsopTerm(194.0, 1.888, 456.394),
            VsopTerm(193.0, 0.916, 453.425),
            VsopTerm(187.0, 1.319, 0.16),
            VsopTerm(182.0, 3.536, 79.235),
            VsopTerm(173.0, 1.539, 160.609),
            VsopTerm(172.0, 5.68, 219.891),
            VsopTerm(170.0, 3.677, 5.417),
            VsopTerm(169.0, 5.879, 18.159),
            VsopTerm(165.0, 1.424, 106.977),
            VsopTerm(163.0, 3.05, 112.915),
            VsopTerm(158.0, 0.738, 54.175),
            VsopTerm(147.0, 1.263, 59.804),
            VsopTerm(143.0, 1.3, 35.425),
            VsopTerm(139.0, 5.386, 32.195),
            VsopTerm(139.0, 4.26, 909.819),
            VsopTerm(124.0, 1.374, 7.114),
            VsopTerm(110.0, 2.027, 554.07),
            VsopTerm(109.0, 5.706, 77.963),
            VsopTerm(104.0, 5.028, 0.751),
            VsopTerm(104.0, 1.458, 24.379),
            VsopTerm(103.0, 0.681, 14.978),
        ],
        &[
            VsopTerm(7502543122.0, 0.0, 0.0),
            VsopTerm(154458.0, 5.242017, 74.781599),
            VsopTerm(24456.0, 1.71256, 1.48447),
            VsopTerm(9258.0, 0.4284, 11.0457),
            VsopTerm(8266.0, 1.5022, 63.7359),
            VsopTerm(7842.0, 1.3198, 149.5632),
            VsopTerm(3899.0, 0.4648, 3.9322),
            VsopTerm(2284.0, 4.1737, 76.2661),
            VsopTerm(1927.0, 0.5301, 2.9689),
            VsopTerm(1233.0, 1.5863, 70.8494),
            VsopTerm(791.0, 5.436, 3.181),
            VsopTerm(767.0, 1.996, 73.297),
            VsopTerm(482.0, 2.984, 85.827),
            VsopTerm(450.0, 4.138, 138.517),
            VsopTerm(446.0, 3.723, 224.345),
            VsopTerm(427.0, 4.731, 71.813),
            VsopTerm(354.0, 2.583, 148.079),
            VsopTerm(348.0, 2.454, 9.561),
            VsopTerm(317.0, 5.579, 52.69),
            VsopTerm(206.0, 2.363, 2.448),
            VsopTerm(189.0, 4.202, 56.622),
            VsopTerm(184.0, 0.284, 151.048),
            VsopTerm(180.0, 5.684, 12.53),
            VsopTerm(171.0, 3.001, 78.714),
            VsopTerm(158.0, 2.909, 0.963),
            VsopTerm(155.0, 5.591, 4.453),
            VsopTerm(154.0, 4.652, 35.164),
            VsopTerm(152.0, 2.942, 77.751),
            VsopTerm(143.0, 2.59, 62.251),
            VsopTerm(121.0, 4.148, 127.472),
            VsopTerm(116.0, 3.732, 65.22),
            VsopTerm(102.0, 4.188, 145.631),
            VsopTerm(102.0, 6.034, 0.112),
            VsopTerm(88.0, 3.99, 18.16),
            VsopTerm(88.0, 6.16, 202.25),
            VsopTerm(81.0, 2.64, 22.09),
            VsopTerm(72.0, 6.05, 70.33),
            VsopTerm(69.0, 4.05, 77.96),
            VsopTerm(59.0, 3.7, 67.67),
            VsopTerm(47.0, 3.54, 351.82),
            VsopTerm(44.0, 5.91, 7.11),
            VsopTerm(43.0, 5.72, 5.42),
            VsopTerm(39.0, 4.92, 222.86),
            VsopTerm(36.0, 5.9, 33.68),
            VsopTerm(36.0, 3.29, 8.08),
            VsopTerm(36.0, 3.33, 71.6),
            VsopTerm(35.0, 5.08, 38.13),
            VsopTerm(31.0, 5.62, 984.6),
            VsopTerm(31.0, 5.5, 59.8),
            VsopTerm(31.0, 5.46, 160.61),
            VsopTerm(30.0, 1.66, 447.8),
            VsopTerm(29.0, 1.15, 462.02),
            VsopTerm(29.0, 4.52, 84.34),
            VsopTerm(27.0, 5.54, 131.4),
            VsopTerm(27.0, 6.15, 299.13),
            VsopTerm(26.0, 4.99, 137.03),
            VsopTerm(25.0, 5.74, 380.13),
        ],
        &[
            VsopTerm(53033.0, 0.0, 0.0),
            VsopTerm(2358.0, 2.2601, 74.7816),
            VsopTerm(769.0, 4.526, 11.046),
            VsopTerm(552.0, 3.258, 63.736),
            VsopTerm(542.0, 2.276, 3.932),
            VsopTerm(529.0, 4.923, 1.484),
            VsopTerm(258.0, 3.691, 3.181),
            VsopTerm(239.0, 5.858, 149.563),
            VsopTerm(182.0, 6.218, 70.849),
            VsopTerm(54.0, 1.44, 76.27),
            VsopTerm(49.0, 6.03, 56.62),
            VsopTerm(45.0, 3.91, 2.45),
            VsopTerm(45.0, 0.81, 85.83),
            VsopTerm(38.0, 1.78, 52.69),
            VsopTerm(37.0, 4.46, 2.97),
            VsopTerm(33.0, 0.86, 9.56),
            VsopTerm(29.0, 5.1, 73.3),
            VsopTerm(24.0, 2.11, 18.16),
            VsopTerm(22.0, 5.99, 138.52),
            VsopTerm(22.0, 4.82, 78.71),
            VsopTerm(21.0, 2.4, 77.96),
            VsopTerm(21.0, 2.17, 224.34),
            VsopTerm(17.0, 2.54, 145.63),
            VsopTerm(17.0, 3.47, 12.53),
            VsopTerm(12.0, 0.02, 22.09),
            VsopTerm(11.0, 0.08, 127.47),
            VsopTerm(10.0, 5.16, 71.6),
            VsopTerm(10.0, 4.46, 62.25),
            VsopTerm(9.0, 4.26, 7.11),
            VsopTerm(8.0, 5.5, 67.67),
            VsopTerm(7.0, 1.25, 5.42),
            VsopTerm(6.0, 3.36, 447.8),
            VsopTerm(6.0, 5.45, 65.22),
            VsopTerm(6.0, 4.52, 151.05),
            VsopTerm(6.0, 5.73, 462.02),
        ],
        &[
            VsopTerm(121.0, 0.024, 74.782),
            VsopTerm(68.0, 4.12, 3.93),
            VsopTerm(53.0, 2.39, 11.05),
            VsopTerm(46.0, 0.0, 0.0),
            VsopTerm(45.0, 2.04, 3.18),
            VsopTerm(44.0, 2.96, 1.48),
            VsopTerm(25.0, 4.89, 63.74),
            VsopTerm(21.0, 4.55, 70.85),
            VsopTerm(20.0, 2.31, 149.56),
            VsopTerm(9.0, 1.58, 56.62),
            VsopTerm(4.0, 0.23, 18.16),
            VsopTerm(4.0, 5.39, 76.27),
            VsopTerm(4.0, 0.95, 77.96),
            VsopTerm(3.0, 4.98, 85.83),
            VsopTerm(3.0, 4.13, 52.69),
            VsopTerm(3.0, 0.37, 78.71),
            VsopTerm(2.0, 0.86, 145.63),
            VsopTerm(2.0, 5.66, 9.56),
        ],
        &[
            VsopTerm(114.0, 3.142, 0.0),
            VsopTerm(6.0, 4.58, 74.78),
            VsopTerm(3.0, 0.35, 11.05),
            VsopTerm(1.0, 3.42, 56.62),
        ],
    ],
    b: &[
        &[
            VsopTerm(1346278.0, 2.6187781, 74.7815986),
            VsopTerm(62341.0, 5.08111, 149.5632),
            VsopTerm(61601.0, 3.14159, 0.0),
            VsopTerm(9964.0, 1.616, 76.2661),
            VsopTerm(9926.0, 0.5763, 73.2971),
            VsopTerm(3259.0, 1.2612, 224.3448),
            VsopTerm(2972.0, 2.2437, 1.4845),
            VsopTerm(2010.0, 6.0555, 148.0787),
            VsopTerm(1522.0, 0.2796, 63.7359),
            VsopTerm(924.0, 4.038, 151.048),
            VsopTerm(761.0, 6.14, 71.813),
            VsopTerm(522.0, 3.321, 138.517),
            VsopTerm(463.0, 0.743, 85.827),
            VsopTerm(437.0, 3.381, 529.691),
            VsopTerm(435.0, 0.341, 77.751),
            VsopTerm(431.0, 3.554, 213.299),
            VsopTerm(420.0, 5.213, 11.046),
            VsopTerm(245.0, 0.788, 2.969),
            VsopTerm(233.0, 2.257, 222.86),
            VsopTerm(216.0, 1.591, 38.133),
            VsopTerm(180.0, 3.725, 299.126),
            VsopTerm(175.0, 1.236, 146.594),
            VsopTerm(174.0, 1.937, 380.128),
            VsopTerm(160.0, 5.336, 111.43),
            VsopTerm(144.0, 5.962, 35.164),
            VsopTerm(116.0, 5.739, 70.849),
            VsopTerm(106.0, 0.941, 70.328),
            VsopTerm(102.0, 2.619, 78.714),
        ],
        &[
            VsopTerm(206366.0, 4.123943, 74.781599),
            VsopTerm(8563.0, 0.3382, 149.5632),
            VsopTerm(1726.0, 2.1219, 73.2971),
            VsopTerm(1374.0, 0.0, 0.0),
            VsopTerm(1369.0, 3.0686, 76.2661),
            VsopTerm(451.0, 3.777, 1.484),
            VsopTerm(400.0, 2.848, 224.345),
            VsopTerm(307.0, 1.255, 148.079),
            VsopTerm(154.0, 3.786, 63.736),
            VsopTerm(112.0, 5.573, 151.048),
            VsopTerm(111.0, 5.329, 138.517),
            VsopTerm(83.0, 3.59, 71.81),
            VsopTerm(56.0, 3.4, 85.83),
            VsopTerm(54.0, 1.7, 77.75),
            VsopTerm(42.0, 1.21, 11.05),
            VsopTerm(41.0, 4.45, 78.71),
            VsopTerm(32.0, 3.77, 222.86),
            VsopTerm(30.0, 2.56, 2.97),
            VsopTerm(27.0, 5.34, 213.3),
            VsopTerm(26.0, 0.42, 380.13),
        ],
        &[
            VsopTerm(9212.0, 5.8004, 74.7816),
            VsopTerm(557.0, 0.0, 0.0),
            VsopTerm(286.0, 2.177, 149.563),
            VsopTerm(95.0, 3.84, 73.3),
            VsopTerm(45.0, 4.88, 76.27),
            VsopTerm(20.0, 5.46, 1.48),
            VsopTerm(15.0, 0.88, 138.52),
            VsopTerm(14.0, 2.85, 148.08),
            VsopTerm(14.0, 5.07, 63.74),
            VsopTerm(10.0, 5.0, 224.34),
            VsopTerm(8.0, 6.27, 78.71),
        ],
        &[
            VsopTerm(268.0, 1.251, 74.782),
            VsopTerm(11.0, 3.14, 0.0),
            VsopTerm(6.0, 4.01, 149.56),
            VsopTerm(3.0, 5.78, 73.3),
        ],
        &[
            VsopTerm(6.0, 2.85, 74.78),
        ],
    ],
    r: &[
        &[
            VsopTerm(1921264848.0, 0.0, 0.0),
            VsopTerm(88784984.0, 5.60377527, 74.78159857),
            VsopTerm(3440836.0, 0.328361, 73.2971259),
            VsopTerm(2055653.0, 1.7829517, 149.5631971),
            VsopTerm(649322.0, 4.522473, 76.266071),
            VsopTerm(602248.0, 3.860038, 63.735898),
            VsopTerm(496404.0, 1.401399, 454.909367),
            VsopTerm(338526.0, 1.580027, 138.517497),
            VsopTerm(243508.0, 1.570866, 71.812653),
            VsopTerm(190522.0, 1.998094, 1.484473),
            VsopTerm(161858.0, 2.791379, 148.078724),
            VsopTerm(143706.0, 1.383686, 11.0457),
            VsopTerm(93192.0, 0.17437, 36.64856),
            VsopTerm(89806.0, 3.66105, 109.94569),
            VsopTerm(71424.0, 4.24509, 224.3448),
            VsopTerm(46677.0, 1.39977, 35.16409),
            VsopTerm(39026.0, 3.36235, 277.03499),
            VsopTerm(39010.0, 1.66971, 70.84945),
            VsopTerm(36755.0, 3.88649, 146.59425),
            VsopTerm(30349.0, 0.701, 151.04767),
            VsopTerm(29156.0, 3.18056, 77.75054),
            VsopTerm(25786.0, 3.78538, 85.8273),
            VsopTerm(25620.0, 5.25656, 380.12777),
            VsopTerm(22637.0, 0.72519, 529.69097),
            VsopTerm(20473.0, 2.7964, 70.32818),
            VsopTerm(20472.0, 1.55589, 202.2534),
            VsopTerm(17901.0, 0.55455, 2.96895),
            VsopTerm(15503.0, 5.35405, 38.13304),
            VsopTerm(14702.0, 4.90434, 108.46122),
            VsopTerm(12897.0, 2.62154, 111.43016),
            VsopTerm(12328.0, 5.96039, 127.4718),
            VsopTerm(11959.0, 1.75044, 984.60033),
            VsopTerm(11853.0, 0.99343, 52.6902),
            VsopTerm(11696.0, 3.29826, 3.93215),
            VsopTerm(11495.0, 0.43774, 65.22037),
            VsopTerm(10793.0, 1.42105, 213.2991),
            VsopTerm(9111.0, 4.9964, 62.2514),
            VsopTerm(8421.0, 5.2535, 222.8603),
            VsopTerm(8402.0, 5.0388, 415.5525),
            VsopTerm(7449.0, 0.7949, 351.8166),
            VsopTerm(7329.0, 3.9728, 183.2428),
            VsopTerm(6046.0, 5.6796, 78.7138),
            VsopTerm(5524.0, 3.115, 9.5612),
            VsopTerm(5445.0, 5.1058, 145.1098),
            VsopTerm(5238.0, 2.6296, 33.6796),
            VsopTerm(4079.0, 3.2206, 340.7709),
            VsopTerm(3919.0, 4.2502, 39.6175),
            VsopTerm(3802.0, 6.1099, 184.7273),
            VsopTerm(3781.0, 3.4584, 456.3938),
            VsopTerm(3687.0, 2.4872, 453.4249),
            VsopTerm(3102.0, 4.1403, 219.8914),
            VsopTerm(2963.0, 0.8298, 56.6224),
            VsopTerm(2942.0, 0.4239, 299.1264),
            VsopTerm(2940.0, 2.1464, 137.033),
            VsopTerm(2938.0, 3.6766, 140.002),
            VsopTerm(2865.0, 0.31, 12.5302),
            VsopTerm(2538.0, 4.8546, 131.4039),
            VsopTerm(2364.0, 0.4425, 554.07),
            VsopTerm(2183.0, 2.9404, 305.3462),
        ],
        &[
            VsopTerm(1479896.0, 3.6720571, 74.7815986),
            VsopTerm(71212.0, 6.22601, 63.7359),
            VsopTerm(68627.0, 6.13411, 149.5632),
            VsopTerm(24060.0, 3.14159, 0.0),
            VsopTerm(21468.0, 2.60177, 76.26607),
            VsopTerm(20857.0, 5.24625, 11.0457),
            VsopTerm(11405.0, 0.01848, 70.84945),
            VsopTerm(7497.0, 0.4236, 73.2971),
            VsopTerm(4244.0, 1.4169, 85.8273),
            VsopTerm(3927.0, 3.1551, 71.8127),
            VsopTerm(3578.0, 2.3116, 224.3448),
            VsopTerm(3506.0, 2.5835, 138.5175),
            VsopTerm(3229.0, 5.255, 3.9322),
            VsopTerm(3060.0, 0.1532, 1.4845),
            VsopTerm(2564.0, 0.9808, 148.0787),
            VsopTerm(2429.0, 3.9944, 52.6902),
            VsopTerm(1645.0, 2.6535, 127.4718),
            VsopTerm(1584.0, 1.4305, 78.7138),
            VsopTerm(1508.0, 5.06, 151.0477),
            VsopTerm(1490.0, 2.6756, 56.6224),
            VsopTerm(1413.0, 4.5746, 202.2534),
            VsopTerm(1403.0, 1.3699, 77.7505),
            VsopTerm(1228.0, 1.047, 62.2514),
            VsopTerm(1033.0, 0.2646, 131.4039),
            VsopTerm(992.0, 2.172, 65.22),
            VsopTerm(862.0, 5.055, 351.817),
            VsopTerm(744.0, 3.076, 35.164),
            VsopTerm(687.0, 2.499, 77.963),
            VsopTerm(647.0, 4.473, 70.328),
            VsopTerm(624.0, 0.863, 9.561),
            VsopTerm(604.0, 0.907, 984.6),
            VsopTerm(575.0, 3.231, 447.796),
            VsopTerm(562.0, 2.718, 462.023),
            VsopTerm(530.0, 5.917, 213.299),
            VsopTerm(528.0, 5.151, 2.969),
        ],
        &[
            VsopTerm(22440.0, 0.69953, 74.7816),
            VsopTerm(4727.0, 1.699, 63.7359),
            VsopTerm(1682.0, 4.6483, 70.8494),
            VsopTerm(1650.0, 3.0966, 11.0457),
            VsopTerm(1434.0, 3.5212, 149.5632),
            VsopTerm(770.0, 0.0, 0.0),
            VsopTerm(500.0, 6.172, 76.266),
            VsopTerm(461.0, 0.767, 3.932),
            VsopTerm(390.0, 4.496, 56.622),
            VsopTerm(390.0, 5.527, 85.827),
            VsopTerm(292.0, 0.204, 52.69),
            VsopTerm(287.0, 3.534, 73.297),
            VsopTerm(273.0, 3.847, 138.517),
            VsopTerm(220.0, 1.964, 131.404),
            VsopTerm(216.0, 0.848, 77.963),
            VsopTerm(205.0, 3.248, 78.714),
            VsopTerm(149.0, 4.898, 127.472),
            VsopTerm(129.0, 2.081, 3.181),
        ],
        &[
            VsopTerm(1164.0, 4.7345, 74.7816),
            VsopTerm(212.0, 3.343, 63.736),
            VsopTerm(196.0, 2.98, 70.849),
            VsopTerm(105.0, 0.958, 11.046),
            VsopTerm(73.0, 1.0, 149.56),
            VsopTerm(72.0, 0.03, 56.62),
            VsopTerm(55.0, 2.59, 3.93),
            VsopTerm(36.0, 5.65, 77.96),
            VsopTerm(34.0, 3.82, 76.27),
            VsopTerm(32.0, 3.6, 131.4),
        ],
        &[
            VsopTerm(53.0, 3.01, 74.78),
            VsopTerm(10.0, 1.91, 56.62),
        ],
    ],
};

//! Truncated VSOP87D terms for Mercury, heliocentric ecliptic of date.

use super::{VsopSeries, VsopTerm};

#[rustfmt::skip]
pub(crate) const SERIES: VsopSeries = VsopSeries {
    l: &[
        &[
            VsopTerm(440250710.0, 0.0, 0.0),
            VsopTerm(40989415.0, 1.48302034, 26087.90314157),
            VsopTerm(5046294.0, 4.4778549, 52175.8062831),
            VsopTerm(855347.0, 1.165203, 78263.709425),
            VsopTerm(165590.0, 4.119692, 104351.612566),
            VsopTerm(34562.0, 0.77931, 130439.51571),
            VsopTerm(7583.0, 3.7135, 156527.4188),
            VsopTerm(3560.0, 1.512, 1109.3786),
            VsopTerm(1803.0, 4.1033, 5661.332),
            VsopTerm(1726.0, 0.3583, 182615.322),
            VsopTerm(1590.0, 2.9951, 25028.5212),
            VsopTerm(1365.0, 4.5992, 27197.2817),
            VsopTerm(1017.0, 0.8803, 31749.2352),
            VsopTerm(714.0, 1.541, 24978.525),
            VsopTerm(644.0, 5.303, 21535.95),
            VsopTerm(451.0, 6.05, 51116.424),
            VsopTerm(404.0, 3.282, 208703.225),
            VsopTerm(352.0, 5.242, 20426.571),
            VsopTerm(345.0, 2.792, 15874.618),
            VsopTerm(343.0, 5.765, 955.6),
            VsopTerm(339.0, 5.863, 25558.212),
            VsopTerm(325.0, 1.337, 53285.185),
            VsopTerm(273.0, 2.495, 529.691),
            VsopTerm(264.0, 3.917, 57837.138),
            VsopTerm(260.0, 0.987, 4551.953),
            VsopTerm(239.0, 0.113, 1059.382),
            VsopTerm(235.0, 0.267, 11322.664),
            VsopTerm(217.0, 0.66, 13521.751),
            VsopTerm(209.0, 2.092, 47623.853),
            VsopTerm(183.0, 2.629, 27043.503),
            VsopTerm(182.0, 2.434, 25661.305),
            VsopTerm(176.0, 4.536, 51066.428),
            VsopTerm(173.0, 2.452, 24498.83),
            VsopTerm(142.0, 3.36, 37410.567),
            VsopTerm(138.0, 0.291, 10213.286),
            VsopTerm(125.0, 3.721, 39609.655),
            VsopTerm(118.0, 2.781, 77204.327),
            VsopTerm(106.0, 4.206, 19804.827),
        ],
        &[
            VsopTerm(2608814706223.0, 0.0, 0.0),
            VsopTerm(1126008.0, 6.2170397, 26087.9031416),
            VsopTerm(303471.0, 3.055655, 52175.806283),
            VsopTerm(80538.0, 6.10455, 78263.70942),
            VsopTerm(21245.0, 2.83532, 104351.61257),
            VsopTerm(5592.0, 5.8268, 130439.5157),
            VsopTerm(1472.0, 2.5185, 156527.4188),
            VsopTerm(388.0, 5.48, 182615.322),
            VsopTerm(352.0, 3.052, 1109.379),
            VsopTerm(103.0, 2.149, 24978.525),
            VsopTerm(94.0, 6.12, 27197.28),
            VsopTerm(91.0, 0.0, 208703.23),
            VsopTerm(52.0, 5.62, 5661.33),
            VsopTerm(44.0, 4.57, 25028.52),
            VsopTerm(28.0, 3.04, 51066.43),
            VsopTerm(27.0, 5.09, 234791.13),
        ],
        &[
            VsopTerm(53050.0, 0.0, 0.0),
            VsopTerm(16904.0, 4.69072, 26087.90314),
            VsopTerm(7397.0, 1.3474, 52175.8063),
            VsopTerm(3018.0, 4.4564, 78263.7094),
            VsopTerm(1107.0, 1.2623, 104351.6126),
            VsopTerm(378.0, 4.32, 130439.516),
            VsopTerm(123.0, 1.069, 156527.419),
            VsopTerm(39.0, 4.08, 182615.32),
            VsopTerm(15.0, 4.63, 1109.38),
            VsopTerm(12.0, 0.79, 208703.23),
        ],
        &[
            VsopTerm(188.0, 0.035, 52175.806),
            VsopTerm(142.0, 3.125, 26087.903),
            VsopTerm(97.0, 3.0, 78263.71),
            VsopTerm(44.0, 6.02, 104351.61),
            VsopTerm(35.0, 0.0, 0.0),
            VsopTerm(18.0, 2.78, 130439.52),
            VsopTerm(7.0, 5.82, 156527.42),
            VsopTerm(3.0, 2.57, 182615.32),
        ],
        &[
            VsopTerm(114.0, 3.1416, 0.0),
            VsopTerm(2.0, 2.03, 26087.9),
            VsopTerm(2.0, 1.42, 78263.71),
            VsopTerm(2.0, 4.5, 52175.81),
            VsopTerm(1.0, 4.5, 104351.61),
            VsopTerm(1.0, 1.27, 130439.52),
        ],
        &[
            VsopTerm(1.0, 3.14, 0.0),
        ],
    ],
    b: &[
        &[
            VsopTerm(11737529.0, 1.98357499, 26087.90314157),
            VsopTerm(2388077.0, 5.0373896, 52175.8062831),
            VsopTerm(1222840.0, 3.1415927, 0.0),
            VsopTerm(543252.0, 1.796444, 78263.709425),
            VsopTerm(129779.0, 4.832325, 104351.612566),
            VsopTerm(31867.0, 1.58088, 130439.51571),
            VsopTerm(7963.0, 4.6097, 156527.4188),
            VsopTerm(2014.0, 1.3532, 182615.322),
            VsopTerm(514.0, 4.378, 208703.225),
            VsopTerm(209.0, 2.02, 24978.525),
            VsopTerm(208.0, 4.918, 27197.282),
            VsopTerm(132.0, 1.119, 234791.128),
            VsopTerm(121.0, 1.813, 53285.185),
            VsopTerm(100.0, 5.657, 20426.571),
        ],
        &[
            VsopTerm(429151.0, 3.501698, 26087.903142),
            VsopTerm(146234.0, 3.141593, 0.0),
            VsopTerm(22675.0, 0.01515, 52175.80628),
            VsopTerm(10895.0, 0.4854, 78263.70942),
            VsopTerm(6353.0, 3.4294, 104351.6126),
            VsopTerm(2496.0, 0.1605, 130439.5157),
            VsopTerm(860.0, 3.185, 156527.419),
            VsopTerm(278.0, 6.21, 182615.322),
            VsopTerm(86.0, 2.95, 208703.23),
            VsopTerm(28.0, 0.29, 27197.28),
            VsopTerm(26.0, 5.98, 234791.13),
        ],
        &[
            VsopTerm(11831.0, 4.79066, 26087.90314),
            VsopTerm(1914.0, 0.0, 0.0),
            VsopTerm(1045.0, 1.2122, 52175.8063),
            VsopTerm(266.0, 4.434, 78263.709),
            VsopTerm(170.0, 1.623, 104351.613),
            VsopTerm(96.0, 4.8, 130439.52),
            VsopTerm(45.0, 1.61, 156527.42),
            VsopTerm(18.0, 4.67, 182615.32),
            VsopTerm(7.0, 1.43, 208703.23),
        ],
        &[
            VsopTerm(235.0, 0.354, 26087.903),
            VsopTerm(161.0, 0.0, 0.0),
            VsopTerm(19.0, 4.36, 52175.81),
            VsopTerm(6.0, 2.51, 78263.71),
            VsopTerm(5.0, 6.14, 104351.61),
            VsopTerm(3.0, 3.12, 130439.52),
            VsopTerm(2.0, 6.27, 156527.42),
        ],
        &[
            VsopTerm(4.0, 1.75, 26087.9),
            VsopTerm(1.0, 3.14, 0.0),
        ],
    ],
    r: &[
        &[
            VsopTerm(39528272.0, 0.0, 0.0),
            VsopTerm(7834132.0, 6.1923372, 26087.9031416),
            VsopTerm(795526.0, 2.959897, 52175.806283),
            VsopTerm(121282.0, 6.010642, 78263.709425),
            VsopTerm(21922.0, 2.7782, 104351.61257),
            VsopTerm(4354.0, 5.8289, 130439.5157),
            VsopTerm(918.0, 2.597, 156527.419),
            VsopTerm(290.0, 1.424, 25028.521),
            VsopTerm(260.0, 3.028, 27197.282),
            VsopTerm(202.0, 5.647, 182615.322),
            VsopTerm(201.0, 5.592, 31749.235),
            VsopTerm(142.0, 6.253, 24978.525),
            VsopTerm(100.0, 3.734, 21535.95),
        ],
        &[
            VsopTerm(217348.0, 4.656172, 26087.903142),
            VsopTerm(44142.0, 1.42386, 52175.80628),
            VsopTerm(10094.0, 4.47466, 78263.70942),
            VsopTerm(2433.0, 1.2423, 104351.6126),
            VsopTerm(1624.0, 0.0, 0.0),
            VsopTerm(604.0, 4.293, 130439.516),
            VsopTerm(153.0, 1.061, 156527.419),
            VsopTerm(39.0, 4.11, 182615.32),
        ],
        &[
            VsopTerm(3118.0, 3.0823, 26087.9031),
            VsopTerm(1245.0, 6.1518, 52175.8063),
            VsopTerm(425.0, 2.926, 78263.709),
            VsopTerm(136.0, 5.98, 104351.613),
            VsopTerm(42.0, 2.75, 130439.52),
            VsopTerm(22.0, 3.14, 0.0),
            VsopTerm(13.0, 5.8, 156527.42),
        ],
        &[
            VsopTerm(33.0, 1.68, 26087.9),
            VsopTerm(24.0, 4.63, 52175.81),
            VsopTerm(12.0, 1.39, 78263.71),
            VsopTerm(5.0, 4.44, 104351.61),
            VsopTerm(2.0, 1.21, 130439.52),
        ],
    ],
};

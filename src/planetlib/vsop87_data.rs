//! Embedded heliocentric series
//!
//! Earth and Venus carry the abridged VSOP87D tables of Meeus, Appendix III,
//! referred to the ecliptic and equinox of date, with amplitudes in units of
//! 1e-8. Mars, Jupiter and Saturn carry short VSOP87B tables (J2000 frame)
//! good to about an arcminute in longitude over the present century. Their
//! latitude keeps the B0 terms above 3e-6 rad and the leading B1 term,
//! which holds β to a few arcseconds near J2000.

use super::series::{SeriesFrame, SeriesTable, Term};

pub(super) struct StaticTable {
    pub frame: SeriesFrame,
    pub amplitude_scale: f64,
    pub longitude: &'static [&'static [[f64; 3]]],
    pub latitude: &'static [&'static [[f64; 3]]],
    pub radius: &'static [&'static [[f64; 3]]],
}

impl StaticTable {
    pub fn to_table(&self) -> SeriesTable {
        let blocks = |raw: &[&[[f64; 3]]]| -> Vec<Vec<Term>> {
            raw.iter()
                .map(|terms| {
                    terms
                        .iter()
                        .map(|&[a, b, c]| Term::new(a * self.amplitude_scale, b, c))
                        .collect()
                })
                .collect()
        };
        SeriesTable::new(
            self.frame,
            blocks(self.longitude),
            blocks(self.latitude),
            blocks(self.radius),
        )
    }
}

#[rustfmt::skip]
mod tables {
use super::*;

// Earth
pub(in crate::planetlib) const EARTH: StaticTable = StaticTable {
    frame: SeriesFrame::OfDate,
    amplitude_scale: 1e-8,
    longitude: &[EARTH_L0, EARTH_L1, EARTH_L2, EARTH_L3, EARTH_L4, EARTH_L5],
    latitude: &[EARTH_B0, EARTH_B1],
    radius: &[EARTH_R0, EARTH_R1, EARTH_R2, EARTH_R3, EARTH_R4],
};

const EARTH_L0: &[[f64; 3]] = &[
    [175347046.0, 0.0, 0.0],
    [3341656.0, 4.6692568, 6283.07585],
    [34894.0, 4.6261, 12566.1517],
    [3497.0, 2.7441, 5753.3849],
    [3418.0, 2.8289, 3.5231],
    [3136.0, 3.6277, 77713.7715],
    [2676.0, 4.4181, 7860.4194],
    [2343.0, 6.1352, 3930.2097],
    [1324.0, 0.7425, 11506.7698],
    [1273.0, 2.0371, 529.691],
    [1199.0, 1.1096, 1577.3435],
    [990.0, 5.233, 5884.927],
    [902.0, 2.045, 26.298],
    [857.0, 3.508, 398.149],
    [780.0, 1.179, 5223.694],
    [753.0, 2.533, 5507.553],
    [505.0, 4.583, 18849.228],
    [492.0, 4.205, 775.523],
    [357.0, 2.92, 0.067],
    [317.0, 5.849, 11790.629],
    [284.0, 1.899, 796.298],
    [271.0, 0.315, 10977.079],
    [243.0, 0.345, 5486.778],
    [206.0, 4.806, 2544.314],
    [205.0, 1.869, 5573.143],
    [202.0, 2.458, 6069.777],
    [156.0, 0.833, 213.299],
    [132.0, 3.411, 2942.463],
    [126.0, 1.083, 20.775],
    [115.0, 0.645, 0.98],
    [103.0, 0.636, 4694.003],
    [102.0, 0.976, 15720.839],
    [102.0, 4.267, 7.114],
    [99.0, 6.21, 2146.17],
    [98.0, 0.68, 155.42],
    [86.0, 5.98, 161000.69],
    [85.0, 1.3, 6275.96],
    [85.0, 3.67, 71430.7],
    [80.0, 1.81, 17260.15],
    [79.0, 3.04, 12036.46],
    [75.0, 1.76, 5088.63],
    [74.0, 3.5, 3154.69],
    [74.0, 4.68, 801.82],
    [70.0, 0.83, 9437.76],
    [62.0, 3.98, 8827.39],
    [61.0, 1.82, 7084.9],
    [57.0, 2.78, 6286.6],
    [56.0, 4.39, 14143.5],
    [56.0, 3.47, 6279.55],
    [52.0, 0.19, 12139.55],
    [52.0, 1.33, 1748.02],
    [51.0, 0.28, 5856.48],
    [49.0, 0.49, 1194.45],
    [41.0, 5.37, 8429.24],
    [41.0, 2.4, 19651.05],
    [39.0, 6.17, 10447.39],
    [37.0, 6.04, 10213.29],
    [37.0, 2.57, 1059.38],
    [36.0, 1.71, 2352.87],
    [36.0, 1.78, 6812.77],
    [33.0, 0.59, 17789.85],
    [30.0, 0.44, 83996.85],
    [30.0, 2.74, 1349.87],
    [25.0, 3.16, 4690.48],
];
const EARTH_L1: &[[f64; 3]] = &[
    [628331966747.0, 0.0, 0.0],
    [206059.0, 2.678235, 6283.07585],
    [4303.0, 2.6351, 12566.1517],
    [425.0, 1.59, 3.523],
    [119.0, 5.796, 26.298],
    [109.0, 2.966, 1577.344],
    [93.0, 2.59, 18849.23],
    [72.0, 1.14, 529.69],
    [68.0, 1.87, 398.15],
    [67.0, 4.41, 5507.55],
    [59.0, 2.89, 5223.69],
    [56.0, 2.17, 155.42],
    [45.0, 0.4, 796.3],
    [36.0, 0.47, 775.52],
    [29.0, 2.65, 7.11],
    [21.0, 5.34, 0.98],
    [19.0, 1.85, 5486.78],
    [19.0, 4.97, 213.3],
    [17.0, 2.99, 6275.96],
    [16.0, 0.03, 2544.31],
    [16.0, 1.43, 2146.17],
    [15.0, 1.21, 10977.08],
    [12.0, 2.83, 1748.02],
    [12.0, 3.26, 5088.63],
    [12.0, 5.27, 1194.45],
    [12.0, 2.08, 4694.0],
    [11.0, 0.77, 553.57],
    [10.0, 1.3, 6286.6],
    [10.0, 4.24, 1349.87],
    [9.0, 2.7, 242.73],
    [9.0, 5.64, 951.72],
    [8.0, 5.3, 2352.87],
    [6.0, 2.65, 9437.76],
    [6.0, 4.67, 4690.48],
];
const EARTH_L2: &[[f64; 3]] = &[
    [52919.0, 0.0, 0.0],
    [8720.0, 1.0721, 6283.0758],
    [309.0, 0.867, 12566.152],
    [27.0, 0.05, 3.52],
    [16.0, 5.19, 26.3],
    [16.0, 3.68, 155.42],
    [10.0, 0.76, 18849.23],
    [9.0, 2.06, 77713.77],
    [7.0, 0.83, 775.52],
    [5.0, 4.66, 1577.34],
    [4.0, 1.03, 7.11],
    [4.0, 3.44, 5573.14],
    [3.0, 5.14, 796.3],
    [3.0, 6.05, 5507.55],
    [3.0, 1.19, 242.73],
    [3.0, 6.12, 529.69],
    [3.0, 0.31, 398.15],
    [3.0, 2.28, 553.57],
    [2.0, 4.38, 5223.69],
    [2.0, 3.75, 0.98],
];
const EARTH_L3: &[[f64; 3]] = &[
    [289.0, 5.844, 6283.076],
    [35.0, 0.0, 0.0],
    [17.0, 5.49, 12566.15],
    [3.0, 5.2, 155.42],
    [1.0, 4.72, 3.52],
    [1.0, 5.3, 18849.23],
    [1.0, 5.97, 242.73],
];
const EARTH_L4: &[[f64; 3]] = &[
    [114.0, 3.142, 0.0],
    [8.0, 4.13, 6283.08],
    [1.0, 3.84, 12566.15],
];
const EARTH_L5: &[[f64; 3]] = &[
    [1.0, 3.14, 0.0],
];
const EARTH_B0: &[[f64; 3]] = &[
    [280.0, 3.199, 84334.662],
    [102.0, 5.422, 5507.553],
    [80.0, 3.88, 5223.69],
    [44.0, 3.7, 2352.87],
    [32.0, 4.0, 1577.34],
];
const EARTH_B1: &[[f64; 3]] = &[
    [9.0, 3.9, 5507.55],
    [6.0, 1.73, 5223.69],
];
const EARTH_R0: &[[f64; 3]] = &[
    [100013989.0, 0.0, 0.0],
    [1670700.0, 3.0984635, 6283.07585],
    [13956.0, 3.05525, 12566.1517],
    [3084.0, 5.1985, 77713.7715],
    [1628.0, 1.1739, 5753.3849],
    [1576.0, 2.8469, 7860.4194],
    [925.0, 5.453, 11506.77],
    [542.0, 4.564, 3930.21],
    [472.0, 3.661, 5884.927],
    [346.0, 0.964, 5507.553],
    [329.0, 5.9, 5223.694],
    [307.0, 0.299, 5573.143],
    [243.0, 4.273, 11790.629],
    [212.0, 5.847, 1577.344],
    [186.0, 5.022, 10977.079],
    [175.0, 3.012, 18849.228],
    [110.0, 5.055, 5486.778],
    [98.0, 0.89, 6069.78],
    [86.0, 5.69, 15720.84],
    [86.0, 1.27, 161000.69],
    [65.0, 0.27, 17260.15],
    [63.0, 0.92, 529.69],
    [57.0, 2.01, 83996.85],
    [56.0, 5.24, 71430.7],
    [49.0, 3.25, 2544.31],
    [47.0, 2.58, 775.52],
    [45.0, 5.54, 9437.76],
    [43.0, 6.01, 6275.96],
    [39.0, 5.36, 4694.0],
    [38.0, 2.39, 8827.39],
    [37.0, 0.83, 19651.05],
    [37.0, 4.9, 12139.55],
    [36.0, 1.67, 12036.46],
    [35.0, 1.84, 2942.46],
    [33.0, 0.24, 7084.9],
    [32.0, 0.18, 5088.63],
    [32.0, 1.78, 398.15],
    [28.0, 1.21, 6286.6],
    [28.0, 1.9, 6279.55],
    [26.0, 4.59, 10447.39],
];
const EARTH_R1: &[[f64; 3]] = &[
    [103019.0, 1.10749, 6283.07585],
    [1721.0, 1.0644, 12566.1517],
    [702.0, 3.142, 0.0],
    [32.0, 1.02, 18849.23],
    [31.0, 2.84, 5507.55],
    [25.0, 1.32, 5223.69],
    [18.0, 1.42, 1577.34],
    [10.0, 5.91, 10977.08],
    [9.0, 1.42, 6275.96],
    [9.0, 0.27, 5486.78],
];
const EARTH_R2: &[[f64; 3]] = &[
    [4359.0, 5.7846, 6283.0758],
    [124.0, 5.579, 12566.152],
    [12.0, 3.14, 0.0],
    [9.0, 3.63, 77713.77],
    [6.0, 1.87, 5573.14],
    [3.0, 5.47, 18849.23],
];
const EARTH_R3: &[[f64; 3]] = &[
    [145.0, 4.273, 6283.076],
    [7.0, 3.92, 12566.15],
];
const EARTH_R4: &[[f64; 3]] = &[
    [4.0, 2.56, 6283.08],
];

// Venus
pub(in crate::planetlib) const VENUS: StaticTable = StaticTable {
    frame: SeriesFrame::OfDate,
    amplitude_scale: 1e-8,
    longitude: &[VENUS_L0, VENUS_L1, VENUS_L2, VENUS_L3, VENUS_L4, VENUS_L5],
    latitude: &[VENUS_B0, VENUS_B1, VENUS_B2, VENUS_B3, VENUS_B4],
    radius: &[VENUS_R0, VENUS_R1, VENUS_R2, VENUS_R3, VENUS_R4],
};

const VENUS_L0: &[[f64; 3]] = &[
    [317614667.0, 0.0, 0.0],
    [1353968.0, 5.5931332, 10213.2855462],
    [89892.0, 5.3065, 20426.57109],
    [5477.0, 4.4163, 7860.4194],
    [3456.0, 2.6996, 11790.6291],
    [2372.0, 2.9938, 3930.2097],
    [1664.0, 4.2502, 1577.3435],
    [1438.0, 4.1575, 9683.5946],
    [1317.0, 5.1867, 26.2983],
    [1201.0, 6.1536, 30639.8566],
    [769.0, 0.816, 9437.763],
    [761.0, 1.95, 529.691],
    [708.0, 1.065, 775.523],
    [585.0, 3.998, 191.448],
    [500.0, 4.123, 15720.839],
    [429.0, 3.586, 19367.189],
    [327.0, 5.677, 5507.553],
    [326.0, 4.591, 10404.734],
    [232.0, 3.163, 9153.904],
    [180.0, 4.653, 1109.379],
    [155.0, 5.57, 19651.048],
    [128.0, 4.226, 20.775],
    [128.0, 0.962, 5661.332],
    [106.0, 1.537, 801.821],
];
const VENUS_L1: &[[f64; 3]] = &[
    [1021352943053.0, 0.0, 0.0],
    [95708.0, 2.46424, 10213.28555],
    [14445.0, 0.51625, 20426.57109],
    [213.0, 1.795, 30639.857],
    [174.0, 2.655, 26.298],
    [152.0, 6.106, 1577.344],
    [82.0, 5.7, 191.45],
    [70.0, 2.68, 9437.76],
    [52.0, 3.6, 775.52],
    [38.0, 1.03, 529.69],
    [30.0, 1.25, 5507.55],
    [25.0, 6.11, 10404.73],
];
const VENUS_L2: &[[f64; 3]] = &[
    [54127.0, 0.0, 0.0],
    [3891.0, 0.3451, 10213.2855],
    [1338.0, 2.0201, 20426.5711],
    [24.0, 2.05, 26.3],
    [19.0, 3.54, 30639.86],
    [10.0, 3.97, 775.52],
    [7.0, 1.52, 1577.34],
    [6.0, 1.0, 191.45],
];
const VENUS_L3: &[[f64; 3]] = &[
    [136.0, 4.804, 10213.286],
    [78.0, 3.67, 20426.57],
    [26.0, 0.0, 0.0],
];
const VENUS_L4: &[[f64; 3]] = &[
    [114.0, 3.1416, 0.0],
    [3.0, 5.21, 20426.57],
    [2.0, 2.51, 10213.29],
];
const VENUS_L5: &[[f64; 3]] = &[
    [1.0, 3.14, 0.0],
];
const VENUS_B0: &[[f64; 3]] = &[
    [5923638.0, 0.2670278, 10213.2855462],
    [40108.0, 1.14737, 20426.57109],
    [32815.0, 3.14159, 0.0],
    [1011.0, 1.0895, 30639.8566],
    [149.0, 6.254, 18073.705],
    [138.0, 0.86, 1577.344],
    [130.0, 3.672, 9437.763],
    [120.0, 3.705, 2352.866],
    [108.0, 4.539, 22003.915],
];
const VENUS_B1: &[[f64; 3]] = &[
    [513348.0, 1.803643, 10213.285546],
    [4380.0, 3.3862, 20426.5711],
    [199.0, 0.0, 0.0],
    [197.0, 2.53, 30639.857],
];
const VENUS_B2: &[[f64; 3]] = &[
    [22378.0, 3.38509, 10213.28555],
    [282.0, 0.0, 0.0],
    [173.0, 5.256, 20426.571],
    [27.0, 3.87, 30639.86],
];
const VENUS_B3: &[[f64; 3]] = &[
    [647.0, 4.992, 10213.286],
    [20.0, 3.14, 0.0],
    [6.0, 0.77, 20426.57],
    [3.0, 5.44, 30639.86],
];
const VENUS_B4: &[[f64; 3]] = &[
    [14.0, 0.32, 10213.29],
];
const VENUS_R0: &[[f64; 3]] = &[
    [72334821.0, 0.0, 0.0],
    [489824.0, 4.021518, 10213.285546],
    [1658.0, 4.9021, 20426.5711],
    [1632.0, 2.8455, 7860.4194],
    [1378.0, 1.1285, 11790.6291],
    [498.0, 2.587, 9683.595],
    [374.0, 1.423, 3930.21],
    [264.0, 5.529, 9437.763],
    [237.0, 2.551, 15720.839],
    [222.0, 2.013, 19367.189],
    [126.0, 2.728, 1577.344],
    [119.0, 3.02, 10404.734],
];
const VENUS_R1: &[[f64; 3]] = &[
    [34551.0, 0.89199, 10213.28555],
    [234.0, 1.772, 20426.571],
    [234.0, 3.142, 0.0],
];
const VENUS_R2: &[[f64; 3]] = &[
    [1407.0, 5.0637, 10213.2855],
    [16.0, 5.47, 20426.57],
    [13.0, 0.0, 0.0],
];
const VENUS_R3: &[[f64; 3]] = &[
    [50.0, 3.22, 10213.29],
];
const VENUS_R4: &[[f64; 3]] = &[
    [1.0, 0.92, 10213.29],
];

// Mars
pub(in crate::planetlib) const MARS: StaticTable = StaticTable {
    frame: SeriesFrame::J2000,
    amplitude_scale: 1.0,
    longitude: &[MARS_L0, MARS_L1],
    latitude: &[MARS_B0, MARS_B1],
    radius: &[MARS_R0],
};

const MARS_L0: &[[f64; 3]] = &[
    [6.20347711581, 0.0, 0.0],
    [0.18656368093, 5.0503710027, 3340.6124266998],
    [0.01108216816, 5.40099836344, 6681.2248533996],
    [0.00091798406, 5.75478744667, 10021.8372800994],
    [0.00027744987, 5.97049513147, 3.523118349],
    [0.00012315897, 0.84956094002, 2810.9214616052],
    [0.00010610235, 2.93958560338, 2281.2304965106],
];
const MARS_L1: &[[f64; 3]] = &[
    [3340.61242700512, 0.0, 0.0],
    [0.01457554523, 3.60433733236, 3340.6124266998],
];
const MARS_B0: &[[f64; 3]] = &[
    [0.03197134986, 3.76832042431, 3340.6124266998],
    [0.00298033, 4.10617, 6681.224853],
    [0.00289105, 0.0, 0.0],
    [0.00031366, 4.44651, 10021.83728],
    [0.00003484, 4.7881, 13362.4497],
    [0.00000443, 5.026, 3344.136],
    [0.00000443, 5.652, 3337.089],
    [0.00000399, 5.131, 16703.062],
    [0.00000293, 3.793, 2281.23],
];
const MARS_B1: &[[f64; 3]] = &[
    [0.00217310991, 6.04472194776, 3340.6124266998],
];
const MARS_R0: &[[f64; 3]] = &[
    [1.53033488271, 0.0, 0.0],
    [0.1418495316, 3.47971283528, 3340.6124266998],
    [0.00660776362, 3.81783443019, 6681.2248533996],
    [0.00046179117, 4.15595316782, 10021.8372800994],
];

// Jupiter
pub(in crate::planetlib) const JUPITER: StaticTable = StaticTable {
    frame: SeriesFrame::J2000,
    amplitude_scale: 1.0,
    longitude: &[JUPITER_L0, JUPITER_L1],
    latitude: &[JUPITER_B0, JUPITER_B1],
    radius: &[JUPITER_R0],
};

const JUPITER_L0: &[[f64; 3]] = &[
    [0.59954691494, 0.0, 0.0],
    [0.09695898719, 5.06191793158, 529.6909650946],
    [0.00573610142, 1.44406205629, 7.1135470008],
    [0.00306389205, 5.41734730184, 1059.3819301892],
    [0.00097178296, 4.14264726552, 632.7837393132],
    [0.00072903078, 3.64042916389, 522.5774180938],
    [0.00064263975, 3.41145165351, 103.0927742186],
    [0.00039806064, 2.29376740788, 419.4846438752],
    [0.00038857767, 1.27231755835, 316.3918696566],
];
const JUPITER_L1: &[[f64; 3]] = &[
    [529.69096508814, 0.0, 0.0],
    [0.00489503243, 4.2208293947, 529.6909650946],
];
const JUPITER_B0: &[[f64; 3]] = &[
    [0.02268616, 3.5585261, 529.6909651],
    [0.0011009, 0.0, 0.0],
    [0.00109972, 3.908093, 1059.38193],
    [0.00008101, 3.6051, 522.5774],
    [0.00006438, 0.3063, 536.8045],
    [0.00006044, 4.2588, 1589.0729],
    [0.00001107, 2.9853, 1162.4747],
    [0.00000944, 1.675, 426.598],
    [0.00000942, 2.936, 1052.268],
    [0.00000894, 1.754, 7.114],
    [0.00000836, 5.179, 103.093],
    [0.00000767, 2.155, 632.784],
    [0.00000684, 3.678, 213.299],
    [0.00000629, 0.643, 1066.495],
    [0.00000559, 0.014, 846.083],
    [0.00000532, 2.703, 110.206],
    [0.00000464, 1.173, 949.176],
    [0.00000431, 2.608, 419.485],
    [0.00000351, 4.611, 2118.764],
];
const JUPITER_B1: &[[f64; 3]] = &[
    [0.00078203446, 1.52377859742, 529.6909650946],
];
const JUPITER_R0: &[[f64; 3]] = &[
    [5.20887429326, 0.0, 0.0],
    [0.25209327119, 3.49108639871, 529.6909650946],
    [0.00610599976, 3.84115365948, 1059.3819301892],
];

// Saturn
pub(in crate::planetlib) const SATURN: StaticTable = StaticTable {
    frame: SeriesFrame::J2000,
    amplitude_scale: 1.0,
    longitude: &[SATURN_L0, SATURN_L1],
    latitude: &[SATURN_B0, SATURN_B1],
    radius: &[SATURN_R0],
};

const SATURN_L0: &[[f64; 3]] = &[
    [0.87401354025, 0.0, 0.0],
    [0.11107659762, 3.96205090159, 213.299095438],
    [0.01414150957, 4.58581516874, 7.1135470008],
    [0.00398379389, 0.52112032699, 206.1855484372],
    [0.00350769243, 3.30329907896, 426.598190876],
    [0.00206816305, 0.24658372002, 103.0927742186],
    [0.000792713, 3.84007056878, 220.4126424388],
    [0.00023990355, 4.66976924553, 110.2063212194],
];
const SATURN_L1: &[[f64; 3]] = &[
    [213.2990952169, 0.0, 0.0],
];
const SATURN_B0: &[[f64; 3]] = &[
    [0.04330678, 3.6028443, 213.2990954],
    [0.00240348, 2.852385, 426.598191],
    [0.00084746, 0.0, 0.0],
    [0.00034116, 0.57297, 206.18555],
    [0.00030863, 3.48442, 220.41264],
    [0.00014734, 2.11847, 639.89729],
    [0.00009917, 5.79, 419.4846],
    [0.00006994, 4.736, 7.1135],
    [0.00004808, 5.4331, 316.3919],
    [0.00004788, 4.9651, 110.2063],
    [0.00003432, 2.7326, 433.7117],
    [0.00001506, 6.013, 103.0928],
    [0.0000106, 5.631, 529.691],
    [0.00000969, 5.204, 632.784],
    [0.00000942, 1.396, 853.196],
    [0.00000708, 3.803, 323.505],
    [0.00000552, 5.131, 202.253],
    [0.000004, 3.359, 227.526],
];
const SATURN_B1: &[[f64; 3]] = &[
    [0.00198927992, 4.93901017903, 213.299095438],
];
const SATURN_R0: &[[f64; 3]] = &[
    [9.55758135486, 0.0, 0.0],
    [0.52921382865, 2.39226219573, 213.299095438],
];
}

pub(super) use tables::{EARTH, JUPITER, MARS, SATURN, VENUS};

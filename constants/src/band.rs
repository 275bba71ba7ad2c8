/// Terrain colour bands, ordered by descending height threshold.
/// A band matches when `height > threshold`; the first match wins and the
/// band without a threshold catches everything below.
pub struct BandInfo {
    pub name: &'static str,
    pub threshold: Option<f32>,
    pub rgb: [f32; 3],
}

pub const BAND_MAP: &[BandInfo] = &[
    BandInfo {
        name: "rock",
        threshold: Some(0.8),
        rgb: [0.5, 0.5, 0.5],
    },
    BandInfo {
        name: "grass",
        threshold: Some(0.2),
        rgb: [0.36, 0.54, 0.4],
    },
    BandInfo {
        name: "dirt",
        threshold: Some(-0.2),
        rgb: [0.6, 0.47, 0.33],
    },
    BandInfo {
        name: "lowland",
        threshold: None,
        rgb: [0.33, 0.45, 0.27],
    },
];

//! Continuous colormaps and packed-color helpers.
//!
//! Every map takes a normalized value in `[0, 1]` to an RGB triple with
//! channels in `[0, 1]`. Plot objects store colors packed as `0xRRGGBB`.

use glam::Vec3;

/// Named continuous colormaps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorMap {
    /// MATLAB-style analytic maps
    Jet,
    Hot,
    Cool,
    Spring,
    Summer,
    Autumn,
    Winter,
    Gray,
    Bone,
    Copper,
    Pink,

    /// Perceptually uniform maps, interpolated between reference stops
    Viridis,
    Plasma,
    Inferno,
    Magma,
    Turbo,
    Parula,

    /// Linear blend between two colors
    Custom(Vec3, Vec3),
}

impl Default for ColorMap {
    fn default() -> Self {
        Self::Viridis
    }
}

const VIRIDIS: [u32; 9] = [
    0x440154, 0x472d7b, 0x3b528b, 0x2c728e, 0x21918c, 0x28ae80, 0x5ec962, 0xaddc30, 0xfde725,
];
const PLASMA: [u32; 5] = [0x0d0887, 0x7e03a8, 0xcc4778, 0xf89540, 0xf0f921];
const INFERNO: [u32; 5] = [0x000004, 0x57106e, 0xbc3754, 0xf98e09, 0xfcffa4];
const MAGMA: [u32; 5] = [0x000004, 0x51127c, 0xb73779, 0xfc8961, 0xfcfdbf];
const TURBO: [u32; 5] = [0x30123b, 0x28bceb, 0xa4fc3c, 0xfb7e21, 0x7a0403];
const PARULA: [u32; 5] = [0x352a87, 0x1283d4, 0x33b8a1, 0xc4bc3a, 0xf9fb0e];

impl ColorMap {
    /// Names accepted by [`ColorMap::from_name`].
    pub const NAMES: [&'static str; 17] = [
        "jet", "hot", "cool", "spring", "summer", "autumn", "winter", "gray", "bone", "copper",
        "pink", "viridis", "plasma", "inferno", "magma", "turbo", "parula",
    ];

    /// Look up a colormap by its lowercase name (`"grey"` is accepted too).
    pub fn from_name(name: &str) -> Option<Self> {
        let cmap = match name.trim().to_ascii_lowercase().as_str() {
            "jet" => Self::Jet,
            "hot" => Self::Hot,
            "cool" => Self::Cool,
            "spring" => Self::Spring,
            "summer" => Self::Summer,
            "autumn" => Self::Autumn,
            "winter" => Self::Winter,
            "gray" | "grey" => Self::Gray,
            "bone" => Self::Bone,
            "copper" => Self::Copper,
            "pink" => Self::Pink,
            "viridis" => Self::Viridis,
            "plasma" => Self::Plasma,
            "inferno" => Self::Inferno,
            "magma" => Self::Magma,
            "turbo" => Self::Turbo,
            "parula" => Self::Parula,
            _ => return None,
        };
        Some(cmap)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Jet => "jet",
            Self::Hot => "hot",
            Self::Cool => "cool",
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Autumn => "autumn",
            Self::Winter => "winter",
            Self::Gray => "gray",
            Self::Bone => "bone",
            Self::Copper => "copper",
            Self::Pink => "pink",
            Self::Viridis => "viridis",
            Self::Plasma => "plasma",
            Self::Inferno => "inferno",
            Self::Magma => "magma",
            Self::Turbo => "turbo",
            Self::Parula => "parula",
            Self::Custom(..) => "custom",
        }
    }

    /// Map a normalized value to a color. Values outside `[0, 1]` are clamped
    /// and NaN is treated as the midpoint.
    pub fn map_value(&self, t: f32) -> Vec3 {
        let t = if t.is_nan() { 0.5 } else { t.clamp(0.0, 1.0) };

        let rgb = match self {
            Self::Jet => Vec3::new(
                1.5 - 4.0 * (t - 0.75).abs(),
                1.5 - 4.0 * (t - 0.5).abs(),
                1.5 - 4.0 * (t - 0.25).abs(),
            ),
            Self::Hot => {
                if t < 1.0 / 3.0 {
                    Vec3::new(3.0 * t, 0.0, 0.0)
                } else if t < 2.0 / 3.0 {
                    Vec3::new(1.0, 3.0 * t - 1.0, 0.0)
                } else {
                    Vec3::new(1.0, 1.0, 3.0 * t - 2.0)
                }
            }
            Self::Cool => Vec3::new(t, 1.0 - t, 1.0),
            Self::Spring => Vec3::new(1.0, t, 1.0 - t),
            Self::Summer => Vec3::new(t, 0.5 + 0.5 * t, 0.4),
            Self::Autumn => Vec3::new(1.0, t, 0.0),
            Self::Winter => Vec3::new(0.0, t, 1.0 - 0.5 * t),
            Self::Gray => Vec3::splat(t),
            Self::Bone => {
                let gray = Vec3::splat(t);
                let hot = Self::Hot.map_value(t);
                (7.0 * gray + Vec3::new(hot.z, hot.y, hot.x)) / 8.0
            }
            Self::Copper => Vec3::new(1.25 * t, 0.7812 * t, 0.4975 * t),
            Self::Pink => {
                let gray = Vec3::splat(t);
                ((2.0 * gray + Self::Hot.map_value(t)) / 3.0).map(f32::sqrt)
            }
            Self::Viridis => interpolate_stops(&VIRIDIS, t),
            Self::Plasma => interpolate_stops(&PLASMA, t),
            Self::Inferno => interpolate_stops(&INFERNO, t),
            Self::Magma => interpolate_stops(&MAGMA, t),
            Self::Turbo => interpolate_stops(&TURBO, t),
            Self::Parula => interpolate_stops(&PARULA, t),
            Self::Custom(low, high) => low.lerp(*high, t),
        };

        rgb.clamp(Vec3::ZERO, Vec3::ONE)
    }

    /// Sample the map at `levels` evenly spaced points from 0 to 1, packed as
    /// `0xRRGGBB`. A single level samples the low end.
    pub fn sample(&self, levels: usize) -> Vec<u32> {
        match levels {
            0 => Vec::new(),
            1 => vec![pack_rgb(self.map_value(0.0))],
            _ => {
                let last = (levels - 1) as f32;
                (0..levels)
                    .map(|i| pack_rgb(self.map_value(i as f32 / last)))
                    .collect()
            }
        }
    }
}

fn interpolate_stops(stops: &[u32], t: f32) -> Vec3 {
    let segments = (stops.len() - 1) as f32;
    let scaled = t * segments;
    let index = (scaled.floor() as usize).min(stops.len() - 2);
    let local = scaled - index as f32;
    unpack_rgb(stops[index]).lerp(unpack_rgb(stops[index + 1]), local)
}

fn channel_byte(value: f32) -> u32 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u32
}

/// Pack an RGB triple with channels in `[0, 1]` into `0xRRGGBB`.
pub fn pack_rgb(rgb: Vec3) -> u32 {
    (channel_byte(rgb.x) << 16) | (channel_byte(rgb.y) << 8) | channel_byte(rgb.z)
}

pub fn unpack_rgb(packed: u32) -> Vec3 {
    Vec3::new(
        ((packed >> 16) & 0xff) as f32 / 255.0,
        ((packed >> 8) & 0xff) as f32 / 255.0,
        (packed & 0xff) as f32 / 255.0,
    )
}

/// Format an RGB triple as a `#rrggbb` string.
pub fn rgb_to_hex(rgb: Vec3) -> String {
    format!("#{:06x}", pack_rgb(rgb))
}

/// Parse `#rrggbb` (or bare `rrggbb`) into a packed color.
pub fn hex_to_packed(hex: &str) -> Option<u32> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for name in ColorMap::NAMES {
            let cmap = ColorMap::from_name(name).unwrap();
            assert_eq!(cmap.name(), name);
        }
        assert_eq!(ColorMap::from_name(" Grey "), Some(ColorMap::Gray));
        assert_eq!(ColorMap::from_name("rainbow"), None);
    }

    #[test]
    fn viridis_endpoints_match_reference_stops() {
        assert_eq!(pack_rgb(ColorMap::Viridis.map_value(0.0)), 0x440154);
        assert_eq!(pack_rgb(ColorMap::Viridis.map_value(1.0)), 0xfde725);
        assert_eq!(pack_rgb(ColorMap::Viridis.map_value(0.5)), 0x21918c);
    }

    #[test]
    fn every_map_stays_in_unit_cube() {
        for name in ColorMap::NAMES {
            let cmap = ColorMap::from_name(name).unwrap();
            for i in 0..=32 {
                let c = cmap.map_value(i as f32 / 32.0);
                assert!(c.cmpge(Vec3::ZERO).all() && c.cmple(Vec3::ONE).all(), "{name}");
            }
        }
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let jet = ColorMap::Jet;
        assert_eq!(jet.map_value(-3.0), jet.map_value(0.0));
        assert_eq!(jet.map_value(7.0), jet.map_value(1.0));
        assert_eq!(jet.map_value(f32::NAN), jet.map_value(0.5));
    }

    #[test]
    fn sample_spans_both_ends() {
        let gray = ColorMap::Gray.sample(256);
        assert_eq!(gray.len(), 256);
        assert_eq!(gray[0], 0x000000);
        assert_eq!(gray[255], 0xffffff);
        assert_eq!(gray[128], 0x808080);
        assert!(ColorMap::Gray.sample(0).is_empty());
        assert_eq!(ColorMap::Gray.sample(1), vec![0x000000]);
    }

    #[test]
    fn hex_helpers() {
        assert_eq!(rgb_to_hex(Vec3::new(1.0, 0.0, 0.5)), "#ff0080");
        assert_eq!(hex_to_packed("#99bbff"), Some(0x99bbff));
        assert_eq!(hex_to_packed("ff4d4d"), Some(0xff4d4d));
        assert_eq!(hex_to_packed("#fff"), None);
        assert_eq!(pack_rgb(unpack_rgb(0x123456)), 0x123456);
    }

    #[test]
    fn custom_blends_endpoints() {
        let cmap = ColorMap::Custom(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(pack_rgb(cmap.map_value(1.0)), 0xff0000);
        assert_eq!(pack_rgb(cmap.map_value(0.0)), 0x000000);
    }
}

//! Named, ready-made gradients.
//!
//! The library is built once, on first access, and is read-only afterwards.
//! Every preset is an independent [`GradientSpec`]; callers that want a variant
//! clone-by-transformation (e.g. `Preset::Ocean.spec().rotated(1)`).

use std::fmt;
use std::str::FromStr;

use state::InitCell;

use crate::coords::Anchor;
use crate::error::{GradientError, Result};
use crate::paint::{Color, GradientDirection, GradientShape, GradientSpec};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Preset {
    Sunset,
    Ocean,
    Nature,
    Space,
    Sunrise,
    Fire,
    PurpleHaze,
    Rainbow,
    DarkRadial,
    ColorWheel,
}

impl Preset {
    pub const ALL: [Preset; 10] = [
        Preset::Sunset,
        Preset::Ocean,
        Preset::Nature,
        Preset::Space,
        Preset::Sunrise,
        Preset::Fire,
        Preset::PurpleHaze,
        Preset::Rainbow,
        Preset::DarkRadial,
        Preset::ColorWheel,
    ];

    /// Canonical snake_case name.
    pub const fn name(self) -> &'static str {
        match self {
            Preset::Sunset => "sunset",
            Preset::Ocean => "ocean",
            Preset::Nature => "nature",
            Preset::Space => "space",
            Preset::Sunrise => "sunrise",
            Preset::Fire => "fire",
            Preset::PurpleHaze => "purple_haze",
            Preset::Rainbow => "rainbow",
            Preset::DarkRadial => "dark_radial",
            Preset::ColorWheel => "color_wheel",
        }
    }

    /// The shared, immutable spec for this preset.
    pub fn spec(self) -> &'static GradientSpec {
        &library().specs[self as usize]
    }

    fn build(self) -> GradientSpec {
        let linear = |colors: &[u32], direction| {
            let colors: Vec<Color> = colors.iter().map(|c| Color::from_argb(*c)).collect();
            GradientSpec::builder(colors).direction(direction).build()
        };

        let spec = match self {
            Preset::Sunset => linear(
                &[0xFFFF7E5F, 0xFFFEB47B],
                GradientDirection::TopLeftToBottomRight,
            ),
            Preset::Ocean => linear(&[0xFF2193B0, 0xFF6DD5ED], GradientDirection::TopToBottom),
            Preset::Nature => linear(
                &[0xFF56AB2F, 0xFFA8E063],
                GradientDirection::TopLeftToBottomRight,
            ),
            Preset::Space => linear(&[0xFF000428, 0xFF004E92], GradientDirection::TopToBottom),
            Preset::Sunrise => linear(
                &[0xFFFF512F, 0xFFF09819, 0xFFFFD194],
                GradientDirection::BottomToTop,
            ),
            Preset::Fire => linear(&[0xFFF12711, 0xFFF5AF19], GradientDirection::BottomToTop),
            Preset::PurpleHaze => linear(&[0xFF7F00FF, 0xFFE100FF], GradientDirection::LeftToRight),
            Preset::Rainbow => GradientSpec::rainbow(1.0, 0.5, 6),
            Preset::DarkRadial => {
                GradientSpec::builder([Color::from_argb(0xFF434343), Color::BLACK])
                    .radial(Anchor::CENTER, 0.8)
                    .build()
            }
            Preset::ColorWheel => GradientSpec::rainbow(1.0, 0.5, 12)
                .and_then(|g| g.with_shape(GradientShape::sweep())),
        };
        spec.expect("preset definitions are valid")
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = GradientError;

    /// Case-insensitive; `_`, `-` and spaces are ignored, so `darkRadial`,
    /// `dark_radial` and `Dark Radial` all resolve to [`Preset::DarkRadial`].
    fn from_str(s: &str) -> Result<Self> {
        let key = fold_name(s);
        Preset::ALL
            .into_iter()
            .find(|p| fold_name(p.name()) == key)
            .ok_or_else(|| GradientError::unknown_preset(s))
    }
}

fn fold_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Process-wide preset storage, indexed by `Preset as usize`.
struct PresetLibrary {
    specs: Vec<GradientSpec>,
}

static LIBRARY: InitCell<PresetLibrary> = InitCell::new();

fn library() -> &'static PresetLibrary {
    LIBRARY.get_or_init(|| {
        let specs: Vec<GradientSpec> = Preset::ALL.iter().map(|p| p.build()).collect();
        log::debug!("preset library initialized with {} gradients", specs.len());
        PresetLibrary { specs }
    })
}

/// Looks up a preset by name.
///
/// # Errors
///
/// Returns [`GradientError::UnknownPreset`] when no preset matches `name`.
pub fn get(name: &str) -> Result<&'static GradientSpec> {
    Ok(name.parse::<Preset>()?.spec())
}

/// Canonical names of every preset.
pub fn names() -> impl Iterator<Item = &'static str> {
    Preset::ALL.into_iter().map(Preset::name)
}

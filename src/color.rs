//! Color component codec
//!
//! A [`Color`] is four normalized channels in `[0, 1]`. Two external
//! representations exist:
//!
//! - a byte payload: the ordered array `[red, green, blue, alpha]` encoded as
//!   JSON, which round-trips exactly through [`Color::encode`] and
//!   [`Color::decode`];
//! - a loosely-typed map with `"red"`/`"green"`/`"blue"` keys in `[0, 255]`,
//!   consumed (never produced) by [`Color::from_map`] with alpha fixed at
//!   fully opaque.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("cannot extract RGB components from the color")]
    CannotGetRgbComponents,

    #[error("no color payload present")]
    CannotGetColorData,

    #[error("color payload is corrupted")]
    CorruptedColorData,

    #[error("color map is absent or missing a numeric red/green/blue entry")]
    CannotGetColorDictionaryData,
}

/// An RGBA color with channels normalized to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

/// Typed boundary for the loosely-typed color map. Channel values are in the
/// `[0, 255]` range; coercion and shape validation happen once, here.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RgbChannels {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Color {
    pub const BLACK: Color = Color::opaque(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::opaque(1.0, 1.0, 1.0);
    pub const RED: Color = Color::opaque(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::opaque(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::opaque(0.0, 0.0, 1.0);

    /// Creates a color from four normalized channels.
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self { red, green, blue, alpha }
    }

    /// Creates a fully opaque color from three normalized channels.
    pub const fn opaque(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Serializes the color as a byte payload.
    ///
    /// The payload is the JSON array `[red, green, blue, alpha]`. Fails with
    /// [`ColorError::CannotGetRgbComponents`] when any channel is non-finite
    /// or outside `[0, 1]`, i.e. when the value does not describe a color in
    /// normalized RGB space.
    pub fn encode(&self) -> Result<Vec<u8>, ColorError> {
        let components = [self.red, self.green, self.blue, self.alpha];
        if components.iter().any(|c| !(0.0..=1.0).contains(c)) {
            return Err(ColorError::CannotGetRgbComponents);
        }
        serde_json::to_vec(&components).map_err(|_| ColorError::CannotGetRgbComponents)
    }

    /// Reconstructs a color from a byte payload produced by [`Color::encode`].
    ///
    /// Fails with [`ColorError::CannotGetColorData`] when no payload is
    /// present and [`ColorError::CorruptedColorData`] when the payload is not
    /// a JSON number array of exactly 4 elements.
    pub fn decode(data: Option<&[u8]>) -> Result<Self, ColorError> {
        let data = data.ok_or(ColorError::CannotGetColorData)?;
        let components: Vec<f64> =
            serde_json::from_slice(data).map_err(|_| ColorError::CorruptedColorData)?;
        match *components.as_slice() {
            [red, green, blue, alpha] => Ok(Self::rgba(red, green, blue, alpha)),
            _ => Err(ColorError::CorruptedColorData),
        }
    }

    /// Builds a fully opaque color from a loosely-typed map.
    ///
    /// The map must hold numeric `"red"`, `"green"`, and `"blue"` entries in
    /// the `[0, 255]` range; each is divided by 255 and alpha is fixed at
    /// 1.0. Fails with [`ColorError::CannotGetColorDictionaryData`] when the
    /// map is absent, a key is missing, or a value is not a number. This
    /// conversion is directional: no inverse is provided.
    pub fn from_map(map: Option<&serde_json::Value>) -> Result<Self, ColorError> {
        let value = map.ok_or(ColorError::CannotGetColorDictionaryData)?;
        let channels = RgbChannels::deserialize(value)
            .map_err(|_| ColorError::CannotGetColorDictionaryData)?;
        Ok(channels.into())
    }
}

impl From<RgbChannels> for Color {
    fn from(channels: RgbChannels) -> Self {
        Self::opaque(
            channels.red / 255.0,
            channels.green / 255.0,
            channels.blue / 255.0,
        )
    }
}

//! Colours: [`Color`], [`Palette`], and the [`color_for`] rule.

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// An RGB colour packed into a `u32` (0x00RRGGBB).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Self = Self::from_rgb(0xFF, 0xFF, 0xFF);
    pub const CYAN: Self = Self::from_rgb(0x00, 0xFF, 0xFF);
    pub const GREEN: Self = Self::from_rgb(0x00, 0xFF, 0x00);
    pub const RED: Self = Self::from_rgb(0xFF, 0x00, 0x00);

    /// Construct from individual RGB components.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Red component.
    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// Green component.
    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// Blue component.
    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// The four colours a cell can take.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Palette {
    pub open: Color,
    pub endpoint: Color,
    pub path: Color,
    pub blocked: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            open: Color::WHITE,
            endpoint: Color::CYAN,
            path: Color::GREEN,
            blocked: Color::RED,
        }
    }
}

impl Palette {
    /// Colour for a cell with the given flags.
    ///
    /// Impassable wins over everything; on a passable cell, endpoint wins
    /// over path.
    #[inline]
    pub const fn color_for(&self, passable: bool, endpoint: bool, on_path: bool) -> Color {
        if !passable {
            self.blocked
        } else if endpoint {
            self.endpoint
        } else if on_path {
            self.path
        } else {
            self.open
        }
    }
}

/// [`Palette::color_for`] with the default palette.
#[inline]
pub fn color_for(passable: bool, endpoint: bool, on_path: bool) -> Color {
    Palette::default().color_for(passable, endpoint, on_path)
}

//! The [`CellViewState`] type — display flags for one map cell.

use crate::color::{Color, Palette, color_for};

/// Display flags for one cell, plus the colour derived from them.
///
/// The three flags are independent; every setter overwrites its flag and
/// recomputes the colour. No transition is rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "CellFlags", into = "CellFlags")
)]
pub struct CellViewState {
    passable: bool,
    endpoint: bool,
    on_path: bool,
    color: Color,
}

impl CellViewState {
    /// A cell that is or is not passable, with no other flags.
    pub fn new(passable: bool) -> Self {
        Self {
            passable,
            endpoint: false,
            on_path: false,
            color: color_for(passable, false, false),
        }
    }

    /// Whether a search may enter the cell.
    #[inline]
    pub fn is_passable(&self) -> bool {
        self.passable
    }

    /// Whether the cell is the start or finish.
    #[inline]
    pub fn is_endpoint(&self) -> bool {
        self.endpoint
    }

    /// Whether the cell is part of the displayed route.
    #[inline]
    pub fn is_on_path(&self) -> bool {
        self.on_path
    }

    /// Colour under the default [`Palette`].
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Colour under a caller-supplied palette.
    #[inline]
    pub fn color_in(&self, palette: &Palette) -> Color {
        palette.color_for(self.passable, self.endpoint, self.on_path)
    }

    /// Mark the cell as passable or blocked.
    pub fn set_passable(&mut self, passable: bool) {
        self.passable = passable;
        self.update_color();
    }

    /// Flip passability.
    pub fn toggle_passable(&mut self) {
        self.set_passable(!self.passable);
    }

    /// Mark the cell as the start or finish.
    pub fn set_endpoint(&mut self, endpoint: bool) {
        self.endpoint = endpoint;
        self.update_color();
    }

    /// Mark the cell as part of a computed route.
    pub fn set_path(&mut self, on_path: bool) {
        self.on_path = on_path;
        self.update_color();
    }

    fn update_color(&mut self) {
        self.color = color_for(self.passable, self.endpoint, self.on_path);
    }
}

impl Default for CellViewState {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Serialized form: the flags only, the colour is rederived on load.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct CellFlags {
    passable: bool,
    endpoint: bool,
    on_path: bool,
}

#[cfg(feature = "serde")]
impl From<CellFlags> for CellViewState {
    fn from(f: CellFlags) -> Self {
        let mut cell = Self::new(f.passable);
        cell.endpoint = f.endpoint;
        cell.on_path = f.on_path;
        cell.update_color();
        cell
    }
}

#[cfg(feature = "serde")]
impl From<CellViewState> for CellFlags {
    fn from(c: CellViewState) -> Self {
        Self {
            passable: c.passable,
            endpoint: c.endpoint,
            on_path: c.on_path,
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn colour_is_rederived_on_load() {
        let mut c = CellViewState::default();
        c.set_path(true);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"passable":true,"endpoint":false,"on_path":true}"#);
        let back: CellViewState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
        assert_eq!(back.color(), Color::GREEN);
    }
}

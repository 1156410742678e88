//! Widget kind tags and kind sets used for filtering.

use bitflags::bitflags;
use serde::Serialize;
use std::fmt;
use std::ops::BitOr;

/// The closed set of widget kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WidgetKind {
    Button,
    Toggle,
    Slider,
}

impl WidgetKind {
    /// Every kind, in declaration order.
    pub const ALL: [WidgetKind; 3] = [WidgetKind::Button, WidgetKind::Toggle, WidgetKind::Slider];

    /// Type name, used to derive default labels (`Button_0`).
    pub const fn name(self) -> &'static str {
        match self {
            WidgetKind::Button => "Button",
            WidgetKind::Toggle => "Toggle",
            WidgetKind::Slider => "Slider",
        }
    }

    /// The single-bit set for this kind.
    pub const fn flag(self) -> WidgetKinds {
        match self {
            WidgetKind::Button => WidgetKinds::BUTTON,
            WidgetKind::Toggle => WidgetKinds::TOGGLE,
            WidgetKind::Slider => WidgetKinds::SLIDER,
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// A set of widget kinds.
    ///
    /// Build one from a single kind (`WidgetKind::Toggle.into()`), by or-ing
    /// kinds (`WidgetKind::Button | WidgetKind::Slider`), or take
    /// [`WidgetKinds::all()`] to match everything.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct WidgetKinds: u8 {
        const BUTTON = 0b001;
        const TOGGLE = 0b010;
        const SLIDER = 0b100;
    }
}

impl WidgetKinds {
    /// Returns true if `kind` is a member of this set.
    #[inline]
    pub fn matches(&self, kind: WidgetKind) -> bool {
        self.contains(kind.flag())
    }

    /// Iterate the member kinds.
    pub fn kinds(&self) -> impl Iterator<Item = WidgetKind> + '_ {
        WidgetKind::ALL.into_iter().filter(move |kind| self.matches(*kind))
    }
}

impl Default for WidgetKinds {
    fn default() -> Self {
        Self::all()
    }
}

impl From<WidgetKind> for WidgetKinds {
    fn from(kind: WidgetKind) -> Self {
        kind.flag()
    }
}

impl<const N: usize> From<[WidgetKind; N]> for WidgetKinds {
    fn from(kinds: [WidgetKind; N]) -> Self {
        kinds.into_iter().map(WidgetKind::flag).collect()
    }
}

impl BitOr for WidgetKind {
    type Output = WidgetKinds;

    fn bitor(self, rhs: Self) -> WidgetKinds {
        self.flag() | rhs.flag()
    }
}

impl BitOr<WidgetKind> for WidgetKinds {
    type Output = WidgetKinds;

    fn bitor(self, rhs: WidgetKind) -> WidgetKinds {
        self | rhs.flag()
    }
}

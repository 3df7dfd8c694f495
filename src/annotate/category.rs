//! The closed set of selectable annotation categories.
//!
//! Two kinds: point-marker categories (a side and a unit kind, placed as
//! markers) and region-coloring categories (assign a fill color to the region
//! under the click, never place a marker). Each category has a stable string
//! id used as its persistence wire format.

use bevy::prelude::Color;
use bevy_egui::egui;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::theme;

/// Which side a point marker belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Blue,
    Red,
}

impl Side {
    pub fn glyph_color(&self) -> Color {
        match self {
            Side::Blue => theme::SIDE_BLUE,
            Side::Red => theme::SIDE_RED,
        }
    }

    pub fn ui_color(&self) -> egui::Color32 {
        match self {
            Side::Blue => theme::SIDE_BLUE_UI,
            Side::Red => theme::SIDE_RED_UI,
        }
    }

    fn id(&self) -> &'static str {
        match self {
            Side::Blue => "blue",
            Side::Red => "red",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            Side::Blue => "Blue",
            Side::Red => "Red",
        }
    }
}

/// The unit kind a point marker represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    Bomb,
    Gun,
    Drone,
    Ship,
    Fire,
    Missile,
    Fpv,
}

impl UnitKind {
    const ALL: [UnitKind; 7] = [
        UnitKind::Bomb,
        UnitKind::Gun,
        UnitKind::Drone,
        UnitKind::Ship,
        UnitKind::Fire,
        UnitKind::Missile,
        UnitKind::Fpv,
    ];

    fn id(&self) -> &'static str {
        match self {
            UnitKind::Bomb => "bomb",
            UnitKind::Gun => "gun",
            UnitKind::Drone => "drone",
            UnitKind::Ship => "ship",
            UnitKind::Fire => "fire",
            UnitKind::Missile => "missile",
            UnitKind::Fpv => "fpv",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            UnitKind::Bomb => "Bomb",
            UnitKind::Gun => "Gun",
            UnitKind::Drone => "Drone",
            UnitKind::Ship => "Ship",
            UnitKind::Fire => "Fire",
            UnitKind::Missile => "Missile",
            UnitKind::Fpv => "FPV",
        }
    }

    /// Toolbar glyph for this kind
    pub fn symbol(&self) -> &'static str {
        match self {
            UnitKind::Bomb => "✹",
            UnitKind::Gun => "▮",
            UnitKind::Drone => "✕",
            UnitKind::Ship => "◆",
            UnitKind::Fire => "▲",
            UnitKind::Missile => "↑",
            UnitKind::Fpv => "+",
        }
    }
}

/// The fill color a region-coloring category assigns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionColor {
    Red,
    Blue,
    Green,
}

impl RegionColor {
    const ALL: [RegionColor; 3] = [RegionColor::Red, RegionColor::Blue, RegionColor::Green];

    /// The solid fill color (alpha applied at render time)
    pub fn fill_color(&self) -> Color {
        match self {
            RegionColor::Red => Color::srgb(0.85, 0.2, 0.2),
            RegionColor::Blue => Color::srgb(0.15, 0.45, 0.9),
            RegionColor::Green => Color::srgb(0.17, 0.63, 0.35),
        }
    }

    pub fn ui_color(&self) -> egui::Color32 {
        match self {
            RegionColor::Red => egui::Color32::from_rgb(217, 51, 51),
            RegionColor::Blue => egui::Color32::from_rgb(38, 115, 230),
            RegionColor::Green => egui::Color32::from_rgb(43, 161, 89),
        }
    }

    fn id(&self) -> &'static str {
        match self {
            RegionColor::Red => "red",
            RegionColor::Blue => "blue",
            RegionColor::Green => "green",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            RegionColor::Red => "Red Region",
            RegionColor::Blue => "Blue Region",
            RegionColor::Green => "Green Region",
        }
    }
}

/// A selectable annotation category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Unit(Side, UnitKind),
    Fill(RegionColor),
}

impl Category {
    /// Every selectable category, palette order: blue units, red units, fills.
    pub fn all() -> Vec<Category> {
        let mut all = Vec::with_capacity(17);
        for side in [Side::Blue, Side::Red] {
            for kind in UnitKind::ALL {
                all.push(Category::Unit(side, kind));
            }
        }
        for color in RegionColor::ALL {
            all.push(Category::Fill(color));
        }
        all
    }

    /// Stable string id, the persistence wire format.
    pub fn id(&self) -> String {
        match self {
            Category::Unit(side, kind) => format!("{}_{}", kind.id(), side.id()),
            Category::Fill(color) => format!("fill_{}", color.id()),
        }
    }

    pub fn from_id(id: &str) -> Option<Category> {
        Self::all().into_iter().find(|c| c.id() == id)
    }

    pub fn display_name(&self) -> String {
        match self {
            Category::Unit(side, kind) => {
                format!("{} {}", side.display_name(), kind.display_name())
            }
            Category::Fill(color) => color.display_name().to_string(),
        }
    }

    /// The region fill color this category assigns, if it is a
    /// region-coloring category.
    pub fn fill_color(&self) -> Option<RegionColor> {
        match self {
            Category::Unit(..) => None,
            Category::Fill(color) => Some(*color),
        }
    }

    pub fn is_region_category(&self) -> bool {
        self.fill_color().is_some()
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.id())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        Category::from_id(&id)
            .ok_or_else(|| D::Error::custom(format!("unknown category id: {}", id)))
    }
}

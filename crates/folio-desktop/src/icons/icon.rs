//! Desktop icon type

use serde::Serialize;
use crate::catalog::{AppKind, PortfolioCategory};
use crate::math::{Rect, Size, Vec2};

/// Kind of desktop icon
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IconType {
    About,
    System,
    Portfolio,
    Game,
}

impl IconType {
    /// Icon type for an application kind
    pub fn for_kind(kind: AppKind) -> Self {
        match kind {
            AppKind::About => IconType::About,
            AppKind::Portfolio => IconType::Portfolio,
            AppKind::Game => IconType::Game,
            AppKind::System | AppKind::RecycleBin => IconType::System,
        }
    }
}

/// A desktop icon as rendered
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Icon {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub icon_type: IconType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<PortfolioCategory>,
    /// Top-left x
    pub x: f32,
    /// Top-left y
    pub y: f32,
}

impl Icon {
    /// Top-left corner
    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Bounding box for an icon of `size`
    #[inline]
    pub fn rect(&self, size: Size) -> Rect {
        Rect::from_pos_size(self.position(), size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_serializes_type_field() {
        let icon = Icon {
            id: "about".to_string(),
            title: "About".to_string(),
            icon_type: IconType::About,
            category: None,
            x: 920.0,
            y: 445.0,
        };
        let value = serde_json::to_value(&icon).unwrap();
        assert_eq!(value["type"], "about");
        assert!(value.get("category").is_none());
    }

    #[test]
    fn test_recycle_bin_is_a_system_icon() {
        assert_eq!(IconType::for_kind(AppKind::RecycleBin), IconType::System);
        assert_eq!(IconType::for_kind(AppKind::Portfolio), IconType::Portfolio);
    }
}

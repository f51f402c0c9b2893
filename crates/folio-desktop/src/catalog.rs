//! Application catalog
//!
//! The fixed set of applications the desktop knows about. Every entry gets a
//! window at start; which entries get a desktop icon, and where, follows from
//! their kind.

use serde::{Deserialize, Serialize};
use crate::math::Size;

/// Id of the recycle bin application and icon
pub const RECYCLE_BIN_ID: &str = "recycle";

/// Id of the about page
pub const ABOUT_ID: &str = "about";

/// Portfolio category; decides the icon column
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PortfolioCategory {
    #[serde(rename = "photography")]
    Photography,
    #[serde(rename = "3d")]
    ThreeD,
    #[serde(rename = "2d")]
    TwoD,
}

impl PortfolioCategory {
    /// Categories in column order, left to right
    pub const COLUMNS: [PortfolioCategory; 3] = [
        PortfolioCategory::Photography,
        PortfolioCategory::ThreeD,
        PortfolioCategory::TwoD,
    ];

    /// Zero-based icon column
    pub fn column(self) -> usize {
        match self {
            PortfolioCategory::Photography => 0,
            PortfolioCategory::ThreeD => 1,
            PortfolioCategory::TwoD => 2,
        }
    }
}

/// Application kind
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppKind {
    /// The about page
    About,
    /// A portfolio gallery viewer
    Portfolio,
    /// A system application (launched from the taskbar, no desktop icon)
    System,
    /// An embedded mini-game
    Game,
    /// The recycle bin
    RecycleBin,
}

impl AppKind {
    /// Default window size for the kind when the entry sets none
    pub fn default_window_size(self) -> Size {
        match self {
            AppKind::About | AppKind::Portfolio => Size::new(900.0, 700.0),
            AppKind::System | AppKind::Game | AppKind::RecycleBin => Size::new(640.0, 480.0),
        }
    }
}

/// One application in the catalog
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppEntry {
    /// Stable id, shared by the window and the icon
    pub id: String,
    /// Short title shown under the icon and in the taskbar
    pub title: String,
    /// Caption shown when the icon is selected
    pub full_title: String,
    pub kind: AppKind,
    /// Portfolio category (portfolio entries only)
    #[serde(default)]
    pub category: Option<PortfolioCategory>,
    /// Window size overriding the kind default
    #[serde(default)]
    pub window_size: Option<Size>,
}

impl AppEntry {
    fn new(id: &str, title: &str, full_title: &str, kind: AppKind) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            full_title: full_title.to_string(),
            kind,
            category: None,
            window_size: None,
        }
    }

    fn portfolio(id: &str, title: &str, category: PortfolioCategory, label: &str) -> Self {
        Self {
            category: Some(category),
            ..Self::new(id, title, &format!("{} - {}", title, label), AppKind::Portfolio)
        }
    }

    fn sized(mut self, width: f32, height: f32) -> Self {
        self.window_size = Some(Size::new(width, height));
        self
    }

    /// Window size used on first open
    pub fn window_size(&self) -> Size {
        self.window_size.unwrap_or_else(|| self.kind.default_window_size())
    }

    /// Whether dropping this entry's icon on the recycle bin recycles it
    pub fn is_recyclable(&self) -> bool {
        matches!(self.kind, AppKind::About | AppKind::Portfolio)
    }
}

/// Ordered application catalog
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub apps: Vec<AppEntry>,
}

impl Default for Catalog {
    fn default() -> Self {
        use PortfolioCategory::*;

        Self {
            apps: vec![
                AppEntry::new(ABOUT_ID, "About", "About Rishith Chintala", AppKind::About),
                AppEntry::portfolio("street-photography", "Street Photography", Photography, "Photography Portfolio"),
                AppEntry::portfolio("nature-photography", "Nature Photography", Photography, "Photography Portfolio"),
                AppEntry::portfolio("3d-modeling", "3D Modeling", ThreeD, "3D Design Portfolio"),
                AppEntry::portfolio("digital-art", "Digital Art", TwoD, "2D Design Portfolio"),
                AppEntry::new(RECYCLE_BIN_ID, "Recycle Bin", "Recycle Bin", AppKind::RecycleBin),
                AppEntry::new("ie", "Internet Explorer", "Internet Explorer", AppKind::System),
                AppEntry::new("mydocs", "My Documents", "My Documents", AppKind::System),
                AppEntry::new("mypics", "My Pictures", "My Pictures", AppKind::System),
                AppEntry::new("mymusic", "Windows Media Player", "Windows Media Player", AppKind::System)
                    .sized(900.0, 650.0),
                AppEntry::new("controlpanel", "Control Panel", "Control Panel", AppKind::System),
                AppEntry::new("solitaire", "Solitaire", "Solitaire - Classic Card Game", AppKind::Game)
                    .sized(800.0, 600.0),
                AppEntry::new("minesweeper", "Minesweeper", "Minesweeper - Classic Puzzle Game", AppKind::Game)
                    .sized(640.0, 480.0),
                AppEntry::new("pacman", "PAC-MAN", "PAC-MAN - Classic Arcade Game", AppKind::Game)
                    .sized(650.0, 550.0),
                AppEntry::new("snake", "Snake", "Snake - Classic Retro Game", AppKind::Game),
            ],
        }
    }
}

impl Catalog {
    /// Look up an entry by id
    pub fn get(&self, id: &str) -> Option<&AppEntry> {
        self.apps.iter().find(|app| app.id == id)
    }

    /// All entries in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &AppEntry> {
        self.apps.iter()
    }

    /// Entries of one kind, in catalog order
    pub fn of_kind(&self, kind: AppKind) -> impl Iterator<Item = &AppEntry> {
        self.apps.iter().filter(move |app| app.kind == kind)
    }

    /// Portfolio entries of one category, in catalog order
    pub fn in_category(&self, category: PortfolioCategory) -> impl Iterator<Item = &AppEntry> {
        self.apps
            .iter()
            .filter(move |app| app.kind == AppKind::Portfolio && app.category == Some(category))
    }

    /// Caption for a selected icon (empty for unknown ids)
    pub fn full_title(&self, id: &str) -> &str {
        self.get(id).map(|app| app.full_title.as_str()).unwrap_or("")
    }
}

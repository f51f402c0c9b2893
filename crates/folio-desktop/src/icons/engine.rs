//! Icon layout engine
//!
//! Derives the rendered icon list from the catalog, the recycled set and the
//! user's override positions, and owns the icon drag session. Every change
//! to overrides or the recycled set goes through [`IconLayout::apply`], which
//! returns the side effects the caller must carry out.

use std::collections::{HashMap, HashSet};

use log::debug;

use super::{Icon, IconType, RecycledProgram};
use crate::catalog::{AppEntry, AppKind, Catalog, PortfolioCategory, RECYCLE_BIN_ID};
use crate::config::LayoutConfig;
use crate::layout::{
    about_slot, find_nearest_free_slot, game_slot, is_over_target, portfolio_slot,
    recycle_bin_slot,
};
use crate::math::Vec2;
use crate::persistence::Timestamp;
use crate::viewport::Viewport;

/// Read-only inputs every layout computation needs
#[derive(Clone, Copy, Debug)]
pub struct LayoutContext<'a> {
    pub catalog: &'a Catalog,
    pub viewport: &'a Viewport,
    pub layout: &'a LayoutConfig,
}

/// State transitions accepted by [`IconLayout::apply`]
#[derive(Clone, Debug, PartialEq)]
pub enum IconEvent {
    /// An icon was dropped at `position`; it settles on the nearest free slot.
    Dropped { id: String, position: Vec2 },
    /// Move an icon into the recycle bin.
    Recycle { id: String, now: Timestamp },
    /// Take an icon out of the recycle bin; it returns to its default slot.
    Restore { id: String },
    /// Discard everything in the recycle bin.
    EmptyBin,
    /// Forget every override position.
    ResetOverrides,
}

/// Side effects requested by [`IconLayout::apply`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IconEffect {
    /// Write the override map to storage.
    PersistIconPositions,
    /// Write the recycled list to storage.
    PersistRecycled,
    /// Close the window with this id.
    CloseWindow(String),
}

/// An icon drag in progress
#[derive(Clone, Debug, PartialEq)]
pub struct IconDrag {
    /// Icon being dragged
    pub id: String,
    /// Pointer position minus icon top-left at drag start
    pub offset: Vec2,
    /// Current clamped top-left
    pub live: Vec2,
    /// Whether the icon's center is over the recycle bin
    pub over_bin: bool,
}

/// Icon overrides, recycle bin contents, selection and drag session
#[derive(Clone, Debug, Default)]
pub struct IconLayout {
    overrides: HashMap<String, Vec2>,
    recycled: Vec<RecycledProgram>,
    /// Emptied from the bin this session; stays hidden
    discarded: HashSet<String>,
    drag: Option<IconDrag>,
    selected: Option<String>,
}

impl IconLayout {
    /// Create a layout with no overrides and the given recycled list
    pub fn new(recycled: Vec<RecycledProgram>) -> Self {
        Self {
            recycled,
            ..Self::default()
        }
    }

    /// Override positions keyed by icon id
    pub fn overrides(&self) -> &HashMap<String, Vec2> {
        &self.overrides
    }

    /// Recycle bin contents, oldest first
    pub fn recycled(&self) -> &[RecycledProgram] {
        &self.recycled
    }

    /// Whether `id` is in the recycle bin
    pub fn is_recycled(&self, id: &str) -> bool {
        self.recycled.iter().any(|p| p.id == id)
    }

    /// Whether `id` is hidden from the desktop (recycled or discarded)
    pub fn is_hidden(&self, id: &str) -> bool {
        self.is_recycled(id) || self.discarded.contains(id)
    }

    /// Current drag session
    pub fn drag(&self) -> Option<&IconDrag> {
        self.drag.as_ref()
    }

    /// Selected icon id
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Select an icon (unknown or hidden ids clear the selection)
    pub fn select(&mut self, id: &str, ctx: &LayoutContext<'_>) {
        self.selected = if ctx.catalog.get(id).is_some() && !self.is_hidden(id) {
            Some(id.to_string())
        } else {
            None
        };
    }

    /// Clear the selection
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Canonical slot for an app's icon; `None` for apps without an icon
    ///
    /// Rows are indexed over the full catalog order, so a restored icon lands
    /// exactly where it started even if its neighbours were recycled.
    pub fn default_position(&self, app: &AppEntry, ctx: &LayoutContext<'_>) -> Option<Vec2> {
        match app.kind {
            AppKind::Portfolio => {
                let category = app.category?;
                let row = ctx.catalog.in_category(category).position(|a| a.id == app.id)?;
                Some(portfolio_slot(category.column(), row, ctx.layout))
            }
            AppKind::About => Some(about_slot(ctx.viewport, ctx.layout)),
            AppKind::Game => {
                let index = ctx.catalog.of_kind(AppKind::Game).position(|a| a.id == app.id)?;
                Some(game_slot(index, ctx.viewport, ctx.layout))
            }
            AppKind::RecycleBin => Some(recycle_bin_slot(ctx.viewport, ctx.layout)),
            AppKind::System => None,
        }
    }

    /// Icons to render, in fixed order
    ///
    /// Photography, 3D and 2D columns, then the about icon, the game column
    /// and the recycle bin. Hidden ids are skipped. The dragged icon reports
    /// its live position; the recycle bin never takes an override.
    pub fn list_icons(&self, ctx: &LayoutContext<'_>) -> Vec<Icon> {
        let catalog = ctx.catalog;
        let portfolio = PortfolioCategory::COLUMNS
            .into_iter()
            .flat_map(move |category| catalog.in_category(category));
        let about = catalog.of_kind(AppKind::About);
        let games = catalog.of_kind(AppKind::Game);
        let bin = catalog.of_kind(AppKind::RecycleBin);

        portfolio
            .chain(about)
            .chain(games)
            .chain(bin)
            .filter(|app| !self.is_hidden(&app.id))
            .filter_map(|app| {
                let default = self.default_position(app, ctx)?;
                let position = self.current_position(app, default);
                Some(Icon {
                    id: app.id.clone(),
                    title: app.title.clone(),
                    icon_type: IconType::for_kind(app.kind),
                    category: app.category,
                    x: position.x,
                    y: position.y,
                })
            })
            .collect()
    }

    fn current_position(&self, app: &AppEntry, default: Vec2) -> Vec2 {
        if let Some(drag) = self.drag.as_ref().filter(|d| d.id == app.id) {
            return drag.live;
        }
        if app.kind == AppKind::RecycleBin {
            return default;
        }
        self.overrides.get(&app.id).copied().unwrap_or(default)
    }

    /// Look up one rendered icon
    pub fn icon(&self, id: &str, ctx: &LayoutContext<'_>) -> Option<Icon> {
        self.list_icons(ctx).into_iter().find(|icon| icon.id == id)
    }

    // =========================================================================
    // Drag session
    // =========================================================================

    /// Start dragging a visible icon grabbed at `pointer`
    ///
    /// Returns false (and starts nothing) for hidden or unknown icons.
    pub fn drag_start(&mut self, id: &str, pointer: Vec2, ctx: &LayoutContext<'_>) -> bool {
        let Some(icon) = self.icon(id, ctx) else {
            debug!("[icons] drag_start ignored for {}", id);
            return false;
        };

        let position = icon.position();
        self.drag = Some(IconDrag {
            id: id.to_string(),
            offset: pointer - position,
            live: position,
            over_bin: false,
        });
        debug!("[icons] drag start {}", id);
        true
    }

    /// Move the dragged icon under `pointer`, returning its clamped top-left
    pub fn drag_move(&mut self, pointer: Vec2, ctx: &LayoutContext<'_>) -> Option<Vec2> {
        let max = ctx.viewport.max_icon_origin(ctx.layout);
        let bin = self.icon(RECYCLE_BIN_ID, ctx);

        let drag = self.drag.as_mut()?;
        drag.live = (pointer - drag.offset).clamp(Vec2::ZERO, max);

        let center = drag.live
            + Vec2::new(ctx.layout.icon_size.width, ctx.layout.icon_size.height) * 0.5;
        drag.over_bin = drag.id != RECYCLE_BIN_ID
            && bin.is_some_and(|bin| is_over_target(center, &bin, ctx.layout));

        Some(drag.live)
    }

    /// Finish the drag: recycle when released over the bin, else settle on a free slot
    pub fn drag_end(&mut self, now: Timestamp, ctx: &LayoutContext<'_>) -> Vec<IconEffect> {
        let Some(drag) = self.drag.take() else {
            return Vec::new();
        };

        if drag.over_bin {
            let recyclable = ctx.catalog.get(&drag.id).is_some_and(AppEntry::is_recyclable);
            if !recyclable {
                debug!("[icons] {} cannot be recycled, snapping back", drag.id);
                return Vec::new();
            }
            return self.apply(IconEvent::Recycle { id: drag.id, now }, ctx);
        }

        self.apply(
            IconEvent::Dropped {
                id: drag.id,
                position: drag.live,
            },
            ctx,
        )
    }

    // =========================================================================
    // Reducer
    // =========================================================================

    /// Apply one state transition and return the effects to run
    pub fn apply(&mut self, event: IconEvent, ctx: &LayoutContext<'_>) -> Vec<IconEffect> {
        match event {
            IconEvent::Dropped { id, position } => self.on_dropped(id, position, ctx),
            IconEvent::Recycle { id, now } => self.on_recycle(id, now, ctx),
            IconEvent::Restore { id } => self.on_restore(&id),
            IconEvent::EmptyBin => {
                debug!("[icons] emptying recycle bin ({} items)", self.recycled.len());
                self.discarded
                    .extend(self.recycled.drain(..).map(|program| program.id));
                vec![IconEffect::PersistRecycled]
            }
            IconEvent::ResetOverrides => {
                self.overrides.clear();
                vec![IconEffect::PersistIconPositions]
            }
        }
    }

    fn on_dropped(&mut self, id: String, position: Vec2, ctx: &LayoutContext<'_>) -> Vec<IconEffect> {
        if id == RECYCLE_BIN_ID || self.is_hidden(&id) || ctx.catalog.get(&id).is_none() {
            return Vec::new();
        }

        let icons = self.list_icons(ctx);
        let slot = find_nearest_free_slot(position, &icons, Some(&id), ctx.viewport, ctx.layout);
        debug!("[icons] {} dropped at ({}, {})", id, slot.x, slot.y);

        self.overrides.insert(id, slot);
        vec![IconEffect::PersistIconPositions]
    }

    fn on_recycle(&mut self, id: String, now: Timestamp, ctx: &LayoutContext<'_>) -> Vec<IconEffect> {
        if self.is_hidden(&id) {
            return Vec::new();
        }
        let Some(program) = ctx
            .catalog
            .get(&id)
            .and_then(|app| RecycledProgram::for_app(app, now))
        else {
            return Vec::new();
        };

        debug!("[icons] recycled {}", id);
        self.recycled.push(program);
        if self.selected.as_deref() == Some(id.as_str()) {
            self.selected = None;
        }

        let mut effects = vec![IconEffect::PersistRecycled];
        if self.overrides.remove(&id).is_some() {
            effects.push(IconEffect::PersistIconPositions);
        }
        effects.push(IconEffect::CloseWindow(id));
        effects
    }

    fn on_restore(&mut self, id: &str) -> Vec<IconEffect> {
        let before = self.recycled.len();
        self.recycled.retain(|p| p.id != id);
        if self.recycled.len() == before {
            return Vec::new();
        }

        debug!("[icons] restored {}", id);
        let mut effects = vec![IconEffect::PersistRecycled];
        if self.overrides.remove(id).is_some() {
            effects.push(IconEffect::PersistIconPositions);
        }
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::rects_overlap;

    struct Fixture {
        catalog: Catalog,
        viewport: Viewport,
        layout: LayoutConfig,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                catalog: Catalog::default(),
                viewport: Viewport::new(1920.0, 1080.0),
                layout: LayoutConfig::DEFAULT,
            }
        }

        fn ctx(&self) -> LayoutContext<'_> {
            LayoutContext {
                catalog: &self.catalog,
                viewport: &self.viewport,
                layout: &self.layout,
            }
        }
    }

    fn ids(icons: &[Icon]) -> Vec<&str> {
        icons.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_list_icons_order_and_defaults() {
        let f = Fixture::new();
        let layout = IconLayout::new(Vec::new());
        let icons = layout.list_icons(&f.ctx());

        assert_eq!(
            ids(&icons),
            vec![
                "street-photography",
                "nature-photography",
                "3d-modeling",
                "digital-art",
                "about",
                "solitaire",
                "minesweeper",
                "pacman",
                "snake",
                "recycle",
            ]
        );

        assert!((icons[1].x - 16.0).abs() < 0.001);
        assert!((icons[1].y - 106.0).abs() < 0.001);
        assert!((icons[2].x - 116.0).abs() < 0.001);
        assert!((icons[3].x - 216.0).abs() < 0.001);
        assert!((icons[9].x - 1824.0).abs() < 0.001);
        assert!((icons[9].y - 924.0).abs() < 0.001);
    }

    #[test]
    fn test_default_icons_do_not_overlap() {
        let f = Fixture::new();
        let icons = IconLayout::new(Vec::new()).list_icons(&f.ctx());
        for (i, a) in icons.iter().enumerate() {
            for b in icons.iter().skip(i + 1) {
                assert!(
                    !rects_overlap(a.position(), b.position(), &f.layout),
                    "{} overlaps {}",
                    a.id,
                    b.id
                );
            }
        }
    }

    #[test]
    fn test_recycled_icons_are_filtered() {
        let f = Fixture::new();
        let mut layout = IconLayout::new(Vec::new());
        let effects = layout.apply(
            IconEvent::Recycle {
                id: "street-photography".to_string(),
                now: Timestamp::from_millis(5),
            },
            &f.ctx(),
        );
        assert_eq!(
            effects,
            vec![
                IconEffect::PersistRecycled,
                IconEffect::CloseWindow("street-photography".to_string())
            ]
        );

        let icons = layout.list_icons(&f.ctx());
        assert!(!ids(&icons).contains(&"street-photography"));

        // The remaining photo keeps its canonical row.
        let nature = icons.iter().find(|i| i.id == "nature-photography").unwrap();
        assert!((nature.y - 106.0).abs() < 0.001);
    }

    #[test]
    fn test_recycle_only_about_and_portfolio() {
        let f = Fixture::new();
        let mut layout = IconLayout::new(Vec::new());
        for id in ["solitaire", "recycle", "ie", "nope"] {
            let effects = layout.apply(
                IconEvent::Recycle {
                    id: id.to_string(),
                    now: Timestamp::from_millis(0),
                },
                &f.ctx(),
            );
            assert!(effects.is_empty());
        }
        assert!(layout.recycled().is_empty());
    }

    #[test]
    fn test_recycle_twice_is_noop() {
        let f = Fixture::new();
        let mut layout = IconLayout::new(Vec::new());
        let recycle = IconEvent::Recycle {
            id: "about".to_string(),
            now: Timestamp::from_millis(0),
        };
        layout.apply(recycle.clone(), &f.ctx());
        assert!(layout.apply(recycle, &f.ctx()).is_empty());
        assert_eq!(layout.recycled().len(), 1);
    }

    #[test]
    fn test_restore_returns_to_default_slot() {
        let f = Fixture::new();
        let mut layout = IconLayout::new(Vec::new());
        let ctx = f.ctx();

        layout.apply(
            IconEvent::Dropped {
                id: "digital-art".to_string(),
                position: Vec2::new(700.0, 500.0),
            },
            &ctx,
        );
        layout.apply(
            IconEvent::Recycle {
                id: "digital-art".to_string(),
                now: Timestamp::from_millis(0),
            },
            &ctx,
        );
        assert!(layout.overrides().is_empty());

        let effects = layout.apply(
            IconEvent::Restore {
                id: "digital-art".to_string(),
            },
            &ctx,
        );
        assert_eq!(effects, vec![IconEffect::PersistRecycled]);

        let art = layout.icon("digital-art", &ctx).unwrap();
        assert!((art.x - 216.0).abs() < 0.001);
        assert!((art.y - 16.0).abs() < 0.001);

        assert!(layout
            .apply(IconEvent::Restore { id: "digital-art".to_string() }, &ctx)
            .is_empty());
    }

    #[test]
    fn test_empty_bin_keeps_icons_hidden() {
        let f = Fixture::new();
        let mut layout = IconLayout::new(Vec::new());
        let ctx = f.ctx();
        layout.apply(
            IconEvent::Recycle {
                id: "about".to_string(),
                now: Timestamp::from_millis(0),
            },
            &ctx,
        );

        assert_eq!(layout.apply(IconEvent::EmptyBin, &ctx), vec![IconEffect::PersistRecycled]);
        assert!(layout.recycled().is_empty());
        assert!(layout.icon("about", &ctx).is_none());
        assert!(layout
            .apply(IconEvent::Restore { id: "about".to_string() }, &ctx)
            .is_empty());
    }

    #[test]
    fn test_drop_on_occupied_slot_moves_away() {
        let f = Fixture::new();
        let mut layout = IconLayout::new(Vec::new());
        let ctx = f.ctx();

        // street-photography sits at (16, 16)
        layout.apply(
            IconEvent::Dropped {
                id: "digital-art".to_string(),
                position: Vec2::new(16.0, 16.0),
            },
            &ctx,
        );

        let art = layout.overrides()["digital-art"];
        assert!(!rects_overlap(art, Vec2::new(16.0, 16.0), &f.layout));
    }

    #[test]
    fn test_drag_clamps_and_detects_bin() {
        let f = Fixture::new();
        let mut layout = IconLayout::new(Vec::new());
        let ctx = f.ctx();

        // Grab about at its center
        assert!(layout.drag_start("about", Vec2::new(960.0, 490.0), &ctx));

        let live = layout.drag_move(Vec2::new(-500.0, -500.0), &ctx).unwrap();
        assert!((live.x - 0.0).abs() < 0.001);
        assert!((live.y - 0.0).abs() < 0.001);
        assert!(!layout.drag().unwrap().over_bin);

        // Center of the dragged icon over the bin's center (1864, 969)
        layout.drag_move(Vec2::new(1864.0, 969.0), &ctx);
        assert!(layout.drag().unwrap().over_bin);

        let effects = layout.drag_end(Timestamp::from_millis(42), &ctx);
        assert!(effects.contains(&IconEffect::CloseWindow("about".to_string())));
        assert_eq!(layout.recycled()[0].deleted_at.as_millis(), 42);
        assert!(layout.drag().is_none());
    }

    #[test]
    fn test_non_recyclable_drop_on_bin_snaps_back() {
        let f = Fixture::new();
        let mut layout = IconLayout::new(Vec::new());
        let ctx = f.ctx();

        assert!(layout.drag_start("snake", Vec2::new(1830.0, 300.0), &ctx));
        layout.drag_move(Vec2::new(1870.0, 960.0), &ctx);
        assert!(layout.drag().unwrap().over_bin);

        assert!(layout.drag_end(Timestamp::from_millis(0), &ctx).is_empty());
        let snake = layout.icon("snake", &ctx).unwrap();
        assert!((snake.y - 286.0).abs() < 0.001);
    }

    #[test]
    fn test_bin_is_never_moved() {
        let f = Fixture::new();
        let mut layout = IconLayout::new(Vec::new());
        let ctx = f.ctx();

        assert!(layout.drag_start("recycle", Vec2::new(1830.0, 930.0), &ctx));
        layout.drag_move(Vec2::new(400.0, 400.0), &ctx);
        assert!(!layout.drag().unwrap().over_bin);
        assert!(layout.drag_end(Timestamp::from_millis(0), &ctx).is_empty());

        let bin = layout.icon("recycle", &ctx).unwrap();
        assert!((bin.x - 1824.0).abs() < 0.001);
    }

    #[test]
    fn test_selection() {
        let f = Fixture::new();
        let mut layout = IconLayout::new(Vec::new());
        let ctx = f.ctx();

        layout.select("pacman", &ctx);
        assert_eq!(layout.selected(), Some("pacman"));
        layout.select("missing", &ctx);
        assert_eq!(layout.selected(), None);

        layout.select("about", &ctx);
        layout.apply(
            IconEvent::Recycle {
                id: "about".to_string(),
                now: Timestamp::from_millis(0),
            },
            &ctx,
        );
        assert_eq!(layout.selected(), None);
    }
}

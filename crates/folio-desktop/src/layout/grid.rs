//! Grid snapping and icon collision search

use crate::config::LayoutConfig;
use crate::icons::Icon;
use crate::math::{Rect, Vec2};
use crate::viewport::Viewport;

/// Round a single coordinate to the nearest grid multiple, halves rounding up
///
/// A non-positive grid leaves the value as is.
#[inline]
fn snap(value: f32, grid: f32) -> f32 {
    if grid > 0.0 {
        (value / grid + 0.5).floor() * grid
    } else {
        value
    }
}

/// Snap a point to the nearest grid intersection
pub fn snap_to_grid(x: f32, y: f32, layout: &LayoutConfig) -> Vec2 {
    Vec2::new(snap(x, layout.grid_size), snap(y, layout.grid_size))
}

/// Whether two icon-sized boxes at `a` and `b` overlap
///
/// Half-open: icons that share an edge do not collide.
pub fn rects_overlap(a: Vec2, b: Vec2, layout: &LayoutConfig) -> bool {
    let a = Rect::from_pos_size(a, layout.icon_size);
    let b = Rect::from_pos_size(b, layout.icon_size);
    a.intersects(&b)
}

/// Whether an icon placed at `pos` would overlap any icon other than `exclude_id`
fn collides(pos: Vec2, icons: &[Icon], exclude_id: Option<&str>, layout: &LayoutConfig) -> bool {
    icons
        .iter()
        .filter(|icon| Some(icon.id.as_str()) != exclude_id)
        .any(|icon| rects_overlap(pos, icon.position(), layout))
}

/// Find the closest collision-free, grid-aligned slot for an icon dropped at `target`
///
/// Tries the snapped target first, then rings of growing radius (one grid
/// unit per ring) sampled every `search_angle_step` degrees. Candidates must
/// fit in the work area. When every ring is exhausted the snapped target is
/// returned even though it collides.
pub fn find_nearest_free_slot(
    target: Vec2,
    icons: &[Icon],
    exclude_id: Option<&str>,
    viewport: &Viewport,
    layout: &LayoutConfig,
) -> Vec2 {
    let snapped = snap_to_grid(target.x, target.y, layout);
    if !collides(snapped, icons, exclude_id, layout) || !layout.has_search_rings() {
        return snapped;
    }

    let max_origin = viewport.max_icon_origin(layout);
    let samples = (360.0 / layout.search_angle_step).round().max(1.0) as u32;
    let mut radius = layout.grid_size;

    while radius < layout.max_search_radius {
        for step in 0..samples {
            let angle = (step as f32 * layout.search_angle_step).to_radians();
            let candidate = snap_to_grid(
                snapped.x + angle.cos() * radius,
                snapped.y + angle.sin() * radius,
                layout,
            );

            let in_bounds = candidate.x >= 0.0
                && candidate.y >= 0.0
                && candidate.x <= max_origin.x
                && candidate.y <= max_origin.y;

            if in_bounds && !collides(candidate, icons, exclude_id, layout) {
                return candidate;
            }
        }
        radius += layout.grid_size;
    }

    log::debug!(
        "no free icon slot within {}px of ({}, {}), keeping snapped target",
        layout.max_search_radius,
        snapped.x,
        snapped.y
    );
    snapped
}

/// Whether `point` lies on `target`'s icon box, edges included
pub fn is_over_target(point: Vec2, target: &Icon, layout: &LayoutConfig) -> bool {
    Rect::from_pos_size(target.position(), layout.icon_size).contains_inclusive(point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::IconType;

    fn icon(id: &str, x: f32, y: f32) -> Icon {
        Icon {
            id: id.to_string(),
            title: id.to_string(),
            icon_type: IconType::Portfolio,
            category: None,
            x,
            y,
        }
    }

    #[test]
    fn test_snap_to_grid() {
        let layout = LayoutConfig::DEFAULT;
        let p = snap_to_grid(16.0, 29.0, &layout);
        assert!((p.x - 20.0).abs() < 0.001);
        assert!((p.y - 20.0).abs() < 0.001);

        let half = snap_to_grid(30.0, 50.0, &layout);
        assert!((half.x - 40.0).abs() < 0.001);
        assert!((half.y - 60.0).abs() < 0.001);
    }

    #[test]
    fn test_rects_overlap_half_open() {
        let layout = LayoutConfig::DEFAULT;
        assert!(rects_overlap(Vec2::new(0.0, 0.0), Vec2::new(79.0, 89.0), &layout));
        assert!(!rects_overlap(Vec2::new(0.0, 0.0), Vec2::new(80.0, 0.0), &layout));
        assert!(!rects_overlap(Vec2::new(0.0, 0.0), Vec2::new(0.0, 90.0), &layout));
    }

    #[test]
    fn test_free_target_is_returned_snapped() {
        let layout = LayoutConfig::DEFAULT;
        let icons = vec![icon("a", 16.0, 16.0)];
        let slot = find_nearest_free_slot(
            Vec2::new(503.0, 398.0),
            &icons,
            None,
            &Viewport::default(),
            &layout,
        );
        assert!((slot.x - 500.0).abs() < 0.001);
        assert!((slot.y - 400.0).abs() < 0.001);
    }

    #[test]
    fn test_colliding_drop_moves_to_free_slot() {
        let layout = LayoutConfig::DEFAULT;
        let icons = vec![icon("a", 16.0, 16.0), icon("b", 300.0, 300.0)];
        let slot = find_nearest_free_slot(
            Vec2::new(16.0, 16.0),
            &icons,
            Some("b"),
            &Viewport::default(),
            &layout,
        );

        assert!(slot.x != 16.0 || slot.y != 16.0);
        assert!(!rects_overlap(slot, Vec2::new(16.0, 16.0), &layout));
        assert!((slot.x / layout.grid_size).fract().abs() < 0.001);
        assert!((slot.y / layout.grid_size).fract().abs() < 0.001);
    }

    #[test]
    fn test_excluded_icon_does_not_block_itself() {
        let layout = LayoutConfig::DEFAULT;
        let icons = vec![icon("a", 20.0, 20.0)];
        let slot = find_nearest_free_slot(
            Vec2::new(22.0, 18.0),
            &icons,
            Some("a"),
            &Viewport::default(),
            &layout,
        );
        assert!((slot.x - 20.0).abs() < 0.001);
        assert!((slot.y - 20.0).abs() < 0.001);
    }

    #[test]
    fn test_exhausted_search_falls_back_to_snapped_target() {
        // Viewport exactly one icon big: every ring candidate is out of bounds.
        let layout = LayoutConfig::DEFAULT;
        let viewport = Viewport::new(80.0, 90.0 + layout.taskbar_height);
        let icons = vec![icon("a", 0.0, 0.0)];
        let slot = find_nearest_free_slot(Vec2::new(3.0, 4.0), &icons, None, &viewport, &layout);
        assert!((slot.x - 0.0).abs() < 0.001);
        assert!((slot.y - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_zero_grid_keeps_target_without_searching() {
        let layout = LayoutConfig {
            grid_size: 0.0,
            ..LayoutConfig::DEFAULT
        };
        let icons = vec![icon("a", 100.0, 100.0)];
        let slot = find_nearest_free_slot(
            Vec2::new(103.0, 104.0),
            &icons,
            None,
            &Viewport::default(),
            &layout,
        );
        assert!((slot.x - 103.0).abs() < 0.001);
        assert!((slot.y - 104.0).abs() < 0.001);
    }

    #[test]
    fn test_is_over_target() {
        let layout = LayoutConfig::DEFAULT;
        let bin = icon("recycle", 1824.0, 924.0);
        assert!(is_over_target(Vec2::new(1864.0, 969.0), &bin, &layout));
        assert!(is_over_target(Vec2::new(1904.0, 1014.0), &bin, &layout));
        assert!(!is_over_target(Vec2::new(1800.0, 969.0), &bin, &layout));
    }
}

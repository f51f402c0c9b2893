//! Icon selection, activation and the recycle bin

use log::debug;

use crate::icons::{Icon, IconEffect, IconEvent};
use crate::persistence::KeyValueStore;
use super::{layout_ctx, DesktopEngine};

impl<S: KeyValueStore> DesktopEngine<S> {
    /// Icons to render, in fixed order
    pub fn list_icons(&self) -> Vec<Icon> {
        self.icons.list_icons(&self.layout_context())
    }

    /// Select an icon
    pub fn select_icon(&mut self, id: &str) {
        let ctx = layout_ctx(&self.config, &self.viewport);
        self.icons.select(id, &ctx);
    }

    /// Click on empty desktop
    pub fn clear_selection(&mut self) {
        self.icons.clear_selection();
        self.start_menu_open = false;
    }

    /// Caption for the selected icon
    pub fn selected_caption(&self) -> Option<&str> {
        self.icons
            .selected()
            .map(|id| self.config.catalog.full_title(id))
    }

    /// Double click on an icon opens its window
    ///
    /// Ignored while a drag is in progress, and for hidden icons.
    pub fn double_click(&mut self, id: &str) -> bool {
        if self.input.state().is_dragging() || self.icons.is_hidden(id) {
            debug!("[icons] double click on {} ignored", id);
            return false;
        }
        self.open_window(id)
    }

    /// Take a program out of the recycle bin
    pub fn restore_program(&mut self, id: &str) {
        self.apply_icon_event(IconEvent::Restore { id: id.to_string() });
    }

    /// Discard everything in the recycle bin
    pub fn empty_recycle_bin(&mut self) {
        self.apply_icon_event(IconEvent::EmptyBin);
    }

    pub(crate) fn apply_icon_event(&mut self, event: IconEvent) -> Vec<IconEffect> {
        let ctx = layout_ctx(&self.config, &self.viewport);
        let effects = self.icons.apply(event, &ctx);
        self.run_icon_effects(&effects);
        effects
    }

    /// Carry out effects returned by the icon reducer
    pub(crate) fn run_icon_effects(&mut self, effects: &[IconEffect]) {
        for effect in effects {
            match effect {
                IconEffect::PersistIconPositions => {
                    self.persistence.save_icon_positions(self.icons.overrides());
                }
                IconEffect::PersistRecycled => {
                    self.persistence.save_recycled_programs(self.icons.recycled());
                }
                IconEffect::CloseWindow(id) => self.windows.close(id),
            }
        }
    }
}

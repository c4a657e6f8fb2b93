//! Navigation shell: tab strip, header menu affordance and drawer overlay.
//!
//! The shell owns the drawer state for as long as it is mounted. Navigation
//! and session changes are delegated to the collaborators passed into each
//! call, so the shell itself never holds the location or the session.

use std::time::{Duration, Instant};

use crate::config::{Config, Destination, MenuEntry};
use crate::nav::route::normalize;
use crate::nav::{active_destination, active_menu_entry, Navigator};
use crate::session::SessionControl;
use crate::ui::drawer::{
    DrawerFrame, DrawerGeometry, DrawerIntent, DrawerMotion, DrawerReducer, DrawerState,
    DrawerTarget,
};
use crate::ui::mvi::{dispatch_mvi, Reducer};
use crate::ui::side_menu::{menu_rows, MenuEvent, MenuRow};

pub struct NavigationShell {
    brand: String,
    entry_path: String,
    destinations: Vec<Destination>,
    menu: Vec<MenuEntry>,
    geometry: DrawerGeometry,
    drawer: DrawerState,
    /// Explicit keyboard cursor; `None` follows the active row.
    menu_cursor: Option<usize>,
    mounted: bool,
}

impl NavigationShell {
    /// Mount the shell with a closed drawer. The drawer width is fixed from
    /// `viewport_width` here and not re-derived on resize.
    pub fn mount(config: &Config, viewport_width: u16) -> Self {
        let motion = DrawerMotion {
            duration: Duration::from_millis(config.shell.transition_ms),
            easing: config.shell.easing,
        };
        let geometry = DrawerGeometry::from_viewport(viewport_width, config.shell.drawer_width_ratio);
        tracing::debug!(drawer_width = geometry.width(), "Shell mounted");
        Self {
            brand: config.shell.title.clone(),
            entry_path: config.routes.entry.clone(),
            destinations: config.destinations.clone(),
            menu: config.menu.clone(),
            geometry,
            drawer: DrawerState::new(motion),
            menu_cursor: None,
            mounted: true,
        }
    }

    /// Discard any in-flight transition. No frame updates happen afterwards.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        if self.drawer.is_animating() {
            tracing::debug!("Shell unmounted mid-transition, discarding");
        }
        self.dispatch_drawer(DrawerIntent::Reset);
        self.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn geometry(&self) -> DrawerGeometry {
        self.geometry
    }

    /// Drawer width in terminal columns.
    pub fn drawer_columns(&self) -> u16 {
        self.geometry.width().clamp(0.0, f32::from(u16::MAX)) as u16
    }

    pub fn drawer(&self) -> &DrawerState {
        &self.drawer
    }

    /// Derived transforms for the frame drawn at `now`.
    pub fn frame(&self, now: Instant) -> DrawerFrame {
        self.geometry.frame(self.drawer.progress(now))
    }

    /// True while frame ticks are needed to advance the transition.
    pub fn needs_frames(&self) -> bool {
        self.mounted && self.drawer.is_animating()
    }

    /// Header menu button.
    pub fn toggle_drawer(&mut self, now: Instant) {
        if !self.mounted {
            return;
        }
        self.dispatch_drawer(DrawerIntent::Toggle { now });
        self.menu_cursor = None;
        tracing::debug!(target = ?self.drawer.target(), "Drawer toggled");
    }

    pub fn close_drawer(&mut self, now: Instant) {
        if !self.mounted {
            return;
        }
        self.dispatch_drawer(DrawerIntent::Close { now });
    }

    /// Tap on the dismiss surface. Ignored when the surface is absent.
    pub fn dismiss(&mut self, now: Instant) -> bool {
        if !self.mounted || !self.frame(now).dismiss_surface {
            return false;
        }
        self.close_drawer(now);
        true
    }

    /// Frame tick. Returns whether another frame is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.mounted {
            return false;
        }
        self.dispatch_drawer(DrawerIntent::Tick { now });
        self.drawer.is_animating()
    }

    /// True when the drawer is open or opening and should take key input.
    pub fn drawer_has_focus(&self) -> bool {
        self.mounted && self.drawer.target() == DrawerTarget::Open
    }

    // ========================================================================
    // Tab strip
    // ========================================================================

    pub fn active_tab(&self, location: &str) -> usize {
        active_destination(&self.destinations, location)
    }

    /// Push the tab's path unless it is already the active tab.
    pub fn select_tab(&mut self, index: usize, nav: &mut impl Navigator) -> bool {
        let Some(destination) = self.destinations.get(index) else {
            return false;
        };
        if self.active_tab(nav.current_location()) == index
            && normalize(nav.current_location()) == normalize(&destination.path)
        {
            return false;
        }
        nav.navigate_to(&destination.path);
        true
    }

    // ========================================================================
    // Side menu
    // ========================================================================

    pub fn menu_rows(&self, location: &str) -> Vec<MenuRow> {
        menu_rows(&self.menu, location)
    }

    /// Top-level menu entry highlighted for `location`, if any.
    pub fn highlighted_menu_entry(&self, location: &str) -> Option<&MenuEntry> {
        active_menu_entry(&self.menu, location).and_then(|idx| self.menu.get(idx))
    }

    /// Row under the keyboard cursor.
    pub fn menu_cursor(&self, location: &str) -> usize {
        let rows = self.menu_rows(location);
        let fallback = rows
            .iter()
            .rposition(|row| row.active)
            .unwrap_or(0);
        self.menu_cursor
            .unwrap_or(fallback)
            .min(rows.len().saturating_sub(1))
    }

    /// Move the cursor, wrapping around at both ends.
    pub fn move_menu_cursor(&mut self, delta: i32, location: &str) {
        let len = self.menu_rows(location).len();
        if len == 0 {
            return;
        }
        let current = self.menu_cursor(location);
        let next = if delta.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };
        self.menu_cursor = Some(next);
    }

    /// Event for the row at `index`, e.g. under a mouse click.
    pub fn menu_row_event(&self, index: usize, location: &str) -> Option<MenuEvent> {
        self.menu_rows(location).get(index).map(MenuRow::event)
    }

    /// Event for the row under the cursor.
    pub fn activate_menu_cursor(&self, location: &str) -> Option<MenuEvent> {
        let rows = self.menu_rows(location);
        rows.get(self.menu_cursor(location)).map(MenuRow::event)
    }

    /// Apply a side-menu event.
    ///
    /// Navigation and drawer close happen in the same step. Logout clears
    /// the session before replacing the location, so the guard re-evaluates
    /// against the cleared session.
    pub fn handle_menu_event(
        &mut self,
        event: MenuEvent,
        session: &impl SessionControl,
        nav: &mut impl Navigator,
        now: Instant,
    ) {
        match event {
            MenuEvent::Navigate(path) => {
                if normalize(nav.current_location()) != normalize(&path) {
                    nav.navigate_to(&path);
                }
                self.close_drawer(now);
                self.menu_cursor = None;
            }
            MenuEvent::Logout => {
                session.logout();
                nav.replace_location(&self.entry_path);
                self.close_drawer(now);
            }
            MenuEvent::Close => self.close_drawer(now),
        }
    }

    fn dispatch_drawer(&mut self, intent: DrawerIntent) {
        dispatch_mvi!(self, drawer, DrawerReducer, intent);
    }
}

use serde::Serialize;
use shared::domain::Page;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    pub active_page: Page,
    pub mobile_menu_open: bool,
}

/// Active page plus the ephemeral chrome flags. Every page is reachable from
/// every other page.
#[derive(Debug, Clone, Default)]
pub struct NavigationController {
    state: NavigationState,
    scroll_offset: u32,
}

impl NavigationController {
    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn active_page(&self) -> Page {
        self.state.active_page
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.state.mobile_menu_open
    }

    pub fn scroll_offset(&self) -> u32 {
        self.scroll_offset
    }

    pub fn navigate(&mut self, page: Page) {
        debug!(from = %self.state.active_page, to = %page, "nav: showing page");
        self.state.active_page = page;
        self.state.mobile_menu_open = false;
        self.scroll_offset = 0;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.state.mobile_menu_open = !self.state.mobile_menu_open;
    }

    pub fn record_scroll(&mut self, offset: u32) {
        self.scroll_offset = offset;
    }
}

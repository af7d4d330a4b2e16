use shared::domain::Page;

use crate::{
    contact::ContactForm, filter::FilterState, lightbox::LightboxController,
    navigation::NavigationController,
};

/// Everything a single page instance owns. Lost on reload.
#[derive(Debug, Clone, Default)]
pub struct PageSession {
    pub navigation: NavigationController,
    /// Kept when navigating away from the portfolio and back.
    pub filter: FilterState,
    pub lightbox: LightboxController,
    pub contact: ContactForm,
}

impl PageSession {
    pub fn navigate(&mut self, page: Page) {
        self.navigation.navigate(page);
        // The viewer belongs to the portfolio page and never outlives it.
        self.lightbox.close();
    }
}

use shared::content::PortfolioItem;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LightboxState {
    #[default]
    Closed,
    Open(PortfolioItem),
}

/// Where a click landed while the viewer is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxTarget {
    DismissButton,
    Backdrop,
    /// The image swallows the click so it never reaches the backdrop.
    Image,
}

#[derive(Debug, Clone, Default)]
pub struct LightboxController {
    state: LightboxState,
}

impl LightboxController {
    pub fn state(&self) -> &LightboxState {
        &self.state
    }

    pub fn selected(&self) -> Option<&PortfolioItem> {
        match &self.state {
            LightboxState::Open(item) => Some(item),
            LightboxState::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open(_))
    }

    pub fn open(&mut self, item: PortfolioItem) {
        self.state = LightboxState::Open(item);
    }

    pub fn close(&mut self) {
        self.state = LightboxState::Closed;
    }

    /// Returns `true` when the click dismissed the viewer.
    pub fn handle_click(&mut self, target: LightboxTarget) -> bool {
        if !self.is_open() {
            return false;
        }
        match target {
            LightboxTarget::DismissButton | LightboxTarget::Backdrop => {
                self.close();
                true
            }
            LightboxTarget::Image => false,
        }
    }
}

#[cfg(test)]
#[path = "tests/lightbox_tests.rs"]
mod tests;

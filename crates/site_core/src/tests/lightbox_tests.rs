use super::*;

use shared::domain::Category;

fn item(image: &str) -> PortfolioItem {
    PortfolioItem::new(image, image, Category::Portraits)
}

#[test]
fn open_then_close_leaves_nothing_selected() {
    let mut lightbox = LightboxController::default();
    lightbox.open(item("a.jpg"));
    assert_eq!(lightbox.selected(), Some(&item("a.jpg")));

    lightbox.close();
    assert_eq!(lightbox.state(), &LightboxState::Closed);
    assert_eq!(lightbox.selected(), None);
}

#[test]
fn last_open_wins() {
    let mut lightbox = LightboxController::default();
    lightbox.open(item("a.jpg"));
    lightbox.open(item("b.jpg"));
    assert_eq!(lightbox.selected(), Some(&item("b.jpg")));

    // No stacking: one close returns to the initial state.
    lightbox.close();
    assert!(!lightbox.is_open());
}

#[test]
fn reopening_same_item_is_idempotent() {
    let mut lightbox = LightboxController::default();
    lightbox.open(item("a.jpg"));
    let before = lightbox.state().clone();
    lightbox.open(item("a.jpg"));
    assert_eq!(lightbox.state(), &before);
}

#[test]
fn close_when_closed_is_a_no_op() {
    let mut lightbox = LightboxController::default();
    lightbox.close();
    lightbox.close();
    assert_eq!(lightbox.state(), &LightboxState::Closed);
}

#[test]
fn dismiss_button_and_backdrop_close_but_image_does_not() {
    let mut lightbox = LightboxController::default();
    lightbox.open(item("a.jpg"));

    assert!(!lightbox.handle_click(LightboxTarget::Image));
    assert!(lightbox.is_open());

    assert!(lightbox.handle_click(LightboxTarget::Backdrop));
    assert!(!lightbox.is_open());

    lightbox.open(item("a.jpg"));
    assert!(lightbox.handle_click(LightboxTarget::DismissButton));
    assert!(!lightbox.is_open());
}

#[test]
fn clicks_while_closed_change_nothing() {
    let mut lightbox = LightboxController::default();
    for target in [
        LightboxTarget::DismissButton,
        LightboxTarget::Backdrop,
        LightboxTarget::Image,
    ] {
        assert!(!lightbox.handle_click(target));
        assert_eq!(lightbox.state(), &LightboxState::Closed);
    }
}

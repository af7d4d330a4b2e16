use super::*;

use shared::{
    content::{AboutContent, HeroContent, PortfolioCollection},
    domain::Category,
};

fn loaded_portfolio() -> PortfolioCollection {
    PortfolioCollection::new(vec![
        PortfolioItem::new("w1.jpg", "Vows", Category::Weddings),
        PortfolioItem::new("e1.jpg", "Gala", Category::Events),
        PortfolioItem::new("p1.jpg", "Studio", Category::Portraits),
        PortfolioItem::new("w2.jpg", "Toast", Category::Weddings),
        PortfolioItem::new("e2.jpg", "Launch", Category::Events),
    ])
}

fn session_on(page: Page) -> PageSession {
    let mut session = PageSession::default();
    session.navigate(page);
    session
}

fn expect_home(frame: Frame) -> HomeView {
    match frame.page {
        PageView::Home(view) => view,
        other => panic!("expected home page, got {other:?}"),
    }
}

fn expect_portfolio(frame: Frame) -> PortfolioView {
    match frame.page {
        PageView::Portfolio(view) => view,
        other => panic!("expected portfolio page, got {other:?}"),
    }
}

fn expect_about(frame: Frame) -> AboutView {
    match frame.page {
        PageView::About(view) => view,
        other => panic!("expected about page, got {other:?}"),
    }
}

#[test]
fn empty_store_renders_stock_content_on_every_page() {
    let content = ContentSnapshot::default();

    let home = expect_home(compose(&session_on(Page::Home), &content));
    assert_eq!(home.hero.image, fallback::HERO_IMAGE);
    assert_eq!(home.hero.subtitle, fallback::HERO_SUBTITLE);
    assert_eq!(home.featured, fallback::featured_items());
    assert_eq!(home.about_preview.paragraphs.len(), 2);

    let portfolio = expect_portfolio(compose(&session_on(Page::Portfolio), &content));
    assert!(portfolio.stock);
    assert_eq!(portfolio.items, fallback::portfolio_items());

    let about = expect_about(compose(&session_on(Page::About), &content));
    assert_eq!(about.image, fallback::ABOUT_PAGE_IMAGE);
    assert_eq!(about.paragraphs, fallback::ABOUT_PAGE_PARAGRAPHS.to_vec());
}

#[test]
fn loaded_content_replaces_fallbacks() {
    let content = ContentSnapshot {
        hero: Some(HeroContent {
            hero_image: Some("/img/hero.jpg".into()),
            hero_subtitle: Some("Light and stories".into()),
        }),
        about: Some(AboutContent {
            about_image: Some("/img/me.jpg".into()),
            about_text: Some("One.\n\nTwo.\n\nThree.".into()),
        }),
        portfolio: Some(loaded_portfolio()),
    };

    let home = expect_home(compose(&session_on(Page::Home), &content));
    assert_eq!(home.hero.image, "/img/hero.jpg");
    assert_eq!(home.hero.subtitle, "Light and stories");
    assert_eq!(home.featured, loaded_portfolio().items()[..4].to_vec());
    assert_eq!(home.about_preview.image, "/img/me.jpg");
    assert_eq!(home.about_preview.paragraphs, vec!["One.", "Two.", "Three."]);

    let about = expect_about(compose(&session_on(Page::About), &content));
    assert_eq!(about.paragraphs, vec!["One.", "Two.", "Three."]);
}

#[test]
fn partially_filled_hero_falls_back_per_field() {
    let content = ContentSnapshot {
        hero: Some(HeroContent {
            hero_image: Some("/img/hero.jpg".into()),
            hero_subtitle: Some(String::new()),
        }),
        ..ContentSnapshot::default()
    };
    let home = expect_home(compose(&session_on(Page::Home), &content));
    assert_eq!(home.hero.image, "/img/hero.jpg");
    assert_eq!(home.hero.subtitle, fallback::HERO_SUBTITLE);
}

#[test]
fn empty_loaded_portfolio_shows_no_items_not_stock() {
    let content = ContentSnapshot {
        portfolio: Some(PortfolioCollection::default()),
        ..ContentSnapshot::default()
    };

    let portfolio = expect_portfolio(compose(&session_on(Page::Portfolio), &content));
    assert!(!portfolio.stock);
    assert!(portfolio.items.is_empty());

    let home = expect_home(compose(&session_on(Page::Home), &content));
    assert_eq!(home.featured, fallback::featured_items());
}

#[test]
fn portfolio_page_marks_selected_filter_and_lightbox() {
    let content = ContentSnapshot {
        portfolio: Some(loaded_portfolio()),
        ..ContentSnapshot::default()
    };
    let mut session = session_on(Page::Portfolio);
    session.filter.select(CategoryFilter::Events);
    session
        .lightbox
        .open(PortfolioItem::new("e2.jpg", "Launch", Category::Events));

    let view = expect_portfolio(compose(&session, &content));
    let active: Vec<CategoryFilter> = view
        .filters
        .iter()
        .filter(|button| button.active)
        .map(|button| button.filter)
        .collect();
    assert_eq!(active, vec![CategoryFilter::Events]);
    assert_eq!(
        view.items
            .iter()
            .map(|item| item.image.as_str())
            .collect::<Vec<_>>(),
        vec!["e1.jpg", "e2.jpg"]
    );
    assert_eq!(
        view.lightbox.map(|item| item.image),
        Some("e2.jpg".to_string())
    );
}

#[test]
fn nav_marks_active_page_and_menu_state() {
    let mut session = session_on(Page::Services);
    session.navigation.toggle_mobile_menu();
    let frame = compose(&session, &ContentSnapshot::default());

    assert!(frame.nav.mobile_menu_open);
    assert_eq!(frame.nav.links.len(), Page::ALL.len());
    let active: Vec<Page> = frame
        .nav
        .links
        .iter()
        .filter(|link| link.active)
        .map(|link| link.page)
        .collect();
    assert_eq!(active, vec![Page::Services]);
    assert!(matches!(frame.page, PageView::Services(ref view) if view.services.len() == 3));
}

#[test]
fn contact_page_reflects_form_draft() {
    let mut session = session_on(Page::Contact);
    session
        .contact
        .update(crate::contact::ContactField::Name, "Ada")
        .expect("name");

    match compose(&session, &ContentSnapshot::default()).page {
        PageView::Contact(view) => {
            assert_eq!(view.form.name, "Ada");
            assert!(!view.submitting);
            assert_eq!(view.email, CONTACT_EMAIL);
        }
        other => panic!("expected contact page, got {other:?}"),
    }
}

#[test]
fn frame_serializes_with_page_tag() {
    let frame = compose(&session_on(Page::About), &ContentSnapshot::default());
    let json = serde_json::to_value(&frame).expect("serialize");
    assert_eq!(json["page"]["page"], "about");
    assert_eq!(json["footer"]["admin_panel_url"], ADMIN_PANEL_URL);
}

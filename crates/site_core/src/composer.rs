//! Turns session state plus loaded content into the view model for one frame.
//!
//! The only decision made here is which page to build; every missing content
//! value is resolved through [`crate::fallback`].

use serde::Serialize;
use shared::{
    content::PortfolioItem,
    domain::{CategoryFilter, Page},
};

use crate::{
    contact::Inquiry,
    fallback::{self, resolve_paragraphs, resolve_text},
    session::PageSession,
    store::ContentSnapshot,
};

const FEATURED_COUNT: usize = 4;
const ABOUT_INTRO: &str =
    "Hi, I'm Braden Blackburn, a photographer passionate about capturing the beauty in everyday moments.";
const CONTACT_EMAIL: &str = "contact@bradenblackburn.com";
const CONTACT_PHONE: &str = "(123) 456-7890";
const COPYRIGHT: &str = "© 2024 Braden Blackburn Photography. All rights reserved.";
const ADMIN_PANEL_URL: &str = "/BradensWebsite/admin/";

const HOME_SERVICES: [(&str, &str); 3] = [
    ("Weddings", "Complete photography coverage"),
    ("Portraits", "Complete photography coverage"),
    ("Events", "Complete photography coverage"),
];
const SERVICES: [(&str, &str); 3] = [
    (
        "Weddings",
        "Complete coverage of your special day from preparation to celebration",
    ),
    (
        "Portraits",
        "Individual, couple, and family sessions tailored to your style",
    ),
    (
        "Events",
        "Corporate and private event photography capturing every moment",
    ),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub nav: NavView,
    pub page: PageView,
    pub footer: FooterView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavView {
    pub links: Vec<NavLink>,
    pub mobile_menu_open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub page: Page,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageView {
    Home(HomeView),
    Portfolio(PortfolioView),
    About(AboutView),
    Services(ServicesView),
    Contact(ContactView),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroView {
    pub image: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AboutPreview {
    pub image: String,
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceCard {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeView {
    pub hero: HeroView,
    pub featured: Vec<PortfolioItem>,
    pub about_preview: AboutPreview,
    pub services: Vec<ServiceCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterButton {
    pub filter: CategoryFilter,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortfolioView {
    pub filters: Vec<FilterButton>,
    pub items: Vec<PortfolioItem>,
    /// Set while the real collection has not loaded and stock images stand in.
    pub stock: bool,
    pub lightbox: Option<PortfolioItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AboutView {
    pub image: String,
    pub intro: &'static str,
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServicesView {
    pub services: Vec<ServiceCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactView {
    pub email: &'static str,
    pub phone: &'static str,
    pub form: Inquiry,
    pub submitting: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterView {
    pub copyright: &'static str,
    pub admin_panel_url: &'static str,
}

/// Portfolio items to show, and whether they are the stock stand-ins.
pub fn resolved_portfolio(content: &ContentSnapshot) -> (Vec<PortfolioItem>, bool) {
    match &content.portfolio {
        Some(collection) => (collection.items().to_vec(), false),
        None => (fallback::portfolio_items(), true),
    }
}

pub fn compose(session: &PageSession, content: &ContentSnapshot) -> Frame {
    let active = session.navigation.active_page();
    let page = match active {
        Page::Home => PageView::Home(home(content)),
        Page::Portfolio => PageView::Portfolio(portfolio(session, content)),
        Page::About => PageView::About(about(content)),
        Page::Services => PageView::Services(ServicesView {
            services: cards(&SERVICES),
        }),
        Page::Contact => PageView::Contact(ContactView {
            email: CONTACT_EMAIL,
            phone: CONTACT_PHONE,
            form: session.contact.draft().clone(),
            submitting: session.contact.is_submitting(),
        }),
    };

    Frame {
        nav: NavView {
            links: Page::ALL
                .into_iter()
                .map(|target| NavLink {
                    page: target,
                    label: target.label(),
                    active: target == active,
                })
                .collect(),
            mobile_menu_open: session.navigation.mobile_menu_open(),
        },
        page,
        footer: FooterView {
            copyright: COPYRIGHT,
            admin_panel_url: ADMIN_PANEL_URL,
        },
    }
}

fn home(content: &ContentSnapshot) -> HomeView {
    let hero = content.hero.as_ref();
    let about = content.about.as_ref();

    let featured = match &content.portfolio {
        Some(collection) if !collection.is_empty() => collection
            .items()
            .iter()
            .take(FEATURED_COUNT)
            .cloned()
            .collect(),
        _ => fallback::featured_items(),
    };

    HomeView {
        hero: HeroView {
            image: resolve_text(
                hero.and_then(|h| h.hero_image.as_deref()),
                fallback::HERO_IMAGE,
            ),
            subtitle: resolve_text(
                hero.and_then(|h| h.hero_subtitle.as_deref()),
                fallback::HERO_SUBTITLE,
            ),
        },
        featured,
        about_preview: AboutPreview {
            image: resolve_text(
                about.and_then(|a| a.about_image.as_deref()),
                fallback::ABOUT_PREVIEW_IMAGE,
            ),
            paragraphs: resolve_paragraphs(
                about.and_then(|a| a.paragraphs()),
                &fallback::ABOUT_PREVIEW_PARAGRAPHS,
            ),
        },
        services: cards(&HOME_SERVICES),
    }
}

fn portfolio(session: &PageSession, content: &ContentSnapshot) -> PortfolioView {
    let selected = session.filter.category();
    let (items, stock) = resolved_portfolio(content);

    PortfolioView {
        filters: CategoryFilter::ALL
            .into_iter()
            .map(|filter| FilterButton {
                filter,
                label: filter.label(),
                active: filter == selected,
            })
            .collect(),
        items: session.filter.apply(&items),
        stock,
        lightbox: session.lightbox.selected().cloned(),
    }
}

fn about(content: &ContentSnapshot) -> AboutView {
    let about = content.about.as_ref();
    AboutView {
        image: resolve_text(
            about.and_then(|a| a.about_image.as_deref()),
            fallback::ABOUT_PAGE_IMAGE,
        ),
        intro: ABOUT_INTRO,
        paragraphs: resolve_paragraphs(
            about.and_then(|a| a.paragraphs()),
            &fallback::ABOUT_PAGE_PARAGRAPHS,
        ),
    }
}

fn cards(source: &[(&'static str, &'static str)]) -> Vec<ServiceCard> {
    source
        .iter()
        .map(|&(title, description)| ServiceCard { title, description })
        .collect()
}

#[cfg(test)]
#[path = "tests/composer_tests.rs"]
mod tests;

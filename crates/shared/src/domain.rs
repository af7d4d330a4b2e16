use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::UnknownVariant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Home,
    Portfolio,
    About,
    Services,
    Contact,
}

impl Page {
    /// Navigation order, as shown in the menu bar.
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Portfolio,
        Page::About,
        Page::Services,
        Page::Contact,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Portfolio => "portfolio",
            Page::About => "about",
            Page::Services => "services",
            Page::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Portfolio => "Portfolio",
            Page::About => "About",
            Page::Services => "Services",
            Page::Contact => "Contact",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Page {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.slug().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant::new("page", s))
    }
}

/// Taxonomy tag attached to every portfolio item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Weddings,
    Portraits,
    Events,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Weddings,
    Portraits,
    Events,
}

impl CategoryFilter {
    /// Button order on the portfolio page.
    pub const ALL: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Weddings,
        CategoryFilter::Portraits,
        CategoryFilter::Events,
    ];

    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Weddings => category == Category::Weddings,
            CategoryFilter::Portraits => category == Category::Portraits,
            CategoryFilter::Events => category == Category::Events,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Weddings => "weddings",
            CategoryFilter::Portraits => "portraits",
            CategoryFilter::Events => "events",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Weddings => "Weddings",
            CategoryFilter::Portraits => "Portraits",
            CategoryFilter::Events => "Events",
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryFilter::ALL
            .into_iter()
            .find(|filter| filter.slug().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant::new("category", s))
    }
}

/// One of the three independently fetched content documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentSlice {
    Hero,
    About,
    Portfolio,
}

impl ContentSlice {
    pub const ALL: [ContentSlice; 3] = [
        ContentSlice::Hero,
        ContentSlice::About,
        ContentSlice::Portfolio,
    ];

    pub fn document_name(self) -> &'static str {
        match self {
            ContentSlice::Hero => "hero.json",
            ContentSlice::About => "about.json",
            ContentSlice::Portfolio => "portfolio.json",
        }
    }
}

impl fmt::Display for ContentSlice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ContentSlice::Hero => "hero",
            ContentSlice::About => "about",
            ContentSlice::Portfolio => "portfolio",
        })
    }
}

/// Service requested through the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    Wedding,
    Portrait,
    Event,
    Other,
}

impl ServiceKind {
    pub fn label(self) -> &'static str {
        match self {
            ServiceKind::Wedding => "Wedding Photography",
            ServiceKind::Portrait => "Portrait Session",
            ServiceKind::Event => "Event Photography",
            ServiceKind::Other => "Other / Not Sure",
        }
    }
}

impl FromStr for ServiceKind {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wedding" => Ok(ServiceKind::Wedding),
            "portrait" => Ok(ServiceKind::Portrait),
            "event" => Ok(ServiceKind::Event),
            "other" => Ok(ServiceKind::Other),
            _ => Err(UnknownVariant::new("service", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_page_slugs_case_insensitively() {
        assert_eq!("Portfolio".parse::<Page>().expect("page"), Page::Portfolio);
        assert_eq!(" contact ".parse::<Page>().expect("page"), Page::Contact);
        assert!("gallery".parse::<Page>().is_err());
    }

    #[test]
    fn unknown_category_decodes_as_other() {
        let category: Category = serde_json::from_str("\"landscapes\"").expect("category");
        assert_eq!(category, Category::Other);
    }

    #[test]
    fn all_filter_matches_every_category() {
        for category in [
            Category::Weddings,
            Category::Portraits,
            Category::Events,
            Category::Other,
        ] {
            assert!(CategoryFilter::All.matches(category));
        }
        assert!(!CategoryFilter::Events.matches(Category::Other));
    }
}

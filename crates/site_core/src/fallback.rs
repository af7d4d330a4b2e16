//! Stock copy and imagery shown while a content slice has no value.

use shared::{content::PortfolioItem, domain::Category};

pub const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1606216794074-735e91aa2c92?w=2000&h=1200&fit=crop";
pub const HERO_SUBTITLE: &str = "Through the lens of Braden Blackburn";

pub const ABOUT_PREVIEW_IMAGE: &str =
    "https://images.unsplash.com/photo-1554048612-b6a482bc67e5?w=800&h=1000&fit=crop";
pub const ABOUT_PAGE_IMAGE: &str =
    "https://images.unsplash.com/photo-1554048612-b6a482bc67e5?w=2000&h=1200&fit=crop";

pub const ABOUT_PREVIEW_PARAGRAPHS: [&str; 2] = [
    "With a passion for storytelling through imagery, I specialize in capturing authentic moments that you'll treasure forever.",
    "Whether it's a wedding, portrait session, or special event, my goal is to create timeless photographs that reflect your unique story.",
];
pub const ABOUT_PAGE_PARAGRAPHS: [&str; 2] = [
    "Photography has always been more than just a profession for me; it's a way to freeze time and preserve the emotions, connections, and stories that make life meaningful.",
    "My journey into photography began when I picked up my first camera. Since then, I've had the privilege of working with amazing clients.",
];

const FEATURED_IMAGES: [&str; 4] = [
    "https://images.unsplash.com/photo-1606216794074-735e91aa2c92?w=1200&h=1600&fit=crop",
    "https://images.unsplash.com/photo-1519741497674-611481863552?w=1200&h=800&fit=crop",
    "https://images.unsplash.com/photo-1523438885200-e635ba2c371e?w=1200&h=1600&fit=crop",
    "https://images.unsplash.com/photo-1511285560929-80b456fea0bc?w=1200&h=800&fit=crop",
];

const STOCK_PORTFOLIO: [(&str, Category); 9] = [
    ("https://images.unsplash.com/photo-1606216794074-735e91aa2c92?w=800&h=1000&fit=crop", Category::Weddings),
    ("https://images.unsplash.com/photo-1519741497674-611481863552?w=800&h=600&fit=crop", Category::Portraits),
    ("https://images.unsplash.com/photo-1523438885200-e635ba2c371e?w=800&h=1000&fit=crop", Category::Weddings),
    ("https://images.unsplash.com/photo-1511285560929-80b456fea0bc?w=800&h=600&fit=crop", Category::Events),
    ("https://images.unsplash.com/photo-1529635731460-8504839715b6?w=800&h=1000&fit=crop", Category::Portraits),
    ("https://images.unsplash.com/photo-1583939003579-730e3918a45a?w=800&h=600&fit=crop", Category::Weddings),
    ("https://images.unsplash.com/photo-1554048612-b6a482bc67e5?w=800&h=1000&fit=crop", Category::Portraits),
    ("https://images.unsplash.com/photo-1492691527719-9d1e07e534b4?w=800&h=600&fit=crop", Category::Events),
    ("https://images.unsplash.com/photo-1537633552985-df8429e8048b?w=800&h=1000&fit=crop", Category::Weddings),
];

/// The one place a missing value turns into its default. Blank strings count
/// as missing.
pub fn resolve_text(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}

pub fn resolve_paragraphs(value: Option<Vec<String>>, fallback: &[&str]) -> Vec<String> {
    value.unwrap_or_else(|| fallback.iter().map(|p| p.to_string()).collect())
}

pub fn featured_items() -> Vec<PortfolioItem> {
    FEATURED_IMAGES
        .iter()
        .enumerate()
        .map(|(idx, image)| {
            PortfolioItem::new(*image, format!("Featured {}", idx + 1), Category::Other)
        })
        .collect()
}

pub fn portfolio_items() -> Vec<PortfolioItem> {
    STOCK_PORTFOLIO
        .iter()
        .enumerate()
        .map(|(idx, (image, category))| {
            PortfolioItem::new(*image, format!("Portfolio {}", idx + 1), *category)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_missing_text_fall_back() {
        assert_eq!(resolve_text(None, HERO_SUBTITLE), HERO_SUBTITLE);
        assert_eq!(resolve_text(Some("  "), HERO_SUBTITLE), HERO_SUBTITLE);
        assert_eq!(resolve_text(Some("Weddings & more"), HERO_SUBTITLE), "Weddings & more");
    }

    #[test]
    fn stock_portfolio_covers_every_filterable_category() {
        let items = portfolio_items();
        for category in [Category::Weddings, Category::Portraits, Category::Events] {
            assert!(items.iter().any(|item| item.category == category));
        }
    }
}

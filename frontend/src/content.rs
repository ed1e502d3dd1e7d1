use std::rc::Rc;

use log::error;
use serde::Deserialize;

const CONTENT_JSON: &str = include_str!("../assets/content.json");

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MenuCategory {
    Coffee,
    Food,
    Drinks,
}

impl MenuCategory {
    /// Element id used for in-page links to the category.
    pub fn anchor(self) -> &'static str {
        match self {
            MenuCategory::Coffee => "coffee",
            MenuCategory::Food => "food",
            MenuCategory::Drinks => "drinks",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            MenuCategory::Coffee => "fa-solid fa-mug-hot",
            MenuCategory::Food => "fa-solid fa-utensils",
            MenuCategory::Drinks => "fa-solid fa-martini-glass",
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct MenuItem {
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct MenuSection {
    pub id: MenuCategory,
    pub label: String,
    pub background: String,
    pub items: Vec<MenuItem>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub image: String,
    pub quote: String,
    pub rating: u8,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct InstagramPost {
    pub url: String,
    pub likes: u32,
    pub comments: u32,
    pub caption: String,
    /// Height relative to the column width, drives the masonry layout.
    pub height: f64,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SiteContent {
    #[serde(default)]
    pub menu: Vec<MenuSection>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub instagram: Vec<InstagramPost>,
}

impl SiteContent {
    pub fn section(&self, category: MenuCategory) -> Option<&MenuSection> {
        self.menu.iter().find(|section| section.id == category)
    }
}

pub fn parse(json: &str) -> Result<SiteContent, serde_json::Error> {
    let mut content: SiteContent = serde_json::from_str(json)?;
    for testimonial in &mut content.testimonials {
        testimonial.rating = testimonial.rating.clamp(1, 5);
    }
    Ok(content)
}

/// Parses the embedded content. A broken document leaves the sections
/// empty instead of taking the page down.
pub fn load() -> SiteContent {
    match parse(CONTENT_JSON) {
        Ok(content) => content,
        Err(e) => {
            error!("Failed to parse site content: {}", e);
            SiteContent::default()
        }
    }
}

thread_local! {
    static SITE: Rc<SiteContent> = Rc::new(load());
}

/// Shared, parsed-once site content.
pub fn site() -> Rc<SiteContent> {
    SITE.with(Rc::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_parses() {
        let content = parse(CONTENT_JSON).unwrap();
        let counts: Vec<usize> = content.menu.iter().map(|s| s.items.len()).collect();
        assert_eq!(counts, vec![4, 4, 6]);
        assert_eq!(content.testimonials.len(), 4);
        assert_eq!(content.instagram.len(), 6);
        assert!(content.testimonials.iter().all(|t| (1..=5).contains(&t.rating)));
    }

    #[test]
    fn sections_are_found_by_category() {
        let content = load();
        let drinks = content.section(MenuCategory::Drinks).unwrap();
        assert_eq!(drinks.label, "Cocktails");
        assert_eq!(drinks.items[0].name, "Espresso Martini");
    }

    #[test]
    fn missing_lists_default_to_empty() {
        let content = parse(r#"{ "testimonials": [] }"#).unwrap();
        assert!(content.menu.is_empty());
        assert!(content.instagram.is_empty());
    }

    #[test]
    fn rating_is_clamped() {
        let json = r#"{ "testimonials": [
            { "name": "A", "role": "B", "image": "/a.jpg", "quote": "Q", "rating": 9 }
        ] }"#;
        assert_eq!(parse(json).unwrap().testimonials[0].rating, 5);
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(parse("{ \"menu\": [ { \"id\": \"tea\" } ] }").is_err());
    }
}

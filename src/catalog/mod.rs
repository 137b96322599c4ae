//! # Menu Catalog
//!
//! The immutable list of dishes the restaurant serves. Loaded once at startup, either the
//! built-in menu or a JSON array of [`MenuItem`] records, then shared read-only.
//!
//! Validation on load:
//! - prices must be finite and non-negative,
//! - spice levels go from 0 to 3,
//! - ids are unique.

pub mod error;

pub use error::*;

use crate::model::{Category, MenuItem, MenuItemId};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

const MAX_SPICE_LEVEL: u8 = 3;

#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Builds a catalog from items, rejecting invalid records.
    pub fn new(items: Vec<MenuItem>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for item in &items {
            if !item.price.is_finite() || item.price < 0.0 {
                return Err(CatalogError::InvalidPrice(item.id.clone()));
            }
            if let Some(level) = item.spicy_level.filter(|l| *l > MAX_SPICE_LEVEL) {
                return Err(CatalogError::InvalidSpiceLevel {
                    id: item.id.clone(),
                    level,
                });
            }
            if !seen.insert(&item.id) {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self { items })
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Self::new(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        info!(path = %path.display(), items = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &MenuItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Items in one category, or every item for `None` (the "all" filter).
    pub fn by_category(&self, category: Option<Category>) -> Vec<&MenuItem> {
        self.items
            .iter()
            .filter(|item| match category {
                Some(c) => item.category == c,
                None => true,
            })
            .collect()
    }

    /// Categories that have at least one item, in menu order.
    pub fn categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.items.iter().any(|item| item.category == *c))
            .collect()
    }

    /// The built-in KhanaDarshan menu.
    pub fn default_menu() -> Self {
        Self {
            items: vec![
                MenuItem::new("s1", "Paneer Tikka", 12.5, Category::Starter)
                    .with_description(
                        "Cottage cheese marinated in yogurt and spices, charred in the tandoor.",
                    )
                    .with_image("https://images.unsplash.com/photo-1567188040759-fb8a883dc6d8")
                    .with_spice(2)
                    .vegetarian()
                    .with_rating(4.7),
                MenuItem::new("s2", "Chicken 65", 11.0, Category::Starter)
                    .with_description(
                        "Crisp fried chicken tossed with curry leaves, red chilli and garlic.",
                    )
                    .with_image("https://images.unsplash.com/photo-1610057099443-fde8c4d50f91")
                    .with_spice(3)
                    .with_rating(4.6),
                MenuItem::new("s3", "Samosa Chaat", 8.0, Category::Starter)
                    .with_description(
                        "Crushed samosas under chickpea curry, tamarind and mint chutneys.",
                    )
                    .with_image("https://images.unsplash.com/photo-1601050690597-df0568f70950")
                    .with_spice(1)
                    .vegetarian()
                    .with_rating(4.5),
                MenuItem::new("m1", "Butter Chicken", 18.0, Category::Main)
                    .with_description(
                        "Tandoori chicken simmered in a tomato, butter and fenugreek gravy.",
                    )
                    .with_image("https://images.unsplash.com/photo-1603894584373-5ac82b2ae398")
                    .with_spice(1)
                    .with_rating(4.9),
                MenuItem::new("m2", "Hyderabadi Dum Biryani", 15.0, Category::Main)
                    .with_description(
                        "Saffron basmati layered with slow-cooked mutton, sealed and steamed.",
                    )
                    .with_image("https://images.unsplash.com/photo-1563379091339-03b21ab4a4f8")
                    .with_spice(2)
                    .with_rating(4.8),
                MenuItem::new("m3", "Dal Makhani", 13.0, Category::Main)
                    .with_description(
                        "Black lentils cooked overnight with cream and smoked butter.",
                    )
                    .with_image("https://images.unsplash.com/photo-1546833999-b9f581a1996d")
                    .with_spice(0)
                    .vegetarian()
                    .with_rating(4.6),
                MenuItem::new("m4", "Goan Fish Curry", 17.5, Category::Main)
                    .with_description(
                        "Kingfish in a tangy coconut and kokum curry with Kashmiri chilli.",
                    )
                    .with_image("https://images.unsplash.com/photo-1626777552726-4a6b54c97e46")
                    .with_spice(3)
                    .with_rating(4.5),
                MenuItem::new("d1", "Gulab Jamun", 6.0, Category::Dessert)
                    .with_description("Warm milk dumplings soaked in rose and cardamom syrup.")
                    .with_image("https://images.unsplash.com/photo-1666190092159-3171cf0fbb12")
                    .vegetarian()
                    .with_rating(4.8),
                MenuItem::new("d2", "Rasmalai", 7.0, Category::Dessert)
                    .with_description("Soft paneer discs in chilled saffron milk with pistachio.")
                    .with_image("https://images.unsplash.com/photo-1605197161470-5d2a9af0c3b5")
                    .vegetarian()
                    .with_rating(4.7),
                MenuItem::new("b1", "Mango Lassi", 4.5, Category::Beverage)
                    .with_description("Alphonso mango blended with yogurt and a pinch of cardamom.")
                    .with_image("https://images.unsplash.com/photo-1527661591475-527312dd65f5")
                    .vegetarian()
                    .with_rating(4.9),
                MenuItem::new("b2", "Masala Chai", 3.0, Category::Beverage)
                    .with_description("Assam tea brewed with milk, ginger and whole spices.")
                    .with_image("https://images.unsplash.com/photo-1561336313-0bd5e0b27ec8")
                    .vegetarian()
                    .with_rating(4.6),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_menu_is_valid() {
        let menu = Catalog::default_menu();
        let rebuilt = Catalog::new(menu.items().to_vec()).unwrap();
        assert_eq!(rebuilt.len(), menu.len());
        assert_eq!(menu.categories(), Category::ALL.to_vec());
    }

    #[test]
    fn filter_by_category() {
        let menu = Catalog::default_menu();
        assert_eq!(menu.by_category(None).len(), menu.len());

        let desserts = menu.by_category(Some(Category::Dessert));
        assert!(!desserts.is_empty());
        assert!(desserts.iter().all(|i| i.category == Category::Dessert));
    }

    #[test]
    fn get_by_id() {
        let menu = Catalog::default_menu();
        assert_eq!(menu.get(&MenuItemId::from("m1")).unwrap().name, "Butter Chicken");
        assert!(menu.get(&MenuItemId::from("zz")).is_none());
    }

    #[test]
    fn loads_json_and_lists_present_categories() {
        let json = r#"[
            {"id":"a","name":"Tea","description":"","price":2,"category":"beverage",
             "image":"","isVeg":true,"rating":4.0},
            {"id":"b","name":"Kulfi","description":"","price":5,"category":"dessert",
             "image":"","isVeg":true,"rating":4.2}
        ]"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.categories(), vec![Category::Dessert, Category::Beverage]);
    }

    #[test]
    fn rejects_invalid_records() {
        let negative = vec![MenuItem::new("x", "X", -1.0, Category::Main)];
        assert!(matches!(
            Catalog::new(negative),
            Err(CatalogError::InvalidPrice(id)) if id.0 == "x"
        ));

        let too_hot = vec![MenuItem::new("x", "X", 1.0, Category::Main).with_spice(4)];
        assert!(matches!(
            Catalog::new(too_hot),
            Err(CatalogError::InvalidSpiceLevel { level: 4, .. })
        ));

        let duplicate = vec![
            MenuItem::new("x", "X", 1.0, Category::Main),
            MenuItem::new("x", "Y", 2.0, Category::Starter),
        ];
        assert!(matches!(
            Catalog::new(duplicate),
            Err(CatalogError::DuplicateId(_))
        ));

        assert!(matches!(
            Catalog::from_json_str("{not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Catalog::load("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}

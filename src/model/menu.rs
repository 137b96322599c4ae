//! A dish on the restaurant menu.
//!
//! Menu items are immutable catalog records. The cart copies them by value, so later
//! catalog changes never reach a placed order.
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for menu items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(pub String);

impl From<&str> for MenuItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Menu sections, in the order the menu displays them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Starter,
    Main,
    Dessert,
    Beverage,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Starter,
        Category::Main,
        Category::Dessert,
        Category::Beverage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Starter => "starter",
            Category::Main => "main",
            Category::Dessert => "dessert",
            Category::Beverage => "beverage",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spicy_level: Option<u8>,
    pub is_veg: bool,
    pub rating: f32,
}

impl MenuItem {
    /// Creates a menu item with no image, no spice level and a neutral rating.
    ///
    /// Mostly useful for tests and ad-hoc catalogs; the builder-style setters below fill in
    /// the remaining fields.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        category: Category,
    ) -> Self {
        Self {
            id: MenuItemId(id.into()),
            name: name.into(),
            description: String::new(),
            price,
            category,
            image: String::new(),
            spicy_level: None,
            is_veg: false,
            rating: 0.0,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_spice(mut self, level: u8) -> Self {
        self.spicy_level = Some(level);
        self
    }

    pub fn vegetarian(mut self) -> Self {
        self.is_veg = true;
        self
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = rating;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_catalog_record() {
        let json = r#"{
            "id": "m1",
            "name": "Paneer Tikka",
            "description": "Charred cottage cheese",
            "price": 12.5,
            "category": "starter",
            "image": "paneer.jpg",
            "spicyLevel": 2,
            "isVeg": true,
            "rating": 4.7
        }"#;

        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, MenuItemId::from("m1"));
        assert_eq!(item.category, Category::Starter);
        assert_eq!(item.spicy_level, Some(2));
        assert!(item.is_veg);
    }

    #[test]
    fn spice_level_is_optional() {
        let json = r#"{"id":"b1","name":"Lassi","description":"","price":4,
            "category":"beverage","image":"","isVeg":true,"rating":4.1}"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.spicy_level, None);
        assert_eq!(item.price, 4.0);
    }
}

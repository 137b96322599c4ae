//! Prompt construction for chef recommendations.
//!
//! Only the menu and the customer's question go into the prompt. Cart and order state
//! never leave the session actor.

use crate::model::MenuItem;

pub const RESTAURANT_NAME: &str = "KhanaDarshan";

/// One menu line: `Name (category, Veg|Non-Veg, Rating: r/5): description`.
pub fn menu_line(item: &MenuItem) -> String {
    format!(
        "{} ({}, {}, Rating: {}/5): {}",
        item.name,
        item.category,
        if item.is_veg { "Veg" } else { "Non-Veg" },
        item.rating,
        item.description
    )
}

pub fn build_prompt<'a>(menu: impl IntoIterator<Item = &'a MenuItem>, question: &str) -> String {
    let menu_context = menu
        .into_iter()
        .map(menu_line)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are the Master Chef at '{RESTAURANT_NAME}', a high-end restaurant.\n\
         Here is our menu:\n\
         {menu_context}\n\
         \n\
         The user asks: \"{question}\"\n\
         \n\
         Please recommend 2-3 dishes from the menu that best match their request.\n\
         Be charismatic, brief, and describe the flavors vividly.\n\
         Do not list prices.\n\
         Format the response as a friendly conversation.\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    #[test]
    fn menu_line_format() {
        let item = MenuItem::new("m1", "Butter Chicken", 18.0, Category::Main)
            .with_description("Creamy tomato gravy")
            .with_rating(4.9);
        assert_eq!(
            menu_line(&item),
            "Butter Chicken (main, Non-Veg, Rating: 4.9/5): Creamy tomato gravy"
        );
    }

    #[test]
    fn prompt_carries_menu_and_question_but_no_prices() {
        let menu = [
            MenuItem::new("s1", "Paneer Tikka", 12.5, Category::Starter).vegetarian(),
            MenuItem::new("d1", "Gulab Jamun", 6.0, Category::Dessert).vegetarian(),
        ];
        let prompt = build_prompt(&menu, "something sweet");

        assert!(prompt.contains("Master Chef at 'KhanaDarshan'"));
        assert!(prompt.contains("Paneer Tikka (starter, Veg, Rating: 0/5): "));
        assert!(prompt.contains("Gulab Jamun (dessert, Veg"));
        assert!(prompt.contains("The user asks: \"something sweet\""));
        assert!(prompt.contains("recommend 2-3 dishes"));
        assert!(!prompt.contains("12.5"));
    }
}

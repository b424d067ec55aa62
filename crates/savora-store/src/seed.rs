//! Default dataset written to storage on first access.
//!
//! Ids and timestamps are assigned when the seed is materialized; the
//! seed is written at most once per collection, so subsequent loads
//! return the persisted records unchanged.

use chrono::Utc;
use uuid::Uuid;

use savora_core::{Category, NotebookEntry, Recipe, UNKNOWN_SOURCE};

fn recipe(
    name: &str,
    ingredients: &[&str],
    steps: &[&str],
    cooking_time: u32,
    category: Category,
) -> Recipe {
    Recipe {
        id: Uuid::new_v4(),
        name: name.to_string(),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        steps: steps.iter().map(|s| s.to_string()).collect(),
        cooking_time,
        image_url: None,
        category,
        created_at: Utc::now(),
    }
}

/// Eight sample recipes spanning every category.
pub fn default_recipes() -> Vec<Recipe> {
    vec![
        recipe(
            "Laphet Thoke",
            &[
                "4 tbsp fermented tea leaves",
                "2 tbsp fried garlic",
                "2 tbsp roasted peanuts",
                "1 tbsp toasted sesame seeds",
                "1 tomato, sliced",
                "Shredded cabbage",
            ],
            &[
                "Toss the tea leaves with a little garlic oil.",
                "Arrange the crunchy toppings around the leaves.",
                "Mix everything together at the table with a squeeze of lime.",
            ],
            20,
            Category::MyanmarTraditional,
        ),
        recipe(
            "Mohinga",
            &[
                "500 g catfish",
                "Rice vermicelli",
                "2 stalks lemongrass",
                "1 banana stem, sliced",
                "4 tbsp chickpea flour",
                "Fish sauce to taste",
            ],
            &[
                "Simmer the catfish with lemongrass until tender, then flake.",
                "Thicken the broth with chickpea flour.",
                "Serve over noodles with boiled egg and crispy fritters.",
            ],
            60,
            Category::Soups,
        ),
        recipe(
            "Tom Yum Goong",
            &[
                "300 g prawns",
                "3 stalks lemongrass, bruised",
                "5 kaffir lime leaves",
                "200 g straw mushrooms",
                "3 tbsp fish sauce",
                "2 tbsp lime juice",
            ],
            &[
                "Boil the stock with lemongrass, galangal, and lime leaves.",
                "Add mushrooms and prawns, cooking just until pink.",
                "Season with fish sauce, lime juice, and chili oil off the heat.",
            ],
            30,
            Category::ThaiTraditional,
        ),
        recipe(
            "Ta'ang Bamboo Shoot Curry",
            &[
                "400 g fresh bamboo shoots",
                "200 g pork belly",
                "2 tbsp pounded chili and shallot paste",
                "1 tsp turmeric",
                "Pickled tea leaves for serving",
            ],
            &[
                "Parboil the bamboo shoots to soften and mellow them.",
                "Fry the paste until fragrant, then brown the pork.",
                "Add the shoots and simmer until the broth turns golden.",
            ],
            45,
            Category::TaangTraditional,
        ),
        recipe(
            "Grilled Lemongrass Chicken Skewers",
            &[
                "600 g chicken thigh",
                "3 stalks lemongrass, minced",
                "2 tbsp fish sauce",
                "1 tbsp palm sugar",
                "Bamboo skewers, soaked",
            ],
            &[
                "Marinate the chicken in lemongrass, fish sauce, and sugar.",
                "Thread onto skewers.",
                "Grill over hot coals, turning until charred at the edges.",
            ],
            35,
            Category::GrilledFood,
        ),
        recipe(
            "Burmese Milk Tea",
            &[
                "2 tbsp strong black tea leaves",
                "3 tbsp condensed milk",
                "1 tbsp evaporated milk",
            ],
            &[
                "Brew the tea leaves hard for five minutes.",
                "Whisk in both milks.",
                "Pour between two jugs until frothy and serve hot.",
            ],
            10,
            Category::Drinks,
        ),
        recipe(
            "Som Tam",
            &[
                "1 green papaya, shredded",
                "2 cloves garlic",
                "3 bird's eye chilies",
                "2 tbsp dried shrimp",
                "1 tbsp palm sugar",
                "2 tbsp lime juice",
            ],
            &[
                "Pound the garlic and chilies in a mortar.",
                "Add papaya, dried shrimp, and seasonings.",
                "Bruise lightly with the pestle and toss until dressed.",
            ],
            15,
            Category::ThaiTraditional,
        ),
        recipe(
            "Pandan Coconut Jelly",
            &[
                "400 ml coconut milk",
                "3 pandan leaves",
                "10 g agar-agar",
                "80 g sugar",
                "Pinch of salt",
            ],
            &[
                "Simmer the coconut milk with pandan until fragrant.",
                "Dissolve the agar and sugar, then strain into a mold.",
                "Chill until set and cut into diamonds.",
            ],
            25,
            Category::Other,
        ),
    ]
}

/// Two starter notebook entries.
pub fn default_notebook_entries() -> Vec<NotebookEntry> {
    vec![
        NotebookEntry {
            id: Uuid::new_v4(),
            title: "Grandma's Fish Sauce Ratio".to_string(),
            source: "Grandma".to_string(),
            content: "One part fish sauce, one part lime, half part sugar. \
                      Taste before the chili goes in, never after."
                .to_string(),
            created_at: Utc::now(),
        },
        NotebookEntry {
            id: Uuid::new_v4(),
            title: "Market Day Notes".to_string(),
            source: UNKNOWN_SOURCE.to_string(),
            content: "The bamboo shoots from the Tuesday stall need an extra \
                      parboil. Buy double the tea leaves next time."
                .to_string(),
            created_at: Utc::now(),
        },
    ]
}

//! Response-schema descriptors for schema-constrained generation.
//!
//! The descriptors are sent with each `generateContent` request so the
//! model replies with JSON of an exact shape. The category enum is
//! injected from [`Category::labels`]; it is never written out by hand
//! here.

use serde_json::{json, Value};

use savora_core::Category;

/// Schema for a single generated recipe.
///
/// `ingredients` and `steps` are intentionally strings (newline or comma
/// separated), not arrays; the caller splits them into lines.
pub fn recipe_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "name": {
                "type": "STRING",
                "description": "Name of the dish"
            },
            "ingredients": {
                "type": "STRING",
                "description": "List of ingredients, each on a new line or comma separated"
            },
            "steps": {
                "type": "STRING",
                "description": "Cooking instructions, step by step, separated by newlines"
            },
            "cookingTime": {
                "type": "NUMBER",
                "description": "Total cooking time in minutes"
            },
            "category": {
                "type": "STRING",
                "description": "Category of the dish",
                "enum": Category::labels()
            }
        },
        "required": ["name", "ingredients", "steps", "cookingTime", "category"]
    })
}

/// Schema for an array of pantry dish suggestions.
pub fn suggestions_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "name": {
                    "type": "STRING",
                    "description": "Name of the suggested dish"
                },
                "description": {
                    "type": "STRING",
                    "description": "An appetizing one-sentence description"
                },
                "usedIngredients": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" }
                },
                "missingIngredients": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" }
                }
            },
            "required": ["name", "description", "usedIngredients", "missingIngredients"]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_schema_embeds_full_category_allow_list() {
        let schema = recipe_schema();
        let allowed = schema["properties"]["category"]["enum"]
            .as_array()
            .unwrap();
        assert_eq!(allowed.len(), Category::ALL.len());
        for category in Category::ALL {
            assert!(allowed.iter().any(|v| v == category.label()));
        }
    }

    #[test]
    fn test_recipe_schema_requires_all_fields() {
        let schema = recipe_schema();
        let required = schema["required"].as_array().unwrap();
        for field in ["name", "ingredients", "steps", "cookingTime", "category"] {
            assert!(required.iter().any(|v| v == field), "missing {field}");
        }
    }

    #[test]
    fn test_suggestions_schema_is_an_array_of_objects() {
        let schema = suggestions_schema();
        assert_eq!(schema["type"], "ARRAY");
        let required = schema["items"]["required"].as_array().unwrap();
        assert_eq!(required.len(), 4);
    }
}

//! Model category codes.

use serde_json::json;

use super::ResourceDefinition;

/// Category codes accepted by the `category` search filter, in code order.
pub const CATEGORIES: [(&str, &str); 12] = [
    ("food-drink", "Food & Drink"),
    ("clutter", "Clutter"),
    ("weapons", "Weapons"),
    ("transport", "Transport"),
    ("furniture-decor", "Furniture & Decor"),
    ("objects", "Objects"),
    ("nature", "Nature"),
    ("animals", "Animals"),
    ("buildings-architecture", "Buildings/Architecture"),
    ("people-characters", "People & Characters"),
    ("scenes-levels", "Scenes & Levels"),
    ("other", "Other"),
];

/// Category code table resource.
pub struct CategoriesResource;

impl ResourceDefinition for CategoriesResource {
    const URI: &'static str = "polypizza://categories";
    const NAME: &'static str = "Model Categories";
    const DESCRIPTION: &'static str =
        "Category codes (0-11) accepted by the category filter of the search tools";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> String {
        let categories: Vec<_> = CATEGORIES
            .iter()
            .enumerate()
            .map(|(code, (slug, name))| {
                json!({
                    "code": code.to_string(),
                    "slug": slug,
                    "name": name,
                })
            })
            .collect();

        format!("{:#}", json!(categories))
    }
}

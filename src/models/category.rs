use serde::{Deserialize, Serialize};

use crate::utils::color::random_category_color;
use crate::utils::text::{sanitize, Sanitize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default, rename = "taskCount")]
    pub task_count: u32,
    /// Display color picked on the client, never sent by the gateway.
    #[serde(skip_deserializing)]
    pub color: String,
}

impl Category {
    /// Assign a fresh display color.
    pub fn with_random_color(self) -> Self {
        Self {
            color: random_category_color(),
            ..self
        }
    }
}

impl Sanitize for Category {
    fn sanitized(self) -> Self {
        Self {
            name: sanitize(&self.name),
            ..self
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct NewCategory<'a> {
    pub name: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CATEGORY_PALETTE;
    use serde_json::json;

    #[test]
    fn color_is_ignored_on_the_wire_and_assigned_locally() {
        let category: Category = serde_json::from_value(json!({
            "_id": "c1",
            "name": "'Home'",
            "user_id": "u1",
            "color": "#000000"
        }))
        .unwrap();

        assert_eq!(category.color, "");
        assert_eq!(category.task_count, 0);

        let category = category.sanitized().with_random_color();
        assert_eq!(category.name, "Home");
        assert!(CATEGORY_PALETTE.contains(&category.color.as_str()));
    }
}

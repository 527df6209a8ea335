//! Request and response bodies. Wire keys are camelCase.

use serde::{Deserialize, Serialize};
use taskboard_core::{CategoryId, TaskId, Theme};
use taskboard_store::{CategoryRow, TaskPatch, TaskWithCategory};

// ── Requests ──
// Every field is optional at the serde level; presence is checked by the
// handler so a missing field yields a 400 naming it.

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskBody {
    pub name: Option<String>,
    pub description: Option<String>,
    pub eta: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskBody {
    pub name: Option<String>,
    pub description: Option<String>,
    pub eta: Option<String>,
}

impl From<UpdateTaskBody> for TaskPatch {
    fn from(body: UpdateTaskBody) -> Self {
        Self {
            name: body.name,
            description: body.description,
            eta: body.eta,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBody {
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignCategoryBody {
    pub category_id: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetThemeBody {
    pub new_theme: Option<String>,
}

// ── Responses ──

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCreated {
    pub message: String,
    pub task_id: TaskId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCreated {
    pub message: String,
    pub category_id: CategoryId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResponse {
    pub id: TaskId,
    pub name: String,
    pub description: String,
    pub eta: String,
    pub category: Option<String>,
}

impl From<TaskWithCategory> for TaskResponse {
    fn from(row: TaskWithCategory) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            eta: row.eta,
            category: row.category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub id: CategoryId,
    pub name: String,
}

impl From<CategoryRow> for CategoryResponse {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryNameResponse {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeResponse {
    pub theme: Theme,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_task_body_reads_partial_json() {
        let body: CreateTaskBody = serde_json::from_str(r#"{"name":"n","eta":"soon"}"#).unwrap();
        assert_eq!(body.name.as_deref(), Some("n"));
        assert_eq!(body.description, None);
        assert_eq!(body.eta.as_deref(), Some("soon"));
    }

    #[test]
    fn camel_case_request_keys() {
        let body: AssignCategoryBody = serde_json::from_str(r#"{"categoryId":4}"#).unwrap();
        assert_eq!(body.category_id, Some(4));
        let body: SetThemeBody = serde_json::from_str(r#"{"newTheme":"Snow"}"#).unwrap();
        assert_eq!(body.new_theme.as_deref(), Some("Snow"));
    }

    #[test]
    fn update_body_into_patch_keeps_empty_strings() {
        let body: UpdateTaskBody = serde_json::from_str(r#"{"name":""}"#).unwrap();
        let patch = TaskPatch::from(body);
        assert_eq!(patch.name.as_deref(), Some(""));
        assert_eq!(patch.description, None);
    }

    #[test]
    fn created_responses_use_camel_case() {
        let json = serde_json::to_value(TaskCreated {
            message: "Task created".into(),
            task_id: TaskId::new(9),
        })
        .unwrap();
        assert_eq!(json["taskId"], 9);

        let json = serde_json::to_value(CategoryCreated {
            message: "Category created".into(),
            category_id: CategoryId::new(2),
        })
        .unwrap();
        assert_eq!(json["categoryId"], 2);
    }

    #[test]
    fn task_response_serializes_null_category() {
        let json = serde_json::to_value(TaskResponse {
            id: TaskId::new(1),
            name: "n".into(),
            description: "d".into(),
            eta: "e".into(),
            category: None,
        })
        .unwrap();
        assert!(json["category"].is_null());
        assert!(json.as_object().unwrap().contains_key("category"));
    }
}

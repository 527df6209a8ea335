use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use taskboard_core::{CategoryId, TaskId};

use crate::database::Database;
use crate::error::StoreError;
use crate::row_helpers;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRow {
    pub id: TaskId,
    pub name: String,
    pub description: String,
    pub eta: String,
    pub category_id: Option<CategoryId>,
}

/// A task joined with the name of the category it points at.
/// `category` is `None` when the task has no category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskWithCategory {
    pub id: TaskId,
    pub name: String,
    pub description: String,
    pub eta: String,
    pub category: Option<String>,
}

/// Partial update for a task. `None` leaves the column untouched; `Some("")`
/// overwrites it with an empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub eta: Option<String>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.eta.is_none()
    }
}

pub struct TaskRepo {
    db: Database,
}

impl TaskRepo {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// All tasks in insertion order, each with its resolved category name.
    #[instrument(skip(self))]
    pub fn list(&self) -> Result<Vec<TaskWithCategory>, StoreError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT t.id, t.name, t.description, t.eta, c.name
                 FROM tasks t
                 LEFT JOIN categories c ON c.id = t.category_id
                 ORDER BY t.id",
            )?;
            let mut rows = stmt.query([])?;
            let mut tasks = Vec::new();
            while let Some(row) = rows.next()? {
                tasks.push(TaskWithCategory {
                    id: TaskId::new(row_helpers::get(row, 0, "tasks", "id")?),
                    name: row_helpers::get(row, 1, "tasks", "name")?,
                    description: row_helpers::get(row, 2, "tasks", "description")?,
                    eta: row_helpers::get(row, 3, "tasks", "eta")?,
                    category: row_helpers::get_opt(row, 4, "categories", "name")?,
                });
            }
            Ok(tasks)
        })
    }

    /// Get a single task by ID.
    #[instrument(skip(self), fields(task_id = %id))]
    pub fn get(&self, id: TaskId) -> Result<TaskRow, StoreError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, name, description, eta, category_id FROM tasks WHERE id = ?1",
            )?;
            let mut rows = stmt.query([id.get()])?;
            match rows.next()? {
                Some(row) => row_to_task(row),
                None => Err(StoreError::NotFound("task")),
            }
        })
    }

    /// Insert a task with no category. All three fields must be non-empty.
    #[instrument(skip(self, description, eta))]
    pub fn create(&self, name: &str, description: &str, eta: &str) -> Result<TaskId, StoreError> {
        StoreError::require_non_empty("name", name)?;
        StoreError::require_non_empty("description", description)?;
        StoreError::require_non_empty("eta", eta)?;

        self.db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO tasks (name, description, eta, category_id) VALUES (?1, ?2, ?3, NULL)",
                rusqlite::params![name, description, eta],
            )?;
            let id = TaskId::new(conn.last_insert_rowid());
            info!(task_id = %id, "task created");
            Ok(id)
        })
    }

    /// Apply the supplied fields of `patch`; absent fields keep their value.
    #[instrument(skip(self, patch), fields(task_id = %id))]
    pub fn update(&self, id: TaskId, patch: &TaskPatch) -> Result<(), StoreError> {
        if patch.is_empty() {
            debug!(task_id = %id, "empty patch, checking task exists only");
        }
        self.db.with_conn(|conn| {
            // SQLite reports matched rows, so an all-None patch still finds the task.
            let matched = conn.execute(
                "UPDATE tasks SET
                    name = COALESCE(?1, name),
                    description = COALESCE(?2, description),
                    eta = COALESCE(?3, eta)
                 WHERE id = ?4",
                rusqlite::params![patch.name, patch.description, patch.eta, id.get()],
            )?;
            if matched == 0 {
                return Err(StoreError::NotFound("task"));
            }
            debug!(task_id = %id, "task updated");
            Ok(())
        })
    }

    #[instrument(skip(self), fields(task_id = %id))]
    pub fn delete(&self, id: TaskId) -> Result<(), StoreError> {
        self.db.with_conn(|conn| {
            let rows = conn.execute("DELETE FROM tasks WHERE id = ?1", [id.get()])?;
            if rows == 0 {
                return Err(StoreError::NotFound("task"));
            }
            info!(task_id = %id, "task deleted");
            Ok(())
        })
    }

    /// Point a task at an existing category. The task is checked first, so a
    /// request naming two missing rows reports the task.
    #[instrument(skip_all, fields(task_id = %task_id, category_id = %category_id))]
    pub fn assign_category(
        &self,
        task_id: TaskId,
        category_id: CategoryId,
    ) -> Result<(), StoreError> {
        self.db.with_tx(|conn| {
            if !exists(conn, "SELECT 1 FROM tasks WHERE id = ?1", task_id.get())? {
                return Err(StoreError::NotFound("task"));
            }
            if !exists(conn, "SELECT 1 FROM categories WHERE id = ?1", category_id.get())? {
                return Err(StoreError::NotFound("category"));
            }
            conn.execute(
                "UPDATE tasks SET category_id = ?1 WHERE id = ?2",
                [category_id.get(), task_id.get()],
            )?;
            info!(task_id = %task_id, category_id = %category_id, "category assigned");
            Ok(())
        })
    }
}

pub(crate) fn exists(conn: &rusqlite::Connection, sql: &str, id: i64) -> Result<bool, StoreError> {
    let mut stmt = conn.prepare(sql)?;
    Ok(stmt.exists([id])?)
}

fn row_to_task(row: &rusqlite::Row<'_>) -> Result<TaskRow, StoreError> {
    Ok(TaskRow {
        id: TaskId::new(row_helpers::get(row, 0, "tasks", "id")?),
        name: row_helpers::get(row, 1, "tasks", "name")?,
        description: row_helpers::get(row, 2, "tasks", "description")?,
        eta: row_helpers::get(row, 3, "tasks", "eta")?,
        category_id: row_helpers::get_opt::<i64>(row, 4, "tasks", "category_id")?
            .map(CategoryId::new),
    })
}

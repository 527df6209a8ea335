use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use taskboard_core::CategoryId;

use crate::database::Database;
use crate::error::StoreError;
use crate::row_helpers;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRow {
    pub id: CategoryId,
    pub name: String,
}

pub struct CategoryRepo {
    db: Database,
}

impl CategoryRepo {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    #[instrument(skip(self))]
    pub fn list(&self) -> Result<Vec<CategoryRow>, StoreError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT id, name FROM categories ORDER BY id")?;
            let mut rows = stmt.query([])?;
            let mut categories = Vec::new();
            while let Some(row) = rows.next()? {
                categories.push(CategoryRow {
                    id: CategoryId::new(row_helpers::get(row, 0, "categories", "id")?),
                    name: row_helpers::get(row, 1, "categories", "name")?,
                });
            }
            Ok(categories)
        })
    }

    /// Name of the category with the given id.
    #[instrument(skip(self), fields(category_id = %id))]
    pub fn get(&self, id: CategoryId) -> Result<String, StoreError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT name FROM categories WHERE id = ?1")?;
            let mut rows = stmt.query([id.get()])?;
            match rows.next()? {
                Some(row) => row_helpers::get(row, 0, "categories", "name"),
                None => Err(StoreError::NotFound("category")),
            }
        })
    }

    #[instrument(skip(self))]
    pub fn create(&self, name: &str) -> Result<CategoryId, StoreError> {
        StoreError::require_non_empty("name", name)?;

        self.db.with_conn(|conn| {
            conn.execute("INSERT INTO categories (name) VALUES (?1)", [name])?;
            let id = CategoryId::new(conn.last_insert_rowid());
            info!(category_id = %id, "category created");
            Ok(id)
        })
    }

    /// Rename a category. Unlike [`CategoryRepo::create`], an empty name is
    /// accepted here.
    #[instrument(skip(self), fields(category_id = %id))]
    pub fn update(&self, id: CategoryId, name: &str) -> Result<(), StoreError> {
        self.db.with_conn(|conn| {
            let rows = conn.execute(
                "UPDATE categories SET name = ?1 WHERE id = ?2",
                rusqlite::params![name, id.get()],
            )?;
            if rows == 0 {
                return Err(StoreError::NotFound("category"));
            }
            debug!(category_id = %id, "category renamed");
            Ok(())
        })
    }

    /// Delete a category and clear it from every task that references it.
    /// Both happen in one transaction.
    #[instrument(skip(self), fields(category_id = %id))]
    pub fn delete(&self, id: CategoryId) -> Result<(), StoreError> {
        self.db.with_tx(|conn| {
            let detached = conn.execute(
                "UPDATE tasks SET category_id = NULL WHERE category_id = ?1",
                [id.get()],
            )?;
            let rows = conn.execute("DELETE FROM categories WHERE id = ?1", [id.get()])?;
            if rows == 0 {
                return Err(StoreError::NotFound("category"));
            }
            info!(category_id = %id, detached, "category deleted");
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::TaskRepo;

    fn setup() -> (CategoryRepo, TaskRepo) {
        let db = Database::in_memory().unwrap();
        db.initialize().unwrap();
        (CategoryRepo::new(db.clone()), TaskRepo::new(db))
    }

    #[test]
    fn create_and_get() {
        let (categories, _) = setup();
        let id = categories.create("Garden").unwrap();
        assert_eq!(categories.get(id).unwrap(), "Garden");
    }

    #[test]
    fn create_rejects_empty_name() {
        let (categories, _) = setup();
        assert!(matches!(categories.create(""), Err(StoreError::Validation(_))));
        assert!(categories.list().unwrap().is_empty());
    }

    #[test]
    fn get_missing_is_not_found() {
        let (categories, _) = setup();
        assert!(matches!(
            categories.get(CategoryId::new(5)),
            Err(StoreError::NotFound("category"))
        ));
    }

    #[test]
    fn list_all() {
        let (categories, _) = setup();
        let a = categories.create("A").unwrap();
        let b = categories.create("B").unwrap();
        assert_eq!(
            categories.list().unwrap(),
            vec![
                CategoryRow { id: a, name: "A".into() },
                CategoryRow { id: b, name: "B".into() },
            ]
        );
    }

    #[test]
    fn update_renames() {
        let (categories, _) = setup();
        let id = categories.create("Old").unwrap();
        categories.update(id, "New").unwrap();
        assert_eq!(categories.get(id).unwrap(), "New");
    }

    #[test]
    fn update_allows_empty_name() {
        let (categories, _) = setup();
        let id = categories.create("Old").unwrap();
        categories.update(id, "").unwrap();
        assert_eq!(categories.get(id).unwrap(), "");
    }

    #[test]
    fn update_missing_is_not_found() {
        let (categories, _) = setup();
        assert!(matches!(
            categories.update(CategoryId::new(1), "x"),
            Err(StoreError::NotFound("category"))
        ));
    }

    #[test]
    fn delete_nulls_out_every_referencing_task() {
        let (categories, tasks) = setup();
        let doomed = categories.create("Doomed").unwrap();
        let kept = categories.create("Kept").unwrap();

        let referencing: Vec<_> = (0..3)
            .map(|i| {
                let id = tasks.create(&format!("t{i}"), "d", "e").unwrap();
                tasks.assign_category(id, doomed).unwrap();
                id
            })
            .collect();
        let other = tasks.create("other", "d", "e").unwrap();
        tasks.assign_category(other, kept).unwrap();

        categories.delete(doomed).unwrap();

        for id in referencing {
            assert_eq!(tasks.get(id).unwrap().category_id, None);
        }
        assert_eq!(tasks.get(other).unwrap().category_id, Some(kept));
        let remaining: Vec<_> = categories.list().unwrap().into_iter().map(|c| c.id).collect();
        assert_eq!(remaining, vec![kept]);
    }

    #[test]
    fn delete_keeps_the_tasks_themselves() {
        let (categories, tasks) = setup();
        let cat = categories.create("C").unwrap();
        let task = tasks.create("n", "d", "e").unwrap();
        tasks.assign_category(task, cat).unwrap();
        categories.delete(cat).unwrap();

        let listed = tasks.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].category, None);
    }

    #[test]
    fn delete_missing_is_not_found_and_touches_nothing() {
        let (categories, tasks) = setup();
        let cat = categories.create("C").unwrap();
        let task = tasks.create("n", "d", "e").unwrap();
        tasks.assign_category(task, cat).unwrap();

        let result = categories.delete(CategoryId::new(999));
        assert!(matches!(result, Err(StoreError::NotFound("category"))));
        assert_eq!(tasks.get(task).unwrap().category_id, Some(cat));
    }

    #[test]
    fn delete_without_foreign_keys_still_cascades() {
        let db = Database::in_memory().unwrap();
        db.initialize().unwrap();
        db.with_conn(|conn| {
            conn.execute_batch("PRAGMA foreign_keys = OFF;")?;
            Ok(())
        })
        .unwrap();
        let categories = CategoryRepo::new(db.clone());
        let tasks = TaskRepo::new(db);

        let cat = categories.create("C").unwrap();
        let task = tasks.create("n", "d", "e").unwrap();
        tasks.assign_category(task, cat).unwrap();
        categories.delete(cat).unwrap();
        assert_eq!(tasks.get(task).unwrap().category_id, None);
    }
}

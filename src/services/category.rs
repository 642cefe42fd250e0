//! Category service
//!
//! Provides business logic for category management: creation with duplicate
//! checks, lookup by name or ID, budget changes, and cascading deletes.

use crate::error::{SpendError, SpendResult};
use crate::models::{Category, CategoryId, RecordKind};
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new category
    pub fn create(&self, name: &str, budget: f64) -> SpendResult<Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SpendError::Validation("Category name is required".into()));
        }

        if self.storage.categories.get_by_name(name)?.is_some() {
            return Err(SpendError::DuplicateCategory(name.to_string()));
        }

        let category = Category::new(name, budget);
        category
            .validate()
            .map_err(|e| SpendError::Validation(e.to_string()))?;

        self.storage.categories.upsert(category.clone())?;
        self.storage.categories.save()?;

        self.storage.log_created(&category)?;

        tracing::info!(id = %category.id, name = %category.name, "category created");
        Ok(category)
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> SpendResult<Option<Category>> {
        self.storage.categories.get(id)
    }

    /// Find a category by name or ID string
    ///
    /// Exact name wins, then a case-insensitive name, then a full or short ID.
    pub fn find(&self, identifier: &str) -> SpendResult<Option<Category>> {
        let identifier = identifier.trim();

        if let Some(category) = self.storage.categories.get_by_name(identifier)? {
            return Ok(Some(category));
        }

        let categories = self.storage.categories.get_all()?;
        let lower = identifier.to_lowercase();
        if let Some(category) = categories.iter().find(|c| c.name.to_lowercase() == lower) {
            return Ok(Some(category.clone()));
        }

        Ok(categories.into_iter().find(|c| c.id.matches(identifier)))
    }

    /// Find a category or fail with a not-found error
    pub fn require(&self, identifier: &str) -> SpendResult<Category> {
        self.find(identifier)?
            .ok_or_else(|| SpendError::not_found(RecordKind::Category, identifier))
    }

    /// List all categories ordered by name
    pub fn list(&self) -> SpendResult<Vec<Category>> {
        self.storage.categories.get_all()
    }

    /// Number of expenses filed under a category
    pub fn expense_count(&self, id: CategoryId) -> SpendResult<usize> {
        Ok(self.storage.expenses.get_by_category(id)?.len())
    }

    /// Update a category's name and/or budget
    pub fn update(
        &self,
        id: CategoryId,
        name: Option<&str>,
        budget: Option<f64>,
    ) -> SpendResult<Category> {
        let mut category = self
            .storage
            .categories
            .get(id)?
            .ok_or_else(|| SpendError::not_found(RecordKind::Category, id.to_string()))?;

        let before = category.clone();

        if let Some(new_name) = name {
            let new_name = new_name.trim();
            if new_name.is_empty() {
                return Err(SpendError::Validation("Category name is required".into()));
            }

            if let Some(existing) = self.storage.categories.get_by_name(new_name)? {
                if existing.id != id {
                    return Err(SpendError::DuplicateCategory(new_name.to_string()));
                }
            }

            if new_name != category.name {
                category.rename(new_name);
            }
        }

        if let Some(budget) = budget {
            if category.budget != Some(budget) {
                category.set_budget(budget);
            }
        }

        category
            .validate()
            .map_err(|e| SpendError::Validation(e.to_string()))?;

        if category == before {
            return Ok(category);
        }

        self.storage.categories.upsert(category.clone())?;
        self.storage.categories.save()?;

        self.storage.log_updated(&before, &category)?;

        tracing::info!(id = %category.id, name = %category.name, "category updated");
        Ok(category)
    }

    /// Delete a category and every expense filed under it
    ///
    /// Returns the number of expenses removed with it.
    pub fn delete(&self, id: CategoryId) -> SpendResult<usize> {
        let category = self
            .storage
            .categories
            .get(id)?
            .ok_or_else(|| SpendError::not_found(RecordKind::Category, id.to_string()))?;

        let removed = self.storage.expenses.delete_by_category(id)?;
        self.storage.categories.delete(id)?;
        self.storage.save_all()?;

        for expense in &removed {
            self.storage.log_deleted(expense)?;
        }
        self.storage.log_deleted(&category)?;

        tracing::info!(
            id = %category.id,
            name = %category.name,
            expenses = removed.len(),
            "category deleted"
        );
        Ok(removed.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::paths::SpendPaths;
    use crate::models::Expense;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_create_category() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        let category = service.create("  Food ", 5000.0).unwrap();
        assert_eq!(category.name, "Food");
        assert_eq!(category.budget, Some(5000.0));
        assert_eq!(service.list().unwrap().len(), 1);
    }

    #[test]
    fn test_create_duplicate_category() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        service.create("Food", 5000.0).unwrap();
        let result = service.create("Food", 100.0);
        assert!(matches!(result, Err(SpendError::DuplicateCategory(_))));
    }

    #[test]
    fn test_create_rejects_empty_name_and_negative_budget() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        assert!(matches!(service.create("   ", 10.0), Err(SpendError::Validation(_))));
        assert!(matches!(service.create("Food", -1.0), Err(SpendError::Validation(_))));
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_find_by_name_and_id() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);
        let food = service.create("Food", 5000.0).unwrap();

        assert_eq!(service.find("Food").unwrap().map(|c| c.id), Some(food.id));
        assert_eq!(service.find("food").unwrap().map(|c| c.id), Some(food.id));
        assert_eq!(
            service.find(&food.id.short()).unwrap().map(|c| c.id),
            Some(food.id)
        );
        assert!(service.find("Rent").unwrap().is_none());
        assert!(matches!(service.require("Rent"), Err(SpendError::NotFound { .. })));
    }

    #[test]
    fn test_update_budget_and_name() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);
        let food = service.create("Food", 5000.0).unwrap();

        let updated = service
            .update(food.id, Some("Groceries"), Some(4500.0))
            .unwrap();
        assert_eq!(updated.name, "Groceries");
        assert_eq!(updated.budget, Some(4500.0));

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.last().unwrap().operation, Operation::Update);
    }

    #[test]
    fn test_update_to_own_name_is_allowed() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);
        let food = service.create("Food", 5000.0).unwrap();

        let updated = service.update(food.id, Some("Food"), Some(10.0)).unwrap();
        assert_eq!(updated.budget, Some(10.0));
    }

    #[test]
    fn test_update_duplicate_name() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);
        service.create("Food", 5000.0).unwrap();
        let rent = service.create("Rent", 10000.0).unwrap();

        let result = service.update(rent.id, Some("Food"), None);
        assert!(matches!(result, Err(SpendError::DuplicateCategory(_))));
    }

    #[test]
    fn test_delete_cascades_to_expenses() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);
        let food = service.create("Food", 5000.0).unwrap();
        let rent = service.create("Rent", 10000.0).unwrap();

        let now = chrono::Local::now().naive_local();
        storage.expenses.upsert(Expense::new(food.id, 10.0, now)).unwrap();
        storage.expenses.upsert(Expense::new(food.id, 20.0, now)).unwrap();
        storage.expenses.upsert(Expense::new(rent.id, 30.0, now)).unwrap();

        assert_eq!(service.delete(food.id).unwrap(), 2);
        assert!(service.get(food.id).unwrap().is_none());
        assert_eq!(storage.expenses.count().unwrap(), 1);

        let kinds: Vec<_> = storage
            .audit()
            .read_recent(3)
            .unwrap()
            .into_iter()
            .map(|e| (e.operation, e.kind))
            .collect();
        assert_eq!(
            kinds,
            vec![
                (Operation::Delete, RecordKind::Expense),
                (Operation::Delete, RecordKind::Expense),
                (Operation::Delete, RecordKind::Category),
            ]
        );

        let err = service.delete(food.id).unwrap_err();
        assert_eq!(err.to_string(), format!("Category not found: {}", food.id));
    }
}

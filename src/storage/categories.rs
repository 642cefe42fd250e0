//! Category repository for JSON storage
//!
//! Manages loading and saving categories to categories.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SpendError;
use crate::models::{Category, CategoryId, RecordKind};

use super::file_io::{load_records, save_records, RecordFile};
use super::lock_error;

/// Serializable category data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct CategoryData {
    categories: Vec<Category>,
}

impl RecordFile for CategoryData {
    const KIND: RecordKind = RecordKind::Category;
}

/// Repository for category persistence
pub struct CategoryRepository {
    path: PathBuf,
    data: RwLock<HashMap<CategoryId, Category>>,
}

impl CategoryRepository {
    /// Create a new category repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load categories from disk
    pub fn load(&self) -> Result<(), SpendError> {
        let file_data: CategoryData = load_records(&self.path)?;

        let mut data = self.data.write().map_err(lock_error)?;
        data.clear();
        for category in file_data.categories {
            data.insert(category.id, category);
        }

        Ok(())
    }

    /// Save categories to disk, ordered by name
    pub fn save(&self) -> Result<(), SpendError> {
        let file_data = CategoryData {
            categories: self.get_all()?,
        };
        save_records(&self.path, &file_data)
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> Result<Option<Category>, SpendError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.get(&id).cloned())
    }

    /// Get all categories ordered by name
    pub fn get_all(&self) -> Result<Vec<Category>, SpendError> {
        let data = self.data.read().map_err(lock_error)?;

        let mut list: Vec<_> = data.values().cloned().collect();
        list.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(list)
    }

    /// Get a category by its exact name
    pub fn get_by_name(&self, name: &str) -> Result<Option<Category>, SpendError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.values().find(|c| c.name == name).cloned())
    }

    /// Insert or update a category
    pub fn upsert(&self, category: Category) -> Result<(), SpendError> {
        let mut data = self.data.write().map_err(lock_error)?;
        data.insert(category.id, category);
        Ok(())
    }

    /// Delete a category, returning it if it existed
    pub fn delete(&self, id: CategoryId) -> Result<Option<Category>, SpendError> {
        let mut data = self.data.write().map_err(lock_error)?;
        Ok(data.remove(&id))
    }

    /// Count categories
    pub fn count(&self) -> Result<usize, SpendError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, CategoryRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = CategoryRepository::new(temp_dir.path().join("categories.json"));
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_get_all_sorted_by_name() {
        let (_temp_dir, repo) = create_test_repo();
        for name in ["Transport", "Food", "Rent"] {
            repo.upsert(Category::new(name, 100.0)).unwrap();
        }

        let names: Vec<_> = repo.get_all().unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Food", "Rent", "Transport"]);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        let food = Category::new("Food", 5000.0);
        repo.upsert(food.clone()).unwrap();
        repo.save().unwrap();

        let reloaded = CategoryRepository::new(temp_dir.path().join("categories.json"));
        reloaded.load().unwrap();
        assert_eq!(reloaded.get(food.id).unwrap(), Some(food));
    }

    #[test]
    fn test_get_by_name_is_exact() {
        let (_temp_dir, repo) = create_test_repo();
        repo.upsert(Category::new("Food", 1.0)).unwrap();

        assert!(repo.get_by_name("Food").unwrap().is_some());
        assert!(repo.get_by_name("food").unwrap().is_none());
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, repo) = create_test_repo();
        let category = Category::new("Shopping", 3000.0);
        repo.upsert(category.clone()).unwrap();

        assert_eq!(repo.delete(category.id).unwrap().map(|c| c.id), Some(category.id));
        assert!(repo.delete(category.id).unwrap().is_none());
    }
}

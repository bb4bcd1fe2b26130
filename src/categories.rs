//! The admin-editable category tree
//!
//! Categories and their subcategory names live entirely client-side in
//! durable storage under the `adminCategories` key. The tree is hydrated at
//! load (or seeded with the two defaults) and re-serialized in full after
//! every mutation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::store::{keys, LocalStore};

/// A product category with its subcategory names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique id, monotonically assigned
    pub id: u64,

    /// Category name
    pub name: String,

    /// Ordered subcategory names; uniqueness is not enforced
    pub subcategories: Vec<String>,
}

fn seed_categories() -> Vec<Category> {
    vec![
        Category {
            id: 1,
            name: "Books".to_string(),
            subcategories: ["Fiction", "Non-Fiction", "Educational", "Comics", "Poetry"]
                .map(String::from)
                .to_vec(),
        },
        Category {
            id: 2,
            name: "Clothes".to_string(),
            subcategories: ["T-Shirts", "Tops", "Pants", "Jackets", "Dresses", "Skirts"]
                .map(String::from)
                .to_vec(),
        },
    ]
}

/// The editable category hierarchy, persisted in full on every mutation
pub struct CategoryTree {
    categories: Vec<Category>,
    store: Arc<dyn LocalStore>,
}

impl CategoryTree {
    /// Hydrate the tree from durable storage, seeding the defaults when no
    /// usable record exists
    pub fn load(store: Arc<dyn LocalStore>) -> Self {
        let categories = match store.get(keys::ADMIN_CATEGORIES) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(categories) => categories,
                Err(e) => {
                    log::warn!("stored category tree is malformed; reseeding: {}", e);
                    seed_categories()
                }
            },
            Ok(None) => seed_categories(),
            Err(e) => {
                log::warn!("failed to read stored category tree: {}", e);
                seed_categories()
            }
        };
        let tree = Self { categories, store };
        if let Err(e) = tree.persist() {
            log::warn!("failed to persist category tree: {}", e);
        }
        tree
    }

    /// The current categories, in order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by id
    pub fn get(&self, id: u64) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Add a category and return its assigned id
    ///
    /// Ids are assigned as one past the highest existing id, starting at 1
    /// when the tree is empty; a deleted id is never reused while a higher
    /// one remains.
    pub fn add_category(&mut self, name: &str) -> Result<u64, Error> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::general("category name must not be empty"));
        }
        let id = self.next_id();
        self.categories.push(Category {
            id,
            name: name.to_string(),
            subcategories: Vec::new(),
        });
        self.persist()?;
        Ok(id)
    }

    /// Delete a category and all its subcategories; unknown ids are a no-op
    pub fn delete_category(&mut self, id: u64) -> Result<(), Error> {
        self.categories.retain(|c| c.id != id);
        self.persist()
    }

    /// Append a subcategory name to a category; unknown ids are a no-op
    pub fn add_subcategory(&mut self, category_id: u64, name: &str) -> Result<(), Error> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::general("subcategory name must not be empty"));
        }
        if let Some(category) = self.categories.iter_mut().find(|c| c.id == category_id) {
            category.subcategories.push(name.to_string());
        }
        self.persist()
    }

    /// Remove every subcategory with the given name from a category
    pub fn delete_subcategory(&mut self, category_id: u64, name: &str) -> Result<(), Error> {
        if let Some(category) = self.categories.iter_mut().find(|c| c.id == category_id) {
            category.subcategories.retain(|s| s != name);
        }
        self.persist()
    }

    fn next_id(&self) -> u64 {
        self.categories.iter().map(|c| c.id).max().map_or(1, |max| max + 1)
    }

    fn persist(&self) -> Result<(), Error> {
        let raw = serde_json::to_string(&self.categories)?;
        self.store.set(keys::ADMIN_CATEGORIES, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn tree() -> (Arc<MemoryStore>, CategoryTree) {
        let store = Arc::new(MemoryStore::new());
        let tree = CategoryTree::load(store.clone());
        (store, tree)
    }

    #[test]
    fn seeds_books_and_clothes_when_empty() {
        let (_, tree) = tree();
        let names: Vec<_> = tree.categories().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Books", "Clothes"]);
        assert_eq!(tree.get(1).unwrap().subcategories.len(), 5);
        assert_eq!(tree.get(2).unwrap().subcategories.len(), 6);
    }

    #[test]
    fn add_category_assigns_next_id() {
        let (_, mut tree) = tree();
        let id = tree.add_category("Shoes").unwrap();
        assert_eq!(id, 3);
        assert_eq!(tree.get(3).unwrap().name, "Shoes");
        assert!(tree.get(3).unwrap().subcategories.is_empty());
    }

    #[test]
    fn deleted_ids_are_not_reused() {
        let (_, mut tree) = tree();
        let id = tree.add_category("Shoes").unwrap();
        assert_eq!(id, 3);

        tree.delete_category(2).unwrap();
        // max remaining is 3, so the next id is 4, never the freed 2
        assert_eq!(tree.add_category("Games").unwrap(), 4);
    }

    #[test]
    fn emptied_tree_restarts_ids_at_one() {
        let (_, mut tree) = tree();
        tree.delete_category(1).unwrap();
        tree.delete_category(2).unwrap();
        assert!(tree.categories().is_empty());

        assert_eq!(tree.add_category("Fresh").unwrap(), 1);
    }

    #[test]
    fn blank_names_are_rejected() {
        let (_, mut tree) = tree();
        assert!(tree.add_category("   ").is_err());
        assert!(tree.add_subcategory(1, "").is_err());
    }

    #[test]
    fn subcategory_add_and_delete() {
        let (_, mut tree) = tree();
        tree.add_subcategory(2, "Scarves").unwrap();
        assert!(tree.get(2).unwrap().subcategories.contains(&"Scarves".to_string()));

        tree.delete_subcategory(2, "Scarves").unwrap();
        assert!(!tree.get(2).unwrap().subcategories.contains(&"Scarves".to_string()));

        // Unknown category id is a no-op, not an error
        tree.add_subcategory(99, "Nowhere").unwrap();
    }

    #[test]
    fn mutations_survive_reload() {
        let (store, mut tree) = tree();
        tree.add_category("Shoes").unwrap();
        tree.add_subcategory(3, "Sneakers").unwrap();
        tree.delete_category(1).unwrap();

        let reloaded = CategoryTree::load(store);
        let names: Vec<_> = reloaded.categories().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Clothes", "Shoes"]);
        assert_eq!(reloaded.get(3).unwrap().subcategories, ["Sneakers"]);
    }

    #[test]
    fn malformed_stored_tree_is_reseeded() {
        let store = Arc::new(MemoryStore::new());
        store.set(keys::ADMIN_CATEGORIES, "][ nonsense").unwrap();

        let tree = CategoryTree::load(store);
        assert_eq!(tree.categories().len(), 2);
    }
}

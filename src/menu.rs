use std::sync::Arc;

use derive_builder::Builder;

use crate::catalog::Catalog;
use crate::data::{MenuCategory, MenuItem};
use crate::error::SiteError;

pub const NO_ITEMS_MESSAGE: &str = "No items found";

/// Case-insensitive substring test over name and description.
/// `needle` must already be lowercased.
fn matches_lowered(item: &MenuItem, needle: &str) -> bool {
    needle.is_empty()
        || item.name.to_lowercase().contains(needle)
        || item.description.to_lowercase().contains(needle)
}

pub fn matches(item: &MenuItem, search: &str) -> bool {
    matches_lowered(item, &search.to_lowercase())
}

/// Items of `category` passing the filter, in menu order.
pub fn filter_items<'a>(category: &'a MenuCategory, search: &str) -> Vec<&'a MenuItem> {
    let needle = search.to_lowercase();
    category
        .items
        .iter()
        .filter(|item| matches_lowered(item, &needle))
        .collect()
}

#[derive(Debug, PartialEq, Eq)]
pub enum MenuListing<'a> {
    Items(Vec<&'a MenuItem>),
    /// nothing matched, show [`NO_ITEMS_MESSAGE`] instead of cards
    Empty,
}

impl<'a> MenuListing<'a> {
    fn from_items(items: Vec<&'a MenuItem>) -> Self {
        if items.is_empty() {
            Self::Empty
        } else {
            Self::Items(items)
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Items(items) => items.len(),
            Self::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

#[derive(Builder, Debug, Clone)]
pub struct MenuQuery {
    #[builder(setter(into, strip_option), default)]
    category: Option<String>,
    #[builder(setter(into), default)]
    search: String,
}

impl MenuQuery {
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Run the query. A missing category means the first tab.
    pub fn run<'a>(
        &self,
        catalog: &'a Catalog,
    ) -> Result<(&'a MenuCategory, MenuListing<'a>), SiteError> {
        let category = match &self.category {
            Some(key) => catalog.category(key)?,
            None => catalog.default_category(),
        };
        let listing = MenuListing::from_items(filter_items(category, &self.search));
        Ok((category, listing))
    }
}

/// Local state of the menu page: the selected tab and the search box.
#[derive(Debug, Clone)]
pub struct MenuView {
    catalog: Arc<Catalog>,
    category: String,
    search: String,
}

impl MenuView {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let category = catalog.default_category().key.clone();
        Self {
            catalog,
            category,
            search: String::new(),
        }
    }

    pub fn category_key(&self) -> &str {
        &self.category
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn category(&self) -> &MenuCategory {
        // the key is only ever set from a successful lookup
        self.catalog
            .category(&self.category)
            .unwrap_or_else(|_| self.catalog.default_category())
    }

    pub fn categories(&self) -> &[MenuCategory] {
        self.catalog.categories()
    }

    /// Switch tabs. The search string is kept.
    pub fn select_category(&mut self, key: &str) -> Result<(), SiteError> {
        let category = self.catalog.category(key)?;
        self.category = category.key.clone();
        Ok(())
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn listing(&self) -> MenuListing<'_> {
        MenuListing::from_items(filter_items(self.category(), &self.search))
    }
}

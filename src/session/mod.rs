// ABOUTME: Session-scoped state: shopping list, favorites, and the commands that mutate them
// ABOUTME: Every mutation flags the state as modified so the store knows to persist it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kitchen Helper

//! Per-session state
//!
//! A [`SessionState`] owns exactly one shopping list and one favorites list. Mutations are
//! expressed as [`SessionCommand`]s so a [`store::SessionStore`] can apply them inside its
//! own critical section.

/// Session storage backends
pub mod store;

pub use store::{InMemorySessionStore, SessionStore};

use crate::models::{FavoriteItem, Recipe, ShoppingListItem};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use tracing::info;
use uuid::Uuid;

/// Opaque per-browser session identifier carried in the session cookie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Fresh random id
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// One mutation of a session's lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Append to the shopping list (ignored when the trimmed name is empty)
    AddShoppingItem {
        /// Item name
        name: String,
        /// Free-form quantity
        quantity: String,
    },
    /// Remove every shopping item with this id
    RemoveShoppingItem {
        /// Item id
        id: u64,
    },
    /// Flip `checked` on the first shopping item with this id
    ToggleShoppingItem {
        /// Item id
        id: u64,
    },
    /// Save a recipe (ignored when already saved)
    AddFavorite {
        /// Recipe id
        id: i64,
        /// Recipe title
        title: String,
        /// Recipe image URL
        image: String,
    },
    /// Remove every favorite with this recipe id
    RemoveFavorite {
        /// Recipe id
        id: i64,
    },
}

/// State owned by one session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Shopping list in insertion order
    pub shopping_list: Vec<ShoppingListItem>,
    /// Favorites in insertion order
    pub favorites: Vec<FavoriteItem>,
    /// Next shopping item id; only ever grows, so ids are never reused after removals
    #[serde(default)]
    next_item_id: u64,
    #[serde(skip)]
    modified: bool,
}

impl SessionState {
    /// Append a shopping item
    ///
    /// Name and quantity are trimmed. Returns `None` (and changes nothing) when the
    /// name is empty.
    pub fn add_shopping_item(&mut self, name: &str, quantity: &str) -> Option<&ShoppingListItem> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let id = self.next_item_id;
        self.next_item_id += 1;
        self.shopping_list.push(ShoppingListItem {
            id,
            name: name.to_owned(),
            quantity: quantity.trim().to_owned(),
            checked: false,
        });
        self.modified = true;

        info!(item.id = id, item.name = %name, "Added to shopping list");
        self.shopping_list.last()
    }

    /// Remove all shopping items with `id`; returns whether anything was removed
    pub fn remove_shopping_item(&mut self, id: u64) -> bool {
        let before = self.shopping_list.len();
        self.shopping_list.retain(|item| item.id != id);

        let removed = self.shopping_list.len() != before;
        if removed {
            self.modified = true;
            info!(item.id = id, "Removed shopping list item");
        }
        removed
    }

    /// Flip `checked` on the first item with `id`; returns the new value
    pub fn toggle_shopping_item(&mut self, id: u64) -> Option<bool> {
        let item = self.shopping_list.iter_mut().find(|item| item.id == id)?;
        item.checked = !item.checked;
        let checked = item.checked;
        self.modified = true;

        info!(item.id = id, item.checked = checked, "Toggled shopping list item");
        Some(checked)
    }

    /// Save a recipe; returns `None` when it is already a favorite
    pub fn add_favorite(&mut self, id: i64, title: &str, image: &str) -> Option<&FavoriteItem> {
        if self.is_favorite(id) {
            info!(recipe.id = id, "Recipe already in favorites");
            return None;
        }

        self.favorites.push(FavoriteItem {
            id,
            title: title.to_owned(),
            image: image.to_owned(),
        });
        self.modified = true;

        info!(recipe.id = id, recipe.title = %title, "Added to favorites");
        self.favorites.last()
    }

    /// Remove all favorites with `id`; returns whether anything was removed
    pub fn remove_favorite(&mut self, id: i64) -> bool {
        let before = self.favorites.len();
        self.favorites.retain(|favorite| favorite.id != id);

        let removed = self.favorites.len() != before;
        if removed {
            self.modified = true;
            info!(recipe.id = id, "Removed from favorites");
        }
        removed
    }

    /// Whether recipe `id` is saved
    #[must_use]
    pub fn is_favorite(&self, id: i64) -> bool {
        self.favorites.iter().any(|favorite| favorite.id == id)
    }

    /// Keep only recipes whose id is a favorite, in their original order
    #[must_use]
    pub fn filter_recipes_by_favorites(&self, recipes: Vec<Recipe>) -> Vec<Recipe> {
        let favorite_ids: HashSet<i64> = self.favorites.iter().map(|f| f.id).collect();

        recipes
            .into_iter()
            .filter(|recipe| recipe.id().is_some_and(|id| favorite_ids.contains(&id)))
            .collect()
    }

    /// Number of shopping list items
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.shopping_list.len()
    }

    /// Number of checked shopping list items
    #[must_use]
    pub fn done_items(&self) -> usize {
        self.shopping_list.iter().filter(|item| item.checked).count()
    }

    /// Apply `command`; returns whether the state changed
    pub fn apply(&mut self, command: &SessionCommand) -> bool {
        match command {
            SessionCommand::AddShoppingItem { name, quantity } => {
                self.add_shopping_item(name, quantity).is_some()
            }
            SessionCommand::RemoveShoppingItem { id } => self.remove_shopping_item(*id),
            SessionCommand::ToggleShoppingItem { id } => {
                self.toggle_shopping_item(*id).is_some()
            }
            SessionCommand::AddFavorite { id, title, image } => {
                self.add_favorite(*id, title, image).is_some()
            }
            SessionCommand::RemoveFavorite { id } => self.remove_favorite(*id),
        }
    }

    /// Whether a mutation happened since the last [`SessionState::take_modified`]
    #[must_use]
    pub const fn is_modified(&self) -> bool {
        self.modified
    }

    /// Read and clear the modified flag
    pub fn take_modified(&mut self) -> bool {
        std::mem::take(&mut self.modified)
    }
}

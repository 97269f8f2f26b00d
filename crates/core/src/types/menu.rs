//! Menu rows: categories and the products listed under them.

use serde::{Deserialize, Serialize};

use crate::{CategoryId, ProductId};

/// A menu category (e.g. "espresso", "tea").
///
/// `sizeunits` names the unit the category's product sizes are measured in,
/// such as "oz" or "ml".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub sizeunits: String,
}

/// Fields submitted when creating or replacing a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    /// Stored in the `sizeunits` column.
    pub units: String,
}

/// A product on the menu.
///
/// `category` is matched by literal equality and is not checked against the
/// category table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub size: String,
    pub category: String,
    pub price_cents: i32,
}

/// Fields submitted when creating or replacing a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub size: String,
    pub category: String,
    pub price_cents: i32,
}

impl NewCategory {
    /// Attach a generated id, producing the stored row.
    #[must_use]
    pub fn into_row(self, id: CategoryId) -> Category {
        Category {
            id,
            name: self.name,
            sizeunits: self.units,
        }
    }
}

impl NewProduct {
    /// Attach a generated id, producing the stored row.
    #[must_use]
    pub fn into_row(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            size: self.size,
            category: self.category,
            price_cents: self.price_cents,
        }
    }
}

use serde::{Deserialize, Serialize};

use billforge_core::{Entity, Money, ProductId};

/// Inventory entity: catalog data plus the live stock level.
///
/// `quantity` is the only mutable field. The orchestrator is the sole
/// caller of [`Product::set_quantity`]; invoice lines hold clones of this
/// struct, so a committed sale is never affected by later stock movements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    /// Unit price in smallest currency unit (e.g., cents).
    unit_price: Money,
    quantity: u32,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, unit_price: Money, quantity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Whether the requested sale quantity is covered by current stock.
    pub fn has_stock(&self, requested: u32) -> bool {
        requested <= self.quantity
    }

    /// Overwrite the stock level.
    ///
    /// No validation here: the caller guarantees the new value reflects a
    /// permitted stock movement (the stock check happens upstream).
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    /// Fixed-width inventory row (id, name, price, quantity).
    pub fn table_row(&self) -> String {
        format!(
            "{:<10}{:<20}{:<10}{:<10}",
            self.id, self.name, self.unit_price, self.quantity
        )
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &ProductId {
        &self.id
    }
}

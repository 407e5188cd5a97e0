use serde::{Deserialize, Serialize};

use billforge_core::{CustomerId, Entity};

/// Customer entity. Immutable once constructed; invoices hold clones
/// taken at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
    contact: String,
}

impl Customer {
    pub fn new(id: CustomerId, name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            contact: contact.into(),
        }
    }

    pub fn id_typed(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    /// Fixed-width directory row (id, name, contact).
    pub fn table_row(&self) -> String {
        format!("{:<10}{:<20}{:<15}", self.id, self.name, self.contact)
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &CustomerId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_row_is_fixed_width() {
        let c = Customer::new(CustomerId::new(1), "John Doe", "123-456-7890");
        let row = c.table_row();
        assert_eq!(&row[0..10], "1         ");
        assert_eq!(&row[10..30], "John Doe            ");
        assert_eq!(&row[30..], "123-456-7890   ");
    }

    #[test]
    fn equality_includes_identity() {
        let a = Customer::new(CustomerId::new(1), "Jane Smith", "987-654-3210");
        let b = Customer::new(CustomerId::new(2), "Jane Smith", "987-654-3210");
        assert_ne!(a, b);
    }
}

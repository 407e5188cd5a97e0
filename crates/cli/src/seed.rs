//! Startup seed data.
//!
//! All state is in-process and lost on exit; this is the fixed demo
//! dataset loaded before the menu loop starts.

use billforge_billing::Billing;
use billforge_core::{BillingResult, Money};

pub fn seed_demo_data(billing: &mut Billing) -> BillingResult<()> {
    billing.add_product("Laptop", Money::new(1000, 0), 10)?;
    billing.add_product("Mouse", Money::new(25, 50), 50)?;
    billing.add_product("Keyboard", Money::new(45, 0), 30)?;

    billing.add_customer("John Doe", "123-456-7890")?;
    billing.add_customer("Jane Smith", "987-654-3210")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use billforge_core::{CustomerId, ProductId};

    #[test]
    fn seeds_three_products_and_two_customers() {
        let mut billing = Billing::new();
        seed_demo_data(&mut billing).unwrap();

        assert_eq!(billing.inventory().len(), 3);
        assert_eq!(billing.customers().len(), 2);
        assert_eq!(
            billing.find_product(ProductId::new(2)).unwrap().name(),
            "Mouse"
        );
        assert_eq!(
            billing.find_customer(CustomerId::new(2)).unwrap().name(),
            "Jane Smith"
        );
    }
}

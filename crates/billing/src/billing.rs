use chrono::Utc;
use serde::{Deserialize, Serialize};

use billforge_core::{BillingError, BillingResult, CustomerId, IdSeq, InvoiceId, Money, ProductId};
use billforge_invoicing::{Invoice, InvoiceDraft};
use billforge_parties::Customer;
use billforge_products::Product;

/// The orchestrator: owns the inventory, the customer directory, and the
/// invoice history, and allocates ids for all three.
///
/// Exactly one instance exists per process, passed by reference to the
/// input adapter. All operations are synchronous; validation happens
/// before any mutation, so a failed operation leaves every collection
/// untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Billing {
    inventory: Vec<Product>,
    customers: Vec<Customer>,
    invoices: Vec<Invoice>,
    product_ids: IdSeq,
    customer_ids: IdSeq,
    invoice_ids: IdSeq,
}

impl Billing {
    pub fn new() -> Self {
        Self {
            inventory: Vec::new(),
            customers: Vec::new(),
            invoices: Vec::new(),
            product_ids: IdSeq::new(),
            customer_ids: IdSeq::new(),
            invoice_ids: IdSeq::new(),
        }
    }

    /// Register a product. Ids come from a monotonic counter, never from
    /// the collection length, so they stay unique even if removal is ever
    /// added.
    pub fn add_product(
        &mut self,
        name: impl Into<String>,
        unit_price: Money,
        quantity: u32,
    ) -> BillingResult<ProductId> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(BillingError::validation("product name cannot be empty"));
        }
        let id = ProductId::new(self.product_ids.next_value());
        tracing::debug!(%id, name = %name, %unit_price, quantity, "product added");
        self.inventory.push(Product::new(id, name, unit_price, quantity));
        Ok(id)
    }

    /// Register a customer.
    pub fn add_customer(
        &mut self,
        name: impl Into<String>,
        contact: impl Into<String>,
    ) -> BillingResult<CustomerId> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(BillingError::validation("customer name cannot be empty"));
        }
        let id = CustomerId::new(self.customer_ids.next_value());
        tracing::debug!(%id, name = %name, "customer added");
        self.customers.push(Customer::new(id, name, contact));
        Ok(id)
    }

    pub fn find_product(&self, id: ProductId) -> BillingResult<&Product> {
        self.inventory
            .iter()
            .find(|p| p.id_typed() == id)
            .ok_or(BillingError::ProductNotFound(id))
    }

    pub fn find_customer(&self, id: CustomerId) -> BillingResult<&Customer> {
        self.customers
            .iter()
            .find(|c| c.id_typed() == id)
            .ok_or(BillingError::CustomerNotFound(id))
    }

    /// Open an invoice draft for a customer.
    ///
    /// The customer is validated and snapshotted before an invoice id is
    /// allocated, so an aborted lookup consumes nothing.
    pub fn begin_invoice(&mut self, customer_id: CustomerId) -> BillingResult<InvoiceDraft> {
        let customer = self.find_customer(customer_id)?.clone();
        let id = InvoiceId::new(self.invoice_ids.next_value());
        tracing::debug!(invoice = %id, %customer_id, "invoice draft opened");
        Ok(InvoiceDraft::new(id, customer))
    }

    /// Reserve stock for a draft line.
    ///
    /// Looks up the product, runs the stock check, and only then moves
    /// stock and appends the snapshot line. On any error the inventory and
    /// the draft are both unchanged.
    pub fn add_line(
        &mut self,
        draft: &mut InvoiceDraft,
        product_id: ProductId,
        quantity: u32,
    ) -> BillingResult<()> {
        let product = self
            .inventory
            .iter_mut()
            .find(|p| p.id_typed() == product_id)
            .ok_or(BillingError::ProductNotFound(product_id))?;

        let available = product.quantity();
        if !product.has_stock(quantity) {
            tracing::warn!(%product_id, requested = quantity, available, "stock check failed");
            return Err(BillingError::insufficient_stock(product_id, quantity, available));
        }

        // Snapshot first; stock moves only once the draft accepted the line.
        draft.add_item(product.clone(), quantity)?;
        product.set_quantity(available - quantity);
        tracing::debug!(
            invoice = %draft.id_typed(),
            %product_id,
            quantity,
            remaining = available - quantity,
            "stock reserved"
        );
        Ok(())
    }

    /// Seal a draft and append it to the history. Unconditional: a draft
    /// with zero lines still becomes an invoice.
    pub fn commit_invoice(&mut self, draft: InvoiceDraft) -> Invoice {
        let invoice = draft.commit(Utc::now());
        tracing::info!(
            invoice = %invoice.id_typed(),
            customer = %invoice.customer().id_typed(),
            lines = invoice.lines().len(),
            total = %invoice.total(),
            "invoice committed"
        );
        self.invoices.push(invoice.clone());
        invoice
    }

    pub fn inventory(&self) -> &[Product] {
        &self.inventory
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    /// Fixed-width inventory table, insertion order.
    pub fn render_inventory(&self) -> String {
        let mut out = String::from("Inventory:\n");
        out.push_str(&format!(
            "{:<10}{:<20}{:<10}{:<10}\n",
            "ProductID", "Name", "Price", "Quantity"
        ));
        out.push_str("----------------------------------------\n");
        for product in &self.inventory {
            out.push_str(&product.table_row());
            out.push('\n');
        }
        out
    }

    /// Fixed-width customer table, insertion order.
    pub fn render_customers(&self) -> String {
        let mut out = String::from("Customers:\n");
        out.push_str(&format!(
            "{:<10}{:<20}{:<15}\n",
            "CustomerID", "Name", "Contact"
        ));
        out.push_str("----------------------------------------\n");
        for customer in &self.customers {
            out.push_str(&customer.table_row());
            out.push('\n');
        }
        out
    }
}

impl Default for Billing {
    fn default() -> Self {
        Self::new()
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use billforge_core::{BillingResult, InvoiceId, Money, ValueObject};
use billforge_parties::Customer;
use billforge_products::Product;

/// One invoice line: the product as it was at the time of sale, plus the
/// quantity sold. The line total is computed once, with checked
/// arithmetic, when the line is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    product: Product,
    quantity: u32,
    line_total: Money,
}

impl LineItem {
    pub fn new(product: Product, quantity: u32) -> BillingResult<Self> {
        let line_total = product.unit_price().checked_mul(quantity)?;
        Ok(Self {
            product,
            quantity,
            line_total,
        })
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn line_total(&self) -> Money {
        self.line_total
    }

    fn table_row(&self) -> String {
        format!(
            "{:<10}{:<20}{:<10}{:<10}{:<10}",
            self.product.id_typed(),
            self.product.name(),
            self.product.unit_price(),
            self.quantity,
            self.line_total
        )
    }
}

impl ValueObject for LineItem {}

/// In-progress invoice.
///
/// The draft accumulates snapshot lines and a running total. It performs
/// no stock or duplicate checks; that validation belongs to the
/// orchestrator, upstream of [`InvoiceDraft::add_item`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceDraft {
    id: InvoiceId,
    customer: Customer,
    lines: Vec<LineItem>,
    total: Money,
}

impl InvoiceDraft {
    pub fn new(id: InvoiceId, customer: Customer) -> Self {
        Self {
            id,
            customer,
            lines: Vec::new(),
            total: Money::ZERO,
        }
    }

    pub fn id_typed(&self) -> InvoiceId {
        self.id
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    pub fn total(&self) -> Money {
        self.total
    }

    /// Append a snapshot line and accumulate the running total.
    ///
    /// On overflow the draft is left unchanged.
    pub fn add_item(&mut self, product: Product, quantity: u32) -> BillingResult<()> {
        let line = LineItem::new(product, quantity)?;
        self.total = self.total.checked_add(line.line_total())?;
        self.lines.push(line);
        Ok(())
    }

    /// Seal the draft into an immutable invoice.
    pub fn commit(self, issued_at: DateTime<Utc>) -> Invoice {
        Invoice {
            id: self.id,
            customer: self.customer,
            lines: self.lines,
            total: self.total,
            issued_at,
        }
    }
}

/// Immutable record of a completed sale: customer snapshot, line items,
/// grand total. Never mutated after commit, never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    id: InvoiceId,
    customer: Customer,
    lines: Vec<LineItem>,
    total: Money,
    issued_at: DateTime<Utc>,
}

impl Invoice {
    pub fn id_typed(&self) -> InvoiceId {
        self.id
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }
}

impl core::fmt::Display for Invoice {
    /// Formatted receipt: header, fixed-width line rows, grand total.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Invoice ID: {}", self.id)?;
        writeln!(f, "Date: {}", self.issued_at.format("%Y-%m-%d"))?;
        writeln!(f, "Customer: {}", self.customer.name())?;
        writeln!(f, "----------------------------------------")?;
        writeln!(
            f,
            "{:<10}{:<20}{:<10}{:<10}{:<10}",
            "ProductID", "Product Name", "Price", "Quantity", "Total"
        )?;
        writeln!(f, "----------------------------------------")?;
        for line in &self.lines {
            writeln!(f, "{}", line.table_row())?;
        }
        writeln!(f, "----------------------------------------")?;
        write!(f, "Total Amount: {}", self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use billforge_core::{BillingError, CustomerId, Money, ProductId};

    fn customer() -> Customer {
        Customer::new(CustomerId::new(1), "John Doe", "123-456-7890")
    }

    fn laptop() -> Product {
        Product::new(ProductId::new(1), "Laptop", Money::new(1000, 0), 10)
    }

    fn mouse() -> Product {
        Product::new(ProductId::new(2), "Mouse", Money::new(25, 50), 50)
    }

    #[test]
    fn draft_accumulates_line_totals() {
        let mut draft = InvoiceDraft::new(InvoiceId::new(1), customer());
        draft.add_item(laptop(), 2).unwrap();
        draft.add_item(mouse(), 4).unwrap();
        assert_eq!(draft.lines().len(), 2);
        assert_eq!(draft.total(), Money::from_cents(200_000 + 10_200));
    }

    #[test]
    fn committed_total_equals_sum_of_lines() {
        let mut draft = InvoiceDraft::new(InvoiceId::new(1), customer());
        draft.add_item(laptop(), 2).unwrap();
        draft.add_item(mouse(), 1).unwrap();
        let invoice = draft.commit(Utc::now());

        let summed = invoice
            .lines()
            .iter()
            .fold(Money::ZERO, |acc, line| acc.checked_add(line.line_total()).unwrap());
        assert_eq!(invoice.total(), summed);
    }

    #[test]
    fn line_records_price_at_time_of_sale() {
        let mut draft = InvoiceDraft::new(InvoiceId::new(1), customer());
        let mut p = laptop();
        draft.add_item(p.clone(), 2).unwrap();
        // Stock movement on the live product must not leak into the line.
        p.set_quantity(0);
        assert_eq!(draft.lines()[0].product().quantity(), 10);
        assert_eq!(draft.total(), Money::from_cents(200_000));
    }

    #[test]
    fn zero_line_invoice_commits_with_zero_total() {
        let invoice = InvoiceDraft::new(InvoiceId::new(1), customer()).commit(Utc::now());
        assert!(invoice.lines().is_empty());
        assert_eq!(invoice.total(), Money::ZERO);
    }

    #[test]
    fn overflowing_line_leaves_draft_unchanged() {
        let mut draft = InvoiceDraft::new(InvoiceId::new(1), customer());
        let pricey = Product::new(ProductId::new(9), "Mainframe", Money::from_cents(u64::MAX), 5);
        let err = draft.add_item(pricey, 2).unwrap_err();
        assert_eq!(err, BillingError::AmountOverflow);
        assert!(draft.lines().is_empty());
        assert_eq!(draft.total(), Money::ZERO);
    }

    #[test]
    fn receipt_lists_lines_and_grand_total() {
        let mut draft = InvoiceDraft::new(InvoiceId::new(1), customer());
        draft.add_item(laptop(), 2).unwrap();
        let rendered = draft.commit(Utc::now()).to_string();

        assert!(rendered.starts_with("Invoice ID: 1\n"));
        assert!(rendered.contains("Customer: John Doe"));
        assert!(rendered.contains("ProductID Product Name        Price     Quantity  Total"));
        assert!(rendered.contains("1         Laptop              1000.00   2         2000.00"));
        assert!(rendered.ends_with("Total Amount: 2000.00"));
    }

    #[test]
    fn invoice_round_trips_through_json() {
        let mut draft = InvoiceDraft::new(InvoiceId::new(3), customer());
        draft.add_item(mouse(), 2).unwrap();
        let invoice = draft.commit(Utc::now());

        let json = serde_json::to_string(&invoice).unwrap();
        let back: Invoice = serde_json::from_str(&json).unwrap();
        assert_eq!(back, invoice);
    }
}

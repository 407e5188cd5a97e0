//! Interactive menu loop.

use std::io::{self, BufRead, Write};

use billforge_billing::Billing;
use billforge_core::{BillingError, CustomerId, ProductId};

/// Console session over an arbitrary reader/writer pair.
///
/// `run` drives the numbered menu until the user exits or the input ends.
/// Domain errors never escape: each one is mapped to a message and the
/// loop continues (or, for an unknown customer, the workflow aborts).
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Menu loop: 1 = list inventory, 2 = list customers, 3 = create
    /// invoice, 4 = exit. Unknown numbers re-prompt.
    pub fn run(&mut self, billing: &mut Billing) -> io::Result<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "1. List Inventory")?;
            writeln!(self.output, "2. List Customers")?;
            writeln!(self.output, "3. Create Invoice")?;
            writeln!(self.output, "4. Exit")?;

            let Some(choice) = self.prompt_u32("Enter your choice: ")? else {
                break;
            };

            match choice {
                1 => {
                    writeln!(self.output)?;
                    write!(self.output, "{}", billing.render_inventory())?;
                }
                2 => {
                    writeln!(self.output)?;
                    write!(self.output, "{}", billing.render_customers())?;
                }
                3 => self.create_invoice(billing)?,
                4 => {
                    writeln!(self.output, "Exiting...")?;
                    break;
                }
                _ => writeln!(self.output, "Invalid choice!")?,
            }
        }
        Ok(())
    }

    /// Invoice workflow: customer prompt, then a product loop ended by the
    /// sentinel id 0. The receipt prints unconditionally on loop exit,
    /// even with zero lines.
    fn create_invoice(&mut self, billing: &mut Billing) -> io::Result<()> {
        let Some(customer_id) = self.prompt_u32("\nEnter Customer ID: ")? else {
            return Ok(());
        };

        let mut draft = match billing.begin_invoice(CustomerId::new(customer_id)) {
            Ok(draft) => draft,
            Err(err) => {
                tracing::debug!(%err, "invoice aborted");
                writeln!(self.output, "Customer not found!")?;
                return Ok(());
            }
        };

        loop {
            let Some(raw_id) = self.prompt_u32("\nEnter Product ID (or 0 to finish): ")? else {
                break;
            };
            if raw_id == 0 {
                break;
            }
            let product_id = ProductId::new(raw_id);

            // The quantity prompt only appears for a known product.
            if billing.find_product(product_id).is_err() {
                writeln!(self.output, "Product not found!")?;
                continue;
            }

            let Some(quantity) = self.prompt_u32("Enter Quantity: ")? else {
                break;
            };

            match billing.add_line(&mut draft, product_id, quantity) {
                Ok(()) => {}
                Err(BillingError::InsufficientStock { .. }) => {
                    writeln!(self.output, "Insufficient stock!")?;
                }
                Err(BillingError::ProductNotFound(_)) => {
                    writeln!(self.output, "Product not found!")?;
                }
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }

        let invoice = billing.commit_invoice(draft);
        writeln!(self.output)?;
        writeln!(self.output, "{invoice}")?;
        Ok(())
    }

    /// Prompt until the user enters a number. Non-numeric input is
    /// rejected with a message and re-prompted, never treated as a
    /// sentinel. Returns `None` at end of input.
    fn prompt_u32(&mut self, prompt: &str) -> io::Result<Option<u32>> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            match line.trim().parse::<u32>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "Please enter a number.")?,
            }
        }
    }
}

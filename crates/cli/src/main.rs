use std::io;

use billforge_billing::Billing;
use billforge_cli::{Console, seed_demo_data};

fn main() -> anyhow::Result<()> {
    billforge_observability::init();

    let mut billing = Billing::new();
    seed_demo_data(&mut billing)?;
    tracing::info!(
        products = billing.inventory().len(),
        customers = billing.customers().len(),
        "demo data seeded"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    console.run(&mut billing)?;

    Ok(())
}

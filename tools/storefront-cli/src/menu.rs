//! The interactive store menu.
//!
//! Translates keyboard input into calls against the store contract.
//! Domain errors are caught here and printed; they never abort the loop.

use anyhow::Result;
use dialoguer::{Input, Select};
use storefront_core::{ProductId, Store};

use crate::output::Output;

const MENU_ITEMS: &[&str] = &[
    "List all products in store",
    "Show total amount in store",
    "Make an order",
    "Quit",
];

/// Run the menu loop until the user quits.
pub fn run(mut store: Store, output: &Output) -> Result<()> {
    output.header("Welcome to the store!");
    loop {
        println!();
        let choice = Select::new()
            .with_prompt("What would you like to do?")
            .items(MENU_ITEMS)
            .default(0)
            .interact()?;

        match choice {
            0 => list_products(&store, output),
            1 => show_total(&store, output),
            2 => make_order(&mut store, output)?,
            _ => {
                output.info("Goodbye!");
                return Ok(());
            }
        }
    }
}

fn list_products(store: &Store, output: &Output) {
    output.header("Available products");
    let mut empty = true;
    for product in store.active_products() {
        output.list_item(&product.to_string());
        empty = false;
    }
    if empty {
        output.warn("No products in stock.");
    }
}

fn show_total(store: &Store, output: &Output) {
    output.info(&format!(
        "Total quantity in store: {}",
        store.total_quantity()
    ));
}

fn make_order(store: &mut Store, output: &Output) -> Result<()> {
    let listing: Vec<ProductId> = store.active_products().map(|p| p.id()).collect();
    if listing.is_empty() {
        output.warn("No products available to order.");
        return Ok(());
    }

    output.header("Make an order");
    for (number, product) in store.active_products().enumerate() {
        output.numbered(number + 1, &product.to_string());
    }
    output.info("Enter a product number to add it (or 'done' to finish):");

    let shopping_list = collect_shopping_list(&listing, output)?;
    if shopping_list.is_empty() {
        output.info("Nothing ordered.");
        return Ok(());
    }

    match store.order(&shopping_list) {
        Ok(total) => output.success(&format!("Order placed! Total cost: {}", total)),
        Err(e) => output.error(&format!("Order failed: {}", e)),
    }
    Ok(())
}

fn collect_shopping_list(
    listing: &[ProductId],
    output: &Output,
) -> Result<Vec<(ProductId, i64)>> {
    let mut shopping_list = Vec::new();
    loop {
        let line: String = Input::new()
            .with_prompt("Product number")
            .interact_text()?;
        let line = line.trim();
        if line.eq_ignore_ascii_case("done") {
            break;
        }

        let index = match line.parse::<usize>() {
            Ok(n) if (1..=listing.len()).contains(&n) => n - 1,
            _ => {
                output.warn("Invalid choice. Try again.");
                continue;
            }
        };

        let quantity_line: String = Input::new().with_prompt("Quantity").interact_text()?;
        let quantity = match quantity_line.trim().parse::<i64>() {
            Ok(q) => q,
            Err(_) => {
                output.warn("Invalid quantity. Try again.");
                continue;
            }
        };

        shopping_list.push((listing[index], quantity));
    }
    Ok(shopping_list)
}

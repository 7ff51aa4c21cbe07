//! Transaction commands.
//!
//! `tx add` records an entry; `tx list` shows entries with optional
//! filters and a running total.

use tracing::info;

use crate::cli::context::Context;
use crate::core::domain::{Filter, Kind, Transaction};
use crate::error::{Result, ValidationError};

/// Record a transaction.
pub fn add(
    ctx: &Context,
    kind: Kind,
    amount: f64,
    category: &str,
    description: &str,
) -> Result<()> {
    info!("Adding {} transaction", kind);

    if category.trim().is_empty() {
        return Err(ValidationError::EmptyField("category").into());
    }

    let transaction = Transaction::new(kind, amount, category, description)?;
    let mut book = ctx.open_book()?;
    let stored = book.add(transaction)?;

    ctx.out.success(&format!(
        "recorded {} {} in {}",
        ctx.out.kind(stored.kind()),
        ctx.out.amount(stored.kind(), stored.amount()),
        stored.category()
    ));
    Ok(())
}

/// List transactions matching the filters.
pub fn list(
    ctx: &Context,
    kind: Option<Kind>,
    category: Option<String>,
    days: Option<u32>,
    json: bool,
) -> Result<()> {
    let book = ctx.open_book()?;
    let filter = Filter {
        kind,
        category,
        days,
    };
    let matched = book.transactions(&filter);

    if json {
        println!("{}", serde_json::to_string_pretty(&matched)?);
        return Ok(());
    }

    if matched.is_empty() {
        ctx.out.dimmed("no transactions");
        return Ok(());
    }

    ctx.out.section("Transactions");
    for tx in &matched {
        let description = if tx.description().is_empty() {
            String::new()
        } else {
            format!("  {}", tx.description())
        };
        println!(
            "  {}  {:<8} {:>12}  {}{}",
            tx.date(),
            ctx.out.kind(tx.kind()),
            ctx.out.amount(tx.kind(), tx.amount()),
            tx.category(),
            description
        );
    }
    ctx.out.rule();

    let (income, expense) = totals(&matched);
    ctx.out.kv("income: ", format!("${:.2}", income));
    ctx.out.kv("expense:", format!("${:.2}", expense));
    ctx.out.kv("net:    ", format!("${:.2}", income - expense));
    Ok(())
}

fn totals(transactions: &[&Transaction]) -> (f64, f64) {
    transactions
        .iter()
        .fold((0.0, 0.0), |(income, expense), tx| match tx.kind() {
            Kind::Income => (income + tx.amount(), expense),
            Kind::Expense => (income, expense + tx.amount()),
        })
}

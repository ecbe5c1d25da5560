use std::fmt::Display;
use std::process::ExitCode;

use tablekit::collections::table::{
    ArrayTable, SortedArrayTable, SortedListTable, TableConfig, TableError, TableFns,
};
use tablekit::collections::traits::Table;
use tracing_subscriber::{fmt, EnvFilter};

const POSTAL_CODES: [(i32, &str); 4] = [
    (90187, "Umea"),
    (90184, "Umea"),
    (98185, "Kiruna"),
    (90187, "Umea (Universitet)"),
];

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match run() {
        Ok(()) => {
            println!("\nNormal exit.");
            ExitCode::SUCCESS
        },
        Err(err) => {
            tracing::error!("Table demo failed: {}", err);
            ExitCode::FAILURE
        },
    }
}

fn run() -> Result<(), TableError> {
    let config = TableConfig::default();

    postal_codes("ArrayTable", ArrayTable::with_config(owned_fns(), config)?)?;
    postal_codes("SortedArrayTable", SortedArrayTable::with_config(owned_fns(), config)?)?;
    postal_codes("SortedListTable", SortedListTable::with_config(owned_fns(), config))?;

    borrowed_names()
}

/// Compares keys as ints and logs every value the table releases.
fn owned_fns() -> TableFns<i32, String> {
    TableFns::new(|a: &i32, b: &i32| a.cmp(b))
        .free_value(|value: String| tracing::debug!("Released value {:?}", value))
}

fn print_pair(key: &i32, value: &impl Display) {
    println!("[{key}, {value}]");
}

fn postal_codes<T>(name: &str, mut table: T) -> Result<(), TableError>
where
    T: Table<Key = i32, Value = String> + Display,
{
    println!("\n[{name}]\n");
    tracing::info!("Filling {} with {} postal codes", name, POSTAL_CODES.len());

    for (code, town) in POSTAL_CODES {
        table.insert(code, town.to_owned())?;
    }

    println!("Table after inserting {} pairs ({} unique):", POSTAL_CODES.len(), table.len());
    table.for_each(print_pair);
    println!("As a map: {table}");

    for code in [90187, 90184, 12345] {
        match table.lookup(&code) {
            Some(town) => println!("Lookup of {code} returned {town}."),
            None => println!("Lookup of {code} returned nothing."),
        }
    }

    drain(name, &mut table)?;
    table.kill();
    Ok(())
}

/// Removes every key from `table`, one arbitrary key at a time.
fn drain<T: Table<Key = i32>>(name: &str, table: &mut T) -> Result<(), TableError> {
    let mut removed = 0;

    while !table.is_empty() {
        let key = *table.choose_key()?;
        removed += table.remove(&key);
        tracing::debug!("Drained key {} from {}", key, name);
    }

    tracing::info!("Drained {} entries from {}", removed, name);
    debug_assert!(table.choose_key().is_err());
    Ok(())
}

/// Stores borrowed values, which the table can't release.
fn borrowed_names() -> Result<(), TableError> {
    println!("\n[Borrowed values]\n");

    let towns: Vec<String> = POSTAL_CODES.iter()
        .map(|(_, town)| town.to_uppercase())
        .collect();

    let mut table = SortedListTable::new(TableFns::ord());
    for ((code, _), town) in POSTAL_CODES.iter().zip(&towns) {
        table.insert(*code, town.as_str())?;
    }

    table.for_each(print_pair);
    drain("SortedListTable", &mut table)?;
    table.kill();

    // The table is gone but the values it pointed at are not.
    println!("Still owned by the caller: {towns:?}");
    Ok(())
}

//! enum-demo: prints descriptor tables and lookups for two sample enums.
//!
//! Without arguments it walks through both samples. With `--enum` it looks
//! the chosen type up in the global registry and answers `--value` /
//! `--name` queries against it.
//!
//! Built with the `demo` feature:
//!
//! ```bash
//! cargo run --features demo --bin enum-demo
//! enum-demo
//! enum-demo --enum line-type --list --value 2 --value 42 --name Dotted
//! RUST_LOG=debug enum-demo --enum color --name nope
//! ```

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use enum_reflect::{DynEnumTable, EnumRegistry, Enumeration, name_of, value_of};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enumeration)]
#[repr(u8)]
enum LineType {
    None,
    Solid,
    Dashed,
    Dotted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enumeration)]
#[repr(i32)]
#[enum_reflect(unknown = "<unnamed>")]
enum Color {
    #[enum_reflect(rename = "red")]
    Red,
    #[enum_reflect(rename = "green")]
    Green,
    #[enum_reflect(rename = "blue")]
    Blue,
}

/// Sample enumerations selectable from the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Sample {
    LineType,
    Color,
}

impl Sample {
    fn type_name(self) -> &'static str {
        match self {
            Sample::LineType => LineType::TYPE_NAME,
            Sample::Color => Color::TYPE_NAME,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "enum-demo", version, about = "Enumerator name/value lookups")]
struct Args {
    /// Enumeration to query; omit to run the walkthrough
    #[arg(long = "enum", value_enum)]
    sample: Option<Sample>,

    /// Print every (name, value) pair
    #[arg(long)]
    list: bool,

    /// Underlying value to resolve to a name (repeatable)
    #[arg(long = "value", allow_negative_numbers = true)]
    values: Vec<i128>,

    /// Enumerator name to resolve to a value (repeatable)
    #[arg(long = "name")]
    names: Vec<String>,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    match args.sample {
        Some(sample) => query(sample, &args),
        None => {
            walkthrough();
            Ok(())
        }
    }
}

/// Answer the command-line queries through the type-erased registry.
fn query(sample: Sample, args: &Args) -> Result<()> {
    let registry = EnumRegistry::global();
    debug!(registered = registry.len(), ?sample, "querying registry");

    let table = registry
        .get_by_name(sample.type_name())
        .with_context(|| format!("enum {} is not registered", sample.type_name()))?;

    if args.list || (args.values.is_empty() && args.names.is_empty()) {
        print_listing(table);
    }
    for &value in &args.values {
        println!("{} -> {}", value, table.name_of(value));
    }
    for name in &args.names {
        match table.value_of(name) {
            Some(value) => println!("{:?} -> {}", name, value),
            None => println!("{:?} -> not found", name),
        }
    }
    Ok(())
}

fn print_listing(table: &dyn DynEnumTable) {
    for (name, value) in table.iter() {
        println!("Name: {}, Value: {}", name, value);
    }
}

fn walkthrough() {
    for entry in LineType::table() {
        println!("Name: {}, Value: {}", entry.name, entry.repr());
    }

    match value_of::<LineType>("Dotted") {
        Some(line) => println!("Dotted has value: {}", line.to_repr()),
        None => println!("Enum not found"),
    }

    let input = "Solid";
    match value_of::<LineType>(input) {
        Some(line) => println!("Parsed {} to enum value {}", input, line.to_repr()),
        None => println!("Failed to parse enum from string: {}", input),
    }

    println!("LineType 42 -> {}", name_of::<LineType>(42));

    println!("Color::red  -> {}", Color::Red.variant_name());
    match Color::value_of("blue") {
        Some(color) => println!("\"blue\"     -> {}", color.to_repr()),
        None => println!("\"blue\"     -> not found"),
    }
    println!("\"nope\"     -> {}", Color::value_of("nope").is_some());
    println!("Color 42    -> {}", Color::name_of(42));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_flags_accept_the_full_i128_range() {
        let args = Args::try_parse_from([
            "enum-demo",
            "--enum",
            "line-type",
            "--value",
            "18446744073709551615",
            "--value",
            "-170141183460469231731687303715884105728",
            "--name",
            "Dotted",
        ])
        .unwrap();

        assert!(matches!(args.sample, Some(Sample::LineType)));
        assert_eq!(args.values, [i128::from(u64::MAX), i128::MIN]);
        assert_eq!(args.names, ["Dotted"]);
    }

    #[test]
    fn oversized_values_resolve_to_the_sentinel() {
        let table = EnumRegistry::global()
            .get_by_name(Sample::LineType.type_name())
            .unwrap();
        assert_eq!(table.name_of(i128::from(u64::MAX)), "<unknown>");
        assert_eq!(table.name_of(2), "Dashed");
    }
}

// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! classmap-dump - Dump the class registry tables
//!
//! Builds the registry from the compiled-in tables, applies any
//! `--register` / `--protocol` extensions, then prints the requested tables.

use classmap::{ClassRegistry, ProtocolId, TypeCatalog, TypeLoader, TypeTag};
use clap::Parser;
use colored::*;
use serde_json::json;
use std::fmt::Write as _;
use std::sync::Arc;

/// Dump the magic number and protocol-id tables
#[derive(Parser, Debug)]
#[command(name = "classmap-dump")]
#[command(version)]
#[command(about = "Dump magic number, reverse and protocol-id tables")]
struct Args {
    /// Table to print: types, reverse, protocols, all
    #[arg(short, long, default_value = "all")]
    table: Table,

    /// Output format: pretty, json
    #[arg(short, long, default_value = "pretty")]
    format: OutputFormat,

    /// Register a custom type first (TAG=NAME, TAG >= 1024)
    #[arg(short = 'r', long = "register", value_parser = parse_assignment::<TypeTag>)]
    types: Vec<(TypeTag, String)>,

    /// Register a custom protocol first (ID=NAME, ID > 512)
    #[arg(short = 'p', long = "protocol", value_parser = parse_assignment::<ProtocolId>)]
    protocols: Vec<(ProtocolId, String)>,

    /// Quiet mode - no headers or summary
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Table {
    Types,
    Reverse,
    Protocols,
    All,
}

impl std::str::FromStr for Table {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "types" | "magic" | "t" => Ok(Table::Types),
            "reverse" | "classes" | "r" => Ok(Table::Reverse),
            "protocols" | "p" => Ok(Table::Protocols),
            "all" | "a" => Ok(Table::All),
            _ => Err(format!("Unknown table: {}", s)),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum OutputFormat {
    Pretty,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "p" => Ok(OutputFormat::Pretty),
            "json" | "j" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

fn parse_assignment<T>(s: &str) -> Result<(T, String), String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let (key, name) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=NAME, got '{}'", s))?;
    let key = key
        .trim()
        .parse::<T>()
        .map_err(|e| format!("invalid key '{}': {}", key, e))?;
    Ok((key, name.trim().to_string()))
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    // Custom names need an open catalog; otherwise stay strict.
    let loader: Arc<dyn TypeLoader> = if args.types.is_empty() && args.protocols.is_empty() {
        Arc::new(TypeCatalog::builtin())
    } else {
        Arc::new(TypeCatalog::open())
    };
    let registry = ClassRegistry::new(loader)?;

    for (tag, name) in &args.types {
        registry.register_type_name(*tag, name)?;
        log::info!("registered {} as magic number {}", name, tag);
    }
    for (id, name) in &args.protocols {
        registry.register_protocol_name(*id, name)?;
        log::info!("registered protocol {} as id {}", name, id);
    }

    match args.format {
        OutputFormat::Pretty => print_pretty(&registry, args),
        OutputFormat::Json => print_json(&registry, args)?,
    }

    Ok(())
}

fn wants(args: &Args, table: Table) -> bool {
    args.table == Table::All || args.table == table
}

fn print_pretty(registry: &ClassRegistry, args: &Args) {
    print!("{}", render_pretty(registry, args));
}

fn render_pretty(registry: &ClassRegistry, args: &Args) -> String {
    let mut out = String::new();
    if wants(args, Table::Types) {
        section(&mut out, args, "Magic map:", registry.type_count());
        out.push_str(&registry.describe_tag_table());
    }
    if wants(args, Table::Reverse) {
        section(&mut out, args, "Class map:", registry.type_count());
        out.push_str(&registry.describe_reverse_table());
    }
    if wants(args, Table::Protocols) {
        // Ids can be reused, so count the listed rows rather than protocols.
        section(&mut out, args, "Protocol ids:", registry.protocol_entries().len());
        out.push_str(&registry.describe_protocol_table());
    }

    if !args.quiet {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", "--- Summary ---".dimmed());
        let _ = writeln!(
            out,
            "  Types: {}  Custom: {}  Protocols: {}",
            registry.type_count().to_string().white(),
            args.types.len().to_string().green(),
            registry.protocol_count().to_string().white()
        );
    }
    out
}

fn section(out: &mut String, args: &Args, title: &str, count: usize) {
    if args.quiet {
        return;
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{} {} entries", title.cyan().bold(), count);
}

fn print_json(registry: &ClassRegistry, args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let doc = json_tables(registry, args.table);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn json_tables(registry: &ClassRegistry, table: Table) -> serde_json::Value {
    let wants = |t: Table| table == Table::All || table == t;
    let mut doc = serde_json::Map::new();

    if wants(Table::Types) {
        let types: Vec<_> = registry
            .type_entries()
            .into_iter()
            .map(|(tag, handle)| json!({ "tag": tag, "type": handle.name() }))
            .collect();
        doc.insert("types".into(), types.into());
    }
    if wants(Table::Reverse) {
        let mut entries = registry.type_entries();
        entries.sort_by(|(_, a), (_, b)| a.name().cmp(b.name()));
        let reverse: Vec<_> = entries
            .into_iter()
            .map(|(tag, handle)| json!({ "type": handle.name(), "tag": tag }))
            .collect();
        doc.insert("reverse".into(), reverse.into());
    }
    if wants(Table::Protocols) {
        let protocols: Vec<_> = registry
            .protocol_entries()
            .into_iter()
            .map(|(id, handle)| json!({ "id": id, "type": handle.name() }))
            .collect();
        doc.insert("protocols".into(), protocols.into());
    }

    doc.into()
}

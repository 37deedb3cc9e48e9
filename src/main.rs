// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::{bail, Context};
use std::env;
use std::sync::Arc;
use std::time::Instant;
use string_analyzer::analysis::analyze;
use string_analyzer::config::{load_config, validate_config};
use string_analyzer::errors::ConfigError;
use string_analyzer::observability::init_tracing;
use string_analyzer::query::parse;
use string_analyzer::service::StringService;
use string_analyzer::store::MemoryStore;

fn usage(program: &str) {
    eprintln!("Usage: {} analyze <text>", program);
    eprintln!("       {} parse <query>", program);
    eprintln!("       {} demo <config.yaml>", program);
    eprintln!("Example: {} analyze \"racecar\"", program);
    eprintln!("Example: {} parse \"all single word palindromic strings\"", program);
    eprintln!("Example: {} demo configs/demo.yaml", program);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("string-analyzer");

    if args.len() < 3 {
        usage(program);
        std::process::exit(1);
    }

    match args[1].as_str() {
        "analyze" => {
            init_tracing(None);
            let result = analyze(&args[2]);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        "parse" => {
            init_tracing(None);
            let filters = parse(&args[2]).with_context(|| format!("query: \"{}\"", args[2]))?;
            println!("{}", serde_json::to_string_pretty(&filters)?);
        }
        "demo" => run_demo(&args[2]).await?,
        other => {
            usage(program);
            bail!("unknown command '{}'", other);
        }
    }

    Ok(())
}

async fn run_demo(config_file: &str) -> anyhow::Result<()> {
    let start_time = Instant::now();

    let config = load_config(config_file)
        .with_context(|| format!("loading {}", config_file))?;
    init_tracing(config.log_filter.as_deref());
    validate_config(&config).map_err(ConfigError::Invalid)?;

    println!("🔤 String Analyzer Demo");
    println!("═══════════════════════");
    println!("📋 Configuration: {}", config_file);
    println!("🌱 Seed strings: {}", config.seed.len());
    println!("❓ Queries: {}", config.queries.len());

    let service = StringService::new(Arc::new(MemoryStore::new()));

    println!("\n📊 Stored Strings:");
    for value in &config.seed {
        let record = service.create(value).await?;
        let p = &record.properties;
        println!(
            "  • \"{}\" → length={}, words={}, unique={}, palindrome={}",
            record.value, p.length, p.word_count, p.unique_characters, p.is_palindrome
        );
        println!("     🔑 {}", record.id);
    }

    for query in &config.queries {
        println!("\n{}", "─".repeat(60));
        println!("❓ \"{}\"", query);

        match service.filter_by_natural_language(query).await {
            Ok(response) => {
                println!(
                    "   🧩 Filters: {}",
                    serde_json::to_string(&response.interpreted_query.parsed_filters)?
                );
                println!("   🔢 Matches: {}", response.count);
                for record in &response.data {
                    println!("      • \"{}\"", record.value);
                }
            }
            Err(e) => {
                eprintln!("   ❌ {} (status {})", e, e.status_code());
            }
        }
    }

    println!("\n⏱️  Total Time: {:?}", start_time.elapsed());
    Ok(())
}

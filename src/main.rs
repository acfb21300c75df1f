//! Beanmax - Command Line Interface
//!
//! This is the main entry point for the beans-to-diamonds conversion tool.
//! Run with `--help` to see all available options.

use clap::Parser;
use std::error::Error;
use std::path::PathBuf;

use beanmax::{
    display::{display_results, display_tier_table, efficiency_tip, write_breakdown_csv},
    optimizer::{calculate_diamonds, optimize_beans},
};

/// Command-line arguments for Beanmax.
#[derive(Parser, Debug)]
#[command(name = "beanmax")]
#[command(author, version, about = "Convert beans to diamonds with tier-based efficiency rates", long_about = None)]
struct Args {
    /// Number of beans to convert
    #[arg(short, long)]
    beans: i64,

    /// Show the conversion tier reference table
    #[arg(long, default_value = "false")]
    tiers: bool,

    /// Write the optimized breakdown to a CSV file
    #[arg(long)]
    export: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    println!("Beanmax - Beans to Diamonds Calculator");
    println!("================================================================");
    println!();
    println!("Configuration:");
    println!("  Beans:           {}", args.beans);

    let result = match calculate_diamonds(args.beans) {
        Ok(result) => result,
        Err(err) => {
            println!();
            println!("[WARNING] Unable to calculate conversion: {}.", err);
            println!("{}", efficiency_tip(args.beans));
            return Ok(());
        }
    };

    let optimized = optimize_beans(args.beans);
    display_results(&result, &optimized);
    println!("{}", efficiency_tip(args.beans));
    println!();

    if args.tiers {
        display_tier_table();
    }

    if let Some(ref path) = args.export {
        write_breakdown_csv(&optimized, path)?;
        println!("Breakdown exported to {}.", path.display());
    }

    Ok(())
}

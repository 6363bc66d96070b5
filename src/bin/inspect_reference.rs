use std::env;
use std::path::Path;
use std::process::ExitCode;

use lifeflow_core::domains::region::{load_regions_file, load_sub_regions_file, RegionIndex};
use lifeflow_core::errors::DomainResult;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 2 {
        eprintln!("usage: inspect_reference <districts.json> <upazilas.json> [district name]");
        return ExitCode::from(2);
    }

    match run(&args[0], &args[1], args.get(2).map(String::as_str)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(districts_path: &str, upazilas_path: &str, district: Option<&str>) -> DomainResult<()> {
    println!("🔍 Reference Data Inspection");
    println!("============================");

    let regions = load_regions_file(Path::new(districts_path))?;
    let sub_regions = load_sub_regions_file(Path::new(upazilas_path))?;
    let index = RegionIndex::build(regions, sub_regions);

    println!("📍 Districts: {}", index.region_count());
    println!("📍 Upazilas:  {}", index.sub_region_count());
    println!("⚠️  Orphaned upazilas: {}", index.orphan_count());

    let empty: Vec<&str> = index
        .regions()
        .iter()
        .filter(|region| index.sub_regions_for_id(region.id).is_empty())
        .map(|region| region.name.as_str())
        .collect();
    if !empty.is_empty() {
        println!("⚠️  Districts without upazilas: {}", empty.join(", "));
    }

    if let Some(name) = district {
        println!("\n📋 Upazilas of '{}':", name);
        let candidates = index.sub_regions_for(name);
        if candidates.is_empty() {
            println!("   (none: unknown district or no upazilas)");
        }
        for sub_region in candidates {
            println!("   {:>5}  {}", sub_region.id, sub_region.name);
        }
    }

    Ok(())
}

//! Locate Starlink satellites now.
//!
//! ```text
//! cargo run --example locate_starlink                          # STARLINK-1008, built-in TLE
//! cargo run --example locate_starlink -- tle.txt               # every satellite of a catalog
//! cargo run --example locate_starlink -- tle.txt STARLINK-1008 STARLINK-1130
//! ```
//!
//! `STARLINK_LOG_LEVEL` (`ERROR`, `INFO`, `DEBUG`) selects the verbosity. When a catalog is
//! given, a KML document of the located satellites is written next to it.
use std::collections::HashMap;
use std::env;

use hifitime::Epoch;
use satloc::export::kml::generate_kml;
use satloc::{
    read_catalog_file, LogLevel, Propagator, PropagatorConfig, SatLocation, TleCatalog,
};
use tracing::Level;

const STARLINK_1008: &str = "STARLINK-1008
1 44714U 19074B   25117.42924319 -.00001157  00000+0 -58773-4 0  9990
2 44714  53.0517 166.3609 0001116  99.1558 260.9557 15.06400606301084
";

fn init_tracing(level: LogLevel) {
    let max_level = match level {
        LogLevel::Error => Level::ERROR,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
    };
    tracing_subscriber::fmt().with_max_level(max_level).init();
}

fn print_location(name: &str, location: &SatLocation) {
    println!("{name}");
    println!("  X, Y, Z [km]   = {:.3}, {:.3}, {:.3}", location.x, location.y, location.z);
    println!("  latitude [deg] = {:.6}", location.latitude);
    println!("  longitude [deg]= {:.6}", location.longitude);
    println!("  altitude [km]  = {:.3}", location.altitude);
    if let Some(v) = location.velocity {
        println!("  velocity [km/s]= {v:.3}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_level = LogLevel::from_env_value(env::var("STARLINK_LOG_LEVEL").ok().as_deref());
    init_tracing(log_level);

    let args: Vec<String> = env::args().skip(1).collect();
    let (catalog, catalog_path) = match args.first() {
        Some(path) => (read_catalog_file(path)?, Some(path.clone())),
        None => (TleCatalog::parse(STARLINK_1008), None),
    };
    let names: Vec<String> = if args.len() > 1 {
        args[1..].to_vec()
    } else {
        catalog.names().into_iter().map(String::from).collect()
    };

    let propagator = Propagator::new(
        PropagatorConfig::builder()
            .log_level(log_level)
            .verify_checksum(true)
            .build()?,
    );

    let now = Epoch::now()?;
    let mut located = HashMap::new();
    for (name, result) in propagator.locate_catalog(&catalog, &names, now) {
        match result {
            Ok(location) => {
                print_location(&name, &location);
                located.insert(name, location);
            }
            Err(err) => eprintln!("{name}: {err}"),
        }
    }

    if let Some(path) = catalog_path {
        let kml_path = format!("{path}.kml");
        std::fs::write(&kml_path, generate_kml(&names, &located, now)?)?;
        println!("KML written to {kml_path}");
    }
    Ok(())
}

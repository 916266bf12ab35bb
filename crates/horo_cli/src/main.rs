use clap::{Parser, Subcommand};
use horo_base::{
    BodyCategory, ChartConfig, ChartPoint, ChartResult, GeoLocation, HouseSystem, OrbMode,
    OrbTable, RulerTable, Sign, StaticEphemeris, angular_distance, build_houses, compute_chart,
    degrees_in_sign, locate_house, resolve_aspect,
};
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "horo", about = "Natal chart aspects and house placement")]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Zodiac sign from ecliptic longitude
    Sign {
        /// Ecliptic longitude in degrees
        lon: f64,
    },
    /// Shortest angular separation between two longitudes
    Distance {
        /// First longitude in degrees
        a: f64,
        /// Second longitude in degrees
        b: f64,
    },
    /// Resolve the aspect between two points
    Aspect {
        /// First point as id:category:lon
        #[arg(long)]
        first: String,
        /// Second point as id:category:lon
        #[arg(long)]
        second: String,
        /// Treat orbs as total window width (halved)
        #[arg(long)]
        strict_orbs: bool,
    },
    /// House containing a longitude
    House {
        /// Ecliptic longitude in degrees
        lon: f64,
        /// 12 comma-separated cusp longitudes, house 1 first
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        cusps: Vec<f64>,
    },
    /// Full chart from fixed positions
    Chart {
        /// Body as id:category:lon (repeatable)
        #[arg(long = "body", required = true)]
        bodies: Vec<String>,
        /// 12 comma-separated cusp longitudes, house 1 first
        #[arg(
            long,
            value_delimiter = ',',
            allow_hyphen_values = true,
            requires = "lat",
            requires = "lon"
        )]
        cusps: Option<Vec<f64>>,
        /// Observer latitude in degrees (north positive)
        #[arg(long, allow_hyphen_values = true, requires = "cusps")]
        lat: Option<f64>,
        /// Observer longitude in degrees (east positive)
        #[arg(long, allow_hyphen_values = true, requires = "cusps")]
        lon: Option<f64>,
        /// Julian Date UTC, handed to the ephemeris provider
        #[arg(long, default_value = "2451545.0")]
        jd: f64,
        /// Treat orbs as total window width (halved)
        #[arg(long)]
        strict_orbs: bool,
        /// Classical rulers for Scorpio, Aquarius and Pisces
        #[arg(long)]
        traditional_rulers: bool,
        /// House system code passed to the provider
        #[arg(long, default_value = "P")]
        house_system: char,
    },
}

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("horo=debug,horo_base=debug"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("horo=info,horo_base=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Commands::Sign { lon } => {
            let sign = require_sign(lon);
            let ruler = RulerTable::default().ruler_of(sign);
            println!(
                "{} (index {}, sign {}) - {} {} - ruler {} ({:.4}° in sign)",
                sign.name(),
                sign.index(),
                sign.one_based(),
                sign.modality().name(),
                sign.element().name(),
                ruler,
                degrees_in_sign(lon)
            );
        }

        Commands::Distance { a, b } => {
            println!("{:.4}°", angular_distance(a, b));
        }

        Commands::Aspect {
            first,
            second,
            strict_orbs,
        } => {
            let first = parse_point(&first);
            let second = parse_point(&second);
            let mode = orb_mode(strict_orbs);
            let result = resolve_aspect(&first, &second, &OrbTable::default(), mode)
                .unwrap_or_else(|e| {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                });
            match result {
                Some(a) => println!(
                    "{} {} {}: {} (separation {:.4}°, orb {:.4}°, from {}: {}, from {}: {})",
                    first.id,
                    a.kind.name(),
                    second.id,
                    a.direction.name(),
                    a.separation_deg,
                    a.orb_deg,
                    first.id,
                    yes_no(a.first_exists),
                    second.id,
                    yes_no(a.second_exists)
                ),
                None => println!(
                    "No aspect between {} and {} (separation {:.4}°)",
                    first.id,
                    second.id,
                    angular_distance(first.longitude_deg, second.longitude_deg)
                ),
            }
        }

        Commands::House { lon, cusps } => {
            let cusps = require_cusps(&cusps);
            let houses = build_houses(&cusps);
            match locate_house(lon, &houses) {
                Some(p) => {
                    let span: Vec<_> = p.sign_span.iter().map(|s| s.name()).collect();
                    println!(
                        "House {} ({} to {}, spans {}){}",
                        p.house,
                        p.start_sign.name(),
                        p.end_sign.name(),
                        span.join(", "),
                        if p.is_intercepted_sign {
                            " - intercepted sign"
                        } else {
                            ""
                        }
                    );
                }
                None => {
                    eprintln!("Longitude {lon} matched no house");
                    std::process::exit(1);
                }
            }
        }

        Commands::Chart {
            bodies,
            cusps,
            lat,
            lon,
            jd,
            strict_orbs,
            traditional_rulers,
            house_system,
        } => {
            let points: Vec<ChartPoint> = bodies.iter().map(|b| parse_point(b)).collect();
            let mut provider = StaticEphemeris::new(points);
            let location = match cusps {
                Some(c) => {
                    provider = provider.with_cusps(require_cusps(&c));
                    Some(GeoLocation::new(lat.unwrap_or(0.0), lon.unwrap_or(0.0)))
                }
                None => None,
            };
            let config = ChartConfig {
                orb_mode: orb_mode(strict_orbs),
                rulers: if traditional_rulers {
                    RulerTable::traditional()
                } else {
                    RulerTable::modern()
                },
                house_system: HouseSystem(house_system),
                ..ChartConfig::default()
            };
            debug!(jd, bodies = bodies.len(), "computing chart");

            let chart = compute_chart(&provider, jd, location.as_ref(), &config)
                .unwrap_or_else(|e| {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                });
            print_chart(&chart);
        }
    }
}

fn print_chart(chart: &ChartResult) {
    println!(
        "{:<10} {:<14} {:>9} {:<12} {:<9} {:<6} {:>5}",
        "Body", "Category", "Lon", "Sign", "Modality", "Elem", "House"
    );
    println!("{}", "-".repeat(71));
    for b in &chart.bodies {
        println!(
            "{:<10} {:<14} {:>8.4}° {:<12} {:<9} {:<6} {:>5}{}",
            b.id(),
            b.point.category.name(),
            b.point.longitude_deg,
            b.sign.map_or("-", Sign::name),
            b.modality.map_or("-", |m| m.name()),
            b.element.map_or("-", |e| e.name()),
            b.house().map_or_else(|| "-".to_string(), |h| h.to_string()),
            if b.is_intercepted_sign() { " *" } else { "" }
        );
    }

    if let Some(axes) = &chart.axes {
        println!(
            "\n  ASC: {:.4}°  DC: {:.4}°  MC: {:.4}°  IC: {:.4}°",
            axes.asc.longitude_deg,
            axes.dc.longitude_deg,
            axes.mc.longitude_deg,
            axes.ic.longitude_deg
        );
    }

    if chart.has_houses() {
        println!(
            "\n{:>6} {:>10} {:<12} {:<10} {:>6}  Intercepted",
            "House", "Cusp", "Sign", "Ruler", "In"
        );
        println!("{}", "-".repeat(60));
        for h in &chart.houses {
            let intercepted: Vec<_> = h.intercepted_signs.iter().map(|s| s.name()).collect();
            println!(
                "{:>6} {:>9.4}° {:<12} {:<10} {:>6}  {}",
                h.number,
                h.cusp_deg,
                h.sign.map_or("-", Sign::name),
                h.ruler.map_or("-", |r| r.id),
                h.ruler
                    .and_then(|r| r.house)
                    .map_or_else(|| "-".to_string(), |n| n.to_string()),
                intercepted.join(", ")
            );
        }
    }

    println!("\n{:<10} {:<12} {:<10} {:>8}  Direction", "Body", "Aspect", "With", "Orb");
    println!("{}", "-".repeat(60));
    for (owner, records) in chart.aspects.iter() {
        for r in records {
            println!(
                "{:<10} {:<12} {:<10} {:>7.4}°  {}",
                owner,
                r.aspect.kind.name(),
                r.with,
                r.aspect.orb_deg,
                r.aspect.direction.name()
            );
        }
    }

    let d = &chart.distribution;
    println!(
        "\nModality: cardinal {} fixed {} mutable {}",
        d.modality[0], d.modality[1], d.modality[2]
    );
    println!(
        "Element:  fire {} earth {} air {} water {}",
        d.element[0], d.element[1], d.element[2], d.element[3]
    );

    for diag in &chart.diagnostics {
        eprintln!("warning: {diag}");
    }
}

fn parse_point(s: &str) -> ChartPoint {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 3 {
        eprintln!("Invalid point: {s}");
        eprintln!("Expected id:category:lon, e.g. sun:luminary:295.3");
        std::process::exit(1);
    }
    let category = BodyCategory::from_name(parts[1]).unwrap_or_else(|| {
        eprintln!("Invalid category: {}", parts[1]);
        eprintln!("Valid: luminary, personal, social, transpersonal, axis, other");
        std::process::exit(1);
    });
    let lon: f64 = parts[2].parse().unwrap_or_else(|e| {
        eprintln!("Invalid longitude {}: {e}", parts[2]);
        std::process::exit(1);
    });
    if !lon.is_finite() {
        eprintln!("Longitude must be finite: {}", parts[2]);
        std::process::exit(1);
    }
    ChartPoint::new(parts[0].to_lowercase(), category, lon)
}

fn require_cusps(cusps: &[f64]) -> [f64; 12] {
    <[f64; 12]>::try_from(cusps).unwrap_or_else(|_| {
        eprintln!("Expected 12 cusps, got {}", cusps.len());
        std::process::exit(1);
    })
}

fn require_sign(lon: f64) -> Sign {
    Sign::from_longitude(lon).unwrap_or_else(|| {
        eprintln!("Longitude must be finite: {lon}");
        std::process::exit(1);
    })
}

fn orb_mode(strict: bool) -> OrbMode {
    if strict { OrbMode::Strict } else { OrbMode::Full }
}

fn yes_no(b: bool) -> &'static str {
    if b { "yes" } else { "no" }
}

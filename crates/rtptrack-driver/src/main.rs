//! Drives the arrival tracker with synthetic sequence numbers.

mod generate;
mod logging;

use clap::Parser;

use rtptrack_core::Tracker;

use crate::generate::{Jitter, Monotonic};

fn version_string() -> String {
    let commit = option_env!("BUILD_COMMIT").unwrap_or("unknown");
    let date = option_env!("BUILD_DATE").unwrap_or("unknown");
    format!(
        "{} (commit {commit}, built {date})",
        env!("CARGO_PKG_VERSION")
    )
}

#[derive(Parser)]
#[command(
    name = "rtptrack-driver",
    about = "Drives the arrival tracker with synthetic sequence numbers",
    version = version_string()
)]
struct Cli {
    /// Ahead window radius
    #[arg(long, default_value_t = 100)]
    aw: u16,

    /// Behind window radius
    #[arg(long, default_value_t = 100)]
    bw: u16,

    /// Ahead buffer radius
    #[arg(long, default_value_t = 100)]
    ab: u16,

    /// Behind buffer radius
    #[arg(long, default_value_t = 100)]
    bb: u16,

    /// Debug level; levels above 10 trace every branch
    #[arg(long, default_value_t = 11)]
    dl: u8,

    /// Number of arrivals to generate
    #[arg(long, default_value_t = u64::from(u32::MAX))]
    loops: u64,

    /// Largest jitter around the advancing base sequence; 0 generates a
    /// strictly in-order stream
    #[arg(long, default_value_t = 10)]
    randn: u16,

    /// Seed for the jitter generator; drawn from entropy when omitted
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if std::env::var("RUST_LOG_FORMAT").as_deref() == Ok("json") {
        logging::init_json();
    } else {
        logging::init();
    }

    let tracker = match Tracker::new(cli.aw, cli.bw, cli.ab, cli.bb, cli.dl) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("invalid tracker configuration: {e}");
            std::process::exit(1);
        }
    };

    // Spawn SIGINT handler
    tokio::spawn(async {
        let _ = tokio::signal::ctrl_c().await;
        tracing::info!("received SIGINT, stopping");
        std::process::exit(0);
    });

    // Spawn SIGTERM handler (sent by `docker stop` and service managers)
    #[cfg(unix)]
    tokio::spawn(async {
        let mut sigterm =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("failed to register SIGTERM handler");
        sigterm.recv().await;
        tracing::info!("received SIGTERM, stopping");
        std::process::exit(0);
    });

    run(tracker, &cli);
}

fn run(mut tracker: Tracker, cli: &Cli) {
    let seed = cli.seed.unwrap_or_else(rand::random);

    tracing::info!(
        aw = cli.aw,
        bw = cli.bw,
        ab = cli.ab,
        bb = cli.bb,
        dl = cli.dl,
        loops = cli.loops,
        randn = cli.randn,
        seed,
        "driving tracker"
    );

    let mut arrivals: Box<dyn Iterator<Item = u16>> = if cli.randn == 0 {
        Box::new(Monotonic::new(0))
    } else {
        Box::new(Jitter::new(0, cli.randn, seed))
    };

    let trace = cli.dl > 10;
    for i in 0..cli.loops {
        let seq = arrivals.next().expect("generators are endless");
        let tax = tracker.on_arrival(seq);
        if trace {
            tracing::debug!(
                i,
                seq,
                position = %tax.position,
                category = %tax.category,
                subcategory = %tax.subcategory,
                len = tax.len,
                jump = tax.jump,
                "arrival classified"
            );
        }
    }

    tracing::info!(
        len = tracker.len(),
        max = tracker.max(),
        min = tracker.min(),
        "run complete"
    );
}

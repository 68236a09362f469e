//! 边缘接纳控制仿真
//!
//! 读取 JSON 配置，运行一次仿真（或多 seed 重复），打印汇总并按需导出结果。

use clap::Parser;
use edgesim_rs::admission::{AdmissionSim, run_ensemble};
use edgesim_rs::lb::LbStrategy;
use edgesim_rs::sim::SimConfig;
use edgesim_rs::stats::{write_snapshots_csv, write_summary_json};
use edgesim_rs::viz::PlotData;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "edge-sim",
    about = "Admission control and load balancing simulation for edge servers"
)]
struct Args {
    /// Path to the JSON config
    #[arg(long)]
    config: PathBuf,

    /// Override simulation.duration (seconds)
    #[arg(long)]
    duration: Option<f64>,

    /// Override simulation.seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override load balancer strategy: random, round_robin or least_loaded
    #[arg(long)]
    strategy: Option<LbStrategy>,

    /// Write server snapshots as CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the summary as JSON
    #[arg(long)]
    summary_json: Option<PathBuf>,

    /// Write plot data (bandwidth series, per-class outcomes) as JSON
    #[arg(long)]
    plot_json: Option<PathBuf>,

    /// Number of independent replications with consecutive seeds.
    /// With more than one, only --summary-json is written
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    replications: u64,
}

fn main() {
    // 初始化 tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    // 多次重复只汇总计数；逐次的快照与绘图数据没有单一输出目标
    if args.replications > 1 && (args.csv.is_some() || args.plot_json.is_some()) {
        return Err("--csv and --plot-json require a single run (--replications 1)".into());
    }

    let mut config = SimConfig::load(&args.config)?;
    if let Some(d) = args.duration {
        config.simulation.duration = d;
    }
    if let Some(seed) = args.seed {
        config.simulation.seed = Some(seed);
    }
    if let Some(strategy) = args.strategy {
        config.load_balancer.strategy = strategy;
    }
    config.validate_for_run()?;

    if args.replications > 1 {
        let base = config.simulation.seed.unwrap_or(0);
        let seeds: Vec<u64> = (0..args.replications).map(|i| base.wrapping_add(i)).collect();
        let ensemble = run_ensemble(&config, &seeds)?;
        for run in &ensemble.runs {
            println!(
                "replication seed={} arrivals={} accepted={} rejected={}",
                run.seed,
                run.summary.total_arrivals,
                run.summary.total_accepted,
                run.summary.total_rejected
            );
        }
        if let Some(mean) = ensemble.mean_acceptance_pct() {
            println!("mean_acceptance_pct={mean:.2}");
        }
        if let Some(path) = &args.summary_json {
            serde_json::to_writer_pretty(BufWriter::new(File::create(path)?), &ensemble)?;
        }
        return Ok(());
    }

    let mut sim = AdmissionSim::new(&config)?;
    let stats = sim.run()?;
    let summary = stats.summary();
    print!("{summary}");

    if let Some(path) = &args.csv {
        write_snapshots_csv(stats.server_history(), BufWriter::new(File::create(path)?))?;
        println!("snapshots written to {}", path.display());
    }
    if let Some(path) = &args.summary_json {
        write_summary_json(&summary, BufWriter::new(File::create(path)?))?;
    }
    if let Some(path) = &args.plot_json {
        let plot = PlotData::from_statistics(stats);
        serde_json::to_writer_pretty(BufWriter::new(File::create(path)?), &plot)?;
    }

    Ok(())
}

/*!
 * MLFQ Simulator - Main Entry Point
 *
 * Seeds a workload, runs the dispatch loop and renders every event:
 * - MLFQ_CONFIG: JSON scheduler configuration file
 * - MLFQ_QUANTA: comma-separated quanta (used when MLFQ_CONFIG is unset)
 * - MLFQ_WORKLOAD: JSON seed list (default: built-in demo workload)
 * - MLFQ_EVENTS_JSON: print events as JSON lines
 */

use miette::Result;
use tracing::{info, warn};

use mlfq_sim::monitoring::{run_span, ConsoleSink, Format};
use mlfq_sim::workload::WORKLOAD_ENV;
use mlfq_sim::{demo_workload, init_tracing, load_workload, Mlfq, MlfqConfig};

const CONFIG_ENV: &str = "MLFQ_CONFIG";
const EVENTS_JSON_ENV: &str = "MLFQ_EVENTS_JSON";

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false)
}

fn load_config() -> Result<MlfqConfig> {
    let config = match std::env::var(CONFIG_ENV) {
        Ok(path) => {
            info!(path = %path, "Loading scheduler configuration");
            MlfqConfig::load(&path)?
        }
        Err(_) => MlfqConfig::from_env()?,
    };
    Ok(config)
}

fn main() -> Result<()> {
    init_tracing();

    let config = load_config()?;
    info!(levels = config.levels(), quanta = ?config.quanta(), "Scheduler configured");

    let seeds = match std::env::var(WORKLOAD_ENV) {
        Ok(path) => {
            info!(path = %path, "Loading workload");
            load_workload(&path)?
        }
        Err(_) => demo_workload(),
    };

    let mut mlfq = Mlfq::new(config);
    for rejected in mlfq.seed(seeds) {
        warn!(
            job_id = rejected.id().get(),
            label = rejected.job.label(),
            error = %rejected.error,
            "Seed rejected"
        );
    }

    let format = if env_flag(EVENTS_JSON_ENV) {
        Format::Json
    } else {
        Format::Text { color: true }
    };
    let mut console = ConsoleSink::stdout(format);

    let stats = {
        let _span = run_span(mlfq.levels(), mlfq.len()).entered();
        mlfq.run_loop(&mut console)
    };

    if console.write_errors() > 0 {
        warn!(failed = console.write_errors(), "Some events could not be written");
    }
    info!(
        dispatches = stats.dispatches,
        demotions = stats.demotions,
        retirements = stats.retirements,
        rejected = stats.rejected,
        work_consumed = stats.work_consumed,
        "Simulation complete"
    );

    Ok(())
}

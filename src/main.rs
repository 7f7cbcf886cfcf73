use caitao_rust::{config, run, CONFIG};
use log::{error, info};
use std::process::ExitCode;

fn main() -> ExitCode {
    config::init_dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(CONFIG.log_filter.as_str())).init();

    match run(&CONFIG) {
        Ok(report) => {
            info!("{} piezas exportadas ({} descartadas) en {} [{} bytes, sha256 {}]",
                  report.working_set,
                  report.discarded,
                  report.receipt.path,
                  report.receipt.bytes,
                  report.receipt.sha256);
            info!("run {} fingerprint {} ({} ms)", report.run_id, report.flow_fingerprint, report.elapsed_ms);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

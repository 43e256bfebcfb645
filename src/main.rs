//! Thin CLI over the prediction engine: three arguments in, one number out.

use reimburse_ensemble::{fallback, CaseStore};
use tracing_subscriber::EnvFilter;

const DATASET_PATH: &str = "public_cases.json";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 3 {
        println!("{:.2}", fallback::LAST_RESORT);
        return;
    }

    let store = CaseStore::load_path(DATASET_PATH);
    let amount = fallback::calculate_reimbursement(&store, &args[0], &args[1], &args[2]);
    println!("{amount:.2}");
}

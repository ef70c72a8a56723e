use hacker_stories::app::App;
use hacker_stories::config::Config;
use hacker_stories::repl::Repl;
use hacker_stories::search::HnSearch;
use hacker_stories::store::JsonFileStore;
use hacker_stories::{logging, output};
use std::process::ExitCode;
use std::sync::Arc;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let config = Config::from_env();
    logging::init_tracing(&config.log_filter);

    let store = match JsonFileStore::open(&config.store_path) {
        Ok(store) => store,
        Err(e) => {
            output::error(&format!(
                "Could not open {}: {}",
                config.store_path.display(),
                e
            ));
            return ExitCode::FAILURE;
        }
    };

    let api = Arc::new(HnSearch::new(config.api_base.clone(), config.hits_per_page));
    let app = match App::new(config, api, store) {
        Ok(app) => app,
        Err(e) => {
            output::error(&e.to_string());
            return ExitCode::FAILURE;
        }
    };

    Repl::new(app).run().await;
    ExitCode::SUCCESS
}

use axum::{
    routing::{get, post},
    Extension, Router,
};
use scholarship_recommender::artifacts::store::ArtifactStore;
use scholarship_recommender::context::AppContext;
use scholarship_recommender::dataset::loader::load_csv;
use scholarship_recommender::recommend::handlers::{
    handle_predict, handle_scholarship_details,
};
use scholarship_recommender::vectorizer::space::VectorSpace;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

const DEFAULT_BIND: &str = "0.0.0.0:8080";
const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug)]
struct CliArgs {
    bind_addr: SocketAddr,
    artifacts_url: String,
    data_dir: PathBuf,
}

/// Parses the flags following the program name. `--artifacts` is required;
/// `--bind` and `--data-dir` fall back to defaults.
fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut bind_addr: SocketAddr = DEFAULT_BIND
        .parse()
        .map_err(|e| format!("invalid default bind address: {}", e))?;
    let mut artifacts_url: Option<String> = None;
    let mut data_dir = PathBuf::from(DEFAULT_DATA_DIR);

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| "missing value for --bind".to_string())?;
                bind_addr = value
                    .parse()
                    .map_err(|e| format!("invalid --bind value {:?}: {}", value, e))?;
                i += 2;
            }
            "--artifacts" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| "missing value for --artifacts".to_string())?;
                artifacts_url = Some(value.clone());
                i += 2;
            }
            "--data-dir" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| "missing value for --data-dir".to_string())?;
                data_dir = PathBuf::from(value);
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    let artifacts_url = artifacts_url.ok_or_else(|| "--artifacts is required".to_string())?;

    Ok(CliArgs {
        bind_addr,
        artifacts_url,
        data_dir,
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let cli = match parse_args(&args[1..]) {
        Ok(cli) => cli,
        Err(reason) => {
            eprintln!("{}", reason);
            eprintln!(
                "Usage: {} --artifacts <base-url> [--bind <addr:port>] [--data-dir <path>]",
                args[0]
            );
            eprintln!(
                "Example: {} --artifacts https://storage.example.com/scholarships --bind 0.0.0.0:8080",
                args[0]
            );
            std::process::exit(1);
        }
    };

    // 1. Fetch reference data from blob storage:
    let store = ArtifactStore::new(&cli.artifacts_url, &cli.data_dir);
    let paths = store.fetch_all().await?;

    // 2. Load dataset and vector space into memory:
    let dataset = load_csv(&paths.dataset)?;
    let space = VectorSpace::load(&paths.vectorizer, &paths.matrix)?;
    let ctx = Arc::new(AppContext::new(dataset, space)?);

    tracing::info!(
        "Serving {} scholarships over a {}-term TF-IDF space",
        ctx.dataset.len(),
        ctx.space.dims()
    );

    // 3. HTTP Router:
    let app = Router::new()
        .route("/predict", post(handle_predict))
        .route("/scholarship_details", get(handle_scholarship_details))
        .layer(Extension(ctx));

    // 4. Start HTTP server:
    tracing::info!("HTTP server listening on {}", cli.bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(cli.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

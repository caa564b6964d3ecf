use clap::Parser;
use onco_demo::utils::{logger, validation::Validate};
use onco_demo::{resolve, FetchConfig, HttpStore, ModelManifest, RemoteStore, Resolution, S3Store};
use std::path::Path;

#[derive(Parser)]
#[command(name = "fetch-models")]
#[command(about = "Fetch model artifacts from remote storage into the local artifact directory")]
struct Args {
    /// Path to a TOML model manifest; built-in model list when omitted
    #[arg(short, long)]
    manifest: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting model fetch");

    let manifest = match &args.manifest {
        Some(path) => {
            tracing::info!("📁 Loading manifest from: {}", path);
            match ModelManifest::from_file(path) {
                Ok(manifest) => manifest,
                Err(e) => {
                    eprintln!("❌ Failed to load manifest '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(2);
                }
            }
        }
        None => ModelManifest::default(),
    };

    // 驗證清單
    if let Err(e) = manifest.validate() {
        tracing::error!("❌ Manifest validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    // Credentials are only read (and validated) when some model actually
    // lives on S3.
    let needs_s3 = manifest
        .models
        .values()
        .any(|location| location.starts_with("s3://"));

    let s3_store = if needs_s3 {
        let fetch_config = match FetchConfig::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ {}", e);
                eprintln!("💡 Set AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY, and REGION_NAME");
                std::process::exit(2);
            }
        };

        if let Err(e) = fetch_config.validate() {
            tracing::error!("❌ Fetch configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }

        Some(S3Store::from_config(&fetch_config).await)
    } else {
        None
    };

    let http_store = HttpStore::new();
    let artifact_dir = Path::new(&manifest.artifact_dir);

    // 依序解析，一次一個模型
    for (model_name, location) in &manifest.models {
        let store: &dyn RemoteStore = if location.starts_with("s3://") {
            s3_store.as_ref().expect("S3 store built when manifest has s3 locations")
        } else {
            &http_store
        };

        match resolve(store, model_name, location, artifact_dir).await {
            Ok(Resolution::AlreadyResolved) => {
                tracing::info!("{} model already loaded.", model_name);
            }
            Ok(Resolution::Loaded(_)) => {
                tracing::info!("{} model loaded successfully.", model_name);
            }
            Err(e) => {
                // Fetch failures are fatal to the resolution step; no retry.
                tracing::error!("❌ Failed to resolve model {}: {}", model_name, e);
                eprintln!("❌ Failed to resolve model {}: {}", model_name, e);
                std::process::exit(1);
            }
        }
    }

    println!("✅ Model fetch completed successfully!");
    println!("📁 Artifacts are in: {}", manifest.artifact_dir);
    Ok(())
}

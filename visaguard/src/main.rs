// visaguard/src/main.rs

mod cli;

use clap::Parser;
use comfy_table::Table;

use cli::{Cli, Commands};

// Infrastructure (Config & Adapters)
use visaguard_core::infrastructure::config::{
    DataValidationConfig, load_pipeline_config, load_schema,
};
use visaguard_core::infrastructure::readers::CsvDatasetReader;
use visaguard_core::infrastructure::store::JsonLinesStore;

// Domain
use visaguard_core::domain::artifact::DataIngestionArtifact;
use visaguard_core::domain::drift::StatisticalDriftAnalyzer;

// Application (Use Cases)
use chrono::Utc;
use visaguard_core::application::{DataIngestion, DataValidation, clean_workspace, run_training_pipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logging lives at the process entry point; the library only emits events.
    // RUST_LOG=debug visaguard run ... for details
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        // --- USE CASE: FULL PIPELINE ---
        Commands::Run { workspace_dir } => {
            let start = std::time::Instant::now();

            println!("⚙️  Loading configuration...");
            let config = load_pipeline_config(&workspace_dir)?;
            println!("   Pipeline: {}", config.pipeline_name);

            let store = JsonLinesStore::new(workspace_dir.join(&config.data_dir));

            match run_training_pipeline(&workspace_dir, &config, store).await {
                Ok(result) => {
                    println!(
                        "\n✨ Run finished in {:.2?}. Artifacts: {}",
                        start.elapsed(),
                        result.artifact_dir.display()
                    );
                    if !result.validation_status {
                        // Non-zero exit so CI/CD treats the gate as closed
                        std::process::exit(1);
                    }
                }
                Err(e) => {
                    eprintln!("\n💥 CRITICAL PIPELINE ERROR: {}", e);
                    std::process::exit(1);
                }
            }
        }

        // --- USE CASE: INGESTION ONLY ---
        Commands::Ingest { workspace_dir } => {
            println!("⚙️  Loading configuration...");
            let config = load_pipeline_config(&workspace_dir)?;

            let run_dir = config.run_dir(&workspace_dir, Utc::now());
            std::fs::create_dir_all(&run_dir)?;

            let store = JsonLinesStore::new(workspace_dir.join(&config.data_dir));
            let ingestion = DataIngestion::new(store, config.ingestion_config(&run_dir));

            match ingestion.initiate_data_ingestion().await {
                Ok(artifact) => {
                    println!("✨ Ingestion finished:");
                    println!("   feature store: {}", artifact.feature_store_file_path.display());
                    println!("   train:         {}", artifact.trained_file_path.display());
                    println!("   test:          {}", artifact.test_file_path.display());
                }
                Err(e) => {
                    eprintln!("❌ Ingestion failed: {}", e);
                    std::process::exit(1);
                }
            }
        }

        // --- USE CASE: AD-HOC VALIDATION ---
        Commands::Validate {
            train,
            test,
            schema,
            report,
        } => {
            let descriptor = load_schema(&schema)?;
            let validation = DataValidation::new(
                CsvDatasetReader,
                StatisticalDriftAnalyzer::default(),
                descriptor,
                DataValidationConfig {
                    drift_report_file_path: report,
                },
            );

            let ingestion = DataIngestionArtifact {
                feature_store_file_path: train.clone(),
                trained_file_path: train,
                test_file_path: test,
            };

            match validation.initiate_data_validation(&ingestion) {
                Ok(artifact) => {
                    let mut table = Table::new();
                    table.set_header(vec!["Field", "Value"]);
                    table.add_row(vec![
                        "validation_status".to_string(),
                        artifact.validation_status.to_string(),
                    ]);
                    table.add_row(vec![
                        "drift_report".to_string(),
                        artifact.drift_report_file_path.display().to_string(),
                    ]);
                    println!("{table}");
                    if !artifact.message.is_empty() {
                        println!("{}", artifact.message.trim_end());
                    }

                    if !artifact.validation_status {
                        std::process::exit(1);
                    }
                }
                Err(e) => {
                    eprintln!("❌ Validation failed: {}", e);
                    std::process::exit(1);
                }
            }
        }

        // --- USE CASE: CLEAN ---
        Commands::Clean { workspace_dir } => {
            if let Err(e) = clean_workspace(&workspace_dir) {
                eprintln!("❌ Clean failed: {}", e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

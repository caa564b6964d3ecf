use clap::Parser;
use onco_demo::utils::{logger, validation::Validate};
use onco_demo::{
    canned_samples, sample_by_name, Catalog, CliConfig, DemoError, PredictionConsole,
    PredictionReport, Sample,
};
use std::io::{self, Write};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting onco-demo console");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    // 模型目錄只載入一次，之後每輪預測共用同一份 catalog
    let catalog = match Catalog::load(Path::new(&config.artifact_dir)) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("Error loading models: {}", e);
            eprintln!("❌ Error loading models. Please check the artifacts directory.");
            std::process::exit(1);
        }
    };

    if catalog.is_empty() {
        tracing::warn!("No models found in the artifacts directory.");
        println!("⚠️  No models found in {}.", config.artifact_dir);
        println!("💡 Run fetch-models first to download artifacts.");
        return Ok(());
    }

    tracing::info!("📦 Catalog ready with {} model(s)", catalog.len());
    let console = PredictionConsole::new(&catalog);

    // 兩個選項都由命令列給定時執行單次預測
    if let (Some(model_name), Some(sample_name)) = (&config.model, &config.sample) {
        let Some(sample) = sample_by_name(sample_name) else {
            eprintln!("❌ Unknown sample: {}", sample_name);
            std::process::exit(2);
        };

        if run_prediction(&console, model_name, sample).is_err() {
            std::process::exit(1);
        }
        return Ok(());
    }

    interactive_loop(&console, &catalog, &config)
}

fn interactive_loop(
    console: &PredictionConsole,
    catalog: &Catalog,
    config: &CliConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("🚀 Breast Cancer Prediction Console");
    println!("Pick a model and a sample to see the prediction against the known label.");

    loop {
        let model_name = match &config.model {
            Some(name) => name.clone(),
            None => match prompt_model(catalog)? {
                Some(name) => name,
                None => break,
            },
        };

        let sample = match &config.sample {
            Some(name) => match sample_by_name(name) {
                Some(sample) => sample,
                None => {
                    eprintln!("❌ Unknown sample: {}", name);
                    std::process::exit(2);
                }
            },
            None => match prompt_sample()? {
                Some(sample) => sample,
                None => break,
            },
        };

        // 每輪錯誤各自隔離，失敗後可換模型或樣本再試
        let _ = run_prediction(console, &model_name, sample);
    }

    println!("👋 Bye!");
    Ok(())
}

fn prompt_model(catalog: &Catalog) -> io::Result<Option<String>> {
    let names = catalog.names();

    println!();
    println!("Available models:");
    for (i, name) in names.iter().enumerate() {
        println!("  {}. {}", i + 1, name);
    }

    loop {
        print!("Choose model (number or name, q to quit): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let input = line.trim();
        if input.eq_ignore_ascii_case("q") {
            return Ok(None);
        }

        if let Ok(index) = input.parse::<usize>() {
            if (1..=names.len()).contains(&index) {
                return Ok(Some(names[index - 1].to_string()));
            }
        } else if names.contains(&input) {
            return Ok(Some(input.to_string()));
        }

        println!("❌ Invalid choice: {}", input);
    }
}

fn prompt_sample() -> io::Result<Option<&'static Sample>> {
    let samples = canned_samples();

    println!();
    println!("Available samples:");
    for (i, sample) in samples.iter().enumerate() {
        println!("  {}. {} (actual: {})", i + 1, sample.name, sample.label);
    }

    loop {
        print!("Choose sample (number or name, q to quit): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let input = line.trim();
        if input.eq_ignore_ascii_case("q") {
            return Ok(None);
        }

        if let Ok(index) = input.parse::<usize>() {
            if (1..=samples.len()).contains(&index) {
                return Ok(Some(&samples[index - 1]));
            }
        } else if let Some(sample) = sample_by_name(input) {
            return Ok(Some(sample));
        }

        println!("❌ Invalid choice: {}", input);
    }
}

fn run_prediction(
    console: &PredictionConsole,
    model_name: &str,
    sample: &Sample,
) -> onco_demo::Result<()> {
    match console.predict(model_name, sample) {
        Ok(report) => {
            print_report(&report);
            Ok(())
        }
        Err(e @ DemoError::ModelNotFound { .. }) => {
            eprintln!("❌ Selected model not found!");
            Err(e)
        }
        Err(e) => {
            eprintln!("❌ Error making prediction. Please try again.");
            Err(e)
        }
    }
}

fn print_report(report: &PredictionReport) {
    println!();
    println!("{}", report.render_deviation_chart());
    println!("Prediction Result:");
    println!("  Model:           {}", report.model_name);
    println!("  Sample:          {}", report.sample_name);
    println!("  Predicted Label: {}", report.predicted);
    println!("  Actual Label:    {}", report.actual);

    if report.is_correct() {
        println!("✅ Prediction is CORRECT!");
    } else {
        println!("❌ Prediction is WRONG!");
    }
}

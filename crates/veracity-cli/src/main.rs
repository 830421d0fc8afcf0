use anyhow::Result;
use clap::{Arg, ArgMatches, Command, ValueHint};
use std::path::PathBuf;

use veracity_classifiers::config::PipelineConfig;
use veracity_cli::analyze::{load_pipeline_config, run_analysis};

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or("VERACITY_LOG", "error,veracity=info"),
    )
    .init();

    let matches = Command::new("veracity")
        .version(clap::crate_version!())
        .about("Veracity - Fake news detection from labeled article datasets")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("analyze")
                .about("Train, evaluate, and score a labeled news dataset")
                .arg(
                    Arg::new("dataset")
                        .help("Path to the labeled dataset CSV (columns: text, label)")
                        .default_value("fake-news-dataset.csv")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help("Path to a JSON pipeline configuration file")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output_file")
                        .short('o')
                        .long("output")
                        .help(
                            "Path the prediction table is written to. Overrides the \
                             output path in the configuration file.",
                        )
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("test_fraction")
                        .long("test-fraction")
                        .help("Fraction of rows held out for evaluation.")
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .help("Seed for the stratified shuffle.")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    Arg::new("text_column")
                        .long("text-column")
                        .help("Name of the article text column."),
                )
                .arg(
                    Arg::new("label_column")
                        .long("label-column")
                        .help("Name of the class label column."),
                ),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Version {version}\n\n\
             {all-args}{after-help}",
        )
        .get_matches();

    match matches.subcommand() {
        Some(("analyze", analyze_matches)) => handle_analyze(analyze_matches),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn handle_analyze(matches: &ArgMatches) -> Result<()> {
    let dataset: &PathBuf = matches.get_one("dataset").unwrap();

    let mut config = if let Some(config_path) = matches.get_one::<PathBuf>("config") {
        log::info!("Using config: {:?}", config_path);
        load_pipeline_config(config_path)?
    } else {
        PipelineConfig::default()
    };

    if let Some(output) = matches.get_one::<PathBuf>("output_file") {
        config.output_path = output.clone();
    }
    if let Some(&test_fraction) = matches.get_one::<f64>("test_fraction") {
        config.test_fraction = test_fraction;
    }
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        config.seed = seed;
    }
    if let Some(text_column) = matches.get_one::<String>("text_column") {
        config.text_column = text_column.clone();
    }
    if let Some(label_column) = matches.get_one::<String>("label_column") {
        config.label_column = label_column.clone();
    }

    log::info!("Analyzing dataset: {:?}", dataset);
    match run_analysis(dataset, &config) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Analysis failed: {:#}", e);
            std::process::exit(1)
        }
    }
}

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tracing::{error, warn};

use package_availability::check::{PackageCheck, build_report};
use package_availability::config::{self, CheckConfig};
use package_availability::http::build_client;
use package_availability::logging::{LogFormat, init_logging};
use package_availability::metrics::{MetricSink, StatsdSink};
use package_availability::probe::HttpProber;
use package_availability::version::MavenMetadataSource;

#[derive(Parser)]
#[command(name = "package-availability")]
#[command(version, about = "Checks that the latest Jenkins packages can be downloaded")]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Maven metadata document listing the published versions
    #[arg(long, global = true, value_name = "URL")]
    metadata_url: Option<String>,

    /// Host serving the packages
    #[arg(long, global = true)]
    host: Option<String>,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    /// Write logs to a file instead of stderr (defaults to the data directory)
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        num_args = 0..=1,
        require_equals = true
    )]
    log_file: Option<Option<PathBuf>>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check packages and emit the availability gauge
    Check {
        /// Package to check; repeat for several. Defaults to the configured instances
        #[arg(long = "package", value_name = "ID")]
        packages: Vec<String>,

        /// DogStatsD agent address
        #[arg(long, value_name = "ADDR")]
        statsd: Option<String>,

        /// Print metrics to stdout instead of sending them
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the resolved versions and the availability of every package
    Report {
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    fn load_config(&self) -> anyhow::Result<CheckConfig> {
        let mut config = match &self.config {
            Some(path) => CheckConfig::load(path)?,
            None => CheckConfig::default(),
        };
        if let Some(url) = &self.metadata_url {
            config.metadata_url = url.clone();
        }
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_file = cli
        .log_file
        .clone()
        .map(|path| path.unwrap_or_else(config::log_path));
    let _guard = init_logging(cli.log_format, log_file.as_deref())?;

    let config = cli.load_config()?;

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(cli.command, config))
}

async fn run(command: Command, mut config: CheckConfig) -> anyhow::Result<()> {
    let client = build_client(config.timeout()).context("Failed to create HTTP client")?;
    let source = Arc::new(MavenMetadataSource::new(client.clone(), &config.metadata_url));
    let prober = Arc::new(HttpProber::new(client));

    match command {
        Command::Check {
            packages,
            statsd,
            dry_run,
        } => {
            if let Some(address) = statsd {
                config.statsd.address = address;
            }
            let packages = config.packages_to_check(&packages)?;

            let sink: Arc<dyn MetricSink> = if dry_run {
                Arc::new(StatsdSink::stdout())
            } else {
                Arc::new(StatsdSink::udp(&config.statsd.address)?)
            };

            let check = PackageCheck::new(source, prober, sink, &config.host);

            let mut failed = 0;
            for package in &packages {
                if let Err(e) = check.run(package).await {
                    error!("Check for package {} failed: {}", package, e);
                    failed += 1;
                }
            }
            if failed > 0 {
                bail!("{} of {} check runs failed", failed, packages.len());
            }
        }
        Command::Report { json } => {
            let report = build_report(source.as_ref(), prober.as_ref(), &config.host)
                .await
                .inspect_err(|e| warn!("Error when resolving versions: {}", e))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report);
            }
        }
    }

    Ok(())
}

use clap::Parser;
use pebcaw::{Config, DesktopNotifier, IpInfoResolver, Monitor, MonitorSettings, RunOutcome};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const APP_NAME: &str = "pebcaw";

#[derive(Parser)]
#[command(name = "pebcaw")]
#[command(about = "Monitor internet connection security by checking the public IP against VPN and Tor exit lists")]
#[command(version)]
struct Cli {
    /// Observation interval in seconds [default: 300]
    #[arg(long, value_name = "SECS")]
    interval: Option<u64>,

    /// Warn if the IP is in a SIGINT-alliance country
    #[arg(long, alias = "warn_SIGINT_country")]
    warn_sigint_country: bool,

    /// Display IP details continuously
    #[arg(long)]
    display: bool,

    /// Restart the program regularly
    #[arg(long, alias = "restart_regularly")]
    restart_regularly: bool,

    /// Seconds between scheduled restarts [default: 500]
    #[arg(long, value_name = "SECS")]
    restart_after: Option<u64>,

    /// Comma-separated whitelist of two-letter country codes (e.g. CH)
    ///
    /// When set, only the country is checked; VPN and Tor detection is off.
    #[arg(long, alias = "countries_whitelist", value_name = "CODES")]
    countries_whitelist: Option<String>,

    /// Config file [default: <config dir>/pebcaw/config.toml if present]
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn overrides(&self) -> pebcaw::Overrides {
        pebcaw::Overrides {
            interval_secs: self.interval,
            warn_flagged_country: self.warn_sigint_country,
            display: self.display,
            restart_regularly: self.restart_regularly,
            restart_after_secs: self.restart_after,
            countries_whitelist: self.countries_whitelist.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logs go to stderr so the continuous display owns stdout.
    // RUST_LOG, when set, takes precedence over --verbose.
    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = match Config::discover(cli.config.as_deref()) {
        Ok(config) => config.apply(cli.overrides()),
        Err(e) => {
            error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = config.validate() {
        error!("{}", e);
        std::process::exit(1);
    }

    let resolver = IpInfoResolver::new(config.endpoint.clone(), config.request_timeout())?;
    let notifier = DesktopNotifier::new(APP_NAME).with_icon(config.icon.clone());
    let settings = MonitorSettings::from_config(&config);
    if settings.options.country_whitelist.is_some() {
        info!("Country whitelist active, VPN and Tor checks disabled");
    }
    let monitor = Monitor::new(resolver, notifier, settings);

    let mut shutdown = pebcaw::ShutdownSignal::install()?;

    let banner = format!(
        "{} {} monitoring internet connection security",
        APP_NAME,
        env!("CARGO_PKG_VERSION")
    );
    println!("\n{}\n^c to stop\n", banner);
    monitor.announce(&banner);

    match monitor.run(&mut shutdown).await {
        RunOutcome::Interrupted => {
            info!("Interrupted, stopping");
        }
        RunOutcome::RestartDue => {
            // Only returns if exec failed
            if let Err(e) = pebcaw::platform::restart_process() {
                error!("Restart failed: {}", e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

//! The observation loop
//!
//! Each tick resolves the public address, classifies it, and hands every
//! alert to the notifier. Nothing carries over between ticks except the
//! restart timer.
//!
//! # Lifecycle
//!
//! `run` loops until one of:
//! - Ctrl+C: returns `RunOutcome::Interrupted`
//! - the restart timer expires (when enabled): returns `RunOutcome::RestartDue`
//!   and leaves the re-exec to the caller

pub mod timer;

pub use timer::RestartTimer;

use crate::classify::{AlertEvent, ClassifyOptions, ReferenceSets, classify};
use crate::config::Config;
use crate::display;
use crate::geo::{AddressResolver, ObservationResult};
use crate::notify::Notifier;
use crate::signal::ShutdownSignal;
use std::cell::RefCell;
use std::io::{self, Stdout, Write};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Loop settings derived from the merged configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorSettings {
    pub interval: Duration,
    pub options: ClassifyOptions,
    pub display: bool,
    pub restart_regularly: bool,
    pub restart_after: Duration,
}

impl MonitorSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            interval: config.interval(),
            options: config.classify_options(),
            display: config.display,
            restart_regularly: config.restart_regularly,
            restart_after: config.restart_after(),
        }
    }
}

/// Why `run` stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Interrupted,
    RestartDue,
}

/// What a single tick saw and reported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    pub observation: Option<ObservationResult>,
    pub alerts: Vec<AlertEvent>,
}

/// Observation loop; `W` receives the continuous display
pub struct Monitor<R, N, W = Stdout> {
    resolver: R,
    notifier: N,
    refs: &'static ReferenceSets,
    settings: MonitorSettings,
    timer: RestartTimer,
    output: RefCell<W>,
}

impl<R: AddressResolver, N: Notifier> Monitor<R, N> {
    pub fn new(resolver: R, notifier: N, settings: MonitorSettings) -> Self {
        let timer = RestartTimer::new(settings.restart_after);
        Self {
            resolver,
            notifier,
            refs: ReferenceSets::builtin(),
            settings,
            timer,
            output: RefCell::new(io::stdout()),
        }
    }
}

impl<R: AddressResolver, N: Notifier, W: Write> Monitor<R, N, W> {
    /// Draw the continuous display somewhere other than stdout
    pub fn with_output<O: Write>(self, output: O) -> Monitor<R, N, O> {
        Monitor {
            resolver: self.resolver,
            notifier: self.notifier,
            refs: self.refs,
            settings: self.settings,
            timer: self.timer,
            output: RefCell::new(output),
        }
    }

    pub fn with_timer(mut self, timer: RestartTimer) -> Self {
        self.timer = timer;
        self
    }

    /// Send the startup notification
    pub fn announce(&self, message: &str) {
        let _ = self.notifier.notify(message, None);
    }

    /// Resolve, classify and notify once
    pub async fn tick(&self) -> TickReport {
        let observation = match self.resolver.resolve().await {
            Ok(observation) => observation,
            Err(e) => {
                warn!("Failed to observe public IP: {}", e);
                let alert = AlertEvent::resolution_failed(&e);
                let _ = self.notifier.notify_alert(&alert);
                return TickReport {
                    observation: None,
                    alerts: vec![alert],
                };
            }
        };

        debug!(
            "Observed {} ({})",
            observation.ip,
            observation.country.as_deref().unwrap_or("unknown")
        );

        let alerts = classify(&observation, self.refs, &self.settings.options);
        for alert in &alerts {
            warn!("{}", alert);
            // Best-effort: a missing notification daemon is not our problem
            let _ = self.notifier.notify_alert(alert);
        }

        if self.settings.display {
            let mut output = self.output.borrow_mut();
            if let Err(e) = display::redraw(&mut *output, &observation) {
                debug!("Failed to redraw display: {}", e);
            }
        }

        TickReport {
            observation: Some(observation),
            alerts,
        }
    }

    pub fn restart_due(&self) -> bool {
        self.settings.restart_regularly && self.timer.is_due()
    }

    /// Run ticks until interrupted or a restart is due
    pub async fn run(&self, shutdown: &mut ShutdownSignal) -> RunOutcome {
        info!(
            "Observing every {}s{}",
            self.settings.interval.as_secs(),
            if self.settings.restart_regularly {
                format!(", restarting after {}s", self.settings.restart_after.as_secs())
            } else {
                String::new()
            }
        );

        loop {
            if shutdown.is_triggered() {
                return RunOutcome::Interrupted;
            }

            tokio::select! {
                _ = shutdown.wait() => return RunOutcome::Interrupted,
                report = self.tick() => {
                    debug!("Tick finished with {} alert(s)", report.alerts.len());
                }
            }

            if self.restart_due() {
                info!("regular restart procedure engaged");
                return RunOutcome::RestartDue;
            }

            tokio::select! {
                _ = shutdown.wait() => return RunOutcome::Interrupted,
                _ = tokio::time::sleep(self.settings.interval) => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::AlertKind;
    use crate::geo::ResolutionError;
    use crate::notify::NotificationError;
    use crate::signal::ShutdownTrigger;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Replays a fixed script of results, then keeps failing
    struct ScriptedResolver {
        script: Mutex<VecDeque<Result<ObservationResult, ResolutionError>>>,
        calls: AtomicUsize,
        stop_after: Option<(usize, ShutdownTrigger)>,
    }

    impl ScriptedResolver {
        fn new(script: Vec<Result<ObservationResult, ResolutionError>>) -> Self {
            Self {
                script: Mutex::new(script.into()),
                calls: AtomicUsize::new(0),
                stop_after: None,
            }
        }

        fn stop_after(mut self, calls: usize, trigger: ShutdownTrigger) -> Self {
            self.stop_after = Some((calls, trigger));
            self
        }
    }

    impl AddressResolver for ScriptedResolver {
        async fn resolve(&self) -> Result<ObservationResult, ResolutionError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if let Some((limit, trigger)) = &self.stop_after {
                if call >= *limit {
                    trigger.trigger();
                }
            }
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(ResolutionError::Status(503)))
        }
    }

    #[derive(Default)]
    struct Recorder {
        messages: RefCell<Vec<String>>,
        fail: bool,
    }

    impl Notifier for Recorder {
        fn notify(&self, message: &str, _detail: Option<&str>) -> Result<(), NotificationError> {
            self.messages.borrow_mut().push(message.to_string());
            if self.fail {
                Err(NotificationError::Dispatch("no daemon".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn observed(ip: &str, country: &str) -> Result<ObservationResult, ResolutionError> {
        Ok(ObservationResult {
            ip: ip.to_string(),
            country: Some(country.to_string()),
            ..Default::default()
        })
    }

    fn settings(warn_flagged_country: bool) -> MonitorSettings {
        MonitorSettings {
            interval: Duration::from_millis(1),
            options: ClassifyOptions {
                warn_flagged_country,
                country_whitelist: None,
            },
            display: false,
            restart_regularly: false,
            restart_after: Duration::from_secs(500),
        }
    }

    #[test]
    fn test_settings_from_config() {
        let config = Config {
            interval_secs: 60,
            display: true,
            restart_regularly: true,
            restart_after_secs: 900,
            countries_whitelist: vec!["ch".to_string()],
            ..Config::default()
        };
        let settings = MonitorSettings::from_config(&config);
        assert_eq!(settings.interval, Duration::from_secs(60));
        assert_eq!(settings.restart_after, Duration::from_secs(900));
        assert!(settings.display);
        assert!(settings.restart_regularly);
        assert!(settings.options.country_whitelist.unwrap().contains("CH"));
    }

    #[tokio::test]
    async fn test_tick_resolution_failure_alerts_once() {
        let recorder = Recorder::default();
        let resolver = ScriptedResolver::new(vec![Err(ResolutionError::Status(500))]);
        let monitor = Monitor::new(resolver, &recorder, settings(true));

        let report = monitor.tick().await;
        assert_eq!(report.observation, None);
        assert_eq!(report.alerts.len(), 1);
        assert_eq!(report.alerts[0].kind, AlertKind::ResolutionFailed);
        assert_eq!(
            *recorder.messages.borrow(),
            vec!["WARNING: error observing IP, unable to identify as secure"]
        );
    }

    #[tokio::test]
    async fn test_tick_forwards_all_alerts_in_order() {
        let recorder = Recorder::default();
        let resolver = ScriptedResolver::new(vec![observed("8.8.8.8", "US")]);
        let monitor = Monitor::new(resolver, &recorder, settings(true));

        let report = monitor.tick().await;
        assert_eq!(report.observation.unwrap().ip, "8.8.8.8");
        assert_eq!(
            *recorder.messages.borrow(),
            vec![
                "WARNING: IP not identified as AirVPN or Tor",
                "WARNING: IP in SIGINT country",
            ]
        );
    }

    #[tokio::test]
    async fn test_tick_trusted_ip_is_quiet() {
        let recorder = Recorder::default();
        let resolver = ScriptedResolver::new(vec![observed("213.152.161.69", "IT")]);
        let monitor = Monitor::new(resolver, &recorder, settings(false));

        let report = monitor.tick().await;
        assert!(report.alerts.is_empty());
        assert!(recorder.messages.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_tick_survives_notifier_failure() {
        let recorder = Recorder {
            fail: true,
            ..Recorder::default()
        };
        let resolver = ScriptedResolver::new(vec![observed("8.8.8.8", "US")]);
        let monitor = Monitor::new(resolver, &recorder, settings(true));

        let report = monitor.tick().await;
        assert_eq!(report.alerts.len(), 2);
        assert_eq!(recorder.messages.borrow().len(), 2);
    }

    #[tokio::test]
    async fn test_run_continues_after_failure() {
        let recorder = Recorder::default();
        let (trigger, mut shutdown) = ShutdownSignal::manual();
        let resolver = ScriptedResolver::new(vec![
            Err(ResolutionError::MissingField("ip")),
            observed("8.8.8.8", "CH"),
        ])
        .stop_after(2, trigger);
        let monitor = Monitor::new(resolver, &recorder, settings(true));

        let outcome = monitor.run(&mut shutdown).await;
        assert_eq!(outcome, RunOutcome::Interrupted);
        assert_eq!(
            *recorder.messages.borrow(),
            vec![
                "WARNING: error observing IP, unable to identify as secure",
                "WARNING: IP not identified as AirVPN or Tor",
            ]
        );
    }

    #[tokio::test]
    async fn test_run_returns_restart_due() {
        let recorder = Recorder::default();
        let (_trigger, mut shutdown) = ShutdownSignal::manual();
        let resolver = ScriptedResolver::new(vec![observed("213.152.161.69", "IT")]);
        let mut settings = settings(false);
        settings.restart_regularly = true;
        let monitor = Monitor::new(resolver, &recorder, settings)
            .with_timer(RestartTimer::new(Duration::ZERO));

        assert!(monitor.restart_due());
        let outcome = monitor.run(&mut shutdown).await;
        assert_eq!(outcome, RunOutcome::RestartDue);
        assert_eq!(monitor.resolver.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_restart_disabled_ignores_timer() {
        let recorder = Recorder::default();
        let resolver = ScriptedResolver::new(vec![]);
        let monitor = Monitor::new(resolver, &recorder, settings(false))
            .with_timer(RestartTimer::new(Duration::ZERO));
        assert!(!monitor.restart_due());
    }

    #[tokio::test]
    async fn test_run_stops_when_already_interrupted() {
        let recorder = Recorder::default();
        let (trigger, mut shutdown) = ShutdownSignal::manual();
        trigger.trigger();
        let resolver = ScriptedResolver::new(vec![observed("8.8.8.8", "US")]);
        let monitor = Monitor::new(resolver, &recorder, settings(true));

        assert_eq!(monitor.run(&mut shutdown).await, RunOutcome::Interrupted);
        assert_eq!(monitor.resolver.calls.load(Ordering::SeqCst), 0);
        assert!(recorder.messages.borrow().is_empty());
    }

    fn display_settings() -> MonitorSettings {
        MonitorSettings {
            display: true,
            ..settings(false)
        }
    }

    #[tokio::test]
    async fn test_tick_redraws_display() {
        let recorder = Recorder::default();
        let resolver = ScriptedResolver::new(vec![observed("213.152.161.69", "IT")]);
        let monitor = Monitor::new(resolver, &recorder, display_settings()).with_output(Vec::new());

        monitor.tick().await;

        let written = String::from_utf8(monitor.output.borrow().clone()).unwrap();
        assert!(written.starts_with("\x1b[2J"));
        assert!(written.contains("IP:           213.152.161.69\n"));
        assert!(written.contains("country:      IT\n"));
    }

    #[tokio::test]
    async fn test_tick_skips_display_on_failure() {
        let recorder = Recorder::default();
        let resolver = ScriptedResolver::new(vec![Err(ResolutionError::Status(502))]);
        let monitor = Monitor::new(resolver, &recorder, display_settings()).with_output(Vec::new());

        let report = monitor.tick().await;
        assert_eq!(report.alerts[0].kind, AlertKind::ResolutionFailed);
        assert!(monitor.output.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_tick_display_off_writes_nothing() {
        let recorder = Recorder::default();
        let resolver = ScriptedResolver::new(vec![observed("8.8.8.8", "US")]);
        let monitor = Monitor::new(resolver, &recorder, settings(true)).with_output(Vec::new());

        monitor.tick().await;
        assert!(monitor.output.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_display_redrawn_each_tick() {
        let recorder = Recorder::default();
        let (trigger, mut shutdown) = ShutdownSignal::manual();
        let resolver = ScriptedResolver::new(vec![
            observed("213.152.161.69", "IT"),
            Err(ResolutionError::Status(503)),
            observed("8.8.8.8", "CH"),
        ])
        .stop_after(3, trigger);
        let monitor = Monitor::new(resolver, &recorder, display_settings()).with_output(Vec::new());

        assert_eq!(monitor.run(&mut shutdown).await, RunOutcome::Interrupted);

        let written = String::from_utf8(monitor.output.borrow().clone()).unwrap();
        // Two successful ticks, one failed tick with no redraw
        assert_eq!(written.matches("\x1b[2J").count(), 2);
        assert!(written.contains("213.152.161.69"));
        assert!(written.contains("8.8.8.8"));
    }

    #[tokio::test]
    async fn test_announce() {
        let recorder = Recorder::default();
        let monitor = Monitor::new(ScriptedResolver::new(vec![]), &recorder, settings(false));
        monitor.announce("pebcaw monitoring internet connection security");
        assert_eq!(recorder.messages.borrow().len(), 1);
    }
}

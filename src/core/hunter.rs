//! Generation loop
//! Drives generate -> evaluate -> classify -> persist -> push

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use futures_util::future::join_all;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::core::classifier::MatchClassifier;
use crate::core::patterns::PatternRuleSet;
use crate::models::config::VanityConfig;
use crate::models::errors::{AppError, AppResult};
use crate::models::types::{Account, MatchResult};
use crate::providers::keygen::AccountProvider;
use crate::providers::notifier::PushNotifier;
use crate::providers::storage::MatchStore;
use crate::telemetry::RunStatistics;

/// Cooperative stop flag, checked once per iteration
#[derive(Debug, Clone, Default)]
pub struct ShutdownSignal {
    stop: Arc<AtomicBool>,
}

impl ShutdownSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask every loop to stop at its next yield point
    pub fn trigger(&self) {
        self.stop.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_triggered(&self) -> bool {
        self.stop.load(Ordering::SeqCst)
    }
}

/// A persisted match, as reported by `process_match`
#[derive(Debug, Clone)]
pub struct SavedMatch {
    pub result: MatchResult,
    pub display_name: String,
    pub path: std::path::PathBuf,
}

/// The vanity hunter - owns the pipeline and its collaborators
pub struct VanityHunter<P: AccountProvider> {
    workers: usize,
    provider: Arc<P>,
    rules: Arc<PatternRuleSet>,
    classifier: MatchClassifier,
    store: MatchStore,
    notifier: Option<PushNotifier>,
    stats: Arc<RunStatistics>,
    shutdown: ShutdownSignal,
}

impl<P: AccountProvider> Clone for VanityHunter<P> {
    fn clone(&self) -> Self {
        Self {
            workers: self.workers,
            provider: self.provider.clone(),
            rules: self.rules.clone(),
            classifier: self.classifier.clone(),
            store: self.store.clone(),
            notifier: self.notifier.clone(),
            stats: self.stats.clone(),
            shutdown: self.shutdown.clone(),
        }
    }
}

impl<P: AccountProvider + 'static> VanityHunter<P> {
    /// Create a hunter with the standard rule table
    pub fn new(
        config: &VanityConfig,
        provider: P,
        stats: Arc<RunStatistics>,
        shutdown: ShutdownSignal,
    ) -> AppResult<Self> {
        let notifier = match &config.push_url {
            Some(url) => Some(PushNotifier::new(
                url.clone(),
                config.push_timeout,
                config.push_max_in_flight,
            )?),
            None => None,
        };

        Ok(Self::with_parts(
            config.workers,
            provider,
            Arc::new(PatternRuleSet::standard()),
            MatchStore::new(config.output_dir.clone()),
            notifier,
            stats,
            shutdown,
        ))
    }

    /// Assemble a hunter from explicit parts
    pub fn with_parts(
        workers: usize,
        provider: P,
        rules: Arc<PatternRuleSet>,
        store: MatchStore,
        notifier: Option<PushNotifier>,
        stats: Arc<RunStatistics>,
        shutdown: ShutdownSignal,
    ) -> Self {
        Self {
            workers: workers.max(1),
            provider: Arc::new(provider),
            classifier: MatchClassifier::new(rules.clone()),
            rules,
            store,
            notifier,
            stats,
            shutdown,
        }
    }

    pub fn stats(&self) -> Arc<RunStatistics> {
        self.stats.clone()
    }

    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.clone()
    }

    /// Run every worker until shutdown. A fatal worker error stops the
    /// others and is returned.
    pub async fn run(&self) -> AppResult<()> {
        info!(
            "🚀 Hunting with {} worker(s), {} rules, output: {}",
            self.workers,
            self.rules.len(),
            self.store.root().display()
        );

        let handles: Vec<JoinHandle<AppResult<()>>> = (0..self.workers)
            .map(|id| {
                let hunter = self.clone();
                tokio::spawn(async move { hunter.worker_loop(id).await })
            })
            .collect();

        let mut first_error = None;
        for joined in join_all(handles).await {
            let outcome = joined.map_err(AppError::from).and_then(|result| result);
            if let Err(e) = outcome {
                self.shutdown.trigger();
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// One generation loop; returns `Ok` only when shutdown was requested
    async fn worker_loop(&self, id: usize) -> AppResult<()> {
        loop {
            tokio::task::yield_now().await;
            if self.shutdown.is_triggered() {
                return Ok(());
            }

            match self.step().await {
                Ok(_) => {}
                Err(e) if !e.code.is_fatal() => {
                    warn!("⚠️ Worker {} continuing after: {}", id, e);
                }
                Err(e) => {
                    error!("💥 Worker {} stopped: {}", id, e);
                    self.shutdown.trigger();
                    return Err(e);
                }
            }
        }
    }

    /// One iteration: generate, count, evaluate and handle a match
    pub async fn step(&self) -> AppResult<Option<SavedMatch>> {
        let account = self.provider.create_account()?;
        self.stats.record_iteration();

        match self.rules.evaluate(account.base58()) {
            Some(result) => self.process_match(&account, result).await.map(Some),
            None => Ok(None),
        }
    }

    /// Count, classify, persist and push one match
    pub async fn process_match(&self, account: &Account, result: MatchResult) -> AppResult<SavedMatch> {
        self.stats.record_match(&result.rule_name);

        let class = self.classifier.classify(account.base58(), &result);
        println!();
        info!("✅ Matched {}: {}", class.display_name, account.base58());

        let path = self.store.save(&class, account).await?;
        info!("💾 Saved to {}", path.display());

        if let Some(notifier) = &self.notifier {
            // detached, never awaited here
            let _ = notifier.notify(account);
        }

        Ok(SavedMatch {
            result,
            display_name: class.display_name,
            path,
        })
    }
}

/// Background redraw of the single status line
pub fn spawn_progress_line(
    stats: Arc<RunStatistics>,
    every: std::time::Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        loop {
            interval.tick().await;
            print!("\r⟳ Generating addresses... #{}", stats.iterations());
            let _ = std::io::stdout().flush();
        }
    })
}

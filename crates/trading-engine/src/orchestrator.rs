//! The polling loop.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};
use trading_core::error::{DataError, RiskError, SignalError, TradingError, TradingResult};
use trading_core::traits::{ExecutionPort, MarketData, SignalSource};
use trading_core::types::{BarSeries, OrderHandle, OrderRequest, Signal};
use trading_risk::RiskSizer;

use crate::clock::{Clock, SystemClock};
use crate::config::{ExecutionMode, OrchestratorConfig};
use crate::position_book::PositionBook;
use crate::shutdown::{Shutdown, Sleeper};

/// What happened to one instrument during a cycle.
#[derive(Debug)]
pub enum InstrumentOutcome {
    /// Skipped by admission control; no data was fetched.
    AtCapacity { open: usize },
    /// The signal source had nothing to trade.
    NoSignal,
    /// Actionable signal, logged but not executed (signal-only mode).
    Signal(Signal),
    /// The computed lot size rounded to zero; no order was placed.
    ZeroSize(Signal),
    /// Order placed and confirmed; the open-trade count was incremented.
    Executed(OrderHandle),
    /// Order placed but not yet confirmed; counts wait for reconciliation.
    Unconfirmed(OrderHandle),
    /// A collaborator failed; the instrument is skipped this cycle.
    Failed(TradingError),
}

impl InstrumentOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, InstrumentOutcome::Failed(_))
    }
}

/// Per-instrument results of one in-session cycle, in poll order.
#[derive(Debug)]
pub struct CycleReport {
    pub started_at: DateTime<Utc>,
    pub outcomes: Vec<(String, InstrumentOutcome)>,
}

impl CycleReport {
    fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            started_at,
            outcomes: Vec::new(),
        }
    }

    /// Outcome for one instrument.
    pub fn outcome(&self, instrument: &str) -> Option<&InstrumentOutcome> {
        self.outcomes
            .iter()
            .find(|(name, _)| name == instrument)
            .map(|(_, outcome)| outcome)
    }

    /// Number of instruments that failed.
    pub fn failures(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| o.is_failure()).count()
    }

    /// Instruments with an actionable signal, whatever happened afterwards.
    pub fn actionable(&self) -> impl Iterator<Item = &str> {
        self.outcomes.iter().filter_map(|(name, outcome)| match outcome {
            InstrumentOutcome::Signal(_)
            | InstrumentOutcome::ZeroSize(_)
            | InstrumentOutcome::Executed(_)
            | InstrumentOutcome::Unconfirmed(_) => Some(name.as_str()),
            _ => None,
        })
    }
}

/// Result of [`Orchestrator::run_cycle`].
#[derive(Debug)]
pub enum CycleOutcome {
    /// The session window was closed; nothing was polled.
    OutsideSession,
    Polled(CycleReport),
}

/// Session-gated, sequential multi-instrument polling loop.
pub struct Orchestrator {
    config: OrchestratorConfig,
    data: Arc<dyn MarketData>,
    signals: Arc<dyn SignalSource>,
    execution: Arc<dyn ExecutionPort>,
    clock: Arc<dyn Clock>,
    sleeper: Arc<dyn Sleeper>,
    sizer: RiskSizer,
    positions: PositionBook,
}

impl Orchestrator {
    /// Create an orchestrator using the system clock and a fresh [`Shutdown`].
    ///
    /// Fails if the configuration is invalid.
    pub fn new(
        config: OrchestratorConfig,
        data: Arc<dyn MarketData>,
        signals: Arc<dyn SignalSource>,
        execution: Arc<dyn ExecutionPort>,
    ) -> TradingResult<Self> {
        config.validate()?;
        let sizer = config.risk.sizer()?;
        let positions = PositionBook::new(&config.instruments);

        Ok(Self {
            config,
            data,
            signals,
            execution,
            clock: Arc::new(SystemClock),
            sleeper: Arc::new(Shutdown::new()),
            sizer,
            positions,
        })
    }

    /// Replace the clock.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the sleeper (and with it, the shutdown signal).
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    /// Current open-trade counts.
    pub fn positions(&self) -> &PositionBook {
        &self.positions
    }

    /// Run cycles until the sleeper reports shutdown.
    ///
    /// Only sizing errors escape a cycle; collaborator failures are isolated
    /// per instrument.
    pub async fn run(&mut self) -> TradingResult<()> {
        info!(
            instruments = ?self.config.instruments,
            session = %self.config.session,
            timeframe = %self.config.timeframe,
            mode = ?self.config.mode,
            data = self.data.name(),
            signals = self.signals.name(),
            execution = self.execution.name(),
            "Orchestrator started"
        );

        while self.step().await? {}

        info!("Shutdown requested, orchestrator stopped");
        Ok(())
    }

    /// Run one cycle followed by its sleep.
    ///
    /// Returns `false` once shutdown has been requested.
    pub async fn step(&mut self) -> TradingResult<bool> {
        let pause = match self.run_cycle().await? {
            CycleOutcome::OutsideSession => self.config.idle_interval,
            CycleOutcome::Polled(report) => {
                debug!(
                    polled = report.outcomes.len(),
                    failures = report.failures(),
                    actionable = report.actionable().count(),
                    "Cycle complete"
                );
                self.config.poll_interval
            }
        };
        Ok(self.pause(pause).await)
    }

    /// Run one cycle without sleeping.
    pub async fn run_cycle(&mut self) -> TradingResult<CycleOutcome> {
        let now = self.clock.now();
        if !self.config.session.is_open_at(now) {
            info!(
                time = %now.format("%H:%M:%S"),
                session = %self.config.session,
                "Outside trading session, sleeping"
            );
            return Ok(CycleOutcome::OutsideSession);
        }

        if self.config.mode == ExecutionMode::Live {
            self.reconcile_positions().await;
        }

        let mut report = CycleReport::new(now);
        let instruments = self.config.instruments.clone();
        for instrument in instruments {
            let outcome = self.process_instrument(&instrument).await?;
            report.outcomes.push((instrument, outcome));
        }

        Ok(CycleOutcome::Polled(report))
    }

    async fn pause(&self, duration: Duration) -> bool {
        debug!(secs = duration.as_secs(), "Sleeping");
        self.sleeper.sleep(duration).await
    }

    async fn process_instrument(&mut self, instrument: &str) -> Result<InstrumentOutcome, RiskError> {
        let cap = self.config.risk.max_concurrent_per_instrument;
        if self.positions.is_at_capacity(instrument, cap) {
            let open = self.positions.open_count(instrument);
            debug!(instrument, open, cap, "At capacity, skipping");
            return Ok(InstrumentOutcome::AtCapacity { open });
        }

        let signal = match self.evaluate(instrument).await {
            Ok(signal) => signal,
            Err(err) => {
                report_failure(instrument, &err);
                return Ok(InstrumentOutcome::Failed(err));
            }
        };

        if !signal.is_actionable() {
            debug!(instrument, "No signal");
            return Ok(InstrumentOutcome::NoSignal);
        }

        info!(
            instrument,
            direction = %signal.direction,
            stop = %signal.stop_distance,
            target = %signal.target_distance,
            confidence = ?signal.confidence,
            "SIGNAL"
        );

        match self.config.mode {
            ExecutionMode::SignalOnly => Ok(InstrumentOutcome::Signal(signal)),
            ExecutionMode::Live => self.execute(instrument, signal).await,
        }
    }

    /// Fetch bars and ask the signal source for a decision.
    async fn evaluate(&self, instrument: &str) -> TradingResult<Signal> {
        let bars = self
            .data
            .fetch_bars(instrument, self.config.timeframe, self.config.bar_count)
            .await?;

        let mut series =
            BarSeries::with_capacity(instrument, self.config.timeframe, self.config.bar_count);
        series.extend(bars);

        let signal = self.signals.generate_signal(instrument, &series)?;
        if signal.is_actionable() {
            if signal.stop_distance <= Decimal::ZERO {
                return Err(SignalError::InvalidSignal {
                    instrument: instrument.to_string(),
                    reason: format!("stop distance {} is not positive", signal.stop_distance),
                }
                .into());
            }
            if signal.target_distance < Decimal::ZERO {
                return Err(SignalError::InvalidSignal {
                    instrument: instrument.to_string(),
                    reason: format!("target distance {} is negative", signal.target_distance),
                }
                .into());
            }
        }
        Ok(signal)
    }

    /// Size and place an order for an admitted, actionable signal.
    async fn execute(&mut self, instrument: &str, signal: Signal) -> Result<InstrumentOutcome, RiskError> {
        let Some(side) = signal.direction.side() else {
            return Ok(InstrumentOutcome::NoSignal);
        };

        let balance = match self.execution.account_balance().await {
            Ok(balance) => balance,
            Err(err) => {
                let err = TradingError::from(err);
                report_failure(instrument, &err);
                return Ok(InstrumentOutcome::Failed(err));
            }
        };

        let size = self
            .sizer
            .size(balance, self.config.risk.risk_fraction, signal.stop_distance)?;
        if size.is_zero() {
            warn!(instrument, %balance, stop = %signal.stop_distance, "Lot size rounds to zero, not trading");
            return Ok(InstrumentOutcome::ZeroSize(signal));
        }

        let request = OrderRequest::new(
            instrument,
            side,
            size,
            signal.stop_distance,
            signal.target_distance,
        );

        match self.execution.place_order(request).await {
            Ok(handle) if handle.is_confirmed() => {
                self.positions.record_open(instrument);
                info!(
                    instrument,
                    order_id = %handle.id,
                    side = %handle.side,
                    size = %handle.size,
                    open = self.positions.open_count(instrument),
                    "Order confirmed"
                );
                Ok(InstrumentOutcome::Executed(handle))
            }
            Ok(handle) => {
                warn!(
                    instrument,
                    order_id = %handle.id,
                    status = ?handle.status,
                    "Order not confirmed, waiting for reconciliation"
                );
                Ok(InstrumentOutcome::Unconfirmed(handle))
            }
            Err(err) => {
                let err = TradingError::from(err);
                report_failure(instrument, &err);
                Ok(InstrumentOutcome::Failed(err))
            }
        }
    }

    /// Refresh open-trade counts from the execution layer.
    async fn reconcile_positions(&mut self) {
        match self.execution.list_open_positions(None).await {
            Ok(positions) => {
                let untracked = self.positions.reconcile(&positions);
                if !untracked.is_empty() {
                    warn!(instruments = ?untracked, "Open positions on unconfigured instruments");
                }
                debug!(open = self.positions.total(), "Positions reconciled");
            }
            Err(err) => {
                warn!(error = %err, "Position reconciliation failed, keeping previous counts");
            }
        }
    }
}

fn report_failure(instrument: &str, err: &TradingError) {
    match err {
        TradingError::Data(DataError::InvalidInstrument(_)) => {
            error!(instrument, error = %err, "Instrument misconfigured, it will fail every cycle");
        }
        _ => error!(instrument, error = %err, "Error processing instrument"),
    }
}

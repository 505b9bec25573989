//! Reconciliation worker for stuck ledger entries.
//!
//! A disbursement record is written as `Pending` before the gateway call
//! and normally transitions within the same request. An entry still
//! `Pending` well past that window means the process died mid-workflow or
//! the completing write failed after the gateway side effect, and a human
//! must compare it against the gateway's records before any resolution.

use std::time::Duration;

use tokio::time::sleep;
use tracing::{error, info, instrument, warn};

use payout_types::LedgerStore;

/// Default age after which a pending entry counts as stuck.
pub const DEFAULT_STALE_AFTER: chrono::Duration = chrono::Duration::minutes(15);

/// Default sweep interval.
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

pub struct ReconciliationWorker<L> {
    ledger: L,
    stale_after: chrono::Duration,
    sweep_interval: Duration,
}

impl<L: LedgerStore> ReconciliationWorker<L> {
    pub fn new(ledger: L) -> Self {
        Self {
            ledger,
            stale_after: DEFAULT_STALE_AFTER,
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
        }
    }

    pub fn with_timing(ledger: L, stale_after: chrono::Duration, sweep_interval: Duration) -> Self {
        Self {
            ledger,
            stale_after,
            sweep_interval,
        }
    }

    #[instrument(skip(self))]
    pub async fn run(self) {
        info!(
            stale_after_minutes = self.stale_after.num_minutes(),
            "Starting reconciliation worker"
        );
        loop {
            self.sweep().await;
            sleep(self.sweep_interval).await;
        }
    }

    /// One pass over the ledger. Flags stuck entries without mutating
    /// them; resolution requires the gateway's view of the attempt.
    async fn sweep(&self) {
        match self.ledger.stale_pending(self.stale_after).await {
            Ok(stuck) => {
                for record in stuck {
                    warn!(
                        payment_id = %record.payment_id,
                        customer_id = %record.customer_id,
                        amount = %record.amount,
                        currency = %record.currency,
                        created_at = %record.created_at,
                        "disbursement stuck in Pending, needs manual reconciliation"
                    );
                }
            }
            Err(e) => {
                error!("Failed to list pending disbursements: {}", e);
            }
        }
    }
}

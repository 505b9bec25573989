//! Payment Orchestrator
//!
//! Composes the customer directory, OAuth token provider, payment gateway,
//! and ledger store into the end-to-end payout workflow. Contains NO
//! infrastructure logic - pure business orchestration.
//!
//! The workflow is strictly linear with early exit on failure:
//! validate -> look up customer -> write pending ledger entry -> fetch
//! token -> authorize -> complete ledger entry. Nothing is retried; a
//! failed step is terminal for the invocation.

use tracing::{info, warn};

use payout_types::{
    AccessTokenProvider, CustomerDirectory, CustomerId, CustomerRecord, CustomerResponse,
    LedgerInsert, LedgerStore, PaymentConfirmation, PaymentError, PaymentGateway, PaymentId,
    PaymentRecord, PaymentRequest, PaymentStatus, RegisterCustomerRequest, SubmitPaymentRequest,
    ValidationError,
};

/// Tunable behavior of the orchestrator.
#[derive(Debug, Clone)]
pub struct OrchestratorPolicy {
    /// When set, the email on the directory record must equal the email in
    /// the submission, so funds cannot be redirected to an address other
    /// than the one on record.
    pub require_email_match: bool,
}

impl Default for OrchestratorPolicy {
    fn default() -> Self {
        Self {
            require_email_match: true,
        }
    }
}

/// Application service for payout operations.
///
/// Generic over the four ports - adapters are injected at compile time,
/// which keeps the workflow testable with in-memory substitutes.
pub struct PaymentOrchestrator<D, T, G, L> {
    directory: D,
    tokens: T,
    gateway: G,
    ledger: L,
    policy: OrchestratorPolicy,
}

impl<D, T, G, L> PaymentOrchestrator<D, T, G, L>
where
    D: CustomerDirectory,
    T: AccessTokenProvider,
    G: PaymentGateway,
    L: LedgerStore,
{
    pub fn new(directory: D, tokens: T, gateway: G, ledger: L) -> Self {
        Self::with_policy(directory, tokens, gateway, ledger, OrchestratorPolicy::default())
    }

    pub fn with_policy(
        directory: D,
        tokens: T,
        gateway: G,
        ledger: L,
        policy: OrchestratorPolicy,
    ) -> Self {
        Self {
            directory,
            tokens,
            gateway,
            ledger,
            policy,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Payment workflow
    // ─────────────────────────────────────────────────────────────────────────

    /// Runs the payout workflow for one submission.
    pub async fn submit_payment(
        &self,
        submission: SubmitPaymentRequest,
    ) -> Result<PaymentConfirmation, PaymentError> {
        // Validation happens before any directory, gateway, or ledger call.
        let request = PaymentRequest::from_submission(&submission)?;

        let customer = self
            .directory
            .lookup(&request.customer_id)
            .await?
            .ok_or_else(|| PaymentError::CustomerNotFound(request.customer_id.clone()))?;

        if self.policy.require_email_match && customer.email != request.email {
            return Err(PaymentError::IdentityMismatch);
        }

        // The internal record exists before the external side effect, so a
        // crash between the two leaves a Pending entry for reconciliation
        // instead of an untracked gateway authorization.
        let pending = PaymentRecord::pending(&request);
        match self.ledger.insert_pending(&pending).await? {
            LedgerInsert::Inserted => {}
            LedgerInsert::Duplicate(existing) => {
                info!(
                    payment_id = %existing.payment_id,
                    "idempotent resubmission, returning recorded outcome"
                );
                return Ok(PaymentConfirmation::from_record(existing));
            }
        }

        let token = match self.tokens.fetch_token().await {
            Ok(token) => token,
            Err(err) => {
                let (status, detail) = (err.surfaced_status(), err.detail());
                self.abandon(&pending.payment_id).await;
                return Err(PaymentError::AuthFailure { status, detail });
            }
        };

        let authorization = match self
            .gateway
            .authorize(&token, &request.email, request.amount, request.currency)
            .await
        {
            Ok(authorization) => authorization,
            Err(err) => {
                let (status, detail) = (err.surfaced_status(), err.detail());
                self.abandon(&pending.payment_id).await;
                return Err(PaymentError::PaymentDeclined { status, detail });
            }
        };

        // A failure here leaves the entry Pending on purpose: the gateway
        // side effect happened, and reconciliation must see the record.
        self.ledger
            .mark_completed(&pending.payment_id, &authorization.gateway_ref)
            .await?;

        let mut completed = pending;
        completed.status = PaymentStatus::Completed;
        completed.gateway_ref = Some(authorization.gateway_ref);
        Ok(PaymentConfirmation::from_record(completed))
    }

    /// Marks a pending entry failed after a clean gateway refusal.
    ///
    /// Best effort: if the update itself fails the entry stays Pending and
    /// the reconciliation worker will flag it.
    async fn abandon(&self, id: &PaymentId) {
        if let Err(err) = self.ledger.mark_failed(id).await {
            warn!(payment_id = %id, error = %err, "could not mark pending record failed");
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Customer directory flows
    // ─────────────────────────────────────────────────────────────────────────

    /// Registers a customer: validate, then write. No gateway involvement.
    pub async fn register_customer(
        &self,
        req: RegisterCustomerRequest,
    ) -> Result<CustomerResponse, PaymentError> {
        let customer_id = CustomerId::new(&req.customer_id).ok_or_else(|| ValidationError {
            field: "customer_id",
            reason: "must not be empty".to_string(),
        })?;

        let email = req.email.trim();
        if email.is_empty() {
            return Err(ValidationError {
                field: "email",
                reason: "must not be empty".to_string(),
            }
            .into());
        }

        let record = CustomerRecord::new(customer_id, email.to_string());
        self.directory.register(record.clone()).await?;
        Ok(record.into())
    }

    /// Looks up a customer by identifier.
    pub async fn get_customer(&self, raw_id: &str) -> Result<CustomerResponse, PaymentError> {
        let id = CustomerId::new(raw_id).ok_or_else(|| ValidationError {
            field: "customer_id",
            reason: "must not be empty".to_string(),
        })?;

        let record = self
            .directory
            .lookup(&id)
            .await?
            .ok_or(PaymentError::CustomerNotFound(id))?;
        Ok(record.into())
    }
}

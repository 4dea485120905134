//! # Logging Utilities
//!
//! Structured logging for signature operations on top of `tracing`. Raw byte
//! payloads are only ever logged through [`sanitize_data`], and private key
//! material is never logged at all.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sig_core::logging::{init_tracing, sanitize_data};
//!
//! // Installs the global subscriber; call once per process
//! init_tracing().expect("Failed to init tracing");
//!
//! let message = b"payload";
//! tracing::info!("Signing {}", sanitize_data(message));
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use sig_primitives::hash::sha256;
use std::cell::RefCell;
use std::fmt;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "sig_core=info,sig_primitives=info,crypto::operation=info";

/// Payloads up to this size are shown by length only
const FINGERPRINT_THRESHOLD: usize = 32;

/// Bytes of the SHA-256 digest shown as a fingerprint
const FINGERPRINT_LEN: usize = 8;

// ============================================================================
// Correlation IDs
// ============================================================================

thread_local! {
    static CORRELATION_ID: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Generate a new UUID v4 correlation ID.
///
/// ```rust
/// use sig_core::logging::generate_correlation_id;
///
/// assert_eq!(generate_correlation_id().len(), 36);
/// ```
#[must_use]
pub fn generate_correlation_id() -> String {
    Uuid::new_v4().to_string()
}

/// Set the correlation ID for the current thread.
pub fn set_correlation_id(id: impl Into<String>) {
    CORRELATION_ID.with(|cell| {
        *cell.borrow_mut() = Some(id.into());
    });
}

/// Correlation ID of the current thread, if any.
#[must_use]
pub fn current_correlation_id() -> Option<String> {
    CORRELATION_ID.with(|cell| cell.borrow().clone())
}

/// Clear the correlation ID for the current thread.
pub fn clear_correlation_id() {
    CORRELATION_ID.with(|cell| {
        *cell.borrow_mut() = None;
    });
}

/// Run `f` with `id` as the correlation ID, restoring the previous one after.
///
/// ```rust
/// use sig_core::logging::{current_correlation_id, with_correlation_id};
///
/// let result = with_correlation_id("request-123", || {
///     assert_eq!(current_correlation_id().as_deref(), Some("request-123"));
///     42
/// });
/// assert_eq!(result, 42);
/// assert_eq!(current_correlation_id(), None);
/// ```
pub fn with_correlation_id<F, R>(id: impl Into<String>, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = CorrelationGuard::with_id(id);
    f()
}

/// RAII scope for a correlation ID
///
/// Sets an ID on creation and restores whatever was set before on drop.
#[derive(Debug)]
pub struct CorrelationGuard {
    previous: Option<String>,
}

impl CorrelationGuard {
    /// Open a scope with a fresh UUID v4 ID.
    #[must_use]
    pub fn new() -> Self {
        Self::with_id(generate_correlation_id())
    }

    /// Open a scope with a caller-chosen ID.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        let previous = current_correlation_id();
        set_correlation_id(id);
        Self { previous }
    }

    /// The ID active in this scope.
    #[must_use]
    pub fn id(&self) -> Option<String> {
        current_correlation_id()
    }
}

impl Drop for CorrelationGuard {
    fn drop(&mut self) {
        match self.previous.take() {
            Some(id) => set_correlation_id(id),
            None => clear_correlation_id(),
        }
    }
}

impl Default for CorrelationGuard {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Subscriber
// ============================================================================

/// Install the global `tracing` subscriber.
///
/// Filtering comes from `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`].
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .compact(),
        )
        .try_init()?;

    info!("sig-p256r1 logging initialized");
    Ok(())
}

// ============================================================================
// Sanitization
// ============================================================================

/// Wrap bytes so they display as a length and fingerprint instead of content.
///
/// ```rust
/// use sig_core::logging::sanitize_data;
///
/// assert_eq!(sanitize_data(&[1, 2, 3]).to_string(), "[3 bytes]");
/// assert!(sanitize_data(&[0u8; 100]).to_string().contains("fingerprint:"));
/// ```
#[must_use]
pub fn sanitize_data(data: &[u8]) -> SanitizedData<'_> {
    SanitizedData(data)
}

/// Display wrapper returned by [`sanitize_data`]
pub struct SanitizedData<'a>(&'a [u8]);

impl fmt::Display for SanitizedData<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.len() <= FINGERPRINT_THRESHOLD {
            return write!(f, "[{} bytes]", self.0.len());
        }
        let digest = sha256(self.0);
        let fingerprint = digest.get(..FINGERPRINT_LEN).map(hex::encode).unwrap_or_default();
        write!(f, "[{} bytes, fingerprint: {}]", self.0.len(), fingerprint)
    }
}

impl fmt::Debug for SanitizedData<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

// ============================================================================
// Operation macros
// ============================================================================

/// Log the start of a signature operation at TRACE, tagged with the
/// current correlation ID when one is set.
#[macro_export]
macro_rules! log_crypto_operation_start {
    ($op:expr $(, $($field:tt)*)?) => {
        match $crate::logging::current_correlation_id() {
            Some(corr_id) => tracing::trace!(
                target: "crypto::operation",
                correlation_id = %corr_id,
                operation = $op,
                phase = "start"
                $(, $($field)*)?
            ),
            None => tracing::trace!(
                target: "crypto::operation",
                operation = $op,
                phase = "start"
                $(, $($field)*)?
            ),
        }
    };
}

/// Log the successful completion of a signature operation at TRACE.
#[macro_export]
macro_rules! log_crypto_operation_complete {
    ($op:expr $(, $($field:tt)*)?) => {
        match $crate::logging::current_correlation_id() {
            Some(corr_id) => tracing::trace!(
                target: "crypto::operation",
                correlation_id = %corr_id,
                operation = $op,
                phase = "complete"
                $(, $($field)*)?
            ),
            None => tracing::trace!(
                target: "crypto::operation",
                operation = $op,
                phase = "complete"
                $(, $($field)*)?
            ),
        }
    };
}

/// Log a failed signature operation.
///
/// Verification rejections are expected outcomes and go out at DEBUG;
/// everything else is an ERROR.
#[macro_export]
macro_rules! log_crypto_operation_error {
    ($op:expr, $error:expr $(, $($field:tt)*)?) => {{
        let err: &$crate::error::SigError = &$error;
        let corr_id = $crate::logging::current_correlation_id().unwrap_or_default();
        if $crate::error::is_verification_rejection(err) {
            tracing::debug!(
                target: "crypto::operation",
                correlation_id = %corr_id,
                operation = $op,
                error = %err,
                phase = "error"
                $(, $($field)*)?
            );
        } else {
            tracing::error!(
                target: "crypto::operation",
                correlation_id = %corr_id,
                operation = $op,
                error = %err,
                phase = "error"
                $(, $($field)*)?
            );
        }
    }};
}

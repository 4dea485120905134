//! Configuration for the byte-level signature API.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use sig_prelude::error::{Result, SigError};

/// Settings applied by the `*_with_config` convenience functions.
///
/// # Examples
/// ```rust
/// use sig_core::config::CoreConfig;
///
/// let config = CoreConfig::new()
///     .with_compressed_public_keys(true)
///     .with_max_message_size(Some(1 << 20))
///     .build()
///     .expect("valid configuration");
///
/// assert!(config.pairwise_consistency_test);
///
/// let dev_config = CoreConfig::for_development();
/// let prod_config = CoreConfig::for_production();
/// assert!(!dev_config.pairwise_consistency_test);
/// assert!(prod_config.pairwise_consistency_test);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// Run the sign/verify self-test on every freshly generated keypair.
    ///
    /// Default: `true`
    pub pairwise_consistency_test: bool,

    /// Export public keys in compressed (33-byte) rather than uncompressed
    /// (65-byte) SEC1 form.
    ///
    /// Default: `false`
    pub compressed_public_keys: bool,

    /// Largest message accepted for signing or verification, if any.
    ///
    /// Default: `None` (unlimited)
    pub max_message_size: Option<usize>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self { pairwise_consistency_test: true, compressed_public_keys: false, max_message_size: None }
    }
}

impl CoreConfig {
    /// Configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration for development: skips the keygen self-test.
    ///
    /// Not suitable for production use.
    #[must_use]
    pub fn for_development() -> Self {
        Self::default().with_pairwise_consistency_test(false)
    }

    /// Configuration for production: the self-test is always on.
    #[must_use]
    pub fn for_production() -> Self {
        Self::default().with_pairwise_consistency_test(true)
    }

    /// Set whether keygen runs the pairwise consistency test.
    #[must_use]
    pub fn with_pairwise_consistency_test(mut self, enabled: bool) -> Self {
        self.pairwise_consistency_test = enabled;
        self
    }

    /// Set the exported public key encoding.
    #[must_use]
    pub fn with_compressed_public_keys(mut self, compressed: bool) -> Self {
        self.compressed_public_keys = compressed;
        self
    }

    /// Set the message size limit (`None` for unlimited).
    #[must_use]
    pub fn with_max_message_size(mut self, max: Option<usize>) -> Self {
        self.max_message_size = max;
        self
    }

    /// Validate and return the configuration.
    ///
    /// # Errors
    ///
    /// Returns `SigError::InvalidConfiguration` if the message size limit is zero.
    pub fn build(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }

    /// Validate the configuration settings.
    ///
    /// # Errors
    ///
    /// Returns `SigError::InvalidConfiguration` if the message size limit is zero.
    pub fn validate(&self) -> Result<()> {
        if self.max_message_size == Some(0) {
            return Err(SigError::InvalidConfiguration(
                "max_message_size must be positive; use None for no limit".to_string(),
            ));
        }
        Ok(())
    }

    /// Check a message length against the configured limit.
    ///
    /// # Errors
    ///
    /// Returns `SigError::MessageTooLarge` if `len` exceeds the limit.
    pub fn check_message_size(&self, len: usize) -> Result<()> {
        match self.max_message_size {
            Some(max) if len > max => Err(SigError::MessageTooLarge { size: len, max }),
            _ => Ok(()),
        }
    }
}

//! The checkout workflow: one request, one asynchronous attempt, one outcome.
//!
//! The UI layer builds a [`CheckoutRequest`] from the dialog input and hands
//! it to [`run_checkout`] together with the two async collaborators (the git
//! service call and the post-checkout synchronization). The workflow resolves
//! to exactly one [`CheckoutOutcome`], which the caller routes back into the
//! view. There are no retries; a failed attempt requires a fresh submission.

use std::fmt;
use std::future::Future;

/// Command label for output consoles created by checkout attempts.
pub const CHECKOUT_COMMAND_NAME: &str = "Git checkout";

/// Fixed failure message shown when the underlying error carries no text,
/// and always used for the floating notification.
pub const CHECKOUT_FAILED_MESSAGE: &str =
    "Checkout failed. Verify that the reference names an existing branch, tag or commit.";

/// A reference is submittable once it contains something other than whitespace.
pub fn is_reference_valid(reference: &str) -> bool {
    !reference.trim().is_empty()
}

/// Value object built at submit time from the dialog's reference text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRequest {
    name: String,
}

impl CheckoutRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The single failure kind of the workflow: the git service rejected the
/// checkout, with an optional human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutError {
    message: Option<String>,
}

impl CheckoutError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    pub fn unspecified() -> Self {
        Self { message: None }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for CheckoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_deref().unwrap_or(CHECKOUT_FAILED_MESSAGE))
    }
}

impl std::error::Error for CheckoutError {}

impl From<git2::Error> for CheckoutError {
    fn from(error: git2::Error) -> Self {
        let message = error.message().trim();
        if message.is_empty() {
            Self::unspecified()
        } else {
            Self::new(message)
        }
    }
}

/// Terminal result of one checkout attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome<R> {
    /// The checkout succeeded. `synchronized` carries the synchronization
    /// payload when that call also succeeded; a synchronization failure is
    /// deliberately not distinguished from success.
    Completed { synchronized: Option<R> },
    /// The checkout was rejected. `console_message` is the error's own text
    /// when present, `notification_message` is always the fixed string.
    Failed {
        console_message: String,
        notification_message: String,
    },
}

/// Runs the single linear chain of one checkout attempt.
///
/// `checkout` is invoked exactly once with the request. On success,
/// `synchronize` is invoked exactly once and awaited before the outcome
/// resolves, so a caller that closes its view on completion observes the
/// synchronized state first. On failure, `synchronize` is never invoked.
pub async fn run_checkout<C, CFut, S, SFut, R, E>(
    request: CheckoutRequest,
    checkout: C,
    synchronize: S,
) -> CheckoutOutcome<R>
where
    C: FnOnce(CheckoutRequest) -> CFut,
    CFut: Future<Output = Result<(), CheckoutError>>,
    S: FnOnce() -> SFut,
    SFut: Future<Output = Result<R, E>>,
{
    match checkout(request).await {
        Ok(()) => {
            let synchronized = synchronize().await.ok();
            CheckoutOutcome::Completed { synchronized }
        }
        Err(error) => CheckoutOutcome::Failed {
            console_message: error
                .message()
                .map(str::to_string)
                .unwrap_or_else(|| CHECKOUT_FAILED_MESSAGE.to_string()),
            notification_message: CHECKOUT_FAILED_MESSAGE.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_falls_back_to_fixed_message() {
        assert_eq!(
            CheckoutError::unspecified().to_string(),
            CHECKOUT_FAILED_MESSAGE
        );
        assert_eq!(CheckoutError::new("boom").to_string(), "boom");
    }

    #[test]
    fn git_errors_keep_their_message() {
        let error = CheckoutError::from(git2::Error::from_str("reference not found"));
        assert_eq!(error.message(), Some("reference not found"));
    }

    #[test]
    fn whitespace_only_references_are_invalid() {
        assert!(!is_reference_valid(""));
        assert!(!is_reference_valid("   "));
        assert!(is_reference_valid("main"));
        assert!(is_reference_valid("v1.0"));
    }
}

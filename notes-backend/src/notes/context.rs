//! Request-scoped cancellation for note operations.

use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use super::error::NoteError;

/// Cancellation token plus optional deadline carried through every action and
/// store call. Cloning shares the token.
#[derive(Debug, Clone, Default)]
pub struct Context {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context that expires `timeout` from now
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            token: CancellationToken::new(),
            deadline: Some(Instant::now() + timeout),
        }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Fail fast if the context is already done
    pub fn check(&self) -> Result<(), NoteError> {
        if self.token.is_cancelled() {
            return Err(NoteError::Cancelled);
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return Err(NoteError::DeadlineExceeded);
            }
        }
        Ok(())
    }

    /// Resolves once the context is cancelled or its deadline passes, with
    /// the matching error. Pending forever for a live context with no deadline.
    pub async fn done(&self) -> NoteError {
        match self.deadline {
            Some(deadline) => {
                tokio::select! {
                    biased;
                    _ = self.token.cancelled() => NoteError::Cancelled,
                    _ = tokio::time::sleep_until(deadline) => NoteError::DeadlineExceeded,
                }
            }
            None => {
                self.token.cancelled().await;
                NoteError::Cancelled
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_live_context() {
        assert!(Context::new().check().is_ok());
        assert!(Context::with_timeout(Duration::from_secs(60)).check().is_ok());
    }

    #[tokio::test]
    async fn test_cancelled_context_fails_check() {
        let ctx = Context::new();
        ctx.cancel();
        assert!(matches!(ctx.check(), Err(NoteError::Cancelled)));
        assert!(matches!(ctx.done().await, NoteError::Cancelled));
    }

    #[tokio::test]
    async fn test_cancel_wakes_waiter() {
        let ctx = Context::new();
        let canceller = ctx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            canceller.cancel();
        });

        let reason = tokio::time::timeout(Duration::from_secs(5), ctx.done())
            .await
            .expect("cancel should wake done()");
        assert!(matches!(reason, NoteError::Cancelled));
    }

    #[tokio::test]
    async fn test_deadline_wakes_waiter() {
        let ctx = Context::with_timeout(Duration::from_millis(20));
        let reason = tokio::time::timeout(Duration::from_secs(5), ctx.done())
            .await
            .expect("deadline should wake done()");
        assert!(matches!(reason, NoteError::DeadlineExceeded));
        assert!(matches!(ctx.check(), Err(NoteError::DeadlineExceeded)));
    }

    #[tokio::test]
    async fn test_live_context_stays_pending() {
        let ctx = Context::new();
        let waited = tokio::time::timeout(Duration::from_millis(30), ctx.done()).await;
        assert!(waited.is_err());
    }
}

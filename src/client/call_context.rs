use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Per-call cancellation and deadline.
///
/// Cloning shares the cancellation token, so a clone kept by another task can cancel the
/// in-flight call.
#[derive(Debug, Clone, Default)]
pub struct CallContext {
	cancel_token: CancellationToken,
	deadline: Option<Instant>,
}

/// Constructors
impl CallContext {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Use an existing token (e.g., a child of an application shutdown token).
	#[must_use]
	pub fn with_cancel_token(mut self, cancel_token: CancellationToken) -> Self {
		self.cancel_token = cancel_token;
		self
	}

	#[must_use]
	pub fn with_deadline(mut self, deadline: Instant) -> Self {
		self.deadline = Some(deadline);
		self
	}

	/// Deadline relative to now.
	#[must_use]
	pub fn with_timeout(self, timeout: Duration) -> Self {
		self.with_deadline(Instant::now() + timeout)
	}
}

/// Getters & Control
impl CallContext {
	#[must_use]
	pub fn cancel_token(&self) -> &CancellationToken {
		&self.cancel_token
	}

	#[must_use]
	pub fn deadline(&self) -> Option<Instant> {
		self.deadline
	}

	pub fn cancel(&self) {
		self.cancel_token.cancel();
	}

	#[must_use]
	pub fn is_cancelled(&self) -> bool {
		self.cancel_token.is_cancelled()
	}
}

// region:    --- Interruption

/// Why a call stopped before its exchange completed.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum Interruption {
	Cancelled,
	DeadlineExceeded,
}

impl CallContext {
	/// Non-blocking check, used before the exchange starts.
	pub(crate) fn interruption(&self) -> Option<Interruption> {
		if self.cancel_token.is_cancelled() {
			return Some(Interruption::Cancelled);
		}
		match self.deadline {
			Some(deadline) if deadline <= Instant::now() => Some(Interruption::DeadlineExceeded),
			_ => None,
		}
	}

	/// Resolves when the token is cancelled or the deadline passes. Never resolves otherwise.
	pub(crate) async fn interrupted(&self) -> Interruption {
		match self.deadline {
			Some(deadline) => {
				tokio::select! {
					_ = self.cancel_token.cancelled() => Interruption::Cancelled,
					_ = tokio::time::sleep_until(deadline) => Interruption::DeadlineExceeded,
				}
			}
			None => {
				self.cancel_token.cancelled().await;
				Interruption::Cancelled
			}
		}
	}
}

// endregion: --- Interruption

//! Waiting for a round's answer.
//!
//! Callers poll the store at a fixed interval until the answer column is
//! non-empty or the timeout passes. The oracle also signals after every write,
//! so an in-process waiter usually returns without sleeping a full interval.

use std::time::Duration;

use serde::Serialize;
use tokio::time::Instant;

use sus_core::enums::AnswerState;

use crate::oracle::AnswerOracle;

/// How a wait ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome", content = "text")]
pub enum WaitOutcome {
    /// The witness's text, verbatim.
    Answered(String),
    /// A `"failed <step>"` sentinel.
    Failed(String),
    TimedOut,
    /// The store could not be read; carries the error message.
    ReadFailed(String),
}

impl WaitOutcome {
    /// Plain-string form: the answer or sentinel, `""` on timeout or read error.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Answered(text) | Self::Failed(text) => text,
            Self::TimedOut | Self::ReadFailed(_) => String::new(),
        }
    }
}

impl AnswerOracle {
    /// Wait until `round_id` has an answer or `timeout` elapses.
    ///
    /// A missing round is treated as pending.
    pub async fn wait_for_answer(
        &self,
        round_id: &str,
        poll_interval: Duration,
        timeout: Duration,
    ) -> WaitOutcome {
        let deadline = Instant::now() + timeout;
        loop {
            // Register before reading so a write between the read and the
            // sleep still wakes us.
            let notified = self.answered.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            match self.store.get_answer(round_id).await {
                Ok(Some(answer)) => match AnswerState::from_answer(&answer) {
                    AnswerState::Answered(text) => return WaitOutcome::Answered(text),
                    AnswerState::Failed(text) => return WaitOutcome::Failed(text),
                    AnswerState::Pending => {}
                },
                Ok(None) => tracing::debug!(round = round_id, "round not found yet"),
                Err(error) => {
                    tracing::warn!(round = round_id, %error, "could not read answer");
                    return WaitOutcome::ReadFailed(error.to_string());
                }
            }

            let now = Instant::now();
            if now >= deadline {
                tracing::info!(round = round_id, ?timeout, "gave up waiting for answer");
                return WaitOutcome::TimedOut;
            }
            let nap = poll_interval.min(deadline - now);
            tokio::select! {
                () = tokio::time::sleep(nap) => {}
                () = &mut notified => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn into_text_keeps_plain_string_contract() {
        assert_eq!(WaitOutcome::Answered("YES".into()).into_text(), "YES");
        assert_eq!(
            WaitOutcome::Failed("failed provider".into()).into_text(),
            "failed provider"
        );
        assert_eq!(WaitOutcome::TimedOut.into_text(), "");
        assert_eq!(WaitOutcome::ReadFailed("boom".into()).into_text(), "");
    }
}

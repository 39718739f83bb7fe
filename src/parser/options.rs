use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// What to do when one topic's markup cannot be decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Abort the whole parse with the first markup error.
    #[default]
    AllOrNothing,
    /// Leave the topic out and record it in [`BcfArchive::failures`](crate::model::BcfArchive).
    SkipAndReport,
}

/// Shared flag a caller raises to stop a parse between topics.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Settings for a single parse call.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    pub failure_policy: FailurePolicy,
    /// Skip folders whose name is not a well-formed GUID.
    pub require_guid_folders: bool,
    pub cancel: Option<CancelFlag>,
}

impl ParseOptions {
    #[must_use]
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    #[must_use]
    pub fn with_guid_folders_required(mut self, required: bool) -> Self {
        self.require_guid_folders = required;
        self
    }

    #[must_use]
    pub fn with_cancel_flag(mut self, flag: CancelFlag) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelFlag::is_cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_permissive_and_strict_on_failure() {
        let options = ParseOptions::default();
        assert_eq!(options.failure_policy, FailurePolicy::AllOrNothing);
        assert!(!options.require_guid_folders);
        assert!(!options.is_cancelled());
    }

    #[test]
    fn cancel_flag_is_shared_between_clones() {
        let flag = CancelFlag::new();
        let options = ParseOptions::default().with_cancel_flag(flag.clone());
        assert!(!options.is_cancelled());

        flag.cancel();
        assert!(options.is_cancelled());
    }
}

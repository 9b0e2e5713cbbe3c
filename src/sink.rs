// SPDX-License-Identifier: PMPL-1.0-or-later

//! Where lookup misses are reported.
//!
//! A miss never reaches the caller of `get`; it goes to an [`ErrorSink`]
//! instead. The default sink logs through `tracing`. Engines with their own
//! logger implement the trait and pass it to the store.

use std::sync::Mutex;

/// Tag attached to every report from the store.
pub const REPORT_TAG: &str = "phrasebook";

pub trait ErrorSink: Send + Sync {
    fn report(&self, tag: &str, message: &str);
}

/// Reports misses as `tracing` error events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ErrorSink for TracingSink {
    fn report(&self, tag: &str, message: &str) {
        tracing::error!(target: "phrasebook", tag, "{}", message);
    }
}

/// Keeps every report in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    reports: Mutex<Vec<(String, String)>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of `(tag, message)` pairs in report order.
    pub fn reports(&self) -> Vec<(String, String)> {
        self.reports
            .lock()
            .map(|reports| reports.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    pub fn messages(&self) -> Vec<String> {
        self.reports().into_iter().map(|(_, message)| message).collect()
    }

    pub fn len(&self) -> usize {
        self.reports().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        match self.reports.lock() {
            Ok(mut reports) => reports.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }
}

impl ErrorSink for CollectingSink {
    fn report(&self, tag: &str, message: &str) {
        let entry = (tag.to_string(), message.to_string());
        match self.reports.lock() {
            Ok(mut reports) => reports.push(entry),
            Err(poisoned) => poisoned.into_inner().push(entry),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collecting_sink_keeps_order() {
        let sink = CollectingSink::new();
        sink.report(REPORT_TAG, "first");
        sink.report("other", "second");
        assert_eq!(
            sink.reports(),
            vec![
                (REPORT_TAG.to_string(), "first".to_string()),
                ("other".to_string(), "second".to_string()),
            ]
        );
        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_tracing_sink_does_not_panic_without_subscriber() {
        TracingSink.report(REPORT_TAG, "no subscriber installed");
    }
}

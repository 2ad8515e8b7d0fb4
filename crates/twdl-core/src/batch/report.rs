//! Batch summary and process exit code.

/// How a single URL ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemResult {
    /// Primary tool succeeded.
    Primary,
    /// Primary reported no video; fallback tool succeeded.
    Fallback,
    /// Neither tool produced media; `reason` is shown in the summary.
    Failed { reason: String },
}

/// A URL that did not produce any media.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedItem {
    pub url: String,
    pub reason: String,
}

/// Aggregate result of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// URLs handed to the batch.
    pub total: usize,
    /// URLs with at least one successful download (primary or fallback).
    pub succeeded: usize,
    /// Subset of `succeeded` that needed the fallback tool.
    pub via_fallback: usize,
    pub failed: Vec<FailedItem>,
}

impl BatchReport {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    pub fn record(&mut self, url: &str, result: ItemResult) {
        match result {
            ItemResult::Primary => self.succeeded += 1,
            ItemResult::Fallback => {
                self.succeeded += 1;
                self.via_fallback += 1;
            }
            ItemResult::Failed { reason } => self.failed.push(FailedItem {
                url: url.to_string(),
                reason,
            }),
        }
    }

    /// Records every URL as failed for the same reason (e.g. missing primary tool).
    pub fn fail_all(urls: &[String], reason: &str) -> Self {
        let mut report = Self::new(urls.len());
        for url in urls {
            report.record(
                url,
                ItemResult::Failed {
                    reason: reason.to_string(),
                },
            );
        }
        report
    }

    /// `Completed. Successful items: X / N` with an optional fallback note.
    pub fn summary_line(&self) -> String {
        let mut line = format!(
            "Completed. Successful items: {} / {}",
            self.succeeded, self.total
        );
        if self.via_fallback > 0 {
            line.push_str(&format!(" ({} via fallback)", self.via_fallback));
        }
        line
    }

    /// 0 when at least one item succeeded, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.succeeded > 0 {
            0
        } else {
            1
        }
    }
}

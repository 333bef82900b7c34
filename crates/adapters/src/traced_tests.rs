// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::promote::FakePromotionAdapter;
use crate::snapshot::FakeSnapshotAdapter;
use gate_core::Phase;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// A writer that captures log output for testing
#[derive(Clone, Default)]
struct CapturedLogs {
    logs: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    fn contents(&self) -> String {
        let logs = self.logs.lock().unwrap();
        String::from_utf8_lossy(&logs).to_string()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.logs.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run a test with captured tracing output
fn with_tracing<F, Fut>(f: F) -> (String, Fut::Output)
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future,
{
    let logs = CapturedLogs::default();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(logs.clone())
        .with_ansi(false)
        .without_time()
        .finish();

    let result = tracing::subscriber::with_default(subscriber, || {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
            .block_on(f())
    });

    (logs.contents(), result)
}

#[tokio::test]
async fn traced_promotion_rejects_empty_phase() {
    let fake = FakePromotionAdapter::new();
    let traced = TracedPromotionAdapter::new(fake.clone());

    let err = traced
        .promote("p1", "", &RequestId::from("req-1"))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("pipeline and phase are required"));
    assert!(fake.calls().is_empty());
}

#[test]
fn traced_promotion_logs_span_and_outcome() {
    let (logs, result) = with_tracing(|| async {
        let traced = TracedPromotionAdapter::new(FakePromotionAdapter::new());
        traced
            .promote("p1", "deploy", &RequestId::from("req-1"))
            .await
    });

    assert!(result.is_ok());
    assert!(logs.contains("promotion.promote"), "Logs:\n{}", logs);
    assert!(logs.contains("deploy"), "Logs:\n{}", logs);
    assert!(logs.contains("req-1"), "Logs:\n{}", logs);
    assert!(logs.contains("promoted"), "Logs:\n{}", logs);
}

#[test]
fn traced_promotion_logs_failure() {
    let (logs, result) = with_tracing(|| async {
        let fake = FakePromotionAdapter::new();
        fake.fail_phase("deploy", 500);
        TracedPromotionAdapter::new(fake)
            .promote("p1", "deploy", &RequestId::from("req-1"))
            .await
    });

    assert!(result.is_err());
    assert!(logs.contains("promotion failed"), "Logs:\n{}", logs);
    assert!(logs.contains("500"), "Logs:\n{}", logs);
}

#[test]
fn traced_snapshot_logs_phase_count() {
    let (logs, result) = with_tracing(|| async {
        let fake = FakeSnapshotAdapter::new();
        fake.push(vec![Phase::new("build"), Phase::new("deploy").depends_on("build")]);
        TracedSnapshotAdapter::new(fake).fetch("p1").await
    });

    assert_eq!(result.unwrap().phases.len(), 2);
    assert!(logs.contains("snapshot.fetch"), "Logs:\n{}", logs);
    assert!(logs.contains("phases=2"), "Logs:\n{}", logs);
}

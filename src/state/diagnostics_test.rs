use super::*;

fn storage_error() -> ChatError {
    ChatError::Storage { op: "write", detail: "QuotaExceededError".to_owned() }
}

#[test]
fn diagnostics_default_is_empty() {
    let diagnostics = Diagnostics::default();
    assert!(diagnostics.is_empty());
    assert!(diagnostics.last().is_none());
}

#[test]
fn record_appends_in_order() {
    let mut diagnostics = Diagnostics::default();
    diagnostics.record(DiagnosticSource::HistorySave, storage_error(), "t1".to_owned());
    diagnostics.record(DiagnosticSource::Chat, ChatError::Status(502), "t2".to_owned());

    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics.entries()[0].source, DiagnosticSource::HistorySave);
    assert_eq!(diagnostics.last().unwrap().error, ChatError::Status(502));
    assert_eq!(diagnostics.count(DiagnosticSource::Chat), 1);
}

#[test]
fn record_evicts_oldest_at_cap() {
    let mut diagnostics = Diagnostics::default();
    for i in 0..=DIAGNOSTICS_CAP {
        diagnostics.record(DiagnosticSource::Chat, ChatError::Status(500), format!("t{i}"));
    }
    assert_eq!(diagnostics.len(), DIAGNOSTICS_CAP);
    assert_eq!(diagnostics.entries()[0].timestamp, "t1");
    assert_eq!(diagnostics.last().unwrap().timestamp, format!("t{DIAGNOSTICS_CAP}"));
}

#[test]
fn source_display_names_operation() {
    assert_eq!(DiagnosticSource::Chat.to_string(), "chat");
    assert_eq!(DiagnosticSource::HistoryLoad.to_string(), "history load");
    assert_eq!(DiagnosticSource::HistorySave.to_string(), "history save");
}

#[test]
fn diagnostic_display_is_the_logged_line() {
    let mut diagnostics = Diagnostics::default();
    diagnostics.record(DiagnosticSource::HistorySave, storage_error(), "2026-03-04T09:05:00Z".to_owned());
    assert_eq!(
        diagnostics.last().unwrap().to_string(),
        "chat widget history save failed at 2026-03-04T09:05:00Z: local storage write failed: QuotaExceededError"
    );
}

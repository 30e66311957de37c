//! Background re-match queue: supersession, cancellation, and
//! cross-juror independence.

mod common;

use std::sync::Arc;

use venire_core::evidence::EvidenceEvent;
use venire_core::traits::{Cancellable, CancellationToken, IMatchRepository};
use venire_match::{MatchEngine, RematchQueue};

use common::fixture_repository;

fn voir_dire(question: &str, yes_no: bool, source_ref: &str) -> EvidenceEvent {
    EvidenceEvent::VoirDire {
        question: question.to_string(),
        answer: String::new(),
        yes_no: Some(yes_no),
        source_ref: source_ref.to_string(),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn submitted_rematch_completes_and_records() {
    let repository = fixture_repository();
    let engine = Arc::new(MatchEngine::new(repository.clone()));
    let queue = RematchQueue::new(engine);

    queue.submit(
        "j1",
        voir_dire("Do you distrust large corporations?", true, "vd-1"),
    );
    let outcome = queue.join("j1").await.expect("re-match completes");

    assert_eq!(outcome.juror_id, "j1");
    assert_eq!(outcome.facts_extracted, 1);
    assert!(!outcome.records.is_empty());
    assert_eq!(queue.inflight_count(), 0);
    assert!(!repository.updates_for("j1").unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn newer_event_supersedes_but_loses_no_evidence() {
    let repository = fixture_repository();
    let engine = Arc::new(MatchEngine::new(repository.clone()));
    let queue = RematchQueue::new(engine);

    queue.submit(
        "j1",
        voir_dire("Do you distrust large corporations?", true, "vd-1"),
    );
    queue.submit(
        "j1",
        voir_dire("Do you trust the experts who will testify?", true, "vd-2"),
    );

    // Only the newest task remains tracked; the superseded one either
    // finished first or was cancelled at a checkpoint.
    assert_eq!(queue.inflight_count(), 1);
    queue.join("j1").await;

    // Whatever the interleaving, extraction happens before any
    // cancellation checkpoint — both facts are in the log.
    let evidence = repository.juror_evidence("j1").unwrap().unwrap();
    let signals: Vec<&str> = evidence
        .latest_per_signal()
        .iter()
        .map(|f| f.signal_id.as_str())
        .collect();
    assert!(signals.contains(&"distrusts_corporations"));
    assert!(signals.contains(&"trusts_experts"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn distinct_jurors_proceed_concurrently() {
    let repository = fixture_repository();
    let engine = Arc::new(MatchEngine::new(repository.clone()));
    let queue = Arc::new(RematchQueue::new(engine));

    for juror in ["j1", "j2", "j3"] {
        queue.submit(
            juror,
            voir_dire("Do you distrust large corporations?", true, "vd-1"),
        );
    }
    for juror in ["j1", "j2", "j3"] {
        let outcome = queue.join(juror).await.expect("each juror completes");
        assert_eq!(outcome.juror_id, juror);
    }
}

#[test]
fn pre_cancelled_update_appends_evidence_but_skips_scoring() {
    let repository = fixture_repository();
    let engine = MatchEngine::new(repository.clone());

    let token = CancellationToken::new();
    token.cancel();
    let outcome = engine
        .ingest_cancellable(
            "j1",
            &voir_dire("Do you distrust large corporations?", true, "vd-1"),
            &token,
        )
        .unwrap();

    assert!(outcome.is_none(), "cancelled before scoring");
    // The fact set was still appended — evidence is never dropped.
    let evidence = repository.juror_evidence("j1").unwrap().unwrap();
    assert_eq!(evidence.facts().len(), 1);
    // But no probabilities or ledger entries were written.
    assert!(repository.last_probabilities("j1").unwrap().is_empty());
    assert!(repository.updates_for("j1").unwrap().is_empty());
}

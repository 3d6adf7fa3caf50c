mod helpers;

use docker_dns_application::use_cases::{QuestionOutcome, ResolveQuestionUseCase, MX_PREFERENCE};
use docker_dns_domain::{DomainError, DomainSuffix, Question, RecordData, RecordType};
use helpers::MockContainerRuntime;
use std::net::Ipv4Addr;
use std::sync::Arc;

async fn api_runtime() -> Arc<MockContainerRuntime> {
    Arc::new(MockContainerRuntime::with_container("4f2a9c", "/api", "127.0.0.1").await)
}

fn resolver(runtime: Arc<MockContainerRuntime>) -> ResolveQuestionUseCase {
    ResolveQuestionUseCase::new(runtime, DomainSuffix::new(".docker.").unwrap())
}

// ── A ──────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_a_question_returns_container_address() {
    let use_case = resolver(api_runtime().await);

    let outcome = use_case
        .execute(&Question::new("api.docker.", RecordType::A))
        .await;

    let QuestionOutcome::Answer(record) = outcome else {
        panic!("expected an answer, got {:?}", outcome);
    };
    assert_eq!(&*record.name, "api.docker.");
    assert_eq!(record.ttl, 0);
    assert_eq!(record.data, RecordData::A(Ipv4Addr::new(127, 0, 0, 1)));
}

#[tokio::test]
async fn test_a_question_for_unknown_container_fails_with_not_found() {
    let use_case = resolver(api_runtime().await);

    let outcome = use_case
        .execute(&Question::new("imnothere.docker.", RecordType::A))
        .await;

    assert_eq!(
        outcome,
        QuestionOutcome::Failed(DomainError::ContainerNotFound("imnothere".to_string()))
    );
}

#[tokio::test]
async fn test_a_question_for_container_without_address_fails() {
    let runtime = Arc::new(MockContainerRuntime::new());
    runtime.add_container("77aa", "/stopped", None).await;
    let use_case = resolver(runtime);

    let outcome = use_case
        .execute(&Question::new("stopped.docker.", RecordType::A))
        .await;

    assert!(matches!(
        outcome,
        QuestionOutcome::Failed(DomainError::InvalidIpAddress(_))
    ));
}

#[tokio::test]
async fn test_a_question_when_runtime_is_down() {
    let runtime = api_runtime().await;
    runtime.set_unreachable(true).await;
    let use_case = resolver(runtime);

    let outcome = use_case
        .execute(&Question::new("api.docker.", RecordType::A))
        .await;

    assert!(matches!(
        outcome,
        QuestionOutcome::Failed(DomainError::RuntimeUnreachable(_))
    ));
}

#[tokio::test]
async fn test_a_question_uses_configured_ttl() {
    let use_case = resolver(api_runtime().await).with_ttl(30);

    let outcome = use_case
        .execute(&Question::new("api.docker.", RecordType::A))
        .await;

    assert!(matches!(outcome, QuestionOutcome::Answer(record) if record.ttl == 30));
}

// ── MX ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_mx_question_points_at_itself() {
    let use_case = resolver(api_runtime().await);

    let outcome = use_case
        .execute(&Question::new("api.docker.", RecordType::MX))
        .await;

    let QuestionOutcome::Answer(record) = outcome else {
        panic!("expected an answer, got {:?}", outcome);
    };
    assert_eq!(
        record.data,
        RecordData::MX {
            preference: MX_PREFERENCE,
            exchange: "api.docker.".into(),
        }
    );
}

#[tokio::test]
async fn test_mx_question_only_needs_container_to_exist() {
    let runtime = Arc::new(MockContainerRuntime::new());
    runtime.add_container("77aa", "/mail", None).await;
    let use_case = resolver(runtime.clone());

    let outcome = use_case
        .execute(&Question::new("mail.docker.", RecordType::MX))
        .await;

    assert!(matches!(outcome, QuestionOutcome::Answer(_)));
    assert_eq!(runtime.inspect_calls(), 1);
}

#[tokio::test]
async fn test_mx_question_for_unknown_container() {
    let use_case = resolver(api_runtime().await);

    let outcome = use_case
        .execute(&Question::new("imnothere.docker.", RecordType::MX))
        .await;

    assert!(matches!(
        outcome,
        QuestionOutcome::Failed(DomainError::ContainerNotFound(_))
    ));
}

// ── PTR ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_ptr_question_names_matching_container() {
    let runtime = api_runtime().await;
    let use_case = resolver(runtime.clone());

    let outcome = use_case
        .execute(&Question::new("1.0.0.127.in-addr.arpa.", RecordType::PTR))
        .await;

    let QuestionOutcome::Answer(record) = outcome else {
        panic!("expected an answer, got {:?}", outcome);
    };
    assert_eq!(&*record.name, "1.0.0.127.in-addr.arpa.");
    assert_eq!(record.data, RecordData::PTR("api.docker.".into()));
    assert_eq!(runtime.list_calls(), 1);
    assert_eq!(runtime.inspect_calls(), 0);
}

#[tokio::test]
async fn test_ptr_question_first_listed_container_wins() {
    let runtime = Arc::new(MockContainerRuntime::new());
    runtime.add_container("1", "/db", Some("172.17.0.3")).await;
    runtime.add_container("2", "/first", Some("172.17.0.2")).await;
    runtime.add_container("3", "/second", Some("172.17.0.2")).await;
    let use_case = resolver(runtime);

    let outcome = use_case
        .execute(&Question::new("2.0.17.172.in-addr.arpa.", RecordType::PTR))
        .await;

    assert!(matches!(
        outcome,
        QuestionOutcome::Answer(record) if record.data == RecordData::PTR("first.docker.".into())
    ));
}

#[tokio::test]
async fn test_ptr_question_without_match_has_no_answer() {
    let use_case = resolver(api_runtime().await);

    let outcome = use_case
        .execute(&Question::new("9.0.17.172.in-addr.arpa.", RecordType::PTR))
        .await;

    assert_eq!(outcome, QuestionOutcome::NoAnswer);
}

#[tokio::test]
async fn test_malformed_ptr_question_skips_runtime() {
    let runtime = api_runtime().await;
    let use_case = resolver(runtime.clone());

    let outcome = use_case
        .execute(&Question::new("0.127.in-addr.arpa.", RecordType::PTR))
        .await;

    assert!(matches!(
        outcome,
        QuestionOutcome::Failed(DomainError::MalformedReverseName(_))
    ));
    assert_eq!(runtime.list_calls(), 0);
}

#[tokio::test]
async fn test_ptr_question_when_runtime_is_down() {
    let runtime = api_runtime().await;
    runtime.set_unreachable(true).await;
    let use_case = resolver(runtime);

    let outcome = use_case
        .execute(&Question::new("1.0.0.127.in-addr.arpa.", RecordType::PTR))
        .await;

    assert!(matches!(
        outcome,
        QuestionOutcome::Failed(DomainError::RuntimeUnreachable(_))
    ));
}

// ── other types ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_aaaa_question_short_circuits() {
    let runtime = api_runtime().await;
    let use_case = resolver(runtime.clone());

    let outcome = use_case
        .execute(&Question::new("api.docker.", RecordType::AAAA))
        .await;

    assert_eq!(outcome, QuestionOutcome::ShortCircuit);
    assert_eq!(runtime.inspect_calls(), 0);
}

#[tokio::test]
async fn test_soa_question_names_this_host() {
    let use_case = resolver(api_runtime().await).with_hostname("dns-host");

    let outcome = use_case
        .execute(&Question::new("docker.", RecordType::SOA))
        .await;

    let QuestionOutcome::Answer(record) = outcome else {
        panic!("expected an answer, got {:?}", outcome);
    };
    let RecordData::SOA(soa) = record.data else {
        panic!("expected SOA data");
    };
    assert_eq!(&*record.name, "docker.");
    assert_eq!(&*soa.primary_ns, "dns-host.");
    assert_eq!(&*soa.mailbox, "dns-host.");
    assert_eq!((soa.refresh, soa.retry, soa.expire, soa.minimum), (60, 60, 60, 0));
}

#[tokio::test]
async fn test_unsupported_question_is_ignored() {
    let runtime = api_runtime().await;
    let use_case = resolver(runtime.clone());

    let outcome = use_case
        .execute(&Question::new("api.docker.", RecordType::Other(16)))
        .await;

    assert_eq!(outcome, QuestionOutcome::NoAnswer);
    assert_eq!(runtime.inspect_calls() + runtime.list_calls(), 0);
}

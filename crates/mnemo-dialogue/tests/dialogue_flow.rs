//! End-to-end dialogue scenarios: learn, recall, anaphora, escalation,
//! and recall across a sleep session.

use mnemo_consolidation::ConsolidationEngine;
use mnemo_core::config::{ConsolidationConfig, DialogueConfig};
use mnemo_core::errors::{MnemoError, MnemoResult};
use mnemo_core::models::AnswerSource;
use mnemo_core::traits::{IGenerativeFallback, IKnowledgeService};
use mnemo_dialogue::Orchestrator;
use mnemo_store::MemoryStore;

fn orchestrator() -> Orchestrator {
    Orchestrator::new(
        MemoryStore::with_defaults(),
        ConsolidationEngine::new(ConsolidationConfig {
            seed: Some(42),
            ..ConsolidationConfig::default()
        }),
        DialogueConfig::default(),
    )
}

#[test]
fn learned_fact_is_recalled_from_memory() {
    let mut orch = orchestrator();
    orch.handle_turn("사과는 빨간색").unwrap();

    let turn = orch.handle_turn("사과는 무슨 색이야?").unwrap();
    assert_eq!(turn.source, AnswerSource::Memory);
    // Served as a complete sentence, not the stored fragment verbatim.
    assert_eq!(turn.answer, "사과는 빨간색입니다.");
}

#[test]
fn self_introduction_is_recalled_by_name_question() {
    let mut orch = orchestrator();
    let learned = orch.handle_turn("나는 GNJz라고 해").unwrap();
    assert_eq!(learned.source, AnswerSource::None);
    assert_eq!(orch.store().len(), 1);

    let turn = orch.handle_turn("나는?").unwrap();
    assert_eq!(turn.source, AnswerSource::Memory);
    // The stored first-person introduction is flipped into an answer about
    // the user, never echoed back in their own words.
    assert_eq!(turn.answer, "당신의 이름은 GNJz입니다.");
}

#[test]
fn anaphora_reaches_the_previous_topic() {
    let mut orch = orchestrator();
    orch.handle_turn("사과는 빨간색").unwrap();
    orch.handle_turn("사과는 무슨 색이야?").unwrap();

    let turn = orch.handle_turn("그거 뭐야?").unwrap();
    assert_eq!(turn.source, AnswerSource::Memory);
    assert!(turn.answer.contains("사과"));
}

struct CannedService;
impl IKnowledgeService for CannedService {
    fn ask(&self, _question: &str) -> MnemoResult<String> {
        Ok("지구는 둥글다".to_string())
    }
}

#[test]
fn external_service_answers_and_writes_back() {
    let mut orch = orchestrator().with_knowledge_service(Box::new(CannedService));
    assert!(orch.store().is_empty());

    let turn = orch.handle_turn("지구는 어떤 모양이야?").unwrap();
    assert_eq!(turn.source, AnswerSource::External);
    assert_eq!(orch.store().len(), 1);

    // The second ask is served from memory without going external.
    let turn = orch.handle_turn("지구는 어떤 모양이야?").unwrap();
    assert_eq!(turn.source, AnswerSource::Memory);
    assert!(turn.answer.contains("둥글다"));
}

struct DownService;
impl IKnowledgeService for DownService {
    fn ask(&self, _question: &str) -> MnemoResult<String> {
        Err(MnemoError::Unavailable {
            reason: "offline".to_string(),
        })
    }
}

struct OfflineModel;
impl IGenerativeFallback for OfflineModel {
    fn generate(&self, _prompt: &str) -> MnemoResult<String> {
        Ok("generated".to_string())
    }
    fn is_available(&self) -> bool {
        false
    }
}

#[test]
fn unavailable_collaborators_fall_through_to_unknown() {
    let mut orch = Orchestrator::new(
        MemoryStore::with_defaults(),
        ConsolidationEngine::new(ConsolidationConfig::default()),
        DialogueConfig {
            generative_enabled: true,
            ..DialogueConfig::default()
        },
    )
    .with_generative(Box::new(OfflineModel))
    .with_knowledge_service(Box::new(DownService));

    let turn = orch.handle_turn("은하수는 어디에 있어?").unwrap();
    assert_eq!(turn.source, AnswerSource::None);
    assert!(orch.store().is_empty());
}

#[test]
fn recall_survives_a_sleep_session() {
    let mut orch = orchestrator();
    orch.handle_turn("사과는 빨간색").unwrap();
    // Recall traffic keeps the record strong through consolidation.
    orch.handle_turn("사과는 무슨 색이야?").unwrap();
    orch.handle_turn("사과는 무슨 색이야?").unwrap();

    let session = orch.sleep(5).unwrap();
    assert_eq!(session.stats.cycles_run, 5);

    let turn = orch.handle_turn("사과는 무슨 색이야?").unwrap();
    assert_eq!(turn.source, AnswerSource::Memory);
    assert!(turn.answer.contains("빨간색"));
}

#[test]
fn sleep_hours_scales_to_cycles() {
    let mut orch = orchestrator();
    orch.handle_turn("사과는 빨간색").unwrap();
    let session = orch.sleep_hours(3).unwrap();
    assert_eq!(
        session.stats.cycles_run,
        3 * mnemo_core::constants::CYCLES_PER_SLEEP_HOUR
    );
}

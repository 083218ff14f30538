//! End-to-end behavior of the answer pipeline against an in-memory store and
//! a scripted provider.

use std::collections::VecDeque;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use pretty_assertions::assert_eq;

use sus_core::entities::{Description, Game, InvestigationRecord, Question, Round, Suspect};
use sus_core::enums::{AnswerState, ProviderKind};
use sus_core::rules::ROSTER_SIZE;
use sus_db::{Store, SusDb};
use sus_oracle::{
    AnswerOracle, ChatTurn, Credentials, ImageDescription, ImageInput, OracleError,
    OracleSettings, ProviderSet, TextProvider, TextRequest, WaitOutcome, prompts,
};

const MODEL: &str = "gpt-4o-2024-08-06";
const CULPRIT: &str = "p00";

// ---------------------------------------------------------------------------
// Scripted provider
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct Recorded {
    prompt: String,
    prior: Vec<ChatTurn>,
    model: String,
    max_tokens: u32,
}

#[derive(Default)]
struct ScriptedProvider {
    replies: Mutex<VecDeque<Result<String, String>>>,
    requests: Mutex<Vec<Recorded>>,
    describe_calls: AtomicUsize,
}

impl ScriptedProvider {
    fn replying(replies: &[Result<&str, &str>]) -> Arc<Self> {
        let script = replies
            .iter()
            .map(|r| r.map(str::to_string).map_err(str::to_string))
            .collect();
        Arc::new(Self {
            replies: Mutex::new(script),
            ..Self::default()
        })
    }

    fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextProvider for ScriptedProvider {
    async fn generate_text(
        &self,
        request: &TextRequest<'_>,
        _credentials: &Credentials,
    ) -> Result<String, OracleError> {
        self.requests.lock().unwrap().push(Recorded {
            prompt: request.prompt.to_string(),
            prior: request.prior_turns.to_vec(),
            model: request.model.to_string(),
            max_tokens: request.max_tokens,
        });
        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(msg)) => Err(OracleError::Parse(msg)),
            None => Err(OracleError::Parse("script exhausted".into())),
        }
    }

    async fn describe_image(
        &self,
        image: &ImageInput<'_>,
        model: &str,
        _max_tokens: u32,
        _credentials: &Credentials,
    ) -> Result<ImageDescription, OracleError> {
        self.describe_calls.fetch_add(1, Ordering::SeqCst);
        Ok(ImageDescription {
            text: format!("{} bytes seen by {model}", image.bytes.len()),
            prompt: prompts::DESCRIBE_PORTRAIT.to_string(),
        })
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

// ---------------------------------------------------------------------------
// Fixture
// ---------------------------------------------------------------------------

struct Fixture {
    db: Arc<SusDb>,
    store: Arc<dyn Store>,
    round: Round,
}

async fn fixture(cached_description: bool) -> Fixture {
    let db = Arc::new(SusDb::open_local(":memory:").await.unwrap());
    let store: Arc<dyn Store> = db.clone();

    let mut ids = Vec::new();
    for i in 0..ROSTER_SIZE {
        let id = format!("p{i:02}");
        store
            .save_suspect(&Suspect {
                id: id.clone(),
                image: format!("{id}.jpg"),
                created_at: Utc::now(),
                free: false,
                fled: false,
            })
            .await
            .unwrap();
        ids.push(id);
    }
    store
        .save_question(&Question {
            id: "que-1".into(),
            english: "Does the suspect like pizza?".into(),
            czech: "Má podezřelý rád pizzu?".into(),
            polish: "Czy podejrzany lubi pizzę?".into(),
            topic: "basic".into(),
            level: 1,
        })
        .await
        .unwrap();
    store
        .insert_game(&Game {
            id: "gam-1".into(),
            created_at: Utc::now(),
            score: 0,
            investigator: "anonymous".into(),
        })
        .await
        .unwrap();
    store
        .insert_investigation(&InvestigationRecord {
            id: "inv-1".into(),
            game_id: "gam-1".into(),
            created_at: Utc::now(),
            culprit_id: CULPRIT.into(),
            suspect_ids: ids,
        })
        .await
        .unwrap();
    let round = Round {
        id: "rnd-1".into(),
        investigation_id: "inv-1".into(),
        question: store.get_question("que-1").await.unwrap(),
        answer: String::new(),
        eliminations: Vec::new(),
        created_at: Utc::now(),
    };
    store.insert_round(&round).await.unwrap();
    store.save_token("OpenAI", "sk-test").await.unwrap();

    if cached_description {
        store
            .save_description(&Description {
                id: String::new(),
                suspect_id: CULPRIT.into(),
                service: "OpenAI".into(),
                model: MODEL.into(),
                description: "A wiry chef with flour on his sleeves.".into(),
                prompt: "describe".into(),
                created_at: Utc::now(),
            })
            .await
            .unwrap();
    }

    Fixture { db, store, round }
}

fn oracle_with(store: &Arc<dyn Store>, providers: ProviderSet, portraits: &Path) -> Arc<AnswerOracle> {
    Arc::new(AnswerOracle::new(
        Arc::clone(store),
        providers,
        OracleSettings {
            portraits_dir: portraits.to_path_buf(),
            ..OracleSettings::default()
        },
    ))
}

fn openai(provider: &Arc<ScriptedProvider>) -> ProviderSet {
    ProviderSet::empty().with(ProviderKind::OpenAi, provider.clone())
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

#[tokio::test]
async fn two_step_prompt_persists_answer_verbatim() {
    let f = fixture(true).await;
    let provider = ScriptedProvider::replying(&[Ok("I lean towards yes."), Ok("Yes.")]);
    let oracle = oracle_with(&f.store, openai(&provider), Path::new("."));

    let state = oracle.generate_answer(&f.round, CULPRIT).await;
    assert_eq!(state, AnswerState::Answered("Yes.".into()));
    assert_eq!(
        f.store.get_answer("rnd-1").await.unwrap().as_deref(),
        Some("Yes.")
    );

    let requests = provider.requests();
    assert_eq!(requests.len(), 2);

    let reflection_prompt = prompts::reflection(
        "Does the suspect like pizza?",
        "A wiry chef with flour on his sleeves.",
    );
    assert_eq!(requests[0].prompt, reflection_prompt);
    assert!(requests[0].prior.is_empty());
    assert_eq!(requests[0].max_tokens, 1000);
    assert_eq!(requests[0].model, MODEL);

    assert_eq!(requests[1].prompt, prompts::BOOLEAN);
    assert_eq!(
        requests[1].prior,
        vec![
            ChatTurn::user(reflection_prompt),
            ChatTurn::assistant("I lean towards yes."),
        ]
    );
    assert_eq!(requests[1].max_tokens, 20);
}

#[tokio::test]
async fn reflection_failure_writes_sentinel() {
    let f = fixture(true).await;
    let provider = ScriptedProvider::replying(&[Err("upstream 500")]);
    let oracle = oracle_with(&f.store, openai(&provider), Path::new("."));

    let state = oracle.generate_answer(&f.round, CULPRIT).await;
    assert_eq!(state, AnswerState::Failed("failed reflection".into()));
    assert_eq!(
        f.store.get_answer("rnd-1").await.unwrap().as_deref(),
        Some("failed reflection")
    );
}

#[tokio::test]
async fn boolean_failure_names_answer_step() {
    let f = fixture(true).await;
    let provider = ScriptedProvider::replying(&[Ok("hmm"), Err("timeout")]);
    let oracle = oracle_with(&f.store, openai(&provider), Path::new("."));

    let state = oracle.generate_answer(&f.round, CULPRIT).await;
    assert_eq!(state.as_text(), "failed answer");
}

#[tokio::test]
async fn missing_token_fails_service_step() {
    let f = fixture(true).await;
    f.store.save_token("OpenAI", "").await.unwrap();
    let provider = ScriptedProvider::replying(&[Ok("never used")]);
    let oracle = oracle_with(&f.store, openai(&provider), Path::new("."));

    let state = oracle.generate_answer(&f.round, CULPRIT).await;
    assert_eq!(state.as_text(), "failed service");
    assert!(provider.requests().is_empty());
}

#[tokio::test]
async fn service_outside_provider_set_fails_immediately() {
    let f = fixture(true).await;
    f.db.conn()
        .execute("INSERT INTO services (name, token) VALUES ('Gemini', 'g')", ())
        .await
        .unwrap();
    f.store.add_model("gemini-pro", "Gemini").await.unwrap();
    f.store.set_active_model("gemini-pro").await.unwrap();

    let provider = ScriptedProvider::replying(&[]);
    let oracle = oracle_with(&f.store, openai(&provider), Path::new("."));

    let state = oracle.generate_answer(&f.round, CULPRIT).await;
    assert_eq!(state.as_text(), "failed provider");
    assert!(provider.requests().is_empty());
}

#[tokio::test]
async fn concurrent_waiter_sees_unsupported_provider_sentinel() {
    let f = fixture(true).await;
    let oracle = oracle_with(&f.store, ProviderSet::empty(), Path::new("."));

    let waiter = {
        let oracle = Arc::clone(&oracle);
        tokio::spawn(async move {
            oracle
                .wait_for_answer("rnd-1", Duration::from_secs(1), Duration::from_secs(5))
                .await
        })
    };
    let started = tokio::time::Instant::now();
    let handle = oracle.spawn_detached(f.round.clone(), CULPRIT.to_string());

    assert_eq!(
        handle.await.unwrap(),
        AnswerState::Failed("failed provider".into())
    );
    assert_eq!(
        waiter.await.unwrap(),
        WaitOutcome::Failed("failed provider".into())
    );
    assert!(started.elapsed() < Duration::from_secs(5));
}

// ---------------------------------------------------------------------------
// Descriptions
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_description_is_generated_once_and_cached() {
    let f = fixture(false).await;
    let portraits = tempfile::tempdir().unwrap();
    std::fs::write(portraits.path().join("p00.jpg"), b"\xff\xd8jpeg").unwrap();

    let provider = ScriptedProvider::replying(&[Ok("r1"), Ok("NO"), Ok("r2"), Ok("YES")]);
    let oracle = oracle_with(&f.store, openai(&provider), portraits.path());

    assert_eq!(
        oracle.generate_answer(&f.round, CULPRIT).await,
        AnswerState::Answered("NO".into())
    );
    assert_eq!(
        oracle.generate_answer(&f.round, CULPRIT).await,
        AnswerState::Answered("YES".into())
    );
    assert_eq!(provider.describe_calls.load(Ordering::SeqCst), 1);

    let cached = f
        .store
        .descriptions_for(CULPRIT, "OpenAI", MODEL)
        .await
        .unwrap();
    assert_eq!(cached.len(), 1);
    assert_eq!(cached[0].description, format!("6 bytes seen by {MODEL}"));
    assert_eq!(cached[0].prompt, prompts::DESCRIBE_PORTRAIT);
    assert!(provider.requests()[0].prompt.contains("6 bytes seen by"));
}

#[tokio::test]
async fn unreadable_portrait_fails_describe_step() {
    let f = fixture(false).await;
    let portraits = tempfile::tempdir().unwrap();
    let provider = ScriptedProvider::replying(&[Ok("unused")]);
    let oracle = oracle_with(&f.store, openai(&provider), portraits.path());

    let state = oracle.generate_answer(&f.round, CULPRIT).await;
    assert_eq!(state.as_text(), "failed describe");
}

#[tokio::test]
async fn bulk_description_skips_failures_and_reports_progress() {
    let f = fixture(true).await;
    let portraits = tempfile::tempdir().unwrap();
    // Every suspect except the culprit (already described) and p14 has a portrait.
    for i in 1..ROSTER_SIZE - 1 {
        std::fs::write(portraits.path().join(format!("p{i:02}.jpg")), b"img").unwrap();
    }
    let provider = ScriptedProvider::replying(&[]);
    let oracle = oracle_with(&f.store, openai(&provider), portraits.path());

    let mut ticks = Vec::new();
    let report = oracle
        .generate_descriptions_for_all(1, "OpenAI", MODEL, |done, total| ticks.push((done, total)))
        .await
        .unwrap();

    assert_eq!(report.described.len(), ROSTER_SIZE - 2);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].suspect_id, "p14");
    assert_eq!(ticks.len(), ROSTER_SIZE - 1);
    assert_eq!(ticks.last(), Some(&(ROSTER_SIZE - 1, ROSTER_SIZE - 1)));

    let remaining = oracle.suspects_to_describe(1, "OpenAI", MODEL).await.unwrap();
    assert_eq!(remaining.len(), 1);
}

#[tokio::test]
async fn describing_with_unknown_service_is_unsupported() {
    let f = fixture(true).await;
    let oracle = oracle_with(&f.store, ProviderSet::empty(), Path::new("."));
    let err = oracle
        .generate_description(CULPRIT, "Gemini", "gemini-pro")
        .await
        .unwrap_err();
    assert!(matches!(err, OracleError::UnsupportedProvider(name) if name == "Gemini"));
}

// ---------------------------------------------------------------------------
// Waiting
// ---------------------------------------------------------------------------

#[tokio::test]
async fn waiting_on_unanswered_round_times_out() {
    let f = fixture(true).await;
    let oracle = oracle_with(&f.store, ProviderSet::empty(), Path::new("."));

    let started = tokio::time::Instant::now();
    let outcome = oracle
        .wait_for_answer("rnd-1", Duration::from_millis(10), Duration::from_millis(60))
        .await;
    assert_eq!(outcome, WaitOutcome::TimedOut);
    assert!(started.elapsed() >= Duration::from_millis(60));
    assert_eq!(outcome.into_text(), "");
}

#[tokio::test]
async fn answer_written_elsewhere_is_picked_up_by_polling() {
    let f = fixture(true).await;
    let oracle = oracle_with(&f.store, ProviderSet::empty(), Path::new("."));

    let writer = {
        let store = Arc::clone(&f.store);
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(30)).await;
            store.save_answer("rnd-1", "no").await.unwrap();
        })
    };
    let outcome = oracle
        .wait_for_answer("rnd-1", Duration::from_millis(10), Duration::from_secs(5))
        .await;
    writer.await.unwrap();
    assert_eq!(outcome, WaitOutcome::Answered("no".into()));
}

#[tokio::test]
async fn store_read_error_ends_wait() {
    let f = fixture(true).await;
    let oracle = oracle_with(&f.store, ProviderSet::empty(), Path::new("."));
    f.db.conn()
        .execute_batch("PRAGMA foreign_keys = OFF; DROP TABLE eliminations; DROP TABLE rounds;")
        .await
        .unwrap();

    let outcome = oracle
        .wait_for_answer("rnd-1", Duration::from_millis(10), Duration::from_secs(5))
        .await;
    assert!(matches!(outcome, WaitOutcome::ReadFailed(_)));
}

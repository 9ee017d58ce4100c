//! End-to-end submission flows through the Engine with a scripted gateway

use std::time::Duration;

use rlens_app::config::Settings;
use rlens_app::{Engine, Message, RequestStatus, SubmitRejection};
use rlens_core::{PanelId, PanelResult};
use rlens_gateway::test_utils::ScriptedGateway;
use rlens_gateway::{GatewayError, NETWORK_ERROR_MESSAGE};
use serde_json::json;

fn engine(gateway: &ScriptedGateway) -> Engine<ScriptedGateway> {
    Engine::new(Settings::default(), gateway.clone())
}

fn open(engine: &mut Engine<ScriptedGateway>, panel: PanelId, inputs: &[(&str, &str)]) {
    engine.process_message(Message::SelectPanel(panel));
    for (field, value) in inputs {
        engine.process_message(Message::SetInput {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
}

async fn submit_and_wait(engine: &mut Engine<ScriptedGateway>) {
    engine.process_message(Message::Submit);
    tokio::time::timeout(Duration::from_secs(5), engine.wait_for_completion())
        .await
        .expect("completion timed out");
}

fn status(engine: &Engine<ScriptedGateway>) -> &RequestStatus {
    engine.state.view.mounted().unwrap().status()
}

#[tokio::test]
async fn toxicity_success_is_normalized() {
    let gateway = ScriptedGateway::new();
    gateway.push_ok(json!({
        "username": "alice",
        "toxicity_analysis": {
            "toxicity_score": 12.5,
            "toxic_comments_count": 3,
            "total_comments": 40,
            "top_toxic_comments": [],
            "summary": "Mostly civil."
        }
    }));
    let mut engine = engine(&gateway);
    open(&mut engine, PanelId::ToxicityScore, &[("username", "alice")]);

    submit_and_wait(&mut engine).await;

    match engine.state.view.mounted().unwrap().result() {
        Some(PanelResult::ToxicityScore(report)) => {
            assert_eq!(report.username, "alice");
            assert_eq!(report.toxicity_score, 12.5);
            assert_eq!(report.toxic_comments_count, 3);
        }
        other => panic!("unexpected result {:?}", other),
    }
    let calls = gateway.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].endpoint_path, "/toxicity-score");
    assert_eq!(calls[0].inputs.get("username").unwrap(), "alice");
}

#[tokio::test]
async fn empty_input_never_reaches_the_gateway() {
    let gateway = ScriptedGateway::new();
    let mut engine = engine(&gateway);
    open(&mut engine, PanelId::CompareSubreddits, &[("subreddit1", "memes")]);

    engine.process_message(Message::Submit);
    engine.drain_pending_messages();

    let machine = engine.state.view.mounted().unwrap();
    assert_eq!(machine.status(), &RequestStatus::Idle);
    assert_eq!(
        machine.rejection(),
        Some(SubmitRejection::EmptyInput {
            label: "Second subreddit"
        })
    );
    assert_eq!(gateway.call_count(), 0);
}

#[tokio::test]
async fn double_submit_sends_one_request() {
    let gateway = ScriptedGateway::new();
    let release = gateway.push_held();
    let mut engine = engine(&gateway);
    open(&mut engine, PanelId::Therapist, &[("username", "bob")]);

    engine.process_message(Message::Submit);
    engine.process_message(Message::Submit);
    tokio::task::yield_now().await;
    assert!(engine.is_submitting());

    release.send(Ok(json!({"advice": "Log off."}))).unwrap();
    tokio::time::timeout(Duration::from_secs(5), engine.wait_for_completion())
        .await
        .unwrap();

    assert_eq!(gateway.call_count(), 1);
    assert!(matches!(status(&engine), RequestStatus::Succeeded { .. }));
}

#[tokio::test]
async fn rapid_submits_send_one_request_on_every_panel() {
    let gateway = ScriptedGateway::new();
    let mut engine = engine(&gateway);

    for (sent, id) in PanelId::ALL.into_iter().enumerate() {
        let release = gateway.push_held();
        let inputs: Vec<(&str, &str)> = id
            .descriptor()
            .required_inputs
            .iter()
            .map(|f| (f.name, "x"))
            .collect();
        open(&mut engine, id, &inputs);

        engine.process_message(Message::Submit);
        engine.process_message(Message::Submit);
        engine.process_message(Message::Submit);
        for _ in 0..10 {
            if gateway.call_count() > sent {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert_eq!(gateway.call_count(), sent + 1, "{id}");

        release
            .send(Err(GatewayError::network("connection reset")))
            .unwrap();
        tokio::time::timeout(Duration::from_secs(5), engine.wait_for_completion())
            .await
            .unwrap();
        assert!(matches!(status(&engine), RequestStatus::Failed { .. }), "{id}");
    }
    assert_eq!(gateway.call_count(), PanelId::ALL.len());
}

#[tokio::test]
async fn server_detail_is_shown_verbatim() {
    let gateway = ScriptedGateway::new();
    gateway.push_err(GatewayError::server(404, "user not found"));
    let mut engine = engine(&gateway);
    open(&mut engine, PanelId::UserRoast, &[("username", "ghost")]);

    submit_and_wait(&mut engine).await;

    assert_eq!(
        engine.state.view.mounted().unwrap().error_message(),
        Some("user not found")
    );
}

#[tokio::test]
async fn network_failure_uses_generic_message() {
    let gateway = ScriptedGateway::new();
    gateway.push_err(GatewayError::network("connection refused"));
    let mut engine = engine(&gateway);
    open(&mut engine, PanelId::Insights, &[("username", "alice")]);

    submit_and_wait(&mut engine).await;

    assert_eq!(
        engine.state.view.mounted().unwrap().error_message(),
        Some(NETWORK_ERROR_MESSAGE)
    );
}

#[tokio::test]
async fn malformed_payload_fails_with_field_path() {
    let gateway = ScriptedGateway::new();
    gateway.push_ok(json!({"username": "alice"}));
    let mut engine = engine(&gateway);
    open(&mut engine, PanelId::TimeMachine, &[("username", "alice")]);

    submit_and_wait(&mut engine).await;

    assert_eq!(
        engine.state.view.mounted().unwrap().error_message(),
        Some("Invalid response format from server: missing or invalid field 'time_machine'")
    );
}

#[tokio::test]
async fn reply_after_panel_switch_is_discarded() {
    let gateway = ScriptedGateway::new();
    let release = gateway.push_held();
    let mut engine = engine(&gateway);
    open(&mut engine, PanelId::UserRoast, &[("username", "alice")]);

    engine.process_message(Message::Submit);
    engine.process_message(Message::SelectPanel(PanelId::Insights));

    release
        .send(Ok(json!({"username": "alice", "roast": "lol"})))
        .unwrap();
    tokio::time::timeout(Duration::from_secs(5), engine.process_next())
        .await
        .unwrap();

    let machine = engine.state.view.mounted().unwrap();
    assert_eq!(machine.id(), PanelId::Insights);
    assert_eq!(machine.status(), &RequestStatus::Idle);
}

#[tokio::test]
async fn resubmit_after_failure_clears_the_error() {
    let gateway = ScriptedGateway::new();
    gateway.push_err(GatewayError::network("timed out"));
    gateway.push_ok(json!({"recommendations": []}));
    let mut engine = engine(&gateway);
    open(&mut engine, PanelId::RecommendSubreddits, &[("username", "alice")]);

    submit_and_wait(&mut engine).await;
    assert!(matches!(status(&engine), RequestStatus::Failed { .. }));

    submit_and_wait(&mut engine).await;
    match engine.state.view.mounted().unwrap().result() {
        Some(PanelResult::RecommendSubreddits(recs)) => {
            assert!(recs.recommendations.is_empty())
        }
        other => panic!("unexpected result {:?}", other),
    }
    assert_eq!(gateway.call_count(), 2);
}

#[tokio::test]
async fn quit_stops_waiting_for_a_reply() {
    let gateway = ScriptedGateway::new();
    let _release = gateway.push_held();
    let mut engine = engine(&gateway);
    open(&mut engine, PanelId::Therapist, &[("username", "bob")]);
    engine.process_message(Message::Submit);

    engine.msg_sender().send(Message::Quit).await.unwrap();
    tokio::time::timeout(Duration::from_secs(5), engine.wait_for_completion())
        .await
        .unwrap();

    assert!(engine.should_quit());
    engine.shutdown().await;
    assert_eq!(engine.in_flight(), 0);
}

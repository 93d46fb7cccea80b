use domain::session::{DisplayMode, PanelState, SendRejected};
use domain::suggestions::SUGGESTION_CATALOG;
use domain::turn::{Author, ERROR_REPLY};
use serde_json::json;
use tests::{controller_with, StubReply, StubTransport};

#[tokio::test]
async fn test_answer_from_text_field() {
    let transport = StubTransport::always(StubReply::Payload(json!({ "text": "He built a portfolio." })));
    let mut controller = controller_with(&transport);
    controller.open(false);

    controller.send("What did Bart build?").await.expect("send accepted");

    let turns = controller.turns();
    assert_eq!(turns.len(), 2);
    assert_eq!((turns[0].author, turns[0].text.as_str()), (Author::User, "What did Bart build?"));
    assert_eq!((turns[1].author, turns[1].text.as_str()), (Author::Assistant, "He built a portfolio."));
    assert!(!controller.is_busy());
}

#[tokio::test]
async fn test_bare_string_answer() {
    let transport = StubTransport::always(StubReply::Payload(json!("42")));
    let mut controller = controller_with(&transport);
    controller.open(false);

    controller.send("What is the answer?").await.expect("send accepted");
    assert_eq!(controller.turns()[1].text, "42");
}

#[tokio::test]
async fn test_network_failure_becomes_error_bubble() {
    let transport = StubTransport::always(StubReply::Failure("connection reset".into()));
    let mut controller = controller_with(&transport);
    controller.open(false);

    controller.send("Anyone there?").await.expect("send accepted");

    assert_eq!(controller.turns()[1].author, Author::Assistant);
    assert_eq!(controller.turns()[1].text, ERROR_REPLY);
    assert_eq!(controller.state(), PanelState::ChatIdle);

    // The panel stays usable after a failure.
    controller.send("Try again?").await.expect("send accepted");
    assert_eq!(controller.turns().len(), 4);
}

#[tokio::test]
async fn test_history_grows_with_each_exchange() {
    let transport = StubTransport::scripted(vec![
        StubReply::Payload(json!({ "response": "a1" })),
        StubReply::Payload(json!({ "response": "a2" })),
        StubReply::Payload(json!({ "response": "a3" })),
    ]);
    let mut controller = controller_with(&transport);
    controller.open(false);

    for question in ["q1", "q2", "q3"] {
        controller.send(question).await.expect("send accepted");
    }

    let requests = transport.requests();
    assert_eq!(requests.len(), 3);
    assert!(requests[0].history.is_empty());
    assert_eq!(requests[2].message, "q3");
    let prior: Vec<(Author, &str)> = requests[2]
        .history
        .iter()
        .map(|h| (h.role, h.content.as_str()))
        .collect();
    assert_eq!(
        prior,
        vec![
            (Author::User, "q1"),
            (Author::Assistant, "a1"),
            (Author::User, "q2"),
            (Author::Assistant, "a2"),
        ]
    );

    let history = controller.history();
    assert_eq!(history.len(), 6);
    for (i, entry) in history.iter().enumerate() {
        let expected = if i % 2 == 0 { Author::User } else { Author::Assistant };
        assert_eq!(entry.role, expected);
    }
}

#[tokio::test]
async fn test_blank_input_never_reaches_the_service() {
    let transport = StubTransport::always(StubReply::Payload(json!("unused")));
    let mut controller = controller_with(&transport);
    controller.open(false);

    assert_eq!(controller.send("   ").await, Err(SendRejected::Blank));
    assert_eq!(controller.state(), PanelState::Welcome);
    assert!(controller.turns().is_empty());
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn test_busy_panel_rejects_another_send() {
    let transport = StubTransport::always(StubReply::Payload(json!("first answer")));
    let mut controller = controller_with(&transport);
    controller.open(false);

    let pending = controller.begin_send("first").expect("accepted");
    assert_eq!(controller.begin_send("second").unwrap_err(), SendRejected::Busy);
    assert_eq!(controller.turns().len(), 1);

    let reply = controller.exchange(&pending).await;
    controller.complete(pending, reply);
    assert_eq!(transport.calls(), 1);
    assert_eq!(controller.turns().len(), 2);
    assert_eq!(controller.state(), PanelState::ChatIdle);
}

#[tokio::test]
async fn test_reopen_starts_a_fresh_session() {
    let transport = StubTransport::always(StubReply::Payload(json!("ok")));
    let mut controller = controller_with(&transport);

    for _ in 0..2 {
        controller.open(false);
        assert!(controller.turns().is_empty());
        assert!(!controller.is_busy());
        assert_eq!(controller.mode(), Some(DisplayMode::Welcome));

        let mut ordering = controller.suggestion_order().to_vec();
        ordering.sort();
        let mut catalog: Vec<String> = SUGGESTION_CATALOG.iter().map(|s| s.to_string()).collect();
        catalog.sort();
        assert_eq!(ordering, catalog);

        controller.send("hello").await.expect("send accepted");
        controller.close();
        assert_eq!(controller.state(), PanelState::Closed);
    }
}

#[tokio::test]
async fn test_stale_reply_does_not_leak_into_new_session() {
    let transport = StubTransport::always(StubReply::Payload(json!("late answer")));
    let mut controller = controller_with(&transport);
    controller.open(false);

    let pending = controller.begin_send("slow question").expect("accepted");
    controller.close();
    controller.open(false);
    let reply = controller.exchange(&pending).await;
    controller.complete(pending, reply);

    assert!(controller.turns().is_empty());
    assert_eq!(controller.state(), PanelState::Welcome);
}

#[tokio::test]
async fn test_informational_toggle_is_idempotent_on_turns() {
    let transport = StubTransport::always(StubReply::Payload(json!("ok")));
    let mut controller = controller_with(&transport);
    controller.open(true);
    assert_eq!(controller.mode(), Some(DisplayMode::Informational));
    assert!(controller.turns().is_empty());

    controller.toggle_informational();
    controller.send("question").await.expect("send accepted");
    assert_eq!(controller.turns().len(), 2);

    controller.toggle_informational();
    assert_eq!(controller.mode(), Some(DisplayMode::Informational));
    assert!(controller.turns().is_empty());
}

use application::chat_session::{ChatSession, TurnOutcome};
use domain::messages::{FAREWELL, GREETING};
use domain::Speaker;
use tests::builtin_service;

#[test]
fn full_conversation_transcript() {
    let svc = builtin_service();
    let mut session = ChatSession::new(&svc);

    assert!(matches!(session.submit("What benefits do you offer?"), TurnOutcome::Reply(_)));
    assert_eq!(session.submit("  "), TurnOutcome::Ignored);
    assert_eq!(session.submit("Exit"), TurnOutcome::Farewell(FAREWELL.to_string()));
    assert_eq!(session.submit("hello?"), TurnOutcome::Ignored);

    let turns: Vec<_> = session
        .transcript()
        .messages()
        .iter()
        .map(|m| m.speaker)
        .collect();
    assert_eq!(
        turns,
        vec![Speaker::Bot, Speaker::User, Speaker::Bot, Speaker::User, Speaker::Bot]
    );
    let messages = session.transcript().messages();
    assert_eq!(messages[0].content, GREETING);
    assert!(messages[2].content.starts_with("We offer a comprehensive benefits package"));
    assert_eq!(messages[3].content, "Exit");
}

#[test]
fn quit_is_case_insensitive() {
    let svc = builtin_service();
    for word in ["quit", "QUIT", "Quit", "exit", "eXiT"] {
        let mut session = ChatSession::new(&svc);
        assert!(matches!(session.submit(word), TurnOutcome::Farewell(_)), "{word}");
        assert!(session.is_closed());
    }
}

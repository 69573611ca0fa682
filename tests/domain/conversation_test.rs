use std::str::FromStr;

use docrag::domain::{CitedChunk, Conversation, ConversationTurn, TurnRole};

#[test]
fn given_turns_when_pushed_then_the_buffer_grows_in_order() {
    let mut conversation = Conversation::new();
    assert!(conversation.is_empty());

    conversation.push(ConversationTurn::user("first question".to_string()));
    conversation.push(ConversationTurn::assistant(
        "first answer".to_string(),
        Vec::new(),
    ));

    assert_eq!(conversation.len(), 2);
    assert_eq!(conversation.turns()[0].role, TurnRole::User);
    assert_eq!(conversation.turns()[0].content, "first question");
    assert_eq!(conversation.turns()[1].role, TurnRole::Assistant);
}

#[test]
fn given_a_conversation_when_cleared_then_it_is_empty_again() {
    let mut conversation = Conversation::new();
    conversation.push(ConversationTurn::user("hello".to_string()));

    conversation.clear();

    assert!(conversation.is_empty());
    assert_eq!(conversation.len(), 0);
}

#[test]
fn given_a_user_turn_when_created_then_it_carries_no_sources() {
    let turn = ConversationTurn::user("question".to_string());
    assert!(turn.sources.is_empty());
}

#[test]
fn given_an_assistant_turn_when_created_then_it_keeps_its_citations() {
    let cited = CitedChunk {
        text: "chunk text".to_string(),
        source: "notes.txt".to_string(),
        page: None,
        score: 0.92,
    };

    let turn = ConversationTurn::assistant("answer".to_string(), vec![cited]);

    assert_eq!(turn.sources.len(), 1);
    assert_eq!(turn.sources[0].source, "notes.txt");
}

#[test]
fn given_role_strings_when_parsed_then_they_round_trip() {
    for role in [TurnRole::User, TurnRole::Assistant] {
        assert_eq!(TurnRole::from_str(role.as_str()), Ok(role));
        assert_eq!(role.to_string(), role.as_str());
    }
}

#[test]
fn given_an_unknown_role_string_when_parsed_then_it_is_rejected() {
    assert!(TurnRole::from_str("system").is_err());
}

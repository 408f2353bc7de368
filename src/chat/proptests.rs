//! Property-based tests for the chat session
//!
//! - every non-blank submission yields exactly one turn, success or failure
//! - rendering is deterministic
//! - reset leaves nothing behind
//! - out-of-range reactions are no-ops

use super::testing::MockLlmClient;
use super::{render, ChatSession, Conversation, Reaction, ReactionMap, ReactionTarget};
use crate::llm::{LlmError, LlmResponse};
use proptest::prelude::*;

fn arb_reaction() -> impl Strategy<Value = Reaction> {
    prop_oneof![
        Just(Reaction::Like),
        Just(Reaction::Dislike),
        Just(Reaction::Heart),
    ]
}

/// Non-blank message text
fn arb_message() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9?!.,][a-zA-Z0-9 ?!.,]{0,40}"
}

/// A submission paired with whether the model call should succeed
fn arb_submissions() -> impl Strategy<Value = Vec<(String, bool)>> {
    proptest::collection::vec((arb_message(), any::<bool>()), 0..12)
}

fn arb_conversation() -> impl Strategy<Value = (Conversation, ReactionMap)> {
    (
        proptest::collection::vec((arb_message(), arb_message()), 0..8),
        proptest::collection::vec((0usize..10, arb_reaction()), 0..8),
    )
        .prop_map(|(turns, reactions)| {
            let mut conv = Conversation::new();
            for (user, bot) in turns {
                conv.append(user, bot);
            }
            let mut map = ReactionMap::new();
            for (index, reaction) in reactions {
                map.set(ReactionTarget::Index(index), reaction, conv.len());
            }
            (conv, map)
        })
}

fn run_session(
    forward_context: bool,
    submissions: &[(String, bool)],
) -> (ChatSession, MockLlmClient) {
    let llm = MockLlmClient::new("mock");
    for (i, (_, ok)) in submissions.iter().enumerate() {
        if *ok {
            llm.queue_response(LlmResponse::from_text(format!("reply {i}")));
        } else {
            llm.queue_error(LlmError::server_error(format!("boom {i}")));
        }
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();
    let mut session = ChatSession::new(forward_context);
    runtime.block_on(async {
        for (text, _) in submissions {
            session.submit(&llm, text).await;
        }
    });
    (session, llm)
}

proptest! {
    #[test]
    fn prop_one_turn_per_submission(submissions in arb_submissions(), forward in any::<bool>()) {
        let (session, llm) = run_session(forward, &submissions);
        prop_assert_eq!(session.conversation().len(), submissions.len());
        prop_assert_eq!(llm.recorded_requests().len(), submissions.len());
    }

    #[test]
    fn prop_context_grows_with_history(submissions in arb_submissions()) {
        let (_, llm) = run_session(true, &submissions);
        for (i, request) in llm.recorded_requests().iter().enumerate() {
            // Every prior turn contributes a user and a non-empty model message
            prop_assert_eq!(request.messages.len(), 2 * i + 1);
        }
    }

    #[test]
    fn prop_render_deterministic((conv, reactions) in arb_conversation()) {
        let first = render(&conv, &reactions);
        let second = render(&conv.clone(), &reactions.clone());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_render_has_block_per_turn((conv, reactions) in arb_conversation()) {
        let rendered = render(&conv, &reactions);
        prop_assert_eq!(rendered.matches("👤 ").count(), conv.len());
        prop_assert_eq!(rendered.matches("⭐ Reaction: ").count(), reactions.len());
    }

    #[test]
    fn prop_out_of_range_reaction_is_noop(
        (conv, mut reactions) in arb_conversation(),
        offset in 0usize..5,
        reaction in arb_reaction(),
    ) {
        let before_map = reactions.clone();
        let before = render(&conv, &reactions);
        let target = ReactionTarget::Index(conv.len() + offset);
        let applied = reactions.set(target, reaction, conv.len());
        prop_assert!(!applied);
        prop_assert_eq!(&reactions, &before_map);
        prop_assert_eq!(render(&conv, &reactions), before);
    }

    #[test]
    fn prop_reset_renders_empty(submissions in arb_submissions(), reaction in arb_reaction()) {
        let (mut session, _) = run_session(true, &submissions);
        session.react(ReactionTarget::Last, reaction);
        session.reset();
        prop_assert_eq!(session.transcript(), "");
        prop_assert!(session.reactions().is_empty());
    }
}

use domain::messages::FALLBACK_ANSWER;
use tests::{builtin_service, service_from};

const COST_ANSWER: &str = "The cost of a project depends on many factors, including complexity and features. We provide a detailed, no-obligation quote after our initial discovery call.";

#[test]
fn every_stored_question_returns_its_own_answer() {
    let svc = builtin_service();
    for entry in svc.knowledge_base().entries() {
        assert_eq!(svc.get_response(&entry.question), entry.answer, "{}", entry.question);
        assert_eq!(
            svc.get_response(&entry.question.to_uppercase()),
            entry.answer,
            "{}",
            entry.question
        );
    }
}

#[test]
fn open_positions_question() {
    assert_eq!(
        builtin_service().get_response("Do you have any open positions?"),
        "You can view all of our current job openings on our career page on our website."
    );
}

#[test]
fn website_cost_uses_shared_cost_answer() {
    let svc = builtin_service();
    assert_eq!(svc.get_response("how much does a website cost"), COST_ANSWER);
    assert_eq!(svc.get_response("How much does it cost to build a mobile app?"), COST_ANSWER);
}

#[test]
fn no_overlap_falls_back() {
    assert_eq!(builtin_service().get_response("xyzzy plugh quux"), FALLBACK_ANSWER);
}

#[test]
fn empty_and_punctuation_only_fall_back() {
    let svc = builtin_service();
    for query in ["", "   ", "?", "!!!", "...?!,;:", "\t\n"] {
        assert_eq!(svc.get_response(query), FALLBACK_ANSWER, "{query:?}");
    }
}

#[test]
fn repeated_queries_give_identical_answers() {
    let svc = builtin_service();
    for query in ["what is your tech stack", "remote?", "nothing relevant here"] {
        assert_eq!(svc.get_response(query), svc.get_response(query));
        assert_eq!(svc.rank(query), svc.rank(query));
    }
}

#[test]
fn tie_goes_to_earliest_entry() {
    let svc = service_from(&[
        ("Unrelated filler question", "filler"),
        ("How do I reset my password?", "first"),
        ("My password, how do I reset?", "second"),
    ]);
    let ranked = svc.rank("reset password");
    assert_eq!(ranked[1].score, ranked[2].score);
    assert_eq!(svc.best_match("reset password").map(|b| b.index), Some(1));
    assert_eq!(svc.get_response("reset password"), "first");
}

#[test]
fn weak_overlap_stays_below_threshold() {
    // Only "you" is shared with many questions, and its weight is low.
    assert_eq!(builtin_service().get_response("thank you"), FALLBACK_ANSWER);
}

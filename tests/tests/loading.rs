use application::faq_service::FaqService;
use domain::messages::FALLBACK_ANSWER;
use infrastructure::config::Config;
use infrastructure::faq_loader::{load_knowledge_base, LoadError};
use tests::faq_file;

#[test]
fn custom_faq_file_drives_answers() {
    let file = faq_file(
        r#"[
            {"question": "Where is your office?", "answer": "In Lisbon."},
            {"question": "Do you sponsor visas?", "answer": "For some roles."}
        ]"#,
    );
    let config = Config::default().with_faq_path(Some(file.path().to_path_buf()));
    let kb = load_knowledge_base(config.faq_path.as_deref()).unwrap();
    let svc = FaqService::with_threshold(kb, config.similarity_threshold).unwrap();

    assert_eq!(svc.get_response("where is the office"), "In Lisbon.");
    assert_eq!(svc.get_response("visa sponsorship"), FALLBACK_ANSWER);
    assert_eq!(svc.get_response("do you sponsor visas"), "For some roles.");
}

#[test]
fn threshold_from_config_is_applied() {
    let config = Config::from_lookup(|key| {
        (key == "FAQBOT_THRESHOLD").then(|| "0.95".to_string())
    })
    .unwrap();
    let kb = load_knowledge_base(None).unwrap();
    let svc = FaqService::with_threshold(kb, config.similarity_threshold).unwrap();
    assert_eq!(svc.threshold(), 0.95);
    // Scores about 0.81 against the website cost question.
    assert_eq!(svc.get_response("how much does a website cost"), FALLBACK_ANSWER);
}

#[test]
fn invalid_file_is_reported() {
    let file = faq_file("{ not json");
    assert!(matches!(
        load_knowledge_base(Some(file.path())),
        Err(LoadError::Parse { .. })
    ));
}

//! Survey flow against a real database file.

use species_stat_core::builtin;
use species_stat_store::*;
use tempfile::TempDir;

fn contacts() -> Vec<Contact> {
    vec![
        Contact::new("grey", "https://img/grey.png"),
        Contact::new("ember", "https://img/ember.png"),
        Contact::new("scale", "https://img/scale.png"),
    ]
}

#[test]
fn import_answer_and_summarize() {
    let taxonomy = builtin::taxonomy().unwrap();
    let dir = TempDir::new().unwrap();
    let store = SurveyStore::open(dir.path().join("survey.db")).unwrap();

    store.get_or_create_user("riismo", "").unwrap();
    assert_eq!(store.next_step("riismo").unwrap(), NextStep::Userinfo);
    store.set_userinfo(&taxonomy, "riismo", "redfox", None).unwrap();
    assert_eq!(store.next_step("riismo").unwrap(), NextStep::Welcome);

    assert_eq!(store.import_contacts("riismo", &contacts()).unwrap(), 3);
    assert_eq!(store.import_contacts("riismo", &contacts()).unwrap(), 0);
    assert_eq!(store.next_step("riismo").unwrap(), NextStep::Survey);

    let pending: Vec<String> = store
        .pending_contacts("riismo")
        .unwrap()
        .into_iter()
        .map(|c| c.username)
        .collect();
    assert_eq!(pending, vec!["ember", "grey", "scale"]);

    let recorded = store
        .record_answers(
            &taxonomy,
            "riismo",
            &[
                Answer::new("grey", "wolf"),
                Answer::new("ember", ""),
                Answer::new("scale", "dragon"),
            ],
        )
        .unwrap();
    assert_eq!(recorded, 2);
    assert_eq!(
        store.response_counts("riismo").unwrap(),
        ResponseCounts {
            answered: 2,
            pending: 1,
            total: 3
        }
    );

    store
        .record_answers(&taxonomy, "riismo", &[Answer::new("ember", "wolf")])
        .unwrap();
    assert_eq!(store.next_step("riismo").unwrap(), NextStep::Results);

    let user = store.user("riismo").unwrap().unwrap();
    let summary = store.result_summary(&taxonomy, &user, 3).unwrap();
    assert_eq!(summary.deviations[0].label, "Dragon");
    assert!(summary.text.starts_with("riismo's follow list has "));
}

#[test]
fn contacts_become_users_with_their_own_result_ids() {
    let store = SurveyStore::open_in_memory().unwrap();
    store.get_or_create_user("riismo", "").unwrap();
    store.import_contacts("riismo", &contacts()).unwrap();

    let grey = store.user("grey").unwrap().unwrap();
    assert_eq!(grey.icon_url, "https://img/grey.png");
    let riismo = store.user("riismo").unwrap().unwrap();
    assert_ne!(grey.result_id, riismo.result_id);
    assert_eq!(store.stats().unwrap(), (4, 3));
}

#[test]
fn invalid_batch_is_rolled_back() {
    let taxonomy = builtin::taxonomy().unwrap();
    let store = SurveyStore::open_in_memory().unwrap();
    store.get_or_create_user("riismo", "").unwrap();
    store.get_or_create_user("stranger", "").unwrap();
    store.import_contacts("riismo", &contacts()).unwrap();

    let err = store
        .record_answers(
            &taxonomy,
            "riismo",
            &[Answer::new("grey", "wolf"), Answer::new("stranger", "fox")],
        )
        .unwrap_err();
    assert!(matches!(err, StoreError::UnknownChoice(ref c) if c == "fox"));

    let err = store
        .record_answers(
            &taxonomy,
            "riismo",
            &[Answer::new("grey", "wolf"), Answer::new("stranger", "redfox")],
        )
        .unwrap_err();
    assert!(matches!(err, StoreError::UnknownContact { .. }));
    assert!(store.answered_choices("riismo").unwrap().is_empty());
}

#[test]
fn unknown_subject_cannot_import_or_answer() {
    let taxonomy = builtin::taxonomy().unwrap();
    let store = SurveyStore::open_in_memory().unwrap();
    assert!(matches!(
        store.import_contacts("ghost", &contacts()),
        Err(StoreError::UnknownUser(_))
    ));
    assert!(matches!(
        store.record_answers(&taxonomy, "ghost", &[]),
        Err(StoreError::UnknownUser(_))
    ));
    assert!(matches!(store.next_step("ghost"), Err(StoreError::UnknownUser(_))));
}

#[test]
fn import_is_capped() {
    let store = SurveyStore::open_in_memory().unwrap();
    store.get_or_create_user("riismo", "").unwrap();
    let many: Vec<Contact> = (0..MAX_IMPORTED_CONTACTS + 5)
        .map(|i| Contact::new(format!("user{}", i), ""))
        .collect();
    assert_eq!(
        store.import_contacts("riismo", &many).unwrap(),
        MAX_IMPORTED_CONTACTS
    );
}

#[test]
fn reopening_keeps_data() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("survey.db");
    let result_id = {
        let store = SurveyStore::open(&path).unwrap();
        store.get_or_create_user("riismo", "").unwrap().result_id
    };

    let store = SurveyStore::open(&path).unwrap();
    let user = store.user_by_result_id(&result_id).unwrap().unwrap();
    assert_eq!(user.username, "riismo");
}

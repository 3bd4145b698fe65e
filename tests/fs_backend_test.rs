use chrono::{TimeZone, Utc};
use quizdb::model::{QuestionInput, QuestionPatch, QuizResult};
use quizdb::store::fs_backend::FsBackend;
use quizdb::store::question_store::{QuestionStore, NEXT_ID_KEY, QUESTIONS_KEY};
use quizdb::store::result_log::{ResultLog, RESULTS_KEY};
use quizdb::store::KvBackend;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().to_path_buf());
    (dir, backend)
}

fn assert_no_tmp_files(dir: &TempDir) {
    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_basic_io() {
    let (_dir, backend) = setup();

    assert_eq!(backend.get("greeting").unwrap(), None);
    backend.set("greeting", "\"hello\"").unwrap();
    assert_eq!(backend.get("greeting").unwrap(), Some("\"hello\"".to_string()));

    backend.remove("greeting").unwrap();
    assert_eq!(backend.get("greeting").unwrap(), None);
    // Removing again is a no-op.
    backend.remove("greeting").unwrap();
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (dir, backend) = setup();

    backend.set("blob", "[1,2,3]").unwrap();
    backend.set("blob", "[4]").unwrap();

    let on_disk = fs::read_to_string(dir.path().join("blob.json")).unwrap();
    assert_eq!(on_disk, "[4]");
    assert_no_tmp_files(&dir);
}

#[test]
fn test_fs_backend_creates_missing_root() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("a").join("b");
    let backend = FsBackend::new(nested.clone());

    backend.set("k", "1").unwrap();
    assert!(nested.join("k.json").exists());
}

#[test]
fn test_question_store_persists_across_reopen() {
    let (dir, backend) = setup();

    let mut store = QuestionStore::new(backend.clone()).unwrap();
    assert_eq!(store.count().unwrap(), 5);
    let created = store
        .create(QuestionInput::new(
            "What does TLS stand for?",
            vec!["Transport Layer Security".into(), "Total Link Safety".into()],
            0,
            "Protocols",
            "Basic",
        ))
        .unwrap();
    assert_eq!(created.id, 6);
    assert!(store.delete(2).unwrap());

    let reopened = QuestionStore::new(FsBackend::new(dir.path().to_path_buf())).unwrap();
    let ids: Vec<u64> = reopened.get_all().unwrap().iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![1, 3, 4, 5, 6]);
    assert_eq!(
        reopened.get_by_id(6).unwrap().unwrap().category,
        "Protocols"
    );
    assert_eq!(backend.get(NEXT_ID_KEY).unwrap(), Some("7".to_string()));
    assert_no_tmp_files(&dir);
}

#[test]
fn test_question_store_does_not_reseed_after_deleting_everything() {
    let (dir, backend) = setup();

    let mut store = QuestionStore::new(backend).unwrap();
    for id in 1..=5 {
        assert!(store.delete(id).unwrap());
    }

    let reopened = QuestionStore::new(FsBackend::new(dir.path().to_path_buf())).unwrap();
    assert_eq!(reopened.count().unwrap(), 0);
}

#[test]
fn test_question_store_reseeds_after_reset() {
    let (dir, backend) = setup();

    let mut store = QuestionStore::new(backend).unwrap();
    store
        .update(1, QuestionPatch::default().with_category("Changed"))
        .unwrap();
    store.reset().unwrap();
    assert!(!dir.path().join(format!("{}.json", QUESTIONS_KEY)).exists());

    let reopened = QuestionStore::new(FsBackend::new(dir.path().to_path_buf())).unwrap();
    assert_eq!(reopened.count().unwrap(), 5);
    assert_eq!(
        reopened.get_by_id(1).unwrap().unwrap().category,
        "Computer Networks"
    );
}

#[test]
fn test_question_store_reads_hand_edited_blob() {
    let (dir, backend) = setup();
    fs::write(
        dir.path().join(format!("{}.json", QUESTIONS_KEY)),
        r#"[{"id":40,"question":"Q","options":"[\"x\",\"y\"]","correctAnswer":1,"category":"C","difficulty":"Basic"}]"#,
    )
    .unwrap();

    let mut store = QuestionStore::new(backend).unwrap();
    let q = store.get_by_id(40).unwrap().unwrap();
    assert_eq!(q.options, vec!["x", "y"]);

    // Missing counter: the next id still clears the existing ones.
    let created = store
        .create(QuestionInput::new("Q2", vec!["a".into()], 0, "C", "Basic"))
        .unwrap();
    assert_eq!(created.id, 41);
}

#[test]
fn test_result_log_persists() {
    let (dir, backend) = setup();

    let mut log = ResultLog::new(backend);
    log.append(QuizResult {
        player_name: "trinity".into(),
        student_id: "STU002".into(),
        score: 3,
        total_questions: 5,
        time_spent: 42,
        timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
    })
    .unwrap();

    let reopened = ResultLog::new(FsBackend::new(dir.path().to_path_buf()));
    let all = reopened.all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].player_name, "trinity");
    assert!(dir.path().join(format!("{}.json", RESULTS_KEY)).exists());
}

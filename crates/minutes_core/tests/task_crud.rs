use minutes_core::db::open_db_in_memory;
use minutes_core::{
    ActionItem, RepoError, ServiceError, SqliteTaskRepository, SqliteTranscriptRepository, Task,
    TaskListQuery, TaskPatch, TaskRepository, TaskService, TaskStatus, Transcript,
    TranscriptRepository,
};
use rusqlite::Connection;

fn stored_transcript(conn: &Connection) -> Transcript {
    let transcript = Transcript::new("Sarah will review the marketing materials.");
    SqliteTranscriptRepository::try_new(conn)
        .unwrap()
        .create_transcript(&transcript)
        .unwrap();
    transcript
}

fn sample_task(transcript: &Transcript, position: u32, description: &str) -> Task {
    Task::from_action_item(
        transcript.uuid,
        position,
        ActionItem {
            task: description.to_string(),
            owner: Some("Sarah".to_string()),
            due_date: Some("2024-03-15".to_string()),
        },
    )
}

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let transcript = stored_transcript(&conn);
    let repo = SqliteTaskRepository::try_new(&conn).unwrap();

    let task = sample_task(&transcript, 0, "Review the marketing materials");
    let id = repo.create_task(&task).unwrap();

    let loaded = repo.get_task(id).unwrap().unwrap();
    assert_eq!(loaded, task);
}

#[test]
fn create_rejects_invalid_task() {
    let conn = open_db_in_memory().unwrap();
    let transcript = stored_transcript(&conn);
    let repo = SqliteTaskRepository::try_new(&conn).unwrap();

    let mut task = sample_task(&transcript, 0, "Review the marketing materials");
    task.due_date = Some("soonish".to_string());

    let err = repo.create_task(&task).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
}

#[test]
fn list_filters_by_status() {
    let conn = open_db_in_memory().unwrap();
    let transcript = stored_transcript(&conn);
    let repo = SqliteTaskRepository::try_new(&conn).unwrap();

    let open_task = sample_task(&transcript, 0, "Review the marketing materials");
    let mut done_task = sample_task(&transcript, 1, "Send the minutes");
    done_task.status = TaskStatus::Done;
    repo.create_task(&open_task).unwrap();
    repo.create_task(&done_task).unwrap();

    let all = repo.list_tasks(&TaskListQuery::default()).unwrap();
    assert_eq!(all.len(), 2);

    let open_only = repo
        .list_tasks(&TaskListQuery {
            status: Some(TaskStatus::Open),
            ..TaskListQuery::default()
        })
        .unwrap();
    assert_eq!(open_only.len(), 1);
    assert_eq!(open_only[0].uuid, open_task.uuid);

    let done_only = repo
        .list_tasks(&TaskListQuery {
            status: Some(TaskStatus::Done),
            ..TaskListQuery::default()
        })
        .unwrap();
    assert_eq!(done_only.len(), 1);
    assert_eq!(done_only[0].uuid, done_task.uuid);
}

#[test]
fn patch_updates_only_provided_fields() {
    let conn = open_db_in_memory().unwrap();
    let transcript = stored_transcript(&conn);
    let service = TaskService::new(SqliteTaskRepository::try_new(&conn).unwrap());

    let task = sample_task(&transcript, 0, "Review the marketing materials");
    SqliteTaskRepository::try_new(&conn)
        .unwrap()
        .create_task(&task)
        .unwrap();

    let updated = service
        .update_task(
            task.uuid,
            TaskPatch {
                description: Some("Review and publish the materials".to_string()),
                status: Some(TaskStatus::Done),
                ..TaskPatch::default()
            },
        )
        .unwrap();

    assert_eq!(updated.description, "Review and publish the materials");
    assert_eq!(updated.status, TaskStatus::Done);
    // Untouched fields survive the patch.
    assert_eq!(updated.owner, task.owner);
    assert_eq!(updated.due_date, task.due_date);
    assert_eq!(updated.position, task.position);
}

#[test]
fn patch_with_malformed_due_date_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let transcript = stored_transcript(&conn);
    let service = TaskService::new(SqliteTaskRepository::try_new(&conn).unwrap());

    let task = sample_task(&transcript, 0, "Review the marketing materials");
    SqliteTaskRepository::try_new(&conn)
        .unwrap()
        .create_task(&task)
        .unwrap();

    let err = service
        .update_task(
            task.uuid,
            TaskPatch {
                due_date: Some("next friday".to_string()),
                ..TaskPatch::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, ServiceError::Repo(RepoError::Validation(_))));
}

#[test]
fn set_status_flips_between_open_and_done() {
    let conn = open_db_in_memory().unwrap();
    let transcript = stored_transcript(&conn);
    let service = TaskService::new(SqliteTaskRepository::try_new(&conn).unwrap());

    let task = sample_task(&transcript, 0, "Review the marketing materials");
    SqliteTaskRepository::try_new(&conn)
        .unwrap()
        .create_task(&task)
        .unwrap();

    let done = service.set_status(task.uuid, TaskStatus::Done).unwrap();
    assert_eq!(done.status, TaskStatus::Done);

    let reopened = service.set_status(task.uuid, TaskStatus::Open).unwrap();
    assert_eq!(reopened.status, TaskStatus::Open);
}

#[test]
fn missing_task_yields_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = TaskService::new(SqliteTaskRepository::try_new(&conn).unwrap());

    let ghost = uuid::Uuid::new_v4();
    assert!(matches!(
        service.get_task(ghost).unwrap_err(),
        ServiceError::TaskNotFound(id) if id == ghost
    ));
    assert!(matches!(
        service.delete_task(ghost).unwrap_err(),
        ServiceError::TaskNotFound(_)
    ));
}

#[test]
fn delete_task_leaves_transcript_in_place() {
    let conn = open_db_in_memory().unwrap();
    let transcript = stored_transcript(&conn);
    let repo = SqliteTaskRepository::try_new(&conn).unwrap();

    let task = sample_task(&transcript, 0, "Review the marketing materials");
    repo.create_task(&task).unwrap();
    repo.delete_task(task.uuid).unwrap();

    assert!(repo.get_task(task.uuid).unwrap().is_none());
    let transcripts = SqliteTranscriptRepository::try_new(&conn).unwrap();
    assert!(transcripts
        .get_transcript(transcript.uuid)
        .unwrap()
        .is_some());
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteTaskRepository::try_new(&conn) {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn read_path_rejects_invalid_persisted_status() {
    let conn = open_db_in_memory().unwrap();
    let transcript = stored_transcript(&conn);
    let repo = SqliteTaskRepository::try_new(&conn).unwrap();

    let task = sample_task(&transcript, 0, "Review the marketing materials");
    repo.create_task(&task).unwrap();
    conn.execute(
        "UPDATE tasks SET status = 'archived' WHERE uuid = ?1;",
        [task.uuid.to_string()],
    )
    .unwrap();

    let err = repo.get_task(task.uuid).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

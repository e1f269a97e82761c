//! End-to-end behavior of the task list controller, driven the way the UI
//! drives it: fill the buffers, then submit.

use pretty_assertions::assert_eq;
use tasklist::model::{FilterMode, Task, TaskId};
use tasklist::ops::notify::{NoticeKind, Notification};
use tasklist::ops::task_list::{EditSession, SubmitOutcome, TaskError, TaskList};

fn submit(
    list: &mut TaskList,
    text: &str,
    date: &str,
) -> (Result<SubmitOutcome, TaskError>, Vec<Notification>) {
    let mut notes: Vec<Notification> = Vec::new();
    list.set_text_buffer(text);
    list.set_date_buffer(date);
    let result = list.submit(&mut notes);
    (result, notes)
}

fn add(list: &mut TaskList, text: &str, date: &str) {
    let (result, _) = submit(list, text, date);
    result.unwrap();
}

/// (text, completed, due date) for compact comparisons
fn summary(tasks: &[Task]) -> Vec<(String, bool, Option<String>)> {
    tasks
        .iter()
        .map(|t| (t.text.clone(), t.completed, t.due_date.clone()))
        .collect()
}

fn id(list: &TaskList, index: usize) -> TaskId {
    list.id_at(index).unwrap()
}

#[test]
fn add_first_task() {
    let mut list = TaskList::new();
    let (result, notes) = submit(&mut list, "Buy milk", "2024-01-01");

    assert!(matches!(result, Ok(SubmitOutcome::Added(_))));
    assert_eq!(
        summary(list.tasks()),
        vec![("Buy milk".into(), false, Some("2024-01-01".into()))]
    );
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].kind, NoticeKind::Success);
}

#[test]
fn toggle_then_filter_pending() {
    let mut list = TaskList::new();
    add(&mut list, "A", "");
    add(&mut list, "B", "");

    list.toggle_complete(id(&list, 0)).unwrap();
    assert_eq!(
        summary(list.tasks()),
        vec![("A".into(), true, None), ("B".into(), false, None)]
    );

    list.set_filter(FilterMode::Pending);
    let visible: Vec<Task> = list.visible_tasks().into_iter().cloned().collect();
    assert_eq!(summary(&visible), vec![("B".into(), false, None)]);
}

#[test]
fn edit_existing_task() {
    let mut list = TaskList::new();
    add(&mut list, "A", "2023-12-31");
    let a = id(&list, 0);

    list.begin_edit(a).unwrap();
    assert_eq!(
        (list.text_buffer(), list.date_buffer()),
        ("A", "2023-12-31")
    );

    let (result, notes) = submit(&mut list, "A2", "2024-02-02");
    assert_eq!(result, Ok(SubmitOutcome::Updated(a)));
    assert_eq!(
        summary(list.tasks()),
        vec![("A2".into(), false, Some("2024-02-02".into()))]
    );
    assert_eq!(list.edit_session(), EditSession::Idle);
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].kind, NoticeKind::Success);
    assert_eq!((list.text_buffer(), list.date_buffer()), ("", ""));
}

#[test]
fn empty_submits_never_change_the_collection() {
    let mut list = TaskList::new();
    add(&mut list, "A", "");
    for text in ["", " ", "\n\t "] {
        let (result, notes) = submit(&mut list, text, "2024-01-01");
        assert_eq!(result, Err(TaskError::EmptyText));
        assert_eq!(list.len(), 1);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].kind, NoticeKind::Warning);
    }
}

#[test]
fn delete_preserves_relative_order() {
    let mut list = TaskList::new();
    for text in ["A", "B", "C", "D", "E"] {
        add(&mut list, text, "");
    }
    let before: Vec<TaskId> = list.tasks().iter().map(|t| t.id).collect();

    list.delete_task(before[1]).unwrap();

    let after: Vec<TaskId> = list.tasks().iter().map(|t| t.id).collect();
    assert_eq!(after.len(), before.len() - 1);
    // Everything that was after index 1 moved up by one
    assert_eq!(&after[1..], &before[2..]);
    assert_eq!(after[0], before[0]);
}

#[test]
fn filters_partition_the_collection() {
    let mut list = TaskList::new();
    for text in ["A", "B", "C", "D", "E", "F"] {
        add(&mut list, text, "");
    }
    for i in [0, 2, 3] {
        list.toggle_complete(id(&list, i)).unwrap();
    }

    let texts = |list: &TaskList| -> Vec<String> {
        list.visible_tasks().iter().map(|t| t.text.clone()).collect()
    };

    list.set_filter(FilterMode::All);
    assert_eq!(texts(&list), vec!["A", "B", "C", "D", "E", "F"]);
    list.set_filter(FilterMode::Completed);
    assert_eq!(texts(&list), vec!["A", "C", "D"]);
    list.set_filter(FilterMode::Pending);
    assert_eq!(texts(&list), vec!["B", "E", "F"]);
}

#[test]
fn captured_ids_survive_other_deletes() {
    let mut list = TaskList::new();
    add(&mut list, "A", "");
    add(&mut list, "B", "");
    add(&mut list, "C", "");
    let c = id(&list, 2);

    list.delete_task(id(&list, 0)).unwrap();
    list.toggle_complete(c).unwrap();

    assert!(list.get(c).unwrap().completed);
    assert_eq!(list.position(c), Some(1));
}

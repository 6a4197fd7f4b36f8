//! Integration tests for the task store and matrix classifier.

use eisenhower_core::{
    compute_priority, compute_quadrant, Config, Event, FixedClock, Intent, Quadrant, TaskStore,
};

fn added(event: Option<Event>) -> eisenhower_core::TaskId {
    event.and_then(|e| e.task_id()).unwrap()
}

#[test]
fn test_full_session_workflow() {
    let mut store = TaskStore::with_clock(FixedClock(1_700_000_000_000));
    let mut form = Config::default().input_form();

    // Typed input, submitted from the form
    form.text = "Prepare board deck".to_string();
    form.urgency = 9;
    form.importance = 9;
    let deck = added(store.apply(form.submit().unwrap()));
    assert_eq!((form.urgency, form.importance), (5, 5));

    let gym = added(store.apply(Intent::add("Go to the gym", 3, 8)));
    let email = added(store.apply(Intent::add("Answer vendor email", 7, 2)));
    let tv = added(store.apply(Intent::add("Rewatch series", 1, 1)));

    let view = store.view();
    let order: Vec<_> = view.tasks.iter().map(|t| t.id).collect();
    // 22.5, 15.0, 10.0, 2.5
    assert_eq!(order, vec![deck, gym, email, tv]);
    for q in Quadrant::ALL {
        assert_eq!(view.panel(q).tasks.len(), 1, "{q} should hold one task");
    }

    // Drag the series into "Decide" and finish the deck
    store.apply(Intent::Reclassify { id: tv, quadrant: 2 });
    store.apply(Intent::Toggle { id: deck });
    assert_eq!(store.view().summary.count(Quadrant::Decide), 2);
    assert_eq!(store.view().summary.completed, 1);

    store.apply(Intent::ClearCompleted);
    assert!(store.get(deck).is_none());
    assert_eq!(store.len(), 3);

    store.apply(Intent::Delete { id: email });
    assert_eq!(store.view().summary.count(Quadrant::Delegate), 0);
    assert_eq!(store.view().summary.total, 2);
}

#[test]
fn test_threshold_table() {
    let cases = [
        ((6, 6), 1),
        ((5, 6), 2),
        ((6, 5), 3),
        ((5, 5), 4),
    ];
    let mut store = TaskStore::with_clock(FixedClock(1));
    for ((urgency, importance), expected) in cases {
        let id = added(store.apply(Intent::add("edge", urgency, importance)));
        let task = store.get(id).unwrap();
        assert_eq!(compute_quadrant(task).number(), expected);
        assert_eq!(
            compute_priority(task),
            importance as f64 * 1.5 + urgency as f64
        );
    }
}

#[test]
fn test_ignored_intents_leave_store_untouched() {
    let mut store = TaskStore::with_clock(FixedClock(10));
    added(store.apply(Intent::add("keep me", 4, 4)));
    let before = store.view().clone();

    let noise = vec![
        Intent::add("", 5, 5),
        Intent::Toggle { id: eisenhower_core::TaskId(99) },
        Intent::Delete { id: eisenhower_core::TaskId(99) },
        Intent::Reclassify { id: eisenhower_core::TaskId(10), quadrant: 0 },
        Intent::ClearCompleted,
    ];
    for intent in noise {
        assert!(store.apply(intent).is_none());
    }
    assert_eq!(store.view(), &before);
}

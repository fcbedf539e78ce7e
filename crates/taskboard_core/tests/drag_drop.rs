use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use taskboard_core::{
    BoardStore, DataTransfer, DragGesture, DragOverResponse, DragPayload, DragTarget, DropEffect,
    DropOutcome, GestureState, ItemDragSource, ItemStatus, PayloadError, StatusChange,
    StatusDropTarget, MIME_TEXT_PLAIN,
};
use uuid::Uuid;

fn count_notifications(store: &BoardStore) -> Arc<AtomicUsize> {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    store
        .subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .detach();
    calls
}

#[test]
fn drag_start_writes_plain_text_item_id() {
    let mut store = BoardStore::new();
    let id = store.create("Drag me", "Movable item", 2);
    let source = ItemDragSource::new(id);

    let gesture = DragGesture::begin(&source);

    let transfer = gesture.transfer();
    assert_eq!(transfer.types().collect::<Vec<_>>(), vec![MIME_TEXT_PLAIN]);
    assert_eq!(transfer.get_data(MIME_TEXT_PLAIN), Some(id.to_string().as_str()));
    assert_eq!(transfer.effect_allowed(), DropEffect::Move);
    assert_eq!(gesture.state(), &GestureState::Dragging { source: id });
}

#[test]
fn drag_over_with_foreign_type_shows_no_affordance() {
    let mut target = StatusDropTarget::new(ItemStatus::Finished);
    let mut transfer = DataTransfer::new();
    transfer.set_data("text/uri-list", "https://example.com/file.txt");

    assert_eq!(target.handle_drag_over(&transfer), DragOverResponse::Reject);
    assert!(!target.is_highlighted());
}

#[test]
fn drag_over_then_leave_toggles_affordance_without_store_change() {
    let mut store = BoardStore::new();
    let id = store.create("Hover", "Hover only item", 1);
    let calls = count_notifications(&store);
    let source = ItemDragSource::new(id);
    let mut finished = StatusDropTarget::new(ItemStatus::Finished);

    let mut gesture = DragGesture::begin(&source);
    assert!(gesture.drag_over(&mut finished).is_accept());
    assert!(finished.is_highlighted());
    assert_eq!(gesture.state().name(), "hovering_eligible");

    gesture.drag_leave(&mut finished);
    assert!(!finished.is_highlighted());
    assert_eq!(gesture.state(), &GestureState::Dragging { source: id });

    let end_state = gesture.end(&source).clone();
    assert_eq!(end_state, GestureState::Cancelled { source: Some(id) });
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(store.get(id).unwrap().status, ItemStatus::Active);
}

#[test]
fn drop_on_matching_target_moves_item_exactly_once() {
    let mut store = BoardStore::new();
    let id = store.create("Finish me", "Soon finished", 3);
    let calls = count_notifications(&store);
    let source = ItemDragSource::new(id);
    let mut finished = StatusDropTarget::new(ItemStatus::Finished);

    let mut gesture = DragGesture::begin(&source);
    gesture.drag_over(&mut finished);
    let outcome = gesture.drop_on(&mut finished, &mut store).unwrap();

    assert_eq!(
        outcome,
        DropOutcome::Delivered {
            item_id: id,
            target_status: ItemStatus::Finished,
            change: StatusChange::Applied {
                previous: ItemStatus::Active
            },
        }
    );
    assert!(!finished.is_highlighted());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(store.get(id).unwrap().status, ItemStatus::Finished);
    assert_eq!(gesture.end(&source).name(), "dropped");
}

#[test]
fn drop_on_own_list_is_absorbed_by_store() {
    let mut store = BoardStore::new();
    let id = store.create("Stay", "Already active", 1);
    let calls = count_notifications(&store);
    let source = ItemDragSource::new(id);
    let mut active = StatusDropTarget::new(ItemStatus::Active);

    let mut gesture = DragGesture::begin(&source);
    gesture.drag_over(&mut active);
    let outcome = gesture.drop_on(&mut active, &mut store).unwrap();

    assert!(matches!(
        outcome,
        DropOutcome::Delivered {
            change: StatusChange::Unchanged,
            ..
        }
    ));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn drop_without_accepted_hover_cancels_gesture() {
    let mut store = BoardStore::new();
    let id = store.create("Skip", "Never hovered", 1);
    let calls = count_notifications(&store);
    let source = ItemDragSource::new(id);
    let mut active = StatusDropTarget::new(ItemStatus::Active);
    let mut finished = StatusDropTarget::new(ItemStatus::Finished);

    let mut gesture = DragGesture::begin(&source);
    gesture.drag_over(&mut active);
    assert!(gesture.drop_on(&mut finished, &mut store).is_none());

    assert_eq!(gesture.state(), &GestureState::Cancelled { source: Some(id) });
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(store.get(id).unwrap().status, ItemStatus::Active);
}

#[test]
fn drop_of_stale_id_is_delivered_but_noop() {
    let mut store = BoardStore::new();
    store.create("Real", "Existing item", 1);
    let calls = count_notifications(&store);
    let stale = Uuid::new_v4();
    let mut finished = StatusDropTarget::new(ItemStatus::Finished);

    let mut transfer = DataTransfer::new();
    DragPayload::work_item_move(stale).encode(&mut transfer);
    let outcome = finished.handle_drop(&mut store, &transfer);

    assert_eq!(
        outcome,
        DropOutcome::Delivered {
            item_id: stale,
            target_status: ItemStatus::Finished,
            change: StatusChange::UnknownItem,
        }
    );
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn drop_of_plain_text_that_is_not_an_id_is_ignored() {
    let mut store = BoardStore::new();
    store.create("Real", "Existing item", 1);
    let calls = count_notifications(&store);
    let mut finished = StatusDropTarget::new(ItemStatus::Finished);

    let mut transfer = DataTransfer::new();
    transfer.set_data(MIME_TEXT_PLAIN, "selected text from another page");
    assert!(finished.handle_drag_over(&transfer).is_accept());
    let outcome = finished.handle_drop(&mut store, &transfer);

    assert!(matches!(
        outcome,
        DropOutcome::Ignored(PayloadError::MalformedItemId(_))
    ));
    assert!(!finished.is_highlighted());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn overlapping_gestures_keep_their_own_payloads() {
    let mut store = BoardStore::new();
    let first = store.create("First", "First finger", 1);
    let second = store.create("Second", "Second finger", 2);
    let first_source = ItemDragSource::new(first);
    let second_source = ItemDragSource::new(second);
    let mut finished = StatusDropTarget::new(ItemStatus::Finished);
    let mut active = StatusDropTarget::new(ItemStatus::Active);

    let mut first_gesture = DragGesture::begin(&first_source);
    let mut second_gesture = DragGesture::begin(&second_source);
    first_gesture.drag_over(&mut finished);
    second_gesture.drag_over(&mut active);
    second_gesture.drag_leave(&mut active);
    first_gesture.drop_on(&mut finished, &mut store).unwrap();
    second_gesture.end(&second_source);

    assert_eq!(store.get(first).unwrap().status, ItemStatus::Finished);
    assert_eq!(store.get(second).unwrap().status, ItemStatus::Active);
    assert_eq!(
        second_gesture.state(),
        &GestureState::Cancelled {
            source: Some(second)
        }
    );
}

#[test]
fn round_trip_between_lists() {
    let mut store = BoardStore::new();
    let id = store.create("Bounce", "Moves twice", 2);
    let calls = count_notifications(&store);
    let source = ItemDragSource::new(id);

    for status in [ItemStatus::Finished, ItemStatus::Active] {
        let mut target = StatusDropTarget::new(status);
        let mut gesture = DragGesture::begin(&source);
        gesture.drag_over(&mut target);
        gesture.drop_on(&mut target, &mut store).unwrap();
        gesture.end(&source);
        assert_eq!(store.get(id).unwrap().status, status);
    }
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

use drawing_view::{DrawingError, HistoryStore, PaintStyle, PathCommand, Stroke};

fn dot(x: f32, y: f32) -> Stroke {
    Stroke::new(
        PaintStyle::new(0xFF00_0000, 8.0, false).unwrap(),
        vec![
            PathCommand::Reset,
            PathCommand::MoveTo { x, y },
            PathCommand::AddCircle { x, y, radius: 0.1 },
        ],
    )
}

fn store_with(count: usize) -> HistoryStore {
    let mut store = HistoryStore::new();
    for i in 0..count {
        store.commit(dot(i as f32, 0.0));
    }
    store
}

#[test]
fn test_new_store_is_empty() {
    let store = HistoryStore::new();
    assert!(store.is_history_empty());
    assert!(store.is_undone_empty());
    assert_eq!(store.count(), 0);
    assert_eq!(store.undone_count(), 0);
}

#[test]
fn test_commit_appends_in_order() {
    let store = store_with(3);
    assert_eq!(store.count(), 3);
    assert_eq!(store.stroke_at(0).unwrap(), &dot(0.0, 0.0));
    assert_eq!(store.stroke_at(2).unwrap(), &dot(2.0, 0.0));
}

#[test]
fn test_stroke_at_out_of_range() {
    let store = store_with(2);
    assert!(matches!(
        store.stroke_at(2),
        Err(DrawingError::IndexOutOfRange { index: 2, len: 2 })
    ));
}

#[test]
fn test_undo_moves_tail_to_undone() {
    let mut store = store_with(2);

    assert!(store.undo());
    assert_eq!(store.strokes(), &[dot(0.0, 0.0)]);
    assert_eq!(store.undone_strokes(), &[dot(1.0, 0.0)]);
}

#[test]
fn test_redo_moves_tail_back() {
    let mut store = store_with(3);
    store.undo();
    store.undo();

    assert!(store.redo());
    assert_eq!(store.strokes(), &[dot(0.0, 0.0), dot(1.0, 0.0)]);
    assert_eq!(store.undone_strokes(), &[dot(2.0, 0.0)]);
}

#[test]
fn test_undo_redo_on_empty_are_noops() {
    let mut store = HistoryStore::new();
    assert!(!store.undo());
    assert!(!store.redo());
    assert!(store.is_history_empty());
    assert!(store.is_undone_empty());
}

#[test]
fn test_undo_n_then_redo_n_restores_history() {
    for n in 1..=5 {
        let mut store = store_with(5);
        let original = store.strokes().to_vec();

        for _ in 0..n {
            assert!(store.undo());
        }
        for _ in 0..n {
            assert!(store.redo());
        }

        assert_eq!(store.strokes(), original.as_slice());
        assert!(store.is_undone_empty());
    }
}

#[test]
fn test_redo_all_then_undo_all_restores_undone() {
    let mut store = store_with(4);
    store.undo_all();
    let undone = store.undone_strokes().to_vec();
    assert_eq!(undone.len(), 4);
    assert!(store.is_history_empty());

    store.redo_all();
    assert!(store.is_undone_empty());
    assert_eq!(store.count(), 4);

    store.undo_all();
    assert_eq!(store.undone_strokes(), undone.as_slice());
}

#[test]
fn test_commit_after_undo_clears_undone() {
    let mut store = store_with(3);
    store.undo();
    store.undo();

    store.commit(dot(9.0, 9.0));

    assert!(store.is_undone_empty());
    assert!(!store.redo());
    assert_eq!(store.strokes(), &[dot(0.0, 0.0), dot(9.0, 9.0)]);
}

#[test]
fn test_stacks_stay_disjoint() {
    let mut store = store_with(3);
    store.undo();
    store.redo();
    store.undo();
    store.undo();

    assert_eq!(store.count() + store.undone_count(), 3);
    for stroke in store.strokes() {
        assert!(!store.undone_strokes().contains(stroke));
    }
}

#[test]
fn test_clear_redo() {
    let mut store = store_with(2);
    store.undo();
    store.clear_redo();

    assert!(store.is_undone_empty());
    assert_eq!(store.count(), 1);
}

#[test]
fn test_start_new_resets_both_stacks() {
    let mut store = store_with(3);
    store.undo();
    store.start_new();

    assert_eq!(store, HistoryStore::new());
}

#[test]
fn test_is_history_empty_matches_count() {
    let mut store = store_with(1);
    assert_eq!(store.is_history_empty(), store.count() == 0);
    store.undo();
    assert_eq!(store.is_history_empty(), store.count() == 0);
    assert!(store.is_history_empty());
}

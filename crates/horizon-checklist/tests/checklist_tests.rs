//! Integration tests for the checklist widget.
//!
//! Set `RUST_LOG=horizon_checklist=trace` to see the reconciliation log.

use std::sync::{Arc, Once};

use horizon_checklist::logging::TreeFormatOptions;
use horizon_checklist::prelude::*;
use parking_lot::Mutex;

fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

struct Host {
    available: Binding<ItemCatalog>,
    selected: Binding<SelectionSet>,
    container: Arc<Container>,
}

impl Host {
    fn new(items: &[&str], selected: &[&str]) -> Self {
        init_tracing();
        Self {
            available: Binding::new(ItemCatalog::new(items.iter().copied()).unwrap()),
            selected: Binding::new(SelectionSet::new(selected.iter().copied())),
            container: Container::new("host"),
        }
    }

    fn mount(&self) -> CheckList {
        CheckList::mount(
            self.container.clone(),
            &self.available,
            &self.selected,
            CheckListConfig::default(),
        )
        .unwrap()
    }

    fn click(&self, id: NodeId, checked: bool) {
        self.container.dispatch(InputEvent::checkbox(id, checked));
    }

    fn selection(&self) -> Vec<String> {
        self.selected.get().values()
    }
}

fn values(list: &CheckList) -> Vec<String> {
    list.rows().into_iter().map(|row| row.value).collect()
}

#[test]
fn test_worked_example() {
    let host = Host {
        available: Binding::new(
            ItemCatalog::from_json_str(
                r#"[{"value":"a","displayText":"A"},{"value":"b","displayText":"B"}]"#,
            )
            .unwrap(),
        ),
        selected: Binding::new(SelectionSet::from_json_str(r#"["b"]"#).unwrap()),
        container: Container::new("plugins"),
    };
    let list = host.mount();

    assert_eq!(
        list.debug_tree_with(TreeFormatOptions::minimal()),
        "plugins (2 rows)\n\u{251c}\u{2500}\u{2500} [ ] A\n\u{2514}\u{2500}\u{2500} [x] B\n"
    );

    let rows = list.rows();
    host.click(rows[0].id, true);
    assert_eq!(host.selection(), vec!["b", "a"]);

    host.click(rows[1].id, false);
    assert_eq!(host.selection(), vec!["a"]);
    assert_eq!(list.checked_values(), vec!["a"]);
}

#[test]
fn test_rebuild_on_length_change() {
    let host = Host::new(&["a", "b"], &[]);
    let list = host.mount();

    for catalog in [
        vec!["a"],
        vec!["q", "r", "s", "t"],
        vec!["z", "y", "x"],
        vec!["only"],
    ] {
        host.available.rebind(ItemCatalog::new(catalog.iter().copied()).unwrap());
        assert_eq!(values(&list), catalog);
    }
}

#[test]
fn test_no_rebuild_on_equal_length() {
    let host = Host::new(&["a", "b", "c"], &["b"]);
    let list = host.mount();
    let before = list.rows();
    let outcomes = Arc::new(Mutex::new(Vec::new()));
    let sink = outcomes.clone();
    list.reconciled().connect(move |outcome| sink.lock().push(*outcome));

    host.available.rebind(ItemCatalog::new(["x", "y", "z"]).unwrap());

    assert_eq!(list.rows(), before);
    assert_eq!(*outcomes.lock(), vec![Reconcile::CatalogSkipped]);
}

#[test]
fn test_check_state_mirrors_selection_after_length_change() {
    let host = Host::new(&["a", "b", "c", "d"], &["a"]);
    let list = host.mount();

    for selection in [vec!["b", "d"], vec![], vec!["d", "c", "a"], vec!["stale", "b"]] {
        let previous_len = host.selected.get().len();
        host.selected.rebind(SelectionSet::new(selection.iter().copied()));
        if previous_len == selection.len() {
            continue;
        }
        for row in list.rows() {
            assert_eq!(
                row.checked,
                selection.contains(&row.value.as_str()),
                "row {} after selecting {:?}",
                row.value,
                selection
            );
        }
    }
}

#[test]
fn test_append_on_check() {
    let host = Host::new(&["a", "b", "c"], &["c", "a"]);
    let list = host.mount();

    host.click(list.rows()[1].id, true);

    assert_eq!(host.selection(), vec!["c", "a", "b"]);
}

#[test]
fn test_remove_on_uncheck_removes_exactly_one() {
    let host = Host::new(&["a", "b", "c"], &["c", "a", "b"]);
    let list = host.mount();

    host.click(list.rows()[0].id, false);

    assert_eq!(host.selection(), vec!["c", "b"]);
}

#[test]
fn test_remove_on_uncheck_with_stale_entries() {
    let host = Host::new(&["a", "b"], &["gone", "b", "a"]);
    let list = host.mount();

    host.click(list.rows()[1].id, false);

    assert_eq!(host.selection(), vec!["gone", "a"]);
    assert_eq!(host.selected.get().stale_values(&host.available.get()), vec!["gone"]);
}

#[test]
fn test_clear_of_empty_surface() {
    let host = Host::new(&[], &[]);
    let list = host.mount();
    assert!(list.is_empty());

    host.available.rebind(ItemCatalog::empty());
    host.available.rebind(ItemCatalog::empty());

    assert!(list.is_empty());
}

#[test]
fn test_host_observes_edits() {
    let host = Host::new(&["a", "b"], &[]);
    let list = host.mount();
    let edits = Arc::new(Mutex::new(Vec::new()));
    let sink = edits.clone();
    host.selected
        .get()
        .edited()
        .connect(move |edit| sink.lock().push(edit.clone()));

    let rows = list.rows();
    host.click(rows[1].id, true);
    host.click(rows[1].id, false);

    assert_eq!(
        *edits.lock(),
        vec![
            SelectionEdit::Appended {
                value: "b".into(),
                index: 0
            },
            SelectionEdit::Removed {
                value: "b".into(),
                index: 0
            },
        ]
    );
}

#[test]
fn test_remount_after_drop() {
    let host = Host::new(&["a"], &["a"]);
    let first = host.mount();
    drop(first);

    let second = host.mount();
    assert_eq!(second.checked_values(), vec!["a"]);
    assert_eq!(host.container.listener_count(), 1);
}

#[test]
fn test_exact_change_detection_from_toml() {
    let config = CheckListConfig::from_toml_str(r#"change_detection = "exact""#).unwrap();
    let host = Host::new(&["a", "b"], &["a"]);
    let list = CheckList::mount(host.container.clone(), &host.available, &host.selected, config)
        .unwrap();

    host.selected.rebind(SelectionSet::new(["b"]));
    assert_eq!(list.checked_values(), vec!["b"]);

    host.available.rebind(ItemCatalog::new(["b", "c"]).unwrap());
    assert_eq!(values(&list), vec!["b", "c"]);
    assert_eq!(list.checked_values(), vec!["b"]);
}

#[test]
fn test_malformed_bindings_are_rejected() {
    let err = ItemCatalog::from_json_str(r#"{"a": 1}"#).unwrap_err();
    assert!(matches!(err, CheckListError::MalformedBinding { .. }));

    let err = SelectionSet::from_json_str("42").unwrap_err();
    assert!(matches!(err, CheckListError::MalformedBinding { .. }));

    let err = ItemCatalog::from_json_str(r#"["a", "a"]"#).unwrap_err();
    assert!(matches!(err, CheckListError::DuplicateValue { .. }));
}

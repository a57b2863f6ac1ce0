//! Admin console model: the active tab, the last fetched list per kind, the
//! error banner and the record dialog.
//!
//! Like the sign-in flow this model does no I/O. Operations that need the
//! backend return a [`LoadRequest`] or a [`Mutation`]; [`load`] and [`mutate`]
//! run them against an [`AdminService`] and the results go back through
//! [`AdminConsole::apply_load`] / [`AdminConsole::apply_mutation`]. Every list
//! is replaced wholesale by its latest fetch and never patched locally.

use crate::{
    app_lib::AppError,
    features::admin::types::{Record, RecordKind},
};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

pub const LOAD_FAILED: &str = "Failed to load data";
pub const SAVE_FAILED: &str = "Failed to save changes";
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this item?";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogMode {
    View,
    Edit,
}

/// A record opened in the key/value dialog. `record` stays exactly as the
/// server sent it; input is kept as raw text per field and only turned back
/// into JSON when the record is saved.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordDialog {
    pub kind: RecordKind,
    pub mode: DialogMode,
    pub record: Record,
    drafts: BTreeMap<String, String>,
}

impl RecordDialog {
    fn new(kind: RecordKind, mode: DialogMode, record: Record) -> Self {
        Self {
            kind,
            mode,
            record,
            drafts: BTreeMap::new(),
        }
    }

    /// Text the input for `key` shows: what was typed, or the server value.
    pub fn text(&self, key: &str) -> String {
        self.drafts
            .get(key)
            .cloned()
            .unwrap_or_else(|| self.record.display(key))
    }

    /// The server record with every typed field applied. Each field is coerced
    /// against the type the server sent, not against earlier keystrokes.
    pub fn edited(&self) -> Record {
        let mut record = self.record.clone();
        for (key, text) in &self.drafts {
            record.set_text(key, text);
        }
        record
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            DialogMode::View => "View Details",
            DialogMode::Edit => "Edit Item",
        }
    }

    pub fn dismiss_label(&self) -> &'static str {
        match self.mode {
            DialogMode::View => "Close",
            DialogMode::Edit => "Cancel",
        }
    }

    pub fn is_editable(&self, key: &str) -> bool {
        self.mode == DialogMode::Edit && key != "id"
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadRequest {
    pub kind: RecordKind,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Mutation {
    Update {
        kind: RecordKind,
        id: String,
        record: Record,
    },
    Delete {
        kind: RecordKind,
        id: String,
    },
}

impl Mutation {
    pub fn kind(&self) -> RecordKind {
        match self {
            Mutation::Update { kind, .. } | Mutation::Delete { kind, .. } => *kind,
        }
    }

    fn failure_message(&self) -> String {
        match self {
            Mutation::Update { .. } => SAVE_FAILED.to_string(),
            Mutation::Delete { kind, .. } => format!("Failed to delete {kind}"),
        }
    }
}

/// Interactive yes/no prompt shown before destructive actions.
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

/// The admin REST backend.
#[allow(async_fn_in_trait)]
pub trait AdminService {
    async fn list(&self, kind: RecordKind) -> Result<Vec<Record>, AppError>;

    async fn update(&self, kind: RecordKind, id: &str, record: &Record) -> Result<(), AppError>;

    async fn delete(&self, kind: RecordKind, id: &str) -> Result<(), AppError>;
}

#[derive(Clone, Debug)]
pub struct AdminConsole {
    active: RecordKind,
    rows: [Vec<Record>; 3],
    loading: bool,
    error: Option<String>,
    dialog: Option<RecordDialog>,
}

impl Default for AdminConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl AdminConsole {
    pub fn new() -> Self {
        Self {
            active: RecordKind::Users,
            rows: Default::default(),
            loading: false,
            error: None,
            dialog: None,
        }
    }

    pub fn active(&self) -> RecordKind {
        self.active
    }

    pub fn rows(&self, kind: RecordKind) -> &[Record] {
        &self.rows[kind.index()]
    }

    /// Tab caption with the row count, e.g. `Users (3)`.
    pub fn tab_label(&self, kind: RecordKind) -> String {
        format!("{} ({})", kind.title(), self.rows(kind).len())
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dialog(&self) -> Option<&RecordDialog> {
        self.dialog.as_ref()
    }

    /// Switches tabs and asks for a fetch of the new tab.
    pub fn select_tab(&mut self, kind: RecordKind) -> LoadRequest {
        self.active = kind;
        self.refresh()
    }

    /// Asks for a fetch of the active tab.
    pub fn refresh(&mut self) -> LoadRequest {
        self.loading = true;
        self.error = None;
        LoadRequest { kind: self.active }
    }

    /// Replaces the list for the fetched kind. Results for a tab that is no
    /// longer active still update that tab's list but leave the spinner alone.
    pub fn apply_load(&mut self, request: LoadRequest, result: Result<Vec<Record>, AppError>) {
        let is_active = request.kind == self.active;
        match result {
            Ok(rows) => {
                debug!(kind = %request.kind, rows = rows.len(), "admin list loaded");
                self.rows[request.kind.index()] = rows;
            }
            Err(err) => {
                warn!(kind = %request.kind, error = %err, "admin list failed to load");
                if is_active {
                    self.error = Some(LOAD_FAILED.to_string());
                }
            }
        }
        if is_active {
            self.loading = false;
        }
    }

    pub fn open_view(&mut self, kind: RecordKind, index: usize) -> bool {
        self.open(kind, index, DialogMode::View)
    }

    pub fn open_edit(&mut self, kind: RecordKind, index: usize) -> bool {
        kind.can_edit() && self.open(kind, index, DialogMode::Edit)
    }

    /// Records user input for a field as typed. Ignored in view mode, for `id`,
    /// and for keys the record does not have.
    pub fn edit_field(&mut self, key: &str, text: &str) -> bool {
        match self.dialog.as_mut() {
            Some(dialog) if dialog.is_editable(key) && dialog.record.get(key).is_some() => {
                dialog.drafts.insert(key.to_string(), text.to_string());
                true
            }
            _ => false,
        }
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    /// Produces the full edited record as an update. The dialog stays open until
    /// the update succeeds.
    pub fn save(&self) -> Option<Mutation> {
        let dialog = self.dialog.as_ref()?;
        if dialog.mode != DialogMode::Edit {
            return None;
        }
        let id = dialog.record.id()?;
        Some(Mutation::Update {
            kind: dialog.kind,
            id,
            record: dialog.edited(),
        })
    }

    /// Asks for confirmation and produces the delete. Declining, or a kind that
    /// cannot be deleted, produces nothing and leaves the list untouched.
    pub fn request_delete(
        &self,
        kind: RecordKind,
        id: &str,
        prompt: &impl Confirm,
    ) -> Option<Mutation> {
        if !kind.can_delete() || id.trim().is_empty() {
            return None;
        }
        if !prompt.confirm(DELETE_CONFIRMATION) {
            debug!(%kind, "delete declined");
            return None;
        }
        Some(Mutation::Delete {
            kind,
            id: id.trim().to_string(),
        })
    }

    /// Applies a mutation result. Success closes the dialog (for saves) and
    /// returns the refetch of the affected kind; failure raises the banner.
    pub fn apply_mutation(
        &mut self,
        mutation: &Mutation,
        result: Result<(), AppError>,
    ) -> Option<LoadRequest> {
        match result {
            Ok(()) => {
                info!(kind = %mutation.kind(), "admin change applied");
                if matches!(mutation, Mutation::Update { .. }) {
                    self.dialog = None;
                }
                self.active = mutation.kind();
                Some(self.refresh())
            }
            Err(err) => {
                warn!(kind = %mutation.kind(), error = %err, "admin change failed");
                self.error = Some(mutation.failure_message());
                None
            }
        }
    }

    fn open(&mut self, kind: RecordKind, index: usize, mode: DialogMode) -> bool {
        let Some(record) = self.rows(kind).get(index).cloned() else {
            return false;
        };
        self.dialog = Some(RecordDialog::new(kind, mode, record));
        true
    }
}

/// Fetches the list a [`LoadRequest`] asks for.
pub async fn load<S: AdminService>(
    service: &S,
    request: LoadRequest,
) -> Result<Vec<Record>, AppError> {
    service.list(request.kind).await
}

/// Sends a [`Mutation`] to the backend.
pub async fn mutate<S: AdminService>(service: &S, mutation: &Mutation) -> Result<(), AppError> {
    match mutation {
        Mutation::Update { kind, id, record } => service.update(*kind, id, record).await,
        Mutation::Delete { kind, id } => service.delete(*kind, id).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use std::cell::{Cell, RefCell};

    fn record(value: Value) -> Record {
        serde_json::from_value(value).expect("object")
    }

    /// In-memory backend. Updates are stored with an extra `updated_at` field the
    /// client never sends, so refetches can be told apart from local patches.
    #[derive(Default)]
    struct FakeBackend {
        tables: RefCell<[Vec<Record>; 3]>,
        calls: RefCell<Vec<String>>,
        sent: RefCell<Vec<Record>>,
        fail_updates: bool,
    }

    impl FakeBackend {
        fn with_users(users: Vec<Record>) -> Self {
            let backend = Self::default();
            backend.tables.borrow_mut()[RecordKind::Users.index()] = users;
            backend
        }
    }

    impl AdminService for FakeBackend {
        async fn list(&self, kind: RecordKind) -> Result<Vec<Record>, AppError> {
            self.calls.borrow_mut().push(format!("GET {}", kind.collection_path()));
            Ok(self.tables.borrow()[kind.index()].clone())
        }

        async fn update(
            &self,
            kind: RecordKind,
            id: &str,
            record: &Record,
        ) -> Result<(), AppError> {
            self.calls.borrow_mut().push(format!("PUT {}", kind.record_path(id)));
            self.sent.borrow_mut().push(record.clone());
            if self.fail_updates {
                return Err(AppError::Http {
                    status: 500,
                    body: String::new(),
                });
            }
            let mut stored = serde_json::to_value(record).expect("serialize");
            stored["updated_at"] = json!("2024-06-01T00:00:00Z");
            let mut tables = self.tables.borrow_mut();
            let rows = &mut tables[kind.index()];
            if let Some(row) = rows.iter_mut().find(|row| row.id().as_deref() == Some(id)) {
                *row = serde_json::from_value(stored).expect("object");
            }
            Ok(())
        }

        async fn delete(&self, kind: RecordKind, id: &str) -> Result<(), AppError> {
            self.calls.borrow_mut().push(format!("DELETE {}", kind.record_path(id)));
            self.tables.borrow_mut()[kind.index()].retain(|row| row.id().as_deref() != Some(id));
            Ok(())
        }
    }

    struct Prompt {
        answer: bool,
        asked: Cell<usize>,
    }

    impl Prompt {
        fn answering(answer: bool) -> Self {
            Self {
                answer,
                asked: Cell::new(0),
            }
        }
    }

    impl Confirm for Prompt {
        fn confirm(&self, message: &str) -> bool {
            assert_eq!(message, DELETE_CONFIRMATION);
            self.asked.set(self.asked.get() + 1);
            self.answer
        }
    }

    async fn refresh_tab(console: &mut AdminConsole, backend: &FakeBackend) {
        let request = console.refresh();
        let result = load(backend, request).await;
        console.apply_load(request, result);
    }

    async fn run(console: &mut AdminConsole, backend: &FakeBackend, mutation: Mutation) {
        let result = mutate(backend, &mutation).await;
        if let Some(request) = console.apply_mutation(&mutation, result) {
            let rows = load(backend, request).await;
            console.apply_load(request, rows);
        }
    }

    fn two_users() -> Vec<Record> {
        vec![
            record(json!({"id": 1, "email": "a@b.test", "name": "Ada", "is_active": true})),
            record(json!({"id": 2, "email": "c@d.test", "name": "Cy", "is_active": false})),
        ]
    }

    #[tokio::test]
    async fn refresh_replaces_list_and_counts_tab() {
        let backend = FakeBackend::with_users(two_users());
        let mut console = AdminConsole::new();

        let request = console.refresh();
        assert!(console.is_loading());
        let result = load(&backend, request).await;
        console.apply_load(request, result);

        assert!(!console.is_loading());
        assert_eq!(console.rows(RecordKind::Users).len(), 2);
        assert_eq!(console.tab_label(RecordKind::Users), "Users (2)");
        assert_eq!(console.tab_label(RecordKind::Payments), "Payments (0)");
    }

    #[tokio::test]
    async fn declined_delete_calls_nothing_and_keeps_list() {
        let backend = FakeBackend::with_users(two_users());
        let mut console = AdminConsole::new();
        refresh_tab(&mut console, &backend).await;
        backend.calls.borrow_mut().clear();

        let prompt = Prompt::answering(false);
        let mutation = console.request_delete(RecordKind::Users, "1", &prompt);

        assert_eq!(mutation, None);
        assert_eq!(prompt.asked.get(), 1);
        assert!(backend.calls.borrow().is_empty());
        assert_eq!(console.rows(RecordKind::Users), two_users().as_slice());
    }

    #[tokio::test]
    async fn confirmed_delete_refetches() {
        let backend = FakeBackend::with_users(two_users());
        let mut console = AdminConsole::new();
        refresh_tab(&mut console, &backend).await;
        backend.calls.borrow_mut().clear();

        let mutation = console
            .request_delete(RecordKind::Users, "1", &Prompt::answering(true))
            .expect("delete issued");
        run(&mut console, &backend, mutation).await;

        assert_eq!(
            backend.calls.borrow().as_slice(),
            &["DELETE /admin/users/1".to_string(), "GET /admin/users".to_string()]
        );
        assert_eq!(console.rows(RecordKind::Users).len(), 1);
        assert_eq!(console.rows(RecordKind::Users)[0].id().as_deref(), Some("2"));
    }

    #[test]
    fn only_users_can_be_deleted() {
        let console = AdminConsole::new();
        let prompt = Prompt::answering(true);
        assert_eq!(console.request_delete(RecordKind::Submissions, "1", &prompt), None);
        assert_eq!(console.request_delete(RecordKind::Payments, "1", &prompt), None);
        assert_eq!(prompt.asked.get(), 0);
    }

    #[tokio::test]
    async fn save_reflects_full_refetch() {
        let backend = FakeBackend::with_users(two_users());
        let mut console = AdminConsole::new();
        refresh_tab(&mut console, &backend).await;
        backend.calls.borrow_mut().clear();

        assert!(console.open_edit(RecordKind::Users, 0));
        assert!(console.edit_field("name", "Ada L."));
        assert!(!console.edit_field("id", "99"));
        let mutation = console.save().expect("update issued");
        run(&mut console, &backend, mutation).await;

        assert_eq!(
            backend.calls.borrow().as_slice(),
            &["PUT /admin/users/1".to_string(), "GET /admin/users".to_string()]
        );
        assert_eq!(console.dialog(), None);
        let saved = &console.rows(RecordKind::Users)[0];
        assert_eq!(saved.text("name").as_deref(), Some("Ada L."));
        assert_eq!(saved.id().as_deref(), Some("1"));
        assert_eq!(
            saved.text("updated_at").as_deref(),
            Some("2024-06-01T00:00:00Z")
        );
    }

    #[tokio::test]
    async fn failed_save_keeps_dialog_and_shows_banner() {
        let backend = FakeBackend {
            fail_updates: true,
            ..FakeBackend::with_users(two_users())
        };
        let mut console = AdminConsole::new();
        refresh_tab(&mut console, &backend).await;
        console.open_edit(RecordKind::Users, 1);
        console.edit_field("name", "Cyrus");

        let mutation = console.save().expect("update issued");
        run(&mut console, &backend, mutation).await;

        assert_eq!(console.error(), Some(SAVE_FAILED));
        let dialog = console.dialog().expect("dialog still open");
        assert_eq!(dialog.text("name"), "Cyrus");
        assert_eq!(
            console.rows(RecordKind::Users)[1].text("name").as_deref(),
            Some("Cy")
        );
    }

    #[tokio::test]
    async fn view_dialog_is_read_only() {
        let backend = FakeBackend::with_users(two_users());
        let mut console = AdminConsole::new();
        refresh_tab(&mut console, &backend).await;

        assert!(console.open_view(RecordKind::Users, 0));
        assert!(!console.edit_field("name", "Nope"));
        assert_eq!(console.save(), None);
        let dialog = console.dialog().expect("open");
        assert_eq!(dialog.title(), "View Details");
        assert_eq!(dialog.dismiss_label(), "Close");

        console.close_dialog();
        assert_eq!(console.dialog(), None);
        assert!(!console.open_view(RecordKind::Users, 5));
    }

    #[test]
    fn payments_cannot_be_edited() {
        let mut console = AdminConsole::new();
        console.apply_load(
            LoadRequest {
                kind: RecordKind::Payments,
            },
            Ok(vec![record(json!({"id": 1, "amount": 5}))]),
        );
        assert!(!console.open_edit(RecordKind::Payments, 0));
        assert!(console.open_view(RecordKind::Payments, 0));
    }

    #[test]
    fn load_failure_sets_banner_and_keeps_previous_rows() {
        let mut console = AdminConsole::new();
        let request = console.refresh();
        console.apply_load(request, Ok(two_users()));

        let request = console.refresh();
        console.apply_load(request, Err(AppError::Network("down".to_string())));

        assert_eq!(console.error(), Some(LOAD_FAILED));
        assert!(!console.is_loading());
        assert_eq!(console.rows(RecordKind::Users).len(), 2);
    }

    #[test]
    fn stale_tab_result_does_not_stop_active_spinner() {
        let mut console = AdminConsole::new();
        let users = console.refresh();
        let submissions = console.select_tab(RecordKind::Submissions);

        console.apply_load(users, Ok(two_users()));
        assert!(console.is_loading());
        assert_eq!(console.tab_label(RecordKind::Users), "Users (2)");

        console.apply_load(submissions, Ok(Vec::new()));
        assert!(!console.is_loading());
        assert_eq!(console.active(), RecordKind::Submissions);
    }

    #[test]
    fn delete_failure_names_the_kind() {
        let mut console = AdminConsole::new();
        let mutation = Mutation::Delete {
            kind: RecordKind::Users,
            id: "1".to_string(),
        };
        let next = console.apply_mutation(&mutation, Err(AppError::Timeout("slow".to_string())));
        assert_eq!(next, None);
        assert_eq!(console.error(), Some("Failed to delete users"));
    }

    #[tokio::test]
    async fn keystrokes_keep_the_server_type_on_save() {
        let submission = record(json!({"id": 1, "form_type": "1040", "tax_owed": 30}));
        let backend = FakeBackend::default();
        backend.tables.borrow_mut()[RecordKind::Submissions.index()] = vec![submission];
        let mut console = AdminConsole::new();
        let request = console.select_tab(RecordKind::Submissions);
        let rows = load(&backend, request).await;
        console.apply_load(request, rows);

        assert!(console.open_edit(RecordKind::Submissions, 0));
        for typed in ["3", "", "3", "31"] {
            assert!(console.edit_field("tax_owed", typed));
        }
        let mutation = console.save().expect("update issued");
        run(&mut console, &backend, mutation).await;

        let sent = backend.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].get("tax_owed"), Some(&json!(31)));
        assert_eq!(sent[0].get("form_type"), Some(&json!("1040")));
        assert_eq!(sent[0].get("id"), Some(&json!(1)));
    }

    #[test]
    fn typed_text_is_shown_as_entered() {
        let mut console = AdminConsole::new();
        let request = console.select_tab(RecordKind::Submissions);
        console.apply_load(request, Ok(vec![record(json!({"id": 4, "tax_owed": 12}))]));
        console.open_edit(RecordKind::Submissions, 0);

        console.edit_field("tax_owed", "12.");
        let dialog = console.dialog().expect("open");
        assert_eq!(dialog.text("tax_owed"), "12.");
        assert_eq!(dialog.record.get("tax_owed"), Some(&json!(12)));

        console.edit_field("tax_owed", "12.5");
        let Some(Mutation::Update { record, .. }) = console.save() else {
            panic!("expected an update");
        };
        assert_eq!(record.get("tax_owed"), Some(&json!(12.5)));
    }

    #[test]
    fn untouched_fields_are_sent_back_verbatim() {
        let original = record(json!({
            "id": 2,
            "email": "c@d.test",
            "name": null,
            "is_active": false,
            "created_at": "2024-01-01T00:00:00Z"
        }));
        let mut console = AdminConsole::new();
        let request = console.refresh();
        console.apply_load(request, Ok(vec![original.clone()]));
        console.open_edit(RecordKind::Users, 0);
        console.edit_field("is_active", "tru");
        console.edit_field("is_active", "true");
        assert!(!console.edit_field("nickname", "C"));

        let Some(Mutation::Update { id, record, .. }) = console.save() else {
            panic!("expected an update");
        };
        assert_eq!(id, "2");
        let mut expected = original;
        expected.set_text("is_active", "true");
        assert_eq!(record, expected);
        assert_eq!(record.get("is_active"), Some(&json!(true)));
        assert_eq!(record.get("name"), Some(&Value::Null));
    }
}

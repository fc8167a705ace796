//! View state machine for the item-catalog UI.
//!
//! # Overview
//! `CatalogView` owns everything a rendering host displays: the item list,
//! the create/edit dialog with its form, and the pending failure notice.
//! It performs no I/O and knows nothing about rendering. User actions are
//! methods, network work is requested through `Command` values, and the
//! host feeds outcomes back through the `on_*_result` methods.
//!
//! # Design
//! - State changes only inside controlled entry points; hosts read through
//!   accessors and re-render after each call.
//! - `submit` and `delete` cause no transition by themselves. The dialog
//!   closes and the list refreshes only once the host reports success;
//!   failure leaves every piece of state exactly as it was and sets the
//!   notice.
//! - The list is a cache of the backend. A successful mutation answers with
//!   `Command::Refresh`, and `on_refresh_result` replaces the list
//!   wholesale; nothing is merged, so overlapping refreshes resolve as
//!   last-one-wins.
//! - There is no in-flight bookkeeping: no loading flag, no duplicate-submit
//!   lock, no cancellation. Whatever outcome arrives is applied to whatever
//!   state the view is in by then.

use crate::error::ApiError;
use crate::types::{Item, ItemDraft};

/// Network work the view asks its host to perform.
///
/// The host maps each command onto the `CatalogClient` build/parse pair,
/// executes the round-trip, and reports back via the matching
/// `on_*_result` method.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Fetch the full item list (`on_refresh_result`).
    Refresh,
    /// Create an item from the submitted form (`on_submit_result`).
    Create(ItemDraft),
    /// Replace item `id` with the submitted form (`on_submit_result`).
    Update { id: i64, draft: ItemDraft },
    /// Delete item `id` (`on_delete_result`).
    Delete { id: i64 },
}

/// The editing dialog and its form.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Dialog {
    #[default]
    Closed,
    /// Composing a new item; the form started empty/zero.
    Creating { form: ItemDraft },
    /// Editing an existing item; the form started as a copy of the row's
    /// values at the moment the dialog opened.
    Editing { id: i64, form: ItemDraft },
}

/// Application view state: the item list, the dialog, and the pending
/// failure notice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogView {
    items: Vec<Item>,
    dialog: Dialog,
    notice: Option<String>,
}

impl CatalogView {
    pub fn new() -> Self {
        Self::default()
    }

    // --- accessors ---

    /// The displayed list, exactly what the last successful refresh
    /// returned.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn dialog(&self) -> &Dialog {
        &self.dialog
    }

    /// The open dialog's form, if any.
    pub fn form(&self) -> Option<&ItemDraft> {
        match &self.dialog {
            Dialog::Closed => None,
            Dialog::Creating { form } | Dialog::Editing { form, .. } => Some(form),
        }
    }

    /// The pending failure notice, left in place.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Consume the pending notice. Notices are transient: a host displays
    /// one once and it is gone.
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    // --- user actions ---

    /// "Add New Item": open the dialog with an empty/zero form.
    pub fn open_create(&mut self) {
        self.dialog = Dialog::Creating {
            form: ItemDraft::default(),
        };
    }

    /// "Edit" on a row: open the dialog pre-populated with the row's
    /// current values. The copy is taken now — later list refreshes never
    /// reach into an open form.
    pub fn open_edit(&mut self, item: &Item) {
        self.dialog = Dialog::Editing {
            id: item.id,
            form: ItemDraft::from_item(item),
        };
    }

    /// Cancel: close the dialog and discard the form.
    pub fn cancel(&mut self) {
        self.dialog = Dialog::Closed;
    }

    pub fn set_name(&mut self, name: &str) {
        if let Some(form) = self.form_mut() {
            form.name = name.to_string();
        }
    }

    pub fn set_description(&mut self, description: &str) {
        if let Some(form) = self.form_mut() {
            form.description = description.to_string();
        }
    }

    /// The price field is numeric; hosts pass whatever their input parsed
    /// to, including NaN for garbage text. NaN fails validation.
    pub fn set_price(&mut self, price: f64) {
        if let Some(form) = self.form_mut() {
            form.price = price;
        }
    }

    /// Whether submit is enabled: the dialog is open, name and description
    /// are non-empty after trimming, and price is strictly positive.
    pub fn can_submit(&self) -> bool {
        self.form().is_some_and(form_is_valid)
    }

    /// Submit the dialog's form. Returns the command to run, or `None`
    /// while submit is disabled; a disabled submit has no effect at all.
    ///
    /// The dialog stays open; it closes only when the host reports success
    /// through `on_submit_result`. The form's values are sent as typed,
    /// untrimmed.
    pub fn submit(&self) -> Option<Command> {
        match &self.dialog {
            Dialog::Creating { form } if form_is_valid(form) => {
                Some(Command::Create(form.clone()))
            }
            Dialog::Editing { id, form } if form_is_valid(form) => Some(Command::Update {
                id: *id,
                draft: form.clone(),
            }),
            _ => None,
        }
    }

    /// "Delete" on a row. The list keeps showing the row until the host
    /// reports success and the follow-up refresh lands.
    pub fn delete(&self, id: i64) -> Command {
        Command::Delete { id }
    }

    /// Fetch the full list; issued on mount and after every successful
    /// mutation.
    pub fn refresh(&self) -> Command {
        Command::Refresh
    }

    // --- completion events ---

    /// Outcome of `Command::Refresh`. Success replaces the list wholesale;
    /// failure leaves the stale list on display and sets the notice.
    pub fn on_refresh_result(&mut self, result: Result<Vec<Item>, ApiError>) -> Option<Command> {
        match result {
            Ok(items) => self.items = items,
            Err(error) => self.report("failed to load items", &error),
        }
        None
    }

    /// Outcome of `Command::Create` or `Command::Update`. Success closes
    /// the dialog and asks for a refresh; the returned entity is discarded
    /// because the refetch is the only synchronization mechanism. Failure
    /// leaves the dialog open with the form intact so the user can retry
    /// or correct input.
    pub fn on_submit_result(&mut self, result: Result<Item, ApiError>) -> Option<Command> {
        match result {
            Ok(_) => {
                self.dialog = Dialog::Closed;
                Some(Command::Refresh)
            }
            Err(error) => {
                self.report("failed to save item", &error);
                None
            }
        }
    }

    /// Outcome of `Command::Delete`. Success asks for a refresh; failure
    /// keeps the stale list, deleted row included, and sets the notice.
    pub fn on_delete_result(&mut self, result: Result<(), ApiError>) -> Option<Command> {
        match result {
            Ok(()) => Some(Command::Refresh),
            Err(error) => {
                self.report("failed to delete item", &error);
                None
            }
        }
    }

    // --- internals ---

    fn form_mut(&mut self) -> Option<&mut ItemDraft> {
        match &mut self.dialog {
            Dialog::Closed => None,
            Dialog::Creating { form } | Dialog::Editing { form, .. } => Some(form),
        }
    }

    /// One failure taxonomy: whatever went wrong, the user sees a single
    /// transient notice. The latest failure wins. The error's display form
    /// rides along for hosts that log diagnostics.
    fn report(&mut self, what: &str, error: &ApiError) {
        self.notice = Some(format!("{what}: {error}"));
    }
}

fn form_is_valid(form: &ItemDraft) -> bool {
    !form.name.trim().is_empty() && !form.description.trim().is_empty() && form.price > 0.0
}

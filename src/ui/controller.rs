use super::*;

use crate::domain::store::ContactStore;
use tracing::{debug, warn};

pub struct ContactUi<V: ContactView> {
    store: ContactStore,
    view: V,
    mode: EditMode,
}

impl<V: ContactView> ContactUi<V> {
    /// Wire `store` to `view` and draw the initial list.
    pub fn new(store: ContactStore, view: V) -> Result<Self, AppError> {
        let mut ui = Self {
            store,
            view,
            mode: EditMode::Idle,
        };
        ui.view.set_submit_label(ui.mode.submit_label())?;
        ui.display_contacts()?;
        Ok(ui)
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn into_parts(self) -> (ContactStore, V) {
        (self.store, self.view)
    }

    /// Pump events from the view until it runs dry or the user quits.
    pub fn run(&mut self) -> Result<(), AppError> {
        while let Some(event) = self.view.next_event()? {
            if !self.handle(event)? {
                break;
            }
        }
        Ok(())
    }

    /// Apply one gesture. Returns `false` once the session should end.
    pub fn handle(&mut self, event: UiEvent) -> Result<bool, AppError> {
        debug!(?event, mode = ?self.mode, "ui event");

        match event {
            UiEvent::Submit => self.submit()?,
            UiEvent::RowAction(RowAction::Edit(id)) => self.start_editing(id)?,
            UiEvent::RowAction(RowAction::Delete(id)) => self.delete_contact(id)?,
            UiEvent::SearchInput(term) => self.search(&term)?,
            UiEvent::ShowAll => self.display_contacts()?,
            UiEvent::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn submit(&mut self) -> Result<(), AppError> {
        let draft = self.view.read_form_values();

        match self.mode {
            EditMode::Editing(id) => {
                match self.store.update(&Contact::new(id, draft)) {
                    Ok(()) => {}
                    Err(err) if err.is_not_found() => {
                        warn!(id, "edited contact no longer exists");
                    }
                    Err(err) => return Err(err),
                }
                self.mode = EditMode::Idle;
                self.view.set_submit_label(self.mode.submit_label())?;
            }
            EditMode::Idle => {
                self.store.add(draft)?;
            }
        }

        self.display_contacts()?;
        self.view.clear_form()
    }

    fn start_editing(&mut self, id: ContactId) -> Result<(), AppError> {
        let Some(contact) = self.store.find(id) else {
            debug!(id, "edit requested for unknown contact");
            return Ok(());
        };

        self.view.fill_form(&contact.to_draft())?;
        self.mode = EditMode::Editing(id);
        self.view.set_submit_label(self.mode.submit_label())
    }

    fn delete_contact(&mut self, id: ContactId) -> Result<(), AppError> {
        if !self.view.confirm(DELETE_PROMPT)? {
            return Ok(());
        }

        self.store.delete(id)?;
        self.display_contacts()
    }

    /// Display-only filter; the store and the count are left alone.
    fn search(&mut self, term: &str) -> Result<(), AppError> {
        let matches = self.store.search(term);
        if matches.is_empty() {
            return self.view.render_no_matches();
        }
        self.view.render_list(&matches)
    }

    fn display_contacts(&mut self) -> Result<(), AppError> {
        let all: Vec<&Contact> = self.store.list().iter().collect();
        self.view.render_list(&all)?;
        self.view.render_count(self.store.len())
    }
}

// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use tracing::{debug, warn};

use crate::{AddItemForm, ItemId, PackingList, SortOrder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Nav,
    Form,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub mode: AppMode,
    pub list: PackingList,
    pub sort: SortOrder,
    pub selected: usize,
    pub status_line: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_list(PackingList::seeded())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    OpenAddForm,
    CloseForm,
    SubmitAdd(AddItemForm),
    Toggle(ItemId),
    Remove(ItemId),
    Clear,
    Reorder(SortOrder),
    SelectNext,
    SelectPrev,
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    ModeChanged(AppMode),
    ItemAdded(ItemId),
    ItemToggled { id: ItemId, packed: bool },
    ItemRemoved(ItemId),
    ListCleared,
    Reordered(SortOrder),
    AddRejected(String),
    SelectionChanged(usize),
    StatusUpdated(String),
    StatusCleared,
}

impl AppState {
    pub fn with_list(list: PackingList) -> Self {
        Self {
            mode: AppMode::Nav,
            list,
            sort: SortOrder::default(),
            selected: 0,
            status_line: None,
        }
    }

    pub fn selected_item_id(&self) -> Option<ItemId> {
        self.list.items().get(self.selected).map(|item| item.id)
    }

    pub fn dispatch(&mut self, command: AppCommand) -> Vec<AppEvent> {
        match command {
            AppCommand::OpenAddForm => {
                self.mode = AppMode::Form;
                vec![AppEvent::ModeChanged(self.mode)]
            }
            AppCommand::CloseForm => {
                self.mode = AppMode::Nav;
                vec![AppEvent::ModeChanged(self.mode)]
            }
            AppCommand::SubmitAdd(form) => self.submit_add(form),
            AppCommand::Toggle(id) => self.toggle(id),
            AppCommand::Remove(id) => self.remove(id),
            AppCommand::Clear => {
                let removed = self.list.len();
                self.list = self.list.clear();
                self.selected = 0;
                debug!(removed, "cleared packing list");
                vec![AppEvent::ListCleared, self.set_status("list cleared")]
            }
            AppCommand::Reorder(order) => {
                self.list = self.list.reorder(order);
                self.sort = order;
                debug!(order = order.as_str(), "reordered packing list");
                vec![
                    AppEvent::Reordered(order),
                    self.set_status(order.label().to_lowercase().as_str()),
                ]
            }
            AppCommand::SelectNext => self.move_selection(1),
            AppCommand::SelectPrev => self.move_selection(-1),
            AppCommand::SetStatus(message) => vec![self.set_status(&message)],
            AppCommand::ClearStatus => {
                self.status_line = None;
                vec![AppEvent::StatusCleared]
            }
        }
    }

    fn submit_add(&mut self, form: AddItemForm) -> Vec<AppEvent> {
        if let Err(error) = form.validate() {
            let message = error.to_string();
            warn!(%message, "rejected add request");
            return vec![
                AppEvent::AddRejected(message.clone()),
                self.set_status(&message),
            ];
        }

        let id = self.list.next_id();
        let description = form.description.as_str();
        self.list = self.list.add(description, form.quantity);
        self.selected = self.list.len().saturating_sub(1);
        self.mode = AppMode::Nav;
        debug!(id = id.get(), description, quantity = form.quantity, "added item");
        vec![
            AppEvent::ItemAdded(id),
            AppEvent::ModeChanged(self.mode),
            self.set_status(&format!("added {description}")),
        ]
    }

    fn toggle(&mut self, id: ItemId) -> Vec<AppEvent> {
        let toggled = self.list.toggle(id);
        let Some(item) = toggled.get(id) else {
            return Vec::new();
        };
        let packed = item.packed;
        self.list = toggled;
        debug!(id = id.get(), packed, "toggled item");
        vec![AppEvent::ItemToggled { id, packed }]
    }

    fn remove(&mut self, id: ItemId) -> Vec<AppEvent> {
        let Some(description) = self.list.get(id).map(|item| item.description.clone()) else {
            return Vec::new();
        };
        self.list = self.list.remove(id);
        self.selected = self.selected.min(self.list.len().saturating_sub(1));
        debug!(id = id.get(), "removed item");
        vec![
            AppEvent::ItemRemoved(id),
            self.set_status(&format!("removed {description}")),
        ]
    }

    fn move_selection(&mut self, delta: isize) -> Vec<AppEvent> {
        if self.list.is_empty() {
            return Vec::new();
        }
        let last = self.list.len() - 1;
        let next = self.selected.saturating_add_signed(delta).min(last);
        if next == self.selected {
            return Vec::new();
        }
        self.selected = next;
        vec![AppEvent::SelectionChanged(next)]
    }

    fn set_status(&mut self, message: &str) -> AppEvent {
        self.status_line = Some(message.to_owned());
        AppEvent::StatusUpdated(message.to_owned())
    }
}

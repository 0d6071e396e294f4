//! Application Context
//!
//! Board state lives in a `reactive_stores` store; the live `ActivityBoard`
//! is kept in local storage and reached through `AppContext`.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::board::{ActivityBoard, BoardView};
use crate::commands::FetchClient;
use crate::models::{Activities, MessageState, UiMessage};
use crate::notifier::{GlooTimers, MessageSink};
use crate::render::{render_html, render_notice_html, LOADING};

/// What the list container currently shows
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ListState {
    #[default]
    Loading,
    Loaded(Activities),
    Failed(String),
}

impl ListState {
    /// Selection to keep after the list changes: cleared unless the activity
    /// is still offered
    pub fn retain_selection(&self, selected: String) -> String {
        match self {
            ListState::Loaded(activities) if activities.get(&selected).is_some() => selected,
            _ => String::new(),
        }
    }

    /// Fragment mounted into the list container
    pub fn to_html(&self) -> String {
        match self {
            ListState::Loading => render_notice_html(LOADING),
            ListState::Loaded(activities) => render_html(activities),
            ListState::Failed(message) => render_notice_html(message),
        }
    }
}

/// Global board state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    pub list: ListState,
    pub message: MessageState,
    /// Signup form: email input
    pub email: String,
    /// Signup form: selected activity ("" = placeholder)
    pub selected_activity: String,
}

pub type BoardStore = Store<BoardState>;

/// Store-backed mount points for the board and the notifier
#[derive(Clone, Copy)]
pub struct StoreView(pub BoardStore);

impl StoreView {
    fn replace_list(&self, list: ListState) {
        let selected = list.retain_selection(self.0.selected_activity().get_untracked());
        *self.0.selected_activity().write() = selected;
        *self.0.list().write() = list;
    }
}

impl BoardView for StoreView {
    fn render_activities(&self, activities: &Activities) {
        self.replace_list(ListState::Loaded(activities.clone()));
    }

    fn render_load_failure(&self, message: &str) {
        self.replace_list(ListState::Failed(message.to_string()));
    }

    fn reset_signup_form(&self) {
        self.0.email().write().clear();
        self.0.selected_activity().write().clear();
    }
}

impl MessageSink for StoreView {
    fn display(&self, message: &UiMessage) {
        *self.0.message().write() = MessageState::shown(message.clone());
    }

    fn hide(&self) {
        self.0.message().write().visible = false;
    }
}

pub type LiveBoard = ActivityBoard<FetchClient, StoreView, StoreView, GlooTimers>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: BoardStore,
    board: StoredValue<Rc<LiveBoard>, LocalStorage>,
}

impl AppContext {
    pub fn new(store: BoardStore, board: LiveBoard) -> Self {
        Self {
            store,
            board: StoredValue::new_local(Rc::new(board)),
        }
    }

    /// Refetch the whole list
    pub fn reload(&self) {
        let board = self.board.get_value();
        spawn_local(async move {
            board.load_activities().await;
        });
    }

    pub fn signup(&self, activity: String, email: String) {
        let board = self.board.get_value();
        spawn_local(async move {
            board.signup(&activity, &email).await;
        });
    }

    pub fn unregister(&self, activity: String, email: String) {
        let board = self.board.get_value();
        spawn_local(async move {
            board.unregister(&activity, &email).await;
        });
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

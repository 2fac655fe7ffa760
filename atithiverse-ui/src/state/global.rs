//! Global Application State
//!
//! One [`PageController`] per page plus the reactive signals its surfaces
//! write into.

use leptos::*;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use atithiverse::chat::{ChatSurface, Speaker};
use atithiverse::config::Config;
use atithiverse::destinations::{GridState, GridSurface};
use atithiverse::notify::{Notification, NotificationCenter};
use atithiverse::page::PageController;
use atithiverse::weather::WeatherState;
use atithiverse::wishlist::WishlistButton;

use crate::api::{self, BrowserBackend, GlooSleeper};

/// One line in the chat transcript
#[derive(Clone, Debug, PartialEq)]
pub struct ChatLine {
    pub speaker: Speaker,
    pub text: String,
    pub at: chrono::DateTime<chrono::Local>,
}

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    pub page: Rc<PageController>,
    /// Destination grid contents
    pub grid: RwSignal<GridState>,
    /// Visible toast
    pub toast: RwSignal<Option<Notification>>,
    /// Chat transcript
    pub chat_log: RwSignal<Vec<ChatLine>>,
    /// Typing indicator label while a reply is pending
    pub typing: RwSignal<Option<String>>,
    pub chat_connected: RwSignal<bool>,
    pub quick_actions: RwSignal<Vec<String>>,
    pub chat_input_enabled: RwSignal<bool>,
    pub weather: RwSignal<WeatherState>,
    /// Signed-in visitor's display name
    pub user_name: RwSignal<Option<String>>,
    wishlist_buttons: Rc<RefCell<HashMap<u64, Rc<RefCell<WishlistButton>>>>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let mut config = Config::default();
    config.api.base_url = api::get_api_base();

    let backend = Rc::new(BrowserBackend::new(&config.api.base_url, config.chat.timeout()));
    let page = Rc::new(PageController::new(backend, Rc::new(GlooSleeper), &config));

    let state = GlobalState {
        page,
        grid: create_rw_signal(GridState::Loading),
        toast: create_rw_signal(None),
        chat_log: create_rw_signal(Vec::new()),
        typing: create_rw_signal(None),
        chat_connected: create_rw_signal(false),
        quick_actions: create_rw_signal(Vec::new()),
        chat_input_enabled: create_rw_signal(true),
        weather: create_rw_signal(WeatherState::Idle),
        user_name: create_rw_signal(None),
        wishlist_buttons: Rc::new(RefCell::new(HashMap::new())),
    };
    state.mirror_toasts();

    provide_context(state);
}

/// Fetch the global state from context
pub fn use_global_state() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not found")
}

impl GlobalState {
    /// Copy the toast center into the `toast` signal and schedule expiry
    fn mirror_toasts(&self) {
        let toast = self.toast;
        let center: Weak<NotificationCenter> = Rc::downgrade(self.page.notifications());
        let duration_ms = self.page.notifications().duration().as_millis() as u32;

        self.page.notifications().set_listener(move |shown, id| {
            toast.set(shown.cloned());
            if shown.is_some() {
                let center = center.clone();
                gloo_timers::callback::Timeout::new(duration_ms, move || {
                    if let Some(center) = center.upgrade() {
                        center.expire(id);
                    }
                })
                .forget();
            }
        });
    }

    pub fn grid_surface(&self) -> SignalGrid {
        SignalGrid { grid: self.grid }
    }

    pub fn chat_surface(&self) -> SignalChat {
        SignalChat {
            log: self.chat_log,
            typing: self.typing,
            connected: self.chat_connected,
            quick_actions: self.quick_actions,
            input_enabled: self.chat_input_enabled,
        }
    }

    /// Refresh the signed-in name from the session
    pub fn sync_user(&self) {
        self.user_name.set(self.page.session().display_name());
    }

    /// The button state for one destination, shared by every place it shows.
    ///
    /// An idle button takes `saved` from the latest rendering.
    pub fn wishlist_button(&self, destination_id: u64, saved: bool) -> Rc<RefCell<WishlistButton>> {
        let button = self
            .wishlist_buttons
            .borrow_mut()
            .entry(destination_id)
            .or_insert_with(|| Rc::new(RefCell::new(WishlistButton::new(destination_id, saved))))
            .clone();
        {
            let mut state = button.borrow_mut();
            if !state.busy {
                state.saved = saved;
            }
        }
        button
    }
}

/// [`GridSurface`] writing into a signal
#[derive(Clone, Copy)]
pub struct SignalGrid {
    grid: RwSignal<GridState>,
}

impl GridSurface for SignalGrid {
    fn show(&self, state: &GridState) {
        self.grid.set(state.clone());
    }
}

/// [`ChatSurface`] writing into signals
#[derive(Clone, Copy)]
pub struct SignalChat {
    log: RwSignal<Vec<ChatLine>>,
    typing: RwSignal<Option<String>>,
    connected: RwSignal<bool>,
    quick_actions: RwSignal<Vec<String>>,
    input_enabled: RwSignal<bool>,
}

impl ChatSurface for SignalChat {
    fn append_message(&self, speaker: Speaker, text: &str) {
        self.log.update(|log| {
            log.push(ChatLine {
                speaker,
                text: text.to_string(),
                at: chrono::Local::now(),
            })
        });
    }

    fn show_typing(&self, label: &str) {
        self.typing.set(Some(label.to_string()));
    }

    fn hide_typing(&self) {
        self.typing.set(None);
    }

    fn set_connection(&self, connected: bool) {
        self.connected.set(connected);
    }

    fn set_quick_actions(&self, actions: &[String]) {
        self.quick_actions.set(actions.to_vec());
    }

    fn set_input_enabled(&self, enabled: bool) {
        self.input_enabled.set(enabled);
    }
}

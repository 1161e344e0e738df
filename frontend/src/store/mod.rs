//! One-directional store handle for the host font collection.
//!
//! Components hold a read-only view delivered through [`FontStore::subscribe`]
//! and mutate only by dispatching a [`FontAction`]. Every successful mutation
//! re-fetches the list before notifying subscribers, so the collection they
//! observe is always server state, never a local guess.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_console::error;
use wasm_bindgen_futures::spawn_local;
use yew::Callback;

use common::model::font::{Font, NewFont, Provider};

use crate::api::fonts;

/// Actions accepted by [`FontStore::dispatch`].
#[derive(Debug, Clone, PartialEq)]
pub enum FontAction {
    FetchFontList { filter: Option<Provider> },
    CreateFont(NewFont),
    UpdateFont { id: String, active: bool },
    DeleteFont(Font),
}

/// Update action flipping a font's active flag. Carries the id and the
/// negated flag only; no other field of the record travels with it.
pub fn toggle_action(font: &Font) -> FontAction {
    FontAction::UpdateFont {
        id: font.id.clone(),
        active: !font.active,
    }
}

#[derive(Default)]
struct StoreState {
    fonts: Vec<Font>,
    subscribers: HashMap<usize, Callback<Vec<Font>>>,
    next_subscriber: usize,
}

#[derive(Clone, Default)]
pub struct FontStore {
    state: Rc<RefCell<StoreState>>,
}

impl PartialEq for FontStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl FontStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a subscriber and returns its id for [`Self::unsubscribe`].
    /// The callback immediately receives the current collection and then
    /// every refresh that follows a dispatched action.
    pub fn subscribe(&self, callback: Callback<Vec<Font>>) -> usize {
        let (id, fonts) = {
            let mut state = self.state.borrow_mut();
            let id = state.next_subscriber;
            state.next_subscriber += 1;
            state.subscribers.insert(id, callback.clone());
            (id, state.fonts.clone())
        };
        callback.emit(fonts);
        id
    }

    pub fn unsubscribe(&self, id: usize) {
        self.state.borrow_mut().subscribers.remove(&id);
    }

    /// Runs `action` against the host API. Transport failures are logged
    /// and the previously delivered collection stays in place.
    pub fn dispatch(&self, action: FontAction) {
        let state = self.state.clone();
        spawn_local(async move {
            let refreshed = match action {
                FontAction::FetchFontList { filter } => fonts::list(filter).await,
                FontAction::CreateFont(font) => match fonts::create(&font).await {
                    Ok(()) => fonts::list(None).await,
                    Err(e) => Err(e),
                },
                FontAction::UpdateFont { id, active } => {
                    match fonts::update_active(&id, active).await {
                        Ok(()) => fonts::list(None).await,
                        Err(e) => Err(e),
                    }
                }
                FontAction::DeleteFont(font) => match fonts::delete(&font.id).await {
                    Ok(()) => fonts::list(None).await,
                    Err(e) => Err(e),
                },
            };
            match refreshed {
                Ok(fonts) => notify(&state, fonts),
                Err(e) => error!(format!("font store action failed: {e}")),
            }
        });
    }
}

fn notify(state: &Rc<RefCell<StoreState>>, fonts: Vec<Font>) {
    // Subscribers are collected before emitting: a callback may re-enter
    // the store (subscribe, dispatch) and must not hit a held borrow.
    let subscribers: Vec<Callback<Vec<Font>>> = {
        let mut state = state.borrow_mut();
        state.fonts = fonts.clone();
        state.subscribers.values().cloned().collect()
    };
    for subscriber in subscribers {
        subscriber.emit(fonts.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn font(id: &str, active: bool) -> Font {
        Font {
            id: id.to_string(),
            name: "Arial".to_string(),
            provider: Provider::Custom,
            uri: "http://x/arial.ttf".to_string(),
            active,
        }
    }

    #[test]
    fn toggle_action_negates_active_and_carries_only_the_id() {
        assert_eq!(
            toggle_action(&font("f-1", true)),
            FontAction::UpdateFont {
                id: "f-1".to_string(),
                active: false,
            }
        );
        assert_eq!(
            toggle_action(&font("f-1", false)),
            FontAction::UpdateFont {
                id: "f-1".to_string(),
                active: true,
            }
        );
    }
}

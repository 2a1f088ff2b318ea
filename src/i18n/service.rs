//! Language state service: the single source of truth for the active
//! display language.
//!
//! Exactly one implementation of this service exists in the codebase; every
//! view reads the current language from it and re-renders through its
//! subscription mechanism. Correctness comes from the notification contract,
//! not from remounting or refresh counters: once `set_language` returns,
//! every subscriber has already observed the new value and any later read
//! sees it.

use crate::i18n::Language;
use crate::storage::SettingsStore;
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

/// Storage key under which the language preference persists across sessions.
pub const LANGUAGE_KEY: &str = "language";

/// Host document attributes updated as a side effect of a language change,
/// for the benefit of layout and accessibility.
pub trait DocumentHost: Send + Sync {
    /// Set the document text-direction attribute ("ltr" or "rtl").
    fn set_direction(&self, direction: &str);

    /// Set the document language tag ("en" or "ar").
    fn set_language_tag(&self, code: &str);
}

type Listener = Box<dyn Fn(Language) + Send + Sync>;

/// Observable, persisted language state.
///
/// Mutation happens only through [`set_language`](Self::set_language) and
/// [`toggle_language`](Self::toggle_language). Both persist the new value,
/// update the host document, and notify every subscriber synchronously
/// before returning. A call that sets the already-active language still
/// notifies, so views that cache resolved content by identity re-resolve.
pub struct LanguageService {
    current: Mutex<Language>,
    store: Arc<dyn SettingsStore>,
    host: Option<Arc<dyn DocumentHost>>,
    listeners: Mutex<Vec<Listener>>,
}

impl LanguageService {
    /// Create a service backed by the given store, without a host document.
    ///
    /// The initial language comes from the store; an absent or invalid
    /// persisted value falls back to the default (English) and is never an
    /// error.
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self::with_host_option(store, None)
    }

    /// Create a service that also updates a host document on every change.
    pub fn with_host(store: Arc<dyn SettingsStore>, host: Arc<dyn DocumentHost>) -> Self {
        Self::with_host_option(store, Some(host))
    }

    fn with_host_option(store: Arc<dyn SettingsStore>, host: Option<Arc<dyn DocumentHost>>) -> Self {
        let initial = match store.load(LANGUAGE_KEY) {
            Some(code) => match Language::from_code(&code) {
                Ok(language) => language,
                Err(_) => {
                    warn!("Ignoring invalid persisted language {:?}", code);
                    Language::default()
                }
            },
            None => Language::default(),
        };

        Self {
            current: Mutex::new(initial),
            store,
            host,
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// The active display language. No side effects.
    pub fn language(&self) -> Language {
        *self.current.lock().unwrap()
    }

    /// Whether the active language lays text out right-to-left.
    pub fn is_rtl(&self) -> bool {
        self.language().is_rtl()
    }

    /// Set the active language.
    ///
    /// Persists the value, updates the host document, then invokes every
    /// subscriber with the new language. All of that completes before this
    /// method returns. Idempotent on the stored value; subscribers are
    /// notified even when `language` is already active.
    pub fn set_language(&self, language: Language) {
        {
            let mut current = self.current.lock().unwrap();
            if *current != language {
                info!("Switching language from {} to {}", current, language);
            }
            *current = language;
        }

        // A failed save loses persistence across restarts, nothing else.
        if let Err(e) = self.store.save(LANGUAGE_KEY, language.code()) {
            warn!("Failed to persist language preference: {:#}", e);
        }

        if let Some(host) = &self.host {
            host.set_direction(language.direction());
            host.set_language_tag(language.code());
        }

        self.notify(language);
    }

    /// Switch to the other supported language and return it.
    pub fn toggle_language(&self) -> Language {
        let next = self.language().other();
        self.set_language(next);
        next
    }

    /// Register a callback invoked with the new language on every change
    /// attempt.
    ///
    /// Callbacks run synchronously inside `set_language`; they must not call
    /// `subscribe` themselves.
    pub fn subscribe(&self, listener: impl Fn(Language) + Send + Sync + 'static) {
        self.listeners.lock().unwrap().push(Box::new(listener));
    }

    fn notify(&self, language: Language) {
        let listeners = self.listeners.lock().unwrap();
        for listener in listeners.iter() {
            listener(language);
        }
    }
}

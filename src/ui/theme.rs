//! Theme context for the dark/light display mode
//!
//! Provides:
//! - ThemeContext for reactive theme state
//! - LocalStorage persistence through the core ThemeStore
//! - System theme detection via prefers-color-scheme
//!
//! Nothing is read from the browser until after hydration, so the server
//! render and the first client render agree (both start light).

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

use crate::core::preferences::{KeyValueStore, StorageError, ThemeStore};

/// `window.localStorage`, looked up on every access
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(not(feature = "ssr"))]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(not(feature = "ssr"))]
        {
            local_storage()?.get_item(key).ok()?
        }
        #[cfg(feature = "ssr")]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(not(feature = "ssr"))]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|e| StorageError::WriteFailed(format!("{:?}", e)))
        }
        #[cfg(feature = "ssr")]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}

/// Theme context for managing theme state
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Whether the dark theme is active
    pub is_dark: RwSignal<bool>,
    store: StoredValue<Option<ThemeStore<BrowserStorage>>>,
}

impl ThemeContext {
    pub fn toggle(&self) {
        self.with_store(|store| store.toggle());
    }

    pub fn set_dark(&self, dark: bool) {
        self.with_store(|store| store.set(dark));
    }

    fn with_store(&self, f: impl FnOnce(&mut ThemeStore<BrowserStorage>)) {
        self.store.update_value(|slot| {
            let store =
                slot.get_or_insert_with(|| ThemeStore::init(BrowserStorage, detect_system_prefers_dark()));
            f(store);
        });
        self.sync();
    }

    /// Copy the store's value into the signal and onto `<html>`
    fn sync(&self) {
        let dark = self
            .store
            .with_value(|slot| slot.as_ref().map(|s| s.is_dark()))
            .unwrap_or(false);
        self.is_dark.set(dark);
        self.apply_theme_class(dark);
    }

    /// Apply the dark class to the document element
    fn apply_theme_class(&self, dark: bool) {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(html) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            {
                let class_list = html.class_list();
                let _ = if dark {
                    class_list.add_1("dark")
                } else {
                    class_list.remove_1("dark")
                };
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = dark;
        }
    }
}

/// Detect system color scheme preference
fn detect_system_prefers_dark() -> bool {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(media_query)) = window.match_media("(prefers-color-scheme: dark)") {
                return media_query.matches();
            }
        }
    }
    false
}

/// Provide theme context to the application
pub fn provide_theme_context() -> ThemeContext {
    let ctx = ThemeContext {
        is_dark: RwSignal::new(false),
        store: StoredValue::new(None),
    };

    // Load the persisted/OS preference once hydrated
    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            ctx.store.set_value(Some(ThemeStore::init(
                BrowserStorage,
                detect_system_prefers_dark(),
            )));
            ctx.sync();
        });
    }

    // Follow OS changes until the user picks a theme
    #[cfg(not(feature = "ssr"))]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        Effect::new(move |_| {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(media_query)) = window.match_media("(prefers-color-scheme: dark)") {
                    let handler = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(
                        move |e: web_sys::MediaQueryListEvent| {
                            ctx.store.update_value(|slot| {
                                if let Some(store) = slot.as_mut() {
                                    store.system_changed(e.matches());
                                }
                            });
                            ctx.sync();
                        },
                    );

                    let _ = media_query
                        .add_event_listener_with_callback("change", handler.as_ref().unchecked_ref());

                    // Lives as long as the page
                    handler.forget();
                }
            }
        });
    }

    provide_context(ctx);

    ctx
}

/// Use theme context from anywhere in the component tree
pub fn use_theme_context() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext should be provided")
}

/// Sun/moon button flipping the theme
#[component]
pub fn ThemeToggle(theme: ThemeContext) -> impl IntoView {
    view! {
        <button
            class="p-2 rounded-lg hover:bg-theme-secondary transition-colors text-theme-secondary"
            on:click=move |_| theme.toggle()
            title="Toggle theme"
            aria-label="Toggle dark mode"
        >
            {move || {
                if theme.is_dark.get() {
                    view! {
                        <svg class="w-5 h-5" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                                  d="M12 3v1m0 16v1m9-9h-1M4 12H3m15.364 6.364l-.707-.707M6.343 6.343l-.707-.707m12.728 0l-.707.707M6.343 17.657l-.707.707M16 12a4 4 0 11-8 0 4 4 0 018 0z" />
                        </svg>
                    }
                } else {
                    view! {
                        <svg class="w-5 h-5" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                                  d="M20.354 15.354A9 9 0 018.646 3.646 9.003 9.003 0 0012 21a9.003 9.003 0 008.354-5.646z" />
                        </svg>
                    }
                }
            }}
        </button>
    }
}

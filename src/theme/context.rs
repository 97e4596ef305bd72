use yew::prelude::*;

use super::browser::{DocumentRoot, LocalStorage, MediaQuerySignal};
use super::preference::{DisplayMode, PreferenceStore};

type BrowserPreferenceStore = PreferenceStore<LocalStorage, MediaQuerySignal, DocumentRoot>;

/// What the page tree sees of the preference store.
#[derive(Clone, PartialEq)]
pub struct ThemeHandle {
    pub mode: DisplayMode,
    pub toggle: Callback<()>,
    pub set: Callback<DisplayMode>,
}

impl ThemeHandle {
    pub fn is_light(&self) -> bool {
        self.mode == DisplayMode::Light
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Owns the one `PreferenceStore` of the session and publishes it as context.
#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let store = use_mut_ref(|| {
        BrowserPreferenceStore::new(LocalStorage, MediaQuerySignal, DocumentRoot)
    });
    let mode = {
        let store = store.clone();
        use_state(move || store.borrow_mut().initialize())
    };

    let toggle = {
        let store = store.clone();
        let mode = mode.clone();
        Callback::from(move |_: ()| {
            let next = store.borrow_mut().toggle_mode();
            mode.set(next);
        })
    };

    let set = {
        let store = store.clone();
        let mode = mode.clone();
        Callback::from(move |requested: DisplayMode| {
            let next = store.borrow_mut().set_mode(requested);
            mode.set(next);
        })
    };

    let handle = ThemeHandle {
        mode: *mode,
        toggle,
        set,
    };

    html! {
        <ContextProvider<ThemeHandle> context={handle}>
            { for props.children.iter() }
        </ContextProvider<ThemeHandle>>
    }
}

/// Panics outside a `ThemeProvider`.
#[hook]
pub fn use_theme() -> ThemeHandle {
    use_context::<ThemeHandle>().expect("use_theme must be used inside a ThemeProvider")
}

/// Sun/moon button that flips the display mode.
#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_theme();
    let onclick = {
        let toggle = theme.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };
    let (icon, label) = if theme.is_light() {
        ("fas fa-moon", "Switch to dark mode")
    } else {
        ("fas fa-sun", "Switch to light mode")
    };

    html! {
        <button class="theme-toggle" onclick={onclick} aria-label={label} title={label}>
            <i class={icon}></i>
        </button>
    }
}

fn choice(mode: DisplayMode) -> (&'static str, &'static str) {
    match mode {
        DisplayMode::Dark => ("fas fa-moon", "Dark"),
        DisplayMode::Light => ("fas fa-sun", "Light"),
    }
}

/// Explicit dark/light choice for the footer.
#[function_component(ThemePicker)]
pub fn theme_picker() -> Html {
    let theme = use_theme();

    html! {
        <div class="theme-picker" role="group" aria-label="Display mode">
            { for DisplayMode::ALL.iter().map(|&mode| {
                let (icon, label) = choice(mode);
                let selected = theme.mode == mode;
                let onclick = {
                    let set = theme.set.clone();
                    Callback::from(move |_: MouseEvent| set.emit(mode))
                };
                html! {
                    <button
                        type="button"
                        class={classes!("theme-choice", selected.then_some("active"))}
                        aria-pressed={selected.to_string()}
                        {onclick}
                    >
                        <i class={icon}></i>{" "}{ label }
                    </button>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_mode_has_a_distinct_choice() {
        let dark = choice(DisplayMode::Dark);
        let light = choice(DisplayMode::Light);
        assert_ne!(dark, light);
        assert_eq!(light.1, "Light");
    }
}

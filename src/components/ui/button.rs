use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
}

impl ButtonVariant {
    fn get_classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-teal-600 dark:bg-teal-500 text-white \
                 hover:bg-teal-700 dark:hover:bg-teal-600 \
                 active:bg-teal-800 dark:active:bg-teal-700 \
                 border border-teal-600 dark:border-teal-500"
            }
            ButtonVariant::Ghost => {
                "bg-transparent text-gray-600 dark:text-gray-400 \
                 hover:bg-gray-100 dark:hover:bg-gray-800 \
                 hover:text-gray-800 dark:hover:text-gray-200 \
                 focus:ring-2 focus:ring-gray-400 dark:focus:ring-gray-500"
            }
        }
    }
}

impl ButtonSize {
    fn get_classes(&self) -> &'static str {
        match self {
            ButtonSize::Small => "px-2 py-1 text-xs",
            ButtonSize::Medium => "px-4 py-2 text-sm",
            ButtonSize::Large => "px-6 py-3 text-base",
        }
    }
}

impl ButtonType {
    fn as_attr(&self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
        }
    }
}

const BASE_CLASSES: &str = "inline-flex items-center justify-center gap-2 font-bold rounded-md transition-colors focus:outline-none";

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] button_type: ButtonType,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] on_click: Option<Callback<web_sys::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let static_classes = format!(
        "{} {} {}",
        BASE_CLASSES,
        variant.get_classes(),
        size.get_classes()
    );

    let combined_classes = move || {
        let state_classes = if disabled.get() {
            "opacity-50 cursor-not-allowed"
        } else {
            "cursor-pointer"
        };
        format!("{static_classes} {state_classes}")
    };

    view! {
        <button
            type=button_type.as_attr()
            class=combined_classes
            disabled=move || disabled.get()
            on:click=move |ev| {
                if !disabled.get_untracked() {
                    if let Some(handler) = on_click {
                        handler.run(ev);
                    }
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
pub fn LinkButton(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(into)] href: String,
    children: Children,
) -> impl IntoView {
    let combined_classes = format!(
        "{} {} {} no-underline cursor-pointer",
        BASE_CLASSES,
        variant.get_classes(),
        size.get_classes()
    );

    view! {
        <a class=combined_classes href=href>
            {children()}
        </a>
    }
}

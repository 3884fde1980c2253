use leptos::{either::Either, prelude::*};
use leptos_meta::Script;
use serde::Serialize;

use crate::seo::{to_json_ld, JSON_LD_MIME};
use crate::socials::SocialIcon;
use crate::stagger::{animation_delay, ENTRANCE_CLASS};

#[component]
pub fn Container(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! {
        <div class=format!("sm:px-8 {class}")>
            <div class="mx-auto w-full max-w-7xl lg:px-8">
                <div class="relative px-4 sm:px-8 lg:px-12">
                    <div class="mx-auto max-w-2xl lg:max-w-5xl">{children()}</div>
                </div>
            </div>
        </div>
    }
}

/// Embeds `data` in the document head as a JSON-LD script.
#[component]
pub fn JsonLd<T>(data: T) -> impl IntoView
where
    T: Serialize + Send + Sync + 'static,
{
    match to_json_ld(&data) {
        Ok(json) => Some(view! { <Script type_=JSON_LD_MIME>{json}</Script> }),
        Err(err) => {
            log::error!("{err}");
            None
        }
    }
}

/// Fade-in wrapper. With an `index`, the animation is delayed so that
/// siblings enter one after another.
#[component]
pub fn Entrance(#[prop(optional)] index: Option<usize>, children: Children) -> impl IntoView {
    match index {
        Some(i) => Either::Left(view! {
            <div class=ENTRANCE_CLASS style=format!("animation-delay: {}", animation_delay(i))>
                {children()}
            </div>
        }),
        None => Either::Right(view! { <div class=ENTRANCE_CLASS>{children()}</div> }),
    }
}

#[component]
pub fn HoverSocialLink(
    href: &'static str,
    aria_label: &'static str,
    icon: SocialIcon,
    label: &'static str,
    #[prop(optional)] new_tab: bool,
) -> impl IntoView {
    view! {
        <a
            href=href
            aria-label=aria_label
            target=new_tab.then_some("_blank")
            rel=new_tab.then_some("noopener noreferrer")
            class="group flex items-center gap-2 text-sm font-medium text-zinc-600 transition hover:text-teal-500 dark:text-zinc-400 dark:hover:text-teal-500"
        >
            <i class=format!(
                "{} text-xl transition group-hover:scale-110",
                icon.class(),
            )></i>
            <span>{label}</span>
        </a>
    }
}

#[component]
pub fn LinkedText(text: &'static str, href: &'static str) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class="font-semibold text-teal-500 transition hover:text-teal-600 dark:hover:text-teal-400"
        >
            {text}
        </a>
    }
}

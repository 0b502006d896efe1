use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icon::icon;
use crate::config::COMPANY;
use crate::content::{section, Icon, NAV_ITEMS};
use crate::state::menu::MenuState;
use crate::state::scroll::HeaderState;

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    pub header_state: HeaderState,
    pub menu: MenuState,
    pub on_toggle: Callback<()>,
    pub on_navigate: Callback<()>,
}

#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    let SiteHeaderProps { header_state, menu, on_toggle, on_navigate } = props;

    let toggle_menu = {
        let on_toggle = on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    // Mobile links keep their default anchor jump, they only collapse the menu.
    let close_menu = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(()))
    };

    let contact_href = format!("#{}", section::CONTACT);

    html! {
        <header class={header_state.class()}>
            <div class="header-content">
                <a href={format!("#{}", section::HOME)} class="brand">
                    <div class="brand-mark">{"R"}</div>
                    <div>
                        <div class="brand-name">{COMPANY.name}</div>
                        <div class="brand-tagline">{COMPANY.tagline}</div>
                    </div>
                </a>

                <nav class="desktop-nav">
                    { for NAV_ITEMS.iter().map(|item| html! {
                        <a key={item.anchor} href={item.href()} class="nav-link">{item.label}</a>
                    }) }
                </nav>

                <a href={contact_href.clone()} class="header-cta btn-primary">{"Get in touch"}</a>

                <button class="burger-menu" aria-label="Toggle navigation" aria-expanded={menu.is_open().to_string()} onclick={toggle_menu}>
                    { icon(if menu.is_open() { Icon::Close } else { Icon::Menu }) }
                </button>
            </div>

            {
                if menu.is_open() {
                    html! {
                        <nav class="mobile-nav">
                            { for NAV_ITEMS.iter().map(|item| html! {
                                <a key={item.anchor} href={item.href()} class="mobile-nav-link" onclick={close_menu.clone()}>
                                    {item.label}
                                </a>
                            }) }
                            <a href={contact_href} class="btn-primary mobile-cta" onclick={close_menu.clone()}>
                                {"Get in touch"}
                            </a>
                        </nav>
                    }
                } else {
                    html! {}
                }
            }
        </header>
    }
}

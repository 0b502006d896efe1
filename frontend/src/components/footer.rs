use chrono::Datelike;
use yew::prelude::*;

use crate::config::COMPANY;
use crate::content::section;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="brand">
                    <div class="brand-mark small">{"R"}</div>
                    <div>
                        <div class="brand-name">{COMPANY.name}</div>
                        <div class="footer-note">{format!("© {} All rights reserved.", year)}</div>
                    </div>
                </div>
                <div class="footer-links">
                    <a href={format!("#{}", section::HOME)}>{"Top"}</a>
                    <span class="muted">{"Privacy (coming soon)"}</span>
                </div>
            </div>
        </footer>
    }
}

use log::{error, info, warn};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::icon::icon;
use crate::config::COMPANY;
use crate::contact::{ContactFieldUpdate, ContactForm};
use crate::content::{section, Icon, DISCLAIMER};

fn hand_off_to_mail_client(form: &ContactForm) {
    let request = match form.to_mailto(COMPANY.email) {
        Ok(request) => request,
        Err(e) => {
            warn!("Contact form rejected: {}", e);
            return;
        }
    };

    info!("Handing contact request to the mail client");
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.location().set_href(&request.href()) {
                error!("Failed to open mail client: {:?}", e);
            }
        }
        None => error!("No window available for mail hand-off"),
    }
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let form = use_reducer(ContactForm::default);

    let on_name = {
        let form = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(ContactFieldUpdate::Name(input.value()));
        })
    };

    let on_email = {
        let form = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(ContactFieldUpdate::Email(input.value()));
        })
    };

    let on_message = {
        let form = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(ContactFieldUpdate::Message(input.value()));
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            hand_off_to_mail_client(&form);
        })
    };

    let info_row = |row_icon: Icon, title: &'static str, detail: &'static str| html! {
        <div class="info-row">
            <span class="icon-badge">{ icon(row_icon) }</span>
            <div>
                <div class="info-title">{title}</div>
                <div class="info-detail">{detail}</div>
            </div>
        </div>
    };

    html! {
        <section id={section::CONTACT} class="page-section tinted">
            <div class="section-heading">
                <h2>{"Get in touch"}</h2>
                <p>{"Ready to explore how we can help turn your credit access into cash-flowing assets?"}</p>
            </div>

            <div class="contact-grid">
                <div class="card">
                    <h3 class="card-title">{ icon(Icon::Mail) }{"Contact Form"}</h3>
                    <form class="contact-form" onsubmit={onsubmit}>
                        <input
                            type="text"
                            name="name"
                            placeholder="Your name"
                            required=true
                            value={form.name.clone()}
                            oninput={on_name}
                        />
                        <input
                            type="email"
                            name="email"
                            placeholder="Your email"
                            required=true
                            value={form.email.clone()}
                            oninput={on_email}
                        />
                        <textarea
                            name="message"
                            placeholder="How can we help?"
                            required=true
                            value={form.message.clone()}
                            oninput={on_message}
                        />
                        <button type="submit" class="btn-primary full-width">{"Send Message"}</button>
                    </form>
                </div>

                <div class="card">
                    <h3 class="card-title">{"Company Information"}</h3>
                    { info_row(Icon::Building, COMPANY.name, COMPANY.tagline) }
                    { info_row(Icon::Mail, "Email", COMPANY.email) }
                    { info_row(Icon::MapPin, "Location", COMPANY.city) }
                    { info_row(Icon::Calendar, "Founded", COMPANY.founded) }
                    <hr class="separator" />
                    <p class="disclaimer"><strong>{"Disclaimer: "}</strong>{DISCLAIMER}</p>
                </div>
            </div>
        </section>
    }
}

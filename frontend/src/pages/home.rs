use log::info;
use yew::prelude::*;

use crate::components::{
    contact_form::ContactSection,
    faq::Faq,
    footer::Footer,
    nav::SiteHeader,
    sections::{CallToAction, Credibility, Hero, Pillars, Principles, Process, Services},
};
use crate::state::menu::{MenuAction, MenuState};
use crate::state::scroll::{use_scroll_offset, HeaderState};

#[function_component(Home)]
pub fn home() -> Html {
    let scroll_offset = use_scroll_offset();
    let menu = use_reducer(MenuState::default);

    use_effect_with_deps(|_| {
        info!("Home page mounted");
        || info!("Home page unmounted")
    }, ());

    let on_toggle = {
        let menu = menu.dispatcher();
        Callback::from(move |_: ()| menu.dispatch(MenuAction::Toggle))
    };

    let on_navigate = {
        let menu = menu.dispatcher();
        Callback::from(move |_: ()| menu.dispatch(MenuAction::Navigate))
    };

    html! {
        <div class="site">
            <SiteHeader
                header_state={HeaderState::from_offset(scroll_offset)}
                menu={*menu}
                on_toggle={on_toggle}
                on_navigate={on_navigate}
            />
            <main>
                <Hero />
                <Credibility />
                <Pillars />
                <Services />
                <Process />
                <Principles />
                <CallToAction />
                <Faq />
                <ContactSection />
            </main>
            <Footer />

            <style>
                {r#"
                .site {
                    min-height: 100vh;
                    background: #0b0d12;
                    color: #f5f7fa;
                    font-family: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
                }

                .site-header {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    transition: all 0.3s ease;
                }

                .site-header.transparent {
                    background: transparent;
                }

                .site-header.blurred {
                    background: rgba(11, 13, 18, 0.8);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                }

                .header-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .brand {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    color: inherit;
                    text-decoration: none;
                }

                .brand-mark {
                    height: 40px;
                    width: 40px;
                    border-radius: 12px;
                    background: #7EB2FF;
                    color: #0b0d12;
                    display: grid;
                    place-items: center;
                    font-weight: 700;
                }

                .brand-mark.small {
                    height: 32px;
                    width: 32px;
                }

                .brand-tagline, .footer-note, .muted {
                    font-size: 0.75rem;
                    color: #8a93a3;
                }

                .desktop-nav {
                    display: flex;
                    gap: 2rem;
                }

                .nav-link, .mobile-nav-link {
                    color: #8a93a3;
                    text-decoration: none;
                    font-size: 0.875rem;
                }

                .nav-link:hover, .mobile-nav-link:hover {
                    color: #f5f7fa;
                }

                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    color: inherit;
                    font-size: 1.5rem;
                    cursor: pointer;
                }

                .mobile-nav {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    padding: 1rem 1.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.08);
                }

                .btn-primary, .btn-ghost {
                    display: inline-block;
                    padding: 0.75rem 1.5rem;
                    border-radius: 10px;
                    text-decoration: none;
                    font-weight: 600;
                    border: none;
                    cursor: pointer;
                }

                .btn-primary {
                    background: #7EB2FF;
                    color: #0b0d12;
                }

                .btn-ghost {
                    color: #f5f7fa;
                }

                .full-width {
                    width: 100%;
                }

                .hero {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 8rem 1.5rem 4rem;
                    display: grid;
                    grid-template-columns: 1.2fr 0.8fr;
                    gap: 3rem;
                    align-items: center;
                }

                .hero h1 {
                    font-size: 3rem;
                    line-height: 1.1;
                }

                .hero-line {
                    display: block;
                    margin-top: 0.5rem;
                }

                .text-gradient {
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .hero-logo img {
                    width: 16rem;
                    height: 16rem;
                    object-fit: contain;
                    opacity: 0.9;
                }

                .hero-actions, .hero-facts {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    margin-top: 1.5rem;
                }

                .badge {
                    display: inline-block;
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                    background: rgba(255, 255, 255, 0.1);
                    font-size: 0.75rem;
                }

                .page-section, .credibility, .cta-band {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 5rem 1.5rem;
                }

                .tinted {
                    background: rgba(255, 255, 255, 0.02);
                }

                .section-heading {
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .section-heading p, .card p {
                    color: #8a93a3;
                }

                .card-grid {
                    display: grid;
                    gap: 1.5rem;
                }

                .card-grid.two { grid-template-columns: repeat(2, 1fr); }
                .card-grid.three { grid-template-columns: repeat(3, 1fr); }
                .card-grid.four { grid-template-columns: repeat(4, 1fr); }

                .card {
                    position: relative;
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 16px;
                    padding: 1.5rem;
                }

                .metric-value {
                    font-size: 1.25rem;
                    font-weight: 700;
                }

                .step-number {
                    position: absolute;
                    top: -0.75rem;
                    right: -0.75rem;
                    width: 2rem;
                    height: 2rem;
                    border-radius: 50%;
                    background: #7EB2FF;
                    color: #0b0d12;
                    display: grid;
                    place-items: center;
                    font-weight: 700;
                }

                .checklist {
                    list-style: none;
                    padding: 0;
                }

                .icon-badge {
                    padding: 0.5rem;
                    border-radius: 8px;
                    background: rgba(126, 178, 255, 0.1);
                    color: #7EB2FF;
                }

                .cta-card {
                    text-align: center;
                    padding: 3rem;
                }

                .faq-list {
                    max-width: 48rem;
                    margin: 0 auto;
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    background: none;
                    border: none;
                    color: inherit;
                    padding: 1.25rem 0;
                    font-size: 1rem;
                    text-align: left;
                    cursor: pointer;
                }

                .faq-item {
                    border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                }

                .faq-answer {
                    color: #8a93a3;
                    padding-bottom: 1.25rem;
                }

                .contact-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 3rem;
                    max-width: 64rem;
                    margin: 0 auto;
                }

                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .contact-form input, .contact-form textarea {
                    background: rgba(0, 0, 0, 0.3);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 8px;
                    padding: 0.75rem;
                    color: inherit;
                }

                .contact-form textarea {
                    min-height: 120px;
                }

                .info-row {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 1rem;
                }

                .disclaimer {
                    font-size: 0.75rem;
                    line-height: 1.6;
                }

                .site-footer {
                    border-top: 1px solid rgba(255, 255, 255, 0.08);
                }

                .footer-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 3rem 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .footer-links {
                    display: flex;
                    gap: 1.5rem;
                }

                .footer-links a {
                    color: #8a93a3;
                    text-decoration: none;
                }

                @media (max-width: 1024px) {
                    .desktop-nav {
                        display: none;
                    }

                    .burger-menu {
                        display: block;
                    }

                    .hero, .contact-grid {
                        grid-template-columns: 1fr;
                    }

                    .card-grid.three, .card-grid.four {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                @media (max-width: 768px) {
                    .header-cta {
                        display: none;
                    }

                    .card-grid.two, .card-grid.three, .card-grid.four {
                        grid-template-columns: 1fr;
                    }

                    .footer-content {
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

use yew::prelude::*;

use crate::components::icon::icon;
use crate::config::{COMPANY, LOGO_PATH};
use crate::content::{
    section, Icon, MetricCard, Pillar, Principle, ProcessStep, ServiceEntry, METRICS, PILLARS, PRINCIPLES,
    PROCESS_STEPS, SERVICES, SERVICE_BLURB,
};

fn section_heading(title: &str, intro: &str) -> Html {
    html! {
        <div class="section-heading">
            <h2>{title}</h2>
            <p>{intro}</p>
        </div>
    }
}

pub fn metric_card(metric: &MetricCard) -> Html {
    html! {
        <div class="card metric-card">
            <div class="metric-label">{metric.label}</div>
            <div class="metric-value">{metric.value}</div>
            <div class="metric-description">{metric.description}</div>
        </div>
    }
}

pub fn pillar_card(pillar: &Pillar) -> Html {
    html! {
        <div class="card pillar-card">
            <h3 class="card-title">
                <span class="icon-badge">{ icon(pillar.icon) }</span>
                {pillar.title}
            </h3>
            <ul class="checklist">
                { for pillar.bullets.iter().map(|bullet| html! {
                    <li>{ icon(Icon::Check) }<span>{*bullet}</span></li>
                }) }
            </ul>
        </div>
    }
}

pub fn service_card(service: &ServiceEntry) -> Html {
    html! {
        <div class="card service-card">
            <h3 class="card-title">{service.title}</h3>
            <p>{SERVICE_BLURB}</p>
        </div>
    }
}

pub fn process_card(step: &ProcessStep) -> Html {
    html! {
        <div class="card process-card">
            <div class="step-number">{step.step}</div>
            <h3 class="card-title">
                <span class="icon-badge">{ icon(step.icon) }</span>
                {step.title}
            </h3>
            <p>{step.description}</p>
        </div>
    }
}

pub fn principle_card(principle: &Principle) -> Html {
    html! {
        <div class="card principle-card">
            <span class="icon-badge">{ icon(Icon::Star) }</span>
            <p>{principle.description}</p>
        </div>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id={section::HOME} class="hero">
            <div class="hero-copy">
                <span class="badge">{"Founder‑led holding company"}</span>
                <h1>
                    {"We turn "}<span class="text-gradient">{"access to capital"}</span>{" into"}
                    <span class="hero-line">{"durable, cash‑flowing assets."}</span>
                </h1>
                <p class="hero-subtitle">
                    {"Credibility → Approvals → Disciplined deployment. Today: liquidity operations. Next: real estate & logistics."}
                </p>
                <div class="hero-actions">
                    <a href={format!("#{}", section::CONTACT)} class="btn-primary">{"Book an intro"}</a>
                    <a href={format!("#{}", section::SERVICES)} class="btn-ghost">
                        {"See services "}{ icon(Icon::ArrowRight) }
                    </a>
                </div>
                <div class="hero-facts">
                    <span>{ icon(Icon::MapPin) }{COMPANY.city}</span>
                    <span>{ icon(Icon::Calendar) }{format!("Est. {}", COMPANY.founded)}</span>
                </div>
            </div>
            <div class="hero-logo">
                <img src={LOGO_PATH} alt={format!("{} Logo", COMPANY.name)} />
            </div>
        </section>
    }
}

#[function_component(Credibility)]
pub fn credibility() -> Html {
    html! {
        <section id={section::CREDIBILITY} class="credibility">
            <div class="card-grid four">
                { for METRICS.iter().map(metric_card) }
            </div>
        </section>
    }
}

#[function_component(Pillars)]
pub fn pillars() -> Html {
    html! {
        <section id={section::PILLARS} class="page-section">
            { section_heading(
                "Operating pillars",
                "Three interconnected verticals that create sustainable value through disciplined capital deployment.",
            ) }
            <div class="card-grid three">
                { for PILLARS.iter().map(pillar_card) }
            </div>
        </section>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id={section::SERVICES} class="page-section tinted">
            { section_heading(
                "What we do",
                "Education and operational support. We are not an investment adviser; nothing here is financial, legal, or tax advice.",
            ) }
            <div class="card-grid two">
                { for SERVICES.iter().map(service_card) }
            </div>
        </section>
    }
}

#[function_component(Process)]
pub fn process() -> Html {
    html! {
        <section id={section::PROCESS} class="page-section">
            { section_heading(
                "How it works",
                "A systematic approach to turning credit access into cash-flowing assets.",
            ) }
            <div class="card-grid four">
                { for PROCESS_STEPS.iter().map(process_card) }
            </div>
        </section>
    }
}

#[function_component(Principles)]
pub fn principles() -> Html {
    html! {
        <section id={section::PRINCIPLES} class="page-section tinted">
            { section_heading(
                "Operating principles",
                "Core values that guide every decision and deployment.",
            ) }
            <div class="card-grid three">
                { for PRINCIPLES.iter().map(principle_card) }
            </div>
        </section>
    }
}

#[function_component(CallToAction)]
pub fn call_to_action() -> Html {
    html! {
        <section class="cta-band">
            <div class="card cta-card">
                <h3>{"Ready to turn approvals into assets?"}</h3>
                <p>{"Start with a 20‑minute intro. No hype—just a plan."}</p>
                <a href={format!("#{}", section::CONTACT)} class="btn-primary">{"Request a call"}</a>
            </div>
        </section>
    }
}

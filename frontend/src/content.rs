//! Static copy for the page. Every table renders in declaration order.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompanyInfo {
    pub name: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub city: &'static str,
    pub founded: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    CircleDollarSign,
    Building,
    Truck,
    Layers,
    Shield,
    Rocket,
    ChevronRight,
    ArrowRight,
    Star,
    Check,
    Mail,
    MapPin,
    Calendar,
    Menu,
    Close,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    /// Id of the target section, without the leading `#`.
    pub anchor: &'static str,
    pub label: &'static str,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pillar {
    pub title: &'static str,
    pub icon: Icon,
    pub bullets: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceEntry {
    pub title: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProcessStep {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub step: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Principle {
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub mod section {
    pub const HOME: &str = "home";
    pub const CREDIBILITY: &str = "credibility";
    pub const PILLARS: &str = "pillars";
    pub const SERVICES: &str = "services";
    pub const PROCESS: &str = "process";
    pub const PRINCIPLES: &str = "principles";
    pub const FAQ: &str = "faq";
    pub const CONTACT: &str = "contact";

    /// Section ids in the order the page renders them.
    pub const ALL: [&str; 8] = [HOME, CREDIBILITY, PILLARS, SERVICES, PROCESS, PRINCIPLES, FAQ, CONTACT];
}

pub const NAV_ITEMS: [NavItem; 7] = [
    NavItem { anchor: section::CREDIBILITY, label: "Credibility" },
    NavItem { anchor: section::PILLARS, label: "Pillars" },
    NavItem { anchor: section::SERVICES, label: "Services" },
    NavItem { anchor: section::PROCESS, label: "Process" },
    NavItem { anchor: section::PRINCIPLES, label: "Principles" },
    NavItem { anchor: section::FAQ, label: "FAQ" },
    NavItem { anchor: section::CONTACT, label: "Contact" },
];

pub const METRICS: [MetricCard; 4] = [
    MetricCard { label: "Approvals", value: "$100k–$250k", description: "12‑mo target" },
    MetricCard { label: "Net spread", value: "Positive after cost", description: "discipline > headlines" },
    MetricCard { label: "Pillars", value: "Capital • RE • Logistics", description: "multi‑vertical" },
    MetricCard { label: "Rhythm", value: "Monthly", description: "compound & refinance" },
];

pub const PILLARS: [Pillar; 3] = [
    Pillar {
        title: "Capital",
        icon: Icon::CircleDollarSign,
        bullets: &[
            "Business credit stacking & bank relationships",
            "Lines of credit & term loans sequencing",
            "Liquidity operations (blue‑chip/stable pools) with risk limits",
        ],
    },
    Pillar {
        title: "Real Estate",
        icon: Icon::Building,
        bullets: &[
            "Compound into BRRRR / small‑balance commercial",
            "Cash‑flow‑first underwriting; conservative leverage",
            "Refi, hold, and operate with discipline",
        ],
    },
    Pillar {
        title: "Logistics",
        icon: Icon::Truck,
        bullets: &[
            "Asset‑light ops & software for supply‑chain efficiency",
            "Equipment financing with ROI gates",
            "Partnerships with carriers & warehouses",
        ],
    },
];

pub const SERVICES: [ServiceEntry; 4] = [
    ServiceEntry { title: "Application sequencing & credit‑limit growth" },
    ServiceEntry { title: "Relationship banking playbook & underwriting prep" },
    ServiceEntry { title: "Venue selection, custody & position sizing" },
    ServiceEntry { title: "Record‑keeping for taxes; risk dashboards" },
];

/// Shared body copy under every service card.
pub const SERVICE_BLURB: &str = "Execution over theory—built to protect downside while compounding.";

pub const PROCESS_STEPS: [ProcessStep; 4] = [
    ProcessStep {
        title: "Assess",
        description: "Entity, banking, and credit review to map fastest approvals.",
        icon: Icon::Layers,
        step: "01",
    },
    ProcessStep {
        title: "Stack",
        description: "Sequence cards/LOCs/loans without tripping risk flags.",
        icon: Icon::Shield,
        step: "02",
    },
    ProcessStep {
        title: "Deploy",
        description: "Deep‑liquidity venues; net yield tracked vs cost.",
        icon: Icon::Rocket,
        step: "03",
    },
    ProcessStep {
        title: "Compound",
        description: "Reinvest monthly, refinance, and scale into real assets.",
        icon: Icon::ChevronRight,
        step: "04",
    },
];

pub const PRINCIPLES: [Principle; 3] = [
    Principle { description: "Safety first: position sizing, diversification, custody." },
    Principle { description: "Net‑spread mindset: after cost, fees, and taxes." },
    Principle { description: "Reputation compounder: transparent records & lender friendly." },
];

pub const FAQ_ENTRIES: [FaqEntry; 3] = [
    FaqEntry {
        question: "Are you an investment adviser?",
        answer: "No. We provide education and operational support only. Nothing here is investment, legal, or tax advice.",
    },
    FaqEntry {
        question: "Do you promise returns?",
        answer: "No. We optimize for positive spread after costs and durability over headline APR.",
    },
    FaqEntry {
        question: "How fast can capital be deployed?",
        answer: "Typical path is 2–6 weeks for initial approvals and a small first deployment, then scaling in disciplined tranches.",
    },
];

pub const DISCLAIMER: &str = "Ravenspire Capital is not a broker‑dealer or investment adviser. \
Information on this site is for educational purposes only and should not be construed as \
financial, legal, or tax advice. Digital assets and liquidity strategies carry risk, \
including volatility and loss of principal.";

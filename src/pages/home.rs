use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, SubmitEvent};
use log::info;
use chrono::Datelike;

use crate::components::cards::{InfoCard, ServiceCard, Stat};
use crate::components::section::Section;
use crate::config;
use crate::enquiry::Enquiry;

// Public assets
const LOGO: &str = "/assets/AXYCAD-2.1.png";
const REEL_VIDEO: &str = "/assets/reel-of-the-day.mp4";
const COMMUNITY_IMAGE: &str = "/assets/building-hope.png";

const INTRO_VIDEO: &str = "/videos/segment-1-construction-changing.mp4";
const BLUEPRINT_VIDEO: &str = "/videos/segment-2-data-blueprint.mp4";
const ESTIMATING_VIDEO: &str = "/videos/segment-3-ai-estimating.mp4";
const PLANNING_VIDEO: &str = "/videos/segment-4-4d-5d-planning.mp4";
const ECI_VIDEO: &str = "/videos/segment-5-eci.mp4";

const STATS: [(&str, &str); 3] = [
    ("£40m+", "Projects supported"),
    ("30+", "Projects Involved"),
    ("15% avg", "Bid savings found"),
];

const SERVICES: [(&str, [&str; 4]); 7] = [
    (
        "Estimating & Take-Offs",
        [
            "Fully measured BoQs (CESMM / NRM / client formats)",
            "2D/3D take-offs from IFC/CAD/BIM",
            "Package scoping, supplier enquiries & benchmarked rates",
            "Tender adjudications and value-engineering notes",
        ],
    ),
    (
        "Bid Writing & Strategy",
        [
            "Compelling method statements and win themes",
            "Social value, carbon & quality submissions",
            "Prelims build-ups, risk registers & programme narratives",
            "Client interview coaching and decks",
        ],
    ),
    (
        "Early Contractual Involvement (ECI)",
        [
            "Constructability & phasing reviews",
            "RFI/TQ management and change strategy (NEC/JCT)",
            "Temporary works concepts & optioneering",
            "Logistics and stakeholder modelling",
        ],
    ),
    (
        "Temporary Works Design",
        [
            "Formwork, falsework, propping & access",
            "Cranage studies and equipment selection (BS7121)",
            "Foundations, excavation support & working platforms",
            "Category 1–3 checks with independent reviewers",
        ],
    ),
    (
        "4D/5D Programme Development",
        [
            "P6 / MS Project / Synchro Pro baselines",
            "Linked cost/time (5D) with cashflow curves",
            "Progress tracking dashboards & EVM",
            "Scenario modelling and risk allowances",
        ],
    ),
    (
        "FRC Construction & Groundworks",
        [
            "Rafts, walls, cores, capping beams & abutments",
            "Earthworks, drainage, utilities and RC frames",
            "Methodology, TWD/TMP and ITP roll-out",
            "Self-delivery crews and specialist partners",
        ],
    ),
    (
        "Quality, Engineering & Handover",
        [
            "ITPs, checklists, test plans & records",
            "Survey control, setting-out, as-builts & redlines",
            "O&M compilation, asset data and COBie",
            "Digital handover rooms with structured metadata",
        ],
    ),
];

const CONTROLS_BULLETS: [&str; 4] = [
    "WBS setup, coding & calendars across P6/MSP/Synchro",
    "EVM and S-curve dashboards; progress and look-aheads",
    "Change control aligned to NEC events and CEAs",
    "Cost loading and 5D cashflow; procurement linking",
];

const TOOLS: [&str; 3] = ["Primavera P6", "MS Project", "Synchro Pro 4D"];

const QUALITY_ITEMS: [(&str, &str); 3] = [
    (
        "ITPs & Records",
        "Discipline-specific ITPs, hold/witness points, checklists and test records prepared to ISO 9001 & client specs.",
    ),
    (
        "Digital Handover",
        "Drawings (redlines / as-builts), certificates, concrete pour records and delivery tickets, and COBie/asset data — organised in an indexed handover room for streamlined client acceptance.",
    ),
    (
        "Safety & Compliance",
        "WPPs, RAMS, lift plans, methodology development, permits and competence matrices.",
    ),
];

// (logo path, logo alt, heading, description)
const ACCREDITATIONS: [(&str, &str, &str, &str); 7] = [
    (
        "/assets/logos/constructionline-gold.png",
        "Constructionline Gold",
        "Constructionline Gold Member",
        "Verified to enhanced prequalification standards covering health & safety, quality, environmental management, social value and governance.",
    ),
    (
        "/assets/logos/ssip-once-for-all.png",
        "SSIP Once For All",
        "SSIP – Once For All Health & Safety",
        "Certified under SSIP Core Criteria and CDM 2015 as a contractor with 5+ employees.",
    ),
    (
        "/assets/logos/social-value.png",
        "Social Value",
        "Social Value Certification",
        "Demonstrates our commitment to community benefit, ethical procurement and local impact.",
    ),
    (
        "/assets/logos/scss-silver.png",
        "Supply Chain Sustainability School Silver",
        "Supply Chain Sustainability School — Silver",
        "Recognition of our sustainability, carbon awareness and responsible sourcing capabilities.",
    ),
    (
        "/assets/logos/disability-confident-committed.png",
        "Disability Confident Committed",
        "Disability Confident Committed",
        "Supporting inclusive recruitment, equal opportunity and accessible workplace practices.",
    ),
    (
        "/assets/logos/risqs-registered.png",
        "RISQS Registered Supplier",
        "RISQS Registered (Audit Submitted)",
        "Registered rail supplier with full audit submitted and progressing towards accreditation.",
    ),
    (
        "/assets/logos/ico-registered.png",
        "ICO Registered",
        "ICO Registered",
        "Fully compliant with UK GDPR for secure and lawful handling of project and personal data.",
    ),
];

const CASE_STUDIES: [(&str, &str); 3] = [
    (
        "HS2 — FRC & Temporary Works",
        "FRC works and associated TWD – from pile caps, capping beams, abutments, suspended slabs, decks, ITP packs and handover packs (QRPs / redline drawings / as-builts).",
    ),
    (
        "National Highways Bridges & Footbridges",
        "Early contractual involvement – take-offs, BoQs, construction programmes, logistics and buildability plans, review and RFI of the permanent design to improve buildability, programme and reduce H&S risks. VR for structure packages with logistics modelling and risk allowances.",
    ),
    (
        "Data Centre — Programme & QA",
        "Construction programme, coordination reviews and digital QA for right-first-time delivery, 4D sequencing and resource allocation/planning.",
    ),
];

fn looping_clip(src: &'static str) -> Html {
    html! {
        <video src={src} autoplay=true loop=true muted=true playsinline=true preload="metadata"></video>
    }
}

fn check_list(items: &[&'static str]) -> Html {
    html! {
        <ul class="check-list">
            { for items.iter().map(|item| html! { <li>{*item}</li> }) }
        </ul>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let name = use_state(String::new);
    let email = use_state(String::new);
    let company = use_state(String::new);
    let message = use_state(String::new);

    let oninput_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let oninput_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let oninput_company = {
        let company = company.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            company.set(input.value());
        })
    };
    let oninput_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    // Required fields are enforced by the browser before this ever runs.
    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let company = company.clone();
        let message = message.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let enquiry = Enquiry {
                name: (*name).clone(),
                email: (*email).clone(),
                company: (*company).clone(),
                message: (*message).clone(),
            };
            info!("Opening mail client for proposal request");
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(&enquiry.mailto(&config::RECIPIENTS));
            }
        })
    };

    let year = chrono::Utc::now().year();

    html! {
        <div class="landing-page" id="top">
            // Hero
            <header class="hero">
                <div class="hero-grid">
                    <div class="hero-copy">
                        <p class="hero-kicker">{"Precision. Performance. Partnership."}</p>
                        <h1>
                            {"Integrated Construction Solutions — from Vision to Handover. "}
                            <span class="accent">{"Shaping smarter ways to build."}</span>
                        </h1>
                        <p class="hero-subtitle">
                            {"AXYCAD partners with main contractors and developers to plan, price \
                              and deliver complex civil engineering and concrete works. From \
                              early-stage constructability and tender support to site execution, \
                              digital QA and handover — we make programmes buildable and profitable."}
                        </p>
                        <div class="hero-cta-group">
                            <a href="#services" class="hero-cta">{"Explore Services"}</a>
                            <a href="#contact" class="hero-cta secondary">{"Start a Project"}</a>
                        </div>
                        <div class="stats-row">
                            {
                                STATS.iter().map(|(value, label)| html! {
                                    <Stat value={*value} label={*label} />
                                }).collect::<Html>()
                            }
                        </div>
                    </div>
                    <div class="hero-media">
                        <div class="clip-card">
                            <div class="clip-card-header">
                                <span class="clip-caption">{"Construction is Changing"}</span>
                                <span class="clip-badge">{"INTRO"}</span>
                            </div>
                            <div class="clip-frame">
                                { looping_clip(INTRO_VIDEO) }
                            </div>
                            <div class="clip-timeline">
                                <div class="clip-timeline-bar"><div class="clip-timeline-fill"></div></div>
                                <div class="clip-timeline-labels">
                                    <span>{"Complexity ↑"}</span>
                                    <span>{"Clarity enabled"}</span>
                                    <span>{"0–10s"}</span>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </header>

            <Section id="data-blueprint" kicker="Digital foundations" title="Data is the New Blueprint">
                <div class="split-block">
                    <div class="clip-frame">
                        { looping_clip(BLUEPRINT_VIDEO) }
                    </div>
                    <div class="split-copy">
                        <p>
                            {"Data is the new blueprint — long before plant arrives on site, \
                              models, programmes and quantities determine what is possible."}
                        </p>
                        { check_list(&[
                            "Centralised project information and traceable decisions.",
                            "Design, quantities and programme linked from the outset.",
                            "Risks understood and mitigated before construction starts.",
                        ]) }
                    </div>
                </div>
            </Section>

            <Section id="ai-estimating" kicker="Pricing with confidence" title="AI Estimating & Commercial Intelligence">
                <div class="split-block">
                    <div class="split-copy">
                        <p>
                            {"AI-supported estimating helps you move faster without sacrificing rigour. \
                              We still apply engineering judgment — we just get to the right answer quicker."}
                        </p>
                        { check_list(&[
                            "Automated take-offs aligned to the method of construction.",
                            "Benchmarking, sensitivities and risk allowances in minutes.",
                            "Commercial confidence from first proposal to final account.",
                        ]) }
                    </div>
                    <div class="clip-frame">
                        { looping_clip(ESTIMATING_VIDEO) }
                    </div>
                </div>
            </Section>

            <Section id="services" kicker="What we do" title="Services built for main contractors & developers">
                <div class="card-grid three-up">
                    {
                        SERVICES.iter().map(|(title, bullets)| html! {
                            <ServiceCard
                                title={*title}
                                bullets={bullets.iter().map(|b| b.to_string()).collect::<Vec<_>>()}
                            />
                        }).collect::<Html>()
                    }
                </div>
            </Section>

            <Section id="programmes" kicker="Controls that drive performance" title="Programme development, tracking & 4D/5D">
                <div class="card-grid two-up">
                    <InfoCard title="Controls & Reporting">
                        { check_list(&CONTROLS_BULLETS) }
                        <div class="tools-row">
                            {
                                TOOLS.iter().map(|tool| html! {
                                    <span class="tool-chip">{*tool}</span>
                                }).collect::<Html>()
                            }
                        </div>
                    </InfoCard>
                    <InfoCard title="Sample 4D/5D Clip">
                        <div class="clip-frame">
                            { looping_clip(PLANNING_VIDEO) }
                        </div>
                        <p class="clip-caption">{"Example 4D sequence"}</p>
                    </InfoCard>
                </div>
            </Section>

            <Section id="quality" kicker="Assurance" title="Quality & close-out you can trust">
                <div class="card-grid three-up">
                    {
                        QUALITY_ITEMS.iter().map(|(title, body)| html! {
                            <InfoCard title={*title}>
                                <p>{*body}</p>
                            </InfoCard>
                        }).collect::<Html>()
                    }
                </div>
            </Section>

            <Section id="accreditations" kicker="Standards you can trust" title="Compliance, Accreditation & Assurance">
                <p class="section-lead">
                    {"AXYCAD maintains rigorous standards across health & safety, quality, \
                      sustainability, social value and data protection — ensuring that every \
                      project is delivered responsibly, transparently and to the highest \
                      professional level."}
                </p>
                <div class="logo-strip">
                    {
                        ACCREDITATIONS.iter().map(|(logo, alt, _, _)| html! {
                            <img src={*logo} alt={*alt} loading="lazy" />
                        }).collect::<Html>()
                    }
                </div>
                <div class="card-grid two-up">
                    {
                        ACCREDITATIONS.iter().map(|(_, _, heading, description)| html! {
                            <div class="accreditation-entry">
                                <h3>{*heading}</h3>
                                <p>{*description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </Section>

            <Section id="eci" kicker="Shaping decisions earlier" title="Early Contractor Involvement">
                <div class="split-block">
                    <div class="clip-frame">
                        { looping_clip(ECI_VIDEO) }
                    </div>
                    <div class="split-copy">
                        <p>
                            {"Early contractor involvement brings buildability, programme and \
                              logistics thinking into the room while designs are still flexible — \
                              not once they're fixed."}
                        </p>
                        { check_list(&[
                            "Sequencing and temporary works input before final design.",
                            "Realistic programmes and logistics plans from day one.",
                            "Risk and value engineering embedded early, not bolted on.",
                        ]) }
                    </div>
                </div>
            </Section>

            <Section id="case-studies" kicker="Case studies" title="Selected experience">
                <div class="card-grid three-up">
                    {
                        CASE_STUDIES.iter().map(|(title, body)| html! {
                            <InfoCard title={*title}>
                                <p>{*body}</p>
                            </InfoCard>
                        }).collect::<Html>()
                    }
                </div>
            </Section>

            <Section id="community" kicker="Together for Anisia" title="Community">
                <div class="community-panel">
                    <div class="community-copy">
                        <p class="section-kicker">{"Building Hope"}</p>
                        <h3>{"Supporting Batten Disease Awareness"}</h3>
                        <p>
                            {"AXYCAD stands alongside Anisia and her family in raising awareness and \
                              vital funds for Batten Disease. Your support helps fund treatment, \
                              research and specialist care."}
                        </p>
                        <div class="community-cta">
                            <a
                                href={config::CROWDFUNDING_URL}
                                target="_blank"
                                rel="noopener noreferrer"
                                class="hero-cta"
                            >
                                {"Donate Today"}
                            </a>
                            <p class="community-note">
                                {"100% of donations go to Anisia's treatment and Batten Disease support."}
                            </p>
                        </div>
                    </div>
                    <a
                        href={config::CROWDFUNDING_URL}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="community-image"
                    >
                        <img src={COMMUNITY_IMAGE} alt="Building Hope - Batten Disease Awareness" loading="lazy" />
                    </a>
                </div>
            </Section>

            <Section id="contact" kicker="Contact" title="Tell us about your project">
                <div class="card-grid two-up">
                    <InfoCard title="Request a proposal">
                        <form class="enquiry-form" onsubmit={onsubmit}>
                            <input
                                name="name"
                                placeholder="Name"
                                required=true
                                value={(*name).clone()}
                                oninput={oninput_name}
                            />
                            <input
                                name="email"
                                type="email"
                                placeholder="Email"
                                required=true
                                value={(*email).clone()}
                                oninput={oninput_email}
                            />
                            <input
                                name="company"
                                placeholder="Company"
                                value={(*company).clone()}
                                oninput={oninput_company}
                            />
                            <textarea
                                name="message"
                                rows="5"
                                placeholder="Tell us about your scope (programme, estimating, TWD, QA, etc.)"
                                value={(*message).clone()}
                                oninput={oninput_message}
                            />
                            <button type="submit" class="submit-button">{"Submit"}</button>
                        </form>
                        <p class="form-note">
                            {format!(
                                "Submitting opens your email client to send your enquiry directly to {}.",
                                config::RECIPIENTS.join(" & ")
                            )}
                        </p>
                    </InfoCard>
                    <div class="contact-side">
                        <div class="direct-card">
                            <div class="direct-label">{"Direct"}</div>
                            <div class="direct-line">{"📧 "}{config::RECIPIENTS[0]}</div>
                            <div class="direct-line">{"📞 "}{config::PHONE}</div>
                            <div class="direct-line">{"📍 "}{config::LOCATION}</div>
                        </div>
                        <InfoCard title="From Vision to Handover">
                            <div class="clip-frame">
                                { looping_clip(REEL_VIDEO) }
                            </div>
                            <p class="clip-caption">
                                {"AXYCAD — supporting your project from first sketch to digital handover."}
                            </p>
                        </InfoCard>
                    </div>
                </div>
            </Section>

            <footer class="site-footer">
                <a href="#top" class="nav-logo" aria-label="AXYCAD home">
                    <img src={LOGO} alt="AXYCAD Logo" />
                </a>
                <p class="footer-copy">{format!("© {} AXYCAD Ltd. All rights reserved.", year)}</p>
                <div class="footer-links">{"Privacy • Terms • Cookies"}</div>
            </footer>
        </div>
    }
}

use log::warn;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::counter::StatCounter;
use crate::components::faq::{FaqAccordion, FaqEntry};
use crate::components::motion::{scroll_to_id, use_scroll_to_top, Motion, Reveal};
use crate::components::partner_directory::PartnerDirectory;
use crate::Route;

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?ixlib=rb-4.0.3";

const HERO_TAGS: &[&str] = &[
    "Personal Training",
    "Strength",
    "Group Classes",
    "Swimming",
    "Cardio Equipment",
    "Functional Workouts",
];

const HERO_STATS: &[(&str, &str)] = &[
    ("12+", "Years of Excellence"),
    ("27K+", "Members"),
    ("60+", "Weekly Classes"),
    ("117+", "Expert Trainers"),
];

const BAND_STATS: &[(&str, &str)] = &[
    ("2,500+", "Active Members"),
    ("50+", "Expert Trainers"),
    ("15", "Years Experience"),
    ("24/7", "Support Available"),
];

struct Feature {
    image: &'static str,
    title: &'static str,
    highlight: &'static str,
    description: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        image: "https://images.unsplash.com/photo-1534438327276-14e5300c3a48?ixlib=rb-4.0.3",
        title: "Train Like a Pro",
        highlight: "Pro",
        description: "Unlock your full potential with personalized guidance from top-tier trainers. Every session is designed to challenge and inspire you. Learn proper techniques to maximize results and prevent injuries. Experience a training journey tailored just for you.",
    },
    Feature {
        image: "https://images.unsplash.com/photo-1518611012118-696072aa579a?ixlib=rb-4.0.3",
        title: "Join Group Classes",
        highlight: "Group",
        description: "Engage in high-energy group sessions that keep your motivation high. Connect with like-minded fitness enthusiasts and push each other. From cardio to strength, every class is dynamic and fun. Feel the energy and achieve more together in every session.",
    },
    Feature {
        image: "https://images.unsplash.com/photo-1540497077202-7c8a3999166f?ixlib=rb-4.0.3",
        title: "Premium Membership",
        highlight: "Premium",
        description: "Get full access to all classes, equipment, and exclusive training zones. Enjoy priority scheduling and dedicated trainer support. Take your fitness journey to the next level with personalized perks. Experience the ultimate commitment to your health and goals.",
    },
];

struct Service {
    title: &'static str,
    description: &'static str,
    features: &'static [&'static str],
}

const SERVICES: &[Service] = &[
    Service {
        title: "Personal Training",
        description: "One-on-one sessions with certified trainers",
        features: &["Customized workout plans", "Nutrition guidance", "Progress tracking", "24/7 support"],
    },
    Service {
        title: "Group Classes",
        description: "High-energy group fitness sessions",
        features: &["Variety of class types", "Experienced instructors", "Community atmosphere", "Flexible scheduling"],
    },
    Service {
        title: "Premium Membership",
        description: "Full access to all facilities and services",
        features: &["Unlimited gym access", "All group classes", "Personal trainer sessions", "Nutrition consultation"],
    },
];

struct Testimonial {
    name: &'static str,
    result: &'static str,
    text: &'static str,
    image: &'static str,
    rating: usize,
}

impl Testimonial {
    fn stars(&self) -> String {
        "★".repeat(self.rating)
    }
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        result: "Lost 40lbs in 4 months",
        text: "The personalized training and community support made all the difference in my transformation journey.",
        image: "https://images.unsplash.com/photo-1544005313-94ddf0286df2?ixlib=rb-4.0.3",
        rating: 5,
    },
    Testimonial {
        name: "Mike Thompson",
        result: "Gained 20lbs muscle",
        text: "Professional trainers and state-of-the-art equipment helped me achieve my bodybuilding goals.",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?ixlib=rb-4.0.3",
        rating: 5,
    },
    Testimonial {
        name: "Emily Chen",
        result: "Marathon finisher",
        text: "From couch to marathon runner in 8 months. The structured training program was incredible.",
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?ixlib=rb-4.0.3",
        rating: 5,
    },
];

const CONTACTS: &[(&str, &str)] = &[
    ("Visit Our Gym", "Ovation Kokapet"),
    ("Call Us", "99851 41235"),
    ("Email Us", "Dottfit@gmail.com"),
];

pub const HOME_FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "What are your operating hours?",
        answer: "We're open Monday through Friday from 5:00 AM to 11:00 PM, weekends from 6:00 AM to 10:00 PM.",
    },
    FaqEntry {
        question: "Do you offer trial memberships?",
        answer: "Yes! We offer a 7-day free trial that includes access to all facilities and one complimentary personal training session.",
    },
    FaqEntry {
        question: "What safety protocols do you follow?",
        answer: "We maintain the highest cleanliness standards, provide sanitizing stations throughout the facility, and ensure all equipment is regularly maintained and cleaned.",
    },
    FaqEntry {
        question: "Can I freeze my membership?",
        answer: "Yes, you can freeze your membership for up to 3 months per year for medical reasons or extended travel.",
    },
    FaqEntry {
        question: "Do you have parking available?",
        answer: "We provide free parking for all members with over 200 spaces available, including covered parking options.",
    },
];

/// Splits a title into words, flagging the ones equal to `highlight`
/// ignoring case.
pub fn title_words<'a>(title: &'a str, highlight: &str) -> Vec<(&'a str, bool)> {
    let highlight = highlight.to_lowercase();
    title
        .split(' ')
        .map(|word| (word, word.to_lowercase() == highlight))
        .collect()
}

#[derive(Properties, PartialEq)]
struct AlternatingSectionProps {
    image: &'static str,
    title: &'static str,
    highlight: &'static str,
    description: &'static str,
    image_left: bool,
}

#[function_component(AlternatingSection)]
fn alternating_section(props: &AlternatingSectionProps) -> Html {
    let (image_motion, text_motion) = if props.image_left {
        (Motion::FromLeft, Motion::FromRight)
    } else {
        (Motion::FromRight, Motion::FromLeft)
    };

    html! {
        <section class={classes!("feature-row", (!props.image_left).then_some("reversed"))}>
            <Reveal motion={image_motion} class="feature-image">
                <img src={props.image} alt={props.title} loading="lazy" />
            </Reveal>
            <Reveal motion={text_motion} delay_ms={200} class="feature-text">
                <h2>
                    { for title_words(props.title, props.highlight).into_iter().map(|(word, highlighted)| html! {
                        <span class={classes!(highlighted.then_some("accent"))}>{format!("{} ", word)}</span>
                    }) }
                </h2>
                <p>{props.description}</p>
            </Reveal>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    /// Section to scroll to once the page has rendered, e.g. "services".
    #[prop_or_default]
    pub focus: Option<AttrValue>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    use_scroll_to_top();

    {
        use_effect_with_deps(
            |focus: &Option<AttrValue>| {
                if let Some(id) = focus {
                    if !scroll_to_id(id) {
                        warn!("No section with id {:?} to scroll to", id);
                    }
                }
                || ()
            },
            props.focus.clone(),
        );
    }

    html! {
        <div class="home-page">
            <section class="hero">
                <div class="hero-content">
                    <h1>{"Push Your "}<span class="accent">{"Limits"}</span>{" With Us"}</h1>
                    <p>{"From beginner to advanced, experience workouts designed to help you achieve peak performance and exceed your fitness goals."}</p>
                    <div class="hero-buttons">
                        <Link<Route> to={Route::Register} classes="hero-button primary">
                            {"Join Now"}
                        </Link<Route>>
                        <a href="#services" class="hero-button secondary">{"Explore Programs"}</a>
                    </div>
                    <div class="hero-tags">
                        { for HERO_TAGS.iter().map(|tag| html! { <span class="hero-tag">{*tag}</span> }) }
                    </div>
                </div>
                <div class="hero-image">
                    <img src={HERO_IMAGE} alt="Fitness professional running" />
                </div>
            </section>

            <PartnerDirectory />

            <section class="journey">
                <Reveal>
                    <h2>{"YOUR "}<span class="accent">{"FITNESS"}</span>{" JOURNEY STARTS HERE"}</h2>
                    <p>{"At FFL Gym, we are dedicated to helping you unlock your full fitness potential. With top-tier equipment, expert trainers, and a welcoming community, we provide the perfect environment to push your limits and achieve your goals."}</p>
                </Reveal>
                <div class="stat-grid">
                    { for HERO_STATS.iter().map(|(value, label)| html! {
                        <StatCounter value={*value} label={*label} />
                    }) }
                </div>
            </section>

            { for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                <AlternatingSection
                    image={feature.image}
                    title={feature.title}
                    highlight={feature.highlight}
                    description={feature.description}
                    image_left={index % 2 == 0}
                />
            }) }

            <section class="stat-band">
                <div class="stat-grid">
                    { for BAND_STATS.iter().enumerate().map(|(index, (value, label))| html! {
                        <Reveal delay_ms={index as u32 * 200}>
                            <StatCounter value={*value} label={*label} />
                        </Reveal>
                    }) }
                </div>
            </section>

            <section class="services" id="services">
                <Reveal>
                    <h2>{"OUR "}<span class="accent">{"SERVICES"}</span></h2>
                    <p class="section-lead">{"Choose from our comprehensive range of fitness programs designed to meet every goal"}</p>
                </Reveal>
                <div class="card-grid">
                    { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                        <Reveal delay_ms={index as u32 * 150} class="service-card">
                            <h3>{service.title}</h3>
                            <p>{service.description}</p>
                            <ul>
                                { for service.features.iter().map(|feature| html! { <li>{"★ "}{*feature}</li> }) }
                            </ul>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section class="testimonials">
                <Reveal>
                    <h2><span class="accent">{"SUCCESS "}</span>{"STORIES"}</h2>
                    <p class="section-lead">{"Real transformations from our amazing community"}</p>
                </Reveal>
                <div class="card-grid">
                    { for TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| html! {
                        <Reveal delay_ms={index as u32 * 200} class="testimonial-card">
                            <div class="testimonial-head">
                                <img src={testimonial.image} alt={testimonial.name} loading="lazy" decoding="async" />
                                <div>
                                    <h4>{testimonial.name}</h4>
                                    <p class="accent">{testimonial.result}</p>
                                </div>
                            </div>
                            <div class="stars">{testimonial.stars()}</div>
                            <p>{format!("\"{}\"", testimonial.text)}</p>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section class="contact" id="contact">
                <Reveal>
                    <h2>{"GET IN "}<span class="accent">{"TOUCH"}</span></h2>
                    <p class="section-lead">{"Ready to start your fitness journey? We're here to help!"}</p>
                </Reveal>
                <div class="card-grid">
                    { for CONTACTS.iter().enumerate().map(|(index, (title, detail))| html! {
                        <Reveal motion={Motion::FromLeft} delay_ms={index as u32 * 150} class="contact-card">
                            <h4>{*title}</h4>
                            <p>{*detail}</p>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section class="cta">
                <Reveal>
                    <h2><span class="accent">{"READY TO ELEVATE "}</span>{"YOUR LIFE?"}</h2>
                    <p>{"Join thousands of members who have transformed their lives with our proven fitness programs"}</p>
                    <div class="hero-buttons">
                        <Link<Route> to={Route::Register} classes="hero-button primary">
                            {"Start Free Trial"}
                        </Link<Route>>
                        <a href="#contact" class="hero-button secondary">{"Schedule Tour"}</a>
                    </div>
                </Reveal>
            </section>

            <FaqAccordion items={HOME_FAQS} />

            <style>
                {r#"
                    .home-page {
                        background: #000;
                        color: #fff;
                        overflow-x: hidden;
                    }
                    .accent {
                        color: #ef4444;
                    }
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 2rem;
                        padding: 8rem 5% 4rem;
                        background: radial-gradient(circle at top left, rgba(220, 38, 38, 0.15), transparent 50%);
                    }
                    .hero-content {
                        flex: 1;
                        max-width: 640px;
                    }
                    .hero h1 {
                        font-size: 4rem;
                        font-weight: 800;
                        line-height: 1.1;
                        margin: 0 0 1.5rem;
                    }
                    .hero p {
                        color: #d1d5db;
                        font-size: 1.2rem;
                        line-height: 1.6;
                    }
                    .hero-buttons {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        margin: 2rem 0;
                    }
                    .hero-button {
                        padding: 0.9rem 2rem;
                        border-radius: 9999px;
                        font-weight: 600;
                        text-decoration: none;
                        transition: transform 0.2s ease, background 0.2s ease;
                    }
                    .hero-button:hover {
                        transform: scale(1.05);
                    }
                    .hero-button.primary {
                        background: #dc2626;
                        color: #fff;
                    }
                    .hero-button.secondary {
                        border: 1px solid #fff;
                        color: #fff;
                    }
                    .hero-tags {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                    }
                    .hero-tag {
                        padding: 0.4rem 1rem;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.08);
                        font-size: 0.85rem;
                    }
                    .hero-image img {
                        width: 100%;
                        max-width: 520px;
                        border-radius: 1.5rem;
                    }
                    .journey,
                    .services,
                    .testimonials,
                    .contact,
                    .cta,
                    .stat-band {
                        padding: 5rem 5%;
                        text-align: center;
                    }
                    .journey h2,
                    .services h2,
                    .testimonials h2,
                    .contact h2,
                    .cta h2 {
                        font-size: 3rem;
                        font-weight: 800;
                        margin-bottom: 1rem;
                    }
                    .section-lead,
                    .journey p,
                    .cta p {
                        color: #d1d5db;
                        font-size: 1.2rem;
                        max-width: 48rem;
                        margin: 0 auto 3rem;
                    }
                    .stat-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2rem;
                        max-width: 960px;
                        margin: 3rem auto 0;
                    }
                    .stat-value {
                        font-size: 2.5rem;
                        font-weight: 700;
                        margin: 0;
                    }
                    .stat-label {
                        color: #9ca3af;
                    }
                    .stat-band {
                        background: linear-gradient(90deg, #7f1d1d, #000, #7f1d1d);
                    }
                    .feature-row {
                        display: flex;
                        align-items: center;
                        gap: 4rem;
                        padding: 5rem 5%;
                    }
                    .feature-row.reversed {
                        flex-direction: row-reverse;
                    }
                    .feature-image,
                    .feature-text {
                        flex: 1;
                    }
                    .feature-image img {
                        width: 100%;
                        border-radius: 1.5rem;
                    }
                    .feature-text h2 {
                        font-size: 2.75rem;
                        font-weight: 800;
                    }
                    .feature-text p {
                        color: #d1d5db;
                        line-height: 1.8;
                    }
                    .card-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 2rem;
                        max-width: 1200px;
                        margin: 0 auto;
                        text-align: left;
                    }
                    .service-card,
                    .testimonial-card,
                    .contact-card {
                        padding: 2rem;
                        border-radius: 1.5rem;
                        background: linear-gradient(135deg, #111827, #1f2937);
                        border: 1px solid #374151;
                    }
                    .service-card ul {
                        list-style: none;
                        padding: 0;
                        color: #d1d5db;
                    }
                    .service-card li {
                        margin: 0.5rem 0;
                    }
                    .testimonial-head {
                        display: flex;
                        gap: 1rem;
                        align-items: center;
                    }
                    .testimonial-head img {
                        width: 64px;
                        height: 64px;
                        border-radius: 50%;
                        object-fit: cover;
                    }
                    .stars {
                        color: #facc15;
                        margin: 1rem 0;
                    }
                    @media (max-width: 768px) {
                        .hero,
                        .feature-row,
                        .feature-row.reversed {
                            flex-direction: column;
                        }
                        .hero h1 {
                            font-size: 2.5rem;
                        }
                        .stat-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                        .journey h2,
                        .services h2,
                        .testimonials h2,
                        .contact h2,
                        .cta h2 {
                            font-size: 2rem;
                        }
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_matches_whole_words_ignoring_case() {
        assert_eq!(
            title_words("Train Like a Pro", "pro"),
            vec![("Train", false), ("Like", false), ("a", false), ("Pro", true)]
        );
    }

    #[test]
    fn highlight_does_not_match_inside_words() {
        let words = title_words("Join Group Classes", "Class");
        assert!(words.iter().all(|(_, highlighted)| !highlighted));
    }

    #[test]
    fn testimonial_stars_follow_rating() {
        assert!(TESTIMONIALS.iter().all(|t| t.stars() == "★★★★★"));
        let unrated = Testimonial { rating: 0, ..TESTIMONIALS[0] };
        assert_eq!(unrated.stars(), "");
    }
}

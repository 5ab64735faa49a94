use yew::prelude::*;

use crate::components::faq::{FaqAccordion, FaqEntry};
use crate::components::motion::{use_scroll_to_top, Motion, Reveal};

const ABOUT_IMAGE: &str = "https://images.unsplash.com/photo-1558611848-73f7eb4001a1?ixlib=rb-4.0.3";

const CORE_VALUES: &[(&str, &str)] = &[
    (
        "Commitment to Goals",
        "We are relentlessly focused on helping you achieve your fitness milestones, providing the tools, support, and motivation you need to succeed.",
    ),
    (
        "Excellence in Training",
        "Our certified trainers are leaders in the industry, dedicated to delivering the highest quality coaching and personalized workout plans.",
    ),
    (
        "A Welcoming Community",
        "We've built a supportive environment where every member is family. We celebrate victories together and lift each other up on the journey.",
    ),
];

const ABOUT_FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "What are your operating hours?",
        answer: "We're open Monday through Friday from 5:00 AM to 11:00 PM, and weekends from 6:00 AM to 10:00 PM.",
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

#[function_component(About)]
pub fn about() -> Html {
    use_scroll_to_top();

    html! {
        <div class="about-page">
            <section class="about-hero" style={format!("background-image: url('{}');", ABOUT_IMAGE)}>
                <div class="about-hero-overlay"></div>
                <Reveal class="about-hero-content">
                    <h1>{"Our "}<span class="accent">{"Story"}</span></h1>
                    <p>{"More than a gym, we're a community dedicated to transformation."}</p>
                </Reveal>
            </section>

            <section class="about-intro">
                <Reveal>
                    <h2>{"A Vision Built on "}<span class="accent">{"Passion"}</span></h2>
                    <p>{"FFL Gym was founded on a simple belief: that fitness is a journey of self-improvement, not just a destination. We started with a mission to create a space that inspires, supports, and empowers individuals of all fitness levels to become the best versions of themselves. From our state-of-the-art facilities to our team of dedicated professionals, every aspect of our gym is designed to elevate your experience."}</p>
                </Reveal>
            </section>

            <section class="core-values">
                <Reveal>
                    <h2>{"Our "}<span class="accent">{"Core Values"}</span></h2>
                </Reveal>
                <div class="values-grid">
                    { for CORE_VALUES.iter().enumerate().map(|(index, (title, description))| html! {
                        <Reveal delay_ms={index as u32 * 200} class="value-card">
                            <h3>{*title}</h3>
                            <p>{*description}</p>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section class="philosophy">
                <Reveal motion={Motion::FromLeft}>
                    <h2>{"Our "}<span class="accent">{"Philosophy"}</span></h2>
                    <p>{"We believe that true fitness extends beyond the physical. It is a harmonious balance of mind, body, and community. Our approach integrates cutting-edge training methodologies with a supportive, inclusive environment, ensuring every member feels inspired to push their boundaries. We are committed to fostering a culture of positive change, one workout at a time."}</p>
                </Reveal>
            </section>

            <FaqAccordion items={ABOUT_FAQS} title="Common Questions" />

            <style>
                {r#"
                    .about-page {
                        background: #000;
                        color: #fff;
                    }
                    .about-page .accent {
                        color: #ef4444;
                    }
                    .about-hero {
                        position: relative;
                        height: 70vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background-size: cover;
                        background-position: center;
                        text-align: center;
                    }
                    .about-hero-overlay {
                        position: absolute;
                        inset: 0;
                        background: radial-gradient(circle, rgba(0, 0, 0, 0.4), rgba(0, 0, 0, 0.9));
                    }
                    .about-hero-content {
                        position: relative;
                    }
                    .about-hero h1 {
                        font-size: 4.5rem;
                        font-weight: 800;
                        margin: 0;
                    }
                    .about-hero p {
                        font-size: 1.3rem;
                        color: #d1d5db;
                    }
                    .about-intro,
                    .core-values,
                    .philosophy {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 5rem 1.5rem;
                        text-align: center;
                    }
                    .about-page h2 {
                        font-size: 2.75rem;
                        font-weight: 800;
                    }
                    .about-intro p,
                    .philosophy p {
                        color: #d1d5db;
                        font-size: 1.15rem;
                        line-height: 1.8;
                    }
                    .values-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 2rem;
                        margin-top: 3rem;
                    }
                    .value-card {
                        padding: 2rem;
                        border-radius: 1.5rem;
                        background: linear-gradient(135deg, #111827, #1f2937);
                        border: 1px solid #374151;
                        text-align: left;
                    }
                    .value-card p {
                        color: #9ca3af;
                        line-height: 1.6;
                    }
                    @media (max-width: 768px) {
                        .about-hero h1 {
                            font-size: 3rem;
                        }
                        .about-page h2 {
                            font-size: 2rem;
                        }
                    }
                "#}
            </style>
        </div>
    }
}

use leptos::prelude::*;
use leptos_meta::{Link, Meta, MetaTags, Stylesheet, Title, provide_meta_context};

use crate::ui::sections::{
    ContactSection, FeaturesSection, Footer, HeroSection, NewsletterSection, PricingSection,
    ScheduleSection, TestimonialsSection, TrainersSection,
};
use crate::ui::{Header, MobileMenu, SiteStyles, provide_nav_context, provide_scroll_context};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Page-wide scroll progress: the single writer every parallax and
    // layout consumer reads from
    let _scroll = provide_scroll_context();

    // Navigation context owned by the root page and threaded to every
    // section and control through Leptos context
    let _nav = provide_nav_context();

    view! {
        // injects a stylesheet into the document <head>
        <Stylesheet id="leptos" href="/pkg/nexus-fitness.css"/>

        <SeoMeta />

        <div class="relative min-h-screen bg-black text-white overflow-hidden">
            <BackgroundDecor />

            <Header />
            <MobileMenu />

            <main>
                <HeroSection />
                <FeaturesSection />
                <TrainersSection />
                <ScheduleSection />
                <PricingSection />
                <TestimonialsSection />
                <NewsletterSection />
                <ContactSection />
            </main>

            <Footer />

            <SiteStyles />
        </div>
    }
}

/// SEO meta tags using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="NEXUS Fitness - Train Smarter, Live Stronger" />

        <Meta name="description" content="Experience the next evolution in fitness with cutting-edge equipment, personalized training, and a community that pushes you beyond your limits." />
        <Meta name="keywords" content="gym, fitness, personal training, HIIT, yoga, bodybuilding, membership, classes" />

        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="NEXUS Fitness - Train Smarter, Live Stronger" />
        <Meta property="og:description" content="Cutting-edge equipment, expert trainers, and classes for every fitness level. Join the future of fitness." />

        <Link rel="canonical" href="https://nexusfitness.example.com/" />

        // JSON-LD structured data
        <script type="application/ld+json" inner_html=structured_data() />
    }
}

/// schema.org description of the gym, serialized once at render
fn structured_data() -> String {
    serde_json::json!({
        "@context": "https://schema.org",
        "@type": "HealthClub",
        "name": "NEXUS Fitness",
        "description": "Cutting-edge equipment, expert trainers, and classes for every fitness level.",
        "address": {
            "@type": "PostalAddress",
            "streetAddress": "123 Fitness Avenue",
            "addressLocality": "New York",
            "postalCode": "10001"
        },
        "telephone": "(555) 123-4567",
        "email": "info@nexusfitness.com"
    })
    .to_string()
}

/// Fixed background: radial wash plus accent edge lines
#[component]
fn BackgroundDecor() -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-0 pointer-events-none" aria-hidden="true">
            <div class="absolute inset-0 bg-[radial-gradient(ellipse_at_center,_var(--tw-gradient-stops))] from-neutral-900 via-black to-black"></div>
            <div class="absolute inset-0 opacity-30">
                <div class="absolute top-0 left-0 right-0 h-px bg-gradient-to-r from-transparent via-red-500 to-transparent"></div>
                <div class="absolute bottom-0 left-0 right-0 h-px bg-gradient-to-r from-transparent via-red-500 to-transparent"></div>
                <div class="absolute top-0 bottom-0 left-0 w-px bg-gradient-to-b from-transparent via-red-500 to-transparent"></div>
                <div class="absolute top-0 bottom-0 right-0 w-px bg-gradient-to-b from-transparent via-red-500 to-transparent"></div>
            </div>
        </div>
    }
}

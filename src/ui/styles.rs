//! CSS for the interaction layer
//!
//! One `<style>` block carrying the reveal, magnetic, menu, and hero
//! animation classes. Page chrome and layout utilities come from the
//! compiled stylesheet; only the animation-specific rules live here.

use leptos::prelude::*;

#[component]
pub fn SiteStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            /* One-shot reveal targets */
            .reveal-target {
                opacity: 0;
                transform: translateY(20px);
                transition-property: opacity, transform;
                transition-timing-function: ease-out;
            }

            .reveal-target.visible {
                opacity: 1;
                transform: translateY(0);
            }

            /* Magnetic buttons */
            .magnetic-btn {
                position: relative;
                overflow: hidden;
                padding: 0.75rem 1.5rem;
                font-weight: 600;
                font-size: 0.875rem;
                border-radius: 0.5rem;
                cursor: pointer;
                transition: box-shadow 0.3s;
            }

            .magnetic-btn .magnetic-content {
                position: relative;
                z-index: 1;
            }

            .magnetic-glow {
                box-shadow: 0 0 15px rgba(255, 0, 64, 0.5);
            }

            .magnetic-overlay {
                position: absolute;
                inset: 0;
                background: linear-gradient(to right, rgba(239, 68, 68, 0.2), rgba(168, 85, 247, 0.2));
                animation: overlay-fade-in 0.3s ease-out;
            }

            .btn-gradient {
                color: white;
                border: 0;
                background-image: linear-gradient(to right, #ef4444, #dc2626);
            }

            .btn-gradient:hover {
                background-image: linear-gradient(to right, #dc2626, #b91c1c);
            }

            .btn-outline {
                color: white;
                background: transparent;
                border: 1px solid #404040;
            }

            .btn-outline:hover {
                background: rgba(23, 23, 23, 0.5);
            }

            /* Hover-overlay cards */
            .hover-card {
                position: relative;
                overflow: hidden;
                transition: transform 0.5s, box-shadow 0.5s;
            }

            .hover-card.card-lift {
                transform: translateY(-10px);
            }

            .hover-card.card-glow {
                box-shadow: 0 0 30px rgba(255, 0, 64, 0.3);
            }

            .card-overlay {
                position: absolute;
                inset: 0;
                pointer-events: none;
                animation: overlay-fade-in 0.3s ease-out;
            }

            .card-overlay-wash {
                background: linear-gradient(to bottom right, rgba(239, 68, 68, 0.1), transparent);
            }

            .card-overlay-frame {
                border: 2px solid #ef4444;
                border-radius: 0.75rem;
            }

            .trainer-portrait {
                transition: transform 0.5s;
            }

            .hover-card:hover .trainer-portrait {
                transform: scale(1.05);
            }

            @keyframes overlay-fade-in {
                from { opacity: 0; }
                to { opacity: 1; }
            }

            /* Mobile menu transitions */
            .mobile-menu {
                animation: menu-enter 0.2s ease-out;
            }

            .mobile-menu.menu-leaving {
                animation: menu-exit 0.2s ease-in forwards;
            }

            @keyframes menu-enter {
                from { opacity: 0; transform: translateY(-20px); }
                to { opacity: 1; transform: translateY(0); }
            }

            @keyframes menu-exit {
                from { opacity: 1; transform: translateY(0); }
                to { opacity: 0; transform: translateY(-20px); }
            }

            /* Hero scene */
            .hero-visual {
                will-change: opacity, transform;
            }

            .hero-float {
                animation: hero-float 4s ease-in-out infinite;
            }

            @keyframes hero-float {
                0%, 100% { transform: translateY(0) rotate(-4deg); }
                50% { transform: translateY(-14px) rotate(4deg); }
            }

            .hero-scroll-hint {
                animation: hint-bounce 2s ease-in-out infinite;
            }

            @keyframes hint-bounce {
                0%, 100% { transform: translateY(0); }
                50% { transform: translateY(10px); }
            }

            .sparkle {
                position: absolute;
                width: 3px;
                height: 3px;
                border-radius: 9999px;
                background-color: #ff0040;
                animation: sparkle-twinkle 3s ease-in-out infinite;
            }

            @keyframes sparkle-twinkle {
                0%, 100% { opacity: 0.1; }
                50% { opacity: 0.9; }
            }

            /* Schedule day tabs */
            .day-tab {
                padding: 0.5rem 0;
                font-size: 0.875rem;
                font-weight: 600;
                color: #a3a3a3;
                border-bottom: 2px solid transparent;
                transition: color 0.2s, border-color 0.2s;
            }

            .day-tab:hover {
                color: white;
            }

            .day-tab-active {
                color: #ef4444;
                border-bottom-color: #ef4444;
            }

            /* Testimonial carousel controls */
            .carousel-arrow {
                display: flex;
                align-items: center;
                justify-content: center;
                width: 2.5rem;
                height: 2.5rem;
                border-radius: 9999px;
                border: 1px solid #404040;
                color: #a3a3a3;
                transition: color 0.2s, border-color 0.2s;
            }

            .carousel-arrow:hover {
                color: #ef4444;
                border-color: #ef4444;
            }

            .carousel-dot {
                width: 0.5rem;
                height: 0.5rem;
                border-radius: 9999px;
                background-color: #404040;
                transition: background-color 0.2s;
            }

            .carousel-dot-active {
                background-color: #ef4444;
            }

            /* Form fields */
            .form-input {
                padding: 0.625rem 1rem;
                border-radius: 0.5rem;
                background-color: rgba(23, 23, 23, 0.5);
                border: 1px solid #404040;
                color: white;
            }

            .form-input::placeholder {
                color: #737373;
            }

            .form-input:focus {
                outline: none;
                border-color: #ef4444;
                box-shadow: 0 0 0 2px rgba(239, 68, 68, 0.2);
            }
            "#
        </style>
    }
}

pub mod counter;
pub mod faq;
pub mod hero_stats;
pub mod loading_overlay;
pub mod nav_bar;
pub mod notification;
pub mod profile_image;
pub mod review_form;
pub mod reviews_list;
pub mod scroll_effects;
pub mod typewriter;

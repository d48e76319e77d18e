//! UI Components

pub mod activity_card;
pub mod loading;
pub mod notice;
pub mod signup_form;

pub use activity_card::ActivityCard;
pub use loading::Loading;
pub use notice::NoticeBanner;
pub use signup_form::SignupPanel;

mod cta;
mod features;
mod hero;
mod overview;
mod statics;
mod testimonials;
mod video_demo;

pub use cta::Cta;
pub use features::Features;
pub use hero::Hero;
pub use overview::PlatformOverview;
pub use statics::{PricingSection, StatsBand, StatusStrip};
pub use testimonials::Testimonials;
pub use video_demo::VideoDemo;

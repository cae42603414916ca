mod about;
mod episode_detail;
mod home;

pub use about::About;
pub use episode_detail::EpisodeDetail;
pub use home::Home;

mod health;
mod redirect;

pub use health::health_handler;
pub use redirect::{home_page, redirect_handler, HOME_PAGE};

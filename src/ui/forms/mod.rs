//! Form rendering module
//!
//! - `field_renderer`: input boxes with their validation message
//! - `signup_form`: the registration form and its technology rows

mod field_renderer;
mod signup_form;

pub use signup_form::draw as draw_signup_form;

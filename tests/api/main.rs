//! tests/api/main.rs

mod check_nickname;
mod helpers;
mod submit_form;

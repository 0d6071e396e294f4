//! Activity Board Frontend Entry Point

use activity_board_ui::{logging, App};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}

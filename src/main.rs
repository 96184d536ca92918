use leptos::prelude::*;
use skill_network_portfolio::{App, init_logging};

fn main() {
	init_logging();
	mount_to_body(App);
}

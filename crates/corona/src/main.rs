use corona::config;
use corona::gui::app::AppModel;
use corona::sys::runtime;
use relm4::prelude::*;

fn main() {
    env_logger::init();

    let config = config::load_or_setup();

    let (tx, rx) = async_channel::bounded(32);
    runtime::start_background_services(tx);

    RelmApp::new("org.troia.corona").run::<AppModel>((config, rx));
}

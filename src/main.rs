use mathgrid::config::GameConfig;
use mathgrid::ui;

fn main() {
    env_logger::init();
    log::info!("mathgrid starting");

    if let Err(err) = ui::run(GameConfig::default()) {
        eprintln!("mathgrid: {err}");
        std::process::exit(1);
    }
}

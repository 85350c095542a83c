use macroquad::prelude::*;
use life_sandbox::{
    Phase, SimConfig, SimulationController,
    rendering::{self, GridLayout},
    input, ui,
};

fn window_conf() -> Conf {
    Conf {
        window_title: ui::TITLE.to_owned(),
        window_width: ui::WINDOW_WIDTH,
        window_height: ui::WINDOW_HEIGHT,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SimConfig::default();
    let mut sim = match SimulationController::new(&config) {
        Ok(sim) => sim,
        Err(err) => {
            log::error!("cannot start simulation: {err}");
            return;
        }
    };
    log::info!(
        "{}x{} grid, one generation every {}s",
        config.rows, config.cols, config.tick_interval
    );

    loop {
        let mouse_pos = mouse_position();
        let (rows, cols) = sim.grid().dimensions();
        let layout = GridLayout::fit(rows, cols, screen_width(), screen_height());
        let start_button = ui::start_button(screen_width(), screen_height());

        for command in input::poll_commands(sim.phase(), &layout, &start_button, mouse_pos) {
            if let Err(err) = sim.apply(command) {
                log::warn!("{command:?} rejected: {err}");
            }
        }

        if let Err(err) = sim.frame(get_frame_time()) {
            log::error!("generation step failed: {err}");
        }

        clear_background(BLACK);
        match sim.phase() {
            Phase::Menu => rendering::draw_menu(&start_button, mouse_pos),
            _ => {
                rendering::draw_grid(sim.grid(), &layout);
                rendering::draw_status(&sim);
            }
        }

        next_frame().await;
    }
}

use anyhow::Result;
use clap::Parser;
use lattice_life::{Simulation, SimulationConfig, domain::Rule, rendering};
use macroquad::prelude::*;
use tracing::{error, info};

fn window_conf() -> Conf {
    Conf {
        window_title: "Lattice Life".to_owned(),
        window_width: 800,
        window_height: 824,
        window_resizable: true,
        ..Default::default()
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn setup(config: &SimulationConfig) -> Result<Simulation> {
    let automaton = config.build_automaton()?;
    let interval = config.interval_secs()?;

    let (length, width) = automaton.lattice().dimensions();
    info!(
        rule = automaton.rule().name(),
        length,
        width,
        steps = config.steps,
        interval_ms = config.interval_ms,
        seed = ?config.seed,
        "starting simulation"
    );
    if config.print_kernel {
        if let Some(kernel) = automaton.rule().kernel() {
            info!(radius = kernel.radius(), weights = ?kernel.weights(), "kernel in use");
        }
    }

    Ok(Simulation::new(automaton, config.steps, interval))
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();
    let config = SimulationConfig::parse();

    let mut sim = match setup(&config) {
        Ok(sim) => sim,
        Err(err) => {
            error!("{err:#}");
            std::process::exit(1);
        }
    };

    let mut reported = false;
    loop {
        if is_key_pressed(KeyCode::Escape) || is_key_pressed(KeyCode::Q) {
            break;
        }
        if is_key_pressed(KeyCode::Space) {
            sim = sim.toggle_running();
        }

        sim = sim.tick(get_frame_time());
        if sim.is_finished() && !reported {
            info!(
                generation = sim.automaton().generation(),
                alive = sim.automaton().lattice().alive_count(),
                "frame budget spent"
            );
            reported = true;
        }

        clear_background(BLACK);
        rendering::draw_lattice(sim.automaton().lattice());
        rendering::draw_status(&sim);

        next_frame().await;
    }
}

#[macro_use]
extern crate log;
extern crate custom_error;

pub mod config;
pub mod dispatch;
pub mod protocol;
pub mod ui;

use std::env;
use std::process;

use env_logger::Env;

use minipaint_core::history::stroke_log::StrokeLog;
use minipaint_core::models::canvas::Canvas;
use minipaint_core::utils::print_intro;

use config::{Config, Role};
use dispatch::{run, Dispatcher};
use protocol::socket::{ClientSocket, RelaySocket, Transport};
use ui::window::WindowFrontend;

const DEFAULT_LOGGING_LEVEL: &str = "info";

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOGGING_LEVEL)).init();
    print_intro();

    let args: Vec<String> = env::args().skip(1).collect();
    debug!("args are: {:?}", args);

    let config = match Config::from_args(&args) {
        Ok(v) => v,
        Err(err) => {
            error!("{}", err);
            error!("usage:\nminipaint relay --port=50001\nminipaint client --port=55000 --relay=127.0.0.1:50001 --username=alice");
            process::exit(2);
        }
    };
    info!("starting as {:?} ({})", config.role, config.username);

    match config.role {
        Role::Relay => match RelaySocket::bind(config.port, &config.username) {
            Ok(relay) => run_session(&config, relay),
            Err(err) => {
                error!("could not start relay: {}", err);
                process::exit(1);
            }
        },
        Role::Client => {
            let mut client = match ClientSocket::bind(config.port, &config.username) {
                Ok(v) => v,
                Err(err) => {
                    error!("could not start client: {}", err);
                    process::exit(1);
                }
            };
            if let Err(err) = client.join(config.relay) {
                warn!("could not join relay at {}: {}", config.relay, err);
            }
            run_session(&config, client);
        },
    }

    info!("done");
}

fn run_session<T: Transport>(config: &Config, transport: T) {
    let log = match config.history_limit {
        Some(limit) => StrokeLog::with_history_limit(limit),
        None => StrokeLog::new(),
    };
    let canvas = Canvas::new(config.width, config.height);
    let (width, height) = (canvas.width(), canvas.height());
    let mut dispatcher = Dispatcher::new(canvas, log, transport)
        .with_packets_per_tick(config.packets_per_tick);

    let title = format!("minipaint - {}", config.username);
    let mut frontend = match WindowFrontend::open(&title, width, height) {
        Ok(v) => v,
        Err(err) => {
            error!("{}", err);
            dispatcher.apply_local(protocol::message::Packet::Quit);
            return;
        }
    };

    run(&mut dispatcher, &mut frontend);
}

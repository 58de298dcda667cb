use actix::prelude::*;
use clap::Parser;
use colored::Color;
use common::logger::Logger;
use dashboard::api::{HttpOrderApi, InMemoryOrderApi};
use dashboard::config::{Cli, DashboardConfig};
use dashboard::dashboard_actors::dashboard::Dashboard;
use dashboard::dashboard_actors::ui_handler::UIHandler;
use dashboard::messages::messages::Subscribe;
use std::io;
use tokio::signal::ctrl_c;
use tokio::sync::oneshot;

#[actix::main]
async fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let logger = Logger::new("Main", Color::White);
    if let Some(raw) = cli.role.as_deref() {
        if common::types::role::Role::parse(raw).is_none() {
            logger.warn(format!("Unknown role {:?}, continuing without one", raw));
        }
    }
    let config = DashboardConfig::from(cli);

    let dashboard = if config.demo {
        logger.info("Using the in-memory demo backend (orders ORD-1 to ORD-6)");
        Dashboard::new(InMemoryOrderApi::demo(), &config)
    } else {
        logger.info(format!("Using the order API at {}", config.api_url));
        let api = HttpOrderApi::new(&config).map_err(io::Error::other)?;
        Dashboard::new(api, &config)
    };
    let dashboard = dashboard.start();

    let (quit_tx, quit_rx) = oneshot::channel();
    let ui = UIHandler::new(dashboard.clone(), quit_tx).start();
    dashboard.do_send(Subscribe(ui.recipient()));

    tokio::select! {
        _ = ctrl_c() => {
            logger.info("Ctrl-C received, shutting down...");
        }
        _ = quit_rx => {}
    }
    System::current().stop();

    Ok(())
}

use crate::dashboard_actors::dashboard::Dashboard;
use crate::errors::DashboardError;
use crate::messages::internal_messages::UiCommand;
use crate::messages::messages::{DashboardChanged, SearchOrder, UpdateStatus};
use crate::render::render_dashboard;
use crate::state::DashboardState;
use actix::prelude::*;
use colored::Color;
use common::logger::Logger;
use common::types::order_status::OrderStatus;
use common::utils::print_welcome_message;
use common::views::OrderView;
use std::io::{self, BufRead};
use std::thread;
use tokio::sync::{mpsc, oneshot};
use tokio_stream::wrappers::UnboundedReceiverStream;

/// Actor UIHandler: terminal front of a [`Dashboard`].
///
/// Reads commands from stdin, forwards them and redraws the screen every time
/// the dashboard publishes a new state.
pub struct UIHandler {
    pub dashboard: Addr<Dashboard>,
    /// Last state published by the dashboard.
    pub last_state: Option<DashboardState>,
    /// Fired once when the user leaves.
    pub quit: Option<oneshot::Sender<()>>,
    pub read_stdin: bool,
    pub logger: Logger,
}

impl UIHandler {
    pub fn new(dashboard: Addr<Dashboard>, quit: oneshot::Sender<()>) -> Self {
        UIHandler {
            dashboard,
            last_state: None,
            quit: Some(quit),
            read_stdin: true,
            logger: Logger::new("UI", Color::Green),
        }
    }

    fn redraw(&self) {
        if let Some(state) = &self.last_state {
            println!("\n{}\n", render_dashboard(state));
        }
    }

    fn search(&self, order_id: String, ctx: &mut Context<Self>) {
        let request = self.dashboard.send(SearchOrder { order_id });
        ctx.spawn(request.into_actor(self).map(|result, act, _ctx| {
            act.report(result.map(|r| r.map(|_| ())));
        }));
    }

    fn send_update(&self, status: OrderStatus, ctx: &mut Context<Self>) {
        let request = self.dashboard.send(UpdateStatus { status });
        ctx.spawn(request.into_actor(self).map(|result, act, _ctx| {
            act.report(result.map(|r| r.map(|_| ())));
        }));
    }

    /// Goes through the seller view's action surface when there is one, so
    /// disabled actions never produce a request.
    fn update(&self, status: OrderStatus, ctx: &mut Context<Self>) {
        match self.last_state.as_ref().and_then(DashboardState::view) {
            Some(OrderView::Seller(view)) => {
                if !view.press(status, |status| self.send_update(status, ctx)) {
                    let reason = if view.loading {
                        "a request is already in progress"
                    } else {
                        "the order already has that status"
                    };
                    self.logger.warn(format!("Cannot set {}: {}.", status, reason));
                }
            }
            // Without a seller view the dashboard rejects the update itself.
            _ => self.send_update(status, ctx),
        }
    }

    fn report(&self, result: Result<Result<(), DashboardError>, MailboxError>) {
        match result {
            Ok(Err(DashboardError::RequestInFlight)) => {
                self.logger.warn(DashboardError::RequestInFlight.to_string())
            }
            // other errors are already on screen as the error banner
            Ok(_) => {}
            Err(e) => self.logger.error(format!("Dashboard unreachable: {}", e)),
        }
    }

    fn leave(&mut self) {
        self.logger.info("Bye!");
        if let Some(quit) = self.quit.take() {
            let _ = quit.send(());
        }
    }
}

impl Actor for UIHandler {
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        self.logger.info("UIHandler started!");
        if self.read_stdin {
            print_welcome_message();
            // Plain thread: a blocking stdin read must not keep the runtime
            // alive on shutdown.
            let (tx, rx) = mpsc::unbounded_channel();
            thread::spawn(move || {
                for line in io::stdin().lock().lines() {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
            });
            ctx.add_stream(UnboundedReceiverStream::new(rx));
        }
    }
}

impl StreamHandler<Result<String, io::Error>> for UIHandler {
    fn handle(&mut self, item: Result<String, io::Error>, ctx: &mut Self::Context) {
        match item {
            Ok(line) => {
                if let Some(command) = UiCommand::parse(&line) {
                    ctx.notify(command);
                }
            }
            Err(e) => self.logger.error(format!("Error while reading input: {}", e)),
        }
    }

    fn finished(&mut self, _ctx: &mut Self::Context) {
        self.leave();
    }
}

impl Handler<UiCommand> for UIHandler {
    type Result = ();

    fn handle(&mut self, msg: UiCommand, ctx: &mut Self::Context) -> Self::Result {
        match msg {
            UiCommand::Search(order_id) => self.search(order_id, ctx),
            UiCommand::Update(status) => self.update(status, ctx),
            UiCommand::Show => self.redraw(),
            UiCommand::Help => print_welcome_message(),
            UiCommand::Quit => self.leave(),
            UiCommand::Invalid(reason) => self.logger.warn(format!(
                "{}. Type `help` to list the commands.",
                reason
            )),
        }
    }
}

impl Handler<DashboardChanged> for UIHandler {
    type Result = ();

    fn handle(&mut self, msg: DashboardChanged, _ctx: &mut Self::Context) -> Self::Result {
        self.last_state = Some(msg.state);
        self.redraw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::InMemoryOrderApi;
    use crate::config::DashboardConfig;
    use crate::messages::messages::{GetSnapshot, Subscribe};
    use common::types::role::Role;
    use std::time::Duration;

    struct GetLastState;

    impl Message for GetLastState {
        type Result = Option<DashboardState>;
    }

    impl Handler<GetLastState> for UIHandler {
        type Result = MessageResult<GetLastState>;

        fn handle(&mut self, _msg: GetLastState, _ctx: &mut Self::Context) -> Self::Result {
            MessageResult(self.last_state.clone())
        }
    }

    fn setup(
        api: &InMemoryOrderApi,
        role: Role,
    ) -> (Addr<Dashboard>, Addr<UIHandler>, oneshot::Receiver<()>) {
        let config = DashboardConfig {
            role: Some(role),
            ..DashboardConfig::default()
        };
        let dashboard = Dashboard::new(api.clone(), &config).start();
        let (tx, rx) = oneshot::channel();
        let mut ui = UIHandler::new(dashboard.clone(), tx);
        ui.read_stdin = false;
        let ui = ui.start();
        dashboard.do_send(Subscribe(ui.clone().recipient()));
        (dashboard, ui, rx)
    }

    async fn settle() {
        actix_rt::time::sleep(Duration::from_millis(30)).await;
    }

    #[actix_rt::test]
    async fn test_commands_drive_the_dashboard() {
        let api = InMemoryOrderApi::new().with_order("ORD-1", OrderStatus::Packed);
        let (dashboard, ui, _rx) = setup(&api, Role::Seller);

        ui.send(UiCommand::Search("ORD-1".to_string())).await.unwrap();
        settle().await;
        ui.send(UiCommand::Update(OrderStatus::Shipped)).await.unwrap();
        settle().await;

        let state = dashboard.send(GetSnapshot).await.unwrap();
        assert_eq!(state.status, Some(OrderStatus::Shipped.into()));
        let seen = ui.send(GetLastState).await.unwrap().unwrap();
        assert_eq!(seen.status, Some(OrderStatus::Shipped.into()));
    }

    #[actix_rt::test]
    async fn test_current_status_button_sends_nothing() {
        let api = InMemoryOrderApi::new().with_order("ORD-1", OrderStatus::Packed);
        let (_dashboard, ui, _rx) = setup(&api, Role::Seller);

        ui.send(UiCommand::Search("ORD-1".to_string())).await.unwrap();
        settle().await;
        ui.send(UiCommand::Update(OrderStatus::Packed)).await.unwrap();
        settle().await;

        assert_eq!(api.calls(), 1);
    }

    #[actix_rt::test]
    async fn test_quit_fires_once() {
        let api = InMemoryOrderApi::new();
        let (_dashboard, ui, rx) = setup(&api, Role::Customer);

        ui.send(UiCommand::Quit).await.unwrap();
        ui.send(UiCommand::Quit).await.unwrap();
        assert!(rx.await.is_ok());
    }
}

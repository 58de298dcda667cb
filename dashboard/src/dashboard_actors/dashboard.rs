use crate::api::OrderApi;
use crate::config::DashboardConfig;
use crate::errors::DashboardError;
use crate::messages::messages::{
    DashboardChanged, GetSnapshot, SearchOrder, Subscribe, UpdateStatus,
};
use crate::state::DashboardState;
use actix::prelude::*;
use colored::Color;
use common::logger::Logger;
use common::types::order_status::{OrderStatus, ReportedStatus};
use std::time::Duration;

/// The `Dashboard` actor owns the [`DashboardState`] of one session and talks
/// to the order-status backend on its behalf.
///
/// # Responsibilities
/// - Validates search and update actions before any request is sent.
/// - Runs one request at a time; actions arriving meanwhile are rejected.
/// - Turns backend failures into user-facing errors and logs the cause.
/// - Clears the success notice after `notice_ttl`.
/// - Publishes every state change to its subscriber.
pub struct Dashboard {
    pub state: DashboardState,
    pub api: Box<dyn OrderApi>,
    /// How long a success notice stays visible.
    pub notice_ttl: Duration,
    /// Pending auto-clear of the success notice.
    pub notice_timer: Option<SpawnHandle>,
    pub subscriber: Option<Recipient<DashboardChanged>>,
    pub logger: Logger,
}

impl Dashboard {
    pub fn new(api: impl OrderApi + 'static, config: &DashboardConfig) -> Self {
        let logger = Logger::new("Dashboard", Color::Cyan);
        match config.role {
            Some(role) => logger.info(format!("Session role: {}", role)),
            None => logger.warn("No recognized session role, only search is available"),
        }
        Self {
            state: DashboardState::new(config.role),
            api: Box::new(api),
            notice_ttl: config.notice_ttl,
            notice_timer: None,
            subscriber: None,
            logger,
        }
    }

    fn publish(&self) {
        if let Some(subscriber) = &self.subscriber {
            subscriber.do_send(DashboardChanged {
                state: self.state.clone(),
            });
        }
    }

    fn cancel_notice_timer(&mut self, ctx: &mut Context<Self>) {
        if let Some(handle) = self.notice_timer.take() {
            ctx.cancel_future(handle);
        }
    }

    /// Clears the success notice after `notice_ttl`, replacing any earlier
    /// timer.
    fn schedule_notice_clear(&mut self, ctx: &mut Context<Self>) {
        self.cancel_notice_timer(ctx);
        let handle = ctx.run_later(self.notice_ttl, |act, _ctx| {
            act.notice_timer = None;
            act.state.clear_success();
            act.publish();
        });
        self.notice_timer = Some(handle);
    }

    /// Reports a rejected action. Only a pending request leaves the state
    /// untouched, so there is nothing to publish for it.
    fn reject<T: 'static>(
        &self,
        err: DashboardError,
    ) -> ResponseActFuture<Self, Result<T, DashboardError>> {
        if err == DashboardError::RequestInFlight {
            self.logger.warn("Request ignored, another one is still in flight");
        } else {
            self.logger.warn(format!("Rejected: {}", err));
            self.publish();
        }
        Box::pin(actix::fut::ready(Err(err)))
    }
}

impl Actor for Dashboard {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        self.logger.info("Dashboard started");
    }

    fn stopping(&mut self, ctx: &mut Self::Context) -> Running {
        self.cancel_notice_timer(ctx);
        Running::Stop
    }
}

impl Handler<Subscribe> for Dashboard {
    type Result = ();

    fn handle(&mut self, msg: Subscribe, _ctx: &mut Self::Context) -> Self::Result {
        self.subscriber = Some(msg.0);
        self.publish();
    }
}

impl Handler<GetSnapshot> for Dashboard {
    type Result = MessageResult<GetSnapshot>;

    fn handle(&mut self, _msg: GetSnapshot, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(self.state.clone())
    }
}

impl Handler<SearchOrder> for Dashboard {
    type Result = ResponseActFuture<Self, Result<ReportedStatus, DashboardError>>;

    fn handle(&mut self, msg: SearchOrder, ctx: &mut Self::Context) -> Self::Result {
        let order_id = match self.state.begin_search(&msg.order_id) {
            Ok(order_id) => order_id,
            Err(err) => return self.reject(err),
        };
        self.cancel_notice_timer(ctx);
        self.logger.info(format!("Searching order {}", order_id));
        self.publish();

        let fut = self.api.fetch_status(order_id.clone());
        Box::pin(fut.into_actor(self).map(move |result, act, _ctx| {
            let outcome = match result {
                Ok(Some(status)) => {
                    act.logger.info(format!("Order {} is {}", order_id, status));
                    act.state.search_succeeded(Some(status.clone()));
                    Ok(status)
                }
                Ok(None) => {
                    act.logger.warn(format!("Order {} not found", order_id));
                    act.state.search_succeeded(None);
                    Err(DashboardError::NotFound)
                }
                Err(err) => {
                    act.logger.error(format!(
                        "Status lookup of order {} failed: {}",
                        order_id, err
                    ));
                    act.state.search_failed();
                    Err(DashboardError::SearchFailed)
                }
            };
            act.publish();
            outcome
        }))
    }
}

impl Handler<UpdateStatus> for Dashboard {
    type Result = ResponseActFuture<Self, Result<OrderStatus, DashboardError>>;

    fn handle(&mut self, msg: UpdateStatus, ctx: &mut Self::Context) -> Self::Result {
        let (order_id, status) = match self.state.begin_update(msg.status) {
            Ok(request) => request,
            Err(err) => return self.reject(err),
        };
        self.cancel_notice_timer(ctx);
        self.logger.info(format!("Updating order {} to {}", order_id, status));
        self.publish();

        let fut = self.api.update_status(order_id.clone(), status);
        Box::pin(fut.into_actor(self).map(move |result, act, ctx| {
            let outcome = match result {
                Ok(()) => {
                    act.state.update_succeeded();
                    act.logger.info(format!("Order {} updated to {}", order_id, status));
                    act.schedule_notice_clear(ctx);
                    Ok(status)
                }
                Err(err) => {
                    act.logger.error(format!(
                        "Status update of order {} failed: {}",
                        order_id, err
                    ));
                    act.state.update_failed();
                    Err(DashboardError::UpdateFailed)
                }
            };
            act.publish();
            outcome
        }))
    }
}

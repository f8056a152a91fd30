//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use lapak_app::{context::AppContext, domain::purchases::MockPurchasesService};

use crate::state::State;

pub(crate) fn state_with_purchases(purchases: MockPurchasesService) -> Arc<State> {
    State::from_app_context(AppContext {
        purchases: Arc::new(purchases),
    })
}

pub(crate) fn purchases_service(purchases: MockPurchasesService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_purchases(purchases)))
            .push(route),
    )
}

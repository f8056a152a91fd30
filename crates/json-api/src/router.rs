//! App Router

use salvo::Router;

use crate::purchases;

pub(crate) fn app_router() -> Router {
    Router::with_path("v1").push(
        Router::with_path("purchase")
            .post(purchases::create::handler)
            .push(Router::with_path("{purchase}").post(purchases::pay::handler)),
    )
}

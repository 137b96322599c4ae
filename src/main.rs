use khana_session::config::AppConfig;
use khana_session::lifecycle::{setup_tracing, RestaurantSystem, SystemError};
use khana_session::model::{Category, OrderStatus};
use khana_session::session_actor::SessionError;
use thiserror::Error;
use tracing::{info, warn, Instrument};

#[derive(Debug, Error)]
enum DemoError {
    #[error(transparent)]
    System(#[from] SystemError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

#[tokio::main]
async fn main() -> Result<(), DemoError> {
    setup_tracing();

    let config = AppConfig::from_env().map_err(SystemError::from)?;
    let tick = config.session.tick_interval;
    info!(?tick, "Starting KhanaDarshan");

    let system = RestaurantSystem::from_config(config)?;
    let sessions = system.sessions.clone();

    let session = sessions.open_session(Some("Asha".to_string())).await?;

    // Fill the cart: two of the first main, one of the first dessert.
    let span = tracing::info_span!("cart", %session);
    async {
        let mains = system.catalog.by_category(Some(Category::Main));
        let desserts = system.catalog.by_category(Some(Category::Dessert));
        for item in mains.iter().take(1).chain(desserts.iter().take(1)) {
            sessions.add_item(session, (*item).clone()).await?;
        }
        if let Some(main) = mains.first() {
            sessions.add_item(session, (*main).clone()).await?;
        }
        let total = sessions.cart_total(session).await?;
        let count = sessions.cart_count(session).await?;
        info!(total, count, "Cart ready");
        Ok::<_, SessionError>(())
    }
    .instrument(span)
    .await?;

    let Some(order) = sessions.place_order(session).await? else {
        warn!("Cart was empty, nothing to order");
        sessions.close_session(session).await?;
        return Ok(system.shutdown().await?);
    };
    info!(order_id = %order.id, eta_minutes = order.estimated_minutes, "Watching order");

    if let Some(mut chef) = system.concierge() {
        if let Some(reply) = chef.ask("Something spicy but not too heavy?").await {
            info!(%reply, "Chef says");
        }
    }

    let mut last = OrderStatus::Placed;
    loop {
        tokio::time::sleep(tick / 2).await;
        let status = match sessions.active_order(session).await? {
            Some(order) => order.status,
            None => break,
        };
        if status != last {
            info!(%status, progress = status.progress(), "Status changed");
            last = status;
        }
        if status.is_terminal() {
            break;
        }
    }

    sessions.close_session(session).await?;
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}

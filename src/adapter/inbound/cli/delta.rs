//! Handlers for the signed Delta Exchange order calls.

use tracing::info;

use crate::adapter::inbound::cli::command::{DeltaCommand, DeltaPlaceArgs};
use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::delta::{
    DeltaClient, DeltaCredentials, NewOrder, OrderType, API_KEY_ENV,
};
use crate::error::{ConfigError, ExchangeError, Result};
use crate::infrastructure::config::settings::Config;

pub async fn execute(config: &Config, command: DeltaCommand) -> Result<()> {
    let credentials = DeltaCredentials::from_env().ok_or(ExchangeError::MissingCredentials {
        venue: "delta",
        env: API_KEY_ENV,
    })?;
    let client = DeltaClient::new(&config.delta, Some(credentials));

    match command {
        DeltaCommand::Orders(args) => {
            let orders = client.open_orders(args.product_id, &args.state).await?;
            info!(count = orders.len(), product_id = args.product_id, "Orders fetched");
            output::note(&serde_json::to_string_pretty(&orders)?);
        }
        DeltaCommand::Place(args) => {
            let order = new_order(&args)?;
            let placed = client.place_order(&order).await?;
            info!(order_id = ?placed.id, "Order placed");
            output::note(&serde_json::to_string_pretty(&placed)?);
        }
    }
    Ok(())
}

fn new_order(args: &DeltaPlaceArgs) -> Result<NewOrder> {
    match (args.order_type, &args.limit_price) {
        (OrderType::LimitOrder, Some(price)) => Ok(NewOrder::limit(
            args.product_id,
            args.side,
            args.size,
            price.clone(),
        )),
        (OrderType::LimitOrder, None) => Err(ConfigError::MissingField {
            field: "--limit-price",
        }
        .into()),
        (OrderType::MarketOrder, _) => Ok(NewOrder {
            order_type: OrderType::MarketOrder,
            size: args.size,
            side: args.side,
            limit_price: None,
            product_id: args.product_id,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::delta::Side;
    use crate::error::Error;

    fn place_args(order_type: OrderType, limit_price: Option<&str>) -> DeltaPlaceArgs {
        DeltaPlaceArgs {
            product_id: 27,
            side: Side::Sell,
            size: 3,
            limit_price: limit_price.map(str::to_string),
            order_type,
        }
    }

    #[test]
    fn limit_order_carries_price() {
        let order = new_order(&place_args(OrderType::LimitOrder, Some("59000"))).unwrap();
        assert_eq!(order.limit_price.as_deref(), Some("59000"));
        assert_eq!(order.side, Side::Sell);
        assert_eq!(order.size, 3);
    }

    #[test]
    fn limit_order_requires_price() {
        let result = new_order(&place_args(OrderType::LimitOrder, None));
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField {
                field: "--limit-price"
            }))
        ));
    }

    #[test]
    fn market_order_drops_price() {
        let order = new_order(&place_args(OrderType::MarketOrder, Some("1"))).unwrap();
        assert_eq!(order.order_type, OrderType::MarketOrder);
        assert!(order.limit_price.is_none());
    }
}

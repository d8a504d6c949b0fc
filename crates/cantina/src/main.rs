//! # Cantina demo
//!
//! Starts the full system, optionally seeds a menu, takes one order through its lifecycle and
//! prints the payloads the web layer would send.
//!
//! ```bash
//! RUST_LOG=debug CANTINA_DEMO_SEED=true cargo run --bin cantina
//! ```

use cantina::api::{CantinaApi, ErrorBody, OrderForm};
use cantina::config::CantinaConfig;
use cantina::lifecycle::CantinaSystem;
use cantina_actor::tracing::setup_tracing;
use serde::Serialize;
use tracing::{info, Instrument};

fn show<T: Serialize>(label: &str, payload: &T) {
    match serde_json::to_string(payload) {
        Ok(json) => info!("{label}: {json}"),
        Err(e) => info!("{label}: <unserializable: {e}>"),
    }
}

async fn seed(api: &CantinaApi) -> Result<(), ErrorBody> {
    let created = api
        .create_menu(
            "Cardápio da Semana",
            &["Feijoada;18.50".into(), "Strogonoff;21,00".into()],
            &["Arroz;4.00".into(), "Farofa;3.50".into()],
        )
        .await?;
    show("menu.create", &created);

    let activated = api.activate_menu(&created.menu_id.0.to_string()).await?;
    show("menu.activate", &activated);
    show("menu.active", &api.active_menu().await?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = CantinaConfig::load()?;
    info!(?config, "Starting cantina");

    let system = CantinaSystem::new(&config);
    let api = system.api();

    if config.demo_seed {
        seed(&api).instrument(tracing::info_span!("seed")).await?;
    }

    let span = tracing::info_span!("order_flow");
    async {
        let placed = api
            .submit_order(OrderForm {
                customer_name: "Ana".into(),
                phone: "11 99999-0000".into(),
                address: "Rua das Flores, 12".into(),
                dish: "Feijoada".into(),
                side: "Arroz".into(),
                quantity: "2".into(),
                payment_method: "pix".into(),
                ..OrderForm::default()
            })
            .await;

        match placed {
            Ok(placed) => {
                show("order.submit", &placed);
                let id = placed.order_id.0.to_string();
                show("order.setStatus", &api.set_status(&id, "Em Preparo").await?);
                show("order.advance", &api.advance_order(&id).await?);
                show("order.get", &api.get_order(&id).await?);
            }
            Err(rejected) => show("order.submit", &rejected),
        }

        show("order.countToday", &api.count_today().await?);
        show("menu.listAll", &api.list_menus().await?);
        Ok::<_, ErrorBody>(())
    }
    .instrument(span)
    .await?;

    drop(api);
    system.shutdown().await?;
    Ok(())
}

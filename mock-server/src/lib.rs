//! In-memory stand-in for the ENSEK energy/fuel order API.
//!
//! Serves the same routes under `/ENSEK` with seeded fuel stock and two
//! pre-existing orders, so client test suites can run without the live
//! service. State lives behind one `RwLock` per server instance.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{FromRequestParts, Path, State},
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, warn};
use uuid::Uuid;

pub const VALID_USERNAME: &str = "test";
pub const VALID_PASSWORD: &str = "testing";

/// Seeded order that tests fetch and update.
pub const KNOWN_ORDER_ID: Uuid = Uuid::from_u128(0x31fc32da_bccb_44ab_9352_4f43fc44ed4b);
/// Seeded order that tests delete.
pub const DELETABLE_ORDER_ID: Uuid = Uuid::from_u128(0x2cdd6f69_95df_437e_b4d3_e772472db8de);

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Energy {
    pub energy_id: u32,
    pub price_per_unit: f64,
    pub quantity_of_units: u64,
    pub unit_type: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    pub id: Uuid,
    pub fuel: String,
    pub quantity: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub message: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct UpdateOrder {
    pub quantity: u64,
    pub energy_id: u32,
}

/// Fuel stock keyed by fuel name, plus orders in creation order.
#[derive(Clone, Debug)]
pub struct Inventory {
    pub energy: BTreeMap<String, Energy>,
    pub orders: Vec<Order>,
}

impl Inventory {
    pub fn seeded() -> Self {
        let energy = [
            ("gas", 1, 0.34, 3000, "m³"),
            ("nuclear", 2, 0.56, 0, "MW"),
            ("electric", 3, 0.47, 4322, "kWh"),
            ("oil", 4, 0.5, 20, "Litres"),
        ]
        .into_iter()
        .map(|(name, energy_id, price_per_unit, quantity_of_units, unit_type)| {
            (
                name.to_string(),
                Energy {
                    energy_id,
                    price_per_unit,
                    quantity_of_units,
                    unit_type: unit_type.to_string(),
                },
            )
        })
        .collect();

        let orders = vec![
            Order {
                id: KNOWN_ORDER_ID,
                fuel: "electric".to_string(),
                quantity: 23,
            },
            Order {
                id: DELETABLE_ORDER_ID,
                fuel: "gas".to_string(),
                quantity: 10,
            },
        ];

        Self { energy, orders }
    }

    fn fuel_name(&self, energy_id: u32) -> Option<&str> {
        self.energy
            .iter()
            .find(|(_, energy)| energy.energy_id == energy_id)
            .map(|(name, _)| name.as_str())
    }
}

pub type Db = Arc<RwLock<Inventory>>;

#[derive(Clone)]
pub struct AppState {
    token: Arc<str>,
    db: Db,
}

type Rejection = (StatusCode, Json<Message>);

fn reject(status: StatusCode, message: impl Into<String>) -> Rejection {
    (
        status,
        Json(Message {
            message: message.into(),
        }),
    )
}

/// Router whose privileged routes accept `Authorization: Bearer <token>`.
pub fn app(token: &str) -> Router {
    let state = AppState {
        token: Arc::from(token),
        db: Arc::new(RwLock::new(Inventory::seeded())),
    };
    Router::new()
        .route("/ENSEK/login", post(login))
        .route("/ENSEK/reset", post(reset))
        .route("/ENSEK/energy", get(list_energy))
        .route("/ENSEK/orders", get(list_orders))
        .route(
            "/ENSEK/orders/{id}",
            get(get_order).put(update_order).delete(delete_order),
        )
        .route("/ENSEK/buy/{energy_id}/{quantity}", put(buy))
        .with_state(state)
}

pub async fn run(listener: TcpListener, token: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app(token)).await
}

/// Admits only requests carrying `Authorization: Bearer <token>`.
///
/// Handlers list it before `Path` and `Json`, so a missing token is a 401
/// even when the id or body would also be rejected.
pub struct Authorized;

impl FromRequestParts<AppState> for Authorized {
    type Rejection = Rejection;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let expected = format!("Bearer {}", state.token);
        match parts.headers.get(AUTHORIZATION).and_then(|value| value.to_str().ok()) {
            Some(value) if value == expected => Ok(Authorized),
            _ => Err(reject(StatusCode::UNAUTHORIZED, "Unauthorized")),
        }
    }
}

async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, Rejection> {
    if input.username != VALID_USERNAME || input.password != VALID_PASSWORD {
        warn!(username = %input.username, "rejected login");
        return Err(reject(StatusCode::UNAUTHORIZED, "Unauthorized"));
    }
    Ok(Json(LoginResponse {
        access_token: state.token.to_string(),
        message: "Success".to_string(),
    }))
}

async fn reset(_: Authorized, State(state): State<AppState>) -> Result<Json<Message>, Rejection> {
    *state.db.write().await = Inventory::seeded();
    debug!("inventory reset to seed data");
    Ok(Json(Message {
        message: "Success".to_string(),
    }))
}

async fn list_energy(State(state): State<AppState>) -> Json<BTreeMap<String, Energy>> {
    Json(state.db.read().await.energy.clone())
}

async fn list_orders(State(state): State<AppState>) -> Json<Vec<Order>> {
    Json(state.db.read().await.orders.clone())
}

async fn get_order(
    _: Authorized,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Order>, Rejection> {
    let inventory = state.db.read().await;
    inventory
        .orders
        .iter()
        .find(|order| order.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| reject(StatusCode::NOT_FOUND, format!("Order {id} not found")))
}

async fn update_order(
    _: Authorized,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateOrder>,
) -> Result<Json<Order>, Rejection> {
    let mut inventory = state.db.write().await;
    let index = inventory
        .orders
        .iter()
        .position(|order| order.id == id)
        .ok_or_else(|| reject(StatusCode::NOT_FOUND, format!("Order {id} not found")))?;
    let fuel = inventory
        .fuel_name(input.energy_id)
        .map(str::to_string)
        .ok_or_else(|| reject(StatusCode::BAD_REQUEST, format!("No fuel with id {}", input.energy_id)))?;
    let order = &mut inventory.orders[index];
    order.fuel = fuel;
    order.quantity = input.quantity;
    Ok(Json(order.clone()))
}

async fn delete_order(
    _: Authorized,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Message>, Rejection> {
    let mut inventory = state.db.write().await;
    let before = inventory.orders.len();
    inventory.orders.retain(|order| order.id != id);
    if inventory.orders.len() == before {
        return Err(reject(StatusCode::NOT_FOUND, format!("Order {id} not found")));
    }
    Ok(Json(Message {
        message: format!("Order {id} deleted"),
    }))
}

async fn buy(
    State(state): State<AppState>,
    Path((energy_id, quantity)): Path<(u32, u64)>,
) -> Result<Json<Message>, Rejection> {
    if quantity == 0 {
        return Err(reject(StatusCode::BAD_REQUEST, "Quantity must be at least 1"));
    }
    let mut inventory = state.db.write().await;
    let (fuel, unit_type, cost, remaining) = {
        let (fuel, stock) = inventory
            .energy
            .iter_mut()
            .find(|(_, energy)| energy.energy_id == energy_id)
            .ok_or_else(|| reject(StatusCode::NOT_FOUND, format!("No fuel with id {energy_id}")))?;
        if quantity > stock.quantity_of_units {
            return Err(reject(
                StatusCode::BAD_REQUEST,
                format!(
                    "Not enough {fuel} in stock: requested {quantity}, {} remaining",
                    stock.quantity_of_units
                ),
            ));
        }
        stock.quantity_of_units -= quantity;
        (
            fuel.clone(),
            stock.unit_type.clone(),
            stock.price_per_unit * quantity as f64,
            stock.quantity_of_units,
        )
    };

    let id = Uuid::new_v4();
    inventory.orders.push(Order {
        id,
        fuel,
        quantity,
    });
    Ok(Json(Message {
        message: format!(
            "You have purchased {quantity} {unit_type} at a cost of {cost:.2} there are {remaining} units remaining. Your order id is {id}."
        ),
    }))
}

//! Energy listing.

mod common;

use common::Fixture;
use ensek_core::{endpoints, ApiError};

#[test]
fn get_energy_returns_ok_and_energy_list() -> Result<(), ApiError> {
    let api = Fixture::setup("get_energy_returns_ok_and_energy_list");

    let response = api.get(&endpoints::energy(), None)?;

    assert!(
        response.is_ok(),
        "API Request to get energy failed. {}",
        response.describe()
    );
    assert_eq!(response.status, 200, "Expected status OK, but got {}", response.status);
    api.print_response_body(&response);

    let body: serde_json::Value = response.json()?;
    let fuels = body.as_object().expect("energy listing is a JSON object");
    assert!(!fuels.is_empty());
    assert!(fuels.values().all(|fuel| fuel["energy_id"].is_u64()));
    Ok(())
}

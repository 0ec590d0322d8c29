//! Paths of the ENSEK API, relative to the service's base URL.

use std::fmt::Display;

pub const BASE_PATH: &str = "/ENSEK";

pub fn login() -> String {
    format!("{BASE_PATH}/login")
}

pub fn reset() -> String {
    format!("{BASE_PATH}/reset")
}

pub fn energy() -> String {
    format!("{BASE_PATH}/energy")
}

pub fn orders() -> String {
    format!("{BASE_PATH}/orders")
}

pub fn order(id: impl Display) -> String {
    format!("{BASE_PATH}/orders/{id}")
}

pub fn buy(energy_id: u32, quantity: u64) -> String {
    format!("{BASE_PATH}/buy/{energy_id}/{quantity}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn fixed_paths() {
        assert_eq!(login(), "/ENSEK/login");
        assert_eq!(reset(), "/ENSEK/reset");
        assert_eq!(energy(), "/ENSEK/energy");
        assert_eq!(orders(), "/ENSEK/orders");
    }

    #[test]
    fn order_path_formats_uuid() {
        assert_eq!(
            order(Uuid::nil()),
            "/ENSEK/orders/00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn buy_path() {
        assert_eq!(buy(1, 1_000_000), "/ENSEK/buy/1/1000000");
    }
}

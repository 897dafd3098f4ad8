//! # Receipt Sources
//!
//! Where the screen's user details come from.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ReceiptSource::load() ──► UserDetails ──► Receipt::new()               │
//! │                                                                         │
//! │  FixtureSource  - the built-in sample response (dev + tests)           │
//! │  JsonSource     - any API response body held in memory                 │
//! │  Fn() -> ...    - closures, for test fixtures                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only `data.userDetails` of the envelope is consumed. The response code and
//! message are logged and otherwise ignored. Every purchase line is checked
//! with [`validate_item`]; one bad line rejects the whole payload.

use tracing::{debug, warn};

use crate::error::{CoreError, CoreResult};
use crate::types::{ApiResponse, UserDetails};
use crate::validation::validate_item;

/// Sample user-details response, the same shape the API returns.
pub const FIXTURE_PAYLOAD: &str = r#"{
    "responseCode": 101,
    "message": "Success",
    "data": {
        "userDetails": {
            "userName": "Abc",
            "mobNumber": 6545854566,
            "emailid": "abc@gmail.com",
            "address": "Bangalore",
            "purchaseInfo": [{
                "productName": "Movers",
                "quantity": 3,
                "duration": 8.2,
                "perHrCost": 35,
                "productDiscount": 12
            }, {
                "productName": "Clamp",
                "quantity": 4,
                "duration": 10,
                "perHrCost": 35,
                "productDiscount": 12
            }]
        }
    }
}"#;

/// Anything that can produce the user details for a receipt.
pub trait ReceiptSource {
    fn load(&self) -> CoreResult<UserDetails>;
}

impl<F> ReceiptSource for F
where
    F: Fn() -> CoreResult<UserDetails>,
{
    fn load(&self) -> CoreResult<UserDetails> {
        self()
    }
}

/// Parses an API response body.
#[derive(Debug, Clone)]
pub struct JsonSource {
    body: String,
}

impl JsonSource {
    pub fn new(body: impl Into<String>) -> Self {
        JsonSource { body: body.into() }
    }
}

impl ReceiptSource for JsonSource {
    fn load(&self) -> CoreResult<UserDetails> {
        if self.body.trim().is_empty() {
            return Err(CoreError::SourceUnavailable("empty response body".to_string()));
        }

        let response: ApiResponse = serde_json::from_str(&self.body)?;
        debug!(
            code = response.response_code,
            message = %response.message,
            items = response.data.user_details.purchase_info.len(),
            "receipt response decoded"
        );

        let details = response.data.user_details;
        for (index, item) in details.purchase_info.iter().enumerate() {
            validate_item(item).map_err(|err| {
                warn!(index, product = %item.product_name, error = %err, "loaded item rejected");
                err
            })?;
        }
        Ok(details)
    }
}

/// The built-in sample response.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureSource;

impl ReceiptSource for FixtureSource {
    fn load(&self) -> CoreResult<UserDetails> {
        JsonSource::new(FIXTURE_PAYLOAD).load()
    }
}

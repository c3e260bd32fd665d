//! Domain layer for the debt lookup tool.
//!
//! Pure logic over records fetched by the `bitable` client: coercion of
//! raw records into display-ready debt rows, monthly and per-debtor
//! aggregation, Vietnamese phone number validation, the admin login
//! check, and VietQR payment info formatting. No I/O happens here.

mod aggregate;
mod auth;
mod normalize;
mod payment;
mod phone;
mod row;

pub use aggregate::{total_unpaid, totals_by_month, unpaid_by_debtor, DebtorTotal, MonthlyTotals};
pub use auth::AdminCredentials;
pub use normalize::{fields, normalize_record};
pub use payment::{qr_image_url, PaymentConfig, PaymentInfo};
pub use phone::{is_valid_phone, validate_phone, PhoneError};
pub use row::{DebtRow, DebtStatus};

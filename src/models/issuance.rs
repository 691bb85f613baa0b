//! Issuance (loan) model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Issuance record: one borrowed book copy in the hands of one reader.
/// Keyed by (reader, cipher), so a reader holds at most one open record per
/// book.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Issuance {
    pub reader_id: i32,
    pub book_cipher: i32,
    pub date_of_issue: DateTime<Utc>,
    pub signature: String,
    /// Set once the book comes back; NULL while the loan is open
    pub return_date: Option<DateTime<Utc>>,
}

impl Issuance {
    /// An issuance is overdue once its issue date lies strictly before the
    /// current date and no return has been recorded.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.return_date.is_none() && self.date_of_issue.date_naive() < now.date_naive()
    }
}

/// Create issuance request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateIssuance {
    pub reader_id: i32,
    pub book_cipher: i32,
    /// Issue timestamp; defaults to now when omitted
    pub date_of_issue: Option<DateTime<Utc>>,
    #[validate(length(min = 1, max = 50))]
    pub signature: String,
}

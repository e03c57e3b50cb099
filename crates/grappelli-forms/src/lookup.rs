//! Remote email-availability lookup
//!
//! The lookup is an external collaborator: a read-only query that returns
//! every account registered under an address. An empty collection means
//! the address is available. Its latency and failure modes are outside
//! this crate's control — a failed lookup is surfaced through the remote
//! rule's configured failure message, never retried and never swallowed.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One account returned by the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
	pub id: u64,
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub username: String,
	pub email: String,
}

/// Failure modes of the lookup collaborator.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
	#[error("lookup request failed: {0}")]
	Request(#[from] reqwest::Error),
	#[error("lookup returned status {0}")]
	Status(u16),
}

/// Read-only query interface for email availability.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailLookup: Send + Sync {
	/// Returns every account registered under `email`; an empty
	/// collection means the address is available.
	async fn find_by_email(&self, email: &str) -> Result<Vec<AccountRecord>, LookupError>;
}

/// HTTP-backed lookup querying `GET {base_url}/users?email=<address>`.
pub struct HttpEmailLookup {
	base_url: String,
	client: reqwest::Client,
}

impl HttpEmailLookup {
	/// Create a lookup against the given directory base URL
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_forms::HttpEmailLookup;
	///
	/// let lookup = HttpEmailLookup::new("https://jsonplaceholder.typicode.com");
	/// ```
	pub fn new(base_url: impl Into<String>) -> Self {
		Self {
			base_url: base_url.into(),
			client: reqwest::Client::new(),
		}
	}

	/// Create a lookup with a preconfigured HTTP client
	pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
		Self {
			base_url: base_url.into(),
			client,
		}
	}
}

#[async_trait]
impl EmailLookup for HttpEmailLookup {
	async fn find_by_email(&self, email: &str) -> Result<Vec<AccountRecord>, LookupError> {
		let url = format!("{}/users", self.base_url.trim_end_matches('/'));
		let response = self
			.client
			.get(&url)
			.query(&[("email", email)])
			.send()
			.await?;

		let status = response.status();
		if !status.is_success() {
			tracing::warn!(status = status.as_u16(), "email lookup returned an error status");
			return Err(LookupError::Status(status.as_u16()));
		}

		Ok(response.json().await?)
	}
}

/// In-memory lookup over a fixed set of taken addresses, for tests and
/// offline development.
///
/// # Examples
///
/// ```
/// use grappelli_forms::StaticEmailLookup;
///
/// let lookup = StaticEmailLookup::with_taken(["taken@example.com"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticEmailLookup {
	taken: Vec<AccountRecord>,
}

impl StaticEmailLookup {
	/// Create a lookup where every address is available
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a lookup where the given addresses are already registered
	pub fn with_taken<I, S>(emails: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let taken = emails
			.into_iter()
			.enumerate()
			.map(|(i, email)| AccountRecord {
				id: i as u64 + 1,
				name: String::new(),
				username: String::new(),
				email: email.into(),
			})
			.collect();
		Self { taken }
	}
}

#[async_trait]
impl EmailLookup for StaticEmailLookup {
	async fn find_by_email(&self, email: &str) -> Result<Vec<AccountRecord>, LookupError> {
		Ok(self
			.taken
			.iter()
			.filter(|account| account.email == email)
			.cloned()
			.collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn test_static_lookup_reports_taken_addresses() {
		let lookup = StaticEmailLookup::with_taken(["taken@example.com", "other@example.com"]);

		let matches = lookup.find_by_email("taken@example.com").await.unwrap();

		assert_eq!(matches.len(), 1);
		assert_eq!(matches[0].email, "taken@example.com");
	}

	#[tokio::test]
	async fn test_static_lookup_reports_available_addresses() {
		let lookup = StaticEmailLookup::with_taken(["taken@example.com"]);

		let matches = lookup.find_by_email("fresh@example.com").await.unwrap();

		assert!(matches.is_empty());
	}

	#[test]
	fn test_account_record_decodes_directory_payload() {
		// The directory returns more fields than we keep; unknown fields
		// are ignored and optional ones default.
		let payload = r#"[{"id": 7, "email": "user@example.com", "website": "example.com"}]"#;

		let accounts: Vec<AccountRecord> = serde_json::from_str(payload).unwrap();

		assert_eq!(accounts[0].id, 7);
		assert_eq!(accounts[0].email, "user@example.com");
		assert_eq!(accounts[0].name, "");
	}
}

//! ID type wrappers for type safety.

mod id_macro;
pub mod history_entry_id;
pub mod request_token;

pub use history_entry_id::HistoryEntryId;
pub use request_token::RequestToken;

pub mod aggregate;
pub mod engine;
pub mod feedback;
pub mod normalize;
pub mod sentiment;
pub mod store;

pub use crate::domain::model::{FeedbackForm, FeedbackRecord, SaleForm, SalesRecord, Sentiment};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;

pub mod contact;
pub mod search;
pub mod store;

use crate::prelude::AppError;
use contact::{Contact, ContactDraft, ContactId, IdSource};

pub mod category;
pub mod login;
pub mod user;
pub mod word;

pub use category::{Category, CategoryName};
pub use login::{adjusted_date, streak_signal, CompletedSession, LoginSummary};
pub use user::{Language, NewUser, UserProfile};
pub use word::WordEntry;

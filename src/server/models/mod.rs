pub mod drink;
pub mod session;
pub mod settings;
pub mod tipsy;
pub mod user;

pub use drink::{Drink, DrinkKind, NewDrink};
pub use session::{CreateSessionRequest, Session, UpdateSessionRequest};
pub use settings::{AppSettings, ContactInfo, TaxiInfo};
pub use tipsy::TipsyLevel;
pub use user::{CreateUser, User};

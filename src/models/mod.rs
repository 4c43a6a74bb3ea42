pub mod callback;
pub mod flags;
pub mod location;
pub mod order;
pub mod user;

pub use callback::OrderCallbackRequest;
pub use flags::{Communications, LegValidations, Validations};
pub use location::{DropLocationDetails, LocationDetails};
pub use order::{OrderDetails, OrderStatus};
pub use user::UserDetails;

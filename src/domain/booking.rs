mod capability;
mod customer;
mod registry;
mod reservation;

pub use self::capability::*;
pub use self::customer::*;
pub use self::registry::*;
pub use self::reservation::*;

mod clock;
mod notification;

pub use self::clock::*;
pub use self::notification::*;

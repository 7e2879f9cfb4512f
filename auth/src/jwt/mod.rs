pub mod claims;
pub mod codec;
pub mod errors;
pub mod settings;

pub use claims::Claims;
pub use codec::TokenCodec;
pub use errors::JwtError;
pub use settings::TokenSettings;

mod static_provider;
mod traits;

pub use static_provider::StaticProvider;
pub use traits::{ProviderError, PublicKeyProvider};

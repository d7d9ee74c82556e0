mod presenter_factory;
mod serializer_factory;

pub use presenter_factory::{PresenterFactory, PresenterType};
pub use serializer_factory::SerializerFactory;

mod toast_container;
mod toast_item;
mod toast_provider;

pub use toast_container::ToastContainer;
pub use toast_item::ToastItem;
pub use toast_provider::ToastProvider;

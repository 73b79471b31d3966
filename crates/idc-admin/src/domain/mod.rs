//! Domain models for the console.

mod app;
mod credentials;
mod server;
mod view;

pub use app::App;
pub use credentials::Credentials;
pub(crate) use server::null_as_default;
pub use server::{
    item_option, public_ip, IpSubnet, Package, PackageItem, Server, CATEGORY_OS, CATEGORY_RAM,
    CATEGORY_STORAGE, NETWORK_PUBLIC, NOT_AVAILABLE,
};
pub use view::{MenuItem, TableLayout, View};

mod filters;
mod icons;
mod spending_table;
mod toast;
mod upload;

pub use filters::FiltersPanel;
pub use spending_table::{DetailModal, SpendingTable};
pub use toast::ToastHost;
pub use upload::UploadPanel;

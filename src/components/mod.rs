pub mod donate_modal;
pub mod payment_tile;

pub use donate_modal::DonateModal;
pub use payment_tile::PaymentTile;

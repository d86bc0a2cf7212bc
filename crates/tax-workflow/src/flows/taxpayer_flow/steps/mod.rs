pub mod spouse_info_step;
pub mod taxpayer_info_step;

pub use spouse_info_step::SpouseInfoStep;
pub use taxpayer_info_step::TaxpayerInfoStep;

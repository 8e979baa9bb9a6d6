// Domain layer: form/request/response models and ports (page, prediction service, config).

pub mod model;
pub mod ports;

pub(crate) mod attr_value;
pub(crate) mod cdn_domain;
pub(crate) mod client_config;
pub(crate) mod domain_record;

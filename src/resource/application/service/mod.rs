pub(crate) mod domain_service;

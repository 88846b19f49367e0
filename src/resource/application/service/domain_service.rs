use crate::core::domain::{
    domain_api::DomainApi,
    error::{CdnError, CdnResult, ValidationError},
    model::{
        attr_value::{AttrValue, BoolValue, StringValue},
        domain_record::DomainRecord,
    },
    schema::{Schema, domain_schema},
    value_object::validate_config,
};

/// Drives the lifecycle of one acceleration domain.
///
/// Each operation takes the caller's record, talks to the API through
/// [`DomainApi`] and returns the record that should be stored as state.
pub struct DomainService<A: DomainApi> {
    api: A,
    schema: Schema,
}

impl<A: DomainApi> DomainService<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            schema: domain_schema(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Turns a declared configuration into a planned record.
    ///
    /// Left-out optional attributes get their schema default, or become
    /// pending when they have none. Computed attributes are pending on create
    /// and carried over from `prior` on update.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - An attribute breaks a format rule (comment length, header names, origin list)
    /// - There are more than 15 origin addresses
    /// - `domain` differs from the prior state (the domain has to be replaced)
    pub fn plan(
        &self,
        config: &DomainRecord,
        prior: Option<&DomainRecord>,
    ) -> CdnResult<DomainRecord> {
        if let Some(prior) = prior
            && prior.domain.is_known()
            && config.domain != prior.domain
        {
            return Err(ValidationError::ConstraintViolation(
                "domain cannot be changed in place, the resource must be replaced".to_string(),
            )
            .into());
        }

        let mut planned = config.clone();
        planned.comment = self.string_default("comment", planned.comment);
        planned.header_of_clientip =
            self.string_default("header_of_clientip", planned.header_of_clientip);
        planned.enabled = self.bool_default("enabled", planned.enabled);
        if let AttrValue::Known(origin) = &mut planned.origin_config
            && origin.default_origin_host_header.is_null()
        {
            origin.default_origin_host_header = AttrValue::Unknown;
        }

        match prior {
            Some(prior) => {
                planned.domain_id = prior.domain_id.clone();
                planned.cname = prior.cname.clone();
                planned.status = prior.status.clone();
                planned.contract_id = prior.contract_id.clone();
                planned.item_id = prior.item_id.clone();
                planned.cdn_service_status = prior.cdn_service_status.clone();
                planned.service_type = prior.service_type.clone();
            }
            None => {
                planned.domain_id = AttrValue::Unknown;
                planned.cname = AttrValue::Unknown;
                planned.status = AttrValue::Unknown;
                planned.contract_id = AttrValue::Unknown;
                planned.item_id = AttrValue::Unknown;
                planned.cdn_service_status = AttrValue::Unknown;
                planned.service_type = AttrValue::Unknown;
            }
        }

        planned.validate()?;
        planned.apply_defaults();
        validate_config(&planned)?;
        Ok(planned)
    }

    /// Creates the domain and returns its state as reported by the platform.
    ///
    /// # Errors
    ///
    /// Failures after the create call succeeded are wrapped in
    /// [`CdnError::PartiallyCreated`], which carries the new domain id.
    pub async fn create(&self, plan: &DomainRecord) -> CdnResult<DomainRecord> {
        plan.validate()?;
        let request = plan.build_add_request()?;
        let domain_id = self.api.add_domain(&request).await?;
        log::info!(
            "Created domain {} with id {}",
            request.domain_name,
            domain_id
        );

        match self.complete_create(plan, &domain_id).await {
            Ok(state) => Ok(state),
            Err(source) => {
                log::error!(
                    "Domain {} was created but could not be completed: {}",
                    domain_id,
                    source
                );
                let mut state = plan.clone();
                state.domain_id = AttrValue::Known(domain_id.clone());
                Err(CdnError::PartiallyCreated {
                    domain_id,
                    state: Box::new(state),
                    source: Box::new(source),
                })
            }
        }
    }

    async fn complete_create(
        &self,
        plan: &DomainRecord,
        domain_id: &str,
    ) -> CdnResult<DomainRecord> {
        if plan.enabled == AttrValue::Known(false) {
            self.api.disable_domain(domain_id).await?;
            log::info!("Disabled domain {}", domain_id);
        }

        let response = self.api.query_domain(domain_id).await?;
        let mut state = plan.clone();
        state.populate_from_response(&response);
        if !state.domain_id.is_known() {
            state.domain_id = AttrValue::known(domain_id);
        }
        Ok(state)
    }

    /// Refreshes a stored state. Returns `None` when the domain no longer
    /// exists remotely.
    pub async fn read(&self, state: &DomainRecord) -> CdnResult<Option<DomainRecord>> {
        let domain_id = require_domain_id(state)?;
        match self.api.query_domain(domain_id).await {
            Ok(response) => {
                let mut refreshed = state.clone();
                refreshed.populate_from_response(&response);
                if !refreshed.domain_id.is_known() {
                    refreshed.domain_id = state.domain_id.clone();
                }
                Ok(Some(refreshed))
            }
            Err(CdnError::NotFound(_)) => {
                log::warn!("Domain {} not found, removing it from state", domain_id);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Applies a planned change in place.
    ///
    /// The caller's values are kept as planned; only computed attributes are
    /// refreshed from the platform afterwards.
    pub async fn update(
        &self,
        plan: &DomainRecord,
        state: &DomainRecord,
    ) -> CdnResult<DomainRecord> {
        plan.validate()?;
        let domain_id = require_domain_id(state)?;
        if plan.domain.is_known() && plan.domain != state.domain {
            return Err(ValidationError::ConstraintViolation(
                "domain cannot be changed in place, the resource must be replaced".to_string(),
            )
            .into());
        }

        self.api
            .edit_domain(domain_id, &plan.build_edit_request())
            .await?;

        if let Some(&wanted) = plan.enabled.as_known()
            && state.enabled.as_known() != Some(&wanted)
        {
            if wanted {
                self.api.enable_domain(domain_id).await?;
                log::info!("Enabled domain {}", domain_id);
            } else {
                self.api.disable_domain(domain_id).await?;
                log::info!("Disabled domain {}", domain_id);
            }
        }

        let response = self.api.query_domain(domain_id).await?;
        let mut new_state = plan.clone();
        new_state.domain_id = state.domain_id.clone();
        new_state.copy_computed_fields(Some(&response));
        Ok(new_state)
    }

    /// Removes the domain. An enabled domain is disabled first; a domain that
    /// is already gone counts as deleted.
    pub async fn delete(&self, state: &DomainRecord) -> CdnResult<()> {
        let domain_id = require_domain_id(state)?;

        if state.enabled != AttrValue::Known(false) {
            match self.api.disable_domain(domain_id).await {
                Ok(()) => {}
                Err(CdnError::NotFound(_)) => return Ok(()),
                Err(e) => return Err(e),
            }
        }

        match self.api.delete_domain(domain_id).await {
            Ok(()) | Err(CdnError::NotFound(_)) => {
                log::info!("Deleted domain {}", domain_id);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn string_default(&self, name: &str, value: StringValue) -> StringValue {
        match (value, self.schema.string_default(name)) {
            (AttrValue::Null, Some(default)) => AttrValue::known(default),
            (AttrValue::Null, None) => AttrValue::Unknown,
            (value, _) => value,
        }
    }

    fn bool_default(&self, name: &str, value: BoolValue) -> BoolValue {
        match (value, self.schema.bool_default(name)) {
            (AttrValue::Null, Some(default)) => AttrValue::Known(default),
            (AttrValue::Null, None) => AttrValue::Unknown,
            (value, _) => value,
        }
    }
}

fn require_domain_id(state: &DomainRecord) -> Result<&str, ValidationError> {
    state
        .domain_id
        .as_str()
        .ok_or_else(|| ValidationError::field("domain_id", "Domain id is not known yet"))
}

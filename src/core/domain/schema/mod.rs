//! Resource schema descriptor for the acceleration domain.
//!
//! The descriptor is what a plugin framework needs to parse a caller's
//! configuration: attribute names, types, required/optional/computed flags,
//! static defaults and replace semantics.

use serde::Serialize;

/// Value type of an attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    String,
    Bool,
    List(Box<AttributeType>),
    Object,
}

/// Static default applied when an optional attribute is left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DefaultValue {
    String(&'static str),
    Bool(bool),
}

/// One attribute of the schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub attribute_type: AttributeType,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultValue>,
    /// Changing the value forces the resource to be recreated.
    pub requires_replace: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
}

impl Attribute {
    fn new(name: &'static str, attribute_type: AttributeType, description: &'static str) -> Self {
        Self {
            name,
            description,
            attribute_type,
            required: false,
            optional: false,
            computed: false,
            default: None,
            requires_replace: false,
            attributes: Vec::new(),
        }
    }

    fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    fn default_value(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    fn requires_replace(mut self) -> Self {
        self.requires_replace = true;
        self
    }

    fn nested_attributes(mut self, attributes: Vec<Attribute>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Looks up a nested attribute by name.
    pub fn nested(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }
}

/// The full resource schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schema {
    pub description: &'static str,
    pub attributes: Vec<Attribute>,
}

impl Schema {
    /// Looks up a top-level attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn string_default(&self, name: &str) -> Option<&'static str> {
        match self.attribute(name)?.default? {
            DefaultValue::String(value) => Some(value),
            DefaultValue::Bool(_) => None,
        }
    }

    pub fn bool_default(&self, name: &str) -> Option<bool> {
        match self.attribute(name)?.default? {
            DefaultValue::Bool(value) => Some(value),
            DefaultValue::String(_) => None,
        }
    }
}

/// Builds the schema of the acceleration domain resource.
pub fn domain_schema() -> Schema {
    Schema {
        description: "This resource provides the configuration of acceleration domain",
        attributes: vec![
            Attribute::new(
                "domain_id",
                AttributeType::String,
                "Id of acceleration domain, generated by cdnetworks.",
            )
            .computed(),
            Attribute::new("domain", AttributeType::String, "CDN accelerated domain name.")
                .required()
                .requires_replace(),
            Attribute::new("cname", AttributeType::String, "Cname").computed(),
            Attribute::new("comment", AttributeType::String, "Remarks, up to 1000 characters")
                .optional()
                .computed()
                .default_value(DefaultValue::String("")),
            Attribute::new(
                "status",
                AttributeType::String,
                "The deployment status of the accelerate domain name. Deployed indicates that \
                 the accelerated domain name configuration is complete. InProgress indicates \
                 that the deployment task of the accelerated domain name configuration is still \
                 in progress, and may be in queue, deployed, or failed.",
            )
            .computed(),
            Attribute::new("contract_id", AttributeType::String, "The id of contract").computed(),
            Attribute::new("item_id", AttributeType::String, "The id of item").computed(),
            Attribute::new(
                "enabled",
                AttributeType::Bool,
                "Speed up the activation of the domain name. This is false when the accelerated \
                 domain name service is disabled; true when the accelerated domain name service \
                 is enabled.",
            )
            .optional()
            .computed()
            .default_value(DefaultValue::Bool(true)),
            Attribute::new(
                "header_of_clientip",
                AttributeType::String,
                "Pass the response header of client IP. The optional values are Cdn-Src-Ip and \
                 X-Forwarded-For. The default value is Cdn-Src-Ip.",
            )
            .optional()
            .computed()
            .default_value(DefaultValue::String("Cdn-Src-Ip")),
            Attribute::new(
                "cdn_service_status",
                AttributeType::String,
                "Accelerate the CDN service status of the domain name, true means to enable the \
                 CDN acceleration service; false means to cancel the CDN acceleration service.",
            )
            .computed(),
            Attribute::new(
                "service_type",
                AttributeType::String,
                "Accelerated domain name service types, including the following: 1028 : Content \
                 Acceleration; 1115 : Dynamic Web Acceleration; 1369 : Media Acceleration - RTMP \
                 1391 : Download Acceleration 1348 : Media Acceleration Live Broadcast 1551 : \
                 Flood Shield",
            )
            .computed(),
            Attribute::new(
                "origin_config",
                AttributeType::Object,
                "Back-to-origin policy setting, which is used to set the origin site information \
                 and the back-to-origin policy of the accelerated domain name",
            )
            .required()
            .nested_attributes(vec![
                Attribute::new(
                    "origin_ips",
                    AttributeType::List(Box::new(AttributeType::String)),
                    "Origin site address, which can be an IP or a domain name. 1. Only one domain \
                     name can be entered. IP and domain names cannot be entered at the same time. \
                     2. Maximum character limit is 500.",
                )
                .required(),
                Attribute::new(
                    "default_origin_host_header",
                    AttributeType::String,
                    "The Origin HOST for changing the HOST field in the return source HTTP \
                     request header. Note: It should be domain or IP format. For domain name \
                     format, each segement separated by a dot, does not exceed 62 characters, \
                     the total length should not exceed 128 characters.",
                )
                .optional()
                .computed(),
            ]),
        ],
    }
}
